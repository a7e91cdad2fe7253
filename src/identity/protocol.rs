// Copyright 2017 Dmitry Tantsur <divius.inside@gmail.com>
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! JSON structures and protocol bits for the Identity API.

#![allow(missing_docs)]

use super::super::types::Properties;

pub const TOKENS: &str = "/v2.0/tokens";
pub const TENANTS: &str = "/v2.0/tenants";
pub const PROJECTS: &str = "/v3/projects";
pub const USERS: &str = "/v2.0/users";

pub const BELONGS_TO: &str = "belongsTo";

pub const PROJECT_KEY: &str = "project";
pub const USER_KEY: &str = "user";

#[derive(Clone, Debug, Serialize)]
pub struct ProjectRoot<'a> {
    pub project: &'a Properties,
}

#[derive(Clone, Debug, Serialize)]
pub struct UserRoot<'a> {
    pub user: &'a Properties,
}

/// Path of an individual resource in a collection.
pub fn item_path(collection: &str, id: &str) -> String {
    format!("{}/{}", collection, id)
}

#[cfg(test)]
mod test {
    use serde_json::json;

    use super::{item_path, ProjectRoot, UserRoot, PROJECTS};

    #[test]
    fn test_roots() {
        let props = json!({"name": "demo"}).as_object().unwrap().clone();
        assert_eq!(
            serde_json::to_value(ProjectRoot { project: &props }).unwrap(),
            json!({"project": {"name": "demo"}})
        );
        assert_eq!(
            serde_json::to_string(&UserRoot { user: &props }).unwrap(),
            r#"{"user":{"name":"demo"}}"#
        );
    }

    #[test]
    fn test_item_path() {
        assert_eq!(item_path(PROJECTS, "p1"), "/v3/projects/p1");
    }
}
