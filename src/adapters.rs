// Copyright 2018 Dmitry Tantsur <divius.inside@gmail.com>
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

//! Adapters between entity types.
//!
//! Operations accept either a bare ID or a full resource object the ID can be
//! taken from. Both shapes go through these traits.

use super::types::{Properties, ProjectRef, UserRef};
use super::utils;
use super::{Error, Result};

/// Field holding the ID in a project object.
pub const PROJECT_ID_FIELD: &str = "project_id";

/// Field holding the ID of a resource as returned by the server.
pub const ID_FIELD: &str = "id";

/// Trait for something that can be used as a project ID.
pub trait ToProjectId {
    /// Get project ID as a string.
    ///
    /// Fails with `InvalidInput` if no usable ID is present.
    fn to_project_id(&self) -> Result<String>;
}

/// Trait for something that can be used as a user ID.
pub trait ToUserId {
    /// Get user ID as a string.
    ///
    /// Fails with `InvalidInput` if no usable ID is present.
    fn to_user_id(&self) -> Result<String>;
}

impl ToProjectId for str {
    fn to_project_id(&self) -> Result<String> {
        utils::path_id(self, PROJECT_ID_FIELD).map(String::from)
    }
}

impl ToProjectId for String {
    fn to_project_id(&self) -> Result<String> {
        self.as_str().to_project_id()
    }
}

impl ToProjectId for ProjectRef {
    fn to_project_id(&self) -> Result<String> {
        self.as_ref().to_project_id()
    }
}

/// Projects built by callers carry `project_id`, projects returned by the
/// server carry `id`.
impl ToProjectId for Properties {
    fn to_project_id(&self) -> Result<String> {
        utils::string_field(self, PROJECT_ID_FIELD)
            .or_else(|| utils::string_field(self, ID_FIELD))
            .ok_or_else(|| Error::missing_argument(PROJECT_ID_FIELD))?
            .to_project_id()
    }
}

impl ToUserId for str {
    fn to_user_id(&self) -> Result<String> {
        utils::path_id(self, "user_id").map(String::from)
    }
}

impl ToUserId for String {
    fn to_user_id(&self) -> Result<String> {
        self.as_str().to_user_id()
    }
}

impl ToUserId for UserRef {
    fn to_user_id(&self) -> Result<String> {
        self.as_ref().to_user_id()
    }
}

impl ToUserId for Properties {
    fn to_user_id(&self) -> Result<String> {
        utils::string_field(self, ID_FIELD)
            .ok_or_else(|| Error::missing_argument("user_id"))?
            .to_user_id()
    }
}
