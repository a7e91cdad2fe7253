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

//! Various utilities.

use serde_json::Value;

use super::types::Properties;
use super::{Error, ErrorKind, Result};

/// Extract a non-empty string field from a JSON object.
pub fn string_field<'a>(object: &'a Properties, name: &str) -> Option<&'a str> {
    object
        .get(name)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
}

/// Check that an identifier can be used as a single URL path segment.
///
/// Empty values are missing arguments. `.`, `..` and values with a slash
/// would address another resource after URL normalization.
pub fn path_id<'a>(value: &'a str, name: &str) -> Result<&'a str> {
    if value.is_empty() {
        Err(Error::missing_argument(name))
    } else if value == "." || value == ".." || value.contains('/') {
        Err(Error::new(
            ErrorKind::InvalidInput,
            format!("{} `{}` cannot be used in a URL path", name, value),
        ))
    } else {
        Ok(value)
    }
}

/// Remove the wrapping key from a response body.
///
/// The body must be a JSON object holding another object under `key`.
pub fn unwrap_root(body: Value, key: &str) -> Result<Properties> {
    match body {
        Value::Object(mut root) => match root.remove(key) {
            Some(Value::Object(inner)) => Ok(inner),
            _ => Err(Error::new(
                ErrorKind::InvalidResponse,
                format!("Response does not contain a '{}' object", key),
            )),
        },
        other => Err(Error::new(
            ErrorKind::InvalidResponse,
            format!("Expected a JSON object with '{}', got {}", key, other),
        )),
    }
}

pub mod url {
    //! Handy primitives for working with URLs.

    use reqwest::Url;

    /// Join a slash-separated path onto a base URL.
    ///
    /// Empty segments are dropped, so neither leading, trailing nor doubled
    /// slashes in `path` produce empty segments in the result.
    pub fn join(base: &Url, path: &str) -> Url {
        let mut url = base.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            let _ = segments
                .pop_if_empty()
                .extend(path.split('/').filter(|x| !x.is_empty()));
        }
        url
    }

    /// Whether the path segment looks like an API version (`v3`, `v2.0`).
    fn is_version(segment: &str) -> bool {
        match segment.strip_prefix('v') {
            Some(rest) => {
                !rest.is_empty()
                    && rest.split('.').all(|x| !x.is_empty() && x.chars().all(|c| c.is_ascii_digit()))
            }
            None => false,
        }
    }

    /// Drop a trailing API version segment from the URL.
    ///
    /// Catalogs often register the Identity endpoint with a version suffix,
    /// while request paths carry their own version.
    pub fn strip_version(mut url: Url) -> Url {
        let last = url
            .path_segments()
            .and_then(|mut segments| segments.rfind(|x| !x.is_empty()))
            .map(String::from);
        if let Some(last) = last {
            if is_version(&last) {
                if let Ok(mut segments) = url.path_segments_mut() {
                    let _ = segments.pop_if_empty().pop();
                }
            }
        }
        url
    }

    /// Make sure the URL ends with a slash.
    pub fn with_trailing_slash(mut url: Url) -> Url {
        if !url.path().ends_with('/') {
            if let Ok(mut segments) = url.path_segments_mut() {
                let _ = segments.push("");
            }
        }
        url
    }
}
