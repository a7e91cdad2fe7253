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

//! Client configuration.
//!
//! Credentials, regions, interfaces and endpoint overrides are understood by
//! [osauth](https://crates.io/crates/osauth) and come either from a
//! `clouds.yaml` entry, from an inline entry in the same format or from the
//! `OS_*` environment variables. A [ClientConfig](struct.ClientConfig.html)
//! only picks the source and adds the service type on top.

use std::fs;
use std::path::Path;

use osauth::CloudConfig;

use super::{Error, ErrorKind, Result};

/// Default catalog type of the Identity service.
pub const IDENTITY_SERVICE_TYPE: &str = "identity";

fn default_service_type() -> String {
    String::from(IDENTITY_SERVICE_TYPE)
}

/// Configuration of an Identity client.
///
/// With neither `cloud` nor `cloud_config` set, the `OS_*` environment
/// variables are used.
///
/// ```rust
/// let config = openstack_identity::ClientConfig::from_yaml(
///     "cloud_config:\n\
///      \x20 auth_type: none\n\
///      \x20 auth:\n\
///      \x20   endpoint: http://127.0.0.1:5000/identity\n",
/// )
/// .expect("Invalid configuration");
/// assert!(config.cloud.is_none());
/// assert_eq!(config.service_type, "identity");
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct ClientConfig {
    /// Name of an entry in `clouds.yaml`.
    #[serde(default)]
    pub cloud: Option<String>,
    /// Cloud entry written inline, in the `clouds.yaml` format.
    #[serde(default)]
    pub cloud_config: Option<CloudConfig>,
    /// Service type to look up in the catalog.
    #[serde(default = "default_service_type")]
    pub service_type: String,
}

impl Default for ClientConfig {
    fn default() -> ClientConfig {
        ClientConfig {
            cloud: None,
            cloud_config: None,
            service_type: default_service_type(),
        }
    }
}

impl ClientConfig {
    /// Configuration using the named `clouds.yaml` entry.
    pub fn from_cloud<S: Into<String>>(cloud_name: S) -> ClientConfig {
        ClientConfig {
            cloud: Some(cloud_name.into()),
            ..ClientConfig::default()
        }
    }

    /// Parse a configuration from a YAML document.
    pub fn from_yaml<S: AsRef<str>>(source: S) -> Result<ClientConfig> {
        Ok(serde_yaml::from_str(source.as_ref())?)
    }

    /// Read a configuration from a YAML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<ClientConfig> {
        let path = path.as_ref();
        debug!("Reading identity client configuration from {}", path.display());
        let source = fs::read_to_string(path)?;
        ClientConfig::from_yaml(source)
    }

    /// Use another service type for the catalog lookup.
    pub fn with_service_type<S: Into<String>>(mut self, service_type: S) -> ClientConfig {
        self.service_type = service_type.into();
        self
    }

    /// Load the cloud configuration this configuration refers to.
    pub fn load_cloud_config(&self) -> Result<CloudConfig> {
        match (&self.cloud, &self.cloud_config) {
            (Some(_), Some(_)) => Err(Error::new(
                ErrorKind::InvalidConfig,
                "cloud and cloud_config cannot be used together",
            )),
            (Some(name), None) => {
                debug!("Loading cloud {} from clouds.yaml", name);
                Ok(CloudConfig::from_config(name)?)
            }
            (None, Some(inline)) => Ok(inline.clone()),
            (None, None) => {
                debug!("Loading cloud configuration from the environment");
                Ok(CloudConfig::from_env()?)
            }
        }
    }
}

#[cfg(test)]
mod test {
    use std::io::Write;

    use super::ClientConfig;
    use crate::ErrorKind;

    const NOAUTH: &str = "cloud_config:
  auth_type: none
  region_name: RegionOne
  identity_endpoint_override: http://127.0.0.1:5000/identity
";

    #[test]
    fn test_from_yaml_defaults() {
        let config = ClientConfig::from_yaml(NOAUTH).unwrap();
        assert!(config.cloud.is_none());
        assert!(config.cloud_config.is_some());
        assert_eq!(config.service_type, "identity");
        assert!(config.load_cloud_config().is_ok());
    }

    #[test]
    fn test_from_yaml_cloud_name() {
        let config = ClientConfig::from_yaml("cloud: devstack-admin\nservice_type: identity-admin\n")
            .unwrap();
        assert_eq!(config.cloud.as_deref(), Some("devstack-admin"));
        assert!(config.cloud_config.is_none());
        assert_eq!(config.service_type, "identity-admin");
    }

    #[test]
    fn test_from_yaml_invalid() {
        let err = ClientConfig::from_yaml("cloud: [1, 2").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidConfig);
    }

    #[test]
    fn test_cloud_and_inline_conflict() {
        let mut config = ClientConfig::from_yaml(NOAUTH).unwrap();
        config.cloud = Some("devstack".into());
        let err = config.load_cloud_config().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidConfig);
    }

    #[test]
    fn test_from_cloud() {
        let config = ClientConfig::from_cloud("devstack").with_service_type("identity-admin");
        assert_eq!(config.cloud.as_deref(), Some("devstack"));
        assert_eq!(config.service_type, "identity-admin");
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{}", NOAUTH).unwrap();
        file.flush().unwrap();
        let config = ClientConfig::from_file(file.path()).unwrap();
        assert!(config.cloud_config.is_some());
        assert_eq!(config.service_type, "identity");
    }

    #[test]
    fn test_from_file_missing() {
        let err = ClientConfig::from_file("/nonexistent/identity.yaml").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidConfig);
    }
}
