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

//! Session structure definition.
//!
//! The Session object wraps an [osauth](https://crates.io/crates/osauth)
//! session, handling authentication and discovery of the service endpoint.

use std::sync::Arc;

use async_trait::async_trait;
use osauth::{AuthType, InterfaceType};
use reqwest::{Client, Url};
use serde_json::Value;
use static_assertions::assert_impl_all;
use tokio::sync::OnceCell;

use super::config::{ClientConfig, IDENTITY_SERVICE_TYPE};
use super::http::{Request, RestClient};
use super::utils;
use super::{Error, Result};

/// An authenticated session bound to one service.
///
/// The service endpoint is taken from the endpoint overrides or looked up in
/// the catalog on first use, then cached for the lifetime of the session and
/// its clones.
#[derive(Debug, Clone)]
pub struct Session {
    inner: osauth::Session,
    service_type: String,
    endpoint: Arc<OnceCell<Url>>,
}

assert_impl_all!(Session: Send, Sync);

impl From<osauth::Session> for Session {
    fn from(value: osauth::Session) -> Session {
        Session {
            inner: value,
            service_type: String::from(IDENTITY_SERVICE_TYPE),
            endpoint: Arc::new(OnceCell::new()),
        }
    }
}

impl From<Session> for osauth::Session {
    fn from(value: Session) -> osauth::Session {
        value.inner
    }
}

impl Session {
    /// Create a new session with a given authentication plugin.
    ///
    /// The plugin is authenticated before the session is returned.
    pub async fn new<A: AuthType + 'static>(auth_type: A) -> Result<Session> {
        Ok(osauth::Session::new(auth_type).await?.into())
    }

    /// Create a new session with a given authentication plugin and HTTP client.
    pub async fn new_with_client<A: AuthType + 'static>(
        client: Client,
        auth_type: A,
    ) -> Result<Session> {
        Ok(osauth::Session::new_with_client(client, auth_type)
            .await?
            .into())
    }

    /// Create a session from a configuration.
    pub async fn from_config(config: &ClientConfig) -> Result<Session> {
        let inner = config.load_cloud_config()?.create_session().await?;
        Ok(Session::from(inner).with_service_type(config.service_type.clone()))
    }

    /// Create a session from `OS_*` environment variables.
    ///
    /// See [osauth::Session::from_env](https://docs.rs/osauth/*/osauth/struct.Session.html#method.from_env)
    /// for the supported variables.
    pub async fn from_env() -> Result<Session> {
        Ok(osauth::Session::from_env().await?.into())
    }

    /// Look up endpoints in the given region.
    pub fn with_region<S: Into<String>>(mut self, region: S) -> Session {
        self.inner.set_region(region);
        self.reset_endpoint();
        self
    }

    /// Look up endpoints with the given interface.
    pub fn with_endpoint_interface(mut self, endpoint_interface: InterfaceType) -> Session {
        self.inner.set_endpoint_interface(endpoint_interface);
        self.reset_endpoint();
        self
    }

    /// Use a fixed endpoint for the current service type instead of the catalog.
    pub fn with_endpoint_override(mut self, endpoint: Url) -> Session {
        let _ = self
            .inner
            .endpoint_overrides_mut()
            .insert(self.service_type.clone(), endpoint);
        self.reset_endpoint();
        self
    }

    /// Look up endpoints of another service type.
    pub fn with_service_type<S: Into<String>>(mut self, service_type: S) -> Session {
        self.service_type = service_type.into();
        self.reset_endpoint();
        self
    }

    /// Authentication plugin in use.
    #[inline]
    pub fn auth_type(&self) -> &dyn AuthType {
        self.inner.auth_type()
    }

    /// Reference to the underlying osauth session.
    #[inline]
    pub fn session(&self) -> &osauth::Session {
        &self.inner
    }

    /// Refresh the authentication (renew the token, refetch the catalog).
    ///
    /// The cached endpoint is dropped and looked up again on the next call.
    pub async fn refresh(&mut self) -> Result<()> {
        debug!("Refreshing authentication for service {}", self.service_type);
        self.inner.refresh().await?;
        self.reset_endpoint();
        Ok(())
    }

    #[inline]
    fn reset_endpoint(&mut self) {
        self.endpoint = Arc::new(OnceCell::new());
    }

    async fn discover_endpoint(&self) -> Result<Url> {
        let url = match self.inner.endpoint_overrides().get(&self.service_type) {
            Some(url) => {
                debug!("Using endpoint override {} for {}", url, self.service_type);
                url.clone()
            }
            None => {
                let filters = self.inner.endpoint_filters();
                debug!(
                    "Looking up endpoint for service {} with filters {:?}",
                    self.service_type, filters
                );
                self.inner
                    .client()
                    .get_endpoint(&self.service_type, filters)
                    .await?
            }
        };
        let url = utils::url::with_trailing_slash(utils::url::strip_version(url));
        debug!("Using endpoint {} for service {}", url, self.service_type);
        Ok(url)
    }
}

#[async_trait]
impl RestClient for Session {
    fn service_type(&self) -> &str {
        &self.service_type
    }

    async fn base_url(&self) -> Result<Url> {
        let url = self
            .endpoint
            .get_or_try_init(|| self.discover_endpoint())
            .await?;
        Ok(url.clone())
    }

    async fn request(&self, request: Request) -> Result<Value> {
        let url = request.url(&self.base_url().await?);
        trace!("Sending HTTP {} {}", request.method(), url);
        let client = self.inner.client().inner();
        let mut builder = client.request(request.method().clone(), url);
        if let Some(body) = request.body() {
            builder = builder.json(body);
        }
        let builder = self.inner.auth_type().authenticate(client, builder).await?;

        let resp = builder.send().await?;
        let status = resp.status();
        let body = resp.bytes().await?;
        if !status.is_success() {
            let message = error_message(&body);
            debug!(
                "HTTP {} {} failed with {}: {:?}",
                request.method(),
                request.path(),
                status,
                message
            );
            return Err(Error::from_status(status, message));
        }

        trace!("HTTP {} {} returned {}", request.method(), request.path(), status);
        if body.iter().all(u8::is_ascii_whitespace) {
            Ok(Value::Null)
        } else {
            Ok(serde_json::from_slice(&body)?)
        }
    }
}

/// Extract a human-readable message from an error response.
///
/// Understands the Identity format `{"error": {"message": "..."}}` and falls
/// back to the raw body.
fn error_message(body: &[u8]) -> Option<String> {
    if let Ok(value) = serde_json::from_slice::<Value>(body) {
        let message = value
            .pointer("/error/message")
            .or_else(|| value.get("message"))
            .and_then(Value::as_str);
        if let Some(message) = message {
            return Some(String::from(message));
        }
    }

    let text = String::from_utf8_lossy(body);
    let text = text.trim();
    if text.is_empty() {
        None
    } else {
        Some(String::from(text))
    }
}


#[cfg(test)]
mod test {
    use osauth::{InterfaceType, NoAuth};
    use reqwest::{Client, Url};

    use super::{error_message, Session};
    use crate::config::ClientConfig;
    use crate::http::RestClient;
    use crate::ErrorKind;

    async fn noauth(endpoint: &str) -> Session {
        Session::new(NoAuth::new(endpoint).unwrap()).await.unwrap()
    }

    #[test]
    fn test_error_message() {
        assert_eq!(
            error_message(br#"{"error": {"message": "Could not find token", "code": 404}}"#),
            Some("Could not find token".to_string())
        );
        assert_eq!(
            error_message(br#"{"message": "Bad"}"#),
            Some("Bad".to_string())
        );
        assert_eq!(
            error_message(b"Service Unavailable\n"),
            Some("Service Unavailable".to_string())
        );
        assert_eq!(error_message(b""), None);
    }

    #[tokio::test]
    async fn test_base_url_from_noauth() {
        let session = noauth("http://127.0.0.1:5000/v3").await;
        assert_eq!(session.service_type(), "identity");
        assert_eq!(
            session.base_url().await.unwrap(),
            Url::parse("http://127.0.0.1:5000/").unwrap()
        );
    }

    #[tokio::test]
    async fn test_base_url_override() {
        let session = noauth("http://127.0.0.1:5000/")
            .await
            .with_endpoint_override(Url::parse("http://127.0.0.1:35357/identity").unwrap());
        assert_eq!(
            session.base_url().await.unwrap(),
            Url::parse("http://127.0.0.1:35357/identity/").unwrap()
        );
    }

    #[tokio::test]
    async fn test_override_follows_service_type() {
        let session = noauth("http://127.0.0.1:5000/")
            .await
            .with_service_type("identity-admin")
            .with_endpoint_override(Url::parse("http://127.0.0.1:35357/").unwrap());
        assert_eq!(session.service_type(), "identity-admin");
        assert_eq!(
            session.base_url().await.unwrap(),
            Url::parse("http://127.0.0.1:35357/").unwrap()
        );
        let session = session.with_service_type("identity");
        assert_eq!(
            session.base_url().await.unwrap(),
            Url::parse("http://127.0.0.1:5000/").unwrap()
        );
    }

    #[tokio::test]
    async fn test_filters() {
        let session = noauth("http://127.0.0.1:5000/")
            .await
            .with_region("RegionOne")
            .with_endpoint_interface(InterfaceType::Internal);
        let filters = session.session().endpoint_filters();
        assert_eq!(filters.region.as_deref(), Some("RegionOne"));
        assert!(filters.interfaces.contains(&InterfaceType::Internal));
    }

    #[tokio::test]
    async fn test_refresh_drops_cached_endpoint() {
        let mut session = noauth("http://127.0.0.1:5000/").await;
        let cached = session.base_url().await.unwrap();
        session.refresh().await.unwrap();
        assert!(session.endpoint.get().is_none());
        assert_eq!(session.base_url().await.unwrap(), cached);
    }

    #[tokio::test]
    async fn test_new_with_client() {
        let session = Session::new_with_client(
            Client::new(),
            NoAuth::new("http://127.0.0.1:5000/identity").unwrap(),
        )
        .await
        .unwrap();
        assert_eq!(
            session.base_url().await.unwrap(),
            Url::parse("http://127.0.0.1:5000/identity/").unwrap()
        );
    }

    #[tokio::test]
    async fn test_from_config() {
        let config = ClientConfig::from_yaml(
            "cloud_config:
  auth_type: none
  region_name: RegionOne
  identity_admin_endpoint_override: http://127.0.0.1:35357/v2.0
service_type: identity-admin
",
        )
        .unwrap();
        let session = Session::from_config(&config).await.unwrap();
        assert_eq!(session.service_type(), "identity-admin");
        assert_eq!(
            session.session().endpoint_filters().region.as_deref(),
            Some("RegionOne")
        );
        assert_eq!(
            session.base_url().await.unwrap(),
            Url::parse("http://127.0.0.1:35357/").unwrap()
        );
    }

    #[tokio::test]
    async fn test_from_config_without_endpoint() {
        let config = ClientConfig::from_yaml("cloud_config:\n  auth_type: none\n").unwrap();
        let session = Session::from_config(&config).await.unwrap();
        let err = session.base_url().await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::EndpointNotFound);
    }

    #[tokio::test]
    async fn test_from_config_invalid_override() {
        let config = ClientConfig::from_yaml(
            "cloud_config:\n  auth_type: none\n  identity_endpoint_override: not a url\n",
        )
        .unwrap();
        let err = Session::from_config(&config).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidConfig);
    }
}
