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

//! Identity API client.

use reqwest::Url;
use serde_json::Value;
use static_assertions::assert_impl_all;

use super::super::adapters::{ToProjectId, ToUserId};
use super::super::config::ClientConfig;
use super::super::http::RestClient;
use super::super::session::Session;
use super::super::types::Properties;
use super::super::utils;
use super::super::Result;
use super::api;

/// Client for the Identity API.
///
/// Wraps any [RestClient](../http/trait.RestClient.html), by default an
/// authenticated [Session](../struct.Session.html).
///
/// Tenants and projects are the same thing under their Identity v2.0 and v3
/// names; every project call has a tenant alias.
///
/// # Example
///
/// ```rust,no_run
/// # async fn example() -> openstack_identity::Result<()> {
/// let identity = openstack_identity::IdentityClient::from_env().await?;
/// let info = identity.validate_token("<a token>", None).await?;
/// println!("{}", info);
/// # Ok(()) }
/// ```
#[derive(Debug, Clone)]
pub struct IdentityClient<C = Session> {
    client: C,
}

assert_impl_all!(IdentityClient: Send, Sync);

impl IdentityClient<Session> {
    /// Create a client from a configuration.
    pub async fn from_config(config: &ClientConfig) -> Result<IdentityClient> {
        Ok(IdentityClient::new(Session::from_config(config).await?))
    }

    /// Create a client from the named entry in `clouds.yaml`.
    ///
    /// ```rust,no_run
    /// # async fn example() -> openstack_identity::Result<()> {
    /// let identity = openstack_identity::IdentityClient::from_cloud("devstack-admin").await?;
    /// # Ok(()) }
    /// ```
    pub async fn from_cloud<S: Into<String>>(cloud_name: S) -> Result<IdentityClient> {
        IdentityClient::from_config(&ClientConfig::from_cloud(cloud_name)).await
    }

    /// Create a client from `OS_*` environment variables.
    pub async fn from_env() -> Result<IdentityClient> {
        Ok(IdentityClient::new(Session::from_env().await?))
    }

    /// Refresh the authentication of the underlying session.
    pub async fn refresh(&mut self) -> Result<()> {
        self.client.refresh().await
    }
}

impl<C: RestClient> IdentityClient<C> {
    /// Create a client on top of a REST client.
    pub fn new(client: C) -> IdentityClient<C> {
        IdentityClient { client }
    }

    /// The underlying REST client.
    #[inline]
    pub fn rest_client(&self) -> &C {
        &self.client
    }

    /// Service type used for endpoint lookup.
    #[inline]
    pub fn service_type(&self) -> &str {
        self.client.service_type()
    }

    /// Resolve a path (or the path of a request) against the service root.
    ///
    /// ```rust,no_run
    /// # async fn example() -> openstack_identity::Result<()> {
    /// use openstack_identity::{IdentityClient, Request};
    ///
    /// let identity = IdentityClient::from_env().await?;
    /// let tenants = identity.resolve_url("/v2.0/tenants").await?;
    /// let same = identity.resolve_url(&Request::get("/v2.0/tenants")).await?;
    /// assert_eq!(tenants, same);
    /// # Ok(()) }
    /// ```
    pub async fn resolve_url<P: AsRef<str> + ?Sized>(&self, path: &P) -> Result<Url> {
        let base = self.client.base_url().await?;
        Ok(utils::url::join(&base, path.as_ref()))
    }

    /// Validate a token.
    ///
    /// If `belongs_to` is provided, the token must also belong to this tenant.
    /// An empty token fails with `InvalidInput` without contacting the server.
    pub async fn validate_token(&self, token: &str, belongs_to: Option<&str>) -> Result<Value> {
        api::validate_token(&self.client, token, belongs_to).await
    }

    /// Get information about a tenant, or list all tenants if no ID is given.
    pub async fn get_tenant_info(&self, tenant_id: Option<&str>) -> Result<Value> {
        api::get_tenant_info(&self.client, tenant_id).await
    }

    /// Create a project.
    pub async fn create_project(&self, property: Properties) -> Result<Properties> {
        api::create_project(&self.client, property).await
    }

    /// Create a tenant (alias of [create_project](#method.create_project)).
    #[inline]
    pub async fn create_tenant(&self, property: Properties) -> Result<Properties> {
        self.create_project(property).await
    }

    /// Delete a project given its ID or an object with `project_id`.
    pub async fn delete_project<P: ToProjectId + ?Sized>(&self, project: &P) -> Result<()> {
        api::delete_project(&self.client, project).await
    }

    /// Delete a tenant (alias of [delete_project](#method.delete_project)).
    #[inline]
    pub async fn delete_tenant<P: ToProjectId + ?Sized>(&self, project: &P) -> Result<()> {
        self.delete_project(project).await
    }

    /// Update a project.
    pub async fn update_project<P: ToProjectId + ?Sized>(
        &self,
        project: &P,
        property: Properties,
    ) -> Result<Properties> {
        api::update_project(&self.client, project, property).await
    }

    /// Update a tenant (alias of [update_project](#method.update_project)).
    #[inline]
    pub async fn update_tenant<P: ToProjectId + ?Sized>(
        &self,
        project: &P,
        property: Properties,
    ) -> Result<Properties> {
        self.update_project(project, property).await
    }

    /// Update a project from an object carrying its `project_id`.
    ///
    /// Equivalent to `update_project(project_id, rest)`.
    pub async fn update_project_from(&self, property: Properties) -> Result<Properties> {
        api::update_project_from(&self.client, property).await
    }

    /// Update a tenant (alias of [update_project_from](#method.update_project_from)).
    #[inline]
    pub async fn update_tenant_from(&self, property: Properties) -> Result<Properties> {
        self.update_project_from(property).await
    }

    /// Create a user.
    pub async fn create_user(&self, property: Properties) -> Result<Properties> {
        api::create_user(&self.client, property).await
    }

    /// Get a user given its ID or an object with `id`.
    pub async fn get_user_by_id<U: ToUserId + ?Sized>(&self, user: &U) -> Result<Properties> {
        api::get_user_by_id(&self.client, user).await
    }

    /// Update a user.
    pub async fn update_user<U: ToUserId + ?Sized>(
        &self,
        user: &U,
        property: Properties,
    ) -> Result<Properties> {
        api::update_user(&self.client, user, property).await
    }

    /// Update a user from an object carrying its `id`.
    pub async fn update_user_from(&self, property: Properties) -> Result<Properties> {
        api::update_user_from(&self.client, property).await
    }

    /// Delete a user given its ID or an object with `id`.
    pub async fn delete_user<U: ToUserId + ?Sized>(&self, user: &U) -> Result<()> {
        api::delete_user(&self.client, user).await
    }
}
