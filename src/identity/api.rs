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

//! Foundation bits exposing the Identity API.

use serde_json::Value;

use super::super::adapters::{ToProjectId, ToUserId, PROJECT_ID_FIELD};
use super::super::http::{Request, RestClient};
use super::super::types::Properties;
use super::super::utils;
use super::super::Result;
use super::protocol::*;

/// Validate a token, optionally checking that it belongs to a tenant.
pub async fn validate_token<C: RestClient + ?Sized>(
    client: &C,
    token: &str,
    belongs_to: Option<&str>,
) -> Result<Value> {
    let token = utils::path_id(token, "Token")?;
    let mut request = Request::get(item_path(TOKENS, token));
    if let Some(tenant_id) = belongs_to.filter(|x| !x.is_empty()) {
        trace!("Validating a token against tenant {}", tenant_id);
        request = request.with_query(BELONGS_TO, tenant_id);
    } else {
        trace!("Validating a token");
    }

    let body = client.request(request).await?;
    trace!("Received token validation result {:?}", body);
    Ok(body)
}

/// Get a tenant or list all tenants.
pub async fn get_tenant_info<C: RestClient + ?Sized>(
    client: &C,
    tenant_id: Option<&str>,
) -> Result<Value> {
    let request = match tenant_id.filter(|x| !x.is_empty()) {
        Some(id) => {
            let id = utils::path_id(id, "tenant_id")?;
            trace!("Fetching tenant {}", id);
            Request::get(item_path(TENANTS, id))
        }
        None => {
            trace!("Listing tenants");
            Request::get(TENANTS)
        }
    };

    let body = client.request(request).await?;
    trace!("Received {:?}", body);
    Ok(body)
}

/// Create a project.
pub async fn create_project<C: RestClient + ?Sized>(
    client: &C,
    property: Properties,
) -> Result<Properties> {
    trace!("Creating project {:?}", property);
    let body = serde_json::to_value(ProjectRoot { project: &property })?;
    let root = client
        .request(Request::post(PROJECTS).with_body(body))
        .await?;
    let project = utils::unwrap_root(root, PROJECT_KEY)?;
    debug!("Created project {:?}", project);
    Ok(project)
}

/// Delete a project.
pub async fn delete_project<C, P>(client: &C, project: &P) -> Result<()>
where
    C: RestClient + ?Sized,
    P: ToProjectId + ?Sized,
{
    let id = project.to_project_id()?;
    trace!("Deleting project {}", id);
    let _ = client
        .request(Request::delete(item_path(PROJECTS, &id)))
        .await?;
    debug!("Successfully deleted project {}", id);
    Ok(())
}

/// Update a project.
pub async fn update_project<C, P>(client: &C, project: &P, property: Properties) -> Result<Properties>
where
    C: RestClient + ?Sized,
    P: ToProjectId + ?Sized,
{
    let id = project.to_project_id()?;
    trace!("Updating project {} with {:?}", id, property);
    let body = serde_json::to_value(ProjectRoot { project: &property })?;
    let root = client
        .request(Request::patch(item_path(PROJECTS, &id)).with_body(body))
        .await?;
    let project = utils::unwrap_root(root, PROJECT_KEY)?;
    debug!("Updated project {}", id);
    Ok(project)
}

/// Update a project using the `project_id` field of the properties.
///
/// The `project_id` field itself is not sent.
pub async fn update_project_from<C: RestClient + ?Sized>(
    client: &C,
    mut property: Properties,
) -> Result<Properties> {
    let id = property.to_project_id()?;
    let _ = property.remove(PROJECT_ID_FIELD);
    update_project(client, id.as_str(), property).await
}

/// Create a user.
pub async fn create_user<C: RestClient + ?Sized>(
    client: &C,
    property: Properties,
) -> Result<Properties> {
    trace!("Creating user {:?}", property);
    let body = serde_json::to_value(UserRoot { user: &property })?;
    let root = client.request(Request::post(USERS).with_body(body)).await?;
    let user = utils::unwrap_root(root, USER_KEY)?;
    debug!("Created user {:?}", user);
    Ok(user)
}

/// Get a user by its ID.
pub async fn get_user_by_id<C, U>(client: &C, user: &U) -> Result<Properties>
where
    C: RestClient + ?Sized,
    U: ToUserId + ?Sized,
{
    let id = user.to_user_id()?;
    trace!("Fetching user {}", id);
    let root = client.request(Request::get(item_path(USERS, &id))).await?;
    let user = utils::unwrap_root(root, USER_KEY)?;
    trace!("Received {:?}", user);
    Ok(user)
}

/// Update a user.
pub async fn update_user<C, U>(client: &C, user: &U, property: Properties) -> Result<Properties>
where
    C: RestClient + ?Sized,
    U: ToUserId + ?Sized,
{
    let id = user.to_user_id()?;
    trace!("Updating user {} with {:?}", id, property);
    let body = serde_json::to_value(UserRoot { user: &property })?;
    let root = client
        .request(Request::put(item_path(USERS, &id)).with_body(body))
        .await?;
    let user = utils::unwrap_root(root, USER_KEY)?;
    debug!("Updated user {}", id);
    Ok(user)
}

/// Update a user using the `id` field of the properties.
///
/// The properties are sent unchanged, including the `id` field.
pub async fn update_user_from<C: RestClient + ?Sized>(
    client: &C,
    property: Properties,
) -> Result<Properties> {
    let id = property.to_user_id()?;
    update_user(client, id.as_str(), property).await
}

/// Delete a user.
pub async fn delete_user<C, U>(client: &C, user: &U) -> Result<()>
where
    C: RestClient + ?Sized,
    U: ToUserId + ?Sized,
{
    let id = user.to_user_id()?;
    trace!("Deleting user {}", id);
    let _ = client.request(Request::delete(item_path(USERS, &id))).await?;
    debug!("Successfully deleted user {}", id);
    Ok(())
}
