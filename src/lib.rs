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

//! OpenStack Identity (Keystone) client in Rust.
//!
//! The goal of this project is to provide a thin asynchronous binding to the
//! administrative parts of the Identity API:
//!
//! * Token validation and tenant lookup.
//! * Project (tenant) creation, update and deletion.
//! * User creation, lookup, update and deletion.
//!
//! Start with an [IdentityClient](struct.IdentityClient.html), created either
//! from the environment, from a [ClientConfig](struct.ClientConfig.html) or on
//! top of an existing [Session](struct.Session.html):
//!
//! ```rust,no_run
//! # async fn example() -> openstack_identity::Result<()> {
//! use serde_json::json;
//!
//! let identity = openstack_identity::IdentityClient::from_env().await?;
//! let props = json!({"name": "alice"}).as_object().cloned().unwrap_or_default();
//! let user = identity.create_user(props).await?;
//! identity.delete_user(&user).await?;
//! # Ok(()) }
//! ```
//!
//! Authentication and the service catalog are handled by
//! [osauth](https://crates.io/crates/osauth).

#![crate_name = "openstack_identity"]
#![crate_type = "lib"]
// NOTE: we do not use generic deny(warnings) to avoid breakages with new
// versions of the compiler. Add more warnings here as you discover them.
// Taken from https://github.com/rust-unofficial/patterns/
#![deny(
    bare_trait_objects,
    improper_ctypes,
    missing_debug_implementations,
    missing_docs,
    non_shorthand_field_patterns,
    no_mangle_generic_items,
    overflowing_literals,
    path_statements,
    patterns_in_fns_without_body,
    trivial_casts,
    trivial_numeric_casts,
    unconditional_recursion,
    unsafe_code,
    unused_allocation,
    unused_comparisons,
    unused_import_braces,
    unused_parens,
    while_true
)]
#![warn(unused, unused_qualifications, unused_results)]

#[macro_use]
extern crate log;
#[macro_use]
extern crate serde_derive;

mod adapters;
mod config;
mod error;
pub mod http;
mod identity;
mod session;
mod types;
mod utils;

pub use crate::adapters::{ToProjectId, ToUserId};
pub use crate::config::{ClientConfig, IDENTITY_SERVICE_TYPE};
pub use crate::error::{Error, ErrorKind, Result};
pub use crate::http::{Request, RestClient};
pub use crate::identity::IdentityClient;
pub use crate::session::Session;
pub use crate::types::{Properties, ProjectRef, UserRef};
pub use osauth::InterfaceType;
