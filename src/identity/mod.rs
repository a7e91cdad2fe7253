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

//! Identity API implementation bits.
//!
//! Token validation and tenant lookup use the Identity API v2.0, project
//! management uses v3 and user management uses v2.0 again, matching what
//! Keystone deployments expose for these calls.

mod api;
mod client;
mod protocol;

pub use self::client::IdentityClient;
