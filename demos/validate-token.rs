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

use std::env;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    env_logger::init();

    let token = env::args().nth(1).expect("Provide a token to validate");
    let belongs_to = env::args().nth(2);

    let identity = openstack_identity::IdentityClient::from_env()
        .await
        .expect("Failed to create an identity client from the environment");

    let result = identity
        .validate_token(&token, belongs_to.as_deref())
        .await
        .expect("Token validation failed");
    println!("Token is valid: {}", result);
}
