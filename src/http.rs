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

//! Low-level HTTP primitives.
//!
//! A [Request](struct.Request.html) describes a single REST call relative to
//! the service root. Anything implementing [RestClient](trait.RestClient.html)
//! can execute it.

use std::fmt::Debug;

use async_trait::async_trait;
use reqwest::{Method, Url};
use serde_json::Value;

use super::utils;
use super::Result;

/// Description of a single HTTP request against a service.
#[derive(Debug, Clone, PartialEq)]
pub struct Request {
    method: Method,
    path: String,
    query: Vec<(String, String)>,
    body: Option<Value>,
}

impl Request {
    /// Create a request with the given method and path.
    pub fn new<P: Into<String>>(method: Method, path: P) -> Request {
        Request {
            method,
            path: path.into(),
            query: Vec::new(),
            body: None,
        }
    }

    /// Create a GET request.
    #[inline]
    pub fn get<P: Into<String>>(path: P) -> Request {
        Request::new(Method::GET, path)
    }

    /// Create a POST request.
    #[inline]
    pub fn post<P: Into<String>>(path: P) -> Request {
        Request::new(Method::POST, path)
    }

    /// Create a PUT request.
    #[inline]
    pub fn put<P: Into<String>>(path: P) -> Request {
        Request::new(Method::PUT, path)
    }

    /// Create a PATCH request.
    #[inline]
    pub fn patch<P: Into<String>>(path: P) -> Request {
        Request::new(Method::PATCH, path)
    }

    /// Create a DELETE request.
    #[inline]
    pub fn delete<P: Into<String>>(path: P) -> Request {
        Request::new(Method::DELETE, path)
    }

    /// Add a query parameter.
    pub fn with_query<K, V>(mut self, key: K, value: V) -> Request
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.query.push((key.into(), value.into()));
        self
    }

    /// Set a JSON body.
    pub fn with_body(mut self, body: Value) -> Request {
        self.body = Some(body);
        self
    }

    /// HTTP method.
    #[inline]
    pub fn method(&self) -> &Method {
        &self.method
    }

    /// Path relative to the service root.
    #[inline]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Query parameters.
    #[inline]
    pub fn query(&self) -> &[(String, String)] {
        &self.query
    }

    /// JSON body (if any).
    #[inline]
    pub fn body(&self) -> Option<&Value> {
        self.body.as_ref()
    }

    /// Full URL of this request relative to the given service root.
    pub fn url(&self, base: &Url) -> Url {
        let mut url = utils::url::join(base, &self.path);
        if !self.query.is_empty() {
            let _ = url.query_pairs_mut().extend_pairs(self.query.iter());
        }
        url
    }
}

impl AsRef<str> for Request {
    fn as_ref(&self) -> &str {
        &self.path
    }
}

/// Something that can execute REST requests against a service.
#[async_trait]
pub trait RestClient: Debug + Send + Sync {
    /// Service type this client talks to.
    fn service_type(&self) -> &str;

    /// Root URL of the service.
    async fn base_url(&self) -> Result<Url>;

    /// Execute a request.
    ///
    /// Returns the decoded JSON body, `Value::Null` when the body is empty.
    async fn request(&self, request: Request) -> Result<Value>;
}

#[cfg(test)]
pub(crate) mod test {
    use std::collections::VecDeque;
    use std::sync::Mutex;

    use async_trait::async_trait;
    use reqwest::{Method, StatusCode, Url};
    use serde_json::{json, Value};

    use super::{Request, RestClient};
    use crate::{Error, Result};

    /// Client recording requests and replying with canned responses.
    #[derive(Debug, Default)]
    pub struct FakeClient {
        pub requests: Mutex<Vec<Request>>,
        pub responses: Mutex<VecDeque<Result<Value>>>,
    }

    impl FakeClient {
        pub fn new() -> FakeClient {
            FakeClient::default()
        }

        pub fn with_response(self, response: Value) -> FakeClient {
            self.responses.lock().unwrap().push_back(Ok(response));
            self
        }

        pub fn with_error(self, error: Error) -> FakeClient {
            self.responses.lock().unwrap().push_back(Err(error));
            self
        }

        pub fn requests(&self) -> Vec<Request> {
            self.requests.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl RestClient for FakeClient {
        fn service_type(&self) -> &str {
            "identity"
        }

        async fn base_url(&self) -> Result<Url> {
            Ok(Url::parse("http://127.0.0.1:5000/identity/").unwrap())
        }

        async fn request(&self, request: Request) -> Result<Value> {
            self.requests.lock().unwrap().push(request);
            self.responses
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or(Ok(Value::Null))
        }
    }

    #[test]
    fn test_request_builders() {
        let req = Request::get("/v2.0/tokens/abc").with_query("belongsTo", "t1");
        assert_eq!(req.method(), &Method::GET);
        assert_eq!(req.path(), "/v2.0/tokens/abc");
        assert_eq!(
            req.query(),
            &[("belongsTo".to_string(), "t1".to_string())][..]
        );
        assert!(req.body().is_none());

        let req = Request::patch("/v3/projects/p1").with_body(json!({"project": {}}));
        assert_eq!(req.method(), &Method::PATCH);
        assert_eq!(req.body(), Some(&json!({"project": {}})));
        assert_eq!(req.as_ref(), "/v3/projects/p1");
    }

    #[test]
    fn test_request_url() {
        let base = Url::parse("http://127.0.0.1:5000/identity/").unwrap();
        let req = Request::get("/v2.0/tokens/abc").with_query("belongsTo", "t 1");
        assert_eq!(
            req.url(&base).as_str(),
            "http://127.0.0.1:5000/identity/v2.0/tokens/abc?belongsTo=t+1"
        );
        let req = Request::delete("/v3/projects/p1");
        assert_eq!(
            req.url(&base).as_str(),
            "http://127.0.0.1:5000/identity/v3/projects/p1"
        );
    }

    #[tokio::test]
    async fn test_fake_client_replays() {
        let client = FakeClient::new()
            .with_response(json!({"a": 1}))
            .with_error(Error::from_status(StatusCode::NOT_FOUND, None));
        assert_eq!(
            client.request(Request::get("/a")).await.unwrap(),
            json!({"a": 1})
        );
        assert!(client.request(Request::get("/b")).await.is_err());
        assert_eq!(
            client.request(Request::get("/c")).await.unwrap(),
            Value::Null
        );
        assert_eq!(client.requests().len(), 3);
    }
}
