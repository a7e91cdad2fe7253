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

//! Error and Result implementations.

use std::fmt;
use std::io;

use reqwest::StatusCode;

/// Kind of an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum ErrorKind {
    /// Authentication failure
    ///
    /// Maps to HTTP 401.
    AuthenticationFailed,

    /// Access denied.
    ///
    /// Maps to HTTP 403.
    AccessDenied,

    /// Requested resource was not found.
    ///
    /// Roughly maps to HTTP 404 and 410.
    ResourceNotFound,

    /// Requested service endpoint was not found.
    EndpointNotFound,

    /// Invalid value passed to one of paremeters.
    ///
    /// Also used for required arguments that are missing or empty.
    /// May be result of HTTP 400.
    InvalidInput,

    /// Configuration is incomplete or inconsistent.
    InvalidConfig,

    /// Conflict in the request.
    Conflict,

    /// Operation failed to complete.
    OperationFailed,

    /// Protocol-level error reported by underlying HTTP library.
    ProtocolError,

    /// Response received from the server is malformed.
    InvalidResponse,

    /// Internal server error.
    ///
    /// Maps to HTTP 5xx codes.
    InternalServerError,
}

/// Error from an Identity API call.
#[derive(Debug, Clone)]
pub struct Error {
    kind: ErrorKind,
    status: Option<StatusCode>,
    message: Option<String>,
}

/// Result of an Identity API call.
pub type Result<T> = ::std::result::Result<T, Error>;

impl Error {
    /// Create a new error of the provided kind.
    pub fn new<S: Into<String>>(kind: ErrorKind, message: S) -> Error {
        Error {
            kind,
            status: None,
            message: Some(message.into()),
        }
    }

    /// Create with providing all details.
    pub(crate) fn new_with_details(
        kind: ErrorKind,
        status: Option<StatusCode>,
        message: Option<String>,
    ) -> Error {
        Error {
            kind,
            status,
            message,
        }
    }

    /// Helper - error of kind InvalidInput for a missing argument.
    pub(crate) fn missing_argument(name: &str) -> Error {
        Error::new(
            ErrorKind::InvalidInput,
            format!("{} is a required argument", name),
        )
    }

    /// Helper - error for an HTTP status code.
    pub(crate) fn from_status(status: StatusCode, message: Option<String>) -> Error {
        Error::new_with_details(ErrorKind::from_status(status), Some(status), message)
    }

    /// Error kind.
    #[inline]
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// HTTP status code if the error came from the server.
    #[inline]
    pub fn status(&self) -> Option<StatusCode> {
        self.status
    }

    /// Error message if available.
    #[inline]
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}

impl ErrorKind {
    /// Short description of the error kind.
    pub fn description(&self) -> &'static str {
        match self {
            ErrorKind::AuthenticationFailed => "Failed to authenticate",
            ErrorKind::AccessDenied => "Access to the resource is denied",
            ErrorKind::ResourceNotFound => "Requested resource was not found",
            ErrorKind::EndpointNotFound => "Requested endpoint was not found",
            ErrorKind::InvalidInput => "Input value(s) are invalid or missing",
            ErrorKind::InvalidConfig => "Configuration is invalid or incomplete",
            ErrorKind::Conflict => "Requested cannot be fulfilled due to a conflict",
            ErrorKind::OperationFailed => "Requested operation has failed",
            ErrorKind::ProtocolError => "Error when accessing the server",
            ErrorKind::InvalidResponse => "Received invalid response",
            ErrorKind::InternalServerError => "Internal server error or bad gateway",
        }
    }

    /// Error kind corresponding to an HTTP status code.
    pub fn from_status(status: StatusCode) -> ErrorKind {
        match status {
            StatusCode::UNAUTHORIZED => ErrorKind::AuthenticationFailed,
            StatusCode::FORBIDDEN => ErrorKind::AccessDenied,
            StatusCode::NOT_FOUND | StatusCode::GONE => ErrorKind::ResourceNotFound,
            StatusCode::CONFLICT => ErrorKind::Conflict,
            c if c.is_client_error() => ErrorKind::InvalidInput,
            c if c.is_server_error() => ErrorKind::InternalServerError,
            _ => ErrorKind::InvalidResponse,
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.description())
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.kind)?;

        if let Some(status) = self.status {
            write!(f, " (HTTP {})", status.as_u16())?;
        }

        if let Some(ref msg) = self.message {
            write!(f, ": {}", msg)
        } else {
            Ok(())
        }
    }
}

impl ::std::error::Error for Error {}

impl From<reqwest::Error> for Error {
    fn from(value: reqwest::Error) -> Error {
        let msg = value.to_string();
        match value.status() {
            Some(status) => Error::from_status(status, Some(msg)),
            None if value.is_decode() => Error::new(ErrorKind::InvalidResponse, msg),
            None => Error::new(ErrorKind::ProtocolError, msg),
        }
    }
}

impl From<osauth::Error> for Error {
    fn from(value: osauth::Error) -> Error {
        let kind = match value.kind() {
            osauth::ErrorKind::AuthenticationFailed => ErrorKind::AuthenticationFailed,
            osauth::ErrorKind::AccessDenied => ErrorKind::AccessDenied,
            osauth::ErrorKind::ResourceNotFound => ErrorKind::ResourceNotFound,
            osauth::ErrorKind::EndpointNotFound => ErrorKind::EndpointNotFound,
            osauth::ErrorKind::InvalidInput => ErrorKind::InvalidInput,
            osauth::ErrorKind::InvalidConfig => ErrorKind::InvalidConfig,
            osauth::ErrorKind::InvalidResponse => ErrorKind::InvalidResponse,
            osauth::ErrorKind::ProtocolError => ErrorKind::ProtocolError,
            osauth::ErrorKind::Conflict => ErrorKind::Conflict,
            osauth::ErrorKind::InternalServerError => ErrorKind::InternalServerError,
            _ => ErrorKind::OperationFailed,
        };
        Error::new(kind, value.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(value: serde_json::Error) -> Error {
        Error::new(ErrorKind::InvalidResponse, value.to_string())
    }
}

impl From<serde_yaml::Error> for Error {
    fn from(value: serde_yaml::Error) -> Error {
        Error::new(ErrorKind::InvalidConfig, value.to_string())
    }
}

impl From<io::Error> for Error {
    fn from(value: io::Error) -> Error {
        Error::new(ErrorKind::InvalidConfig, value.to_string())
    }
}

#[cfg(test)]
mod test {
    use reqwest::StatusCode;

    use super::{Error, ErrorKind};

    #[test]
    fn test_kind_from_status() {
        assert_eq!(
            ErrorKind::from_status(StatusCode::UNAUTHORIZED),
            ErrorKind::AuthenticationFailed
        );
        assert_eq!(
            ErrorKind::from_status(StatusCode::FORBIDDEN),
            ErrorKind::AccessDenied
        );
        assert_eq!(
            ErrorKind::from_status(StatusCode::GONE),
            ErrorKind::ResourceNotFound
        );
        assert_eq!(
            ErrorKind::from_status(StatusCode::CONFLICT),
            ErrorKind::Conflict
        );
        assert_eq!(
            ErrorKind::from_status(StatusCode::BAD_REQUEST),
            ErrorKind::InvalidInput
        );
        assert_eq!(
            ErrorKind::from_status(StatusCode::BAD_GATEWAY),
            ErrorKind::InternalServerError
        );
    }

    #[test]
    fn test_error_display() {
        let err = Error::from_status(StatusCode::NOT_FOUND, Some("no such user".into()));
        assert_eq!(
            err.to_string(),
            "Requested resource was not found (HTTP 404): no such user"
        );
        assert_eq!(err.status(), Some(StatusCode::NOT_FOUND));

        let err = Error::missing_argument("Token");
        assert_eq!(err.kind(), ErrorKind::InvalidInput);
        assert_eq!(err.message(), Some("Token is a required argument"));
        assert_eq!(
            err.to_string(),
            "Input value(s) are invalid or missing: Token is a required argument"
        );
    }

    #[test]
    fn test_from_osauth_error() {
        let err: Error = osauth::Error::new(osauth::ErrorKind::InvalidConfig, "bad cloud").into();
        assert_eq!(err.kind(), ErrorKind::InvalidConfig);
        assert!(err.status().is_none());
        let err: Error = osauth::Error::new(osauth::ErrorKind::OperationTimedOut, "slow").into();
        assert_eq!(err.kind(), ErrorKind::OperationFailed);
    }
}
