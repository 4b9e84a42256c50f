use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Unified error type for every tinyhatchet API call.
///
/// Transport problems (connection refused, DNS failure, timeouts) and
/// malformed responses are reported here. Server-side validation problems are
/// *not* errors: they come back as [`AuthStatus::Rejected`](crate::AuthStatus::Rejected).
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "code")]
pub enum ClientError {
    /// A network-level error occurred (DNS resolution failure, connection refused, etc.).
    #[error("network error: {detail}")]
    NetworkError {
        /// Error details.
        detail: String,
    },

    /// The connection attempt timed out.
    #[error("request timeout: {detail}")]
    Timeout {
        /// Error details.
        detail: String,
    },

    /// The configured server URL could not be used to build a request.
    #[error("invalid server url '{url}': {detail}")]
    InvalidUrl {
        /// The offending URL.
        url: String,
        /// Why it was rejected.
        detail: String,
    },

    /// The server answered with an unexpected HTTP status and no usable body.
    #[error("server returned HTTP {status}")]
    HttpStatus {
        /// HTTP status code.
        status: u16,
        /// Truncated response body, if any.
        body: Option<String>,
    },

    /// Failed to parse the server's response.
    #[error("parse api response: {detail}")]
    ParseError {
        /// Details about the parse failure.
        detail: String,
    },

    /// Failed to serialize a request body.
    #[error("serialize request: {detail}")]
    SerializationError {
        /// Details about the serialization failure.
        detail: String,
    },

    /// The server rejected the request with a plain error message.
    #[error("{message}")]
    Server {
        /// Message reported by the server.
        message: String,
    },
}

impl ClientError {
    /// 是否为预期行为（用户输入、服务端拒绝等），用于日志分级。
    ///
    /// 返回 `true` 时应使用 `warn` 级别，`false` 时使用 `error` 级别。
    #[must_use]
    pub fn is_expected(&self) -> bool {
        matches!(self, Self::Server { .. } | Self::HttpStatus { .. })
    }

    pub(crate) fn from_transport(err: &reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout {
                detail: err.to_string(),
            }
        } else if err.is_builder() {
            Self::InvalidUrl {
                url: err.url().map(ToString::to_string).unwrap_or_default(),
                detail: err.to_string(),
            }
        } else {
            Self::NetworkError {
                detail: err.to_string(),
            }
        }
    }
}

/// Result alias used throughout the client.
pub type ClientResult<T> = std::result::Result<T, ClientError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_message_displays_verbatim() {
        let e = ClientError::Server {
            message: "invalid credentials".into(),
        };
        assert_eq!(e.to_string(), "invalid credentials");
    }

    #[test]
    fn network_errors_are_unexpected() {
        let e = ClientError::NetworkError {
            detail: "connection refused".into(),
        };
        assert!(!e.is_expected());
    }

    #[test]
    fn status_errors_are_expected() {
        let e = ClientError::HttpStatus {
            status: 403,
            body: None,
        };
        assert!(e.is_expected());
        assert_eq!(e.to_string(), "server returned HTTP 403");
    }

    #[test]
    fn serializes_with_code_tag() {
        let e = ClientError::ParseError {
            detail: "eof".into(),
        };
        let json = serde_json::to_value(&e).unwrap_or_default();
        assert_eq!(json["code"], "ParseError");
        assert_eq!(json["detail"], "eof");
    }
}
