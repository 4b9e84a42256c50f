//! Request and response types of the tinyhatchet API.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{ClientError, ClientResult};

/// `status` value the auth endpoints use for success.
pub const STATUS_SUCCESS: &str = "success";

/// Message (or error) the auth endpoints use when the account is not confirmed yet.
pub const MESSAGE_VERIFICATION_REQUIRED: &str = "verification required";

/// Per-field validation messages reported by the server, keyed by field name.
///
/// A server-level `error` string that accompanies field errors is stored under
/// the [`GENERAL_ERROR_KEY`] key.
pub type FieldErrors = BTreeMap<String, Vec<String>>;

/// Key under which a form-level error is stored in [`FieldErrors`].
pub const GENERAL_ERROR_KEY: &str = "error";

/// Treat JSON `null` like a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

// ============ Auth ============

/// `POST /auth/login` body
#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

/// `POST /auth/register` body
#[derive(Debug, Clone, Serialize)]
pub struct RegisterRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
    pub confirm_password: &'a str,
}

/// Envelope returned by the auth endpoints.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiResponse {
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: String,
    #[serde(default)]
    pub errors: Option<FieldErrors>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub error: String,
    #[serde(default, alias = "Message", deserialize_with = "null_as_default")]
    pub message: String,
}

/// What an auth endpoint said about the submitted credentials.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthStatus {
    /// Logged in / registered / confirmed.
    Success,
    /// The account exists but its email address is not confirmed yet.
    VerificationRequired,
    /// The server rejected individual fields.
    Rejected(FieldErrors),
}

impl ApiResponse {
    /// Classify the envelope.
    ///
    /// Verification takes priority over everything else, then an explicit
    /// success, then field errors. Anything else is the server's plain error.
    pub fn into_auth_status(self) -> ClientResult<AuthStatus> {
        if self.message == MESSAGE_VERIFICATION_REQUIRED
            || self.error == MESSAGE_VERIFICATION_REQUIRED
        {
            return Ok(AuthStatus::VerificationRequired);
        }
        if self.status == STATUS_SUCCESS {
            return Ok(AuthStatus::Success);
        }
        if let Some(mut errors) = self.errors {
            if !self.error.is_empty() {
                errors.insert(GENERAL_ERROR_KEY.to_string(), vec![self.error]);
            }
            return Ok(AuthStatus::Rejected(errors));
        }
        let message = if self.error.is_empty() {
            "unexpected response from server".to_string()
        } else {
            self.error
        };
        Err(ClientError::Server { message })
    }
}

// ============ Account ============

/// `POST /account/change_email` body
#[derive(Debug, Clone, Serialize)]
pub struct ChangeEmailRequest<'a> {
    pub email: &'a str,
}

// ============ API tokens ============

/// An API token. The secret is only present in the response that created it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiToken {
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub secret: String,
}

impl ApiToken {
    pub fn new(id: impl Into<String>, secret: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            secret: secret.into(),
        }
    }

    /// Whether the secret is known (only right after creation).
    pub fn has_secret(&self) -> bool {
        !self.secret.is_empty()
    }
}

/// `GET /auth/api_token` response
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListTokensResponse {
    #[serde(default, deserialize_with = "null_as_default")]
    pub tokens: Vec<ApiToken>,
}

// ============ Log search ============

/// One stored log entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    pub timestamp: DateTime<Utc>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub text: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub tags: Vec<String>,
}

/// Query parameters of `GET /client/get_entries`.
///
/// Blank inputs are `None` and are left out of the query string entirely.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SearchQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<String>,
}

impl SearchQuery {
    /// Build a query from raw form values, dropping blank ones.
    pub fn from_inputs(start: &str, end: &str, tags: &str) -> Self {
        Self {
            start: non_blank(start),
            end: non_blank(end),
            tags: non_blank(tags),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.start.is_none() && self.end.is_none() && self.tags.is_none()
    }
}

fn non_blank(s: &str) -> Option<String> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
