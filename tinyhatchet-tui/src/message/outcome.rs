//! 后台请求结果

use tinyhatchet_client::{ApiToken, FieldErrors, LogEntry};

/// What a finished command reports back to the screen that issued it
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Login, register, confirm or change-email went through
    Success,
    /// The server rejected individual fields
    ValidationErrors(FieldErrors),
    /// Transport, decode or server error, already formatted for display
    Failure(String),
    /// The account must be confirmed before it can be used
    VerificationRequired,
    TokenCreated(ApiToken),
    TokenList(Vec<ApiToken>),
    /// Id of the token that was deleted
    TokenDeleted(String),
    LogEntries(Vec<LogEntry>),
}

impl Outcome {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Success => "Success",
            Self::ValidationErrors(_) => "ValidationErrors",
            Self::Failure(_) => "Failure",
            Self::VerificationRequired => "VerificationRequired",
            Self::TokenCreated(_) => "TokenCreated",
            Self::TokenList(_) => "TokenList",
            Self::TokenDeleted(_) => "TokenDeleted",
            Self::LogEntries(_) => "LogEntries",
        }
    }
}
