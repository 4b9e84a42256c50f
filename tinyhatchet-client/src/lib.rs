//! # tinyhatchet-client
//!
//! Async HTTP client for the tinyhatchet log-management API.
//!
//! ## Endpoints
//!
//! | Operation | Method | Returns |
//! |-----------|--------|---------|
//! | Login | [`HatchetClient::login`] | [`AuthStatus`] |
//! | Register | [`HatchetClient::register`] | [`AuthStatus`] |
//! | Confirm account | [`HatchetClient::confirm`] | [`AuthStatus`] |
//! | Change email | [`HatchetClient::change_email`] | `()` |
//! | Create API token | [`HatchetClient::create_api_token`] | [`ApiToken`] |
//! | List API tokens | [`HatchetClient::list_api_tokens`] | `Vec<ApiToken>` |
//! | Delete API token | [`HatchetClient::delete_api_token`] | `()` |
//! | Search log entries | [`HatchetClient::get_entries`] | `Vec<LogEntry>` |
//!
//! ## Usage
//!
//! ```rust,no_run
//! use tinyhatchet_client::{AuthStatus, HatchetClient, SearchQuery};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = HatchetClient::new("https://tinyhatchet.com")?;
//!
//!     match client.login("me@example.com", "hunter2").await? {
//!         AuthStatus::Success => {}
//!         AuthStatus::VerificationRequired => return Ok(()),
//!         AuthStatus::Rejected(errors) => {
//!             eprintln!("{errors:?}");
//!             return Ok(());
//!         }
//!     }
//!
//!     let query = SearchQuery::from_inputs("2021-06-01T00:00:00Z", "", "web,prod");
//!     for entry in client.get_entries(&query).await? {
//!         println!("{} {}", entry.timestamp, entry.text);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! Every call returns [`ClientResult<T>`]. Server-side validation problems are
//! values ([`AuthStatus::Rejected`]), while transport and decode failures are
//! [`ClientError`] variants. Nothing is retried.

mod client;
mod error;
mod http_client;
mod types;
mod utils;

pub use client::{create_http_client, HatchetClient, DEFAULT_SERVER_URL};

pub use error::{ClientError, ClientResult};

pub use types::{
    ApiResponse, ApiToken, AuthStatus, FieldErrors, ListTokensResponse, LogEntry, SearchQuery,
    GENERAL_ERROR_KEY, MESSAGE_VERIFICATION_REQUIRED, STATUS_SUCCESS,
};

pub use utils::datetime;
pub use utils::log_sanitizer;
