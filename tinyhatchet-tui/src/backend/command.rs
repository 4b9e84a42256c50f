//! 后台命令
//!
//! A [`Command`] describes one API call. Screens return commands from
//! `update`; the [`Executor`](super::Executor) runs them off the UI thread and
//! feeds the resulting [`Outcome`] back in.

use std::fmt;

use tinyhatchet_client::{AuthStatus, ClientError, ClientResult, HatchetClient, SearchQuery};

use crate::message::Outcome;

#[derive(Clone, PartialEq, Eq)]
pub enum Command {
    Login { email: String, password: String },
    Register { email: String, password: String },
    Confirm { code: String },
    ChangeEmail { email: String },
    CreateToken,
    ListTokens,
    DeleteToken { id: String },
    SearchEntries(SearchQuery),
}

impl Command {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Login { .. } => "login",
            Self::Register { .. } => "register",
            Self::Confirm { .. } => "confirm",
            Self::ChangeEmail { .. } => "change_email",
            Self::CreateToken => "create_token",
            Self::ListTokens => "list_tokens",
            Self::DeleteToken { .. } => "delete_token",
            Self::SearchEntries(_) => "search_entries",
        }
    }

    /// Perform the request and translate its result for the UI
    pub async fn run(self, client: &HatchetClient) -> Outcome {
        let name = self.name();
        let outcome = match self {
            Self::Login { email, password } => auth_outcome(client.login(&email, &password).await),
            Self::Register { email, password } => {
                auth_outcome(client.register(&email, &password).await)
            }
            Self::Confirm { code } => auth_outcome(client.confirm(&code).await),
            Self::ChangeEmail { email } => {
                client.change_email(&email).await.map_or_else(failure, |()| Outcome::Success)
            }
            Self::CreateToken => client
                .create_api_token()
                .await
                .map_or_else(failure, Outcome::TokenCreated),
            Self::ListTokens => client
                .list_api_tokens()
                .await
                .map_or_else(failure, Outcome::TokenList),
            Self::DeleteToken { id } => client
                .delete_api_token(&id)
                .await
                .map_or_else(failure, |()| Outcome::TokenDeleted(id)),
            Self::SearchEntries(query) => client
                .get_entries(&query)
                .await
                .map_or_else(failure, Outcome::LogEntries),
        };
        log::debug!("[command] {name} finished: {}", outcome.name());
        outcome
    }
}

// Passwords never reach the debug log
impl fmt::Debug for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Login { email, .. } => f
                .debug_struct("Login")
                .field("email", email)
                .field("password", &"***")
                .finish(),
            Self::Register { email, .. } => f
                .debug_struct("Register")
                .field("email", email)
                .field("password", &"***")
                .finish(),
            Self::Confirm { code } => f.debug_struct("Confirm").field("code", code).finish(),
            Self::ChangeEmail { email } => {
                f.debug_struct("ChangeEmail").field("email", email).finish()
            }
            Self::CreateToken => f.write_str("CreateToken"),
            Self::ListTokens => f.write_str("ListTokens"),
            Self::DeleteToken { id } => f.debug_struct("DeleteToken").field("id", id).finish(),
            Self::SearchEntries(query) => f.debug_tuple("SearchEntries").field(query).finish(),
        }
    }
}

fn auth_outcome(result: ClientResult<AuthStatus>) -> Outcome {
    match result {
        Ok(AuthStatus::Success) => Outcome::Success,
        Ok(AuthStatus::VerificationRequired) => Outcome::VerificationRequired,
        Ok(AuthStatus::Rejected(errors)) => Outcome::ValidationErrors(errors),
        Err(e) => failure(e),
    }
}

fn failure(err: ClientError) -> Outcome {
    if err.is_expected() {
        log::warn!("[command] {err}");
    } else {
        log::error!("[command] {err}");
    }
    Outcome::Failure(err.to_string())
}
