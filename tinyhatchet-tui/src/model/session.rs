//! 会话上下文
//!
//! The session is shared by every screen: the server the user talks to, the
//! email address to prefill on the login form, and the cookie-carrying HTTP
//! client. Only the login form writes to it.

use tinyhatchet_client::{ClientResult, HatchetClient, DEFAULT_SERVER_URL};

use crate::backend::AppConfig;

#[derive(Debug, Clone)]
pub struct Session {
    /// `None` until a server URL is configured or entered on the login form
    server_url: Option<String>,
    email: String,
    client: HatchetClient,
}

impl Session {
    pub fn new(server_url: Option<String>, email: impl Into<String>) -> ClientResult<Self> {
        let server_url = server_url.filter(|url| !url.trim().is_empty());
        let client = HatchetClient::new(server_url.as_deref().unwrap_or(DEFAULT_SERVER_URL))?;
        Ok(Self {
            server_url,
            email: email.into(),
            client,
        })
    }

    pub fn from_config(config: &AppConfig) -> ClientResult<Self> {
        Self::new(Some(config.server_url.clone()), config.email_address.clone())
    }

    pub fn server_url(&self) -> Option<&str> {
        self.server_url.as_deref()
    }

    /// Point the session at `url`; a blank URL means the public server
    pub fn set_server_url(&mut self, url: &str) {
        let url = url.trim();
        let url = if url.is_empty() { DEFAULT_SERVER_URL } else { url };
        self.client.set_base_url(url);
        self.server_url = Some(self.client.base_url().to_string());
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn remember_email(&mut self, email: &str) {
        self.email = email.trim().to_string();
    }

    /// A handle for a background request. Clones share the cookie store.
    pub fn client(&self) -> HatchetClient {
        self.client.clone()
    }

    /// Write the session back into the persisted configuration
    pub fn store_into(&self, config: &mut AppConfig) {
        config.server_url = self.server_url.clone().unwrap_or_default();
        config.email_address.clone_from(&self.email);
    }
}
