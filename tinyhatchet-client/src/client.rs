//! tinyhatchet API client
//!
//! One [`HatchetClient`] is the session transport of the terminal app: it owns a
//! cookie-carrying `reqwest::Client`, so the session cookie set by `/auth/login`
//! is sent with every later call. Cloning the client is cheap and clones share
//! the same connection pool and cookie store.

use std::time::Duration;

use reqwest::{Client, RequestBuilder};

use crate::error::{ClientError, ClientResult};
use crate::http_client::HttpUtils;
use crate::types::{
    ApiResponse, ApiToken, AuthStatus, ChangeEmailRequest, ListTokensResponse, LogEntry,
    LoginRequest, RegisterRequest, SearchQuery,
};

/// 默认连接超时（秒）
const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

/// Server used when the user has not configured one.
pub const DEFAULT_SERVER_URL: &str = "https://tinyhatchet.com";

pub(crate) const PATH_LOGIN: &str = "/auth/login";
pub(crate) const PATH_REGISTER: &str = "/auth/register";
pub(crate) const PATH_CONFIRM: &str = "/auth/confirm";
pub(crate) const PATH_CHANGE_EMAIL: &str = "/account/change_email";
pub(crate) const PATH_API_TOKEN: &str = "/auth/api_token";
pub(crate) const PATH_GET_ENTRIES: &str = "/client/get_entries";

/// Create the cookie-store HTTP client shared by the whole session
pub fn create_http_client() -> ClientResult<Client> {
    Client::builder()
        .cookie_store(true)
        .connect_timeout(Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS))
        .build()
        .map_err(|e| ClientError::NetworkError {
            detail: format!("Failed to create HTTP client: {e}"),
        })
}

/// Client for one tinyhatchet server
#[derive(Debug, Clone)]
pub struct HatchetClient {
    http: Client,
    base_url: String,
}

impl HatchetClient {
    /// Create a client with a fresh cookie store
    pub fn new(base_url: impl Into<String>) -> ClientResult<Self> {
        Ok(Self::with_http(create_http_client()?, base_url))
    }

    /// Wrap an existing `reqwest::Client` (its cookie store is kept)
    pub fn with_http(http: Client, base_url: impl Into<String>) -> Self {
        Self {
            http,
            base_url: normalize_base_url(&base_url.into()),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Point the client at another server. Cookies are kept.
    pub fn set_base_url(&mut self, base_url: &str) {
        self.base_url = normalize_base_url(base_url);
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    // ========== 请求构造 ==========

    /// Build (but do not send) the login request
    pub fn login_request(&self, email: &str, password: &str) -> RequestBuilder {
        self.http
            .post(self.endpoint(PATH_LOGIN))
            .json(&LoginRequest { email, password })
    }

    /// Build (but do not send) the register request
    pub fn register_request(&self, email: &str, password: &str) -> RequestBuilder {
        self.http
            .post(self.endpoint(PATH_REGISTER))
            .json(&RegisterRequest {
                email,
                password,
                confirm_password: password,
            })
    }

    /// Build (but do not send) the confirmation request
    pub fn confirm_request(&self, code: &str) -> RequestBuilder {
        self.http
            .get(self.endpoint(PATH_CONFIRM))
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .query(&[("cnf", code)])
    }

    /// Build (but do not send) the change-email request
    pub fn change_email_request(&self, email: &str) -> RequestBuilder {
        self.http
            .post(self.endpoint(PATH_CHANGE_EMAIL))
            .json(&ChangeEmailRequest { email })
    }

    /// Build (but do not send) the create-token request
    pub fn create_api_token_request(&self) -> RequestBuilder {
        self.http.post(self.endpoint(PATH_API_TOKEN))
    }

    /// Build (but do not send) the list-tokens request
    pub fn list_api_tokens_request(&self) -> RequestBuilder {
        self.http.get(self.endpoint(PATH_API_TOKEN))
    }

    /// Build (but do not send) the delete-token request
    pub fn delete_api_token_request(&self, id: &str) -> RequestBuilder {
        self.http
            .delete(self.endpoint(PATH_API_TOKEN))
            .query(&[("id", id)])
    }

    /// Build (but do not send) the log search request
    pub fn get_entries_request(&self, query: &SearchQuery) -> RequestBuilder {
        self.http.get(self.endpoint(PATH_GET_ENTRIES)).query(query)
    }

    // ========== 认证 ==========

    /// `POST /auth/login`
    pub async fn login(&self, email: &str, password: &str) -> ClientResult<AuthStatus> {
        let (_, body) =
            HttpUtils::execute_request(self.login_request(email, password), "POST", PATH_LOGIN)
                .await?;
        HttpUtils::parse_json::<ApiResponse>(&body)?.into_auth_status()
    }

    /// `POST /auth/register`
    pub async fn register(&self, email: &str, password: &str) -> ClientResult<AuthStatus> {
        let (_, body) = HttpUtils::execute_request(
            self.register_request(email, password),
            "POST",
            PATH_REGISTER,
        )
        .await?;
        HttpUtils::parse_json::<ApiResponse>(&body)?.into_auth_status()
    }

    /// `GET /auth/confirm?cnf=CODE`
    pub async fn confirm(&self, code: &str) -> ClientResult<AuthStatus> {
        let (_, body) =
            HttpUtils::execute_request(self.confirm_request(code), "GET", PATH_CONFIRM).await?;
        HttpUtils::parse_json::<ApiResponse>(&body)?.into_auth_status()
    }

    // ========== 账号 ==========

    /// `POST /account/change_email`; only HTTP 200 counts as success
    pub async fn change_email(&self, email: &str) -> ClientResult<()> {
        let (status, body) = HttpUtils::execute_request(
            self.change_email_request(email),
            "POST",
            PATH_CHANGE_EMAIL,
        )
        .await?;
        HttpUtils::expect_ok(status, &body)
    }

    // ========== API Token ==========

    /// `POST /auth/api_token`
    pub async fn create_api_token(&self) -> ClientResult<ApiToken> {
        let (status, body) =
            HttpUtils::execute_request(self.create_api_token_request(), "POST", PATH_API_TOKEN)
                .await?;
        let token: ApiToken = HttpUtils::parse_payload(status, &body)?;
        log::info!("[tinyhatchet] Created API token {}", token.id);
        Ok(token)
    }

    /// `GET /auth/api_token`
    pub async fn list_api_tokens(&self) -> ClientResult<Vec<ApiToken>> {
        let (status, body) =
            HttpUtils::execute_request(self.list_api_tokens_request(), "GET", PATH_API_TOKEN)
                .await?;
        let response: ListTokensResponse = HttpUtils::parse_payload(status, &body)?;
        Ok(response.tokens)
    }

    /// `DELETE /auth/api_token?id=ID`; only HTTP 200 counts as deleted
    pub async fn delete_api_token(&self, id: &str) -> ClientResult<()> {
        let (status, body) = HttpUtils::execute_request(
            self.delete_api_token_request(id),
            "DELETE",
            PATH_API_TOKEN,
        )
        .await?;
        HttpUtils::expect_ok(status, &body)
    }

    // ========== 日志检索 ==========

    /// `GET /client/get_entries`
    pub async fn get_entries(&self, query: &SearchQuery) -> ClientResult<Vec<LogEntry>> {
        let (status, body) =
            HttpUtils::execute_request(self.get_entries_request(query), "GET", PATH_GET_ENTRIES)
                .await?;
        let entries = decode_entries(status, &body)?;
        log::debug!("[tinyhatchet] Received {} log entries", entries.len());
        Ok(entries)
    }
}

/// A `null` body means no entries matched
fn decode_entries(status: u16, body: &str) -> ClientResult<Vec<LogEntry>> {
    let entries: Option<Vec<LogEntry>> = HttpUtils::parse_payload(status, body)?;
    Ok(entries.unwrap_or_default())
}

fn normalize_base_url(url: &str) -> String {
    let trimmed = url.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        DEFAULT_SERVER_URL.to_string()
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slashes_are_trimmed() {
        assert_eq!(normalize_base_url("http://localhost:8080/"), "http://localhost:8080");
        assert_eq!(normalize_base_url(" https://x.io// "), "https://x.io");
    }

    #[test]
    fn blank_base_url_falls_back_to_default() {
        assert_eq!(normalize_base_url("  "), DEFAULT_SERVER_URL);
    }

    #[test]
    fn endpoint_joins_path() {
        let Ok(client) = HatchetClient::new("http://localhost:8080/") else {
            panic!("client should build");
        };
        assert_eq!(client.endpoint(PATH_LOGIN), "http://localhost:8080/auth/login");
    }

    #[test]
    fn null_entries_body_is_empty_result() {
        assert_eq!(decode_entries(200, "null"), Ok(Vec::new()));
        assert_eq!(decode_entries(200, "[]"), Ok(Vec::new()));
    }

    #[test]
    fn entries_on_error_status_are_http_error() {
        assert!(matches!(
            decode_entries(500, "null"),
            Err(ClientError::HttpStatus { status: 500, .. })
        ));
    }

    #[test]
    fn set_base_url_switches_server() {
        let Ok(mut client) = HatchetClient::new("http://a.example") else {
            panic!("client should build");
        };
        client.set_base_url("http://b.example/");
        assert_eq!(client.base_url(), "http://b.example");
    }
}
