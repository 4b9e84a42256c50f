//! Generic HTTP request helpers
//!
//! Every endpoint method in [`HatchetClient`](crate::HatchetClient) builds its own
//! `RequestBuilder`; the helpers here take care of the shared part of the flow:
//! sending, logging and reading the body, then turning the body into a typed value.
//!
//! # design principles
//! - **No retries** - the first transport error is returned to the caller as-is
//! - **Status is data** - `execute_request` returns non-2xx responses, because the
//!   auth endpoints report validation problems with 4xx bodies; payload endpoints
//!   turn them into [`ClientError::HttpStatus`] through [`HttpUtils::parse_payload`]
//! - **Bodies are sanitized before logging** - passwords and token secrets never reach the log

use reqwest::RequestBuilder;
use serde::de::DeserializeOwned;

use crate::error::{ClientError, ClientResult};
use crate::utils::log_sanitizer::{redact_for_log, truncate_for_log};

/// HTTP tool function set
pub struct HttpUtils;

impl HttpUtils {
    /// Performs an HTTP request and returns the status code and response text
    ///
    /// # Arguments
    /// * `request_builder` - configured request (URL, headers, body)
    /// * `method_name` - request method name (for logs)
    /// * `path` - API path (for logs)
    ///
    /// # Returns
    /// * `Ok((status_code, response_text))` - any HTTP status, including errors
    /// * `Err(ClientError::NetworkError | Timeout | InvalidUrl)` - the request never completed
    pub async fn execute_request(
        request_builder: RequestBuilder,
        method_name: &str,
        path: &str,
    ) -> ClientResult<(u16, String)> {
        log::debug!("[tinyhatchet] {method_name} {path}");

        let response = request_builder
            .send()
            .await
            .map_err(|e| ClientError::from_transport(&e))?;

        let status_code = response.status().as_u16();
        log::debug!("[tinyhatchet] Response Status: {status_code}");

        let response_text = response
            .text()
            .await
            .map_err(|e| ClientError::NetworkError {
                detail: format!("Failed to read response body: {e}"),
            })?;

        log::debug!(
            "[tinyhatchet] Response Body: {}",
            redact_for_log(&response_text)
        );

        Ok((status_code, response_text))
    }

    /// Parse JSON response text
    ///
    /// # Returns
    /// * `Ok(T)` - successfully parsed
    /// * `Err(ClientError::ParseError)` - parsing failed
    pub fn parse_json<T>(response_text: &str) -> ClientResult<T>
    where
        T: DeserializeOwned,
    {
        serde_json::from_str(response_text).map_err(|e| {
            log::error!("[tinyhatchet] JSON parse failed: {e}");
            log::error!(
                "[tinyhatchet] Raw response: {}",
                redact_for_log(response_text)
            );
            ClientError::ParseError {
                detail: e.to_string(),
            }
        })
    }

    /// Parse the body of an endpoint whose payload is only meaningful on 2xx
    ///
    /// Any other status is an [`ClientError::HttpStatus`], even when the body is
    /// JSON that would happen to decode into `T`.
    pub fn parse_payload<T>(status_code: u16, response_text: &str) -> ClientResult<T>
    where
        T: DeserializeOwned,
    {
        if !is_success(status_code) {
            return Err(ClientError::HttpStatus {
                status: status_code,
                body: non_empty(response_text),
            });
        }
        Self::parse_json(response_text)
    }

    /// Map a bodiless endpoint (change email, delete token) onto `Ok(())` / `HttpStatus`
    pub fn expect_ok(status_code: u16, response_text: &str) -> ClientResult<()> {
        if status_code == 200 {
            Ok(())
        } else {
            Err(ClientError::HttpStatus {
                status: status_code,
                body: non_empty(response_text),
            })
        }
    }
}

fn is_success(status_code: u16) -> bool {
    (200..300).contains(&status_code)
}

fn non_empty(text: &str) -> Option<String> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(truncate_for_log(trimmed))
    }
}
