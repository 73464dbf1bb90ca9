//! The client handle shared by every endpoint group.

use reqwest::{Client, Response};
use serde_json::Value;

use crate::error::ApiError;

/// Typed client for the Code Scroller REST backend.
pub struct ApiClient {
    pub(crate) client: Client,
    pub(crate) base_url: String,
}

impl ApiClient {
    /// Create a new client against the given API base, e.g.
    /// `http://localhost:8081/api`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: trim_trailing_slash(base_url.into()),
        }
    }

    /// Use a preconfigured reqwest client (proxies, test setups).
    pub fn with_client(mut self, client: Client) -> Self {
        self.client = client;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Build an error from a failed response using the backend's error
    /// shape: a JSON body with an `error` (or `message`) field, else a
    /// non-empty text body, else the supplied default.
    pub(crate) async fn response_error(response: Response, default: &str) -> ApiError {
        let status = response.status().as_u16();
        let body = response.text().await.unwrap_or_default();

        let message = match serde_json::from_str::<Value>(&body) {
            Ok(json) => json
                .get("error")
                .or_else(|| json.get("message"))
                .and_then(Value::as_str)
                .map(str::to_string)
                .unwrap_or_else(|| default.to_string()),
            Err(_) if !body.trim().is_empty() => body,
            Err(_) => default.to_string(),
        };

        ApiError::Status { status, message }
    }
}

fn trim_trailing_slash(mut url: String) -> String {
    while url.ends_with('/') {
        url.pop();
    }
    url
}
