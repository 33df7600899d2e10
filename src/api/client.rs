//! HTTP client for restaurant API requests.
//!
//! This module wraps `reqwest` with the API base URL and optional bearer
//! token, and turns non-success responses into errors.

use super::ApiError;
use reqwest::Response;
use serde::Serialize;

/// Makes authenticated JSON requests against the API base URL.
///
pub struct Client {
    pub(crate) access_token: Option<String>,
    pub(crate) base_url: String,
    pub(crate) http_client: reqwest::Client,
}

impl Client {
    /// Returns a new instance for the given access token and base URL.
    ///
    /// # Panics
    /// Panics if the HTTP client cannot be created. `reqwest` only fails here
    /// when the TLS backend cannot be initialized.
    pub fn new(access_token: Option<&str>, base_url: &str) -> Self {
        Client {
            access_token: access_token.map(str::to_owned),
            base_url: base_url.trim_end_matches('/').to_owned(),
            http_client: reqwest::Client::builder()
                .build()
                .expect("Failed to create HTTP client"),
        }
    }

    /// Return the full URL for a path relative to the base URL.
    ///
    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// POST the body as JSON and return the response, or an error if the
    /// request failed or the status is not a success.
    ///
    pub(crate) async fn post<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<Response, ApiError> {
        let request_url = self.url(path);
        let body = serde_json::to_value(body)?;

        let mut request = self.http_client.post(&request_url).json(&body);
        if let Some(access_token) = &self.access_token {
            request = request.header("Authorization", format!("Bearer {}", access_token));
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| String::from("Unable to read response"));
            log::error!(
                "POST {} failed with status {}: {}",
                request_url,
                status,
                message
            );
            return Err(ApiError::Status {
                status: status.as_u16(),
                message,
            });
        }
        Ok(response)
    }
}
