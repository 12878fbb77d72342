//! HTTP client for restaurant service requests.
//!
//! This module provides a low-level HTTP client wrapper for making requests
//! to the restaurant service, handling URL assembly, status checking, and
//! response parsing.

use super::error::ApiError;
use reqwest::Method;
use serde::de::DeserializeOwned;

/// Makes requests to the restaurant service and tries to conform response
/// data to the given type.
///
pub struct Client {
    base_url: String,
    http_client: reqwest::Client,
}

impl Client {
    /// Returns a new instance for the given base URL.
    ///
    /// # Panics
    /// Panics if the HTTP client cannot be created. This should never happen
    /// in practice as reqwest::Client::builder().build() only fails on
    /// invalid configuration, which we don't use.
    pub fn new(base_url: &str) -> Self {
        Client {
            base_url: base_url.trim_end_matches('/').to_owned(),
            http_client: reqwest::Client::builder()
                .build()
                .expect("Failed to create HTTP client - this should never happen"),
        }
    }

    /// Make a GET request and return the deserialized response body.
    ///
    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.call(Method::GET, path, None).await
    }

    /// Make a POST request with a JSON body and return the deserialized
    /// response body.
    ///
    pub(crate) async fn post<T: DeserializeOwned>(
        &self,
        path: &str,
        body: serde_json::Value,
    ) -> Result<T, ApiError> {
        self.call(Method::POST, path, Some(body)).await
    }

    /// Make request and return deserialized response data or error.
    ///
    async fn call<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<serde_json::Value>,
    ) -> Result<T, ApiError> {
        let request_url = format!("{}/{}", self.base_url, path.trim_start_matches('/'));

        let mut request = self.http_client.request(method, &request_url);
        if let Some(body) = body {
            request = request.json(&body);
        }
        let response = request.send().await?;
        let status = response.status();

        // Check status before trying to deserialize
        if !status.is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| String::from("Unable to read response"));
            log::error!("API request failed with status {}: {}", status, message);
            return Err(ApiError::Status {
                status: status.as_u16(),
                message,
            });
        }

        // Keep the response bytes so we can log them if deserialization fails
        let response_bytes = response.bytes().await?;
        match serde_json::from_slice::<T>(&response_bytes) {
            Ok(data) => Ok(data),
            Err(e) => {
                log::error!(
                    "Failed to deserialize API response: {}. Response body: {}",
                    e,
                    String::from_utf8_lossy(&response_bytes)
                );
                Err(ApiError::Deserialization(e))
            }
        }
    }
}
