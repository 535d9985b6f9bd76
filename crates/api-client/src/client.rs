//! Identification service client

use crate::config::ClientConfig;
use crate::endpoints::IdentifyApi;
use crate::error::{ApiError, ApiResult};
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue, USER_AGENT};
use reqwest::{Client, Response};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, instrument, warn};
use uuid::Uuid;

/// Request correlation ID header
const X_REQUEST_ID: &str = "X-Request-ID";

/// Client for the plant identification service
///
/// This client wraps `reqwest` and adds:
/// - Automatic retry with exponential backoff
/// - Request correlation IDs for tracing
/// - Environment-based configuration
#[derive(Clone)]
pub struct IdentifyClient {
    inner: Client,
    config: Arc<ClientConfig>,
}

impl IdentifyClient {
    /// Create a new client with configuration from the environment
    pub fn new() -> ApiResult<Self> {
        let config = ClientConfig::from_env()?;
        Self::with_config(config)
    }

    /// Create a new client with specific configuration
    pub fn with_config(config: ClientConfig) -> ApiResult<Self> {
        config.validate()?;

        let mut default_headers = HeaderMap::new();
        default_headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        default_headers.insert(
            USER_AGENT,
            HeaderValue::from_static("plantdex-api-client/0.4"),
        );

        let inner = Client::builder()
            .timeout(config.timeout)
            .default_headers(default_headers)
            .build()
            .map_err(ApiError::Request)?;

        Ok(Self {
            inner,
            config: Arc::new(config),
        })
    }

    /// Get the current configuration
    #[must_use]
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Access the identification endpoint
    #[must_use]
    pub fn identify(&self) -> IdentifyApi {
        IdentifyApi::new(self.clone())
    }

    /// Perform a POST request with retry
    #[instrument(skip(self, body), fields(request_id))]
    pub(crate) async fn post<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> ApiResult<T> {
        let url = format!("{}/{}", self.config.base_url.trim_end_matches('/'), path);
        let request_id = Uuid::new_v4().to_string();
        self.execute_with_retry(&request_id, &url, body).await
    }

    /// Execute a request with retry logic
    async fn execute_with_retry<T: DeserializeOwned, B: Serialize>(
        &self,
        request_id: &str,
        url: &str,
        body: &B,
    ) -> ApiResult<T> {
        let retry = &self.config.retry;
        let mut last_error: Option<ApiError> = None;

        for attempt in 0..retry.max_attempts {
            // Wait before retry (except first attempt)
            if attempt > 0 {
                let delay = retry.delay_for_attempt(attempt);
                debug!(
                    request_id = %request_id,
                    attempt = attempt,
                    delay_ms = delay.as_millis(),
                    "Retrying after delay"
                );
                tokio::time::sleep(delay).await;
            }

            let start = Instant::now();
            let result = self.execute_single_request(request_id, url, body).await;
            let elapsed = start.elapsed();

            match result {
                Ok(value) => {
                    debug!(
                        request_id = %request_id,
                        attempt = attempt + 1,
                        elapsed_ms = elapsed.as_millis(),
                        "Request succeeded"
                    );
                    return Ok(value);
                }
                Err(e) if !e.is_retryable() => {
                    debug!(
                        request_id = %request_id,
                        attempt = attempt + 1,
                        error = %e,
                        "Request failed, not retrying"
                    );
                    return Err(e);
                }
                Err(e) => {
                    warn!(
                        request_id = %request_id,
                        attempt = attempt + 1,
                        error = %e,
                        "Attempt failed"
                    );
                    last_error = Some(e);
                }
            }
        }

        Err(ApiError::RetriesExhausted {
            attempts: retry.max_attempts,
            last_error: last_error.map_or_else(|| "unknown error".to_string(), |e| e.to_string()),
        })
    }

    /// Execute a single request without retry
    async fn execute_single_request<T: DeserializeOwned, B: Serialize>(
        &self,
        request_id: &str,
        url: &str,
        body: &B,
    ) -> ApiResult<T> {
        let mut request = self
            .inner
            .post(url)
            .header(X_REQUEST_ID, request_id)
            .json(body);

        if let Some(ref key) = self.config.api_key {
            request = request.header(AUTHORIZATION, format!("Bearer {key}"));
        }

        let response = request.send().await?;
        Self::handle_response(response).await
    }

    /// Handle HTTP response and deserialize
    async fn handle_response<T: DeserializeOwned>(response: Response) -> ApiResult<T> {
        let status = response.status();

        if status.is_success() {
            return response.json().await.map_err(ApiError::Request);
        }

        // The service reports failures as {"error": "..."}; fall back to
        // the raw body for anything else.
        let body = response.text().await.unwrap_or_default();
        let message = match serde_json::from_str::<ErrorBody>(&body) {
            Ok(parsed) => parsed.error,
            Err(_) if body.is_empty() => "unknown error".to_string(),
            Err(_) => body,
        };

        Err(ApiError::service(status.as_u16(), message))
    }
}

#[derive(serde::Deserialize)]
struct ErrorBody {
    error: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let config = ClientConfig::default().with_api_key("test-key");
        assert!(IdentifyClient::with_config(config).is_ok());
    }

    #[test]
    fn test_client_rejects_invalid_config() {
        let config = ClientConfig::default().with_base_url("not-a-url");
        assert!(IdentifyClient::with_config(config).is_err());
    }

    #[test]
    fn test_error_body_parsing() {
        let parsed: ErrorBody = serde_json::from_str(r#"{"error": "Kein Bild gefunden"}"#).unwrap();
        assert_eq!(parsed.error, "Kein Bild gefunden");
    }
}
