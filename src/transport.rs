//! HTTP transport for the `AwardWallet` client.
//!
//! Handles HTTP communication with API key authentication, automatic retry
//! logic and error handling.

use std::fmt;
use std::time::Duration;

use rand::thread_rng;
use rand::Rng;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, RETRY_AFTER, USER_AGENT};
use reqwest::{Client, Method, RequestBuilder, Response};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;

use crate::error::{ApiError, Error};

/// Header carrying the Business API key.
pub const API_KEY_HEADER: &str = "X-Authentication";

/// User agent sent with every request.
pub const DEFAULT_USER_AGENT: &str = concat!("awardwallet-rust/", env!("CARGO_PKG_VERSION"));

/// Cap used when the configured `max_backoff` is not a finite number.
const DEFAULT_MAX_BACKOFF: f64 = 60.0;

/// Configuration for automatic retry behavior.
#[derive(Debug, Clone)]
pub struct RetryConfig {
    /// Maximum number of retry attempts
    pub max_retries: u32,
    /// Wait before the first retry, in seconds
    pub base_delay: f64,
    /// Base backoff factor for exponential backoff
    pub backoff_factor: f64,
    /// Status codes that trigger retry
    pub retry_on: Vec<u16>,
    /// Whether to respect Retry-After header
    pub respect_retry_after: bool,
    /// Maximum backoff time in seconds
    pub max_backoff: f64,
    /// Jitter factor (0.1 = +/-10%)
    pub jitter: f64,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_retries: 3,
            base_delay: 1.0,
            backoff_factor: 2.0,
            retry_on: vec![429, 500, 502, 503],
            respect_retry_after: true,
            max_backoff: DEFAULT_MAX_BACKOFF,
            jitter: 0.1,
        }
    }
}

impl RetryConfig {
    /// Configuration that never retries.
    #[must_use]
    pub fn disabled() -> Self {
        Self {
            max_retries: 0,
            ..Self::default()
        }
    }

    /// Determine if a response with `status_code` should be retried after
    /// the given zero-based attempt.
    #[must_use]
    pub fn should_retry(&self, status_code: u16, attempt: u32) -> bool {
        if attempt >= self.max_retries {
            return false;
        }

        self.retry_on.contains(&status_code)
    }

    /// Calculate the wait in seconds before the retry that follows `attempt`.
    ///
    /// Uses exponential backoff with jitter, respecting a Retry-After value
    /// if present. The result always lies in `0..=max_backoff`, and a
    /// non-finite `max_backoff` falls back to 60 seconds.
    #[must_use]
    pub fn backoff_time(&self, attempt: u32, retry_after: Option<u32>) -> f64 {
        let max_backoff = if self.max_backoff.is_finite() {
            self.max_backoff.max(0.0)
        } else {
            DEFAULT_MAX_BACKOFF
        };

        if let Some(ra) = retry_after {
            if self.respect_retry_after {
                return f64::from(ra).min(max_backoff);
            }
        }

        let exponent = i32::try_from(attempt).unwrap_or(i32::MAX);
        let raw_wait = self.base_delay * self.backoff_factor.powi(exponent);
        // 0 * inf and other degenerate configs fall back to the cap
        let base_wait = if raw_wait.is_nan() {
            max_backoff
        } else {
            raw_wait.clamp(0.0, max_backoff)
        };

        let jitter_range = base_wait * self.jitter;
        let wait_time = if jitter_range > 0.0 && jitter_range.is_finite() {
            base_wait + thread_rng().gen_range(-jitter_range..jitter_range)
        } else {
            base_wait
        };

        if wait_time.is_finite() {
            wait_time.clamp(0.0, max_backoff)
        } else {
            max_backoff
        }
    }
}

/// HTTP transport layer with authentication and retry logic.
///
/// Handles:
/// - The `X-Authentication` API key header on every request
/// - Exponential backoff with jitter for retries
/// - Retry-After header respect for rate limiting
/// - Error response parsing into typed errors
pub struct HttpTransport {
    base_url: String,
    client: Client,
    retry_config: RetryConfig,
}

impl HttpTransport {
    /// Create a new HTTP transport.
    ///
    /// # Arguments
    ///
    /// * `base_url` - Base URL for API requests
    /// * `api_key` - Business API key
    /// * `timeout` - Request timeout
    /// * `retry_config` - Configuration for retry behavior
    ///
    /// # Errors
    ///
    /// Returns an error if the API key is not a valid header value or the
    /// HTTP client cannot be created.
    pub fn new(
        base_url: &str,
        api_key: &str,
        timeout: Duration,
        retry_config: Option<RetryConfig>,
    ) -> Result<Self, Error> {
        let mut key = HeaderValue::from_str(api_key).map_err(|_| {
            Error::Configuration("API key contains characters not allowed in a header".to_string())
        })?;
        key.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(API_KEY_HEADER, key);
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(USER_AGENT, HeaderValue::from_static(DEFAULT_USER_AGENT));

        let client = Client::builder()
            .timeout(timeout)
            .default_headers(headers)
            .build()
            .map_err(|e| Error::Http(e.to_string()))?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
            retry_config: retry_config.unwrap_or_default(),
        })
    }

    /// Make a GET request with automatic retry.
    ///
    /// # Errors
    ///
    /// Returns an `ApiError` on non-2xx responses, `Error::Http` on transport
    /// failures and `Error::Serialization` if the body does not match `T`.
    pub async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        params: Option<&[(&str, &str)]>,
    ) -> Result<T, Error> {
        self.execute_with_retry(&Method::GET, path, || {
            let mut request = self.client.get(self.url(path));
            if let Some(p) = params {
                request = request.query(p);
            }
            request
        })
        .await
    }

    /// Make a POST request with a JSON body and automatic retry.
    ///
    /// # Errors
    ///
    /// Same as [`HttpTransport::get`].
    pub async fn post<T, B>(&self, path: &str, body: &B) -> Result<T, Error>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.execute_with_retry(&Method::POST, path, || {
            self.client.post(self.url(path)).json(body)
        })
        .await
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Execute a request with automatic retry on retryable errors.
    async fn execute_with_retry<F, T>(
        &self,
        method: &Method,
        path: &str,
        build_request: F,
    ) -> Result<T, Error>
    where
        F: Fn() -> RequestBuilder,
        T: DeserializeOwned,
    {
        let mut attempt = 0;

        loop {
            tracing::debug!(%method, path, attempt, "sending request");

            let (error, retry_after) = match build_request().send().await {
                Ok(response) if response.status().is_success() => {
                    let body = response
                        .text()
                        .await
                        .map_err(|e| Error::Http(format!("Failed to read response: {e}")))?;
                    return serde_json::from_str(&body).map_err(Error::from);
                }
                Ok(response) => {
                    let status = response.status().as_u16();
                    let (error, retry_after) = parse_error_response(response).await;

                    if !self.retry_config.should_retry(status, attempt) {
                        return Err(Error::Api(error));
                    }
                    (Error::Api(error), retry_after)
                }
                Err(e) => {
                    // Network errors are retryable
                    if attempt >= self.retry_config.max_retries {
                        return Err(Error::Http(e.to_string()));
                    }
                    (Error::Http(e.to_string()), None)
                }
            };

            let wait_time = self.retry_config.backoff_time(attempt, retry_after);
            tracing::warn!(
                %method,
                path,
                attempt,
                wait_secs = wait_time,
                error = %error,
                "request failed, retrying"
            );

            tokio::time::sleep(Duration::from_secs_f64(wait_time)).await;
            attempt += 1;
        }
    }

    /// Get the base URL.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Get the retry configuration.
    #[must_use]
    pub fn retry_config(&self) -> &RetryConfig {
        &self.retry_config
    }
}

impl fmt::Debug for HttpTransport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HttpTransport")
            .field("base_url", &self.base_url)
            .field("api_key", &"<redacted>")
            .field("retry_config", &self.retry_config)
            .finish()
    }
}

/// Parse an error response into a typed error and the server's
/// Retry-After value, if it sent one.
async fn parse_error_response(response: Response) -> (ApiError, Option<u32>) {
    let status = response.status().as_u16();
    let retry_after = response
        .headers()
        .get(RETRY_AFTER)
        .and_then(|v| v.to_str().ok())
        .and_then(|s| s.trim().parse::<u32>().ok());

    let data: Value = match response.text().await {
        Ok(text) => serde_json::from_str(&text).unwrap_or(Value::Null),
        Err(_) => Value::Null,
    };

    let message = error_message(&data).unwrap_or_else(|| format!("HTTP {status}"));

    (ApiError::from_status(status, message, retry_after), retry_after)
}

/// Extract a human readable message from an error body.
///
/// Accepts `{"error": "..."}`, `{"error": {"message": "...", "code": "..."}}`
/// and `{"message": "..."}`.
fn error_message(data: &Value) -> Option<String> {
    match data.get("error") {
        Some(Value::String(s)) if !s.is_empty() => return Some(s.clone()),
        Some(obj @ Value::Object(_)) => {
            let message = obj.get("message").and_then(Value::as_str);
            let code = obj.get("code").and_then(Value::as_str);
            match (code, message) {
                (Some(c), Some(m)) => return Some(format!("{c}: {m}")),
                (None, Some(m)) => return Some(m.to_string()),
                (Some(c), None) => return Some(c.to_string()),
                (None, None) => {}
            }
        }
        _ => {}
    }

    data.get("message")
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .map(String::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_retry_config_default() {
        let config = RetryConfig::default();

        assert_eq!(config.max_retries, 3);
        assert!((config.backoff_factor - 2.0).abs() < f64::EPSILON);
        assert!(config.retry_on.contains(&429));
        assert!(config.retry_on.contains(&500));
        assert!(config.retry_on.contains(&502));
        assert!(config.retry_on.contains(&503));
    }

    #[test]
    fn test_should_retry() {
        let config = RetryConfig::default();

        assert!(config.should_retry(429, 0));
        assert!(config.should_retry(429, 1));
        assert!(config.should_retry(429, 2));
        assert!(!config.should_retry(429, 3)); // Max retries reached

        assert!(config.should_retry(500, 0));
        assert!(config.should_retry(502, 0));
        assert!(config.should_retry(503, 0));

        assert!(!config.should_retry(400, 0));
        assert!(!config.should_retry(401, 0));
        assert!(!config.should_retry(403, 0));
        assert!(!config.should_retry(404, 0));
    }

    #[test]
    fn test_disabled_never_retries() {
        let config = RetryConfig::disabled();
        assert!(!config.should_retry(503, 0));
    }

    #[test]
    fn test_backoff_time_exponential() {
        let config = RetryConfig {
            backoff_factor: 2.0,
            jitter: 0.0,
            max_backoff: 60.0,
            ..Default::default()
        };

        assert!((config.backoff_time(0, None) - 1.0).abs() < 0.01);
        assert!((config.backoff_time(1, None) - 2.0).abs() < 0.01);
        assert!((config.backoff_time(2, None) - 4.0).abs() < 0.01);
        assert!((config.backoff_time(3, None) - 8.0).abs() < 0.01);
    }

    #[test]
    fn test_backoff_time_scales_with_base_delay() {
        let config = RetryConfig {
            base_delay: 0.25,
            jitter: 0.0,
            ..Default::default()
        };

        assert!((config.backoff_time(2, None) - 1.0).abs() < 0.01);
    }

    #[test]
    fn test_backoff_time_respects_retry_after() {
        let config = RetryConfig::default();
        assert!((config.backoff_time(0, Some(30)) - 30.0).abs() < 0.01);

        let ignoring = RetryConfig {
            respect_retry_after: false,
            jitter: 0.0,
            ..Default::default()
        };
        assert!((ignoring.backoff_time(0, Some(30)) - 1.0).abs() < 0.01);
    }

    #[test]
    fn test_backoff_time_capped_at_max() {
        let config = RetryConfig {
            backoff_factor: 10.0,
            jitter: 0.0,
            max_backoff: 30.0,
            ..Default::default()
        };

        assert!((config.backoff_time(3, None) - 30.0).abs() < 0.01);
        assert!((config.backoff_time(0, Some(120)) - 30.0).abs() < 0.01);
    }

    #[test]
    fn test_backoff_time_degenerate_config_stays_finite() {
        let overflow = RetryConfig {
            base_delay: 0.0,
            backoff_factor: 1e300,
            jitter: 0.0,
            ..Default::default()
        };
        let wait = overflow.backoff_time(5, None);
        assert!(wait.is_finite());
        assert!((wait - overflow.max_backoff).abs() < f64::EPSILON);

        let nan_cap = RetryConfig {
            max_backoff: f64::NAN,
            ..Default::default()
        };
        assert!(nan_cap.backoff_time(2, None).is_finite());
        assert!(nan_cap.backoff_time(0, Some(30)).is_finite());
        assert!(Duration::try_from_secs_f64(nan_cap.backoff_time(1, None)).is_ok());

        let wild_jitter = RetryConfig {
            jitter: f64::INFINITY,
            ..Default::default()
        };
        assert!((wild_jitter.backoff_time(0, None) - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_error_message_shapes() {
        assert_eq!(
            error_message(&json!({"error": "Invalid API key"})).as_deref(),
            Some("Invalid API key")
        );
        assert_eq!(
            error_message(&json!({"error": {"code": "NOT_FOUND", "message": "No member"}}))
                .as_deref(),
            Some("NOT_FOUND: No member")
        );
        assert_eq!(
            error_message(&json!({"message": "Bad request"})).as_deref(),
            Some("Bad request")
        );
        assert_eq!(error_message(&json!({"error": ""})), None);
        assert_eq!(error_message(&Value::Null), None);
    }

    #[test]
    fn test_transport_trims_base_url_and_redacts_key() {
        let transport = HttpTransport::new(
            "https://business.awardwallet.com/api/export/v1/",
            "secret-key",
            Duration::from_secs(30),
            None,
        )
        .expect("transport creation should succeed");

        assert_eq!(
            transport.base_url(),
            "https://business.awardwallet.com/api/export/v1"
        );
        let debug = format!("{transport:?}");
        assert!(!debug.contains("secret-key"));
        assert!(debug.contains("<redacted>"));
    }

    #[test]
    fn test_transport_rejects_invalid_header_key() {
        let result = HttpTransport::new(
            "https://business.awardwallet.com/api/export/v1",
            "bad\nkey",
            Duration::from_secs(30),
            None,
        );
        assert!(matches!(result, Err(Error::Configuration(_))));
    }

    #[test]
    fn test_user_agent_carries_version() {
        assert!(DEFAULT_USER_AGENT.ends_with(env!("CARGO_PKG_VERSION")));
    }
}
