//! Request Executor
//!
//! Sends a [`RequestDescriptor`] over HTTP and parses the JSON response.
//!
//! # Behavior
//!
//! - Exactly one HTTP request per call, no retries
//! - Non-2xx responses become [`RequestError::HttpStatus`] with the body attached
//! - Timeouts are whatever the underlying `reqwest::Client` is configured with
//!
//! # Examples
//!
//! ```no_run
//! use diffbot_request::{generate, Method, RequestExecutor};
//!
//! # async fn example() -> Result<(), diffbot_request::RequestError> {
//! let executor = RequestExecutor::new();
//! let request = generate("https://jsonplaceholder.typicode.com/posts/1", Method::Get, None, None)?;
//! let json = executor.exec(&request).await?;
//! assert_eq!(json["id"], 1);
//! # Ok(())
//! # }
//! ```

use crate::descriptor::RequestDescriptor;
use crate::error::RequestError;
use serde_json::Value;
use tracing::{debug, warn};

/// Executes request descriptors with a shared HTTP client.
///
/// Cloning is cheap; clones share the same connection pool.
#[derive(Debug, Clone, Default)]
pub struct RequestExecutor {
    client: reqwest::Client,
}

impl RequestExecutor {
    /// Create an executor with a default `reqwest::Client`
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an executor around a caller-configured client (timeouts, proxies, TLS)
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }

    /// Perform the request and parse the response body as JSON
    ///
    /// # Errors
    ///
    /// - [`RequestError::Transport`] if the service cannot be reached or the body cannot be read
    /// - [`RequestError::HttpStatus`] if the service returns a non-2xx status
    /// - [`RequestError::Parse`] if the body is not valid JSON
    pub async fn exec(&self, request: &RequestDescriptor) -> Result<Value, RequestError> {
        let mut builder = self
            .client
            .request(request.method().into(), request.url());

        for (name, value) in request.headers() {
            builder = builder.header(name.as_str(), value.as_str());
        }

        if let Some(body) = request.body() {
            builder = builder.body(body.to_owned());
        }

        debug!(
            method = %request.method(),
            endpoint = request.endpoint(),
            "Sending request"
        );

        let response = builder.send().await?;
        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            warn!(
                status = status.as_u16(),
                endpoint = request.endpoint(),
                "Service returned an error status"
            );
            return Err(RequestError::HttpStatus {
                status: status.as_u16(),
                body: text,
            });
        }

        debug!(status = status.as_u16(), bytes = text.len(), "Received response");

        Ok(serde_json::from_str(&text)?)
    }
}

/// Execute a single request with a fresh default client.
///
/// Prefer a long-lived [`RequestExecutor`] when issuing many requests.
pub async fn exec(request: &RequestDescriptor) -> Result<Value, RequestError> {
    RequestExecutor::new().exec(request).await
}
