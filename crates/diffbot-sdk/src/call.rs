//! A validated, built request waiting to be sent.

use crate::error::DiffbotError;
use diffbot_request::{RequestDescriptor, RequestExecutor};
use serde_json::Value;
use std::future::{Future, IntoFuture};
use std::pin::Pin;

/// Result of awaiting a [`Call`]
#[derive(Debug, Clone, PartialEq)]
pub enum Reply {
    /// Test mode: the request that would have been sent
    Prepared(RequestDescriptor),
    /// Live mode: the parsed JSON response
    Json(Value),
}

impl Reply {
    /// The prepared request, in test mode
    pub fn request(&self) -> Option<&RequestDescriptor> {
        match self {
            Reply::Prepared(request) => Some(request),
            Reply::Json(_) => None,
        }
    }

    /// Consume into the prepared request, in test mode
    pub fn into_request(self) -> Option<RequestDescriptor> {
        match self {
            Reply::Prepared(request) => Some(request),
            Reply::Json(_) => None,
        }
    }

    /// The response body, in live mode
    pub fn json(&self) -> Option<&Value> {
        match self {
            Reply::Json(value) => Some(value),
            Reply::Prepared(_) => None,
        }
    }

    /// Consume into the response body, in live mode
    pub fn into_json(self) -> Option<Value> {
        match self {
            Reply::Json(value) => Some(value),
            Reply::Prepared(_) => None,
        }
    }
}

/// A request that passed validation.
///
/// Facade methods return a `Call` synchronously, so option errors never reach
/// the async path. Awaiting it performs the HTTP request (live mode) or hands
/// the descriptor back (test mode).
///
/// ```no_run
/// use diffbot_sdk::{Diffbot, ProductOptions};
///
/// # async fn example() -> Result<(), diffbot_sdk::DiffbotError> {
/// let diffbot = Diffbot::new("token", false)?;
/// let call = diffbot.product(&ProductOptions::new("https://shop.example.com/item"))?;
/// println!("GET {}", call.request().endpoint());
/// let reply = call.await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
#[must_use = "a Call does nothing until it is awaited"]
pub struct Call {
    request: RequestDescriptor,
    executor: Option<RequestExecutor>,
}

impl Call {
    pub(crate) fn new(request: RequestDescriptor, executor: Option<RequestExecutor>) -> Self {
        Self { request, executor }
    }

    /// The request this call will send
    pub fn request(&self) -> &RequestDescriptor {
        &self.request
    }

    /// Take the request without sending it
    pub fn into_request(self) -> RequestDescriptor {
        self.request
    }

    /// Whether awaiting returns the descriptor instead of performing I/O
    pub fn is_test(&self) -> bool {
        self.executor.is_none()
    }

    /// Send the request, or return it unchanged in test mode
    pub async fn send(self) -> Result<Reply, DiffbotError> {
        match self.executor {
            None => Ok(Reply::Prepared(self.request)),
            Some(executor) => {
                let json = executor.exec(&self.request).await?;
                Ok(Reply::Json(json))
            }
        }
    }
}

impl IntoFuture for Call {
    type Output = Result<Reply, DiffbotError>;
    type IntoFuture = Pin<Box<dyn Future<Output = Self::Output> + Send>>;

    fn into_future(self) -> Self::IntoFuture {
        Box::pin(self.send())
    }
}
