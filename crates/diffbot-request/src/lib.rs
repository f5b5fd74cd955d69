//! Diffbot Request Layer
//!
//! Turns a fully-assembled endpoint URL into an immutable request descriptor,
//! and executes descriptors against the remote service.
//!
//! # Architecture
//!
//! Building and sending are deliberately separate steps:
//!
//! ```text
//! URL + method + body + headers → generate() → RequestDescriptor → RequestExecutor::exec() → JSON
//! ```
//!
//! [`generate`] is pure and never touches the network, so a descriptor can be
//! inspected (or returned to a caller in test mode) without performing I/O.
//!
//! # Examples
//!
//! ```
//! use diffbot_request::{generate, Method};
//!
//! let request = generate(
//!     "https://example.com/v3/article?token=T",
//!     Method::Post,
//!     Some("<html><body>Hi</body></html>".to_string()),
//!     None,
//! )
//! .unwrap();
//!
//! assert_eq!(request.method(), Method::Post);
//! assert_eq!(request.header("Content-Type"), Some("text/html"));
//! ```

#![warn(missing_docs)]

mod builder;
mod descriptor;
mod error;
mod executor;

pub use builder::{content_type_for, generate, CONTENT_TYPE, FORWARD_PREFIX};
pub use descriptor::{Method, RequestDescriptor};
pub use error::RequestError;
pub use executor::{exec, RequestExecutor};
