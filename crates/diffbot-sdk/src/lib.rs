//! Diffbot Rust SDK
//!
//! Client library for the Diffbot extraction, Knowledge Graph, Crawlbot,
//! search and account APIs.
//!
//! Every method validates its options and builds the request synchronously,
//! returning a [`Call`]. Awaiting the call sends it, except in test mode where
//! the built [`RequestDescriptor`] comes back instead.
//!
//! # Example
//!
//! ```
//! use diffbot_sdk::{ArticleOptions, Diffbot, Method};
//!
//! let diffbot = Diffbot::new("T", true).unwrap();
//!
//! let request = diffbot
//!     .article(&ArticleOptions::from_body("Now is the time..."))
//!     .unwrap()
//!     .into_request();
//!
//! assert_eq!(request.url(), "https://api.diffbot.com/v3/article?token=T");
//! assert_eq!(request.method(), Method::Post);
//! assert_eq!(request.header("Content-Type"), Some("text/plain"));
//!
//! // Validation fails before any request exists
//! let err = diffbot.article(&ArticleOptions::default()).unwrap_err();
//! assert_eq!(err.to_string(), "missing url");
//! ```

#![warn(missing_docs)]

mod call;
mod client;
mod config;
mod crawl;
mod error;
mod options;
mod query;
mod session;

pub use call::{Call, Reply};
pub use client::{compact_script, Diffbot, EVALUATE_HEADER};
pub use config::{ClientConfig, ConfigError, DEFAULT_API_BASE, DEFAULT_KG_BASE};
pub use crawl::Crawlbot;
pub use error::{DiffbotError, ValidationError};
pub use options::{
    AccountOptions, AnalyzeOptions, ArticleOptions, CrawlDataOptions, CrawlOptions,
    DiscussionOptions, EventOptions, ImageOptions, KnowledgeGraphOptions, MediaOptions,
    ProductOptions, SearchOptions, VideoOptions,
};
pub use query::{encode_component, Limit};

pub use diffbot_request::{Method, RequestDescriptor, RequestError};
