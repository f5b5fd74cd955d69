//! Option sets, one per capability.
//!
//! Required fields are plain values set through `new`; everything else is
//! `None` by default and only sent when set. `Some(false)` and `Some(0)` are
//! sent like any other value.

use crate::error::ValidationError;
use crate::query::Limit;
use std::collections::BTreeMap;

/// Reject an empty required field
pub(crate) fn required(value: &str, field: &'static str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::Missing(field));
    }
    Ok(())
}

/// Options for the Analyze API, which detects the page type and extracts accordingly
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AnalyzeOptions {
    /// Web page URL to process
    pub url: String,
    /// Restrict full extraction to one page type, e.g. `article`
    pub mode: Option<String>,
    /// API to route pages of type "other" through
    pub fallback: Option<String>,
    /// Optional fields to return from fully-extracted pages
    pub fields: Option<Vec<String>>,
    /// `false` disables concatenation of multi-page articles
    pub paging: Option<bool>,
    /// `false` disables comment and review extraction
    pub discussion: Option<bool>,
    /// Milliseconds the service waits when fetching the page
    pub timeout: Option<u64>,
    /// JSONP callback name
    pub callback: Option<String>,
    /// Custom proxy IP used to fetch the page
    pub proxy: Option<String>,
    /// Credentials for `proxy`, as `username:password`
    pub proxy_auth: Option<String>,
    /// HTML markup or plain text to submit instead of fetching `url`
    pub body: Option<String>,
    /// Headers forwarded to the page fetch
    pub custom_headers: BTreeMap<String, String>,
}

impl AnalyzeOptions {
    /// Options for `url` with every optional field unset
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Default::default()
        }
    }
}

/// Options for the Article API.
///
/// Either `url` or `body` must be present.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ArticleOptions {
    /// Web page URL to process; optional when posting plain text
    pub url: Option<String>,
    /// Optional fields to return
    pub fields: Option<Vec<String>>,
    /// `false` disables concatenation of multi-page articles
    pub paging: Option<bool>,
    /// Maximum number of generated tags (service default: 10)
    pub max_tags: Option<u32>,
    /// Minimum tag relevance score between 0.0 and 1.0 (service default: 0.5)
    pub tag_confidence: Option<f64>,
    /// `false` disables comment extraction
    pub discussion: Option<bool>,
    /// Milliseconds the service waits when fetching the page
    pub timeout: Option<u64>,
    /// JSONP callback name
    pub callback: Option<String>,
    /// Custom proxy IP used to fetch the page
    pub proxy: Option<String>,
    /// Credentials for `proxy`
    pub proxy_auth: Option<String>,
    /// Natural Language API outputs, e.g. `entities`, `sentiment`
    pub natural_language: Option<Vec<String>>,
    /// HTML markup or plain text to submit
    pub body: Option<String>,
    /// Headers forwarded to the page fetch
    pub custom_headers: BTreeMap<String, String>,
}

impl ArticleOptions {
    /// Options for a page URL
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: Some(url.into()),
            ..Default::default()
        }
    }

    /// Options for submitted text or markup with no source URL
    pub fn from_body(body: impl Into<String>) -> Self {
        Self {
            body: Some(body.into()),
            ..Default::default()
        }
    }
}

/// Options for the Discussion API
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DiscussionOptions {
    /// Web page URL to process
    pub url: String,
    /// Optional fields to return
    pub fields: Option<Vec<String>>,
    /// Milliseconds the service waits when fetching the page
    pub timeout: Option<u64>,
    /// JSONP callback name
    pub callback: Option<String>,
    /// Thread pages to concatenate; each page counts as a separate call
    pub max_pages: Option<Limit>,
    /// Custom proxy IP used to fetch the page
    pub proxy: Option<String>,
    /// Credentials for `proxy`
    pub proxy_auth: Option<String>,
    /// HTML markup or plain text to submit
    pub body: Option<String>,
    /// Headers forwarded to the page fetch
    pub custom_headers: BTreeMap<String, String>,
}

impl DiscussionOptions {
    /// Options for `url` with every optional field unset
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Default::default()
        }
    }
}

/// Options for the Event API
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EventOptions {
    /// Web page URL to process
    pub url: String,
    /// Optional fields to return
    pub fields: Option<Vec<String>>,
    /// Milliseconds the service waits when fetching the page
    pub timeout: Option<u64>,
    /// JSONP callback name
    pub callback: Option<String>,
    /// Custom proxy IP used to fetch the page
    pub proxy: Option<String>,
    /// Credentials for `proxy`
    pub proxy_auth: Option<String>,
    /// HTML markup or plain text to submit
    pub body: Option<String>,
    /// JavaScript evaluated on the page before extraction (beta)
    pub custom_js: Option<String>,
    /// Headers forwarded to the page fetch
    pub custom_headers: BTreeMap<String, String>,
}

impl EventOptions {
    /// Options for `url` with every optional field unset
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Default::default()
        }
    }
}

/// Options shared by the Image and Video APIs
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MediaOptions {
    /// Web page URL to process
    pub url: String,
    /// Optional fields to return
    pub fields: Option<Vec<String>>,
    /// Milliseconds the service waits when fetching the page
    pub timeout: Option<u64>,
    /// JSONP callback name
    pub callback: Option<String>,
    /// Custom proxy IP used to fetch the page
    pub proxy: Option<String>,
    /// Credentials for `proxy`
    pub proxy_auth: Option<String>,
    /// HTML markup or plain text to submit
    pub body: Option<String>,
    /// Headers forwarded to the page fetch
    pub custom_headers: BTreeMap<String, String>,
}

impl MediaOptions {
    /// Options for `url` with every optional field unset
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Default::default()
        }
    }
}

/// Options for the Image API
pub type ImageOptions = MediaOptions;

/// Options for the Video API
pub type VideoOptions = MediaOptions;

/// Options for the Product API
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductOptions {
    /// Web page URL to process
    pub url: String,
    /// Optional fields to return
    pub fields: Option<Vec<String>>,
    /// `false` disables review extraction
    pub discussion: Option<bool>,
    /// Milliseconds the service waits when fetching the page
    pub timeout: Option<u64>,
    /// JSONP callback name
    pub callback: Option<String>,
    /// Custom proxy IP used to fetch the page
    pub proxy: Option<String>,
    /// Credentials for `proxy`
    pub proxy_auth: Option<String>,
    /// HTML markup or plain text to submit
    pub body: Option<String>,
    /// Headers forwarded to the page fetch
    pub custom_headers: BTreeMap<String, String>,
}

impl ProductOptions {
    /// Options for `url` with every optional field unset
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Default::default()
        }
    }
}

/// Options for a Knowledge Graph DQL query
#[derive(Debug, Clone, Default, PartialEq)]
pub struct KnowledgeGraphOptions {
    /// The DQL query
    pub query: String,
    /// Search type: `query`, `text` or `queryTextFallback`
    pub search_type: Option<String>,
    /// Maximum results per page
    pub size: Option<u32>,
    /// Position of the first result (0-based)
    pub from: Option<u32>,
    /// Only `extended` is accepted; returns fact origins
    pub jsonmode: Option<String>,
    /// Include non-canonical facts
    pub non_canonical_facts: Option<bool>,
    /// Return every article instead of deduplicating
    pub no_dedup_articles: Option<bool>,
}

impl KnowledgeGraphOptions {
    /// Options for `query` with every optional field unset
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            ..Default::default()
        }
    }
}

/// Options for creating a crawl job
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CrawlOptions {
    /// Unique job name, used to modify the crawl or fetch its output
    pub name: String,
    /// Seed URLs; a non-www subdomain restricts spidering to that subdomain
    pub seeds: Vec<String>,
    /// Extraction API URL used to process pages (default: Analyze in auto mode)
    pub api_url: Option<String>,
    /// `||`-separated substrings limiting which URLs are crawled
    pub url_crawl_pattern: Option<String>,
    /// Regex limiting which URLs are crawled; overrides `url_crawl_pattern`
    pub url_crawl_reg_ex: Option<String>,
    /// `||`-separated substrings limiting which URLs are processed
    pub url_process_pattern: Option<String>,
    /// Regex limiting which URLs are processed; overrides `url_process_pattern`
    pub url_process_reg_ex: Option<String>,
    /// `||`-separated substrings the page HTML must contain to be processed
    pub page_process_pattern: Option<String>,
    /// `false` disables canonical-link deduplication
    pub use_canonical: Option<bool>,
    /// `false` ignores robots.txt
    pub obey_robots: Option<bool>,
    /// `false` allows limited crawling across domains
    pub restrict_domain: Option<bool>,
    /// `true` forces proxy IPs for crawling and processing
    pub use_proxies: Option<bool>,
    /// Crawl depth; `-1` is unlimited
    pub max_hops: Option<i64>,
    /// Maximum pages to spider
    pub max_to_crawl: Option<i64>,
    /// Maximum pages to process
    pub max_to_process: Option<i64>,
    /// Maximum pages to spider per subdomain
    pub max_to_crawl_per_subdomain: Option<i64>,
    /// Maximum pages to process per subdomain
    pub max_to_process_per_subdomain: Option<i64>,
    /// Address notified when the crawl completes or hits a limit
    pub notify_email: Option<String>,
    /// URL that receives a POST when the crawl completes or hits a limit
    pub notify_webhook: Option<String>,
    /// Seconds between requests from one IP
    pub crawl_delay: Option<f64>,
    /// Days between repeat crawls
    pub repeat: Option<f64>,
    /// Days between seed recrawls, independent of `repeat`
    pub seed_recrawl_frequency: Option<f64>,
    /// `false` reprocesses all pages on repeat crawls
    pub only_process_if_new: Option<bool>,
    /// Maximum number of repeats; `0` repeats indefinitely
    pub max_rounds: Option<i64>,
}

impl CrawlOptions {
    /// Options for a job with the given seeds and every optional field unset
    pub fn new<I, S>(name: impl Into<String>, seeds: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            seeds: seeds.into_iter().map(Into::into).collect(),
            ..Default::default()
        }
    }
}

/// Options for downloading a crawl job's data
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CrawlDataOptions {
    /// Name of the crawl
    pub name: String,
    /// `json` (default) or `csv`
    pub format: Option<String>,
    /// `urls` to download the URL report
    pub report_type: Option<String>,
    /// Number of most recently crawled URLs to return
    pub num: Option<u32>,
}

impl CrawlDataOptions {
    /// Options for `name` with every optional field unset
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }
}

/// Options for searching a crawl job's results
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchOptions {
    /// Name of the crawl (collection) to search
    pub name: String,
    /// Search query
    pub query: String,
    /// Number of results (service default: 20)
    pub num: Option<Limit>,
    /// Position of the first result (0-based)
    pub start: Option<u32>,
}

impl SearchOptions {
    /// Options for `query` against collection `name`
    pub fn new(name: impl Into<String>, query: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            query: query.into(),
            ..Default::default()
        }
    }
}

/// Options for the Account API
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AccountOptions {
    /// Days of call volume to return (service default: 31)
    pub days: Option<u32>,
    /// Include invoice and payment history
    pub invoices: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_rejects_blank() {
        assert_eq!(required("", "url"), Err(ValidationError::Missing("url")));
        assert_eq!(required("  ", "name"), Err(ValidationError::Missing("name")));
        assert!(required("x", "url").is_ok());
    }

    #[test]
    fn test_crawl_options_collects_seeds() {
        let options = CrawlOptions::new("job", ["https://a.com", "https://b.com"]);
        assert_eq!(options.seeds.len(), 2);
        assert!(options.max_hops.is_none());
    }

    #[test]
    fn test_article_constructors() {
        assert_eq!(ArticleOptions::new("u").url.as_deref(), Some("u"));
        let from_body = ArticleOptions::from_body("text");
        assert!(from_body.url.is_none());
        assert_eq!(from_body.body.as_deref(), Some("text"));
    }
}
