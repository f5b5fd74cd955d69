//! Diffbot client implementation.

use crate::call::Call;
use crate::config::ClientConfig;
use crate::crawl::Crawlbot;
use crate::error::{DiffbotError, ValidationError};
use crate::options::{
    required, AccountOptions, AnalyzeOptions, ArticleOptions, DiscussionOptions, EventOptions,
    KnowledgeGraphOptions, MediaOptions, ProductOptions, SearchOptions,
};
use crate::session::Session;
use diffbot_request::{Method, RequestExecutor};
use regex::Regex;
use std::collections::BTreeMap;
use std::sync::{Arc, LazyLock};

/// Header carrying custom JavaScript for the page fetch
pub const EVALUATE_HEADER: &str = "X-Evaluate";

/// The only `jsonmode` the Knowledge Graph accepts
const JSONMODE_EXTENDED: &str = "extended";

static LINE_BREAK_INDENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\r?\n|\r)\s*").expect("line break regex"));

/// Remove every line break together with the whitespace that follows it
pub fn compact_script(script: &str) -> String {
    LINE_BREAK_INDENT.replace_all(script, "").into_owned()
}

/// Diffbot API client
///
/// Holds the token and test flag; every call is independent, so one client
/// (or its clones) can issue any number of concurrent calls.
#[derive(Debug, Clone)]
pub struct Diffbot {
    session: Arc<Session>,
    crawl: Crawlbot,
}

impl Diffbot {
    /// Create a client for the public service
    ///
    /// # Errors
    ///
    /// Returns `missing token` if `token` is empty.
    pub fn new(token: impl Into<String>, test_mode: bool) -> Result<Self, DiffbotError> {
        Self::from_config(ClientConfig::new(token).with_test_mode(test_mode))
    }

    /// Create a client from an explicit configuration
    pub fn from_config(config: ClientConfig) -> Result<Self, DiffbotError> {
        required(&config.token, "token")?;
        config.validate()?;
        Ok(Self::from_session(Session::new(config, RequestExecutor::new())))
    }

    /// Use a caller-configured HTTP client for live calls
    pub fn with_http_client(self, client: reqwest::Client) -> Self {
        let session = self
            .session
            .with_executor(RequestExecutor::with_client(client));
        Self::from_session(session)
    }

    fn from_session(session: Session) -> Self {
        let session = Arc::new(session);
        Self {
            crawl: Crawlbot::new(Arc::clone(&session)),
            session,
        }
    }

    /// The API token
    pub fn token(&self) -> &str {
        self.session.token()
    }

    /// Whether calls return descriptors instead of performing I/O
    pub fn is_test_mode(&self) -> bool {
        self.session.test_mode()
    }

    /// Crawl job management
    pub fn crawl(&self) -> &Crawlbot {
        &self.crawl
    }

    /// Analyze API: classify the page and extract it with the matching API
    pub fn analyze(&self, options: &AnalyzeOptions) -> Result<Call, DiffbotError> {
        required(&options.url, "url")?;

        let url = self
            .session
            .api("/v3/analyze")
            .encoded("url", &options.url)
            .opt_raw("mode", options.mode.as_deref())
            .opt_raw("fallback", options.fallback.as_deref())
            .opt_list("fields", options.fields.as_deref())
            .opt_raw("paging", options.paging)
            .opt_raw("discussion", options.discussion)
            .opt_raw("timeout", options.timeout)
            .opt_raw("callback", options.callback.as_deref())
            .opt_raw("proxy", options.proxy.as_deref())
            .opt_raw("proxyAuth", options.proxy_auth.as_deref())
            .finish();

        self.extract(url, options.body.as_deref(), &options.custom_headers)
    }

    /// Article API
    ///
    /// Needs either a URL or a body to submit.
    pub fn article(&self, options: &ArticleOptions) -> Result<Call, DiffbotError> {
        let url_param = options.url.as_deref().filter(|u| !u.trim().is_empty());
        let has_body = options.body.as_deref().is_some_and(|b| !b.is_empty());
        if url_param.is_none() && !has_body {
            return Err(ValidationError::Missing("url").into());
        }

        let url = self
            .session
            .api("/v3/article")
            .opt_encoded("url", url_param)
            .opt_list("fields", options.fields.as_deref())
            .opt_raw("paging", options.paging)
            .opt_raw("maxTags", options.max_tags)
            .opt_raw("tagConfidence", options.tag_confidence)
            .opt_raw("discussion", options.discussion)
            .opt_raw("timeout", options.timeout)
            .opt_raw("callback", options.callback.as_deref())
            .opt_raw("proxy", options.proxy.as_deref())
            .opt_raw("proxyAuth", options.proxy_auth.as_deref())
            .opt_list("naturalLanguage", options.natural_language.as_deref())
            .finish();

        self.extract(url, options.body.as_deref(), &options.custom_headers)
    }

    /// Discussion API: comments, reviews and forum threads
    pub fn discussion(&self, options: &DiscussionOptions) -> Result<Call, DiffbotError> {
        required(&options.url, "url")?;

        let url = self
            .session
            .api("/v3/discussion")
            .encoded("url", &options.url)
            .opt_list("fields", options.fields.as_deref())
            .opt_raw("timeout", options.timeout)
            .opt_raw("callback", options.callback.as_deref())
            .opt_raw("maxPages", options.max_pages)
            .opt_raw("proxy", options.proxy.as_deref())
            .opt_raw("proxyAuth", options.proxy_auth.as_deref())
            .finish();

        self.extract(url, options.body.as_deref(), &options.custom_headers)
    }

    /// Event API
    ///
    /// `custom_js` is compacted onto one line and forwarded as the
    /// `X-Evaluate` header.
    pub fn event(&self, options: &EventOptions) -> Result<Call, DiffbotError> {
        required(&options.url, "url")?;

        let url = self
            .session
            .api("/v3/event")
            .encoded("url", &options.url)
            .opt_list("fields", options.fields.as_deref())
            .opt_raw("timeout", options.timeout)
            .opt_raw("callback", options.callback.as_deref())
            .opt_raw("proxy", options.proxy.as_deref())
            .opt_raw("proxyAuth", options.proxy_auth.as_deref())
            .finish();

        let mut headers = options.custom_headers.clone();
        if let Some(script) = options.custom_js.as_deref().filter(|s| !s.is_empty()) {
            headers.insert(EVALUATE_HEADER.to_string(), compact_script(script));
        }

        self.extract(url, options.body.as_deref(), &headers)
    }

    /// Image API
    pub fn image(&self, options: &MediaOptions) -> Result<Call, DiffbotError> {
        self.media("/v3/image", options)
    }

    /// Product API
    pub fn product(&self, options: &ProductOptions) -> Result<Call, DiffbotError> {
        required(&options.url, "url")?;

        let url = self
            .session
            .api("/v3/product")
            .encoded("url", &options.url)
            .opt_list("fields", options.fields.as_deref())
            .opt_raw("discussion", options.discussion)
            .opt_raw("timeout", options.timeout)
            .opt_raw("callback", options.callback.as_deref())
            .opt_raw("proxy", options.proxy.as_deref())
            .opt_raw("proxyAuth", options.proxy_auth.as_deref())
            .finish();

        self.extract(url, options.body.as_deref(), &options.custom_headers)
    }

    /// Video API
    pub fn video(&self, options: &MediaOptions) -> Result<Call, DiffbotError> {
        self.media("/v3/video", options)
    }

    /// Query the Knowledge Graph with DQL
    pub fn knowledge_graph(&self, options: &KnowledgeGraphOptions) -> Result<Call, DiffbotError> {
        required(&options.query, "query")?;
        if let Some(mode) = options.jsonmode.as_deref() {
            if mode != JSONMODE_EXTENDED {
                return Err(ValidationError::Invalid("jsonmode").into());
            }
        }

        let url = self
            .session
            .kg("/kg/dql_endpoint")
            .encoded("query", &options.query)
            .opt_encoded("type", options.search_type.as_deref())
            .opt_raw("size", options.size)
            .opt_raw("from", options.from)
            .opt_encoded("jsonmode", options.jsonmode.as_deref())
            .opt_flag("nonCanonicalFacts", options.non_canonical_facts)
            .opt_flag("noDedupArticles", options.no_dedup_articles)
            .finish();

        self.session.dispatch(url, Method::Get, None, None)
    }

    /// Search the results of a crawl job
    pub fn search(&self, options: &SearchOptions) -> Result<Call, DiffbotError> {
        required(&options.name, "name")?;
        required(&options.query, "query")?;

        let url = self
            .session
            .api("/v3/search")
            .encoded("col", &options.name)
            .encoded("query", &options.query)
            .opt_raw("num", options.num)
            .opt_raw("start", options.start)
            .finish();

        self.session.dispatch(url, Method::Post, None, None)
    }

    /// Account API: plan, usage and optionally invoices
    pub fn account(&self, options: &AccountOptions) -> Result<Call, DiffbotError> {
        let url = self
            .session
            .api("/v4/account")
            .opt_raw("days", options.days)
            .opt_raw("invoices", options.invoices)
            .finish();

        self.session.dispatch(url, Method::Get, None, None)
    }

    fn media(&self, path: &str, options: &MediaOptions) -> Result<Call, DiffbotError> {
        required(&options.url, "url")?;

        let url = self
            .session
            .api(path)
            .encoded("url", &options.url)
            .opt_list("fields", options.fields.as_deref())
            .opt_raw("timeout", options.timeout)
            .opt_raw("callback", options.callback.as_deref())
            .opt_raw("proxy", options.proxy.as_deref())
            .opt_raw("proxyAuth", options.proxy_auth.as_deref())
            .finish();

        self.extract(url, options.body.as_deref(), &options.custom_headers)
    }

    /// Extraction calls POST when a body is submitted and GET otherwise
    fn extract(
        &self,
        url: String,
        body: Option<&str>,
        headers: &BTreeMap<String, String>,
    ) -> Result<Call, DiffbotError> {
        let body = body.filter(|b| !b.is_empty()).map(str::to_owned);
        let method = if body.is_some() { Method::Post } else { Method::Get };
        let headers = (!headers.is_empty()).then_some(headers);

        self.session.dispatch(url, method, body, headers)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compact_script_strips_line_breaks_and_indent() {
        let script = "function() {\n  start();\r\n    end();\n  }";
        assert_eq!(compact_script(script), "function() {start();end();}");
    }

    #[test]
    fn test_compact_script_strips_unindented_breaks() {
        assert_eq!(compact_script("a;\nb;"), "a;b;");
        assert_eq!(compact_script("a;\r\rb;\r\n"), "a;b;");

        let script = "function() {\n  start();\n  setTimeout(function() {\n    end();\n  }, 500);\n}";
        let compacted = compact_script(script);
        assert_eq!(compacted, "function() {start();setTimeout(function() {end();}, 500);}");
        assert!(!compacted.contains(['\n', '\r']));
    }

    #[test]
    fn test_empty_token_is_rejected() {
        let err = Diffbot::new("", true).unwrap_err();
        assert!(err.is_validation());
        assert_eq!(err.to_string(), "missing token");
    }

    #[test]
    fn test_token_with_spaces_is_rejected() {
        let err = Diffbot::new("abc def", true).unwrap_err();
        assert!(matches!(err, DiffbotError::Config(_)));
        assert!(Diffbot::new(" abc\n", true).is_ok());
    }

    #[test]
    fn test_crawl_shares_session() {
        let diffbot = Diffbot::new("T", true).unwrap();
        assert!(Arc::ptr_eq(&diffbot.session, diffbot.crawl().session()));
    }

    #[test]
    fn test_http_client_keeps_settings() {
        let diffbot = Diffbot::new("T", true)
            .unwrap()
            .with_http_client(reqwest::Client::new());
        assert_eq!(diffbot.token(), "T");
        assert!(diffbot.is_test_mode());
        assert!(Arc::ptr_eq(&diffbot.session, diffbot.crawl().session()));
    }
}
