//! Crawl job management.
//!
//! A crawl job's lifecycle (created, running, paused, completed, deleted) is
//! owned by the service. These calls only request transitions or read status;
//! none of them assume a transition succeeded before the response arrives.

use crate::call::Call;
use crate::error::{DiffbotError, ValidationError};
use crate::options::{required, CrawlDataOptions, CrawlOptions};
use crate::session::Session;
use diffbot_request::Method;
use std::sync::Arc;

const DATA_FORMATS: [&str; 2] = ["csv", "json"];
const URL_REPORT: &str = "urls";

/// Crawl job operations, owned by a [`Diffbot`](crate::Diffbot) client
///
/// ```
/// use diffbot_sdk::{CrawlOptions, Diffbot};
///
/// let diffbot = Diffbot::new("T", true).unwrap();
/// let call = diffbot
///     .crawl()
///     .create(&CrawlOptions::new("news", ["https://blog.example.com"]))
///     .unwrap();
/// assert!(call.request().url().contains("&name=news"));
/// ```
#[derive(Debug, Clone)]
pub struct Crawlbot {
    session: Arc<Session>,
}

impl Crawlbot {
    pub(crate) fn new(session: Arc<Session>) -> Self {
        Self { session }
    }

    #[cfg(test)]
    pub(crate) fn session(&self) -> &Arc<Session> {
        &self.session
    }

    /// Create a crawl job
    ///
    /// Seeds are trimmed and sent space-separated, skipping blank entries.
    /// Without `api_url`, pages are processed by the Analyze API in automatic
    /// mode.
    pub fn create(&self, options: &CrawlOptions) -> Result<Call, DiffbotError> {
        required(&options.name, "name")?;
        let seeds: Vec<&str> = options
            .seeds
            .iter()
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
            .collect();
        if seeds.is_empty() {
            return Err(ValidationError::Missing("seeds").into());
        }

        let default_api_url = format!("{}/v3/analyze?mode=auto", self.session.api_base());
        let api_url = options.api_url.as_deref().unwrap_or(&default_api_url);

        let url = self
            .session
            .api("/v3/crawl")
            .encoded("name", &options.name)
            .encoded("seeds", &seeds.join(" "))
            .encoded("apiUrl", api_url)
            .opt_encoded("urlCrawlPattern", options.url_crawl_pattern.as_deref())
            .opt_encoded("urlCrawlRegEx", options.url_crawl_reg_ex.as_deref())
            .opt_encoded("urlProcessPattern", options.url_process_pattern.as_deref())
            .opt_encoded("urlProcessRegEx", options.url_process_reg_ex.as_deref())
            .opt_encoded("pageProcessPattern", options.page_process_pattern.as_deref())
            .opt_flag("useCanonical", options.use_canonical)
            .opt_flag("obeyRobots", options.obey_robots)
            .opt_flag("restrictDomain", options.restrict_domain)
            .opt_flag("useProxies", options.use_proxies)
            .opt_raw("maxHops", options.max_hops)
            .opt_raw("maxToCrawl", options.max_to_crawl)
            .opt_raw("maxToProcess", options.max_to_process)
            .opt_raw("maxToCrawlPerSubdomain", options.max_to_crawl_per_subdomain)
            .opt_raw("maxToProcessPerSubdomain", options.max_to_process_per_subdomain)
            .opt_encoded("notifyEmail", options.notify_email.as_deref())
            .opt_encoded("notifyWebhook", options.notify_webhook.as_deref())
            .opt_raw("crawlDelay", options.crawl_delay)
            .opt_raw("repeat", options.repeat)
            .opt_raw("seedRecrawlFrequency", options.seed_recrawl_frequency)
            .opt_flag("onlyProcessIfNew", options.only_process_if_new)
            .opt_raw("maxRounds", options.max_rounds)
            .finish();

        self.session.dispatch(url, Method::Post, None, None)
    }

    /// Download a crawl job's extracted data or URL report
    pub fn get(&self, options: &CrawlDataOptions) -> Result<Call, DiffbotError> {
        required(&options.name, "name")?;
        if let Some(format) = options.format.as_deref() {
            if !DATA_FORMATS.contains(&format) {
                return Err(ValidationError::Invalid("format").into());
            }
        }
        if let Some(report) = options.report_type.as_deref() {
            if report != URL_REPORT {
                return Err(ValidationError::Invalid("type").into());
            }
        }

        let url = self
            .session
            .api("/v3/crawl/data")
            .encoded("name", &options.name)
            .opt_encoded("format", options.format.as_deref())
            .opt_encoded("type", options.report_type.as_deref())
            .opt_raw("num", options.num)
            .finish();

        self.session.dispatch(url, Method::Get, None, None)
    }

    /// Pause a running crawl job
    pub fn pause(&self, name: &str) -> Result<Call, DiffbotError> {
        self.control(name, "pause", 1)
    }

    /// Resume a paused crawl job
    pub fn resume(&self, name: &str) -> Result<Call, DiffbotError> {
        self.control(name, "pause", 0)
    }

    /// Restart a crawl job, removing crawled data but keeping its settings
    pub fn restart(&self, name: &str) -> Result<Call, DiffbotError> {
        self.control(name, "restart", 1)
    }

    /// Delete a crawl job and its data
    pub fn delete(&self, name: &str) -> Result<Call, DiffbotError> {
        self.control(name, "delete", 1)
    }

    /// Details of one job, or of every job on the token when `name` is `None`
    pub fn details(&self, name: Option<&str>) -> Result<Call, DiffbotError> {
        let url = self
            .session
            .api("/v3/crawl")
            .opt_encoded("name", name.filter(|n| !n.trim().is_empty()))
            .finish();

        self.session.dispatch(url, Method::Get, None, None)
    }

    fn control(&self, name: &str, action: &str, value: u8) -> Result<Call, DiffbotError> {
        required(name, "name")?;

        let url = self
            .session
            .api("/v3/crawl")
            .encoded("name", name)
            .raw(action, value)
            .finish();

        self.session.dispatch(url, Method::Post, None, None)
    }
}
