//! Immutable per-client state shared by the facade and the crawl component.

use crate::call::Call;
use crate::config::ClientConfig;
use crate::error::DiffbotError;
use crate::query::Query;
use diffbot_request::{generate, Method, RequestExecutor};
use std::collections::BTreeMap;
use std::fmt;
use tracing::debug;

#[derive(Clone)]
pub(crate) struct Session {
    token: String,
    test_mode: bool,
    api_base: String,
    kg_base: String,
    executor: RequestExecutor,
}

impl Session {
    pub(crate) fn new(config: ClientConfig, executor: RequestExecutor) -> Self {
        Self {
            token: config.token,
            test_mode: config.test_mode,
            api_base: config.api_base.trim_end_matches('/').to_string(),
            kg_base: config.kg_base.trim_end_matches('/').to_string(),
            executor,
        }
    }

    pub(crate) fn with_executor(&self, executor: RequestExecutor) -> Self {
        Self {
            executor,
            ..self.clone()
        }
    }

    pub(crate) fn token(&self) -> &str {
        &self.token
    }

    pub(crate) fn test_mode(&self) -> bool {
        self.test_mode
    }

    pub(crate) fn api_base(&self) -> &str {
        &self.api_base
    }

    /// Start a query against a path on the main API host
    pub(crate) fn api(&self, path: &str) -> Query {
        Query::new(&format!("{}{}", self.api_base, path), &self.token)
    }

    /// Start a query against a path on the Knowledge Graph host
    pub(crate) fn kg(&self, path: &str) -> Query {
        Query::new(&format!("{}{}", self.kg_base, path), &self.token)
    }

    /// Build the descriptor and attach the executor unless in test mode
    pub(crate) fn dispatch(
        &self,
        url: String,
        method: Method,
        body: Option<String>,
        headers: Option<&BTreeMap<String, String>>,
    ) -> Result<Call, DiffbotError> {
        let request = generate(url, method, body, headers)?;

        debug!(
            method = %request.method(),
            endpoint = request.endpoint(),
            test_mode = self.test_mode,
            "Built request"
        );

        let executor = (!self.test_mode).then(|| self.executor.clone());
        Ok(Call::new(request, executor))
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("token", &"<redacted>")
            .field("test_mode", &self.test_mode)
            .field("api_base", &self.api_base)
            .field("kg_base", &self.kg_base)
            .finish()
    }
}
