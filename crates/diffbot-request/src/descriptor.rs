//! The request descriptor: a fully-specified HTTP request that has not been sent.

use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

/// HTTP method used by the remote service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Method {
    /// Read-only calls without a body
    #[default]
    Get,
    /// Calls that submit a body or change remote state
    Post,
}

impl Method {
    /// Wire name of the method
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<Method> for reqwest::Method {
    fn from(method: Method) -> Self {
        match method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
        }
    }
}

/// An immutable, not-yet-executed HTTP request.
///
/// Descriptors are only produced by [`generate`](crate::generate), which
/// guarantees that `Content-Type` is present exactly when a body is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RequestDescriptor {
    pub(crate) url: String,
    pub(crate) method: Method,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) body: Option<String>,
    pub(crate) headers: BTreeMap<String, String>,
}

impl RequestDescriptor {
    /// Absolute URL including the query string
    pub fn url(&self) -> &str {
        &self.url
    }

    /// URL without its query string.
    ///
    /// The query string carries the API token, so this is what gets logged.
    pub fn endpoint(&self) -> &str {
        self.url.split('?').next().unwrap_or(&self.url)
    }

    /// HTTP method
    pub fn method(&self) -> Method {
        self.method
    }

    /// Request body, if any
    pub fn body(&self) -> Option<&str> {
        self.body.as_deref()
    }

    /// All request headers (possibly empty)
    pub fn headers(&self) -> &BTreeMap<String, String> {
        &self.headers
    }

    /// Look up a single header by its exact name
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_method_wire_names() {
        assert_eq!(Method::Get.to_string(), "GET");
        assert_eq!(Method::Post.as_str(), "POST");
        assert_eq!(Method::default(), Method::Get);
    }

    #[test]
    fn test_endpoint_strips_query() {
        let request = RequestDescriptor {
            url: "https://api.diffbot.com/v3/article?token=secret&url=x".to_string(),
            method: Method::Get,
            body: None,
            headers: BTreeMap::new(),
        };
        assert_eq!(request.endpoint(), "https://api.diffbot.com/v3/article");
    }

    #[test]
    fn test_serialize_omits_missing_body() {
        let request = RequestDescriptor {
            url: "https://example.com".to_string(),
            method: Method::Post,
            body: None,
            headers: BTreeMap::new(),
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["method"], "POST");
        assert!(json.get("body").is_none());
        assert!(json["headers"].as_object().unwrap().is_empty());
    }
}
