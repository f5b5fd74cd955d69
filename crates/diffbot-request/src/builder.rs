//! Request Builder
//!
//! Pure construction of [`RequestDescriptor`]s. No network or disk I/O.

use crate::descriptor::{Method, RequestDescriptor};
use crate::error::RequestError;
use reqwest::header::{HeaderName, HeaderValue};
use std::collections::BTreeMap;

/// Prefix applied to caller-supplied headers so the service's fetch proxy can
/// tell them apart from its own.
pub const FORWARD_PREFIX: &str = "X-Forward-";

/// Name of the content type header set for bodies
pub const CONTENT_TYPE: &str = "Content-Type";

/// Content type the service expects for a submitted body.
///
/// Markup is recognized by its first non-whitespace character being `<`.
pub fn content_type_for(body: &str) -> &'static str {
    if body.trim_start().starts_with('<') {
        "text/html"
    } else {
        "text/plain"
    }
}

/// Build a request descriptor.
///
/// # Parameters
///
/// - `url`: absolute URL with every query parameter already encoded
/// - `method`: HTTP method
/// - `body`: optional HTML markup or plain text; an empty string counts as no body
/// - `custom_headers`: optional headers, each forwarded as `X-Forward-{name}`
///
/// # Errors
///
/// Returns [`RequestError::InvalidArgument`] if `url` is empty or a forwarded
/// header name or value could not be sent over HTTP.
///
/// # Examples
///
/// ```
/// use diffbot_request::{generate, Method};
/// use std::collections::BTreeMap;
///
/// let headers = BTreeMap::from([("User-Agent".to_string(), "Diffbot".to_string())]);
/// let request = generate("https://example.com", Method::Get, None, Some(&headers)).unwrap();
///
/// assert_eq!(request.header("X-Forward-User-Agent"), Some("Diffbot"));
/// assert!(request.header("Content-Type").is_none());
/// ```
pub fn generate(
    url: impl Into<String>,
    method: Method,
    body: Option<String>,
    custom_headers: Option<&BTreeMap<String, String>>,
) -> Result<RequestDescriptor, RequestError> {
    let url = url.into();
    if url.trim().is_empty() {
        return Err(RequestError::InvalidArgument("missing url".to_string()));
    }

    let mut headers = BTreeMap::new();
    for (name, value) in custom_headers.into_iter().flatten() {
        let name = format!("{FORWARD_PREFIX}{name}");
        if HeaderName::from_bytes(name.as_bytes()).is_err() {
            return Err(RequestError::InvalidArgument(format!(
                "invalid header name: {}",
                &name[FORWARD_PREFIX.len()..]
            )));
        }
        if HeaderValue::from_str(value).is_err() {
            return Err(RequestError::InvalidArgument(format!(
                "invalid header value for {}",
                &name[FORWARD_PREFIX.len()..]
            )));
        }
        headers.insert(name, value.clone());
    }

    let body = body.filter(|b| !b.is_empty());
    if let Some(body) = &body {
        headers.insert(CONTENT_TYPE.to_string(), content_type_for(body).to_string());
    }

    Ok(RequestDescriptor {
        url,
        method,
        body,
        headers,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const URL: &str = "https://example.com";

    #[test]
    fn test_generate_html_post() {
        let body = "<html><body><p>Test</p></body></html>";
        let request = generate(URL, Method::Post, Some(body.to_string()), None).unwrap();

        assert_eq!(request.url(), URL);
        assert_eq!(request.method(), Method::Post);
        assert_eq!(request.body(), Some(body));
        assert_eq!(request.header(CONTENT_TYPE), Some("text/html"));
        assert_eq!(request.headers().len(), 1);
    }

    #[test]
    fn test_generate_plaintext_post() {
        let body = "This is a test";
        let request = generate(URL, Method::Post, Some(body.to_string()), None).unwrap();

        assert_eq!(request.body(), Some(body));
        assert_eq!(request.header(CONTENT_TYPE), Some("text/plain"));
    }

    #[test]
    fn test_generate_get_has_no_headers() {
        let request = generate(URL, Method::Get, None, None).unwrap();

        assert_eq!(request.method(), Method::Get);
        assert!(request.body().is_none());
        assert!(request.headers().is_empty());
    }

    #[test]
    fn test_leading_whitespace_before_markup() {
        assert_eq!(content_type_for("\n   <div>hi</div>"), "text/html");
        assert_eq!(content_type_for("a < b"), "text/plain");
    }

    #[test]
    fn test_empty_body_is_absent() {
        let request = generate(URL, Method::Get, Some(String::new()), None).unwrap();
        assert!(request.body().is_none());
        assert!(request.header(CONTENT_TYPE).is_none());
    }

    #[test]
    fn test_custom_headers_are_forwarded() {
        let custom = BTreeMap::from([
            ("User-Agent".to_string(), "Diffbot".to_string()),
            ("X-Evaluate".to_string(), "start();end();".to_string()),
        ]);
        let request = generate(URL, Method::Get, None, Some(&custom)).unwrap();

        assert_eq!(request.header("X-Forward-User-Agent"), Some("Diffbot"));
        assert_eq!(request.header("X-Forward-X-Evaluate"), Some("start();end();"));
        assert!(request.header("User-Agent").is_none());
        assert_eq!(request.headers().len(), 2);
    }

    #[test]
    fn test_content_type_alongside_forwarded_headers() {
        let custom = BTreeMap::from([("Content-Type".to_string(), "application/json".to_string())]);
        let request =
            generate(URL, Method::Post, Some("plain".to_string()), Some(&custom)).unwrap();

        assert_eq!(request.header(CONTENT_TYPE), Some("text/plain"));
        assert_eq!(request.header("X-Forward-Content-Type"), Some("application/json"));
    }

    #[test]
    fn test_invalid_header_name_is_rejected() {
        let custom = BTreeMap::from([("Bad Header".to_string(), "v".to_string())]);
        let result = generate(URL, Method::Get, None, Some(&custom));

        match result {
            Err(RequestError::InvalidArgument(msg)) => {
                assert_eq!(msg, "invalid header name: Bad Header")
            }
            other => panic!("Expected InvalidArgument, got {:?}", other),
        }
    }

    #[test]
    fn test_invalid_header_value_is_rejected() {
        let custom = BTreeMap::from([("X-Evaluate".to_string(), "start();\nend();".to_string())]);
        let result = generate(URL, Method::Get, None, Some(&custom));

        match result {
            Err(RequestError::InvalidArgument(msg)) => {
                assert_eq!(msg, "invalid header value for X-Evaluate")
            }
            other => panic!("Expected InvalidArgument, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_url_is_rejected() {
        let result = generate("", Method::Get, None, None);
        assert!(matches!(result, Err(RequestError::InvalidArgument(_))));
    }
}
