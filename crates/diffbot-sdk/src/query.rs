//! Query-string assembly.
//!
//! The service is sensitive to parameter order and to how each value is
//! rendered, so every parameter is appended explicitly with one of a few
//! encodings: percent-encoded, verbatim, numeric boolean or comma-joined list.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use std::fmt::{self, Display};

/// Bytes left unescaped: `A-Z a-z 0-9 - _ . ! ~ * ' ( )`
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Percent-encode a single query component
pub fn encode_component(value: &str) -> String {
    utf8_percent_encode(value, COMPONENT).to_string()
}

/// A count that the service also accepts as the literal `all`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Limit {
    /// A specific number
    Count(u32),
    /// Every available item
    All,
}

impl Display for Limit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Limit::Count(n) => write!(f, "{n}"),
            Limit::All => f.write_str("all"),
        }
    }
}

impl From<u32> for Limit {
    fn from(n: u32) -> Self {
        Limit::Count(n)
    }
}

/// Builder for `{endpoint}?token={token}&...` URLs
#[derive(Debug)]
pub(crate) struct Query {
    url: String,
}

impl Query {
    pub(crate) fn new(endpoint: &str, token: &str) -> Self {
        Self {
            url: format!("{endpoint}?token={token}"),
        }
    }

    /// Append a value verbatim (numbers, literal booleans, identifiers)
    pub(crate) fn raw(mut self, key: &str, value: impl Display) -> Self {
        self.url.push_str(&format!("&{key}={value}"));
        self
    }

    /// Append a percent-encoded value
    pub(crate) fn encoded(self, key: &str, value: &str) -> Self {
        self.raw(key, encode_component(value))
    }

    /// Append a boolean as `1` or `0`
    pub(crate) fn flag(self, key: &str, value: bool) -> Self {
        self.raw(key, u8::from(value))
    }

    pub(crate) fn opt_raw<T: Display>(self, key: &str, value: Option<T>) -> Self {
        match value {
            Some(v) => self.raw(key, v),
            None => self,
        }
    }

    pub(crate) fn opt_encoded(self, key: &str, value: Option<&str>) -> Self {
        match value {
            Some(v) => self.encoded(key, v),
            None => self,
        }
    }

    pub(crate) fn opt_flag(self, key: &str, value: Option<bool>) -> Self {
        match value {
            Some(v) => self.flag(key, v),
            None => self,
        }
    }

    /// Append a list joined by `,` without encoding the items
    pub(crate) fn opt_list(self, key: &str, values: Option<&[String]>) -> Self {
        match values {
            Some(v) => self.raw(key, v.join(",")),
            None => self,
        }
    }

    pub(crate) fn finish(self) -> String {
        self.url
    }
}
