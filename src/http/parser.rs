use std::collections::HashMap;
use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

use crate::http::request::{Request, ValidationError};

/// Request line grammar: 3-6 letter method, a path starting with "/", and an
/// HTTP version of the shape digit.digit.
static REQUEST_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([A-Za-z]{3,6}) (/.*) HTTP/(\d\.\d)").unwrap());

/// Header lines are `key: value`; anything else is skipped, not an error.
static HEADER_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^(.*?):\s*(.*?)$").unwrap());

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Raw text does not match the minimal request-line grammar
    Format(String),
    /// A parsed field violates a domain invariant (bad method, URL hostname)
    Validation(ValidationError),
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::Format(raw) => {
                write!(f, "incorrectly formatted HTTP request received: {raw}")
            }
            ParseError::Validation(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for ParseError {}

impl From<ValidationError> for ParseError {
    fn from(e: ValidationError) -> Self {
        ParseError::Validation(e)
    }
}

/// Parses raw HTTP request text into a [`Request`].
///
/// The request line must match `METHOD SP PATH SP HTTP/VERSION`; any other
/// shape is a [`ParseError::Format`] and no Request is constructed. Header
/// lines that do not look like `key: value` are skipped silently. The body is
/// whatever follows the first blank line, or empty if there is none.
///
/// The hostname is the fixed "schulichignite.com" rather than the value of
/// the Host header; callers relying on the hostname get the literal.
pub fn parse_request(raw: &str) -> Result<Request, ParseError> {
    let captures = REQUEST_LINE
        .captures(raw)
        .ok_or_else(|| ParseError::Format(raw.to_string()))?;
    let method = &captures[1];
    let slug = &captures[2];

    let headers = parse_headers(raw);
    let content = parse_content(raw);

    let request = Request::new("schulichignite.com", slug, method, headers, content)?;
    Ok(request)
}

/// Collects every `key: value` line in the text into a header map.
pub fn parse_headers(raw: &str) -> HashMap<String, String> {
    HEADER_LINE
        .captures_iter(raw)
        .map(|cap| (cap[1].trim().to_string(), cap[2].trim().to_string()))
        .collect()
}

/// Extracts the body: everything after the first blank line.
pub fn parse_content(raw: &str) -> String {
    match raw.split_once("\n\n") {
        Some((_, body)) => body.trim().to_string(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::request::Method;

    #[test]
    fn parse_simple_get() {
        let raw = "GET / HTTP/1.1\nhost: example.com\naccept: */*\n";
        let parsed = parse_request(raw).unwrap();

        assert_eq!(parsed.method, Method::GET);
        assert_eq!(parsed.slug, "/");
        assert_eq!(parsed.hostname, "schulichignite.com");
    }
}
