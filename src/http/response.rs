use std::collections::HashMap;
use std::fmt;

use bytes::Bytes;

use crate::http::mime::MimeType;

/// An HTTP response status code with its reason phrase.
///
/// Any value in [100, 599] is representable; construction fails outside that
/// range. Values below 400 are successes/redirects, 400 and above are errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusCode {
    pub value: u16,
    pub description: String,
}

/// Status value outside the [100, 599] range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusRangeError(pub u16);

impl fmt::Display for StatusRangeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "status code {} is outside 100..=599", self.0)
    }
}

impl std::error::Error for StatusRangeError {}

impl StatusCode {
    pub fn new(value: u16, description: &str) -> Result<Self, StatusRangeError> {
        if !(100..=599).contains(&value) {
            return Err(StatusRangeError(value));
        }
        Ok(Self {
            value,
            description: description.to_string(),
        })
    }

    /// # Example
    ///
    /// ```
    /// # use hhttpp::http::response::StatusCode;
    /// assert!(!StatusCode::ok().is_error());
    /// assert!(StatusCode::not_found().is_error());
    /// ```
    pub fn is_error(&self) -> bool {
        self.value >= 400
    }

    pub fn ok() -> Self {
        Self {
            value: 200,
            description: "Ok".to_string(),
        }
    }

    pub fn forbidden() -> Self {
        Self {
            value: 403,
            description: "Forbidden".to_string(),
        }
    }

    pub fn not_found() -> Self {
        Self {
            value: 404,
            description: "Not Found".to_string(),
        }
    }

    pub fn internal_server_error() -> Self {
        Self {
            value: 500,
            description: "Internal Server Error".to_string(),
        }
    }
}

impl fmt::Display for StatusCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.value, self.description)
    }
}

/// A response body: UTF-8 text written through the text serialization path,
/// or raw bytes written without re-encoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Body {
    Text(String),
    Binary(Bytes),
}

impl Body {
    pub fn empty() -> Self {
        Body::Text(String::new())
    }

    pub fn is_binary(&self) -> bool {
        matches!(self, Body::Binary(_))
    }

    pub fn len(&self) -> usize {
        match self {
            Body::Text(s) => s.len(),
            Body::Binary(b) => b.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Represents a complete HTTP response ready to be serialized.
///
/// Immutable after construction. Whatever headers the caller supplies,
/// construction forces `Server`/`server` = "HHTTPP" and `Content-Type`
/// mirroring the MIME type, and every header key is also available under its
/// lowercase spelling.
#[derive(Debug, Clone)]
pub struct Response {
    pub status: StatusCode,
    pub mime: MimeType,
    pub headers: HashMap<String, String>,
    pub body: Body,
}

impl Response {
    pub fn new(
        status: StatusCode,
        mime: MimeType,
        mut headers: HashMap<String, String>,
        body: Body,
    ) -> Self {
        headers.insert("Server".to_string(), "HHTTPP".to_string());
        headers.insert("server".to_string(), "HHTTPP".to_string());
        headers.insert("Content-Type".to_string(), mime.media_type.clone());

        let keys: Vec<String> = headers.keys().cloned().collect();
        for key in keys {
            let value = headers[&key].clone();
            headers.insert(key.to_lowercase(), value);
        }

        Self {
            status,
            mime,
            headers,
            body,
        }
    }

    pub fn is_error(&self) -> bool {
        self.status.is_error()
    }

    pub fn is_binary(&self) -> bool {
        self.body.is_binary()
    }
}
