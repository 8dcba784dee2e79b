use std::collections::HashMap;
use std::fmt;

/// HTTP request methods.
///
/// Represents the HTTP method/verb of a request. The server serves GET and
/// answers the unsafe methods (PUT/POST/DELETE) with a fixed 403 rejection;
/// anything else fails validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    /// GET - Retrieve a resource
    GET,
    /// POST - Create or submit data
    POST,
    /// PUT - Replace a resource
    PUT,
    /// DELETE - Delete a resource
    DELETE,
}

impl Method {
    /// Parses an HTTP method from a string, case-insensitively.
    ///
    /// # Example
    ///
    /// ```
    /// # use hhttpp::http::request::Method;
    /// assert_eq!(Method::from_str("GET"), Some(Method::GET));
    /// assert_eq!(Method::from_str("get"), Some(Method::GET));
    /// assert_eq!(Method::from_str("gwet"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_ascii_uppercase().as_str() {
            "GET" => Some(Method::GET),
            "POST" => Some(Method::POST),
            "PUT" => Some(Method::PUT),
            "DELETE" => Some(Method::DELETE),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Method::GET => "GET",
            Method::POST => "POST",
            Method::PUT => "PUT",
            Method::DELETE => "DELETE",
        }
    }

    /// Whether the method is one the server refuses to act on (403).
    pub fn is_unsafe(&self) -> bool {
        matches!(self, Method::POST | Method::PUT | Method::DELETE)
    }
}

/// A parsed field violated a domain invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Method token is not one of GET/POST/PUT/DELETE
    UnsupportedMethod(String),
    /// Hostname still contains a path separator after protocol stripping
    HostnameIsUrl(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::UnsupportedMethod(m) => {
                write!(f, "provided method {m} is not valid")
            }
            ValidationError::HostnameIsUrl(h) => {
                write!(f, "/ found in hostname {h}, please confirm this isn't a URL")
            }
        }
    }
}

impl std::error::Error for ValidationError {}

/// Represents a parsed HTTP request from a client.
///
/// Immutable after construction; `Request::new` is the only way to build one
/// and enforces the hostname and method invariants.
#[derive(Debug, Clone)]
pub struct Request {
    /// Hostname with any protocol prefix stripped (never contains "/")
    pub hostname: String,
    /// The request path (e.g., "/about"), always starting with "/"
    pub slug: String,
    /// The HTTP method, normalized to uppercase
    pub method: Method,
    /// Request headers as key-value pairs; "host" and "accept" are always present
    pub headers: HashMap<String, String>,
    /// Request body, empty if none was sent
    pub content: String,
}

impl Request {
    /// Constructs a Request, enforcing the domain invariants.
    ///
    /// An accidental `http://`/`https://` prefix on the hostname is stripped;
    /// a hostname that still contains "/" afterwards is rejected as a URL.
    /// The method token is validated case-insensitively. The `host` header is
    /// always set to the hostname and `accept` defaults to `*/*`.
    pub fn new(
        hostname: &str,
        slug: &str,
        method: &str,
        mut headers: HashMap<String, String>,
        content: String,
    ) -> Result<Self, ValidationError> {
        let hostname = hostname
            .trim_start_matches("http://")
            .trim_start_matches("https://")
            .to_string();
        if hostname.contains('/') {
            return Err(ValidationError::HostnameIsUrl(hostname));
        }

        let method = Method::from_str(method)
            .ok_or_else(|| ValidationError::UnsupportedMethod(method.to_string()))?;

        headers.insert("host".to_string(), hostname.clone());
        headers
            .entry("accept".to_string())
            .or_insert_with(|| "*/*".to_string());

        Ok(Self {
            hostname,
            slug: slug.to_string(),
            method,
            headers,
            content,
        })
    }

    /// Retrieves a header value by name.
    pub fn header(&self, key: &str) -> Option<&str> {
        self.headers.get(key).map(|v| v.as_str())
    }
}
