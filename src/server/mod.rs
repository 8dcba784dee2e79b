//! The server core: URL index, bounded traffic log, and the two operations
//! the connection loop drives per request, `parse_request` and
//! `generate_response`.

pub mod index;
pub mod listener;
pub mod log;

use std::collections::HashMap;
use std::fmt;
use std::path::Path;

use bytes::Bytes;

use crate::config::Config;
use crate::http::mime::MimeType;
use crate::http::parser::{self, ParseError};
use crate::http::request::Request;
use crate::http::response::{Body, Response, StatusCode};

pub use index::UrlIndex;
pub use log::{LogEntry, RequestLog};

/// A successfully built response fell in a status class the operator
/// configured as fatal (`error_on_4xx` / `error_on_5xx`).
///
/// Fatal for the request that produced it only; the listening loop moves on
/// to the next connection.
#[derive(Debug, Clone)]
pub struct PolicyError {
    pub status: StatusCode,
    pub slug: String,
}

impl fmt::Display for PolicyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "received error status code '{}' on request {}",
            self.status, self.slug
        )
    }
}

impl std::error::Error for PolicyError {}

/// An HTTP server serving one directory tree.
///
/// Owns the URL index (built once at construction) and the bounded
/// request/response log. One instance serves one listening socket for the
/// process lifetime.
#[derive(Debug)]
pub struct Server {
    error_on_4xx: bool,
    error_on_5xx: bool,
    urls: UrlIndex,
    logs: RequestLog,
}

impl Server {
    pub fn new(cfg: &Config) -> anyhow::Result<Self> {
        let urls = UrlIndex::build(Path::new(&cfg.proxy_directory))?;
        tracing::info!(
            routes = urls.len(),
            "Indexed proxy directory {}",
            cfg.proxy_directory
        );

        Ok(Self {
            error_on_4xx: cfg.error_on_4xx,
            error_on_5xx: cfg.error_on_5xx,
            urls,
            logs: RequestLog::new(cfg.log_limit),
        })
    }

    /// Parses raw request text and records the request in the log.
    pub fn parse_request(&mut self, raw: &str) -> Result<Request, ParseError> {
        let request = parser::parse_request(raw)?;
        self.logs.append(LogEntry::Request(request.clone()));
        Ok(request)
    }

    /// Builds the response for a request and records it in the log.
    ///
    /// Status selection, in order: unsafe methods (PUT/POST/DELETE) get 403
    /// with no file read; a GET whose slug resolves in the URL index gets 200
    /// with the file's MIME type and contents; everything else gets 404. Any
    /// failure while resolving or loading the file yields 500. The response
    /// is logged before the policy knobs are consulted, so a policy-fatal
    /// response still shows up in the history.
    pub fn generate_response(&mut self, request: &Request) -> Result<Response, PolicyError> {
        let headers = HashMap::from([
            ("hostname".to_string(), request.hostname.clone()),
            ("server".to_string(), "HHTTPP".to_string()),
            ("Server".to_string(), "HHTTPP".to_string()),
        ]);

        let (status, mime, body) = match self.resolve(request) {
            Ok(resolved) => resolved,
            Err(e) => {
                tracing::warn!(slug = %request.slug, "Failed to resolve request: {e}");
                (
                    StatusCode::internal_server_error(),
                    MimeType::octet_stream(),
                    Body::empty(),
                )
            }
        };

        let response = Response::new(status, mime, headers, body);
        self.logs.append(LogEntry::Response(response.clone()));

        let value = response.status.value;
        if (self.error_on_4xx && (400..500).contains(&value))
            || (self.error_on_5xx && (500..600).contains(&value))
        {
            return Err(PolicyError {
                status: response.status,
                slug: request.slug.clone(),
            });
        }

        Ok(response)
    }

    /// The status/MIME decision table plus content loading. Any error here
    /// becomes the caller's 500 arm.
    fn resolve(&self, request: &Request) -> anyhow::Result<(StatusCode, MimeType, Body)> {
        if request.method.is_unsafe() {
            return Ok((StatusCode::forbidden(), MimeType::octet_stream(), Body::empty()));
        }

        let Some(path) = self.urls.resolve(&request.slug) else {
            return Ok((StatusCode::not_found(), MimeType::octet_stream(), Body::empty()));
        };

        let mime = MimeType::from_path(path)?;
        let body = match &mime.resource_path {
            Some(resource) => {
                if mime.is_binary {
                    Body::Binary(Bytes::from(std::fs::read(resource)?))
                } else {
                    Body::Text(std::fs::read_to_string(resource)?)
                }
            }
            None => Body::empty(),
        };

        Ok((StatusCode::ok(), mime, body))
    }

    /// The traffic history, oldest entry first.
    pub fn logs(&self) -> &RequestLog {
        &self.logs
    }

    /// The URL index built at construction.
    pub fn urls(&self) -> &UrlIndex {
        &self.urls
    }
}
