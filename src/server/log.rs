use std::collections::VecDeque;

use crate::http::request::Request;
use crate::http::response::Response;

/// One record of server traffic: a request as parsed, or a response as built.
#[derive(Debug, Clone)]
pub enum LogEntry {
    Request(Request),
    Response(Response),
}

/// Bounded FIFO history of requests and responses.
///
/// Entries are only ever appended; when an append would exceed the limit the
/// oldest entry (by append order) is evicted first, so the length never
/// exceeds the limit. Owned by the [`Server`](crate::server::Server) instance,
/// never shared process-wide.
#[derive(Debug)]
pub struct RequestLog {
    entries: VecDeque<LogEntry>,
    limit: usize,
}

impl RequestLog {
    pub fn new(limit: usize) -> Self {
        Self {
            entries: VecDeque::new(),
            limit,
        }
    }

    pub fn append(&mut self, entry: LogEntry) {
        if self.limit == 0 {
            return;
        }
        if self.entries.len() >= self.limit {
            tracing::debug!(limit = self.limit, "Log at capacity, evicting oldest entry");
            self.entries.pop_front();
        }
        self.entries.push_back(entry);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    pub fn iter(&self) -> impl Iterator<Item = &LogEntry> {
        self.entries.iter()
    }
}
