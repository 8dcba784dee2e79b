use std::collections::HashMap;

use hhttpp::http::request::Request;
use hhttpp::server::{LogEntry, RequestLog};

fn request_for(slug: &str) -> LogEntry {
    let request =
        Request::new("schulichignite.com", slug, "GET", HashMap::new(), String::new()).unwrap();
    LogEntry::Request(request)
}

fn entry_slug(entry: &LogEntry) -> &str {
    match entry {
        LogEntry::Request(r) => &r.slug,
        LogEntry::Response(_) => panic!("expected a request entry"),
    }
}

#[test]
fn test_log_appends_in_order() {
    let mut log = RequestLog::new(10);
    log.append(request_for("/a"));
    log.append(request_for("/b"));

    assert_eq!(log.len(), 2);
    let slugs: Vec<&str> = log.iter().map(entry_slug).collect();
    assert_eq!(slugs, vec!["/a", "/b"]);
}

#[test]
fn test_log_never_exceeds_limit() {
    let mut log = RequestLog::new(500);
    for i in 0..600 {
        log.append(request_for(&format!("/{i}")));
    }

    assert_eq!(log.len(), 500);
    assert_eq!(log.limit(), 500);
}

#[test]
fn test_log_eviction_drops_oldest_first() {
    let mut log = RequestLog::new(2);
    log.append(request_for("/first"));
    log.append(request_for("/second"));
    log.append(request_for("/third"));

    let slugs: Vec<&str> = log.iter().map(entry_slug).collect();
    assert_eq!(slugs, vec!["/second", "/third"]);
}

#[test]
fn test_log_eviction_removes_exactly_one_entry() {
    let mut log = RequestLog::new(3);
    for slug in ["/a", "/b", "/c", "/d"] {
        log.append(request_for(slug));
    }

    assert_eq!(log.len(), 3);
    let slugs: Vec<&str> = log.iter().map(entry_slug).collect();
    assert_eq!(slugs, vec!["/b", "/c", "/d"]);
}

#[test]
fn test_zero_limit_log_stays_empty() {
    let mut log = RequestLog::new(0);
    log.append(request_for("/a"));

    assert!(log.is_empty());
}
