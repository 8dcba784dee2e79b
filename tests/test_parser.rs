use hhttpp::http::parser::{ParseError, parse_content, parse_headers, parse_request};
use hhttpp::http::request::Method;

#[test]
fn test_parse_simple_get_request() {
    let raw = "GET / HTTP/1.1\nhost: example.com\naccept: */*\n";
    let parsed = parse_request(raw).unwrap();

    assert_eq!(parsed.method, Method::GET);
    assert_eq!(parsed.slug, "/");
    assert_eq!(parsed.content, "");
}

#[test]
fn test_parse_hostname_is_the_fixed_literal() {
    // The hostname is not taken from the Host header
    let raw = "GET / HTTP/1.1\nhost: somewhere-else.com\n";
    let parsed = parse_request(raw).unwrap();

    assert_eq!(parsed.hostname, "schulichignite.com");
    assert_eq!(parsed.headers.get("host").unwrap(), "schulichignite.com");
}

#[test]
fn test_parse_lowercase_method_is_normalized() {
    let raw = "get /about HTTP/1.1\n";
    let parsed = parse_request(raw).unwrap();

    assert_eq!(parsed.method, Method::GET);
    assert_eq!(parsed.slug, "/about");
}

#[test]
fn test_parse_request_with_body() {
    let raw = "POST /form HTTP/1.1\ncontent-type: text/plain\n\nname=ignite";
    let parsed = parse_request(raw).unwrap();

    assert_eq!(parsed.method, Method::POST);
    assert_eq!(parsed.content, "name=ignite");
}

#[test]
fn test_parse_no_blank_line_means_empty_body() {
    let raw = "GET / HTTP/1.1\naccept: text/html\n";
    let parsed = parse_request(raw).unwrap();

    assert_eq!(parsed.content, "");
}

#[test]
fn test_parse_multiple_headers() {
    let raw = "GET /styles.css HTTP/1.1\nhost: example.com\nuser-agent: test-client\naccept: text/css\n";
    let parsed = parse_request(raw).unwrap();

    assert_eq!(parsed.headers.get("user-agent").unwrap(), "test-client");
    assert_eq!(parsed.headers.get("accept").unwrap(), "text/css");
}

#[test]
fn test_parse_malformed_header_lines_are_skipped() {
    // ";" instead of ":" is not a header, but also not an error
    let raw = "GET / HTTP/1.1\nuser-agent; test-client\naccept: */*\n";
    let parsed = parse_request(raw).unwrap();

    assert!(!parsed.headers.contains_key("user-agent"));
    assert_eq!(parsed.headers.get("accept").unwrap(), "*/*");
}

#[test]
fn test_parse_garbled_method_token_is_a_format_error() {
    let result = parse_request("G2ET / HTTP/1.1\n");
    assert!(matches!(result, Err(ParseError::Format(_))));
}

#[test]
fn test_parse_missing_version_is_a_format_error() {
    let result = parse_request("GET /\n");
    assert!(matches!(result, Err(ParseError::Format(_))));
}

#[test]
fn test_parse_path_without_leading_slash_is_a_format_error() {
    let result = parse_request("GET about HTTP/1.1\n");
    assert!(matches!(result, Err(ParseError::Format(_))));
}

#[test]
fn test_parse_unknown_method_is_a_validation_error() {
    // Fits the request-line grammar (3-6 letters) but is not a supported method
    let result = parse_request("TRACE / HTTP/1.1\n");
    assert!(matches!(result, Err(ParseError::Validation(_))));
}

#[test]
fn test_parse_headers_over_plain_text() {
    let headers = parse_headers("host: example.com\naccept: */*\n");

    assert_eq!(headers.get("host").unwrap(), "example.com");
    assert_eq!(headers.get("accept").unwrap(), "*/*");
}

#[test]
fn test_parse_headers_trims_whitespace() {
    let headers = parse_headers("host:    example.com   \n");
    assert_eq!(headers.get("host").unwrap(), "example.com");
}

#[test]
fn test_parse_content_trims_surrounding_whitespace() {
    assert_eq!(parse_content("GET / HTTP/1.1\n\n  hello \n"), "hello");
    assert_eq!(parse_content("GET / HTTP/1.1\n"), "");
}
