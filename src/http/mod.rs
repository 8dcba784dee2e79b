//! HTTP protocol implementation.
//!
//! This module implements the HTTP/1.1 surface of the server: one request in,
//! one response out, connection closed.
//!
//! # Architecture
//!
//! The HTTP layer is organized into several submodules:
//!
//! - **`connection`**: The per-connection handler implementing the request-response state machine
//! - **`parser`**: Parses incoming HTTP requests from raw request text
//! - **`request`**: HTTP request representation and its construction invariants
//! - **`response`**: HTTP response, status code, and forced headers
//! - **`mime`**: MIME type detection based on file extensions
//! - **`writer`**: Serializes and writes HTTP responses to the client
//!
//! # Connection State Machine
//!
//! Each client connection goes through a state machine:
//!
//! ```text
//!        ┌─────────────┐
//!        │   Reading   │ ← One read of up to 4096 bytes
//!        └──────┬──────┘
//!               │ Request bytes received
//!               ▼
//!        ┌──────────────────┐
//!        │   Processing     │ ← Parse, resolve, build response
//!        └──────┬───────────┘
//!               │ Response ready
//!               ▼
//!        ┌──────────────────┐
//!        │    Writing       │ ← Send response to client
//!        └──────┬───────────┘
//!               │ Response sent
//!               ▼
//!        ┌──────────────────┐
//!        │    Closing       │ ← Shut the socket down both ways
//!        └──────────────────┘
//! ```
//!
//! There is no keep-alive: every connection carries exactly one request.

pub mod request;
pub mod response;
pub mod parser;
pub mod connection;
pub mod writer;
pub mod mime;
