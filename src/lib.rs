//! HHTTPP - Handmade HTTP Server
//!
//! Core library for serving a directory tree of static files over HTTP/1.1.

pub mod config;
pub mod http;
pub mod server;
