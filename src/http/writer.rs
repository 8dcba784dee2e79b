use tokio::io::AsyncWriteExt;
use tokio::net::TcpStream;

use crate::http::response::{Body, Response};

const HTTP_VERSION: &str = "HTTP/1.1";

/// Renders a response into its on-wire bytes.
///
/// Text responses use the compact layout naive test clients expect: headers
/// each terminated by `\r`, block terminated by a blank line, then the body.
/// Binary responses send the status line and headers as ordinary `\n`-separated
/// text, then append the body bytes untouched, since binary content must not
/// be forced through text encoding.
pub fn serialize_response(resp: &Response) -> Vec<u8> {
    let mut buf = Vec::new();

    let status_line = format!("{} {} {}\n", HTTP_VERSION, resp.status.value, resp.status.description);
    buf.extend_from_slice(status_line.as_bytes());

    match &resp.body {
        Body::Text(content) => {
            for (k, v) in &resp.headers {
                buf.extend_from_slice(k.as_bytes());
                buf.extend_from_slice(b": ");
                buf.extend_from_slice(v.as_bytes());
                buf.extend_from_slice(b"\r");
            }
            buf.extend_from_slice(b"\n\n");
            buf.extend_from_slice(content.as_bytes());
        }
        Body::Binary(content) => {
            for (k, v) in &resp.headers {
                buf.extend_from_slice(k.as_bytes());
                buf.extend_from_slice(b": ");
                buf.extend_from_slice(v.as_bytes());
                buf.extend_from_slice(b"\n");
            }
            buf.extend_from_slice(b"\n");
            buf.extend_from_slice(content);
        }
    }

    buf
}

pub struct ResponseWriter {
    buffer: Vec<u8>,
    written: usize,
}

impl ResponseWriter {
    pub fn new(response: &Response) -> Self {
        Self {
            buffer: serialize_response(response),
            written: 0,
        }
    }

    pub async fn write_to_stream(&mut self, stream: &mut TcpStream) -> anyhow::Result<()> {
        while self.written < self.buffer.len() {
            let n = stream.write(&self.buffer[self.written..]).await?;

            if n == 0 {
                return Err(anyhow::anyhow!("connection closed while writing"));
            }

            self.written += n;
        }

        Ok(())
    }
}
