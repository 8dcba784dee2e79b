use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;

use crate::http::writer::ResponseWriter;
use crate::server::Server;

/// Requests are read in one chunk of this size; anything larger is truncated.
const READ_BUFFER_SIZE: usize = 4096;

pub struct Connection {
    stream: TcpStream,
    state: ConnectionState,
}

pub enum ConnectionState {
    Reading,
    Processing(String),
    Writing(ResponseWriter),
    Closing,
}

impl Connection {
    pub fn new(stream: TcpStream) -> Self {
        Self {
            stream,
            state: ConnectionState::Reading,
        }
    }

    /// Drives the connection through its states: one read, one parse+build,
    /// one write, then a shutdown of both directions. No keep-alive.
    ///
    /// A parse or policy failure ends this connection with an error; the
    /// listening loop logs it and moves on to the next connection.
    pub async fn run(&mut self, server: &mut Server) -> anyhow::Result<()> {
        loop {
            match &mut self.state {
                ConnectionState::Reading => {
                    let mut buf = [0u8; READ_BUFFER_SIZE];
                    let n = self.stream.read(&mut buf).await?;

                    if n == 0 {
                        // Client went away before sending anything
                        tracing::debug!("No data received, abandoning connection");
                        return Ok(());
                    }

                    let raw = std::str::from_utf8(&buf[..n])?.to_string();
                    self.state = ConnectionState::Processing(raw);
                }

                ConnectionState::Processing(raw) => {
                    let request = server.parse_request(raw)?;
                    let response = server.generate_response(&request)?;

                    tracing::info!(
                        method = request.method.as_str(),
                        slug = %request.slug,
                        status = response.status.value,
                        "Serving request"
                    );

                    self.state = ConnectionState::Writing(ResponseWriter::new(&response));
                }

                ConnectionState::Writing(writer) => {
                    writer.write_to_stream(&mut self.stream).await?;
                    self.state = ConnectionState::Closing;
                }

                ConnectionState::Closing => {
                    self.stream.shutdown().await?;
                    return Ok(());
                }
            }
        }
    }
}
