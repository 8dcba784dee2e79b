use std::time::Duration;

use tokio::net::TcpListener;
use tokio::time::timeout;
use tracing::info;

use crate::config::Config;
use crate::http::connection::Connection;
use crate::server::Server;

/// Binds the listening socket and serves connections strictly one at a time.
///
/// Each accept waits at most the configured accept timeout before going
/// around again, which bounds how long a shutdown signal can go unnoticed.
/// Per-connection failures are logged and the loop continues; only bind
/// errors are fatal.
pub async fn run(mut srv: Server, cfg: &Config) -> anyhow::Result<()> {
    let addr = cfg.listen_addr();
    let listener = TcpListener::bind(&addr).await?;
    info!("Listening on {}", addr);

    let accept_window = Duration::from_secs(cfg.accept_timeout_secs);

    loop {
        let (socket, peer) = match timeout(accept_window, listener.accept()).await {
            Ok(Ok(accepted)) => accepted,
            // Transient accept failures (e.g. a client resetting mid-handshake)
            // only cost that client its connection
            Ok(Err(e)) => {
                tracing::warn!("Accept failed: {e}");
                continue;
            }
            // Accept window elapsed with no client, wait again
            Err(_) => continue,
        };
        info!("Accepted connection from {}", peer);

        // Sequential on purpose: the next accept waits until this request is
        // fully read, processed, and written.
        let mut conn = Connection::new(socket);
        if let Err(e) = conn.run(&mut srv).await {
            tracing::error!("Connection error from {}: {}", peer, e);
        }
    }
}
