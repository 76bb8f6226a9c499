use std::time::Duration;

use tokio::net::TcpListener;
use tracing::{info, warn};
use crate::http::connection::Connection;
use crate::config::{Config, StaticFilesConfig};

/// Pause after a failed accept, so a full fd table is not spun on.
const ACCEPT_RETRY_DELAY: Duration = Duration::from_millis(100);

pub async fn run(cfg: &Config) -> anyhow::Result<()> {
    let listener = TcpListener::bind(&cfg.server.listen_addr).await?;
    info!("Waiting for new connections on {}", cfg.server.listen_addr);

    serve(listener, &cfg.static_files).await;
    Ok(())
}

/// Accepts connections and serves them one at a time.
///
/// The next connection is only accepted once the previous one is closed.
/// Neither a failed accept nor a failed connection stops the loop.
pub async fn serve(listener: TcpListener, static_files: &StaticFilesConfig) {
    loop {
        let (socket, peer) = match listener.accept().await {
            Ok(accepted) => accepted,
            Err(e) => {
                warn!(error = %e, "Failed to accept connection");
                tokio::time::sleep(ACCEPT_RETRY_DELAY).await;
                continue;
            }
        };
        info!("New connection from {}", peer);

        let conn = Connection::new(socket, static_files.clone());
        if let Err(e) = conn.run().await {
            tracing::error!("Connection error from {}: {}", peer, e);
        }
    }
}
