use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;
use tracing::{Instrument, info, warn};

use crate::config::Config;
use crate::http::connection::Connection;
use crate::http::loader::DocumentRoot;
use crate::server::counter::ConnectionCounter;

/// Accepts connections and hands each one to its own task.
pub struct Listener {
    inner: TcpListener,
    docs: Arc<DocumentRoot>,
    counter: ConnectionCounter,
}

impl Listener {
    pub async fn bind(cfg: &Config) -> anyhow::Result<Self> {
        let inner = TcpListener::bind(&cfg.server.listen_addr)
            .await
            .with_context(|| format!("failed to bind {}", cfg.server.listen_addr))?;

        let docs = DocumentRoot::from_config(&cfg.static_files);
        for page in docs.missing_canned_pages() {
            warn!(page = %page.display(), "canned page missing; requests for it will be dropped");
        }

        info!(
            addr = %inner.local_addr()?,
            root = %docs.root().display(),
            "Listening"
        );

        Ok(Self {
            inner,
            docs: Arc::new(docs),
            counter: ConnectionCounter::new(),
        })
    }

    pub fn local_addr(&self) -> anyhow::Result<SocketAddr> {
        Ok(self.inner.local_addr()?)
    }

    pub fn counter(&self) -> ConnectionCounter {
        self.counter.clone()
    }

    /// Accepts forever. Only an accept failure ends the loop.
    pub async fn serve(self) -> anyhow::Result<()> {
        loop {
            let (socket, peer) = self.inner.accept().await?;
            info!("Accepted connection from {}", peer);

            let conn = Connection::new(socket, Arc::clone(&self.docs), self.counter.clone());
            let span = tracing::info_span!("conn", %peer);
            tokio::spawn(
                async move {
                    if let Err(e) = conn.run().await {
                        tracing::error!("Connection error from {}: {}", peer, e);
                    }
                }
                .instrument(span),
            );
        }
    }
}

pub async fn run(cfg: &Config) -> anyhow::Result<()> {
    Listener::bind(cfg).await?.serve().await
}
