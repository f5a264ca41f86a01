use std::io;
use std::sync::Arc;

use tokio::io::{AsyncRead, AsyncWrite, AsyncWriteExt, BufReader};

use crate::http::classify::{Outcome, classify};
use crate::http::loader::{DocumentRoot, LoadError};
use crate::http::parser::{ParseError, read_request};
use crate::http::request::Request;
use crate::http::response::Response;
use crate::http::writer::ResponseWriter;
use crate::server::counter::ConnectionCounter;

#[derive(Debug, thiserror::Error)]
pub enum ConnectionError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    ResourceUnreadable(#[from] LoadError),

    #[error("failed to write response: {0}")]
    TransportWriteFailure(#[source] io::Error),
}

/// Serves exactly one request on a stream, then closes it.
pub struct Connection<S> {
    stream: BufReader<S>,
    docs: Arc<DocumentRoot>,
    counter: ConnectionCounter,
    state: ConnectionState,
}

pub enum ConnectionState {
    Accepted,
    Parsing,
    Classifying(Request),
    Loading { version: String, outcome: Outcome },
    Responding(ResponseWriter),
    Closed,
    Aborted(ConnectionError),
}

impl<S> Connection<S>
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    pub fn new(stream: S, docs: Arc<DocumentRoot>, counter: ConnectionCounter) -> Self {
        Self {
            stream: BufReader::new(stream),
            docs,
            counter,
            state: ConnectionState::Accepted,
        }
    }

    /// Drives the connection to `Closed` or `Aborted`.
    ///
    /// An aborted connection gets no response at all; the error is returned
    /// for the caller to log. The stream is dropped on return either way.
    pub async fn run(mut self) -> Result<(), ConnectionError> {
        // Counted until this function returns, whichever way it does
        let _guard = self.counter.enter();

        loop {
            let state = std::mem::replace(&mut self.state, ConnectionState::Closed);

            self.state = match state {
                ConnectionState::Accepted => ConnectionState::Parsing,

                ConnectionState::Parsing => match read_request(&mut self.stream).await {
                    Ok(Some(req)) => ConnectionState::Classifying(req),
                    Ok(None) => {
                        tracing::debug!("peer closed before sending a request");
                        ConnectionState::Closed
                    }
                    Err(e) => ConnectionState::Aborted(e.into()),
                },

                ConnectionState::Classifying(req) => {
                    let outcome = classify(&req.method, &req.path, |path| self.docs.resolve(path));
                    tracing::info!(
                        method = %req.method,
                        path = %req.path,
                        user_agent = req.header("User-Agent"),
                        status = outcome.status().as_u16(),
                        "request classified"
                    );
                    ConnectionState::Loading {
                        version: req.version,
                        outcome,
                    }
                }

                ConnectionState::Loading { version, outcome } => {
                    match Response::render(outcome, &version, &self.docs).await {
                        Ok(response) => {
                            tracing::info!("response:\n{}", response.summary());
                            ConnectionState::Responding(ResponseWriter::new(&response))
                        }
                        Err(e) => ConnectionState::Aborted(e.into()),
                    }
                }

                ConnectionState::Responding(mut writer) => {
                    match writer.write_to_stream(self.stream.get_mut()).await {
                        Ok(()) => {
                            if let Err(e) = self.stream.get_mut().shutdown().await {
                                tracing::debug!(error = %e, "shutdown after response failed");
                            }
                            ConnectionState::Closed
                        }
                        Err(e) => ConnectionState::Aborted(ConnectionError::TransportWriteFailure(e)),
                    }
                }

                ConnectionState::Closed => return Ok(()),

                ConnectionState::Aborted(e) => return Err(e),
            };
        }
    }
}
