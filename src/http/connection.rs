use tokio::io::{AsyncRead, AsyncWrite, AsyncWriteExt, BufReader};
use tracing::{info, warn};

use crate::config::StaticFilesConfig;
use crate::http::error::HttpError;
use crate::http::parser::parse_request;
use crate::http::request::Request;
use crate::http::resolver::Resolver;
use crate::http::response::Response;
use crate::http::writer::ResponseWriter;

/// Handles exactly one request on a stream, then closes it.
pub struct Connection<S> {
    stream: BufReader<S>,
    resolver: Resolver,
    state: ConnectionState,
}

pub enum ConnectionState {
    Reading,
    Resolving(Request),
    Recovering(HttpError),
    Writing(Response),
    Closed,
}

impl<S> Connection<S>
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    pub fn new(stream: S, static_files: StaticFilesConfig) -> Self {
        Self {
            stream: BufReader::new(stream),
            resolver: Resolver::new(&static_files),
            state: ConnectionState::Reading,
        }
    }

    /// Drives the connection from reading the request to closing the stream.
    ///
    /// A response is always written, whatever went wrong before. Only a
    /// failure to send the response head or to shut the stream down is
    /// returned.
    pub async fn run(mut self) -> anyhow::Result<()> {
        let mut result = Ok(());

        loop {
            self.state = match std::mem::replace(&mut self.state, ConnectionState::Closed) {
                ConnectionState::Reading => match parse_request(&mut self.stream).await {
                    Ok(req) if req.path().contains("..") => {
                        ConnectionState::Recovering(HttpError::PathRejected)
                    }
                    Ok(req) => ConnectionState::Resolving(req),
                    Err(e) => ConnectionState::Recovering(e),
                },

                ConnectionState::Resolving(req) => {
                    info!(
                        method = req.method(),
                        path = req.path(),
                        query = req.query(),
                        version = req.version(),
                        "Request received"
                    );

                    match self.resolver.resolve(&req).await {
                        Ok(response) => ConnectionState::Writing(response),
                        Err(e) => ConnectionState::Recovering(e),
                    }
                }

                ConnectionState::Recovering(err) => {
                    ConnectionState::Writing(self.recover(err).await)
                }

                ConnectionState::Writing(response) => {
                    info!(status = response.status.as_u16(), "Sending response");

                    let writer = ResponseWriter::new(response);
                    result = writer.write_to_stream(&mut self.stream).await;
                    ConnectionState::Closed
                }

                ConnectionState::Closed => break,
            };
        }

        // Closed: release the stream whether or not writing succeeded
        let shutdown = self.stream.shutdown().await;
        result?;
        shutdown?;

        Ok(())
    }

    /// Builds the response for a failed request from its error page.
    ///
    /// Falls back to an inline text body with status 500 when the page
    /// itself cannot be loaded.
    async fn recover(&self, err: HttpError) -> Response {
        let status = err.status();
        warn!(status = status.as_u16(), error = %err, "Http error raised");

        match self.resolver.error_page(status).await {
            Ok(response) => response,
            Err(page_err) => {
                warn!(error = %page_err, "Falling back to inline error body");

                let mut response = Response::new(page_err.status());
                response.set_text_body(format!(
                    "Could not load custom {} error page!",
                    status.as_u16()
                ));
                response
            }
        }
    }
}
