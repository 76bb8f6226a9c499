//! HTTP protocol implementation.
//!
//! This module implements a minimal HTTP/1.1 server that serves static files
//! from a document root. Every connection carries exactly one request.
//!
//! # Architecture
//!
//! The HTTP layer is organized into several submodules:
//!
//! - **`connection`**: The connection handler implementing the request-response state machine
//! - **`parser`**: Reads a request line and headers from a buffered stream
//! - **`request`**: HTTP request representation and its diagnostic rendering
//! - **`resolver`**: Maps requests to files under the document root and loads error pages
//! - **`response`**: Status catalog and HTTP response representation
//! - **`writer`**: Serializes and writes HTTP responses to the client
//! - **`mime`**: MIME type detection based on file extensions
//! - **`error`**: Failures that end up as an error status
//!
//! # Connection State Machine
//!
//! ```text
//!        ┌─────────────┐
//!        │   Reading   │ ← Parse request line and headers
//!        └──────┬──────┘
//!               │ Request parsed          ─┐
//!               ▼                          │ parse error,
//!        ┌──────────────────┐              │ `..` in path,
//!        │    Resolving     │ ← Load file  │ missing file
//!        └──────┬───────────┘              ▼
//!               │               ┌──────────────────┐
//!               │               │    Recovering    │ ← Load error/<code>.html
//!               │               └──────┬───────────┘
//!               ▼                      │
//!        ┌──────────────────┐          │
//!        │    Writing       │ ◄────────┘
//!        └──────┬───────────┘
//!               ▼
//!        ┌──────────────────┐
//!        │     Closed       │ ← Always reached, stream shut down
//!        └──────────────────┘
//! ```
//!
//! # Example
//!
//! ```ignore
//! use docserve::config::StaticFilesConfig;
//! use docserve::http::connection::Connection;
//! use tokio::net::TcpListener;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let listener = TcpListener::bind("127.0.0.1:8080").await?;
//!
//!     loop {
//!         let (socket, _addr) = listener.accept().await?;
//!         let conn = Connection::new(socket, StaticFilesConfig::default());
//!         if let Err(e) = conn.run().await {
//!             eprintln!("Connection error: {}", e);
//!         }
//!     }
//! }
//! ```

pub mod error;
pub mod request;
pub mod response;
pub mod parser;
pub mod resolver;
pub mod connection;
pub mod writer;
pub mod mime;
