//! HTTP/1.0-style request handling.
//!
//! Every connection carries exactly one request and one response.
//!
//! # Architecture
//!
//! - **`connection`**: the per-connection state machine driving the pipeline
//! - **`parser`**: reads the header block and splits the request line
//! - **`request`**: request representation
//! - **`classify`**: decides which kind of response a request gets
//! - **`loader`**: resolves paths under the document root and reads files
//! - **`response`**: status codes, response rendering and the builder
//! - **`writer`**: serializes and writes responses to the client
//! - **`mime`**: content types by file extension
//!
//! # Connection State Machine
//!
//! ```text
//!   Accepted ─▶ Parsing ─▶ Classifying ─▶ Loading ─▶ Responding ─▶ Closed
//!                  │                         │
//!                  └────────▶ Aborted ◀──────┘
//! ```
//!
//! `Aborted` means no response was written: a malformed request line, a read
//! error, or a file that could not be read after it was resolved. A write
//! failure while `Responding` also ends in `Aborted`.
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use teapot::http::connection::Connection;
//! use teapot::http::loader::DocumentRoot;
//! use teapot::server::counter::ConnectionCounter;
//! use tokio::net::TcpListener;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let listener = TcpListener::bind("127.0.0.1:5555").await?;
//!     let docs = Arc::new(DocumentRoot::new("public", "public/html"));
//!     let counter = ConnectionCounter::new();
//!
//!     loop {
//!         let (socket, _addr) = listener.accept().await?;
//!         let conn = Connection::new(socket, docs.clone(), counter.clone());
//!         tokio::spawn(async move {
//!             if let Err(e) = conn.run().await {
//!                 eprintln!("Connection error: {}", e);
//!             }
//!         });
//!     }
//! }
//! ```

pub mod classify;
pub mod connection;
pub mod loader;
pub mod mime;
pub mod parser;
pub mod request;
pub mod response;
pub mod writer;
