//! Teapot - a one-request-per-connection HTTP/1.0 file server
//!
//! Serves files from a document root, answers the coffee paths with
//! canned pages, and refuses every method but GET.

pub mod config;
pub mod http;
pub mod server;
