//! Docserve - Static File Server
//!
//! Core library for HTTP parsing, file resolution and response serialization.

pub mod config;
pub mod http;
pub mod server;
