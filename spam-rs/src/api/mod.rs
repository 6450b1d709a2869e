//! HTTP API module
//!
//! Serves the web UI and the JSON classification endpoints.

pub mod handlers;
pub mod server;
pub mod web;

pub use server::ApiServer;
