//! Draft Service
//!
//! Stateless HTTP adapter for a video-editing assistant plugin. Each operation
//! validates its JSON payload against a declarative schema, zips parallel
//! arrays into nested records, and returns them. Nothing is persisted beyond
//! the request/response cycle.

pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod openapi;
pub mod schema;
pub mod services;

// Public re-exports
pub use config::Config;
pub use error::{AppError, Result};
