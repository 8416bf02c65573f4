//! # Blog Search
//!
//! Command-line client for the `blog` article index in OpenSearch.
//!
//! ## Modules
//!
//! - [`config`]: Environment configuration and dependency initialization
//! - [`cli`]: Command-line argument definitions
//! - [`commands`]: Command handlers that call the search service
//! - [`output`]: Rendering of documents and search results
//! - [`errors`]: Error types for the binary

pub mod cli;
pub mod commands;
pub mod config;
pub mod errors;
pub mod output;

pub use config::{AppConfig, Dependencies};
pub use errors::AppError;
