//! # Blog Search Repository
//!
//! This crate provides traits and implementations for interacting with the
//! blog article index. It includes definitions for errors, interfaces, and a
//! concrete implementation for OpenSearch.

pub mod config;
pub mod errors;
pub mod interfaces;
pub mod opensearch;
pub mod service;
pub mod types;
pub mod utils;

pub use config::SearchIndexServiceConfig;
pub use errors::SearchIndexError;
pub use interfaces::SearchIndexProvider;
pub use self::opensearch::OpenSearchProvider;
pub use service::SearchIndexService;
pub use types::{BatchOperationResult, BatchOperationSummary};
pub use utils::validate_document_id;

pub use blog_search_shared::{
    ArticleDocument, ArticleHit, ArticleQuery, SearchRequest, SearchResponse,
};
