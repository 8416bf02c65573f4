//! # Blog Search Shared
//!
//! This crate defines shared data structures used across the blog search workspace.
//! It includes the article document, the supported query variants and the search
//! result types returned by the repository layer.

pub mod types;

pub use types::article_document::ArticleDocument;
pub use types::search_query::{ArticleQuery, SearchRequest};
pub use types::search_result::{ArticleHit, SearchResponse};
