//! This module defines the core data structures shared by the blog search crates.
//! It re-exports the article document, query and result types.

pub mod article_document;
pub mod search_query;
pub mod search_result;

pub use article_document::ArticleDocument;
pub use search_query::{ArticleQuery, SearchRequest};
pub use search_result::{ArticleHit, SearchResponse};
