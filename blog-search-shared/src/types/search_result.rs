//! Search result types for the blog index.
//!
//! This module defines the response structures returned from get and search operations.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::types::article_document::ArticleDocument;

/// A single stored document returned by a get or search operation.
///
/// The raw `_source` is kept as JSON so that documents which do not match the
/// article schema can still be printed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ArticleHit {
    /// The document ID in the index.
    pub document_id: String,

    /// Relevance score from the search engine.
    /// `None` for get operations and for unscored queries.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,

    /// The stored document source.
    pub source: Value,
}

impl ArticleHit {
    /// Create a new hit.
    pub fn new(document_id: impl Into<String>, score: Option<f64>, source: Value) -> Self {
        Self {
            document_id: document_id.into(),
            score,
            source,
        }
    }

    /// The source rendered as compact JSON.
    pub fn source_as_string(&self) -> String {
        self.source.to_string()
    }

    /// The `title` field of the source, if present and a string.
    pub fn title(&self) -> Option<&str> {
        self.source.get("title").and_then(Value::as_str)
    }

    /// The `title` field rendered for display.
    ///
    /// Strings are returned as-is and any other JSON value (including `null`) in
    /// its compact JSON form. `None` only when the source has no `title` field.
    pub fn title_text(&self) -> Option<String> {
        self.source.get("title").map(|title| match title {
            Value::String(text) => text.clone(),
            other => other.to_string(),
        })
    }

    /// A typed view of the source, if it matches the article schema.
    pub fn article(&self) -> Option<ArticleDocument> {
        serde_json::from_value(self.source.clone()).ok()
    }
}

/// Complete search response with hits and metadata.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SearchResponse {
    /// The list of hits, ordered by relevance.
    pub hits: Vec<ArticleHit>,

    /// Total number of matching documents.
    /// May be greater than the number of returned hits due to pagination.
    pub total: u64,

    /// Time taken to execute the search in milliseconds.
    pub took_ms: u64,
}

impl SearchResponse {
    /// Create an empty search response.
    pub fn empty() -> Self {
        Self {
            hits: Vec::new(),
            total: 0,
            took_ms: 0,
        }
    }

    /// Create a new search response.
    pub fn new(hits: Vec<ArticleHit>, total: u64, took_ms: u64) -> Self {
        Self {
            hits,
            total,
            took_ms,
        }
    }

    /// Returns true if there are no hits.
    pub fn is_empty(&self) -> bool {
        self.hits.is_empty()
    }

    /// Returns the number of hits in this response.
    pub fn len(&self) -> usize {
        self.hits.len()
    }
}
