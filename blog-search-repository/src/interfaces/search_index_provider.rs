//! Search index provider trait definition.
//!
//! This module defines the abstract interface for search index operations,
//! allowing for different backend implementations (OpenSearch, Elasticsearch, etc.).

use async_trait::async_trait;
use blog_search_shared::{ArticleDocument, ArticleHit, SearchRequest, SearchResponse};

use crate::errors::SearchIndexError;
use crate::types::BatchOperationSummary;

/// Abstracts the underlying search index implementation (OpenSearch, Elasticsearch, etc.).
///
/// Implementations are injected into `SearchIndexService`, which keeps input
/// validation out of the backends and lets tests substitute in-memory providers.
///
/// All methods return `Result<T, SearchIndexError>` for consistent error handling across
/// different backend implementations.
///
/// # Index Initialization
///
/// Callers should invoke `ensure_index_exists` during startup so that the index and
/// its mappings are in place before documents are written.
#[async_trait]
pub trait SearchIndexProvider: Send + Sync {
    /// Ensure the search index exists, creating it with its mappings if necessary.
    ///
    /// # Returns
    ///
    /// * `Ok(())` - If the index is ready for use
    /// * `Err(SearchIndexError)` - If the existence check or creation fails
    async fn ensure_index_exists(&self) -> Result<(), SearchIndexError>;

    /// Store a document under its document ID, replacing any previous version.
    ///
    /// # Arguments
    ///
    /// * `document` - The article to index
    async fn index_document(&self, document: &ArticleDocument) -> Result<(), SearchIndexError>;

    /// Fetch a stored document by ID.
    ///
    /// # Returns
    ///
    /// * `Ok(Some(ArticleHit))` - The stored document
    /// * `Ok(None)` - If no document has this ID
    /// * `Err(SearchIndexError)` - If the request fails
    async fn get_document(&self, document_id: &str)
        -> Result<Option<ArticleHit>, SearchIndexError>;

    /// Delete a document by ID.
    ///
    /// If the document doesn't exist, the operation is considered successful.
    async fn delete_document(&self, document_id: &str) -> Result<(), SearchIndexError>;

    /// Index multiple documents and return a summary of successful and failed operations.
    ///
    /// # Returns
    ///
    /// * `Ok(BatchOperationSummary)` - Contains aggregate statistics and individual results
    /// * `Err(SearchIndexError)` - If the bulk operation fails entirely
    async fn bulk_index_documents(
        &self,
        documents: &[ArticleDocument],
    ) -> Result<BatchOperationSummary, SearchIndexError>;

    /// Run a search request against the index.
    ///
    /// # Returns
    ///
    /// * `Ok(SearchResponse)` - Total hit count and the requested page of hits
    /// * `Err(SearchIndexError)` - If the request or response parsing fails
    async fn search(&self, request: &SearchRequest) -> Result<SearchResponse, SearchIndexError>;
}
