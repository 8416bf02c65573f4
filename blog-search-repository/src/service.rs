//! Search index service implementation.
//!
//! This module provides the main service for interacting with the blog index.
//! Application code uses this to index, fetch, delete and search articles.

use blog_search_shared::{ArticleDocument, ArticleHit, SearchRequest, SearchResponse};
use tracing::debug;

use crate::config::SearchIndexServiceConfig;
use crate::errors::SearchIndexError;
use crate::interfaces::SearchIndexProvider;
use crate::types::BatchOperationSummary;
use crate::utils::validate_document_id;

/// The main service for interacting with the search index.
///
/// This is the high-level API that application code should use. It validates
/// input and delegates to a `SearchIndexProvider` for the actual backend
/// operations. All operations return `SearchIndexError` for consistent error
/// handling.
///
/// # Example
///
/// ```no_run
/// use blog_search_repository::opensearch::{IndexConfig, OpenSearchProvider};
/// use blog_search_repository::{ArticleDocument, ArticleQuery, SearchIndexService, SearchRequest};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let provider = OpenSearchProvider::new("http://127.0.0.1:9200", IndexConfig::new("blog")).await?;
/// let service = SearchIndexService::new(Box::new(provider));
///
/// service.ensure_index().await?;
/// service.index(ArticleDocument::new(3, "Title", "Body")).await?;
///
/// let response = service
///     .search(SearchRequest::new(ArticleQuery::wildcard("title", "*Ti*")))
///     .await?;
/// println!("{} hits", response.total);
/// # Ok(())
/// # }
/// ```
pub struct SearchIndexService {
    provider: Box<dyn SearchIndexProvider>,
    config: SearchIndexServiceConfig,
}

impl SearchIndexService {
    /// Create a new SearchIndexService with default configuration.
    ///
    /// The default configuration includes a batch size limit of 1000 documents.
    pub fn new(provider: Box<dyn SearchIndexProvider>) -> Self {
        Self {
            provider,
            config: SearchIndexServiceConfig::default(),
        }
    }

    /// Create a new SearchIndexService with custom configuration.
    pub fn with_config(
        provider: Box<dyn SearchIndexProvider>,
        config: SearchIndexServiceConfig,
    ) -> Self {
        Self { provider, config }
    }

    /// Check if batch size exceeds the configured limit.
    fn validate_batch_size(&self, size: usize) -> Result<(), SearchIndexError> {
        if let Some(max) = self.config.max_batch_size {
            if size > max {
                return Err(SearchIndexError::batch_size_exceeded(size, max));
            }
        }
        Ok(())
    }

    /// Validate an article before it is written.
    fn validate_article(article: &ArticleDocument) -> Result<(), SearchIndexError> {
        if article.id < 0 {
            return Err(SearchIndexError::validation(format!(
                "Article id must not be negative, got {}",
                article.id
            )));
        }
        if article.title.trim().is_empty() {
            return Err(SearchIndexError::validation("Article title is required"));
        }
        Ok(())
    }

    /// Ensure the index exists, creating it with its mappings if necessary.
    pub async fn ensure_index(&self) -> Result<(), SearchIndexError> {
        self.provider.ensure_index_exists().await
    }

    /// Index an article under its document ID, replacing any earlier version.
    ///
    /// # Returns
    ///
    /// * `Ok(())` - If the article was stored
    /// * `Err(SearchIndexError::ValidationError)` - If the id is negative or the title blank
    /// * `Err(SearchIndexError)` - If the operation fails
    pub async fn index(&self, article: ArticleDocument) -> Result<(), SearchIndexError> {
        Self::validate_article(&article)?;

        self.provider.index_document(&article).await
    }

    /// Fetch an article by document ID.
    ///
    /// # Returns
    ///
    /// * `Ok(Some(ArticleHit))` - The stored document
    /// * `Ok(None)` - If nothing is stored under `document_id`
    /// * `Err(SearchIndexError::ValidationError)` - If the ID is invalid
    pub async fn get(&self, document_id: &str) -> Result<Option<ArticleHit>, SearchIndexError> {
        validate_document_id(document_id)?;

        self.provider.get_document(document_id).await
    }

    /// Delete an article by document ID.
    ///
    /// If the document doesn't exist, the operation is considered successful.
    pub async fn delete(&self, document_id: &str) -> Result<(), SearchIndexError> {
        validate_document_id(document_id)?;

        self.provider.delete_document(document_id).await
    }

    /// Index multiple articles and return a summary of successful and failed operations.
    ///
    /// # Returns
    ///
    /// * `Ok(BatchOperationSummary)` - Per-article results
    /// * `Err(SearchIndexError::BatchSizeExceeded)` - If the batch size exceeds the configured maximum
    /// * `Err(SearchIndexError::ValidationError)` - If any article is invalid
    ///
    /// # Note
    ///
    /// Individual failures are reported in the summary rather than causing the entire
    /// operation to fail.
    pub async fn batch_index(
        &self,
        articles: Vec<ArticleDocument>,
    ) -> Result<BatchOperationSummary, SearchIndexError> {
        if articles.is_empty() {
            return Ok(BatchOperationSummary::empty());
        }

        self.validate_batch_size(articles.len())?;

        for article in &articles {
            Self::validate_article(article)?;
        }

        self.provider.bulk_index_documents(&articles).await
    }

    /// Run a search request.
    ///
    /// # Returns
    ///
    /// * `Ok(SearchResponse)` - Total hit count and the requested page of hits
    /// * `Err(SearchIndexError::ValidationError)` - If the request is invalid
    /// * `Err(SearchIndexError)` - If the search fails
    pub async fn search(&self, request: SearchRequest) -> Result<SearchResponse, SearchIndexError> {
        request.validate().map_err(SearchIndexError::validation)?;

        debug!(
            query = request.query.kind(),
            limit = request.limit,
            offset = request.offset,
            "Running search"
        );

        self.provider.search(&request).await
    }
}
