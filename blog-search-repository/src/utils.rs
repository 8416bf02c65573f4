//! Utility functions for the blog search repository.

use crate::errors::SearchIndexError;

/// Maximum length of a document ID in bytes, as enforced by the search engine.
pub const MAX_DOCUMENT_ID_BYTES: usize = 512;

/// Validate a document ID before it is placed in a request path.
///
/// IDs must be non-blank, at most 512 bytes long and must not contain `/`.
///
/// # Example
///
/// ```
/// use blog_search_repository::validate_document_id;
///
/// assert!(validate_document_id("3").is_ok());
/// assert!(validate_document_id("a/b").is_err());
/// ```
pub fn validate_document_id(document_id: &str) -> Result<(), SearchIndexError> {
    if document_id.trim().is_empty() {
        return Err(SearchIndexError::validation("Document ID is required"));
    }
    if document_id.len() > MAX_DOCUMENT_ID_BYTES {
        return Err(SearchIndexError::validation(format!(
            "Document ID must be at most {} bytes, got {}",
            MAX_DOCUMENT_ID_BYTES,
            document_id.len()
        )));
    }
    if document_id.contains('/') {
        return Err(SearchIndexError::validation(format!(
            "Document ID '{}' must not contain '/'",
            document_id
        )));
    }
    Ok(())
}
