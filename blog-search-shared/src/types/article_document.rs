//! Article document types for the blog index.
//!
//! This module defines the document structure that is stored in the search engine.

use serde::{Deserialize, Serialize};

/// Document representation for the blog index.
///
/// This struct represents an article as it is stored in the search engine.
///
/// # Fields
///
/// - `id`: Numeric article identifier, also used to derive the document ID
/// - `title`: Article title (primary search field)
/// - `content`: Article body text
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ArticleDocument {
    pub id: i64,
    pub title: String,
    pub content: String,
}

impl ArticleDocument {
    /// Create a new article document.
    ///
    /// # Example
    ///
    /// ```
    /// use blog_search_shared::ArticleDocument;
    ///
    /// let doc = ArticleDocument::new(3, "Title", "Body text");
    /// assert_eq!(doc.document_id(), "3");
    /// ```
    pub fn new(id: i64, title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            content: content.into(),
        }
    }

    /// Generate the document ID used in the search index.
    ///
    /// The document ID is the decimal rendering of the article `id`, so article 3
    /// is stored under `_id` "3".
    pub fn document_id(&self) -> String {
        self.id.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_article_document_new() {
        let doc = ArticleDocument::new(3, "Title", "Content");

        assert_eq!(doc.id, 3);
        assert_eq!(doc.title, "Title");
        assert_eq!(doc.content, "Content");
    }

    #[test]
    fn test_document_id() {
        let doc = ArticleDocument::new(42, "Title", "Content");
        assert_eq!(doc.document_id(), "42");
    }

    #[test]
    fn test_serialized_shape() {
        let doc = ArticleDocument::new(3, "3--标题", "3--正文");

        let value = serde_json::to_value(&doc).unwrap();

        assert_eq!(value["id"], 3);
        assert_eq!(value["title"], "3--标题");
        assert_eq!(value["content"], "3--正文");
        assert_eq!(value.as_object().unwrap().len(), 3);
    }
}
