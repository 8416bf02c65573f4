//! Search query types for the blog index.
//!
//! This module defines the query structures used to search the index.

use serde::{Deserialize, Serialize};

/// Default number of hits returned by a search.
const DEFAULT_LIMIT: usize = 10;

/// Upper bound for `SearchRequest::with_limit`.
const MAX_LIMIT: usize = 100;

/// The supported search predicates.
///
/// Each variant maps to one query clause of the search engine's DSL.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ArticleQuery {
    /// Match every document in the index.
    MatchAll,

    /// Full-text query string, analysed and run against `fields`.
    /// An empty `fields` list searches the engine's default fields.
    QueryString { query: String, fields: Vec<String> },

    /// Exact, unanalysed term match on a single field.
    Term { field: String, value: String },

    /// Wildcard pattern (`*` and `?`) match on a single field.
    Wildcard { field: String, pattern: String },
}

impl ArticleQuery {
    /// Create a match-all query.
    pub fn match_all() -> Self {
        Self::MatchAll
    }

    /// Create a query-string query over the given fields.
    ///
    /// # Example
    ///
    /// ```
    /// use blog_search_shared::ArticleQuery;
    ///
    /// let query = ArticleQuery::query_string("搜索", ["title", "content"]);
    /// assert_eq!(query.kind(), "query_string");
    /// ```
    pub fn query_string<I, S>(query: impl Into<String>, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::QueryString {
            query: query.into(),
            fields: fields.into_iter().map(Into::into).collect(),
        }
    }

    /// Create a term query.
    pub fn term(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self::Term {
            field: field.into(),
            value: value.into(),
        }
    }

    /// Create a wildcard query.
    pub fn wildcard(field: impl Into<String>, pattern: impl Into<String>) -> Self {
        Self::Wildcard {
            field: field.into(),
            pattern: pattern.into(),
        }
    }

    /// Stable name of the query variant, used in logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::MatchAll => "match_all",
            Self::QueryString { .. } => "query_string",
            Self::Term { .. } => "term",
            Self::Wildcard { .. } => "wildcard",
        }
    }

    /// Validate the query parameters.
    ///
    /// Returns an error message if validation fails.
    pub fn validate(&self) -> Result<(), String> {
        match self {
            Self::MatchAll => Ok(()),
            Self::QueryString { query, fields } => {
                if query.trim().is_empty() {
                    return Err("Query string cannot be empty".to_string());
                }
                if fields.iter().any(|f| f.trim().is_empty()) {
                    return Err("Query string fields cannot be blank".to_string());
                }
                Ok(())
            }
            Self::Term { field, value } => {
                validate_field(field)?;
                if value.is_empty() {
                    return Err("Term value cannot be empty".to_string());
                }
                Ok(())
            }
            Self::Wildcard { field, pattern } => {
                validate_field(field)?;
                if pattern.is_empty() {
                    return Err("Wildcard pattern cannot be empty".to_string());
                }
                Ok(())
            }
        }
    }
}

fn validate_field(field: &str) -> Result<(), String> {
    if field.trim().is_empty() {
        return Err("Field name cannot be empty".to_string());
    }
    Ok(())
}

/// Search request parameters.
///
/// Wraps an `ArticleQuery` with pagination settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SearchRequest {
    /// The predicate to run.
    pub query: ArticleQuery,

    /// Maximum number of hits to return.
    /// Default is 10, maximum is 100.
    #[serde(default = "default_limit")]
    pub limit: usize,

    /// Offset for pagination.
    #[serde(default)]
    pub offset: usize,
}

fn default_limit() -> usize {
    DEFAULT_LIMIT
}

impl SearchRequest {
    /// Create a request with default pagination.
    pub fn new(query: ArticleQuery) -> Self {
        Self {
            query,
            limit: default_limit(),
            offset: 0,
        }
    }

    /// Set the limit for results.
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit.min(MAX_LIMIT);
        self
    }

    /// Set the offset for pagination.
    pub fn with_offset(mut self, offset: usize) -> Self {
        self.offset = offset;
        self
    }

    /// Validate the query and pagination parameters.
    pub fn validate(&self) -> Result<(), String> {
        self.query.validate()?;

        if self.limit == 0 {
            return Err("Limit must be at least 1".to_string());
        }

        Ok(())
    }
}

impl From<ArticleQuery> for SearchRequest {
    fn from(query: ArticleQuery) -> Self {
        Self::new(query)
    }
}
