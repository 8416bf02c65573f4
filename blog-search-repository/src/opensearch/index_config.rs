//! OpenSearch index configuration and mappings.
//!
//! This module defines the index settings and mappings for the blog article index.

use serde_json::{json, Value};

/// The default name of the article index.
pub const DEFAULT_INDEX_NAME: &str = "blog";

/// Configuration for the search index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexConfig {
    /// The index all document and search operations target.
    pub index_name: String,
    /// Number of primary shards used when the index is created.
    pub number_of_shards: u32,
    /// Number of replicas used when the index is created.
    pub number_of_replicas: u32,
    /// Wait for a refresh after each write so the document is immediately searchable.
    pub refresh_on_write: bool,
}

impl IndexConfig {
    /// Create a new index configuration with a single shard, no replicas and
    /// refresh-on-write enabled.
    ///
    /// # Arguments
    ///
    /// * `index_name` - The index name
    pub fn new(index_name: impl Into<String>) -> Self {
        Self {
            index_name: index_name.into(),
            number_of_shards: 1,
            number_of_replicas: 0,
            refresh_on_write: true,
        }
    }

    /// Override the replica count.
    pub fn with_replicas(mut self, number_of_replicas: u32) -> Self {
        self.number_of_replicas = number_of_replicas;
        self
    }

    /// Enable or disable waiting for a refresh after each write.
    pub fn with_refresh_on_write(mut self, refresh_on_write: bool) -> Self {
        self.refresh_on_write = refresh_on_write;
        self
    }
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self::new(DEFAULT_INDEX_NAME)
    }
}

/// Get the index settings and mappings for the article index.
///
/// The configuration includes:
/// - **id**: `long`, the numeric article identifier
/// - **title**: analysed `text` with a `raw` keyword sub-field for exact matches
/// - **content**: analysed `text`
pub fn get_index_settings(config: &IndexConfig) -> Value {
    json!({
        "settings": {
            "number_of_shards": config.number_of_shards,
            "number_of_replicas": config.number_of_replicas
        },
        "mappings": {
            "properties": {
                "id": {
                    "type": "long"
                },
                "title": {
                    "type": "text",
                    "fields": {
                        "raw": {
                            "type": "keyword"
                        }
                    }
                },
                "content": {
                    "type": "text"
                }
            }
        }
    })
}
