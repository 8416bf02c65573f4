//! Dependency initialization and wiring for the blog search client.

use tokio::time::sleep;
use tracing::{info, warn};

use crate::config::{AppConfig, ConnectionMode};
use crate::AppError;
use blog_search_repository::opensearch::IndexConfig;
use blog_search_repository::{
    OpenSearchProvider, SearchIndexError, SearchIndexProvider, SearchIndexService,
};

/// Container for all initialized dependencies.
pub struct Dependencies {
    /// The search service, connected and with its index in place.
    pub service: SearchIndexService,
}

impl Dependencies {
    /// Connect to OpenSearch and make sure the index exists.
    ///
    /// An endpoint that cannot be parsed is a configuration error and is never
    /// retried. The index check is the first request that reaches the cluster; in
    /// retry mode it is repeated while the cluster is unreachable.
    ///
    /// # Returns
    ///
    /// * `Ok(Dependencies)` - Initialized dependencies
    /// * `Err(AppError::ConfigError)` - If the endpoint is invalid
    /// * `Err(AppError::Search)` - If the cluster cannot be reached or the index cannot be created
    pub async fn new(config: &AppConfig) -> Result<Self, AppError> {
        info!(
            opensearch_url = %config.opensearch_url,
            index = %config.index_name,
            connection_mode = ?config.connection_mode,
            retry_interval_secs = config.retry_interval.as_secs(),
            max_retries = config.max_retries,
            "Initializing dependencies"
        );

        let provider = OpenSearchProvider::new(
            &config.opensearch_url,
            IndexConfig::new(config.index_name.clone()),
        )
        .await
        .map_err(|e| AppError::config(format!("Invalid OpenSearch endpoint: {}", e)))?;

        Self::with_provider(Box::new(provider), config).await
    }

    /// Wrap an already built provider and make sure its index exists.
    pub async fn with_provider(
        provider: Box<dyn SearchIndexProvider>,
        config: &AppConfig,
    ) -> Result<Self, AppError> {
        let service = SearchIndexService::new(provider);
        Self::ensure_index_with_retry(&service, config).await?;

        info!("OpenSearch connection established");

        Ok(Self { service })
    }

    /// Run the index check, retrying connection failures in retry mode.
    async fn ensure_index_with_retry(
        service: &SearchIndexService,
        config: &AppConfig,
    ) -> Result<(), AppError> {
        let mut attempt: u32 = 0;
        loop {
            match service.ensure_index().await {
                Ok(()) => return Ok(()),
                Err(e @ SearchIndexError::ConnectionError(_))
                    if config.connection_mode == ConnectionMode::Retry
                        && attempt < config.max_retries =>
                {
                    attempt += 1;
                    warn!(
                        opensearch_url = %config.opensearch_url,
                        error = %e,
                        attempt = attempt,
                        max_retries = config.max_retries,
                        retry_interval_secs = config.retry_interval.as_secs(),
                        "Failed to connect to OpenSearch, retrying..."
                    );
                    sleep(config.retry_interval).await;
                }
                Err(e) => return Err(e.into()),
            }
        }
    }
}
