//! OpenSearch provider implementation.
//!
//! This module provides the concrete implementation of `SearchIndexProvider`
//! using the OpenSearch Rust crate.

use async_trait::async_trait;
use opensearch::{
    http::transport::{SingleNodeConnectionPool, TransportBuilder},
    indices::{IndicesCreateParts, IndicesExistsParts},
    params::Refresh,
    DeleteParts, GetParts, IndexParts, OpenSearch, SearchParts,
};
use serde_json::Value;
use tracing::{debug, error, info, instrument};
use url::Url;

use blog_search_shared::{ArticleDocument, ArticleHit, SearchRequest, SearchResponse};

use crate::errors::SearchIndexError;
use crate::interfaces::SearchIndexProvider;
use crate::opensearch::index_config::{get_index_settings, IndexConfig};
use crate::opensearch::{queries, responses};
use crate::types::{BatchOperationResult, BatchOperationSummary};

/// OpenSearch provider implementation.
///
/// Talks to a single node over the REST interface. Documents live in the index
/// named by `IndexConfig::index_name`.
///
/// # Example
///
/// ```ignore
/// use blog_search_repository::opensearch::IndexConfig;
/// use blog_search_repository::ArticleDocument;
/// let provider = OpenSearchProvider::new("http://127.0.0.1:9200", IndexConfig::new("blog")).await?;
///
/// provider.ensure_index_exists().await?;
/// provider.index_document(&ArticleDocument::new(3, "Title", "Body")).await?;
/// let stored = provider.get_document("3").await?;
/// ```
pub struct OpenSearchProvider {
    client: OpenSearch,
    index_config: IndexConfig,
}

impl OpenSearchProvider {
    /// Create a new OpenSearch provider connected to the specified URL.
    ///
    /// No request is sent here; an unreachable node surfaces on the first operation.
    ///
    /// # Arguments
    ///
    /// * `url` - The OpenSearch server URL (e.g., "http://127.0.0.1:9200")
    /// * `index_config` - The index configuration
    ///
    /// # Returns
    ///
    /// * `Ok(OpenSearchProvider)` - A new provider instance
    /// * `Err(SearchIndexError)` - If the URL is invalid or the transport cannot be built
    pub async fn new(url: &str, index_config: IndexConfig) -> Result<Self, SearchIndexError> {
        let parsed_url =
            Url::parse(url).map_err(|e| SearchIndexError::connection(e.to_string()))?;

        let conn_pool = SingleNodeConnectionPool::new(parsed_url);
        let transport = TransportBuilder::new(conn_pool)
            .disable_proxy()
            .build()
            .map_err(|e| SearchIndexError::connection(e.to_string()))?;

        let client = OpenSearch::new(transport);

        info!(
            url = %url,
            index = %index_config.index_name,
            "Created OpenSearch provider"
        );

        Ok(Self {
            client,
            index_config,
        })
    }

    /// The index this provider targets.
    pub fn index_name(&self) -> &str {
        &self.index_config.index_name
    }

    /// Read the error body of a failed response and log it.
    async fn failure_body(response: opensearch::http::response::Response, op: &str) -> String {
        let status = response.status_code();
        let body = response.text().await.unwrap_or_default();
        error!(status = %status, body = %body, operation = op, "Request failed");
        format!("{} failed with status {}: {}", op, status, body)
    }
}

#[async_trait]
impl SearchIndexProvider for OpenSearchProvider {
    /// Create the index with its settings and mappings unless it already exists.
    #[instrument(skip(self))]
    async fn ensure_index_exists(&self) -> Result<(), SearchIndexError> {
        let index_name = self.index_config.index_name.as_str();

        let response = self
            .client
            .indices()
            .exists(IndicesExistsParts::Index(&[index_name]))
            .send()
            .await
            .map_err(|e| SearchIndexError::connection(e.to_string()))?;

        let status = response.status_code();
        if status.is_success() {
            debug!(index = %index_name, "Index already exists");
            return Ok(());
        }
        if status.as_u16() != 404 {
            return Err(SearchIndexError::index_creation(
                Self::failure_body(response, "Index existence check").await,
            ));
        }

        let response = self
            .client
            .indices()
            .create(IndicesCreateParts::Index(index_name))
            .body(get_index_settings(&self.index_config))
            .send()
            .await
            .map_err(|e| SearchIndexError::connection(e.to_string()))?;

        if !response.status_code().is_success() {
            return Err(SearchIndexError::index_creation(
                Self::failure_body(response, "Index creation").await,
            ));
        }

        info!(index = %index_name, "Created index");
        Ok(())
    }

    /// Store a document under its document ID, replacing any previous version.
    async fn index_document(&self, document: &ArticleDocument) -> Result<(), SearchIndexError> {
        let doc_id = document.document_id();
        let refresh = if self.index_config.refresh_on_write {
            Refresh::WaitFor
        } else {
            Refresh::False
        };

        let response = self
            .client
            .index(IndexParts::IndexId(&self.index_config.index_name, &doc_id))
            .refresh(refresh)
            .body(document)
            .send()
            .await
            .map_err(|e| SearchIndexError::connection(e.to_string()))?;

        if !response.status_code().is_success() {
            return Err(SearchIndexError::index(
                Self::failure_body(response, "Index").await,
            ));
        }

        debug!(doc_id = %doc_id, "Document indexed");
        Ok(())
    }

    /// Fetch a stored document. A 404 maps to `Ok(None)`.
    async fn get_document(
        &self,
        document_id: &str,
    ) -> Result<Option<ArticleHit>, SearchIndexError> {
        let response = self
            .client
            .get(GetParts::IndexId(&self.index_config.index_name, document_id))
            .send()
            .await
            .map_err(|e| SearchIndexError::connection(e.to_string()))?;

        let status = response.status_code();
        if status.as_u16() == 404 {
            debug!(doc_id = %document_id, "Document not found");
            return Ok(None);
        }
        if !status.is_success() {
            return Err(SearchIndexError::get(
                Self::failure_body(response, "Get").await,
            ));
        }

        let body = response
            .json::<Value>()
            .await
            .map_err(|e| SearchIndexError::parse(e.to_string()))?;

        responses::parse_get_response(&body)
    }

    /// Delete a document. A 404 counts as success.
    async fn delete_document(&self, document_id: &str) -> Result<(), SearchIndexError> {
        let response = self
            .client
            .delete(DeleteParts::IndexId(
                &self.index_config.index_name,
                document_id,
            ))
            .send()
            .await
            .map_err(|e| SearchIndexError::connection(e.to_string()))?;

        let status = response.status_code();

        // 404 is acceptable - document may not exist
        if !status.is_success() && status.as_u16() != 404 {
            return Err(SearchIndexError::delete(
                Self::failure_body(response, "Delete").await,
            ));
        }

        debug!(doc_id = %document_id, "Document deleted");
        Ok(())
    }

    /// Index each document in turn and collect per-document results.
    async fn bulk_index_documents(
        &self,
        documents: &[ArticleDocument],
    ) -> Result<BatchOperationSummary, SearchIndexError> {
        let mut results = Vec::with_capacity(documents.len());

        for document in documents {
            let result = match SearchIndexProvider::index_document(self, document).await {
                Ok(()) => BatchOperationResult::succeeded(document.document_id()),
                Err(e) => BatchOperationResult::failed(document.document_id(), e),
            };
            results.push(result);
        }

        let summary = BatchOperationSummary::from_results(results);
        debug!(
            total = summary.total,
            succeeded = summary.succeeded,
            failed = summary.failed,
            "Bulk index finished"
        );
        Ok(summary)
    }

    /// Run a search and parse the hits.
    #[instrument(skip(self, request), fields(query = request.query.kind()))]
    async fn search(&self, request: &SearchRequest) -> Result<SearchResponse, SearchIndexError> {
        let index_name = self.index_config.index_name.as_str();
        let body = queries::build_search_body(request);

        let response = self
            .client
            .search(SearchParts::Index(&[index_name]))
            .body(body)
            .send()
            .await
            .map_err(|e| SearchIndexError::connection(e.to_string()))?;

        if !response.status_code().is_success() {
            return Err(SearchIndexError::search(
                Self::failure_body(response, "Search").await,
            ));
        }

        let body = response
            .json::<Value>()
            .await
            .map_err(|e| SearchIndexError::parse(e.to_string()))?;

        let parsed = responses::parse_search_response(&body)?;
        debug!(total = parsed.total, took_ms = parsed.took_ms, "Search finished");
        Ok(parsed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::sync::Arc;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::{TcpListener, TcpStream};
    use tokio::sync::Mutex;

    /// A request as seen by the canned server.
    #[derive(Debug, Clone)]
    struct RecordedRequest {
        request_line: String,
        body: String,
    }

    impl RecordedRequest {
        fn json_body(&self) -> Value {
            serde_json::from_str(&self.body).unwrap()
        }
    }

    fn reason(status: u16) -> &'static str {
        match status {
            200 => "OK",
            201 => "Created",
            404 => "Not Found",
            500 => "Internal Server Error",
            _ => "Unknown",
        }
    }

    async fn read_request(socket: &mut TcpStream) -> RecordedRequest {
        let mut buf = Vec::new();
        let mut chunk = [0u8; 4096];

        let header_end = loop {
            let n = socket.read(&mut chunk).await.unwrap();
            assert!(n > 0, "connection closed before the request headers ended");
            buf.extend_from_slice(&chunk[..n]);
            if let Some(pos) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
                break pos + 4;
            }
        };

        let head = String::from_utf8_lossy(&buf[..header_end]).to_string();
        let content_length = head
            .lines()
            .filter_map(|line| line.split_once(':'))
            .find(|(name, _)| name.trim().eq_ignore_ascii_case("content-length"))
            .and_then(|(_, value)| value.trim().parse::<usize>().ok())
            .unwrap_or(0);

        while buf.len() < header_end + content_length {
            let n = socket.read(&mut chunk).await.unwrap();
            if n == 0 {
                break;
            }
            buf.extend_from_slice(&chunk[..n]);
        }

        RecordedRequest {
            request_line: head.lines().next().unwrap_or_default().to_string(),
            body: String::from_utf8_lossy(&buf[header_end..]).to_string(),
        }
    }

    /// Start a server that answers one connection per canned `(status, body)`, in order.
    async fn serve(
        responses: Vec<(u16, &'static str)>,
    ) -> (OpenSearchProvider, Arc<Mutex<Vec<RecordedRequest>>>) {
        serve_with_config(responses, IndexConfig::new("blog")).await
    }

    async fn serve_with_config(
        responses: Vec<(u16, &'static str)>,
        index_config: IndexConfig,
    ) -> (OpenSearchProvider, Arc<Mutex<Vec<RecordedRequest>>>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let url = format!("http://{}", listener.local_addr().unwrap());
        let recorded = Arc::new(Mutex::new(Vec::new()));

        let log = Arc::clone(&recorded);
        tokio::spawn(async move {
            for (status, body) in responses {
                let (mut socket, _) = listener.accept().await.unwrap();
                let request = read_request(&mut socket).await;
                log.lock().await.push(request);

                let response = format!(
                    "HTTP/1.1 {} {}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{}",
                    status,
                    reason(status),
                    body.len(),
                    body
                );
                socket.write_all(response.as_bytes()).await.unwrap();
                let _ = socket.shutdown().await;
            }
        });

        let provider = OpenSearchProvider::new(&url, index_config).await.unwrap();
        (provider, recorded)
    }

    #[tokio::test]
    async fn test_new_rejects_invalid_url() {
        let result = OpenSearchProvider::new("not a url", IndexConfig::default()).await;
        assert!(matches!(result, Err(SearchIndexError::ConnectionError(_))));
    }

    #[tokio::test]
    async fn test_new_keeps_index_name() {
        let provider = OpenSearchProvider::new("http://127.0.0.1:9200", IndexConfig::new("blog"))
            .await
            .unwrap();
        assert_eq!(provider.index_name(), "blog");
    }

    #[tokio::test]
    async fn test_ensure_index_creates_missing_index() {
        let (provider, requests) = serve(vec![(404, ""), (200, r#"{"acknowledged":true}"#)]).await;

        provider.ensure_index_exists().await.unwrap();

        let requests = requests.lock().await;
        assert_eq!(requests.len(), 2);
        assert_eq!(requests[0].request_line, "HEAD /blog HTTP/1.1");
        assert_eq!(requests[1].request_line, "PUT /blog HTTP/1.1");

        let settings = requests[1].json_body();
        assert_eq!(settings["mappings"]["properties"]["id"]["type"], "long");
        assert_eq!(
            settings["mappings"]["properties"]["title"]["fields"]["raw"]["type"],
            "keyword"
        );
    }

    #[tokio::test]
    async fn test_ensure_index_leaves_existing_index() {
        let (provider, requests) = serve(vec![(200, "")]).await;

        provider.ensure_index_exists().await.unwrap();

        let requests = requests.lock().await;
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].request_line, "HEAD /blog HTTP/1.1");
    }

    #[tokio::test]
    async fn test_ensure_index_existence_check_failure() {
        let (provider, requests) = serve(vec![(500, "")]).await;

        match provider.ensure_index_exists().await {
            Err(SearchIndexError::IndexCreationError(msg)) => assert!(msg.contains("500")),
            other => panic!("Expected IndexCreationError, got {:?}", other),
        }
        // No creation attempt after a failed existence check
        assert_eq!(requests.lock().await.len(), 1);
    }

    #[tokio::test]
    async fn test_index_document_waits_for_refresh() {
        let (provider, requests) = serve(vec![(201, r#"{"result":"created"}"#)]).await;
        let document = ArticleDocument::new(3, "Title", "Body");

        provider.index_document(&document).await.unwrap();

        let requests = requests.lock().await;
        let line = &requests[0].request_line;
        assert!(line.starts_with("PUT /blog/_doc/3?"), "{}", line);
        assert!(line.contains("refresh=wait_for"), "{}", line);
        assert_eq!(
            requests[0].json_body(),
            json!({"id": 3, "title": "Title", "content": "Body"})
        );
    }

    #[tokio::test]
    async fn test_index_document_without_refresh() {
        let (provider, requests) = serve_with_config(
            vec![(201, r#"{"result":"created"}"#)],
            IndexConfig::new("blog").with_refresh_on_write(false),
        )
        .await;

        provider
            .index_document(&ArticleDocument::new(4, "Title", "Body"))
            .await
            .unwrap();

        let requests = requests.lock().await;
        assert!(requests[0].request_line.contains("refresh=false"));
        assert!(!requests[0].request_line.contains("wait_for"));
    }

    #[tokio::test]
    async fn test_index_document_rejected() {
        let (provider, _) = serve(vec![(500, r#"{"error":"disk full"}"#)]).await;

        match provider
            .index_document(&ArticleDocument::new(3, "Title", "Body"))
            .await
        {
            Err(SearchIndexError::IndexError(msg)) => {
                assert!(msg.contains("500"));
                assert!(msg.contains("disk full"));
            }
            other => panic!("Expected IndexError, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_get_document_returns_source() {
        let (provider, requests) = serve(vec![(
            200,
            r#"{"_index":"blog","_id":"3","found":true,"_source":{"id":3,"title":"t","content":"c"}}"#,
        )])
        .await;

        let hit = provider.get_document("3").await.unwrap().unwrap();

        assert_eq!(hit.document_id, "3");
        assert_eq!(hit.title(), Some("t"));
        assert_eq!(
            requests.lock().await[0].request_line,
            "GET /blog/_doc/3 HTTP/1.1"
        );
    }

    #[tokio::test]
    async fn test_get_missing_document_is_none() {
        let (provider, requests) =
            serve(vec![(404, r#"{"_index":"blog","_id":"9","found":false}"#)]).await;

        let hit = provider.get_document("9").await.unwrap();

        assert!(hit.is_none());
        assert_eq!(
            requests.lock().await[0].request_line,
            "GET /blog/_doc/9 HTTP/1.1"
        );
    }

    #[tokio::test]
    async fn test_get_document_server_error() {
        let (provider, _) = serve(vec![(500, r#"{"error":"shard failure"}"#)]).await;

        match provider.get_document("3").await {
            Err(SearchIndexError::GetError(msg)) => {
                assert!(msg.contains("500"));
                assert!(msg.contains("shard failure"));
            }
            other => panic!("Expected GetError, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_delete_missing_document_succeeds() {
        let (provider, requests) = serve(vec![(404, r#"{"result":"not_found"}"#)]).await;

        provider.delete_document("9").await.unwrap();

        assert_eq!(
            requests.lock().await[0].request_line,
            "DELETE /blog/_doc/9 HTTP/1.1"
        );
    }

    #[tokio::test]
    async fn test_delete_document_server_error() {
        let (provider, _) = serve(vec![(500, r#"{"error":"boom"}"#)]).await;

        let result = provider.delete_document("3").await;
        assert!(matches!(result, Err(SearchIndexError::DeleteError(_))));
    }

    #[tokio::test]
    async fn test_search_sends_pagination_in_body() {
        let (provider, requests) = serve(vec![(
            200,
            r#"{"took":2,"hits":{"total":{"value":5,"relation":"eq"},"hits":[{"_id":"3","_score":1.0,"_source":{"id":3,"title":"t","content":"c"}}]}}"#,
        )])
        .await;
        let request = SearchRequest::new(blog_search_shared::ArticleQuery::match_all())
            .with_limit(1)
            .with_offset(2);

        let response = provider.search(&request).await.unwrap();

        assert_eq!(response.total, 5);
        assert_eq!(response.len(), 1);
        assert_eq!(response.took_ms, 2);

        let requests = requests.lock().await;
        assert_eq!(requests[0].request_line, "POST /blog/_search HTTP/1.1");
        assert_eq!(
            requests[0].json_body(),
            json!({"from": 2, "size": 1, "query": {"match_all": {}}})
        );
    }

    #[tokio::test]
    async fn test_search_failure_carries_status_and_body() {
        let (provider, _) = serve(vec![(500, r#"{"error":"boom"}"#)]).await;
        let request = SearchRequest::new(blog_search_shared::ArticleQuery::match_all());

        match provider.search(&request).await {
            Err(SearchIndexError::SearchError(msg)) => {
                assert!(msg.contains("500"));
                assert!(msg.contains("boom"));
            }
            other => panic!("Expected SearchError, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_unreachable_node_is_connection_error() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let url = format!("http://{}", listener.local_addr().unwrap());
        drop(listener);

        let provider = OpenSearchProvider::new(&url, IndexConfig::new("blog"))
            .await
            .unwrap();
        let request = SearchRequest::new(blog_search_shared::ArticleQuery::match_all());

        assert!(matches!(
            provider.ensure_index_exists().await,
            Err(SearchIndexError::ConnectionError(_))
        ));
        assert!(matches!(
            provider
                .index_document(&ArticleDocument::new(3, "Title", "Body"))
                .await,
            Err(SearchIndexError::ConnectionError(_))
        ));
        assert!(matches!(
            provider.get_document("3").await,
            Err(SearchIndexError::ConnectionError(_))
        ));
        assert!(matches!(
            provider.delete_document("3").await,
            Err(SearchIndexError::ConnectionError(_))
        ));
        assert!(matches!(
            provider.search(&request).await,
            Err(SearchIndexError::ConnectionError(_))
        ));
    }
}
