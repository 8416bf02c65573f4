//! Parsing of OpenSearch response bodies.

use serde_json::Value;
use tracing::warn;

use blog_search_shared::{ArticleHit, SearchResponse};

use crate::errors::SearchIndexError;

/// Parse the body of a `_search` response.
///
/// `hits.total` is accepted both as `{"value": n, "relation": ..}` (OpenSearch and
/// Elasticsearch 7+) and as a bare number (older engines). Hits without `_id` or
/// `_source` are skipped.
pub fn parse_search_response(body: &Value) -> Result<SearchResponse, SearchIndexError> {
    let hits = body
        .get("hits")
        .filter(|h| h.is_object())
        .ok_or_else(|| SearchIndexError::parse("Search response has no 'hits' object"))?;

    let total = match hits.get("total") {
        Some(Value::Number(n)) => n.as_u64(),
        Some(Value::Object(obj)) => obj.get("value").and_then(Value::as_u64),
        _ => None,
    }
    .ok_or_else(|| SearchIndexError::parse("Search response has no 'hits.total'"))?;

    let took_ms = body.get("took").and_then(Value::as_u64).unwrap_or(0);

    let parsed = hits
        .get("hits")
        .and_then(Value::as_array)
        .map(|items| items.iter().filter_map(parse_hit).collect())
        .unwrap_or_default();

    Ok(SearchResponse::new(parsed, total, took_ms))
}

/// Parse a single entry of `hits.hits`.
pub fn parse_hit(hit: &Value) -> Option<ArticleHit> {
    let document_id = hit.get("_id").and_then(Value::as_str);
    let source = hit.get("_source");

    match (document_id, source) {
        (Some(document_id), Some(source)) => Some(ArticleHit::new(
            document_id,
            hit.get("_score").and_then(Value::as_f64),
            source.clone(),
        )),
        _ => {
            warn!(hit = %hit, "Skipping search hit without _id or _source");
            None
        }
    }
}

/// Parse the body of a document get response.
///
/// Returns `None` when the engine reports `found: false`.
pub fn parse_get_response(body: &Value) -> Result<Option<ArticleHit>, SearchIndexError> {
    if !body.get("found").and_then(Value::as_bool).unwrap_or(false) {
        return Ok(None);
    }

    let document_id = body
        .get("_id")
        .and_then(Value::as_str)
        .ok_or_else(|| SearchIndexError::parse("Get response has no '_id'"))?;
    let source = body
        .get("_source")
        .ok_or_else(|| SearchIndexError::parse("Get response has no '_source'"))?;

    Ok(Some(ArticleHit::new(document_id, None, source.clone())))
}
