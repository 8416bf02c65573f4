//! OpenSearch query builders.
//!
//! This module turns a `SearchRequest` into the request body of a `_search` call.

use serde_json::{json, Map, Value};

use blog_search_shared::{ArticleQuery, SearchRequest};

/// Build the `_search` request body for a `SearchRequest`.
///
/// Pagination is carried in the body as `from` / `size`.
pub fn build_search_body(request: &SearchRequest) -> Value {
    json!({
        "from": request.offset,
        "size": request.limit,
        "query": build_query(&request.query)
    })
}

/// Build the query clause for a single `ArticleQuery`.
pub fn build_query(query: &ArticleQuery) -> Value {
    match query {
        ArticleQuery::MatchAll => json!({ "match_all": {} }),
        ArticleQuery::QueryString { query, fields } => build_query_string(query, fields),
        ArticleQuery::Term { field, value } => {
            json!({ "term": field_clause(field, json!({ "value": value })) })
        }
        ArticleQuery::Wildcard { field, pattern } => {
            json!({ "wildcard": field_clause(field, json!({ "value": pattern })) })
        }
    }
}

/// Build a `query_string` clause.
///
/// The `fields` key is left out when no fields are given, so the engine falls
/// back to its `index.query.default_field` setting.
fn build_query_string(query: &str, fields: &[String]) -> Value {
    let mut clause = Map::new();
    clause.insert("query".to_string(), json!(query));
    if !fields.is_empty() {
        clause.insert("fields".to_string(), json!(fields));
    }
    json!({ "query_string": clause })
}

/// `{ <field>: <body> }`
fn field_clause(field: &str, body: Value) -> Value {
    let mut clause = Map::new();
    clause.insert(field.to_string(), body);
    Value::Object(clause)
}
