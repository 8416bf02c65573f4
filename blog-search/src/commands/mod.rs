//! CLI command implementations

use std::io::Write;

use tracing::info;

use blog_search_repository::SearchIndexService;
use blog_search_shared::{ArticleDocument, ArticleQuery, SearchRequest};

use crate::cli::Commands;
use crate::output::{write_document, write_search_response};
use crate::AppError;

/// Id of the sample article used by `demo`.
pub const SAMPLE_ARTICLE_ID: i64 = 3;

/// The text searched for by the demo queries.
pub const SAMPLE_QUERY_TEXT: &str = "搜索";

/// The article indexed by `demo`.
pub fn sample_article() -> ArticleDocument {
    ArticleDocument::new(
        SAMPLE_ARTICLE_ID,
        "3--ElasticSearch是一个基于Lucene的搜索服务器。",
        "3--它提供了一个分布式多用户能力的全文搜索引擎，基于RESTful web接口。\
         Elasticsearch是用Java开发的，并作为Apache许可条款下的开放源码发布，\
         是当前流行的企业级搜索引擎。设计用于云计算中，能够达到实时搜索，稳定，可靠，快速，安装使用方便。",
    )
}

/// The queries run by `demo`, in order.
pub fn sample_queries() -> Vec<ArticleQuery> {
    vec![
        ArticleQuery::match_all(),
        ArticleQuery::query_string(SAMPLE_QUERY_TEXT, ["title", "content"]),
        ArticleQuery::term("title", SAMPLE_QUERY_TEXT),
        ArticleQuery::wildcard("title", format!("*{}*", SAMPLE_QUERY_TEXT)),
    ]
}

/// Handle the CLI command
///
/// # Errors
/// Returns the search index error of the failing request, or an output error if
/// writing to `out` fails.
pub async fn handle_command<W: Write>(
    service: &SearchIndexService,
    command: Commands,
    out: &mut W,
) -> Result<(), AppError> {
    match command {
        Commands::Index { id, title, content } => {
            index_article(service, ArticleDocument::new(id, title, content), out).await
        }
        Commands::Get { id } => get_article(service, &id, out).await,
        Commands::Delete { id } => delete_article(service, &id, out).await,
        Commands::Search { query } => search(service, query.into_request(), out).await,
        Commands::Demo => run_demo(service, out).await,
    }
}

/// Index an article.
pub async fn index_article<W: Write>(
    service: &SearchIndexService,
    article: ArticleDocument,
    out: &mut W,
) -> Result<(), AppError> {
    let doc_id = article.document_id();
    service.index(article).await?;

    info!(doc_id = %doc_id, "Indexed article");
    writeln!(out, "Indexed document {}", doc_id)?;
    Ok(())
}

/// Fetch an article and print its source.
pub async fn get_article<W: Write>(
    service: &SearchIndexService,
    document_id: &str,
    out: &mut W,
) -> Result<(), AppError> {
    let hit = service.get(document_id).await?;
    write_document(out, document_id, hit.as_ref())?;
    Ok(())
}

/// Delete an article.
pub async fn delete_article<W: Write>(
    service: &SearchIndexService,
    document_id: &str,
    out: &mut W,
) -> Result<(), AppError> {
    service.delete(document_id).await?;

    info!(doc_id = %document_id, "Deleted article");
    writeln!(out, "Deleted document {}", document_id)?;
    Ok(())
}

/// Run a search and print the hits.
pub async fn search<W: Write>(
    service: &SearchIndexService,
    request: SearchRequest,
    out: &mut W,
) -> Result<(), AppError> {
    let kind = request.query.kind();
    let response = service.search(request).await?;

    info!(
        query = kind,
        total = response.total,
        returned = response.len(),
        took_ms = response.took_ms,
        "Search completed"
    );
    write_search_response(out, &response)?;
    Ok(())
}

/// Index the sample article, fetch it back and run each sample query.
///
/// Stops at the first failing step.
pub async fn run_demo<W: Write>(service: &SearchIndexService, out: &mut W) -> Result<(), AppError> {
    let article = sample_article();
    let doc_id = article.document_id();

    writeln!(out, "== index")?;
    index_article(service, article, out).await?;

    writeln!(out, "== get")?;
    get_article(service, &doc_id, out).await?;

    for query in sample_queries() {
        writeln!(out, "== {}", query.kind())?;
        search(service, SearchRequest::new(query), out).await?;
    }

    Ok(())
}
