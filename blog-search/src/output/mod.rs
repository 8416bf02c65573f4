//! Rendering of documents and search results.
//!
//! Command results go to a caller-supplied writer (stdout in the binary) so that
//! log output on stderr never interleaves with them.

use std::io::{self, Write};

use blog_search_shared::{ArticleHit, SearchResponse};

/// Printed in place of a title when the hit's source has no `title` field.
const NO_TITLE: &str = "(no title)";

/// Print a search response: the total hit count, then each hit's source and title.
pub fn write_search_response<W: Write>(out: &mut W, response: &SearchResponse) -> io::Result<()> {
    writeln!(out, "Total hits: {}", response.total)?;
    for hit in &response.hits {
        writeln!(out, "{}", hit.source_as_string())?;
        let title = hit.title_text();
        writeln!(out, "{}", title.as_deref().unwrap_or(NO_TITLE))?;
    }
    Ok(())
}

/// Print the result of a get: the source on one line, or a not-found notice.
pub fn write_document<W: Write>(
    out: &mut W,
    document_id: &str,
    hit: Option<&ArticleHit>,
) -> io::Result<()> {
    match hit {
        Some(hit) => writeln!(out, "{}", hit.source_as_string()),
        None => writeln!(out, "Document {} not found", document_id),
    }
}
