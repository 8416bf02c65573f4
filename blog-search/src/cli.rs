//! Command-line argument definitions.

use clap::{Args, Parser, Subcommand};

use blog_search_shared::{ArticleQuery, SearchRequest};

#[derive(Debug, Parser)]
#[command(name = "blog-search")]
#[command(about = "Index, fetch and search blog articles in OpenSearch")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Index an article, replacing any existing one with the same id
    Index {
        /// Article id, also used as the document id
        id: i64,
        /// Article title
        #[arg(long)]
        title: String,
        /// Article body
        #[arg(long)]
        content: String,
    },
    /// Print the stored source of an article
    Get {
        /// Document id
        id: String,
    },
    /// Delete an article
    Delete {
        /// Document id
        id: String,
    },
    /// Search the index
    Search {
        #[command(subcommand)]
        query: SearchCommand,
    },
    /// Index the sample article, fetch it and run every query type against it
    Demo,
}

/// Pagination flags shared by all search subcommands.
#[derive(Debug, Clone, Copy, Args)]
pub struct Pagination {
    /// Maximum number of hits to print
    #[arg(long, default_value_t = 10)]
    pub limit: usize,
    /// Number of hits to skip
    #[arg(long, default_value_t = 0)]
    pub offset: usize,
}

/// Query variants.
#[derive(Debug, Subcommand)]
pub enum SearchCommand {
    /// Return every article
    MatchAll {
        #[command(flatten)]
        page: Pagination,
    },
    /// Full-text query string over one or more fields
    QueryString {
        /// Query text
        query: String,
        /// Field to search; repeat for several fields
        #[arg(short, long = "field")]
        fields: Vec<String>,
        #[command(flatten)]
        page: Pagination,
    },
    /// Exact term match on a single field
    Term {
        field: String,
        value: String,
        #[command(flatten)]
        page: Pagination,
    },
    /// Wildcard pattern match on a single field
    Wildcard {
        field: String,
        pattern: String,
        #[command(flatten)]
        page: Pagination,
    },
}

impl SearchCommand {
    /// Convert the parsed arguments into a `SearchRequest`.
    pub fn into_request(self) -> SearchRequest {
        let (query, page) = match self {
            Self::MatchAll { page } => (ArticleQuery::match_all(), page),
            Self::QueryString {
                query,
                fields,
                page,
            } => (ArticleQuery::query_string(query, fields), page),
            Self::Term { field, value, page } => (ArticleQuery::term(field, value), page),
            Self::Wildcard {
                field,
                pattern,
                page,
            } => (ArticleQuery::wildcard(field, pattern), page),
        };

        SearchRequest::new(query)
            .with_limit(page.limit)
            .with_offset(page.offset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Commands {
        Cli::try_parse_from(std::iter::once("blog-search").chain(args.iter().copied()))
            .unwrap()
            .command
    }

    fn parse_search(args: &[&str]) -> SearchRequest {
        match parse(args) {
            Commands::Search { query } => query.into_request(),
            other => panic!("Expected search command, got {:?}", other),
        }
    }

    #[test]
    fn test_cli_definition() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_index() {
        match parse(&["index", "3", "--title", "T", "--content", "C"]) {
            Commands::Index { id, title, content } => {
                assert_eq!(id, 3);
                assert_eq!(title, "T");
                assert_eq!(content, "C");
            }
            other => panic!("Unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_parse_get_and_demo() {
        assert!(matches!(parse(&["get", "3"]), Commands::Get { id } if id == "3"));
        assert!(matches!(parse(&["demo"]), Commands::Demo));
    }

    #[test]
    fn test_parse_match_all_defaults() {
        let request = parse_search(&["search", "match-all"]);

        assert_eq!(request.query, ArticleQuery::MatchAll);
        assert_eq!(request.limit, 10);
        assert_eq!(request.offset, 0);
    }

    #[test]
    fn test_parse_query_string_fields() {
        let request = parse_search(&[
            "search",
            "query-string",
            "搜索",
            "--field",
            "title",
            "-f",
            "content",
            "--limit",
            "5",
        ]);

        assert_eq!(
            request.query,
            ArticleQuery::query_string("搜索", ["title", "content"])
        );
        assert_eq!(request.limit, 5);
    }

    #[test]
    fn test_parse_term_and_wildcard() {
        let request = parse_search(&["search", "term", "title", "搜索", "--offset", "20"]);
        assert_eq!(request.query, ArticleQuery::term("title", "搜索"));
        assert_eq!(request.offset, 20);

        let request = parse_search(&["search", "wildcard", "title", "*搜索*"]);
        assert_eq!(request.query, ArticleQuery::wildcard("title", "*搜索*"));
    }

    #[test]
    fn test_limit_is_capped() {
        let request = parse_search(&["search", "match-all", "--limit", "1000"]);
        assert_eq!(request.limit, 100);
    }
}
