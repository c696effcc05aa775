//! Executing catalog service with the fail-soft policy.
//!
//! # Design
//! `Catalog` pairs a stateless `CatalogClient` with an `HttpTransport` and
//! exposes two surfaces per query intent:
//!
//! - `try_*` returns `Result<Vec<Movie>, CatalogError>` with the failure
//!   classified, so callers (and tests) can distinguish "no results" from
//!   "request failed".
//! - The plain methods apply the UI-facing fail-soft policy: any failure is
//!   logged and folded into an empty list, never surfaced. A missing
//!   category must not block rendering of the others.
//!
//! Every call is an independent, idempotent read; there are no retries and
//! no ordering guarantees between calls.

use crate::client::CatalogClient;
use crate::error::CatalogError;
use crate::http::HttpTransport;
use crate::types::{Category, Movie};

/// Catalog query service over a pluggable HTTP transport.
#[derive(Debug, Clone)]
pub struct Catalog<T: HttpTransport> {
    client: CatalogClient,
    transport: T,
}

impl<T: HttpTransport> Catalog<T> {
    pub fn new(client: CatalogClient, transport: T) -> Self {
        Self { client, transport }
    }

    /// Fetch a category listing, errors visible.
    pub fn try_fetch_category(&self, category: Category) -> Result<Vec<Movie>, CatalogError> {
        let request = self.client.build_category(category);
        let response = self.transport.execute(&request)?;
        self.client.parse_results(response)
    }

    /// Fetch recommendations for a movie, errors visible.
    pub fn try_fetch_recommendations(&self, movie_id: i64) -> Result<Vec<Movie>, CatalogError> {
        let request = self.client.build_recommendations(movie_id);
        let response = self.transport.execute(&request)?;
        self.client.parse_results(response)
    }

    /// Free-text title search, errors visible. `Ok(vec![])` means the
    /// catalog matched nothing; `Err` means the request itself failed.
    pub fn try_search(&self, query: &str) -> Result<Vec<Movie>, CatalogError> {
        let request = self.client.build_search(query);
        let response = self.transport.execute(&request)?;
        self.client.parse_results(response)
    }

    /// Fail-soft category fetch: empty list on any failure.
    pub fn fetch_category(&self, category: Category) -> Vec<Movie> {
        self.try_fetch_category(category)
            .map_err(|err| {
                tracing::warn!(category = category.as_str(), error = %err, "category fetch failed")
            })
            .unwrap_or_default()
    }

    /// Fail-soft recommendations fetch: empty list on any failure.
    pub fn fetch_recommendations(&self, movie_id: i64) -> Vec<Movie> {
        self.try_fetch_recommendations(movie_id)
            .map_err(|err| {
                tracing::warn!(movie_id, error = %err, "recommendations fetch failed")
            })
            .unwrap_or_default()
    }

    /// Fail-soft search: empty list on any failure, indistinguishable from
    /// zero matches. Use `try_search` where the distinction matters.
    pub fn search(&self, query: &str) -> Vec<Movie> {
        self.try_search(query)
            .map_err(|err| tracing::warn!(error = %err, "search failed"))
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::{HttpRequest, HttpResponse};

    /// Transport that always answers with a fixed response.
    struct FixedTransport {
        status: u16,
        body: &'static str,
    }

    impl HttpTransport for FixedTransport {
        fn execute(&self, _request: &HttpRequest) -> Result<HttpResponse, CatalogError> {
            Ok(HttpResponse {
                status: self.status,
                body: self.body.to_string(),
            })
        }
    }

    /// Transport that never reaches the server.
    struct DownTransport;

    impl HttpTransport for DownTransport {
        fn execute(&self, _request: &HttpRequest) -> Result<HttpResponse, CatalogError> {
            Err(CatalogError::Transport("connection refused".to_string()))
        }
    }

    fn catalog<T: HttpTransport>(transport: T) -> Catalog<T> {
        Catalog::new(CatalogClient::new("http://localhost:3000", "k"), transport)
    }

    #[test]
    fn fetch_category_returns_parsed_movies() {
        let c = catalog(FixedTransport {
            status: 200,
            body: r#"{"results":[{"id":1,"title":"a"},{"id":2,"title":"b"}]}"#,
        });
        let movies = c.fetch_category(Category::Popular);
        assert_eq!(movies.len(), 2);
        assert_eq!(movies[0].id, 1);
    }

    #[test]
    fn transport_failure_yields_empty_never_panics() {
        let c = catalog(DownTransport);
        for category in Category::ALL {
            assert!(c.fetch_category(category).is_empty());
        }
        assert!(c.fetch_recommendations(550).is_empty());
        assert!(c.search("anything").is_empty());
    }

    #[test]
    fn http_error_yields_empty_on_fail_soft_surface() {
        let c = catalog(FixedTransport {
            status: 500,
            body: "internal error",
        });
        assert!(c.fetch_category(Category::TopRated).is_empty());
    }

    #[test]
    fn try_search_distinguishes_no_results_from_failure() {
        let empty = catalog(FixedTransport {
            status: 200,
            body: r#"{"results":[]}"#,
        });
        assert!(matches!(empty.try_search("zzz"), Ok(ref v) if v.is_empty()));

        let down = catalog(DownTransport);
        assert!(matches!(down.try_search("zzz"), Err(CatalogError::Transport(_))));
    }

    #[test]
    fn try_fetch_category_surfaces_decode_error() {
        let c = catalog(FixedTransport {
            status: 200,
            body: "<html>not json</html>",
        });
        let err = c.try_fetch_category(Category::Upcoming).unwrap_err();
        assert!(matches!(err, CatalogError::Decode(_)));
    }
}
