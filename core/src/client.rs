//! Stateless request builder and response parser for the catalog API.
//!
//! # Design
//! `CatalogClient` holds only `base_url` and `api_key` and carries no mutable
//! state between calls. Each query intent has a `build_*` method producing an
//! `HttpRequest`; every listing endpoint shares the same response envelope,
//! so a single `parse_results` consumes the `HttpResponse`. The caller (see
//! `catalog::Catalog`) executes the actual HTTP round-trip in between,
//! keeping this layer deterministic and free of I/O dependencies.

use crate::error::CatalogError;
use crate::http::{HttpRequest, HttpResponse};
use crate::types::{Category, Movie, MoviePage};

/// Base URL of the production catalog provider.
pub const TMDB_BASE_URL: &str = "https://api.themoviedb.org/3";

/// Synchronous, stateless client for the movie catalog API.
///
/// Builds `HttpRequest` values and parses `HttpResponse` values without
/// touching the network.
#[derive(Debug, Clone)]
pub struct CatalogClient {
    base_url: String,
    api_key: String,
}

impl CatalogClient {
    pub fn new(base_url: &str, api_key: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
        }
    }

    /// Client bound to the production provider host.
    pub fn tmdb(api_key: &str) -> Self {
        Self::new(TMDB_BASE_URL, api_key)
    }

    /// `GET /movie/{category}` — page 1, fixed locale.
    pub fn build_category(&self, category: Category) -> HttpRequest {
        HttpRequest {
            url: format!("{}/movie/{}", self.base_url, category.as_str()),
            query: self.listing_query(),
        }
    }

    /// `GET /movie/{id}/recommendations` — page 1, fixed locale.
    pub fn build_recommendations(&self, movie_id: i64) -> HttpRequest {
        HttpRequest {
            url: format!("{}/movie/{movie_id}/recommendations", self.base_url),
            query: self.listing_query(),
        }
    }

    /// `GET /search/movie` — free-text title search. The query value is
    /// carried raw; the transport percent-encodes it.
    pub fn build_search(&self, query: &str) -> HttpRequest {
        HttpRequest {
            url: format!("{}/search/movie", self.base_url),
            query: vec![
                ("api_key".to_string(), self.api_key.clone()),
                ("query".to_string(), query.to_string()),
            ],
        }
    }

    /// Decode a listing response into its `results` movies.
    pub fn parse_results(&self, response: HttpResponse) -> Result<Vec<Movie>, CatalogError> {
        if response.status != 200 {
            return Err(CatalogError::Http {
                status: response.status,
                body: response.body,
            });
        }
        let page: MoviePage = serde_json::from_str(&response.body)
            .map_err(|e| CatalogError::Decode(e.to_string()))?;
        Ok(page.results)
    }

    fn listing_query(&self) -> Vec<(String, String)> {
        vec![
            ("api_key".to_string(), self.api_key.clone()),
            ("language".to_string(), "en-US".to_string()),
            ("page".to_string(), "1".to_string()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> CatalogClient {
        CatalogClient::new("http://localhost:3000", "test-key")
    }

    #[test]
    fn build_category_produces_correct_request() {
        let req = client().build_category(Category::NowPlaying);
        assert_eq!(req.url, "http://localhost:3000/movie/now_playing");
        assert_eq!(
            req.query,
            vec![
                ("api_key".to_string(), "test-key".to_string()),
                ("language".to_string(), "en-US".to_string()),
                ("page".to_string(), "1".to_string()),
            ]
        );
    }

    #[test]
    fn build_recommendations_produces_correct_request() {
        let req = client().build_recommendations(550);
        assert_eq!(req.url, "http://localhost:3000/movie/550/recommendations");
        assert_eq!(req.query.len(), 3);
    }

    #[test]
    fn build_search_produces_correct_request() {
        let req = client().build_search("fight club");
        assert_eq!(req.url, "http://localhost:3000/search/movie");
        assert_eq!(
            req.query,
            vec![
                ("api_key".to_string(), "test-key".to_string()),
                ("query".to_string(), "fight club".to_string()),
            ]
        );
    }

    #[test]
    fn trailing_slash_is_stripped() {
        let client = CatalogClient::new("http://localhost:3000/", "k");
        let req = client.build_category(Category::Popular);
        assert_eq!(req.url, "http://localhost:3000/movie/popular");
    }

    #[test]
    fn parse_results_success_maps_every_field() {
        let response = HttpResponse {
            status: 200,
            body: r#"{"page":1,"results":[
                {"id":42,"title":"X","overview":"o","poster_path":"/p.jpg",
                 "backdrop_path":"/b.jpg","vote_average":7.1,"popularity":3.2,
                 "original_language":"en","release_date":"2020-01-01","vote_count":10}
            ]}"#
            .to_string(),
        };
        let movies = client().parse_results(response).unwrap();
        assert_eq!(movies.len(), 1);
        let m = &movies[0];
        assert_eq!(m.id, 42);
        assert_eq!(m.title, "X");
        assert_eq!(m.overview, "o");
        assert_eq!(m.poster_path.as_deref(), Some("/p.jpg"));
        assert_eq!(m.backdrop_path.as_deref(), Some("/b.jpg"));
        assert_eq!(m.vote_average, 7.1);
        assert_eq!(m.popularity, 3.2);
        assert_eq!(m.original_language, "en");
        assert_eq!(m.release_date, "2020-01-01");
        assert_eq!(m.vote_count, 10);
    }

    #[test]
    fn parse_results_length_matches_results_array() {
        let response = HttpResponse {
            status: 200,
            body: r#"{"results":[{"id":1,"title":"a"},{"id":2,"title":"b"},{"id":3,"title":"c"}]}"#
                .to_string(),
        };
        let movies = client().parse_results(response).unwrap();
        assert_eq!(movies.len(), 3);
    }

    #[test]
    fn parse_results_non_200_status() {
        let response = HttpResponse {
            status: 401,
            body: r#"{"status_message":"Invalid API key"}"#.to_string(),
        };
        let err = client().parse_results(response).unwrap_err();
        assert!(matches!(err, CatalogError::Http { status: 401, .. }));
    }

    #[test]
    fn parse_results_bad_json() {
        let response = HttpResponse {
            status: 200,
            body: "not json".to_string(),
        };
        let err = client().parse_results(response).unwrap_err();
        assert!(matches!(err, CatalogError::Decode(_)));
    }

    #[test]
    fn parse_results_empty_results_array() {
        let response = HttpResponse {
            status: 200,
            body: r#"{"page":1,"results":[],"total_pages":0,"total_results":0}"#.to_string(),
        };
        let movies = client().parse_results(response).unwrap();
        assert!(movies.is_empty());
    }
}
