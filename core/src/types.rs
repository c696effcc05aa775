//! Domain DTOs for the movie catalog API.
//!
//! # Design
//! These types mirror the remote provider's JSON schema but are defined
//! independently; the mock-catalog crate carries its own copies and the
//! integration tests catch schema drift. Field names match the provider's
//! snake_case wire names 1:1, so no serde renames are needed.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A single movie as returned by the catalog provider.
///
/// Treated as immutable by this crate: the core only changes which movies
/// are members of the favorites collection, never a movie's fields.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Movie {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub overview: String,
    /// Relative image identifier; the presentation layer joins it with the
    /// image host base URL. Nullable in provider responses.
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub backdrop_path: Option<String>,
    #[serde(default)]
    pub vote_average: f64,
    #[serde(default)]
    pub popularity: f64,
    #[serde(default)]
    pub original_language: String,
    #[serde(default)]
    pub release_date: String,
    #[serde(default)]
    pub vote_count: i64,
}

/// Response envelope for every catalog listing endpoint. Only `results` is
/// consumed; paging fields in the provider response are ignored by serde.
#[derive(Debug, Clone, Deserialize)]
pub struct MoviePage {
    pub results: Vec<Movie>,
}

/// The four category listings the catalog exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    NowPlaying,
    Popular,
    TopRated,
    Upcoming,
}

impl Category {
    /// All categories, in the order the home screen renders them.
    pub const ALL: [Category; 4] = [
        Category::NowPlaying,
        Category::Popular,
        Category::TopRated,
        Category::Upcoming,
    ];

    /// The provider's path segment for this category.
    pub fn as_str(self) -> &'static str {
        match self {
            Category::NowPlaying => "now_playing",
            Category::Popular => "popular",
            Category::TopRated => "top_rated",
            Category::Upcoming => "upcoming",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
