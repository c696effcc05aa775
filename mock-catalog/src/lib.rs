//! In-process mock of the remote movie catalog API.
//!
//! Serves the three read-only endpoint families the core client uses, backed
//! by a fixed seeded movie set:
//!
//! - `GET /movie/{category}` — category in now_playing | popular | top_rated
//!   | upcoming, unknown categories 404.
//! - `GET /movie/{id}/recommendations` — unknown ids answer an empty
//!   `results` array, as the real provider does.
//! - `GET /search/movie` — case-insensitive title substring match; an empty
//!   or absent `query` matches nothing.
//!
//! Every endpoint requires a non-empty `api_key` query parameter and answers
//! 401 without one. Responses use the provider's envelope shape
//! (`page`/`results`/`total_pages`/`total_results`).

use std::{collections::HashMap, sync::Arc};

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Movie {
    pub id: i64,
    pub title: String,
    pub overview: String,
    pub poster_path: Option<String>,
    pub backdrop_path: Option<String>,
    pub vote_average: f64,
    pub popularity: f64,
    pub original_language: String,
    pub release_date: String,
    pub vote_count: i64,
}

/// Provider response envelope.
#[derive(Debug, Serialize, Deserialize)]
pub struct MoviePage {
    pub page: u32,
    pub results: Vec<Movie>,
    pub total_pages: u32,
    pub total_results: usize,
}

/// Seeded, read-only catalog contents.
pub struct Db {
    categories: HashMap<&'static str, Vec<Movie>>,
    recommendations: HashMap<i64, Vec<Movie>>,
    all: Vec<Movie>,
}

type SharedDb = Arc<Db>;

fn movie(
    id: i64,
    title: &str,
    overview: &str,
    vote_average: f64,
    release_date: &str,
) -> Movie {
    Movie {
        id,
        title: title.to_string(),
        overview: overview.to_string(),
        poster_path: Some(format!("/poster-{id}.jpg")),
        backdrop_path: Some(format!("/backdrop-{id}.jpg")),
        vote_average,
        popularity: vote_average * 10.0,
        original_language: "en".to_string(),
        release_date: release_date.to_string(),
        vote_count: id * 100,
    }
}

/// Fixed movie set covering all four categories plus recommendations for a
/// couple of well-known ids.
pub fn seed() -> Db {
    let heat = movie(949, "Heat", "A group of professional bank robbers.", 7.9, "1995-12-15");
    let fight_club = movie(550, "Fight Club", "An insomniac office worker.", 8.4, "1999-10-15");
    let alien = movie(348, "Alien", "The crew of a commercial spacecraft.", 8.1, "1979-05-25");
    let arrival = movie(329865, "Arrival", "Twelve mysterious spacecraft appear.", 7.6, "2016-11-10");
    let dune = movie(438631, "Dune", "Paul Atreides leads nomadic tribes.", 7.8, "2021-09-15");
    let whiplash = movie(244786, "Whiplash", "A promising young drummer enrolls.", 8.4, "2014-10-10");
    let moonlight = movie(376867, "Moonlight", "The tender, heartbreaking story.", 7.4, "2016-10-21");
    let klaus = movie(508965, "Klaus", "A selfish postman discovers kindness.", 8.2, "2019-11-08");

    let mut categories = HashMap::new();
    categories.insert("now_playing", vec![dune.clone(), klaus.clone()]);
    categories.insert("popular", vec![fight_club.clone(), heat.clone(), dune.clone()]);
    categories.insert("top_rated", vec![fight_club.clone(), whiplash.clone(), alien.clone()]);
    categories.insert("upcoming", vec![arrival.clone(), moonlight.clone()]);

    let mut recommendations = HashMap::new();
    recommendations.insert(550, vec![heat.clone(), whiplash.clone()]);
    recommendations.insert(348, vec![arrival.clone(), dune.clone()]);

    let all = vec![heat, fight_club, alien, arrival, dune, whiplash, moonlight, klaus];

    Db {
        categories,
        recommendations,
        all,
    }
}

pub fn app() -> Router {
    let db: SharedDb = Arc::new(seed());
    Router::new()
        .route("/movie/{category}", get(list_category))
        .route("/movie/{id}/recommendations", get(recommendations))
        .route("/search/movie", get(search_movies))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

fn page(results: Vec<Movie>) -> Json<MoviePage> {
    let total_results = results.len();
    Json(MoviePage {
        page: 1,
        results,
        total_pages: 1,
        total_results,
    })
}

fn require_api_key(params: &HashMap<String, String>) -> Result<(), StatusCode> {
    match params.get("api_key") {
        Some(key) if !key.is_empty() => Ok(()),
        _ => Err(StatusCode::UNAUTHORIZED),
    }
}

async fn list_category(
    State(db): State<SharedDb>,
    Path(category): Path<String>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Json<MoviePage>, StatusCode> {
    require_api_key(&params)?;
    db.categories
        .get(category.as_str())
        .cloned()
        .map(page)
        .ok_or(StatusCode::NOT_FOUND)
}

async fn recommendations(
    State(db): State<SharedDb>,
    Path(id): Path<i64>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Json<MoviePage>, StatusCode> {
    require_api_key(&params)?;
    Ok(page(db.recommendations.get(&id).cloned().unwrap_or_default()))
}

async fn search_movies(
    State(db): State<SharedDb>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Json<MoviePage>, StatusCode> {
    require_api_key(&params)?;
    let needle = params.get("query").map(String::as_str).unwrap_or("");
    if needle.is_empty() {
        return Ok(page(Vec::new()));
    }
    let needle = needle.to_lowercase();
    let results = db
        .all
        .iter()
        .filter(|m| m.title.to_lowercase().contains(&needle))
        .cloned()
        .collect();
    Ok(page(results))
}
