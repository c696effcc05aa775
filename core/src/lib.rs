//! Synchronous core for a movie-browsing application.
//!
//! # Overview
//! Two halves: read-only access to a remote movie catalog (category
//! listings, per-movie recommendations, free-text search) and a locally
//! persisted favorites collection. The view layer calls this crate and
//! renders what comes back; nothing here touches UI concerns.
//!
//! # Design
//! - `CatalogClient` is stateless — it builds `HttpRequest` values and
//!   parses `HttpResponse` values without touching the network.
//! - `Catalog` executes those requests through the `HttpTransport` seam and
//!   applies the fail-soft policy: catalog failures are logged and folded
//!   into empty lists, so one broken section never blocks the rest of the
//!   screen. `try_*` variants keep the classified error visible.
//! - `FavoritesRegistry` owns the in-memory favorites collection for the
//!   session; every mutation rewrites the whole `FavoritesStore` slot
//!   before returning. Construct one per process and share it by `Arc`.

pub mod catalog;
pub mod client;
pub mod error;
pub mod http;
pub mod registry;
pub mod store;
pub mod types;

pub use catalog::Catalog;
pub use client::{CatalogClient, TMDB_BASE_URL};
pub use error::{CatalogError, StoreError};
pub use http::{HttpRequest, HttpResponse, HttpTransport, UreqTransport};
pub use registry::FavoritesRegistry;
pub use store::FavoritesStore;
pub use types::{Category, Movie, MoviePage};
