//! Session-authoritative favorites registry.
//!
//! # Design
//! `FavoritesRegistry` owns the in-memory favorites collection and the store
//! that backs it. It is constructed once per process and handed around by
//! `Arc` — explicit dependency injection, no ambient lookup. All methods
//! take `&self`; the collection sits behind a `Mutex`.
//!
//! Every mutation persists the full collection before returning, while the
//! lock is still held. That serializes writes (last-writer-wins follows call
//! order) and makes durable state observable deterministically right after
//! `add`/`remove`. Persistence failures are logged and absorbed; the
//! in-memory collection stays authoritative for the rest of the session.

use std::sync::{Mutex, PoisonError};

use crate::store::FavoritesStore;
use crate::types::Movie;

/// In-memory favorites collection, synchronized with a `FavoritesStore`.
#[derive(Debug)]
pub struct FavoritesRegistry {
    store: FavoritesStore,
    movies: Mutex<Vec<Movie>>,
}

impl FavoritesRegistry {
    /// Empty registry; call `initialize` once at startup to load persisted
    /// favorites.
    pub fn new(store: FavoritesStore) -> Self {
        Self {
            store,
            movies: Mutex::new(Vec::new()),
        }
    }

    /// Load the persisted collection into memory. Never fails: an unreadable
    /// slot is logged and treated as empty.
    pub fn initialize(&self) {
        let loaded = self.store.load().unwrap_or_else(|err| {
            tracing::warn!(error = %err, "failed to load favorites, starting empty");
            Vec::new()
        });
        *self.lock() = loaded;
    }

    /// Append a movie and persist the updated collection.
    ///
    /// No uniqueness check: adding the same movie twice without an
    /// intervening `remove` produces duplicate entries, matching the
    /// historical behavior this crate preserves. `remove` strips all
    /// duplicates at once.
    pub fn add(&self, movie: Movie) {
        let mut movies = self.lock();
        movies.push(movie);
        self.persist(&movies);
    }

    /// Remove every entry with this id and persist. Removing an absent id is
    /// a no-op apart from the rewrite.
    pub fn remove(&self, movie_id: i64) {
        let mut movies = self.lock();
        movies.retain(|m| m.id != movie_id);
        self.persist(&movies);
    }

    /// True iff some entry in the in-memory collection has this id.
    pub fn is_favorite(&self, movie_id: i64) -> bool {
        self.lock().iter().any(|m| m.id == movie_id)
    }

    /// Snapshot of the current collection, in insertion order.
    pub fn favorites(&self) -> Vec<Movie> {
        self.lock().clone()
    }

    fn persist(&self, movies: &[Movie]) {
        if let Err(err) = self.store.save(movies) {
            tracing::warn!(error = %err, "failed to persist favorites, in-memory state kept");
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<Movie>> {
        // A poisoned collection is still the best state we have.
        self.movies.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
