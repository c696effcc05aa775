//! Error types for the catalog client and the favorites store.
//!
//! # Design
//! Errors stay classified all the way to the UI-facing wrappers, which apply
//! the fail-soft policy (substitute an empty value, log the error) in exactly
//! one place. Nothing in this crate treats an error as fatal.

use std::fmt;

/// Errors produced by catalog request execution and response parsing.
#[derive(Debug)]
pub enum CatalogError {
    /// The request never produced a response (connect failure, I/O error).
    Transport(String),

    /// The server answered with a non-200 status.
    Http { status: u16, body: String },

    /// The response body could not be deserialized into a movie page.
    Decode(String),
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::Transport(msg) => write!(f, "transport error: {msg}"),
            CatalogError::Http { status, body } => write!(f, "HTTP {status}: {body}"),
            CatalogError::Decode(msg) => write!(f, "decode failed: {msg}"),
        }
    }
}

impl std::error::Error for CatalogError {}

/// Errors produced by the favorites store.
#[derive(Debug)]
pub enum StoreError {
    /// The slot could not be read or written.
    Io(std::io::Error),

    /// The slot exists but its contents are not a valid favorites collection.
    Corrupt(String),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::Io(e) => write!(f, "storage I/O error: {e}"),
            StoreError::Corrupt(msg) => write!(f, "stored favorites unreadable: {msg}"),
        }
    }
}

impl std::error::Error for StoreError {}

impl From<std::io::Error> for StoreError {
    fn from(e: std::io::Error) -> Self {
        StoreError::Io(e)
    }
}
