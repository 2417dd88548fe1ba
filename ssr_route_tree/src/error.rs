//! Error types for reading and writing route manifests.
//!
//! Operations on a `RouteTree` itself never fail; only moving its flat form in and out of a
//! process can.

use std::io;

use thiserror::Error;

/// An error raised while reading or writing a route manifest.
#[derive(Debug, Error)]
pub enum ManifestError {
    /// The manifest could not be read or written.
    #[error("I/O error while accessing the route manifest: {0}")]
    Io(#[from] io::Error),

    /// The manifest is not a valid sequence of route records.
    #[error("malformed route manifest: {0}")]
    Json(#[from] serde_json::Error),
}

/// An implementation of the single-parameter Result pattern, using `ManifestError`.
pub type Result<T> = std::result::Result<T, ManifestError>;
