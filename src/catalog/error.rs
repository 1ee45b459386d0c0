//! Catalog Error Types

use thiserror::Error;

/// Failures talking to a creature catalog.
///
/// A creature that simply isn't in the catalog is not an error; lookups
/// report that as `Ok(None)`.
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Catalog request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Catalog returned HTTP {status} for {url}")]
    Status { status: u16, url: String },

    #[error("Catalog response could not be decoded: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Result type alias for catalog operations
pub type Result<T> = std::result::Result<T, CatalogError>;
