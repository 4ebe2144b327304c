//! Error types for the subdivision catalog.

use thiserror::Error;

/// Main error type for catalog lookups.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// No region carries the requested id.
    #[error("Could not find a region with id {0}.")]
    RegionNotFound(u16),

    /// No municipality carries the requested id.
    #[error("Could not find a municipality with id {0}.")]
    MunicipalityNotFound(u16),
}

/// Result type alias for catalog operations.
pub type Result<T> = std::result::Result<T, CatalogError>;
