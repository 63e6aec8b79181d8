//! Error types for loadplan
//!
//! Business-rule rejections live in `domain::rejection`; this type covers
//! everything around the engine: files, parsing, catalogs and configuration.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::entities::OrderError;
use crate::domain::ports::CatalogError;
use crate::domain::value_objects::OrderId;

/// Result type alias for loadplan operations
pub type LoadplanResult<T> = Result<T, LoadplanError>;

/// Main error type for loadplan operations
#[derive(Error, Debug)]
pub enum LoadplanError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    /// JSON encoding or decoding error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Catalog file not found
    #[error("order catalog not found: {path}")]
    CatalogNotFound { path: PathBuf },

    /// Catalog lookup failed
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    /// An order record failed validation
    #[error("invalid order in {file}: {source}")]
    InvalidOrder {
        file: PathBuf,
        #[source]
        source: OrderError,
    },

    /// Same order id listed twice in a catalog
    #[error("duplicate order id '{id}' in {file}")]
    DuplicateOrderId { id: OrderId, file: PathBuf },

    /// Configuration value out of range
    #[error("invalid configuration in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },
}
