use std::path::PathBuf;

use thiserror::Error;

use crate::model::ProductId;

/// Convenient alias for fallible results returned throughout the crate.
pub type Result<T> = std::result::Result<T, ToolError>;

/// Error type covering the failures that can occur while loading, exporting,
/// or reading catalog data.
#[derive(Debug, Error)]
pub enum ToolError {
    /// Raised when a catalog or competitor file cannot be opened. Nothing is
    /// written when this is returned from an export.
    #[error("failed to open {}: {source}", .path.display())]
    FileOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Wrapper for IO failures after a file has been opened.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Errors bubbled up from the CSV writer.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Raised when a seed file is not valid JSON.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Raised when a handle does not belong to the store it was resolved
    /// against.
    #[error("unknown product {0}")]
    UnknownProduct(ProductId),

    /// Raised when a 1-based product number is outside the catalog.
    #[error("product number {number} is out of range (1-{available})")]
    InvalidProductNumber { number: usize, available: usize },

    /// Raised when a price is not a finite number.
    #[error("invalid price '{0}'")]
    InvalidPrice(String),

    /// Raised when a seed entry parses but cannot describe a product.
    #[error("invalid seed entry {index}: {reason}")]
    InvalidSeed { index: usize, reason: String },

    /// Raised when the tracing subscriber fails to initialise.
    #[error("failed to initialise logging: {0}")]
    Logging(String),
}

impl ToolError {
    pub(crate) fn file_open(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::FileOpen {
            path: path.into(),
            source,
        }
    }

    /// Returns `true` for the "file could not be opened" failure the console
    /// reports without aborting.
    pub fn is_file_open(&self) -> bool {
        matches!(self, Self::FileOpen { .. })
    }
}
