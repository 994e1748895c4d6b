//! Error types for engine operations.

/// Result type for engine operations
pub type EngineResult<T> = Result<T, EngineError>;

/// Error type for engine operations.
///
/// Every variant is recoverable: callers are expected to branch on it and
/// degrade (fall back to UTC, show "timezone unknown", reject the input).
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EngineError {
    #[error("Unknown region: {0}")]
    UnknownRegion(String),

    #[error("Invalid coordinate: latitude {latitude}, longitude {longitude}")]
    InvalidCoordinate { latitude: f64, longitude: f64 },

    #[error("Degenerate boundary for {id}: {vertices} vertices (need at least 3)")]
    DegenerateBoundary { id: String, vertices: usize },

    #[error("Catalog load error: {0}")]
    CatalogLoad(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Invalid instant: {0}")]
    InvalidInstant(String),
}

impl EngineError {
    /// Returns `true` for errors caused by caller input rather than by
    /// static reference data or configuration.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            EngineError::UnknownRegion(_) | EngineError::InvalidCoordinate { .. }
        )
    }
}
