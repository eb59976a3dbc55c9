// File: crates/graph-core/src/error.rs
// Summary: Error type shared by renderer construction, chart bodies and surfaces.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ChartError {
    /// Series, canvas or color did not provide what the renderer needs.
    #[error("type mismatch: {0}")]
    TypeMismatch(String),
    /// A chart body hook was invoked without a concrete implementation.
    #[error("not implemented: {0}")]
    NotImplemented(&'static str),
    /// The drawing backend failed (allocation, encoding).
    #[error("surface error: {0}")]
    Surface(String),
}

pub type Result<T> = std::result::Result<T, ChartError>;
