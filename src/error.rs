//! Error types for figure configuration and rendering.

use thiserror::Error;

/// Errors surfaced by the figure facade.
///
/// There is no retry or partial-failure handling: each operation either fully
/// applies its configuration or returns an error and leaves the figure
/// untouched.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// Invalid argument to an operation, e.g. a subplot index outside the
    /// grid, degenerate axis limits (`min >= max`), or a malformed style
    /// spec string.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    /// The static plotting backend failed while drawing or saving.
    #[error("plot backend error: {0}")]
    Backend(String),
    /// I/O failure while loading or saving presentation defaults.
    #[error("i/o error: {0}")]
    Io(String),
}

pub type Result<T> = std::result::Result<T, Error>;
