//! Error taxonomy shared by the sizing core and the request layer.

use std::io;

use thiserror::Error;

use crate::sizing::diagram::DiagramId;

/// Errors surfaced by sizing, diagram resolution, and input parsing.
#[derive(Debug, Error)]
pub enum SizingError {
    /// Missing, non-numeric, or out-of-range input rejected before computation.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Panel configuration that makes sizing undefined (rated power <= 0).
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// The selected diagram has no backing resource.
    #[error("diagram not found: {0}")]
    DiagramNotFound(DiagramId),

    #[error("i/o error: {0}")]
    Io(#[from] io::Error),
}

impl SizingError {
    /// Shorthand for [`SizingError::InvalidInput`].
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }
}
