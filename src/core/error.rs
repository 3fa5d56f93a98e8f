//! Error handling logic

use std::fmt;

/// Error types for circuit construction and simulation.
///
/// Both variants are raised synchronously at the point of detection.
/// Nothing here is retryable: sampling is deterministic for a given
/// seed, so the caller must fix the input instead.
#[derive(Debug, Clone, PartialEq, Eq)] // Eq useful for testing error variants
pub enum QuoinError {
    /// The amplitude vector failed the normalization check beyond tolerance.
    /// A state whose squared magnitudes do not sum to ~1 has no valid
    /// measurement distribution.
    InvalidState {
        /// InvalidState failure message
        message: String,
    },

    /// A supplied argument does not reference a known gate kind.
    InvalidArgument {
        /// InvalidArgument failure message
        message: String,
    },
}

impl fmt::Display for QuoinError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuoinError::InvalidState { message } => write!(f, "Invalid State: {}", message),
            QuoinError::InvalidArgument { message } => write!(f, "Invalid Argument: {}", message),
        }
    }
}

// Implement the standard Error trait to allow for easy integration with Rust error handling.
impl std::error::Error for QuoinError {}
