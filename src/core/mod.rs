// src/core/mod.rs

//! Core data structures and types

// Declare modules within core
pub mod error;
pub mod state;

// Re-export public types for convenient access via `quoin::core::TypeName`
pub use error::QuoinError;
pub use state::QubitState;

pub mod constants;
pub use constants::quoin_constants::{NORM_TOLERANCE, STRICT_TOLERANCE}; // Re-export
