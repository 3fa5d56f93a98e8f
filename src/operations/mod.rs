// src/operations/mod.rs

//! Defines the fixed single-qubit gate set and its unitary matrices.
//!
//! Gates are immutable tags; the associated 2x2 complex matrix is
//! produced on demand by [`Gate::matrix`]. These act upon
//! [`QubitState`](crate::core::QubitState) when sequenced in a circuit.

use crate::core::QuoinError;
use num_complex::Complex;
use num_traits::Zero; // For Complex::zero()
use std::fmt;

/// A single-qubit gate from the supported set.
///
/// Each variant names a fixed unitary:
/// - `Identity` leaves the state untouched.
/// - `PauliX` swaps the basis amplitudes (the classical bit-flip analogue).
/// - `Hadamard` produces an equal superposition from a basis state and
///   is its own inverse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Gate {
    /// `[[1, 0], [0, 1]]`
    Identity,
    /// `[[0, 1], [1, 0]]`
    PauliX,
    /// `(1/sqrt(2)) * [[1, 1], [1, -1]]`
    Hadamard,
}

impl Gate {
    /// Returns the 2x2 unitary matrix for this gate.
    ///
    /// Pure function with no failure modes; the matrices are constants.
    pub fn matrix(&self) -> [[Complex<f64>; 2]; 2] {
        const ONE_OVER_SQRT_2: f64 = std::f64::consts::FRAC_1_SQRT_2;

        match self {
            Gate::Identity => [
                [Complex::new(1.0, 0.0), Complex::zero()],
                [Complex::zero(), Complex::new(1.0, 0.0)],
            ],
            Gate::PauliX => [
                [Complex::zero(), Complex::new(1.0, 0.0)],
                [Complex::new(1.0, 0.0), Complex::zero()],
            ],
            Gate::Hadamard => [
                [
                    Complex::new(ONE_OVER_SQRT_2, 0.0),
                    Complex::new(ONE_OVER_SQRT_2, 0.0),
                ],
                [
                    Complex::new(ONE_OVER_SQRT_2, 0.0),
                    Complex::new(-ONE_OVER_SQRT_2, 0.0),
                ],
            ],
        }
    }

    /// Looks up a gate by name.
    ///
    /// Accepts the canonical short and long names, case-insensitively:
    /// `"i"`/`"identity"`, `"x"`/`"paulix"`, `"h"`/`"hadamard"`.
    ///
    /// # Errors
    /// Returns [`QuoinError::InvalidArgument`] for any other name.
    pub fn from_name(name: &str) -> Result<Self, QuoinError> {
        match name.to_ascii_lowercase().as_str() {
            "i" | "id" | "identity" => Ok(Gate::Identity),
            "x" | "paulix" | "pauli-x" => Ok(Gate::PauliX),
            "h" | "hadamard" => Ok(Gate::Hadamard),
            _ => Err(QuoinError::InvalidArgument {
                message: format!("Gate '{}' is not a known gate kind", name),
            }),
        }
    }

    /// Single-character symbol used in circuit diagrams.
    pub fn symbol(&self) -> &'static str {
        match self {
            Gate::Identity => "I",
            Gate::PauliX => "X",
            Gate::Hadamard => "H",
        }
    }
}

impl fmt::Display for Gate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Gate::Identity => write!(f, "Identity"),
            Gate::PauliX => write!(f, "PauliX"),
            Gate::Hadamard => write!(f, "Hadamard"),
        }
    }
}
