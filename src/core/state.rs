// src/core/state.rs

use crate::operations::Gate;
use num_complex::Complex;
use std::fmt;

/// The state of a single qubit as a pair of complex amplitudes `(a, b)`
/// over the computational basis `{|0>, |1>}`.
///
/// A well-formed state satisfies `|a|^2 + |b|^2 = 1`. Gate application
/// preserves this within floating-point drift and renormalizes after
/// every step; arbitrary states built with [`QubitState::new`] are only
/// checked when they reach the measurement sampler.
#[derive(Debug, Clone, PartialEq)] // Avoid Eq for floating-point complex numbers
pub struct QubitState {
    /// Amplitudes for `|0>` (index 0) and `|1>` (index 1).
    amplitudes: [Complex<f64>; 2],
}

impl QubitState {
    /// Creates the initial basis state `|0>` = `(1, 0)`.
    pub fn zero() -> Self {
        Self {
            amplitudes: [Complex::new(1.0, 0.0), Complex::new(0.0, 0.0)],
        }
    }

    /// Creates a state from explicit amplitudes.
    ///
    /// The pair is accepted as-is; normalization is enforced later, when
    /// the state is sampled or explicitly validated.
    pub fn new(amp_zero: Complex<f64>, amp_one: Complex<f64>) -> Self {
        Self {
            amplitudes: [amp_zero, amp_one],
        }
    }

    /// Read-only access to the amplitude pair.
    pub fn amplitudes(&self) -> &[Complex<f64>; 2] {
        &self.amplitudes
    }

    /// Applies a gate's 2x2 unitary to this state.
    ///
    /// Computes the matrix-vector product and then divides by the
    /// Euclidean norm of the result to correct floating-point drift.
    pub fn apply(&mut self, gate: Gate) {
        let m = gate.matrix();
        let [a, b] = self.amplitudes;
        let mut next = [m[0][0] * a + m[0][1] * b, m[1][0] * a + m[1][1] * b];

        // The gates are unitary constants, so the norm can only drift
        // by accumulated rounding, never reach zero.
        let norm = (next[0].norm_sqr() + next[1].norm_sqr()).sqrt();
        if norm > 0.0 {
            next[0] /= norm;
            next[1] /= norm;
        }
        self.amplitudes = next;
    }

    /// Measurement probabilities `(p0, p1)` for this state.
    ///
    /// `p0 = |a|^2`; `p1` is taken as `1 - p0` and clamped so rounding
    /// can never yield a negative probability.
    pub fn probabilities(&self) -> (f64, f64) {
        let p0 = self.amplitudes[0].norm_sqr().clamp(0.0, 1.0);
        (p0, (1.0 - p0).clamp(0.0, 1.0))
    }

    /// Sum of squared amplitude magnitudes. Exactly 1 for a well-formed state.
    pub fn norm_sqr(&self) -> f64 {
        self.amplitudes.iter().map(|c| c.norm_sqr()).sum()
    }
}

impl fmt::Display for QubitState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Qubit[{:.4}, {:.4}]",
            self.amplitudes[0], self.amplitudes[1]
        )
    }
}
