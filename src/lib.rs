// src/lib.rs

//! `quoin` - a self-contained single-qubit circuit simulator
//!
//! This library models a "quantum coin toss": a two-amplitude complex
//! state vector, a small fixed gate set (Identity, Pauli-X, Hadamard),
//! a seeded probabilistic measurement sampler, and a circuit runner
//! that aggregates shot counts.

pub mod core;
pub mod operations;
pub mod circuits;
pub mod simulation;
pub mod validation;

// Re-export the most common types for easier top-level use
pub use crate::core::{QubitState, QuoinError};
pub use operations::Gate;
pub use circuits::{Circuit, CircuitBuilder};
pub use simulation::{RunResult, Simulator, sampler};
pub use validation::{check_normalization, validate_state};

// Example 1: Fair coin toss
// A single Hadamard turns |0> into an equal superposition, so repeated
// measurement behaves like a fair coin.
/// ```
/// use quoin::{CircuitBuilder, Gate, Simulator, QuoinError};
///
/// // Create circuit: apply Hadamard, then measure over 1000 shots
/// let circuit = CircuitBuilder::new()
///     .add_gate(Gate::Hadamard)
///     .build();
///
/// // Run simulation with a fixed seed for reproducibility
/// let simulator = Simulator::with_seed(42);
/// match simulator.run(&circuit, 1000) {
///     Ok(result) => {
///         println!("Circuit:\n{}", circuit); // Display draws the gate wire
///         println!("{}", result);
///
///         // Analysis: H|0> = (1/sqrt(2))(|0> + |1>), so p0 = p1 = 0.5.
///         // Every shot lands on one side or the other, and for a fair
///         // coin both counts sit well inside [400, 600] at 1000 shots.
///         assert_eq!(result.total(), 1000);
///         assert!(result.count_of(0) >= 400 && result.count_of(0) <= 600);
///         assert!(result.count_of(1) >= 400 && result.count_of(1) <= 600);
///     }
///     Err(e) => {
///         eprintln!("Example 1 failed: {}", e);
///         assert!(false, "Example 1 failed"); // Force test failure
///     }
/// }
/// ```
#[doc(hidden)]
const _: () = (); // Attaches the preceding doc comment block to a hidden item

// Example 2: Flip then toss
// Pauli-X first moves the qubit to |1>; a Hadamard from |1> still
// produces an equal-superposition measurement distribution.
/// ```
/// use quoin::{CircuitBuilder, Gate, Simulator, QuoinError};
///
/// // Create circuit: flip to |1>, then apply Hadamard
/// let circuit = CircuitBuilder::new()
///     .add_gate(Gate::PauliX)
///     .add_gate(Gate::Hadamard)
///     .build();
///
/// let simulator = Simulator::with_seed(42);
/// match simulator.run(&circuit, 1000) {
///     Ok(result) => {
///         println!("Circuit:\n{}", circuit);
///         println!("{}", result);
///
///         // Analysis: H|1> = (1/sqrt(2))(|0> - |1>). The relative phase
///         // does not affect measurement probabilities, so the split
///         // stays near 50/50.
///         assert_eq!(result.total(), 1000);
///         assert!(result.count_of(0) >= 400 && result.count_of(0) <= 600);
///         assert!(result.count_of(1) >= 400 && result.count_of(1) <= 600);
///     }
///     Err(e) => {
///         eprintln!("Example 2 failed: {}", e);
///         assert!(false, "Example 2 failed"); // Force test failure
///     }
/// }
/// ```
#[doc(hidden)]
const _: () = (); // Attaches the preceding doc comment block to a hidden item
