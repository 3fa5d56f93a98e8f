// src/simulation/mod.rs

//! Simulates the execution of `quoin::circuits::Circuit` and the
//! repeated measurement of the prepared state.
//!
//! This module contains the `Simulator` entry point, the `sampler`
//! functions it delegates shot collection to, and the `RunResult`
//! counts container.

mod results;
pub mod sampler;

// Re-export the main public interface type
pub use results::RunResult;

// Import necessary types for the Simulator struct and its methods
use crate::circuits::Circuit;
use crate::core::{QubitState, QuoinError};
use rand::SeedableRng;
use rand::rngs::StdRng;

/// The main simulator orchestrating circuit runs.
///
/// Prepares the qubit state by applying the circuit's gate sequence to
/// `|0>`, then collects the requested number of independent measurement
/// shots. A `Simulator` holds no state between runs; for a fixed seed
/// each `run` call is independent and idempotent.
pub struct Simulator {
    /// Seed for the per-run PRNG. `None` draws from OS entropy each run.
    seed: Option<u64>,
}

impl Simulator {
    /// Creates a Simulator whose runs are seeded from OS entropy.
    pub fn new() -> Self {
        Self { seed: None }
    }

    /// Creates a Simulator with a fixed seed for reproducible runs.
    ///
    /// Two calls to [`Simulator::run`] with the same circuit and shot
    /// count on a seeded simulator produce identical counts.
    pub fn with_seed(seed: u64) -> Self {
        Self { seed: Some(seed) }
    }

    /// Applies the circuit's gate sequence to the initial `|0>` state
    /// and returns the prepared (pre-measurement) state.
    pub fn prepare(&self, circuit: &Circuit) -> QubitState {
        let mut state = QubitState::zero();
        for gate in circuit.gates() {
            state.apply(*gate);
        }
        state
    }

    /// Runs a simulation of the provided circuit for the given shot count.
    ///
    /// Executes the gate sequence once to prepare the state, then draws
    /// `shots` independent measurement outcomes from it and aggregates
    /// them into a [`RunResult`]. `shots = 0` returns an empty result.
    ///
    /// # Arguments
    /// * `circuit` - The `Circuit` definition to simulate.
    /// * `shots` - Number of independent measurement draws to collect.
    ///
    /// # Returns
    /// * `Ok(RunResult)` containing the aggregated outcome counts.
    /// * `Err(QuoinError)` if the prepared state fails validation.
    pub fn run(&self, circuit: &Circuit, shots: u64) -> Result<RunResult, QuoinError> {
        let state = self.prepare(circuit);

        let mut rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        sampler::sample_counts(&state, shots, &mut rng)
    }
}

impl Default for Simulator {
    fn default() -> Self {
        Self::new()
    }
}
