// tests/simulation_tests.rs

// Import necessary types from the quoin crate
use quoin::{Circuit, CircuitBuilder, Gate, QuoinError, RunResult, Simulator};

// Helper asserting a count lies inside an inclusive statistical window
fn check_count_in_range(result: &RunResult, outcome: u8, lo: u64, hi: u64) {
    let count = result.count_of(outcome);
    assert!(
        count >= lo && count <= hi,
        "Count for outcome {} was {}, expected within [{}, {}]",
        outcome,
        count,
        lo,
        hi
    );
}

#[test]
fn test_empty_circuit_zero_shots() -> Result<(), QuoinError> {
    let circuit = Circuit::new();
    let simulator = Simulator::with_seed(0);
    let result = simulator.run(&circuit, 0)?;

    assert!(result.is_empty(), "Zero shots should yield empty counts");
    assert_eq!(result.total(), 0);
    Ok(())
}

#[test]
fn test_empty_circuit_measures_zero() -> Result<(), QuoinError> {
    // No gates leaves the qubit in |0>, so every shot measures 0.
    let circuit = Circuit::new();
    let simulator = Simulator::with_seed(0);
    let result = simulator.run(&circuit, 100)?;

    assert_eq!(result.count_of(0), 100);
    assert_eq!(result.count_of(1), 0);
    Ok(())
}

#[test]
fn test_identity_gate_measures_zero() -> Result<(), QuoinError> {
    let circuit = CircuitBuilder::new().add_gate(Gate::Identity).build();
    let simulator = Simulator::with_seed(3);
    let result = simulator.run(&circuit, 100)?;

    assert_eq!(result.count_of(0), 100, "Identity shouldn't change the outcome from 0");
    Ok(())
}

#[test]
fn test_pauli_x_always_measures_one() -> Result<(), QuoinError> {
    // |0> flipped to |1> measures 1 on every shot, whatever the seed.
    let circuit = CircuitBuilder::new().add_gate(Gate::PauliX).build();
    let simulator = Simulator::with_seed(11);
    let result = simulator.run(&circuit, 1000)?;

    assert_eq!(result.count_of(1), 1000);
    assert_eq!(result.count_of(0), 0);
    Ok(())
}

#[test]
fn test_hadamard_fair_coin() -> Result<(), QuoinError> {
    let circuit = CircuitBuilder::new().add_gate(Gate::Hadamard).build();
    let simulator = Simulator::with_seed(42);
    let result = simulator.run(&circuit, 1000)?;

    assert_eq!(result.total(), 1000, "Every shot must land on one side");
    check_count_in_range(&result, 0, 400, 600);
    check_count_in_range(&result, 1, 400, 600);
    Ok(())
}

#[test]
fn test_flip_then_hadamard_is_still_fair() -> Result<(), QuoinError> {
    // X then H prepares (1/sqrt(2))(|0> - |1>); the relative phase does
    // not affect the measurement distribution.
    let circuit = CircuitBuilder::new()
        .add_gate(Gate::PauliX)
        .add_gate(Gate::Hadamard)
        .build();
    let simulator = Simulator::with_seed(42);
    let result = simulator.run(&circuit, 1000)?;

    assert_eq!(result.total(), 1000);
    check_count_in_range(&result, 0, 400, 600);
    check_count_in_range(&result, 1, 400, 600);
    Ok(())
}

#[test]
fn test_same_seed_same_counts() -> Result<(), QuoinError> {
    let circuit = CircuitBuilder::new().add_gate(Gate::Hadamard).build();

    let first = Simulator::with_seed(42).run(&circuit, 1000)?;
    let second = Simulator::with_seed(42).run(&circuit, 1000)?;

    assert_eq!(first, second, "Same seed and circuit must reproduce counts exactly");
    Ok(())
}

#[test]
fn test_repeated_runs_are_idempotent() -> Result<(), QuoinError> {
    // A seeded simulator holds no state across runs; each call re-seeds.
    let circuit = CircuitBuilder::new().add_gate(Gate::Hadamard).build();
    let simulator = Simulator::with_seed(7);

    let first = simulator.run(&circuit, 250)?;
    let second = simulator.run(&circuit, 250)?;

    assert_eq!(first, second);
    Ok(())
}

#[test]
fn test_frequencies_sum_to_one() -> Result<(), QuoinError> {
    let circuit = CircuitBuilder::new().add_gate(Gate::Hadamard).build();
    let result = Simulator::with_seed(5).run(&circuit, 800)?;

    let sum = result.frequency(0) + result.frequency(1);
    assert!((sum - 1.0).abs() < 1e-12, "Frequencies summed to {}", sum);
    Ok(())
}

#[test]
fn test_gate_from_name_round_trip() -> Result<(), QuoinError> {
    assert_eq!(Gate::from_name("h")?, Gate::Hadamard);
    assert_eq!(Gate::from_name("Hadamard")?, Gate::Hadamard);
    assert_eq!(Gate::from_name("X")?, Gate::PauliX);
    assert_eq!(Gate::from_name("pauli-x")?, Gate::PauliX);
    assert_eq!(Gate::from_name("identity")?, Gate::Identity);
    Ok(())
}

#[test]
fn test_unknown_gate_name() {
    // Test that referencing an unknown gate kind results in an error
    let result = Gate::from_name("ThisGateDoesNotExist");

    assert!(result.is_err(), "Expected an error for an unknown gate name");
    match result.err().unwrap() {
        QuoinError::InvalidArgument { message } => {
            assert!(
                message.contains("'ThisGateDoesNotExist' is not a known gate kind"),
                "Incorrect error message: {}",
                message
            );
        }
        e => panic!("Expected InvalidArgument error, got {:?}", e),
    }
}

#[test]
fn test_circuit_built_from_names() -> Result<(), QuoinError> {
    // Building a circuit from parsed names matches the enum-built one.
    let parsed: Circuit = ["x", "h"]
        .into_iter()
        .map(Gate::from_name)
        .collect::<Result<_, _>>()?;
    let built = CircuitBuilder::new()
        .add_gates([Gate::PauliX, Gate::Hadamard])
        .build();

    assert_eq!(parsed, built);
    Ok(())
}

#[test]
fn test_circuit_display_shows_gates() {
    let circuit = CircuitBuilder::new()
        .add_gate(Gate::PauliX)
        .add_gate(Gate::Hadamard)
        .build();
    let rendered = format!("{}", circuit);

    assert!(rendered.contains("quoin::Circuit[2 gates]"));
    assert!(rendered.contains("X"));
    assert!(rendered.contains("H"));
    assert!(rendered.contains("M"), "Diagram should end with a measurement marker");
}
