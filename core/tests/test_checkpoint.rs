//! Checkpoint Tests - Save/Load Generator State
//!
//! Critical invariants tested:
//! - Determinism: Restored generator produces identical results
//! - Integrity: Tampered snapshots are rejected
//! - Validity: The all-zero state is never restored

use xoshiro_core::checkpoint::compute_state_checksum;
use xoshiro_core::{CheckpointError, RngSnapshot, StateError, Xoshiro256StarStar};

// ============================================================================
// Test Helpers
// ============================================================================

/// Generator advanced past its seeded state
fn create_advanced_rng(seed: u64, draws: usize) -> Xoshiro256StarStar {
    let mut rng = Xoshiro256StarStar::new(seed);
    for _ in 0..draws {
        rng.next_u64();
    }
    rng
}

// ============================================================================
// Round Trip
// ============================================================================

#[test]
fn test_restored_generator_continues_sequence() {
    let mut original = create_advanced_rng(42, 37);

    let json = RngSnapshot::capture(&original).to_json().unwrap();
    let mut restored = RngSnapshot::from_json(&json).unwrap().restore().unwrap();

    for i in 0..500 {
        assert_eq!(
            original.next_u64(),
            restored.next_u64(),
            "Restored generator diverged at draw {}",
            i
        );
    }
}

#[test]
fn test_restore_after_jump() {
    let mut original = create_advanced_rng(7, 3);
    original.jump();

    let snapshot = RngSnapshot::from(&original);
    let mut restored = snapshot.restore().unwrap();

    assert_eq!(original.next_int(0, 1000), restored.next_int(0, 1000));
    assert_eq!(original.next_f64(), restored.next_f64());
}

#[test]
fn test_snapshot_json_shape() {
    let rng = Xoshiro256StarStar::new(0xDEADBEEF);
    let value: serde_json::Value =
        serde_json::from_str(&RngSnapshot::capture(&rng).to_json().unwrap()).unwrap();

    let state = value["state"].as_array().unwrap();
    assert_eq!(state.len(), 4);
    assert_eq!(state[0].as_u64(), Some(0x4adfb90f68c9eb9b));
    assert_eq!(value["checksum"].as_str().unwrap().len(), 64);
}

#[test]
fn test_generator_serializes_as_state_words() {
    let rng = create_advanced_rng(9, 9);

    let json = serde_json::to_string(&rng).unwrap();
    let restored: Xoshiro256StarStar = serde_json::from_str(&json).unwrap();

    assert_eq!(restored, rng);
    assert_eq!(
        serde_json::from_str::<Vec<u64>>(&json).unwrap(),
        rng.state().to_vec()
    );
}

// ============================================================================
// Rejection
// ============================================================================

#[test]
fn test_tampered_state_rejected() {
    let rng = create_advanced_rng(42, 5);
    let mut snapshot = RngSnapshot::capture(&rng);
    snapshot.state[2] ^= 1;

    match snapshot.restore() {
        Err(CheckpointError::ChecksumMismatch { expected, actual }) => {
            assert_eq!(expected, snapshot.checksum);
            assert_eq!(actual, compute_state_checksum(&snapshot.state));
        }
        other => panic!("Expected checksum mismatch, got {:?}", other),
    }
}

#[test]
fn test_all_zero_snapshot_rejected() {
    let snapshot = RngSnapshot {
        state: [0; 4],
        checksum: compute_state_checksum(&[0; 4]),
    };

    assert!(matches!(
        snapshot.restore(),
        Err(CheckpointError::InvalidState(StateError::AllZero))
    ));
}

#[test]
fn test_all_zero_generator_json_rejected() {
    let result = serde_json::from_str::<Xoshiro256StarStar>("[0,0,0,0]");
    assert!(result.is_err(), "All-zero state must not deserialize");
}

#[test]
fn test_malformed_json_rejected() {
    assert!(matches!(
        RngSnapshot::from_json("{\"state\": [1, 2, 3]}"),
        Err(CheckpointError::Serialization(_))
    ));
    assert!(matches!(
        RngSnapshot::from_json("not json"),
        Err(CheckpointError::Serialization(_))
    ));
}
