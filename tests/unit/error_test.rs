//! Tests for error types

use hotel_sim::core::HotelError;

#[test]
fn test_cancelled_error() {
    let err = HotelError::Cancelled;
    assert_eq!(format!("{}", err), "operation cancelled by shutdown");
    assert!(err.is_cancelled());
}

#[test]
fn test_not_checked_out_error() {
    let err = HotelError::NotCheckedOut(7);
    assert_eq!(format!("{}", err), "room 7 is not checked out of the pool");
    assert!(!err.is_cancelled());
}

#[test]
fn test_invalid_config_error() {
    let err = HotelError::InvalidConfig("rooms must be greater than 0".to_string());
    assert_eq!(
        format!("{}", err),
        "invalid config: rooms must be greater than 0"
    );
}

#[test]
fn test_spawn_error_converts_to_anyhow() {
    let spawn = HotelError::Spawn("Guest-1: out of threads".to_string());
    let err: anyhow::Error = spawn.into();
    assert_eq!(
        err.to_string(),
        "failed to spawn actor: Guest-1: out of threads"
    );
}
