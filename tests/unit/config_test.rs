//! Tests for configuration validation

use hotel_sim::config::{HotelConfig, TimingConfig};
use hotel_sim::core::HotelError;
use std::time::Duration;

#[test]
fn test_hotel_config_validation() {
    let valid = HotelConfig::default();
    assert!(valid.validate().is_ok());
}

#[test]
fn test_hotel_config_invalid_rooms() {
    let invalid = HotelConfig::default().with_rooms(0);
    assert!(matches!(
        invalid.validate(),
        Err(HotelError::InvalidConfig(_))
    ));
}

#[test]
fn test_hotel_config_invalid_capacity() {
    let invalid = HotelConfig {
        room_capacity: 0,
        ..HotelConfig::default()
    };
    assert!(invalid.validate().is_err());
}

#[test]
fn test_hotel_config_allows_empty_staff() {
    let cfg = HotelConfig::default()
        .with_guests(0)
        .with_housekeepers(0)
        .with_receptionists(0);
    assert!(cfg.validate().is_ok());
}

#[test]
fn test_hotel_config_from_json() {
    let json = r#"{
        "rooms": 4,
        "guests": 20,
        "timing": {
            "stay_max_ms": 250,
            "receptionist_pause_ms": 100
        }
    }"#;

    let cfg = HotelConfig::from_json_str(json).unwrap();
    assert_eq!(cfg.rooms, 4);
    assert_eq!(cfg.guests, 20);
    assert_eq!(cfg.housekeepers, 10);
    assert_eq!(cfg.timing.stay_max_ms, 250);
    assert_eq!(cfg.timing.arrival_max_ms, 5000);
    assert_eq!(cfg.timing.receptionist_pause(), Duration::from_millis(100));
}

#[test]
fn test_hotel_config_from_json_rejects_invalid() {
    assert!(HotelConfig::from_json_str(r#"{ "rooms": 0 }"#).is_err());
    assert!(HotelConfig::from_json_str("not json").is_err());
}

#[test]
fn test_timing_defaults() {
    let timing = TimingConfig::default();
    assert_eq!(timing.vacate_pause(), Duration::from_secs(1));
    assert_eq!(timing.housekeeper_pause(), Duration::from_secs(1));
    assert_eq!(timing.receptionist_pause(), Duration::from_secs(2));
}

#[test]
fn test_config_round_trips_through_json() {
    let cfg = HotelConfig::default().with_rooms(2);
    let json = serde_json::to_string(&cfg).unwrap();
    assert_eq!(HotelConfig::from_json_str(&json).unwrap(), cfg);
}
