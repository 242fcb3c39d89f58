//! Hotel population and timing configuration.

use std::env;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::core::room::DEFAULT_ROOM_CAPACITY;
use crate::core::HotelError;
use crate::util::DelayRange;

/// Delays driving the actors, in milliseconds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimingConfig {
    /// Lower bound of a guest's random arrival delay.
    pub arrival_min_ms: u64,
    /// Upper bound (exclusive) of a guest's random arrival delay.
    pub arrival_max_ms: u64,
    /// Lower bound of a guest's random stay.
    pub stay_min_ms: u64,
    /// Upper bound (exclusive) of a guest's random stay.
    pub stay_max_ms: u64,
    /// Pause between a guest leaving its room and joining the wait list.
    pub vacate_pause_ms: u64,
    /// Pause after each housekeeping cycle.
    pub housekeeper_pause_ms: u64,
    /// Pause after each receptionist pass over the wait list.
    pub receptionist_pause_ms: u64,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            arrival_min_ms: 0,
            arrival_max_ms: 5000,
            stay_min_ms: 0,
            stay_max_ms: 5000,
            vacate_pause_ms: 1000,
            housekeeper_pause_ms: 1000,
            receptionist_pause_ms: 2000,
        }
    }
}

impl TimingConfig {
    /// Arrival delay distribution.
    #[must_use]
    pub const fn arrival(&self) -> DelayRange {
        DelayRange::new(self.arrival_min_ms, self.arrival_max_ms)
    }

    /// Stay duration distribution.
    #[must_use]
    pub const fn stay(&self) -> DelayRange {
        DelayRange::new(self.stay_min_ms, self.stay_max_ms)
    }

    /// Vacate pause.
    #[must_use]
    pub const fn vacate_pause(&self) -> Duration {
        Duration::from_millis(self.vacate_pause_ms)
    }

    /// Housekeeper pause.
    #[must_use]
    pub const fn housekeeper_pause(&self) -> Duration {
        Duration::from_millis(self.housekeeper_pause_ms)
    }

    /// Receptionist pause.
    #[must_use]
    pub const fn receptionist_pause(&self) -> Duration {
        Duration::from_millis(self.receptionist_pause_ms)
    }
}

/// Hotel population and timing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HotelConfig {
    /// Rooms in the pool.
    pub rooms: u32,
    /// Guests arriving at startup.
    pub guests: u32,
    /// Housekeeper actors.
    pub housekeepers: u32,
    /// Receptionist actors.
    pub receptionists: u32,
    /// Modeled occupants per room.
    pub room_capacity: u32,
    /// Actor delays.
    pub timing: TimingConfig,
}

impl Default for HotelConfig {
    fn default() -> Self {
        Self {
            rooms: 10,
            guests: 50,
            housekeepers: 10,
            receptionists: 5,
            room_capacity: DEFAULT_ROOM_CAPACITY,
            timing: TimingConfig::default(),
        }
    }
}

impl HotelConfig {
    /// Set the number of rooms.
    #[must_use]
    pub const fn with_rooms(mut self, rooms: u32) -> Self {
        self.rooms = rooms;
        self
    }

    /// Set the number of guests.
    #[must_use]
    pub const fn with_guests(mut self, guests: u32) -> Self {
        self.guests = guests;
        self
    }

    /// Set the number of housekeepers.
    #[must_use]
    pub const fn with_housekeepers(mut self, housekeepers: u32) -> Self {
        self.housekeepers = housekeepers;
        self
    }

    /// Set the number of receptionists.
    #[must_use]
    pub const fn with_receptionists(mut self, receptionists: u32) -> Self {
        self.receptionists = receptionists;
        self
    }

    /// Set actor timing.
    #[must_use]
    pub fn with_timing(mut self, timing: TimingConfig) -> Self {
        self.timing = timing;
        self
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), HotelError> {
        if self.rooms == 0 {
            return Err(HotelError::InvalidConfig(
                "rooms must be greater than 0".into(),
            ));
        }
        if self.room_capacity == 0 {
            return Err(HotelError::InvalidConfig(
                "room_capacity must be greater than 0".into(),
            ));
        }
        Ok(())
    }

    /// Parse configuration from a JSON string and validate.
    pub fn from_json_str(input: &str) -> Result<Self, HotelError> {
        let cfg: Self = serde_json::from_str(input)
            .map_err(|e| HotelError::InvalidConfig(format!("parse error: {e}")))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Overlay `HOTEL_ROOMS`, `HOTEL_GUESTS`, `HOTEL_HOUSEKEEPERS`, `HOTEL_RECEPTIONISTS` and
    /// `HOTEL_ROOM_CAPACITY` onto the defaults, then validate.
    pub fn from_env() -> Result<Self, HotelError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`HotelConfig::from_env`] with an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, HotelError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut cfg = Self::default();
        for (key, field) in [
            ("HOTEL_ROOMS", &mut cfg.rooms),
            ("HOTEL_GUESTS", &mut cfg.guests),
            ("HOTEL_HOUSEKEEPERS", &mut cfg.housekeepers),
            ("HOTEL_RECEPTIONISTS", &mut cfg.receptionists),
            ("HOTEL_ROOM_CAPACITY", &mut cfg.room_capacity),
        ] {
            if let Some(raw) = lookup(key) {
                *field = raw
                    .trim()
                    .parse()
                    .map_err(|e| HotelError::InvalidConfig(format!("{key}={raw}: {e}")))?;
            }
        }
        cfg.validate()?;
        Ok(cfg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_defaults_match_reference_population() {
        let cfg = HotelConfig::default();
        let population = (cfg.rooms, cfg.guests, cfg.housekeepers, cfg.receptionists);
        assert_eq!(population, (10, 50, 10, 5));
        assert_eq!(cfg.room_capacity, 4);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn test_from_lookup_overrides() {
        let vars: HashMap<&str, &str> = [("HOTEL_ROOMS", "3"), ("HOTEL_GUESTS", " 12 ")]
            .into_iter()
            .collect();
        let lookup = |k: &str| vars.get(k).map(|v| (*v).to_string());
        let cfg = HotelConfig::from_lookup(lookup).unwrap();
        assert_eq!(cfg.rooms, 3);
        assert_eq!(cfg.guests, 12);
        assert_eq!(cfg.receptionists, 5);
    }

    #[test]
    fn test_from_lookup_rejects_garbage() {
        let lookup = |k: &str| (k == "HOTEL_ROOMS").then(|| "many".to_string());
        let err = HotelConfig::from_lookup(lookup).unwrap_err();
        assert!(matches!(err, HotelError::InvalidConfig(_)));
    }
}
