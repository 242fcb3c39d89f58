//! Configuration models for the hotel population and timing.

pub mod hotel;

pub use hotel::{HotelConfig, TimingConfig};
