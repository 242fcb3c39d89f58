//! # Hotel Sim
//!
//! A concurrent model of a hotel: a fixed set of rooms shared by many guests and a smaller
//! staff of receptionists and housekeepers.
//!
//! The interesting part is the coordination, not the hotel:
//!
//! - **Room pool**: a bounded blocking collection of available rooms. Acquiring blocks while the
//!   pool is empty; every checked-out room comes back exactly once.
//! - **Per-room state**: occupancy and cleanliness live behind each room's own lock, independent of
//!   the pool lock, because a room is mutated by its holder after it left the pool.
//! - **Wait list**: guests who checked out and want another stay register here. Receptionists
//!   periodically scan it and re-seat guests whenever a room can be taken without blocking.
//!
//! ## Actors
//!
//! Every guest, housekeeper and receptionist runs on its own OS thread. They never talk to each
//! other directly; all synchronization goes through [`core::RoomPool`] and [`core::WaitList`].
//! A process-wide [`core::Shutdown`] signal unblocks every actor parked in the pool or in a pause.
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use hotel_sim::config::HotelConfig;
//! use hotel_sim::core::{Hotel, TracingEventSink};
//!
//! let hotel = Hotel::new(HotelConfig::default(), Arc::new(TracingEventSink))?;
//! let running = hotel.start()?;
//! // ... later
//! running.shutdown();
//! let snapshot = running.join();
//! assert_eq!(snapshot.pool.checked_out, 0);
//! # Ok::<(), hotel_sim::core::HotelError>(())
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Actor loops: guests, housekeepers and receptionists.
pub mod actors;
/// Configuration models for the hotel population and timing.
pub mod config;
/// Core coordination primitives: rooms, pool, wait list, guests, events.
pub mod core;
/// Runtime adapters for spawning and joining actor threads.
pub mod runtime;
/// Shared utilities.
pub mod util;
