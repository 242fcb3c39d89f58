//! Rooms and their lock-guarded occupancy state.
//!
//! A [`Room`] is only ever held by one actor at a time (the pool hands it out exclusively), but its
//! fields still live behind the room's own [`parking_lot::Mutex`] so no reader can observe
//! `occupied` and `occupant_count` in a torn combination.

use parking_lot::{Mutex, MutexGuard};
use serde::{Deserialize, Serialize};

/// Stable room number, assigned at construction.
pub type RoomId = u32;

/// Default number of occupants a room is modeled to hold.
pub const DEFAULT_ROOM_CAPACITY: u32 = 4;

/// Mutable state of a room. Only reachable through [`Room::lock`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoomState {
    capacity: u32,
    occupant_count: u32,
    occupied: bool,
    clean: bool,
}

impl RoomState {
    const fn new(capacity: u32) -> Self {
        Self {
            capacity,
            occupant_count: 0,
            occupied: false,
            clean: true,
        }
    }

    /// Modeled number of occupants.
    #[must_use]
    pub const fn capacity(&self) -> u32 {
        self.capacity
    }

    /// Whether the room is marked occupied.
    #[must_use]
    pub const fn is_occupied(&self) -> bool {
        self.occupied
    }

    /// Whether the room is marked clean.
    #[must_use]
    pub const fn is_clean(&self) -> bool {
        self.clean
    }

    /// Current number of occupants.
    #[must_use]
    pub const fn occupant_count(&self) -> u32 {
        self.occupant_count
    }

    /// Set the occupied flag.
    pub fn set_occupied(&mut self, occupied: bool) {
        self.occupied = occupied;
    }

    /// Set the clean flag.
    pub fn set_clean(&mut self, clean: bool) {
        self.clean = clean;
    }

    /// Add occupants. Latches `occupied` once the count reaches capacity; never clears it.
    pub fn add_occupants(&mut self, n: u32) {
        self.occupant_count = self.occupant_count.saturating_add(n);
        if self.occupant_count >= self.capacity {
            self.occupied = true;
        }
    }

    /// Remove occupants. Clears `occupied` once the count drops to zero.
    pub fn remove_occupants(&mut self, n: u32) {
        self.occupant_count = self.occupant_count.saturating_sub(n);
        if self.occupant_count == 0 {
            self.occupied = false;
        }
    }
}

/// Point-in-time copy of a room, safe to log or serialize.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomSnapshot {
    /// Room number.
    pub id: RoomId,
    /// Modeled capacity.
    pub capacity: u32,
    /// Occupants at snapshot time.
    pub occupant_count: u32,
    /// Occupied flag at snapshot time.
    pub occupied: bool,
    /// Clean flag at snapshot time.
    pub clean: bool,
}

/// A hotel room.
#[derive(Debug)]
pub struct Room {
    id: RoomId,
    state: Mutex<RoomState>,
}

impl Room {
    /// Create an unoccupied, clean room.
    #[must_use]
    pub fn new(id: RoomId, capacity: u32) -> Self {
        Self {
            id,
            state: Mutex::new(RoomState::new(capacity)),
        }
    }

    /// Room number.
    #[must_use]
    pub const fn id(&self) -> RoomId {
        self.id
    }

    /// Modeled capacity.
    pub fn capacity(&self) -> u32 {
        self.state.lock().capacity()
    }

    /// Lock the room for a multi-step sequence.
    pub fn lock(&self) -> MutexGuard<'_, RoomState> {
        self.state.lock()
    }

    /// Whether the room is occupied.
    pub fn is_occupied(&self) -> bool {
        self.state.lock().is_occupied()
    }

    /// Whether the room is clean.
    pub fn is_clean(&self) -> bool {
        self.state.lock().is_clean()
    }

    /// Current occupant count.
    pub fn occupant_count(&self) -> u32 {
        self.state.lock().occupant_count()
    }

    /// Set the occupied flag.
    pub fn set_occupied(&self, occupied: bool) {
        self.state.lock().set_occupied(occupied);
    }

    /// Set the clean flag.
    pub fn set_clean(&self, clean: bool) {
        self.state.lock().set_clean(clean);
    }

    /// Add occupants under the room lock.
    pub fn add_occupants(&self, n: u32) {
        self.state.lock().add_occupants(n);
    }

    /// Remove occupants under the room lock.
    pub fn remove_occupants(&self, n: u32) {
        self.state.lock().remove_occupants(n);
    }

    /// Mark occupied and add `n` occupants in one lock hold.
    pub fn check_in(&self, n: u32) {
        let mut state = self.state.lock();
        state.set_occupied(true);
        state.add_occupants(n);
    }

    /// Mark unoccupied, remove `n` occupants and leave the room dirty, in one lock hold.
    pub fn check_out(&self, n: u32) {
        let mut state = self.state.lock();
        state.set_occupied(false);
        state.remove_occupants(n);
        state.set_clean(false);
    }

    /// Mark the room clean.
    pub fn clean(&self) {
        self.state.lock().set_clean(true);
    }

    /// Copy the current state.
    pub fn snapshot(&self) -> RoomSnapshot {
        let state = self.state.lock();
        RoomSnapshot {
            id: self.id,
            capacity: state.capacity,
            occupant_count: state.occupant_count,
            occupied: state.occupied,
            clean: state.clean,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn test_new_room_is_vacant_and_clean() {
        let room = Room::new(3, DEFAULT_ROOM_CAPACITY);
        assert_eq!(room.id(), 3);
        assert_eq!(room.capacity(), DEFAULT_ROOM_CAPACITY);
        assert_eq!(room.lock().capacity(), DEFAULT_ROOM_CAPACITY);
        assert!(!room.is_occupied());
        assert!(room.is_clean());
        assert_eq!(room.occupant_count(), 0);
    }

    #[test]
    fn test_add_occupants_latches_at_capacity() {
        let room = Room::new(1, 2);
        room.add_occupants(1);
        assert!(!room.is_occupied());
        room.add_occupants(1);
        assert!(room.is_occupied());
    }

    #[test]
    fn test_add_occupants_does_not_clear_occupied() {
        let room = Room::new(1, 4);
        room.set_occupied(true);
        room.add_occupants(1);
        assert!(room.is_occupied());
    }

    #[test]
    fn test_remove_occupants_clears_at_zero() {
        let room = Room::new(1, 4);
        room.check_in(2);
        room.remove_occupants(1);
        assert!(room.is_occupied());
        room.remove_occupants(1);
        assert!(!room.is_occupied());
        assert_eq!(room.occupant_count(), 0);
    }

    #[test]
    fn test_remove_occupants_saturates() {
        let room = Room::new(1, 4);
        room.set_occupied(true);
        room.remove_occupants(3);
        assert_eq!(room.occupant_count(), 0);
        assert!(!room.is_occupied());
    }

    #[test]
    fn test_check_in_check_out_round_trip() {
        let room = Room::new(9, DEFAULT_ROOM_CAPACITY);
        room.check_in(1);
        assert!(room.is_occupied());
        assert_eq!(room.occupant_count(), 1);

        room.check_out(1);
        let snap = room.snapshot();
        assert!(!snap.occupied);
        assert!(!snap.clean);
        assert_eq!(snap.occupant_count, 0);

        room.clean();
        assert!(room.is_clean());
    }

    #[test]
    fn test_check_in_is_never_observed_torn() {
        let room = Arc::new(Room::new(1, DEFAULT_ROOM_CAPACITY));
        let writer = {
            let room = Arc::clone(&room);
            thread::spawn(move || {
                for _ in 0..10_000 {
                    room.check_in(1);
                    room.check_out(1);
                }
            })
        };

        for _ in 0..10_000 {
            let snap = room.snapshot();
            assert_eq!(snap.occupied, snap.occupant_count > 0);
        }
        writer.join().unwrap();
    }
}
