//! Bounded blocking pool of available rooms.
//!
//! Uses a single `parking_lot::Mutex` for the available set and the checked-out bookkeeping,
//! and a `parking_lot::Condvar` to park acquirers while the pool is empty. Shutdown is a flag in
//! the same state so parked acquirers wake and observe it.

use std::collections::{HashSet, VecDeque};
use std::sync::Arc;

use parking_lot::{Condvar, Mutex};
use serde::{Deserialize, Serialize};

use super::room::{Room, RoomId};
use super::HotelError;

/// Counts taken under the pool lock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoolSnapshot {
    /// Rooms owned by the pool.
    pub total: usize,
    /// Rooms waiting in the pool.
    pub available: usize,
    /// Rooms currently held by an actor.
    pub checked_out: usize,
}

impl PoolSnapshot {
    /// `available + checked_out == total`.
    #[must_use]
    pub const fn is_conserved(&self) -> bool {
        self.available + self.checked_out == self.total
    }
}

struct PoolState {
    available: VecDeque<Arc<Room>>,
    checked_out: HashSet<RoomId>,
    shutdown: bool,
}

/// Pool of rooms with exclusive take/return discipline.
///
/// A room absent from the pool belongs to exactly one holder until it is released.
/// Waiting acquirers are served in no particular order.
pub struct RoomPool {
    total: usize,
    state: Mutex<PoolState>,
    /// Signaled when a room is released or the pool shuts down.
    room_available: Condvar,
}

impl RoomPool {
    /// Create a pool that initially holds every room.
    #[must_use]
    pub fn new(rooms: Vec<Arc<Room>>) -> Self {
        let total = rooms.len();
        Self {
            total,
            state: Mutex::new(PoolState {
                available: rooms.into(),
                checked_out: HashSet::with_capacity(total),
                shutdown: false,
            }),
            room_available: Condvar::new(),
        }
    }

    /// Number of rooms owned by the pool.
    #[must_use]
    pub const fn total(&self) -> usize {
        self.total
    }

    /// Take a room, blocking while none is available.
    ///
    /// Returns [`HotelError::Cancelled`] once the pool is shut down, including for callers that
    /// were already parked.
    pub fn acquire(&self) -> Result<Arc<Room>, HotelError> {
        let mut state = self.state.lock();
        loop {
            if state.shutdown {
                return Err(HotelError::Cancelled);
            }
            if let Some(room) = Self::take(&mut state) {
                return Ok(room);
            }
            self.room_available.wait(&mut state);
        }
    }

    /// Take a room if one is available right now.
    pub fn try_acquire(&self) -> Result<Option<Arc<Room>>, HotelError> {
        let mut state = self.state.lock();
        if state.shutdown {
            return Err(HotelError::Cancelled);
        }
        Ok(Self::take(&mut state))
    }

    fn take(state: &mut PoolState) -> Option<Arc<Room>> {
        let room = state.available.pop_front()?;
        state.checked_out.insert(room.id());
        tracing::trace!(
            room = room.id(),
            available = state.available.len(),
            "room taken"
        );
        Some(room)
    }

    /// Return a checked-out room and wake one parked acquirer.
    ///
    /// Accepted after shutdown so unwinding actors can hand their room back. A room that is not
    /// checked out is rejected; since a full pool has nothing checked out, this never blocks.
    pub fn release(&self, room: Arc<Room>) -> Result<(), HotelError> {
        let mut state = self.state.lock();
        if !state.checked_out.remove(&room.id()) {
            tracing::error!(
                room = room.id(),
                "release of a room that is not checked out"
            );
            return Err(HotelError::NotCheckedOut(room.id()));
        }
        tracing::trace!(room = room.id(), "room returned");
        state.available.push_back(room);
        drop(state);
        self.room_available.notify_one();
        Ok(())
    }

    /// Consistent counts of available and checked-out rooms.
    pub fn snapshot(&self) -> PoolSnapshot {
        let state = self.state.lock();
        PoolSnapshot {
            total: self.total,
            available: state.available.len(),
            checked_out: state.checked_out.len(),
        }
    }

    /// Rooms waiting in the pool.
    pub fn available(&self) -> usize {
        self.state.lock().available.len()
    }

    /// Signal shutdown to every parked acquirer.
    pub fn shutdown(&self) {
        let mut state = self.state.lock();
        state.shutdown = true;
        drop(state);
        // Wake all waiting threads so they can exit
        self.room_available.notify_all();
    }
}
