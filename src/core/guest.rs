//! Guest entity.
//!
//! A guest outlives the threads that drive it: its initial arrival body, the receptionists that
//! re-seat it, and each later stay all share the same `Arc<Guest>`.

use std::fmt;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;

use parking_lot::Mutex;

use super::room::{Room, RoomId};

/// Stable guest number.
pub type GuestId = u32;

/// A hotel guest and the room it currently occupies, if any.
pub struct Guest {
    id: GuestId,
    name: String,
    room: Mutex<Option<Arc<Room>>>,
    stays: AtomicU32,
}

impl Guest {
    /// Create a guest named `Guest-{id}`.
    #[must_use]
    pub fn new(id: GuestId) -> Self {
        Self::with_name(id, format!("Guest-{id}"))
    }

    /// Create a guest with an explicit name.
    #[must_use]
    pub fn with_name(id: GuestId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            room: Mutex::new(None),
            stays: AtomicU32::new(0),
        }
    }

    /// Guest number.
    #[must_use]
    pub const fn id(&self) -> GuestId {
        self.id
    }

    /// Display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Room currently occupied.
    pub fn current_room(&self) -> Option<RoomId> {
        self.room.lock().as_ref().map(|room| room.id())
    }

    /// Completed check-ins so far.
    pub fn stays(&self) -> u32 {
        self.stays.load(Ordering::Relaxed)
    }

    /// Occupy `room`: mark it occupied and add one occupant under the room lock.
    ///
    /// Returns the previously held room if the guest was somehow still seated; the caller owns
    /// returning it to the pool.
    pub fn check_in(&self, room: Arc<Room>) -> Option<Arc<Room>> {
        let mut slot = self.room.lock();
        room.check_in(1);
        self.stays.fetch_add(1, Ordering::Relaxed);
        slot.replace(room)
    }

    /// Vacate the current room: mark it unoccupied and remove one occupant under the room lock.
    ///
    /// Returns the room so the caller can release it to the pool.
    pub fn check_out(&self) -> Option<Arc<Room>> {
        let mut slot = self.room.lock();
        let room = slot.take()?;
        room.check_out(1);
        Some(room)
    }
}

impl fmt::Debug for Guest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Guest")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("room", &self.current_room())
            .field("stays", &self.stays())
            .finish()
    }
}
