//! Registry of guests waiting to be re-seated by a receptionist.

use std::sync::Arc;

use parking_lot::Mutex;

use super::guest::{Guest, GuestId};

/// Mutex-guarded set of waiting guests.
///
/// Insertion order is kept but not promised. A guest appears at most once, and [`WaitList::claim`]
/// is the only way a receptionist may take a guest off the list, so two receptionists can never
/// seat the same guest from the same entry.
#[derive(Default)]
pub struct WaitList {
    guests: Mutex<Vec<Arc<Guest>>>,
}

impl WaitList {
    /// Create an empty wait list.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a guest. Returns false if it was already waiting.
    pub fn add(&self, guest: Arc<Guest>) -> bool {
        let mut guests = self.guests.lock();
        if guests.iter().any(|g| g.id() == guest.id()) {
            return false;
        }
        guests.push(guest);
        true
    }

    /// Remove a guest. Returns true if this call removed it.
    pub fn claim(&self, guest: GuestId) -> bool {
        let mut guests = self.guests.lock();
        match guests.iter().position(|g| g.id() == guest) {
            Some(idx) => {
                guests.remove(idx);
                true
            }
            None => false,
        }
    }

    /// Whether a guest is waiting.
    pub fn contains(&self, guest: GuestId) -> bool {
        self.guests.lock().iter().any(|g| g.id() == guest)
    }

    /// Copy of the waiting guests, taken under the lock.
    pub fn snapshot(&self) -> Vec<Arc<Guest>> {
        self.guests.lock().clone()
    }

    /// Number of waiting guests.
    pub fn len(&self) -> usize {
        self.guests.lock().len()
    }

    /// Whether nobody is waiting.
    pub fn is_empty(&self) -> bool {
        self.guests.lock().is_empty()
    }
}
