//! Housekeeper actor: take a room, clean it, put it back, rest.

use std::sync::Arc;

use crate::core::{HotelContext, HotelError, HotelEvent, RoomId};

/// A housekeeper cycling through the pool.
pub struct Housekeeper {
    name: String,
    ctx: Arc<HotelContext>,
}

impl Housekeeper {
    /// Create a housekeeper.
    #[must_use]
    pub fn new(name: impl Into<String>, ctx: Arc<HotelContext>) -> Self {
        Self {
            name: name.into(),
            ctx,
        }
    }

    /// Actor name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Acquire a room (blocking), mark it clean and return it to the pool.
    pub fn clean_cycle(&self) -> Result<RoomId, HotelError> {
        let room = self.ctx.pool.acquire()?;
        room.clean();
        let room_id = room.id();
        // Narrate while still holding the room so the next holder's events come after.
        self.ctx.emit(HotelEvent::RoomCleaned {
            housekeeper: self.name.clone(),
            room: room_id,
        });
        self.ctx.pool.release(room)?;
        Ok(room_id)
    }

    /// Clean and rest until shutdown.
    pub fn run(self) {
        let pause = self.ctx.timing.housekeeper_pause();
        let result = loop {
            if let Err(e) = self
                .clean_cycle()
                .and_then(|_| self.ctx.shutdown.pause(pause))
            {
                break Err(e);
            }
        };
        super::log_exit(&self.name, result);
    }
}
