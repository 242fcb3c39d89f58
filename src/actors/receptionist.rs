//! Receptionist actor: re-seat waiting guests whenever a room is free.
//!
//! A pass never blocks on the pool. Each waiting guest gets one `try_acquire`; guests left without
//! a room stay on the wait list for a later pass.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::core::{Guest, HotelContext, HotelError, HotelEvent, Spawn};

use super::guest::run_stay;

/// Outcome of one pass over the wait list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PassReport {
    /// Guests checked in during the pass.
    pub seated: usize,
    /// Guests left waiting because the pool was empty.
    pub left_waiting: usize,
}

/// What happened to one guest during a pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Seating {
    Seated,
    NoRoom,
    ClaimedElsewhere,
}

/// A receptionist serving the wait list.
pub struct Receptionist<S> {
    name: String,
    ctx: Arc<HotelContext>,
    spawner: S,
}

impl<S> Receptionist<S>
where
    S: Spawn,
{
    /// Create a receptionist. `spawner` runs the stay of each re-seated guest.
    #[must_use]
    pub fn new(name: impl Into<String>, ctx: Arc<HotelContext>, spawner: S) -> Self {
        Self {
            name: name.into(),
            ctx,
            spawner,
        }
    }

    /// Actor name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Snapshot the wait list and try to seat every guest in it once.
    pub fn serve_pass(&self) -> Result<PassReport, HotelError> {
        let mut report = PassReport::default();
        for guest in self.ctx.wait_list.snapshot() {
            match self.seat(guest)? {
                Seating::Seated => report.seated += 1,
                Seating::NoRoom => report.left_waiting += 1,
                Seating::ClaimedElsewhere => {}
            }
        }
        Ok(report)
    }

    /// Try to seat one guest from a wait-list snapshot.
    fn seat(&self, guest: Arc<Guest>) -> Result<Seating, HotelError> {
        let Some(room) = self.ctx.pool.try_acquire()? else {
            self.ctx.emit(HotelEvent::NoRoomForGuest {
                receptionist: self.name.clone(),
                guest: guest.name().to_string(),
            });
            return Ok(Seating::NoRoom);
        };

        // Another receptionist seated this guest after the snapshot was taken.
        if !self.ctx.wait_list.claim(guest.id()) {
            self.ctx.pool.release(room)?;
            return Ok(Seating::ClaimedElsewhere);
        }

        let room_id = room.id();
        if let Some(stale) = guest.check_in(room) {
            self.ctx.pool.release(stale)?;
        }
        self.ctx.emit(HotelEvent::CheckedIn {
            guest: guest.name().to_string(),
            room: room_id,
            receptionist: Some(self.name.clone()),
        });
        self.start_stay(guest)?;
        Ok(Seating::Seated)
    }

    fn start_stay(&self, guest: Arc<Guest>) -> Result<(), HotelError> {
        let ctx = Arc::clone(&self.ctx);
        let stay_guest = Arc::clone(&guest);
        let name = format!("{}-stay-{}", guest.name(), guest.stays());
        if let Err(e) = self
            .spawner
            .spawn(name, move || run_stay(&ctx, &stay_guest))
        {
            // Undo the check-in so the room and the guest are not stranded.
            if let Some(room) = guest.check_out() {
                self.ctx.pool.release(room)?;
            }
            self.ctx.wait_list.add(guest);
            return Err(e);
        }
        Ok(())
    }

    /// Serve the wait list and rest until shutdown.
    pub fn run(self) {
        let pause = self.ctx.timing.receptionist_pause();
        let result = loop {
            match self.serve_pass() {
                Ok(report) if report.seated > 0 || report.left_waiting > 0 => {
                    tracing::debug!(
                        actor = %self.name,
                        seated = report.seated,
                        left_waiting = report.left_waiting,
                        "pass complete"
                    );
                }
                Ok(_) => {}
                Err(e) => break Err(e),
            }
            if let Err(e) = self.ctx.shutdown.pause(pause) {
                break Err(e);
            }
        };
        super::log_exit(&self.name, result);
    }
}
