//! Guest actor: arrive, take a room, stay, check out, ask for another stay.

use std::sync::Arc;

use crate::core::{Guest, HotelContext, HotelError, HotelEvent, Room};

/// Initial run body of a guest.
pub struct GuestActor {
    guest: Arc<Guest>,
    ctx: Arc<HotelContext>,
}

impl GuestActor {
    /// Bind a guest to a hotel.
    #[must_use]
    pub const fn new(guest: Arc<Guest>, ctx: Arc<HotelContext>) -> Self {
        Self { guest, ctx }
    }

    /// Arrive after a random delay, take a room (blocking), then stay and check out.
    ///
    /// Shutdown before a room is obtained makes the guest leave without joining the wait list.
    pub fn run(self) {
        let result = self.arrive_and_stay();
        super::log_exit(self.guest.name(), result);
    }

    fn arrive_and_stay(&self) -> Result<(), HotelError> {
        let ctx = &self.ctx;
        let room = match self.arrive() {
            Ok(room) => room,
            Err(e) => {
                ctx.emit(HotelEvent::LeftWithoutRoom {
                    guest: self.guest.name().to_string(),
                });
                return Err(e);
            }
        };

        let room_id = room.id();
        if let Some(stale) = self.guest.check_in(room) {
            ctx.pool.release(stale)?;
        }
        ctx.emit(HotelEvent::CheckedIn {
            guest: self.guest.name().to_string(),
            room: room_id,
            receptionist: None,
        });

        stay_and_check_out(ctx, &self.guest)
    }

    /// Wait out the arrival delay, then block for a room.
    fn arrive(&self) -> Result<Arc<Room>, HotelError> {
        let ctx = &self.ctx;
        ctx.shutdown.pause(ctx.timing.arrival().sample())?;
        ctx.emit(HotelEvent::GuestArrived {
            guest: self.guest.name().to_string(),
        });
        ctx.pool.acquire()
    }
}

/// Stay body for a guest already seated by a receptionist.
pub fn run_stay(ctx: &Arc<HotelContext>, guest: &Arc<Guest>) {
    let result = stay_and_check_out(ctx, guest);
    super::log_exit(guest.name(), result);
}

/// Stay for a random time, vacate and release the room, then join the wait list.
///
/// The room is checked out and returned even when the stay is cut short by shutdown; in that case
/// the guest does not join the wait list.
fn stay_and_check_out(ctx: &HotelContext, guest: &Arc<Guest>) -> Result<(), HotelError> {
    let stayed = ctx.shutdown.pause(ctx.timing.stay().sample());

    if let Some(room) = guest.check_out() {
        ctx.emit(HotelEvent::CheckedOut {
            guest: guest.name().to_string(),
            room: room.id(),
        });
        ctx.pool.release(room)?;
    }
    stayed?;

    ctx.shutdown.pause(ctx.timing.vacate_pause())?;
    // Narrate before registering: once listed, a receptionist may seat the guest at any moment.
    ctx.emit(HotelEvent::JoinedWaitList {
        guest: guest.name().to_string(),
    });
    if !ctx.wait_list.add(Arc::clone(guest)) {
        tracing::debug!(guest = guest.name(), "guest already on the wait list");
    }
    Ok(())
}
