//! State shared by every actor of one hotel.

use std::sync::Arc;

use crate::config::TimingConfig;

use super::{EventSink, HotelEvent, RoomPool, Shutdown, WaitList};

/// The pool, the wait list, the shutdown signal and the narration sink.
///
/// Actors hold an `Arc<HotelContext>` and synchronize only through it.
pub struct HotelContext {
    /// Available rooms.
    pub pool: RoomPool,
    /// Guests waiting to be re-seated.
    pub wait_list: WaitList,
    /// Process-wide cancellation.
    pub shutdown: Shutdown,
    /// Actor delays.
    pub timing: TimingConfig,
    events: Arc<dyn EventSink>,
}

impl HotelContext {
    /// Assemble a context.
    #[must_use]
    pub fn new(pool: RoomPool, timing: TimingConfig, events: Arc<dyn EventSink>) -> Self {
        Self {
            pool,
            wait_list: WaitList::new(),
            shutdown: Shutdown::new(),
            timing,
            events,
        }
    }

    /// Narrate a transition.
    pub fn emit(&self, event: HotelEvent) {
        self.events.record(event);
    }

    /// Cancel every blocked or paused actor. Idempotent.
    pub fn shutdown(&self) {
        self.shutdown.trigger();
        self.pool.shutdown();
    }
}
