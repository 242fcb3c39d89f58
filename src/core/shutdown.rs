//! Process-wide cancellation signal.
//!
//! Actors sleep through [`Shutdown::pause`] instead of `thread::sleep`, so triggering the signal
//! wakes every paused actor immediately.

use std::time::{Duration, Instant};

use parking_lot::{Condvar, Mutex};

use super::HotelError;

/// Cancellation flag paired with a condvar for interruptible pauses.
#[derive(Debug, Default)]
pub struct Shutdown {
    triggered: Mutex<bool>,
    condvar: Condvar,
}

impl Shutdown {
    /// Create an untriggered signal.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Trigger shutdown and wake every paused actor. Idempotent.
    pub fn trigger(&self) {
        let mut triggered = self.triggered.lock();
        *triggered = true;
        drop(triggered);
        self.condvar.notify_all();
    }

    /// Whether shutdown has been triggered.
    pub fn is_triggered(&self) -> bool {
        *self.triggered.lock()
    }

    /// Fail fast if shutdown has been triggered.
    pub fn check(&self) -> Result<(), HotelError> {
        if self.is_triggered() {
            Err(HotelError::Cancelled)
        } else {
            Ok(())
        }
    }

    /// Suspend the caller for `duration`, returning early with `Cancelled` on shutdown.
    pub fn pause(&self, duration: Duration) -> Result<(), HotelError> {
        let deadline = Instant::now() + duration;
        let mut triggered = self.triggered.lock();
        while !*triggered {
            let wait = self.condvar.wait_until(&mut triggered, deadline);
            if wait.timed_out() {
                break;
            }
        }
        if *triggered {
            Err(HotelError::Cancelled)
        } else {
            Ok(())
        }
    }
}
