//! Actor loops. Each actor owns an `Arc<HotelContext>` and nothing else shared.

pub mod guest;
pub mod housekeeper;
pub mod receptionist;

pub use guest::{run_stay, GuestActor};
pub use housekeeper::Housekeeper;
pub use receptionist::{PassReport, Receptionist};

use crate::core::HotelError;

/// Log how an actor loop ended. Cancellation is the expected way out.
fn log_exit(actor: &str, result: Result<(), HotelError>) {
    match result {
        Ok(()) => tracing::debug!(actor, "actor finished"),
        Err(HotelError::Cancelled) => tracing::debug!(actor, "actor stopped by shutdown"),
        Err(e) => tracing::error!(actor, error = %e, "actor failed"),
    }
}
