//! Abstraction over where actor bodies run.

use super::HotelError;

/// Abstraction for spawning actor bodies.
pub trait Spawn {
    /// Run `body` as an independent actor called `name`.
    fn spawn<F>(&self, name: String, body: F) -> Result<(), HotelError>
    where
        F: FnOnce() + Send + 'static;
}
