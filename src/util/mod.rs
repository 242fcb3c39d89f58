pub mod delay;
pub mod telemetry;

pub use delay::*;
pub use telemetry::*;
