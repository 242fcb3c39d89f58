//! Core coordination primitives: rooms, pool, wait list, guests, events.

pub mod context;
pub mod error;
pub mod events;
pub mod guest;
pub mod hotel;
pub mod resource_pool;
pub mod room;
pub mod shutdown;
pub mod spawn;
pub mod wait_list;

pub use context::HotelContext;
pub use error::{AppResult, HotelError};
pub use events::{ChannelEventSink, EventSink, HotelEvent, InMemoryEventSink, TracingEventSink};
pub use guest::{Guest, GuestId};
pub use hotel::{Hotel, HotelSnapshot, RunningHotel};
pub use resource_pool::{PoolSnapshot, RoomPool};
pub use room::{Room, RoomId, RoomSnapshot, RoomState};
pub use shutdown::Shutdown;
pub use spawn::Spawn;
pub use wait_list::WaitList;
