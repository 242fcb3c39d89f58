//! Narration of hotel state transitions.
//!
//! Actors report every transition as a [`HotelEvent`] to a shared [`EventSink`]. Nothing in the
//! core depends on events programmatically; sinks exist for console narration and for tests.

use std::collections::VecDeque;
use std::fmt;

use crossbeam_channel::{unbounded, Receiver, Sender};
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};

use super::room::RoomId;

/// A single observable transition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum HotelEvent {
    /// A guest arrived at the front desk.
    GuestArrived {
        /// Guest name.
        guest: String,
    },
    /// A guest occupied a room, on its own or seated by a receptionist.
    CheckedIn {
        /// Guest name.
        guest: String,
        /// Room number.
        room: RoomId,
        /// Receptionist that seated the guest, if any.
        receptionist: Option<String>,
    },
    /// A guest vacated a room.
    CheckedOut {
        /// Guest name.
        guest: String,
        /// Room number.
        room: RoomId,
    },
    /// A guest registered for another stay.
    JoinedWaitList {
        /// Guest name.
        guest: String,
    },
    /// A housekeeper cleaned a room.
    RoomCleaned {
        /// Housekeeper name.
        housekeeper: String,
        /// Room number.
        room: RoomId,
    },
    /// A receptionist found no free room for a waiting guest.
    NoRoomForGuest {
        /// Receptionist name.
        receptionist: String,
        /// Guest name.
        guest: String,
    },
    /// A guest gave up before obtaining a room.
    LeftWithoutRoom {
        /// Guest name.
        guest: String,
    },
}

impl fmt::Display for HotelEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::GuestArrived { guest } => write!(f, "{guest} arrived"),
            Self::CheckedIn {
                guest,
                room,
                receptionist: Some(receptionist),
            } => write!(f, "{receptionist} checked {guest} into room {room}"),
            Self::CheckedIn {
                guest,
                room,
                receptionist: None,
            } => write!(f, "{guest} checked into room {room}"),
            Self::CheckedOut { guest, room } => write!(f, "{guest} checked out of room {room}"),
            Self::JoinedWaitList { guest } => write!(f, "{guest} is waiting for another stay"),
            Self::RoomCleaned { housekeeper, room } => {
                write!(f, "{housekeeper} cleaned room {room}")
            }
            Self::NoRoomForGuest {
                receptionist,
                guest,
            } => write!(
                f,
                "{receptionist} found no room for {guest}, they will have to wait"
            ),
            Self::LeftWithoutRoom { guest } => write!(f, "{guest} could not get a room and left"),
        }
    }
}

/// Destination for hotel events.
pub trait EventSink: Send + Sync {
    /// Record an event.
    fn record(&self, event: HotelEvent);
}

/// Narrates each event as an `info` log line.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingEventSink;

impl EventSink for TracingEventSink {
    fn record(&self, event: HotelEvent) {
        tracing::info!(target: "hotel_sim::narration", "{event}");
    }
}

/// Bounded in-memory event log for testing and dev.
pub struct InMemoryEventSink {
    events: Mutex<VecDeque<HotelEvent>>,
    max_events: usize,
}

impl InMemoryEventSink {
    /// Create a sink keeping at most `max_events`, dropping the oldest.
    #[must_use]
    pub fn new(max_events: usize) -> Self {
        Self {
            events: Mutex::new(VecDeque::with_capacity(max_events.min(1024))),
            max_events,
        }
    }

    /// Retrieve a snapshot of stored events.
    pub fn events(&self) -> Vec<HotelEvent> {
        self.events.lock().iter().cloned().collect()
    }
}

impl EventSink for InMemoryEventSink {
    fn record(&self, event: HotelEvent) {
        let mut events = self.events.lock();
        if events.len() >= self.max_events {
            events.pop_front();
        }
        events.push_back(event);
    }
}

/// Forwards events to a channel so observers can block on specific transitions.
#[derive(Clone)]
pub struct ChannelEventSink {
    tx: Sender<HotelEvent>,
}

impl ChannelEventSink {
    /// Create a sink and the receiving end of its channel.
    #[must_use]
    pub fn new() -> (Self, Receiver<HotelEvent>) {
        let (tx, rx) = unbounded();
        (Self { tx }, rx)
    }
}

impl EventSink for ChannelEventSink {
    fn record(&self, event: HotelEvent) {
        // Observer went away; narration is best-effort.
        let _ = self.tx.send(event);
    }
}
