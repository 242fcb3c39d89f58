//! Hotel orchestration: build the population, start the actors, stop them.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::actors::{GuestActor, Housekeeper, Receptionist};
use crate::config::HotelConfig;
use crate::runtime::ThreadSpawner;

use super::{
    EventSink, Guest, HotelContext, HotelError, PoolSnapshot, Room, RoomPool, RoomSnapshot, Spawn,
};

/// Consistent view of the hotel for logging and assertions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HotelSnapshot {
    /// Pool counts.
    pub pool: PoolSnapshot,
    /// Guest names on the wait list.
    pub waiting: Vec<String>,
    /// Guests currently holding a room.
    pub seated: usize,
    /// Per-room state.
    pub rooms: Vec<RoomSnapshot>,
}

/// A hotel that has been built but not started.
pub struct Hotel {
    config: HotelConfig,
    ctx: Arc<HotelContext>,
    rooms: Vec<Arc<Room>>,
    guests: Vec<Arc<Guest>>,
}

impl Hotel {
    /// Validate `config` and build rooms, pool and guests.
    pub fn new(config: HotelConfig, events: Arc<dyn EventSink>) -> Result<Self, HotelError> {
        config.validate()?;
        let rooms: Vec<Arc<Room>> = (1..=config.rooms)
            .map(|id| Arc::new(Room::new(id, config.room_capacity)))
            .collect();
        let guests = (1..=config.guests).map(|id| Arc::new(Guest::new(id))).collect();
        let pool = RoomPool::new(rooms.clone());
        let ctx = Arc::new(HotelContext::new(pool, config.timing.clone(), events));
        Ok(Self {
            config,
            ctx,
            rooms,
            guests,
        })
    }

    /// Configuration the hotel was built from.
    #[must_use]
    pub const fn config(&self) -> &HotelConfig {
        &self.config
    }

    /// Shared actor context.
    #[must_use]
    pub const fn context(&self) -> &Arc<HotelContext> {
        &self.ctx
    }

    /// Every guest, including those not currently driven by a thread.
    #[must_use]
    pub fn guests(&self) -> &[Arc<Guest>] {
        &self.guests
    }

    /// Every room, whether pooled or checked out.
    #[must_use]
    pub fn rooms(&self) -> &[Arc<Room>] {
        &self.rooms
    }

    /// Take a consistent-enough snapshot. Pool counts are exact; room and guest states are read
    /// one lock at a time.
    pub fn snapshot(&self) -> HotelSnapshot {
        HotelSnapshot {
            pool: self.ctx.pool.snapshot(),
            waiting: self
                .ctx
                .wait_list
                .snapshot()
                .iter()
                .map(|g| g.name().to_string())
                .collect(),
            seated: self
                .guests
                .iter()
                .filter(|g| g.current_room().is_some())
                .count(),
            rooms: self.rooms.iter().map(|r| r.snapshot()).collect(),
        }
    }

    /// Start housekeepers, receptionists and guests, each on its own thread.
    ///
    /// If any actor fails to spawn, the ones already running are shut down and joined.
    pub fn start(self) -> Result<RunningHotel, HotelError> {
        let spawner = ThreadSpawner::new();
        let running = RunningHotel {
            hotel: self,
            spawner,
        };
        if let Err(e) = running.spawn_actors() {
            tracing::error!(error = %e, "failed to start hotel");
            running.shutdown();
            running.spawner.join_all();
            return Err(e);
        }
        tracing::info!(
            rooms = running.hotel.config.rooms,
            guests = running.hotel.config.guests,
            housekeepers = running.hotel.config.housekeepers,
            receptionists = running.hotel.config.receptionists,
            "hotel open"
        );
        Ok(running)
    }
}

/// A hotel whose actors are running.
pub struct RunningHotel {
    hotel: Hotel,
    spawner: ThreadSpawner,
}

impl RunningHotel {
    fn spawn_actors(&self) -> Result<(), HotelError> {
        let ctx = &self.hotel.ctx;
        let cfg = &self.hotel.config;

        for i in 1..=cfg.housekeepers {
            let housekeeper = Housekeeper::new(format!("Housekeeper-{i}"), Arc::clone(ctx));
            self.spawner
                .spawn(housekeeper.name().to_string(), move || housekeeper.run())?;
        }

        for i in 1..=cfg.receptionists {
            let receptionist = Receptionist::new(
                format!("Receptionist-{i}"),
                Arc::clone(ctx),
                self.spawner.clone(),
            );
            self.spawner
                .spawn(receptionist.name().to_string(), move || receptionist.run())?;
        }

        for guest in &self.hotel.guests {
            let actor = GuestActor::new(Arc::clone(guest), Arc::clone(ctx));
            self.spawner
                .spawn(guest.name().to_string(), move || actor.run())?;
        }
        Ok(())
    }

    /// The hotel being run.
    #[must_use]
    pub const fn hotel(&self) -> &Hotel {
        &self.hotel
    }

    /// Actor threads spawned and not yet joined, including stays that finished since the last
    /// spawn.
    pub fn pending_threads(&self) -> usize {
        self.spawner.pending()
    }

    /// Snapshot while running.
    pub fn snapshot(&self) -> HotelSnapshot {
        self.hotel.snapshot()
    }

    /// Cancel every actor. Returns immediately; use [`RunningHotel::join`] to wait.
    pub fn shutdown(&self) {
        tracing::info!("hotel shutting down");
        self.hotel.ctx.shutdown();
    }

    /// Wait for every actor thread, including stays spawned late, and snapshot the result.
    ///
    /// Only returns after [`RunningHotel::shutdown`]; actors otherwise run forever.
    pub fn join(self) -> HotelSnapshot {
        let panicked = self.spawner.join_all();
        if panicked > 0 {
            tracing::warn!(panicked, "some actors panicked");
        }
        let snapshot = self.hotel.snapshot();
        tracing::info!(
            available = snapshot.pool.available,
            checked_out = snapshot.pool.checked_out,
            waiting = snapshot.waiting.len(),
            "hotel closed"
        );
        snapshot
    }
}
