//! Integration tests for the room pool under contention.
//!
//! Validates:
//! 1. A single room is handed to exactly one of two concurrent acquirers
//! 2. The blocked acquirer proceeds once the room is released
//! 3. Conservation: available + checked out == total under churn
//! 4. No two holders ever hold the same room

use std::collections::HashSet;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use crossbeam_channel::{unbounded, RecvTimeoutError};
use parking_lot::Mutex;
use rand::Rng;

use hotel_sim::core::{Guest, Room, RoomPool};

fn pool_of(n: u32) -> Arc<RoomPool> {
    let rooms = (1..=n).map(|id| Arc::new(Room::new(id, 4))).collect();
    Arc::new(RoomPool::new(rooms))
}

#[test]
fn test_one_room_two_guests() {
    let pool = pool_of(1);
    let (tx, rx) = unbounded();

    let handles: Vec<_> = (1..=2)
        .map(|id| {
            let pool = Arc::clone(&pool);
            let tx = tx.clone();
            thread::spawn(move || {
                let guest = Guest::new(id);
                let room = pool.acquire().unwrap();
                guest.check_in(Arc::clone(&room));
                tx.send((id, room)).unwrap();
            })
        })
        .collect();

    let (first, room) = rx.recv_timeout(Duration::from_secs(5)).unwrap();
    assert!(room.is_occupied());
    assert_eq!(
        rx.recv_timeout(Duration::from_millis(200)).unwrap_err(),
        RecvTimeoutError::Timeout,
        "second guest must block while the only room is held"
    );
    assert_eq!(pool.snapshot().checked_out, 1);

    room.check_out(1);
    pool.release(room).unwrap();

    let (second, room) = rx.recv_timeout(Duration::from_secs(5)).unwrap();
    assert_ne!(first, second);
    assert_eq!(room.id(), 1);

    for handle in handles {
        handle.join().unwrap();
    }
}

#[test]
fn test_conservation_and_exclusive_holders_under_churn() {
    const ROOMS: u32 = 4;
    const WORKERS: u32 = 16;
    const ROUNDS: usize = 200;

    let pool = pool_of(ROOMS);
    let holders = Arc::new(Mutex::new(HashSet::new()));
    let done = Arc::new(AtomicBool::new(false));

    let sampler = {
        let pool = Arc::clone(&pool);
        let done = Arc::clone(&done);
        thread::spawn(move || {
            let mut samples = 0usize;
            while !done.load(Ordering::Acquire) {
                let snapshot = pool.snapshot();
                assert!(snapshot.is_conserved(), "{snapshot:?}");
                samples += 1;
            }
            samples
        })
    };

    let workers: Vec<_> = (1..=WORKERS)
        .map(|id| {
            let pool = Arc::clone(&pool);
            let holders = Arc::clone(&holders);
            thread::spawn(move || {
                let guest = Guest::new(id);
                let mut rng = rand::rng();
                for _ in 0..ROUNDS {
                    let room = pool.acquire().unwrap();
                    let id = room.id();
                    assert!(holders.lock().insert(id), "room {id} double-held");

                    guest.check_in(room);
                    if rng.random_bool(0.3) {
                        thread::yield_now();
                    }
                    let room = guest.check_out().unwrap();
                    assert_eq!(room.occupant_count(), 0);

                    holders.lock().remove(&room.id());
                    pool.release(room).unwrap();
                }
            })
        })
        .collect();

    for worker in workers {
        worker.join().unwrap();
    }
    done.store(true, Ordering::Release);
    assert!(sampler.join().unwrap() > 0);

    let snapshot = pool.snapshot();
    assert_eq!(snapshot.available, ROOMS as usize);
    assert_eq!(snapshot.checked_out, 0);
}

#[test]
fn test_shutdown_releases_every_parked_acquirer() {
    let pool = pool_of(1);
    let held = pool.acquire().unwrap();

    let waiters: Vec<_> = (0..4)
        .map(|_| {
            let pool = Arc::clone(&pool);
            thread::spawn(move || pool.acquire().is_err())
        })
        .collect();

    thread::sleep(Duration::from_millis(50));
    pool.shutdown();

    for waiter in waiters {
        assert!(waiter.join().unwrap());
    }
    pool.release(held).unwrap();
    assert!(pool.snapshot().is_conserved());
}
