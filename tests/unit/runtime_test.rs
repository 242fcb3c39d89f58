//! Tests for the thread spawner

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use hotel_sim::core::Spawn;
use hotel_sim::runtime::ThreadSpawner;

#[test]
fn test_thread_spawner_runs_and_joins() {
    let spawner = ThreadSpawner::new();
    let ran = Arc::new(AtomicUsize::new(0));

    for i in 0..5 {
        let ran = Arc::clone(&ran);
        spawner
            .spawn(format!("worker-{i}"), move || {
                ran.fetch_add(1, Ordering::SeqCst);
            })
            .unwrap();
    }

    assert_eq!(spawner.join_all(), 0);
    assert_eq!(ran.load(Ordering::SeqCst), 5);
}
