//! OS-thread spawner implementation.

use std::mem;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};

use parking_lot::Mutex;

use crate::core::{HotelError, Spawn};

/// Spawner that runs each actor on a dedicated, named OS thread and keeps the join handles.
///
/// Handles of threads that already finished are joined on every spawn, so a long run that keeps
/// starting short-lived stays only holds handles for threads that may still be running.
#[derive(Clone, Default)]
pub struct ThreadSpawner {
    handles: Arc<Mutex<Vec<JoinHandle<()>>>>,
    panicked: Arc<AtomicUsize>,
}

impl ThreadSpawner {
    /// Create a spawner with no threads.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Threads spawned and not yet joined.
    pub fn pending(&self) -> usize {
        self.handles.lock().len()
    }

    /// Join every thread that has already finished. Returns how many were joined.
    pub fn reap_finished(&self) -> usize {
        let finished: Vec<_> = {
            let mut handles = self.handles.lock();
            let (finished, running): (Vec<_>, Vec<_>) = mem::take(&mut *handles)
                .into_iter()
                .partition(JoinHandle::is_finished);
            *handles = running;
            finished
        };
        let count = finished.len();
        for handle in finished {
            self.join_one(handle);
        }
        count
    }

    /// Join every spawned thread, including threads spawned while joining.
    ///
    /// Returns the number of threads that panicked over the spawner's lifetime.
    pub fn join_all(&self) -> usize {
        loop {
            let batch = mem::take(&mut *self.handles.lock());
            if batch.is_empty() {
                return self.panicked.load(Ordering::Acquire);
            }
            for handle in batch {
                self.join_one(handle);
            }
        }
    }

    fn join_one(&self, handle: JoinHandle<()>) {
        let name = handle.thread().name().unwrap_or("actor").to_string();
        if handle.join().is_err() {
            tracing::error!(actor = %name, "actor thread panicked");
            self.panicked.fetch_add(1, Ordering::AcqRel);
        }
    }
}

impl Spawn for ThreadSpawner {
    fn spawn<F>(&self, name: String, body: F) -> Result<(), HotelError>
    where
        F: FnOnce() + Send + 'static,
    {
        self.reap_finished();
        let handle = thread::Builder::new()
            .name(name.clone())
            .spawn(body)
            .map_err(|e| HotelError::Spawn(format!("{name}: {e}")))?;
        self.handles.lock().push(handle);
        Ok(())
    }
}
