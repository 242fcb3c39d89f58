//! Runtime adapters for spawning and joining actor threads.

pub mod thread_spawner;

pub use thread_spawner::ThreadSpawner;
