//! Background Tasks Module
//!
//! Long-running maintenance tasks spawned at server startup.

mod sweep;

pub use sweep::spawn_sweep_task;
