//! Worker pool for the parallel vanity address search.
//!
//! This module provides:
//! - Multi-threaded CPU workers running the generate-test loop
//! - The search coordinator owning the shared counters and the
//!   termination decision
//! - Progress snapshots for reporting

mod cpu;
mod pool;

pub use cpu::CpuWorker;
pub use pool::{SearchState, StateSnapshot, VanityResult, WorkerPool};
