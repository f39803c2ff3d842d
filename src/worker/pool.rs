//! Worker pool management and search coordination.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use crossbeam_channel::{bounded, Receiver, Sender};

use crate::config::GenerationMode;
use crate::matcher::Pattern;
use crate::progress::{Estimator, ProgressReport};

use super::cpu::CpuWorker;

/// Result of a successful vanity address search.
///
/// Created once per match under the coordinator lock and immutable
/// afterwards.
#[derive(Debug, Clone)]
pub struct VanityResult {
    /// 1-based match index, strictly increasing in registration order
    pub sequence: u64,
    /// The Base58 address
    pub address: String,
    /// The mnemonic phrase, in mnemonic mode
    pub mnemonic: Option<String>,
    /// The 32-byte private key seed
    pub private_key: [u8; 32],
    /// The 32-byte public key
    pub public_key: [u8; 32],
    /// The ID of the worker that found this result
    pub worker_id: usize,
}

impl VanityResult {
    /// Returns the private key as a hex string.
    pub fn private_key_hex(&self) -> String {
        hex::encode(self.private_key)
    }

    /// Returns the Base58 encoding of the private key alone (the format
    /// Solflare imports).
    pub fn private_key_base58(&self) -> String {
        bs58::encode(self.private_key).into_string()
    }

    /// Returns the Base58 encoding of private key ‖ public key (the 64-byte
    /// format Phantom and most wallets import).
    pub fn keypair_base58(&self) -> String {
        let mut combined = [0u8; 64];
        combined[..32].copy_from_slice(&self.private_key);
        combined[32..].copy_from_slice(&self.public_key);
        bs58::encode(combined).into_string()
    }

    /// Returns the private key as a bracketed decimal byte array.
    pub fn private_key_byte_array(&self) -> String {
        let bytes = self
            .private_key
            .iter()
            .map(|b| b.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        format!("[{}]", bytes)
    }
}

/// Shared mutable search state, guarded by the coordinator's single lock.
///
/// Workers never touch the counters directly; every read-modify-write goes
/// through [`CpuWorker::run`]'s critical section, and the pool exposes only
/// snapshots.
#[derive(Debug)]
pub struct SearchState {
    pub(super) total_attempts: u64,
    pub(super) found: u64,
    pub(super) target: u64,
    pub(super) progress: Option<ProgressReport>,
}

impl SearchState {
    fn new(target: u64) -> Self {
        Self {
            total_attempts: 0,
            found: 0,
            target,
            progress: None,
        }
    }
}

/// A read-only copy of the shared counters.
#[derive(Debug, Clone, Copy)]
pub struct StateSnapshot {
    /// Attempts made across all workers
    pub total_attempts: u64,
    /// Matches registered so far
    pub found: u64,
    /// The fixed target count
    pub target: u64,
}

/// Manages a pool of workers for parallel vanity address search.
///
/// Owns the shared [`SearchState`] and the termination decision; results
/// arrive on a channel consumed by a single caller, which serializes all
/// result-sink writes.
pub struct WorkerPool {
    /// Number of workers
    num_workers: usize,
    /// The pattern being searched for
    pattern: Pattern,
    /// Worker thread handles (Option to allow taking during join)
    handles: Option<Vec<JoinHandle<()>>>,
    /// Channel receiver for results
    result_rx: Receiver<VanityResult>,
    /// Shared stop flag
    stop_flag: Arc<AtomicBool>,
    /// Shared search state
    state: Arc<Mutex<SearchState>>,
    /// Start time
    start_time: Instant,
}

impl WorkerPool {
    /// Creates a pool of `num_workers` threads searching for `target`
    /// matches of `pattern` in the given generation mode.
    pub fn new(num_workers: usize, pattern: Pattern, mode: GenerationMode, target: u64) -> Self {
        Self::build(num_workers, pattern, mode, target, None)
    }

    /// Creates a pool whose workers pause between candidate generation and
    /// the critical section, keeping several matching candidates in flight
    /// at once.
    #[cfg(test)]
    fn with_contention_delay(
        num_workers: usize,
        pattern: Pattern,
        mode: GenerationMode,
        target: u64,
        delay: Duration,
    ) -> Self {
        Self::build(num_workers, pattern, mode, target, Some(delay))
    }

    fn build(
        num_workers: usize,
        pattern: Pattern,
        mode: GenerationMode,
        target: u64,
        contention_delay: Option<Duration>,
    ) -> Self {
        let (result_tx, result_rx) = bounded(100);
        let stop_flag = Arc::new(AtomicBool::new(false));
        let state = Arc::new(Mutex::new(SearchState::new(target)));
        let estimator = Estimator::new(&pattern);
        let start_time = Instant::now();

        let handles = Self::spawn_workers(
            num_workers,
            pattern.clone(),
            mode,
            estimator,
            start_time,
            result_tx,
            stop_flag.clone(),
            state.clone(),
            contention_delay,
        );

        Self {
            num_workers,
            pattern,
            handles: Some(handles),
            result_rx,
            stop_flag,
            state,
            start_time,
        }
    }

    /// Spawns worker threads.
    #[allow(clippy::too_many_arguments)]
    fn spawn_workers(
        num_workers: usize,
        pattern: Pattern,
        mode: GenerationMode,
        estimator: Estimator,
        start_time: Instant,
        result_tx: Sender<VanityResult>,
        stop_flag: Arc<AtomicBool>,
        state: Arc<Mutex<SearchState>>,
        contention_delay: Option<Duration>,
    ) -> Vec<JoinHandle<()>> {
        (0..num_workers)
            .map(|id| {
                let pattern = pattern.clone();
                let result_tx = result_tx.clone();
                let stop_flag = stop_flag.clone();
                let state = state.clone();

                thread::Builder::new()
                    .name(format!("vanity-worker-{}", id))
                    .spawn(move || {
                        let worker = CpuWorker::new(
                            id,
                            pattern,
                            mode,
                            estimator,
                            start_time,
                            result_tx,
                            stop_flag,
                            state,
                            contention_delay,
                        );
                        worker.run();
                    })
                    .expect("Failed to spawn worker thread")
            })
            .collect()
    }

    /// Waits for a result with a timeout.
    ///
    /// Returns `Some(result)` if a match arrives, `None` if the timeout
    /// expires or all workers have exited.
    pub fn wait_for_result(&self, timeout: Duration) -> Option<VanityResult> {
        self.result_rx.recv_timeout(timeout).ok()
    }

    /// Attempts to receive a result without blocking.
    pub fn try_recv(&self) -> Option<VanityResult> {
        self.result_rx.try_recv().ok()
    }

    /// Signals all workers to stop.
    pub fn stop(&self) {
        self.stop_flag.store(true, Ordering::Relaxed);
    }

    /// Waits for all workers to complete.
    ///
    /// After this returns the shared counters are final and any results
    /// still queued on the channel can be drained with [`Self::try_recv`].
    pub fn join(&mut self) {
        self.stop();
        if let Some(handles) = self.handles.take() {
            for handle in handles {
                let _ = handle.join();
            }
        }
    }

    /// Returns the number of workers.
    pub fn num_workers(&self) -> usize {
        self.num_workers
    }

    /// Returns the pattern being searched for.
    pub fn pattern(&self) -> &Pattern {
        &self.pattern
    }

    /// Returns a copy of the shared counters.
    pub fn snapshot(&self) -> StateSnapshot {
        let state = self.state.lock().expect("search state lock poisoned");
        StateSnapshot {
            total_attempts: state.total_attempts,
            found: state.found,
            target: state.target,
        }
    }

    /// Returns the most recent progress report, refreshed by the workers
    /// every 100 attempts.
    pub fn progress(&self) -> Option<ProgressReport> {
        self.state
            .lock()
            .expect("search state lock poisoned")
            .progress
    }

    /// Returns the elapsed time since the pool was created.
    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }

    /// Returns the current search rate (attempts per second).
    pub fn attempts_per_second(&self) -> f64 {
        let elapsed = self.elapsed().as_secs_f64();
        if elapsed > 0.0 {
            self.snapshot().total_attempts as f64 / elapsed
        } else {
            0.0
        }
    }

    /// Returns a clone of the stop flag for external use (e.g., signal
    /// handlers).
    pub fn stop_flag_clone(&self) -> Arc<AtomicBool> {
        self.stop_flag.clone()
    }

    /// Returns true if the pool has been signaled to stop.
    pub fn is_stopped(&self) -> bool {
        self.stop_flag.load(Ordering::Relaxed)
    }
}

impl Drop for WorkerPool {
    fn drop(&mut self) {
        self.stop();
        // Wait for workers to finish if they haven't been joined
        if let Some(handles) = self.handles.take() {
            for handle in handles {
                let _ = handle.join();
            }
        }
    }
}
