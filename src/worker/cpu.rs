//! CPU worker: the generate-test loop.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::{Duration, Instant};

use crossbeam_channel::Sender;

use crate::config::GenerationMode;
use crate::crypto::{derive_from_mnemonic, generate_mnemonic, DerivationError, Keypair};
use crate::matcher::Pattern;
use crate::progress::Estimator;

use super::pool::{SearchState, VanityResult};

/// A generated candidate, built outside the coordinator lock.
struct Candidate {
    keypair: Keypair,
    address: String,
    mnemonic: Option<String>,
}

/// A worker that generates and tests keypairs until the shared target is
/// reached.
pub struct CpuWorker {
    /// Worker ID
    id: usize,
    /// The pattern to match against
    pattern: Pattern,
    /// Key generation mode
    mode: GenerationMode,
    /// ETA model for the progress snapshots
    estimator: Estimator,
    /// Search start time
    started: Instant,
    /// Channel to send results
    result_tx: Sender<VanityResult>,
    /// Shared stop flag
    stop_flag: Arc<AtomicBool>,
    /// Shared search state
    state: Arc<Mutex<SearchState>>,
    /// Optional pause between generation and the critical section; widens
    /// the race window in stress tests
    contention_delay: Option<Duration>,
}

impl CpuWorker {
    /// Creates a new CPU worker.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: usize,
        pattern: Pattern,
        mode: GenerationMode,
        estimator: Estimator,
        started: Instant,
        result_tx: Sender<VanityResult>,
        stop_flag: Arc<AtomicBool>,
        state: Arc<Mutex<SearchState>>,
        contention_delay: Option<Duration>,
    ) -> Self {
        Self {
            id,
            pattern,
            mode,
            estimator,
            started,
            result_tx,
            stop_flag,
            state,
            contention_delay,
        }
    }

    /// Runs the worker loop.
    ///
    /// Candidate generation is CPU-bound and lock-free; counting, the match
    /// evaluation and the found-count increment happen inside one lock
    /// acquisition, so the found count can never pass the target even when
    /// several workers match in the same instant. The loop exits
    /// cooperatively once the target is reached or the stop flag is set.
    pub fn run(&self) {
        loop {
            if self.stop_flag.load(Ordering::Relaxed) {
                break;
            }

            // Generation failures discard the attempt and keep the loop
            // alive
            let candidate = match self.generate_candidate() {
                Ok(candidate) => candidate,
                Err(_) => continue,
            };

            if let Some(delay) = self.contention_delay {
                thread::sleep(delay);
            }

            let mut state = self.state.lock().expect("search state lock poisoned");
            state.total_attempts += 1;

            // Refreshing the ETA every attempt would be wasted work
            if state.total_attempts % 100 == 0 {
                state.progress =
                    Some(self.estimator.report(state.total_attempts, self.started.elapsed()));
            }

            if state.found >= state.target {
                break;
            }

            if self.pattern.matches(&candidate.address).is_match() {
                state.found += 1;
                let sequence = state.found;
                let done = state.found >= state.target;
                drop(state);

                let result = VanityResult {
                    sequence,
                    address: candidate.address,
                    mnemonic: candidate.mnemonic,
                    private_key: *candidate.keypair.private_key_bytes(),
                    public_key: *candidate.keypair.public_key_bytes(),
                    worker_id: self.id,
                };

                // Ignore send failure if the consumer is gone
                let _ = self.result_tx.send(result);

                if done {
                    break;
                }
            }
        }
    }

    /// Produces one candidate keypair in the configured mode.
    fn generate_candidate(&self) -> Result<Candidate, DerivationError> {
        match self.mode {
            GenerationMode::Random => {
                let keypair = Keypair::generate();
                Ok(Candidate {
                    address: keypair.address().to_base58(),
                    keypair,
                    mnemonic: None,
                })
            }
            GenerationMode::Mnemonic => {
                let mnemonic = generate_mnemonic()?;
                let key = derive_from_mnemonic(&mnemonic);
                let keypair = Keypair::from_seed(key.into_bytes());
                Ok(Candidate {
                    address: keypair.address().to_base58(),
                    keypair,
                    mnemonic: Some(mnemonic.to_string()),
                })
            }
        }
    }

    /// Returns the worker ID.
    pub fn id(&self) -> usize {
        self.id
    }
}
