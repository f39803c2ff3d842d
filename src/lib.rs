//! # sol_vanity
//!
//! High-performance Solana vanity address generator.
//!
//! ## Architecture
//!
//! - `crypto`: Ed25519 key generation, Base58 addresses, mnemonic derivation
//! - `matcher`: Case-sensitive prefix/suffix matching and the difficulty model
//! - `worker`: Parallel execution and search coordination
//! - `progress`: Attempt/ETA estimation
//! - `recorder`: Append-only result file
//! - `config`: Runtime configuration

pub mod config;
pub mod crypto;
pub mod matcher;
pub mod progress;
pub mod recorder;
pub mod worker;

pub use config::{Config, GenerationMode};
pub use crypto::{Address, Keypair};
pub use matcher::{MatchResult, Pattern};
pub use progress::{Estimator, ProgressReport};
pub use recorder::Recorder;
pub use worker::{StateSnapshot, VanityResult, WorkerPool};
