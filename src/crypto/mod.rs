//! Cryptographic operations for Solana key and address generation.
//!
//! This module provides:
//! - Secure random Ed25519 key generation
//! - Base58 address derivation from the public key
//! - Mnemonic generation and hardened hierarchical derivation

mod address;
pub mod derivation;
mod keypair;

pub use address::{is_base58, Address, BASE58_ALPHABET};
pub use derivation::{derive_from_mnemonic, generate_mnemonic, DerivationError, DerivedKey};
pub use keypair::Keypair;
