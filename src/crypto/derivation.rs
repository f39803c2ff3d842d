//! Mnemonic-based hierarchical key derivation.
//!
//! Keys are derived along the fixed hardened Solana path `m/44'/501'/0'/0'`:
//! BIP-39 seed, HMAC-SHA512 master key, then one hardened child step per
//! path component. If the primary path fails for any reason, the private
//! key falls back to the SHA-256 digest of the mnemonic phrase text. The
//! fallback is not path-compatible with the primary derivation; it is kept
//! because it is observable behavior, and [`DerivedKey`] records which path
//! produced the key.

use bip39::{Language, Mnemonic};
use hmac::{Hmac, Mac};
use rand::RngCore;
use sha2::{Digest, Sha256, Sha512};

type HmacSha512 = Hmac<Sha512>;

/// Domain-separation key for the master-key MAC.
const MASTER_KEY: &[u8] = b"ed25519 seed";

/// The fixed derivation path `m/44'/501'/0'/0'` (501 = Solana coin type).
/// All components are hardened; the offset is applied during derivation.
pub const DERIVATION_PATH: [u32; 4] = [44, 501, 0, 0];

/// Hardened-index offset (2^31).
const HARDENED_OFFSET: u32 = 1 << 31;

/// A private key produced by [`derive_from_mnemonic`], tagged with the
/// derivation path that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DerivedKey {
    /// Derived along the hardened path from the BIP-39 seed.
    Primary([u8; 32]),
    /// SHA-256 of the phrase text; used only when the primary path errors.
    Fallback([u8; 32]),
}

impl DerivedKey {
    /// Returns the 32-byte private key regardless of provenance.
    #[inline]
    pub fn into_bytes(self) -> [u8; 32] {
        match self {
            DerivedKey::Primary(key) | DerivedKey::Fallback(key) => key,
        }
    }

    /// Returns true if the key came from the fallback path.
    pub fn is_fallback(&self) -> bool {
        matches!(self, DerivedKey::Fallback(_))
    }
}

/// Errors from the primary derivation path.
#[derive(Debug, thiserror::Error)]
pub enum DerivationError {
    #[error("mnemonic error: {0}")]
    Mnemonic(#[from] bip39::Error),
    #[error("MAC key error: {0}")]
    MacKey(#[from] hmac::digest::InvalidLength),
}

/// Generates a fresh 12-word English mnemonic (128 bits of entropy) from
/// the thread-local secure random source.
pub fn generate_mnemonic() -> Result<Mnemonic, DerivationError> {
    let mut entropy = [0u8; 16];
    rand::thread_rng().fill_bytes(&mut entropy);
    Ok(Mnemonic::from_entropy_in(Language::English, &entropy)?)
}

/// Derives the 64-byte BIP-39 seed from a mnemonic (empty passphrase).
pub fn mnemonic_to_seed(mnemonic: &Mnemonic) -> [u8; 64] {
    mnemonic.to_seed_normalized("")
}

/// Walks the fixed hardened path from a 64-byte seed to the signing key.
pub fn derive_path_key(seed: &[u8; 64]) -> Result<[u8; 32], DerivationError> {
    let master = hmac_sha512(MASTER_KEY, seed)?;

    let mut key = [0u8; 32];
    key.copy_from_slice(&master[..32]);
    let mut chain_code = [0u8; 32];
    chain_code.copy_from_slice(&master[32..]);

    for component in DERIVATION_PATH {
        let index = component + HARDENED_OFFSET;

        // 0x00 || parent key || big-endian hardened index
        let mut data = [0u8; 37];
        data[1..33].copy_from_slice(&key);
        data[33..].copy_from_slice(&index.to_be_bytes());

        let digest = hmac_sha512(&chain_code, &data)?;
        key.copy_from_slice(&digest[..32]);
        chain_code.copy_from_slice(&digest[32..]);
    }

    Ok(key)
}

/// Derives a private key from a mnemonic, falling back to the phrase-hash
/// key if the primary path errors.
pub fn derive_from_mnemonic(mnemonic: &Mnemonic) -> DerivedKey {
    let seed = mnemonic_to_seed(mnemonic);
    match derive_path_key(&seed) {
        Ok(key) => DerivedKey::Primary(key),
        Err(_) => DerivedKey::Fallback(fallback_key(&mnemonic.to_string())),
    }
}

/// The fallback key: SHA-256 of the phrase text.
fn fallback_key(phrase: &str) -> [u8; 32] {
    Sha256::digest(phrase.as_bytes()).into()
}

fn hmac_sha512(key: &[u8], data: &[u8]) -> Result<[u8; 64], DerivationError> {
    let mut mac = HmacSha512::new_from_slice(key)?;
    mac.update(data);

    let mut out = [0u8; 64];
    out.copy_from_slice(&mac.finalize().into_bytes());
    Ok(out)
}
