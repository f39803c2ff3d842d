//! Solana keypair generation.

use ed25519_dalek::SigningKey;
use rand::RngCore;

use super::Address;

/// A Solana keypair (32-byte Ed25519 seed + derived address).
#[derive(Debug, Clone)]
pub struct Keypair {
    /// The private key seed bytes (32 bytes)
    seed: [u8; 32],
    /// The derived Ed25519 public key
    address: Address,
}

impl Keypair {
    /// Generates a new random keypair.
    ///
    /// Uses the thread-local cryptographically secure random number
    /// generator.
    #[inline]
    pub fn generate() -> Self {
        let mut seed = [0u8; 32];
        rand::thread_rng().fill_bytes(&mut seed);
        Self::from_seed(seed)
    }

    /// Builds a keypair from an existing 32-byte seed.
    ///
    /// Public key derivation is deterministic: the same seed always yields
    /// the same address.
    #[inline]
    pub fn from_seed(seed: [u8; 32]) -> Self {
        let signing_key = SigningKey::from_bytes(&seed);
        let address = Address::from_bytes(signing_key.verifying_key().to_bytes());

        Self { seed, address }
    }

    /// Returns the private key as a hex string.
    pub fn private_key_hex(&self) -> String {
        hex::encode(self.seed)
    }

    /// Returns the private key seed bytes.
    pub fn private_key_bytes(&self) -> &[u8; 32] {
        &self.seed
    }

    /// Returns the public key bytes.
    #[inline]
    pub fn public_key_bytes(&self) -> &[u8; 32] {
        self.address.as_bytes()
    }

    /// Returns a reference to the derived address.
    #[inline]
    pub fn address(&self) -> &Address {
        &self.address
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crypto::address::is_base58;

    #[test]
    fn test_keypair_generation() {
        let keypair = Keypair::generate();
        assert_eq!(keypair.private_key_bytes().len(), 32);
        assert!(is_base58(&keypair.address().to_base58()));
    }

    #[test]
    fn test_deterministic_public_key() {
        // RFC 8032 test vector 1
        let seed: [u8; 32] = hex::decode(
            "9d61b19deffd5a60ba844af492ec2cc44449c5697b326919703bac031cae7f60",
        )
        .unwrap()
        .try_into()
        .unwrap();

        let keypair = Keypair::from_seed(seed);
        assert_eq!(
            hex::encode(keypair.public_key_bytes()),
            "d75a980182b10ab7d54bfed3c964073a0ee172f3daa62325af021a68f707511a"
        );

        // Repeated derivation is byte-identical
        let again = Keypair::from_seed(seed);
        assert_eq!(keypair.public_key_bytes(), again.public_key_bytes());
        assert_eq!(keypair.address().to_base58(), again.address().to_base58());
    }

    #[test]
    fn test_hex_roundtrip() {
        let keypair = Keypair::generate();
        let decoded = hex::decode(keypair.private_key_hex()).unwrap();
        assert_eq!(decoded.as_slice(), keypair.private_key_bytes());
    }
}
