//! Solana address representation and utilities.

use std::fmt;

/// The Base58 alphabet used by Solana addresses (Bitcoin variant, no `0OIl`).
pub const BASE58_ALPHABET: &str =
    "123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";

/// A Solana address: the 32-byte Ed25519 public key.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Address([u8; 32]);

impl Address {
    /// Creates an address from a raw public key.
    #[inline]
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Returns the public key bytes.
    #[inline]
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Returns the Base58 encoding of the public key.
    ///
    /// This is the textual form addresses are matched and displayed in.
    #[inline]
    pub fn to_base58(&self) -> String {
        bs58::encode(self.0).into_string()
    }
}

/// Returns true iff every character of `text` is a valid Base58 symbol.
pub fn is_base58(text: &str) -> bool {
    text.chars().all(|c| BASE58_ALPHABET.contains(c))
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Address({})", self.to_base58())
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_base58())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_key_encoding() {
        // 32 zero bytes encode to 32 leading-zero symbols
        let addr = Address::from_bytes([0u8; 32]);
        assert_eq!(addr.to_base58(), "1".repeat(32));
    }

    #[test]
    fn test_alphabet_membership() {
        let addr = Address::from_bytes([0xAB; 32]);
        let encoded = addr.to_base58();
        assert!(!encoded.is_empty());
        assert!(is_base58(&encoded));
    }

    #[test]
    fn test_base58_roundtrip() {
        let bytes = [7u8; 32];
        let encoded = Address::from_bytes(bytes).to_base58();
        let decoded = bs58::decode(&encoded).into_vec().unwrap();
        assert_eq!(decoded, bytes);
    }

    #[test]
    fn test_is_base58_rejects_ambiguous() {
        assert!(is_base58("Sol"));
        assert!(!is_base58("0OIl"));
        assert!(!is_base58("Sol!"));
    }
}
