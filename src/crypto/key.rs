//! Exchange key handling.
//!
//! One static pre-shared key protects every envelope; there is no key
//! exchange or rotation in this protocol.

use std::fmt;

use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use rand::{rngs::OsRng, RngCore};
use zeroize::Zeroize;

use crate::core::{KeyError, KEY_SIZE};

/// The pre-shared symmetric key for the exchange.
///
/// Immutable after construction and safe to share read-only across any
/// number of concurrent request handlers. Zeroized on drop.
#[derive(Clone)]
pub struct ExchangeKey {
    key: [u8; KEY_SIZE],
}

impl ExchangeKey {
    /// Create a key from raw bytes, rejecting anything but exactly 32 bytes.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, KeyError> {
        let key = bytes
            .try_into()
            .map_err(|_| KeyError::InvalidLength {
                expected: KEY_SIZE,
                actual: bytes.len(),
            })?;
        Ok(Self { key })
    }

    /// Parse a key from base64, the form it takes in configuration.
    pub fn from_base64(encoded: &str) -> Result<Self, KeyError> {
        let mut bytes = BASE64
            .decode(encoded.trim())
            .map_err(|_| KeyError::InvalidEncoding)?;
        let result = Self::from_bytes(&bytes);
        bytes.zeroize();
        result
    }

    /// Generate a fresh random key.
    pub fn generate() -> Self {
        let mut key = [0u8; KEY_SIZE];
        OsRng.fill_bytes(&mut key);
        Self { key }
    }

    /// Get the raw key bytes.
    ///
    /// # Security
    /// Handle with care - this exposes sensitive key material.
    pub fn as_bytes(&self) -> &[u8; KEY_SIZE] {
        &self.key
    }
}

impl Drop for ExchangeKey {
    fn drop(&mut self) {
        self.key.zeroize();
    }
}

// Key material must never leak through Debug output or logs.
impl fmt::Debug for ExchangeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ExchangeKey(..)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_bytes_exact_length() {
        let key = ExchangeKey::from_bytes(&[0x42; KEY_SIZE]).unwrap();
        assert_eq!(key.as_bytes(), &[0x42; KEY_SIZE]);
    }

    #[test]
    fn test_from_bytes_wrong_length() {
        for len in [0, 16, 31, 33, 64] {
            let result = ExchangeKey::from_bytes(&vec![0u8; len]);
            assert!(matches!(
                result,
                Err(KeyError::InvalidLength { expected: 32, actual }) if actual == len
            ));
        }
    }

    #[test]
    fn test_from_base64_roundtrip() {
        use base64::{engine::general_purpose::STANDARD, Engine as _};

        let original = ExchangeKey::generate();
        let encoded = STANDARD.encode(original.as_bytes());

        let parsed = ExchangeKey::from_base64(&encoded).unwrap();
        assert_eq!(parsed.as_bytes(), original.as_bytes());
    }

    #[test]
    fn test_from_base64_garbage() {
        let result = ExchangeKey::from_base64("not base64 at all!!!");
        assert!(matches!(result, Err(KeyError::InvalidEncoding)));
    }

    #[test]
    fn test_from_base64_wrong_decoded_length() {
        use base64::{engine::general_purpose::STANDARD, Engine as _};

        let encoded = STANDARD.encode([0u8; 16]);
        let result = ExchangeKey::from_base64(&encoded);
        assert!(matches!(result, Err(KeyError::InvalidLength { .. })));
    }

    #[test]
    fn test_generate_distinct() {
        let k1 = ExchangeKey::generate();
        let k2 = ExchangeKey::generate();
        assert_ne!(k1.as_bytes(), k2.as_bytes());
    }

    #[test]
    fn test_debug_redacts_key() {
        let key = ExchangeKey::from_bytes(&[0xAB; KEY_SIZE]).unwrap();
        let debug = format!("{key:?}");
        assert_eq!(debug, "ExchangeKey(..)");
        assert!(!debug.contains("ab"));
    }
}
