//! Nonce policy.
//!
//! Two directions, two rules:
//! - Incoming nonces are validated for length only; the AEAD tag check
//!   does the rest.
//! - Outgoing nonces are always drawn fresh from the OS CSPRNG. A repeated
//!   nonce under the same key breaks both confidentiality and authenticity
//!   of Deoxys-II, so every sealing path in this crate goes through
//!   [`Nonce::generate`]; nothing derives a nonce from a counter or a
//!   fixed value.

use rand::{rngs::OsRng, RngCore};

use crate::core::{NonceError, NONCE_SIZE};

/// A 15-byte Deoxys-II nonce.
///
/// Bound to exactly one seal operation. The only constructors are
/// [`Nonce::generate`] (outgoing) and [`Nonce::validate`] /
/// [`Nonce::from_bytes`] (incoming); there is no `Default`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Nonce([u8; NONCE_SIZE]);

impl Nonce {
    /// Generate a fresh random nonce for an outgoing envelope.
    ///
    /// Unique with overwhelming probability: 120 bits of CSPRNG output
    /// per message.
    pub fn generate() -> Self {
        let mut bytes = [0u8; NONCE_SIZE];
        OsRng.fill_bytes(&mut bytes);
        Self(bytes)
    }

    /// Validate an incoming nonce, rejecting any length but 15 bytes.
    pub fn validate(bytes: &[u8]) -> Result<Self, NonceError> {
        let bytes: [u8; NONCE_SIZE] = bytes.try_into().map_err(|_| NonceError::InvalidLength {
            expected: NONCE_SIZE,
            actual: bytes.len(),
        })?;
        Ok(Self(bytes))
    }

    /// Create a nonce from an exact-size array.
    pub fn from_bytes(bytes: [u8; NONCE_SIZE]) -> Self {
        Self(bytes)
    }

    /// Get the raw bytes.
    pub fn as_bytes(&self) -> &[u8; NONCE_SIZE] {
        &self.0
    }
}

impl AsRef<[u8]> for Nonce {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_validate_exact_length() {
        let nonce = Nonce::validate(&[0x07; NONCE_SIZE]).unwrap();
        assert_eq!(nonce.as_bytes(), &[0x07; NONCE_SIZE]);
    }

    #[test]
    fn test_validate_wrong_length() {
        for len in [0, 12, 14, 16, 24] {
            let result = Nonce::validate(&vec![0u8; len]);
            assert!(matches!(
                result,
                Err(NonceError::InvalidLength { expected: 15, actual }) if actual == len
            ));
        }
    }

    #[test]
    fn test_generate_no_duplicates() {
        // Probabilistic uniqueness: 10,000 draws of 120 random bits must
        // not collide.
        let mut seen = HashSet::new();
        for _ in 0..10_000 {
            assert!(seen.insert(*Nonce::generate().as_bytes()));
        }
    }

    #[test]
    fn test_from_bytes_roundtrip() {
        let bytes = [0x11; NONCE_SIZE];
        let nonce = Nonce::from_bytes(bytes);
        assert_eq!(Nonce::validate(nonce.as_ref()).unwrap(), nonce);
    }
}
