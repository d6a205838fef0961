//! Deoxys-II-256 AEAD seal and open.
//!
//! Key size 32, nonce size 15, tag size 16. Both directions support
//! associated data; this protocol always passes an empty AAD, but the
//! parameter is part of the contract and tests cover it.

use deoxys::{
    aead::{Aead, KeyInit, Payload},
    DeoxysII256,
};

use crate::core::{CryptoError, TAG_SIZE};

use super::{ExchangeKey, Nonce};

/// The AEAD engine wrapping the pre-shared exchange key.
///
/// Stateless apart from the key, and therefore `Send + Sync`; one engine
/// serves any number of concurrent requests.
#[derive(Clone)]
pub struct Engine {
    key: ExchangeKey,
}

impl Engine {
    /// Create an engine from an exchange key.
    ///
    /// Infallible: the key length invariant is enforced by
    /// [`ExchangeKey::from_bytes`], the only way to obtain a key.
    pub fn new(key: ExchangeKey) -> Self {
        Self { key }
    }

    /// Seal plaintext under the given nonce.
    ///
    /// Deterministic for identical inputs; freshness comes entirely from
    /// nonce uniqueness. Returns ciphertext with the 16-byte tag appended.
    pub fn seal(
        &self,
        nonce: &Nonce,
        plaintext: &[u8],
        aad: &[u8],
    ) -> Result<Vec<u8>, CryptoError> {
        let cipher = DeoxysII256::new(self.key.as_bytes().into());

        cipher
            .encrypt(
                nonce.as_bytes().into(),
                Payload {
                    msg: plaintext,
                    aad,
                },
            )
            .map_err(|_| CryptoError::SealFailed)
    }

    /// Open ciphertext sealed under the given nonce.
    ///
    /// Fails with [`CryptoError::AuthenticationFailed`] if the tag does not
    /// verify under (key, nonce, aad) - tampering, wrong key, wrong nonce,
    /// and truncation all land here. Tag comparison is constant-time inside
    /// the Deoxys implementation.
    pub fn open(
        &self,
        nonce: &Nonce,
        ciphertext: &[u8],
        aad: &[u8],
    ) -> Result<Vec<u8>, CryptoError> {
        if ciphertext.len() < TAG_SIZE {
            return Err(CryptoError::AuthenticationFailed);
        }

        let cipher = DeoxysII256::new(self.key.as_bytes().into());

        cipher
            .decrypt(
                nonce.as_bytes().into(),
                Payload {
                    msg: ciphertext,
                    aad,
                },
            )
            .map_err(|_| CryptoError::AuthenticationFailed)
    }
}
