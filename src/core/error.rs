//! Error types for the CAPSULE protocol.

use thiserror::Error;

/// Errors constructing an exchange key.
///
/// A key error is a configuration defect: it is raised once at startup and
/// must abort initialization, never be handled per request.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum KeyError {
    /// Key material has the wrong length.
    #[error("invalid key length: expected {expected} bytes, got {actual}")]
    InvalidLength {
        /// Required key size in bytes.
        expected: usize,
        /// Actual length of the provided material.
        actual: usize,
    },

    /// Key material is not valid base64.
    #[error("invalid base64 key encoding")]
    InvalidEncoding,
}

/// Errors validating a nonce.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum NonceError {
    /// Nonce has the wrong length.
    #[error("invalid nonce length: expected {expected} bytes, got {actual}")]
    InvalidLength {
        /// Required nonce size in bytes.
        expected: usize,
        /// Actual length of the provided bytes.
        actual: usize,
    },
}

/// Errors in the crypto layer.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CryptoError {
    /// AEAD sealing failed.
    #[error("AEAD sealing failed")]
    SealFailed,

    /// AEAD authentication failed (tampered, wrong key, or corrupted).
    #[error("AEAD authentication failed (tampered, wrong key, or corrupted)")]
    AuthenticationFailed,

    /// Incoming nonce was already seen under this key.
    #[error("replay detected")]
    ReplayDetected,
}

/// Errors decoding a payload record.
///
/// The bytes reaching the codec are attacker-controlled even after the
/// authentication tag verifies, so every structural mismatch is an error,
/// never a default.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// Payload is not a well-formed encoding of the record schema.
    #[error("malformed payload: {0}")]
    Malformed(String),
}

/// Errors parsing a wire envelope.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EnvelopeError {
    /// A wire field is not valid base64.
    #[error("invalid base64 in {0}")]
    InvalidBase64(&'static str),

    /// Nonce error.
    #[error("nonce error: {0}")]
    Nonce(#[from] NonceError),
}

/// Rough response class for a failed exchange.
///
/// The demo transport maps these onto HTTP statuses; other transports are
/// free to map them however fits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusHint {
    /// The request was malformed (framing, nonce, or payload).
    BadRequest,
    /// Authentication failed.
    Unauthorized,
    /// The failure was on our side.
    Internal,
}

/// Top-level exchange errors.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ExchangeError {
    /// Envelope error.
    #[error("envelope error: {0}")]
    Envelope(#[from] EnvelopeError),

    /// Crypto error.
    #[error("crypto error: {0}")]
    Crypto(#[from] CryptoError),

    /// Decode error.
    #[error("decode error: {0}")]
    Decode(#[from] DecodeError),
}

impl ExchangeError {
    /// Client-facing rejection message.
    ///
    /// Deliberately coarser than the internal error: the peer cannot tell
    /// tamper-detection apart from a wrong key, and a replayed nonce reads
    /// the same as a malformed one. The full kind stays available here for
    /// logging and tests.
    pub fn client_message(&self) -> &'static str {
        match self {
            ExchangeError::Envelope(EnvelopeError::InvalidBase64(_)) => "invalid envelope",
            ExchangeError::Envelope(EnvelopeError::Nonce(_)) => "invalid nonce",
            ExchangeError::Crypto(CryptoError::ReplayDetected) => "invalid nonce",
            ExchangeError::Crypto(CryptoError::AuthenticationFailed) => "decryption failed",
            ExchangeError::Crypto(CryptoError::SealFailed) => "internal error",
            ExchangeError::Decode(_) => "malformed payload",
        }
    }

    /// Response class for this error.
    pub fn status_hint(&self) -> StatusHint {
        match self {
            ExchangeError::Envelope(_) => StatusHint::BadRequest,
            ExchangeError::Crypto(CryptoError::ReplayDetected) => StatusHint::BadRequest,
            ExchangeError::Crypto(CryptoError::AuthenticationFailed) => StatusHint::Unauthorized,
            ExchangeError::Crypto(CryptoError::SealFailed) => StatusHint::Internal,
            ExchangeError::Decode(_) => StatusHint::BadRequest,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_failure_is_unauthorized() {
        let err = ExchangeError::from(CryptoError::AuthenticationFailed);
        assert_eq!(err.client_message(), "decryption failed");
        assert_eq!(err.status_hint(), StatusHint::Unauthorized);
    }

    #[test]
    fn test_replay_reads_like_bad_nonce() {
        let err = ExchangeError::from(CryptoError::ReplayDetected);
        assert_eq!(err.client_message(), "invalid nonce");
        assert_eq!(err.status_hint(), StatusHint::BadRequest);
    }

    #[test]
    fn test_seal_failure_is_internal() {
        let err = ExchangeError::from(CryptoError::SealFailed);
        assert_eq!(err.status_hint(), StatusHint::Internal);
    }

    #[test]
    fn test_nonce_error_message() {
        let err = NonceError::InvalidLength {
            expected: 15,
            actual: 12,
        };
        assert_eq!(
            err.to_string(),
            "invalid nonce length: expected 15 bytes, got 12"
        );
    }
}
