//! Envelope types.
//!
//! Raw form for the core, base64-in-JSON form for the transport. The wire
//! shape matches the peers on the other side:
//! ```json
//! { "ciphertext": "<base64>", "nonce": "<base64>" }
//! ```

use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use serde::{Deserialize, Serialize};

use crate::core::EnvelopeError;
use crate::crypto::Nonce;

/// A sealed envelope: one nonce, one ciphertext.
///
/// The ciphertext is opaque AEAD output (plaintext + tag); the envelope
/// itself carries no invariants beyond its fields being well-formed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Envelope {
    /// The nonce this ciphertext was sealed under.
    pub nonce: Nonce,
    /// AEAD ciphertext with appended tag.
    pub ciphertext: Vec<u8>,
}

impl Envelope {
    /// Convert to the base64 wire form.
    pub fn to_wire(&self) -> EnvelopeWire {
        EnvelopeWire {
            ciphertext: BASE64.encode(&self.ciphertext),
            nonce: BASE64.encode(self.nonce.as_bytes()),
        }
    }

    /// Parse from the wire form, validating base64 and nonce length.
    ///
    /// This is the whole of the `Received -> NonceValidated` step: after it
    /// succeeds the core only ever sees well-formed byte buffers.
    pub fn from_wire(wire: &EnvelopeWire) -> Result<Self, EnvelopeError> {
        let nonce_bytes = BASE64
            .decode(&wire.nonce)
            .map_err(|_| EnvelopeError::InvalidBase64("nonce"))?;
        let nonce = Nonce::validate(&nonce_bytes)?;

        let ciphertext = BASE64
            .decode(&wire.ciphertext)
            .map_err(|_| EnvelopeError::InvalidBase64("ciphertext"))?;

        Ok(Self { nonce, ciphertext })
    }
}

/// Transport-encoded envelope, as carried in the request/response JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnvelopeWire {
    /// Base64-encoded ciphertext.
    pub ciphertext: String,
    /// Base64-encoded nonce.
    pub nonce: String,
}
