//! The exchange state machine.
//!
//! One request walks `Received -> NonceValidated -> Decrypted -> Decoded ->
//! Processed -> Encoded -> Encrypted -> Responded`. Every step either
//! advances or aborts the whole request; there is no retry and no partial
//! success, because past the AEAD boundary partial trust means nothing.

use crate::codec::PayloadRecord;
use crate::core::{CryptoError, ExchangeError};
use crate::crypto::{Engine, Nonce, ReplayGuard};

use super::{Envelope, EnvelopeWire};

/// Application hook producing the reply record.
///
/// This is the single extension point of the protocol: everything before
/// and after it is fixed by the envelope discipline.
pub trait ExchangeHandler: Send + Sync {
    /// Build the reply for a decoded inbound record.
    fn respond(&self, inbound: PayloadRecord) -> PayloadRecord;
}

impl<F> ExchangeHandler for F
where
    F: Fn(PayloadRecord) -> PayloadRecord + Send + Sync,
{
    fn respond(&self, inbound: PayloadRecord) -> PayloadRecord {
        self(inbound)
    }
}

/// Server side of a single-round exchange.
///
/// Owns the AEAD engine and the handler; shared immutably across
/// concurrent requests (wrap in an `Arc` for multi-threaded transports).
pub struct Exchange<H> {
    engine: Engine,
    handler: H,
    replay_guard: Option<ReplayGuard>,
}

impl<H: ExchangeHandler> Exchange<H> {
    /// Create an exchange from an engine and a handler.
    ///
    /// Replay protection is off by default; envelopes are accepted solely
    /// on their authentication tag.
    pub fn new(engine: Engine, handler: H) -> Self {
        Self {
            engine,
            handler,
            replay_guard: None,
        }
    }

    /// Enable the seen-nonce replay guard.
    pub fn with_replay_guard(mut self, guard: ReplayGuard) -> Self {
        self.replay_guard = Some(guard);
        self
    }

    /// Run one full exchange over raw envelopes.
    ///
    /// Open -> decode -> respond -> encode -> seal under a fresh nonce.
    /// The reply nonce is always newly generated; the request nonce is
    /// discarded after the open.
    pub fn handle(&self, request: &Envelope) -> Result<Envelope, ExchangeError> {
        // Seen nonces are rejected before any cryptographic work, but only
        // recorded once the tag verifies: a forgery must not be able to
        // burn a nonce the legitimate peer has yet to use.
        if let Some(guard) = &self.replay_guard {
            if guard.is_replay(&request.nonce) {
                return Err(CryptoError::ReplayDetected.into());
            }
        }

        let plaintext = self.engine.open(&request.nonce, &request.ciphertext, &[])?;

        if let Some(guard) = &self.replay_guard {
            guard.check_and_record(&request.nonce)?;
        }

        let inbound = PayloadRecord::decode(&plaintext)?;

        let reply = self.handler.respond(inbound);

        let nonce = Nonce::generate();
        let ciphertext = self.engine.seal(&nonce, &reply.encode(), &[])?;

        Ok(Envelope { nonce, ciphertext })
    }

    /// Run one full exchange over wire-form envelopes.
    ///
    /// Adds the base64/nonce-length validation in front of [`handle`]
    /// for transports that pass the JSON fields through untouched.
    ///
    /// [`handle`]: Exchange::handle
    pub fn handle_wire(&self, request: &EnvelopeWire) -> Result<EnvelopeWire, ExchangeError> {
        let envelope = Envelope::from_wire(request)?;
        Ok(self.handle(&envelope)?.to_wire())
    }
}
