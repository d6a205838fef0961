//! CAPSULE Protocol - Client Library
//!
//! The client half of an exchange: seal a request record, open the reply.
//! Pure byte-level operations; the HTTP round trip lives with the
//! transport (see the exchange demo).

use crate::codec::PayloadRecord;
use crate::core::ExchangeError;
use crate::crypto::{Engine, Nonce};
use crate::envelope::{Envelope, EnvelopeWire};

/// Client-side sealing and opening under the shared exchange key.
pub struct ExchangeClient {
    engine: Engine,
}

impl ExchangeClient {
    /// Create a client from an AEAD engine.
    pub fn new(engine: Engine) -> Self {
        Self { engine }
    }

    /// Seal a request record into an envelope under a fresh nonce.
    pub fn seal_request(&self, record: &PayloadRecord) -> Result<Envelope, ExchangeError> {
        let nonce = Nonce::generate();
        let ciphertext = self.engine.seal(&nonce, &record.encode(), &[])?;
        Ok(Envelope { nonce, ciphertext })
    }

    /// Seal a request record directly into wire form.
    pub fn seal_request_wire(&self, record: &PayloadRecord) -> Result<EnvelopeWire, ExchangeError> {
        Ok(self.seal_request(record)?.to_wire())
    }

    /// Open a reply envelope and decode the record inside.
    pub fn open_reply(&self, reply: &Envelope) -> Result<PayloadRecord, ExchangeError> {
        let plaintext = self.engine.open(&reply.nonce, &reply.ciphertext, &[])?;
        Ok(PayloadRecord::decode(&plaintext)?)
    }

    /// Open a wire-form reply.
    pub fn open_reply_wire(&self, reply: &EnvelopeWire) -> Result<PayloadRecord, ExchangeError> {
        self.open_reply(&Envelope::from_wire(reply)?)
    }
}
