//! # CAPSULE Protocol
//!
//! **C**iphered **A**uthenticated **P**ayload **S**ingle-round **U**niform
//! **L**ightweight **E**xchange
//!
//! CAPSULE is a single-round encrypted message exchange. A client seals a
//! structured payload record into an authenticated-encryption envelope
//! (nonce + ciphertext); the server opens it, decodes the record, builds a
//! reply, and seals it under a fresh nonce. It provides:
//!
//! - **Authenticated encryption**: Deoxys-II-256 (32-byte key, 15-byte nonce,
//!   16-byte tag), tamper detection on every open
//! - **Fresh nonces**: every outgoing envelope uses a nonce drawn from the
//!   OS CSPRNG; nonce reuse under one key is the one unforgivable sin here
//! - **Fail-closed decoding**: payload bytes are untrusted even after the
//!   tag verifies; the CBOR codec rejects any structural mismatch
//! - **No sessions**: one request, one reply, no retained state
//!
//! ## Modules
//!
//! - [`core`]: Constants and error types
//! - [`codec`]: The CBOR payload record codec
//! - [`crypto`]: Key handling, AEAD engine, nonce policy, replay guard
//! - [`envelope`]: Envelope types and the exchange state machine
//! - [`client`]: Client-side seal/open helpers
//!
//! ## Example Usage
//!
//! ```rust
//! use capsule_protocol::prelude::*;
//!
//! let key = ExchangeKey::generate();
//!
//! // Server side: answer every request with a greeting.
//! let exchange = Exchange::new(
//!     Engine::new(key.clone()),
//!     |inbound: PayloadRecord| PayloadRecord {
//!         message: format!("hello, {}", inbound.sender),
//!         timestamp: inbound.timestamp,
//!         sender: "server".to_string(),
//!     },
//! );
//!
//! // Client side: seal a request, hand the envelope to the transport.
//! let client = ExchangeClient::new(Engine::new(key));
//! let request = client
//!     .seal_request(&PayloadRecord {
//!         message: "hi".to_string(),
//!         timestamp: 1_700_000_000,
//!         sender: "client-1".to_string(),
//!     })
//!     .unwrap();
//!
//! let reply = exchange.handle(&request).unwrap();
//! let record = client.open_reply(&reply).unwrap();
//! assert_eq!(record.sender, "server");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod client;
pub mod codec;
pub mod core;
pub mod crypto;
pub mod envelope;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::client::*;
    pub use crate::codec::*;
    pub use crate::core::*;
    pub use crate::crypto::*;
    pub use crate::envelope::*;
}

// Re-export commonly used items at crate root
pub use crate::client::ExchangeClient;
pub use crate::codec::PayloadRecord;
pub use crate::core::{CryptoError, DecodeError, ExchangeError, KeyError, NonceError};
pub use crate::crypto::{Engine, ExchangeKey, Nonce};
pub use crate::envelope::{Envelope, EnvelopeWire, Exchange, ExchangeHandler};
