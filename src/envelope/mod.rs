//! CAPSULE Protocol - Envelope Layer
//!
//! The transport-visible envelope (nonce + ciphertext), its base64 wire
//! form, and the exchange state machine that turns an incoming envelope
//! into an outgoing one.

mod exchange;
mod wire;

pub use exchange::*;
pub use wire::*;
