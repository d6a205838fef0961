//! CAPSULE Protocol - Crypto Layer
//!
//! Implements the cryptographic side of the exchange:
//! - Deoxys-II-256 AEAD seal/open
//! - Key handling with `Zeroize`
//! - Nonce generation and validation
//! - Optional seen-nonce replay guard

mod aead;
mod key;
mod nonce;
mod replay;

pub use aead::*;
pub use key::*;
pub use nonce::*;
pub use replay::*;
