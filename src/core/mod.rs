//! CAPSULE Protocol - Core Layer
//!
//! Constants and error types shared by every other module.

mod constants;
mod error;

pub use constants::*;
pub use error::*;
