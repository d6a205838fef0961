//! Protocol constants.
//!
//! These values are fixed by the Deoxys-II-256 construction and by the
//! peers on the other side of the wire; they MUST NOT be changed.

// =============================================================================
// CRYPTOGRAPHIC CONSTANTS
// =============================================================================

/// Deoxys-II-256 key size.
pub const KEY_SIZE: usize = 32;

/// Deoxys-II nonce size.
pub const NONCE_SIZE: usize = 15;

/// Deoxys-II authentication tag size.
pub const TAG_SIZE: usize = 16;

// =============================================================================
// REPLAY GUARD
// =============================================================================

/// Default capacity of the seen-nonce replay guard.
///
/// Oldest entries are evicted first once the guard is full, so this bounds
/// both memory use and the lookback window for replay rejection.
pub const REPLAY_GUARD_CAPACITY: usize = 4096;
