//! Seen-nonce replay guard.
//!
//! Counter-based protocols can use a sliding bitmap window; CAPSULE nonces
//! are random, so the guard is a capacity-bounded FIFO set instead. Oldest
//! entries are evicted first, which bounds memory at the cost of a finite
//! lookback window. Scoped per exchange, and therefore per key.

use std::collections::{HashSet, VecDeque};
use std::sync::Mutex;

use crate::core::{CryptoError, NONCE_SIZE, REPLAY_GUARD_CAPACITY};

use super::Nonce;

/// Bounded set of recently seen incoming nonces.
///
/// Interior mutability behind a `Mutex`: concurrent request handlers race
/// to record nonces, and exactly one of two racing duplicates must win.
pub struct ReplayGuard {
    inner: Mutex<GuardInner>,
    capacity: usize,
}

struct GuardInner {
    seen: HashSet<[u8; NONCE_SIZE]>,
    order: VecDeque<[u8; NONCE_SIZE]>,
}

impl ReplayGuard {
    /// Create a guard with the default capacity.
    pub fn new() -> Self {
        Self::with_capacity(REPLAY_GUARD_CAPACITY)
    }

    /// Create a guard remembering at most `capacity` nonces.
    pub fn with_capacity(capacity: usize) -> Self {
        assert!(capacity > 0, "replay guard capacity must be non-zero");
        Self {
            inner: Mutex::new(GuardInner {
                seen: HashSet::with_capacity(capacity),
                order: VecDeque::with_capacity(capacity),
            }),
            capacity,
        }
    }

    /// Check whether a nonce has been seen, without recording it.
    ///
    /// Runs before AEAD verification, so a replayed envelope costs no
    /// cryptographic work. Recording is deferred to [`check_and_record`]
    /// after the tag verifies: an unauthenticated forgery must not be able
    /// to poison the guard with a nonce the legitimate peer has yet to use,
    /// or flush real entries out of the window.
    ///
    /// [`check_and_record`]: ReplayGuard::check_and_record
    pub fn is_replay(&self, nonce: &Nonce) -> bool {
        let inner = self.inner.lock().unwrap_or_else(|e| e.into_inner());
        inner.seen.contains(nonce.as_bytes())
    }

    /// Record a nonce, rejecting it if it was already seen.
    ///
    /// Called only after the envelope authenticated. The insert re-checks
    /// under the lock, so of two racing duplicates exactly one wins even
    /// when both passed [`is_replay`].
    ///
    /// [`is_replay`]: ReplayGuard::is_replay
    pub fn check_and_record(&self, nonce: &Nonce) -> Result<(), CryptoError> {
        let mut inner = self.inner.lock().unwrap_or_else(|e| e.into_inner());

        if !inner.seen.insert(*nonce.as_bytes()) {
            return Err(CryptoError::ReplayDetected);
        }
        inner.order.push_back(*nonce.as_bytes());

        while inner.order.len() > self.capacity {
            if let Some(oldest) = inner.order.pop_front() {
                inner.seen.remove(&oldest);
            }
        }
        Ok(())
    }
}

impl Default for ReplayGuard {
    fn default() -> Self {
        Self::new()
    }
}
