//! Mutual exclusion for in-flight transitions.
//!
//! The lock serializes rotations without blocking: while held, every new
//! rotation request is rejected outright, and release is unconditional and
//! time-based (the shell fires an unlock event after
//! [`LOCK_DURATION`](crate::constants::LOCK_DURATION); no "animation
//! finished" signal is awaited).

/// Idle/Locked state machine guarding the carousel's single transition slot.
///
/// Each acquisition mints a new generation. An unlock event carries the
/// generation it was scheduled for, so an unlock that outlived its lock
/// (for example across a deck reset) is recognized as stale and ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TransitionLock {
    locked: bool,
    generation: u64,
}

impl TransitionLock {
    /// Whether a transition is currently in flight.
    pub fn is_locked(&self) -> bool {
        self.locked
    }

    /// Generation of the most recent acquisition.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Take the lock, returning the generation its unlock must carry.
    ///
    /// Callers check [`is_locked`](Self::is_locked) first; acquiring an
    /// already-held lock would orphan the pending unlock.
    pub fn acquire(&mut self) -> u64 {
        debug_assert!(!self.locked, "acquired a held transition lock");
        self.generation += 1;
        self.locked = true;
        self.generation
    }

    /// Release the lock for `generation`.
    ///
    /// Returns `true` only when the lock was held and the generation
    /// matches; stale or idle releases are no-ops.
    pub fn release(&mut self, generation: u64) -> bool {
        if self.locked && generation == self.generation {
            self.locked = false;
            true
        } else {
            false
        }
    }

    /// Force-idle the lock and invalidate any pending release.
    ///
    /// Used when the deck empties: the state it guarded is gone, and the
    /// unlock timer that may still fire must land as stale.
    pub fn revoke(&mut self) {
        self.locked = false;
        self.generation += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn acquire_then_release_round_trip() {
        let mut lock = TransitionLock::default();
        assert!(!lock.is_locked());
        let generation = lock.acquire();
        assert!(lock.is_locked());
        assert!(lock.release(generation));
        assert!(!lock.is_locked());
    }

    #[test]
    fn release_when_idle_is_a_noop() {
        let mut lock = TransitionLock::default();
        assert!(!lock.release(0));
        assert!(!lock.release(1));
        assert!(!lock.is_locked());
    }

    #[test]
    fn stale_generation_is_ignored() {
        let mut lock = TransitionLock::default();
        let first = lock.acquire();
        assert!(lock.release(first));
        let second = lock.acquire();
        assert!(!lock.release(first));
        assert!(lock.is_locked());
        assert!(lock.release(second));
    }

    #[test]
    fn revoke_invalidates_pending_release() {
        let mut lock = TransitionLock::default();
        let generation = lock.acquire();
        lock.revoke();
        assert!(!lock.is_locked());
        // The timer scheduled for the revoked lock eventually fires.
        assert!(!lock.release(generation));
        // A fresh acquisition is unaffected by the stale release.
        let fresh = lock.acquire();
        assert_ne!(fresh, generation);
        assert!(lock.is_locked());
    }
}
