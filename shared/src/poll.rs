//! Poll sequencing
//!
//! Notification polls are fire-and-forget fetches on a fixed interval, and
//! nothing cancels a superseded one. Without ordering, a slow earlier
//! response can land after a faster later one and overwrite fresher state.
//! `PollSequencer` tags each poll with a monotonic ticket and rejects any
//! commit that is not newer than the last applied one.

use std::sync::atomic::{AtomicU64, Ordering};

#[derive(Debug, Default)]
pub struct PollSequencer {
    issued: AtomicU64,
    applied: AtomicU64,
}

impl PollSequencer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take a ticket for a poll about to be issued
    pub fn issue(&self) -> u64 {
        self.issued.fetch_add(1, Ordering::Relaxed) + 1
    }

    /// Try to apply the result of poll `ticket`. Returns false if a newer
    /// poll already committed, in which case the result must be dropped.
    pub fn try_commit(&self, ticket: u64) -> bool {
        let mut current = self.applied.load(Ordering::Relaxed);
        loop {
            if ticket <= current {
                return false;
            }
            match self.applied.compare_exchange_weak(
                current,
                ticket,
                Ordering::Relaxed,
                Ordering::Relaxed,
            ) {
                Ok(_) => return true,
                Err(seen) => current = seen,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_order_commits() {
        let seq = PollSequencer::new();
        let a = seq.issue();
        let b = seq.issue();
        assert!(seq.try_commit(a));
        assert!(seq.try_commit(b));
    }

    #[test]
    fn test_stale_response_is_discarded() {
        let seq = PollSequencer::new();
        let slow = seq.issue();
        let fast = seq.issue();

        // The later poll resolves first
        assert!(seq.try_commit(fast));
        // The earlier one arrives late and must not overwrite
        assert!(!seq.try_commit(slow));
    }

    #[test]
    fn test_double_commit_rejected() {
        let seq = PollSequencer::new();
        let t = seq.issue();
        assert!(seq.try_commit(t));
        assert!(!seq.try_commit(t));
    }
}
