//! Generation counter used to drop results of superseded fetch cycles.

use std::sync::atomic::{AtomicU64, Ordering};

/// Identifies one fetch cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Ticket(u64);

/// Hands out increasing tickets; only the most recent one is current.
#[derive(Debug, Default)]
pub struct FetchGeneration(AtomicU64);

impl FetchGeneration {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new cycle, superseding every earlier ticket.
    pub fn begin(&self) -> Ticket {
        Ticket(self.0.fetch_add(1, Ordering::SeqCst) + 1)
    }

    pub fn is_current(&self, ticket: Ticket) -> bool {
        self.0.load(Ordering::SeqCst) == ticket.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latest_ticket_wins() {
        let generation = FetchGeneration::new();
        let first = generation.begin();
        assert!(generation.is_current(first));

        let second = generation.begin();
        assert!(second > first);
        assert!(!generation.is_current(first));
        assert!(generation.is_current(second));
    }
}
