//! Ordering of overlapping fetches.
//!
//! Every selection change starts a new fetch without aborting the previous
//! one. Each fetch takes a [`Ticket`]; only the holder of the newest ticket
//! may publish its result.

/// Sequence number handed to one fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Ticket(u64);

impl Ticket {
    pub fn get(&self) -> u64 {
        self.0
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestSequencer {
    latest: u64,
}

impl RequestSequencer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue a ticket for a new request, superseding all earlier ones.
    pub fn issue(&mut self) -> Ticket {
        self.latest += 1;
        Ticket(self.latest)
    }

    /// Whether a response carrying `ticket` is still the newest request.
    pub fn is_current(&self, ticket: Ticket) -> bool {
        ticket.0 == self.latest
    }

    /// Number of tickets issued so far.
    pub fn issued(&self) -> u64 {
        self.latest
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_newer_ticket_supersedes_older() {
        let mut seq = RequestSequencer::new();
        let first = seq.issue();
        assert!(seq.is_current(first));

        let second = seq.issue();
        assert!(!seq.is_current(first));
        assert!(seq.is_current(second));
        assert_eq!(seq.issued(), 2);
    }

    #[test]
    fn test_out_of_order_completion() {
        let mut seq = RequestSequencer::new();
        let slow = seq.issue();
        let fast = seq.issue();
        // fast response arrives first and is applied
        assert!(seq.is_current(fast));
        // slow response arrives later and must be dropped
        assert!(!seq.is_current(slow));
    }
}
