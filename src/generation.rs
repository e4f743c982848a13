//! Load Generations
//!
//! Collections are refreshed by fetch-and-replace. Each reload takes a
//! ticket, and only the newest ticket may write its result.

/// Proof that a reload was started; compare with [`LoadGeneration::is_current`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket(u64);

#[derive(Debug, Clone, Copy, Default)]
pub struct LoadGeneration {
    latest: u64,
}

impl LoadGeneration {
    pub fn next(&mut self) -> LoadTicket {
        self.latest += 1;
        LoadTicket(self.latest)
    }

    pub fn is_current(&self, ticket: LoadTicket) -> bool {
        ticket.0 == self.latest
    }

    /// Make every outstanding ticket stale without starting a new load
    pub fn invalidate(&mut self) {
        self.latest += 1;
    }
}
