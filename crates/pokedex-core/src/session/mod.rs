//! UI Session State
//!
//! Each session is a plain state machine with two halves per request:
//! `begin_*` records intent and hands out a [`RequestTicket`], `apply_*`
//! folds the gateway response back in. Responses carrying an outdated
//! ticket are dropped, so the latest request always wins.
//!
//! The async drivers (`search`, `open_detail`, `load_evolution_page`) glue
//! the halves to a [`Gateway`](crate::Gateway) through a [`SessionCell`],
//! never holding a borrow across an await point.

mod evolution;
mod modal;
mod search;

use std::cell::RefCell;

pub use evolution::{load_evolution_page, EvolutionSession};
pub use modal::{capitalize, open_detail, DetailFailure, ModalSession};
pub use search::{search, SearchSession, FETCH_ERROR, NOT_FOUND};

/// Sequence number of an issued request
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestTicket(u64);

/// Issues tickets and remembers the latest one
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct TicketCounter {
    latest: u64,
}

impl TicketCounter {
    pub fn issue(&mut self) -> RequestTicket {
        self.latest += 1;
        RequestTicket(self.latest)
    }

    /// Make every outstanding ticket stale.
    pub fn invalidate(&mut self) {
        self.latest += 1;
    }

    pub fn is_current(&self, ticket: RequestTicket) -> bool {
        ticket.0 == self.latest
    }
}

/// Shared, mutable home of a session
///
/// Implemented for `RefCell` here and for the reactive store in the UI.
pub trait SessionCell<S> {
    fn with_mut<R>(&self, f: impl FnOnce(&mut S) -> R) -> R;
}

impl<S> SessionCell<S> for RefCell<S> {
    fn with_mut<R>(&self, f: impl FnOnce(&mut S) -> R) -> R {
        f(&mut self.borrow_mut())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ticket_counter() {
        let mut counter = TicketCounter::default();
        let first = counter.issue();
        assert!(counter.is_current(first));

        let second = counter.issue();
        assert!(!counter.is_current(first));
        assert!(counter.is_current(second));
        assert!(second > first);

        counter.invalidate();
        assert!(!counter.is_current(second));
    }
}
