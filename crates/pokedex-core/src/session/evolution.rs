//! Evolution trigger browser: a small, independently paged collection.

use super::search::FETCH_ERROR;
use super::{RequestTicket, SessionCell, TicketCounter};
use crate::error::Result;
use crate::gateway::{Gateway, Resource};
use crate::models::{ListItem, ResourcePage};
use crate::pagination::Pager;

#[derive(Debug, Clone, PartialEq)]
pub struct EvolutionSession {
    pager: Pager,
    items: Vec<ListItem>,
    loading: bool,
    error: Option<String>,
    tickets: TicketCounter,
}

impl Default for EvolutionSession {
    fn default() -> Self {
        Self::new(5)
    }
}

impl EvolutionSession {
    pub fn new(page_size: u32) -> Self {
        Self {
            pager: Pager::new(1, page_size, 0),
            items: Vec::new(),
            loading: false,
            error: None,
            tickets: TicketCounter::default(),
        }
    }

    pub fn pager(&self) -> Pager {
        self.pager
    }

    pub fn items(&self) -> &[ListItem] {
        &self.items
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// 1-based row number across pages
    pub fn row_number(&self, index: usize) -> u32 {
        self.pager.offset() + index as u32 + 1
    }

    /// Page to load for "Prev", if enabled
    pub fn previous_page(&self) -> Option<u32> {
        self.pager.has_previous().then(|| self.pager.previous_page())
    }

    /// Page to load for "Next", if enabled
    pub fn next_page(&self) -> Option<u32> {
        self.pager.has_next().then(|| self.pager.next_page())
    }

    /// Move to `page`; returns the ticket with `limit` and `offset` to fetch.
    pub fn begin_page(&mut self, page: u32) -> (RequestTicket, u32, u32) {
        self.pager.set_page(page);
        self.loading = true;
        self.error = None;
        (self.tickets.issue(), self.pager.page_size(), self.pager.offset())
    }

    /// Fold a collection response in. Returns `false` if the ticket was stale.
    pub fn apply_page(&mut self, ticket: RequestTicket, result: Result<ResourcePage>) -> bool {
        if !self.tickets.is_current(ticket) {
            tracing::debug!("Dropping stale evolution page {:?}", ticket);
            return false;
        }

        match result {
            Ok(page) => {
                self.pager.set_total(page.count);
                self.items = page.results;
            }
            Err(err) => {
                tracing::warn!("Evolution triggers page {} failed: {}", self.pager.page(), err);
                self.items.clear();
                self.error = Some(FETCH_ERROR.to_string());
            }
        }
        self.loading = false;
        true
    }
}

/// Load `page` of evolution triggers.
pub async fn load_evolution_page<G>(cell: &impl SessionCell<EvolutionSession>, gateway: &G, page: u32)
where
    G: Gateway + ?Sized,
{
    let (ticket, limit, offset) = cell.with_mut(|session| session.begin_page(page));
    let result = gateway.list(Resource::EvolutionTrigger, limit, offset).await;
    cell.with_mut(|session| session.apply_page(ticket, result));
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;
    use crate::gateway::fake::FakeGateway;

    fn triggers(names: &[&str], count: u32) -> ResourcePage {
        ResourcePage {
            count,
            results: names
                .iter()
                .map(|name| ListItem::new(*name, format!("https://pokeapi.test/api/v2/evolution-trigger/{}/", name)))
                .collect(),
        }
    }

    #[tokio::test]
    async fn test_first_page() {
        let gateway = FakeGateway::new().with_page(
            Resource::EvolutionTrigger,
            0,
            triggers(&["level-up", "trade", "use-item", "shed", "spin"], 13),
        );
        let cell = RefCell::new(EvolutionSession::new(5));

        load_evolution_page(&cell, &gateway, 1).await;

        let session = cell.borrow();
        assert_eq!(session.items().len(), 5);
        assert_eq!(session.pager().page_count(), 3);
        assert_eq!(session.previous_page(), None);
        assert_eq!(session.next_page(), Some(2));
        assert_eq!(session.row_number(0), 1);
        assert!(!session.is_loading());
        assert_eq!(gateway.calls(), vec!["list evolution-trigger 5 0"]);
    }

    #[tokio::test]
    async fn test_last_page_numbers_and_edges() {
        let gateway = FakeGateway::new()
            .with_page(Resource::EvolutionTrigger, 10, triggers(&["other", "recoil-damage", "three-critical-hits"], 13));
        let cell = RefCell::new(EvolutionSession::new(5));

        load_evolution_page(&cell, &gateway, 3).await;

        let session = cell.borrow();
        assert_eq!(session.row_number(2), 13);
        assert_eq!(session.next_page(), None);
        assert_eq!(session.previous_page(), Some(2));
    }

    #[test]
    fn test_begin_page_clamps_zero() {
        let mut session = EvolutionSession::new(5);
        let (_, limit, offset) = session.begin_page(0);
        assert_eq!(session.pager().page(), 1);
        assert_eq!((limit, offset), (5, 0));
    }

    #[tokio::test]
    async fn test_failure_sets_error() {
        let gateway = FakeGateway::new().with_page_failure(Resource::EvolutionTrigger, 0);
        let cell = RefCell::new(EvolutionSession::new(5));

        load_evolution_page(&cell, &gateway, 1).await;

        let session = cell.borrow();
        assert!(session.items().is_empty());
        assert_eq!(session.error(), Some(FETCH_ERROR));
        assert!(!session.is_loading());
    }

    #[tokio::test]
    async fn test_latest_page_wins() {
        let gateway = FakeGateway::new()
            .with_page(Resource::EvolutionTrigger, 5, triggers(&["spin"], 13));
        let slow = gateway.defer_page(Resource::EvolutionTrigger, 0);
        let cell = RefCell::new(EvolutionSession::new(5));

        let resolve_late = async {
            tokio::task::yield_now().await;
            let _ = slow.send(Ok(triggers(&["level-up"], 13)));
        };
        tokio::join!(
            load_evolution_page(&cell, &gateway, 1),
            load_evolution_page(&cell, &gateway, 2),
            resolve_late,
        );

        let session = cell.borrow();
        assert_eq!(session.pager().page(), 2);
        assert_eq!(session.items()[0].name, "spin");
    }
}
