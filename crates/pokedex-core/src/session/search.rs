//! List / search / pagination session.

use super::{RequestTicket, SessionCell, TicketCounter};
use crate::gateway::{Gateway, LookupOutcome};
use crate::models::ListItem;
use crate::pagination::Pager;

pub const NOT_FOUND: &str = "Not found";
pub const FETCH_ERROR: &str = "Error fetching data";

/// State behind the search bar and the Pokémon table
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchSession {
    search_text: String,
    items: Vec<ListItem>,
    loading: bool,
    error: Option<String>,
    /// Items of the last page load, restored on clear
    baseline: Vec<ListItem>,
    pager: Pager,
    /// False while a lookup result replaces the baseline
    showing_baseline: bool,
    tickets: TicketCounter,
}

impl SearchSession {
    pub fn search_text(&self) -> &str {
        &self.search_text
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

    pub fn baseline(&self) -> &[ListItem] {
        &self.baseline
    }

    pub fn pager(&self) -> Pager {
        self.pager
    }

    pub fn is_showing_baseline(&self) -> bool {
        self.showing_baseline
    }

    /// 1-based row number: page-relative for the baseline, plain for results
    pub fn row_number(&self, index: usize) -> u32 {
        let base = if self.showing_baseline { self.pager.offset() } else { 0 };
        base + index as u32 + 1
    }

    /// Seed the session from a freshly loaded page.
    pub fn initialize(
        &mut self,
        baseline_items: Vec<ListItem>,
        baseline_count: u32,
        page: u32,
        page_size: u32,
    ) {
        self.pager = Pager::new(page, page_size, baseline_count);
        self.reset(baseline_items);
    }

    /// Input binding; issues no request.
    pub fn set_search_text(&mut self, text: impl Into<String>) {
        self.search_text = text.into();
    }

    /// Back to `baseline_items` with no search, error or pending lookup.
    pub fn reset(&mut self, baseline_items: Vec<ListItem>) {
        self.tickets.invalidate();
        self.search_text.clear();
        self.items = baseline_items.clone();
        self.baseline = baseline_items;
        self.showing_baseline = true;
        self.loading = false;
        self.error = None;
    }

    /// Drop the search text and show the baseline again.
    pub fn clear(&mut self) {
        self.search_text.clear();
        self.items = self.baseline.clone();
        self.showing_baseline = true;
        self.error = None;
        if self.loading {
            // The pending lookup is abandoned, nothing else would end it
            self.tickets.invalidate();
            self.loading = false;
        }
    }

    /// Start a search for `query`.
    ///
    /// Returns the ticket and lowercased lookup key, or `None` when the
    /// query is blank and the session was reset to its baseline instead.
    pub fn begin_search(&mut self, query: &str) -> Option<(RequestTicket, String)> {
        let key = query.trim().to_lowercase();
        if key.is_empty() {
            let baseline = self.baseline.clone();
            self.reset(baseline);
            return None;
        }

        self.search_text = query.to_string();
        self.loading = true;
        self.error = None;
        Some((self.tickets.issue(), key))
    }

    /// Fold a lookup response in. Returns `false` if the ticket was stale.
    pub fn apply_lookup(&mut self, ticket: RequestTicket, outcome: LookupOutcome<ListItem>) -> bool {
        if !self.tickets.is_current(ticket) {
            tracing::debug!("Dropping stale search response {:?}", ticket);
            return false;
        }

        self.showing_baseline = false;
        match outcome {
            LookupOutcome::Found(item) => {
                self.items = vec![item];
                self.error = None;
            }
            LookupOutcome::NotFound => {
                self.items.clear();
                self.error = Some(NOT_FOUND.to_string());
            }
            LookupOutcome::Failed(_) => {
                self.items.clear();
                self.error = Some(FETCH_ERROR.to_string());
            }
        }
        self.loading = false;
        true
    }
}

/// Run a search against `gateway`, one attempt, no retry.
pub async fn search<G>(cell: &impl SessionCell<SearchSession>, gateway: &G, query: &str)
where
    G: Gateway + ?Sized,
{
    let Some((ticket, key)) = cell.with_mut(|session| session.begin_search(query)) else {
        return;
    };

    tracing::debug!("Searching for {:?}", key);
    let outcome = gateway
        .pokemon(&key)
        .await
        .map(|detail| ListItem::new(detail.name.clone(), gateway.pokemon_url(&detail.name)));

    cell.with_mut(|session| session.apply_lookup(ticket, outcome));
}
