//! Detail modal session.

use super::{RequestTicket, SessionCell, TicketCounter};
use crate::gateway::{Gateway, LookupOutcome};
use crate::models::{ItemDetail, ListItem};

/// Why the modal has no detail to show
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailFailure {
    NotFound,
    FetchError,
}

impl DetailFailure {
    pub fn message(&self) -> &'static str {
        match self {
            DetailFailure::NotFound => "Not found.",
            DetailFailure::FetchError => "Error fetching data",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ModalSession {
    is_open: bool,
    title: String,
    /// Survives `close()`; only shown while open
    detail: Option<ItemDetail>,
    loading: bool,
    failure: Option<DetailFailure>,
    tickets: TicketCounter,
}

impl ModalSession {
    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn failure(&self) -> Option<DetailFailure> {
        self.failure
    }

    /// Whatever the last applied response stored, open or not.
    pub fn detail(&self) -> Option<&ItemDetail> {
        self.detail.as_ref()
    }

    /// The detail the modal should render right now.
    pub fn visible_detail(&self) -> Option<&ItemDetail> {
        if self.is_open && !self.loading {
            self.detail.as_ref()
        } else {
            None
        }
    }

    /// Open on `item`; returns the ticket and the name to fetch.
    pub fn begin_open(&mut self, item: &ListItem) -> (RequestTicket, String) {
        self.is_open = true;
        self.title = capitalize(&item.name);
        self.detail = None;
        self.failure = None;
        self.loading = true;
        (self.tickets.issue(), item.name.clone())
    }

    /// Fold a detail response in. Returns `false` if the ticket was stale.
    pub fn apply_detail(&mut self, ticket: RequestTicket, outcome: LookupOutcome<ItemDetail>) -> bool {
        if !self.tickets.is_current(ticket) {
            tracing::debug!("Dropping stale detail response {:?}", ticket);
            return false;
        }

        match outcome {
            LookupOutcome::Found(detail) => {
                self.detail = Some(detail);
                self.failure = None;
            }
            LookupOutcome::NotFound => {
                self.detail = None;
                self.failure = Some(DetailFailure::NotFound);
            }
            LookupOutcome::Failed(_) => {
                self.detail = None;
                self.failure = Some(DetailFailure::FetchError);
            }
        }
        self.loading = false;
        true
    }

    pub fn close(&mut self) {
        self.is_open = false;
    }
}

/// Uppercase the first character: `"mr-mime"` -> `"Mr-mime"`.
pub fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Open the modal on `item` and fetch its detail.
pub async fn open_detail<G>(cell: &impl SessionCell<ModalSession>, gateway: &G, item: &ListItem)
where
    G: Gateway + ?Sized,
{
    let (ticket, name) = cell.with_mut(|modal| modal.begin_open(item));
    let outcome = gateway.pokemon(&name).await;
    cell.with_mut(|modal| modal.apply_detail(ticket, outcome));
}
