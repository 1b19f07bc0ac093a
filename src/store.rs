//! Global Application State Store
//!
//! Uses Leptos reactive_stores for field-level reactivity. The sessions
//! themselves are plain `pokedex-core` state machines; the `*Cell` handles
//! let the core's async drivers mutate them through the store.

use leptos::prelude::*;
use reactive_stores::Store;

use pokedex_core::{EvolutionSession, ModalSession, SearchSession, SessionCell};

/// Application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Search bar + Pokémon table
    pub search: SearchSession,
    /// Row detail dialog
    pub modal: ModalSession,
    /// Evolution trigger table
    pub evolution: EvolutionSession,
    /// Set once the first page load finished
    pub baseline_loaded: bool,
    /// `?name=` the page was loaded with
    pub filter_name: String,
}

impl AppState {
    pub fn new(evolution_page_size: u32) -> Self {
        Self {
            evolution: EvolutionSession::new(evolution_page_size),
            ..Default::default()
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

// ========================
// Session Cells
// ========================

#[derive(Clone, Copy)]
pub struct SearchCell(pub AppStore);

impl SessionCell<SearchSession> for SearchCell {
    fn with_mut<R>(&self, f: impl FnOnce(&mut SearchSession) -> R) -> R {
        f(&mut *self.0.search().write())
    }
}

#[derive(Clone, Copy)]
pub struct ModalCell(pub AppStore);

impl SessionCell<ModalSession> for ModalCell {
    fn with_mut<R>(&self, f: impl FnOnce(&mut ModalSession) -> R) -> R {
        f(&mut *self.0.modal().write())
    }
}

#[derive(Clone, Copy)]
pub struct EvolutionCell(pub AppStore);

impl SessionCell<EvolutionSession> for EvolutionCell {
    fn with_mut<R>(&self, f: impl FnOnce(&mut EvolutionSession) -> R) -> R {
        f(&mut *self.0.evolution().write())
    }
}
