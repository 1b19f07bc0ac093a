//! Application Context
//!
//! Store, gateway and settings provided via Leptos Context API. Every user
//! action goes through here so components never touch the gateway.

use leptos::prelude::*;
use leptos::task::spawn_local;

use pokedex_core::session::{load_evolution_page, open_detail, search};
use pokedex_core::{load_baseline, ListItem, PageRequest, PokeApiClient, PokedexConfig, SessionCell};

use crate::store::{AppStateStoreFields, AppStore, EvolutionCell, ModalCell, SearchCell};

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Reactive application state
    pub store: AppStore,
    /// The HTTP client is not `Send` in the browser, keep it local
    gateway: StoredValue<PokeApiClient, LocalStorage>,
    config: StoredValue<PokedexConfig>,
}

impl AppContext {
    pub fn new(store: AppStore, gateway: PokeApiClient, config: PokedexConfig) -> Self {
        Self {
            store,
            gateway: StoredValue::new_local(gateway),
            config: StoredValue::new(config),
        }
    }

    fn gateway(&self) -> PokeApiClient {
        self.gateway.get_value()
    }

    pub fn page_size(&self) -> u32 {
        self.config.with_value(|config| config.page_size)
    }

    /// Load the page the URL asks for and seed the search session with it.
    pub fn load_page(&self, request: PageRequest) {
        let store = self.store;
        let gateway = self.gateway();
        let page_size = self.page_size();
        spawn_local(async move {
            let baseline = load_baseline(&gateway, &request, page_size).await;
            *store.filter_name().write() = baseline.filter_name.clone();
            SearchCell(store).with_mut(|session| {
                session.initialize(baseline.items, baseline.count, baseline.page, baseline.page_size)
            });
            *store.baseline_loaded().write() = true;
        });
    }

    pub fn set_search_text(&self, text: String) {
        SearchCell(self.store).with_mut(|session| session.set_search_text(text));
    }

    pub fn search(&self, query: String) {
        let cell = SearchCell(self.store);
        let gateway = self.gateway();
        spawn_local(async move {
            search(&cell, &gateway, &query).await;
        });
    }

    pub fn clear_search(&self) {
        SearchCell(self.store).with_mut(|session| session.clear());
    }

    pub fn open_detail(&self, item: ListItem) {
        let cell = ModalCell(self.store);
        let gateway = self.gateway();
        spawn_local(async move {
            open_detail(&cell, &gateway, &item).await;
        });
    }

    pub fn close_detail(&self) {
        ModalCell(self.store).with_mut(|modal| modal.close());
    }

    pub fn load_evolution_page(&self, page: u32) {
        let cell = EvolutionCell(self.store);
        let gateway = self.gateway();
        spawn_local(async move {
            load_evolution_page(&cell, &gateway, page).await;
        });
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
