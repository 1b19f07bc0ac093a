//! Pokédex Frontend App
//!
//! Page layout: header, search bar, Pokémon table with pagination,
//! evolution trigger table and the detail modal overlay.

use leptos::prelude::*;
use reactive_stores::Store;

use pokedex_core::{PokeApiClient, PokedexConfig};

use crate::components::{DetailModal, EvolutionTable, Header, PokemonTable, SearchBar};
use crate::context::AppContext;
use crate::routes;
use crate::store::AppState;

#[component]
pub fn App(config: PokedexConfig) -> impl IntoView {
    let gateway = match PokeApiClient::new(config.api_base_url.clone()) {
        Ok(gateway) => gateway,
        Err(err) => {
            tracing::error!("Cannot create API client: {}", err);
            return view! { <p class="error">"Error fetching data"</p> }.into_any();
        }
    };

    let store = Store::new(AppState::new(config.evolution_page_size));
    let ctx = AppContext::new(store, gateway, config);

    // Provide context to all children
    provide_context(ctx);

    // Initial loads
    let request = routes::current_request();
    tracing::info!("Page load: page={} name={:?}", request.page, request.name);
    Effect::new(move |_| {
        ctx.load_page(request.clone());
        ctx.load_evolution_page(1);
    });

    view! {
        <div class="app-layout">
            <Header />

            <main class="main-content">
                <SearchBar />
                <PokemonTable />

                <div class="divider"></div>

                <EvolutionTable />
            </main>

            <DetailModal />
        </div>
    }
    .into_any()
}
