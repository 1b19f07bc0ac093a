//! Pokédex Frontend Entry Point

mod app;
mod components;
mod context;
mod routes;
mod store;

use app::App;
use leptos::prelude::*;
use pokedex_core::PokedexConfig;

const EMBEDDED_CONFIG: &str = include_str!("../config/pokedex.toml");

fn main() {
    console_error_panic_hook::set_once();

    let (config, config_error) = match PokedexConfig::from_toml_str(EMBEDDED_CONFIG) {
        Ok(config) => (config, None),
        Err(err) => (PokedexConfig::default(), Some(err)),
    };

    if let Err(err) = console_logger::init_logger("Pokedex", &config.log_level) {
        web_sys::console::error_1(&format!("Failed to init console logger: {}", err).into());
    }
    if let Some(err) = config_error {
        tracing::warn!("Falling back to default config: {}", err);
    }

    mount_to_body(move || view! { <App config=config /> });
}
