//! UI Components
//!
//! Leptos components; each reads the store and routes actions through
//! `AppContext`.

mod detail_modal;
mod evolution_table;
mod header;
mod pagination;
mod pokemon_table;
mod search_bar;
mod star_rating;

pub use detail_modal::DetailModal;
pub use evolution_table::EvolutionTable;
pub use header::Header;
pub use pagination::Pagination;
pub use pokemon_table::PokemonTable;
pub use search_bar::SearchBar;
pub use star_rating::StarRating;
