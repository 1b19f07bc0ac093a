//! Pokédex Core
//!
//! Layered like this:
//! - models: list items, details and the upstream JSON shapes
//! - gateway: the `Gateway` trait and its reqwest-backed client
//! - session: search, detail modal and evolution trigger state
//! - pagination / rating: pure presentation helpers
//! - page: URL query parsing and baseline loading

pub mod config;
pub mod error;
pub mod gateway;
pub mod models;
pub mod page;
pub mod pagination;
pub mod rating;
pub mod session;

pub use config::PokedexConfig;
pub use error::{ConfigError, GatewayError};
pub use gateway::{Gateway, LookupOutcome, PokeApiClient, Resource};
pub use models::{ItemDetail, ListItem, ResourcePage};
pub use page::{load_baseline, Baseline, PageRequest};
pub use pagination::{page_links, PageLink, Pager};
pub use rating::star_rating;
pub use session::{
    EvolutionSession, ModalSession, RequestTicket, SearchSession, SessionCell,
};
