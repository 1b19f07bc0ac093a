//! Remote Data Gateway
//!
//! Abstract interface to the read-only data API. Responses are mapped to
//! explicit variants at this boundary so callers never inspect raw JSON.

mod client;
#[cfg(test)]
pub(crate) mod fake;

use async_trait::async_trait;

use crate::error::{GatewayError, Result};
use crate::models::{ItemDetail, ResourcePage};

pub use client::PokeApiClient;

/// Paginated collections the UI browses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resource {
    Pokemon,
    EvolutionTrigger,
}

impl Resource {
    pub fn path(&self) -> &'static str {
        match self {
            Resource::Pokemon => "pokemon",
            Resource::EvolutionTrigger => "evolution-trigger",
        }
    }
}

/// Result of a single-resource lookup by name
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupOutcome<T> {
    Found(T),
    /// The API answered with a non-success status
    NotFound,
    /// The request failed or the body was unreadable
    Failed(GatewayError),
}

impl<T> LookupOutcome<T> {
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> LookupOutcome<U> {
        match self {
            LookupOutcome::Found(value) => LookupOutcome::Found(f(value)),
            LookupOutcome::NotFound => LookupOutcome::NotFound,
            LookupOutcome::Failed(err) => LookupOutcome::Failed(err),
        }
    }

    pub fn found(self) -> Option<T> {
        match self {
            LookupOutcome::Found(value) => Some(value),
            _ => None,
        }
    }
}

/// Read-only access to the data API
///
/// Futures are `?Send`: in the browser everything runs on one thread.
#[async_trait(?Send)]
pub trait Gateway {
    /// Fetch one `limit`/`offset` window of a collection
    async fn list(&self, resource: Resource, limit: u32, offset: u32) -> Result<ResourcePage>;

    /// Look up a single Pokémon by name (or id)
    async fn pokemon(&self, name: &str) -> LookupOutcome<ItemDetail>;

    /// Reference URL for a Pokémon, as stored in [`ListItem::url`](crate::ListItem)
    fn pokemon_url(&self, name: &str) -> String;
}
