//! Data Models
//!
//! Entities shown by the UI, plus the JSON shapes the API returns.

use serde::{Deserialize, Serialize};

/// One entry of a paginated collection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListItem {
    pub name: String,
    pub url: String,
}

impl ListItem {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
        }
    }
}

/// A window of a collection endpoint (`{count, results}`)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourcePage {
    /// Total size of the collection, not of this window
    pub count: u32,
    pub results: Vec<ListItem>,
}

/// Full record for a single Pokémon, fetched on demand
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemDetail {
    pub id: u32,
    pub name: String,
    pub height: u32,
    pub weight: u32,
    pub base_experience: u32,
    /// Front sprite; a few forms have none upstream
    pub sprite_url: Option<String>,
    pub types: Vec<String>,
    pub abilities: Vec<String>,
}

// ========================
// Upstream JSON shapes
// ========================

#[derive(Debug, Deserialize)]
pub(crate) struct NamedRef {
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct TypeSlot {
    #[serde(rename = "type")]
    pub kind: NamedRef,
}

#[derive(Debug, Deserialize)]
pub(crate) struct AbilitySlot {
    pub ability: NamedRef,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct Sprites {
    pub front_default: Option<String>,
}

/// `/pokemon/{name}` response, reduced to the fields we display
#[derive(Debug, Deserialize)]
pub(crate) struct PokemonPayload {
    pub id: u32,
    pub name: String,
    pub height: u32,
    pub weight: u32,
    #[serde(default)]
    pub base_experience: Option<u32>,
    #[serde(default)]
    pub sprites: Sprites,
    #[serde(default)]
    pub types: Vec<TypeSlot>,
    #[serde(default)]
    pub abilities: Vec<AbilitySlot>,
}

impl From<PokemonPayload> for ItemDetail {
    fn from(payload: PokemonPayload) -> Self {
        Self {
            id: payload.id,
            name: payload.name,
            height: payload.height,
            weight: payload.weight,
            base_experience: payload.base_experience.unwrap_or(0),
            sprite_url: payload.sprites.front_default,
            types: payload.types.into_iter().map(|slot| slot.kind.name).collect(),
            abilities: payload
                .abilities
                .into_iter()
                .map(|slot| slot.ability.name)
                .collect(),
        }
    }
}
