//! Raw PokeAPI payloads
//!
//! Only the fields the mapper reads (plus a few references kept for callers)
//! are modelled. Anything PokeAPI omits or sends as null falls back to its
//! default so that sparse records still deserialize.

use serde::{Deserialize, Serialize};
use std::fmt;

/// `{ name, url }` reference used all over PokeAPI
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
pub struct NamedResource {
    pub name: String,
    #[serde(default)]
    pub url: String,
}

/// Unnamed `{ url }` reference (e.g. evolution chains)
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
pub struct ApiResource {
    pub url: String,
}

/// One page of `GET /pokemon?limit&offset`
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct PokemonPage {
    pub count: u64,
    #[serde(default)]
    pub next: Option<String>,
    #[serde(default)]
    pub previous: Option<String>,
    #[serde(default)]
    pub results: Vec<NamedResource>,
}

/// Full record from `GET /pokemon/{nameOrId}`
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
#[serde(default)]
pub struct Pokemon {
    pub id: u32,
    pub name: String,
    /// Decimetres
    pub height: u32,
    /// Hectograms
    pub weight: u32,
    pub order: i32,
    pub base_experience: Option<u32>,
    pub sprites: Sprites,
    pub types: Vec<TypeSlot>,
    pub abilities: Vec<AbilitySlot>,
    pub stats: Vec<StatSlot>,
    /// Kept raw, nothing downstream reads moves
    pub moves: Vec<serde_json::Value>,
    pub species: Option<NamedResource>,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
#[serde(default)]
pub struct Sprites {
    pub front_default: Option<String>,
    pub other: Option<OtherSprites>,
}

/// Artwork sets nested under `sprites.other`
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
#[serde(default)]
pub struct OtherSprites {
    #[serde(rename = "official-artwork")]
    pub official_artwork: Option<SpriteVariant>,
    pub home: Option<SpriteVariant>,
    pub dream_world: Option<SpriteVariant>,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
#[serde(default)]
pub struct SpriteVariant {
    pub front_default: Option<String>,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct TypeSlot {
    pub slot: u8,
    #[serde(rename = "type")]
    pub kind: NamedResource,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct AbilitySlot {
    pub ability: NamedResource,
    #[serde(default)]
    pub is_hidden: bool,
    pub slot: u8,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct StatSlot {
    pub base_stat: u32,
    #[serde(default)]
    pub effort: u32,
    pub stat: NamedResource,
}

/// Record from `GET /pokemon-species/{nameOrId}`
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
#[serde(default)]
pub struct PokemonSpecies {
    pub id: u32,
    pub name: String,
    pub color: Option<NamedResource>,
    pub habitat: Option<NamedResource>,
    pub flavor_text_entries: Vec<FlavorTextEntry>,
    pub genera: Vec<Genus>,
    pub is_legendary: bool,
    pub is_mythical: bool,
    pub evolution_chain: Option<ApiResource>,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct FlavorTextEntry {
    pub flavor_text: String,
    pub language: NamedResource,
    #[serde(default)]
    pub version: Option<NamedResource>,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct Genus {
    pub genus: String,
    pub language: NamedResource,
}

/// Id or name identifying a Pokemon in PokeAPI paths
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PokemonRef {
    Id(u32),
    Name(String),
}

impl From<u32> for PokemonRef {
    fn from(id: u32) -> Self {
        PokemonRef::Id(id)
    }
}

impl From<&str> for PokemonRef {
    /// Numeric strings become ids, anything else a lowercase name
    fn from(value: &str) -> Self {
        let trimmed = value.trim();
        match trimmed.parse::<u32>() {
            Ok(id) => PokemonRef::Id(id),
            Err(_) => PokemonRef::Name(trimmed.to_lowercase()),
        }
    }
}

impl From<String> for PokemonRef {
    fn from(value: String) -> Self {
        PokemonRef::from(value.as_str())
    }
}

impl From<&String> for PokemonRef {
    fn from(value: &String) -> Self {
        PokemonRef::from(value.as_str())
    }
}

impl fmt::Display for PokemonRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PokemonRef::Id(id) => write!(f, "{}", id),
            PokemonRef::Name(name) => write!(f, "{}", urlencoding::encode(name)),
        }
    }
}

#[cfg(test)]
#[path = "models_tests.rs"]
mod tests;
