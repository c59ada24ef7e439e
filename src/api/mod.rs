//! PokeAPI client and raw payload models

pub mod client;
pub mod models;

pub use client::CatalogClient;
pub use models::{
    AbilitySlot, FlavorTextEntry, Genus, NamedResource, Pokemon, PokemonPage, PokemonRef,
    PokemonSpecies, Sprites, StatSlot, TypeSlot,
};
