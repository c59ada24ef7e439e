//! Projection of raw PokeAPI records into view models
//!
//! Everything here is pure: the same record always maps to the same view.

use crate::api::models::{Pokemon, PokemonSpecies, Sprites};
use crate::models::{Ability, Detail, Stat, Summary};

/// Language tag of the localized entries we display
const DISPLAY_LANGUAGE: &str = "en";

type SpriteSource = fn(&Sprites) -> Option<&str>;

/// Sprite sources from most to least preferred
const SPRITE_PRECEDENCE: [SpriteSource; 4] =
    [official_artwork, home_default, dream_world_default, front_default];

fn official_artwork(sprites: &Sprites) -> Option<&str> {
    sprites
        .other
        .as_ref()?
        .official_artwork
        .as_ref()?
        .front_default
        .as_deref()
}

fn home_default(sprites: &Sprites) -> Option<&str> {
    sprites.other.as_ref()?.home.as_ref()?.front_default.as_deref()
}

fn dream_world_default(sprites: &Sprites) -> Option<&str> {
    sprites
        .other
        .as_ref()?
        .dream_world
        .as_ref()?
        .front_default
        .as_deref()
}

fn front_default(sprites: &Sprites) -> Option<&str> {
    sprites.front_default.as_deref()
}

/// First available sprite URL; empty strings count as missing
pub fn sprite(item: &Pokemon) -> Option<String> {
    SPRITE_PRECEDENCE
        .iter()
        .filter_map(|source| source(&item.sprites))
        .find(|url| !url.is_empty())
        .map(str::to_string)
}

/// Type names sorted by slot
pub fn types(item: &Pokemon) -> Vec<String> {
    let mut slots: Vec<_> = item.types.iter().collect();
    slots.sort_by_key(|s| s.slot);
    slots.into_iter().map(|s| s.kind.name.clone()).collect()
}

/// Abilities sorted by slot
pub fn abilities(item: &Pokemon) -> Vec<Ability> {
    let mut slots: Vec<_> = item.abilities.iter().collect();
    slots.sort_by_key(|s| s.slot);
    slots
        .into_iter()
        .map(|s| Ability {
            name: s.ability.name.clone(),
            is_hidden: s.is_hidden,
        })
        .collect()
}

/// Base stats in the order PokeAPI lists them
pub fn stats(item: &Pokemon) -> Vec<Stat> {
    item.stats
        .iter()
        .map(|s| Stat {
            name: s.stat.name.clone(),
            value: s.base_stat,
        })
        .collect()
}

/// First English flavor text, with form feeds and line breaks turned into spaces
pub fn flavor_text(species: &PokemonSpecies) -> Option<String> {
    species
        .flavor_text_entries
        .iter()
        .find(|e| e.language.name == DISPLAY_LANGUAGE)
        .map(|e| sanitize_flavor_text(&e.flavor_text))
}

/// Replace each form feed, newline or carriage return with one space
pub fn sanitize_flavor_text(text: &str) -> String {
    text.chars()
        .map(|c| match c {
            '\u{000c}' | '\n' | '\r' => ' ',
            other => other,
        })
        .collect()
}

/// First English genus, e.g. "Seed Pokémon"
pub fn genus(species: &PokemonSpecies) -> Option<String> {
    species
        .genera
        .iter()
        .find(|g| g.language.name == DISPLAY_LANGUAGE)
        .map(|g| g.genus.clone())
}

pub fn to_summary(item: &Pokemon) -> Summary {
    Summary {
        id: item.id,
        name: item.name.clone(),
        sprite: sprite(item),
        types: types(item),
    }
}

pub fn to_detail(item: &Pokemon, species: &PokemonSpecies) -> Detail {
    Detail {
        summary: to_summary(item),
        height: item.height,
        weight: item.weight,
        base_experience: item.base_experience,
        abilities: abilities(item),
        stats: stats(item),
        flavor_text: flavor_text(species),
        habitat: species.habitat.as_ref().map(|h| h.name.clone()),
        genus: genus(species),
        is_legendary: species.is_legendary,
        is_mythical: species.is_mythical,
    }
}

#[cfg(test)]
#[path = "mapper_tests.rs"]
mod tests;
