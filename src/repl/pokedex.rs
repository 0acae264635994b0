//! The player's Pokedex
//!
//! Caught Pokemon and the catch roll.

use std::collections::BTreeMap;
use std::fmt;

use chrono::{DateTime, Utc};

use crate::api::client::canonical_name;
use crate::models::Pokemon;

/// Base experience at or above which every throw succeeds
pub const MAX_CATCH_EXPERIENCE: f64 = 300.0;

// == Catch Roll ==
/// Minimum roll in `[0, 1)` needed to catch a Pokemon with this base experience.
pub fn catch_difficulty(base_experience: Option<u32>) -> f64 {
    let experience = f64::from(base_experience.unwrap_or(0));
    1.0 - experience / MAX_CATCH_EXPERIENCE
}

/// Returns true if `roll` catches a Pokemon with this base experience.
pub fn is_caught(roll: f64, base_experience: Option<u32>) -> bool {
    roll >= catch_difficulty(base_experience)
}

// == Caught Pokemon ==
/// A Pokemon in the Pokedex together with when it was caught.
#[derive(Debug, Clone)]
pub struct CaughtPokemon {
    pub pokemon: Pokemon,
    pub caught_at: DateTime<Utc>,
}

impl fmt::Display for CaughtPokemon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let pokemon = &self.pokemon;
        writeln!(f, "Name: {}", pokemon.name)?;
        writeln!(f, "Height: {}", pokemon.height)?;
        writeln!(f, "Weight: {}", pokemon.weight)?;
        writeln!(f, "Stats:")?;
        for stat in &pokemon.stats {
            writeln!(f, "  - {}: {}", stat.stat.name, stat.base_stat)?;
        }
        writeln!(f, "Types:")?;
        for kind in &pokemon.types {
            writeln!(f, "  - {}", kind.kind.name)?;
        }
        write!(f, "Caught: {}", self.caught_at.format("%Y-%m-%d %H:%M:%S UTC"))
    }
}

// == Pokedex ==
/// Caught Pokemon keyed by name. Catching the same Pokemon again replaces the
/// earlier record.
#[derive(Debug, Default)]
pub struct Pokedex {
    caught: BTreeMap<String, CaughtPokemon>,
}

impl Pokedex {
    // == Constructor ==
    /// Creates an empty Pokedex.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `pokemon` as caught now.
    pub fn add(&mut self, pokemon: Pokemon) -> &CaughtPokemon {
        self.add_at(pokemon, Utc::now())
    }

    /// Records `pokemon` as caught at `caught_at`.
    pub fn add_at(&mut self, pokemon: Pokemon, caught_at: DateTime<Utc>) -> &CaughtPokemon {
        let name = canonical_name(&pokemon.name);
        let entry = CaughtPokemon { pokemon, caught_at };
        self.caught.insert(name.clone(), entry);
        &self.caught[&name]
    }

    /// Looks up a caught Pokemon by name, ignoring case and surrounding spaces.
    pub fn get(&self, name: &str) -> Option<&CaughtPokemon> {
        self.caught.get(&canonical_name(name))
    }

    /// Names of every caught Pokemon in alphabetical order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.caught.keys().map(String::as_str)
    }

    /// Returns the number of Pokemon caught.
    pub fn len(&self) -> usize {
        self.caught.len()
    }

    /// Returns true if nothing has been caught yet.
    pub fn is_empty(&self) -> bool {
        self.caught.is_empty()
    }
}
