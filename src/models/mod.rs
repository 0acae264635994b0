//! PokeAPI models
//!
//! Typed views of the PokeAPI JSON payloads the Pokedex consumes. Only the
//! fields the Pokedex uses are declared; everything else in a response is
//! ignored when decoding.

pub mod location;
pub mod pokemon;

// Re-export commonly used types
pub use location::{LocationArea, LocationAreaPage, NamedResource, PokemonEncounter};
pub use pokemon::{Pokemon, PokemonStat, PokemonType};
