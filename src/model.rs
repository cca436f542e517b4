use crate::calculator::check_defender_count;
use crate::error::{AnalyzerError, Result};
use crate::i18n::resolve_type;
use crate::types::Type;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Last national dex number of each generation.
const GENERATION_ENDS: [(u32, u8); 8] = [
    (151, 1),
    (251, 2),
    (386, 3),
    (493, 4),
    (649, 5),
    (721, 6),
    (809, 7),
    (905, 8),
];

pub fn generation_from_number(number: u32) -> u8 {
    GENERATION_ENDS
        .iter()
        .find(|(last, _)| number <= *last)
        .map(|(_, generation)| *generation)
        .unwrap_or(9)
}

#[derive(Debug, Clone, Deserialize)]
struct PokemonRecord {
    number: u32,
    name: String,
    types: Vec<String>,
    #[serde(default)]
    generation: Option<u8>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "PokemonRecord")]
pub struct Pokemon {
    pub number: u32,
    pub name: String,
    pub types: Vec<Type>,
    pub generation: u8,
}

impl Pokemon {
    /// Builds a Pokémon from type names in any supported language.
    pub fn new<S: AsRef<str>>(number: u32, name: &str, types: &[S]) -> Result<Self> {
        check_defender_count(types.len())?;
        let types = types
            .iter()
            .map(|t| {
                resolve_type(t.as_ref())
                    .ok_or_else(|| AnalyzerError::InvalidType(t.as_ref().to_string()))
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Pokemon {
            number,
            name: name.to_string(),
            types,
            generation: generation_from_number(number),
        })
    }
}

impl TryFrom<PokemonRecord> for Pokemon {
    type Error = AnalyzerError;

    fn try_from(record: PokemonRecord) -> Result<Self> {
        let mut pokemon = Pokemon::new(record.number, &record.name, &record.types)?;
        if let Some(generation) = record.generation {
            pokemon.generation = generation;
        }
        Ok(pokemon)
    }
}

#[derive(Debug, Deserialize)]
pub struct TeamFile {
    pub pokemon: Vec<Pokemon>,
    #[serde(flatten, default)]
    pub extras: HashMap<String, serde_json::Value>,
}
