use crate::error::{AnalyzerError, Result};
use phf::phf_map;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The 18 elemental types, in the order used by the type chart.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Type {
    Normal,
    Fire,
    Water,
    Electric,
    Grass,
    Ice,
    Fighting,
    Poison,
    Ground,
    Flying,
    Psychic,
    Bug,
    Rock,
    Ghost,
    Dragon,
    Dark,
    Steel,
    Fairy,
}

impl Type {
    pub const COUNT: usize = 18;

    pub const ALL: [Type; Type::COUNT] = [
        Type::Normal,
        Type::Fire,
        Type::Water,
        Type::Electric,
        Type::Grass,
        Type::Ice,
        Type::Fighting,
        Type::Poison,
        Type::Ground,
        Type::Flying,
        Type::Psychic,
        Type::Bug,
        Type::Rock,
        Type::Ghost,
        Type::Dragon,
        Type::Dark,
        Type::Steel,
        Type::Fairy,
    ];

    /// Lowercase English identifier, e.g. `"fire"`.
    pub fn as_str(self) -> &'static str {
        match self {
            Type::Normal => "normal",
            Type::Fire => "fire",
            Type::Water => "water",
            Type::Electric => "electric",
            Type::Grass => "grass",
            Type::Ice => "ice",
            Type::Fighting => "fighting",
            Type::Poison => "poison",
            Type::Ground => "ground",
            Type::Flying => "flying",
            Type::Psychic => "psychic",
            Type::Bug => "bug",
            Type::Rock => "rock",
            Type::Ghost => "ghost",
            Type::Dragon => "dragon",
            Type::Dark => "dark",
            Type::Steel => "steel",
            Type::Fairy => "fairy",
        }
    }

    pub fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

static TYPE_IDS: phf::Map<&'static str, Type> = phf_map! {
    "normal" => Type::Normal,
    "fire" => Type::Fire,
    "water" => Type::Water,
    "electric" => Type::Electric,
    "grass" => Type::Grass,
    "ice" => Type::Ice,
    "fighting" => Type::Fighting,
    "poison" => Type::Poison,
    "ground" => Type::Ground,
    "flying" => Type::Flying,
    "psychic" => Type::Psychic,
    "bug" => Type::Bug,
    "rock" => Type::Rock,
    "ghost" => Type::Ghost,
    "dragon" => Type::Dragon,
    "dark" => Type::Dark,
    "steel" => Type::Steel,
    "fairy" => Type::Fairy,
};

/// Parses an English type name, ignoring case and surrounding whitespace.
pub fn parse_type(name: &str) -> Result<Type> {
    let key = name.trim().to_ascii_lowercase();
    TYPE_IDS
        .get(key.as_str())
        .copied()
        .ok_or_else(|| AnalyzerError::InvalidType(name.to_string()))
}

impl FromStr for Type {
    type Err = AnalyzerError;

    fn from_str(s: &str) -> Result<Self> {
        parse_type(s)
    }
}
