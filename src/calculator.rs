use crate::chart::TypeChart;
use crate::error::{AnalyzerError, Result};
use crate::types::{parse_type, Type};
use serde::Serialize;
use std::fmt;

/// A Pokémon carries one or two types.
pub const MAX_DEFENDING_TYPES: usize = 2;

pub(crate) fn check_defender_count(count: usize) -> Result<()> {
    if count == 0 {
        return Err(AnalyzerError::InvalidArgument(
            "at least one defending type is required".to_string(),
        ));
    }
    if count > MAX_DEFENDING_TYPES {
        return Err(AnalyzerError::InvalidArgument(format!(
            "expected at most {MAX_DEFENDING_TYPES} defending types, got {count}"
        )));
    }
    Ok(())
}

/// Combined multiplier of `attacker` against a one- or two-type defender.
pub fn effectiveness(attacker: Type, defenders: &[Type]) -> Result<f32> {
    check_defender_count(defenders.len())?;
    let chart = TypeChart::global();
    Ok(defenders
        .iter()
        .map(|&defender| chart.multiplier(attacker, defender))
        .product())
}

/// String front end for [`effectiveness`]: names are matched case-insensitively.
///
/// ```
/// use pokemon_type_analyzer::calculate_effectiveness;
///
/// assert_eq!(calculate_effectiveness("water", &["fire", "rock"]).unwrap(), 4.0);
/// assert_eq!(calculate_effectiveness("Normal", &["ghost"]).unwrap(), 0.0);
/// ```
pub fn calculate_effectiveness<S: AsRef<str>>(
    attacker_type: &str,
    defender_types: &[S],
) -> Result<f32> {
    check_defender_count(defender_types.len())?;
    let attacker = parse_type(attacker_type)?;
    let defenders = defender_types
        .iter()
        .map(|name| parse_type(name.as_ref()))
        .collect::<Result<Vec<_>>>()?;
    effectiveness(attacker, &defenders)
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
pub enum Effectiveness {
    NoEffect,
    NotVeryEffective,
    Normal,
    SuperEffective,
}

impl Effectiveness {
    pub fn from_multiplier(multiplier: f32) -> Self {
        if multiplier == 0.0 {
            Effectiveness::NoEffect
        } else if multiplier < 1.0 {
            Effectiveness::NotVeryEffective
        } else if multiplier > 1.0 {
            Effectiveness::SuperEffective
        } else {
            Effectiveness::Normal
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Effectiveness::NoEffect => "No effect",
            Effectiveness::NotVeryEffective => "Not very effective",
            Effectiveness::Normal => "Normal effectiveness",
            Effectiveness::SuperEffective => "Super effective",
        }
    }
}

impl fmt::Display for Effectiveness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn count_check_runs_before_name_parsing() {
        let err = calculate_effectiveness::<&str>("plasma", &[]).unwrap_err();
        assert!(matches!(err, AnalyzerError::InvalidArgument(_)));
    }

    #[test]
    fn classification_boundaries() {
        assert_eq!(Effectiveness::from_multiplier(0.0), Effectiveness::NoEffect);
        assert_eq!(
            Effectiveness::from_multiplier(0.25),
            Effectiveness::NotVeryEffective
        );
        assert_eq!(Effectiveness::from_multiplier(1.0), Effectiveness::Normal);
        assert_eq!(
            Effectiveness::from_multiplier(4.0),
            Effectiveness::SuperEffective
        );
        assert_eq!(Effectiveness::SuperEffective.to_string(), "Super effective");
    }
}
