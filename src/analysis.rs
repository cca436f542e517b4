use crate::calculator::{check_defender_count, effectiveness, Effectiveness};
use crate::chart::TypeChart;
use crate::error::{AnalyzerError, Result};
use crate::model::Pokemon;
use crate::types::Type;
use rayon::prelude::*;
use serde::Serialize;

/// Coverage lists stop after this many target types.
pub const COVERAGE_LIMIT: usize = 10;
pub const DEFAULT_COUNTER_LIMIT: usize = 5;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TypeAnalysis {
    pub weaknesses: Vec<Type>,
    pub resistances: Vec<Type>,
    pub immunities: Vec<Type>,
    pub neutral: Vec<Type>,
    /// Types this typing hits super-effectively when attacking.
    pub coverage: Vec<Type>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Counter {
    pub attacker: Type,
    pub multiplier: f32,
    pub effectiveness: Effectiveness,
}

/// Sorts every attacking type by how it hits `defender`.
pub fn analyze_types(defender: &[Type]) -> Result<TypeAnalysis> {
    check_defender_count(defender.len())?;
    let mut analysis = TypeAnalysis::default();
    for attacker in Type::ALL {
        let multiplier = effectiveness(attacker, defender)?;
        match Effectiveness::from_multiplier(multiplier) {
            Effectiveness::NoEffect => analysis.immunities.push(attacker),
            Effectiveness::NotVeryEffective => analysis.resistances.push(attacker),
            Effectiveness::SuperEffective => analysis.weaknesses.push(attacker),
            Effectiveness::Normal => analysis.neutral.push(attacker),
        }
    }
    analysis.coverage = offensive_coverage(defender)?;
    Ok(analysis)
}

/// Target types that at least one of `types` hits for more than neutral damage.
pub fn offensive_coverage(types: &[Type]) -> Result<Vec<Type>> {
    check_defender_count(types.len())?;
    let chart = TypeChart::global();
    Ok(Type::ALL
        .into_iter()
        .filter(|&target| {
            types
                .iter()
                .map(|&own| chart.multiplier(own, target))
                .fold(0.0, f32::max)
                > 1.0
        })
        .take(COVERAGE_LIMIT)
        .collect())
}

/// Attacking types that are super-effective against `defender`, strongest first.
pub fn best_counters(defender: &[Type], limit: usize) -> Result<Vec<Counter>> {
    check_defender_count(defender.len())?;
    let mut counters = Vec::new();
    for attacker in Type::ALL {
        let multiplier = effectiveness(attacker, defender)?;
        if multiplier > 1.0 {
            counters.push(Counter {
                attacker,
                multiplier,
                effectiveness: Effectiveness::from_multiplier(multiplier),
            });
        }
    }
    // stable sort keeps chart order among equal multipliers
    counters.sort_by(|lhs, rhs| rhs.multiplier.total_cmp(&lhs.multiplier));
    counters.truncate(limit);
    Ok(counters)
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MemberAnalysis {
    pub pokemon: Pokemon,
    pub analysis: TypeAnalysis,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AffectedMember {
    pub name: String,
    pub multiplier: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SharedWeakness {
    pub attacker: Type,
    pub affected: Vec<AffectedMember>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TeamAnalysis {
    pub members: Vec<MemberAnalysis>,
    /// Weak for every member.
    pub common_weaknesses: Vec<Type>,
    /// Weak for at least two members.
    pub shared_weaknesses: Vec<SharedWeakness>,
    pub common_immunities: Vec<Type>,
    pub offensive_coverage: Vec<Type>,
}

pub fn analyze_team(team: &[Pokemon]) -> Result<TeamAnalysis> {
    if team.is_empty() {
        return Err(AnalyzerError::InvalidArgument(
            "team must contain at least one Pokémon".to_string(),
        ));
    }
    let members = team
        .par_iter()
        .map(|pokemon| {
            analyze_types(&pokemon.types).map(|analysis| MemberAnalysis {
                pokemon: pokemon.clone(),
                analysis,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    let common_weaknesses: Vec<Type> = Type::ALL
        .into_iter()
        .filter(|t| members.iter().all(|m| m.analysis.weaknesses.contains(t)))
        .collect();
    let common_immunities: Vec<Type> = Type::ALL
        .into_iter()
        .filter(|t| members.iter().all(|m| m.analysis.immunities.contains(t)))
        .collect();
    let offensive_coverage: Vec<Type> = Type::ALL
        .into_iter()
        .filter(|t| members.iter().any(|m| m.analysis.coverage.contains(t)))
        .collect();

    let mut shared_weaknesses = Vec::new();
    for attacker in Type::ALL {
        let mut affected = Vec::new();
        for member in &members {
            if member.analysis.weaknesses.contains(&attacker) {
                affected.push(AffectedMember {
                    name: member.pokemon.name.clone(),
                    multiplier: effectiveness(attacker, &member.pokemon.types)?,
                });
            }
        }
        if affected.len() >= 2 {
            shared_weaknesses.push(SharedWeakness { attacker, affected });
        }
    }

    tracing::debug!(
        "Analyzed team of {}: {} common weaknesses, {} shared",
        members.len(),
        common_weaknesses.len(),
        shared_weaknesses.len()
    );

    Ok(TeamAnalysis {
        members,
        common_weaknesses,
        shared_weaknesses,
        common_immunities,
        offensive_coverage,
    })
}
