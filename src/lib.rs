//! Pokémon type-effectiveness calculator and weakness analysis.
//!
//! The core entry point is [`calculate_effectiveness`]; [`analysis`] and
//! [`report`] build the per-Pokémon and per-team breakdowns on top of it.

pub mod analysis;
pub mod calculator;
pub mod chart;
pub mod error;
pub mod i18n;
pub mod matrix;
pub mod model;
pub mod report;
pub mod types;

pub use crate::calculator::{calculate_effectiveness, effectiveness, Effectiveness};
pub use crate::error::AnalyzerError;
pub use crate::types::Type;

use crate::analysis::analyze_team;
use crate::i18n::{label, resolve_type, translate_type, Label, Language};
use crate::matrix::{chart_matrix, write_csv};
use crate::model::{Pokemon, TeamFile};
use anyhow::Context;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub enum Command {
    Effectiveness {
        attacker: String,
        defenders: Vec<String>,
    },
    Analyze {
        types: Vec<String>,
        name: Option<String>,
        language: Language,
    },
    Team {
        team_path: PathBuf,
        language: Language,
    },
    Chart {
        output_path: PathBuf,
    },
}

pub fn load_team(path: &Path) -> anyhow::Result<Vec<Pokemon>> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read team file at {}", path.display()))?;
    let parsed: TeamFile = serde_json::from_str(&raw)
        .with_context(|| format!("Failed to parse JSON from {}", path.display()))?;
    if parsed.pokemon.is_empty() {
        anyhow::bail!("Team file {} lists no Pokémon", path.display());
    }
    if !parsed.extras.is_empty() {
        tracing::warn!(
            "Ignoring unknown keys in {}: {:?}",
            path.display(),
            parsed.extras.keys().collect::<Vec<_>>()
        );
    }
    tracing::debug!("Loaded {} Pokémon from {}", parsed.pokemon.len(), path.display());
    Ok(parsed.pokemon)
}

fn type_list(types: &[Type], language: Language) -> String {
    if types.is_empty() {
        return "-".to_string();
    }
    types
        .iter()
        .map(|&t| translate_type(t, language))
        .collect::<Vec<_>>()
        .join(", ")
}

pub fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::Effectiveness {
            attacker,
            defenders,
        } => {
            let multiplier = calculate_effectiveness(&attacker, &defenders)?;
            println!(
                "{} -> {}: ×{} ({})",
                attacker,
                defenders.join("/"),
                multiplier,
                Effectiveness::from_multiplier(multiplier)
            );
        }
        Command::Analyze {
            types,
            name,
            language,
        } => {
            let resolved = types
                .iter()
                .map(|t| resolve_type(t).ok_or_else(|| AnalyzerError::InvalidType(t.clone())))
                .collect::<Result<Vec<_>, _>>()?;
            let name = name.unwrap_or_else(|| {
                resolved
                    .iter()
                    .map(|&t| translate_type(t, language))
                    .collect::<Vec<_>>()
                    .join("/")
            });
            print!("{}", report::format_report(&name, &resolved, language)?);
        }
        Command::Team {
            team_path,
            language,
        } => {
            let team = load_team(&team_path)?;
            let analysis = analyze_team(&team)?;
            println!("Team of {}", analysis.members.len());
            for member in &analysis.members {
                println!(
                    "  #{:03} {} ({}, {} {}) - weak to {}",
                    member.pokemon.number,
                    member.pokemon.name,
                    type_list(&member.pokemon.types, language),
                    label(Label::Generation, language),
                    member.pokemon.generation,
                    type_list(&member.analysis.weaknesses, language)
                );
            }
            println!(
                "Common weaknesses: {}",
                type_list(&analysis.common_weaknesses, language)
            );
            println!("Shared weaknesses:");
            for shared in &analysis.shared_weaknesses {
                let affected: Vec<String> = shared
                    .affected
                    .iter()
                    .map(|m| format!("{} ×{}", m.name, m.multiplier))
                    .collect();
                println!(
                    "  {}: {}",
                    translate_type(shared.attacker, language),
                    affected.join(", ")
                );
            }
            println!(
                "Common immunities: {}",
                type_list(&analysis.common_immunities, language)
            );
            println!(
                "Offensive coverage: {}",
                type_list(&analysis.offensive_coverage, language)
            );
        }
        Command::Chart { output_path } => {
            let matrix = chart_matrix();
            write_csv(&matrix, &output_path)?;
            tracing::info!(
                "Wrote {}x{} type chart to {}",
                matrix.len(),
                matrix.first().map(|r| r.len()).unwrap_or(0),
                output_path.display()
            );
        }
    }
    Ok(())
}
