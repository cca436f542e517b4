use pokemon_type_analyzer::analysis::{
    analyze_team, analyze_types, best_counters, offensive_coverage, COVERAGE_LIMIT,
};
use pokemon_type_analyzer::i18n::{resolve_type, translate_type, Language};
use pokemon_type_analyzer::model::Pokemon;
use pokemon_type_analyzer::{load_team, AnalyzerError, Effectiveness, Type};

fn mon(number: u32, name: &str, types: &[&str]) -> Pokemon {
    Pokemon::new(number, name, types).expect("valid typing")
}

#[test]
fn charizard_breakdown() {
    let analysis = analyze_types(&[Type::Fire, Type::Flying]).unwrap();
    assert_eq!(
        analysis.weaknesses,
        vec![Type::Water, Type::Electric, Type::Rock]
    );
    assert_eq!(analysis.immunities, vec![Type::Ground]);
    assert!(analysis.resistances.contains(&Type::Grass));
    assert!(analysis.resistances.contains(&Type::Bug));
    assert!(analysis.resistances.contains(&Type::Fairy));
    assert!(analysis.neutral.contains(&Type::Normal));
    let total = analysis.weaknesses.len()
        + analysis.resistances.len()
        + analysis.immunities.len()
        + analysis.neutral.len();
    assert_eq!(total, Type::COUNT);
}

#[test]
fn counters_are_sorted_strongest_first() {
    let counters = best_counters(&[Type::Fire, Type::Flying], 5).unwrap();
    assert_eq!(counters[0].attacker, Type::Rock);
    assert_eq!(counters[0].multiplier, 4.0);
    assert_eq!(counters[0].effectiveness, Effectiveness::SuperEffective);
    assert_eq!(
        counters.iter().map(|c| c.attacker).collect::<Vec<_>>(),
        vec![Type::Rock, Type::Water, Type::Electric]
    );
    assert_eq!(best_counters(&[Type::Grass, Type::Bug], 1).unwrap().len(), 1);
}

#[test]
fn coverage_takes_best_of_both_types() {
    let coverage = offensive_coverage(&[Type::Water, Type::Ground]).unwrap();
    assert_eq!(
        coverage,
        vec![Type::Fire, Type::Electric, Type::Poison, Type::Ground, Type::Rock, Type::Steel]
    );
    assert!(offensive_coverage(&[Type::Normal]).unwrap().is_empty());
}

#[test]
fn coverage_is_capped() {
    for first in Type::ALL {
        for second in Type::ALL {
            assert!(offensive_coverage(&[first, second]).unwrap().len() <= COVERAGE_LIMIT);
        }
    }
}

#[test]
fn analysis_enforces_typing_size() {
    assert!(matches!(
        analyze_types(&[]),
        Err(AnalyzerError::InvalidArgument(_))
    ));
    assert!(matches!(
        best_counters(&[Type::Fire, Type::Water, Type::Grass], 5),
        Err(AnalyzerError::InvalidArgument(_))
    ));
}

#[test]
fn team_common_and_shared_weaknesses() {
    let team = vec![
        mon(6, "Charizard", &["fire", "flying"]),
        mon(12, "Butterfree", &["bug", "flying"]),
        mon(130, "Gyarados", &["water", "flying"]),
    ];
    let analysis = analyze_team(&team).unwrap();
    assert_eq!(analysis.members.len(), 3);
    assert_eq!(analysis.members[1].pokemon.name, "Butterfree");
    assert_eq!(analysis.common_weaknesses, vec![Type::Electric, Type::Rock]);
    assert_eq!(analysis.common_immunities, vec![Type::Ground]);

    let rock = analysis
        .shared_weaknesses
        .iter()
        .find(|s| s.attacker == Type::Rock)
        .expect("rock hits the whole team");
    let multipliers: Vec<(&str, f32)> = rock
        .affected
        .iter()
        .map(|m| (m.name.as_str(), m.multiplier))
        .collect();
    assert_eq!(
        multipliers,
        vec![("Charizard", 4.0), ("Butterfree", 4.0), ("Gyarados", 2.0)]
    );
    assert!(analysis
        .shared_weaknesses
        .iter()
        .all(|s| s.affected.len() >= 2));
    assert!(analysis.offensive_coverage.contains(&Type::Grass));
    assert!(analysis.offensive_coverage.contains(&Type::Psychic));
}

#[test]
fn empty_team_is_rejected() {
    assert!(matches!(
        analyze_team(&[]),
        Err(AnalyzerError::InvalidArgument(_))
    ));
}

#[test]
fn localized_names_resolve() {
    for name in ["Feu", "feu", "ほのお", "Fuoco", "FEUER", "fire", " Fuego "] {
        assert_eq!(resolve_type(name), Some(Type::Fire), "{name}");
    }
    assert_eq!(resolve_type("Électrik"), Some(Type::Electric));
    assert_eq!(resolve_type("électrik"), Some(Type::Electric));
    assert_eq!(resolve_type("plasma"), None);
    assert_eq!(translate_type(Type::Dark, Language::Fr), "Ténèbres");
    assert_eq!(translate_type(Type::Fairy, Language::Jp), "フェアリー");
}

#[test]
fn team_file_loads_and_validates() {
    let dir = std::env::temp_dir();
    let good = dir.join(format!("team_ok_{}.json", std::process::id()));
    std::fs::write(
        &good,
        r#"{"pokemon": [
            {"number": 6, "name": "Dracaufeu", "types": ["Feu", "Vol"]},
            {"number": 448, "name": "Lucario", "types": ["fighting", "steel"], "generation": 4}
        ]}"#,
    )
    .unwrap();
    let team = load_team(&good).unwrap();
    std::fs::remove_file(&good).ok();
    assert_eq!(team.len(), 2);
    assert_eq!(team[0].types, vec![Type::Fire, Type::Flying]);
    assert_eq!(team[1].generation, 4);

    let bad = dir.join(format!("team_bad_{}.json", std::process::id()));
    std::fs::write(&bad, r#"{"pokemon": [{"number": 1, "name": "X", "types": ["plasma"]}]}"#)
        .unwrap();
    assert!(load_team(&bad).is_err());
    std::fs::remove_file(&bad).ok();

    let empty = dir.join(format!("team_empty_{}.json", std::process::id()));
    std::fs::write(&empty, r#"{"pokemon": []}"#).unwrap();
    assert!(load_team(&empty).is_err());
    std::fs::remove_file(&empty).ok();
}
