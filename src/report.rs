use crate::analysis::{analyze_types, best_counters, DEFAULT_COUNTER_LIMIT};
use crate::calculator::effectiveness;
use crate::error::Result;
use crate::i18n::{label, translate_type, type_emoji, Label, Language};
use crate::types::Type;

fn type_tag(ty: Type, language: Language) -> String {
    format!("{} {}", translate_type(ty, language), type_emoji(ty))
}

fn push_section(report: &mut String, heading: &str, items: &[String]) {
    if items.is_empty() {
        return;
    }
    report.push_str(&format!("{heading}: {}\n", items.join(" | ")));
}

/// Plain-text type analysis for one Pokémon.
pub fn format_report(name: &str, types: &[Type], language: Language) -> Result<String> {
    let analysis = analyze_types(types)?;
    let counters = best_counters(types, DEFAULT_COUNTER_LIMIT)?;
    let with_multiplier = |attackers: &[Type]| -> Result<Vec<String>> {
        attackers
            .iter()
            .map(|&t| {
                effectiveness(t, types)
                    .map(|multiplier| format!("{} (×{multiplier})", type_tag(t, language)))
            })
            .collect()
    };

    let mut report = format!("=== {} ===\n", name.to_uppercase());
    let typing: Vec<String> = types.iter().map(|&t| type_tag(t, language)).collect();
    report.push_str(&format!(
        "{}: {}\n",
        label(Label::Type, language),
        typing.join(" | ")
    ));
    push_section(
        &mut report,
        label(Label::Weaknesses, language),
        &with_multiplier(&analysis.weaknesses)?,
    );
    push_section(
        &mut report,
        label(Label::Resistances, language),
        &with_multiplier(&analysis.resistances)?,
    );
    push_section(
        &mut report,
        label(Label::Immunities, language),
        &with_multiplier(&analysis.immunities)?,
    );
    let counter_items: Vec<String> = counters
        .iter()
        .map(|c| format!("{} (×{})", type_tag(c.attacker, language), c.multiplier))
        .collect();
    push_section(&mut report, label(Label::Counters, language), &counter_items);
    let coverage: Vec<String> = analysis
        .coverage
        .iter()
        .map(|&t| type_tag(t, language))
        .collect();
    push_section(&mut report, label(Label::Coverage, language), &coverage);
    Ok(report)
}
