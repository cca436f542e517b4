// Localized type names and report labels.
use crate::types::Type;
use once_cell::sync::Lazy;
use serde::Deserialize;
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub enum Language {
    Fr,
    #[default]
    En,
    De,
    Es,
    It,
    Jp,
}

impl Language {
    pub const ALL: [Language; 6] = [
        Language::Fr,
        Language::En,
        Language::De,
        Language::Es,
        Language::It,
        Language::Jp,
    ];

    pub fn code(self) -> &'static str {
        match self {
            Language::Fr => "fr",
            Language::En => "en",
            Language::De => "de",
            Language::Es => "es",
            Language::It => "it",
            Language::Jp => "jp",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fr" => Ok(Language::Fr),
            "en" => Ok(Language::En),
            "de" => Ok(Language::De),
            "es" => Ok(Language::Es),
            "it" => Ok(Language::It),
            "jp" | "ja" => Ok(Language::Jp),
            other => anyhow::bail!("Unsupported language {other} (use fr, en, de, es, it or jp)"),
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
struct TypeNames {
    fr: String,
    en: String,
    de: String,
    es: String,
    it: String,
    jp: String,
}

impl TypeNames {
    fn fallback(ty: Type) -> Self {
        let mut name = ty.as_str().to_string();
        if let Some(first) = name.get_mut(0..1) {
            first.make_ascii_uppercase();
        }
        TypeNames {
            fr: name.clone(),
            en: name.clone(),
            de: name.clone(),
            es: name.clone(),
            it: name.clone(),
            jp: name,
        }
    }

    fn get(&self, language: Language) -> &str {
        match language {
            Language::Fr => &self.fr,
            Language::En => &self.en,
            Language::De => &self.de,
            Language::Es => &self.es,
            Language::It => &self.it,
            Language::Jp => &self.jp,
        }
    }
}

struct TypeTranslations {
    names: Vec<TypeNames>,
    // lowercased name in any language -> type
    reverse: HashMap<String, Type>,
}

static TRANSLATIONS: Lazy<TypeTranslations> = Lazy::new(|| {
    let json_str = include_str!("../translations/types.json");
    let mut raw: HashMap<String, TypeNames> =
        serde_json::from_str(json_str).expect("Failed to parse translations/types.json");
    let names: Vec<TypeNames> = Type::ALL
        .iter()
        .map(|ty| {
            raw.remove(ty.as_str()).unwrap_or_else(|| {
                tracing::warn!("No translations for type {}, using English name", ty);
                TypeNames::fallback(*ty)
            })
        })
        .collect();
    let mut reverse = HashMap::new();
    for (ty, entry) in Type::ALL.iter().zip(&names) {
        reverse.insert(ty.as_str().to_string(), *ty);
        for language in Language::ALL {
            reverse.insert(entry.get(language).to_lowercase(), *ty);
        }
    }
    tracing::debug!("Loaded type translations: {} lookup keys", reverse.len());
    TypeTranslations { names, reverse }
});

pub fn translate_type(ty: Type, language: Language) -> &'static str {
    TRANSLATIONS.names[ty.index()].get(language)
}

/// Resolves a type name written in any supported language.
pub fn resolve_type(name: &str) -> Option<Type> {
    TRANSLATIONS
        .reverse
        .get(&name.trim().to_lowercase())
        .copied()
}

pub fn type_emoji(ty: Type) -> &'static str {
    match ty {
        Type::Normal => "⚪",
        Type::Fire => "🔥",
        Type::Water => "💧",
        Type::Electric => "⚡",
        Type::Grass => "🌱",
        Type::Ice => "❄️",
        Type::Fighting => "👊",
        Type::Poison => "☠️",
        Type::Ground => "🏔️",
        Type::Flying => "🕊️",
        Type::Psychic => "🔮",
        Type::Bug => "🐛",
        Type::Rock => "🪨",
        Type::Ghost => "👻",
        Type::Dragon => "🐉",
        Type::Dark => "🌑",
        Type::Steel => "⚙️",
        Type::Fairy => "🧚",
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Label {
    Weaknesses,
    Resistances,
    Immunities,
    Coverage,
    Counters,
    Type,
    Generation,
}

pub fn label(label: Label, language: Language) -> &'static str {
    use Language::*;
    match (label, language) {
        (Label::Weaknesses, Fr) => "Faiblesses",
        (Label::Weaknesses, En) => "Weaknesses",
        (Label::Weaknesses, De) => "Schwächen",
        (Label::Weaknesses, Es) => "Debilidades",
        (Label::Weaknesses, It) => "Debolezze",
        (Label::Weaknesses, Jp) => "弱点",
        (Label::Resistances, Fr) => "Résistances",
        (Label::Resistances, En) => "Resistances",
        (Label::Resistances, De) => "Widerstände",
        (Label::Resistances, Es) => "Resistencias",
        (Label::Resistances, It) => "Resistenze",
        (Label::Resistances, Jp) => "耐性",
        (Label::Immunities, Fr) => "Immunités",
        (Label::Immunities, En) => "Immunities",
        (Label::Immunities, De) => "Immunitäten",
        (Label::Immunities, Es) => "Inmunidades",
        (Label::Immunities, It) => "Immunità",
        (Label::Immunities, Jp) => "無効",
        (Label::Coverage, Fr) => "Super efficace",
        (Label::Coverage, En) => "Super effective",
        (Label::Coverage, De) => "Sehr effektiv",
        (Label::Coverage, Es) => "Super eficaz",
        (Label::Coverage, It) => "Super efficace",
        (Label::Coverage, Jp) => "こうかばつぐん",
        (Label::Counters, Fr) => "Contres",
        (Label::Counters, En) => "Counters",
        (Label::Counters, De) => "Konter",
        (Label::Counters, Es) => "Contras",
        (Label::Counters, It) => "Contromosse",
        (Label::Counters, Jp) => "対策",
        (Label::Type, Fr) | (Label::Type, En) => "Type",
        (Label::Type, De) => "Typ",
        (Label::Type, Es) | (Label::Type, It) => "Tipo",
        (Label::Type, Jp) => "タイプ",
        (Label::Generation, Fr) => "Génération",
        (Label::Generation, En) | (Label::Generation, De) => "Generation",
        (Label::Generation, Es) => "Generación",
        (Label::Generation, It) => "Generazione",
        (Label::Generation, Jp) => "世代",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_type_has_a_distinct_name_per_language() {
        for language in Language::ALL {
            let mut seen = std::collections::HashSet::new();
            for ty in Type::ALL {
                assert!(seen.insert(translate_type(ty, language)));
            }
        }
    }

    #[test]
    fn names_round_trip_through_resolution() {
        for language in Language::ALL {
            for ty in Type::ALL {
                assert_eq!(resolve_type(translate_type(ty, language)), Some(ty));
            }
        }
    }

    #[test]
    fn fallback_capitalizes_identifier() {
        assert_eq!(TypeNames::fallback(Type::Fire).get(Language::Jp), "Fire");
    }

    #[test]
    fn language_codes_parse() {
        assert_eq!("FR".parse::<Language>().unwrap(), Language::Fr);
        assert_eq!("ja".parse::<Language>().unwrap(), Language::Jp);
        assert!("xx".parse::<Language>().is_err());
    }
}
