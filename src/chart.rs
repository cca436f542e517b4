//! The static type chart.
//!
//! Each attacking type lists the defenders it hits for double damage, the
//! defenders that resist it, and the defenders immune to it. Everything else
//! is neutral.

use crate::types::Type::{self, *};
use once_cell::sync::Lazy;

struct Row {
    attacker: Type,
    double: &'static [Type],
    half: &'static [Type],
    zero: &'static [Type],
}

const ROWS: [Row; Type::COUNT] = [
    Row {
        attacker: Normal,
        double: &[],
        half: &[Rock, Steel],
        zero: &[Ghost],
    },
    Row {
        attacker: Fire,
        double: &[Grass, Ice, Bug, Steel],
        half: &[Fire, Water, Rock, Dragon],
        zero: &[],
    },
    Row {
        attacker: Water,
        double: &[Fire, Ground, Rock],
        half: &[Water, Grass, Dragon],
        zero: &[],
    },
    Row {
        attacker: Electric,
        double: &[Water, Flying],
        half: &[Electric, Grass, Dragon],
        zero: &[Ground],
    },
    Row {
        attacker: Grass,
        double: &[Water, Ground, Rock],
        half: &[Fire, Grass, Poison, Flying, Bug, Dragon, Steel],
        zero: &[],
    },
    Row {
        attacker: Ice,
        double: &[Grass, Ground, Flying, Dragon],
        half: &[Fire, Water, Ice, Steel],
        zero: &[],
    },
    Row {
        attacker: Fighting,
        double: &[Normal, Ice, Rock, Dark, Steel],
        half: &[Poison, Flying, Psychic, Bug, Fairy],
        zero: &[Ghost],
    },
    Row {
        attacker: Poison,
        double: &[Grass, Fairy],
        half: &[Poison, Ground, Rock, Ghost],
        zero: &[Steel],
    },
    Row {
        attacker: Ground,
        double: &[Fire, Electric, Poison, Rock, Steel],
        half: &[Grass, Bug],
        zero: &[Flying],
    },
    Row {
        attacker: Flying,
        double: &[Grass, Fighting, Bug],
        half: &[Electric, Rock, Steel],
        zero: &[],
    },
    Row {
        attacker: Psychic,
        double: &[Fighting, Poison],
        half: &[Psychic, Steel],
        zero: &[Dark],
    },
    Row {
        attacker: Bug,
        double: &[Grass, Psychic, Dark],
        half: &[Fire, Fighting, Poison, Flying, Ghost, Steel, Fairy],
        zero: &[],
    },
    Row {
        attacker: Rock,
        double: &[Fire, Ice, Flying, Bug],
        half: &[Fighting, Ground, Steel],
        zero: &[],
    },
    Row {
        attacker: Ghost,
        double: &[Psychic, Ghost],
        half: &[Dark],
        zero: &[Normal],
    },
    Row {
        attacker: Dragon,
        double: &[Dragon],
        half: &[Steel],
        zero: &[Fairy],
    },
    Row {
        attacker: Dark,
        double: &[Psychic, Ghost],
        half: &[Fighting, Dark, Fairy],
        zero: &[],
    },
    Row {
        attacker: Steel,
        double: &[Ice, Rock, Fairy],
        half: &[Fire, Water, Electric, Steel],
        zero: &[],
    },
    Row {
        attacker: Fairy,
        double: &[Fighting, Dragon, Dark],
        half: &[Fire, Poison, Steel],
        zero: &[],
    },
];

static CHART: Lazy<TypeChart> = Lazy::new(|| {
    let chart = TypeChart::from_rows(&ROWS);
    tracing::debug!(
        "Type chart ready: {} non-neutral pairs",
        chart.cells.iter().flatten().filter(|m| **m != 1.0).count()
    );
    chart
});

/// Immutable attacker x defender multiplier matrix.
#[derive(Debug)]
pub struct TypeChart {
    cells: [[f32; Type::COUNT]; Type::COUNT],
}

impl TypeChart {
    fn from_rows(rows: &[Row]) -> Self {
        let mut cells = [[1.0; Type::COUNT]; Type::COUNT];
        for row in rows {
            let line = &mut cells[row.attacker.index()];
            for defender in row.double {
                line[defender.index()] = 2.0;
            }
            for defender in row.half {
                line[defender.index()] = 0.5;
            }
            for defender in row.zero {
                line[defender.index()] = 0.0;
            }
        }
        TypeChart { cells }
    }

    pub fn global() -> &'static TypeChart {
        &CHART
    }

    /// Multiplier for a single attacker/defender pair: 0, 0.5, 1 or 2.
    pub fn multiplier(&self, attacker: Type, defender: Type) -> f32 {
        self.cells[attacker.index()][defender.index()]
    }

    /// Multipliers of `attacker` against every defender, in chart order.
    pub fn row(&self, attacker: Type) -> &[f32; Type::COUNT] {
        &self.cells[attacker.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn rows_cover_every_attacker_once_in_order() {
        for (row, expected) in ROWS.iter().zip(Type::ALL) {
            assert_eq!(row.attacker, expected);
        }
    }

    #[test]
    fn no_defender_is_listed_twice_in_a_row() {
        for row in &ROWS {
            let mut seen = HashSet::new();
            for defender in row.double.iter().chain(row.half).chain(row.zero) {
                assert!(
                    seen.insert(*defender),
                    "{} lists {} more than once",
                    row.attacker,
                    defender
                );
            }
        }
    }

    #[test]
    fn unlisted_pairs_are_neutral() {
        let chart = TypeChart::global();
        assert_eq!(chart.multiplier(Normal, Normal), 1.0);
        assert_eq!(chart.multiplier(Dragon, Fire), 1.0);
        assert_eq!(chart.multiplier(Fairy, Ghost), 1.0);
    }

    #[test]
    fn chart_has_expected_shape() {
        let cells: Vec<f32> = Type::ALL
            .iter()
            .flat_map(|a| TypeChart::global().row(*a).to_vec())
            .collect();
        assert_eq!(cells.iter().filter(|m| **m == 2.0).count(), 51);
        assert_eq!(cells.iter().filter(|m| **m == 0.5).count(), 61);
        assert_eq!(cells.iter().filter(|m| **m == 0.0).count(), 8);
    }
}
