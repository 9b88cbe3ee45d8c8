use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::components::creature::ElementType;
use crate::components::roster::Roster;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Coverage {
    Exceptional,
    Solid,
    Focused,
}

impl Coverage {
    pub fn from_unique(unique: usize) -> Self {
        if unique >= 8 {
            Coverage::Exceptional
        } else if unique >= 5 {
            Coverage::Solid
        } else {
            Coverage::Focused
        }
    }

    pub fn phrase(self) -> &'static str {
        match self {
            Coverage::Exceptional => "exceptional type coverage",
            Coverage::Solid => "solid type diversity",
            Coverage::Focused => "focused type strategy",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeAnalysis {
    /// Most frequent tag; ties go to the tag seen first. `None` only for a tagless roster.
    pub dominant: Option<ElementType>,
    pub unique_count: usize,
    pub coverage: Coverage,
    /// Tag counts in first-appearance order.
    pub distribution: IndexMap<ElementType, u32>,
}

impl TypeAnalysis {
    pub fn dominant_label(&self) -> &'static str {
        self.dominant.map(ElementType::as_str).unwrap_or("balanced")
    }
}

pub fn analyze_types(roster: &Roster) -> TypeAnalysis {
    let mut distribution: IndexMap<ElementType, u32> = IndexMap::new();
    for (_, creature) in roster.members() {
        for element in &creature.types {
            *distribution.entry(*element).or_insert(0) += 1;
        }
    }

    // Strict comparison keeps the earliest tag on ties.
    let mut dominant: Option<(ElementType, u32)> = None;
    for (element, count) in &distribution {
        if dominant.map_or(true, |(_, best)| *count > best) {
            dominant = Some((*element, *count));
        }
    }

    let unique_count = distribution.len();
    TypeAnalysis {
        dominant: dominant.map(|(element, _)| element),
        unique_count,
        coverage: Coverage::from_unique(unique_count),
        distribution,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatBalance {
    Offensive,
    Defensive,
    Balanced,
}

impl StatBalance {
    pub fn label(self) -> &'static str {
        match self {
            StatBalance::Offensive => "offensive",
            StatBalance::Defensive => "defensive",
            StatBalance::Balanced => "balanced",
        }
    }

    pub fn style(self) -> &'static str {
        match self {
            StatBalance::Offensive => "aggressive",
            StatBalance::Defensive => "resilient",
            StatBalance::Balanced => "versatile",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StatAnalysis {
    pub average_offense: f64,
    pub average_defense: f64,
    pub balance: StatBalance,
}

const SKEW_RATIO: f64 = 1.2;

pub fn analyze_stats(roster: &Roster) -> StatAnalysis {
    let count = roster.occupied();
    if count == 0 {
        return StatAnalysis {
            average_offense: 0.0,
            average_defense: 0.0,
            balance: StatBalance::Balanced,
        };
    }

    let (offense, defense) = roster
        .members()
        .fold((0u64, 0u64), |(off, def), (_, creature)| {
            let stats = &creature.stats;
            (
                off + u64::from(stats.attack) + u64::from(stats.special_attack),
                def + u64::from(stats.defense) + u64::from(stats.special_defense),
            )
        });
    let average_offense = offense as f64 / count as f64;
    let average_defense = defense as f64 / count as f64;

    let balance = if average_offense > average_defense * SKEW_RATIO {
        StatBalance::Offensive
    } else if average_defense > average_offense * SKEW_RATIO {
        StatBalance::Defensive
    } else {
        StatBalance::Balanced
    };

    StatAnalysis {
        average_offense,
        average_defense,
        balance,
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::components::creature::{BaseStats, Creature};

    fn mon(id: u32, types: Vec<ElementType>, attack: u32, defense: u32) -> Arc<Creature> {
        Arc::new(Creature::new(
            id,
            format!("Mon{id}"),
            "",
            types,
            BaseStats {
                hp: 50,
                attack,
                defense,
                special_attack: attack,
                special_defense: defense,
                speed: 50,
            },
        ))
    }

    #[test]
    fn dominant_type_ties_break_by_first_appearance() {
        use ElementType::*;
        let roster = Roster::from_members([
            mon(1, vec![Water, Ground], 50, 50),
            mon(2, vec![Ground], 50, 50),
            mon(3, vec![Water], 50, 50),
            mon(4, vec![Fire], 50, 50),
            mon(5, vec![Fire], 50, 50),
            mon(6, vec![Grass], 50, 50),
        ]);
        let analysis = analyze_types(&roster);
        // water, ground and fire all appear twice; water was seen first.
        assert_eq!(analysis.dominant, Some(Water));
        assert_eq!(analysis.unique_count, 4);
        assert_eq!(analysis.coverage, Coverage::Focused);
        let order: Vec<_> = analysis.distribution.keys().copied().collect();
        assert_eq!(order, vec![Water, Ground, Fire, Grass]);
    }

    #[test]
    fn coverage_thresholds() {
        assert_eq!(Coverage::from_unique(8), Coverage::Exceptional);
        assert_eq!(Coverage::from_unique(7), Coverage::Solid);
        assert_eq!(Coverage::from_unique(5), Coverage::Solid);
        assert_eq!(Coverage::from_unique(4), Coverage::Focused);
    }

    #[test]
    fn tagless_roster_reports_balanced_dominant() {
        let roster = Roster::from_members((1..=6).map(|id| mon(id, vec![], 50, 50)));
        let analysis = analyze_types(&roster);
        assert_eq!(analysis.dominant, None);
        assert_eq!(analysis.dominant_label(), "balanced");
        assert_eq!(analysis.unique_count, 0);
    }

    #[test]
    fn stat_balance_requires_a_twenty_percent_skew() {
        let offensive = Roster::from_members((1..=6).map(|id| mon(id, vec![], 121, 100)));
        assert_eq!(analyze_stats(&offensive).balance, StatBalance::Offensive);

        let edge = Roster::from_members((1..=6).map(|id| mon(id, vec![], 119, 100)));
        assert_eq!(analyze_stats(&edge).balance, StatBalance::Balanced);

        let defensive = Roster::from_members((1..=6).map(|id| mon(id, vec![], 50, 70)));
        let analysis = analyze_stats(&defensive);
        assert_eq!(analysis.balance, StatBalance::Defensive);
        assert_eq!(analysis.balance.style(), "resilient");
        assert_eq!(analysis.average_defense, 140.0);
    }
}
