use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::components::creature::ElementType;
use crate::components::roster::Roster;
use crate::rules::analysis::analyze_types;

/// Average stat total that maps to an RPS of exactly 100.
pub const RPS_BASELINE: f64 = 600.0;
pub const RPS_WEIGHT: f64 = 0.75;
pub const DS_WEIGHT: f64 = 0.25;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum DiversityGrade {
    A,
    B,
    C,
    D,
    E,
    F,
}

impl DiversityGrade {
    pub fn from_unique(unique: usize) -> Self {
        if unique >= 10 {
            DiversityGrade::A
        } else if unique >= 8 {
            DiversityGrade::B
        } else if unique >= 6 {
            DiversityGrade::C
        } else if unique >= 4 {
            DiversityGrade::D
        } else if unique >= 2 {
            DiversityGrade::E
        } else {
            DiversityGrade::F
        }
    }

    /// Fixed diversity score for the bucket.
    pub fn score(self) -> f64 {
        match self {
            DiversityGrade::A => 100.0,
            DiversityGrade::B => 85.0,
            DiversityGrade::C => 70.0,
            DiversityGrade::D => 55.0,
            DiversityGrade::E => 40.0,
            DiversityGrade::F => 25.0,
        }
    }

    pub fn letter(self) -> char {
        match self {
            DiversityGrade::A => 'A',
            DiversityGrade::B => 'B',
            DiversityGrade::C => 'C',
            DiversityGrade::D => 'D',
            DiversityGrade::E => 'E',
            DiversityGrade::F => 'F',
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct StatAverages {
    pub hp: f64,
    pub attack: f64,
    pub defense: f64,
    pub special_attack: f64,
    pub special_defense: f64,
    pub speed: f64,
}

impl StatAverages {
    /// Chart order: hp, attack, defense, sp. atk, sp. def, speed.
    pub fn as_array(&self) -> [f64; 6] {
        [
            self.hp,
            self.attack,
            self.defense,
            self.special_attack,
            self.special_defense,
            self.speed,
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreResult {
    pub raw_power: f64,
    pub unique_types: usize,
    pub diversity_grade: DiversityGrade,
    pub diversity: f64,
    pub overall: f64,
    pub average_stats: StatAverages,
    pub type_distribution: IndexMap<ElementType, u32>,
}

pub fn overall_score(raw_power: f64, diversity: f64) -> f64 {
    RPS_WEIGHT * raw_power + DS_WEIGHT * diversity
}

/// Scores whatever members the roster holds. Callers validate completeness first.
pub fn score_roster(roster: &Roster) -> ScoreResult {
    let types = analyze_types(roster);
    let count = roster.occupied().max(1) as f64;

    // Summed in u64 so the stat total is exact for any catalog values.
    let mut totals = [0u64; 7];
    for (_, creature) in roster.members() {
        for (index, value) in creature.stats.as_array().into_iter().enumerate() {
            totals[index] += u64::from(value);
            totals[6] += u64::from(value);
        }
    }
    let avg = |index: usize| totals[index] as f64 / count;

    let raw_power = avg(6) / RPS_BASELINE * 100.0;
    let diversity_grade = DiversityGrade::from_unique(types.unique_count);
    let diversity = diversity_grade.score();

    ScoreResult {
        raw_power,
        unique_types: types.unique_count,
        diversity_grade,
        diversity,
        overall: overall_score(raw_power, diversity),
        average_stats: StatAverages {
            hp: avg(0),
            attack: avg(1),
            defense: avg(2),
            special_attack: avg(3),
            special_defense: avg(4),
            speed: avg(5),
        },
        type_distribution: types.distribution,
    }
}

/// Presentation band for the overall score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScoreTier {
    Rookie,
    Solid,
    Elite,
}

impl ScoreTier {
    pub fn from_overall(overall: f64) -> Self {
        if overall < 40.0 {
            ScoreTier::Rookie
        } else if overall < 70.0 {
            ScoreTier::Solid
        } else {
            ScoreTier::Elite
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            ScoreTier::Rookie => "Rookie Team",
            ScoreTier::Solid => "Solid Team",
            ScoreTier::Elite => "Elite Team",
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            ScoreTier::Rookie => "Your team shows promise, but statistical power is currently below competitive standards. The type coverage is thin, leaving significant vulnerabilities that opponents could exploit. Consider diversifying your type selection and incorporating Pokémon with higher base stat totals to create a more formidable foundation. Every champion starts somewhere, and with strategic adjustments, your team can evolve into something truly remarkable.",
            ScoreTier::Solid => "You've built a respectable foundation that demonstrates solid understanding of team composition. Your statistical averages are balanced, and type diversity shows thoughtful consideration. However, there's room to push beyond good into greatness. Adding a bit more statistical muscle or expanding type variety could elevate your team from solid to exceptional. The framework is there—now it's time to refine and perfect.",
            ScoreTier::Elite => "Congratulations! You've assembled a team worthy of the highest competitive arenas. Your statistical prowess is exceptional, and your type diversity creates a nearly impenetrable defensive and offensive matrix. This team demonstrates master-level understanding of Pokémon synergy, stat optimization, and strategic coverage. You've created something that can stand toe-to-toe with the best trainers in the world. The path to victory is clear—now go claim your glory!",
        }
    }

    pub fn suggestions(self) -> [&'static str; 4] {
        match self {
            ScoreTier::Rookie => [
                "Focus on adding Pokémon with base stat totals above 500",
                "Aim for at least 6-8 different types across your team",
                "Balance offensive and defensive capabilities",
                "Consider legendary or pseudo-legendary Pokémon for power boosts",
            ],
            ScoreTier::Solid => [
                "Consider replacing lower-stat Pokémon with higher-tier options",
                "Expand type coverage to 8+ unique types",
                "Optimize stat distribution for your battle strategy",
                "Experiment with different type combinations for better synergy",
            ],
            ScoreTier::Elite => [
                "Your team is ready for competitive play",
                "Consider fine-tuning move sets for maximum synergy",
                "Experiment with different battle strategies",
                "Share your team composition with others to inspire",
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use proptest::prelude::*;

    use super::*;
    use crate::components::creature::{BaseStats, Creature};

    fn flat(id: u32, per_stat: u32, types: Vec<ElementType>) -> Arc<Creature> {
        Arc::new(Creature::new(
            id,
            format!("Mon{id}"),
            "",
            types,
            BaseStats {
                hp: per_stat,
                attack: per_stat,
                defense: per_stat,
                special_attack: per_stat,
                special_defense: per_stat,
                speed: per_stat,
            },
        ))
    }

    #[test]
    fn rps_is_exactly_one_hundred_at_baseline() {
        let roster = Roster::from_members((1..=6).map(|id| flat(id, 100, vec![ElementType::Fire])));
        let score = score_roster(&roster);
        assert_eq!(score.raw_power, 100.0);
        assert_eq!(score.average_stats.speed, 100.0);
    }

    #[test]
    fn huge_catalog_stats_do_not_overflow() {
        let roster = Roster::from_members((1..=6).map(|id| flat(id, u32::MAX, vec![ElementType::Steel])));
        let score = score_roster(&roster);
        let expected = 6.0 * f64::from(u32::MAX) / RPS_BASELINE * 100.0;
        assert!((score.raw_power - expected).abs() / expected < 1e-12);
        assert_eq!(score.average_stats.hp, f64::from(u32::MAX));
    }

    #[test]
    fn rps_is_not_clamped() {
        let roster = Roster::from_members((1..=6).map(|id| flat(id, 120, vec![ElementType::Dragon])));
        assert_eq!(score_roster(&roster).raw_power, 120.0);
    }

    #[test]
    fn overall_weights_power_and_diversity() {
        assert_eq!(overall_score(80.0, 70.0), 77.5);
        assert_eq!(overall_score(100.0, 100.0), 100.0);
    }

    #[test]
    fn grade_boundaries() {
        assert_eq!(DiversityGrade::from_unique(10), DiversityGrade::A);
        assert_eq!(DiversityGrade::from_unique(9), DiversityGrade::B);
        assert_eq!(DiversityGrade::from_unique(9).score(), 85.0);
        assert_eq!(DiversityGrade::from_unique(6).score(), DiversityGrade::from_unique(7).score());
        assert_eq!(DiversityGrade::from_unique(2), DiversityGrade::E);
        assert_eq!(DiversityGrade::from_unique(1), DiversityGrade::F);
        assert_eq!(DiversityGrade::from_unique(0).score(), 25.0);
    }

    #[test]
    fn distribution_counts_every_tag() {
        use ElementType::*;
        let roster = Roster::from_members([
            flat(1, 80, vec![Grass, Poison]),
            flat(2, 80, vec![Fire]),
            flat(3, 80, vec![Water]),
            flat(4, 80, vec![Electric]),
            flat(5, 80, vec![Normal, Flying]),
            flat(6, 80, vec![Poison]),
        ]);
        let score = score_roster(&roster);
        assert_eq!(score.unique_types, 7);
        assert_eq!(score.diversity_grade, DiversityGrade::C);
        assert_eq!(score.type_distribution.get(&Poison), Some(&2));
        assert_eq!(score.type_distribution.values().sum::<u32>(), 8);
        assert_eq!(score.raw_power, 80.0);
        // 0.75 * 80 + 0.25 * 70
        assert_eq!(score.overall, 77.5);
    }

    #[test]
    fn tiers_split_at_forty_and_seventy() {
        assert_eq!(ScoreTier::from_overall(39.9), ScoreTier::Rookie);
        assert_eq!(ScoreTier::from_overall(40.0), ScoreTier::Solid);
        assert_eq!(ScoreTier::from_overall(69.9), ScoreTier::Solid);
        assert_eq!(ScoreTier::from_overall(70.0), ScoreTier::Elite);
        assert_eq!(ScoreTier::Elite.title(), "Elite Team");
    }

    fn arb_creature() -> impl Strategy<Value = Creature> {
        (
            1u32..1026,
            prop::collection::vec(prop::sample::select(ElementType::ALL.to_vec()), 1..=2),
            prop::array::uniform6(1u32..256),
        )
            .prop_map(|(id, types, s)| {
                Creature::new(
                    id,
                    "Arb",
                    "",
                    types,
                    BaseStats {
                        hp: s[0],
                        attack: s[1],
                        defense: s[2],
                        special_attack: s[3],
                        special_defense: s[4],
                        speed: s[5],
                    },
                )
            })
    }

    proptest! {
        #[test]
        fn complete_rosters_score_within_contract(
            members in prop::collection::vec(arb_creature(), 6)
        ) {
            let expected_avg = members.iter().map(|c| c.total_stats() as f64).sum::<f64>() / 6.0;
            let roster = Roster::from_members(members.into_iter().map(Arc::new));
            let score = score_roster(&roster);

            prop_assert!([25.0, 40.0, 55.0, 70.0, 85.0, 100.0].contains(&score.diversity));
            prop_assert!((score.raw_power - 100.0 * expected_avg / 600.0).abs() < 1e-9);
            prop_assert!((score.overall - (0.75 * score.raw_power + 0.25 * score.diversity)).abs() < 1e-9);
            prop_assert!(score.unique_types <= 12);
            prop_assert_eq!(score_roster(&roster), score);
        }
    }
}
