use crate::components::roster::Roster;
use crate::rules::Assessment;
use crate::simulation::layout::PositionMap;

const STAT_LABELS: [&str; 6] = ["HP", "Atk", "Def", "SpA", "SpD", "Spe"];

/// Plain-text rendering of an assessment for terminals and logs.
pub fn render_assessment_report(roster: &Roster, assessment: &Assessment) -> String {
    let score = &assessment.score;
    let narrative = &assessment.narrative;
    let mut output = String::new();

    output.push_str("=== Team Analysis ===\n");
    output.push_str("Party\n");
    for (slot, creature) in roster.members() {
        let types: Vec<&str> = creature.types.iter().map(|t| t.as_str()).collect();
        output.push_str(&format!(
            "  {}. {} {} [{}] total {}\n",
            slot + 1,
            creature.display_name().unwrap_or("???"),
            creature.id,
            types.join("/"),
            creature.total_stats()
        ));
    }

    output.push_str("\nChampions Spirit\n");
    output.push_str(&format!("  {}\n", narrative.qualities));
    output.push_str(&format!("  {}\n", narrative.user_statement));
    output.push_str("\nTeam Synergy Analysis\n");
    output.push_str(&format!("  {}\n", narrative.team_synergy));

    output.push_str("\nStatistics\n");
    output.push_str(&format!(
        "  Raw Power Score: {:.1} (average total {:.1} / 600)\n",
        score.raw_power,
        score.raw_power / 100.0 * 600.0
    ));
    output.push_str(&format!(
        "  Type Diversity: grade {} ({:.1}), {} unique types\n",
        score.diversity_grade.letter(),
        score.diversity,
        score.unique_types
    ));
    let averages: Vec<String> = STAT_LABELS
        .iter()
        .zip(score.average_stats.as_array())
        .map(|(label, value)| format!("{} {:.1}", label, value))
        .collect();
    output.push_str(&format!("  Averages: {}\n", averages.join(" / ")));
    let distribution: Vec<String> = score
        .type_distribution
        .iter()
        .map(|(element, count)| format!("{} x{}", element, count))
        .collect();
    output.push_str(&format!("  Types: {}\n", distribution.join(", ")));

    output.push_str("\nFinal Assessment\n");
    output.push_str(&format!(
        "  {:.1} - {}\n",
        score.overall,
        assessment.tier.title()
    ));
    output.push_str(&format!("  {}\n", assessment.tier.message()));
    output.push_str("  Suggestions:\n");
    for suggestion in assessment.tier.suggestions() {
        output.push_str(&format!("    - {}\n", suggestion));
    }

    output
}

/// One line per member with its canvas coordinate.
pub fn render_layout(roster: &Roster, positions: &PositionMap) -> String {
    let mut output = String::new();
    for (slot, creature) in roster.members() {
        match positions.get(creature.id) {
            Some(point) => output.push_str(&format!(
                "slot {} {:<12} x={:.1} y={:.1}\n",
                slot + 1,
                creature.display_name().unwrap_or("???"),
                point.x,
                point.y
            )),
            None => output.push_str(&format!(
                "slot {} {:<12} (unplaced)\n",
                slot + 1,
                creature.display_name().unwrap_or("???")
            )),
        }
    }
    output
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::components::creature::{BaseStats, Creature, ElementType};
    use crate::rules::{assess, AstralSign, FavoriteColor, PersonalityInputs, Zodiac};

    #[test]
    fn report_lists_sections_and_tier() {
        let roster = Roster::from_members((1..=6).map(|id| {
            Arc::new(Creature::new(
                id,
                format!("Mon{id}"),
                "",
                vec![ElementType::Psychic],
                BaseStats {
                    hp: 50,
                    attack: 50,
                    defense: 50,
                    special_attack: 50,
                    special_defense: 50,
                    speed: 50,
                },
            ))
        }));
        let inputs = PersonalityInputs::new(Zodiac::Goat, AstralSign::Libra, FavoriteColor::Green);
        let assessment = assess(&roster, &inputs).unwrap();
        let report = render_assessment_report(&roster, &assessment);

        assert!(report.contains("1. Mon1 #1 [psychic] total 300"));
        assert!(report.contains("Raw Power Score: 50.0"));
        assert!(report.contains("grade F (25.0), 1 unique types"));
        // 0.75 * 50 + 0.25 * 25 = 43.75
        assert!(report.contains("43.8 - Solid Team"));
        assert!(report.contains("Types: psychic x6"));
        assert!(report.contains("Averages: HP 50.0 / Atk 50.0 / Def 50.0 / SpA 50.0 / SpD 50.0 / Spe 50.0"));
    }
}
