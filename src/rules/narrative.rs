use serde::{Deserialize, Serialize};

use crate::components::roster::{Roster, ROSTER_SIZE};
use crate::rules::analysis::{analyze_stats, analyze_types, StatAnalysis, TypeAnalysis};
use crate::rules::personality::{PersonalityInputs, Quality};

const NO_QUALITIES: &str = "unique potential";

/// Stand-ins used when a slot has no usable display name.
const ORDINAL_FALLBACKS: [&str; ROSTER_SIZE] = [
    "Your first companion",
    "your second ally",
    "your third partner",
    "your fourth teammate",
    "Your fifth member",
    "your final addition",
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NarrativeResult {
    pub qualities: String,
    pub user_statement: String,
    pub team_synergy: String,
    pub type_analysis: TypeAnalysis,
    pub stat_analysis: StatAnalysis,
}

/// Comma-joined quality phrases, e.g. "bold courage, radiant leadership, pure clarity".
pub fn qualities_phrase(qualities: &[Quality]) -> String {
    if qualities.is_empty() {
        return NO_QUALITIES.to_string();
    }
    qualities
        .iter()
        .map(|quality| quality.phrase())
        .collect::<Vec<_>>()
        .join(", ")
}

pub fn generate_narrative(roster: &Roster, inputs: &PersonalityInputs) -> NarrativeResult {
    let qualities = inputs.qualities();
    let phrase = qualities_phrase(&qualities);
    let descriptions = if qualities.is_empty() {
        NO_QUALITIES.to_string()
    } else {
        qualities
            .iter()
            .map(|quality| quality.description().unwrap_or(quality.phrase()))
            .collect::<Vec<_>>()
            .join(" ")
    };

    let type_analysis = analyze_types(roster);
    let stat_analysis = analyze_stats(roster);

    // Occupied slots are numbered first; a blank name keeps its position and takes the ordinal.
    let members: Vec<_> = roster.members().map(|(_, creature)| creature).collect();
    let n: [&str; ROSTER_SIZE] = std::array::from_fn(|index| {
        members
            .get(index)
            .and_then(|creature| creature.display_name())
            .unwrap_or(ORDINAL_FALLBACKS[index])
    });

    let user_statement = format!(
        "Young Champion, your journey is illuminated by {phrase}. {descriptions} These qualities are not just traits—they are the very essence of your path, guiding each decision and shaping every victory."
    );

    let team_synergy = format!(
        "Your assembled team tells a story of strategic brilliance. {} stands as your foundation, {} brings {} energy, while {} and {} create a {} dynamic. {} and {} complete the symphony, their {} ensuring no opponent can find an easy weakness. Together, they form more than a team—they are a testament to your vision.",
        n[0],
        n[1],
        type_analysis.dominant_label(),
        n[2],
        n[3],
        stat_analysis.balance.label(),
        n[4],
        n[5],
        type_analysis.coverage.phrase(),
    );

    NarrativeResult {
        qualities: format!("The {phrase}"),
        user_statement,
        team_synergy,
        type_analysis,
        stat_analysis,
    }
}
