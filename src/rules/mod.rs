pub mod analysis;
pub mod narrative;
pub mod personality;
pub mod scoring;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::components::roster::Roster;

pub use analysis::{analyze_stats, analyze_types, Coverage, StatAnalysis, StatBalance, TypeAnalysis};
pub use narrative::{generate_narrative, qualities_phrase, NarrativeResult};
pub use personality::{AstralSign, FavoriteColor, PersonalityInputs, Quality, Zodiac};
pub use scoring::{
    overall_score, score_roster, DiversityGrade, ScoreResult, ScoreTier, StatAverages,
};

/// Reasons an assessment request is refused. The caller re-prompts the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("the party needs all six members before it can be assessed")]
    IncompleteRoster,
    #[error("please choose a zodiac sign")]
    MissingZodiac,
    #[error("please choose an astral sign")]
    MissingAstralSign,
    #[error("please choose a favorite color")]
    MissingColor,
}

/// Everything the assessment screens render, computed in one pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assessment {
    pub score: ScoreResult,
    pub narrative: NarrativeResult,
    pub tier: ScoreTier,
}

pub fn validate(roster: &Roster, inputs: &PersonalityInputs) -> Result<(), ValidationError> {
    if inputs.zodiac.is_none() {
        return Err(ValidationError::MissingZodiac);
    }
    if inputs.astral.is_none() {
        return Err(ValidationError::MissingAstralSign);
    }
    if inputs.color.is_none() {
        return Err(ValidationError::MissingColor);
    }
    if !roster.is_complete() {
        return Err(ValidationError::IncompleteRoster);
    }
    Ok(())
}

/// Scores a complete roster against the user's personality picks.
pub fn assess(roster: &Roster, inputs: &PersonalityInputs) -> Result<Assessment, ValidationError> {
    validate(roster, inputs)?;
    let score = score_roster(roster);
    let narrative = generate_narrative(roster, inputs);
    let tier = ScoreTier::from_overall(score.overall);
    Ok(Assessment {
        score,
        narrative,
        tier,
    })
}
