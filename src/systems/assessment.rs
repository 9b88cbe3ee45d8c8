use bevy_ecs::prelude::*;
use tracing::info;

use crate::rules::Assessment;
use crate::simulation::time::FrameClock;

#[derive(Debug, Clone)]
pub struct PendingAssessment {
    pub ready_at_ms: u64,
    pub assessment: Assessment,
}

/// Holds the computed assessment until its reveal time, then the revealed one.
#[derive(Resource, Debug, Default)]
pub struct AssessmentBoard {
    pub pending: Option<PendingAssessment>,
    pub latest: Option<Assessment>,
}

impl AssessmentBoard {
    pub fn is_generating(&self) -> bool {
        self.pending.is_some()
    }
}

/// System: reveals a pending assessment once its pacing delay has elapsed.
pub fn assessment_reveal_system(clock: Res<FrameClock>, mut board: ResMut<AssessmentBoard>) {
    let due = board
        .pending
        .as_ref()
        .map_or(false, |pending| clock.now_ms >= pending.ready_at_ms);
    if !due {
        return;
    }
    if let Some(pending) = board.pending.take() {
        info!(
            overall = pending.assessment.score.overall,
            grade = %pending.assessment.score.diversity_grade.letter(),
            "party assessment ready"
        );
        board.latest = Some(pending.assessment);
    }
}
