use bevy_ecs::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::components::roster::Roster;
use crate::config::PartyConfig;
use crate::simulation::layout::{compute_initial_positions, PositionMap, Viewport};
use crate::simulation::time::FrameClock;
use crate::systems::pointer::PendingMove;

/// Which view the party is in.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CanvasPhase {
    /// Picking members from the catalog.
    #[default]
    Builder,
    /// Roster just completed; the canvas opens at `due_ms`.
    PendingEntry { due_ms: u64 },
    /// Members are on the open canvas.
    Active,
}

impl CanvasPhase {
    pub fn is_active(self) -> bool {
        matches!(self, CanvasPhase::Active)
    }
}

/// Set when the position map must be rebuilt from scratch this frame.
#[derive(Resource, Debug, Default)]
pub struct LayoutRequest(pub bool);

/// System: opens the canvas once a scheduled entry comes due.
pub fn canvas_entry_system(
    clock: Res<FrameClock>,
    roster: Res<Roster>,
    mut phase: ResMut<CanvasPhase>,
    mut request: ResMut<LayoutRequest>,
) {
    let CanvasPhase::PendingEntry { due_ms } = *phase else {
        return;
    };
    if clock.now_ms < due_ms {
        return;
    }
    if roster.is_complete() {
        info!("party canvas opened");
        *phase = CanvasPhase::Active;
        request.0 = true;
    } else {
        debug!("scheduled canvas entry cancelled; roster no longer complete");
        *phase = CanvasPhase::Builder;
    }
}

/// System: recomputes the initial arrangement, discarding manual repositioning.
pub fn layout_system(
    mut request: ResMut<LayoutRequest>,
    phase: Res<CanvasPhase>,
    roster: Res<Roster>,
    viewport: Res<Viewport>,
    config: Res<PartyConfig>,
    mut positions: ResMut<PositionMap>,
    mut pending: ResMut<PendingMove>,
) {
    if !std::mem::take(&mut request.0) {
        return;
    }
    if !phase.is_active() || !roster.is_complete() {
        return;
    }
    *positions = compute_initial_positions(&roster, &viewport, &config.layout);
    pending.0 = None;
}
