use bevy_ecs::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::components::creature::CreatureId;
use crate::config::PartyConfig;
use crate::simulation::layout::{Point, PositionMap};
use crate::simulation::time::FrameClock;
use crate::systems::animation::JumpHighlights;
use crate::systems::canvas::CanvasPhase;

/// Raw pointer input, queued between frames in arrival order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    /// Press over a party member. The host resolves which member was hit.
    Down { target: CreatureId, at: Point },
    Move { at: Point },
    Up { at: Point },
}

/// Resource storing the pointer events for the next frame.
#[derive(Resource, Default, Debug)]
pub struct PointerQueue(pub Vec<PointerEvent>);

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ActiveDrag {
    pub id: CreatureId,
    /// Pointer position minus the member's top-left at press time.
    pub grab_offset: Point,
    /// Set by the first move after the press; separates drags from clicks.
    pub dragging: bool,
}

/// The single direct-manipulation session, if any.
#[derive(Resource, Default, Debug)]
pub struct DragSession(pub Option<ActiveDrag>);

impl DragSession {
    pub fn active_id(&self) -> Option<CreatureId> {
        self.0.map(|drag| drag.id)
    }

    pub fn is_dragging(&self) -> bool {
        self.0.map_or(false, |drag| drag.dragging)
    }
}

/// Latest drag target position not yet written to the position map.
#[derive(Resource, Default, Debug)]
pub struct PendingMove(pub Option<(CreatureId, Point)>);

/// What a press/release pair amounted to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Interaction {
    Clicked(CreatureId),
    Dropped(CreatureId),
}

/// Interactions resolved during the last frame.
#[derive(Resource, Default, Debug)]
pub struct InteractionLog(pub Vec<Interaction>);

/// System: runs queued pointer events through the drag state machine.
pub fn pointer_intake_system(
    mut queue: ResMut<PointerQueue>,
    mut session: ResMut<DragSession>,
    mut pending: ResMut<PendingMove>,
    mut positions: ResMut<PositionMap>,
    mut jumps: ResMut<JumpHighlights>,
    mut log: ResMut<InteractionLog>,
    phase: Res<CanvasPhase>,
    clock: Res<FrameClock>,
    config: Res<PartyConfig>,
) {
    log.0.clear();
    let events = std::mem::take(&mut queue.0);

    if !phase.is_active() {
        if !events.is_empty() {
            debug!(count = events.len(), "pointer events dropped outside the canvas");
        }
        return;
    }

    for event in events {
        match event {
            PointerEvent::Down { target, at } => {
                if let Some(active) = session.0 {
                    debug!(held = %active.id, pressed = %target, "second press ignored during drag");
                    continue;
                }
                let Some(top_left) = positions.get(target) else {
                    debug!(id = %target, "press on member without a position ignored");
                    continue;
                };
                session.0 = Some(ActiveDrag {
                    id: target,
                    grab_offset: at - top_left,
                    dragging: false,
                });
            }
            PointerEvent::Move { at } => {
                let Some(active) = session.0.as_mut() else {
                    continue;
                };
                active.dragging = true;
                // Only the newest target survives until the next commit.
                pending.0 = Some((active.id, at - active.grab_offset));
            }
            PointerEvent::Up { .. } => {
                let Some(active) = session.0.take() else {
                    continue;
                };
                if active.dragging {
                    if let Some((id, point)) = pending.0.take() {
                        positions.update(id, point);
                    }
                    log.0.push(Interaction::Dropped(active.id));
                } else {
                    jumps.click(active.id, clock.now_ms, &config.timing);
                    log.0.push(Interaction::Clicked(active.id));
                }
            }
        }
    }
}

/// System: writes the coalesced drag position once per frame.
pub fn drag_commit_system(
    mut pending: ResMut<PendingMove>,
    session: Res<DragSession>,
    mut positions: ResMut<PositionMap>,
) {
    let Some((id, point)) = pending.0.take() else {
        return;
    };
    if session.active_id() != Some(id) {
        return;
    }
    if !positions.update(id, point) {
        debug!(id = %id, "drag target has no position entry");
    }
}
