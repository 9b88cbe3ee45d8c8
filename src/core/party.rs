use std::sync::Arc;

use bevy_ecs::prelude::*;
use serde::Serialize;
use tracing::{debug, info};

use crate::components::creature::{Creature, CreatureId, ElementType};
use crate::components::roster::{PlaceOutcome, Roster, RosterError};
use crate::config::PartyConfig;
use crate::core::ecs::{create_schedule, create_world};
use crate::rules::{assess, Assessment, PersonalityInputs, ValidationError};
use crate::simulation::layout::{Point, PositionMap, Viewport};
use crate::simulation::time::FrameClock;
use crate::systems::animation::{JumpHighlights, JumpKind};
use crate::systems::assessment::{AssessmentBoard, PendingAssessment};
use crate::systems::canvas::{CanvasPhase, LayoutRequest};
use crate::systems::pointer::{
    DragSession, Interaction, InteractionLog, PendingMove, PointerEvent, PointerQueue,
};
use crate::ui::host::{CelebrationEffect, ViewportGeometry};

/// Data snapshot returned to the presentation layer after each frame.
#[derive(Debug, Clone, Serialize)]
pub struct PartySnapshot {
    pub now_ms: u64,
    pub phase: CanvasPhase,
    pub members: Vec<MemberView>,
    pub dragging: Option<CreatureId>,
    pub generating: bool,
    pub assessment: Option<Assessment>,
    pub interactions: Vec<Interaction>,
}

#[derive(Debug, Clone, Serialize)]
pub struct MemberView {
    pub slot: usize,
    pub id: CreatureId,
    pub name: String,
    pub sprite: String,
    pub types: Vec<ElementType>,
    pub total_stats: u32,
    pub position: Option<Point>,
    pub jump: Option<JumpKind>,
}

/// Wrapper around the ECS world and schedule; the single owner of party state.
///
/// Requests made between frames are stamped with the clock of the last frame.
pub struct Party {
    world: World,
    schedule: Schedule,
    geometry: Box<dyn ViewportGeometry>,
    effect: Box<dyn CelebrationEffect>,
}

impl Party {
    pub fn new(
        config: PartyConfig,
        geometry: Box<dyn ViewportGeometry>,
        effect: Box<dyn CelebrationEffect>,
    ) -> Self {
        let mut world = create_world(config);
        let schedule = create_schedule();
        world.insert_resource(Viewport {
            size: geometry.viewport_size(),
            title_bottom: geometry.title_bottom(),
        });

        Self {
            world,
            schedule,
            geometry,
            effect,
        }
    }

    /// Advance to the host's frame timestamp, run the schedule, and return a snapshot.
    pub fn frame(&mut self, now_ms: u64) -> PartySnapshot {
        self.world.resource_mut::<FrameClock>().advance_to(now_ms);
        self.schedule.run(&mut self.world);
        PartySnapshot::capture(&self.world)
    }

    pub fn config(&self) -> &PartyConfig {
        self.world.resource::<PartyConfig>()
    }

    pub fn roster(&self) -> &Roster {
        self.world.resource::<Roster>()
    }

    pub fn positions(&self) -> &PositionMap {
        self.world.resource::<PositionMap>()
    }

    pub fn phase(&self) -> CanvasPhase {
        *self.world.resource::<CanvasPhase>()
    }

    pub fn drag_session(&self) -> &DragSession {
        self.world.resource::<DragSession>()
    }

    pub fn latest_assessment(&self) -> Option<&Assessment> {
        self.world.resource::<AssessmentBoard>().latest.as_ref()
    }

    pub fn is_generating(&self) -> bool {
        self.world.resource::<AssessmentBoard>().is_generating()
    }

    fn now_ms(&self) -> u64 {
        self.world.resource::<FrameClock>().now_ms
    }

    /// Place a creature in the first empty slot. Completing the roster schedules the canvas.
    pub fn add_member(&mut self, creature: Arc<Creature>) -> PlaceOutcome {
        let outcome = self.world.resource_mut::<Roster>().place(creature);
        if outcome.completed() && self.phase() == CanvasPhase::Builder {
            let due_ms = self.now_ms() + self.config().timing.auto_enter_delay_ms;
            info!(due_ms, "roster complete; canvas entry scheduled");
            *self.world.resource_mut::<CanvasPhase>() = CanvasPhase::PendingEntry { due_ms };
        }
        outcome
    }

    /// Empty a slot. The canvas needs a full roster, so this returns to the builder.
    pub fn remove_member(&mut self, slot: usize) -> Result<(), RosterError> {
        self.world.resource_mut::<Roster>().clear(slot)?;
        if self.phase() != CanvasPhase::Builder {
            self.leave_canvas();
        }
        Ok(())
    }

    /// Open the canvas now. Returns false if the roster is not complete.
    pub fn enter_canvas(&mut self) -> bool {
        if !self.roster().is_complete() {
            debug!("canvas entry refused; roster incomplete");
            return false;
        }
        self.refresh_geometry();
        *self.world.resource_mut::<CanvasPhase>() = CanvasPhase::Active;
        self.world.resource_mut::<LayoutRequest>().0 = true;
        info!("party canvas opened");
        true
    }

    /// Back to the builder; positions and any drag in flight are dropped.
    pub fn leave_canvas(&mut self) {
        *self.world.resource_mut::<CanvasPhase>() = CanvasPhase::Builder;
        self.world.resource_mut::<PositionMap>().clear();
        self.world.resource_mut::<DragSession>().0 = None;
        self.world.resource_mut::<PendingMove>().0 = None;
        self.world.resource_mut::<PointerQueue>().0.clear();
        self.world.resource_mut::<JumpHighlights>().clear();
        info!("party canvas closed");
    }

    /// Resize signal from the host. Geometry is re-queried; a new size relayouts the canvas.
    pub fn notify_resize(&mut self) {
        let previous = self.world.resource::<Viewport>().size;
        let current = self.refresh_geometry();
        if current.size != previous && self.phase().is_active() {
            debug!(
                width = current.size.width,
                height = current.size.height,
                "viewport resized; party layout reset"
            );
            self.world.resource_mut::<LayoutRequest>().0 = true;
        }
    }

    fn refresh_geometry(&mut self) -> Viewport {
        let viewport = Viewport {
            size: self.geometry.viewport_size(),
            title_bottom: self.geometry.title_bottom(),
        };
        *self.world.resource_mut::<Viewport>() = viewport;
        viewport
    }

    pub fn pointer_down(&mut self, target: CreatureId, at: Point) {
        self.push_pointer(PointerEvent::Down { target, at });
    }

    /// Press at a canvas point, resolving the member under it. Returns the member hit.
    pub fn pointer_down_at(&mut self, at: Point) -> Option<CreatureId> {
        let sprite_size = self.config().layout.sprite_size;
        let target = self.positions().hit_test(self.roster(), at, sprite_size)?;
        self.pointer_down(target, at);
        Some(target)
    }

    pub fn pointer_move(&mut self, at: Point) {
        self.push_pointer(PointerEvent::Move { at });
    }

    pub fn pointer_up(&mut self, at: Point) {
        self.push_pointer(PointerEvent::Up { at });
    }

    fn push_pointer(&mut self, event: PointerEvent) {
        self.world.resource_mut::<PointerQueue>().0.push(event);
    }

    /// Fire the particle burst once and queue the staggered member jumps.
    /// Only the open canvas can celebrate; returns false otherwise.
    pub fn celebrate(&mut self) -> bool {
        if !self.phase().is_active() {
            debug!("celebration ignored; party canvas is not open");
            return false;
        }
        let config = self.config().clone();
        self.effect.burst(&config.confetti);

        let now = self.now_ms();
        let roster = self.world.resource::<Roster>().clone();
        self.world
            .resource_mut::<JumpHighlights>()
            .celebrate(&roster, now, &config.timing);
        true
    }

    /// Validate and score the party; the result is revealed after the pacing delay.
    ///
    /// A new request replaces one still waiting to be revealed.
    pub fn request_assessment(&mut self, inputs: &PersonalityInputs) -> Result<(), ValidationError> {
        let assessment = assess(self.roster(), inputs)?;
        let ready_at_ms = self.now_ms() + self.config().timing.assessment_delay_ms;
        self.world.resource_mut::<AssessmentBoard>().pending = Some(PendingAssessment {
            ready_at_ms,
            assessment,
        });
        Ok(())
    }
}

impl PartySnapshot {
    pub fn member(&self, id: CreatureId) -> Option<&MemberView> {
        self.members.iter().find(|member| member.id == id)
    }

    fn capture(world: &World) -> Self {
        let now_ms = world.resource::<FrameClock>().now_ms;
        let roster = world.resource::<Roster>();
        let positions = world.resource::<PositionMap>();
        let jumps = world.resource::<JumpHighlights>();
        let board = world.resource::<AssessmentBoard>();

        let members = roster
            .members()
            .map(|(slot, creature)| MemberView {
                slot,
                id: creature.id,
                name: creature
                    .display_name()
                    .map(str::to_string)
                    .unwrap_or_else(|| format!("Creature {}", creature.id)),
                sprite: creature.sprite.clone(),
                types: creature.types.clone(),
                total_stats: creature.total_stats(),
                position: positions.get(creature.id),
                jump: jumps.active(creature.id, now_ms),
            })
            .collect();

        PartySnapshot {
            now_ms,
            phase: *world.resource::<CanvasPhase>(),
            members,
            dragging: world
                .resource::<DragSession>()
                .0
                .filter(|drag| drag.dragging)
                .map(|drag| drag.id),
            generating: board.is_generating(),
            assessment: board.latest.clone(),
            interactions: world.resource::<InteractionLog>().0.clone(),
        }
    }
}
