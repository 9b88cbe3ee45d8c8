use bevy_ecs::prelude::*;
use bevy_ecs::schedule::{ExecutorKind, SystemSet};

use crate::components::roster::Roster;
use crate::config::PartyConfig;
use crate::simulation::layout::{PositionMap, Viewport};
use crate::simulation::time::FrameClock;
use crate::systems::animation::{jump_expiry_system, JumpHighlights};
use crate::systems::assessment::{assessment_reveal_system, AssessmentBoard};
use crate::systems::canvas::{canvas_entry_system, layout_system, CanvasPhase, LayoutRequest};
use crate::systems::pointer::{
    drag_commit_system, pointer_intake_system, DragSession, InteractionLog, PendingMove,
    PointerQueue,
};

/// Canonical frame ordering.
#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub enum FrameSet {
    Intake,
    Layout,
    Animation,
}

/// Build the ECS world with baseline resources.
pub fn create_world(config: PartyConfig) -> World {
    let mut world = World::new();
    world.insert_resource(config);
    world.insert_resource(FrameClock::default());
    world.insert_resource(Roster::default());
    world.insert_resource(CanvasPhase::default());
    world.insert_resource(Viewport::default());
    world.insert_resource(LayoutRequest::default());
    world.insert_resource(PositionMap::default());
    world.insert_resource(PointerQueue::default());
    world.insert_resource(DragSession::default());
    world.insert_resource(PendingMove::default());
    world.insert_resource(InteractionLog::default());
    world.insert_resource(JumpHighlights::default());
    world.insert_resource(AssessmentBoard::default());
    world
}

/// Build the per-frame schedule in the canonical order.
pub fn create_schedule() -> Schedule {
    let mut schedule = Schedule::default();
    // All party state has a single writer: the event loop driving `Party::frame`.
    schedule.set_executor_kind(ExecutorKind::SingleThreaded);

    schedule.configure_sets((FrameSet::Intake, FrameSet::Layout, FrameSet::Animation).chain());

    schedule.add_systems((
        (pointer_intake_system, drag_commit_system)
            .chain()
            .in_set(FrameSet::Intake),
        (canvas_entry_system, layout_system)
            .chain()
            .in_set(FrameSet::Layout),
        (jump_expiry_system, assessment_reveal_system).in_set(FrameSet::Animation),
    ));

    schedule
}
