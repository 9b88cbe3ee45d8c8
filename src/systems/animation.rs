use bevy_ecs::prelude::*;
use serde::{Deserialize, Serialize};

use crate::components::creature::CreatureId;
use crate::components::roster::Roster;
use crate::config::TimingConfig;
use crate::simulation::time::FrameClock;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum JumpKind {
    /// Short hop after a click.
    Click,
    /// Longer hop from the celebrate sequence.
    Celebration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Jump {
    pub id: CreatureId,
    pub kind: JumpKind,
    pub starts_at_ms: u64,
    pub ends_at_ms: u64,
}

impl Jump {
    fn is_active(&self, now_ms: u64) -> bool {
        self.starts_at_ms <= now_ms && now_ms < self.ends_at_ms
    }
}

/// Scheduled and running jump highlights, one timeline per member.
#[derive(Resource, Debug, Default)]
pub struct JumpHighlights(pub Vec<Jump>);

impl JumpHighlights {
    pub fn click(&mut self, id: CreatureId, now_ms: u64, timing: &TimingConfig) {
        self.0.retain(|jump| !(jump.id == id && jump.is_active(now_ms)));
        self.0.push(Jump {
            id,
            kind: JumpKind::Click,
            starts_at_ms: now_ms,
            ends_at_ms: now_ms + timing.click_jump_ms,
        });
    }

    /// Queues one jump per occupied slot, staggered by slot index.
    pub fn celebrate(&mut self, roster: &Roster, now_ms: u64, timing: &TimingConfig) {
        for (index, creature) in roster.members() {
            let starts_at_ms = now_ms + index as u64 * timing.celebration_stagger_ms;
            self.0.push(Jump {
                id: creature.id,
                kind: JumpKind::Celebration,
                starts_at_ms,
                ends_at_ms: starts_at_ms + timing.celebration_jump_ms,
            });
        }
    }

    /// The jump currently playing for `id`; the most recently started one wins.
    pub fn active(&self, id: CreatureId, now_ms: u64) -> Option<JumpKind> {
        self.0
            .iter()
            .filter(|jump| jump.id == id && jump.is_active(now_ms))
            .max_by_key(|jump| jump.starts_at_ms)
            .map(|jump| jump.kind)
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }
}

/// System: drops highlights whose window has closed.
pub fn jump_expiry_system(clock: Res<FrameClock>, mut jumps: ResMut<JumpHighlights>) {
    let now = clock.now_ms;
    jumps.0.retain(|jump| jump.ends_at_ms > now);
}
