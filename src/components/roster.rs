use std::sync::Arc;

use bevy_ecs::prelude::*;
use thiserror::Error;
use tracing::debug;

use crate::components::creature::{Creature, CreatureId};

pub const ROSTER_SIZE: usize = 6;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RosterError {
    #[error("slot {0} is out of range (roster has 6 slots)")]
    SlotOutOfRange(usize),
}

/// Result of placing a creature into the roster.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaceOutcome {
    /// Placed into `slot`; `completed` is set only on the placement that fills the last slot.
    Placed { slot: usize, completed: bool },
    /// Every slot was already occupied; nothing changed.
    Full,
}

impl PlaceOutcome {
    pub fn completed(self) -> bool {
        matches!(self, PlaceOutcome::Placed { completed: true, .. })
    }
}

/// The six-slot party. Single source of truth for who is on the team.
///
/// Duplicate ids are not rejected here; the builder UI is expected to stop
/// offering a creature once it is placed.
#[derive(Resource, Debug, Clone, Default, PartialEq)]
pub struct Roster {
    slots: [Option<Arc<Creature>>; ROSTER_SIZE],
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a roster from up to six creatures, filling slots in order.
    pub fn from_members<I>(members: I) -> Self
    where
        I: IntoIterator<Item = Arc<Creature>>,
    {
        let mut roster = Self::new();
        for creature in members {
            roster.place(creature);
        }
        roster
    }

    pub fn place(&mut self, creature: Arc<Creature>) -> PlaceOutcome {
        let Some(slot) = self.slots.iter().position(Option::is_none) else {
            debug!(id = %creature.id, "roster full; placement ignored");
            return PlaceOutcome::Full;
        };

        debug!(id = %creature.id, slot, "creature placed");
        self.slots[slot] = Some(creature);
        // An empty slot existed before this call, so completeness here is always a transition.
        PlaceOutcome::Placed {
            slot,
            completed: self.is_complete(),
        }
    }

    pub fn clear(&mut self, slot: usize) -> Result<(), RosterError> {
        let entry = self
            .slots
            .get_mut(slot)
            .ok_or(RosterError::SlotOutOfRange(slot))?;
        *entry = None;
        Ok(())
    }

    pub fn is_complete(&self) -> bool {
        self.slots.iter().all(Option::is_some)
    }

    pub fn slot(&self, index: usize) -> Option<&Arc<Creature>> {
        self.slots.get(index).and_then(Option::as_ref)
    }

    /// Occupied slots with their indices, in slot order.
    pub fn members(&self) -> impl Iterator<Item = (usize, &Arc<Creature>)> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(index, slot)| slot.as_ref().map(|creature| (index, creature)))
    }

    pub fn occupied(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    pub fn contains(&self, id: CreatureId) -> bool {
        self.members().any(|(_, creature)| creature.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::creature::{BaseStats, ElementType};

    fn creature(id: u32) -> Arc<Creature> {
        Arc::new(Creature::new(
            id,
            format!("Mon{id}"),
            "",
            vec![ElementType::Normal],
            BaseStats::default(),
        ))
    }

    #[test]
    fn place_fills_first_empty_slot() {
        let mut roster = Roster::new();
        assert_eq!(
            roster.place(creature(1)),
            PlaceOutcome::Placed { slot: 0, completed: false }
        );
        assert_eq!(
            roster.place(creature(2)),
            PlaceOutcome::Placed { slot: 1, completed: false }
        );
        roster.clear(0).unwrap();
        assert_eq!(
            roster.place(creature(3)),
            PlaceOutcome::Placed { slot: 0, completed: false }
        );
        assert_eq!(roster.slot(0).map(|c| c.id), Some(CreatureId(3)));
    }

    #[test]
    fn completion_is_signalled_once_per_transition() {
        let mut roster = Roster::new();
        let outcomes: Vec<_> = (1..=6).map(|id| roster.place(creature(id))).collect();
        assert_eq!(outcomes.iter().filter(|o| o.completed()).count(), 1);
        assert!(outcomes[5].completed());
        assert!(roster.is_complete());

        assert_eq!(roster.place(creature(7)), PlaceOutcome::Full);

        roster.clear(3).unwrap();
        assert!(!roster.is_complete());
        assert!(roster.place(creature(8)).completed());
    }

    #[test]
    fn place_into_full_roster_leaves_it_unchanged() {
        let mut roster = Roster::from_members((1..=6).map(creature));
        let before = roster.clone();
        assert_eq!(roster.place(creature(99)), PlaceOutcome::Full);
        assert_eq!(roster, before);
        assert!(!roster.contains(CreatureId(99)));
    }

    #[test]
    fn clearing_empty_slot_is_idempotent() {
        let mut roster = Roster::from_members([creature(1)]);
        let before = roster.clone();
        roster.clear(4).unwrap();
        roster.clear(4).unwrap();
        assert_eq!(roster, before);
        assert_eq!(roster.occupied(), 1);
    }

    #[test]
    fn clear_rejects_out_of_range_slot() {
        let mut roster = Roster::new();
        assert_eq!(roster.clear(6), Err(RosterError::SlotOutOfRange(6)));
    }
}
