pub mod creature;
pub mod roster;

pub use creature::{capitalize_name, BaseStats, Creature, CreatureId, ElementType, ParseEnumError};
pub use roster::{PlaceOutcome, Roster, RosterError, ROSTER_SIZE};
