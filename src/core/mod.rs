pub mod ecs;
pub mod party;

pub use ecs::{create_schedule, create_world, FrameSet};
pub use party::{MemberView, Party, PartySnapshot};
