// Re-export core modules for use by the binary or other consumers
pub mod components;
pub mod config;
pub mod content;
pub mod core;
pub mod rules;
pub mod simulation;
pub mod systems;
pub mod ui;

// Expose the Party wrapper and types needed for interaction
pub use crate::config::PartyConfig;
pub use crate::core::party::{MemberView, Party, PartySnapshot};
