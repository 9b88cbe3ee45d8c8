pub mod layout;
pub mod time;

pub use layout::{
    compute_initial_positions, grid_spacing, Point, PositionMap, Viewport, ViewportSize,
};
pub use time::FrameClock;
