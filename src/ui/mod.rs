pub mod host;
pub mod report;

pub use host::{CelebrationEffect, FixedGeometry, LoggedCelebration, ViewportGeometry};
pub use report::{render_assessment_report, render_layout};
