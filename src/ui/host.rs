use tracing::info;

use crate::config::ConfettiBurst;
use crate::simulation::layout::ViewportSize;

/// Pull-based access to the host's viewport geometry.
pub trait ViewportGeometry {
    fn viewport_size(&self) -> ViewportSize;
    /// Bottom edge of the title region, or `None` while it cannot be measured.
    fn title_bottom(&self) -> Option<f32>;
}

/// Particle burst fired once per celebrate request.
pub trait CelebrationEffect {
    fn burst(&mut self, burst: &ConfettiBurst);
}

/// Geometry that only changes when the owner says so.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FixedGeometry {
    pub size: ViewportSize,
    pub title_bottom: Option<f32>,
}

impl FixedGeometry {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            size: ViewportSize::new(width, height),
            title_bottom: None,
        }
    }

    pub fn with_title_bottom(mut self, bottom: f32) -> Self {
        self.title_bottom = Some(bottom);
        self
    }
}

impl ViewportGeometry for FixedGeometry {
    fn viewport_size(&self) -> ViewportSize {
        self.size
    }

    fn title_bottom(&self) -> Option<f32> {
        self.title_bottom
    }
}

/// Shares geometry with the host so it can be resized after the party owns it.
impl<T: ViewportGeometry> ViewportGeometry for std::rc::Rc<std::cell::RefCell<T>> {
    fn viewport_size(&self) -> ViewportSize {
        self.borrow().viewport_size()
    }

    fn title_bottom(&self) -> Option<f32> {
        self.borrow().title_bottom()
    }
}

/// Headless stand-in that records the burst in the log.
#[derive(Debug, Default)]
pub struct LoggedCelebration {
    pub bursts: usize,
}

impl CelebrationEffect for LoggedCelebration {
    fn burst(&mut self, burst: &ConfettiBurst) {
        self.bursts += 1;
        info!(
            particles = burst.particle_count,
            spread = burst.spread_degrees,
            "celebration burst"
        );
    }
}

impl<T: CelebrationEffect> CelebrationEffect for std::rc::Rc<std::cell::RefCell<T>> {
    fn burst(&mut self, burst: &ConfettiBurst) {
        self.borrow_mut().burst(burst);
    }
}
