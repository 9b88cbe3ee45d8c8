use bevy_ecs::prelude::*;

/// Host-supplied frame timestamp, in milliseconds.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameClock {
    pub now_ms: u64,
}

impl FrameClock {
    /// Moves the clock to the host's timestamp; time never runs backwards.
    pub fn advance_to(&mut self, now_ms: u64) {
        self.now_ms = self.now_ms.max(now_ms);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clock_is_monotonic() {
        let mut clock = FrameClock::default();
        clock.advance_to(100);
        clock.advance_to(40);
        assert_eq!(clock.now_ms, 100);
    }
}
