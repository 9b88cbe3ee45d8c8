use bevy_ecs::prelude::*;
use bevy_utils::HashMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::components::creature::CreatureId;
use crate::components::roster::Roster;
use crate::config::LayoutConfig;

/// Viewport-space pixel coordinate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl std::ops::Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ViewportSize {
    pub width: f32,
    pub height: f32,
}

impl ViewportSize {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Last measured geometry the layout is computed against.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq)]
pub struct Viewport {
    pub size: ViewportSize,
    /// Bottom edge of the title region; `None` before it has been measured.
    pub title_bottom: Option<f32>,
}

/// Live top-left coordinates of each party member on the canvas.
#[derive(Resource, Debug, Clone, Default, PartialEq)]
pub struct PositionMap(HashMap<CreatureId, Point>);

impl PositionMap {
    pub fn get(&self, id: CreatureId) -> Option<Point> {
        self.0.get(&id).copied()
    }

    /// Moves an already placed member. Unknown ids are ignored.
    pub fn update(&mut self, id: CreatureId, point: Point) -> bool {
        match self.0.get_mut(&id) {
            Some(slot) => {
                *slot = point;
                true
            }
            None => false,
        }
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Member whose sprite box contains `point`; among overlaps the highest slot wins.
    pub fn hit_test(&self, roster: &Roster, point: Point, sprite_size: f32) -> Option<CreatureId> {
        roster
            .members()
            .filter_map(|(_, creature)| self.get(creature.id).map(|pos| (creature.id, pos)))
            .filter(|(_, pos)| {
                point.x >= pos.x
                    && point.x < pos.x + sprite_size
                    && point.y >= pos.y
                    && point.y < pos.y + sprite_size
            })
            .last()
            .map(|(id, _)| id)
    }
}

/// Grid pitch for a viewport width, used for both axes.
pub fn grid_spacing(width: f32, config: &LayoutConfig) -> f32 {
    (width * config.spacing_ratio).clamp(config.min_spacing, config.max_spacing)
}

/// Responsive 3x2 arrangement of the roster, centered horizontally under the title.
pub fn compute_initial_positions(
    roster: &Roster,
    viewport: &Viewport,
    config: &LayoutConfig,
) -> PositionMap {
    let columns = config.columns.max(1);
    let spacing = grid_spacing(viewport.size.width, config);

    let grid_width = (columns - 1) as f32 * spacing + config.sprite_size;
    let start_x = viewport.size.width / 2.0 - grid_width / 2.0;
    let start_y = match viewport.title_bottom {
        Some(bottom) => bottom + config.title_gap,
        None => {
            debug!("title region not measured; using fallback grid top");
            config.fallback_top
        }
    };

    let mut positions = HashMap::default();
    for (index, creature) in roster.members() {
        let row = index / columns;
        let col = index % columns;
        positions.insert(
            creature.id,
            Point::new(
                start_x + col as f32 * spacing,
                start_y + row as f32 * spacing,
            ),
        );
    }

    debug!(
        members = positions.len(),
        spacing,
        width = viewport.size.width,
        "initial party layout computed"
    );
    PositionMap(positions)
}
