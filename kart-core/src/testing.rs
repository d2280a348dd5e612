//! Collaborator doubles shared by the unit tests.

use crate::assets::{Sprite, SpriteError, SpriteLoader};
use crate::powerup::PowerupField;
use crate::track::Track;
use crate::types::{PowerupKind, Rect, SpriteHandle, Terrain, Vec2};

/// Track made of rectangular terrain patches over a uniform base surface.
///
/// Checkpoints are passed in order; each one reached bumps `tiles_passed`.
#[derive(Debug, Clone)]
pub struct PatchTrack {
    pub base: Terrain,
    pub patches: Vec<(Rect, Terrain)>,
    pub checkpoints: Vec<Rect>,
    pub start: Vec2,
}

impl PatchTrack {
    pub fn uniform(base: Terrain) -> Self {
        Self {
            base,
            patches: vec![],
            checkpoints: vec![],
            start: Vec2::new(100.0, 100.0),
        }
    }

    pub fn with_patch(mut self, area: Rect, terrain: Terrain) -> Self {
        self.patches.push((area, terrain));
        self
    }
}

impl Track for PatchTrack {
    fn surface_at(&self, point: Vec2) -> Terrain {
        self.patches
            .iter()
            .find(|(area, _)| {
                point.x >= area.x
                    && point.x < area.x + area.w as f64
                    && point.y >= area.y
                    && point.y < area.y + area.h as f64
            })
            .map_or(self.base, |(_, terrain)| *terrain)
    }

    fn check_tile_passed(&self, tiles_passed: &mut u32, position: Vec2) {
        if self.checkpoints.is_empty() {
            return;
        }
        let next = self.checkpoints[*tiles_passed as usize % self.checkpoints.len()];
        if next.intersects(&Rect::new(position.x, position.y, 1, 1)) {
            *tiles_passed += 1;
        }
    }

    fn starting_position(&self) -> Vec2 {
        self.start
    }
}

/// Pickup boxes that disappear once collected; triggers are recorded.
#[derive(Debug, Clone, Default)]
pub struct PickupBoxes {
    pub boxes: Vec<(Rect, PowerupKind)>,
    pub triggered: Vec<(PowerupKind, Vec2, Vec2)>,
}

impl PickupBoxes {
    pub fn single(area: Rect, kind: PowerupKind) -> Self {
        Self {
            boxes: vec![(area, kind)],
            triggered: vec![],
        }
    }

    pub fn remaining(&self) -> usize {
        self.boxes.len()
    }
}

impl PowerupField for PickupBoxes {
    fn check_hit(&mut self, bounds: Rect) -> Option<PowerupKind> {
        let index = self.boxes.iter().position(|(area, _)| area.intersects(&bounds))?;
        Some(self.boxes.remove(index).1)
    }

    fn trigger(&mut self, kind: PowerupKind, position: Vec2, direction: Vec2) {
        self.triggered.push((kind, position, direction));
    }
}

/// Hands out same-sized sprites and remembers what was requested.
#[derive(Debug, Clone)]
pub struct FixedSprites {
    pub width: u32,
    pub height: u32,
    pub requested: Vec<String>,
    pub fail: bool,
}

impl FixedSprites {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            requested: vec![],
            fail: false,
        }
    }
}

impl SpriteLoader for FixedSprites {
    fn load_image_with_dims(&mut self, filename: &str) -> Result<Sprite, SpriteError> {
        if self.fail {
            return Err(SpriteError {
                filename: filename.to_string(),
                reason: "missing".to_string(),
            });
        }
        self.requested.push(filename.to_string());
        Ok(Sprite {
            handle: SpriteHandle(self.requested.len() as u32),
            width: self.width,
            height: self.height,
        })
    }
}
