//! Map collaborator: terrain lookup and checkpoint bookkeeping.

use crate::types::{Terrain, Vec2};

/// What the simulation needs to know about the track a race is held on.
pub trait Track {
    /// Terrain under `point`.
    fn surface_at(&self, point: Vec2) -> Terrain;

    /// Advance `tiles_passed` if `position` reached the next checkpoint.
    fn check_tile_passed(&self, tiles_passed: &mut u32, position: Vec2);

    /// Where the first vehicle spawns; later ones are stacked below it.
    fn starting_position(&self) -> Vec2;
}

