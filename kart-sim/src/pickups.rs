//! Pickup boxes scattered over the track.
//!
//! A collected box disappears and comes back after a fixed number of frames.
//! Triggered powerups are only recorded; their in-world effects belong to the
//! game, not to this driver.

use serde::{Deserialize, Serialize};

use kart_core::{PowerupField, PowerupKind, Rect, Vec2};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PickupSpec {
    pub area: Rect,
    pub kind: PowerupKind,
}

#[derive(Debug, Clone, PartialEq)]
struct PickupBox {
    spec: PickupSpec,
    /// Frames left until the box is back; zero when available
    cooldown: u32,
}

/// A powerup that was fired.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Fired {
    pub kind: PowerupKind,
    pub position: Vec2,
    pub direction: Vec2,
}

#[derive(Debug, Clone, Default)]
pub struct PickupBoxes {
    boxes: Vec<PickupBox>,
    respawn_frames: u32,
    fired: Vec<Fired>,
}

impl PickupBoxes {
    pub fn new(specs: Vec<PickupSpec>, respawn_frames: u32) -> Self {
        Self {
            boxes: specs
                .into_iter()
                .map(|spec| PickupBox { spec, cooldown: 0 })
                .collect(),
            respawn_frames,
            fired: vec![],
        }
    }

    /// Advance respawn timers by one frame.
    pub fn tick(&mut self) {
        for pickup in &mut self.boxes {
            pickup.cooldown = pickup.cooldown.saturating_sub(1);
        }
    }

    pub fn available(&self) -> usize {
        self.boxes.iter().filter(|b| b.cooldown == 0).count()
    }

    pub fn fired(&self) -> &[Fired] {
        &self.fired
    }
}

impl PowerupField for PickupBoxes {
    fn check_hit(&mut self, bounds: Rect) -> Option<PowerupKind> {
        let respawn = self.respawn_frames.max(1);
        let pickup = self
            .boxes
            .iter_mut()
            .find(|b| b.cooldown == 0 && b.spec.area.intersects(&bounds))?;
        pickup.cooldown = respawn;
        Some(pickup.spec.kind)
    }

    fn trigger(&mut self, kind: PowerupKind, position: Vec2, direction: Vec2) {
        log::info!(
            "{:?} fired at ({:.1}, {:.1}) heading ({:.2}, {:.2})",
            kind,
            position.x,
            position.y,
            direction.x,
            direction.y
        );
        self.fired.push(Fired {
            kind,
            position,
            direction,
        });
    }
}
