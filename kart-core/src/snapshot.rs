//! Read-only kinematic snapshot of a kart for external writers.
//!
//! The record shape is fixed; consumers expect exactly:
//!
//! ```text
//! { id, direction: {x, y}, velocity: {x, y}, pos: {x, y}, drift, width, height }
//! ```
//!
//! `drift` is written as the number 0 or 1.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::types::{Vec2, Vehicle};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VehicleSnapshot {
    pub id: usize,
    pub direction: Vec2,
    pub velocity: Vec2,
    pub pos: Vec2,
    pub drift: u8,
    pub width: u32,
    pub height: u32,
}

impl From<&Vehicle> for VehicleSnapshot {
    fn from(vehicle: &Vehicle) -> Self {
        Self {
            id: vehicle.id,
            direction: vehicle.direction,
            velocity: vehicle.velocity,
            pos: vehicle.position,
            drift: u8::from(vehicle.drift),
            width: vehicle.width,
            height: vehicle.height,
        }
    }
}

impl VehicleSnapshot {
    pub fn to_json(&self) -> Value {
        json!({
            "id": self.id,
            "direction": { "x": self.direction.x, "y": self.direction.y },
            "velocity": { "x": self.velocity.x, "y": self.velocity.y },
            "pos": { "x": self.pos.x, "y": self.pos.y },
            "drift": self.drift,
            "width": self.width,
            "height": self.height,
        })
    }
}

impl Vehicle {
    pub fn snapshot(&self) -> VehicleSnapshot {
        VehicleSnapshot::from(self)
    }
}
