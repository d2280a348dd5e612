//! Resistance forces acting on a kart.
//!
//! - **Drag**: air resistance, quadratic in speed
//! - **Rolling resistance**: tyre/ground losses, linear in speed
//!
//! Both oppose the velocity on each axis independently:
//!
//! ```text
//! F_drag = -C_drag * v * |v|
//! F_roll = -C_roll * v
//! ```
//!
//! The surface under the kart rescales both coefficients for the frame; see
//! [`crate::surface`].

use crate::tuning::Tuning;
use crate::types::Vec2;

/// Drag and rolling-resistance coefficients in effect for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Resistance {
    pub drag: f64,
    pub roll: f64,
}

impl Resistance {
    pub fn new(drag: f64, roll: f64) -> Self {
        Self { drag, roll }
    }

    /// Baseline coefficients before any surface adjustment.
    pub fn from_tuning(tuning: &Tuning) -> Self {
        Self::new(tuning.drag_coefficient, tuning.roll_coefficient)
    }

    /// Multiply both coefficients by the same factor.
    pub fn scaled(self, factor: f64) -> Self {
        Self::new(self.drag * factor, self.roll * factor)
    }

    /// Quadratic drag for `velocity`.
    pub fn drag_force(&self, velocity: Vec2) -> Vec2 {
        velocity * (-self.drag * velocity.length())
    }

    /// Linear rolling resistance for `velocity`.
    pub fn roll_force(&self, velocity: Vec2) -> Vec2 {
        velocity * -self.roll
    }

    /// Total resistance for `velocity`.
    pub fn force(&self, velocity: Vec2) -> Vec2 {
        self.drag_force(velocity) + self.roll_force(velocity)
    }
}

// =============================================================================
// Tests
// =============================================================================
