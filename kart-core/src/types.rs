//! Core types for the kart simulation.
//!
//! All units are screen-space:
//! - Position: pixels, top-left corner of the bounding box
//! - Velocity: pixels per second
//! - Force: mass-pixels per second squared
//! - Angles: degrees, positive turns from +X toward +Y

use bitflags::bitflags;
use serde::{Deserialize, Serialize};
use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};

// =============================================================================
// Vec2 - 2D Vector
// =============================================================================

/// A 2D vector used for positions, velocities, forces and headings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Squared magnitude (avoids sqrt for comparisons)
    pub fn length_squared(&self) -> f64 {
        self.x * self.x + self.y * self.y
    }

    /// Magnitude (length) of the vector
    pub fn length(&self) -> f64 {
        self.length_squared().sqrt()
    }

    /// Returns a unit vector in the same direction, or zero if the length is zero
    pub fn normalized(&self) -> Self {
        self.normalized_or(Self::ZERO)
    }

    /// Returns a unit vector in the same direction, or `fallback` if the length is zero
    pub fn normalized_or(&self, fallback: Self) -> Self {
        let len = self.length();
        if len < constants::EPSILON {
            fallback
        } else {
            *self / len
        }
    }

    /// Dot product
    pub fn dot(&self, other: &Self) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// Rotate by `degrees` around the origin. Preserves length.
    pub fn rotated(&self, degrees: f64) -> Self {
        let (sin, cos) = degrees.to_radians().sin_cos();
        Self {
            x: self.x * cos - self.y * sin,
            y: self.x * sin + self.y * cos,
        }
    }

    /// Component of this vector along the unit vector `axis`
    pub fn project_onto_unit(&self, axis: &Self) -> Self {
        *axis * self.dot(axis)
    }
}

impl Add for Vec2 {
    type Output = Self;
    fn add(self, other: Self) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }
}

impl AddAssign for Vec2 {
    fn add_assign(&mut self, other: Self) {
        self.x += other.x;
        self.y += other.y;
    }
}

impl Sub for Vec2 {
    type Output = Self;
    fn sub(self, other: Self) -> Self {
        Self {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }
}

impl SubAssign for Vec2 {
    fn sub_assign(&mut self, other: Self) {
        self.x -= other.x;
        self.y -= other.y;
    }
}

impl Mul<f64> for Vec2 {
    type Output = Self;
    fn mul(self, scalar: f64) -> Self {
        Self {
            x: self.x * scalar,
            y: self.y * scalar,
        }
    }
}

impl Div<f64> for Vec2 {
    type Output = Self;
    fn div(self, scalar: f64) -> Self {
        Self {
            x: self.x / scalar,
            y: self.y / scalar,
        }
    }
}

impl Neg for Vec2 {
    type Output = Self;
    fn neg(self) -> Self {
        Self {
            x: -self.x,
            y: -self.y,
        }
    }
}

impl Default for Vec2 {
    fn default() -> Self {
        Self::ZERO
    }
}

// =============================================================================
// Rect - Axis-aligned bounding box
// =============================================================================

/// Axis-aligned box given by its top-left corner and integer size.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub w: u32,
    pub h: u32,
}

impl Rect {
    pub const fn new(x: f64, y: f64, w: u32, h: u32) -> Self {
        Self { x, y, w, h }
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.w as f64 / 2.0, self.y + self.h as f64 / 2.0)
    }

    pub fn half_extents(&self) -> Vec2 {
        Vec2::new(self.w as f64 / 2.0, self.h as f64 / 2.0)
    }

    /// Strict overlap test; touching edges do not count.
    pub fn intersects(&self, other: &Rect) -> bool {
        self.x < other.x + other.w as f64
            && other.x < self.x + self.w as f64
            && self.y < other.y + other.h as f64
            && other.y < self.y + self.h as f64
    }
}

// =============================================================================
// Terrain and Powerups
// =============================================================================

/// Surface kind reported by the track under a point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Terrain {
    #[default]
    Road,
    Wall,
    Grass,
    Boost,
    Mud,
    Banana,
    Oil,
    Ice,
}

/// Powerup a vehicle can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PowerupKind {
    Banana,
    Oil,
    Boost,
}

bitflags! {
    /// One-shot terrain effects currently acting on a vehicle.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Effects: u8 {
        const SPUN_OUT = 1 << 0;
    }
}

// =============================================================================
// Vehicle
// =============================================================================

/// Opaque image handle handed out by the asset collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct SpriteHandle(pub u32);

/// Complete state of one vehicle.
///
/// `force` is an accumulator: collisions and controls add to it during a frame,
/// the integrator consumes it, and the frame driver clears it afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Vehicle {
    pub id: usize,
    pub position: Vec2,
    pub velocity: Vec2,
    pub force: Vec2,
    pub direction: Vec2,
    pub width: u32,
    pub height: u32,
    pub drift: bool,
    pub active_effects: Effects,
    pub powerup: Option<PowerupKind>,
    pub tiles_passed: u32,
    pub sprite: SpriteHandle,
}

impl Vehicle {
    /// Vehicle at rest at `position`, facing `constants::START_DIRECTION`.
    pub fn new(id: usize, position: Vec2, width: u32, height: u32) -> Self {
        Self {
            id,
            position,
            velocity: Vec2::ZERO,
            force: Vec2::ZERO,
            direction: constants::START_DIRECTION,
            width,
            height,
            drift: false,
            active_effects: Effects::empty(),
            powerup: None,
            tiles_passed: 0,
            sprite: SpriteHandle::default(),
        }
    }

    pub fn bounds(&self) -> Rect {
        Rect::new(self.position.x, self.position.y, self.width, self.height)
    }

    pub fn center(&self) -> Vec2 {
        self.bounds().center()
    }

    pub fn apply_force(&mut self, force: Vec2) {
        self.force += force;
    }

    /// Turn the heading by a discrete number of degrees.
    pub fn rotate(&mut self, degrees: f64) {
        self.direction = self.direction.rotated(degrees);
    }

    pub fn is_spun_out(&self) -> bool {
        self.active_effects.contains(Effects::SPUN_OUT)
    }
}

// =============================================================================
// Constants
// =============================================================================

/// Fixed values that are not part of the tunable parameter set.
pub mod constants {
    use super::Vec2;

    /// Heading of a freshly created vehicle
    pub const START_DIRECTION: Vec2 = Vec2::new(1.0, 0.0);

    /// Small value for floating-point comparisons
    pub const EPSILON: f64 = 1e-10;
}

// =============================================================================
// Tests
// =============================================================================
