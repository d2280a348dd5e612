//! # Kart Core
//!
//! Per-frame vehicle physics for a top-down kart racer.
//!
//! ## Architecture
//!
//! - `types`: Core data structures (Vec2, Rect, Vehicle, terrain and powerup kinds)
//! - `tuning`: Shared physics constants and their YAML loader
//! - `registry`: Fixed-capacity kart storage
//! - `collision`: Bounding-box detection and impulse resolution between karts
//! - `forces`: Drag and rolling resistance
//! - `surface`: Terrain rules and the banana spin-out
//! - `integrator`: One kart, one frame
//! - `powerup`: Pickup and use
//! - `snapshot`: Serializable kinematic record
//! - `simulation`: Whole-frame driver owning the race state
//!
//! The track, pickup boxes and sprite loading are supplied by the caller
//! through the [`Track`], [`PowerupField`] and [`SpriteLoader`] traits.

pub mod assets;
pub mod collision;
pub mod forces;
pub mod integrator;
pub mod powerup;
pub mod registry;
pub mod simulation;
pub mod snapshot;
pub mod surface;
pub mod track;
pub mod tuning;
pub mod types;

#[cfg(test)]
mod testing;

pub use assets::{Sprite, SpriteError, SpriteLoader};
pub use powerup::PowerupField;
pub use registry::{RegistryError, VehicleRegistry, MAX_VEHICLES};
pub use simulation::{FrameEvent, FrameReport, Race};
pub use snapshot::VehicleSnapshot;
pub use track::Track;
pub use tuning::{Tuning, TuningError, TuningLoader};
pub use types::{Effects, PowerupKind, Rect, SpriteHandle, Terrain, Vec2, Vehicle};
