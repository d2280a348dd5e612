//! Per-frame integration of a single kart.
//!
//! Semi-implicit Euler with a fixed time step, plus tyre grip:
//!
//! ```text
//! 1. terrain rule          (may change v, heading, effects, resistance)
//! 2. F += -C_drag * v * |v|
//! 3. F += -C_roll * v
//! 4. a  = F / m
//! 5. v += a * dt
//! 6. v  = v_forward + v_lateral * grip      (grip: 0.9, or 0.97 while drifting)
//! 7. spin-out override     (v = 0, heading +45°)
//! 8. x += v * dt
//! 9. powerup pickup        (only when empty-handed)
//! 10. checkpoint progress
//! ```
//!
//! The integrator never clears `force`; the frame driver does that once every
//! kart has been stepped.

use rand::Rng;

use crate::forces::Resistance;
use crate::powerup::{self, PowerupField};
use crate::surface::{self, EffectChange};
use crate::track::Track;
use crate::tuning::Tuning;
use crate::types::{PowerupKind, Terrain, Vehicle};

/// What happened to a kart during one step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepOutcome {
    pub terrain: Terrain,
    pub pickup: Option<PowerupKind>,
    pub effect: Option<EffectChange>,
}

pub struct KartIntegrator;

impl KartIntegrator {
    /// Advance `vehicle` by one frame.
    ///
    /// # Arguments
    /// * `vehicle` - Kart to advance; its accumulated force is consumed
    /// * `tuning` - Shared physics constants
    /// * `track` - Terrain lookup and checkpoint bookkeeping
    /// * `powerups` - Pickup boxes
    /// * `rng` - Randomness for ice
    pub fn step<T, P, R>(
        vehicle: &mut Vehicle,
        tuning: &Tuning,
        track: &T,
        powerups: &mut P,
        rng: &mut R,
    ) -> StepOutcome
    where
        T: Track + ?Sized,
        P: PowerupField + ?Sized,
        R: Rng + ?Sized,
    {
        let terrain = track.surface_at(vehicle.center());
        let (resistance, started) =
            surface::apply_terrain(vehicle, terrain, Resistance::from_tuning(tuning), rng);

        let velocity = vehicle.velocity;
        vehicle.apply_force(resistance.drag_force(velocity));
        vehicle.apply_force(resistance.roll_force(velocity));

        let acceleration = vehicle.force / tuning.mass;
        vehicle.velocity += acceleration * tuning.time_step;

        Self::apply_grip(vehicle, tuning);

        let ended = surface::apply_spin_out(vehicle, terrain);

        vehicle.position += vehicle.velocity * tuning.time_step;

        let pickup = powerup::try_pickup(vehicle, powerups);

        track.check_tile_passed(&mut vehicle.tiles_passed, vehicle.position);

        StepOutcome {
            terrain,
            pickup,
            effect: started.or(ended),
        }
    }

    /// Bleed off sideways velocity and consume the drift flag.
    pub fn apply_grip(vehicle: &mut Vehicle, tuning: &Tuning) {
        let grip = if vehicle.drift {
            tuning.drift_grip
        } else {
            tuning.normal_grip
        };
        vehicle.drift = false;

        let forward = vehicle.direction.normalized();
        let side = forward.rotated(90.0);
        let forward_velocity = vehicle.velocity.project_onto_unit(&forward);
        let side_velocity = vehicle.velocity.project_onto_unit(&side);
        vehicle.velocity = forward_velocity + side_velocity * grip;
    }
}

// =============================================================================
// Tests
// =============================================================================
