//! Terrain effects applied to a kart each frame.
//!
//! | Terrain | Effect                                          |
//! |---------|-------------------------------------------------|
//! | Wall    | velocity reversed                               |
//! | Grass   | drag and rolling resistance ×10                 |
//! | Boost   | no resistance, velocity ×1.2                    |
//! | Mud     | drag and rolling resistance ×7                  |
//! | Banana  | kart spins out                                  |
//! | Oil     | heading turned +3°                              |
//! | Ice     | heading turned ±4°, sign picked at random       |
//! | Road    | nothing                                         |
//!
//! ## Spin-out
//!
//! Banana terrain sets [`Effects::SPUN_OUT`]. While the flag is set the kart
//! turns 45° and stops dead every frame. The flag clears on the first frame
//! the kart is off banana terrain, and that clearing frame still spins it.

use rand::Rng;

use crate::forces::Resistance;
use crate::types::{Effects, Terrain, Vec2, Vehicle};

pub const GRASS_RESISTANCE: f64 = 10.0;
pub const MUD_RESISTANCE: f64 = 7.0;
pub const BOOST_SPEEDUP: f64 = 1.2;
pub const OIL_TURN_DEGREES: f64 = 3.0;
pub const ICE_TURN_DEGREES: f64 = 4.0;
pub const SPIN_OUT_TURN_DEGREES: f64 = 45.0;
pub const SPIN_OUT_FORCE: Vec2 = Vec2::new(-10.0, -10.0);

/// Change to a kart's one-shot effects during a frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EffectChange {
    SpinOutStarted,
    SpinOutEnded,
}

/// Apply the terrain rule for `terrain` to `vehicle`.
///
/// Returns the resistance to use for this frame, derived from `base`, and
/// whether a spin-out began.
pub fn apply_terrain<R: Rng + ?Sized>(
    vehicle: &mut Vehicle,
    terrain: Terrain,
    base: Resistance,
    rng: &mut R,
) -> (Resistance, Option<EffectChange>) {
    let mut change = None;
    let resistance = match terrain {
        Terrain::Wall => {
            vehicle.velocity = -vehicle.velocity;
            base
        }
        Terrain::Grass => base.scaled(GRASS_RESISTANCE),
        Terrain::Boost => {
            vehicle.velocity = vehicle.velocity * BOOST_SPEEDUP;
            Resistance::new(0.0, 0.0)
        }
        Terrain::Mud => base.scaled(MUD_RESISTANCE),
        Terrain::Banana => {
            if !vehicle.is_spun_out() {
                change = Some(EffectChange::SpinOutStarted);
            }
            vehicle.active_effects.insert(Effects::SPUN_OUT);
            base
        }
        Terrain::Oil => {
            vehicle.rotate(OIL_TURN_DEGREES);
            base
        }
        Terrain::Ice => {
            let turn = if rng.gen_bool(0.5) {
                ICE_TURN_DEGREES
            } else {
                -ICE_TURN_DEGREES
            };
            vehicle.rotate(turn);
            base
        }
        Terrain::Road => base,
    };
    (resistance, change)
}

/// Run the spin-out override if the kart is spun out.
///
/// Must run after the velocity update so it supersedes it. Clears the flag
/// when `terrain` is no longer banana, but still spins the kart this frame.
pub fn apply_spin_out(vehicle: &mut Vehicle, terrain: Terrain) -> Option<EffectChange> {
    if !vehicle.is_spun_out() {
        return None;
    }

    let mut change = None;
    if terrain != Terrain::Banana {
        vehicle.active_effects.toggle(Effects::SPUN_OUT);
        change = Some(EffectChange::SpinOutEnded);
    }

    vehicle.rotate(SPIN_OUT_TURN_DEGREES);
    vehicle.velocity = Vec2::ZERO;
    vehicle.force = SPIN_OUT_FORCE;
    change
}
