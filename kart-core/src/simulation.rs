//! Race orchestration: owns the karts and runs whole frames.
//!
//! A frame is a single pass:
//!
//! 1. every pair of karts is tested for collision, accumulating impulses
//! 2. every kart is integrated, in creation order
//! 3. every force accumulator is cleared
//!
//! All collision impulses of a frame therefore land before any kart moves,
//! whatever the kart order. Controls (`apply_force`, `steer`, `set_drift`)
//! are fed in by the driver between frames.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;

use crate::assets::SpriteLoader;
use crate::collision::CollisionResolver;
use crate::integrator::KartIntegrator;
use crate::powerup::{self, PowerupField};
use crate::registry::{RegistryError, VehicleRegistry};
use crate::snapshot::VehicleSnapshot;
use crate::surface::EffectChange;
use crate::track::Track;
use crate::tuning::Tuning;
use crate::types::{PowerupKind, Vec2, Vehicle};

/// Something notable that happened during a frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum FrameEvent {
    Collision { first: usize, second: usize },
    Pickup { vehicle: usize, kind: PowerupKind },
    SpinOutStarted { vehicle: usize },
    SpinOutEnded { vehicle: usize },
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrameReport {
    pub frame: u64,
    pub events: Vec<FrameEvent>,
}

/// All state for one race.
pub struct Race<R = StdRng> {
    registry: VehicleRegistry,
    tuning: Tuning,
    rng: R,
    frame: u64,
}

impl Race<StdRng> {
    pub fn new(tuning: Tuning) -> Self {
        Self::with_rng(tuning, StdRng::from_entropy())
    }

    /// Race whose random terrain effects repeat for the same seed.
    pub fn with_seed(tuning: Tuning, seed: u64) -> Self {
        Self::with_rng(tuning, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> Race<R> {
    pub fn with_rng(tuning: Tuning, rng: R) -> Self {
        Self {
            registry: VehicleRegistry::new(),
            tuning,
            rng,
            frame: 0,
        }
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    /// Frames run since the race started.
    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Add a kart at the track's starting grid. Returns its id.
    pub fn add_vehicle<T, L>(&mut self, track: &T, sprites: &mut L) -> Result<usize, RegistryError>
    where
        T: Track + ?Sized,
        L: SpriteLoader + ?Sized,
    {
        let kart = self.registry.create(
            track.starting_position(),
            self.tuning.spawn_spacing,
            sprites,
        )?;
        Ok(kart.id)
    }

    pub fn vehicles(&self) -> impl Iterator<Item = &Vehicle> {
        self.registry.iter()
    }

    pub fn vehicle(&self, id: usize) -> Option<&Vehicle> {
        self.registry.get(id)
    }

    pub fn vehicle_count(&self) -> usize {
        self.registry.len()
    }

    /// Add `force` to a kart's accumulator for the coming frame.
    pub fn apply_force(&mut self, id: usize, force: Vec2) {
        if let Some(kart) = self.kart_mut(id) {
            kart.apply_force(force);
        }
    }

    /// Turn a kart's heading by a discrete number of degrees.
    pub fn steer(&mut self, id: usize, degrees: f64) {
        if let Some(kart) = self.kart_mut(id) {
            kart.rotate(degrees);
        }
    }

    /// Loosen a kart's grip for the coming frame only.
    pub fn set_drift(&mut self, id: usize) {
        if let Some(kart) = self.kart_mut(id) {
            kart.drift = true;
        }
    }

    /// Fire the kart's held powerup. Returns what was used.
    pub fn use_powerup<P: PowerupField + ?Sized>(
        &mut self,
        id: usize,
        powerups: &mut P,
    ) -> Option<PowerupKind> {
        let kart = self.kart_mut(id)?;
        powerup::use_powerup(kart, powerups)
    }

    /// Run one frame.
    pub fn step<T, P>(&mut self, track: &T, powerups: &mut P) -> FrameReport
    where
        T: Track + ?Sized,
        P: PowerupField + ?Sized,
    {
        let mut report = FrameReport {
            frame: self.frame,
            events: vec![],
        };

        let impulse = self.tuning.collision_impulse;
        self.registry.for_each_pair(|first, second| {
            if CollisionResolver::collide(first, second, impulse) {
                report.events.push(FrameEvent::Collision {
                    first: first.id,
                    second: second.id,
                });
            }
        });

        for kart in self.registry.iter_mut() {
            let outcome = KartIntegrator::step(kart, &self.tuning, track, powerups, &mut self.rng);
            if let Some(kind) = outcome.pickup {
                report.events.push(FrameEvent::Pickup {
                    vehicle: kart.id,
                    kind,
                });
            }
            match outcome.effect {
                Some(EffectChange::SpinOutStarted) => {
                    log::debug!("kart {} spun out", kart.id);
                    report
                        .events
                        .push(FrameEvent::SpinOutStarted { vehicle: kart.id });
                }
                Some(EffectChange::SpinOutEnded) => {
                    log::debug!("kart {} recovered from spin-out", kart.id);
                    report
                        .events
                        .push(FrameEvent::SpinOutEnded { vehicle: kart.id });
                }
                None => {}
            }
            kart.force = Vec2::ZERO;
        }

        self.frame += 1;
        report
    }

    pub fn snapshots(&self) -> Vec<VehicleSnapshot> {
        self.registry.iter().map(VehicleSnapshot::from).collect()
    }

    /// Drop all karts and start counting frames from zero.
    pub fn reset(&mut self) {
        self.registry.clear();
        self.frame = 0;
    }

    fn kart_mut(&mut self, id: usize) -> Option<&mut Vehicle> {
        let kart = self.registry.get_mut(id);
        if kart.is_none() {
            log::warn!("no kart with id {}", id);
        }
        kart
    }
}

// =============================================================================
// Tests
// =============================================================================
