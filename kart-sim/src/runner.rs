//! Drives a [`Race`] from a [`RaceFile`].

use serde::Serialize;

use kart_core::{FrameEvent, Race, Tuning, VehicleSnapshot};

use crate::grid::GridTrack;
use crate::pickups::{Fired, PickupBoxes};
use crate::race_file::RaceFile;
use crate::sprites::UniformSprites;

/// Kart state written out for one frame.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FrameDump {
    pub frame: u64,
    pub karts: Vec<VehicleSnapshot>,
    pub laps: Vec<u32>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub events: Vec<FrameEvent>,
}

/// Outcome of a whole headless race.
#[derive(Debug, Clone, Serialize)]
pub struct RaceSummary {
    pub frames: u64,
    pub laps: Vec<u32>,
    pub fired: Vec<Fired>,
}

pub struct Runner {
    race: Race,
    track: GridTrack,
    pickups: PickupBoxes,
    plan: RaceFile,
}

impl Runner {
    pub fn new(plan: RaceFile, tuning: Tuning, seed: Option<u64>) -> anyhow::Result<Self> {
        tuning.validate()?;
        let track = plan.track.build()?;
        let mut race = match seed {
            Some(seed) => Race::with_seed(tuning, seed),
            None => Race::new(tuning),
        };

        let (width, height) = plan.kart_size;
        let mut sprites = UniformSprites::new(width, height);
        for _ in 0..plan.karts {
            race.add_vehicle(&track, &mut sprites)?;
        }
        log::info!(
            "race ready: {} karts on a {}x{} track",
            race.vehicle_count(),
            track.width(),
            track.height()
        );

        let pickups = PickupBoxes::new(plan.pickups.clone(), plan.pickup_respawn);
        Ok(Self {
            race,
            track,
            pickups,
            plan,
        })
    }

    pub fn race(&self) -> &Race {
        &self.race
    }

    /// Feed controls for the upcoming frame and run it.
    pub fn step(&mut self) -> FrameDump {
        let frame = self.race.frame();
        let steering: Vec<_> = self
            .plan
            .steering
            .iter()
            .filter(|span| span.covers(frame))
            .cloned()
            .collect();

        for id in 0..self.race.vehicle_count() {
            for span in &steering {
                self.race.steer(id, span.degrees);
                if span.drift {
                    self.race.set_drift(id);
                }
            }
            if let Some(kart) = self.race.vehicle(id) {
                let push = kart.direction * self.plan.throttle;
                self.race.apply_force(id, push);
            }
        }

        let report = self.race.step(&self.track, &mut self.pickups);
        self.pickups.tick();

        if self.plan.auto_use {
            for event in &report.events {
                if let FrameEvent::Pickup { vehicle, .. } = *event {
                    self.race.use_powerup(vehicle, &mut self.pickups);
                }
            }
        }

        FrameDump {
            frame,
            karts: self.race.snapshots(),
            laps: self.laps(),
            events: report.events,
        }
    }

    /// Run every planned frame, handing each dump to `sink`.
    pub fn run<F: FnMut(&FrameDump)>(&mut self, mut sink: F) -> RaceSummary {
        while self.race.frame() < self.plan.frames {
            let dump = self.step();
            sink(&dump);
        }
        RaceSummary {
            frames: self.race.frame(),
            laps: self.laps(),
            fired: self.pickups.fired().to_vec(),
        }
    }

    fn laps(&self) -> Vec<u32> {
        self.race
            .vehicles()
            .map(|kart| self.track.laps(kart.tiles_passed))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kart_core::PowerupKind;

    const OVAL: &str = r#"
track:
  tile_size: 32
  start: { x: 48.0, y: 40.0 }
  rows:
    - '############'
    - '#..........#'
    - '#..........#'
    - '#..........#'
    - '############'
  checkpoints:
    - { x: 200.0, y: 32.0, w: 32, h: 96 }
pickups:
  - { area: { x: 100.0, y: 40.0, w: 16, h: 16 }, kind: banana }
karts: 2
frames: 40
throttle: 800.0
auto_use: true
"#;

    fn runner() -> Runner {
        let plan = RaceFile::from_yaml(OVAL).unwrap();
        Runner::new(plan, Tuning::default(), Some(1)).unwrap()
    }

    #[test]
    fn test_runs_all_frames() {
        let mut runner = runner();
        let mut dumps = 0;
        let summary = runner.run(|dump| {
            assert_eq!(dump.karts.len(), 2);
            dumps += 1;
        });
        assert_eq!(dumps, 40);
        assert_eq!(summary.frames, 40);
    }

    #[test]
    fn test_karts_drive_forward() {
        let mut runner = runner();
        runner.run(|_| {});
        for kart in runner.race().vehicles() {
            assert!(kart.position.x > 48.0, "kart {} did not move", kart.id);
        }
    }

    #[test]
    fn test_auto_use_fires_pickup() {
        let mut runner = runner();
        let summary = runner.run(|_| {});
        assert_eq!(summary.fired.len(), 1);
        assert!(runner.race().vehicles().all(|k| k.powerup.is_none()));
    }

    #[test]
    fn test_too_many_karts() {
        let mut plan = RaceFile::from_yaml(OVAL).unwrap();
        plan.karts = 8;
        assert!(Runner::new(plan, Tuning::default(), Some(1)).is_err());
    }

    #[test]
    fn test_dump_json_shape() {
        let mut runner = runner();
        let dump = runner.step();
        let value = serde_json::to_value(&dump).unwrap();
        assert_eq!(value["frame"], 0);
        assert_eq!(value["karts"][1]["pos"]["y"], 60.0);
        assert!(value["karts"][0]["direction"]["x"].is_number());
    }

    #[test]
    fn test_dump_carries_typed_events() {
        let mut runner = runner();
        let mut pickup_frame = None;
        runner.run(|dump| {
            if pickup_frame.is_none() {
                let picked = dump.events.iter().any(|e| {
                    matches!(e, FrameEvent::Pickup { vehicle: 0, kind: PowerupKind::Banana })
                });
                if picked {
                    pickup_frame = Some(serde_json::to_value(dump).unwrap());
                }
            }
        });

        let value = pickup_frame.expect("kart 0 should reach the banana box");
        let events = value["events"].as_array().unwrap();
        assert!(events
            .iter()
            .any(|e| e["event"] == "pickup" && e["kind"] == "banana" && e["vehicle"] == 0));
    }

    #[test]
    fn test_demo_race_runs() {
        let plan = RaceFile::from_yaml(include_str!("../races/oval.yaml")).unwrap();
        let frames = plan.frames;
        let mut runner = Runner::new(plan, Tuning::default(), Some(7)).unwrap();

        let summary = runner.run(|dump| {
            for kart in &dump.karts {
                assert!(
                    kart.pos.x.is_finite() && kart.pos.y.is_finite(),
                    "kart {} left the plane at frame {}",
                    kart.id,
                    dump.frame
                );
            }
        });

        assert_eq!(summary.frames, frames);
        assert_eq!(summary.laps.len(), 3);
    }
}
