//! YAML description of a headless race.
//!
//! ```yaml
//! track:
//!   tile_size: 32
//!   start: { x: 48.0, y: 40.0 }
//!   rows:
//!     - "##########"
//!     - "#........#"
//!   checkpoints:
//!     - { x: 256.0, y: 32.0, w: 32, h: 64 }
//! pickups:
//!   - { area: { x: 128.0, y: 40.0, w: 16, h: 16 }, kind: banana }
//! karts: 3
//! frames: 600
//! throttle: 1500.0
//! steering:
//!   - { from: 100, to: 130, degrees: 3.0, drift: true }
//! ```

use std::fs;
use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use kart_core::{Rect, Vec2};

use crate::grid::GridTrack;
use crate::pickups::PickupSpec;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackSpec {
    pub tile_size: u32,
    pub start: Vec2,
    pub rows: Vec<String>,
    #[serde(default)]
    pub checkpoints: Vec<Rect>,
}

impl TrackSpec {
    pub fn build(&self) -> anyhow::Result<GridTrack> {
        GridTrack::parse(&self.rows, self.tile_size, self.start, self.checkpoints.clone())
    }
}

/// Steering input held for a range of frames, applied to every kart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SteeringSpan {
    pub from: u64,
    pub to: u64,
    pub degrees: f64,
    #[serde(default)]
    pub drift: bool,
}

impl SteeringSpan {
    pub fn covers(&self, frame: u64) -> bool {
        (self.from..self.to).contains(&frame)
    }
}

fn default_karts() -> usize {
    1
}

fn default_frames() -> u64 {
    600
}

fn default_kart_size() -> (u32, u32) {
    (32, 16)
}

fn default_respawn() -> u32 {
    300
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RaceFile {
    pub track: TrackSpec,
    #[serde(default)]
    pub pickups: Vec<PickupSpec>,
    #[serde(default = "default_karts")]
    pub karts: usize,
    #[serde(default = "default_kart_size")]
    pub kart_size: (u32, u32),
    #[serde(default = "default_frames")]
    pub frames: u64,
    /// Engine force pushed along each kart's heading every frame
    #[serde(default)]
    pub throttle: f64,
    #[serde(default)]
    pub steering: Vec<SteeringSpan>,
    /// Fire a powerup as soon as it is picked up
    #[serde(default)]
    pub auto_use: bool,
    #[serde(default = "default_respawn")]
    pub pickup_respawn: u32,
}

impl RaceFile {
    pub fn from_yaml(contents: &str) -> anyhow::Result<Self> {
        Ok(serde_yaml::from_str(contents)?)
    }

    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("failed to read race file {}", path.display()))?;
        Self::from_yaml(&contents)
            .with_context(|| format!("failed to parse race file {}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kart_core::PowerupKind;
    use std::io::Write;

    const MINIMAL: &str = r#"
track:
  tile_size: 16
  start: { x: 20.0, y: 20.0 }
  rows:
    - '####'
    - '#..#'
    - '####'
"#;

    #[test]
    fn test_minimal_defaults() {
        let race = RaceFile::from_yaml(MINIMAL).unwrap();
        assert_eq!(race.karts, 1);
        assert_eq!(race.frames, 600);
        assert_eq!(race.kart_size, (32, 16));
        assert!(race.pickups.is_empty());
        assert!(race.track.build().is_ok());
    }

    #[test]
    fn test_full_document() {
        let text = format!(
            "{}{}",
            MINIMAL,
            r#"
pickups:
  - { area: { x: 16.0, y: 16.0, w: 8, h: 8 }, kind: oil }
karts: 4
frames: 30
throttle: 1200.0
steering:
  - { from: 5, to: 10, degrees: -2.5, drift: true }
auto_use: true
"#
        );
        let race = RaceFile::from_yaml(&text).unwrap();

        assert_eq!(race.karts, 4);
        assert_eq!(race.pickups[0].kind, PowerupKind::Oil);
        assert!(race.steering[0].covers(5));
        assert!(!race.steering[0].covers(10));
        assert!(race.steering[0].drift);
        assert!(race.auto_use);
    }

    #[test]
    fn test_load_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(MINIMAL.as_bytes()).unwrap();

        let race = RaceFile::load(file.path()).unwrap();
        assert_eq!(race.track.tile_size, 16);
    }

    #[test]
    fn test_missing_file_reports_path() {
        let err = RaceFile::load(Path::new("/nonexistent/race.yaml")).unwrap_err();
        assert!(format!("{}", err).contains("/nonexistent/race.yaml"));
    }
}
