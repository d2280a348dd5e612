//! Headless race driver for kart-core.
//!
//! Reads a race description, runs it frame by frame with scripted throttle
//! and steering, and writes one JSON line of kart snapshots per frame:
//!
//! ```text
//! {"frame":0,"karts":[{"id":0,"direction":{"x":1.0,"y":0.0},...}],"laps":[0]}
//! ```

use std::path::{Path, PathBuf};

pub mod grid;
pub mod pickups;
pub mod race_file;
pub mod runner;
pub mod sprites;

pub use grid::GridTrack;
pub use pickups::{PickupBoxes, PickupSpec};
pub use race_file::RaceFile;
pub use runner::{FrameDump, RaceSummary, Runner};

/// Tuning files shipped with kart-core, located from this crate's source tree
/// so the binary finds them from any working directory.
pub fn default_tuning_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("kart-core")
        .join("tuning")
}
