//! Global handling parameters and their YAML loader.
//!
//! Every kart in a race shares one [`Tuning`]. The built-in defaults match
//! `tuning/default.yaml`; alternative sets live next to it:
//!
//! ```text
//! tuning/
//! ├── default.yaml
//! └── slippery.yaml
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error type for tuning loading operations.
#[derive(Debug, Error)]
pub enum TuningError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("YAML parse error: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("Tuning not found: {0}")]
    NotFound(String),
    #[error("Invalid tuning: {0}")]
    Invalid(&'static str),
}

/// Physics constants shared by all vehicles.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Vehicle mass
    pub mass: f64,
    /// Quadratic air drag coefficient
    pub drag_coefficient: f64,
    /// Linear rolling resistance coefficient
    pub roll_coefficient: f64,
    /// Fixed frame time step in seconds
    pub time_step: f64,
    /// Magnitude of the force pushed into both vehicles of an overlapping pair
    pub collision_impulse: f64,
    /// Fraction of lateral velocity kept per frame
    pub normal_grip: f64,
    /// Fraction of lateral velocity kept per frame while drifting
    pub drift_grip: f64,
    /// Vertical gap between spawn positions
    pub spawn_spacing: f64,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            mass: 100.0,
            drag_coefficient: 0.05,
            roll_coefficient: 1.5,
            time_step: 0.1,
            collision_impulse: 3000.0,
            normal_grip: 0.9,
            drift_grip: 0.97,
            spawn_spacing: 20.0,
        }
    }
}

impl Tuning {
    /// Parse a tuning document and reject values the integrator cannot use.
    pub fn from_yaml(contents: &str) -> Result<Self, TuningError> {
        let tuning: Tuning = serde_yaml::from_str(contents)?;
        tuning.validate()?;
        Ok(tuning)
    }

    pub fn validate(&self) -> Result<(), TuningError> {
        let fields = [
            self.mass,
            self.drag_coefficient,
            self.roll_coefficient,
            self.time_step,
            self.collision_impulse,
            self.normal_grip,
            self.drift_grip,
            self.spawn_spacing,
        ];
        if fields.iter().any(|value| !value.is_finite()) {
            return Err(TuningError::Invalid("every value must be finite"));
        }
        if self.mass <= 0.0 {
            return Err(TuningError::Invalid("mass must be positive"));
        }
        if self.time_step <= 0.0 {
            return Err(TuningError::Invalid("time_step must be positive"));
        }
        if self.drag_coefficient < 0.0 || self.roll_coefficient < 0.0 {
            return Err(TuningError::Invalid("resistance coefficients must not be negative"));
        }
        if self.collision_impulse < 0.0 {
            return Err(TuningError::Invalid("collision_impulse must not be negative"));
        }
        if self.spawn_spacing < 0.0 {
            return Err(TuningError::Invalid("spawn_spacing must not be negative"));
        }
        for grip in [self.normal_grip, self.drift_grip] {
            if !(0.0..=1.0).contains(&grip) {
                return Err(TuningError::Invalid("grip must be within 0..=1"));
            }
        }
        Ok(())
    }
}

/// Tuning loader with configurable base directory.
pub struct TuningLoader {
    base_path: PathBuf,
}

impl TuningLoader {
    pub fn new<P: AsRef<Path>>(base_path: P) -> Self {
        Self {
            base_path: base_path.as_ref().to_path_buf(),
        }
    }

    /// Load a tuning set by name (without .yaml extension).
    ///
    /// # Example
    /// ```ignore
    /// let loader = TuningLoader::new("tuning");
    /// let tuning = loader.load("slippery")?;
    /// ```
    pub fn load(&self, name: &str) -> Result<Tuning, TuningError> {
        let path = self.base_path.join(format!("{}.yaml", name));
        if !path.exists() {
            return Err(TuningError::NotFound(name.to_string()));
        }
        let contents = fs::read_to_string(&path)?;
        let tuning = Tuning::from_yaml(&contents)?;
        log::debug!("loaded tuning {:?} from {}", name, path.display());
        Ok(tuning)
    }

    /// List all available tuning sets.
    pub fn list(&self) -> Result<Vec<String>, TuningError> {
        if !self.base_path.exists() {
            return Ok(vec![]);
        }

        let mut names = Vec::new();
        for entry in fs::read_dir(&self.base_path)? {
            let entry = entry?;
            let file_name = entry.file_name();
            let name = file_name.to_string_lossy();
            if name.ends_with(".yaml") {
                names.push(name.trim_end_matches(".yaml").to_string());
            }
        }
        names.sort();
        Ok(names)
    }
}

// =============================================================================
// Tests
// =============================================================================
