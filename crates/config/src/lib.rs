//! Configuration models and loaders for the Mortar Calculator.

use std::fs::File;
use std::path::Path;

use mortar_core::Charge;
use mortar_core::constants::{CHARGE_VELOCITIES, GRAVITY, MAX_ELEVATION_DEG, MIN_ELEVATION_DEG};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// World and weapon parameters the solver runs against.
///
/// Fields left out of a config file take their value from [`BallisticsConfig::default`],
/// which reproduces the stock game mortar.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct BallisticsConfig {
    /// Downward acceleration (studs/s²).
    pub gravity: f64,
    /// Inclusive lower bound of the elevation band (degrees).
    pub angle_min_deg: f64,
    /// Inclusive upper bound of the elevation band (degrees).
    pub angle_max_deg: f64,
    /// Muzzle velocity per charge, indexed from C0 (studs/s).
    pub charge_velocities: Vec<f64>,
}

impl Default for BallisticsConfig {
    fn default() -> Self {
        Self {
            gravity: GRAVITY,
            angle_min_deg: MIN_ELEVATION_DEG,
            angle_max_deg: MAX_ELEVATION_DEG,
            charge_velocities: CHARGE_VELOCITIES.to_vec(),
        }
    }
}

impl BallisticsConfig {
    /// Charge table in index order.
    pub fn charges(&self) -> Vec<Charge> {
        self.charge_velocities
            .iter()
            .enumerate()
            .map(|(index, &velocity)| Charge::new(index, velocity))
            .collect()
    }

    /// True when `angle_deg` lies inside the elevation band, bounds included.
    #[inline]
    pub fn accepts_elevation(&self, angle_deg: f64) -> bool {
        self.angle_min_deg <= angle_deg && angle_deg <= self.angle_max_deg
    }

    /// Reject parameter sets the solver cannot give meaningful answers for.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.gravity.is_finite() || self.gravity <= 0.0 {
            return Err(ConfigError::Invalid(format!(
                "gravity must be a positive finite number (got {})",
                self.gravity
            )));
        }
        for (name, value) in [
            ("angle_min_deg", self.angle_min_deg),
            ("angle_max_deg", self.angle_max_deg),
        ] {
            if !value.is_finite() || !(0.0..=90.0).contains(&value) {
                return Err(ConfigError::Invalid(format!(
                    "{name} must lie within [0, 90] degrees (got {value})"
                )));
            }
        }
        if self.angle_min_deg > self.angle_max_deg {
            return Err(ConfigError::Invalid(format!(
                "angle_min_deg ({}) exceeds angle_max_deg ({})",
                self.angle_min_deg, self.angle_max_deg
            )));
        }
        if self.charge_velocities.is_empty() {
            return Err(ConfigError::Invalid(
                "charge_velocities must list at least one charge".to_string(),
            ));
        }
        if let Some((index, velocity)) = self
            .charge_velocities
            .iter()
            .enumerate()
            .find(|(_, v)| !v.is_finite() || **v <= 0.0)
        {
            return Err(ConfigError::Invalid(format!(
                "charge C{index} velocity must be a positive finite number (got {velocity})"
            )));
        }
        Ok(())
    }
}

/// Errors that can occur while loading configuration files.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse YAML: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("failed to parse TOML: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("invalid ballistics config: {0}")]
    Invalid(String),
}

/// Load and validate ballistics parameters from a TOML (`.toml`) or YAML file.
pub fn load_ballistics_config<P: AsRef<Path>>(path: P) -> Result<BallisticsConfig, ConfigError> {
    let config: BallisticsConfig = load_record(path)?;
    config.validate()?;
    Ok(config)
}

/// Parse and validate ballistics parameters from an in-memory TOML document.
pub fn ballistics_config_from_toml(contents: &str) -> Result<BallisticsConfig, ConfigError> {
    let config: BallisticsConfig = toml::from_str(contents)?;
    config.validate()?;
    Ok(config)
}

fn load_record<T, P>(path: P) -> Result<T, ConfigError>
where
    T: for<'de> Deserialize<'de>,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    if path.extension().map(|ext| ext == "toml").unwrap_or(false) {
        let contents = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&contents)?)
    } else {
        let reader = File::open(path)?;
        Ok(serde_yaml::from_reader(reader)?)
    }
}
