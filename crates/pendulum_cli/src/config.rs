//! Runtime configuration for the `pendulum` binary.
//!
//! [`Config`] is the single source of truth for the physical parameters and
//! loop tuning handed to the simulation, independent of where each value
//! came from. Values are resolved in increasing precedence:
//!
//! 1. built-in defaults ([`PhysicsParameters::default`],
//!    [`SimulationConfig::default`])
//! 2. an optional TOML file (`--config`)
//! 3. command-line flags and `PENDULUM_*` environment variables
//!
//! The resolved configuration is validated before it reaches the core, which
//! assumes physically meaningful inputs.
//!
//! # File format
//!
//! ```toml
//! mass = 2.0
//! length = 1.5
//! gravity = 9.81
//! initial_angle = 45.0
//! time_step = 0.004
//! max_frame_delta = 0.1
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use pendulum::{PhysicsParameters, SimulationConfig};
use serde::{Deserialize, Serialize};

use crate::cli::{Cli, ParamArgs};

/// Resolved runtime configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Config {
    /// Physical description of the pendulum.
    pub params: PhysicsParameters,
    /// Fixed step in seconds.
    pub time_step: f64,
    /// Frame-delta ceiling in seconds.
    pub max_frame_delta: f64,
}

impl Default for Config {
    fn default() -> Self {
        let tuning = SimulationConfig::default();
        Self {
            params: PhysicsParameters::default(),
            time_step: tuning.time_step(),
            max_frame_delta: tuning.max_frame_delta(),
        }
    }
}

/// Partial configuration as read from a TOML file.
///
/// Every key is optional; missing keys keep the lower-precedence value.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    /// Bob mass in kilograms.
    pub mass: Option<f64>,
    /// String length in metres.
    pub length: Option<f64>,
    /// Gravitational acceleration in m/s².
    pub gravity: Option<f64>,
    /// Release amplitude in degrees.
    pub initial_angle: Option<f64>,
    /// Fixed step in seconds.
    pub time_step: Option<f64>,
    /// Frame-delta ceiling in seconds.
    pub max_frame_delta: Option<f64>,
}

impl FileConfig {
    /// Reads and parses a TOML configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Read`] if the file cannot be read and
    /// [`ConfigError::Parse`] if it is not valid TOML for this schema.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Parses TOML text.
    ///
    /// # Errors
    ///
    /// Returns the TOML deserialisation error.
    pub fn parse(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }
}

impl Config {
    /// Create a new config with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolves the configuration from CLI arguments and the optional file
    /// they point at, then validates it.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be loaded or the resolved values
    /// are out of range.
    pub fn from_cli(cli: &Cli) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        if let Some(path) = &cli.config {
            let file = FileConfig::load(path)?;
            tracing::info!(path = %path.display(), "loaded config file");
            config.apply_file(&file);
        }
        config.apply_args(cli.param_args());
        config.validate()?;
        tracing::debug!(
            mass = config.params.mass,
            length = config.params.length,
            gravity = config.params.gravity,
            initial_angle = config.params.initial_angle,
            time_step = config.time_step,
            max_frame_delta = config.max_frame_delta,
            "configuration resolved"
        );
        Ok(config)
    }

    /// Overlays values present in a config file.
    pub fn apply_file(&mut self, file: &FileConfig) {
        overlay(&mut self.params.mass, file.mass);
        overlay(&mut self.params.length, file.length);
        overlay(&mut self.params.gravity, file.gravity);
        overlay(&mut self.params.initial_angle, file.initial_angle);
        overlay(&mut self.time_step, file.time_step);
        overlay(&mut self.max_frame_delta, file.max_frame_delta);
    }

    /// Overlays values given on the command line.
    pub fn apply_args(&mut self, args: &ParamArgs) {
        overlay(&mut self.params.mass, args.mass);
        overlay(&mut self.params.length, args.length);
        overlay(&mut self.params.gravity, args.gravity);
        overlay(&mut self.params.initial_angle, args.angle);
        overlay(&mut self.time_step, args.time_step);
        overlay(&mut self.max_frame_delta, args.max_frame_delta);
    }

    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error naming the first out-of-range value.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.params.validate()?;
        SimulationConfig::new(self.time_step, self.max_frame_delta)?;
        Ok(())
    }

    /// Loop tuning for the simulation.
    ///
    /// # Errors
    ///
    /// Returns an error if the step or ceiling is out of range.
    pub fn simulation_config(&self) -> Result<SimulationConfig, ConfigError> {
        Ok(SimulationConfig::new(self.time_step, self.max_frame_delta)?)
    }

    /// Export configuration as a diagnostic string.
    #[must_use]
    pub fn to_diagnostic_string(&self) -> String {
        let lines = [
            format!("Mass: {} kg", self.params.mass),
            format!("Length: {} m", self.params.length),
            format!("Gravity: {} m/s²", self.params.gravity),
            format!("Initial angle: {}°", self.params.initial_angle),
            format!("Time step: {} s", self.time_step),
            format!("Max frame delta: {} s", self.max_frame_delta),
        ];
        lines.join("\n")
    }
}

fn overlay(slot: &mut f64, value: Option<f64>) {
    if let Some(value) = value {
        *slot = value;
    }
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Config file could not be read.
    #[error("failed to read config file {}: {source}", path.display())]
    Read {
        /// The file that was requested.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Config file is not valid TOML for the expected schema.
    #[error("failed to parse config file {}: {source}", path.display())]
    Parse {
        /// The file that was parsed.
        path: PathBuf,
        /// The underlying TOML error.
        #[source]
        source: toml::de::Error,
    },

    /// A resolved value is out of range.
    #[error("invalid configuration: {0}")]
    Invalid(#[from] pendulum::Error),
}
