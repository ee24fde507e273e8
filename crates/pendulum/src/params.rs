//! Physical parameters and loop tuning.

use crate::error::{Error, Result};

/// Standard gravity at the Earth's surface, in m/s².
pub const STANDARD_GRAVITY: f64 = 9.81;

/// Default fixed integration step: 240 steps per simulated second.
pub const DEFAULT_TIME_STEP: f64 = 1.0 / 240.0;

/// Default ceiling on a single frame's wall-clock delta, in seconds.
///
/// Bounds the number of catch-up steps after a stall, e.g. when the host
/// window was hidden for a while.
pub const DEFAULT_MAX_FRAME_DELTA: f64 = 0.1;

/// Returns a frame interval for a given number of frames per second.
///
/// # Example
///
/// ```rust
/// use pendulum::fps;
///
/// assert!((fps(60) - 1.0 / 60.0).abs() < 1e-12);
/// ```
#[inline]
pub fn fps(n: u32) -> f64 {
    1.0 / n as f64
}

/// Physical description of the pendulum.
///
/// The simulation treats a value of this type as a read-only snapshot: it
/// is copied into the loop and may be swapped between frames. Values built
/// through [`PhysicsParameters::new`] are validated; values assembled by
/// hand or deserialized should go through [`PhysicsParameters::validate`]
/// before reaching the simulation.
///
/// # Example
///
/// ```rust
/// use pendulum::PhysicsParameters;
///
/// let params = PhysicsParameters::new(2.0, 1.5, 9.81, 20.0)?;
/// assert!((params.initial_angle_radians() - 20f64.to_radians()).abs() < 1e-12);
/// # Ok::<(), pendulum::Error>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawPhysicsParameters"))]
pub struct PhysicsParameters {
    /// Bob mass in kilograms.
    pub mass: f64,
    /// String length in metres.
    pub length: f64,
    /// Gravitational acceleration in m/s².
    pub gravity: f64,
    /// Release amplitude in degrees, positive to the right.
    pub initial_angle: f64,
}

impl PhysicsParameters {
    /// Creates validated parameters.
    ///
    /// # Errors
    ///
    /// Returns an [`Error`] naming the first out-of-range field.
    pub fn new(mass: f64, length: f64, gravity: f64, initial_angle: f64) -> Result<Self> {
        let params = Self {
            mass,
            length,
            gravity,
            initial_angle,
        };
        params.validate()?;
        Ok(params)
    }

    /// Checks every field against its physical range.
    ///
    /// # Errors
    ///
    /// Returns an [`Error`] naming the first out-of-range field.
    pub fn validate(&self) -> Result<()> {
        if !(self.mass.is_finite() && self.mass > 0.0) {
            return Err(Error::InvalidMass(self.mass));
        }
        if !(self.length.is_finite() && self.length > 0.0) {
            return Err(Error::InvalidLength(self.length));
        }
        if !(self.gravity.is_finite() && self.gravity > 0.0) {
            return Err(Error::InvalidGravity(self.gravity));
        }
        if !(self.initial_angle.is_finite() && self.initial_angle.abs() < 180.0) {
            return Err(Error::InvalidAngle(self.initial_angle));
        }
        Ok(())
    }

    /// Returns a copy with a different release amplitude, in degrees.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidAngle`] if the angle is out of range.
    pub fn with_initial_angle(self, degrees: f64) -> Result<Self> {
        let params = Self {
            initial_angle: degrees,
            ..self
        };
        params.validate()?;
        Ok(params)
    }

    /// Release amplitude in radians.
    #[inline]
    pub fn initial_angle_radians(&self) -> f64 {
        self.initial_angle.to_radians()
    }

    /// Ratio `g / L`, the square of the small-angle angular frequency.
    #[inline]
    pub fn gravity_over_length(&self) -> f64 {
        self.gravity / self.length
    }
}

impl Default for PhysicsParameters {
    /// One kilogram on a one metre string under standard gravity, released
    /// from 30°.
    fn default() -> Self {
        Self {
            mass: 1.0,
            length: 1.0,
            gravity: STANDARD_GRAVITY,
            initial_angle: 30.0,
        }
    }
}

/// Fixed-step loop tuning.
///
/// # Example
///
/// ```rust
/// use pendulum::SimulationConfig;
///
/// let config = SimulationConfig::new(0.016, 0.1)?;
/// assert_eq!(config.time_step(), 0.016);
/// # Ok::<(), pendulum::Error>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawSimulationConfig"))]
pub struct SimulationConfig {
    time_step: f64,
    max_frame_delta: f64,
}

impl SimulationConfig {
    /// Creates loop tuning with a fixed step and a frame-delta ceiling.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidTimeStep`] if `time_step` is not finite and
    /// positive, or [`Error::InvalidMaxFrameDelta`] if `max_frame_delta` is
    /// not finite or smaller than `time_step`.
    pub fn new(time_step: f64, max_frame_delta: f64) -> Result<Self> {
        if !(time_step.is_finite() && time_step > 0.0) {
            return Err(Error::InvalidTimeStep(time_step));
        }
        if !(max_frame_delta.is_finite() && max_frame_delta >= time_step) {
            return Err(Error::InvalidMaxFrameDelta(max_frame_delta));
        }
        Ok(Self {
            time_step,
            max_frame_delta,
        })
    }

    /// The fixed integration step, in seconds.
    #[inline]
    pub fn time_step(&self) -> f64 {
        self.time_step
    }

    /// The ceiling applied to each frame's wall-clock delta, in seconds.
    #[inline]
    pub fn max_frame_delta(&self) -> f64 {
        self.max_frame_delta
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            time_step: DEFAULT_TIME_STEP,
            max_frame_delta: DEFAULT_MAX_FRAME_DELTA,
        }
    }
}

// Deserialized values pass through the same validation as the constructors.

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawPhysicsParameters {
    mass: f64,
    length: f64,
    gravity: f64,
    initial_angle: f64,
}

#[cfg(feature = "serde")]
impl TryFrom<RawPhysicsParameters> for PhysicsParameters {
    type Error = Error;

    fn try_from(raw: RawPhysicsParameters) -> Result<Self> {
        Self::new(raw.mass, raw.length, raw.gravity, raw.initial_angle)
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawSimulationConfig {
    time_step: f64,
    max_frame_delta: f64,
}

#[cfg(feature = "serde")]
impl TryFrom<RawSimulationConfig> for SimulationConfig {
    type Error = Error;

    fn try_from(raw: RawSimulationConfig) -> Result<Self> {
        Self::new(raw.time_step, raw.max_frame_delta)
    }
}
