//! Stepping policy and the stop conditions that end a swing early.
//!
//! A [`SimulationMode`] decides whether the loop integrates at all and, for
//! the two `PauseAt*` modes, which kinematic milestone halts it:
//!
//! - [`SimulationMode::PauseAtBottom`] halts on the first step whose angle
//!   crosses (or lands on) the vertical.
//! - [`SimulationMode::PauseAtTop`] halts at the turning point on the right
//!   side of the swing, where the angular velocity changes sign.
//!
//! Each condition fires at most once per crossing. A step that starts on
//! the snapped value (angle exactly 0, or angular velocity exactly 0) never
//! counts as a crossing, so resuming from a stop never re-triggers it.

use core::fmt;
use core::str::FromStr;

use crate::state::AngularState;

/// Minimum pre-step angle, in radians, for turning-point detection.
///
/// The angular velocity changes sign at both ends of the swing. Requiring a
/// clearly positive angle restricts [`SimulationMode::PauseAtTop`] to the
/// right-hand peak and keeps it from firing on numerical noise near the
/// bottom when the amplitude is tiny.
pub const TOP_DETECTION_THRESHOLD: f64 = 0.01;

/// How the simulation loop treats elapsed time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum SimulationMode {
    /// Integrate continuously.
    Running,
    /// Integrate nothing; elapsed time is discarded.
    #[default]
    Paused,
    /// Integrate until the bob passes the lowest point, then pause.
    PauseAtBottom,
    /// Integrate until the bob reaches its right-hand peak, then pause.
    PauseAtTop,
}

impl SimulationMode {
    /// Every mode, in display order.
    pub const ALL: [Self; 4] = [
        Self::Running,
        Self::Paused,
        Self::PauseAtBottom,
        Self::PauseAtTop,
    ];

    /// Returns the canonical kebab-case name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Running => "running",
            Self::Paused => "paused",
            Self::PauseAtBottom => "pause-at-bottom",
            Self::PauseAtTop => "pause-at-top",
        }
    }

    /// Whether the loop integrates in this mode.
    #[inline]
    pub fn is_stepping(&self) -> bool {
        !matches!(self, Self::Paused)
    }

    /// Checks the active stop condition against one integration step.
    ///
    /// `before` and `after` are the states on either side of the step.
    /// Returns the event that fired, or `None` if the step should not halt
    /// the simulation. `Running` and `Paused` never fire.
    ///
    /// # Example
    ///
    /// ```rust
    /// use pendulum::{AngularState, SimulationMode, StopEvent};
    ///
    /// let before = AngularState::new(0.01, -2.0);
    /// let after = AngularState::new(-0.01, -2.0);
    ///
    /// assert_eq!(
    ///     SimulationMode::PauseAtBottom.stop_event(&before, &after),
    ///     Some(StopEvent::ReachedBottom)
    /// );
    /// assert_eq!(SimulationMode::Running.stop_event(&before, &after), None);
    /// ```
    pub fn stop_event(&self, before: &AngularState, after: &AngularState) -> Option<StopEvent> {
        match self {
            Self::Running | Self::Paused => None,
            Self::PauseAtBottom => {
                crosses_zero(before.theta, after.theta).then_some(StopEvent::ReachedBottom)
            }
            Self::PauseAtTop => (before.theta > TOP_DETECTION_THRESHOLD
                && crosses_zero(before.omega, after.omega))
            .then_some(StopEvent::ReachedTop),
        }
    }
}

/// Sign change from a non-zero value, inclusive of landing exactly on zero.
#[inline]
fn crosses_zero(before: f64, after: f64) -> bool {
    (before > 0.0 && after <= 0.0) || (before < 0.0 && after >= 0.0)
}

impl fmt::Display for SimulationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SimulationMode {
    type Err = ParseModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('_', "-").as_str() {
            "running" | "run" => Ok(Self::Running),
            "paused" | "pause" => Ok(Self::Paused),
            "pause-at-bottom" | "bottom" => Ok(Self::PauseAtBottom),
            "pause-at-top" | "top" => Ok(Self::PauseAtTop),
            _ => Err(ParseModeError(s.to_string())),
        }
    }
}

/// Error returned when parsing an unknown mode name.
///
/// Accepted names (case-insensitive, `_` and `-` interchangeable):
/// `running`, `paused`, `pause-at-bottom`, `pause-at-top`, and the short
/// forms `run`, `pause`, `bottom`, `top`.
///
/// ```rust
/// use pendulum::SimulationMode;
///
/// assert!("PAUSE_AT_TOP".parse::<SimulationMode>().is_ok());
/// assert!("sideways".parse::<SimulationMode>().is_err());
/// ```
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid simulation mode: {0:?}")]
pub struct ParseModeError(pub String);

/// A kinematic milestone that halted the simulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum StopEvent {
    /// The bob passed through the lowest point.
    ReachedBottom,
    /// The bob reached its right-hand turning point.
    ReachedTop,
}

impl StopEvent {
    /// Removes numerical residue at the milestone.
    ///
    /// The bottom snaps the angle (and with it the angular acceleration) to
    /// exactly zero; the top snaps the angular velocity to exactly zero.
    pub fn snap(&self, state: &mut AngularState) {
        match self {
            Self::ReachedBottom => {
                state.theta = 0.0;
                state.alpha = 0.0;
            }
            Self::ReachedTop => state.omega = 0.0,
        }
    }
}

impl fmt::Display for StopEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ReachedBottom => f.write_str("reached bottom"),
            Self::ReachedTop => f.write_str("reached top"),
        }
    }
}
