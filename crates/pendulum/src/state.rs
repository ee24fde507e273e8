//! The instantaneous angular state of the pendulum.

use crate::params::PhysicsParameters;

/// Angular state of the bob at one instant of simulated time.
///
/// `theta` is measured from the downward vertical, positive to the right.
/// Only `theta` and `omega` are integrated; `alpha` is recomputed from
/// `theta` after every step so that it always matches the current angle.
///
/// # Example
///
/// ```rust
/// use pendulum::{AngularState, PhysicsParameters};
///
/// let params = PhysicsParameters::default();
/// let state = AngularState::at_rest(&params);
/// assert_eq!(state.omega, 0.0);
/// assert_eq!(state.time, 0.0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AngularState {
    /// Angle from the vertical, in radians.
    pub theta: f64,
    /// Angular velocity, in rad/s.
    pub omega: f64,
    /// Angular acceleration, in rad/s².
    pub alpha: f64,
    /// Simulated time since the last reset, in seconds.
    pub time: f64,
}

impl AngularState {
    /// Creates a state from an angle and angular velocity at time zero.
    ///
    /// `alpha` starts at zero; it is filled in by the first integration step.
    #[inline]
    pub const fn new(theta: f64, omega: f64) -> Self {
        Self {
            theta,
            omega,
            alpha: 0.0,
            time: 0.0,
        }
    }

    /// The state the simulation is (re)initialised to: released from the
    /// configured amplitude with no velocity.
    #[inline]
    pub fn at_rest(params: &PhysicsParameters) -> Self {
        Self::new(params.initial_angle_radians(), 0.0)
    }

    /// Angle from the vertical, in degrees.
    #[inline]
    pub fn theta_degrees(&self) -> f64 {
        self.theta.to_degrees()
    }
}
