//! Classical fourth-order Runge-Kutta stepping of the pendulum equation.
//!
//! The state vector is `(θ, ω)` with
//!
//! ```text
//! dθ/dt = ω
//! dω/dt = −(g / L) · sin θ
//! ```
//!
//! Angular acceleration is not part of the integrated vector. It is derived
//! from the post-step angle so that it always matches the published `θ`.

use crate::params::PhysicsParameters;
use crate::state::AngularState;

/// Time derivative of `(θ, ω)`.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Derivative {
    d_theta: f64,
    d_omega: f64,
}

impl Derivative {
    #[inline]
    fn at(theta: f64, omega: f64, g_over_l: f64) -> Self {
        Self {
            d_theta: omega,
            d_omega: -g_over_l * theta.sin(),
        }
    }
}

/// Angular acceleration `−(g / L) · sin θ` for a given angle.
///
/// # Example
///
/// ```rust
/// use pendulum::{angular_acceleration, PhysicsParameters};
///
/// let params = PhysicsParameters::default();
/// assert_eq!(angular_acceleration(0.0, &params), 0.0);
/// assert!(angular_acceleration(0.3, &params) < 0.0);
/// ```
#[inline]
pub fn angular_acceleration(theta: f64, params: &PhysicsParameters) -> f64 {
    -params.gravity_over_length() * theta.sin()
}

/// Advances `state` by exactly `dt` seconds.
///
/// Pure and deterministic: the same inputs always produce the same output.
/// The returned state has `alpha` recomputed from its new angle and `time`
/// advanced by `dt`. Parameters are assumed valid (see
/// [`PhysicsParameters::validate`]).
///
/// # Example
///
/// ```rust
/// use pendulum::{step, AngularState, PhysicsParameters};
///
/// let params = PhysicsParameters::default();
/// let state = AngularState::at_rest(&params);
/// let next = step(&state, &params, 0.01);
///
/// // Released from the right, the bob starts swinging left.
/// assert!(next.theta < state.theta);
/// assert!(next.omega < 0.0);
/// assert!((next.time - 0.01).abs() < 1e-15);
/// ```
pub fn step(state: &AngularState, params: &PhysicsParameters, dt: f64) -> AngularState {
    let g_over_l = params.gravity_over_length();
    let half = dt / 2.0;
    let (theta, omega) = (state.theta, state.omega);

    let k1 = Derivative::at(theta, omega, g_over_l);
    let k2 = Derivative::at(theta + k1.d_theta * half, omega + k1.d_omega * half, g_over_l);
    let k3 = Derivative::at(theta + k2.d_theta * half, omega + k2.d_omega * half, g_over_l);
    let k4 = Derivative::at(theta + k3.d_theta * dt, omega + k3.d_omega * dt, g_over_l);

    let sixth = dt / 6.0;
    let theta = theta + sixth * (k1.d_theta + 2.0 * k2.d_theta + 2.0 * k3.d_theta + k4.d_theta);
    let omega = omega + sixth * (k1.d_omega + 2.0 * k2.d_omega + 2.0 * k3.d_omega + k4.d_omega);

    AngularState {
        theta,
        omega,
        alpha: -g_over_l * theta.sin(),
        time: state.time + dt,
    }
}
