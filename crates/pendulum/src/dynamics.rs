//! Kinematic and dynamic quantities derived from an angular state.
//!
//! Everything here is a pure function of `(AngularState, PhysicsParameters)`.
//! Scalar helpers return magnitudes; [`ForceDiagram`] carries the same
//! quantities as vectors in the pivot-centred frame of [`Vector`], and
//! [`Readout`] bundles the lot for a renderer.

use crate::params::PhysicsParameters;
use crate::period::{exact_period, small_angle_period};
use crate::state::AngularState;
use crate::vector::Vector;

/// Linear speed of the bob, `|ω|·L`.
#[inline]
pub fn linear_speed(state: &AngularState, params: &PhysicsParameters) -> f64 {
    state.omega.abs() * params.length
}

/// Magnitude of the tangential acceleration, `|g·sin θ|`.
#[inline]
pub fn tangential_acceleration(state: &AngularState, params: &PhysicsParameters) -> f64 {
    (params.gravity * state.theta.sin()).abs()
}

/// Radial (centripetal) acceleration, `L·ω²`.
#[inline]
pub fn radial_acceleration(state: &AngularState, params: &PhysicsParameters) -> f64 {
    params.length * state.omega * state.omega
}

/// Magnitude of the total acceleration, `sqrt(a_t² + a_n²)`.
#[inline]
pub fn total_acceleration(state: &AngularState, params: &PhysicsParameters) -> f64 {
    tangential_acceleration(state, params).hypot(radial_acceleration(state, params))
}

/// String tension, `m·(g·cos θ + L·ω²)`.
///
/// # Example
///
/// ```rust
/// use pendulum::{tension, AngularState, PhysicsParameters};
///
/// let params = PhysicsParameters::new(2.0, 1.0, 9.81, 0.0)?;
/// // Hanging still, the string carries the full weight.
/// let t = tension(&AngularState::new(0.0, 0.0), &params);
/// assert!((t - 2.0 * 9.81).abs() < 1e-12);
/// # Ok::<(), pendulum::Error>(())
/// ```
#[inline]
pub fn tension(state: &AngularState, params: &PhysicsParameters) -> f64 {
    params.mass * (params.gravity * state.theta.cos() + radial_acceleration(state, params))
}

/// Weight of the bob, `m·g`.
#[inline]
pub fn gravity_force(params: &PhysicsParameters) -> f64 {
    params.mass * params.gravity
}

/// Gravity split along the string and along the arc.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GravityComponents {
    /// Full weight vector, straight down.
    pub total: Vector,
    /// Component along the string, `G·cos θ` on the radial unit vector.
    pub radial: Vector,
    /// Remainder `G − G_n`, along the arc and always restoring.
    pub tangential: Vector,
}

impl GravityComponents {
    /// Signed magnitude of the radial component, `G·cos θ`.
    ///
    /// Negative once the bob rises above the pivot.
    pub fn radial_magnitude(&self) -> f64 {
        self.radial.magnitude() * self.radial.dot(self.total).signum()
    }

    /// Magnitude of the tangential component, `G·|sin θ|`.
    pub fn tangential_magnitude(&self) -> f64 {
        self.tangential.magnitude()
    }
}

/// Decomposes the weight into radial and tangential components.
///
/// The radial part is the projection onto the string direction; the
/// tangential part is what remains after subtracting it.
pub fn gravity_components(state: &AngularState, params: &PhysicsParameters) -> GravityComponents {
    let total = Vector::new(0.0, gravity_force(params));
    let radial = Vector::radial(state.theta) * (gravity_force(params) * state.theta.cos());
    GravityComponents {
        total,
        radial,
        tangential: total - radial,
    }
}

/// Mechanical energy with the lowest point as the potential reference.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Energy {
    /// `½·m·(L·ω)²`, in joules.
    pub kinetic: f64,
    /// `m·g·L·(1 − cos θ)`, in joules.
    pub potential: f64,
}

impl Energy {
    /// Kinetic plus potential energy.
    #[inline]
    pub fn total(&self) -> f64 {
        self.kinetic + self.potential
    }
}

/// Kinetic and potential energy of the bob.
pub fn energy(state: &AngularState, params: &PhysicsParameters) -> Energy {
    let speed = linear_speed(state, params);
    Energy {
        kinetic: 0.5 * params.mass * speed * speed,
        potential: params.mass * params.gravity * params.length * (1.0 - state.theta.cos()),
    }
}

/// Position of the bob relative to the pivot.
#[inline]
pub fn bob_position(state: &AngularState, params: &PhysicsParameters) -> Vector {
    Vector::radial(state.theta) * params.length
}

/// Vector quantities for drawing arrows on the bob.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ForceDiagram {
    /// Bob position relative to the pivot, in metres.
    pub position: Vector,
    /// Velocity `L·ω` along the arc.
    pub velocity: Vector,
    /// Tangential acceleration `L·α` along the arc.
    pub tangential_acceleration: Vector,
    /// Centripetal acceleration `L·ω²` towards the pivot.
    pub radial_acceleration: Vector,
    /// String tension acting on the bob, towards the pivot.
    pub tension: Vector,
    /// Weight and its decomposition.
    pub gravity: GravityComponents,
}

impl ForceDiagram {
    /// Computes every vector for the given state.
    pub fn new(state: &AngularState, params: &PhysicsParameters) -> Self {
        let along_string = Vector::radial(state.theta);
        let along_arc = Vector::tangential(state.theta);
        Self {
            position: along_string * params.length,
            velocity: along_arc * (params.length * state.omega),
            tangential_acceleration: along_arc * (params.length * state.alpha),
            radial_acceleration: -along_string * radial_acceleration(state, params),
            tension: -along_string * tension(state, params),
            gravity: gravity_components(state, params),
        }
    }
}

/// Everything a renderer shows for one frame.
///
/// # Example
///
/// ```rust
/// use pendulum::{AngularState, PhysicsParameters, Readout};
///
/// let params = PhysicsParameters::default();
/// let readout = Readout::new(&AngularState::at_rest(&params), &params);
///
/// assert_eq!(readout.speed, 0.0);
/// assert!(readout.exact_period > readout.small_angle_period);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Readout {
    /// The published angular state.
    pub state: AngularState,
    /// Linear speed, m/s.
    pub speed: f64,
    /// Tangential acceleration magnitude, m/s².
    pub tangential_acceleration: f64,
    /// Centripetal acceleration, m/s².
    pub radial_acceleration: f64,
    /// Total acceleration magnitude, m/s².
    pub total_acceleration: f64,
    /// String tension, N.
    pub tension: f64,
    /// Weight, N.
    pub gravity_force: f64,
    /// Mechanical energy, J.
    pub energy: Energy,
    /// Period at the configured amplitude, s.
    pub exact_period: f64,
    /// Small-angle period `2π·sqrt(L/g)`, s.
    pub small_angle_period: f64,
    /// Vectors for the force diagram.
    pub vectors: ForceDiagram,
}

impl Readout {
    /// Derives every display quantity from a state and its parameters.
    pub fn new(state: &AngularState, params: &PhysicsParameters) -> Self {
        Self {
            state: *state,
            speed: linear_speed(state, params),
            tangential_acceleration: tangential_acceleration(state, params),
            radial_acceleration: radial_acceleration(state, params),
            total_acceleration: total_acceleration(state, params),
            tension: tension(state, params),
            gravity_force: gravity_force(params),
            energy: energy(state, params),
            exact_period: exact_period(
                params.initial_angle_radians(),
                params.length,
                params.gravity,
            ),
            small_angle_period: small_angle_period(params.length, params.gravity),
            vectors: ForceDiagram::new(state, params),
        }
    }
}
