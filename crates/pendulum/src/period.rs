//! Oscillation period at any amplitude.
//!
//! The period of a simple pendulum released from rest at amplitude `θ0` is
//!
//! ```text
//! T = 4·sqrt(L/g)·K(sin(θ0/2))
//! ```
//!
//! where `K` is the complete elliptic integral of the first kind. Using
//! `K(k) = π / (2·AGM(1, sqrt(1 − k²)))` and `sqrt(1 − sin²(θ0/2)) = cos(θ0/2)`
//! this becomes
//!
//! ```text
//! T = 2π·sqrt(L/g) / AGM(1, cos(θ0/2))
//! ```
//!
//! The arithmetic-geometric mean converges quadratically, so a handful of
//! iterations reach double precision for every amplitude short of 180°.

use core::f64::consts::TAU;

/// Upper bound on AGM iterations.
pub const AGM_MAX_ITERATIONS: usize = 10;

/// Absolute gap between the two means at which the AGM is converged.
pub const AGM_TOLERANCE: f64 = 1e-9;

/// Period for small amplitudes, `2π·sqrt(L/g)`.
///
/// # Example
///
/// ```rust
/// use pendulum::small_angle_period;
///
/// // A one metre pendulum ticks roughly every two seconds.
/// assert!((small_angle_period(1.0, 9.81) - 2.006).abs() < 1e-3);
/// ```
#[inline]
pub fn small_angle_period(length: f64, gravity: f64) -> f64 {
    TAU * (length / gravity).sqrt()
}

/// Arithmetic-geometric mean of `a` and `b`.
///
/// Stops once the means agree to within [`AGM_TOLERANCE`] or after
/// [`AGM_MAX_ITERATIONS`] rounds, returning the arithmetic mean reached.
pub fn arithmetic_geometric_mean(a: f64, b: f64) -> f64 {
    let (mut a, mut b) = (a, b);
    for _ in 0..AGM_MAX_ITERATIONS {
        if (a - b).abs() < AGM_TOLERANCE {
            break;
        }
        (a, b) = ((a + b) / 2.0, (a * b).sqrt());
    }
    a
}

/// Exact period for a release amplitude in radians.
///
/// A zero amplitude returns the small-angle limit directly. The sign of the
/// amplitude does not matter.
///
/// # Example
///
/// ```rust
/// use pendulum::{exact_period, small_angle_period};
///
/// let small = small_angle_period(1.0, 9.81);
/// let wide = exact_period(90f64.to_radians(), 1.0, 9.81);
///
/// // At 90° the swing takes about 18% longer than the small-angle estimate.
/// assert!((wide / small - 1.18034).abs() < 1e-4);
/// ```
pub fn exact_period(amplitude: f64, length: f64, gravity: f64) -> f64 {
    let small = small_angle_period(length, gravity);
    if amplitude == 0.0 {
        return small;
    }
    small / arithmetic_geometric_mean(1.0, (amplitude / 2.0).cos())
}
