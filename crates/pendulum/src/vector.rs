//! Two-dimensional vectors for force and motion diagrams.
//!
//! Coordinates are pivot-centred with `x` increasing to the right and `y`
//! increasing downward, matching terminal and canvas conventions:
//!
//! ```text
//!   pivot ──── +x
//!     │╲
//!     │ ╲ L
//!     │θ ╲
//!    +y    ● bob
//! ```

use core::ops::{Add, AddAssign, Mul, Neg, Sub};

/// A vector in the plane of the swing.
///
/// # Example
///
/// ```rust
/// use pendulum::Vector;
///
/// let v = Vector::new(3.0, 4.0);
/// assert_eq!(v.magnitude(), 5.0);
/// assert_eq!((v * 2.0).x, 6.0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vector {
    /// Horizontal component, positive to the right.
    pub x: f64,
    /// Vertical component, positive downward.
    pub y: f64,
}

impl Vector {
    /// Creates a new vector with the given components.
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Returns the zero vector.
    #[inline]
    pub const fn zero() -> Self {
        Self { x: 0.0, y: 0.0 }
    }

    /// Unit vector pointing from the pivot towards the bob at angle `theta`.
    #[inline]
    pub fn radial(theta: f64) -> Self {
        Self {
            x: theta.sin(),
            y: theta.cos(),
        }
    }

    /// Unit vector along the arc in the direction of increasing `theta`.
    #[inline]
    pub fn tangential(theta: f64) -> Self {
        Self {
            x: theta.cos(),
            y: -theta.sin(),
        }
    }

    /// Dot product.
    #[inline]
    pub fn dot(&self, other: Vector) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// Returns the magnitude (length) of the vector.
    #[inline]
    pub fn magnitude(&self) -> f64 {
        self.x.hypot(self.y)
    }

    /// Projection of this vector onto the unit vector `axis`.
    #[inline]
    pub fn project_onto(&self, axis: Vector) -> Vector {
        axis * self.dot(axis)
    }
}

impl Add for Vector {
    type Output = Vector;

    #[inline]
    fn add(self, other: Vector) -> Vector {
        Vector {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }
}

impl AddAssign for Vector {
    #[inline]
    fn add_assign(&mut self, other: Vector) {
        self.x += other.x;
        self.y += other.y;
    }
}

impl Sub for Vector {
    type Output = Vector;

    #[inline]
    fn sub(self, other: Vector) -> Vector {
        Vector {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }
}

impl Neg for Vector {
    type Output = Vector;

    #[inline]
    fn neg(self) -> Vector {
        Vector {
            x: -self.x,
            y: -self.y,
        }
    }
}

impl Mul<f64> for Vector {
    type Output = Vector;

    #[inline]
    fn mul(self, scalar: f64) -> Vector {
        Vector {
            x: self.x * scalar,
            y: self.y * scalar,
        }
    }
}

impl Mul<Vector> for f64 {
    type Output = Vector;

    #[inline]
    fn mul(self, v: Vector) -> Vector {
        v * self
    }
}
