//! 2D Vector
//!
//! Screen-space vector math for entity motion.
//! X grows to the right, Y grows downward (surface pixel coordinates).

use std::fmt;
use std::ops::{Add, AddAssign, Sub, Neg, Mul};
use serde::{Serialize, Deserialize};

/// 2D vector with `f64` components.
#[derive(Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vec2 {
    /// X component
    pub x: f64,
    /// Y component
    pub y: f64,
}

impl Vec2 {
    /// Zero vector
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    /// Create a new vector.
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Unit vector for a heading in radians.
    ///
    /// Heading 0 points right, heading π/2 points up the screen,
    /// hence the negated Y.
    #[inline]
    pub fn from_heading(heading: f64) -> Self {
        Self {
            x: heading.cos(),
            y: -heading.sin(),
        }
    }

    /// Scale by a scalar.
    #[inline]
    pub fn scale(self, scalar: f64) -> Self {
        Self {
            x: self.x * scalar,
            y: self.y * scalar,
        }
    }

    /// Squared length (avoids sqrt - prefer this for comparisons).
    #[inline]
    pub fn length_squared(self) -> f64 {
        self.x * self.x + self.y * self.y
    }

    /// Length (magnitude).
    #[inline]
    pub fn length(self) -> f64 {
        self.length_squared().sqrt()
    }

    /// Euclidean distance to another point.
    #[inline]
    pub fn distance(self, other: Self) -> f64 {
        (other - self).length()
    }

    /// Negate both components.
    #[inline]
    pub fn negate(self) -> Self {
        Self {
            x: -self.x,
            y: -self.y,
        }
    }

    /// Wrap toroidally into `[-margin, width + margin] x [-margin, height + margin]`.
    ///
    /// Leaving past one edge re-enters at the opposite edge. Positions already
    /// inside the span are returned unchanged.
    #[inline]
    pub fn wrap(self, width: f64, height: f64, margin: f64) -> Self {
        Self {
            x: wrap_axis(self.x, width, margin),
            y: wrap_axis(self.y, height, margin),
        }
    }
}

/// Wrap a single coordinate into `[-margin, extent + margin]`.
///
/// The result is congruent to the input modulo `extent + 2 * margin`.
pub fn wrap_axis(value: f64, extent: f64, margin: f64) -> f64 {
    let low = -margin;
    let high = extent + margin;
    if value >= low && value <= high {
        return value;
    }
    let span = high - low;
    if span <= 0.0 {
        return low;
    }
    let wrapped = low + (value - low).rem_euclid(span);
    // rem_euclid can round up to exactly `span` for tiny negative offsets
    if wrapped > high { low } else { wrapped }
}

// Operator overloads for ergonomics
impl Add for Vec2 {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Vec2 {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Sub for Vec2 {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Neg for Vec2 {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        self.negate()
    }
}

impl Mul<f64> for Vec2 {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: f64) -> Self {
        self.scale(rhs)
    }
}

impl fmt::Debug for Vec2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Vec2({:.3}, {:.3})", self.x, self.y)
    }
}

impl fmt::Display for Vec2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.1}, {:.1})", self.x, self.y)
    }
}

// =============================================================================
// TESTS
// =============================================================================
