//! Three-component vector used for points, directions and colors.
//!
//! `Vec3` is a plain `Copy` value type. Geometry code reads it through
//! `x()/y()/z()`, color code through `r()/g()/b()`; both name the same
//! three stored components.
//!
//! # Scalar arithmetic
//!
//! Scalars broadcast to every component. `+` and `*` are commutative, `-` is
//! not: `s - v` is `(s - x, s - y, s - z)` while `v - s` is
//! `(x - s, y - s, z - s)`, so `(v - s) + s == v` always holds.
//!
//! # Usage
//! ```
//! use ray_vec_core::Vec3;
//!
//! let v = Vec3::new(1.0, 2.0, 3.0);
//! assert_eq!(5.0 - v, Vec3::new(4.0, 3.0, 2.0));
//! assert_eq!(v - 5.0, Vec3::new(-4.0, -3.0, -2.0));
//! assert_eq!(v.to_string(), "1 2 3");
//! ```

use super::error::VecError;
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{
    Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign,
};

/// Components below this magnitude count as zero in [`Vec3::near_zero`].
pub const NEAR_ZERO_EPSILON: f32 = 1e-9;

/// 3D vector of `f32` components.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
#[repr(transparent)]
pub struct Vec3 {
    e: [f32; 3],
}

/// A position in world space.
pub type Point3 = Vec3;

/// A linear RGB color, one channel per component.
pub type Color = Vec3;

impl Vec3 {
    /// The zero vector.
    pub const ZERO: Vec3 = Vec3 { e: [0.0; 3] };

    #[inline]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { e: [x, y, z] }
    }

    /// Broadcast one value to all three components.
    #[inline]
    pub const fn splat(s: f32) -> Self {
        Self { e: [s, s, s] }
    }

    #[inline]
    pub fn x(&self) -> f32 {
        self.e[0]
    }

    #[inline]
    pub fn y(&self) -> f32 {
        self.e[1]
    }

    #[inline]
    pub fn z(&self) -> f32 {
        self.e[2]
    }

    /// Red channel, same storage as [`Vec3::x`].
    #[inline]
    pub fn r(&self) -> f32 {
        self.e[0]
    }

    /// Green channel, same storage as [`Vec3::y`].
    #[inline]
    pub fn g(&self) -> f32 {
        self.e[1]
    }

    /// Blue channel, same storage as [`Vec3::z`].
    #[inline]
    pub fn b(&self) -> f32 {
        self.e[2]
    }

    #[inline]
    pub fn as_array(&self) -> &[f32; 3] {
        &self.e
    }

    /// Checked component read.
    ///
    /// # Errors
    /// Returns [`VecError::IndexOutOfRange`] when `index` is not 0, 1 or 2.
    pub fn get(&self, index: usize) -> Result<f32, VecError> {
        self.e
            .get(index)
            .copied()
            .ok_or(VecError::IndexOutOfRange { index })
    }

    /// Checked mutable component access.
    ///
    /// # Errors
    /// Returns [`VecError::IndexOutOfRange`] when `index` is not 0, 1 or 2.
    pub fn get_mut(&mut self, index: usize) -> Result<&mut f32, VecError> {
        self.e
            .get_mut(index)
            .ok_or(VecError::IndexOutOfRange { index })
    }

    /// Euclidean norm.
    #[inline]
    pub fn length(&self) -> f32 {
        self.length_squared().sqrt()
    }

    /// Sum of squared components. Prefer this for comparisons.
    #[inline]
    pub fn length_squared(&self) -> f32 {
        self.e[0] * self.e[0] + self.e[1] * self.e[1] + self.e[2] * self.e[2]
    }

    /// True when every component is smaller in magnitude than
    /// [`NEAR_ZERO_EPSILON`]. Scatter code uses this to catch degenerate
    /// directions before they reach further geometry.
    #[inline]
    pub fn near_zero(&self) -> bool {
        self.e.iter().all(|c| c.abs() < NEAR_ZERO_EPSILON)
    }

    #[inline]
    fn map(self, f: impl Fn(f32) -> f32) -> Self {
        Self::new(f(self.e[0]), f(self.e[1]), f(self.e[2]))
    }

    #[inline]
    fn zip(self, other: Self, f: impl Fn(f32, f32) -> f32) -> Self {
        Self::new(
            f(self.e[0], other.e[0]),
            f(self.e[1], other.e[1]),
            f(self.e[2], other.e[2]),
        )
    }
}

// ============================================================================
// CONVERSIONS
// ============================================================================

impl From<[f32; 3]> for Vec3 {
    #[inline]
    fn from(e: [f32; 3]) -> Self {
        Self { e }
    }
}

impl From<Vec3> for [f32; 3] {
    #[inline]
    fn from(v: Vec3) -> Self {
        v.e
    }
}

impl From<Vector3<f32>> for Vec3 {
    #[inline]
    fn from(v: Vector3<f32>) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

impl From<Vec3> for Vector3<f32> {
    #[inline]
    fn from(v: Vec3) -> Self {
        Vector3::new(v.e[0], v.e[1], v.e[2])
    }
}

// ============================================================================
// INDEXING
// ============================================================================

impl Index<usize> for Vec3 {
    type Output = f32;

    #[inline]
    fn index(&self, index: usize) -> &f32 {
        match self.e.get(index) {
            Some(c) => c,
            None => panic!("Vec3 index out of range: {index} (expected 0, 1 or 2)"),
        }
    }
}

impl IndexMut<usize> for Vec3 {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut f32 {
        match self.e.get_mut(index) {
            Some(c) => c,
            None => panic!("Vec3 index out of range: {index} (expected 0, 1 or 2)"),
        }
    }
}

// ============================================================================
// VECTOR-VECTOR ARITHMETIC
// ============================================================================

impl Neg for Vec3 {
    type Output = Vec3;
    #[inline]
    fn neg(self) -> Vec3 {
        self.map(|c| -c)
    }
}

impl Add for Vec3 {
    type Output = Vec3;
    #[inline]
    fn add(self, rhs: Vec3) -> Vec3 {
        self.zip(rhs, |a, b| a + b)
    }
}

impl Sub for Vec3 {
    type Output = Vec3;
    #[inline]
    fn sub(self, rhs: Vec3) -> Vec3 {
        self.zip(rhs, |a, b| a - b)
    }
}

/// Component-wise (Hadamard) product, used to tint colors.
impl Mul for Vec3 {
    type Output = Vec3;
    #[inline]
    fn mul(self, rhs: Vec3) -> Vec3 {
        self.zip(rhs, |a, b| a * b)
    }
}

impl AddAssign for Vec3 {
    #[inline]
    fn add_assign(&mut self, rhs: Vec3) {
        *self = *self + rhs;
    }
}

impl SubAssign for Vec3 {
    #[inline]
    fn sub_assign(&mut self, rhs: Vec3) {
        *self = *self - rhs;
    }
}

impl Sum for Vec3 {
    fn sum<I: Iterator<Item = Vec3>>(iter: I) -> Vec3 {
        iter.fold(Vec3::ZERO, |acc, v| acc + v)
    }
}

// ============================================================================
// VECTOR-SCALAR ARITHMETIC
// ============================================================================

impl Add<f32> for Vec3 {
    type Output = Vec3;
    #[inline]
    fn add(self, rhs: f32) -> Vec3 {
        self.map(|c| c + rhs)
    }
}

impl Add<Vec3> for f32 {
    type Output = Vec3;
    #[inline]
    fn add(self, rhs: Vec3) -> Vec3 {
        rhs + self
    }
}

impl Sub<f32> for Vec3 {
    type Output = Vec3;
    #[inline]
    fn sub(self, rhs: f32) -> Vec3 {
        self.map(|c| c - rhs)
    }
}

impl Sub<Vec3> for f32 {
    type Output = Vec3;
    #[inline]
    fn sub(self, rhs: Vec3) -> Vec3 {
        rhs.map(|c| self - c)
    }
}

impl Mul<f32> for Vec3 {
    type Output = Vec3;
    #[inline]
    fn mul(self, rhs: f32) -> Vec3 {
        self.map(|c| c * rhs)
    }
}

impl Mul<Vec3> for f32 {
    type Output = Vec3;
    #[inline]
    fn mul(self, rhs: Vec3) -> Vec3 {
        rhs * self
    }
}

/// Multiplies by the reciprocal. Dividing by zero yields infinities or NaN.
impl Div<f32> for Vec3 {
    type Output = Vec3;
    #[inline]
    fn div(self, rhs: f32) -> Vec3 {
        (1.0 / rhs) * self
    }
}

impl MulAssign<f32> for Vec3 {
    #[inline]
    fn mul_assign(&mut self, rhs: f32) {
        *self = *self * rhs;
    }
}

impl DivAssign<f32> for Vec3 {
    #[inline]
    fn div_assign(&mut self, rhs: f32) {
        *self = *self / rhs;
    }
}

// ============================================================================
// FORMATTING
// ============================================================================

/// Renders as `"x y z"`. A precision (`{:.3}`) applies to every component.
impl fmt::Display for Vec3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [x, y, z] = self.e;
        match f.precision() {
            Some(p) => write!(f, "{x:.p$} {y:.p$} {z:.p$}"),
            None => write!(f, "{x} {y} {z}"),
        }
    }
}
