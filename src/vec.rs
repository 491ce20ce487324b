//! Vector types and traits for the dynamics filter.

use crate::float::Float;
use core::ops::{Add, Sub, Neg};

/// Trait for vector types fed through the filter.
///
/// Abstracts over dimensionality (1D through 4D) so the filter code is
/// generic over the vector type.
pub trait Vec:
    Copy
    + Clone
    + Add<Output = Self>
    + Sub<Output = Self>
    + Neg<Output = Self>
    + PartialEq
    + Default
    + core::fmt::Debug
{
    /// The scalar (float) type for this vector.
    type Scalar: Float;

    /// Zero vector.
    fn zero() -> Self;

    /// Vector with all components set to the same value.
    fn splat(value: Self::Scalar) -> Self;

    /// Dot product.
    fn dot(self, other: Self) -> Self::Scalar;

    /// Squared length (avoids sqrt).
    fn length_sq(self) -> Self::Scalar {
        self.dot(self)
    }

    /// Length (magnitude).
    fn length(self) -> Self::Scalar {
        self.length_sq().sqrt()
    }

    /// Scale all components by a scalar.
    fn scale(self, s: Self::Scalar) -> Self;
}

// --------------------------------------------------------------------------
// Scalar<F> — 1D wrapper
// --------------------------------------------------------------------------

/// 1D "vector" — a scalar value implementing the Vec trait.
///
/// Useful for filtering single values (e.g., camera zoom, a UI slider).
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Scalar<F: Float>(pub F);

impl<F: Float> Add for Scalar<F> {
    type Output = Self;
    fn add(self, rhs: Self) -> Self { Scalar(self.0 + rhs.0) }
}

impl<F: Float> Sub for Scalar<F> {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self { Scalar(self.0 - rhs.0) }
}

impl<F: Float> Neg for Scalar<F> {
    type Output = Self;
    fn neg(self) -> Self { Scalar(-self.0) }
}

impl<F: Float> Vec for Scalar<F> {
    type Scalar = F;
    fn zero() -> Self { Scalar(F::zero()) }
    fn splat(value: F) -> Self { Scalar(value) }
    fn dot(self, other: Self) -> F { self.0 * other.0 }
    fn scale(self, s: F) -> Self { Scalar(self.0 * s) }
}

// --------------------------------------------------------------------------
// Vec2<F> — 2D vector
// --------------------------------------------------------------------------

/// 2D vector, used for planar values and step-response plotting.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Vec2<F: Float> {
    pub x: F,
    pub y: F,
}

impl<F: Float> Vec2<F> {
    /// Create a new 2D vector.
    pub fn new(x: F, y: F) -> Self { Vec2 { x, y } }
}

impl<F: Float> Add for Vec2<F> {
    type Output = Self;
    fn add(self, rhs: Self) -> Self { Vec2 { x: self.x + rhs.x, y: self.y + rhs.y } }
}

impl<F: Float> Sub for Vec2<F> {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self { Vec2 { x: self.x - rhs.x, y: self.y - rhs.y } }
}

impl<F: Float> Neg for Vec2<F> {
    type Output = Self;
    fn neg(self) -> Self { Vec2 { x: -self.x, y: -self.y } }
}

impl<F: Float> Vec for Vec2<F> {
    type Scalar = F;
    fn zero() -> Self { Vec2 { x: F::zero(), y: F::zero() } }
    fn splat(value: F) -> Self { Vec2 { x: value, y: value } }
    fn dot(self, other: Self) -> F { self.x * other.x + self.y * other.y }
    fn scale(self, s: F) -> Self { Vec2 { x: self.x * s, y: self.y * s } }
}

// --------------------------------------------------------------------------
// Vec3<F> — 3D vector
// --------------------------------------------------------------------------

/// 3D vector for spatial values (position, scale).
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Vec3<F: Float> {
    pub x: F,
    pub y: F,
    pub z: F,
}

impl<F: Float> Vec3<F> {
    /// Create a new 3D vector.
    pub fn new(x: F, y: F, z: F) -> Self { Vec3 { x, y, z } }
}

impl<F: Float> Add for Vec3<F> {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Vec3 { x: self.x + rhs.x, y: self.y + rhs.y, z: self.z + rhs.z }
    }
}

impl<F: Float> Sub for Vec3<F> {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Vec3 { x: self.x - rhs.x, y: self.y - rhs.y, z: self.z - rhs.z }
    }
}

impl<F: Float> Neg for Vec3<F> {
    type Output = Self;
    fn neg(self) -> Self { Vec3 { x: -self.x, y: -self.y, z: -self.z } }
}

impl<F: Float> Vec for Vec3<F> {
    type Scalar = F;
    fn zero() -> Self { Vec3 { x: F::zero(), y: F::zero(), z: F::zero() } }
    fn splat(value: F) -> Self { Vec3 { x: value, y: value, z: value } }
    fn dot(self, other: Self) -> F {
        self.x * other.x + self.y * other.y + self.z * other.z
    }
    fn scale(self, s: F) -> Self {
        Vec3 { x: self.x * s, y: self.y * s, z: self.z * s }
    }
}

// --------------------------------------------------------------------------
// Vec4<F> — 4D vector
// --------------------------------------------------------------------------

/// 4D vector, used to filter quaternion components as a flat vector.
///
/// This crate deliberately has no normalize operation: a quaternion run
/// through the filter is not kept at unit length. See the crate docs.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Vec4<F: Float> {
    pub x: F,
    pub y: F,
    pub z: F,
    pub w: F,
}

impl<F: Float> Vec4<F> {
    /// Create a new 4D vector.
    pub fn new(x: F, y: F, z: F, w: F) -> Self { Vec4 { x, y, z, w } }

    /// The identity quaternion (0, 0, 0, 1), viewed as a flat vector.
    pub fn identity_quat() -> Self {
        Vec4 { x: F::zero(), y: F::zero(), z: F::zero(), w: F::one() }
    }
}

impl<F: Float> Add for Vec4<F> {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Vec4 {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
            z: self.z + rhs.z,
            w: self.w + rhs.w,
        }
    }
}

impl<F: Float> Sub for Vec4<F> {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Vec4 {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
            z: self.z - rhs.z,
            w: self.w - rhs.w,
        }
    }
}

impl<F: Float> Neg for Vec4<F> {
    type Output = Self;
    fn neg(self) -> Self { Vec4 { x: -self.x, y: -self.y, z: -self.z, w: -self.w } }
}

impl<F: Float> Vec for Vec4<F> {
    type Scalar = F;
    fn zero() -> Self {
        Vec4 { x: F::zero(), y: F::zero(), z: F::zero(), w: F::zero() }
    }
    fn splat(value: F) -> Self {
        Vec4 { x: value, y: value, z: value, w: value }
    }
    fn dot(self, other: Self) -> F {
        self.x * other.x + self.y * other.y + self.z * other.z + self.w * other.w
    }
    fn scale(self, s: F) -> Self {
        Vec4 { x: self.x * s, y: self.y * s, z: self.z * s, w: self.w * s }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vec2_length() {
        let v = Vec2::new(3.0f32, 4.0);
        assert!((v.length() - 5.0).abs() < 1e-6);
    }

    #[test]
    fn vec3_splat() {
        let v = Vec3::<f32>::splat(2.0);
        assert_eq!(v, Vec3::new(2.0, 2.0, 2.0));
    }

    #[test]
    fn vec4_dot() {
        let a = Vec4::new(1.0f32, 2.0, 3.0, 4.0);
        let b = Vec4::new(4.0f32, 3.0, 2.0, 1.0);
        assert!((a.dot(b) - 20.0).abs() < 1e-6);
    }

    #[test]
    fn identity_quat_is_unit() {
        let q = Vec4::<f32>::identity_quat();
        assert!((q.length() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn scalar_dot() {
        let a = Scalar(3.0f32);
        let b = Scalar(4.0f32);
        assert!((a.dot(b) - 12.0).abs() < 1e-6);
    }
}
