//! 4x4 matrix and 3-vector math for building model, view, projection and normal matrices.
//!
//! Matrices are stored column-major, the layout expected by `uniformMatrix4fv` and friends, and
//! transform column vectors on the right (`M * v`). Composing methods such as
//! [`Matrix4::translate`] right-multiply the receiver, so `m.set_rotate(..)?.translate(..)`
//! moves a point first and then rotates it.
//!
//! All mutating methods work in place and hand back `&mut Self` so calls can be chained. Methods
//! that can be fed degenerate geometry return `Result<&mut Self, MathError>` instead and leave
//! the receiver untouched when they fail.

pub mod color;
pub mod error;
pub mod matrix;
pub mod point;
pub mod vector;

#[cfg(test)]
mod test;

pub use self::color::Color;
pub use self::error::MathError;
pub use self::matrix::Matrix4;
pub use self::point::Point;
pub use self::vector::Vector3;

pub use std::f32::consts::PI;

/// Absolute tolerance used by `IsZero` and by the approximate `PartialEq` impls.
pub const EPSILON: f32 = 1e-6;

/// Relative tolerance for deciding that a matrix can't be inverted.
///
/// A matrix is treated as singular when `|det|` is no larger than this times the product of the
/// lengths of its columns (the Hadamard bound on the determinant), so the check doesn't depend
/// on the overall magnitude of the matrix.
pub const SINGULAR_TOLERANCE: f32 = 1e-6;

pub trait IsZero {
    fn is_zero(self) -> bool;
}

impl IsZero for f32 {
    fn is_zero(self) -> bool {
        self.abs() < EPSILON
    }
}

pub trait Dot<Other = Self> {
    type Output;

    fn dot(self, rhs: Other) -> Self::Output;
}

impl Dot for [f32; 3] {
    type Output = f32;

    fn dot(self, rhs: [f32; 3]) -> f32 {
        self[0] * rhs[0] + self[1] * rhs[1] + self[2] * rhs[2]
    }
}

impl Dot for [f32; 4] {
    type Output = f32;

    fn dot(self, rhs: [f32; 4]) -> f32 {
        self[0] * rhs[0] + self[1] * rhs[1] + self[2] * rhs[2] + self[3] * rhs[3]
    }
}

/// Converts an angle in degrees to radians.
pub fn to_radians(degrees: f32) -> f32 {
    degrees * PI / 180.0
}
