use std::fmt::{self, Debug, Formatter};
use std::ops::*;

use bytemuck::{Pod, Zeroable};
use log::debug;

use crate::{Dot, IsZero, MathError, Point, EPSILON};

// VECTOR 3
// ================================================================================================

/// A direction or offset in 3D space.
///
/// Laid out as three consecutive `f32`s so it can be handed to a `uniform3fv`-style call through
/// [`Vector3::elements()`].
#[derive(Clone, Copy, PartialEq, Pod, Zeroable)]
#[repr(C)]
pub struct Vector3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vector3 {
    pub fn new(x: f32, y: f32, z: f32) -> Vector3 {
        Vector3 { x, y, z }
    }

    pub fn zero() -> Vector3 {
        Vector3::new(0.0, 0.0, 0.0)
    }

    pub fn one() -> Vector3 {
        Vector3::new(1.0, 1.0, 1.0)
    }

    pub fn right() -> Vector3 {
        Vector3::new(1.0, 0.0, 0.0)
    }

    pub fn left() -> Vector3 {
        Vector3::new(-1.0, 0.0, 0.0)
    }

    pub fn up() -> Vector3 {
        Vector3::new(0.0, 1.0, 0.0)
    }

    pub fn down() -> Vector3 {
        Vector3::new(0.0, -1.0, 0.0)
    }

    pub fn forward() -> Vector3 {
        Vector3::new(0.0, 0.0, -1.0)
    }

    pub fn back() -> Vector3 {
        Vector3::new(0.0, 0.0, 1.0)
    }

    /// Right-handed cross product, `self × rhs`.
    pub fn cross(self, rhs: Vector3) -> Vector3 {
        Vector3 {
            x: self.y * rhs.z - self.z * rhs.y,
            y: self.z * rhs.x - self.x * rhs.z,
            z: self.x * rhs.y - self.y * rhs.x,
        }
    }

    /// Scales the vector to unit length in place.
    ///
    /// The zero vector has no direction, so it is left as the zero vector and
    /// `MathError::ZeroLength` is returned. Vectors with infinite or NaN components are left
    /// untouched and give `MathError::NonFinite`.
    pub fn normalize(&mut self) -> Result<&mut Vector3, MathError> {
        if !(self.x.is_finite() && self.y.is_finite() && self.z.is_finite()) {
            debug!("refusing to normalize non-finite vector {:?}", self);
            return Err(MathError::NonFinite);
        }

        let largest = self.x.abs().max(self.y.abs()).max(self.z.abs());
        if largest == 0.0 {
            debug!("refusing to normalize the zero vector");
            return Err(MathError::ZeroLength);
        }

        // Bring the largest component to 1 first so squaring can't overflow or underflow.
        let scaled = *self / largest;
        *self = scaled / scaled.length_squared().sqrt();

        Ok(self)
    }

    /// Returns the normalized version of the vector.
    ///
    /// Fails for the zero vector, see [`Vector3::normalize()`].
    pub fn normalized(mut self) -> Result<Vector3, MathError> {
        self.normalize()?;
        Ok(self)
    }

    /// Multiplies every component by `scalar` in place.
    pub fn scale(&mut self, scalar: f32) -> &mut Vector3 {
        *self *= scalar;
        self
    }

    pub fn is_normalized(&self) -> bool {
        (self.length_squared() - 1.0).abs() < EPSILON * 10.0
    }

    pub fn length(&self) -> f32 {
        self.length_squared().sqrt()
    }

    pub fn length_squared(&self) -> f32 {
        self.x * self.x + self.y * self.y + self.z * self.z
    }

    /// Compares each component within `epsilon`.
    pub fn approx_eq(&self, other: &Vector3, epsilon: f32) -> bool {
        (self.x - other.x).abs() <= epsilon
            && (self.y - other.y).abs() <= epsilon
            && (self.z - other.z).abs() <= epsilon
    }

    /// The vector as a flat `[x, y, z]` buffer.
    pub fn elements(&self) -> &[f32; 3] {
        bytemuck::cast_ref(self)
    }

    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }

    /// Reinterprets a slice of `Vector3`s as a flat slice of `f32`s without copying.
    pub fn flatten(vectors: &[Vector3]) -> &[f32] {
        bytemuck::cast_slice(vectors)
    }
}

impl Default for Vector3 {
    fn default() -> Vector3 {
        Vector3::zero()
    }
}

impl Debug for Vector3 {
    fn fmt(&self, fmt: &mut Formatter) -> Result<(), fmt::Error> {
        if let Some(precision) = fmt.precision() {
            write!(
                fmt,
                "Vector3 {{ x: {:+.3$}, y: {:+.3$}, z: {:+.3$} }}",
                self.x,
                self.y,
                self.z,
                precision,
            )
        } else {
            write!(fmt, "Vector3 {{ x: {}, y: {}, z: {} }}", self.x, self.y, self.z)
        }
    }
}

impl Dot for Vector3 {
    type Output = f32;

    fn dot(self, rhs: Vector3) -> f32 {
        self.x * rhs.x + self.y * rhs.y + self.z * rhs.z
    }
}

impl Dot<[f32; 3]> for Vector3 {
    type Output = f32;

    fn dot(self, rhs: [f32; 3]) -> f32 {
        self.x * rhs[0] + self.y * rhs[1] + self.z * rhs[2]
    }
}

impl AddAssign for Vector3 {
    fn add_assign(&mut self, rhs: Vector3) {
        self.x += rhs.x;
        self.y += rhs.y;
        self.z += rhs.z;
    }
}

impl Add for Vector3 {
    type Output = Vector3;

    fn add(mut self, rhs: Vector3) -> Vector3 {
        self += rhs;
        self
    }
}

impl SubAssign for Vector3 {
    fn sub_assign(&mut self, rhs: Vector3) {
        self.x -= rhs.x;
        self.y -= rhs.y;
        self.z -= rhs.z;
    }
}

impl Sub for Vector3 {
    type Output = Vector3;

    fn sub(mut self, rhs: Vector3) -> Vector3 {
        self -= rhs;
        self
    }
}

impl MulAssign<f32> for Vector3 {
    fn mul_assign(&mut self, rhs: f32) {
        self.x *= rhs;
        self.y *= rhs;
        self.z *= rhs;
    }
}

impl Mul<f32> for Vector3 {
    type Output = Vector3;

    fn mul(mut self, rhs: f32) -> Vector3 {
        self *= rhs;
        self
    }
}

impl Mul<Vector3> for f32 {
    type Output = Vector3;

    fn mul(self, rhs: Vector3) -> Vector3 {
        rhs * self
    }
}

impl DivAssign<f32> for Vector3 {
    fn div_assign(&mut self, rhs: f32) {
        self.x /= rhs;
        self.y /= rhs;
        self.z /= rhs;
    }
}

impl Div<f32> for Vector3 {
    type Output = Vector3;

    fn div(mut self, rhs: f32) -> Vector3 {
        self /= rhs;
        self
    }
}

impl Neg for Vector3 {
    type Output = Vector3;

    fn neg(self) -> Vector3 {
        Vector3::new(-self.x, -self.y, -self.z)
    }
}

impl IsZero for Vector3 {
    fn is_zero(self) -> bool {
        self.dot(self).is_zero()
    }
}

impl Index<usize> for Vector3 {
    type Output = f32;

    fn index(&self, index: usize) -> &f32 {
        match index {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            _ => panic!("Index {} is out of bounds for Vector3", index),
        }
    }
}

impl IndexMut<usize> for Vector3 {
    fn index_mut(&mut self, index: usize) -> &mut f32 {
        match index {
            0 => &mut self.x,
            1 => &mut self.y,
            2 => &mut self.z,
            _ => panic!("Index {} is out of bounds for Vector3", index),
        }
    }
}

impl From<[f32; 3]> for Vector3 {
    fn from(from: [f32; 3]) -> Vector3 {
        Vector3::new(from[0], from[1], from[2])
    }
}

impl From<(f32, f32, f32)> for Vector3 {
    fn from(from: (f32, f32, f32)) -> Vector3 {
        Vector3::new(from.0, from.1, from.2)
    }
}

impl From<Point> for Vector3 {
    /// Drops the homogeneous coordinate without dividing by it, `(x, y, z, w) => <x, y, z>`.
    fn from(from: Point) -> Vector3 {
        Vector3::new(from.x, from.y, from.z)
    }
}

impl From<Vector3> for [f32; 3] {
    fn from(from: Vector3) -> [f32; 3] {
        [from.x, from.y, from.z]
    }
}

impl From<Vector3> for (f32, f32, f32) {
    fn from(from: Vector3) -> (f32, f32, f32) {
        (from.x, from.y, from.z)
    }
}
