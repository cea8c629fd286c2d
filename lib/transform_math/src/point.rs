use std::ops::{Add, AddAssign, Sub};

use bytemuck::{Pod, Zeroable};

use crate::Vector3;

/// A point in homogeneous coordinates.
///
/// Points carry a `w` coordinate so they can be multiplied by a [`Matrix4`](crate::Matrix4)
/// directly, `M * p`. Positions built with [`Point::new()`] have `w = 1`; after a projection
/// `w` holds the clip-space divisor.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct Point {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub w: f32,
}

impl Point {
    pub fn new(x: f32, y: f32, z: f32) -> Point {
        Point { x, y, z, w: 1.0 }
    }

    pub fn homogeneous(x: f32, y: f32, z: f32, w: f32) -> Point {
        Point { x, y, z, w }
    }

    pub fn origin() -> Point {
        Point::new(0.0, 0.0, 0.0)
    }

    pub fn distance(&self, other: &Point) -> f32 {
        self.distance_sqr(other).sqrt()
    }

    pub fn distance_sqr(&self, other: &Point) -> f32 {
        let diff_x = self.x - other.x;
        let diff_y = self.y - other.y;
        let diff_z = self.z - other.z;

        diff_x * diff_x + diff_y * diff_y + diff_z * diff_z
    }

    /// Divides through by `w`, giving the cartesian position.
    ///
    /// Returns `None` for points at infinity (`w == 0`).
    pub fn to_cartesian(&self) -> Option<Vector3> {
        if self.w == 0.0 {
            None
        } else {
            Some(Vector3::new(self.x / self.w, self.y / self.w, self.z / self.w))
        }
    }

    pub fn approx_eq(&self, other: &Point, epsilon: f32) -> bool {
        (self.x - other.x).abs() <= epsilon
            && (self.y - other.y).abs() <= epsilon
            && (self.z - other.z).abs() <= epsilon
            && (self.w - other.w).abs() <= epsilon
    }

    /// The point as a flat `[x, y, z, w]` buffer.
    pub fn elements(&self) -> &[f32; 4] {
        bytemuck::cast_ref(self)
    }
}

impl Default for Point {
    fn default() -> Point {
        Point::origin()
    }
}

impl From<Vector3> for Point {
    fn from(from: Vector3) -> Point {
        Point::new(from.x, from.y, from.z)
    }
}

impl From<[f32; 4]> for Point {
    fn from(from: [f32; 4]) -> Point {
        Point::homogeneous(from[0], from[1], from[2], from[3])
    }
}

impl Sub for Point {
    type Output = Vector3;

    fn sub(self, rhs: Point) -> Vector3 {
        Vector3::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl AddAssign<Vector3> for Point {
    fn add_assign(&mut self, rhs: Vector3) {
        self.x += rhs.x;
        self.y += rhs.y;
        self.z += rhs.z;
    }
}

impl Add<Vector3> for Point {
    type Output = Point;

    fn add(mut self, rhs: Vector3) -> Point {
        self += rhs;
        self
    }
}

impl Sub<Vector3> for Point {
    type Output = Point;

    fn sub(self, rhs: Vector3) -> Point {
        Point {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
            z: self.z - rhs.z,
            w: self.w,
        }
    }
}
