use std::cmp::PartialEq;
use std::fmt::{Debug, Error, Formatter};
use std::ops::{Index, IndexMut, Mul};

use bytemuck::{Pod, Zeroable};
use log::debug;

use crate::{to_radians, IsZero, MathError, Point, Vector3, EPSILON, SINGULAR_TOLERANCE};

/// A 4x4 matrix representing an affine or projective transform.
///
/// Matrices are column-major: the element at row `r`, column `c` lives at index `c * 4 + r` of
/// [`elements()`](Matrix4::elements), which is the layout `uniformMatrix4fv` expects with
/// `transpose = false`. Points are column vectors multiplied on the right, `M * p`.
///
/// Methods prefixed with `set_` overwrite the whole matrix. Their unprefixed counterparts
/// (`translate`, `rotate`, `scale`, `perspective`, `look_at`, ...) right-multiply the receiver,
/// `self = self * X`, so the transform named last is the first one applied to a point.
#[derive(Clone, Copy, Pod, Zeroable)]
#[repr(C)]
pub struct Matrix4([f32; 16]);

impl Matrix4 {
    /// Creates a new identity matrix.
    pub fn new() -> Matrix4 {
        Matrix4::identity()
    }

    pub fn identity() -> Matrix4 {
        Matrix4([
            1.0, 0.0, 0.0, 0.0,
            0.0, 1.0, 0.0, 0.0,
            0.0, 0.0, 1.0, 0.0,
            0.0, 0.0, 0.0, 1.0,
        ])
    }

    /// Creates a matrix filled entirely with zeroes.
    pub fn zero() -> Matrix4 {
        Matrix4([0.0; 16])
    }

    /// Wraps 16 elements that are already in column-major order.
    pub fn from_column_major(elements: [f32; 16]) -> Matrix4 {
        Matrix4(elements)
    }

    /// Builds a matrix from rows, the way matrices are usually written on paper.
    pub fn from_rows(rows: [[f32; 4]; 4]) -> Matrix4 {
        let mut matrix = Matrix4::zero();
        for (row, values) in rows.iter().enumerate() {
            for (col, value) in values.iter().enumerate() {
                matrix[(row, col)] = *value;
            }
        }
        matrix
    }

    pub fn from_translation(x: f32, y: f32, z: f32) -> Matrix4 {
        let mut matrix = Matrix4::identity();
        matrix.set_translate(x, y, z);
        matrix
    }

    pub fn from_scale(x: f32, y: f32, z: f32) -> Matrix4 {
        let mut matrix = Matrix4::identity();
        matrix.set_scale(x, y, z);
        matrix
    }

    /// Creates a rotation of `angle` degrees about `axis`.
    ///
    /// The axis doesn't need to be normalized, but it can't be the zero vector.
    pub fn from_rotation(angle: f32, axis: Vector3) -> Result<Matrix4, MathError> {
        let mut matrix = Matrix4::identity();
        matrix.set_rotate(angle, axis.x, axis.y, axis.z)?;
        Ok(matrix)
    }

    // SETTERS
    // ============================================================================================

    /// Copies `other` into this matrix.
    pub fn set(&mut self, other: &Matrix4) -> &mut Matrix4 {
        self.0 = other.0;
        self
    }

    pub fn set_identity(&mut self) -> &mut Matrix4 {
        *self = Matrix4::identity();
        self
    }

    pub fn set_translate(&mut self, x: f32, y: f32, z: f32) -> &mut Matrix4 {
        self.0 = [
            1.0, 0.0, 0.0, 0.0,
            0.0, 1.0, 0.0, 0.0,
            0.0, 0.0, 1.0, 0.0,
            x,   y,   z,   1.0,
        ];
        self
    }

    pub fn set_scale(&mut self, x: f32, y: f32, z: f32) -> &mut Matrix4 {
        self.0 = [
            x,   0.0, 0.0, 0.0,
            0.0, y,   0.0, 0.0,
            0.0, 0.0, z,   0.0,
            0.0, 0.0, 0.0, 1.0,
        ];
        self
    }

    /// Sets the matrix to a rotation of `angle` degrees about the axis `(x, y, z)`.
    ///
    /// Positive angles rotate counter-clockwise when looking down the axis towards the origin
    /// (right-hand rule). The axis is normalized internally, so its magnitude doesn't matter.
    pub fn set_rotate(&mut self, angle: f32, x: f32, y: f32, z: f32) -> Result<&mut Matrix4, MathError> {
        if !angle.is_finite() {
            debug!("refusing to rotate by {} degrees", angle);
            return Err(MathError::NonFinite);
        }
        let axis = Vector3::new(x, y, z).normalized()?;
        let Vector3 { x, y, z } = axis;

        let radians = to_radians(angle);
        let s = radians.sin();
        let c = radians.cos();
        let nc = 1.0 - c;

        let xy = x * y;
        let yz = y * z;
        let zx = z * x;
        let xs = x * s;
        let ys = y * s;
        let zs = z * s;

        self.0 = [
            x * x * nc + c, xy * nc + zs,   zx * nc - ys,   0.0,
            xy * nc - zs,   y * y * nc + c, yz * nc + xs,   0.0,
            zx * nc + ys,   yz * nc - xs,   z * z * nc + c, 0.0,
            0.0,            0.0,            0.0,            1.0,
        ];
        Ok(self)
    }

    /// Sets the matrix to an OpenGL-style perspective projection.
    ///
    /// `fovy` is the vertical field of view in degrees. Fails without touching the matrix when
    /// `near <= 0`, `far <= near`, either plane is not finite, `aspect` is zero or not finite, or
    /// `fovy` is outside `(0, 180)`.
    pub fn set_perspective(&mut self, fovy: f32, aspect: f32, near: f32, far: f32) -> Result<&mut Matrix4, MathError> {
        if !(near.is_finite() && far.is_finite()) {
            return Err(degenerate_projection("clip planes must be finite"));
        }
        if !(near > 0.0) {
            return Err(degenerate_projection("near plane must be greater than zero"));
        }
        if !(far > near) {
            return Err(degenerate_projection("far plane must be beyond the near plane"));
        }
        if aspect == 0.0 || !aspect.is_finite() {
            return Err(degenerate_projection("aspect ratio must be finite and non-zero"));
        }
        if !(fovy > 0.0 && fovy < 180.0) {
            return Err(degenerate_projection("field of view must be between 0 and 180 degrees"));
        }

        let half_fovy = to_radians(fovy) * 0.5;
        let cot = half_fovy.cos() / half_fovy.sin();
        let rd = 1.0 / (far - near);

        self.0 = finite_projection([
            cot / aspect, 0.0, 0.0,                    0.0,
            0.0,          cot, 0.0,                    0.0,
            0.0,          0.0, -(far + near) * rd,     -1.0,
            0.0,          0.0, -2.0 * near * far * rd, 0.0,
        ])?;
        Ok(self)
    }

    /// Sets the matrix to a perspective projection of an arbitrary viewing frustum.
    ///
    /// The bounds describe the near plane. Fails when any bound is not finite, when the
    /// left/right or bottom/top bounds coincide, when `near <= 0`, or when `far <= near`.
    pub fn set_frustum(
        &mut self,
        left: f32,
        right: f32,
        bottom: f32,
        top: f32,
        near: f32,
        far: f32,
    ) -> Result<&mut Matrix4, MathError> {
        if !all_finite(&[left, right, bottom, top, near, far]) {
            return Err(degenerate_projection("frustum bounds must be finite"));
        }
        if left == right || bottom == top {
            return Err(degenerate_projection("frustum has zero width or height"));
        }
        if !(near > 0.0) {
            return Err(degenerate_projection("near plane must be greater than zero"));
        }
        if !(far > near) {
            return Err(degenerate_projection("far plane must be beyond the near plane"));
        }

        let rw = 1.0 / (right - left);
        let rh = 1.0 / (top - bottom);
        let rd = 1.0 / (far - near);

        self.0 = finite_projection([
            2.0 * near * rw,       0.0,                   0.0,                    0.0,
            0.0,                   2.0 * near * rh,       0.0,                    0.0,
            (right + left) * rw,   (top + bottom) * rh,   -(far + near) * rd,     -1.0,
            0.0,                   0.0,                   -2.0 * near * far * rd, 0.0,
        ])?;
        Ok(self)
    }

    /// Sets the matrix to an orthographic projection of the given box.
    ///
    /// Fails when any bound is not finite or any pair of opposite bounds coincide.
    pub fn set_ortho(
        &mut self,
        left: f32,
        right: f32,
        bottom: f32,
        top: f32,
        near: f32,
        far: f32,
    ) -> Result<&mut Matrix4, MathError> {
        if !all_finite(&[left, right, bottom, top, near, far]) {
            return Err(degenerate_projection("orthographic bounds must be finite"));
        }
        if left == right || bottom == top || near == far {
            return Err(degenerate_projection("orthographic box has zero extent"));
        }

        let rw = 1.0 / (right - left);
        let rh = 1.0 / (top - bottom);
        let rd = 1.0 / (far - near);

        self.0 = finite_projection([
            2.0 * rw,             0.0,                  0.0,                0.0,
            0.0,                  2.0 * rh,             0.0,                0.0,
            0.0,                  0.0,                  -2.0 * rd,          0.0,
            -(right + left) * rw, -(top + bottom) * rh, -(far + near) * rd, 1.0,
        ])?;
        Ok(self)
    }

    /// Sets the matrix to a right-handed view matrix for a camera at `eye` looking at `center`.
    ///
    /// Fails with `MathError::DegenerateView` when `eye` and `center` are the same point, when
    /// `up` is zero or parallel to the viewing direction, or when any input is not finite.
    pub fn set_look_at(&mut self, eye: Vector3, center: Vector3, up: Vector3) -> Result<&mut Matrix4, MathError> {
        let forward = match (center - eye).normalized() {
            Ok(forward) => forward,
            Err(MathError::ZeroLength) => return Err(degenerate_view("eye and center are the same point")),
            Err(_) => return Err(degenerate_view("eye and center must be finite")),
        };
        let up = match up.normalized() {
            Ok(up) => up,
            Err(_) => return Err(degenerate_view("up vector is zero or not finite")),
        };

        // Both are unit length, so this is the sine of the angle between them.
        let side = forward.cross(up);
        if !(side.length() > EPSILON) {
            return Err(degenerate_view("up vector is parallel to the view direction"));
        }
        let side = side
            .normalized()
            .map_err(|_| degenerate_view("up vector is parallel to the view direction"))?;
        let up = side.cross(forward);

        self.0 = [
            side.x, up.x, -forward.x, 0.0,
            side.y, up.y, -forward.y, 0.0,
            side.z, up.z, -forward.z, 0.0,
            0.0,    0.0,  0.0,        1.0,
        ];
        self.translate(-eye.x, -eye.y, -eye.z);
        Ok(self)
    }

    /// Sets the matrix to the inverse of `other`.
    ///
    /// Uses cofactor expansion. If `other` is singular (see
    /// [`SINGULAR_TOLERANCE`](crate::SINGULAR_TOLERANCE)) the matrix is left unchanged and
    /// `MathError::Singular` is returned.
    pub fn set_inverse_of(&mut self, other: &Matrix4) -> Result<&mut Matrix4, MathError> {
        let a = &other.0;
        let cofactors = Cofactors::of(a);
        let determinant = cofactors.determinant();

        if is_singular(a, determinant) {
            debug!("matrix is singular, determinant {}", determinant);
            return Err(MathError::Singular { determinant });
        }

        let Cofactors { b00, b01, b02, b03, b04, b05, b06, b07, b08, b09, b10, b11 } = cofactors;
        let inv = 1.0 / determinant;

        self.0 = [
            (a[5] * b11 - a[6] * b10 + a[7] * b09) * inv,
            (a[2] * b10 - a[1] * b11 - a[3] * b09) * inv,
            (a[13] * b05 - a[14] * b04 + a[15] * b03) * inv,
            (a[10] * b04 - a[9] * b05 - a[11] * b03) * inv,

            (a[6] * b08 - a[4] * b11 - a[7] * b07) * inv,
            (a[0] * b11 - a[2] * b08 + a[3] * b07) * inv,
            (a[14] * b02 - a[12] * b05 - a[15] * b01) * inv,
            (a[8] * b05 - a[10] * b02 + a[11] * b01) * inv,

            (a[4] * b10 - a[5] * b08 + a[7] * b06) * inv,
            (a[1] * b08 - a[0] * b10 - a[3] * b06) * inv,
            (a[12] * b04 - a[13] * b02 + a[15] * b00) * inv,
            (a[9] * b02 - a[8] * b04 - a[11] * b00) * inv,

            (a[5] * b07 - a[4] * b09 - a[6] * b06) * inv,
            (a[0] * b09 - a[1] * b07 + a[2] * b06) * inv,
            (a[13] * b01 - a[12] * b03 - a[14] * b00) * inv,
            (a[8] * b03 - a[9] * b01 + a[10] * b00) * inv,
        ];
        Ok(self)
    }

    /// Sets the matrix to the transform for surface normals under `model`.
    ///
    /// This is the inverse-transpose of the upper 3x3 of `model`, embedded in a 4x4 with no
    /// translation. Unlike `model` itself it keeps normals perpendicular to their surface when
    /// `model` contains non-uniform scale. Translation can't affect normals, so only a singular
    /// linear part makes this fail.
    pub fn set_normal_matrix_of(&mut self, model: &Matrix4) -> Result<&mut Matrix4, MathError> {
        let e = &model.0;
        let linear = Matrix4([
            e[0], e[1], e[2],  0.0,
            e[4], e[5], e[6],  0.0,
            e[8], e[9], e[10], 0.0,
            0.0,  0.0,  0.0,   1.0,
        ]);

        self.set_inverse_of(&linear)?;
        Ok(self.transpose())
    }

    // COMPOSITION
    // ============================================================================================

    /// Right-multiplies by `other`, `self = self * other`.
    pub fn multiply(&mut self, other: &Matrix4) -> &mut Matrix4 {
        *self = *self * *other;
        self
    }

    /// Same as [`multiply()`](Matrix4::multiply).
    pub fn concat(&mut self, other: &Matrix4) -> &mut Matrix4 {
        self.multiply(other)
    }

    /// Right-multiplies by a translation, `self = self * T(x, y, z)`.
    pub fn translate(&mut self, x: f32, y: f32, z: f32) -> &mut Matrix4 {
        let e = &mut self.0;
        e[12] += e[0] * x + e[4] * y + e[8] * z;
        e[13] += e[1] * x + e[5] * y + e[9] * z;
        e[14] += e[2] * x + e[6] * y + e[10] * z;
        e[15] += e[3] * x + e[7] * y + e[11] * z;
        self
    }

    /// Right-multiplies by a scale, `self = self * S(x, y, z)`.
    pub fn scale(&mut self, x: f32, y: f32, z: f32) -> &mut Matrix4 {
        let e = &mut self.0;
        for row in 0..4 {
            e[row] *= x;
            e[4 + row] *= y;
            e[8 + row] *= z;
        }
        self
    }

    /// Right-multiplies by a rotation of `angle` degrees about `(x, y, z)`.
    pub fn rotate(&mut self, angle: f32, x: f32, y: f32, z: f32) -> Result<&mut Matrix4, MathError> {
        let rotation = Matrix4::from_rotation(angle, Vector3::new(x, y, z))?;
        Ok(self.multiply(&rotation))
    }

    /// Right-multiplies by a perspective projection, see
    /// [`set_perspective()`](Matrix4::set_perspective).
    pub fn perspective(&mut self, fovy: f32, aspect: f32, near: f32, far: f32) -> Result<&mut Matrix4, MathError> {
        let mut projection = Matrix4::identity();
        projection.set_perspective(fovy, aspect, near, far)?;
        Ok(self.multiply(&projection))
    }

    pub fn frustum(
        &mut self,
        left: f32,
        right: f32,
        bottom: f32,
        top: f32,
        near: f32,
        far: f32,
    ) -> Result<&mut Matrix4, MathError> {
        let mut projection = Matrix4::identity();
        projection.set_frustum(left, right, bottom, top, near, far)?;
        Ok(self.multiply(&projection))
    }

    pub fn ortho(
        &mut self,
        left: f32,
        right: f32,
        bottom: f32,
        top: f32,
        near: f32,
        far: f32,
    ) -> Result<&mut Matrix4, MathError> {
        let mut projection = Matrix4::identity();
        projection.set_ortho(left, right, bottom, top, near, far)?;
        Ok(self.multiply(&projection))
    }

    /// Right-multiplies by a view matrix, see [`set_look_at()`](Matrix4::set_look_at).
    pub fn look_at(&mut self, eye: Vector3, center: Vector3, up: Vector3) -> Result<&mut Matrix4, MathError> {
        let mut view = Matrix4::identity();
        view.set_look_at(eye, center, up)?;
        Ok(self.multiply(&view))
    }

    /// Inverts the matrix in place. On failure the matrix is unchanged.
    pub fn invert(&mut self) -> Result<&mut Matrix4, MathError> {
        let copy = *self;
        self.set_inverse_of(&copy)
    }

    /// Transposes the matrix in place.
    pub fn transpose(&mut self) -> &mut Matrix4 {
        for row in 0..4 {
            for col in (row + 1)..4 {
                self.0.swap(col * 4 + row, row * 4 + col);
            }
        }
        self
    }

    // QUERIES
    // ============================================================================================

    pub fn determinant(&self) -> f32 {
        Cofactors::of(&self.0).determinant()
    }

    /// Returns the inverse without modifying `self`.
    pub fn inverse(&self) -> Result<Matrix4, MathError> {
        let mut inverse = Matrix4::identity();
        inverse.set_inverse_of(self)?;
        Ok(inverse)
    }

    /// Returns the transpose without modifying `self`.
    pub fn transposed(&self) -> Matrix4 {
        let mut transpose = *self;
        transpose.transpose();
        transpose
    }

    pub fn row(&self, row: usize) -> [f32; 4] {
        [self[(row, 0)], self[(row, 1)], self[(row, 2)], self[(row, 3)]]
    }

    pub fn column(&self, col: usize) -> [f32; 4] {
        let start = col * 4;
        [self.0[start], self.0[start + 1], self.0[start + 2], self.0[start + 3]]
    }

    /// Transforms a position, `M * (x, y, z, w)`.
    ///
    /// The result is left in homogeneous form. Use [`Point::to_cartesian()`] to apply the
    /// perspective divide.
    pub fn transform_point(&self, point: Point) -> Point {
        *self * point
    }

    /// Transforms a direction (`w = 0`), so translation has no effect.
    pub fn transform_direction(&self, direction: Vector3) -> Vector3 {
        let e = &self.0;
        let Vector3 { x, y, z } = direction;

        Vector3 {
            x: e[0] * x + e[4] * y + e[8] * z,
            y: e[1] * x + e[5] * y + e[9] * z,
            z: e[2] * x + e[6] * y + e[10] * z,
        }
    }

    /// Compares every element within `epsilon`.
    pub fn approx_eq(&self, other: &Matrix4, epsilon: f32) -> bool {
        self.0
            .iter()
            .zip(other.0.iter())
            .all(|(ours, theirs)| (ours - theirs).abs() <= epsilon)
    }

    /// The flat column-major buffer, ready to be uploaded as a `mat4` uniform.
    ///
    /// The reference borrows the matrix, so the data can't change underneath it. Copy it out if
    /// it needs to outlive further mutation.
    pub fn elements(&self) -> &[f32; 16] {
        &self.0
    }

    pub fn elements_mut(&mut self) -> &mut [f32; 16] {
        &mut self.0
    }

    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }
}

impl Default for Matrix4 {
    fn default() -> Matrix4 {
        Matrix4::identity()
    }
}

impl From<[f32; 16]> for Matrix4 {
    fn from(from: [f32; 16]) -> Matrix4 {
        Matrix4(from)
    }
}

impl From<Matrix4> for [f32; 16] {
    fn from(from: Matrix4) -> [f32; 16] {
        from.0
    }
}

impl PartialEq for Matrix4 {
    fn eq(&self, other: &Matrix4) -> bool {
        self.0
            .iter()
            .zip(other.0.iter())
            .all(|(ours, theirs)| (ours - theirs).is_zero())
    }
}

impl Index<(usize, usize)> for Matrix4 {
    type Output = f32;

    fn index(&self, (row, col): (usize, usize)) -> &f32 {
        assert!(row < 4 && col < 4, "Cannot get element ({}, {}) of a 4x4 matrix", row, col);
        &self.0[col * 4 + row]
    }
}

impl IndexMut<(usize, usize)> for Matrix4 {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut f32 {
        assert!(row < 4 && col < 4, "Cannot get element ({}, {}) of a 4x4 matrix", row, col);
        &mut self.0[col * 4 + row]
    }
}

impl Mul<Matrix4> for Matrix4 {
    type Output = Matrix4;

    fn mul(self, other: Matrix4) -> Matrix4 {
        let a = &self.0;
        let b = &other.0;
        let mut result = [0.0; 16];

        for col in 0..4 {
            for row in 0..4 {
                result[col * 4 + row] =
                    a[row]      * b[col * 4]     +
                    a[4 + row]  * b[col * 4 + 1] +
                    a[8 + row]  * b[col * 4 + 2] +
                    a[12 + row] * b[col * 4 + 3];
            }
        }

        Matrix4(result)
    }
}

impl Mul<Point> for Matrix4 {
    type Output = Point;

    fn mul(self, rhs: Point) -> Point {
        let e = &self.0;
        let Point { x, y, z, w } = rhs;

        Point {
            x: e[0] * x + e[4] * y + e[8] * z + e[12] * w,
            y: e[1] * x + e[5] * y + e[9] * z + e[13] * w,
            z: e[2] * x + e[6] * y + e[10] * z + e[14] * w,
            w: e[3] * x + e[7] * y + e[11] * z + e[15] * w,
        }
    }
}

impl Debug for Matrix4 {
    fn fmt(&self, formatter: &mut Formatter) -> Result<(), Error> {
        formatter.write_str("\n")?;
        for row in 0..4 {
            formatter.write_str("[")?;
            for col in 0..4 {
                write!(formatter, "{:>+.8}, ", self[(row, col)])?;
            }
            formatter.write_str("]\n")?;
        }

        Ok(())
    }
}

/// The 2x2 sub-determinants shared by the determinant and the inverse.
///
/// `b00..b05` come from the first two columns, `b06..b11` from the last two.
struct Cofactors {
    b00: f32, b01: f32, b02: f32, b03: f32, b04: f32, b05: f32,
    b06: f32, b07: f32, b08: f32, b09: f32, b10: f32, b11: f32,
}

impl Cofactors {
    fn of(a: &[f32; 16]) -> Cofactors {
        Cofactors {
            b00: a[0] * a[5] - a[1] * a[4],
            b01: a[0] * a[6] - a[2] * a[4],
            b02: a[0] * a[7] - a[3] * a[4],
            b03: a[1] * a[6] - a[2] * a[5],
            b04: a[1] * a[7] - a[3] * a[5],
            b05: a[2] * a[7] - a[3] * a[6],
            b06: a[8] * a[13] - a[9] * a[12],
            b07: a[8] * a[14] - a[10] * a[12],
            b08: a[8] * a[15] - a[11] * a[12],
            b09: a[9] * a[14] - a[10] * a[13],
            b10: a[9] * a[15] - a[11] * a[13],
            b11: a[10] * a[15] - a[11] * a[14],
        }
    }

    fn determinant(&self) -> f32 {
        self.b00 * self.b11 - self.b01 * self.b10 + self.b02 * self.b09
            + self.b03 * self.b08 - self.b04 * self.b07 + self.b05 * self.b06
    }
}

fn is_singular(elements: &[f32; 16], determinant: f32) -> bool {
    if !determinant.is_finite() {
        return true;
    }

    // An affine matrix has the determinant of its upper 3x3, so the translation column stays out
    // of the bound.
    let affine = elements[3] == 0.0 && elements[7] == 0.0 && elements[11] == 0.0 && elements[15] == 1.0;
    let columns = if affine { 3 } else { 4 };

    let bound = elements
        .chunks(4)
        .take(columns)
        .map(|column| column.iter().map(|value| value * value).sum::<f32>().sqrt())
        .product::<f32>();

    bound == 0.0 || determinant.abs() <= SINGULAR_TOLERANCE * bound
}

fn all_finite(values: &[f32]) -> bool {
    values.iter().all(|value| value.is_finite())
}

/// Rejects projections whose bounds are finite but too far apart to represent.
fn finite_projection(elements: [f32; 16]) -> Result<[f32; 16], MathError> {
    if all_finite(&elements) {
        Ok(elements)
    } else {
        Err(degenerate_projection("bounds are too far apart to represent"))
    }
}

fn degenerate_projection(reason: &'static str) -> MathError {
    debug!("degenerate projection: {}", reason);
    MathError::DegenerateProjection(reason)
}

fn degenerate_view(reason: &'static str) -> MathError {
    debug!("degenerate view: {}", reason);
    MathError::DegenerateView(reason)
}
