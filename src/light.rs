//! Directional, point and ambient lights.
//!
//! The lighting lessons all use the same model: a single light contributes Lambert diffuse
//! (`max(dot(L, N), 0)`) and a constant ambient term is added on top. [`Lighting::shade()`] is a
//! CPU version of that shader code, useful for checking the uniforms without a GPU.

use math::*;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DirectionalLight {
    direction: Vector3,
    pub color: Color,
}

impl DirectionalLight {
    /// Creates a light shining from `direction`, which is normalized here.
    ///
    /// `direction` points from the surface towards the light, matching `u_LightDirection`.
    pub fn new(direction: Vector3, color: Color) -> Result<DirectionalLight, MathError> {
        Ok(DirectionalLight {
            direction: direction.normalized()?,
            color,
        })
    }

    /// The unit direction towards the light.
    pub fn direction(&self) -> Vector3 { self.direction }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointLight {
    pub position: Point,
    pub color: Color,
}

impl PointLight {
    pub fn new(position: Point, color: Color) -> PointLight {
        PointLight { position, color }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Light {
    Directional(DirectionalLight),
    Point(PointLight),
}

impl Light {
    pub fn color(&self) -> Color {
        match *self {
            Light::Directional(ref light) => light.color,
            Light::Point(ref light) => light.color,
        }
    }

    /// Unit vector from `position` towards the light.
    pub fn direction_from(&self, position: Point) -> Result<Vector3, MathError> {
        match *self {
            Light::Directional(ref light) => Ok(light.direction),
            Light::Point(ref light) => (light.position - position).normalized(),
        }
    }

    /// The light as a `vec4`: a direction with `w = 0` or a position with `w = 1`.
    pub fn as_vector4(&self) -> [f32; 4] {
        match *self {
            Light::Directional(ref light) => {
                let Vector3 { x, y, z } = light.direction;
                [x, y, z, 0.0]
            }
            Light::Point(ref light) => {
                let position = light.position;
                [position.x, position.y, position.z, 1.0]
            }
        }
    }
}

/// A light plus the ambient color shared by every surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Lighting {
    pub light: Light,
    pub ambient: Color,
}

impl Lighting {
    pub fn new(light: Light, ambient: Color) -> Lighting {
        Lighting { light, ambient }
    }

    /// Color of a surface point in world space.
    ///
    /// `normal` doesn't need to be normalized. A zero normal or a point light sitting exactly on
    /// the surface gives `MathError::ZeroLength`.
    pub fn shade(&self, base: Color, position: Point, normal: Vector3) -> Result<Color, MathError> {
        let normal = normal.normalized()?;
        let to_light = self.light.direction_from(position)?;
        let n_dot_l = to_light.dot(normal).max(0.0);

        let diffuse = self.light.color() * base * n_dot_l;
        let ambient = self.ambient * base;
        Ok(diffuse + ambient)
    }

    /// Shades a vertex in model space, the way the vertex shader does: the position goes
    /// through `model`, the normal through `normal_matrix`.
    pub fn shade_vertex(
        &self,
        base: Color,
        position: Point,
        normal: Vector3,
        model: &Matrix4,
        normal_matrix: &Matrix4,
    ) -> Result<Color, MathError> {
        let world_position = model.transform_point(position);
        let world_normal = normal_matrix.transform_direction(normal);
        self.shade(base, world_position, world_normal)
    }
}
