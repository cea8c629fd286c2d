//! Cameras produce the view and projection halves of the MVP matrix.
//!
//! A camera sits at `eye` looking towards `center`, with `up` picking the roll. The projection
//! is either a perspective frustum, an orthographic box, or nothing at all (the flat triangle
//! lessons draw straight into clip space).

use log::trace;
use math::*;
use serde::{Deserialize, Serialize};

/// How far [`Camera::nudge()`] moves the eye along x.
pub const EYE_STEP: f32 = 0.05;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Projection {
    /// Vertical field of view in degrees. The aspect ratio comes from the camera.
    Perspective { fov: f32, near: f32, far: f32 },

    Orthographic {
        left: f32,
        right: f32,
        bottom: f32,
        top: f32,
        near: f32,
        far: f32,
    },

    /// Identity projection, coordinates are already in clip space.
    None,
}

impl Default for Projection {
    fn default() -> Projection {
        Projection::Perspective {
            fov: 30.0,
            near: 1.0,
            far: 100.0,
        }
    }
}

/// Direction for [`Camera::nudge()`], the arrow keys of the look-at lesson.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Nudge {
    Left,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub eye: Vector3,
    pub center: Vector3,
    pub up: Vector3,
    pub projection: Projection,
    aspect: f32,
}

impl Camera {
    pub fn new(eye: Vector3, center: Vector3, up: Vector3, projection: Projection) -> Camera {
        Camera {
            eye,
            center,
            up,
            projection,
            aspect: 1.0,
        }
    }

    /// Creates a camera at `eye` looking at `center` with +y as up.
    pub fn looking_at(eye: Vector3, center: Vector3, projection: Projection) -> Camera {
        Camera::new(eye, center, Vector3::up(), projection)
    }

    pub fn aspect(&self) -> f32 { self.aspect }

    /// Sets the aspect ratio used by perspective projections.
    ///
    /// Ratios that aren't finite and positive can't come from a real canvas, so they are ignored.
    pub fn set_aspect(&mut self, aspect: f32) -> &mut Camera {
        if aspect.is_finite() && aspect > 0.0 {
            self.aspect = aspect;
        } else {
            trace!("ignoring aspect ratio {}", aspect);
        }
        self
    }

    /// Moves the eye one [`EYE_STEP`] left or right along x.
    pub fn nudge(&mut self, direction: Nudge) -> &mut Camera {
        match direction {
            Nudge::Left => self.eye.x -= EYE_STEP,
            Nudge::Right => self.eye.x += EYE_STEP,
        }
        trace!("eye nudged {:?} to {:?}", direction, self.eye);
        self
    }

    pub fn view_matrix(&self) -> Result<Matrix4, MathError> {
        let mut view = Matrix4::new();
        view.set_look_at(self.eye, self.center, self.up)?;
        Ok(view)
    }

    pub fn projection_matrix(&self) -> Result<Matrix4, MathError> {
        let mut projection = Matrix4::new();
        match self.projection {
            Projection::Perspective { fov, near, far } => {
                projection.set_perspective(fov, self.aspect, near, far)?;
            }
            Projection::Orthographic { left, right, bottom, top, near, far } => {
                projection.set_ortho(left, right, bottom, top, near, far)?;
            }
            Projection::None => {}
        }
        Ok(projection)
    }

    /// `projection * view`, built the way the cube lessons do it: set the projection, then
    /// compose the look-at onto it.
    pub fn view_projection(&self) -> Result<Matrix4, MathError> {
        let mut view_projection = self.projection_matrix()?;
        view_projection.look_at(self.eye, self.center, self.up)?;
        Ok(view_projection)
    }
}
