//! Model transforms as an ordered list of steps.
//!
//! Steps are applied to the matrix in the order they were added, each one right-multiplying the
//! result so far. That means the last step is the first one a vertex sees:
//! `translate(0.5, 0, 0)` followed by `rotate(-45, z)` rotates the triangle and then moves it.

use log::debug;
use math::*;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Step {
    Translate(Vector3),

    /// Rotation of `angle` degrees about `axis`.
    Rotate { angle: f32, axis: Vector3 },

    Scale(Vector3),
}

impl Step {
    /// Right-multiplies `matrix` by this step.
    pub fn apply(&self, matrix: &mut Matrix4) -> Result<(), MathError> {
        match *self {
            Step::Translate(offset) => {
                matrix.translate(offset.x, offset.y, offset.z);
            }
            Step::Rotate { angle, axis } => {
                matrix.rotate(angle, axis.x, axis.y, axis.z)?;
            }
            Step::Scale(scale) => {
                matrix.scale(scale.x, scale.y, scale.z);
            }
        }

        Ok(())
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ModelTransform {
    steps: Vec<Step>,
}

impl ModelTransform {
    /// Creates the identity transform.
    pub fn new() -> ModelTransform {
        ModelTransform::default()
    }

    pub fn from_steps(steps: Vec<Step>) -> ModelTransform {
        ModelTransform { steps }
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn push(&mut self, step: Step) -> &mut ModelTransform {
        self.steps.push(step);
        self
    }

    pub fn translate(&mut self, x: f32, y: f32, z: f32) -> &mut ModelTransform {
        self.push(Step::Translate(Vector3::new(x, y, z)))
    }

    pub fn rotate(&mut self, angle: f32, x: f32, y: f32, z: f32) -> &mut ModelTransform {
        self.push(Step::Rotate { angle, axis: Vector3::new(x, y, z) })
    }

    pub fn scale(&mut self, x: f32, y: f32, z: f32) -> &mut ModelTransform {
        self.push(Step::Scale(Vector3::new(x, y, z)))
    }

    /// Composes every step into the model matrix.
    ///
    /// Fails if a rotation step has a zero axis.
    pub fn matrix(&self) -> Result<Matrix4, MathError> {
        let mut model = Matrix4::new();
        for step in &self.steps {
            step.apply(&mut model)?;
        }
        Ok(model)
    }

    /// The inverse-transpose of [`matrix()`](ModelTransform::matrix), for transforming normals.
    pub fn normal_matrix(&self) -> Result<Matrix4, MathError> {
        let model = self.matrix()?;
        let mut normal_matrix = Matrix4::new();
        if let Err(error) = normal_matrix.set_normal_matrix_of(&model) {
            debug!("model transform {:?} has no normal matrix: {}", self.steps, error);
            return Err(error);
        }
        Ok(normal_matrix)
    }
}
