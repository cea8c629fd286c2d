//! Per-draw uniform block
//!
//! Holds everything the lesson shaders read: `u_ModelMatrix`, `u_MvpMatrix`, `u_NormalMatrix`
//! and the light uniforms, laid out as a single `#[repr(C)]` block that can be uploaded as-is.

use bytemuck::{Pod, Zeroable};
use math::*;

use crate::light::Lighting;

/// Uniforms for drawing one model instance
///
/// Matrices are column-major, ready for `uniformMatrix4fv` with `transpose = false`.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct FrameUniforms {
    /// Model matrix
    pub model: [f32; 16],
    /// Projection * view * model
    pub mvp: [f32; 16],
    /// Inverse-transpose of the model matrix's upper 3x3
    pub normal_matrix: [f32; 16],
    /// Light color (a unused)
    pub light_color: [f32; 4],
    /// Direction towards a directional light (w = 0) or point light position (w = 1)
    pub light_vector: [f32; 4],
    /// Ambient light color (a unused)
    pub ambient: [f32; 4],
}

impl FrameUniforms {
    /// Builds the block for one instance.
    ///
    /// The normal matrix is only needed by lit scenes, so it stays the identity when `lighting`
    /// is `None` and a non-invertible model matrix is only an error when there is a light.
    pub fn new(
        model: &Matrix4,
        view_projection: &Matrix4,
        lighting: Option<&Lighting>,
    ) -> Result<FrameUniforms, MathError> {
        let mut mvp = Matrix4::new();
        mvp.set(view_projection).multiply(model);

        let mut uniforms = FrameUniforms {
            model: (*model).into(),
            mvp: mvp.into(),
            normal_matrix: Matrix4::identity().into(),
            ..FrameUniforms::zeroed()
        };

        if let Some(lighting) = lighting {
            let mut normal_matrix = Matrix4::new();
            normal_matrix.set_normal_matrix_of(model)?;

            uniforms.normal_matrix = normal_matrix.into();
            uniforms.light_color = *lighting.light.color().as_array();
            uniforms.light_vector = lighting.light.as_vector4();
            uniforms.ambient = *lighting.ambient.as_array();
        }

        Ok(uniforms)
    }

    pub fn model_matrix(&self) -> Matrix4 {
        Matrix4::from_column_major(self.model)
    }

    pub fn mvp_matrix(&self) -> Matrix4 {
        Matrix4::from_column_major(self.mvp)
    }

    pub fn normal_matrix(&self) -> Matrix4 {
        Matrix4::from_column_major(self.normal_matrix)
    }

    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }
}
