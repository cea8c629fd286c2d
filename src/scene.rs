//! Everything needed to produce one frame of uniforms.
//!
//! A scene is a flat bundle: an optional camera, the model instances drawn with it, an optional
//! light and an optional spin shared by every instance. There is no hierarchy between instances.

use std::time::Duration;

use log::debug;
use math::*;

use crate::animation::Spin;
use crate::camera::{Camera, Nudge};
use crate::light::Lighting;
use crate::transform::ModelTransform;
use crate::uniforms::FrameUniforms;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Scene {
    /// `None` draws straight into clip space.
    pub camera: Option<Camera>,
    pub instances: Vec<ModelTransform>,
    pub lighting: Option<Lighting>,

    /// Applied before every instance's own transform.
    pub spin: Option<Spin>,
}

impl Scene {
    pub fn new() -> Scene {
        Scene::default()
    }

    /// Creates a scene with a single model instance.
    pub fn with_model(model: ModelTransform) -> Scene {
        Scene {
            instances: vec![model],
            ..Scene::default()
        }
    }

    pub fn view_projection(&self) -> Result<Matrix4, MathError> {
        match self.camera {
            Some(ref camera) => camera.view_projection(),
            None => Ok(Matrix4::identity()),
        }
    }

    /// The model matrix of `instance` with the spin applied, `R(spin) * instance`.
    pub fn model_matrix(&self, instance: &ModelTransform) -> Result<Matrix4, MathError> {
        let mut model = Matrix4::new();
        if let Some(ref spin) = self.spin {
            spin.apply(&mut model)?;
        }
        model.multiply(&instance.matrix()?);
        Ok(model)
    }

    /// Builds the uniforms for every instance, in order.
    pub fn frame(&self) -> Result<Vec<FrameUniforms>, MathError> {
        let view_projection = self.view_projection()?;

        self.instances
            .iter()
            .map(|instance| {
                let model = self.model_matrix(instance)?;
                FrameUniforms::new(&model, &view_projection, self.lighting.as_ref())
            })
            .collect()
    }

    /// Moves time forward, returning the spin angle if the scene has one.
    pub fn advance(&mut self, elapsed: Duration) -> Option<f32> {
        self.spin.as_mut().map(|spin| spin.advance(elapsed))
    }

    /// Nudges the camera eye. Does nothing for scenes without a camera.
    pub fn nudge_eye(&mut self, direction: Nudge) {
        match self.camera {
            Some(ref mut camera) => {
                camera.nudge(direction);
            }
            None => debug!("no camera to nudge"),
        }
    }

    /// Updates the camera's aspect ratio from a canvas size.
    pub fn resize(&mut self, width: u32, height: u32) {
        if let Some(ref mut camera) = self.camera {
            camera.set_aspect(width as f32 / height as f32);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::Projection;

    #[test]
    fn empty_scene_has_no_uniforms() {
        assert!(Scene::new().frame().unwrap().is_empty());
    }

    #[test]
    fn spin_is_applied_before_instance() {
        let mut model = ModelTransform::new();
        model.translate(0.4, 0.0, 0.0);

        let mut scene = Scene::with_model(model);
        let mut spin = Spin::new(Vector3::back());
        spin.set_angle(90.0);
        scene.spin = Some(spin);

        let uniforms = scene.frame().unwrap();
        let moved = uniforms[0].model_matrix() * Point::origin();
        assert!(moved.approx_eq(&Point::new(0.0, 0.4, 0.0), 1e-6), "{:?}", moved);
    }

    #[test]
    fn advance_without_spin() {
        let mut scene = Scene::with_model(ModelTransform::new());
        assert_eq!(scene.advance(Duration::from_secs(1)), None);

        scene.spin = Some(Spin::new(Vector3::back()));
        assert_eq!(scene.advance(Duration::from_secs(1)), Some(30.0));
    }

    #[test]
    fn resize_updates_aspect() {
        let mut scene = Scene::new();
        scene.camera = Some(Camera::looking_at(Vector3::back(), Vector3::zero(), Projection::default()));
        scene.resize(800, 400);
        assert_eq!(scene.camera.unwrap().aspect(), 2.0);

        // A zero height gives an infinite ratio, which the camera ignores.
        scene.resize(800, 0);
        assert_eq!(scene.camera.unwrap().aspect(), 2.0);
    }

    #[test]
    fn degenerate_camera_fails_the_frame() {
        let mut scene = Scene::with_model(ModelTransform::new());
        scene.camera = Some(Camera::looking_at(Vector3::zero(), Vector3::zero(), Projection::None));
        assert!(matches!(scene.frame(), Err(MathError::DegenerateView(_))));
    }
}
