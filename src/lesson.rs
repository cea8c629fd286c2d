//! Named presets reproducing the matrix setup of each transformation and lighting lesson.

use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use log::debug;
use math::*;

use crate::animation::Spin;
use crate::camera::{Camera, Projection};
use crate::light::{DirectionalLight, Light, Lighting, PointLight};
use crate::scene::Scene;
use crate::transform::ModelTransform;
use crate::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Lesson {
    /// A triangle rotated -90 degrees about z.
    RotateTriangle,
    /// Rotate by -45 degrees, then translate 0.5 along x.
    RotatedTranslatedTriangle,
    /// A triangle spinning about z, offset 0.4 along x.
    RotateAnimation,
    /// Triangles seen from `(0.20, 0.25, 0.25)` with no projection. The eye can be nudged.
    LookAtTriangles,
    /// The same triangles drawn twice, at x = ±0.75, through a 30 degree perspective.
    PerspectiveMvp,
    /// Two overlapping triangles offset by 0.001 along x.
    ZFighting,
    HelloCube,
    LightedTranslatedRotatedCube,
    PointLightedCube,
    PointLightedCubePerFragment,
}

impl Lesson {
    pub const ALL: [Lesson; 10] = [
        Lesson::RotateTriangle,
        Lesson::RotatedTranslatedTriangle,
        Lesson::RotateAnimation,
        Lesson::LookAtTriangles,
        Lesson::PerspectiveMvp,
        Lesson::ZFighting,
        Lesson::HelloCube,
        Lesson::LightedTranslatedRotatedCube,
        Lesson::PointLightedCube,
        Lesson::PointLightedCubePerFragment,
    ];

    pub fn name(&self) -> &'static str {
        match *self {
            Lesson::RotateTriangle => "rotate-triangle",
            Lesson::RotatedTranslatedTriangle => "rotated-translated-triangle",
            Lesson::RotateAnimation => "rotate-animation",
            Lesson::LookAtTriangles => "look-at-triangles",
            Lesson::PerspectiveMvp => "perspective-mvp",
            Lesson::ZFighting => "z-fighting",
            Lesson::HelloCube => "hello-cube",
            Lesson::LightedTranslatedRotatedCube => "lighted-translated-rotated-cube",
            Lesson::PointLightedCube => "point-lighted-cube",
            Lesson::PointLightedCubePerFragment => "point-lighted-cube-per-fragment",
        }
    }

    /// Builds the lesson's scene for a canvas with the given aspect ratio.
    pub fn scene(&self, aspect: f32) -> Result<Scene, MathError> {
        debug!("building lesson {} with aspect {}", self, aspect);

        let mut scene = match *self {
            Lesson::RotateTriangle => {
                let mut model = ModelTransform::new();
                model.rotate(-90.0, 0.0, 0.0, 1.0);
                Scene::with_model(model)
            }

            Lesson::RotatedTranslatedTriangle => {
                let mut model = ModelTransform::new();
                model.rotate(-45.0, 0.0, 0.0, 1.0).translate(0.5, 0.0, 0.0);
                Scene::with_model(model)
            }

            Lesson::RotateAnimation => {
                let mut model = ModelTransform::new();
                model.translate(0.4, 0.0, 0.0);

                let mut scene = Scene::with_model(model);
                scene.spin = Some(Spin::new(Vector3::back()));
                scene
            }

            Lesson::LookAtTriangles => {
                let mut scene = Scene::with_model(ModelTransform::new());
                scene.camera = Some(Camera::looking_at(
                    Vector3::new(0.20, 0.25, 0.25),
                    Vector3::zero(),
                    Projection::None,
                ));
                scene
            }

            Lesson::PerspectiveMvp => {
                let mut right = ModelTransform::new();
                right.translate(0.75, 0.0, 0.0);
                let mut left = ModelTransform::new();
                left.translate(-0.75, 0.0, 0.0);

                let mut scene = Scene::new();
                scene.instances = vec![right, left];
                scene.camera = Some(down_negative_z());
                scene
            }

            Lesson::ZFighting => {
                let mut model = ModelTransform::new();
                model.translate(0.001, 0.0, 0.0);

                let mut scene = Scene::with_model(model);
                scene.camera = Some(down_negative_z());
                scene
            }

            Lesson::HelloCube => {
                let mut scene = Scene::with_model(ModelTransform::new());
                scene.camera = Some(looking_at_origin(3.0, 3.0, 7.0));
                scene
            }

            Lesson::LightedTranslatedRotatedCube => {
                let mut model = ModelTransform::new();
                model.translate(0.0, 1.0, 0.0).rotate(45.0, 0.0, 0.0, 1.0);

                let light = DirectionalLight::new(Vector3::new(0.5, 3.0, 4.0), color::WHITE)?;

                let mut scene = Scene::with_model(model);
                scene.camera = Some(looking_at_origin(-7.0, 2.5, 6.0));
                scene.lighting = Some(Lighting::new(Light::Directional(light), Color::gray(0.2)));
                scene
            }

            Lesson::PointLightedCube => {
                let light = PointLight::new(Point::new(3.0, 3.0, 4.0), color::WHITE);

                let mut scene = Scene::with_model(turned_cube());
                scene.camera = Some(looking_at_origin(3.0, 3.0, 7.0));
                scene.lighting = Some(Lighting::new(Light::Point(light), Color::gray(0.2)));
                scene
            }

            Lesson::PointLightedCubePerFragment => {
                let light = PointLight::new(Point::new(2.3, 4.0, 3.5), color::WHITE);

                let mut scene = Scene::with_model(turned_cube());
                scene.camera = Some(looking_at_origin(8.0, 8.0, 16.0));
                scene.lighting = Some(Lighting::new(Light::Point(light), Color::gray(0.2)));
                scene
            }
        };

        if let Some(ref mut camera) = scene.camera {
            camera.set_aspect(aspect);
        }

        Ok(scene)
    }
}

impl Display for Lesson {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Lesson {
    type Err = Error;

    fn from_str(name: &str) -> Result<Lesson, Error> {
        Lesson::ALL
            .iter()
            .find(|lesson| lesson.name() == name)
            .cloned()
            .ok_or_else(|| Error::UnknownLesson(name.into()))
    }
}

fn looking_at_origin(x: f32, y: f32, z: f32) -> Camera {
    Camera::looking_at(Vector3::new(x, y, z), Vector3::zero(), Projection::default())
}

fn down_negative_z() -> Camera {
    Camera::looking_at(Vector3::new(0.0, 0.0, 5.0), Vector3::new(0.0, 0.0, -100.0), Projection::default())
}

fn turned_cube() -> ModelTransform {
    let mut model = ModelTransform::new();
    model.rotate(90.0, 0.0, 1.0, 0.0);
    model
}
