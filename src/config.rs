//! JSON scene configuration.
//!
//! A config describes a scene the same way the lesson presets do, so new setups can be tried
//! without recompiling:
//!
//! ```json
//! {
//!     "canvas": { "width": 400, "height": 400 },
//!     "camera": {
//!         "eye": [3.0, 3.0, 7.0],
//!         "projection": { "kind": "perspective", "fov": 30.0, "near": 1.0, "far": 100.0 }
//!     },
//!     "instances": [[{ "op": "rotate", "angle": 90.0, "axis": [0.0, 1.0, 0.0] }]],
//!     "lighting": {
//!         "light": { "kind": "point", "position": [3.0, 3.0, 4.0] },
//!         "ambient": [0.2, 0.2, 0.2]
//!     }
//! }
//! ```
//!
//! Every field is optional. A missing camera draws straight into clip space, missing instances
//! default to a single untransformed model.

use std::fs;
use std::path::Path;
use std::str::FromStr;

use log::info;
use math::*;
use serde::{Deserialize, Serialize};

use crate::animation::{Spin, ANGLE_STEP};
use crate::camera::{Camera, Projection};
use crate::light::{DirectionalLight, Light, Lighting, PointLight};
use crate::scene::Scene;
use crate::transform::{ModelTransform, Step};
use crate::{Error, Result};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SceneConfig {
    pub canvas: CanvasConfig,
    pub camera: Option<CameraConfig>,
    pub instances: Vec<Vec<StepConfig>>,
    pub lighting: Option<LightingConfig>,
    pub spin: Option<SpinConfig>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CanvasConfig {
    pub width: u32,
    pub height: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CameraConfig {
    pub eye: [f32; 3],
    #[serde(default)]
    pub center: [f32; 3],
    #[serde(default = "default_up")]
    pub up: [f32; 3],
    #[serde(default)]
    pub projection: Projection,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum StepConfig {
    Translate { by: [f32; 3] },
    Rotate { angle: f32, axis: [f32; 3] },
    Scale { by: [f32; 3] },
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LightingConfig {
    pub light: LightConfig,
    #[serde(default)]
    pub ambient: [f32; 3],
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum LightConfig {
    /// `direction` points towards the light and doesn't need to be normalized.
    Directional {
        direction: [f32; 3],
        #[serde(default = "default_light_color")]
        color: [f32; 3],
    },

    Point {
        position: [f32; 3],
        #[serde(default = "default_light_color")]
        color: [f32; 3],
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SpinConfig {
    /// Starting angle in degrees.
    #[serde(default)]
    pub angle: f32,
    #[serde(default = "default_angle_step")]
    pub degrees_per_second: f32,
    #[serde(default = "default_spin_axis")]
    pub axis: [f32; 3],
}

impl SceneConfig {
    /// Reads and parses a config file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<SceneConfig> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let config: SceneConfig = text.parse()?;
        info!("loaded scene config from {}", path.display());
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Builds the scene the config describes.
    ///
    /// Fails for canvases without area and for degenerate light directions. Rotation axes and
    /// camera placement are only checked when the scene's uniforms are computed.
    pub fn build_scene(&self) -> Result<Scene> {
        let aspect = self.canvas.aspect()?;

        let camera = self.camera.map(|camera| {
            let mut built = Camera::new(camera.eye.into(), camera.center.into(), camera.up.into(), camera.projection);
            built.set_aspect(aspect);
            built
        });

        let instances = self
            .instances
            .iter()
            .map(|steps| ModelTransform::from_steps(steps.iter().map(|&step| step.into()).collect()))
            .collect();

        let lighting = match self.lighting {
            Some(lighting) => Some(lighting.build()?),
            None => None,
        };

        let spin = self.spin.map(|config| {
            let mut spin = Spin::new(config.axis.into());
            spin.degrees_per_second = config.degrees_per_second;
            spin.set_angle(config.angle);
            spin
        });

        Ok(Scene {
            camera,
            instances,
            lighting,
            spin,
        })
    }
}

impl Default for SceneConfig {
    fn default() -> SceneConfig {
        SceneConfig {
            canvas: CanvasConfig::default(),
            camera: None,
            instances: vec![Vec::new()],
            lighting: None,
            spin: None,
        }
    }
}

impl FromStr for SceneConfig {
    type Err = Error;

    fn from_str(text: &str) -> Result<SceneConfig> {
        Ok(serde_json::from_str(text)?)
    }
}

impl CanvasConfig {
    pub fn aspect(&self) -> Result<f32> {
        if self.width == 0 || self.height == 0 {
            return Err(Error::InvalidCanvas { width: self.width, height: self.height });
        }

        Ok(self.width as f32 / self.height as f32)
    }
}

impl Default for CanvasConfig {
    fn default() -> CanvasConfig {
        CanvasConfig { width: 400, height: 400 }
    }
}

impl From<StepConfig> for Step {
    fn from(from: StepConfig) -> Step {
        match from {
            StepConfig::Translate { by } => Step::Translate(by.into()),
            StepConfig::Rotate { angle, axis } => Step::Rotate { angle, axis: axis.into() },
            StepConfig::Scale { by } => Step::Scale(by.into()),
        }
    }
}

impl LightingConfig {
    fn build(&self) -> Result<Lighting> {
        let light = match self.light {
            LightConfig::Directional { direction, color } => {
                Light::Directional(DirectionalLight::new(direction.into(), color.into())?)
            }
            LightConfig::Point { position, color } => {
                let [x, y, z] = position;
                Light::Point(PointLight::new(Point::new(x, y, z), color.into()))
            }
        };

        Ok(Lighting::new(light, self.ambient.into()))
    }
}

fn default_up() -> [f32; 3] {
    [0.0, 1.0, 0.0]
}

fn default_light_color() -> [f32; 3] {
    [1.0, 1.0, 1.0]
}

fn default_angle_step() -> f32 {
    ANGLE_STEP
}

fn default_spin_axis() -> [f32; 3] {
    [0.0, 0.0, 1.0]
}
