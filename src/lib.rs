//! Headless reproduction of the matrix and lighting setup of a series of WebGL lessons.
//!
//! Each lesson builds its model, view and projection matrices with the in-place
//! [`Matrix4`](math::Matrix4) API, then uploads them along with its light uniforms. This crate
//! does the same work without a GL context: a [`Scene`] (from a [`Lesson`] preset or a JSON
//! [`SceneConfig`]) produces one [`FrameUniforms`] block per model instance.

pub extern crate transform_math as math;

pub mod animation;
pub mod camera;
pub mod config;
pub mod error;
pub mod lesson;
pub mod light;
pub mod scene;
pub mod transform;
pub mod uniforms;

pub use crate::camera::{Camera, Nudge, Projection};
pub use crate::config::SceneConfig;
pub use crate::error::{Error, Result};
pub use crate::lesson::Lesson;
pub use crate::scene::Scene;
pub use crate::uniforms::FrameUniforms;
