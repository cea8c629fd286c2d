//! Prints the uniforms a lesson would upload, frame by frame.
//!
//! ```text
//! cargo run --example dump_uniforms -- hello-cube
//! cargo run --example dump_uniforms -- path/to/scene.json 5
//! cargo run --example dump_uniforms -- perspective-mvp 1 800x400
//! ```
//!
//! The first argument is a lesson name or a path to a JSON scene config. The optional second
//! argument is the number of frames, each 16 ms apart. The optional third argument is the canvas
//! size: lessons default to a 400x400 canvas, configs to their own `canvas` entry. Set
//! `RUST_LOG=debug` to see what the scene is doing.

extern crate anyhow;
extern crate env_logger;
extern crate lightbox;

use std::env;
use std::time::Duration;

use anyhow::{bail, Context};
use lightbox::config::CanvasConfig;
use lightbox::{Lesson, Scene, SceneConfig};
use log::info;

const FRAME_TIME: Duration = Duration::from_millis(16);

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let mut args = env::args().skip(1);
    let source = match args.next() {
        Some(source) => source,
        None => {
            let names: Vec<_> = Lesson::ALL.iter().map(|lesson| lesson.name()).collect();
            bail!(
                "usage: dump_uniforms <lesson|config.json> [frames] [WIDTHxHEIGHT]\nlessons: {}",
                names.join(", ")
            );
        }
    };
    let frames: usize = match args.next() {
        Some(frames) => frames.parse().with_context(|| format!("invalid frame count {:?}", frames))?,
        None => 1,
    };
    let canvas = match args.next() {
        Some(size) => Some(parse_canvas(&size)?),
        None => None,
    };

    let mut scene = load_scene(&source, canvas)?;

    for frame in 0..frames {
        let uniforms = scene.frame().with_context(|| format!("frame {} of {}", frame, source))?;

        println!("frame {}", frame);
        for (index, instance) in uniforms.iter().enumerate() {
            println!("  instance {}", index);
            println!("    u_ModelMatrix  {:?}", instance.model);
            println!("    u_MvpMatrix    {:?}", instance.mvp);
            println!("    u_NormalMatrix {:?}", instance.normal_matrix);
            if scene.lighting.is_some() {
                println!("    u_LightColor   {:?}", instance.light_color);
                println!("    u_Light        {:?}", instance.light_vector);
                println!("    u_AmbientLight {:?}", instance.ambient);
            }
        }

        if let Some(angle) = scene.advance(FRAME_TIME) {
            info!("angle is now {}", angle);
        }
    }

    Ok(())
}

fn load_scene(source: &str, canvas: Option<CanvasConfig>) -> anyhow::Result<Scene> {
    if let Ok(lesson) = source.parse::<Lesson>() {
        let aspect = canvas.unwrap_or_default().aspect()?;
        return lesson
            .scene(aspect)
            .with_context(|| format!("failed to build lesson {}", lesson));
    }

    let mut config = SceneConfig::load(source)?;
    if let Some(canvas) = canvas {
        config.canvas = canvas;
    }
    config
        .build_scene()
        .with_context(|| format!("invalid scene in {}", source))
}

/// Parses a `WIDTHxHEIGHT` canvas size such as `800x600`.
fn parse_canvas(size: &str) -> anyhow::Result<CanvasConfig> {
    let (width, height) = match size.split_once('x') {
        Some(parts) => parts,
        None => bail!("canvas size {:?} should look like 800x600", size),
    };

    let canvas = CanvasConfig {
        width: width.parse().with_context(|| format!("invalid canvas width in {:?}", size))?,
        height: height.parse().with_context(|| format!("invalid canvas height in {:?}", size))?,
    };
    canvas.aspect()?;
    Ok(canvas)
}
