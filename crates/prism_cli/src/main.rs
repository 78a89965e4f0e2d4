//! `prism` - render a scene to a PNG file.

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use log::LevelFilter;
use prism_core::{load_scene, SceneDescription};
use prism_renderer::{render, render_parallel, Camera, RenderConfig, Scene};

use crate::cli::Args;

fn init_logger(level: Option<LevelFilter>) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));
    if let Some(level) = level {
        builder.filter_level(level);
    }
    builder.init();
}

/// Apply command line camera overrides to the scene description.
fn apply_overrides(desc: &mut SceneDescription, args: &Args) {
    if let Some(width) = args.width {
        desc.camera.width = width;
    }
    if let Some(height) = args.height {
        desc.camera.height = height;
    }
    if let Some(fov) = args.fov {
        desc.camera.fov = fov;
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logger(args.log_level.map(LevelFilter::from));

    let mut desc = match &args.scene {
        Some(path) => load_scene(path)
            .with_context(|| format!("Failed to load scene {}", path.display()))?,
        None => {
            log::info!("No scene file given, using the built-in Cornell box");
            SceneDescription::cornell_box()
        }
    };
    apply_overrides(&mut desc, &args);
    desc.validate().context("Invalid camera settings")?;

    if args.dump_scene {
        println!("{}", serde_json::to_string_pretty(&desc)?);
        return Ok(());
    }

    if args.threads > 0 {
        rayon::ThreadPoolBuilder::new()
            .num_threads(args.threads)
            .build_global()
            .context("Failed to configure the render thread pool")?;
    }

    let scene = Scene::from_description(&desc)?;
    let camera = Camera::from_description(&desc.camera);
    let config = RenderConfig {
        max_depth: args.max_depth,
        occlusion: args.occlusion.into(),
        specular: args.specular.into(),
        ..Default::default()
    };

    log::info!(
        "Rendering {}x{}, {} primitives, {} lights, max depth {}",
        camera.image_width,
        camera.image_height,
        scene.primitives().len(),
        scene.lights().len(),
        config.max_depth
    );

    let image = if args.serial {
        render(&camera, &scene, &config)
    } else {
        render_parallel(&camera, &scene, &config, args.bucket_size)
    };

    image
        .save_png(&args.output)
        .with_context(|| format!("Failed to write {}", args.output.display()))?;
    log::info!("Saved {}", args.output.display());

    Ok(())
}
