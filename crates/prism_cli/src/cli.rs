use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use log::LevelFilter;
use prism_renderer::{OcclusionTest, SpecularScaling, DEFAULT_BUCKET_SIZE};

/// Log levels selectable on the command line
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Occlusion {
    /// Hit x coordinate between light sample and point
    XSign,
    /// Hit distance shorter than the shadow ray
    Parametric,
}

impl From<Occlusion> for OcclusionTest {
    fn from(occlusion: Occlusion) -> Self {
        match occlusion {
            Occlusion::XSign => OcclusionTest::XSignChange,
            Occlusion::Parametric => OcclusionTest::Parametric,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Specular {
    /// Highlights use one light sample's intensity
    PerSample,
    /// Highlights use the shadowed intensity received
    Received,
}

impl From<Specular> for SpecularScaling {
    fn from(specular: Specular) -> Self {
        match specular {
            Specular::PerSample => SpecularScaling::PerSample,
            Specular::Received => SpecularScaling::Received,
        }
    }
}

/// Command line arguments
#[derive(Debug, Parser)]
#[command(name = "prism")]
#[command(about = "Recursive ray tracer with soft-shadowed area lights")]
pub struct Args {
    /// Scene file (JSON). Renders the built-in Cornell box when omitted
    pub scene: Option<PathBuf>,

    /// Output PNG path
    #[arg(short, long, default_value = "render.png")]
    pub output: PathBuf,

    /// Override the scene's image width
    #[arg(long)]
    pub width: Option<u32>,

    /// Override the scene's image height
    #[arg(long)]
    pub height: Option<u32>,

    /// Override the scene's field of view, in degrees
    #[arg(long)]
    pub fov: Option<f32>,

    /// Deepest reflection/refraction level that is still shaded
    #[arg(long, default_value = "5")]
    pub max_depth: u32,

    /// Shadow ray occlusion rule
    #[arg(long, value_enum, default_value = "x-sign")]
    pub occlusion: Occlusion,

    /// Light intensity used for specular highlights
    #[arg(long, value_enum, default_value = "per-sample")]
    pub specular: Specular,

    /// Render on the calling thread instead of in parallel buckets
    #[arg(long)]
    pub serial: bool,

    /// Bucket edge length in pixels
    #[arg(long, default_value_t = DEFAULT_BUCKET_SIZE)]
    pub bucket_size: u32,

    /// Worker threads for bucket rendering (0 = one per core)
    #[arg(short = 'j', long, default_value = "0")]
    pub threads: usize,

    /// Print the selected scene as JSON and exit
    #[arg(long)]
    pub dump_scene: bool,

    /// Set the logging level (defaults to RUST_LOG, then "info")
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevel>,
}
