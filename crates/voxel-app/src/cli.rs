use std::path::PathBuf;

use clap::Parser;
use voxel_common::ShapeKind;

/// voxel-cloud, a gesture-driven particle morphing engine.
#[derive(Parser, Debug)]
#[command(name = "voxel-cloud", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log level override (trace, debug, info, warn, error, or a full
    /// filter directive).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Number of frames to run headless before shutting down.
    #[arg(long, default_value_t = 600)]
    pub frames: u64,

    /// Target frames per second.
    #[arg(long, default_value_t = 60)]
    pub fps: u32,

    /// Seed for particle attributes and shape sampling.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Starting shape (36, pyramid, cube, planet, rocket, mobius, heart).
    #[arg(long)]
    pub shape: Option<ShapeKind>,

    /// Run without the hand tracker; the cloud auto-rotates.
    #[arg(long)]
    pub no_tracking: bool,

    /// Press the switch-camera button once at startup.
    #[arg(long)]
    pub switch_camera: bool,
}

pub fn parse() -> Args {
    Args::parse()
}
