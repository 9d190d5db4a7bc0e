mod cli;
mod scripted;
mod session;
mod worker;

use std::f32::consts::TAU;
use std::time::{Duration, Instant};

use glam::Vec2;
use tokio::time::MissedTickBehavior;
use tracing_subscriber::filter::Directive;
use tracing_subscriber::EnvFilter;
use voxel_common::{ConfigError, VoxelError};
use voxel_config::VoxelConfig;
use voxel_engine::{field, GlyphOutline, ShapeGenerator};
use voxel_vision::HandDetector;

use scripted::ScriptedDetector;
use session::Session;
use worker::ShapeWorker;

fn load_config(args: &cli::Args) -> Result<VoxelConfig, ConfigError> {
    match &args.config {
        Some(path) => voxel_config::load_config_from(path),
        None => voxel_config::load_config(),
    }
}

fn init_logging(args: &cli::Args, config: &VoxelConfig) {
    let fallback = format!("voxel={}", config.logging.level.as_filter());
    let log_directive = match args.log_level.as_deref() {
        Some(level) if !level.contains('=') => format!("voxel={level}"),
        Some(directive) => directive.to_string(),
        None => fallback.clone(),
    };
    let directive: Directive = log_directive
        .parse()
        .or_else(|_| fallback.parse())
        .unwrap_or_else(|_| "voxel=info".parse().expect("static directive is valid"));
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(directive))
        .init();
}

/// Glyph outline from the configured asset, or the built-in "36".
fn shape_generator(config: &VoxelConfig) -> Result<ShapeGenerator, VoxelError> {
    if let Some(path) = &config.glyph.asset {
        match GlyphOutline::load(path).and_then(|outline| ShapeGenerator::new(&outline)) {
            Ok(generator) => {
                tracing::info!("Glyph outline loaded from {}", path.display());
                return Ok(generator);
            }
            Err(e) => tracing::warn!("Glyph asset unusable, using built-in outline: {e}"),
        }
    }
    ShapeGenerator::builtin().map_err(|e| VoxelError::Shape(e.to_string()))
}

/// Pointer path for headless runs: a slow circle around the center.
fn orbit_pointer(now_ms: u64) -> Vec2 {
    let angle = (now_ms % 6000) as f32 / 6000.0 * TAU;
    Vec2::new(angle.cos(), angle.sin()) * 0.5
}

async fn run(args: cli::Args, config: VoxelConfig) -> Result<(), VoxelError> {
    let seed = args.seed.unwrap_or_else(rand::random);
    let generator = shape_generator(&config)?;
    let worker = ShapeWorker::new(
        tokio::runtime::Handle::current(),
        generator,
        config.particles.count as usize,
        seed,
    );
    let detector: Option<Box<dyn HandDetector>> = if args.no_tracking {
        None
    } else {
        Some(Box::new(ScriptedDetector::default()))
    };

    let mut session = Session::new(&config, detector, worker, seed);
    session.resize(1280, 720, 1.0);
    if args.switch_camera {
        session.switch_camera();
    }
    session.settle().await;

    let frame = Duration::from_secs_f64(1.0 / f64::from(args.fps.max(1)));
    let mut ticker = tokio::time::interval(frame);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
    let ctrl_c = tokio::signal::ctrl_c();
    tokio::pin!(ctrl_c);

    tracing::info!("Running {} frames at {} fps", args.frames, args.fps);
    let start = Instant::now();
    for _ in 0..args.frames {
        tokio::select! {
            _ = ticker.tick() => {}
            _ = &mut ctrl_c => {
                tracing::info!("Interrupted");
                break;
            }
        }
        let now_ms = start.elapsed().as_millis() as u64;
        session.detection_tick(now_ms);
        session.frame(Some(orbit_pointer(now_ms)));
        session.hud_tick(now_ms);
    }

    let points = session.preview();
    tracing::info!(
        shape = %session.state().current_shape,
        extent = field::extent(&points),
        morph = session.morph().progress(),
        camera = session.uniforms().camera_distance,
        detections = session.tracker().stats().detections,
        camera_device = session.tracker().camera().map_or("-", |c| c.label.as_str()),
        "Run finished"
    );
    session.shutdown();
    Ok(())
}

fn main() {
    let args = cli::parse();

    // Config first so its log level applies; failures are reported once
    // logging is up.
    let loaded = load_config(&args);
    let mut config = loaded.as_ref().cloned().unwrap_or_default();
    init_logging(&args, &config);

    tracing::info!("voxel-cloud v{} starting...", env!("CARGO_PKG_VERSION"));
    if let Some(ref path) = args.config {
        tracing::info!("Using config override: {}", path.display());
    }
    if let Err(e) = loaded {
        tracing::warn!("Config load failed, using defaults: {e}");
    }
    if let Some(shape) = args.shape {
        config.particles.initial_shape = shape;
    }
    if args.no_tracking {
        config.tracking.enabled = false;
    }

    let rt = match tokio::runtime::Builder::new_multi_thread()
        .worker_threads(2)
        .enable_all()
        .build()
    {
        Ok(rt) => rt,
        Err(e) => {
            tracing::error!("Failed to start tokio runtime: {e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = rt.block_on(run(args, config)) {
        tracing::error!("{e}");
        std::process::exit(1);
    }
    tracing::info!("Shutdown complete");
}
