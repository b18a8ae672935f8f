//! Laser eye overlay demo running the synthetic source against the
//! headless pipeline.

use anyhow::Result;
use clap::Parser;
use laser_eyes::{
    app::{LaserEyeApp, UiAction},
    config::Config,
    projection::CameraProjection,
    render::HeadlessPipeline,
    source::{LandmarkSource, SyntheticSource},
};
use log::info;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to configuration file (YAML format)
    #[arg(short = 'C', long)]
    config: Option<String>,

    /// Number of frames to run
    #[arg(short = 'n', long, default_value = "120")]
    frames: u64,

    /// Vertical field of view in degrees
    #[arg(long)]
    fov: Option<f64>,

    /// Reference depth of the tracked face plane
    #[arg(long)]
    depth: Option<f64>,

    /// Viewport width in pixels
    #[arg(long)]
    width: Option<u32>,

    /// Viewport height in pixels
    #[arg(long)]
    height: Option<u32>,

    /// Capture the final frame to this path
    #[arg(short, long)]
    output: Option<String>,

    /// Start with the laser effect disabled
    #[arg(long)]
    no_laser: bool,

    /// Start with the debug overlay visible
    #[arg(long)]
    debug_overlay: bool,

    /// Drop every Nth detection cycle to exercise tracking loss
    #[arg(long)]
    dropout: Option<u64>,

    /// Enable debug output
    #[arg(short, long)]
    debug: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.debug {
        env_logger::init_from_env(env_logger::Env::new().default_filter_or("debug"));
    } else {
        env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));
    }

    info!("Laser Eyes - landmark-driven overlay demo");

    // Load configuration if provided
    let mut config = if let Some(config_path) = &args.config {
        info!("Loading configuration from: {}", config_path);
        match Config::from_file(config_path) {
            Ok(cfg) => cfg,
            Err(e) => {
                log::warn!("Failed to load config file: {}. Using defaults.", e);
                Config::default()
            }
        }
    } else {
        Config::default()
    };

    // Apply command line overrides
    if let Some(fov) = args.fov {
        config.camera.fov_y_degrees = fov;
    }
    if let Some(depth) = args.depth {
        config.camera.reference_depth = depth;
    }
    if let Some(width) = args.width {
        config.camera.width = width;
    }
    if let Some(height) = args.height {
        config.camera.height = height;
    }
    if args.no_laser {
        config.effect.laser_enabled = false;
    }
    if args.debug_overlay {
        config.effect.debug_visible = true;
    }
    config.camera.aspect = f64::from(config.camera.width) / f64::from(config.camera.height);
    config.validate()?;

    let projection = CameraProjection::new(
        config.camera.fov_y_degrees,
        config.camera.aspect,
        config.camera.reference_depth,
    );
    let pipeline = HeadlessPipeline::new(config.camera.width, config.camera.height, projection);
    let mut app = LaserEyeApp::new(&config, pipeline)?;

    let mut source = SyntheticSource::new(config.tracking.clone());
    if let Some(interval) = args.dropout {
        source = source.with_dropout(interval);
    }
    source.start()?;

    info!(
        "Running {} frames at {}x{}",
        args.frames, config.camera.width, config.camera.height
    );

    for frame in 0..args.frames {
        let observations = source.poll()?;
        app.on_detection(&observations);
        app.render_frame()?;

        if frame % 30 == 0 {
            let (left, right) = app.marker_positions();
            log::debug!(
                "frame {}: left=({:.2}, {:.2}, {:.2}) right=({:.2}, {:.2}, {:.2}) visible={}",
                frame,
                left.x,
                left.y,
                left.z,
                right.x,
                right.y,
                right.z,
                app.markers().left.visible
            );
        }
    }

    if let Some(output) = &args.output {
        app.handle_action(UiAction::Capture, std::path::Path::new(output))?;
    }

    info!("Done");
    Ok(())
}
