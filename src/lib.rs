//! Laser eye overlay engine driven by face landmark tracking.
//!
//! This library maps normalized face landmarks into a 3D scene's world
//! space and drives two emissive eye markers plus a head-pose basis from
//! them. The update pipeline consists of:
//! 1. Landmark acquisition from an external detector ([`source`])
//! 2. Landmark-to-world coordinate mapping ([`projection`])
//! 3. Head orientation estimation from anchor landmarks ([`head_pose`])
//! 4. Marker and mode-flag updates applied to a render pipeline
//!    ([`effect`], [`render`], [`app`])
//!
//! Face detection and the real shading/post-processing pipeline are
//! external capabilities consumed through the [`source::LandmarkSource`]
//! and [`render::RenderPipeline`] traits; the crate ships a headless
//! software pipeline and a synthetic source so the full loop runs without
//! a camera or GPU.
//!
//! # Examples
//!
//! ```
//! use laser_eyes::{
//!     app::LaserEyeApp,
//!     config::Config,
//!     projection::CameraProjection,
//!     render::HeadlessPipeline,
//!     source::{LandmarkSource, SyntheticSource},
//! };
//!
//! # fn main() -> laser_eyes::Result<()> {
//! let config = Config::default();
//! let projection = CameraProjection::new(
//!     config.camera.fov_y_degrees,
//!     config.camera.aspect,
//!     config.camera.reference_depth,
//! );
//! let pipeline = HeadlessPipeline::new(config.camera.width, config.camera.height, projection);
//! let mut app = LaserEyeApp::new(&config, pipeline)?;
//!
//! let mut source = SyntheticSource::new(config.tracking.clone());
//! source.start()?;
//!
//! for _ in 0..30 {
//!     let observations = source.poll()?;
//!     app.on_detection(&observations);
//!     app.render_frame()?;
//! }
//! # Ok(())
//! # }
//! ```

/// Landmark data model for detected faces
pub mod landmarks;

/// Landmark source interface and synthetic test source
pub mod source;

/// Landmark-to-world coordinate mapping
pub mod projection;

/// Head orientation estimation from anchor landmarks
pub mod head_pose;

/// Effect mode flags and eye marker state
pub mod effect;

/// Render pipeline interface and headless implementation
pub mod render;

/// Marker position smoothing filters
pub mod filters;

/// Per-frame orchestration and UI bridge
pub mod app;

/// Configuration management
pub mod config;

/// Constants used throughout the application
pub mod constants;

/// Error types and result handling
pub mod error;

pub use error::{Error, Result};
