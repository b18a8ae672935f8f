//! Render pipeline interface and the headless software implementation.
//!
//! The real scene graph, bloom and flare passes live in an external
//! renderer consumed through [`RenderPipeline`]. [`HeadlessPipeline`] is a
//! software stand-in that rasterizes the markers directly, backing the
//! frame-capture action, the demo binary and the tests.

use crate::projection::CameraProjection;
use crate::Result;
use image::{Rgba, RgbaImage};
use nalgebra::Point3;

/// Identifies one of the two eye markers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerId {
    LeftEye,
    RightEye,
}

/// Interface to the scene that draws the laser effect.
///
/// Implementations draw whatever marker state was most recently written;
/// per-frame updates and draws interleave on one thread, so no
/// synchronization is required beyond plain field writes.
pub trait RenderPipeline {
    /// Move a marker to a world-space position
    fn set_marker_transform(&mut self, id: MarkerId, position: Point3<f64>);

    /// Show or hide a marker
    fn set_marker_visible(&mut self, id: MarkerId, visible: bool);

    /// Show the debug overlay; hiding it clears the overlay immediately
    fn set_debug_visible(&mut self, visible: bool);

    /// Draw one frame from the current state
    fn render(&mut self) -> Result<()>;

    /// Recompute projection parameters for a new viewport size
    fn resize(&mut self, width: u32, height: u32);

    /// Read back the most recently rendered frame
    fn read_pixels(&self) -> Result<RgbaImage>;
}

#[derive(Debug, Clone, Copy)]
struct MarkerState {
    position: Point3<f64>,
    visible: bool,
}

/// Software pipeline that renders markers as radial glows.
///
/// Marker world positions are projected back to pixel space through the
/// same camera projection used for mapping, so a landmark at normalized
/// (x, y) lands at pixel (x * width, y * height).
pub struct HeadlessPipeline {
    width: u32,
    height: u32,
    projection: CameraProjection,
    left: MarkerState,
    right: MarkerState,
    debug_visible: bool,
    frame: RgbaImage,
}

/// Laser glow color (red, full intensity at the core)
const GLOW_COLOR: [u8; 3] = [255, 40, 24];

/// Debug crosshair color
const DEBUG_COLOR: Rgba<u8> = Rgba([0, 255, 0, 255]);

impl HeadlessPipeline {
    #[must_use]
    pub fn new(width: u32, height: u32, projection: CameraProjection) -> Self {
        let off = MarkerState {
            position: Point3::origin(),
            visible: false,
        };
        Self {
            width,
            height,
            projection,
            left: off,
            right: off,
            debug_visible: false,
            frame: RgbaImage::new(width, height),
        }
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    fn marker_mut(&mut self, id: MarkerId) -> &mut MarkerState {
        match id {
            MarkerId::LeftEye => &mut self.left,
            MarkerId::RightEye => &mut self.right,
        }
    }

    /// Pixel coordinates of a marker, possibly outside the frame
    fn to_pixel(&self, position: &Point3<f64>) -> (i64, i64) {
        let (nx, ny) = self.projection.to_normalized(position);
        (
            (nx * f64::from(self.width)).round() as i64,
            (ny * f64::from(self.height)).round() as i64,
        )
    }

    fn draw_glow(frame: &mut RgbaImage, cx: i64, cy: i64, radius: i64) {
        let (w, h) = (i64::from(frame.width()), i64::from(frame.height()));
        for y in (cy - radius).max(0)..=(cy + radius).min(h - 1) {
            for x in (cx - radius).max(0)..=(cx + radius).min(w - 1) {
                let dx = x - cx;
                let dy = y - cy;
                let dist_sq = dx * dx + dy * dy;
                if dist_sq > radius * radius {
                    continue;
                }
                let falloff = 1.0 - (dist_sq as f64).sqrt() / radius as f64;
                let px = frame.get_pixel_mut(x as u32, y as u32);
                for (c, &base) in GLOW_COLOR.iter().enumerate() {
                    let add = (f64::from(base) * falloff) as u16;
                    px.0[c] = (u16::from(px.0[c]) + add).min(255) as u8;
                }
                px.0[3] = 255;
            }
        }
    }

    fn draw_crosshair(frame: &mut RgbaImage, cx: i64, cy: i64, arm: i64) {
        let (w, h) = (i64::from(frame.width()), i64::from(frame.height()));
        for d in -arm..=arm {
            if (0..w).contains(&(cx + d)) && (0..h).contains(&cy) {
                frame.put_pixel((cx + d) as u32, cy as u32, DEBUG_COLOR);
            }
            if (0..w).contains(&cx) && (0..h).contains(&(cy + d)) {
                frame.put_pixel(cx as u32, (cy + d) as u32, DEBUG_COLOR);
            }
        }
    }
}

impl RenderPipeline for HeadlessPipeline {
    fn set_marker_transform(&mut self, id: MarkerId, position: Point3<f64>) {
        self.marker_mut(id).position = position;
    }

    fn set_marker_visible(&mut self, id: MarkerId, visible: bool) {
        self.marker_mut(id).visible = visible;
    }

    fn set_debug_visible(&mut self, visible: bool) {
        self.debug_visible = visible;
    }

    fn render(&mut self) -> Result<()> {
        let mut frame = RgbaImage::from_pixel(self.width, self.height, Rgba([0, 0, 0, 255]));
        let radius = i64::from(self.width / 40).max(2);

        for marker in [self.left, self.right] {
            if !marker.visible {
                continue;
            }
            let (cx, cy) = self.to_pixel(&marker.position);
            Self::draw_glow(&mut frame, cx, cy, radius);
            if self.debug_visible {
                Self::draw_crosshair(&mut frame, cx, cy, radius * 2);
            }
        }

        self.frame = frame;
        Ok(())
    }

    fn resize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
        self.projection.resize(width, height);
        self.frame = RgbaImage::new(width, height);
    }

    fn read_pixels(&self) -> Result<RgbaImage> {
        Ok(self.frame.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{DEFAULT_FOV_Y_DEGREES, DEFAULT_REFERENCE_DEPTH};
    use crate::landmarks::Landmark;

    fn pipeline(width: u32, height: u32) -> HeadlessPipeline {
        let projection = CameraProjection::new(
            DEFAULT_FOV_Y_DEGREES,
            f64::from(width) / f64::from(height),
            DEFAULT_REFERENCE_DEPTH,
        );
        HeadlessPipeline::new(width, height, projection)
    }

    #[test]
    fn test_hidden_markers_render_black() {
        let mut p = pipeline(64, 64);
        p.render().unwrap();
        let frame = p.read_pixels().unwrap();
        assert!(frame.pixels().all(|px| px.0[0] == 0 && px.0[1] == 0));
    }

    #[test]
    fn test_visible_marker_lights_pixels() {
        let mut p = pipeline(64, 64);
        // Frame center maps to the world origin
        p.set_marker_transform(MarkerId::LeftEye, Point3::origin());
        p.set_marker_visible(MarkerId::LeftEye, true);
        p.render().unwrap();

        let frame = p.read_pixels().unwrap();
        let center = frame.get_pixel(32, 32);
        assert!(center.0[0] > 200);
    }

    #[test]
    fn test_marker_lands_at_projected_landmark() {
        let mut p = pipeline(100, 100);
        let projection = CameraProjection::new(DEFAULT_FOV_Y_DEGREES, 1.0, DEFAULT_REFERENCE_DEPTH);
        let world = projection.to_world(&Landmark::new(0.25, 0.75, 0.0));
        p.set_marker_transform(MarkerId::RightEye, world);
        p.set_marker_visible(MarkerId::RightEye, true);
        p.render().unwrap();

        let frame = p.read_pixels().unwrap();
        assert!(frame.get_pixel(25, 75).0[0] > 200);
        assert_eq!(frame.get_pixel(75, 25).0[0], 0);
    }

    #[test]
    fn test_out_of_frame_marker_does_not_panic() {
        let mut p = pipeline(32, 32);
        p.set_marker_transform(MarkerId::LeftEye, Point3::new(1000.0, -1000.0, 0.0));
        p.set_marker_visible(MarkerId::LeftEye, true);
        p.render().unwrap();
    }

    #[test]
    fn test_debug_overlay_draws_crosshair() {
        let mut p = pipeline(64, 64);
        p.set_marker_transform(MarkerId::LeftEye, Point3::origin());
        p.set_marker_visible(MarkerId::LeftEye, true);
        p.set_debug_visible(true);
        p.render().unwrap();
        let with_overlay = p.read_pixels().unwrap();

        p.set_debug_visible(false);
        p.render().unwrap();
        let without_overlay = p.read_pixels().unwrap();

        // Crosshair arm extends beyond the glow radius
        let arm_px = with_overlay.get_pixel(32 + 3, 32);
        assert_eq!(arm_px.0[1], 255);
        assert_ne!(with_overlay, without_overlay);
    }

    #[test]
    fn test_resize_clears_frame() {
        let mut p = pipeline(64, 64);
        p.set_marker_transform(MarkerId::LeftEye, Point3::origin());
        p.set_marker_visible(MarkerId::LeftEye, true);
        p.render().unwrap();

        p.resize(128, 96);
        let frame = p.read_pixels().unwrap();
        assert_eq!(frame.dimensions(), (128, 96));
        assert!(frame.pixels().all(|px| px.0[0] == 0));
    }
}
