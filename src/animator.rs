//! Per-frame rendering of the morphing spline.

use kurbo::{Circle, Point, Rect, Size};

use crate::canvas::{Canvas, Color};
use crate::closed_spline::emit_closed_spline;
use crate::config::AnimatorConfig;
use crate::error::Result;
use crate::ring::ControlPointRing;
use crate::stroke::thick_line;

/// Renders frames of the animation from a validated configuration.
///
/// The animator holds no per-frame state. Each call to
/// [`render_frame`](SplineAnimator::render_frame) recomputes the ring and
/// the curve from the time it is given; the host decides when to call it.
#[derive(Clone, Debug)]
pub struct SplineAnimator {
    config: AnimatorConfig,
}

/// What a frame sent to the canvas.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameStats {
    pub triangles: usize,
    pub circles: usize,
    /// Zero-length guide or curve segments that produced no geometry.
    pub skipped: usize,
}

impl SplineAnimator {
    pub fn new(config: AnimatorConfig) -> Result<SplineAnimator> {
        config.validate()?;
        log::debug!(
            "spline animator: {} points, {} subdivisions per span",
            config.point_count,
            config.segments_per_span
        );
        Ok(SplineAnimator { config })
    }

    pub fn config(&self) -> &AnimatorConfig {
        &self.config
    }

    /// The control points for a frame at `time` in a drawing area of `size`.
    pub fn ring(&self, time: f64, size: Size) -> ControlPointRing {
        let center = Point::new(0.5 * size.width, 0.5 * size.height);
        let scale = size.width.min(size.height) / self.config.scale_divisor;
        ControlPointRing::deformed_circle(
            self.config.point_count,
            time,
            center,
            scale,
            &self.config.deformation,
        )
    }

    /// Draw one frame: background, point markers, guide lines, then the curve.
    pub fn render_frame(&self, time: f64, size: Size, canvas: &mut impl Canvas) -> FrameStats {
        let config = &self.config;
        let mut stats = FrameStats::default();
        if let Some(color) = config.background {
            canvas.fill_rect(Rect::from_origin_size(Point::ORIGIN, size), color);
        }
        if !has_area(size) {
            return stats;
        }

        let ring = self.ring(time, size);
        for &p in ring.points() {
            canvas.fill_circle(Circle::new(p, config.marker_radius), config.marker_color);
            stats.circles += 1;
        }
        for (p0, p1) in ring.edges() {
            stats.add_line(canvas, p0, p1, config.guide_width, config.guide_color);
        }

        let skipped = emit_closed_spline(
            &ring,
            config.spline_color,
            config.stroke_width,
            config.segments_per_span,
            &config.spline,
            canvas,
        );
        let curve_segments = config.point_count * config.segments_per_span;
        stats.triangles += 2 * (curve_segments - skipped);
        stats.skipped += skipped;

        log::trace!(
            "frame t={:.3}: {} triangles, {} circles, {} skipped",
            time,
            stats.triangles,
            stats.circles,
            stats.skipped
        );
        stats
    }
}

/// A finite drawing area with positive width and height.
fn has_area(size: Size) -> bool {
    size.width.is_finite() && size.height.is_finite() && size.width > 0.0 && size.height > 0.0
}

impl FrameStats {
    fn add_line(&mut self, canvas: &mut impl Canvas, p0: Point, p1: Point, width: f64, color: Color) {
        match thick_line(p0, p1, width) {
            Some([t0, t1]) => {
                canvas.fill_triangle(t0, color);
                canvas.fill_triangle(t1, color);
                self.triangles += 2;
            }
            None => self.skipped += 1,
        }
    }
}
