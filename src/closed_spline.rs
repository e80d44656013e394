//! A closed curve through every point of a ring.

use kurbo::{BezPath, Point};

use crate::canvas::{Canvas, Color};
use crate::centripetal::{CentripetalSpan, SplineParams};
use crate::ring::ControlPointRing;
use crate::stroke::StrokeSegment;

/// The solved spans of a closed centripetal spline.
///
/// Span `i` runs from ring point `i + 1` to ring point `i + 2` (mod the ring
/// length), so the spans together pass through every point exactly once.
#[derive(Clone, Debug)]
pub struct ClosedSpline {
    spans: Vec<CentripetalSpan>,
}

impl ClosedSpline {
    pub fn new(ring: &ControlPointRing, params: &SplineParams) -> ClosedSpline {
        let spans = ring
            .spans()
            .map(|w| CentripetalSpan::from_window(w, params))
            .collect();
        ClosedSpline { spans }
    }

    pub fn spans(&self) -> &[CentripetalSpan] {
        &self.spans
    }

    /// Points along the curve, `subdivisions` per span.
    ///
    /// The result has `spans * subdivisions + 1` points; the last one closes
    /// the loop back onto the first.
    pub fn sample(&self, subdivisions: usize) -> Vec<Point> {
        let mut pts = Vec::with_capacity(self.spans.len() * subdivisions + 1);
        if let Some(first) = self.spans.first() {
            pts.push(first.start());
        }
        let n = subdivisions as f64;
        for span in &self.spans {
            pts.extend((1..=subdivisions).map(|j| span.eval(j as f64 / n)));
        }
        pts
    }

    /// The flattened curve as strokes of the given width.
    ///
    /// Spans pass exactly through their end points, so consecutive strokes
    /// share end points and the last one ends where the first begins.
    pub fn strokes(&self, width: f64, subdivisions: usize) -> Vec<StrokeSegment> {
        let n = subdivisions as f64;
        let mut segs = Vec::with_capacity(self.spans.len() * subdivisions);
        for span in &self.spans {
            let mut start = span.start();
            for j in 1..=subdivisions {
                let end = span.eval(j as f64 / n);
                segs.push(StrokeSegment::new(start, end, width));
                start = end;
            }
        }
        segs
    }

    /// Render the curve exactly, as one closed path of cubic Béziers.
    pub fn render(&self) -> BezPath {
        let mut path = BezPath::new();
        self.render_extend(&mut path);
        path
    }

    /// Render the curve, appending to the given path.
    pub fn render_extend(&self, path: &mut BezPath) {
        let first = match self.spans.first() {
            Some(span) => span,
            None => return,
        };
        path.move_to(first.start());
        for span in &self.spans {
            let c = span.to_cubic();
            path.curve_to(c.p1, c.p2, c.p3);
        }
        path.close_path();
    }
}

/// Tessellate the closed spline through `ring` onto a canvas.
///
/// Returns the number of strokes skipped for having no length.
pub fn emit_closed_spline(
    ring: &ControlPointRing,
    color: Color,
    stroke_width: f64,
    segments_per_span: usize,
    params: &SplineParams,
    canvas: &mut impl Canvas,
) -> usize {
    let spline = ClosedSpline::new(ring, params);
    let mut skipped = 0;
    for seg in spline.strokes(stroke_width, segments_per_span) {
        match seg.triangles() {
            Some([t0, t1]) => {
                canvas.fill_triangle(t0, color);
                canvas.fill_triangle(t1, color);
            }
            None => skipped += 1,
        }
    }
    skipped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::DrawCommand;
    use crate::ring::generate_ring;
    use kurbo::{ParamCurve, PathEl};

    fn reference_spline(time: f64) -> (ControlPointRing, ClosedSpline) {
        let ring = generate_ring(10, time, Point::new(200.0, 150.0), 100.0);
        let spline = ClosedSpline::new(&ring, &SplineParams::default());
        (ring, spline)
    }

    #[test]
    fn strokes_form_a_closed_chain() {
        for &time in &[0.0, 0.7, 13.25, 1000.0] {
            let (_, spline) = reference_spline(time);
            let segs = spline.strokes(2.5, 20);
            assert_eq!(segs.len(), 200);
            for pair in segs.windows(2) {
                assert_eq!(pair[0].p1, pair[1].p0);
            }
            let first = segs.first().unwrap();
            let last = segs.last().unwrap();
            assert_eq!(last.p1, first.p0);
            assert!(segs.iter().all(|s| s.width == 2.5));
        }
    }

    #[test]
    fn curve_passes_through_ring_points() {
        let (ring, spline) = reference_spline(2.0);
        let n = ring.point_count();
        for (i, span) in spline.spans().iter().enumerate() {
            assert_eq!(span.start(), ring.points()[(i + 1) % n]);
            assert_eq!(span.eval(1.0), ring.points()[(i + 2) % n]);
        }
    }

    #[test]
    fn sample_count_and_closure() {
        let (_, spline) = reference_spline(4.0);
        let pts = spline.sample(20);
        assert_eq!(pts.len(), 201);
        assert_eq!(pts[0], pts[200]);
    }

    #[test]
    fn render_is_closed_cubic_path() {
        let (_, spline) = reference_spline(0.3);
        let path = spline.render();
        let els = path.elements();
        assert_eq!(els.len(), 12);
        assert!(matches!(els[0], PathEl::MoveTo(_)));
        assert!(els[1..11].iter().all(|el| matches!(el, PathEl::CurveTo(..))));
        assert!(matches!(els[11], PathEl::ClosePath));
        for (seg, span) in path.segments().zip(spline.spans()) {
            for k in 0..=8 {
                let t = k as f64 / 8.0;
                assert!(seg.eval(t).distance(span.eval(t)) < 1e-9);
            }
        }
    }

    #[test]
    fn emits_two_triangles_per_stroke() {
        let (ring, _) = reference_spline(1.0);
        let mut canvas: Vec<DrawCommand> = Vec::new();
        let skipped = emit_closed_spline(
            &ring,
            Color::RED,
            2.5,
            20,
            &SplineParams::default(),
            &mut canvas,
        );
        assert_eq!(skipped, 0);
        assert_eq!(canvas.len(), 400);
        assert!(canvas
            .iter()
            .all(|cmd| matches!(cmd, DrawCommand::Triangle(_, Color::RED))));
    }

    #[test]
    fn coincident_ring_skips_everything() {
        let p = Point::new(1.0, 1.0);
        let ring = ControlPointRing::from_loop(vec![p; 4]).unwrap();
        let mut canvas: Vec<DrawCommand> = Vec::new();
        let skipped = emit_closed_spline(&ring, Color::RED, 1.0, 5, &SplineParams::default(), &mut canvas);
        assert_eq!(skipped, 20);
        assert!(canvas.is_empty());
    }
}
