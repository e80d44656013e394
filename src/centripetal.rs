//! Catmull-Rom spans with centripetal parameterization.
//!
//! A span interpolates between its two middle control points, using the
//! outer two only to estimate tangents. Weighting the chords by the square
//! root of their length (alpha = 0.5) keeps the curve from forming cusps or
//! self-intersections when the control points are unevenly spaced, which
//! the uniform variant (alpha = 0) does not guarantee.

use kurbo::{CubicBez, Point, Vec2};
#[cfg(feature = "serde")]
use serde_::{Deserialize, Serialize};

use crate::util;

/// Shape parameters shared by every span of a spline.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_", default)
)]
pub struct SplineParams {
    /// Chord-length exponent: 0 is uniform, 0.5 centripetal, 1 chordal.
    pub alpha: f64,
    /// Scales both tangents by `1 - tension`; 1 gives straight segments.
    pub tension: f64,
}

/// One cubic span in Hermite form: end points and the tangents there.
///
/// The Hermite weights are exactly 1 or 0 at `t = 0` and `t = 1`, so the
/// span returns its end points bit-exactly.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CentripetalSpan {
    p1: Point,
    p2: Point,
    m1: Vec2,
    m2: Vec2,
}

impl Default for SplineParams {
    fn default() -> Self {
        SplineParams {
            alpha: 0.5,
            tension: 0.0,
        }
    }
}

impl CentripetalSpan {
    /// The span from `p1` to `p2`, with `p0` and `p3` as neighbors.
    pub fn new(p0: Point, p1: Point, p2: Point, p3: Point, params: &SplineParams) -> Self {
        let t01 = util::chord_weight(p0.distance(p1), params.alpha);
        let t12 = util::chord_weight(p1.distance(p2), params.alpha);
        let t23 = util::chord_weight(p2.distance(p3), params.alpha);

        let scale = 1.0 - params.tension;
        let m1 = ((p2 - p1) + (p1 - p0) * (t12 / t01) - (p2 - p0) * (t12 / (t01 + t12))) * scale;
        let m2 = ((p2 - p1) + (p3 - p2) * (t12 / t23) - (p3 - p1) * (t12 / (t12 + t23))) * scale;

        CentripetalSpan { p1, p2, m1, m2 }
    }

    /// Build a span from a four-point window, as yielded by
    /// [`ControlPointRing::spans`](crate::ControlPointRing::spans).
    pub fn from_window(window: [Point; 4], params: &SplineParams) -> Self {
        let [p0, p1, p2, p3] = window;
        Self::new(p0, p1, p2, p3, params)
    }

    /// Evaluate the curve at `t` in `0..=1`.
    ///
    /// This is `a t³ + b t² + c t + d` with `a = 2(p1 - p2) + m1 + m2`,
    /// `b = -3(p1 - p2) - 2 m1 - m2`, `c = m1` and `d = p1`, regrouped by
    /// the control values.
    pub fn eval(&self, t: f64) -> Point {
        let t2 = t * t;
        let t3 = t2 * t;
        let h00 = 2.0 * t3 - 3.0 * t2 + 1.0;
        let h10 = t3 - 2.0 * t2 + t;
        let h01 = -2.0 * t3 + 3.0 * t2;
        let h11 = t3 - t2;
        (self.p1.to_vec2() * h00 + self.m1 * h10 + self.p2.to_vec2() * h01 + self.m2 * h11)
            .to_point()
    }

    /// The derivative with respect to `t`.
    pub fn deriv(&self, t: f64) -> Vec2 {
        let t2 = t * t;
        (self.p2 - self.p1) * (6.0 * (t - t2))
            + self.m1 * (3.0 * t2 - 4.0 * t + 1.0)
            + self.m2 * (3.0 * t2 - 2.0 * t)
    }

    pub fn start(&self) -> Point {
        self.p1
    }

    pub fn end(&self) -> Point {
        self.p2
    }

    /// The same curve as a cubic Bézier.
    pub fn to_cubic(&self) -> CubicBez {
        CubicBez::new(
            self.p1,
            self.p1 + self.m1 * (1.0 / 3.0),
            self.p2 - self.m2 * (1.0 / 3.0),
            self.p2,
        )
    }
}

/// Evaluate the centripetal span from `p1` to `p2` at `t`, with zero tension.
pub fn interpolate(p0: Point, p1: Point, p2: Point, p3: Point, t: f64) -> Point {
    CentripetalSpan::new(p0, p1, p2, p3, &SplineParams::default()).eval(t)
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::ParamCurve;
    use rand::distributions::{Distribution, Uniform};

    fn random_points(n: usize) -> Vec<Point> {
        let mut rng = rand::thread_rng();
        let coord = Uniform::from(-500.0..500.0);
        (0..n)
            .map(|_| Point::new(coord.sample(&mut rng), coord.sample(&mut rng)))
            .collect()
    }

    #[test]
    fn passes_through_inner_points() {
        for _ in 0..1000 {
            let p = random_points(4);
            assert_eq!(interpolate(p[0], p[1], p[2], p[3], 0.0), p[1]);
            assert_eq!(interpolate(p[0], p[1], p[2], p[3], 1.0), p[2]);
        }
    }

    #[test]
    fn coincident_points_stay_finite() {
        let p = Point::new(2.0, 3.0);
        let q = Point::new(5.0, -1.0);
        for &t in &[0.0, 0.25, 0.5, 1.0] {
            let r = interpolate(p, p, q, q, t);
            assert!(r.x.is_finite() && r.y.is_finite());
            let r = interpolate(p, p, p, p, t);
            assert_eq!(r, p);
        }
    }

    #[test]
    fn collinear_even_points_give_a_line() {
        let pts: Vec<_> = (0..4).map(|i| Point::new(i as f64 * 10.0, 0.0)).collect();
        for k in 0..=10 {
            let t = k as f64 / 10.0;
            let r = interpolate(pts[0], pts[1], pts[2], pts[3], t);
            assert!(r.y.abs() < 1e-12);
            assert!((r.x - (10.0 + 10.0 * t)).abs() < 1e-9);
        }
    }

    #[test]
    fn full_tension_is_straight() {
        let p = random_points(4);
        let params = SplineParams {
            tension: 1.0,
            ..SplineParams::default()
        };
        let span = CentripetalSpan::new(p[0], p[1], p[2], p[3], &params);
        let mid = span.eval(0.5);
        assert!(mid.distance(p[1].lerp(p[2], 0.5)) < 1e-9);
    }

    #[test]
    fn tangents_match_neighbors() {
        // Two spans sharing a joint must agree on the tangent there.
        let p = random_points(5);
        let params = SplineParams::default();
        let s0 = CentripetalSpan::new(p[0], p[1], p[2], p[3], &params);
        let s1 = CentripetalSpan::new(p[1], p[2], p[3], p[4], &params);
        assert_eq!(s0.end(), s1.start());
        let d0 = s0.deriv(1.0);
        let d1 = s1.deriv(0.0);
        // Each span is parameterized over 0..1, so only the direction is shared.
        assert!(d0.cross(d1).abs() < 1e-6 * d0.hypot() * d1.hypot());
        assert!(d0.dot(d1) > 0.0);
    }

    #[test]
    fn cubic_matches_hermite_form() {
        let p = random_points(4);
        let span = CentripetalSpan::new(p[0], p[1], p[2], p[3], &SplineParams::default());
        let cubic = span.to_cubic();
        for k in 0..=16 {
            let t = k as f64 / 16.0;
            assert!(cubic.eval(t).distance(span.eval(t)) < 1e-6);
        }
    }

    #[test]
    fn hermite_form_matches_power_basis() {
        let p = random_points(4);
        let span = CentripetalSpan::new(p[0], p[1], p[2], p[3], &SplineParams::default());
        let (p1, m1, m2) = (span.p1, span.m1, span.m2);
        let chord = p1 - span.p2;
        let a = chord * 2.0 + m1 + m2;
        let b = chord * -3.0 - m1 * 2.0 - m2;
        for k in 0..=16 {
            let t = k as f64 / 16.0;
            let expected = p1 + ((a * t + b) * t + m1) * t;
            assert!(span.eval(t).distance(expected) < 1e-6);
            let slope = (a * (3.0 * t) + b * 2.0) * t + m1;
            assert!((span.deriv(t) - slope).hypot() < 1e-6);
        }
    }
}
