//! The deformed ring of control points.

use std::f64::consts::TAU;

use kurbo::{Point, Vec2};
#[cfg(feature = "serde")]
use serde_::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Number of neighbors a span needs past its first point.
///
/// Span `i` reads ring entries `i..=i + NEIGHBORS`, so the ring carries this
/// many copies of its leading points. Changing the interpolation stencil
/// means changing this constant, and nothing else.
pub const NEIGHBORS: usize = 3;

/// The smallest logical point count that gives a closed spline.
pub const MIN_POINTS: usize = NEIGHBORS + 1;

/// Coefficients of the radial deformation.
///
/// The radius factor at angle `a` and time `t` is
///
/// r(a, t) = base + pulse * sin(pulse_rate * t) + ripple * sin(lobes * a + ripple_rate * t)
///
/// The pulse breathes the whole ring in and out, the ripple runs a
/// `lobes`-fold wave around it.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_", default)
)]
pub struct Deformation {
    pub base: f64,
    pub pulse: f64,
    pub pulse_rate: f64,
    pub ripple: f64,
    pub lobes: f64,
    pub ripple_rate: f64,
}

/// A closed loop of control points, padded for neighbor access.
///
/// The first `point_count()` entries are the logical points of the loop.
/// They are followed by copies of the first [`NEIGHBORS`] points, so every span
/// of the closed curve can read its four control points as a contiguous
/// window without modular indexing.
#[derive(Clone, Debug, PartialEq)]
pub struct ControlPointRing {
    pts: Vec<Point>,
}

impl Default for Deformation {
    fn default() -> Self {
        Deformation {
            base: 0.6,
            pulse: 0.1,
            pulse_rate: 0.5,
            ripple: 0.3,
            lobes: 3.0,
            ripple_rate: 1.0,
        }
    }
}

impl Deformation {
    /// The radius factor at angle `a` (radians) and time `t`.
    pub fn radius(&self, a: f64, t: f64) -> f64 {
        self.base
            + self.pulse * (self.pulse_rate * t).sin()
            + self.ripple * (self.lobes * a + self.ripple_rate * t).sin()
    }

    /// Lower and upper bounds of [`radius`](Deformation::radius) over all
    /// angles and times.
    ///
    /// These bound the signed factor. They bound the distance of ring points
    /// from the center only while the lower bound is non-negative, which
    /// [`AnimatorConfig::validate`](crate::AnimatorConfig::validate) enforces.
    pub fn radius_bounds(&self) -> (f64, f64) {
        let swing = self.pulse.abs() + self.ripple.abs();
        (self.base - swing, self.base + swing)
    }
}

impl ControlPointRing {
    /// Sample the deformed circle at `count` evenly spaced angles.
    ///
    /// `count` must be at least [`MIN_POINTS`]; this is checked when an
    /// [`AnimatorConfig`](crate::AnimatorConfig) is validated, not here.
    pub fn deformed_circle(
        count: usize,
        time: f64,
        center: Point,
        scale: f64,
        deformation: &Deformation,
    ) -> ControlPointRing {
        debug_assert!(count >= MIN_POINTS, "ring needs {} points", MIN_POINTS);
        let mut pts = Vec::with_capacity(count + NEIGHBORS);
        for i in 0..count {
            let a = i as f64 / count as f64 * TAU;
            let r = deformation.radius(a, time);
            pts.push(center + Vec2::from_angle(a) * (scale * r));
        }
        Self::pad(pts)
    }

    /// Build a ring from an arbitrary closed loop.
    ///
    /// The loop is implicitly closed: the last point connects back to the
    /// first, which should not be repeated.
    pub fn from_loop(pts: Vec<Point>) -> Result<ControlPointRing> {
        if pts.len() < MIN_POINTS {
            return Err(Error::TooFewPoints {
                count: pts.len(),
                min: MIN_POINTS,
            });
        }
        Ok(Self::pad(pts))
    }

    fn pad(mut pts: Vec<Point>) -> ControlPointRing {
        for i in 0..NEIGHBORS {
            let p = pts[i];
            pts.push(p);
        }
        ControlPointRing { pts }
    }

    /// Number of logical points in the loop.
    pub fn point_count(&self) -> usize {
        self.pts.len() - NEIGHBORS
    }

    /// The logical points, without padding.
    pub fn points(&self) -> &[Point] {
        &self.pts[..self.point_count()]
    }

    /// All entries, including the wrap-around copies.
    pub fn padded(&self) -> &[Point] {
        &self.pts
    }

    /// The control points of each span of the closed curve.
    ///
    /// Yields exactly `point_count()` windows; window `i` describes the curve
    /// from point `i + 1` to point `i + 2`.
    pub fn spans(&self) -> impl Iterator<Item = [Point; 4]> + '_ {
        self.pts
            .windows(NEIGHBORS + 1)
            .map(|w| [w[0], w[1], w[2], w[3]])
    }

    /// The edges of the control polygon, closing back to the first point.
    pub fn edges(&self) -> impl Iterator<Item = (Point, Point)> + '_ {
        let n = self.point_count();
        (0..n).map(move |i| (self.pts[i], self.pts[(i + 1) % n]))
    }
}

/// Sample the reference deformation (see [`Deformation::default`]).
pub fn generate_ring(count: usize, time: f64, center: Point, scale: f64) -> ControlPointRing {
    ControlPointRing::deformed_circle(count, time, center, scale, &Deformation::default())
}
