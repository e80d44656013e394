//! Thick lines as pairs of triangles.

use kurbo::{Point, Vec2};

use crate::util::DEGENERATE_LENGTH;

/// A filled triangle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Triangle(pub [Point; 3]);

/// A straight stroke of uniform width.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StrokeSegment {
    pub p0: Point,
    pub p1: Point,
    pub width: f64,
}

impl Triangle {
    /// Signed area; positive when the vertices wind counterclockwise in a
    /// y-up frame.
    pub fn signed_area(&self) -> f64 {
        let [a, b, c] = self.0;
        0.5 * (b - a).cross(c - a)
    }
}

impl StrokeSegment {
    pub fn new(p0: Point, p1: Point, width: f64) -> StrokeSegment {
        StrokeSegment { p0, p1, width }
    }

    /// The two triangles covering this stroke, or `None` if it has no length.
    pub fn triangles(&self) -> Option<[Triangle; 2]> {
        thick_line(self.p0, self.p1, self.width)
    }
}

/// Cover the rectangle of the given thickness centered on `p1..p2`.
///
/// With the corners `v1 = p1 + n`, `v2 = p2 + n`, `v3 = p2 - n`,
/// `v4 = p1 - n` (where `n` is the half-thickness normal), the triangles are
/// `(v1, v2, v3)` and `(v1, v3, v4)`. Segments shorter than
/// [`DEGENERATE_LENGTH`] have no direction and produce nothing.
pub fn thick_line(p1: Point, p2: Point, thickness: f64) -> Option<[Triangle; 2]> {
    let delta = p2 - p1;
    let length = delta.hypot();
    if length < DEGENERATE_LENGTH {
        return None;
    }
    let perp = Vec2::new(-delta.y, delta.x) * (1.0 / length);
    let offset = perp * (0.5 * thickness);

    let v1 = p1 + offset;
    let v2 = p2 + offset;
    let v3 = p2 - offset;
    let v4 = p1 - offset;
    Some([Triangle([v1, v2, v3]), Triangle([v1, v3, v4])])
}
