//! A morphing closed spline for immediate-mode canvases.
//!
//! A ring of control points is sampled from a circle whose radius wobbles
//! over time. A closed [centripetal Catmull-Rom] spline is fitted through
//! the ring, flattened into short strokes, and each stroke is tessellated
//! into two filled triangles. Everything is recomputed from the frame time
//! on every call, so the host only needs a clock, a drawing size and
//! something that can fill triangles and circles.
//!
//! ```
//! use kurbo::Size;
//! use wobble::{AnimatorConfig, DrawCommand, SplineAnimator};
//!
//! let animator = SplineAnimator::new(AnimatorConfig::default()).unwrap();
//! let mut commands: Vec<DrawCommand> = Vec::new();
//! let stats = animator.render_frame(0.5, Size::new(800.0, 600.0), &mut commands);
//! assert_eq!(stats.circles, 10);
//! ```
//!
//! [centripetal Catmull-Rom]: https://en.wikipedia.org/wiki/Centripetal_Catmull%E2%80%93Rom_spline

mod animator;
mod canvas;
mod centripetal;
mod closed_spline;
mod config;
mod error;
mod ring;
mod stroke;
mod util;

pub use animator::{FrameStats, SplineAnimator};
pub use canvas::{Canvas, Color, DrawCommand};
pub use centripetal::{interpolate, CentripetalSpan, SplineParams};
pub use closed_spline::{emit_closed_spline, ClosedSpline};
pub use config::AnimatorConfig;
pub use error::{Error, Result};
pub use ring::{generate_ring, ControlPointRing, Deformation, MIN_POINTS, NEIGHBORS};
pub use stroke::{thick_line, StrokeSegment, Triangle};
