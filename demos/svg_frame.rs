//! Render a single frame of the animation as SVG.
//!
//! Usage: `svg_frame [time] [width] [height]`. Pipe the output to a file
//! and open it in a browser; step the time to see the ring morph.

mod svg;

use kurbo::Size;

use wobble::{AnimatorConfig, SplineAnimator};

use svg::SvgCanvas;

fn arg(ix: usize, default: f64) -> f64 {
    std::env::args()
        .nth(ix)
        .map(|s| s.parse().expect("arguments must be numbers"))
        .unwrap_or(default)
}

fn main() {
    let time = arg(1, 0.0);
    let size = Size::new(arg(2, 500.0), arg(3, 500.0));
    let animator = SplineAnimator::new(AnimatorConfig::default()).expect("default config");
    let mut canvas = SvgCanvas::default();
    let stats = animator.render_frame(time, size, &mut canvas);
    eprintln!(
        "t = {}: {} triangles, {} circles",
        time, stats.triangles, stats.circles
    );
    println!("{}", canvas.into_document(size.width, size.height));
}
