//! Render a strip of frames from a JSON animator configuration.
//!
//! Usage: `json <config.json> [frames] [dt]`. Fields missing from the file
//! keep their default values.

mod svg;

use kurbo::Size;

use wobble::{AnimatorConfig, SplineAnimator};

use svg::SvgCanvas;

const FRAME: f64 = 240.0;

fn main() {
    let mut args = std::env::args().skip(1);
    let path = args.next().expect("needs filename");
    let frames: usize = args.next().map_or(6, |s| s.parse().expect("frame count"));
    let dt: f64 = args.next().map_or(0.5, |s| s.parse().expect("time step"));

    let data = std::fs::read_to_string(path).unwrap();
    let config: AnimatorConfig = serde_json::from_str(&data).unwrap();
    let animator = match SplineAnimator::new(config) {
        Ok(animator) => animator,
        Err(e) => {
            eprintln!("invalid config: {}", e);
            std::process::exit(1);
        }
    };

    let mut strip = SvgCanvas::default();
    for i in 0..frames {
        let time = i as f64 * dt;
        let mut frame = SvgCanvas::default();
        let stats = animator.render_frame(time, Size::new(FRAME, FRAME), &mut frame);
        eprintln!("frame {}: {} triangles", i, stats.triangles);
        strip.group(i as f64 * FRAME, 0.0, frame);
    }
    println!("{}", strip.into_document(frames as f64 * FRAME, FRAME));
}
