//! A canvas that writes SVG elements.

use kurbo::{Circle, Rect};

use wobble::{Canvas, Color, Triangle};

#[derive(Default)]
pub struct SvgCanvas {
    body: String,
}

impl SvgCanvas {
    pub fn into_document(self, width: f64, height: f64) -> String {
        format!(
            "<!DOCTYPE html>\n<html>\n  <body>\n    <svg width=\"{}\" height=\"{}\">\n{}    </svg>\n  </body>\n</html>",
            width, height, self.body
        )
    }

    #[allow(dead_code)]
    pub fn group(&mut self, dx: f64, dy: f64, content: SvgCanvas) {
        self.body += &format!("<g transform=\"translate({} {})\">\n{}</g>\n", dx, dy, content.body);
    }
}

fn fill(color: Color) -> String {
    format!(
        "fill=\"#{:02x}{:02x}{:02x}\" fill-opacity=\"{:.3}\"",
        color.red(),
        color.green(),
        color.blue(),
        f64::from(color.alpha()) / 255.0
    )
}

impl Canvas for SvgCanvas {
    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.body += &format!(
            "      <rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" {} />\n",
            rect.x0,
            rect.y0,
            rect.width(),
            rect.height(),
            fill(color)
        );
    }

    fn fill_triangle(&mut self, triangle: Triangle, color: Color) {
        let [a, b, c] = triangle.0;
        self.body += &format!(
            "      <polygon points=\"{:.2},{:.2} {:.2},{:.2} {:.2},{:.2}\" {} />\n",
            a.x,
            a.y,
            b.x,
            b.y,
            c.x,
            c.y,
            fill(color)
        );
    }

    fn fill_circle(&mut self, circle: Circle, color: Color) {
        self.body += &format!(
            "      <circle cx=\"{:.2}\" cy=\"{:.2}\" r=\"{}\" {} />\n",
            circle.center.x,
            circle.center.y,
            circle.radius,
            fill(color)
        );
    }
}
