//! The drawing surface the animator renders into.
//!
//! Hosts implement [`Canvas`] over whatever immediate-mode API their toolkit
//! provides. A `Vec<DrawCommand>` is a canvas too, recording the commands
//! for later replay.

use kurbo::{Circle, Rect};
#[cfg(feature = "serde")]
use serde_::{Deserialize, Serialize};

use crate::stroke::Triangle;

/// A solid color, packed as `0xAARRGGBB`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_")
)]
pub struct Color(pub u32);

/// A single primitive shape command.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DrawCommand {
    Rect(Rect, Color),
    Triangle(Triangle, Color),
    Circle(Circle, Color),
}

/// A sink for filled primitive shapes.
pub trait Canvas {
    fn fill_rect(&mut self, rect: Rect, color: Color);

    fn fill_triangle(&mut self, triangle: Triangle, color: Color);

    fn fill_circle(&mut self, circle: Circle, color: Color);
}

impl Color {
    pub const BLACK: Color = Color(0xff00_0000);
    pub const RED: Color = Color(0xffff_0000);
    pub const LIGHT_GRAY: Color = Color(0xfff0_f0f0);

    pub fn from_argb(a: u8, r: u8, g: u8, b: u8) -> Color {
        Color(u32::from(a) << 24 | u32::from(r) << 16 | u32::from(g) << 8 | u32::from(b))
    }

    pub fn alpha(self) -> u8 {
        (self.0 >> 24) as u8
    }

    pub fn red(self) -> u8 {
        (self.0 >> 16) as u8
    }

    pub fn green(self) -> u8 {
        (self.0 >> 8) as u8
    }

    pub fn blue(self) -> u8 {
        self.0 as u8
    }
}

impl DrawCommand {
    pub fn color(&self) -> Color {
        match self {
            DrawCommand::Rect(_, c) | DrawCommand::Triangle(_, c) | DrawCommand::Circle(_, c) => *c,
        }
    }

    /// Send this command to another canvas.
    pub fn replay(&self, canvas: &mut impl Canvas) {
        match *self {
            DrawCommand::Rect(r, c) => canvas.fill_rect(r, c),
            DrawCommand::Triangle(t, c) => canvas.fill_triangle(t, c),
            DrawCommand::Circle(k, c) => canvas.fill_circle(k, c),
        }
    }
}

impl Canvas for Vec<DrawCommand> {
    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.push(DrawCommand::Rect(rect, color));
    }

    fn fill_triangle(&mut self, triangle: Triangle, color: Color) {
        self.push(DrawCommand::Triangle(triangle, color));
    }

    fn fill_circle(&mut self, circle: Circle, color: Color) {
        self.push(DrawCommand::Circle(circle, color));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::Point;

    #[test]
    fn channels() {
        let c = Color::from_argb(0x80, 0x12, 0x34, 0x56);
        assert_eq!(c, Color(0x8012_3456));
        assert_eq!((c.alpha(), c.red(), c.green(), c.blue()), (0x80, 0x12, 0x34, 0x56));
        assert_eq!(Color::RED.red(), 0xff);
        assert_eq!(Color::RED.green(), 0);
    }

    #[test]
    fn replay_preserves_commands() {
        let mut recorded: Vec<DrawCommand> = Vec::new();
        recorded.fill_rect(Rect::new(0.0, 0.0, 4.0, 3.0), Color::LIGHT_GRAY);
        recorded.fill_circle(Circle::new(Point::new(1.0, 1.0), 4.0), Color::BLACK);
        let tri = Triangle([Point::ORIGIN, Point::new(1.0, 0.0), Point::new(0.0, 1.0)]);
        recorded.fill_triangle(tri, Color::RED);

        let mut copy: Vec<DrawCommand> = Vec::new();
        for cmd in &recorded {
            cmd.replay(&mut copy);
        }
        assert_eq!(copy, recorded);
        assert_eq!(copy[2].color(), Color::RED);
    }
}
