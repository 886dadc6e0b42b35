// record.rs - Canvas test double
//
// Records every call as an Op. Text is measured as a fixed width per char.

use super::{Canvas, RadialGradient, Shadow};
use crate::scene::Rgba;

pub const CHAR_WIDTH: f64 = 10.0;

#[derive(Debug, Clone, PartialEq)]
pub enum Op {
    Clear(f64, f64),
    Save,
    Restore,
    Alpha(f64),
    FillStyle(Rgba),
    Stroke(Rgba, f64),
    Shadow(Shadow),
    Font(String),
    Translate(f64, f64),
    Rotate(f64),
    BeginPath,
    MoveTo(f64, f64),
    LineTo(f64, f64),
    Quad(f64, f64, f64, f64),
    Bezier([f64; 6]),
    Circle(f64, f64, f64),
    ClosePath,
    Fill,
    StrokePath,
    FillRect(f64, f64, f64, f64),
    Gradient(RadialGradient),
    Image,
    Text(String, f64, f64),
}

pub struct RecordingCanvas {
    pub ops: Vec<Op>,
}

impl RecordingCanvas {
    pub fn new() -> Self {
        Self { ops: Vec::new() }
    }

    pub fn count(&self, pred: impl Fn(&Op) -> bool) -> usize {
        self.ops.iter().filter(|op| pred(op)).count()
    }
}

impl Canvas for RecordingCanvas {
    type Image = ();

    fn clear(&mut self, width: f64, height: f64) { self.ops.push(Op::Clear(width, height)); }
    fn save(&mut self) { self.ops.push(Op::Save); }
    fn restore(&mut self) { self.ops.push(Op::Restore); }
    fn set_alpha(&mut self, alpha: f64) { self.ops.push(Op::Alpha(alpha)); }
    fn set_fill(&mut self, color: Rgba) { self.ops.push(Op::FillStyle(color)); }
    fn set_stroke(&mut self, color: Rgba, width: f64) { self.ops.push(Op::Stroke(color, width)); }
    fn set_shadow(&mut self, shadow: Shadow) { self.ops.push(Op::Shadow(shadow)); }
    fn set_font(&mut self, font: &str) { self.ops.push(Op::Font(font.to_string())); }
    fn translate(&mut self, x: f64, y: f64) { self.ops.push(Op::Translate(x, y)); }
    fn rotate(&mut self, angle: f64) { self.ops.push(Op::Rotate(angle)); }
    fn begin_path(&mut self) { self.ops.push(Op::BeginPath); }
    fn move_to(&mut self, x: f64, y: f64) { self.ops.push(Op::MoveTo(x, y)); }
    fn line_to(&mut self, x: f64, y: f64) { self.ops.push(Op::LineTo(x, y)); }
    fn quadratic_to(&mut self, cx: f64, cy: f64, x: f64, y: f64) { self.ops.push(Op::Quad(cx, cy, x, y)); }
    fn bezier_to(&mut self, c1x: f64, c1y: f64, c2x: f64, c2y: f64, x: f64, y: f64) {
        self.ops.push(Op::Bezier([c1x, c1y, c2x, c2y, x, y]));
    }
    fn circle(&mut self, x: f64, y: f64, radius: f64) { self.ops.push(Op::Circle(x, y, radius)); }
    fn close_path(&mut self) { self.ops.push(Op::ClosePath); }
    fn fill(&mut self) { self.ops.push(Op::Fill); }
    fn stroke(&mut self) { self.ops.push(Op::StrokePath); }
    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64) { self.ops.push(Op::FillRect(x, y, w, h)); }
    fn fill_rect_gradient(&mut self, gradient: &RadialGradient, _x: f64, _y: f64, _w: f64, _h: f64) {
        self.ops.push(Op::Gradient(gradient.clone()));
    }
    fn draw_image(&mut self, _image: &(), _x: f64, _y: f64, _w: f64, _h: f64) { self.ops.push(Op::Image); }
    fn measure_text(&mut self, text: &str) -> f64 { text.chars().count() as f64 * CHAR_WIDTH }
    fn fill_text_centered(&mut self, text: &str, x: f64, y: f64) {
        self.ops.push(Op::Text(text.to_string(), x, y));
    }
}
