// bubble.rs - Message bubble
//
// Rounded white card above the message anchor with a drop shadow, a thin
// border and accent dot in the message color, and centered text that grows
// with the message scale.

use super::{Canvas, Shadow};
use crate::scene::Rgba;
use crate::sim::FloatingMessage;

pub const BUBBLE_PADDING: f64 = 20.0;
pub const CORNER_RADIUS: f64 = 12.0;
pub const ACCENT_RADIUS: f64 = 4.0;

const ACCENT_INSET: f64 = 10.0;
const ANCHOR_GAP: f64 = 10.0;
const DROP_OFFSET: f64 = 3.0;
const BORDER_WIDTH: f64 = 2.0;

const BASE_FONT: f64 = 18.0;
const FONT_PER_SCALE: f64 = 6.0;
const LINE_SPACING: f64 = 1.4;
const FONT_FAMILY: &str = "\"Noto Sans KR\", -apple-system, BlinkMacSystemFont, sans-serif";

const TEXT_COLOR: Rgba = Rgba::rgb(0x2D, 0x37, 0x48);
const DROP_COLOR: Rgba = Rgba::BLACK.with_alpha(0.15);
const CARD_COLOR: Rgba = Rgba::WHITE.with_alpha(0.95);
const CARD_SHADOW: Shadow = Shadow {
    color: Rgba::BLACK.with_alpha(0.2),
    blur: 15.0,
    offset_x: 0.0,
    offset_y: 5.0,
};

/// Box geometry for one bubble at its current scale
#[derive(Debug, Clone, PartialEq)]
pub struct BubbleLayout {
    pub font: String,
    pub font_size: f64,
    pub line_height: f64,
    // Card, top-left origin
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl BubbleLayout {
    /// Sets the bubble font on `canvas` and measures every line
    pub fn measure<C: Canvas>(canvas: &mut C, message: &FloatingMessage) -> Self {
        let font_size = BASE_FONT + message.scale * FONT_PER_SCALE;
        let line_height = font_size * LINE_SPACING;
        let font = format!("500 {font_size}px {FONT_FAMILY}");

        canvas.set_font(&font);
        let mut lines = 0;
        let mut text_width: f64 = 0.0;
        for line in message.lines() {
            lines += 1;
            text_width = text_width.max(canvas.measure_text(line));
        }

        let width = text_width + BUBBLE_PADDING * 2.0;
        let height = lines as f64 * line_height + BUBBLE_PADDING * 2.0;

        Self {
            font,
            font_size,
            line_height,
            x: message.x - width / 2.0,
            y: message.y - height - ANCHOR_GAP,
            width,
            height,
        }
    }

    /// Baseline of text line `i`
    pub fn baseline(&self, i: usize) -> f64 {
        self.y + BUBBLE_PADDING + self.font_size + i as f64 * self.line_height
    }

    /// Center of the accent dot near the top-right corner
    pub fn accent(&self) -> (f64, f64) {
        (self.x + self.width - ACCENT_INSET, self.y + ACCENT_INSET)
    }
}

pub fn draw<C: Canvas>(c: &mut C, message: &FloatingMessage) {
    let opacity = message.opacity;

    c.save();
    let layout = BubbleLayout::measure(c, message);
    let BubbleLayout { x, y, width, height, .. } = layout;

    // Drop shadow
    c.set_alpha(opacity * 0.3);
    c.set_fill(DROP_COLOR);
    c.fill_rect(x + DROP_OFFSET, y + DROP_OFFSET, width, height);

    // Card
    c.set_alpha(opacity * 0.95);
    c.set_fill(CARD_COLOR);
    c.set_shadow(CARD_SHADOW);
    rounded_rect(c, x, y, width, height, CORNER_RADIUS);
    c.fill();

    // Border
    c.set_alpha(opacity * 0.4);
    c.set_stroke(message.color, BORDER_WIDTH);
    c.stroke();
    c.set_shadow(Shadow::NONE);

    // Text
    c.set_alpha(opacity);
    c.set_font(&layout.font);
    c.set_fill(TEXT_COLOR);
    for (i, line) in message.lines().enumerate() {
        c.fill_text_centered(line, message.x, layout.baseline(i));
    }

    // Accent
    let (ax, ay) = layout.accent();
    c.set_alpha(opacity * 0.8);
    c.set_fill(message.color);
    c.begin_path();
    c.circle(ax, ay, ACCENT_RADIUS);
    c.fill();

    c.restore();
}

fn rounded_rect<C: Canvas>(c: &mut C, x: f64, y: f64, w: f64, h: f64, r: f64) {
    c.begin_path();
    c.move_to(x + r, y);
    c.line_to(x + w - r, y);
    c.quadratic_to(x + w, y, x + w, y + r);
    c.line_to(x + w, y + h - r);
    c.quadratic_to(x + w, y + h, x + w - r, y + h);
    c.line_to(x + r, y + h);
    c.quadratic_to(x, y + h, x, y + h - r);
    c.line_to(x, y + r);
    c.quadratic_to(x, y, x + r, y);
    c.close_path();
}
