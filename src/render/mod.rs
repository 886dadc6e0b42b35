// render/ - Draw the garden onto a 2D canvas
//
// Layer order, back to front:
//   background image (0.8 alpha), emotion glow (exploring only),
//   particles, grass, emojis, message bubbles (exploring only)
//
// Drawing never mutates the world; GardenWorld::advance_frame is the
// matching update step and hosts run both once per displayed frame.

mod bubble;
mod shapes;

#[cfg(test)]
pub(crate) mod record;

pub use bubble::{BubbleLayout, ACCENT_RADIUS, BUBBLE_PADDING, CORNER_RADIUS};
pub use shapes::{heart, star, star_vertices, tear};

use crate::scene::{Rgba, ShapeKind};
use crate::sim::{EmotionEmoji, GardenWorld, GrassBlade, Particle};

const BACKGROUND_ALPHA: f64 = 0.8;

// Glow alpha at the center and at the rim (0x20 and 0x05 of 0xFF)
const GLOW_INNER_ALPHA: f64 = 32.0 / 255.0;
const GLOW_OUTER_ALPHA: f64 = 5.0 / 255.0;

const EMOJI_FONTS: &str = "\"Apple Color Emoji\", \"Segoe UI Emoji\", \"Noto Color Emoji\"";

/// Drop shadow settings
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Shadow {
    pub color: Rgba,
    pub blur: f64,
    pub offset_x: f64,
    pub offset_y: f64,
}

impl Shadow {
    pub const NONE: Shadow = Shadow {
        color: Rgba::BLACK.with_alpha(0.0),
        blur: 0.0,
        offset_x: 0.0,
        offset_y: 0.0,
    };
}

/// Radial gradient between two concentric circles
#[derive(Debug, Clone, PartialEq)]
pub struct RadialGradient {
    pub cx: f64,
    pub cy: f64,
    pub r0: f64,
    pub r1: f64,
    /// (offset in [0, 1], color)
    pub stops: Vec<(f64, Rgba)>,
}

/// A 2D drawing surface with canvas-style immediate-mode paths.
///
/// Style setters affect subsequent fills and strokes; `save`/`restore`
/// bracket transform, alpha and style changes.
pub trait Canvas {
    /// Host-specific raster used for the background
    type Image;

    fn clear(&mut self, width: f64, height: f64);
    fn save(&mut self);
    fn restore(&mut self);

    // State
    fn set_alpha(&mut self, alpha: f64);
    fn set_fill(&mut self, color: Rgba);
    fn set_stroke(&mut self, color: Rgba, width: f64);
    fn set_shadow(&mut self, shadow: Shadow);
    fn set_font(&mut self, font: &str);
    fn translate(&mut self, x: f64, y: f64);
    fn rotate(&mut self, angle: f64);

    // Paths
    fn begin_path(&mut self);
    fn move_to(&mut self, x: f64, y: f64);
    fn line_to(&mut self, x: f64, y: f64);
    fn quadratic_to(&mut self, cx: f64, cy: f64, x: f64, y: f64);
    fn bezier_to(&mut self, c1x: f64, c1y: f64, c2x: f64, c2y: f64, x: f64, y: f64);
    /// Full circle as a closed subpath
    fn circle(&mut self, x: f64, y: f64, radius: f64);
    fn close_path(&mut self);
    fn fill(&mut self);
    fn stroke(&mut self);

    // Direct fills
    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64);
    fn fill_rect_gradient(&mut self, gradient: &RadialGradient, x: f64, y: f64, w: f64, h: f64);
    fn draw_image(&mut self, image: &Self::Image, x: f64, y: f64, w: f64, h: f64);

    // Text
    fn measure_text(&mut self, text: &str) -> f64;
    fn fill_text_centered(&mut self, text: &str, x: f64, y: f64);
}

/// Draw one frame of the world
pub fn draw_frame<C: Canvas>(world: &GardenWorld, canvas: &mut C, background: Option<&C::Image>) {
    let scene = world.scene();
    let (w, h) = (scene.viewport.width, scene.viewport.height);
    let exploring = scene.is_exploring();

    canvas.clear(w, h);

    if let Some(image) = background {
        canvas.set_alpha(BACKGROUND_ALPHA);
        canvas.draw_image(image, 0.0, 0.0, w, h);
        canvas.set_alpha(1.0);
    }

    if exploring {
        canvas.fill_rect_gradient(&emotion_glow(scene.emotion.color(), w, h), 0.0, 0.0, w, h);
    }

    for p in world.particles() {
        draw_particle(canvas, p);
    }
    for blade in world.grass() {
        draw_blade(canvas, blade);
    }
    for emoji in world.emojis() {
        draw_emoji(canvas, emoji);
    }

    if exploring {
        for message in world.messages() {
            bubble::draw(canvas, message);
        }
    }
}

/// Emotion-tinted glow centered on the viewport, radius = width
pub fn emotion_glow(color: Rgba, w: f64, h: f64) -> RadialGradient {
    RadialGradient {
        cx: w / 2.0,
        cy: h / 2.0,
        r0: 0.0,
        r1: w,
        stops: vec![
            (0.0, color.with_alpha(GLOW_INNER_ALPHA)),
            (1.0, color.with_alpha(GLOW_OUTER_ALPHA)),
        ],
    }
}

pub fn draw_particle<C: Canvas>(canvas: &mut C, p: &Particle) {
    canvas.save();
    canvas.set_alpha(p.opacity);
    canvas.set_fill(p.color);

    match p.shape {
        ShapeKind::Heart => heart(canvas, p.x, p.y, p.size),
        ShapeKind::Star => star(canvas, p.x, p.y, p.size),
        ShapeKind::Tear => tear(canvas, p.x, p.y, p.size),
        ShapeKind::Dot => {
            canvas.begin_path();
            canvas.circle(p.x, p.y, p.size);
            canvas.fill();
        }
    }

    canvas.restore();
}

/// Thin leaf rotated about its base anchor
pub fn draw_blade<C: Canvas>(canvas: &mut C, blade: &GrassBlade) {
    let (hw, h) = (blade.width / 2.0, blade.height);

    canvas.save();
    canvas.translate(blade.x, blade.base_y);
    canvas.rotate(blade.draw_angle());

    canvas.begin_path();
    canvas.move_to(0.0, 0.0);
    canvas.quadratic_to(hw, -h / 2.0, 0.0, -h);
    canvas.quadratic_to(-hw, -h / 2.0, 0.0, 0.0);
    canvas.set_fill(blade.color);
    canvas.fill();

    canvas.restore();
}

pub fn draw_emoji<C: Canvas>(canvas: &mut C, emoji: &EmotionEmoji) {
    canvas.save();
    canvas.set_alpha(emoji.opacity);
    canvas.set_font(&format!("{}px {EMOJI_FONTS}", emoji.size));
    canvas.fill_text_centered(emoji.symbol, emoji.x, emoji.y);
    canvas.restore();
}
