// message.rs - Floating message bubbles
//
// Bubbles rise, fade and grow on the decay clock and are dropped once fully
// transparent.

use crate::scene::Rgba;

const RISE_PER_TICK: f64 = 0.8;
const FADE_PER_TICK: f64 = 0.004;
const GROW_PER_TICK: f64 = 0.006;

#[derive(Debug, Clone, PartialEq)]
pub struct FloatingMessage {
    /// Already wrapped, at most one '\n'
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub opacity: f64,
    pub scale: f64,
    pub color: Rgba,
    pub created_ms: f64,
}

impl FloatingMessage {
    pub fn new(text: String, x: f64, y: f64, color: Rgba, created_ms: f64) -> Self {
        Self { text, x, y, opacity: 1.0, scale: 0.0, color, created_ms }
    }

    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.text.split('\n')
    }
}

#[derive(Default)]
pub struct Messages {
    pub items: Vec<FloatingMessage>,
}

impl Messages {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    pub fn push(&mut self, message: FloatingMessage) {
        self.items.push(message);
    }

    /// One decay tick
    pub fn decay(&mut self) {
        self.items.retain_mut(|m| {
            m.y -= RISE_PER_TICK;
            m.opacity -= FADE_PER_TICK;
            m.scale += GROW_PER_TICK;
            m.opacity > 0.0
        });
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
