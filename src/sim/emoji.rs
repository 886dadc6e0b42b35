// emoji.rs - Emoji bursts at discovered spots
//
// Same lifecycle as message bubbles but faster: rise by own speed, fade
// 0.01 per tick, grow 0.2px per tick.

use super::Rng;
use crate::scene::Emotion;

const FADE_PER_TICK: f64 = 0.01;
const GROW_PER_TICK: f64 = 0.2;

// Spawn jitter around the spot
const JITTER_X: f64 = 30.0;
const JITTER_Y: f64 = 10.0;

const SIZE_MIN: f64 = 24.0;
const SIZE_MAX: f64 = 32.0;
const SPEED_MIN: f64 = 1.5;
const SPEED_MAX: f64 = 2.5;

#[derive(Debug, Clone, PartialEq)]
pub struct EmotionEmoji {
    pub symbol: &'static str,
    pub x: f64,
    pub y: f64,
    pub opacity: f64,
    /// Font size in px
    pub size: f64,
    /// Rise per tick in px
    pub speed: f64,
}

#[derive(Default)]
pub struct Emojis {
    pub items: Vec<EmotionEmoji>,
}

impl Emojis {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Spawn one emoji near (`x`, `y`) from the emotion's set
    pub fn burst(&mut self, emotion: Emotion, x: f64, y: f64, rng: &mut Rng) {
        let Some(&symbol) = rng.pick(emotion.emojis()) else { return };
        self.items.push(EmotionEmoji {
            symbol,
            x: x + (rng.next() - 0.5) * JITTER_X,
            y: y + rng.next() * JITTER_Y,
            opacity: 1.0,
            size: rng.range(SIZE_MIN, SIZE_MAX),
            speed: rng.range(SPEED_MIN, SPEED_MAX),
        });
    }

    /// One decay tick
    pub fn decay(&mut self) {
        self.items.retain_mut(|e| {
            e.y -= e.speed;
            e.opacity -= FADE_PER_TICK;
            e.size += GROW_PER_TICK;
            e.opacity > 0.0
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
