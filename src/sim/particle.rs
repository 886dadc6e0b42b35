// particle.rs - Ambient emotion particles
//
// Drifting shapes in the emotion's color. The whole set is rebuilt whenever
// emotion, intensity or viewport changes; nothing carries over.

use super::Rng;
use crate::scene::{Emotion, Rgba, ShapeKind, Viewport};

const BASE_COUNT: usize = 5;
const COUNT_PER_INTENSITY: f64 = 20.0;

const SIZE_MIN: f64 = 1.0;
const SIZE_MAX: f64 = 4.0;
const OPACITY_MIN: f64 = 0.1;
const OPACITY_MAX: f64 = 0.4;
const SPEED_MIN: f64 = 0.2;
const SPEED_MAX: f64 = 0.7;

#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    /// Heading in radians
    pub angle: f64,
    pub speed: f64,
    pub size: f64,
    pub opacity: f64,
    pub color: Rgba,
    pub shape: ShapeKind,
}

#[derive(Default)]
pub struct Particles {
    pub items: Vec<Particle>,
}

/// `floor(intensity * 20) + 5`
pub fn particle_count(intensity: f64) -> usize {
    (intensity * COUNT_PER_INTENSITY).floor() as usize + BASE_COUNT
}

impl Particles {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Replace every particle with a fresh set
    pub fn regenerate(&mut self, emotion: Emotion, intensity: f64, viewport: Viewport, rng: &mut Rng) {
        let count = particle_count(intensity);
        let color = emotion.color();
        let shape = emotion.shape();

        self.items = (0..count)
            .map(|_| Particle {
                x: rng.next() * viewport.width,
                y: rng.next() * viewport.height,
                size: rng.range(SIZE_MIN, SIZE_MAX),
                opacity: rng.range(OPACITY_MIN, OPACITY_MAX),
                speed: rng.range(SPEED_MIN, SPEED_MAX),
                angle: rng.next() * std::f64::consts::TAU,
                color,
                shape,
            })
            .collect();
    }

    /// One frame of drift, wrapping at the viewport edges
    pub fn advance(&mut self, viewport: Viewport) {
        let (w, h) = (viewport.width, viewport.height);
        for p in &mut self.items {
            p.x += p.angle.cos() * p.speed;
            p.y += p.angle.sin() * p.speed;

            if p.x < 0.0 { p.x = w; }
            if p.x > w { p.x = 0.0; }
            if p.y < 0.0 { p.y = h; }
            if p.y > h { p.y = 0.0; }
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
