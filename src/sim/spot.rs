// spot.rs - Hidden discovery spots
//
// Invisible points scattered inside a margin-inset rectangle. A discovered
// spot is moved to a fresh position at the same index, never removed.

use super::Rng;
use crate::scene::Viewport;

const BASE_COUNT: usize = 12;
const COUNT_PER_INTENSITY: f64 = 20.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HiddenSpot {
    pub x: f64,
    pub y: f64,
    pub found: bool,
    /// Selects the message tier, in [0, 1)
    pub resonance: f64,
}

pub struct Spots {
    pub items: Vec<HiddenSpot>,
    margin: f64,
}

/// `floor(intensity * 20) + 12`
pub fn spot_count(intensity: f64) -> usize {
    (intensity * COUNT_PER_INTENSITY).floor() as usize + BASE_COUNT
}

impl Spots {
    pub fn new(margin: f64) -> Self {
        Self { items: Vec::new(), margin }
    }

    pub fn regenerate(&mut self, intensity: f64, viewport: Viewport, rng: &mut Rng) {
        let count = spot_count(intensity);
        let margin = self.margin;
        self.items = (0..count).map(|_| scatter(margin, viewport, rng)).collect();
        log::debug!("spots: {count} hidden");
    }

    /// Move spot `i` somewhere new with a new resonance
    pub fn relocate(&mut self, i: usize, viewport: Viewport, rng: &mut Rng) {
        let spot = scatter(self.margin, viewport, rng);
        if let Some(slot) = self.items.get_mut(i) {
            *slot = spot;
        }
    }

    /// Indices of undiscovered spots within `radius` of (`x`, `y`)
    pub fn hits(&self, x: f64, y: f64, radius: f64) -> Vec<usize> {
        self.items
            .iter()
            .enumerate()
            .filter(|(_, s)| !s.found && (s.x - x).hypot(s.y - y) < radius)
            .map(|(i, _)| i)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

fn scatter(m: f64, viewport: Viewport, rng: &mut Rng) -> HiddenSpot {
    HiddenSpot {
        x: m + rng.next() * (viewport.width - 2.0 * m),
        y: m + rng.next() * (viewport.height - 2.0 * m),
        found: false,
        resonance: rng.next(),
    }
}
