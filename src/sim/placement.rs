// placement.rs - Where a new message bubble goes
//
// Bubbles open 100px above the spot. If that lands too close to a bubble
// placed in the last few seconds, candidates spiral outward around the spot
// until one is clear or the attempts run out, in which case the last
// candidate is taken anyway.

use std::f64::consts::TAU;

use crate::config::PlacementConfig;
use crate::scene::Viewport;

/// Bubbles open this far above the anchor
const RISE: f64 = 100.0;

// Retry spiral: attempt a sits at angle a*TAU/8, radius 80 + 20a
const SPIRAL_DIRECTIONS: f64 = 8.0;
const SPIRAL_START: f64 = 80.0;
const SPIRAL_STEP: f64 = 20.0;

// Retried candidates are kept this far from the viewport edges
const EDGE_PAD_X: f64 = 150.0;
const EDGE_PAD_Y: f64 = 120.0;

// Longer texts get one line break
const WRAP_AT: usize = 25;
// A break token must sit more than this many chars from either end
const WRAP_EDGE: usize = 10;
// Checked in order; the first qualifying token wins
const BREAK_TOKENS: [&str; 9] = ["다는", "하는", "있는", "되는", "에서", "에게", "으로", "이며", "이고"];

/// Insert at most one line break into `text` if it is longer than 25 chars.
///
/// The break goes right after the first token in `BREAK_TOKENS` whose first
/// occurrence is away from both ends, or at the middle when none is.
pub fn wrap_text(text: &str) -> String {
    let len = text.chars().count();
    if len <= WRAP_AT { return text.to_string(); }

    let token_break = BREAK_TOKENS.iter().find_map(|token| {
        let byte = text.find(token)?;
        let index = text[..byte].chars().count();
        (index > WRAP_EDGE && index + WRAP_EDGE < len).then_some(byte + token.len())
    });

    let split = token_break.unwrap_or_else(|| {
        text.char_indices().nth(len / 2).map_or(text.len(), |(byte, _)| byte)
    });

    let (head, tail) = text.split_at(split);
    format!("{head}\n{tail}")
}

/// Unclamped retry position `attempt` for a bubble anchored at (`x`, `y`).
///
/// Directions repeat every 8 attempts while the radius keeps growing.
pub fn spiral_candidate(x: f64, y: f64, attempt: u32) -> (f64, f64) {
    let a = attempt as f64;
    let angle = a * TAU / SPIRAL_DIRECTIONS;
    let offset = SPIRAL_START + a * SPIRAL_STEP;
    (x + angle.cos() * offset, y - RISE + angle.sin() * offset)
}

/// A bubble position that still blocks its neighbourhood
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ActivePlacement {
    pub x: f64,
    pub y: f64,
    pub timestamp_ms: f64,
}

/// Outcome of a placement decision
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub x: f64,
    pub y: f64,
    /// Retries taken; zero when the first candidate was clear
    pub attempts: u32,
    /// Every retry was used without finding a clear spot
    pub exhausted: bool,
}

pub struct Placements {
    active: Vec<ActivePlacement>,
    config: PlacementConfig,
}

impl Placements {
    pub fn new(config: PlacementConfig) -> Self {
        Self { active: Vec::new(), config }
    }

    /// Choose a position for a bubble anchored at (`x`, `y`) and record it
    pub fn place(&mut self, x: f64, y: f64, viewport: Viewport, now_ms: f64) -> Placement {
        self.prune(now_ms);

        let (mut cx, mut cy) = (x, y - RISE);
        let mut attempts = 0;
        let mut clear = false;

        while !clear && attempts < self.config.attempts {
            if !self.collides(cx, cy) {
                clear = true;
                continue;
            }

            (cx, cy) = spiral_candidate(x, y, attempts);

            // Sequential so a tiny viewport still yields a position
            if cx < EDGE_PAD_X { cx = EDGE_PAD_X; }
            if cx > viewport.width - EDGE_PAD_X { cx = viewport.width - EDGE_PAD_X; }
            if cy < EDGE_PAD_Y { cy = EDGE_PAD_Y; }
            if cy > viewport.height - EDGE_PAD_Y { cy = viewport.height - EDGE_PAD_Y; }

            attempts += 1;
        }

        if !clear {
            log::debug!("placement exhausted after {attempts} attempts, keeping ({cx:.0}, {cy:.0})");
        }

        self.active.push(ActivePlacement { x: cx, y: cy, timestamp_ms: now_ms });

        Placement { x: cx, y: cy, attempts, exhausted: !clear }
    }

    /// Drop placements older than the ttl
    pub fn prune(&mut self, now_ms: f64) {
        let ttl = self.config.ttl_ms;
        self.active.retain(|p| now_ms - p.timestamp_ms < ttl);
    }

    pub fn active(&self) -> &[ActivePlacement] {
        &self.active
    }

    pub fn clear(&mut self) {
        self.active.clear();
    }

    fn collides(&self, x: f64, y: f64) -> bool {
        let min = self.config.min_distance;
        self.active.iter().any(|p| (x - p.x).hypot(y - p.y) < min)
    }
}
