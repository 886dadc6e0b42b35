// grass.rs - Pointer-reactive grass field
//
// Each blade eases toward a target lean with a first-order filter
//   angle += (target - angle) * springiness
// so it never overshoots. A per-blade sine sway rides on top.
// The pointer sets targets; nothing else does.

use super::Rng;
use crate::scene::{Rgba, Viewport};

const AREA_PER_BLADE: f64 = 500.0;

// Base line sits 10..210px above the bottom edge
const BASE_INSET: f64 = 10.0;
const BASE_BAND: f64 = 200.0;

const HEIGHT_MIN: f64 = 40.0;
const HEIGHT_MAX: f64 = 100.0;
const WIDTH_MIN: f64 = 2.0;
const WIDTH_MAX: f64 = 5.0;
const SWAY_SPEED_MIN: f64 = 0.02;
const SWAY_SPEED_MAX: f64 = 0.05;
const SWAY_INTENSITY_MIN: f64 = 0.01;
const SWAY_INTENSITY_MAX: f64 = 0.04;
const SPRING_MIN: f64 = 0.05;
const SPRING_MAX: f64 = 0.1;

// Pointer lean: atan2(dx, LEAN_REACH) * strength * LEAN_GAIN
const LEAN_REACH: f64 = 50.0;
const LEAN_GAIN: f64 = 0.5;

#[derive(Debug, Clone, PartialEq)]
pub struct GrassBlade {
    // Anchor
    pub x: f64,
    pub base_y: f64,

    // Shape
    pub height: f64,
    pub width: f64,

    // Lean
    pub angle: f64,
    pub target_angle: f64,
    pub springiness: f64,

    // Natural sway
    pub sway_phase: f64,
    pub sway_speed: f64,
    pub sway_intensity: f64,

    pub color: Rgba,
}

impl GrassBlade {
    /// One frame of easing and sway
    #[inline]
    pub fn advance(&mut self) {
        self.angle += (self.target_angle - self.angle) * self.springiness;
        self.sway_phase += self.sway_speed;
    }

    /// Rotation applied about the base anchor when drawing
    #[inline]
    pub fn draw_angle(&self) -> f64 {
        self.angle + self.sway_phase.sin() * self.sway_intensity
    }
}

#[derive(Default)]
pub struct Grass {
    pub blades: Vec<GrassBlade>,
}

/// `floor(w * h / 500)`
pub fn blade_count(viewport: Viewport) -> usize {
    (viewport.area() / AREA_PER_BLADE).floor() as usize
}

/// Target lean for a blade anchored at (`x`, `base_y`) with the pointer at (`px`, `py`)
pub fn lean_toward(x: f64, base_y: f64, px: f64, py: f64, radius: f64) -> f64 {
    let distance = (x - px).hypot(base_y - py);
    if distance >= radius { return 0.0; }

    let strength = (radius - distance) / radius;
    let dx = x - px;
    dx.atan2(LEAN_REACH) * strength * LEAN_GAIN
}

impl Grass {
    pub fn new() -> Self {
        Self { blades: Vec::new() }
    }

    pub fn regenerate(&mut self, viewport: Viewport, rng: &mut Rng) {
        let count = blade_count(viewport);
        self.blades = (0..count)
            .map(|_| GrassBlade {
                x: rng.next() * viewport.width,
                base_y: viewport.height - BASE_INSET - rng.next() * BASE_BAND,
                height: rng.range(HEIGHT_MIN, HEIGHT_MAX),
                width: rng.range(WIDTH_MIN, WIDTH_MAX),
                angle: 0.0,
                target_angle: 0.0,
                springiness: rng.range(SPRING_MIN, SPRING_MAX),
                sway_phase: rng.next() * std::f64::consts::TAU,
                sway_speed: rng.range(SWAY_SPEED_MIN, SWAY_SPEED_MAX),
                sway_intensity: rng.range(SWAY_INTENSITY_MIN, SWAY_INTENSITY_MAX),
                color: grass_color(rng),
            })
            .collect();
        log::debug!("grass: {} blades for {}x{}", count, viewport.width, viewport.height);
    }

    pub fn advance(&mut self) {
        for blade in &mut self.blades {
            blade.advance();
        }
    }

    /// Lean blades near the pointer away from it; relax the rest
    pub fn pointer_at(&mut self, px: f64, py: f64, radius: f64) {
        for blade in &mut self.blades {
            blade.target_angle = lean_toward(blade.x, blade.base_y, px, py, radius);
        }
    }

    pub fn relax(&mut self) {
        for blade in &mut self.blades {
            blade.target_angle = 0.0;
        }
    }

    pub fn len(&self) -> usize {
        self.blades.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blades.is_empty()
    }
}

fn grass_color(rng: &mut Rng) -> Rgba {
    let hue = 100.0 + rng.next() * 30.0;
    let lightness = 0.25 + rng.next() * 0.20;
    Rgba::from_hsl(hue, 0.70, lightness)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn blade(springiness: f64, target: f64) -> GrassBlade {
        GrassBlade {
            x: 0.0,
            base_y: 0.0,
            height: 60.0,
            width: 3.0,
            angle: 0.0,
            target_angle: target,
            springiness,
            sway_phase: 0.0,
            sway_speed: 0.03,
            sway_intensity: 0.02,
            color: Rgba::BLACK,
        }
    }

    #[test]
    fn count_follows_area() {
        assert_eq!(blade_count(Viewport::new(800.0, 600.0)), 960);
        assert_eq!(blade_count(Viewport::new(10.0, 10.0)), 0);
        assert_eq!(blade_count(Viewport::new(333.0, 7.0)), 4);
    }

    #[test]
    fn blades_inside_bottom_band() {
        let view = Viewport::new(400.0, 500.0);
        let mut rng = Rng::new(99);
        let mut grass = Grass::default();
        assert!(grass.is_empty());
        grass.regenerate(view, &mut rng);
        assert_eq!(grass.len(), 400);
        for b in &grass.blades {
            assert!(b.base_y <= view.height - BASE_INSET);
            assert!(b.base_y > view.height - BASE_INSET - BASE_BAND);
            assert!((HEIGHT_MIN..HEIGHT_MAX).contains(&b.height));
            assert!((WIDTH_MIN..WIDTH_MAX).contains(&b.width));
            assert!((SPRING_MIN..SPRING_MAX).contains(&b.springiness));
            assert!((SWAY_SPEED_MIN..SWAY_SPEED_MAX).contains(&b.sway_speed));
            assert!((SWAY_INTENSITY_MIN..SWAY_INTENSITY_MAX).contains(&b.sway_intensity));
            assert_eq!(b.angle, 0.0);
        }
    }

    #[test]
    fn converges_without_overshoot() {
        for &springiness in &[0.05, 0.075, 0.1, 0.5, 0.99] {
            for &target in &[0.4, -0.3] {
                let mut b = blade(springiness, target);
                let mut gap = (target - b.angle).abs();
                for _ in 0..500 {
                    b.advance();
                    let next_gap = (target - b.angle).abs();
                    assert!(next_gap <= gap);
                    // same side of the target as where it started
                    assert!(b.angle * target >= 0.0 && b.angle.abs() <= target.abs());
                    gap = next_gap;
                }
                assert!(gap < 1e-3);
            }
        }
    }

    #[test]
    fn sway_rides_on_angle() {
        let mut b = blade(0.1, 0.0);
        b.sway_phase = std::f64::consts::FRAC_PI_2;
        assert!((b.draw_angle() - 0.02).abs() < 1e-12);
        b.advance();
        assert!((b.sway_phase - (std::f64::consts::FRAC_PI_2 + 0.03)).abs() < 1e-12);
    }

    #[test]
    fn pointer_leans_nearby_blades_away() {
        // Blade right of the pointer leans positive, left leans negative
        let right = lean_toward(130.0, 500.0, 100.0, 500.0, 100.0);
        let left = lean_toward(70.0, 500.0, 100.0, 500.0, 100.0);
        assert!(right > 0.0);
        assert!((right + left).abs() < 1e-12);

        let expected = (30.0f64).atan2(50.0) * 0.7 * 0.5;
        assert!((right - expected).abs() < 1e-12);

        assert_eq!(lean_toward(300.0, 500.0, 100.0, 500.0, 100.0), 0.0);
        assert_eq!(lean_toward(100.0, 600.0, 100.0, 500.0, 100.0), 0.0);
    }

    #[test]
    fn pointer_then_relax() {
        let mut grass = Grass::new();
        grass.blades.push(GrassBlade { x: 120.0, base_y: 500.0, ..blade(0.1, 0.0) });
        grass.blades.push(GrassBlade { x: 700.0, base_y: 500.0, ..blade(0.1, 0.3) });
        grass.pointer_at(100.0, 500.0, 100.0);
        assert!(grass.blades[0].target_angle > 0.0);
        assert_eq!(grass.blades[1].target_angle, 0.0);
        grass.relax();
        assert!(grass.blades.iter().all(|b| b.target_angle == 0.0));
    }
}
