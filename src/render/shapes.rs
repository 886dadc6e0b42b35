// shapes.rs - Particle silhouettes
//
// Each builds and fills one path anchored at (x, y). Fill color and alpha
// are set by the caller.

use std::f64::consts::{FRAC_PI_2, TAU};

use super::Canvas;

const STAR_POINTS: usize = 5;
const STAR_INNER: f64 = 0.5;

/// Two mirrored bezier lobes meeting at a point below the anchor
pub fn heart<C: Canvas>(c: &mut C, x: f64, y: f64, size: f64) {
    let s = size;
    c.begin_path();
    c.move_to(x, y + s * 0.3);
    c.bezier_to(x, y, x - s * 0.5, y, x - s * 0.5, y + s * 0.3);
    c.bezier_to(x - s * 0.5, y + s * 0.7, x, y + s * 1.1, x, y + s * 1.3);
    c.bezier_to(x, y + s * 1.1, x + s * 0.5, y + s * 0.7, x + s * 0.5, y + s * 0.3);
    c.bezier_to(x + s * 0.5, y, x, y, x, y + s * 0.3);
    c.fill();
}

/// Vertex `i` sits at angle `i * TAU / 5 - PI / 2`; even vertices at
/// `size`, odd ones at half that.
pub fn star_vertices(x: f64, y: f64, size: f64) -> [(f64, f64); STAR_POINTS] {
    let mut out = [(0.0, 0.0); STAR_POINTS];
    for (i, v) in out.iter_mut().enumerate() {
        let angle = i as f64 * TAU / STAR_POINTS as f64 - FRAC_PI_2;
        let radius = if i % 2 == 0 { size } else { size * STAR_INNER };
        *v = (x + angle.cos() * radius, y + angle.sin() * radius);
    }
    out
}

pub fn star<C: Canvas>(c: &mut C, x: f64, y: f64, size: f64) {
    let vertices = star_vertices(x, y, size);
    c.begin_path();
    c.move_to(vertices[0].0, vertices[0].1);
    for &(vx, vy) in &vertices[1..] {
        c.line_to(vx, vy);
    }
    c.close_path();
    c.fill();
}

/// Round drop below the anchor with a cusp pointing back up to it
pub fn tear<C: Canvas>(c: &mut C, x: f64, y: f64, size: f64) {
    let s = size;
    c.begin_path();
    c.circle(x, y + s * 0.5, s * 0.6);
    c.move_to(x, y);
    c.quadratic_to(x - s * 0.3, y + s * 0.3, x, y + s * 0.5);
    c.quadratic_to(x + s * 0.3, y + s * 0.3, x, y);
    c.fill();
}

#[cfg(test)]
mod tests {
    use super::super::record::{Op, RecordingCanvas};
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn star_first_vertex_points_up() {
        let v = star_vertices(10.0, 20.0, 3.0);
        assert!(close(v[0].0, 10.0));
        assert!(close(v[0].1, 17.0));
        let (dx, dy) = (v[0].0 - 10.0, v[0].1 - 20.0);
        assert!(close(dy.atan2(dx), -FRAC_PI_2));
        assert!(close(dx.hypot(dy), 3.0));
    }

    #[test]
    fn star_alternates_radius() {
        let v = star_vertices(0.0, 0.0, 4.0);
        for (i, (x, y)) in v.iter().enumerate() {
            let r = x.hypot(*y);
            let expected = if i % 2 == 0 { 4.0 } else { 2.0 };
            assert!(close(r, expected), "vertex {i} at radius {r}");
        }
    }

    #[test]
    fn star_path_is_closed_and_filled() {
        let mut c = RecordingCanvas::new();
        star(&mut c, 0.0, 0.0, 2.0);
        assert_eq!(c.ops[0], Op::BeginPath);
        assert_eq!(c.count(|op| matches!(op, Op::LineTo(..))), 4);
        assert_eq!(c.ops[c.ops.len() - 2], Op::ClosePath);
        assert_eq!(c.ops[c.ops.len() - 1], Op::Fill);
    }

    #[test]
    fn heart_lobes_mirror() {
        let mut c = RecordingCanvas::new();
        heart(&mut c, 50.0, 50.0, 2.0);
        let curves: Vec<_> = c.ops.iter().filter_map(|op| match op {
            Op::Bezier(a) => Some(*a),
            _ => None,
        }).collect();
        assert_eq!(curves.len(), 4);
        // left lobe end mirrors right lobe end about x = 50
        assert!(close(50.0 - curves[0][4], curves[2][4] - 50.0));
        // lobes meet at the bottom point and return to the notch
        assert_eq!((curves[1][4], curves[1][5]), (50.0, 52.6));
        assert_eq!((curves[3][4], curves[3][5]), (50.0, 50.6));
    }

    #[test]
    fn tear_circle_below_anchor() {
        let mut c = RecordingCanvas::new();
        tear(&mut c, 10.0, 10.0, 2.0);
        assert_eq!(c.ops[1], Op::Circle(10.0, 11.0, 1.2));
        assert_eq!(c.ops[2], Op::MoveTo(10.0, 10.0));
        assert_eq!(c.ops.last(), Some(&Op::Fill));
    }
}
