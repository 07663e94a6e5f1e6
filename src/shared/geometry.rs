//! Reine Vertex-Generatoren für Kreise, Rechtecke und Selektionsrahmen.
//!
//! Layer-neutral: liefert Welt-Koordinaten als Punktlisten, die der
//! Canvas-Painter durch die Projektion schickt. Keine Abhängigkeit auf
//! egui oder App-State.

use glam::Vec2;

/// Standard-Anzahl der Kreissegmente.
pub const CIRCLE_SLICES: usize = 60;

/// Erzeugt die Vertices eines gefüllten Kreises als Triangle-Fan.
///
/// Erster Punkt ist das Zentrum, danach `slices + 1` Umfangspunkte
/// (der erste Umfangspunkt wird am Ende wiederholt, damit der Fan schließt).
pub fn circle_fan(center: Vec2, radius: f32, slices: usize) -> Vec<Vec2> {
    let mut vertices = Vec::with_capacity(slices + 2);
    vertices.push(center);
    for i in 0..=slices {
        let angle = i as f32 * 2.0 * std::f32::consts::PI / slices as f32;
        vertices.push(center + radius * Vec2::new(angle.cos(), angle.sin()));
    }
    vertices
}

/// Erzeugt die Umfangspunkte eines Kreises (Line-Loop, nicht geschlossen).
pub fn circle_periphery(center: Vec2, radius: f32, slices: usize) -> Vec<Vec2> {
    let mut vertices = Vec::with_capacity(slices);
    for i in 0..slices {
        let angle = i as f32 * 2.0 * std::f32::consts::PI / slices as f32;
        vertices.push(center + radius * Vec2::new(angle.cos(), angle.sin()));
    }
    vertices
}

/// Erzeugt die vier Eckpunkte eines achsenparallelen Rechtecks
/// (gegen den Uhrzeigersinn, beginnend bei `min`).
pub fn rect_corners(min: Vec2, size: Vec2) -> Vec<Vec2> {
    vec![
        min,
        min + Vec2::new(size.x, 0.0),
        min + size,
        min + Vec2::new(0.0, size.y),
    ]
}

/// Ecke eines Selektionsrahmens als rechtwinkliges Dreieck.
///
/// `quadrant` 0..3 wählt die Orientierung (links-unten, rechts-unten,
/// rechts-oben, links-oben); `scale` ist die Kathetenlänge.
pub fn corner_triangle(pos: Vec2, quadrant: usize, scale: f32) -> [Vec2; 3] {
    const OFFSET: [[Vec2; 2]; 4] = [
        [Vec2::new(1.0, 0.0), Vec2::new(0.0, 1.0)],
        [Vec2::new(0.0, 1.0), Vec2::new(-1.0, 0.0)],
        [Vec2::new(-1.0, 0.0), Vec2::new(0.0, -1.0)],
        [Vec2::new(0.0, -1.0), Vec2::new(1.0, 0.0)],
    ];
    let [a, b] = OFFSET[quadrant % 4];
    [pos, pos + a * scale, pos + b * scale]
}

/// L-förmige Eckklammer eines Selektionsrahmens (sechs Punkte,
/// als konvexer Fan zeichenbar: Eckpunkt zuerst).
///
/// `size` ist die Klammer-Dicke, `length` die Schenkellänge über die
/// Dicke hinaus.
pub fn corner_bracket(pos: Vec2, quadrant: usize, size: f32, length: f32) -> Vec<Vec2> {
    let s = size;
    let l = length;
    let offsets: [[Vec2; 5]; 4] = [
        [
            Vec2::new(s + l, 0.0),
            Vec2::new(s + l, s),
            Vec2::new(s, s),
            Vec2::new(s, s + l),
            Vec2::new(0.0, s + l),
        ],
        [
            Vec2::new(0.0, s + l),
            Vec2::new(-s, s + l),
            Vec2::new(-s, s),
            Vec2::new(-s - l, s),
            Vec2::new(-s - l, 0.0),
        ],
        [
            Vec2::new(-s - l, 0.0),
            Vec2::new(-s - l, -s),
            Vec2::new(-s, -s),
            Vec2::new(-s, -s - l),
            Vec2::new(0.0, -s - l),
        ],
        [
            Vec2::new(0.0, -s - l),
            Vec2::new(s, -s - l),
            Vec2::new(s, -s),
            Vec2::new(s + l, -s),
            Vec2::new(s + l, 0.0),
        ],
    ];
    let mut vertices = Vec::with_capacity(6);
    vertices.push(pos);
    for offset in offsets[quadrant % 4] {
        vertices.push(pos + offset);
    }
    vertices
}

/// Erzeugt alle vier Eckklammern eines Rechteck-Selektionsrahmens.
///
/// `extend` vergrößert den Rahmen über das Rechteck hinaus (z.B. 0.2
/// Welt-Einheiten Abstand zur Form).
pub fn rect_border_brackets(
    min: Vec2,
    size: Vec2,
    extend: f32,
    bracket_size: f32,
    bracket_length: f32,
) -> [Vec<Vec2>; 4] {
    let lo = min - Vec2::splat(extend);
    let hi = min + size + Vec2::splat(extend);
    [
        corner_bracket(lo, 0, bracket_size, bracket_length),
        corner_bracket(Vec2::new(hi.x, lo.y), 1, bracket_size, bracket_length),
        corner_bracket(hi, 2, bracket_size, bracket_length),
        corner_bracket(Vec2::new(lo.x, hi.y), 3, bracket_size, bracket_length),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_circle_fan_layout() {
        let center = Vec2::new(2.0, -1.0);
        let fan = circle_fan(center, 1.5, CIRCLE_SLICES);
        assert_eq!(fan.len(), CIRCLE_SLICES + 2);
        assert_relative_eq!(fan[0].x, center.x);
        assert_relative_eq!(fan[0].y, center.y);
        // Alle Umfangspunkte liegen auf dem Radius
        for v in &fan[1..] {
            assert_relative_eq!((*v - center).length(), 1.5, epsilon = 1e-5);
        }
        // Fan ist geschlossen: erster und letzter Umfangspunkt identisch
        assert_relative_eq!(fan[1].x, fan[fan.len() - 1].x, epsilon = 1e-4);
        assert_relative_eq!(fan[1].y, fan[fan.len() - 1].y, epsilon = 1e-4);
    }

    #[test]
    fn test_circle_periphery_is_open_loop() {
        let ring = circle_periphery(Vec2::ZERO, 2.0, 8);
        assert_eq!(ring.len(), 8);
        assert_relative_eq!(ring[0].x, 2.0);
        assert_relative_eq!(ring[0].y, 0.0);
        // Kein doppelter Schlusspunkt
        assert!((ring[0] - ring[7]).length() > 0.1);
    }

    #[test]
    fn test_rect_corners_ccw() {
        let corners = rect_corners(Vec2::new(0.0, 3.0), Vec2::new(1.0, 2.0));
        assert_eq!(corners.len(), 4);
        assert_relative_eq!(corners[2].x, 1.0);
        assert_relative_eq!(corners[2].y, 5.0);
    }

    #[test]
    fn test_corner_bracket_has_six_points() {
        for quadrant in 0..4 {
            let bracket = corner_bracket(Vec2::ZERO, quadrant, 0.1, 0.3);
            assert_eq!(bracket.len(), 6);
            assert_relative_eq!(bracket[0].x, 0.0);
            // Alle Punkte innerhalb des Klammer-Quadrats
            for v in &bracket {
                assert!(v.x.abs() <= 0.4 + 1e-6 && v.y.abs() <= 0.4 + 1e-6);
            }
        }
    }

    #[test]
    fn test_rect_border_brackets_respect_extend() {
        let brackets = rect_border_brackets(Vec2::ZERO, Vec2::new(2.0, 1.0), 0.2, 0.1, 0.3);
        // Erste Klammer beginnt an der linken unteren Ecke minus extend
        assert_relative_eq!(brackets[0][0].x, -0.2);
        assert_relative_eq!(brackets[0][0].y, -0.2);
        // Dritte Klammer an der rechten oberen Ecke plus extend
        assert_relative_eq!(brackets[2][0].x, 2.2);
        assert_relative_eq!(brackets[2][0].y, 1.2);
    }
}
