//! Zeichenfläche als Capability-Interface.
//!
//! Widgets zeichnen gegen [`PaintSurface`] statt gegen eine konkrete
//! Host-API. Die egui-Implementierung lebt in `ui::paint`; für Tests und
//! Benchmarks gibt es [`RecordingSurface`], die alle Draw-Operationen
//! aufzeichnet.

use glam::Vec2;

/// RGBA-Farbe, Komponenten in `[0, 1]`.
pub type Color = [f32; 4];

/// Primitive Zeichenoperationen, die ein Host bereitstellen muss.
pub trait PaintSurface {
    /// Leert die gesamte Fläche.
    fn clear(&mut self);
    /// Gefülltes Rechteck.
    fn fill_rect(&mut self, min: Vec2, size: Vec2, color: Color);
    /// Rechteck-Umriss.
    fn stroke_rect(&mut self, min: Vec2, size: Vec2, color: Color);
    /// Gefüllter Kreis mit Umriss.
    fn circle(&mut self, center: Vec2, radius: f32, fill: Color, stroke: Color);
    /// Gefülltes konvexes Polygon mit Umriss.
    fn polygon(&mut self, points: &[Vec2], fill: Color, stroke: Color);
    /// Gerade Linie.
    fn line(&mut self, from: Vec2, to: Vec2, color: Color);
    /// Text, linksbündig an `pos` verankert.
    fn text(&mut self, pos: Vec2, text: &str, color: Color);
}

/// Eine aufgezeichnete Draw-Operation.
#[derive(Debug, Clone, PartialEq)]
pub enum PaintOp {
    Clear,
    FillRect { min: Vec2, size: Vec2, color: Color },
    StrokeRect { min: Vec2, size: Vec2, color: Color },
    Circle { center: Vec2, radius: f32, fill: Color, stroke: Color },
    Polygon { points: Vec<Vec2>, fill: Color, stroke: Color },
    Line { from: Vec2, to: Vec2, color: Color },
    Text { pos: Vec2, text: String, color: Color },
}

/// Zeichenfläche, die Operationen nur aufzeichnet (für Tests/Benches).
#[derive(Debug, Default)]
pub struct RecordingSurface {
    ops: Vec<PaintOp>,
}

impl RecordingSurface {
    /// Erstellt eine leere Aufzeichnungsfläche.
    pub fn new() -> Self {
        Self::default()
    }

    /// Alle bisher aufgezeichneten Operationen in Reihenfolge.
    pub fn ops(&self) -> &[PaintOp] {
        &self.ops
    }

    /// Verwirft alle aufgezeichneten Operationen.
    pub fn reset(&mut self) {
        self.ops.clear();
    }

    /// Alle gezeichneten Text-Inhalte in Reihenfolge.
    pub fn texts(&self) -> Vec<&str> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                PaintOp::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }
}

impl PaintSurface for RecordingSurface {
    fn clear(&mut self) {
        self.ops.push(PaintOp::Clear);
    }

    fn fill_rect(&mut self, min: Vec2, size: Vec2, color: Color) {
        self.ops.push(PaintOp::FillRect { min, size, color });
    }

    fn stroke_rect(&mut self, min: Vec2, size: Vec2, color: Color) {
        self.ops.push(PaintOp::StrokeRect { min, size, color });
    }

    fn circle(&mut self, center: Vec2, radius: f32, fill: Color, stroke: Color) {
        self.ops.push(PaintOp::Circle {
            center,
            radius,
            fill,
            stroke,
        });
    }

    fn polygon(&mut self, points: &[Vec2], fill: Color, stroke: Color) {
        self.ops.push(PaintOp::Polygon {
            points: points.to_vec(),
            fill,
            stroke,
        });
    }

    fn line(&mut self, from: Vec2, to: Vec2, color: Color) {
        self.ops.push(PaintOp::Line { from, to, color });
    }

    fn text(&mut self, pos: Vec2, text: &str, color: Color) {
        self.ops.push(PaintOp::Text {
            pos,
            text: text.to_string(),
            color,
        });
    }
}
