//! egui-Implementierung des `PaintSurface`-Interfaces.
//!
//! Übersetzt die abstrakten Draw-Operationen des Cores in Aufrufe auf
//! `egui::Painter`. Koordinaten aus dem Core sind lokal zum Widget-Rechteck.

use glam::Vec2;

use crate::core::{Color, PaintSurface};

/// Konvertiert eine RGBA-Farbe des Cores in `egui::Color32`.
pub(crate) fn to_color32(color: Color) -> egui::Color32 {
    egui::Color32::from_rgba_unmultiplied(
        (color[0] * 255.0).round() as u8,
        (color[1] * 255.0).round() as u8,
        (color[2] * 255.0).round() as u8,
        (color[3] * 255.0).round() as u8,
    )
}

/// Zeichenfläche über einem egui-Painter und einem Ziel-Rechteck.
pub struct EguiSurface<'a> {
    painter: &'a egui::Painter,
    rect: egui::Rect,
    clear_color: Color,
}

impl<'a> EguiSurface<'a> {
    /// Erstellt eine Fläche, die in `rect` zeichnet.
    pub fn new(painter: &'a egui::Painter, rect: egui::Rect, clear_color: Color) -> Self {
        Self {
            painter,
            rect,
            clear_color,
        }
    }

    /// Lokale Core-Koordinate → absolute egui-Position.
    fn pos(&self, p: Vec2) -> egui::Pos2 {
        self.rect.min + egui::vec2(p.x, p.y)
    }

    fn stroke(color: Color) -> egui::Stroke {
        egui::Stroke::new(1.0, to_color32(color))
    }
}

impl PaintSurface for EguiSurface<'_> {
    fn clear(&mut self) {
        self.painter
            .rect_filled(self.rect, 0.0, to_color32(self.clear_color));
    }

    fn fill_rect(&mut self, min: Vec2, size: Vec2, color: Color) {
        let rect = egui::Rect::from_min_size(self.pos(min), egui::vec2(size.x, size.y));
        self.painter.rect_filled(rect, 0.0, to_color32(color));
    }

    fn stroke_rect(&mut self, min: Vec2, size: Vec2, color: Color) {
        let rect = egui::Rect::from_min_size(self.pos(min), egui::vec2(size.x, size.y));
        self.painter
            .rect_stroke(rect, 0.0, Self::stroke(color), egui::StrokeKind::Inside);
    }

    fn circle(&mut self, center: Vec2, radius: f32, fill: Color, stroke: Color) {
        self.painter
            .circle(self.pos(center), radius, to_color32(fill), Self::stroke(stroke));
    }

    fn polygon(&mut self, points: &[Vec2], fill: Color, stroke: Color) {
        let points: Vec<egui::Pos2> = points.iter().map(|p| self.pos(*p)).collect();
        self.painter.add(egui::Shape::convex_polygon(
            points,
            to_color32(fill),
            Self::stroke(stroke),
        ));
    }

    fn line(&mut self, from: Vec2, to: Vec2, color: Color) {
        self.painter
            .line_segment([self.pos(from), self.pos(to)], Self::stroke(color));
    }

    fn text(&mut self, pos: Vec2, text: &str, color: Color) {
        self.painter.text(
            self.pos(pos),
            egui::Align2::LEFT_BOTTOM,
            text,
            egui::FontId::proportional(12.0),
            to_color32(color),
        );
    }
}
