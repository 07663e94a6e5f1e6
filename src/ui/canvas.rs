//! Szenen-Painting im Viewport.
//!
//! Projiziert Welt-Geometrie über [`Projection`] auf Bildschirmkoordinaten
//! und zeichnet Primitive, Labels und den (optional blinkenden)
//! Selektionsrahmen direkt über den egui-Painter.

use glam::{Vec2, Vec3};

use crate::core::{Projection, Scene, Shape, ShapeInstance};
use crate::shared::geometry;
use crate::shared::options::{self, EditorOptions};
use crate::ui::paint::to_color32;

/// Blink-Zustand des Selektionsrahmens.
///
/// Die Sichtbarkeit kippt in festem Takt ([`options::FLICKER_PERIOD`]);
/// der Host treibt den Zustand pro Frame über [`FlickerState::advance`].
pub struct FlickerState {
    elapsed: f32,
    visible: bool,
}

impl Default for FlickerState {
    fn default() -> Self {
        Self {
            elapsed: 0.0,
            visible: true,
        }
    }
}

impl FlickerState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Treibt den Takt um `dt` Sekunden weiter.
    pub fn advance(&mut self, dt: f32) {
        self.elapsed += dt;
        while self.elapsed >= options::FLICKER_PERIOD {
            self.elapsed -= options::FLICKER_PERIOD;
            self.visible = !self.visible;
        }
    }

    /// Ob der Rahmen in diesem Frame sichtbar ist.
    pub fn visible(&self) -> bool {
        self.visible
    }
}

/// Zeichnet die komplette Szene in das Viewport-Rechteck.
///
/// `flicker_visible` steuert, ob blinkende Selektionsrahmen in diesem
/// Frame gezeichnet werden; nicht-blinkende Rahmen sind immer sichtbar.
pub fn paint_scene(
    painter: &egui::Painter,
    rect: egui::Rect,
    scene: &Scene,
    projection: &Projection,
    opts: &EditorOptions,
    flicker_visible: bool,
) {
    painter.rect_filled(rect, 0.0, to_color32(options::CLEAR_COLOR));

    let project = |world: Vec2| -> egui::Pos2 {
        let screen = projection.world_to_screen(Vec3::new(world.x, world.y, projection.depth_offset));
        rect.min + egui::vec2(screen.x, screen.y)
    };

    for instance in &scene.shapes {
        paint_instance(painter, instance, opts, &project);
        if instance.selected && (!instance.flicker || flicker_visible) {
            paint_selection_border(painter, &instance.shape, opts, &project);
        }
    }
}

fn paint_instance(
    painter: &egui::Painter,
    instance: &ShapeInstance,
    opts: &EditorOptions,
    project: &impl Fn(Vec2) -> egui::Pos2,
) {
    let shape_color = to_color32(opts.shape_color);
    let outline: Vec<egui::Pos2> = match &instance.shape {
        Shape::Circle { center, radius } => {
            geometry::circle_periphery(*center, *radius, options::CIRCLE_SLICES)
                .into_iter()
                .map(project)
                .collect()
        }
        Shape::Rect { min, size } => geometry::rect_corners(*min, *size)
            .into_iter()
            .map(project)
            .collect(),
    };

    if instance.fill {
        painter.add(egui::Shape::convex_polygon(
            outline,
            shape_color,
            egui::Stroke::NONE,
        ));
    } else {
        painter.add(egui::Shape::closed_line(
            outline,
            egui::Stroke::new(1.0, shape_color),
        ));
    }

    // Kreise tragen ihr Label nur in der gefüllten Variante
    let show_label = instance.fill || matches!(instance.shape, Shape::Rect { .. });
    if show_label && !instance.label.is_empty() {
        painter.text(
            project(instance.shape.label_anchor()),
            egui::Align2::LEFT_BOTTOM,
            &instance.label,
            egui::FontId::proportional(12.0),
            to_color32(opts.label_color),
        );
    }
}

/// Selektionsrahmen: vier L-förmige Eckklammern um die Bounding-Box.
fn paint_selection_border(
    painter: &egui::Painter,
    shape: &Shape,
    opts: &EditorOptions,
    project: &impl Fn(Vec2) -> egui::Pos2,
) {
    let (min, size, extend) = match shape {
        Shape::Circle { center, radius } => (
            *center - Vec2::splat(*radius),
            Vec2::splat(2.0 * radius),
            0.0,
        ),
        Shape::Rect { min, size } => (*min, *size, options::BORDER_EXTEND_RECT),
    };

    let color = to_color32(opts.selection_border_color);
    let brackets = geometry::rect_border_brackets(
        min,
        size,
        extend,
        options::BORDER_BRACKET_SIZE,
        options::BORDER_BRACKET_LENGTH,
    );
    for bracket in &brackets {
        let pts: Vec<egui::Pos2> = bracket.iter().copied().map(project).collect();
        // L-Form als zwei konvexe Quads (horizontaler und vertikaler Schenkel)
        for quad in [[0, 1, 2, 3], [0, 3, 4, 5]] {
            painter.add(egui::Shape::convex_polygon(
                quad.iter().map(|&i| pts[i]).collect(),
                color,
                egui::Stroke::NONE,
            ));
        }
    }
}
