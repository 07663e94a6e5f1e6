//! Szene mit 2D-Primitiven und Klick-Selektion.
//!
//! Explizite Szene/Selektions-Instanz statt globalem Zustand: mehrere
//! unabhängige Canvases können je eine eigene [`Scene`] halten. Picking
//! arbeitet auf Welt-Koordinaten (Konvertierung über `core::Projection`).

use glam::Vec2;

/// Geometrie eines Primitivs in Welt-Koordinaten.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    /// Kreis um `center`
    Circle { center: Vec2, radius: f32 },
    /// Achsenparalleles Rechteck ab `min` (linke untere Ecke in Welt-Y)
    Rect { min: Vec2, size: Vec2 },
}

impl Shape {
    /// Prüft, ob ein Weltpunkt innerhalb der Form liegt.
    ///
    /// Kreis: euklidischer Abstand zum Zentrum; Rechteck: AABB-Test
    /// (Ränder einschließlich).
    pub fn contains(&self, point: Vec2) -> bool {
        match self {
            Shape::Circle { center, radius } => (point - *center).length() <= *radius,
            Shape::Rect { min, size } => {
                let max = *min + *size;
                point.x >= min.x && point.x <= max.x && point.y >= min.y && point.y <= max.y
            }
        }
    }

    /// Referenzpunkt für die Label-Platzierung (Kreiszentrum bzw. Rechteckmitte).
    pub fn label_anchor(&self) -> Vec2 {
        match self {
            Shape::Circle { center, .. } => *center,
            Shape::Rect { min, size } => *min + *size / 2.0,
        }
    }
}

/// Instanz einer Form in der Szene mit Selektions-Zustand.
#[derive(Debug, Clone)]
pub struct ShapeInstance {
    /// Geometrie
    pub shape: Shape,
    /// Gefüllt (Triangle-Fan) oder nur Umriss (Line-Loop) zeichnen
    pub fill: bool,
    /// Ob die Form per Klick selektierbar ist
    pub selectable: bool,
    /// Aktueller Selektions-Zustand
    pub selected: bool,
    /// Selektionsrahmen blinken lassen (0.7-s-Takt)
    pub flicker: bool,
    /// Beschriftung über der Form
    pub label: String,
}

impl ShapeInstance {
    /// Erstellt eine gefüllte, selektierbare Kreis-Instanz.
    pub fn circle(center: Vec2, radius: f32) -> Self {
        Self {
            shape: Shape::Circle { center, radius },
            fill: true,
            selectable: true,
            selected: false,
            flicker: false,
            label: format!("[{}, {},{}]", center.x, center.y, radius),
        }
    }

    /// Erstellt eine gefüllte, selektierbare Rechteck-Instanz.
    pub fn rect(min: Vec2, size: Vec2) -> Self {
        Self {
            shape: Shape::Rect { min, size },
            fill: true,
            selectable: true,
            selected: false,
            flicker: false,
            label: format!("[{},{},{},{}]", min.x, min.y, size.x, size.y),
        }
    }

    /// Schaltet das Füllen aus (nur Umriss).
    pub fn outline_only(mut self) -> Self {
        self.fill = false;
        self
    }
}

/// Formliste plus Selektions-Kontext einer Canvas.
#[derive(Debug, Clone, Default)]
pub struct Scene {
    /// Formen in Einfüge-Reihenfolge (bestimmt Pick-Priorität)
    pub shapes: Vec<ShapeInstance>,
    /// Index der aktuell selektierten Form
    pub selected: Option<usize>,
}

impl Scene {
    /// Erstellt eine leere Szene.
    pub fn new() -> Self {
        Self::default()
    }

    /// Erstellt die Demo-Szene: zwei Kreise und ein Rechteck.
    pub fn demo() -> Self {
        let mut scene = Self::new();
        scene.shapes.push(ShapeInstance::circle(Vec2::ZERO, 1.0));
        scene
            .shapes
            .push(ShapeInstance::circle(Vec2::new(-3.0, 0.0), 1.0));
        scene
            .shapes
            .push(ShapeInstance::rect(Vec2::new(0.0, 3.0), Vec2::ONE));
        scene
    }

    /// Selektiert die erste Form unter dem Weltpunkt.
    ///
    /// Formen werden in Einfüge-Reihenfolge getestet; nicht selektierbare
    /// Formen werden übersprungen. Bei einem Treffer wird die vorherige
    /// Selektion aufgehoben. Ein Fehlschlag lässt die Selektion unverändert.
    pub fn pick(&mut self, world_pos: Vec2) -> Option<usize> {
        let hit = self
            .shapes
            .iter()
            .position(|inst| inst.selectable && inst.shape.contains(world_pos))?;

        if let Some(previous) = self.selected {
            if previous != hit {
                self.shapes[previous].selected = false;
            }
        }
        self.shapes[hit].selected = true;
        self.selected = Some(hit);
        Some(hit)
    }

    /// Hebt die aktuelle Selektion auf.
    pub fn clear_selection(&mut self) {
        if let Some(index) = self.selected.take() {
            self.shapes[index].selected = false;
        }
    }

    /// Die aktuell selektierte Instanz, falls vorhanden.
    pub fn selected_instance(&self) -> Option<&ShapeInstance> {
        self.selected.map(|i| &self.shapes[i])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_circle_contains_boundary() {
        let shape = Shape::Circle {
            center: Vec2::ZERO,
            radius: 1.0,
        };
        assert!(shape.contains(Vec2::new(1.0, 0.0)));
        assert!(!shape.contains(Vec2::new(1.001, 0.0)));
    }

    #[test]
    fn test_rect_contains() {
        let shape = Shape::Rect {
            min: Vec2::new(0.0, 3.0),
            size: Vec2::ONE,
        };
        assert!(shape.contains(Vec2::new(0.5, 3.5)));
        assert!(shape.contains(Vec2::new(0.0, 3.0)));
        assert!(!shape.contains(Vec2::new(0.5, 2.9)));
    }

    #[test]
    fn test_pick_first_hit_wins() {
        let mut scene = Scene::new();
        scene.shapes.push(ShapeInstance::circle(Vec2::ZERO, 1.0));
        scene.shapes.push(ShapeInstance::circle(Vec2::ZERO, 2.0));

        assert_eq!(scene.pick(Vec2::new(0.5, 0.0)), Some(0));
        assert!(scene.shapes[0].selected);
        assert!(!scene.shapes[1].selected);
    }

    #[test]
    fn test_pick_switches_selection() {
        let mut scene = Scene::demo();
        assert_eq!(scene.pick(Vec2::ZERO), Some(0));
        assert_eq!(scene.pick(Vec2::new(-3.0, 0.0)), Some(1));
        assert!(!scene.shapes[0].selected);
        assert!(scene.shapes[1].selected);
        assert_eq!(scene.selected, Some(1));
    }

    #[test]
    fn test_pick_miss_keeps_selection() {
        let mut scene = Scene::demo();
        scene.pick(Vec2::ZERO);
        assert_eq!(scene.pick(Vec2::new(100.0, 100.0)), None);
        assert_eq!(scene.selected, Some(0));
        assert!(scene.shapes[0].selected);
    }

    #[test]
    fn test_pick_skips_unselectable() {
        let mut scene = Scene::new();
        let mut front = ShapeInstance::circle(Vec2::ZERO, 1.0);
        front.selectable = false;
        scene.shapes.push(front);
        scene.shapes.push(ShapeInstance::circle(Vec2::ZERO, 2.0));

        assert_eq!(scene.pick(Vec2::ZERO), Some(1));
    }

    #[test]
    fn test_labels_match_construction() {
        let circle = ShapeInstance::circle(Vec2::new(-3.0, 0.0), 1.0);
        assert_eq!(circle.label, "[-3, 0,1]");
        let rect = ShapeInstance::rect(Vec2::new(0.0, 3.0), Vec2::ONE);
        assert_eq!(rect.label, "[0,3,1,1]");
    }
}
