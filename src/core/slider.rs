//! Drei-Griff-Range-Slider (links/rechts/aktuell) auf einer 2D-Fläche.
//!
//! Das Widget besitzt drei Werte im Bereich `[min, max]`: `left` und
//! `right` spannen einen Bereich auf, `current` ist frei beweglich.
//! Pointer-Events treiben eine kleine Zustandsmaschine
//! (Idle → Dragging(Griff) → Idle); gezeichnet wird gegen
//! [`PaintSurface`], nie gegen eine konkrete Host-API.

use glam::Vec2;

use super::surface::{Color, PaintSurface};

/// Einer der drei Griffe des Sliders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SliderHandle {
    /// Runder Griff für den aktuellen Wert
    Current,
    /// Keil-Griff für die linke Bereichsgrenze
    Left,
    /// Keil-Griff für die rechte Bereichsgrenze
    Right,
}

impl SliderHandle {
    /// Index in Hover-Arrays (Reihenfolge = Hit-Test-Priorität).
    const fn index(self) -> usize {
        match self {
            SliderHandle::Current => 0,
            SliderHandle::Left => 1,
            SliderHandle::Right => 2,
        }
    }
}

/// Callback bei wertändernden Drags: `(current, left, right)`.
///
/// Ein `Err` wird geloggt und unterdrückt; nachfolgende Listener laufen
/// trotzdem.
pub type ChangeListener = Box<dyn FnMut(f32, f32, f32) -> anyhow::Result<()>>;

/// Farben des Sliders (RGBA).
#[derive(Debug, Clone)]
pub struct SliderStyle {
    /// Füllfarbe von Bar und Griffen
    pub fill_color: Color,
    /// Füllfarbe gehoverter bzw. gezogener Griffe
    pub active_color: Color,
    /// Umriss-Farbe
    pub stroke_color: Color,
    /// Farbe der Führungslinien von Griff zu Bar
    pub guide_color: Color,
    /// Farbe der Wert-Beschriftungen
    pub text_color: Color,
}

impl Default for SliderStyle {
    fn default() -> Self {
        Self {
            fill_color: [0.0, 0.667, 0.667, 1.0],
            active_color: [1.0, 0.4, 0.4, 1.0],
            stroke_color: [0.565, 0.565, 0.565, 1.0],
            guide_color: [0.0, 0.0, 0.0, 1.0],
            text_color: [0.0, 0.0, 0.0, 1.0],
        }
    }
}

/// Konstruktions-Parameter des Sliders.
#[derive(Debug, Clone)]
pub struct SliderConfig {
    /// Untere Bereichsgrenze (wird bei Vertauschung mit `max` getauscht)
    pub min: f32,
    /// Obere Bereichsgrenze
    pub max: f32,
    /// Startwert für `current` (Default: Bereichsmitte)
    pub current: Option<f32>,
    /// Schrittweite; bei `> 1` rasten Werte auf `min + k*step`
    pub step: f32,
    /// Innenabstand `[links, oben, rechts, unten]` in Pixel
    pub padding: [f32; 4],
    /// Höhe der Bar in Pixel
    pub bar_height: f32,
}

impl Default for SliderConfig {
    fn default() -> Self {
        Self {
            min: 0.0,
            max: 100.0,
            current: None,
            step: 1.0,
            padding: [8.0; 4],
            bar_height: 8.0,
        }
    }
}

/// Drei-Griff-Slider mit Pointer-Interaktion und Change-Benachrichtigung.
pub struct RangeSlider {
    size: Vec2,
    min: f32,
    max: f32,
    current: f32,
    left: f32,
    right: f32,
    step: f32,
    padding: [f32; 4],
    bar_height: f32,
    /// Bar-Rechteck in Flächen-Koordinaten (aus size/padding abgeleitet)
    bar_min: Vec2,
    bar_size: Vec2,
    selectable: bool,
    selected: Option<SliderHandle>,
    hover: [bool; 3],
    listeners: Vec<ChangeListener>,
    style: SliderStyle,
    needs_repaint: bool,
}

impl RangeSlider {
    /// Griff-Radius in Pixel.
    pub const HANDLE_RADIUS: f32 = 5.0;
    /// Vertikaler Versatz der Griffe über der Bar.
    pub const HANDLE_OFFSET: f32 = -10.0;
    /// Horizontaler Versatz der Wert-Beschriftung.
    const TEXT_OFFSET_X: f32 = 5.0;
    /// Vertikaler Versatz der Wert-Beschriftung über dem Griff.
    const TEXT_OFFSET_Y: f32 = 10.0;

    /// Erstellt einen Slider für eine Fläche der gegebenen Größe.
    ///
    /// Vertauschte Grenzen (`min > max`) werden stillschweigend korrigiert;
    /// `left` startet bei `min`, `right` bei `max`.
    pub fn new(size: Vec2, config: SliderConfig) -> Self {
        let (min, max) = if config.min > config.max {
            (config.max, config.min)
        } else {
            (config.min, config.max)
        };
        let current = config.current.unwrap_or((max - min) / 2.0 + min);

        let mut slider = Self {
            size,
            min,
            max,
            current,
            left: min,
            right: max,
            step: config.step,
            padding: config.padding,
            bar_height: config.bar_height,
            bar_min: Vec2::ZERO,
            bar_size: Vec2::ZERO,
            selectable: true,
            selected: None,
            hover: [false; 3],
            listeners: Vec::new(),
            style: SliderStyle::default(),
            needs_repaint: false,
        };
        slider.update_bar();
        slider
    }

    /// Leitet das Bar-Rechteck aus Flächengröße und Padding ab.
    fn update_bar(&mut self) {
        self.bar_min = Vec2::new(
            self.padding[0],
            self.size.y - self.padding[3] - self.bar_height,
        );
        self.bar_size = Vec2::new(
            self.size.x - self.padding[0] - self.padding[2],
            self.bar_height,
        );
    }

    // ── Zugriff ─────────────────────────────────────────────────────

    /// Aktueller Wert des runden Griffs.
    pub fn current(&self) -> f32 {
        self.current
    }

    /// Linke Bereichsgrenze.
    pub fn left(&self) -> f32 {
        self.left
    }

    /// Rechte Bereichsgrenze.
    pub fn right(&self) -> f32 {
        self.right
    }

    /// Untere Grenze des Wertebereichs.
    pub fn min(&self) -> f32 {
        self.min
    }

    /// Obere Grenze des Wertebereichs.
    pub fn max(&self) -> f32 {
        self.max
    }

    /// Der gerade gezogene Griff, falls ein Drag aktiv ist.
    pub fn selected_handle(&self) -> Option<SliderHandle> {
        self.selected
    }

    /// Ob Hit-Tests und Drags aktiv sind.
    pub fn selectable(&self) -> bool {
        self.selectable
    }

    /// Hover-Zustand pro Griff in Prioritätsreihenfolge (current, left, right).
    pub fn hover_flags(&self) -> [bool; 3] {
        self.hover
    }

    /// Holt das Repaint-Flag ab und setzt es zurück.
    pub fn take_repaint(&mut self) -> bool {
        std::mem::take(&mut self.needs_repaint)
    }

    // ── Konfiguration ───────────────────────────────────────────────

    /// Passt die Flächengröße an (Bar wird neu abgeleitet).
    pub fn set_size(&mut self, size: Vec2) {
        if self.size != size {
            self.size = size;
            self.update_bar();
            self.needs_repaint = true;
        }
    }

    /// Setzt den Innenabstand und leitet die Bar neu ab.
    pub fn set_padding(&mut self, padding: [f32; 4]) {
        self.padding = padding;
        self.update_bar();
    }

    /// Überschreibt das Bar-Rechteck direkt.
    pub fn set_bar(&mut self, min: Vec2, size: Vec2) {
        self.bar_min = min;
        self.bar_size = size;
    }

    /// Setzt die Farben.
    pub fn set_style(&mut self, style: SliderStyle) {
        self.style = style;
    }

    /// Schaltet Hit-Tests und Drags ab (Rendering bleibt unberührt).
    pub fn set_selectable(&mut self, selectable: bool) {
        self.selectable = selectable;
    }

    /// Registriert einen Change-Listener (Aufruf in Registrierungs-Reihenfolge).
    ///
    /// Listener feuern nur bei drag-getriebenen Wertänderungen, nicht bei
    /// programmatischen Settern.
    pub fn add_change_listener<F>(&mut self, listener: F)
    where
        F: FnMut(f32, f32, f32) -> anyhow::Result<()> + 'static,
    {
        self.listeners.push(Box::new(listener));
    }

    /// Initiales Zeichnen anstoßen.
    pub fn load(&mut self) {
        self.needs_repaint = true;
    }

    // ── Wert-Modell ─────────────────────────────────────────────────

    /// Rastet einen Wert auf das Schrittraster `min + k*step` ein.
    ///
    /// Das nähere Vielfache gewinnt; exakte Mittelpunkte runden auf.
    /// Bei `step <= 1` bleibt der Wert unverändert.
    pub fn fix_value_with_step(&self, value: f32) -> f32 {
        if self.step <= 1.0 {
            return value;
        }
        let mut snapped = ((value - self.min) / self.step).trunc() * self.step + self.min;
        if snapped != value && value - snapped >= snapped + self.step - value {
            snapped += self.step;
        }
        snapped
    }

    /// Klemmt und rastet einen Rohwert.
    ///
    /// Liegt `max` exakt auf einer Rastermitte, würde das Aufrunden den
    /// Bereich verlassen; deshalb wird nach dem Rasten erneut geklemmt.
    fn normalize(&self, value: f32) -> f32 {
        self.fix_value_with_step(value.clamp(self.min, self.max))
            .clamp(self.min, self.max)
    }

    /// Setzt `current` (klemmt + rastet). Gibt zurück, ob sich der Wert
    /// geändert hat. Feuert KEINE Change-Listener.
    pub fn set_current(&mut self, value: f32) -> bool {
        let value = self.normalize(value);
        let changed = value != self.current;
        self.current = value;
        self.needs_repaint = true;
        changed
    }

    /// Setzt `left` (klemmt + rastet). Gibt zurück, ob sich der Wert
    /// geändert hat. Feuert KEINE Change-Listener.
    pub fn set_left(&mut self, value: f32) -> bool {
        let value = self.normalize(value);
        let changed = value != self.left;
        self.left = value;
        self.needs_repaint = true;
        changed
    }

    /// Setzt `right` (klemmt + rastet). Gibt zurück, ob sich der Wert
    /// geändert hat. Feuert KEINE Change-Listener.
    pub fn set_right(&mut self, value: f32) -> bool {
        let value = self.normalize(value);
        let changed = value != self.right;
        self.right = value;
        self.needs_repaint = true;
        changed
    }

    // ── Bar-Interpolation ───────────────────────────────────────────

    /// Screen-X eines Werts auf der Bar (auf ganze Pixel gestutzt).
    pub fn handle_screen_x(&self, value: f32) -> f32 {
        let span = self.max - self.min;
        if span <= 0.0 {
            return self.bar_min.x;
        }
        (self.bar_min.x + self.bar_size.x * (value - self.min) / span).trunc()
    }

    /// Screen-Y der Griff-Zentren (oberhalb der Bar).
    pub fn handle_screen_y(&self) -> f32 {
        self.bar_min.y + Self::HANDLE_OFFSET
    }

    /// Inverse Bar-Interpolation: Screen-X → geklemmter ganzzahliger Wert.
    fn value_at_x(&self, x: f32) -> f32 {
        if self.bar_size.x <= 0.0 {
            return self.min;
        }
        let raw = self.min + (self.max - self.min) * (x - self.bar_min.x) / self.bar_size.x;
        raw.trunc().clamp(self.min, self.max)
    }

    /// Hit-Test eines Punkts gegen einen Griff-Mittelpunkt.
    fn hits(&self, pos: Vec2, handle_x: f32) -> bool {
        let center = Vec2::new(handle_x, self.handle_screen_y());
        (pos - center).length() < Self::HANDLE_RADIUS + 1.0
    }

    /// Hit-Test aller drei Griffe in Prioritätsreihenfolge.
    fn hit_test(&self, pos: Vec2) -> Option<SliderHandle> {
        if self.hits(pos, self.handle_screen_x(self.current)) {
            Some(SliderHandle::Current)
        } else if self.hits(pos, self.handle_screen_x(self.left)) {
            Some(SliderHandle::Left)
        } else if self.hits(pos, self.handle_screen_x(self.right)) {
            Some(SliderHandle::Right)
        } else {
            None
        }
    }

    // ── Pointer-Zustandsmaschine ────────────────────────────────────

    /// Pointer-Down: startet ggf. einen Drag auf dem getroffenen Griff.
    ///
    /// `Current` hat Vorrang vor `Left` vor `Right`, falls Griffe
    /// überlappen.
    pub fn on_pointer_down(&mut self, pos: Vec2) {
        self.selected = None;
        if !self.selectable {
            return;
        }

        self.selected = self.hit_test(pos);
        if self.selected.is_some() {
            self.hover = [false; 3];
        }
        self.needs_repaint = true;
    }

    /// Pointer-Move: zieht den aktiven Griff oder aktualisiert Hover-Flags.
    ///
    /// Überholt `left` beim Ziehen `right` (oder umgekehrt), werden die
    /// Werte getauscht und der aktive Griff wechselt die Rolle — der
    /// Finger folgt weiter dem geometrisch selben Griff.
    pub fn on_pointer_move(&mut self, pos: Vec2) {
        if !self.selectable {
            self.selected = None;
            return;
        }

        if let Some(handle) = self.selected {
            let value = self.value_at_x(pos.x);
            let changed = match handle {
                SliderHandle::Current => self.set_current(value),
                SliderHandle::Left => {
                    let changed = self.set_left(value);
                    if self.left > self.right {
                        std::mem::swap(&mut self.left, &mut self.right);
                        self.selected = Some(SliderHandle::Right);
                    }
                    changed
                }
                SliderHandle::Right => {
                    let changed = self.set_right(value);
                    if self.right < self.left {
                        std::mem::swap(&mut self.left, &mut self.right);
                        self.selected = Some(SliderHandle::Left);
                    }
                    changed
                }
            };
            if changed {
                self.notify_listeners();
            }
            return;
        }

        let flags = match self.hit_test(pos) {
            Some(handle) => {
                let mut flags = [false; 3];
                flags[handle.index()] = true;
                flags
            }
            None => [false; 3],
        };
        if flags != self.hover {
            self.hover = flags;
            self.needs_repaint = true;
        }
    }

    /// Pointer-Up: beendet den Drag (Move-then-Release, Hover wird neu
    /// berechnet).
    pub fn on_pointer_up(&mut self, pos: Vec2) {
        self.selected = None;
        self.on_pointer_move(pos);
        if self.hover == [false; 3] {
            self.needs_repaint = true;
        }
    }

    /// Ruft alle Listener mit `(current, left, right)` auf.
    /// Fehler einzelner Listener werden geloggt und unterdrückt.
    fn notify_listeners(&mut self) {
        let (current, left, right) = (self.current, self.left, self.right);
        for listener in &mut self.listeners {
            if let Err(e) = listener(current, left, right) {
                log::warn!("Change-Listener fehlgeschlagen: {e:#}");
            }
        }
    }

    // ── Rendering ───────────────────────────────────────────────────

    /// Zeichnet den Slider vollständig aus dem aktuellen Zustand.
    ///
    /// Reine Funktion des Zustands: jederzeit aufrufbar, auch direkt nach
    /// programmatischen Settern.
    pub fn paint(&self, surface: &mut dyn PaintSurface) {
        surface.clear();

        // Bar mit Innenfüllung und Umriss
        surface.fill_rect(
            self.bar_min + Vec2::ONE,
            self.bar_size - Vec2::splat(2.0),
            self.style.fill_color,
        );
        surface.stroke_rect(self.bar_min, self.bar_size, self.style.stroke_color);

        let y = self.handle_screen_y();
        self.paint_wedge(surface, self.handle_screen_x(self.left), y, SliderHandle::Left);
        self.paint_wedge(surface, self.handle_screen_x(self.right), y, SliderHandle::Right);
        self.paint_current(surface, self.handle_screen_x(self.current), y);

        for (value, x) in [
            (self.left, self.handle_screen_x(self.left)),
            (self.right, self.handle_screen_x(self.right)),
            (self.current, self.handle_screen_x(self.current)),
        ] {
            surface.text(
                Vec2::new(x - Self::TEXT_OFFSET_X, y - Self::TEXT_OFFSET_Y),
                &format!("{value}"),
                self.style.text_color,
            );
        }
    }

    /// Füllfarbe eines Griffs abhängig von Hover/Drag.
    fn handle_fill(&self, handle: SliderHandle) -> Color {
        if self.selected == Some(handle) || self.hover[handle.index()] {
            self.style.active_color
        } else {
            self.style.fill_color
        }
    }

    /// Keil-Griff für `Left`/`Right`, Spitze zeigt nach innen.
    fn paint_wedge(&self, surface: &mut dyn PaintSurface, x: f32, y: f32, handle: SliderHandle) {
        let dx = Self::HANDLE_RADIUS + 1.0;
        let tip = if handle == SliderHandle::Right {
            Vec2::new(x + dx, y)
        } else {
            Vec2::new(x - dx, y)
        };
        let points = [Vec2::new(x, y - dx), Vec2::new(x, y + dx), tip];
        surface.polygon(&points, self.handle_fill(handle), self.style.stroke_color);

        surface.line(
            Vec2::new(x, y + dx),
            Vec2::new(x, self.bar_min.y + self.bar_size.y),
            self.style.guide_color,
        );
    }

    /// Runder Griff für `Current` samt Führungslinie.
    fn paint_current(&self, surface: &mut dyn PaintSurface, x: f32, y: f32) {
        surface.circle(
            Vec2::new(x, y),
            Self::HANDLE_RADIUS,
            self.handle_fill(SliderHandle::Current),
            self.style.stroke_color,
        );
        surface.line(
            Vec2::new(x, y + Self::HANDLE_RADIUS),
            Vec2::new(x, self.bar_min.y + self.bar_size.y),
            self.style.guide_color,
        );
    }
}
