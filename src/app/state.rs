//! Application State — zentrale Datenhaltung.

use glam::Vec2;

use super::CommandLog;
use crate::core::{Projection, RangeSlider, Scene, SliderConfig};
use crate::shared::options::SLIDER_PANEL_HEIGHT;
use crate::shared::EditorOptions;

/// View-bezogener Anwendungszustand
#[derive(Debug, Clone)]
pub struct ViewState {
    /// Projektion der Canvas (Viewport + Depth-Offset)
    pub projection: Projection,
}

impl ViewState {
    /// Erstellt den Standard-View-Zustand.
    pub fn new() -> Self {
        Self {
            projection: Projection::default(),
        }
    }
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new()
    }
}

/// UI-bezogener Anwendungszustand
#[derive(Debug, Default)]
pub struct UiState {
    /// Statusnachricht (z.B. letzte Selektion)
    pub status_message: Option<String>,
}

impl UiState {
    /// Erstellt den Standard-UI-Zustand.
    pub fn new() -> Self {
        Self {
            status_message: None,
        }
    }
}

/// Hauptzustand der Anwendung
pub struct AppState {
    /// Szene mit Formen und Selektion
    pub scene: Scene,
    /// View-State
    pub view: ViewState,
    /// Drei-Griff-Slider im unteren Panel
    pub slider: RangeSlider,
    /// UI-State
    pub ui: UiState,
    /// Laufzeit-Optionen (Farben, Blink-Verhalten)
    pub options: EditorOptions,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    /// Signalisiert dem Host (eframe), die Anwendung kontrolliert zu beenden
    pub should_exit: bool,
}

impl AppState {
    /// Erstellt den App-State mit Demo-Szene und Standard-Slider.
    pub fn new() -> Self {
        let options = EditorOptions::default();
        let mut slider = RangeSlider::new(
            Vec2::new(1200.0, SLIDER_PANEL_HEIGHT),
            SliderConfig::default(),
        );
        slider.set_style(options.slider_style());

        Self {
            scene: Scene::demo(),
            view: ViewState::new(),
            slider,
            ui: UiState::new(),
            options,
            command_log: CommandLog::new(),
            should_exit: false,
        }
    }

    /// Gibt die Anzahl der Formen zurück (für UI-Anzeige)
    pub fn shape_count(&self) -> usize {
        self.scene.shapes.len()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
