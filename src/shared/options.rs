//! Zentrale Konfiguration für den Shape-Canvas.
//!
//! `EditorOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use serde::{Deserialize, Serialize};

use crate::core::SliderStyle;

// ── Szene ───────────────────────────────────────────────────────────

/// Hintergrundfarbe der Canvas (RGBA: Schwarz).
pub const CLEAR_COLOR: [f32; 4] = [0.0, 0.0, 0.0, 1.0];
/// Standard-Farbe der Primitiven (RGBA: Hellgrau).
pub const SHAPE_COLOR: [f32; 4] = [0.75, 0.75, 0.75, 1.0];
/// Farbe des Selektionsrahmens (RGBA: Rot).
pub const SELECTION_BORDER_COLOR: [f32; 4] = [1.0, 0.0, 0.0, 1.0];
/// Farbe der Form-Beschriftungen (RGBA: Rot).
pub const LABEL_COLOR: [f32; 4] = [1.0, 0.0, 0.0, 1.0];
/// Anzahl der Kreissegmente beim Zeichnen.
pub const CIRCLE_SLICES: usize = 60;
/// Blink-Periode des Selektionsrahmens in Sekunden.
pub const FLICKER_PERIOD: f32 = 0.7;
/// Klammer-Dicke des Selektionsrahmens in Welt-Einheiten.
pub const BORDER_BRACKET_SIZE: f32 = 0.1;
/// Schenkellänge der Rahmen-Klammern in Welt-Einheiten.
pub const BORDER_BRACKET_LENGTH: f32 = 0.3;
/// Rahmen-Abstand um Rechtecke in Welt-Einheiten.
pub const BORDER_EXTEND_RECT: f32 = 0.2;

// ── Slider ──────────────────────────────────────────────────────────

/// Höhe des Slider-Panels in Pixel.
pub const SLIDER_PANEL_HEIGHT: f32 = 64.0;
/// Füllfarbe von Bar und Griffen (RGBA: Cyan).
pub const SLIDER_FILL_COLOR: [f32; 4] = [0.0, 0.667, 0.667, 1.0];
/// Farbe gehoverter/gezogener Griffe (RGBA: Hellrot).
pub const SLIDER_ACTIVE_COLOR: [f32; 4] = [1.0, 0.4, 0.4, 1.0];
/// Umriss-Farbe des Sliders (RGBA: Grau).
pub const SLIDER_STROKE_COLOR: [f32; 4] = [0.565, 0.565, 0.565, 1.0];
/// Farbe der Führungslinien (RGBA: Schwarz).
pub const SLIDER_GUIDE_COLOR: [f32; 4] = [0.0, 0.0, 0.0, 1.0];
/// Farbe der Wert-Beschriftungen (RGBA: Schwarz).
pub const SLIDER_TEXT_COLOR: [f32; 4] = [0.0, 0.0, 0.0, 1.0];

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Canvas-Optionen.
/// Wird als `shape_canvas.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EditorOptions {
    // ── Szene ───────────────────────────────────────────────────
    /// Standard-Farbe der Primitiven (RGBA)
    pub shape_color: [f32; 4],
    /// Farbe des Selektionsrahmens
    pub selection_border_color: [f32; 4],
    /// Farbe der Form-Beschriftungen
    pub label_color: [f32; 4],
    /// Selektionsrahmen blinken lassen
    #[serde(default)]
    pub flicker_selection: bool,

    // ── Slider ──────────────────────────────────────────────────
    /// Füllfarbe von Bar und Griffen
    pub slider_fill_color: [f32; 4],
    /// Farbe gehoverter/gezogener Griffe
    pub slider_active_color: [f32; 4],
    /// Umriss-Farbe des Sliders
    pub slider_stroke_color: [f32; 4],
    /// Farbe der Führungslinien
    pub slider_guide_color: [f32; 4],
    /// Farbe der Wert-Beschriftungen
    pub slider_text_color: [f32; 4],
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            shape_color: SHAPE_COLOR,
            selection_border_color: SELECTION_BORDER_COLOR,
            label_color: LABEL_COLOR,
            flicker_selection: false,

            slider_fill_color: SLIDER_FILL_COLOR,
            slider_active_color: SLIDER_ACTIVE_COLOR,
            slider_stroke_color: SLIDER_STROKE_COLOR,
            slider_guide_color: SLIDER_GUIDE_COLOR,
            slider_text_color: SLIDER_TEXT_COLOR,
        }
    }
}

impl EditorOptions {
    /// Baut den Slider-Style aus den konfigurierten Farben.
    pub fn slider_style(&self) -> SliderStyle {
        SliderStyle {
            fill_color: self.slider_fill_color,
            active_color: self.slider_active_color,
            stroke_color: self.slider_stroke_color,
            guide_color: self.slider_guide_color,
            text_color: self.slider_text_color,
        }
    }

    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("shape_canvas"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("shape_canvas.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toml_round_trip() {
        let options = EditorOptions::default();
        let toml_str = toml::to_string_pretty(&options).expect("Serialisierung fehlgeschlagen");
        let back: EditorOptions = toml::from_str(&toml_str).expect("Parsen fehlgeschlagen");
        assert_eq!(back.shape_color, options.shape_color);
        assert_eq!(back.slider_fill_color, options.slider_fill_color);
    }

    #[test]
    fn test_missing_flicker_field_defaults_false() {
        let toml_str = toml::to_string_pretty(&EditorOptions::default()).unwrap();
        let without_flicker = toml_str
            .lines()
            .filter(|line| !line.starts_with("flicker_selection"))
            .collect::<Vec<_>>()
            .join("\n");
        let back: EditorOptions = toml::from_str(&without_flicker).expect("Parsen fehlgeschlagen");
        assert!(!back.flicker_selection);
    }
}
