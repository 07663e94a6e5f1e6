//! AppIntent- und AppCommand-Enums für den Intent/Command-Datenfluss.

/// App-Intent und App-Command Events.
/// Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.
#[derive(Debug, Clone)]
pub enum AppIntent {
    /// Anwendung beenden
    ExitRequested,
    /// Depth-Offset auf Standard zurücksetzen
    ResetViewRequested,
    /// Viewport-Größe hat sich geändert
    ViewportResized { size: [f32; 2] },
    /// Scroll-Geste über der Canvas (positives Delta = runter scrollen)
    DepthScrolled {
        delta_y: f32,
        shift: bool,
        alt: bool,
    },
    /// Form per Klick selektieren
    ShapePickRequested { world_pos: glam::Vec2 },

    /// Pointer-Down auf der Slider-Fläche (lokale Pixel-Koordinaten)
    SliderPointerPressed { pos: glam::Vec2 },
    /// Pointer-Move auf der Slider-Fläche
    SliderPointerMoved { pos: glam::Vec2 },
    /// Pointer-Up bzw. Verlassen der Slider-Fläche
    SliderPointerReleased { pos: glam::Vec2 },
    /// `current` programmatisch setzen
    SliderCurrentChangeRequested { value: f32 },
    /// `left` programmatisch setzen
    SliderLeftChangeRequested { value: f32 },
    /// `right` programmatisch setzen
    SliderRightChangeRequested { value: f32 },
    /// Slider-Interaktivität umschalten
    SliderSelectableToggled,
    /// Blinkenden Selektionsrahmen umschalten
    FlickerToggled,
}

/// Mutierende Commands, ausgeführt vom Controller.
#[derive(Debug, Clone)]
pub enum AppCommand {
    /// Anwendung kontrolliert beenden
    RequestExit,
    /// Depth-Offset zurücksetzen
    ResetView,
    /// Viewport-Größe im State aktualisieren
    SetViewportSize { size: [f32; 2] },
    /// Scroll-Geste auf die Projektion anwenden
    ApplyDepthScroll {
        delta_y: f32,
        shift: bool,
        alt: bool,
    },
    /// Form unter dem Weltpunkt selektieren
    PickShape { world_pos: glam::Vec2 },

    /// Slider: Drag ggf. starten
    SliderPointerDown { pos: glam::Vec2 },
    /// Slider: Drag fortsetzen bzw. Hover aktualisieren
    SliderPointerMove { pos: glam::Vec2 },
    /// Slider: Drag beenden
    SliderPointerUp { pos: glam::Vec2 },
    /// Slider: `current` setzen (ohne Listener, siehe Slider-Vertrag)
    SetSliderCurrent { value: f32 },
    /// Slider: `left` setzen (ohne Listener)
    SetSliderLeft { value: f32 },
    /// Slider: `right` setzen (ohne Listener)
    SetSliderRight { value: f32 },
    /// Slider-Interaktivität setzen
    SetSliderSelectable { selectable: bool },
    /// Blinkenden Selektionsrahmen umschalten
    ToggleFlicker,
}
