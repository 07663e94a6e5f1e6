//! UI-Layer mit egui.
//!
//! Dieses Modul implementiert alle UI-Komponenten: Menü-Leiste,
//! Status-Bar, Szenen-Painting im Viewport, das Slider-Panel und die
//! Übersetzung von Pointer-Input in [`crate::app::AppIntent`]s.

pub mod canvas;
pub mod input;
pub mod menu;
mod paint;
pub mod slider_panel;
pub mod status;

pub use canvas::{paint_scene, FlickerState};
pub use input::collect_viewport_events;
pub use menu::render_menu;
pub use paint::EguiSurface;
pub use slider_panel::show_slider_panel;
pub use status::render_status_bar;
