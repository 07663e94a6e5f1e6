//! Shape-Canvas Library.
//! Core-Funktionalität als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod shared;
pub mod ui;

pub use app::{AppCommand, AppController, AppIntent, AppState, UiState, ViewState};
pub use core::{
    PaintOp, PaintSurface, Projection, RangeSlider, RecordingSurface, Scene, Shape, ShapeInstance,
    SliderConfig, SliderHandle, SliderStyle,
};
pub use shared::EditorOptions;
