//! Domänen-Logik ohne egui-Abhängigkeit: Projektion, Szene, Slider,
//! Zeichenflächen-Interface.

pub mod projection;
pub mod scene;
pub mod slider;
pub mod surface;

pub use projection::Projection;
pub use scene::{Scene, Shape, ShapeInstance};
pub use slider::{ChangeListener, RangeSlider, SliderConfig, SliderHandle, SliderStyle};
pub use surface::{Color, PaintOp, PaintSurface, RecordingSurface};
