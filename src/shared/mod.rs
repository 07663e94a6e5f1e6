//! Geteilte Typen für layer-übergreifende Verträge.
//!
//! Enthält Konfiguration und reine Geometrie, die von `app`, `core` und
//! `ui` genutzt werden, ohne Zirkel-Abhängigkeiten zu erzeugen.

pub mod geometry;
pub mod options;

pub use options::EditorOptions;
