//! Geteilte, layer-neutrale Bausteine.
//!
//! Enthält die reine Kurvengeometrie und die Laufzeit-Optionen, damit
//! `splines` und der aufrufende Editor-Layer dieselben Verträge nutzen.

pub mod options;
pub mod spline_geometry;

pub use options::SplineOptions;
pub use spline_geometry::{AdaptiveSamples, ControlSegment, RenderSample};
