//! Auton Spline Engine.
//! Spline-Geometrie für den Auton-Pfadeditor als Library exportiert für Tests und Wiederverwendung.
//!
//! Der Editor-Layer hält nur unveränderliche [`CurveData`]-Records, baut je
//! Datenversion einen [`EditorSpline`] und ersetzt den Record durch das
//! Ergebnis jeder Bearbeitung.

pub mod core;
pub mod error;
pub mod shared;
pub mod splines;

pub use core::{BSplineData, BezierData, BezierPoint, CharacteristicMatrix, CurveData, CurveKind};
pub use error::SplineError;
pub use shared::spline_geometry::{evaluate, polyline_length, render};
pub use shared::{AdaptiveSamples, ControlSegment, RenderSample, SplineOptions};
pub use splines::{
    spline_controller, ArcLengthCache, ArcLengthEntry, ArcLengthTable, CurveVariant,
    DistanceMarker, EditorSpline,
};
