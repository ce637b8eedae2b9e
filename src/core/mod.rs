//! Core-Domänentypen: Kurvendaten-Records und charakteristische Matrizen.

pub mod curve_data;
pub mod matrix;

pub use curve_data::{
    BSplineData, BezierData, BezierPoint, CurveData, CurveKind, BEZIER_INITIAL_DIRECTION,
};
pub use matrix::CharacteristicMatrix;
