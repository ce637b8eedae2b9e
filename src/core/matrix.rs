//! Charakteristische 4×4-Matrix einer kubischen Kurvenfamilie.

use glam::{Mat4, Vec4};

/// Konstante Basis-Matrix, die aus vier lokalen Kontrollpunkten eine kubische Kurve formt.
///
/// Intern als `glam::Mat4` gespeichert, deren **Spalten** die Zeilen der
/// mathematischen Matrix sind. Damit ist `[1, u, u², u³] · M` ein einfaches
/// `Mat4 * Vec4`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CharacteristicMatrix(Mat4);

impl CharacteristicMatrix {
    /// Uniforme kubische B-Spline-Basis.
    pub const B_SPLINE: Self = Self::from_rows([
        [1.0 / 6.0, 2.0 / 3.0, 1.0 / 6.0, 0.0],
        [-1.0 / 2.0, 0.0, 1.0 / 2.0, 0.0],
        [1.0 / 2.0, -1.0, 1.0 / 2.0, 0.0],
        [-1.0 / 6.0, 1.0 / 2.0, -1.0 / 2.0, 1.0 / 6.0],
    ]);

    /// Kubische Bézier-Basis (Bernstein-Polynome).
    pub const BEZIER: Self = Self::from_rows([
        [1.0, 0.0, 0.0, 0.0],
        [-3.0, 3.0, 0.0, 0.0],
        [3.0, -6.0, 3.0, 0.0],
        [-1.0, 3.0, -3.0, 1.0],
    ]);

    /// Erstellt die Matrix aus ihren vier Zeilen.
    pub const fn from_rows(rows: [[f32; 4]; 4]) -> Self {
        Self(Mat4::from_cols_array_2d(&rows))
    }

    /// Zeile `i` der mathematischen Matrix.
    pub fn row(&self, i: usize) -> Vec4 {
        self.0.col(i)
    }

    /// Anzahl der Spalten (immer 4).
    pub const fn columns(&self) -> usize {
        4
    }

    /// Polynomgrad der Kurvenfamilie (`columns - 1`).
    pub const fn degree(&self) -> usize {
        self.columns() - 1
    }

    /// Blending-Koeffizienten für den segment-lokalen Parameter `u`.
    ///
    /// Berechnet den Zeilenvektor `[1, u, u², u³] · M`.
    pub fn blend(&self, u: f32) -> Vec4 {
        let u2 = u * u;
        self.0 * Vec4::new(1.0, u, u2, u2 * u)
    }
}
