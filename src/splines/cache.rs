//! Explizit invalidierter Cache für Arc-Length-Tabellen.
//!
//! Die Tabelle wird nur neu gerendert, wenn sich der Daten-Record (Wertvergleich)
//! oder die Toleranz ändert. Ein Live-Vorschau-Punkt ist Render-Parameter und
//! invalidiert den Cache nicht.

use super::{ArcLengthTable, CurveVariant, EditorSpline};
use crate::core::CurveData;
use crate::error::SplineError;
use crate::shared::options::SplineOptions;
use std::sync::Arc;

#[derive(Debug, Clone)]
struct CacheEntry<T> {
    data: T,
    tolerance: f32,
    table: Arc<ArcLengthTable>,
}

/// Hält die Tabelle der zuletzt angefragten Datenversion.
#[derive(Debug, Clone)]
pub struct ArcLengthCache<T = CurveData> {
    entry: Option<CacheEntry<T>>,
}

impl<T> Default for ArcLengthCache<T> {
    fn default() -> Self {
        Self { entry: None }
    }
}

impl<T: CurveVariant + Clone + PartialEq> ArcLengthCache<T> {
    /// Erstellt einen leeren Cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// `true` wenn für `data` und `tolerance` eine gültige Tabelle vorliegt.
    pub fn is_cached(&self, data: &T, tolerance: f32) -> bool {
        self.entry
            .as_ref()
            .is_some_and(|entry| entry.tolerance == tolerance && entry.data == *data)
    }

    /// Liefert die Tabelle für `data`, baut sie nur bei geänderten Daten neu.
    pub fn table_for(
        &mut self,
        data: &T,
        tolerance: f32,
    ) -> Result<Arc<ArcLengthTable>, SplineError> {
        if let Some(entry) = self
            .entry
            .as_ref()
            .filter(|entry| entry.tolerance == tolerance && entry.data == *data)
        {
            log::debug!("Arc-Length-Tabelle aus Cache ({} Einträge)", entry.table.entries().len());
            return Ok(Arc::clone(&entry.table));
        }

        let table = Arc::new(ArcLengthTable::build(data, tolerance)?);
        log::debug!(
            "Arc-Length-Tabelle neu berechnet: {} Einträge, Länge {:.3}",
            table.entries().len(),
            table.length()
        );
        self.entry = Some(CacheEntry {
            data: data.clone(),
            tolerance,
            table: Arc::clone(&table),
        });
        Ok(table)
    }

    /// Controller über der gecachten Tabelle.
    pub fn controller<'a>(
        &mut self,
        data: &'a T,
        options: &SplineOptions,
    ) -> Result<EditorSpline<'a, T>, SplineError> {
        options.validate()?;
        let table = self.table_for(data, options.arc_length_tolerance)?;
        Ok(EditorSpline::with_table(data, table))
    }

    /// Verwirft die gecachte Tabelle.
    pub fn invalidate(&mut self) {
        self.entry = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{BSplineData, CurveKind};
    use glam::Vec2;

    fn curve() -> CurveData {
        CurveData::BSpline(BSplineData {
            points: vec![Vec2::ZERO, Vec2::new(2.0, 1.0), Vec2::new(4.0, 0.0)],
        })
    }

    #[test]
    fn test_same_data_reuses_table() {
        let mut cache = ArcLengthCache::new();
        let data = curve();

        let first = cache.table_for(&data, 0.01).unwrap();
        let second = cache.table_for(&data.clone(), 0.01).unwrap();
        assert!(Arc::ptr_eq(&first, &second));
        assert!(cache.is_cached(&data, 0.01));
    }

    #[test]
    fn test_changed_data_rebuilds_table() {
        let mut cache = ArcLengthCache::new();
        let data = curve();
        let first = cache.table_for(&data, 0.01).unwrap();

        let moved = data.update_editor_point(1, Vec2::new(2.0, 3.0)).unwrap();
        let second = cache.table_for(&moved, 0.01).unwrap();
        assert!(!Arc::ptr_eq(&first, &second));
        assert!(second.length() > first.length());
        assert!(!cache.is_cached(&data, 0.01));
    }

    #[test]
    fn test_changed_tolerance_rebuilds_table() {
        let mut cache = ArcLengthCache::new();
        let data = curve();
        let fine = cache.table_for(&data, 0.01).unwrap();
        let coarse = cache.table_for(&data, 0.5).unwrap();
        assert!(!Arc::ptr_eq(&fine, &coarse));
        assert!(coarse.entries().len() < fine.entries().len());
    }

    #[test]
    fn test_invalidate() {
        let mut cache = ArcLengthCache::new();
        let data = curve();
        cache.table_for(&data, 0.01).unwrap();
        cache.invalidate();
        assert!(!cache.is_cached(&data, 0.01));
    }

    #[test]
    fn test_controller_shares_cached_table() {
        let mut cache = ArcLengthCache::new();
        let data = CurveData::with_initial_point(CurveKind::Bezier, Vec2::ZERO)
            .add_editor_point(1, Vec2::new(5.0, 0.0))
            .unwrap();
        let options = SplineOptions::default();

        let a = cache.controller(&data, &options).unwrap();
        let b = cache.controller(&data, &options).unwrap();
        assert!(Arc::ptr_eq(a.table(), b.table()));
        assert!(a.length() > 4.0);

        // Vorschau verändert weder Daten noch Tabelle
        let preview = a.render_preview(Vec2::new(8.0, 2.0), 0.1).unwrap();
        assert!(!preview.is_empty());
        assert!(cache.is_cached(&data, options.arc_length_tolerance));
    }
}
