//! Integrationstests für den Editor-Ablauf über die öffentliche API:
//! - Zeichnen (erster Klick, Live-Vorschau, Bestätigen)
//! - Anker/Handles ziehen, Anker löschen
//! - Scrubbing über Distanz
//! - Laden aus JSON mit Typ-Prüfung

use auton_spline::{
    spline_controller, ArcLengthCache, CurveData, CurveKind, CurveVariant, EditorSpline,
    SplineError, SplineOptions,
};
use glam::Vec2;

/// Simuliert: erster Klick + weitere Klicks im Zeichenmodus.
fn draw(kind: CurveKind, clicks: &[Vec2]) -> CurveData {
    let mut data = CurveData::with_initial_point(kind, clicks[0]);
    for &click in &clicks[1..] {
        let spline = spline_controller(&data).expect("Controller muss sich bauen lassen");
        let len = spline.editor_points().len();
        data = spline
            .add_editor_point(len, click)
            .expect("Anhängen am Ende ist immer gültig");
    }
    data
}

fn clicks() -> Vec<Vec2> {
    vec![
        Vec2::new(0.0, 0.0),
        Vec2::new(2.0, 1.0),
        Vec2::new(4.0, 0.0),
        Vec2::new(6.0, 2.0),
    ]
}

// ─── Zeichnen ────────────────────────────────────────────────────────────────

#[test]
fn test_draw_flow_for_every_kind() {
    for kind in CurveKind::ALL {
        let data = draw(kind, &clicks());
        assert_eq!(data.kind(), kind);
        assert_eq!(data.editor_points(), clicks());

        let spline = spline_controller(&data).unwrap();
        let polyline = spline.render(0.05).unwrap();
        assert!(polyline.len() > 10, "{}: zu wenige Punkte", kind);
        assert!(polyline[0].abs_diff_eq(clicks()[0], 1e-4));
        assert!(polyline.last().unwrap().abs_diff_eq(clicks()[3], 1e-4));
        assert!(spline.length() > 6.0);
    }
}

#[test]
fn test_live_preview_ends_at_cursor() {
    for kind in CurveKind::ALL {
        let data = draw(kind, &clicks()[..2]);
        let spline = spline_controller(&data).unwrap();
        let length_before = spline.length();

        let cursor = Vec2::new(3.0, -2.0);
        let preview = spline.render_preview(cursor, 0.1).unwrap();
        assert!(preview.last().unwrap().abs_diff_eq(cursor, 1e-4));
        for pair in preview.windows(2) {
            assert!(pair[0].distance(pair[1]) <= 0.1 + 1e-5);
        }

        // Vorschau ist kein Zustand
        assert_eq!(spline.length(), length_before);
        assert_eq!(data.anchor_count(), 2);
    }
}

// ─── Bearbeiten ──────────────────────────────────────────────────────────────

#[test]
fn test_drag_anchor_returns_new_record() {
    let data = draw(CurveKind::BSpline, &clicks());
    let spline = spline_controller(&data).unwrap();

    let moved = spline.update_editor_point(1, Vec2::new(2.0, 5.0)).unwrap();
    assert_ne!(moved, data);
    assert_eq!(data.editor_points()[1], Vec2::new(2.0, 1.0));

    let moved_spline = spline_controller(&moved).unwrap();
    assert!(moved_spline.length() > spline.length());
}

#[test]
fn test_drag_bezier_handles() {
    let data = draw(CurveKind::Bezier, &clicks());
    let spline = spline_controller(&data).unwrap();
    assert!(spline.has_editor_point_handles());
    assert_eq!(spline.editor_point_handles(0).unwrap().len(), 1);
    assert_eq!(spline.editor_point_handles(1).unwrap().len(), 2);
    assert_eq!(spline.editor_point_handles(3).unwrap().len(), 1);

    // Eingehendes Handle eines inneren Ankers ziehen
    let target = Vec2::new(1.0, 2.0);
    let updated = spline.update_editor_point_handle(1, 0, target).unwrap();
    let handles = updated.editor_point_handles(1).unwrap();
    assert!(handles[0].abs_diff_eq(target, 1e-6));
    // Gegenüberliegendes Handle wird gespiegelt
    assert!(handles[1].abs_diff_eq(Vec2::new(3.0, 0.0), 1e-6));

    // Interpolation bleibt erhalten
    let updated_spline = spline_controller(&updated).unwrap();
    for (i, anchor) in clicks().into_iter().enumerate() {
        let p = updated_spline.evaluate(i as f32).unwrap().unwrap();
        assert!(p.abs_diff_eq(anchor, 1e-4));
    }
}

#[test]
fn test_remove_until_empty() {
    let mut data = draw(CurveKind::Bezier, &clicks());
    while data.anchor_count() > 0 {
        data = spline_controller(&data)
            .unwrap()
            .remove_editor_point(0)
            .unwrap();
    }
    let spline = spline_controller(&data).unwrap();
    assert_eq!(spline.length(), 0.0);
    assert!(spline.render(0.1).unwrap().is_empty());
    assert_eq!(
        spline.remove_editor_point(0),
        Err(SplineError::IndexOutOfRange { index: 0, len: 0 })
    );
}

// ─── Scrubbing ───────────────────────────────────────────────────────────────

#[test]
fn test_scrub_by_distance() {
    let data = draw(CurveKind::BSpline, &clicks());
    let options = SplineOptions::default();
    let spline = EditorSpline::with_options(&data, &options).unwrap();

    let markers = spline.distance_markers(options.distance_marker_step).unwrap();
    assert!(!markers.is_empty());
    for pair in markers.windows(2) {
        assert!(pair[1].t > pair[0].t);
        // Aufeinanderfolgende Marker liegen höchstens eine Schrittweite auseinander
        assert!(pair[0].position.distance(pair[1].position) <= options.distance_marker_step + 1e-3);
    }

    // Slider-Wert außerhalb der Länge muss der Aufrufer klemmen
    assert!(matches!(
        spline.t_at(spline.length() + 1.0),
        Err(SplineError::Domain { .. })
    ));
}

#[test]
fn test_cache_across_interaction_ticks() {
    let data = draw(CurveKind::Bezier, &clicks());
    let options = SplineOptions::default();
    let mut cache = ArcLengthCache::new();

    // Mausbewegungen mit Vorschau: gleiche Daten → gleiche Tabelle
    for i in 0..5 {
        let spline = cache.controller(&data, &options).unwrap();
        let cursor = Vec2::new(7.0 + i as f32, 3.0);
        spline
            .render_preview(cursor, options.preview_render_tolerance)
            .unwrap();
    }
    assert!(cache.is_cached(&data, options.arc_length_tolerance));

    // Bestätigter Klick → neue Datenversion → Neuberechnung
    let committed = cache
        .controller(&data, &options)
        .unwrap()
        .add_editor_point(4, Vec2::new(8.0, 3.0))
        .unwrap();
    let spline = cache.controller(&committed, &options).unwrap();
    assert!(!cache.is_cached(&data, options.arc_length_tolerance));
    assert_eq!(spline.editor_points().len(), 5);
}

// ─── Laden ───────────────────────────────────────────────────────────────────

#[test]
fn test_json_roundtrip_through_controller() {
    let data = draw(CurveKind::Bezier, &clicks());
    let json = data.to_json().unwrap();
    let loaded = CurveData::from_json(&json).unwrap();
    assert_eq!(loaded, data);

    let a = spline_controller(&data).unwrap();
    let b = spline_controller(&loaded).unwrap();
    assert_eq!(a.length(), b.length());
}

#[test]
fn test_unknown_kind_is_fatal() {
    let result = CurveData::from_json(r#"{ "kind": "nurbs", "points": [] }"#);
    assert_eq!(
        result,
        Err(SplineError::UnrecognizedVariant("nurbs".to_string()))
    );
}
