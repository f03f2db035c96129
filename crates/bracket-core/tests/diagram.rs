// File: crates/bracket-core/tests/diagram.rs
// Purpose: Layout of the schematic: labels, coordinates, axes and the offset label choice.

use bracket_core::annotation::{Element, Ink};
use bracket_core::diagram::{FIXED_OFFSET_LABEL, TITLE, X_LABEL};
use bracket_core::types::Point;
use bracket_core::{compute, Diagram, DiagramOptions, SpacingRequest};

fn scenario() -> Diagram {
    let r = compute(&SpacingRequest::default()).unwrap();
    Diagram::build(&r, &DiagramOptions::default())
}

#[test]
fn labels_match_source_text() {
    let d = scenario();
    assert_eq!(
        d.labels(),
        vec![
            "Length between brackets: 14.879 m",
            "1st Bracket",
            "Last Bracket",
            "Total Length: 15279.0 mm",
            "200 mm",
            "200 mm",
        ]
    );
}

#[test]
fn one_marker_per_position() {
    let r = compute(&SpacingRequest::default()).unwrap();
    let d = Diagram::build(&r, &DiagramOptions::default());
    assert_eq!(d.markers(), r.positions_mm);
}

#[test]
fn baseline_spans_total_length() {
    let d = scenario();
    let baseline = d.elements.iter().find_map(|e| match e {
        Element::Segment { from, to, ink: Ink::Baseline, .. } => Some((*from, *to)),
        _ => None,
    });
    let (from, to) = baseline.expect("baseline present");
    assert_eq!(from, Point::new(0.0, 0.0));
    assert!((to.x - 15279.0).abs() < 1e-6);
    assert_eq!(to.y, 0.0);
}

#[test]
fn pointer_targets() {
    let d = scenario();
    let targets: Vec<(&str, Point, Point)> = d
        .elements
        .iter()
        .filter_map(|e| match e {
            Element::Pointer { text, target, text_at, .. } => Some((text.as_str(), *target, *text_at)),
            _ => None,
        })
        .collect();
    assert_eq!(targets.len(), 3);

    let (_, span_target, span_text) = targets[0];
    assert!((span_target.x - 14879.0 / 2.0).abs() < 1e-6);
    assert_eq!(span_text.y, 20.0);

    assert_eq!(targets[1].0, "1st Bracket");
    assert_eq!(targets[1].1, Point::new(200.0, 0.0));
    assert_eq!(targets[1].2.y, 30.0);

    assert_eq!(targets[2].0, "Last Bracket");
    assert!((targets[2].1.x - (15279.0 - 400.0)).abs() < 1e-6);
}

#[test]
fn dimension_arrows() {
    let d = scenario();
    let dims: Vec<(Point, Point, Ink)> = d
        .elements
        .iter()
        .filter_map(|e| match e {
            Element::Dimension { from, to, ink, .. } => Some((*from, *to, *ink)),
            _ => None,
        })
        .collect();
    assert_eq!(dims.len(), 3);
    assert_eq!(dims[0].0, Point::new(0.0, -10.0));
    assert_eq!(dims[0].2, Ink::Span);
    assert_eq!(dims[1], (Point::new(0.0, -30.0), Point::new(200.0, -30.0), Ink::Bracket));
    assert!((dims[2].0.x - 14879.0).abs() < 1e-6);
    assert!((dims[2].1.x - 15279.0).abs() < 1e-6);
}

#[test]
fn offset_labels_are_placed_mid_offset() {
    let d = scenario();
    let anchors: Vec<Point> = d
        .elements
        .iter()
        .filter_map(|e| match e {
            Element::Text { text, at, .. } if text == FIXED_OFFSET_LABEL => Some(*at),
            _ => None,
        })
        .collect();
    assert_eq!(anchors.len(), 2);
    assert_eq!(anchors[0], Point::new(100.0, -40.0));
    assert!((anchors[1].x - (15279.0 - 100.0)).abs() < 1e-6);
    assert_eq!(anchors[1].y, -40.0);
}

#[test]
fn fixed_offset_label_ignores_configured_offset() {
    let r = compute(&SpacingRequest::new(3.0, 75.0, 4)).unwrap();
    let d = Diagram::build(&r, &DiagramOptions::default());
    assert_eq!(d.labels().iter().filter(|l| **l == "200 mm").count(), 2);
}

#[test]
fn actual_offset_label_when_requested() {
    let r = compute(&SpacingRequest::new(3.0, 75.0, 4)).unwrap();
    let d = Diagram::build(&r, &DiagramOptions { label_actual_offset: true });
    assert_eq!(d.labels().iter().filter(|l| **l == "75 mm").count(), 2);
    assert!(!d.labels().contains(&"200 mm"));
}

#[test]
fn axes_and_title() {
    let d = scenario();
    assert_eq!(d.title, TITLE);
    assert!(d.grid);
    assert_eq!(d.x_axis.label, X_LABEL);
    assert!(d.x_axis.show_ticks);
    assert_eq!((d.y_axis.min, d.y_axis.max), (-50.0, 50.0));
    assert!(!d.y_axis.show_ticks);
    // x range covers the whole roof line with some margin
    assert!(d.x_axis.min < 0.0);
    assert!(d.x_axis.max > 15279.0);
}

#[test]
fn x_range_covers_overshooting_positions() {
    let r = compute(&SpacingRequest::new(1.0, 0.0, 6)).unwrap();
    let d = Diagram::build(&r, &DiagramOptions::default());
    assert!(d.x_axis.max > 1002.0);
}

#[test]
fn total_length_label_is_centered_under_its_arrow() {
    let d = scenario();
    let at = d.elements.iter().find_map(|e| match e {
        Element::Text { text, at, ink: Ink::Span, .. } => Some((text.clone(), *at)),
        _ => None,
    });
    let (text, at) = at.expect("total length label");
    assert_eq!(text, "Total Length: 15279.0 mm");
    assert!((at.x - 15279.0 / 2.0).abs() < 1e-6);
    assert_eq!(at.y, -20.0);
}
