// File: crates/bracket-core/tests/rgba.rs
// Purpose: Validate RGBA rendering buffer shape and a few pixels.

use bracket_core::render::project;
use bracket_core::{compute, Diagram, DiagramOptions, RenderOptions, SpacingRequest, Theme};

fn pixel(px: &[u8], stride: usize, x: f32, y: f32) -> [u8; 4] {
    let i = y.round() as usize * stride + x.round() as usize * 4;
    [px[i], px[i + 1], px[i + 2], px[i + 3]]
}

#[test]
fn render_rgba8_buffer() {
    let result = compute(&SpacingRequest::default()).unwrap();
    let diagram = Diagram::build(&result, &DiagramOptions::default());

    let mut opts = RenderOptions::default();
    opts.draw_labels = false; // avoid font variance
    let (px, w, h, stride) = diagram.render_to_rgba8(&opts).expect("rgba render");
    assert_eq!(w as usize * h as usize * 4, px.len());
    assert_eq!(stride, (w as usize) * 4);

    // Top-left corner is background, fully opaque white for the light theme
    assert_eq!(pixel(&px, stride, 0.0, 0.0), [255, 255, 255, 255]);
}

#[test]
fn marker_centers_use_marker_color() {
    let result = compute(&SpacingRequest::default()).unwrap();
    let diagram = Diagram::build(&result, &DiagramOptions::default());

    let mut opts = RenderOptions::default();
    opts.draw_labels = false;
    opts.theme = Theme::light();
    let (px, _, _, stride) = diagram.render_to_rgba8(&opts).unwrap();

    // Marker centre sits on the baseline, the marker is drawn on top of it.
    let (x, y) = project(&diagram, &opts, (983.0, 0.0).into());
    let c = opts.theme.marker;
    assert_eq!(pixel(&px, stride, x, y), [c.r(), c.g(), c.b(), 255]);
}
