// File: crates/bracket-core/src/theme.rs
// Summary: Light/Dark theming for diagram rendering colors.

use skia_safe as skia;

use crate::annotation::Ink;

#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub name: &'static str,
    pub background: skia::Color,
    pub grid: skia::Color,
    pub axis_line: skia::Color,
    pub axis_label: skia::Color,
    pub tick: skia::Color,
    pub title: skia::Color,
    pub baseline: skia::Color,
    pub marker: skia::Color,
    pub span: skia::Color,
    pub bracket: skia::Color,
}

impl Theme {
    /// White paper look: black baseline, blue markers and span, purple bracket notes.
    pub fn light() -> Self {
        Self {
            name: "light",
            background: skia::Color::from_argb(255, 255, 255, 255),
            grid: skia::Color::from_argb(255, 222, 222, 222),
            axis_line: skia::Color::from_argb(255, 0, 0, 0),
            axis_label: skia::Color::from_argb(255, 0, 0, 0),
            tick: skia::Color::from_argb(255, 40, 40, 40),
            title: skia::Color::from_argb(255, 0, 0, 0),
            baseline: skia::Color::from_argb(255, 0, 0, 0),
            marker: skia::Color::from_argb(255, 0, 0, 255),
            span: skia::Color::from_argb(255, 0, 0, 255),
            bracket: skia::Color::from_argb(255, 128, 0, 128),
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: skia::Color::from_argb(255, 18, 18, 20),
            grid: skia::Color::from_argb(255, 40, 40, 45),
            axis_line: skia::Color::from_argb(255, 180, 180, 190),
            axis_label: skia::Color::from_argb(255, 235, 235, 245),
            tick: skia::Color::from_argb(255, 150, 150, 160),
            title: skia::Color::from_argb(255, 235, 235, 245),
            baseline: skia::Color::from_argb(255, 220, 220, 228),
            marker: skia::Color::from_argb(255, 64, 160, 255),
            span: skia::Color::from_argb(255, 96, 156, 255),
            bracket: skia::Color::from_argb(255, 200, 120, 230),
        }
    }

    pub fn solarized_light() -> Self {
        Self {
            name: "solarized-light",
            background: skia::Color::from_argb(255, 0xfd, 0xf6, 0xe3), // base3
            grid: skia::Color::from_argb(255, 0xee, 0xe8, 0xd5),       // base2
            axis_line: skia::Color::from_argb(255, 0x65, 0x7b, 0x83),  // base00
            axis_label: skia::Color::from_argb(255, 0x00, 0x2b, 0x36), // base03
            tick: skia::Color::from_argb(255, 0x58, 0x6e, 0x75),       // base01
            title: skia::Color::from_argb(255, 0x00, 0x2b, 0x36),
            baseline: skia::Color::from_argb(255, 0x07, 0x36, 0x42),   // base02
            marker: skia::Color::from_argb(255, 0x26, 0x8b, 0xd2),     // blue
            span: skia::Color::from_argb(255, 0x26, 0x8b, 0xd2),
            bracket: skia::Color::from_argb(255, 0x6c, 0x71, 0xc4),    // violet
        }
    }

    pub fn high_contrast_dark() -> Self {
        Self {
            name: "high-contrast-dark",
            background: skia::Color::from_argb(255, 0x00, 0x00, 0x00),
            grid: skia::Color::from_argb(255, 0x22, 0x22, 0x22),
            axis_line: skia::Color::from_argb(255, 0xff, 0xff, 0xff),
            axis_label: skia::Color::from_argb(255, 0xff, 0xff, 0xff),
            tick: skia::Color::from_argb(255, 0xcc, 0xcc, 0xcc),
            title: skia::Color::from_argb(255, 0xff, 0xff, 0xff),
            baseline: skia::Color::from_argb(255, 0xff, 0xff, 0xff),
            marker: skia::Color::from_argb(255, 0x00, 0xff, 0xff),
            span: skia::Color::from_argb(255, 0x00, 0xaa, 0xff),
            bracket: skia::Color::from_argb(255, 0xff, 0x00, 0xff),
        }
    }

    /// Color for a diagram element role.
    pub fn ink(&self, ink: Ink) -> skia::Color {
        match ink {
            Ink::Baseline => self.baseline,
            Ink::Marker => self.marker,
            Ink::Span => self.span,
            Ink::Bracket => self.bracket,
        }
    }
}

impl Default for Theme {
    fn default() -> Self { Self::light() }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![
        Theme::light(),
        Theme::dark(),
        Theme::solarized_light(),
        Theme::high_contrast_dark(),
    ]
}

/// Find a theme by its `name`, falling back to light.
pub fn find(name: &str) -> Theme {
    for t in presets() { if t.name.eq_ignore_ascii_case(name) { return t; } }
    Theme::light()
}
