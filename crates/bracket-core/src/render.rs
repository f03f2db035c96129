// File: crates/bracket-core/src/render.rs
// Summary: Headless rendering of a Diagram using Skia CPU raster surfaces (PNG file, PNG bytes, RGBA8).

use std::io::Cursor;
use std::path::Path;

use anyhow::{Context, Result};
use skia_safe as skia;
use tracing::debug;

use crate::annotation::Element;
use crate::diagram::Diagram;
use crate::geometry::RectI32;
use crate::grid::nice_ticks;
use crate::scale::PlotScale;
use crate::text::TextShaper;
use crate::theme::Theme;
use crate::types::{Insets, Point, HEIGHT, WIDTH};

/// Font sizes in the diagram are given in points; this converts them to pixels.
const PT_TO_PX: f32 = 1.4;
/// Fraction trimmed from both ends of a pointer arrow.
const POINTER_SHRINK: f32 = 0.05;
const ARROW_HEAD_PX: f32 = 8.0;
const TARGET_X_TICKS: usize = 8;

pub struct RenderOptions {
    pub width: i32,
    pub height: i32,
    pub insets: Insets,
    pub theme: Theme,
    /// Disable all text; useful for pixel-exact snapshots across platforms.
    pub draw_labels: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            insets: Insets::default(),
            theme: Theme::default(),
            draw_labels: true,
        }
    }
}

impl Diagram {
    /// Render the diagram to a PNG at `output_png_path`, creating parent directories.
    pub fn render_to_png(&self, opts: &RenderOptions, output_png_path: impl AsRef<Path>) -> Result<()> {
        let path = output_png_path.as_ref();
        let bytes = self.render_to_png_bytes(opts)?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
        std::fs::write(path, bytes).with_context(|| format!("writing {}", path.display()))?;
        debug!(path = %path.display(), "wrote diagram png");
        Ok(())
    }

    /// Render the diagram and encode it as PNG in memory.
    pub fn render_to_png_bytes(&self, opts: &RenderOptions) -> Result<Vec<u8>> {
        let (px, w, h, _stride) = self.render_to_rgba8(opts)?;
        let img = image::RgbaImage::from_raw(w, h, px)
            .ok_or_else(|| anyhow::anyhow!("pixel buffer does not match {w}x{h}"))?;
        let mut out = Cursor::new(Vec::new());
        image::DynamicImage::ImageRgba8(img)
            .write_to(&mut out, image::ImageFormat::Png)
            .context("encode PNG failed")?;
        Ok(out.into_inner())
    }

    /// Render into an unpremultiplied RGBA8 buffer. Returns `(pixels, width, height, stride)`.
    pub fn render_to_rgba8(&self, opts: &RenderOptions) -> Result<(Vec<u8>, u32, u32, usize)> {
        if opts.width <= 0 || opts.height <= 0 {
            anyhow::bail!("invalid surface size {}x{}", opts.width, opts.height);
        }
        let mut surface = skia::surfaces::raster_n32_premul((opts.width, opts.height))
            .ok_or_else(|| anyhow::anyhow!("failed to create raster surface"))?;

        self.draw(surface.canvas(), opts);

        let info = skia::ImageInfo::new(
            (opts.width, opts.height),
            skia::ColorType::RGBA8888,
            skia::AlphaType::Unpremul,
            None,
        );
        let stride = opts.width as usize * 4;
        let mut px = vec![0u8; stride * opts.height as usize];
        if !surface.read_pixels(&info, &mut px, stride, (0, 0)) {
            anyhow::bail!("failed to read back surface pixels");
        }
        Ok((px, opts.width as u32, opts.height as u32, stride))
    }

    /// Draw the full diagram (frame, grid, elements, labels) onto `canvas`.
    pub fn draw(&self, canvas: &skia::Canvas, opts: &RenderOptions) {
        let theme = &opts.theme;
        canvas.clear(theme.background);

        let area = RectI32::plot_area(opts.width, opts.height, &opts.insets);
        let scale = PlotScale::new(area, &self.x_axis, &self.y_axis);
        let shaper = opts.draw_labels.then(TextShaper::new);
        let ticks = if self.x_axis.show_ticks {
            nice_ticks(self.x_axis.min, self.x_axis.max, TARGET_X_TICKS)
        } else {
            Vec::new()
        };

        if self.grid {
            draw_grid(canvas, &area, &scale, &ticks, theme);
        }

        canvas.save();
        canvas.clip_rect(
            skia::Rect::from_ltrb(area.left as f32, area.top as f32, area.right as f32, area.bottom as f32),
            skia::ClipOp::Intersect,
            true,
        );
        for el in &self.elements {
            draw_element(canvas, el, &scale, theme, shaper.as_ref());
        }
        canvas.restore();

        draw_frame(canvas, &area, &scale, &ticks, theme);
        if let Some(shaper) = &shaper {
            draw_axis_text(canvas, shaper, self, &area, &scale, &ticks, theme);
        }
    }
}

// ---- helpers ----------------------------------------------------------------

fn stroke_paint(color: skia::Color, width: f32) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Stroke);
    paint.set_stroke_width(width);
    paint.set_color(color);
    paint
}

fn fill_paint(color: skia::Color) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Fill);
    paint.set_color(color);
    paint
}

fn draw_grid(canvas: &skia::Canvas, area: &RectI32, scale: &PlotScale, ticks: &[f64], theme: &Theme) {
    let paint = stroke_paint(theme.grid, 1.0);
    // Only the x axis carries ticks, so the grid is vertical lines only.
    for &t in ticks {
        let x = scale.to_px_x(t);
        canvas.draw_line((x, area.top as f32), (x, area.bottom as f32), &paint);
    }
}

fn draw_frame(canvas: &skia::Canvas, area: &RectI32, scale: &PlotScale, ticks: &[f64], theme: &Theme) {
    let paint = stroke_paint(theme.axis_line, 1.0);
    let rect = skia::Rect::from_ltrb(area.left as f32, area.top as f32, area.right as f32, area.bottom as f32);
    canvas.draw_rect(rect, &paint);

    let tick_paint = stroke_paint(theme.tick, 1.0);
    let b = area.bottom as f32;
    for &t in ticks {
        let x = scale.to_px_x(t);
        canvas.draw_line((x, b), (x, b + 5.0), &tick_paint);
    }
}

fn draw_axis_text(
    canvas: &skia::Canvas,
    shaper: &TextShaper,
    diagram: &Diagram,
    area: &RectI32,
    scale: &PlotScale,
    ticks: &[f64],
    theme: &Theme,
) {
    let b = area.bottom as f32;
    let mid_x = (area.left + area.right) as f32 * 0.5;

    for &t in ticks {
        let label = format!("{:.0}", t);
        shaper.draw_centered(canvas, &label, scale.to_px_x(t), b + 20.0, 12.0, theme.tick, true);
    }
    if !diagram.x_axis.label.is_empty() {
        shaper.draw_centered(canvas, &diagram.x_axis.label, mid_x, b + 46.0, 14.0, theme.axis_label, false);
    }
    if !diagram.title.is_empty() {
        shaper.draw_centered(canvas, &diagram.title, mid_x, area.top as f32 - 18.0, 17.0, theme.title, false);
    }
}

fn draw_element(
    canvas: &skia::Canvas,
    el: &Element,
    scale: &PlotScale,
    theme: &Theme,
    shaper: Option<&TextShaper>,
) {
    match el {
        Element::Segment { from, to, ink, width } => {
            let paint = stroke_paint(theme.ink(*ink), *width);
            canvas.draw_line(scale.to_px(*from), scale.to_px(*to), &paint);
        }
        Element::Marker { at, ink, radius } => {
            canvas.draw_circle(scale.to_px(*at), *radius, &fill_paint(theme.ink(*ink)));
        }
        Element::Pointer { text, target, text_at, ink, size } => {
            let color = theme.ink(*ink);
            let size_px = size * PT_TO_PX;
            let (tx, ty) = scale.to_px(*text_at);
            let (px, py) = scale.to_px(*target);
            // The arrow leaves from just under the text baseline.
            let start = (tx, ty + 3.0);
            let (s, e) = shrink(start, (px, py), POINTER_SHRINK);
            draw_pointer_arrow(canvas, s, e, color);
            if let Some(shaper) = shaper {
                shaper.draw_centered(canvas, text, tx, ty, size_px, color, false);
            }
        }
        Element::Dimension { from, to, ink, width } => {
            let color = theme.ink(*ink);
            let a = scale.to_px(*from);
            let b = scale.to_px(*to);
            let paint = stroke_paint(color, *width);
            canvas.draw_line(a, b, &paint);
            draw_open_head(canvas, b, a, &paint);
            draw_open_head(canvas, a, b, &paint);
        }
        Element::Text { text, at, ink, size } => {
            if let Some(shaper) = shaper {
                let (x, y) = scale.to_px(*at);
                shaper.draw_centered(canvas, text, x, y, size * PT_TO_PX, theme.ink(*ink), false);
            }
        }
    }
}

/// Trim `frac` of the segment length off both ends.
fn shrink(a: (f32, f32), b: (f32, f32), frac: f32) -> ((f32, f32), (f32, f32)) {
    let dx = b.0 - a.0;
    let dy = b.1 - a.1;
    (
        (a.0 + dx * frac, a.1 + dy * frac),
        (b.0 - dx * frac, b.1 - dy * frac),
    )
}

/// Unit direction from `a` to `b`, or `None` for a zero-length segment.
fn direction(a: (f32, f32), b: (f32, f32)) -> Option<(f32, f32)> {
    let dx = b.0 - a.0;
    let dy = b.1 - a.1;
    let len = (dx * dx + dy * dy).sqrt();
    (len > 1e-3).then(|| (dx / len, dy / len))
}

/// Shaft plus a filled triangular head at `tip`.
fn draw_pointer_arrow(canvas: &skia::Canvas, tail: (f32, f32), tip: (f32, f32), color: skia::Color) {
    let Some((ux, uy)) = direction(tail, tip) else { return };
    let base = (tip.0 - ux * ARROW_HEAD_PX, tip.1 - uy * ARROW_HEAD_PX);
    canvas.draw_line(tail, base, &stroke_paint(color, 1.5));

    let half = ARROW_HEAD_PX * 0.5;
    let (nx, ny) = (-uy, ux);
    let mut path = skia::Path::new();
    path.move_to(tip);
    path.line_to((base.0 + nx * half, base.1 + ny * half));
    path.line_to((base.0 - nx * half, base.1 - ny * half));
    path.close();
    canvas.draw_path(&path, &fill_paint(color));
}

/// Open "<" style head at `tip` for a line coming from `from`.
fn draw_open_head(canvas: &skia::Canvas, from: (f32, f32), tip: (f32, f32), paint: &skia::Paint) {
    let Some((ux, uy)) = direction(from, tip) else { return };
    let back = (tip.0 - ux * ARROW_HEAD_PX, tip.1 - uy * ARROW_HEAD_PX);
    let half = ARROW_HEAD_PX * 0.4;
    let (nx, ny) = (-uy, ux);
    canvas.draw_line(tip, (back.0 + nx * half, back.1 + ny * half), paint);
    canvas.draw_line(tip, (back.0 - nx * half, back.1 - ny * half), paint);
}

/// Pixel position of a world point when rendered with `opts`.
pub fn project(diagram: &Diagram, opts: &RenderOptions, p: Point) -> (f32, f32) {
    let area = RectI32::plot_area(opts.width, opts.height, &opts.insets);
    PlotScale::new(area, &diagram.x_axis, &diagram.y_axis).to_px(p)
}
