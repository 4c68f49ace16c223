//! Pixel canvas and the rasterizer pass that draws a [`LayoutPlan`] onto it.

use image::{Rgb, RgbImage};

use crate::model::RenderRequest;
use super::layout::LayoutPlan;

// ═══════════════════════════════════════════════════════════════════════
// Canvas
// ═══════════════════════════════════════════════════════════════════════

/// RGB pixel buffer with one foreground and one background color.
pub struct Canvas {
    image: RgbImage,
    foreground: Rgb<u8>,
}

impl Canvas {
    /// A `width x height` buffer filled with `background`.
    pub fn new(width: u32, height: u32, foreground: [u8; 3], background: [u8; 3]) -> Self {
        Self {
            image: RgbImage::from_pixel(width, height, Rgb(background)),
            foreground: Rgb(foreground),
        }
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Blend the foreground over the pixel at (x, y) by `coverage` in `0.0..=1.0`.
    /// Points outside the canvas are ignored.
    pub fn plot(&mut self, x: i64, y: i64, coverage: f32) {
        if x < 0 || y < 0 || x >= i64::from(self.width()) || y >= i64::from(self.height()) {
            return;
        }
        let coverage = coverage.clamp(0.0, 1.0);
        if coverage <= 0.0 {
            return;
        }
        let fg = self.foreground;
        let pixel = self.image.get_pixel_mut(x as u32, y as u32);
        for (dst, src) in pixel.0.iter_mut().zip(fg.0) {
            let blended = f32::from(*dst) + (f32::from(src) - f32::from(*dst)) * coverage;
            *dst = blended.round() as u8;
        }
    }

    pub fn pixel(&self, x: u32, y: u32) -> [u8; 3] {
        self.image.get_pixel(x, y).0
    }

    pub fn as_image(&self) -> &RgbImage {
        &self.image
    }
}

// ═══════════════════════════════════════════════════════════════════════
// Glyph painting
// ═══════════════════════════════════════════════════════════════════════

/// Draws runs of text onto a [`Canvas`].
///
/// [`super::font::FontPainter`] is the TrueType implementation; anything
/// else with stable advances works, which keeps the rasterizer testable
/// without a font file.
pub trait GlyphPainter: Send + Sync {
    /// Horizontal advance of `text` in pixels.
    fn text_width(&self, text: &str) -> f32;

    /// Draw `text` starting at `x` with its baseline on `baseline`.
    fn draw_text(&self, canvas: &mut Canvas, x: f32, baseline: f32, text: &str);
}

// ═══════════════════════════════════════════════════════════════════════
// Rasterizer
// ═══════════════════════════════════════════════════════════════════════

fn draw_centered(canvas: &mut Canvas, painter: &dyn GlyphPainter, baseline: u32, text: &str) {
    let x = ((canvas.width() as f32 - painter.text_width(text)) / 2.0).max(0.0);
    painter.draw_text(canvas, x, baseline as f32, text);
}

/// Draw `request` at the positions in `plan`.
pub(super) fn rasterize(
    canvas: &mut Canvas,
    painter: &dyn GlyphPainter,
    request: &RenderRequest,
    plan: &LayoutPlan,
) {
    if let (Some(title), Some(baseline)) = (request.title_text(), plan.title_baseline) {
        draw_centered(canvas, painter, baseline, title);
    }

    for (section, layout) in request.sections.iter().zip(&plan.sections) {
        if let (Some(subtitle), Some(baseline)) = (section.subtitle_text(), layout.subtitle_baseline) {
            draw_centered(canvas, painter, baseline, subtitle);
        }

        for (row_idx, &baseline) in layout.row_baselines.iter().enumerate() {
            for (col_idx, &x) in layout.column_offsets.iter().enumerate() {
                let text = section.cell(row_idx, col_idx);
                if !text.is_empty() {
                    painter.draw_text(canvas, x as f32, baseline as f32, text);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_canvas_is_filled_with_background() {
        let canvas = Canvas::new(3, 2, [255, 255, 255], [10, 20, 30]);
        assert_eq!(canvas.width(), 3);
        assert_eq!(canvas.height(), 2);
        assert!(canvas.as_image().pixels().all(|p| p.0 == [10, 20, 30]));
    }

    #[test]
    fn plot_blends_by_coverage() {
        let mut canvas = Canvas::new(2, 1, [255, 255, 255], [0, 0, 0]);
        canvas.plot(0, 0, 1.0);
        canvas.plot(1, 0, 0.5);
        assert_eq!(canvas.pixel(0, 0), [255, 255, 255]);
        assert_eq!(canvas.pixel(1, 0), [128, 128, 128]);
    }

    #[test]
    fn plot_clips_outside_points() {
        let mut canvas = Canvas::new(2, 2, [255, 255, 255], [0, 0, 0]);
        canvas.plot(-1, 0, 1.0);
        canvas.plot(0, 2, 1.0);
        canvas.plot(5, 5, 1.0);
        canvas.plot(1, 1, 0.0);
        assert!(canvas.as_image().pixels().all(|p| p.0 == [0, 0, 0]));
    }
}
