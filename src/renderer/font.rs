//! TrueType font asset and the `ab_glyph` painter.

use std::path::{Path, PathBuf};

use ab_glyph::{point, Font, FontArc, GlyphId, PxScale, ScaleFont};
use tracing::info;

use crate::config::FontMetrics;
use crate::error::FontAssetError;
use super::canvas::{Canvas, GlyphPainter};

/// A parsed font, cheap to clone and shared read-only between renders.
#[derive(Clone)]
pub struct FontAsset {
    path: PathBuf,
    font: FontArc,
}

impl std::fmt::Debug for FontAsset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FontAsset").field("path", &self.path).finish()
    }
}

impl FontAsset {
    /// Read and parse the font file at `path`.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, FontAssetError> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(|source| FontAssetError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let asset = Self::from_bytes(bytes, path)?;
        info!(path = %path.display(), glyphs = asset.font.glyph_count(), "loaded font asset");
        Ok(asset)
    }

    /// Parse font bytes already in memory. `origin` only labels errors.
    pub fn from_bytes(bytes: Vec<u8>, origin: impl Into<PathBuf>) -> Result<Self, FontAssetError> {
        let path = origin.into();
        match FontArc::try_from_vec(bytes) {
            Ok(font) => Ok(Self { path, font }),
            Err(_) => Err(FontAssetError::Malformed { path }),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Paints text with a TrueType font at a fixed size.
pub struct FontPainter {
    font: FontArc,
    scale: PxScale,
}

impl FontPainter {
    pub fn new(asset: &FontAsset, metrics: &FontMetrics) -> Self {
        let px = metrics.pixel_size();
        // Point sizes are em sizes; PxScale is ascent-to-descent height.
        let scale = asset.font.pt_to_px_scale(px).unwrap_or_else(|| PxScale::from(px));
        Self {
            font: asset.font.clone(),
            scale,
        }
    }

    /// Glyph ids of `text` paired with their pen x-offset from the start of the run.
    fn layout_run(&self, text: &str) -> (Vec<(GlyphId, f32)>, f32) {
        let scaled = self.font.as_scaled(self.scale);
        let mut caret = 0.0;
        let mut previous: Option<GlyphId> = None;
        let mut glyphs = Vec::with_capacity(text.len());
        for c in text.chars() {
            let id = scaled.glyph_id(c);
            if let Some(prev) = previous {
                caret += scaled.kern(prev, id);
            }
            glyphs.push((id, caret));
            caret += scaled.h_advance(id);
            previous = Some(id);
        }
        (glyphs, caret)
    }
}

impl GlyphPainter for FontPainter {
    fn text_width(&self, text: &str) -> f32 {
        self.layout_run(text).1
    }

    fn draw_text(&self, canvas: &mut Canvas, x: f32, baseline: f32, text: &str) {
        let (glyphs, _) = self.layout_run(text);
        for (id, offset) in glyphs {
            let glyph = id.with_scale_and_position(self.scale, point(x + offset, baseline));
            let Some(outlined) = self.font.outline_glyph(glyph) else {
                continue;
            };
            let bounds = outlined.px_bounds();
            let left = bounds.min.x as i64;
            let top = bounds.min.y as i64;
            outlined.draw(|gx, gy, coverage| {
                canvas.plot(left + i64::from(gx), top + i64::from(gy), coverage);
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_non_font_bytes() {
        let err = FontAsset::from_bytes(b"definitely not a font".to_vec(), "inline").unwrap_err();
        assert!(matches!(err, FontAssetError::Malformed { .. }));
    }

    #[test]
    fn reports_missing_file() {
        let err = FontAsset::load("/nonexistent/font.ttf").unwrap_err();
        match err {
            FontAssetError::Read { path, .. } => assert_eq!(path, Path::new("/nonexistent/font.ttf")),
            other => panic!("unexpected error: {other}"),
        }
    }
}
