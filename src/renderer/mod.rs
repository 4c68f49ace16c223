//! Table renderer: turns a [`RenderRequest`] into PNG bytes.
//!
//! Rendering is two-phase: [`compute_layout`] sizes every column and line
//! without touching pixels, then the canvas is allocated once at the planned
//! size, drawn, and encoded. A request with nothing to draw produces no
//! image at all rather than a blank one.

mod canvas;
mod constants;
mod encoder;
mod font;
mod layout;
mod metrics;

use std::io::Write;
use std::sync::Arc;

use tracing::{debug, error};

use crate::config::RenderConfig;
use crate::error::{RenderError, Result};
use crate::model::RenderRequest;
use encoder::encode_png;

pub use canvas::{Canvas, GlyphPainter};
pub use font::{FontAsset, FontPainter};
pub use layout::{compute_layout, LayoutPlan, SectionLayout};
pub use metrics::{measure, measure_with};

// ═══════════════════════════════════════════════════════════════════════
// Public API
// ═══════════════════════════════════════════════════════════════════════

/// Pixel dimensions of an image that was written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageSize {
    pub width: u32,
    pub height: u32,
}

/// Renders requests with one configuration and one loaded font.
///
/// Construction does the only font I/O; a `Renderer` is `Send + Sync` and
/// can serve concurrent renders from behind an `Arc`.
#[derive(Clone)]
pub struct Renderer {
    config: RenderConfig,
    painter: Arc<dyn GlyphPainter>,
}

impl std::fmt::Debug for Renderer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Renderer").field("config", &self.config).finish_non_exhaustive()
    }
}

impl Renderer {
    /// Load the font named by `config` and build a renderer around it.
    pub fn new(config: RenderConfig) -> Result<Self> {
        let asset = FontAsset::load(&config.font_path).inspect_err(|e| error!("{e}"))?;
        Ok(Self::with_font(config, &asset))
    }

    /// Build a renderer from a font that is already loaded.
    pub fn with_font(config: RenderConfig, asset: &FontAsset) -> Self {
        let painter = FontPainter::new(asset, &config.font);
        Self::with_painter(config, Arc::new(painter))
    }

    /// Build a renderer that draws text with `painter`.
    pub fn with_painter(config: RenderConfig, painter: Arc<dyn GlyphPainter>) -> Self {
        Self { config, painter }
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// The layout `request` would be drawn with, or `None` if nothing would be drawn.
    pub fn plan(&self, request: &RenderRequest) -> Option<LayoutPlan> {
        compute_layout(request, &self.config.font, self.config.width_mode)
    }

    /// Render `request` to PNG bytes. `Ok(None)` means there was nothing to draw.
    pub fn render(&self, request: &RenderRequest) -> Result<Option<Vec<u8>>> {
        let mut bytes = Vec::new();
        Ok(self.render_to(request, &mut bytes)?.map(|_| bytes))
    }

    /// Render `request` as PNG into `sink`, flushing it before returning.
    ///
    /// Returns the image size, or `None` without writing anything when there
    /// was nothing to draw. On error, whatever reached the sink is not a
    /// valid image.
    pub fn render_to<W: Write>(&self, request: &RenderRequest, sink: W) -> Result<Option<ImageSize>> {
        let Some(plan) = self.plan(request) else {
            debug!("empty render request; nothing to draw");
            return Ok(None);
        };
        debug!(
            width = plan.canvas_width,
            height = plan.canvas_height,
            sections = plan.sections.len(),
            "planned table image"
        );

        let mut canvas = Canvas::new(
            plan.canvas_width,
            plan.canvas_height,
            self.config.foreground,
            self.config.background,
        );
        canvas::rasterize(&mut canvas, self.painter.as_ref(), request, &plan);

        encode_png(canvas.as_image(), sink)
            .map_err(RenderError::from)
            .inspect_err(|e| error!("{e}"))?;

        Ok(Some(ImageSize {
            width: plan.canvas_width,
            height: plan.canvas_height,
        }))
    }
}
