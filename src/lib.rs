//! statboard renders stat tables (box scores, standings) as PNG images
//! for chat clients that cannot show rich text tables.
//!
//! Text is measured in layout units (wide CJK glyphs count double), the
//! whole image is planned before drawing, and the result is encoded as PNG.
//!
//! # Example
//! ```no_run
//! use statboard::{RenderConfig, RenderRequest, Renderer, TableSection};
//!
//! let renderer = Renderer::new(RenderConfig::default()).unwrap();
//! let request = RenderRequest::new("東區戰績").with_section(TableSection::from_cells([
//!     ["排名", "球隊", "勝負", "勝差"],
//!     ["01", "塞爾提克", "64 - 18", "0.0"],
//! ]));
//! if let Some(png) = renderer.render(&request).unwrap() {
//!     std::fs::write("standings.png", png).unwrap();
//! }
//! ```

pub mod config;
pub mod error;
pub mod model;
pub mod renderer;
pub mod tables;

use std::path::Path;

pub use config::{FontMetrics, RenderConfig, WidthMode};
pub use error::{ConfigError, EncodeError, FontAssetError, RenderError, RequestError};
pub use model::*;
pub use renderer::{
    compute_layout, measure, measure_with, Canvas, FontAsset, FontPainter, GlyphPainter,
    ImageSize, LayoutPlan, Renderer, SectionLayout,
};

/// Read a JSON render request from a file.
pub fn read_request<P: AsRef<Path>>(path: P) -> Result<RenderRequest, RequestError> {
    let path = path.as_ref();
    let data = std::fs::read_to_string(path).map_err(|source| RequestError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    RenderRequest::from_json(&data).map_err(|source| RequestError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
