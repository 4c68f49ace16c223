//! Layout computation. Sizes every column and line before any pixel is
//! drawn, so the canvas can be allocated once at its final size.

use tracing::warn;

use crate::config::{FontMetrics, WidthMode};
use crate::model::{RenderRequest, TableSection};
use super::constants::*;
use super::metrics::measure_with;

// ═══════════════════════════════════════════════════════════════════════
// Layout structures
// ═══════════════════════════════════════════════════════════════════════

/// Positions of everything the rasterizer will draw.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutPlan {
    pub canvas_width: u32,
    pub canvas_height: u32,
    /// Baseline of the centered title, if there is one
    pub title_baseline: Option<u32>,
    pub sections: Vec<SectionLayout>,
}

/// Placement of one section. Baselines are absolute canvas coordinates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionLayout {
    pub subtitle_baseline: Option<u32>,
    /// Left edge of each column's text
    pub column_offsets: Vec<u32>,
    /// Width of each column including its padding
    pub column_widths: Vec<u32>,
    /// Baseline of each grid row
    pub row_baselines: Vec<u32>,
    /// Horizontal extent needed by this section
    pub width: u32,
    /// Vertical space taken by this section
    pub height: u32,
}

// ═══════════════════════════════════════════════════════════════════════
// Helper functions
// ═══════════════════════════════════════════════════════════════════════

/// Width reserved for a line drawn centered: its estimate plus a margin each side.
fn centered_width(text: &str, mode: WidthMode) -> u32 {
    measure_with(text, mode) as u32 * PX_PER_UNIT + 2 * CENTERED_TEXT_MARGIN
}

/// Column widths of a section, `max(measure(cell)) * 11 + 20` per column.
pub(super) fn column_widths(section: &TableSection, mode: WidthMode) -> Vec<u32> {
    (0..section.column_count())
        .map(|col| {
            let units = (0..section.rows.len())
                .map(|row| measure_with(section.cell(row, col), mode))
                .max()
                .unwrap_or(0);
            units as u32 * PX_PER_UNIT + COLUMN_PADDING
        })
        .collect()
}

/// Left edges of the columns: each starts where the previous one ends.
pub(super) fn column_offsets(widths: &[u32]) -> Vec<u32> {
    widths
        .iter()
        .scan(FIRST_COLUMN_X, |x, &w| {
            let start = *x;
            *x += w;
            Some(start)
        })
        .collect()
}

// ═══════════════════════════════════════════════════════════════════════
// Main layout computation
// ═══════════════════════════════════════════════════════════════════════

/// Plan the image for `request`. Returns `None` when there is nothing to draw.
pub fn compute_layout(
    request: &RenderRequest,
    metrics: &FontMetrics,
    mode: WidthMode,
) -> Option<LayoutPlan> {
    if request.is_blank() {
        return None;
    }

    let line_height = metrics.line_height();
    let top_margin = metrics.top_margin();
    // Baseline of the next line to be drawn.
    let mut cursor = top_margin;

    let mut canvas_width = request.min_width.unwrap_or(0);

    let title_baseline = request.title_text().map(|title| {
        canvas_width = canvas_width.max(centered_width(title, mode));
        let baseline = cursor;
        cursor += line_height;
        baseline
    });

    let mut sections = Vec::with_capacity(request.sections.len());
    for (idx, section) in request.sections.iter().enumerate() {
        if section.is_ragged() {
            warn!(
                section = idx,
                columns = section.column_count(),
                "ragged section rows; padding short rows with empty cells"
            );
        }

        let section_top = cursor;
        let mut width = 0;

        let subtitle_baseline = section.subtitle_text().map(|subtitle| {
            width = centered_width(subtitle, mode);
            let baseline = cursor;
            cursor += line_height;
            baseline
        });

        let widths = column_widths(section, mode);
        let offsets = column_offsets(&widths);
        if !widths.is_empty() {
            width = width.max(FIRST_COLUMN_X + widths.iter().sum::<u32>());
        }

        let row_baselines = section
            .rows
            .iter()
            .map(|_| {
                let baseline = cursor;
                cursor += line_height;
                baseline
            })
            .collect();

        canvas_width = canvas_width.max(width);
        sections.push(SectionLayout {
            subtitle_baseline,
            column_offsets: offsets,
            column_widths: widths,
            row_baselines,
            width,
            height: cursor - section_top,
        });
    }

    // The cursor started on the first baseline, so it now sits exactly
    // one line below the last one: top margin plus every line's height.
    let canvas_height = cursor;

    if canvas_width == 0 || canvas_height == 0 {
        return None;
    }

    Some(LayoutPlan {
        canvas_width,
        canvas_height,
        title_baseline,
        sections,
    })
}
