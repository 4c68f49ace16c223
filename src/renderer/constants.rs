//! Shared constants for the table renderer (all in pixels).

// ── Horizontal layout ───────────────────────────────────────────────
pub(super) const PX_PER_UNIT: u32 = 11; // one narrow glyph
pub(super) const COLUMN_PADDING: u32 = 20; // added to every column's text width
pub(super) const LEFT_MARGIN: u32 = 20;
pub(super) const COLUMN_GAP: u32 = 20; // before the first column
pub(super) const FIRST_COLUMN_X: u32 = LEFT_MARGIN + COLUMN_GAP;

// ── Centered lines ──────────────────────────────────────────────────
pub(super) const CENTERED_TEXT_MARGIN: u32 = 20; // each side of a title or subtitle
