//! Pixel-height estimation for item grids.
//!
//! A group row renders a header label followed by a grid of fixed-size cells,
//! so its height is fully determined by the item count and the layout
//! constants. The column count is derived from the configured grid width and
//! cell width rather than hard-coded, so a host tracking a live layout can
//! re-derive metrics on resize.

use emoji_board_model::Tab;

/// Default content width shared by both grids, in pixels.
pub const DEFAULT_GRID_WIDTH: u32 = 336;

/// Default emoji cell edge, in pixels. 336 / 48 yields 7 columns.
pub const DEFAULT_EMOJI_CELL: u32 = 48;

/// Default sticker cell edge, in pixels. 336 / 112 yields 3 columns.
pub const DEFAULT_STICKER_CELL: u32 = 112;

/// Group header height, in pixels.
pub const DEFAULT_HEADER_HEIGHT: u32 = 64;

/// Layout constants for one grid kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridMetrics {
    pub header_height: u32,
    pub row_height: u32,
    pub items_per_row: u32,
}

impl GridMetrics {
    /// Derive metrics from the actual grid geometry. A degenerate cell width
    /// still yields one column so the estimator stays total.
    pub fn from_layout(header_height: u32, cell_height: u32, grid_width: u32, cell_width: u32) -> Self {
        let items_per_row = if cell_width == 0 { 1 } else { (grid_width / cell_width).max(1) };
        Self { header_height, row_height: cell_height, items_per_row }
    }

    pub fn emoji_defaults() -> Self {
        Self::from_layout(
            DEFAULT_HEADER_HEIGHT,
            DEFAULT_EMOJI_CELL,
            DEFAULT_GRID_WIDTH,
            DEFAULT_EMOJI_CELL,
        )
    }

    pub fn sticker_defaults() -> Self {
        Self::from_layout(
            DEFAULT_HEADER_HEIGHT,
            DEFAULT_STICKER_CELL,
            DEFAULT_GRID_WIDTH,
            DEFAULT_STICKER_CELL,
        )
    }

    pub fn for_tab(tab: Tab) -> Self {
        match tab {
            Tab::Emoji => Self::emoji_defaults(),
            Tab::Sticker => Self::sticker_defaults(),
        }
    }

    /// Estimated pixel height of a group row holding `count` items.
    /// `group_size(0)` is just the header.
    pub fn group_size(&self, count: usize) -> u32 {
        let rows = count.div_ceil(self.items_per_row as usize) as u32;
        self.header_height + self.row_height * rows
    }
}
