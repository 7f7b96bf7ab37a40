//! Emoji Board Core
//!
//! Engine behind the chat client's emoji/sticker picker board: heterogeneous
//! row assembly, grid-size estimation, active-section tracking, and jump
//! navigation, on top of the virtualized window from `emoji-board-virtual`.
//!
//! The engine is synchronous and total over its input domain: list assembly
//! is a pure snapshot of the source collections, failures like a vanished
//! jump target degrade to logged no-ops, and an empty sticker tab is an
//! explicit placeholder state rather than an error.
//!
//! # Example
//!
//! ```
//! use emoji_board_core::{BoardConfig, Modifiers, PickerBoard, Selection};
//! use emoji_board_model::{ImagePack, ImageUsage, PackImage};
//!
//! let mut board = PickerBoard::new(BoardConfig::default());
//! board.on_viewport_resize(600);
//! board.set_sources(
//!     vec![ImagePack::new(
//!         "!pack:example.org",
//!         vec![PackImage::new("blob", "mxc://pack/blob", ImageUsage::Both)],
//!     )],
//!     Vec::new(),
//! );
//!
//! // Sidebar click jumps to the pack's section.
//! board.jump_to_section("custom-!pack:example.org").unwrap();
//!
//! // User commits a selection; the host closes the board if requested.
//! let image = PackImage::new("blob", "mxc://pack/blob", ImageUsage::Both);
//! let activation = board.activate(Selection::CustomEmoji(image), Modifiers::default());
//! assert!(activation.close_requested);
//! ```

mod assemble;
mod board;
mod metrics;
mod rate_limit;
mod recent;
mod search;
mod tracker;

pub use assemble::{
    assemble, custom_pack_key, native_group_key, sticker_pack_key, Row, RowKind, RECENT_KEY,
    SEARCH_KEY,
};
pub use board::{Activation, BoardConfig, JumpError, Modifiers, PickerBoard, Selection};
pub use metrics::{
    GridMetrics, DEFAULT_EMOJI_CELL, DEFAULT_GRID_WIDTH, DEFAULT_HEADER_HEIGHT,
    DEFAULT_STICKER_CELL,
};
pub use rate_limit::{Debounce, Throttle, SCROLL_THROTTLE, SEARCH_DEBOUNCE};
pub use recent::{RecentEmojis, DEFAULT_RECENT_CAPACITY};
pub use search::{search_corpus, substring_search, SearchEntry, SearchResult, SEARCH_LIMIT};
pub use tracker::ActiveSectionTracker;
