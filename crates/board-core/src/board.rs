//! Board orchestrator.
//!
//! Owns the source collections, the assembled row list, the virtualized
//! window, and the active-section tracker, and wires the board-level
//! behaviors together: tab switching with scroll reset, the search
//! lifecycle, jump navigation, activation events, and the hover preview.
//!
//! Any source or tab change rebuilds the row list wholesale and pushes the
//! new keys/sizes into the window atomically; consumers never observe a
//! partially updated list.

use crate::assemble::{assemble, Row};
use crate::metrics::GridMetrics;
use crate::recent::{RecentEmojis, DEFAULT_RECENT_CAPACITY};
use crate::search::{search_corpus, SearchEntry, SearchResult};
use crate::tracker::ActiveSectionTracker;
use emoji_board_model::{EmojiData, ImagePack, NativeGroup, PackImage, Tab};
use emoji_board_virtual::{Align, VirtualItem, VirtualWindow};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum JumpError {
    /// The target section left the list (e.g. its pack was removed) between
    /// render and click. Non-fatal; the view stays where it is.
    #[error("no section with key `{key}` in the current list")]
    NotFound { key: String },
}

/// Modifier keys held during an activation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub shift: bool,
    pub alt: bool,
}

impl Modifiers {
    /// A modifier-held activation keeps the board open for multi-select.
    pub fn keeps_open(self) -> bool {
        self.shift || self.alt
    }
}

/// What the user committed: a native emoji, a custom pack emoji, or a sticker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    Unicode(EmojiData),
    CustomEmoji(PackImage),
    Sticker(PackImage),
}

/// Outcome of an activation, reported upward to the host. The host executes
/// the close; the engine only decides it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Activation {
    pub selection: Selection,
    pub modifiers: Modifiers,
    pub close_requested: bool,
}

#[derive(Debug, Clone)]
pub struct BoardConfig {
    pub tab: Tab,
    pub overscan: usize,
    pub emoji_metrics: GridMetrics,
    pub sticker_metrics: GridMetrics,
    pub recent_capacity: usize,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            tab: Tab::Emoji,
            overscan: 2,
            emoji_metrics: GridMetrics::emoji_defaults(),
            sticker_metrics: GridMetrics::sticker_defaults(),
            recent_capacity: DEFAULT_RECENT_CAPACITY,
        }
    }
}

/// The emoji/sticker picker board.
#[derive(Debug, Clone)]
pub struct PickerBoard {
    tab: Tab,
    emoji_metrics: GridMetrics,
    sticker_metrics: GridMetrics,
    packs: Vec<ImagePack>,
    native_groups: Vec<NativeGroup>,
    recents: RecentEmojis,
    search: Option<SearchResult>,
    rows: Vec<Row>,
    window: VirtualWindow,
    tracker: ActiveSectionTracker,
    preview: Option<Selection>,
}

impl PickerBoard {
    pub fn new(config: BoardConfig) -> Self {
        Self {
            tab: config.tab,
            emoji_metrics: config.emoji_metrics,
            sticker_metrics: config.sticker_metrics,
            packs: Vec::new(),
            native_groups: Vec::new(),
            recents: RecentEmojis::new(config.recent_capacity),
            search: None,
            rows: Vec::new(),
            window: VirtualWindow::new().with_overscan(config.overscan),
            tracker: ActiveSectionTracker::new(),
            preview: None,
        }
    }

    pub fn tab(&self) -> Tab {
        self.tab
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn window(&self) -> &VirtualWindow {
        &self.window
    }

    pub fn active_key(&self) -> Option<&str> {
        self.tracker.active_key()
    }

    pub fn recents(&self) -> &RecentEmojis {
        &self.recents
    }

    pub fn search(&self) -> Option<&SearchResult> {
        self.search.as_ref()
    }

    pub fn preview(&self) -> Option<&Selection> {
        self.preview.as_ref()
    }

    /// Replace the catalog sources and rebuild. Scroll position is kept;
    /// stable keys make it land on the same logical groups.
    pub fn set_sources(&mut self, packs: Vec<ImagePack>, native_groups: Vec<NativeGroup>) {
        self.packs = packs;
        self.native_groups = native_groups;
        self.rebuild();
    }

    /// Adopt a persisted recents list (host-loaded account data).
    pub fn set_recents(&mut self, recents: RecentEmojis) {
        self.recents = recents;
        self.rebuild();
    }

    /// Switch tabs. A genuine switch rebuilds and resets scroll to the top
    /// exactly once; re-selecting the current tab is a no-op.
    pub fn set_tab(&mut self, tab: Tab) {
        if self.tab == tab {
            return;
        }
        self.tab = tab;
        self.rebuild();
        self.reset_scroll();
    }

    /// Everything searchable on the current tab, for the host's indexer.
    pub fn search_corpus(&self) -> Vec<SearchEntry> {
        search_corpus(self.tab, &self.packs, &self.native_groups)
    }

    /// Install a new result set. A changed result set rebuilds and resets
    /// scroll to the top; re-delivering an identical set is a no-op.
    pub fn set_search(&mut self, result: SearchResult) {
        if self.search.as_ref() == Some(&result) {
            return;
        }
        self.search = Some(result);
        self.rebuild();
        self.reset_scroll();
    }

    /// Clear the query (empty search box).
    pub fn clear_search(&mut self) {
        if self.search.take().is_some() {
            self.rebuild();
            self.reset_scroll();
        }
    }

    pub fn on_viewport_resize(&mut self, height: u32) {
        self.window.set_viewport_height(height);
    }

    /// Apply a (host-throttled) scroll event and retrack the active section.
    /// Returns the new active key only when it changed.
    pub fn on_scroll(&mut self, offset: u64) -> Option<String> {
        self.window.set_scroll_offset(offset);
        let items = self.window.visible_items();
        self.tracker
            .update(&items, self.window.scroll_offset(), self.window.viewport_height())
    }

    /// Rendered rows with their payload snapshots, for the host to paint.
    pub fn visible_rows(&self) -> Vec<(VirtualItem<'_>, &Row)> {
        self.window
            .visible_items()
            .into_iter()
            .map(|item| {
                let row = &self.rows[item.index];
                (item, row)
            })
            .collect()
    }

    /// Sidebar click: scroll the section with this key to the viewport top.
    ///
    /// A key that is no longer present (pack removed concurrently) is a
    /// logged no-op reported as [`JumpError::NotFound`].
    pub fn jump_to_section(&mut self, key: &str) -> Result<u64, JumpError> {
        let Some(index) = self.rows.iter().position(|row| row.key == key) else {
            log::warn!("jump target `{key}` is not in the current list");
            return Err(JumpError::NotFound { key: key.to_owned() });
        };

        let offset = self.window.scroll_to_index(index, Align::Start);
        self.tracker.set_active(key);
        Ok(offset)
    }

    /// Commit a selection. A plain activation closes the board and records
    /// unicode emoji into recents; a modifier-held one keeps it open.
    pub fn activate(&mut self, selection: Selection, modifiers: Modifiers) -> Activation {
        let close_requested = !modifiers.keeps_open();

        if close_requested {
            if let Selection::Unicode(emoji) = &selection {
                self.recents.record(emoji.clone());
                self.rebuild();
            }
        }

        Activation { selection, modifiers, close_requested }
    }

    /// Hover/focus preview for the footer.
    pub fn set_preview(&mut self, selection: Selection) {
        self.preview = Some(selection);
    }

    /// Whether the host should render the "No Sticker Packs" placeholder.
    pub fn shows_empty_placeholder(&self) -> bool {
        self.tab == Tab::Sticker && self.rows.is_empty()
    }

    fn rebuild(&mut self) {
        self.rows = assemble(
            self.tab,
            self.search.as_ref(),
            &self.recents.to_vec(),
            &self.packs,
            &self.native_groups,
            &self.emoji_metrics,
            &self.sticker_metrics,
        );
        self.window
            .set_rows(self.rows.iter().map(|row| (row.key.clone(), row.size)));
    }

    fn reset_scroll(&mut self) {
        self.window.scroll_to_offset(0, Align::Start);
        let items = self.window.visible_items();
        let _ = self
            .tracker
            .update(&items, self.window.scroll_offset(), self.window.viewport_height());
    }
}
