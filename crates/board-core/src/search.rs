//! Search result plumbing.
//!
//! The fuzzy indexer itself is a collaborator; the board only needs the
//! result-set shape and a way to build the match corpus for the active tab.
//! A capped case-insensitive substring matcher is provided as the default
//! ranking function and can be replaced by the host wholesale.

use emoji_board_model::{EmojiData, ImagePack, NativeGroup, PackImage, Tab};

/// Maximum number of matches surfaced per query.
pub const SEARCH_LIMIT: usize = 26;

/// One searchable entry, either a native emoji or a custom pack image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchEntry {
    Unicode(EmojiData),
    Image(PackImage),
}

impl SearchEntry {
    /// Text matched against the query: the `:shortcode:` form plus the
    /// caption for pack images.
    pub fn haystack(&self) -> String {
        match self {
            SearchEntry::Unicode(emoji) => format!(":{}:", emoji.shortcode),
            SearchEntry::Image(image) => {
                format!(":{}: {}", image.shortcode, image.body.as_deref().unwrap_or(""))
            }
        }
    }
}

/// Result set for an active query. An empty `entries` list still represents
/// an active search ("No Results found" is a host label, not an absent row).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    pub query: String,
    pub entries: Vec<SearchEntry>,
}

/// Everything searchable on the given tab: pack images for the tab's usage,
/// plus the native catalog on the emoji tab.
pub fn search_corpus(tab: Tab, packs: &[ImagePack], native_groups: &[NativeGroup]) -> Vec<SearchEntry> {
    let usage = tab.usage();
    let mut corpus: Vec<SearchEntry> = packs
        .iter()
        .flat_map(|pack| pack.images_for(usage))
        .cloned()
        .map(SearchEntry::Image)
        .collect();

    if tab == Tab::Emoji {
        corpus.extend(
            native_groups
                .iter()
                .flat_map(|group| group.emojis.iter())
                .cloned()
                .map(SearchEntry::Unicode),
        );
    }

    corpus
}

/// Default ranking function: case-insensitive containment over the haystack,
/// capped at `limit`, preserving corpus order.
pub fn substring_search(corpus: &[SearchEntry], query: &str, limit: usize) -> SearchResult {
    let needle = query.to_lowercase();
    let entries = corpus
        .iter()
        .filter(|entry| entry.haystack().to_lowercase().contains(&needle))
        .take(limit)
        .cloned()
        .collect();

    SearchResult { query: query.to_owned(), entries }
}
