//! Ordered row assembly for the current tab.
//!
//! Assembly is a total, pure transformation: it snapshots the source
//! collections into an ordered list of immutable rows with stable keys and
//! precomputed height estimates. The list is rebuilt wholesale whenever a
//! source or the tab changes; rows are never mutated in place.

use crate::metrics::GridMetrics;
use crate::search::SearchResult;
use emoji_board_model::{EmojiData, ImagePack, NativeGroup, NativeGroupId, PackUsage, Tab};

pub const SEARCH_KEY: &str = "search";
pub const RECENT_KEY: &str = "recent";

pub fn custom_pack_key(pack_id: &str) -> String {
    format!("custom-{pack_id}")
}

pub fn sticker_pack_key(pack_id: &str) -> String {
    format!("sticker-{pack_id}")
}

pub fn native_group_key(id: NativeGroupId) -> String {
    format!("native-{id}")
}

/// Payload snapshot for one assembled row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowKind {
    SearchResults(SearchResult),
    Recent(Vec<EmojiData>),
    CustomPack(ImagePack),
    StickerPack(ImagePack),
    NativeGroup(NativeGroup),
}

/// One row of the board list. `key` is stable across rebuilds for rows
/// representing the same logical group; `size` is the estimated pixel height.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub key: String,
    pub size: u32,
    pub kind: RowKind,
}

/// Build the ordered row list for the given tab.
///
/// Emoji tab order: search results (if a query is active), recents (if any),
/// custom packs with emoticon content, then the native catalog in catalog
/// order. Sticker tab: search results, then packs with sticker content.
pub fn assemble(
    tab: Tab,
    search: Option<&SearchResult>,
    recents: &[EmojiData],
    packs: &[ImagePack],
    native_groups: &[NativeGroup],
    emoji_metrics: &GridMetrics,
    sticker_metrics: &GridMetrics,
) -> Vec<Row> {
    let mut rows = Vec::new();

    if let Some(result) = search {
        let metrics = match tab {
            Tab::Emoji => emoji_metrics,
            Tab::Sticker => sticker_metrics,
        };
        rows.push(Row {
            key: SEARCH_KEY.to_owned(),
            size: metrics.group_size(result.entries.len()),
            kind: RowKind::SearchResults(result.clone()),
        });
    }

    match tab {
        Tab::Emoji => {
            if !recents.is_empty() {
                rows.push(Row {
                    key: RECENT_KEY.to_owned(),
                    size: emoji_metrics.group_size(recents.len()),
                    kind: RowKind::Recent(recents.to_vec()),
                });
            }

            for pack in packs {
                if !pack.has_content_for(PackUsage::Emoticon) {
                    continue;
                }
                rows.push(Row {
                    key: custom_pack_key(&pack.id),
                    size: emoji_metrics.group_size(pack.emoticons().count()),
                    kind: RowKind::CustomPack(pack.clone()),
                });
            }

            for group in native_groups {
                rows.push(Row {
                    key: native_group_key(group.id),
                    size: emoji_metrics.group_size(group.emojis.len()),
                    kind: RowKind::NativeGroup(group.clone()),
                });
            }
        }
        Tab::Sticker => {
            for pack in packs {
                if !pack.has_content_for(PackUsage::Sticker) {
                    continue;
                }
                rows.push(Row {
                    key: sticker_pack_key(&pack.id),
                    size: sticker_metrics.group_size(pack.stickers().count()),
                    kind: RowKind::StickerPack(pack.clone()),
                });
            }
        }
    }

    debug_assert!(
        {
            let mut keys: Vec<&str> = rows.iter().map(|row| row.key.as_str()).collect();
            keys.sort_unstable();
            keys.windows(2).all(|pair| pair[0] != pair[1])
        },
        "assembled rows contain a duplicate key"
    );

    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::{SearchEntry, SearchResult};
    use emoji_board_model::{ImageUsage, PackImage};

    fn emoji(shortcode: &str) -> EmojiData {
        EmojiData::new("\u{1f600}", shortcode, shortcode)
    }

    fn packs() -> Vec<ImagePack> {
        vec![
            ImagePack::new(
                "!a:example.org",
                vec![
                    PackImage::new("wave", "mxc://a/1", ImageUsage::Emoticon),
                    PackImage::new("blob", "mxc://a/2", ImageUsage::Both),
                ],
            ),
            ImagePack::new(
                "!b:example.org",
                vec![PackImage::new("bigcat", "mxc://b/1", ImageUsage::Sticker)],
            ),
        ]
    }

    fn native() -> Vec<NativeGroup> {
        vec![
            NativeGroup::new(NativeGroupId::People, vec![emoji("grin")]),
            NativeGroup::new(NativeGroupId::Nature, vec![emoji("dog"), emoji("cat")]),
        ]
    }

    fn keys(rows: &[Row]) -> Vec<&str> {
        rows.iter().map(|row| row.key.as_str()).collect()
    }

    fn assemble_emoji(search: Option<&SearchResult>, recents: &[EmojiData]) -> Vec<Row> {
        assemble(
            Tab::Emoji,
            search,
            recents,
            &packs(),
            &native(),
            &GridMetrics::emoji_defaults(),
            &GridMetrics::sticker_defaults(),
        )
    }

    #[test]
    fn emoji_tab_orders_search_recent_packs_native() {
        let result = SearchResult { query: "cat".into(), entries: Vec::new() };
        let rows = assemble_emoji(Some(&result), &[emoji("grin")]);

        assert_eq!(
            keys(&rows),
            ["search", "recent", "custom-!a:example.org", "native-people", "native-nature"]
        );
    }

    #[test]
    fn sticker_tab_contains_only_packs_with_stickers() {
        let rows = assemble(
            Tab::Sticker,
            None,
            &[emoji("grin")],
            &packs(),
            &native(),
            &GridMetrics::emoji_defaults(),
            &GridMetrics::sticker_defaults(),
        );

        assert_eq!(keys(&rows), ["sticker-!a:example.org", "sticker-!b:example.org"]);
    }

    #[test]
    fn sticker_tab_with_no_packs_yields_empty_list() {
        let rows = assemble(
            Tab::Sticker,
            None,
            &[],
            &[],
            &native(),
            &GridMetrics::emoji_defaults(),
            &GridMetrics::sticker_defaults(),
        );
        assert!(rows.is_empty());
    }

    #[test]
    fn assembly_is_deterministic() {
        let first = assemble_emoji(None, &[emoji("grin")]);
        let second = assemble_emoji(None, &[emoji("grin")]);
        assert_eq!(keys(&first), keys(&second));
    }

    #[test]
    fn keys_are_unique() {
        let result = SearchResult { query: "q".into(), entries: Vec::new() };
        let rows = assemble_emoji(Some(&result), &[emoji("grin")]);

        let mut seen: Vec<&str> = keys(&rows);
        seen.sort_unstable();
        seen.dedup();
        assert_eq!(seen.len(), rows.len());
    }

    #[test]
    fn unrelated_source_changes_keep_pack_keys_stable() {
        let without_search = assemble_emoji(None, &[]);
        let result = SearchResult { query: "cat".into(), entries: Vec::new() };
        let with_search = assemble_emoji(Some(&result), &[]);

        let pack_keys = |rows: &[Row]| -> Vec<String> {
            rows.iter()
                .filter(|row| !matches!(row.kind, RowKind::SearchResults(_)))
                .map(|row| row.key.clone())
                .collect()
        };

        assert_eq!(pack_keys(&without_search), pack_keys(&with_search));
    }

    #[test]
    fn search_row_is_sized_by_the_active_tab_grid() {
        let entries: Vec<SearchEntry> =
            (0..4).map(|i| SearchEntry::Unicode(emoji(&format!("e{i}")))).collect();
        let result = SearchResult { query: "e".into(), entries };

        let emoji_rows = assemble_emoji(Some(&result), &[]);
        assert_eq!(emoji_rows[0].size, GridMetrics::emoji_defaults().group_size(4));

        let sticker_rows = assemble(
            Tab::Sticker,
            Some(&result),
            &[],
            &packs(),
            &native(),
            &GridMetrics::emoji_defaults(),
            &GridMetrics::sticker_defaults(),
        );
        assert_eq!(sticker_rows[0].size, GridMetrics::sticker_defaults().group_size(4));
    }

    #[test]
    fn zero_result_search_row_is_header_sized() {
        let result = SearchResult { query: "zzz".into(), entries: Vec::new() };
        let rows = assemble_emoji(Some(&result), &[]);
        assert_eq!(rows[0].size, GridMetrics::emoji_defaults().group_size(0));
    }

    #[test]
    fn packs_without_emoticons_are_skipped_on_emoji_tab() {
        let rows = assemble_emoji(None, &[]);
        assert!(!keys(&rows).contains(&"custom-!b:example.org"));
    }
}
