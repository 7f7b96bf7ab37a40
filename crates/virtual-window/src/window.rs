use std::ops::Range;

/// Where a scroll target should land within the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Start,
    Center,
    End,
}

/// One row in the currently rendered window.
///
/// `start` is the absolute offset of the row's top edge within the scrollable
/// extent; the host positions the rendered row there. Borrowed from the
/// window, so the slice of items is only valid until the rows are replaced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VirtualItem<'a> {
    pub index: usize,
    pub key: &'a str,
    pub start: u64,
    pub size: u32,
}

impl VirtualItem<'_> {
    pub fn end(&self) -> u64 {
        self.start + u64::from(self.size)
    }
}

/// Virtualized window over an ordered list of heterogeneous rows.
///
/// Index order is the single source of truth for position: rows are replaced
/// wholesale via [`set_rows`](Self::set_rows) and never reordered in place.
/// Row offsets are prefix sums over the estimated sizes, so range queries are
/// a binary search over row end offsets.
#[derive(Debug, Clone)]
pub struct VirtualWindow {
    keys: Vec<String>,
    /// `offsets[i]` is the top edge of row `i`; `offsets[len]` is the bottom
    /// edge of the last row. Always non-empty, `offsets[0] == padding_start`.
    offsets: Vec<u64>,
    viewport_height: u32,
    scroll_offset: u64,
    overscan: usize,
    padding_start: u32,
    padding_end: u32,
}

impl Default for VirtualWindow {
    fn default() -> Self {
        Self::new()
    }
}

impl VirtualWindow {
    pub fn new() -> Self {
        Self {
            keys: Vec::new(),
            offsets: vec![0],
            viewport_height: 0,
            scroll_offset: 0,
            overscan: 2,
            padding_start: 0,
            padding_end: 0,
        }
    }

    /// Extra rows rendered above and below the viewport.
    pub fn with_overscan(mut self, overscan: usize) -> Self {
        self.overscan = overscan;
        self
    }

    /// Space reserved before row 0, e.g. the lobby hero section.
    pub fn with_padding_start(mut self, padding: u32) -> Self {
        self.padding_start = padding;
        self.rebuild_offsets();
        self
    }

    pub fn with_padding_end(mut self, padding: u32) -> Self {
        self.padding_end = padding;
        self
    }

    /// Replace all rows. Keys must be unique; a duplicate is a caller bug.
    pub fn set_rows<I>(&mut self, rows: I)
    where
        I: IntoIterator<Item = (String, u32)>,
    {
        self.keys.clear();
        self.offsets.clear();
        self.offsets.push(u64::from(self.padding_start));

        let mut cursor = u64::from(self.padding_start);
        for (key, size) in rows {
            cursor += u64::from(size);
            self.keys.push(key);
            self.offsets.push(cursor);
        }

        debug_assert!(
            {
                let mut sorted = self.keys.clone();
                sorted.sort_unstable();
                sorted.windows(2).all(|pair| pair[0] != pair[1])
            },
            "duplicate row keys in virtual window"
        );

        // A shorter list can leave the previous offset past the end.
        self.scroll_offset = self.scroll_offset.min(self.max_scroll_offset());
    }

    pub fn count(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn key(&self, index: usize) -> Option<&str> {
        self.keys.get(index).map(String::as_str)
    }

    /// Index of the row with the given key in the current list.
    pub fn index_of_key(&self, key: &str) -> Option<usize> {
        self.keys.iter().position(|candidate| candidate == key)
    }

    /// Total scrollable extent, including padding. Sizes the spacer element so
    /// native scrollbar behavior is correct without rendering every row.
    pub fn total_size(&self) -> u64 {
        let Some(last) = self.offsets.last() else {
            return 0;
        };
        last + u64::from(self.padding_end)
    }

    pub fn viewport_height(&self) -> u32 {
        self.viewport_height
    }

    pub fn set_viewport_height(&mut self, height: u32) {
        self.viewport_height = height;
        self.scroll_offset = self.scroll_offset.min(self.max_scroll_offset());
    }

    pub fn scroll_offset(&self) -> u64 {
        self.scroll_offset
    }

    /// Apply a scroll position, clamped to the valid range. Returns the offset
    /// actually applied.
    pub fn set_scroll_offset(&mut self, offset: u64) -> u64 {
        self.scroll_offset = offset.min(self.max_scroll_offset());
        self.scroll_offset
    }

    fn max_scroll_offset(&self) -> u64 {
        self.total_size().saturating_sub(u64::from(self.viewport_height))
    }

    /// Re-derive the prefix sums from the existing row sizes, reapplying
    /// `padding_start` as the first offset.
    fn rebuild_offsets(&mut self) {
        let sizes: Vec<u64> = self.offsets.windows(2).map(|pair| pair[1] - pair[0]).collect();

        self.offsets.clear();
        self.offsets.push(u64::from(self.padding_start));

        let mut cursor = u64::from(self.padding_start);
        for size in sizes {
            cursor += size;
            self.offsets.push(cursor);
        }

        self.scroll_offset = self.scroll_offset.min(self.max_scroll_offset());
    }

    /// The row whose extent contains `offset` (first row whose bottom edge is
    /// below it). Clamped to the last row for offsets past the end.
    pub fn index_at_offset(&self, offset: u64) -> usize {
        if self.keys.is_empty() {
            return 0;
        }
        let ends = &self.offsets[1..];
        ends.partition_point(|&end| end <= offset).min(self.keys.len() - 1)
    }

    /// Currently rendered index range: rows intersecting the viewport plus
    /// `overscan` rows on each side, clamped to the row count.
    pub fn visible_range(&self) -> Range<usize> {
        if self.keys.is_empty() {
            return 0..0;
        }

        let first = self.index_at_offset(self.scroll_offset);
        let bottom = self.scroll_offset + u64::from(self.viewport_height);
        let last = self.index_at_offset(bottom);

        let start = first.saturating_sub(self.overscan);
        let end = (last + 1 + self.overscan).min(self.keys.len());
        start..end
    }

    pub fn visible_items(&self) -> Vec<VirtualItem<'_>> {
        self.visible_range()
            .map(|index| VirtualItem {
                index,
                key: &self.keys[index],
                start: self.offsets[index],
                size: (self.offsets[index + 1] - self.offsets[index]) as u32,
            })
            .collect()
    }

    /// Scroll so the row at `index` lands at the given viewport alignment.
    /// The index is clamped to the last row. Returns the applied offset.
    pub fn scroll_to_index(&mut self, index: usize, align: Align) -> u64 {
        if self.keys.is_empty() {
            return self.set_scroll_offset(0);
        }

        let index = index.min(self.keys.len() - 1);
        let start = self.offsets[index];
        let end = self.offsets[index + 1];
        let viewport = u64::from(self.viewport_height);

        let target = match align {
            Align::Start => start,
            Align::Center => (start + (end - start) / 2).saturating_sub(viewport / 2),
            Align::End => end.saturating_sub(viewport),
        };
        self.set_scroll_offset(target)
    }

    /// Scroll so the absolute offset lands at the given viewport alignment.
    pub fn scroll_to_offset(&mut self, offset: u64, align: Align) -> u64 {
        let viewport = u64::from(self.viewport_height);
        let target = match align {
            Align::Start => offset,
            Align::Center => offset.saturating_sub(viewport / 2),
            Align::End => offset.saturating_sub(viewport),
        };
        self.set_scroll_offset(target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn window_with(sizes: &[u32]) -> VirtualWindow {
        let mut window = VirtualWindow::new();
        window.set_viewport_height(100);
        window.set_rows(
            sizes
                .iter()
                .enumerate()
                .map(|(i, &size)| (format!("row-{i}"), size)),
        );
        window
    }

    #[test]
    fn empty_window_has_no_extent_and_no_items() {
        let window = VirtualWindow::new();
        assert_eq!(window.total_size(), 0);
        assert_eq!(window.visible_range(), 0..0);
        assert!(window.visible_items().is_empty());
    }

    #[test]
    fn total_size_is_sum_of_row_sizes() {
        let window = window_with(&[64, 112, 448, 64]);
        assert_eq!(window.total_size(), 64 + 112 + 448 + 64);
    }

    #[test]
    fn visible_items_stay_within_bounds() {
        let mut window = window_with(&[50, 50, 50, 50, 50]);
        for offset in [0, 60, 120, 10_000] {
            window.set_scroll_offset(offset);
            for item in window.visible_items() {
                assert!(item.index < window.count());
                assert_eq!(window.key(item.index), Some(item.key));
            }
        }
    }

    #[test]
    fn visible_range_includes_overscan_clamped_at_edges() {
        let mut window = window_with(&[50; 20]);

        // Top of list: no rows above to overscan.
        assert_eq!(window.visible_range().start, 0);

        // Viewport covers rows 4..6; overscan of 2 extends to 2..8.
        window.set_scroll_offset(210);
        assert_eq!(window.visible_range(), 2..9);
    }

    #[test]
    fn scroll_clamps_past_the_end() {
        let mut window = window_with(&[50; 4]);
        let applied = window.set_scroll_offset(10_000);
        assert_eq!(applied, 200 - 100);
        assert_eq!(window.scroll_offset(), 100);
    }

    #[test]
    fn index_at_offset_uses_row_boundaries() {
        let window = window_with(&[100, 200, 50]);
        assert_eq!(window.index_at_offset(0), 0);
        assert_eq!(window.index_at_offset(99), 0);
        assert_eq!(window.index_at_offset(100), 1);
        assert_eq!(window.index_at_offset(299), 1);
        assert_eq!(window.index_at_offset(300), 2);
        assert_eq!(window.index_at_offset(9_999), 2);
    }

    #[test]
    fn scroll_to_index_aligns_start_center_end() {
        let mut window = window_with(&[100, 100, 100, 100, 100]);

        assert_eq!(window.scroll_to_index(2, Align::Start), 200);
        assert_eq!(window.scroll_to_index(2, Align::Center), 200);
        assert_eq!(window.scroll_to_index(2, Align::End), 200);

        // Align math differs once the row is smaller than the viewport.
        let mut window = window_with(&[100, 40, 100, 100, 100]);
        assert_eq!(window.scroll_to_index(1, Align::Start), 100);
        assert_eq!(window.scroll_to_index(1, Align::Center), 70);
        assert_eq!(window.scroll_to_index(1, Align::End), 40);
    }

    #[test]
    fn scroll_to_offset_aligns_target_in_viewport() {
        let mut window = window_with(&[100; 10]);
        assert_eq!(window.scroll_to_offset(500, Align::Start), 500);
        assert_eq!(window.scroll_to_offset(500, Align::Center), 450);
        assert_eq!(window.scroll_to_offset(500, Align::End), 400);
        assert_eq!(window.scroll_to_offset(0, Align::Start), 0);
    }

    #[test]
    fn padding_start_shifts_rows_and_extent() {
        let mut window = VirtualWindow::new().with_padding_start(258);
        window.set_viewport_height(100);
        window.set_rows([("a".to_owned(), 50), ("b".to_owned(), 50)]);

        assert_eq!(window.total_size(), 258 + 100);
        assert_eq!(window.index_at_offset(0), 0);

        // Row 1 starts at 308 but the max scroll offset is 358 - 100.
        assert_eq!(window.scroll_to_index(1, Align::Start), 258);

        let items = window.visible_items();
        assert_eq!(items[0].start, 258);
    }

    #[test]
    fn padding_start_applied_after_rows_shifts_existing_offsets() {
        let window = window_with(&[50, 50]).with_padding_start(100);

        assert_eq!(window.total_size(), 100 + 100);
        let items = window.visible_items();
        assert_eq!(items[0].start, 100);
        assert_eq!(items[1].start, 150);
        assert_eq!(items[1].size, 50);
    }

    #[test]
    fn replacing_rows_with_fewer_clamps_scroll() {
        let mut window = window_with(&[100; 10]);
        window.set_scroll_offset(800);

        window.set_rows([("only".to_owned(), 150)]);
        assert_eq!(window.scroll_offset(), 50);
    }

    #[test]
    fn key_lookup_reflects_current_rows() {
        let mut window = window_with(&[10, 10]);
        assert_eq!(window.index_of_key("row-1"), Some(1));

        window.set_rows([("other".to_owned(), 10)]);
        assert_eq!(window.index_of_key("row-1"), None);
        assert_eq!(window.index_of_key("other"), Some(0));
    }
}
