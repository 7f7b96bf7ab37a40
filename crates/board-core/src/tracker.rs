//! Active-section tracking for sidebar highlighting.
//!
//! Derives the "currently topmost" row from the window's rendered items
//! instead of re-querying rendered output. Overscan rows are rendered but sit
//! outside the physical viewport, so eligibility is an intersection test
//! against the real scroll bounds.

use emoji_board_virtual::VirtualItem;

/// Tracks which section key is topmost in the viewport.
///
/// Starts untracked (before first layout) and then always holds the last
/// computed key; an update that finds no eligible row keeps the previous
/// value rather than reverting.
#[derive(Debug, Clone, Default)]
pub struct ActiveSectionTracker {
    active: Option<String>,
}

impl ActiveSectionTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active_key(&self) -> Option<&str> {
        self.active.as_deref()
    }

    /// Recompute from the rendered items and the physical viewport bounds.
    ///
    /// Returns the new key only when it differs from the previous value, so
    /// callers can re-render the sidebar highlight exactly on change.
    pub fn update(
        &mut self,
        items: &[VirtualItem<'_>],
        scroll_offset: u64,
        viewport_height: u32,
    ) -> Option<String> {
        let bottom = scroll_offset + u64::from(viewport_height);
        let top = items
            .iter()
            .find(|item| item.end() > scroll_offset && item.start < bottom)?;

        if self.active.as_deref() == Some(top.key) {
            return None;
        }
        self.active = Some(top.key.to_owned());
        self.active.clone()
    }

    /// Adopt a key directly, as jump navigation does before the scroll event
    /// lands. Returns whether the key changed.
    pub fn set_active(&mut self, key: &str) -> bool {
        if self.active.as_deref() == Some(key) {
            return false;
        }
        self.active = Some(key.to_owned());
        true
    }
}
