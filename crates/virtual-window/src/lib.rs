//! Virtualized Window
//!
//! Headless row virtualization for the picker board and lobby views.
//!
//! Given an ordered list of rows (stable key + estimated pixel height), this
//! crate computes which row indices intersect a scrollable viewport (plus
//! overscan rows for smooth scrolling), the total scrollable extent used to
//! size the spacer element, and clamped scroll targets for jump navigation.
//! It is UI-agnostic: the host owns the real scroll container and mirrors
//! offsets in both directions.
//!
//! # Example
//!
//! ```
//! use emoji_board_virtual::{Align, VirtualWindow};
//!
//! let mut window = VirtualWindow::new().with_overscan(2);
//! window.set_viewport_height(600);
//! window.set_rows([
//!     ("recent".to_owned(), 160),
//!     ("custom-pack".to_owned(), 400),
//!     ("native-people".to_owned(), 1200),
//! ]);
//!
//! assert_eq!(window.total_size(), 1760);
//!
//! // Jump the "custom-pack" row to the top of the viewport.
//! let index = window.index_of_key("custom-pack").unwrap();
//! window.scroll_to_index(index, Align::Start);
//! assert_eq!(window.scroll_offset(), 160);
//!
//! for item in window.visible_items() {
//!     println!("render row {} ({}) at {}px", item.index, item.key, item.start);
//! }
//! ```

mod window;

pub use window::{Align, VirtualItem, VirtualWindow};
