use alloc::string::String;

use crate::Rect;

/// A reusable menu item.
///
/// `C` is the host's payload (labels, images, render handles...). The menu never resets the
/// payload when a cell is recycled; whoever dequeues a cell reconfigures it.
#[derive(Clone, Debug, PartialEq)]
pub struct MenuCell<C> {
    identifier: String,
    pub(crate) index: usize,
    pub(crate) frame: Rect,
    /// Utility flag for hosts. The menu sets it on the cell under the focus view.
    pub is_selected: bool,
    pub content: C,
}

impl<C> MenuCell<C> {
    pub(crate) fn new(identifier: String, content: C) -> Self {
        Self {
            identifier,
            index: 0,
            frame: Rect::ZERO,
            is_selected: false,
            content,
        }
    }

    /// Reuse-queue key. Fixed for the lifetime of the cell.
    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    /// Logical item index the cell currently displays.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Frame in the menu's container space.
    pub fn frame(&self) -> Rect {
        self.frame
    }
}
