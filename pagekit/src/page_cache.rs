use alloc::vec::Vec;

use crate::Rect;

/// A child page hosted by [`crate::ContentController`].
///
/// The appearance hooks must be paired: every `begin_appearance_transition` is followed by
/// exactly one `end_appearance_transition` before the next `begin`. The controller guarantees
/// this ordering.
#[allow(unused_variables)]
pub trait ContentPage {
    fn begin_appearance_transition(&mut self, is_appearing: bool, animated: bool);

    fn end_appearance_transition(&mut self);

    /// The page became a child of the controller and its view was placed at `frame`.
    fn did_move_to_parent(&mut self, frame: Rect) {}

    /// The page is about to be detached from the controller.
    fn will_remove_from_parent(&mut self) {}
}

#[derive(Clone, Debug)]
struct PageSlot<P> {
    page: P,
    frame: Rect,
}

/// Sparse per-page storage: one slot per page, at most a handful populated.
#[derive(Clone, Debug)]
pub struct PageCache<P> {
    slots: Vec<Option<PageSlot<P>>>,
}

impl<P> Default for PageCache<P> {
    fn default() -> Self {
        Self { slots: Vec::new() }
    }
}

impl<P: ContentPage> PageCache<P> {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Number of slots (the page count), populated or not.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Number of populated slots.
    pub fn loaded_len(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }

    pub fn is_loaded(&self, index: usize) -> bool {
        matches!(self.slots.get(index), Some(Some(_)))
    }

    pub fn loaded_indexes(&self) -> Vec<usize> {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(i, s)| s.as_ref().map(|_| i))
            .collect()
    }

    pub fn get(&self, index: usize) -> Option<&P> {
        self.slots.get(index)?.as_ref().map(|s| &s.page)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut P> {
        self.slots.get_mut(index)?.as_mut().map(|s| &mut s.page)
    }

    pub fn frame(&self, index: usize) -> Option<Rect> {
        self.slots.get(index)?.as_ref().map(|s| s.frame)
    }

    /// Resets the slot count. Every populated slot must have been removed first.
    pub(crate) fn reset(&mut self, count: usize) {
        debug_assert!(
            self.loaded_len() == 0,
            "PageCache::reset with attached pages"
        );
        self.slots.clear();
        self.slots.resize_with(count, || None);
    }

    pub(crate) fn insert(&mut self, index: usize, mut page: P, frame: Rect) {
        page.did_move_to_parent(frame);
        self.slots[index] = Some(PageSlot { page, frame });
    }

    pub(crate) fn remove(&mut self, index: usize) -> Option<P> {
        let mut slot = self.slots.get_mut(index)?.take()?;
        slot.page.will_remove_from_parent();
        Some(slot.page)
    }

    pub(crate) fn set_frame(&mut self, index: usize, frame: Rect) {
        if let Some(Some(slot)) = self.slots.get_mut(index) {
            slot.frame = frame;
        }
    }
}
