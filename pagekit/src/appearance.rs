use alloc::vec::Vec;

use crate::{Appearance, ContentPage, PageCache};

/// Keeps begin/end appearance calls on pages paired while drags, programmatic paging,
/// container appearance events and reloads interleave.
///
/// A page is either at rest, pending a "will disappear" opened by [`Self::begin_dragging`],
/// or inside a transition opened by a container appearance event. Opening a transition on a
/// page that already has one closes the old one first; closing a page that has none is a
/// no-op.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AppearanceTracker {
    disappearing_index: Option<usize>,
    open: Vec<usize>,
}

impl AppearanceTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Page whose drag-initiated "will disappear" transition is still open.
    pub fn disappearing_index(&self) -> Option<usize> {
        self.disappearing_index
    }

    /// Pages with an open transition.
    pub fn open_transitions(&self) -> &[usize] {
        &self.open
    }

    pub fn begin_dragging<P: ContentPage>(&mut self, pages: &mut PageCache<P>, index: usize) {
        if let Some(prev) = self.disappearing_index.take() {
            self.end(pages, prev);
        }
        if self.begin(pages, index, false, false) {
            self.disappearing_index = Some(index);
        }
    }

    pub fn stop_scrolling<P: ContentPage>(&mut self, pages: &mut PageCache<P>, index: usize) {
        if let Some(prev) = self.disappearing_index.take() {
            self.end(pages, prev);
        }
        if self.begin(pages, index, true, false) {
            self.end(pages, index);
        }
    }

    /// Forwards an appearance event of the controller itself to the page at `index`.
    pub fn call_appearance<P: ContentPage>(
        &mut self,
        pages: &mut PageCache<P>,
        appearance: Appearance,
        animated: bool,
        index: usize,
    ) {
        if !appearance.is_appearing() && self.disappearing_index == Some(index) {
            self.disappearing_index = None;
            self.end(pages, index);
        }
        match appearance {
            Appearance::DidAppear | Appearance::DidDisappear => self.end(pages, index),
            Appearance::WillAppear | Appearance::WillDisappear => {
                self.begin(pages, index, appearance.is_appearing(), animated);
            }
        }
    }

    /// Disappear half of the reload cycle, on the page shown before the reload.
    pub fn pre_reload<P: ContentPage>(&mut self, pages: &mut PageCache<P>, index: usize) {
        if self.begin(pages, index, false, false) {
            self.end(pages, index);
        }
    }

    /// Appear half of the reload cycle, on the page shown after the reload.
    pub fn post_reload<P: ContentPage>(&mut self, pages: &mut PageCache<P>, index: usize) {
        if self.begin(pages, index, true, false) {
            self.end(pages, index);
        }
    }

    /// Closes whatever is open on `index` before the page is detached.
    pub(crate) fn will_evict<P: ContentPage>(&mut self, pages: &mut PageCache<P>, index: usize) {
        if self.disappearing_index == Some(index) {
            self.disappearing_index = None;
        }
        self.end(pages, index);
    }

    /// Closes every open transition.
    pub(crate) fn reset<P: ContentPage>(&mut self, pages: &mut PageCache<P>) {
        self.disappearing_index = None;
        while let Some(index) = self.open.pop() {
            if let Some(page) = pages.get_mut(index) {
                page.end_appearance_transition();
            }
        }
    }

    fn begin<P: ContentPage>(
        &mut self,
        pages: &mut PageCache<P>,
        index: usize,
        is_appearing: bool,
        animated: bool,
    ) -> bool {
        if !pages.is_loaded(index) {
            return false;
        }
        if self.disappearing_index == Some(index) {
            self.disappearing_index = None;
        }
        self.end(pages, index);
        let Some(page) = pages.get_mut(index) else {
            return false;
        };
        ptrace!(index, is_appearing, animated, "appearance: begin");
        page.begin_appearance_transition(is_appearing, animated);
        self.open.push(index);
        true
    }

    fn end<P: ContentPage>(&mut self, pages: &mut PageCache<P>, index: usize) {
        let Some(pos) = self.open.iter().position(|&i| i == index) else {
            return;
        };
        self.open.swap_remove(pos);
        if let Some(page) = pages.get_mut(index) {
            ptrace!(index, "appearance: end");
            page.end_appearance_transition();
        }
    }
}
