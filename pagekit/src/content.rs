use alloc::boxed::Box;
use alloc::vec::Vec;

use crate::geometry::lerp;
use crate::paging::{left_side_page, normalize_page, scrolling_percent};
use crate::{
    Appearance, AppearanceTracker, ContentOptions, ContentPage, ExplicitPaging, PageCache, Rect,
    Size,
};

/// Supplies pages to a [`ContentController`].
pub trait ContentDataSource<P> {
    fn number_of_items(&self) -> usize;

    /// Returns the page for `index`. Ownership moves to the controller until the page leaves
    /// the loaded window.
    fn page(&mut self, index: usize) -> P;
}

/// Receives content paging events. Every method defaults to a no-op.
#[allow(unused_variables)]
pub trait ContentDelegate {
    fn will_begin_manual_scroll(&mut self, index: usize) {}

    /// A drag (or its deceleration) moved the content. `index` is the page that is at least half
    /// visible and `percent` is signed: positive toward the next page, negative toward the
    /// previous one.
    fn did_manual_scroll(&mut self, index: usize, percent: f64) {}

    fn did_end_manual_scroll(&mut self, index: usize) {}

    fn will_begin_paging(&mut self, index: usize, animated: bool) {}

    fn will_finish_paging(&mut self, index: usize, animated: bool) {}

    fn did_finish_paging(&mut self, index: usize, animated: bool) {}
}

/// Continuation of [`ContentController::reload_data_then`].
pub type ReloadCompletion<P> = Box<dyn FnOnce(&mut ContentController<P>)>;

/// Continuation of [`ContentController::scroll_to_then`]. The flag is `false` when the
/// animation was interrupted.
pub type ScrollCompletion<P> = Box<dyn FnOnce(&mut ContentController<P>, bool)>;

/// Work deferred to the next layout pass.
enum PendingLayout<P> {
    Reload {
        page: usize,
        completion: Option<ReloadCompletion<P>>,
    },
    Rebuild {
        page: usize,
    },
}

impl<P> core::fmt::Debug for PendingLayout<P> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Reload { page, .. } => f.debug_struct("Reload").field("page", page).finish(),
            Self::Rebuild { page } => f.debug_struct("Rebuild").field("page", page).finish(),
        }
    }
}

/// An in-flight animated page change started by [`ContentController::scroll_to`].
pub struct ContentAnimation<P> {
    pub page: usize,
    pub from_offset: f64,
    pub to_offset: f64,
    completion: Option<ScrollCompletion<P>>,
}

impl<P> ContentAnimation<P> {
    pub fn offset_at(&self, progress: f64) -> f64 {
        lerp(self.from_offset, self.to_offset, progress.clamp(0.0, 1.0))
    }
}

impl<P> core::fmt::Debug for ContentAnimation<P> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ContentAnimation")
            .field("page", &self.page)
            .field("from_offset", &self.from_offset)
            .field("to_offset", &self.to_offset)
            .finish_non_exhaustive()
    }
}

/// A horizontally paging container of full-bleed pages.
///
/// At most three pages are attached at any time: the window `page - 1 ..= page + 1` around the
/// last loaded page, clipped to the page range. Pages leaving the window are detached and
/// dropped.
///
/// The host drives it with scroll-view events (`will_begin_dragging`, `did_scroll`, ...) and
/// calls [`ContentController::layout_if_needed`] once per layout pass.
pub struct ContentController<P> {
    options: ContentOptions,
    bounds: Size,
    content_offset: f64,
    number_of_pages: usize,
    left_side_page_index: usize,
    pages: PageCache<P>,
    window_center: Option<usize>,
    appearance: AppearanceTracker,
    explicit_paging: Option<ExplicitPaging>,
    is_dragging: bool,
    pending_layout: Option<PendingLayout<P>>,
    animation: Option<ContentAnimation<P>>,

    data_source: Option<Box<dyn ContentDataSource<P>>>,
    delegate: Option<Box<dyn ContentDelegate>>,
}

impl<P: ContentPage> ContentController<P> {
    pub fn new(options: ContentOptions) -> Self {
        Self {
            options,
            bounds: Size::ZERO,
            content_offset: 0.0,
            number_of_pages: 0,
            left_side_page_index: 0,
            pages: PageCache::new(),
            window_center: None,
            appearance: AppearanceTracker::new(),
            explicit_paging: None,
            is_dragging: false,
            pending_layout: None,
            animation: None,
            data_source: None,
            delegate: None,
        }
    }

    pub fn options(&self) -> &ContentOptions {
        &self.options
    }

    pub fn set_data_source(&mut self, data_source: impl ContentDataSource<P> + 'static) {
        self.data_source = Some(Box::new(data_source));
    }

    pub fn clear_data_source(&mut self) {
        self.data_source = None;
    }

    pub fn set_delegate(&mut self, delegate: impl ContentDelegate + 'static) {
        self.delegate = Some(Box::new(delegate));
    }

    pub fn clear_delegate(&mut self) {
        self.delegate = None;
    }

    pub fn is_enabled_preload_content(&self) -> bool {
        self.options.is_enabled_preload_content
    }

    pub fn set_enabled_preload_content(&mut self, enabled: bool) {
        self.options.is_enabled_preload_content = enabled;
    }

    /// Sets the page size. Attached pages are re-framed and the offset stays on the same page.
    pub fn set_bounds(&mut self, size: Size) {
        if self.bounds == size {
            return;
        }
        self.bounds = size;
        for index in self.pages.loaded_indexes() {
            self.pages.set_frame(index, self.page_rect(index));
        }
        self.content_offset = self.offset_for_page(self.left_side_page_index);
    }

    pub fn bounds(&self) -> Size {
        self.bounds
    }

    pub fn content_size(&self) -> Size {
        Size::new(
            self.bounds.width * self.number_of_pages as f64,
            self.bounds.height,
        )
    }

    pub fn content_offset_x(&self) -> f64 {
        self.content_offset
    }

    pub fn number_of_pages(&self) -> usize {
        self.number_of_pages
    }

    pub fn left_side_page_index(&self) -> usize {
        self.left_side_page_index
    }

    /// Fraction of the way from the left-side page to the next one.
    pub fn scrolling_percent(&self) -> f64 {
        let left = left_side_page(self.content_offset, self.bounds.width, self.number_of_pages);
        scrolling_percent(self.content_offset, self.bounds.width, left)
    }

    /// The page that is at least half visible (`0.5` already counts as the next page).
    pub fn current_page_index(&self) -> usize {
        let left = left_side_page(self.content_offset, self.bounds.width, self.number_of_pages);
        let percent = scrolling_percent(self.content_offset, self.bounds.width, left);
        normalize_page(left, percent, self.number_of_pages).0
    }

    pub fn pages(&self) -> &PageCache<P> {
        &self.pages
    }

    /// Indexes of the attached pages, ascending.
    pub fn cached_pages(&self) -> Vec<usize> {
        self.pages.loaded_indexes()
    }

    pub fn page(&self, index: usize) -> Option<&P> {
        self.pages.get(index)
    }

    pub fn page_mut(&mut self, index: usize) -> Option<&mut P> {
        self.pages.get_mut(index)
    }

    pub fn appearance(&self) -> &AppearanceTracker {
        &self.appearance
    }

    pub fn explicit_paging(&self) -> Option<&ExplicitPaging> {
        self.explicit_paging.as_ref()
    }

    pub fn is_dragging(&self) -> bool {
        self.is_dragging
    }

    pub fn animation(&self) -> Option<&ContentAnimation<P>> {
        self.animation.as_ref()
    }

    pub fn has_pending_layout(&self) -> bool {
        self.pending_layout.is_some()
    }

    /// See [`Self::reload_data_then`].
    pub fn reload_data(&mut self, page: Option<usize>) {
        self.reload_data_then(page, |_| {});
    }

    /// Tears every page down, re-queries the page count and loads the window around `page`
    /// (or the current left-side page).
    ///
    /// The offset lands on the page, and `completion` runs, during the next
    /// [`Self::layout_if_needed`]. Inside `completion`, `current_page_index()` already reports
    /// the target page.
    pub fn reload_data_then(
        &mut self,
        page: Option<usize>,
        completion: impl FnOnce(&mut ContentController<P>) + 'static,
    ) {
        self.layout_if_needed();
        let Some(count) = self.data_source.as_ref().map(|ds| ds.number_of_items()) else {
            pdebug!("ContentController::reload_data: no data source");
            return;
        };
        self.cancel_animation();
        self.explicit_paging = None;
        self.is_dragging = false;

        let old = self.left_side_page_index;
        self.appearance.pre_reload(&mut self.pages, old);
        self.remove_all();

        self.number_of_pages = count;
        self.pages.reset(count);
        let target = page.unwrap_or(old).min(count.saturating_sub(1));
        pdebug!(count, old, target, "ContentController::reload_data");
        self.left_side_page_index = target;
        self.load_pages_if_needed(target);
        self.pending_layout = Some(PendingLayout::Reload {
            page: target,
            completion: Some(Box::new(completion)),
        });
    }

    /// Runs work deferred to the layout pass: the landing step of a reload or the rebuild
    /// after a size transition.
    pub fn layout_if_needed(&mut self) {
        let Some(pending) = self.pending_layout.take() else {
            return;
        };
        ptrace!(?pending, "ContentController::layout_if_needed");
        match pending {
            PendingLayout::Reload { page, completion } => {
                if self.number_of_pages > 0 {
                    self.scroll_to(page, false);
                    self.appearance.post_reload(&mut self.pages, page);
                }
                if let Some(completion) = completion {
                    completion(self);
                }
            }
            PendingLayout::Rebuild { page } => {
                if self.number_of_pages == 0 {
                    return;
                }
                let page = page.min(self.number_of_pages - 1);
                self.left_side_page_index = page;
                self.load_pages_if_needed(page);
                self.content_offset = self.offset_for_page(page);
            }
        }
    }

    /// See [`Self::scroll_to_then`].
    pub fn scroll_to(&mut self, page: usize, animated: bool) {
        self.scroll_to_then(page, animated, |_, _| {});
    }

    /// Pages to `page` programmatically.
    ///
    /// Appearance and delegate events follow a manual drag from the current left-side page.
    /// Non-animated moves finish synchronously; animated ones finish in
    /// [`Self::finish_animation`].
    pub fn scroll_to_then(
        &mut self,
        page: usize,
        animated: bool,
        completion: impl FnOnce(&mut ContentController<P>, bool) + 'static,
    ) {
        self.cancel_animation();
        if self.number_of_pages == 0 {
            completion(self, false);
            return;
        }
        let page = page.min(self.number_of_pages - 1);
        let old = self.left_side_page_index;
        pdebug!(old, page, animated, "ContentController::scroll_to");

        if let Some(delegate) = self.delegate.as_mut() {
            delegate.will_begin_paging(old, animated);
        }
        self.appearance.begin_dragging(&mut self.pages, old);
        self.load_pages_if_needed(page);
        self.left_side_page_index = page;
        if let Some(delegate) = self.delegate.as_mut() {
            delegate.will_finish_paging(page, animated);
        }

        let to_offset = self.offset_for_page(page);
        let mut animation = ContentAnimation {
            page,
            from_offset: self.content_offset,
            to_offset,
            completion: Some(Box::new(completion)),
        };
        if animated {
            self.animation = Some(animation);
            return;
        }
        self.content_offset = to_offset;
        let completion = animation.completion.take();
        self.finish_paging(animated, true, completion);
    }

    /// Applies the presentation offset of the running animation at `progress` (`0.0..=1.0`).
    pub fn advance_animation(&mut self, progress: f64) {
        if let Some(anim) = self.animation.as_ref() {
            self.content_offset = anim.offset_at(progress);
        }
    }

    /// Ends the running animation. With `finished`, the offset snaps to the target page and the
    /// paging finishes (appearance + delegate). The completion runs either way.
    pub fn finish_animation(&mut self, finished: bool) {
        let Some(mut anim) = self.animation.take() else {
            return;
        };
        if finished {
            self.content_offset = anim.to_offset;
        }
        let completion = anim.completion.take();
        self.finish_paging(true, finished, completion);
    }

    fn cancel_animation(&mut self) {
        if self.animation.is_some() {
            ptrace!("ContentController: animation interrupted");
            self.finish_animation(false);
        }
    }

    fn finish_paging(
        &mut self,
        animated: bool,
        finished: bool,
        completion: Option<ScrollCompletion<P>>,
    ) {
        if finished {
            let page = self.left_side_page_index;
            self.load_pages_if_needed(page);
            self.appearance.stop_scrolling(&mut self.pages, page);
            if let Some(delegate) = self.delegate.as_mut() {
                delegate.did_finish_paging(page, animated);
            }
        }
        if let Some(completion) = completion {
            completion(self, finished);
        }
    }

    pub fn will_begin_dragging(&mut self) {
        if self.number_of_pages == 0 {
            return;
        }
        self.cancel_animation();
        let left = self.left_page_for(self.content_offset);
        self.left_side_page_index = left;
        self.explicit_paging = Some(ExplicitPaging::new(left));
        self.is_dragging = true;
        ptrace!(left, "ContentController::will_begin_dragging");
        if let Some(delegate) = self.delegate.as_mut() {
            delegate.will_begin_manual_scroll(left);
        }
    }

    /// Reports a new scroll offset from the host's scroll surface.
    ///
    /// Offsets reported while a programmatic animation runs move the surface but leave the
    /// page window on the animation's target.
    pub fn did_scroll(&mut self, offset: f64) {
        self.content_offset = offset;
        if self.number_of_pages == 0 {
            return;
        }
        let origin = self.explicit_paging.as_mut().and_then(ExplicitPaging::start);
        if let Some(origin) = origin {
            if let Some(delegate) = self.delegate.as_mut() {
                delegate.will_begin_paging(origin, false);
            }
            self.appearance.begin_dragging(&mut self.pages, origin);
        }

        let left = self.left_page_for(offset);
        let percent = scrolling_percent(offset, self.bounds.width, left);
        if self.explicit_paging.is_some_and(|p| p.is_paging()) {
            self.left_side_page_index = left;
            let (index, percent) = normalize_page(left, percent, self.number_of_pages);
            ptrace!(index, percent, "ContentController: manual scroll");
            if let Some(delegate) = self.delegate.as_mut() {
                delegate.did_manual_scroll(index, percent);
            }
        }
        if self.animation.is_none() {
            self.preload_content_if_needed(left, percent);
        }
    }

    /// The drag is about to end and the surface will settle at `target_offset`.
    pub fn will_end_dragging(&mut self, target_offset: f64) {
        if !self.explicit_paging.is_some_and(|p| p.is_paging()) {
            return;
        }
        let target = self.left_page_for(target_offset);
        if let Some(delegate) = self.delegate.as_mut() {
            delegate.will_finish_paging(target, false);
        }
    }

    pub fn did_end_dragging(&mut self, will_decelerate: bool) {
        self.is_dragging = false;
        if !will_decelerate {
            self.finish_manual_scroll();
        }
    }

    /// The surface came to rest after a drag.
    ///
    /// Dropped when no drag is being tracked, or when the visible bounds poke outside the
    /// content (a bounce can report the end of deceleration early).
    pub fn did_end_decelerating(&mut self) {
        if self.explicit_paging.is_none() {
            ptrace!("did_end_decelerating without a drag, dropped");
            return;
        }
        let content_width = self.content_size().width;
        if self.content_offset < 0.0 || self.content_offset + self.bounds.width > content_width {
            pwarn!(
                offset = self.content_offset,
                content_width,
                "did_end_decelerating outside content bounds, dropped"
            );
            return;
        }
        self.finish_manual_scroll();
    }

    fn finish_manual_scroll(&mut self) {
        if self.number_of_pages == 0 {
            self.explicit_paging = None;
            return;
        }
        let left = self.left_page_for(self.content_offset);
        self.left_side_page_index = left;
        self.load_pages_if_needed(left);
        if let Some(delegate) = self.delegate.as_mut() {
            delegate.did_end_manual_scroll(left);
        }
        if let Some(paging) = self.explicit_paging.take() {
            if paging.is_paging() {
                if let Some(delegate) = self.delegate.as_mut() {
                    delegate.did_finish_paging(left, false);
                }
                self.appearance.stop_scrolling(&mut self.pages, left);
            }
        }
    }

    pub fn view_will_appear(&mut self, animated: bool) {
        self.call_appearance(Appearance::WillAppear, animated);
    }

    pub fn view_did_appear(&mut self, animated: bool) {
        self.call_appearance(Appearance::DidAppear, animated);
    }

    pub fn view_will_disappear(&mut self, animated: bool) {
        self.call_appearance(Appearance::WillDisappear, animated);
    }

    pub fn view_did_disappear(&mut self, animated: bool) {
        self.call_appearance(Appearance::DidDisappear, animated);
    }

    /// Forwards an appearance event of the controller itself to the left-side page.
    pub fn call_appearance(&mut self, appearance: Appearance, animated: bool) {
        let index = self.left_side_page_index;
        self.appearance
            .call_appearance(&mut self.pages, appearance, animated, index);
    }

    /// Starts a size transition: pages are torn down now and rebuilt on the same page at the
    /// next [`Self::layout_if_needed`], without appearance events.
    pub fn view_will_transition(&mut self, size: Size) {
        self.layout_if_needed();
        let page = self.left_side_page_index;
        pdebug!(page, width = size.width, "ContentController::view_will_transition");
        self.cancel_animation();
        self.explicit_paging = None;
        self.is_dragging = false;
        self.remove_all();
        self.bounds = size;
        self.content_offset = self.offset_for_page(page);
        self.pending_layout = Some(PendingLayout::Rebuild { page });
    }

    /// Loads the window one page ahead once a drag passes the halfway point.
    fn preload_content_if_needed(&mut self, left: usize, percent: f64) {
        if !self.options.is_enabled_preload_content {
            return;
        }
        if percent > 0.5 {
            self.load_pages_if_needed(left + 1);
        } else {
            self.load_pages_if_needed(left);
        }
    }

    /// Makes the attached pages exactly `center - 1 ..= center + 1` (clipped).
    fn load_pages_if_needed(&mut self, center: usize) {
        if self.number_of_pages == 0 {
            return;
        }
        let center = center.min(self.number_of_pages - 1);
        if self.window_center == Some(center) {
            return;
        }
        let lo = center.saturating_sub(1);
        let hi = (center + 1).min(self.number_of_pages - 1);
        for index in self.pages.loaded_indexes() {
            if index < lo || index > hi {
                ptrace!(index, "page window: detach");
                self.appearance.will_evict(&mut self.pages, index);
                self.pages.remove(index);
            }
        }
        self.load_page(center.wrapping_sub(1));
        self.load_page(center);
        self.load_page(center + 1);
        self.window_center = Some(center);
    }

    fn load_page(&mut self, index: usize) {
        if index >= self.number_of_pages || self.pages.is_loaded(index) {
            return;
        }
        let frame = self.page_rect(index);
        let Some(data_source) = self.data_source.as_mut() else {
            return;
        };
        ptrace!(index, "page window: attach");
        let page = data_source.page(index);
        self.pages.insert(index, page, frame);
    }

    fn remove_all(&mut self) {
        self.appearance.reset(&mut self.pages);
        for index in self.pages.loaded_indexes() {
            self.pages.remove(index);
        }
        self.window_center = None;
    }

    fn left_page_for(&self, offset: f64) -> usize {
        left_side_page(offset, self.bounds.width, self.number_of_pages)
    }

    fn offset_for_page(&self, page: usize) -> f64 {
        self.bounds.width * page as f64
    }

    fn page_rect(&self, index: usize) -> Rect {
        Rect::new(
            self.offset_for_page(index),
            0.0,
            self.bounds.width,
            self.bounds.height,
        )
    }
}

impl<P> core::fmt::Debug for ContentController<P> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ContentController")
            .field("options", &self.options)
            .field("bounds", &self.bounds)
            .field("content_offset", &self.content_offset)
            .field("number_of_pages", &self.number_of_pages)
            .field("left_side_page_index", &self.left_side_page_index)
            .field("window_center", &self.window_center)
            .field("appearance", &self.appearance)
            .field("explicit_paging", &self.explicit_paging)
            .field("pending_layout", &self.pending_layout)
            .field("animation", &self.animation)
            .finish_non_exhaustive()
    }
}
