use alloc::boxed::Box;
use alloc::collections::VecDeque;
use alloc::string::String;
use alloc::vec::Vec;

use crate::focus::interpolate_focus_frame;
use crate::geometry::lerp;
use crate::layout::WidthTable;
use crate::{
    CellAlignment, CellQueue, EdgeInsets, FocusAnimationCoordinator, FocusStyle, FocusView,
    MenuCell, MenuOptions, PagingError, Point, Rect, Size,
};

/// Supplies items to a [`MenuView`].
pub trait MenuDataSource<C> {
    fn number_of_items(&self) -> usize;

    /// Width of item `index`. Negative widths are treated as `0.0`.
    fn width_for_item(&self, index: usize) -> f64;

    /// Returns a configured cell for `index`, normally obtained from `queue.dequeue(..)`.
    fn cell_for_item(&mut self, queue: &mut CellQueue<C>, index: usize) -> MenuCell<C>;
}

/// Receives menu events. Every method defaults to a no-op.
#[allow(unused_variables)]
pub trait MenuDelegate<C> {
    /// A touch went down and up on the same cell.
    fn did_select(&mut self, index: usize, previous_index: Option<usize>) {}

    /// A cell is about to enter the visible list.
    fn will_display(&mut self, cell: &MenuCell<C>, index: usize) {}

    /// An animated focus move is starting.
    fn will_animate_focus_view(&mut self, index: usize, coordinator: &FocusAnimationCoordinator) {
    }

    /// An animated focus move has landed.
    fn focus_view_did_end_transition(&mut self, focus: &FocusView) {}
}

/// One-shot continuation of an animated menu scroll. The flag is `false` when the animation
/// was interrupted.
pub type MenuCompletion<C> = Box<dyn FnOnce(&mut MenuView<C>, bool)>;

/// An in-flight animated scroll started by [`MenuView::scroll_animated`].
pub struct MenuAnimation<C> {
    pub index: usize,
    pub from_offset: f64,
    pub to_offset: f64,
    pub coordinator: FocusAnimationCoordinator,
    completion: Option<MenuCompletion<C>>,
}

impl<C> MenuAnimation<C> {
    pub fn offset_at(&self, progress: f64) -> f64 {
        lerp(self.from_offset, self.to_offset, progress.clamp(0.0, 1.0))
    }
}

impl<C> core::fmt::Debug for MenuAnimation<C> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("MenuAnimation")
            .field("index", &self.index)
            .field("from_offset", &self.from_offset)
            .field("to_offset", &self.to_offset)
            .field("coordinator", &self.coordinator)
            .finish_non_exhaustive()
    }
}

/// A horizontally scrolling strip of reusable cells with a focus indicator.
///
/// The view is headless. The host reports viewport size and scroll offset and renders
/// [`MenuView::visible_cells`] and [`MenuView::focus_view`] at
/// `frame.x + container_origin_x() - content_offset()`.
///
/// Only the cells covering the viewport (padded by half a viewport on each side) exist; cells
/// leaving that window go back to their identifier's recycle queue.
pub struct MenuView<C> {
    options: MenuOptions,
    bounds: Size,
    content_offset: f64,
    safe_area_insets: EdgeInsets,
    widths: WidthTable,
    container_origin_x: f64,

    visible_cells: VecDeque<MenuCell<C>>,
    queue: CellQueue<C>,
    focus: FocusView,
    touch_index: Option<usize>,
    animation: Option<MenuAnimation<C>>,
    discarded: usize,

    data_source: Option<Box<dyn MenuDataSource<C>>>,
    delegate: Option<Box<dyn MenuDelegate<C>>>,
}

impl<C> MenuView<C> {
    pub fn new(options: MenuOptions) -> Self {
        Self {
            focus: FocusView::new(options.focus_style),
            options,
            bounds: Size::ZERO,
            content_offset: 0.0,
            safe_area_insets: EdgeInsets::ZERO,
            widths: WidthTable::default(),
            container_origin_x: 0.0,
            visible_cells: VecDeque::new(),
            queue: CellQueue::new(),
            touch_index: None,
            animation: None,
            discarded: 0,
            data_source: None,
            delegate: None,
        }
    }

    pub fn options(&self) -> &MenuOptions {
        &self.options
    }

    pub fn set_data_source(&mut self, data_source: impl MenuDataSource<C> + 'static) {
        self.data_source = Some(Box::new(data_source));
    }

    pub fn clear_data_source(&mut self) {
        self.data_source = None;
    }

    pub fn has_data_source(&self) -> bool {
        self.data_source.is_some()
    }

    pub fn set_delegate(&mut self, delegate: impl MenuDelegate<C> + 'static) {
        self.delegate = Some(Box::new(delegate));
    }

    pub fn clear_delegate(&mut self) {
        self.delegate = None;
    }

    pub fn register(
        &mut self,
        identifier: impl Into<String>,
        factory: impl Fn() -> C + Send + Sync + 'static,
    ) {
        self.queue.register(identifier, factory);
    }

    pub fn register_template(&mut self, identifier: impl Into<String>, template: C)
    where
        C: Clone + Send + Sync + 'static,
    {
        self.queue.register_template(identifier, template);
    }

    /// See [`CellQueue::dequeue`].
    pub fn dequeue(&mut self, identifier: &str) -> MenuCell<C> {
        self.queue.dequeue(identifier)
    }

    pub fn try_dequeue(&mut self, identifier: &str) -> Result<MenuCell<C>, PagingError> {
        self.queue.try_dequeue(identifier)
    }

    pub fn queue(&self) -> &CellQueue<C> {
        &self.queue
    }

    /// Cells ever built from a registration.
    pub fn created_cell_count(&self) -> usize {
        self.queue.created_count()
    }

    /// Cells waiting in the recycle queues.
    pub fn queued_cell_count(&self) -> usize {
        self.queue.queued_len()
    }

    /// Cells still owned by the menu: visible or queued. Reloads drop their visible cells.
    pub fn live_cell_count(&self) -> usize {
        self.queue.created_count() - self.discarded
    }

    /// Replaces the focus indicator (e.g. with a pre-styled template).
    pub fn register_focus_view(&mut self, focus: FocusView) {
        let selected_index = self.focus.selected_index;
        let frame = self.focus.frame;
        self.focus = focus;
        self.focus.selected_index = selected_index;
        self.focus.frame = frame;
        self.options.focus_style = focus.style;
    }

    pub fn set_focus_style(&mut self, style: FocusStyle) {
        self.options.focus_style = style;
        self.focus.style = style;
    }

    pub fn set_cell_alignment(&mut self, alignment: CellAlignment) {
        if self.options.cell_alignment == alignment {
            return;
        }
        self.options.cell_alignment = alignment;
        self.align_container();
        self.layout_subviews();
    }

    pub fn set_cell_spacing(&mut self, spacing: f64) {
        let spacing = spacing.max(0.0);
        if self.options.cell_spacing == spacing {
            return;
        }
        self.options.cell_spacing = spacing;
        self.invalidate_layout();
    }

    pub fn set_content_inset(&mut self, inset: EdgeInsets) {
        self.options.content_inset = inset;
        self.align_container();
        self.layout_subviews();
    }

    pub fn set_safe_area_insets(&mut self, insets: EdgeInsets) {
        if self.safe_area_insets == insets {
            return;
        }
        self.safe_area_insets = insets;
        self.align_container();
        self.layout_subviews();
    }

    pub fn safe_area_insets(&self) -> EdgeInsets {
        self.safe_area_insets
    }

    /// Updates the viewport size. Cell heights follow the viewport height.
    pub fn set_bounds(&mut self, size: Size) {
        if self.bounds == size {
            return;
        }
        self.bounds = size;
        self.reposition_visible_cells();
        self.focus.frame.height = size.height;
        self.align_container();
        self.layout_subviews();
    }

    pub fn bounds(&self) -> Size {
        self.bounds
    }

    pub fn number_of_items(&self) -> usize {
        self.widths.len()
    }

    pub fn content_size(&self) -> Size {
        Size::new(self.widths.total(), self.bounds.height)
    }

    pub fn content_offset(&self) -> f64 {
        self.content_offset
    }

    /// Offset of the cell container inside the scroll content (non-zero only when the cells
    /// are narrower than the safe width and the alignment is not `Left`).
    pub fn container_origin_x(&self) -> f64 {
        self.container_origin_x
    }

    pub fn min_content_offset_x(&self) -> f64 {
        -self.adjusted_insets().left
    }

    pub fn max_content_offset_x(&self) -> f64 {
        let content = self.widths.total();
        content.max(self.bounds.width) - self.bounds.width + self.adjusted_insets().right
    }

    /// Sets the raw scroll offset (e.g. from a user drag on the menu) and retiles.
    pub fn set_content_offset(&mut self, offset: f64) {
        self.content_offset = offset;
        self.layout_subviews();
    }

    pub fn visible_cells(&self) -> impl Iterator<Item = &MenuCell<C>> {
        self.visible_cells.iter()
    }

    pub fn visible_cells_mut(&mut self) -> impl Iterator<Item = &mut MenuCell<C>> {
        self.visible_cells.iter_mut()
    }

    pub fn visible_indexes(&self) -> Vec<usize> {
        self.visible_cells.iter().map(MenuCell::index).collect()
    }

    /// The visible cell displaying `index`, if any.
    pub fn cell_for_item(&self, index: usize) -> Option<&MenuCell<C>> {
        self.visible_cells.iter().find(|c| c.index == index)
    }

    pub fn focus_view(&self) -> &FocusView {
        &self.focus
    }

    pub fn current_focused_index(&self) -> Option<usize> {
        self.focus.selected_index
    }

    pub fn animation(&self) -> Option<&MenuAnimation<C>> {
        self.animation.as_ref()
    }

    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    /// Reloads everything and keeps the current focused index (clamped to the new count).
    pub fn reload_data(&mut self) {
        self.reload_data_with(None);
    }

    /// Discards every visible cell, re-queries the data source and lands focus on `index`
    /// (or the current focused index when `None`).
    pub fn reload_data_with(&mut self, index: Option<usize>) {
        if self.data_source.is_none() {
            pdebug!("MenuView::reload_data: no data source");
            return;
        }
        self.cancel_animation();
        self.discarded += self.visible_cells.len();
        self.visible_cells.clear();
        self.touch_index = None;
        self.rebuild_widths();
        self.align_container();

        let count = self.widths.len();
        pdebug!(count, "MenuView::reload_data");
        if count == 0 {
            self.focus.selected_index = None;
            self.focus.frame = Rect::new(0.0, 0.0, 0.0, self.bounds.height);
            self.content_offset = self.min_content_offset_x();
            return;
        }
        let target = index
            .or(self.focus.selected_index)
            .unwrap_or(0)
            .min(count - 1);
        self.focus.selected_index = Some(target);
        self.scroll(target, 0.0);
    }

    /// Re-queries the item widths without discarding visible cells, then repositions them.
    pub fn invalidate_layout(&mut self) {
        if self.data_source.is_none() {
            return;
        }
        self.rebuild_widths();
        pdebug!(
            count = self.widths.len(),
            total = self.widths.total(),
            "MenuView::invalidate_layout"
        );
        let count = self.widths.len();
        while self.visible_cells.back().is_some_and(|c| c.index >= count) {
            if let Some(cell) = self.visible_cells.pop_back() {
                self.queue.recycle(cell);
            }
        }
        self.reposition_visible_cells();
        self.align_container();

        match self.focus.selected_index {
            Some(index) if index < count => {
                self.focus.frame = self.rect_for_item(index);
            }
            Some(_) => {
                self.focus.selected_index = (count > 0).then(|| count - 1);
                if let Some(index) = self.focus.selected_index {
                    self.focus.frame = self.rect_for_item(index);
                }
            }
            None => {}
        }

        let clamped = self.clamp_offset(self.content_offset);
        self.set_content_offset(clamped);
    }

    /// Frame of any item (visible or not) in container space.
    ///
    /// An index at or past the item count yields a zero-width rect at the right content edge.
    pub fn rect_for_item(&self, index: usize) -> Rect {
        let height = self.bounds.height;
        match self.widths.width(index) {
            Some(width) => Rect::new(self.widths.start_of(index), 0.0, width, height),
            None => Rect::new(self.widths.total(), 0.0, 0.0, height),
        }
    }

    /// Index of the item whose horizontal span contains `point` (container space).
    pub fn index_for_item(&self, point: Point) -> Option<usize> {
        self.widths.index_at(point.x)
    }

    /// Moves the focus view between `index` and `index + 1` by `percent` and scrolls to keep
    /// it centered. Negative percents move toward `index - 1`; past the last item the focus
    /// shrinks toward the right content edge.
    ///
    /// This is a position-only update: it never reports a selection to the delegate.
    pub fn scroll(&mut self, index: usize, percent: f64) {
        let count = self.widths.len();
        if count == 0 {
            return;
        }
        self.cancel_animation();
        let (index, percent) = normalize_percent(index.min(count - 1), percent);
        let from = self.rect_for_item(index);
        let to = self.rect_for_item(index + 1);
        self.focus.frame = interpolate_focus_frame(from, to, percent, self.bounds.height);

        let offset = self.centered_offset(self.focus.frame.mid_x());
        ptrace!(index, percent, offset, "MenuView::scroll");
        self.set_content_offset(offset);
        self.update_focused_cell();
    }

    /// Starts an animated move of the focus view onto `index`.
    ///
    /// The selected index changes immediately; offset and focus frame move as the host calls
    /// [`Self::advance_animation`], and land in [`Self::finish_animation`], which also runs
    /// `completion`. A later scroll or reload interrupts the animation and runs `completion`
    /// with `false`.
    pub fn scroll_animated(
        &mut self,
        index: usize,
        completion: impl FnOnce(&mut MenuView<C>, bool) + 'static,
    ) {
        self.cancel_animation();
        let count = self.widths.len();
        if count == 0 {
            completion(self, false);
            return;
        }
        let index = index.min(count - 1);
        let end_frame = self.rect_for_item(index);
        let to_offset = self.centered_offset(end_frame.mid_x());

        self.focus.selected_index = Some(index);
        for cell in self.visible_cells.iter_mut() {
            cell.is_selected = cell.index == index;
        }

        let coordinator = FocusAnimationCoordinator {
            begin_frame: self.focus.frame,
            end_frame,
        };
        if let Some(delegate) = self.delegate.as_mut() {
            delegate.will_animate_focus_view(index, &coordinator);
        }
        pdebug!(index, to_offset, "MenuView::scroll_animated");
        self.animation = Some(MenuAnimation {
            index,
            from_offset: self.content_offset,
            to_offset,
            coordinator,
            completion: Some(Box::new(completion)),
        });
    }

    /// Applies the presentation state of the running animation at `progress` (`0.0..=1.0`).
    pub fn advance_animation(&mut self, progress: f64) {
        let Some(anim) = self.animation.as_ref() else {
            return;
        };
        let offset = anim.offset_at(progress);
        self.focus.frame = anim.coordinator.frame_at(progress);
        self.set_content_offset(offset);
    }

    /// Ends the running animation. With `finished`, offset and focus snap to the end state and
    /// the delegate hears `focus_view_did_end_transition`. The completion runs either way.
    pub fn finish_animation(&mut self, finished: bool) {
        let Some(mut anim) = self.animation.take() else {
            return;
        };
        if finished {
            self.focus.frame = anim.coordinator.end_frame;
            self.set_content_offset(anim.to_offset);
            for cell in self.visible_cells.iter_mut() {
                cell.is_selected = cell.index == anim.index;
            }
            if let Some(delegate) = self.delegate.as_mut() {
                delegate.focus_view_did_end_transition(&self.focus);
            }
        }
        if let Some(completion) = anim.completion.take() {
            completion(self, finished);
        }
    }

    fn cancel_animation(&mut self) {
        if self.animation.is_some() {
            ptrace!("MenuView: animation interrupted");
            self.finish_animation(false);
        }
    }

    /// Records the cell under a touch-down. `point` is in view space.
    pub fn touch_began(&mut self, point: Point) {
        self.touch_index = self.visible_index_at(point);
    }

    /// Reports a selection when the touch lifts over the cell it went down on.
    pub fn touch_ended(&mut self, point: Point) {
        let Some(began) = self.touch_index.take() else {
            return;
        };
        if self.visible_index_at(point) != Some(began) {
            return;
        }
        let previous = self.focus.selected_index;
        pdebug!(index = began, "MenuView: did select");
        if let Some(delegate) = self.delegate.as_mut() {
            delegate.did_select(began, previous);
        }
    }

    pub fn touch_cancelled(&mut self) {
        self.touch_index = None;
    }

    fn visible_index_at(&self, point: Point) -> Option<usize> {
        let x = point.x + self.content_offset - self.container_origin_x;
        self.visible_cells
            .iter()
            .find(|c| x >= c.frame.min_x() && x < c.frame.max_x())
            .map(MenuCell::index)
    }

    /// Retiles the visible cells for the current offset. Runs on every offset or geometry
    /// change; hosts normally never call it directly.
    pub fn layout_subviews(&mut self) {
        if self.widths.is_empty() || self.data_source.is_none() {
            return;
        }
        let min_x = self.content_offset - self.container_origin_x;
        let width = self.bounds.width;
        let extra = width / 2.0;
        let content = self.widths.total();
        self.tile_cells((min_x - extra).max(0.0), (min_x + width + extra).min(content));
    }

    fn tile_cells(&mut self, min_x: f64, max_x: f64) {
        let count = self.widths.len();
        let disjoint = match (self.visible_cells.front(), self.visible_cells.back()) {
            (Some(first), Some(last)) => last.frame.max_x() < min_x || first.frame.min_x() > max_x,
            _ => false,
        };
        if disjoint {
            ptrace!(min_x, max_x, "tile: window jumped, recycling all");
            while let Some(cell) = self.visible_cells.pop_front() {
                self.queue.recycle(cell);
            }
        }
        if self.visible_cells.is_empty() {
            let seed = self.widths.index_at_or_after(min_x);
            let cell = self.place_cell(seed);
            self.visible_cells.push_back(cell);
        }

        while let Some(last) = self.visible_cells.back() {
            if last.frame.max_x() >= max_x {
                break;
            }
            let next = (last.index + 1) % count;
            if next <= last.index {
                break;
            }
            let cell = self.place_cell(next);
            self.visible_cells.push_back(cell);
        }

        while let Some(first) = self.visible_cells.front() {
            if first.frame.min_x() <= min_x {
                break;
            }
            let next = (first.index + count - 1) % count;
            if next >= first.index {
                break;
            }
            let cell = self.place_cell(next);
            self.visible_cells.push_front(cell);
        }

        while self.visible_cells.len() > 1
            && self
                .visible_cells
                .back()
                .is_some_and(|c| c.frame.min_x() > max_x)
        {
            if let Some(cell) = self.visible_cells.pop_back() {
                ptrace!(index = cell.index, "tile: recycle right");
                self.queue.recycle(cell);
            }
        }
        while self.visible_cells.len() > 1
            && self
                .visible_cells
                .front()
                .is_some_and(|c| c.frame.max_x() < min_x)
        {
            if let Some(cell) = self.visible_cells.pop_front() {
                ptrace!(index = cell.index, "tile: recycle left");
                self.queue.recycle(cell);
            }
        }
    }

    fn place_cell(&mut self, index: usize) -> MenuCell<C> {
        let count = self.widths.len();
        if index >= count {
            panic!("{}", PagingError::IndexOutOfRange { index, count });
        }
        let frame = self.rect_for_item(index);
        let Some(data_source) = self.data_source.as_mut() else {
            panic!("MenuView: tiling without a data source");
        };
        let mut cell = data_source.cell_for_item(&mut self.queue, index);
        cell.index = index;
        cell.frame = frame;
        cell.is_selected = self.focus.selected_index == Some(index);
        ptrace!(index, x = frame.x, "tile: place");
        if let Some(delegate) = self.delegate.as_mut() {
            delegate.will_display(&cell, index);
        }
        cell
    }

    fn update_focused_cell(&mut self) {
        let cx = self.focus.frame.mid_x();
        let Some(index) = self
            .visible_cells
            .iter()
            .find(|c| cx >= c.frame.min_x() && cx < c.frame.max_x())
            .map(MenuCell::index)
        else {
            return;
        };
        self.focus.selected_index = Some(index);
        for cell in self.visible_cells.iter_mut() {
            cell.is_selected = cell.index == index;
        }
    }

    fn rebuild_widths(&mut self) {
        let Some(data_source) = self.data_source.as_ref() else {
            return;
        };
        let count = data_source.number_of_items();
        let widths = (0..count)
            .map(|i| data_source.width_for_item(i).max(0.0))
            .collect();
        self.widths = WidthTable::new(widths, self.options.cell_spacing);
    }

    fn reposition_visible_cells(&mut self) {
        let height = self.bounds.height;
        let widths = &self.widths;
        for cell in self.visible_cells.iter_mut() {
            if let Some(width) = widths.width(cell.index) {
                cell.frame = Rect::new(widths.start_of(cell.index), 0.0, width, height);
            }
        }
    }

    fn align_container(&mut self) {
        let safe_width = self.bounds.width - self.adjusted_insets().horizontal();
        let slack = safe_width - self.widths.total();
        self.container_origin_x = self.options.cell_alignment.offset(slack);
    }

    fn adjusted_insets(&self) -> EdgeInsets {
        self.options.content_inset + self.safe_area_insets
    }

    fn centered_offset(&self, center_x: f64) -> f64 {
        let offset = self.container_origin_x + center_x - self.bounds.width / 2.0;
        self.clamp_offset(offset)
    }

    fn clamp_offset(&self, offset: f64) -> f64 {
        offset
            .max(self.min_content_offset_x())
            .min(self.max_content_offset_x())
    }
}

impl<C> core::fmt::Debug for MenuView<C> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("MenuView")
            .field("options", &self.options)
            .field("bounds", &self.bounds)
            .field("content_offset", &self.content_offset)
            .field("number_of_items", &self.widths.len())
            .field("visible", &self.visible_cells.len())
            .field("focus", &self.focus)
            .field("animation", &self.animation)
            .finish_non_exhaustive()
    }
}

/// Re-expresses a signed percent around `index` as a forward percent from the left item.
fn normalize_percent(index: usize, percent: f64) -> (usize, f64) {
    if percent < 0.0 {
        if index == 0 {
            return (0, 0.0);
        }
        return (index - 1, (1.0 + percent).clamp(0.0, 1.0));
    }
    (index, percent.min(1.0))
}
