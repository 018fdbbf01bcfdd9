use alloc::boxed::Box;

use pagekit::{
    ContentController, ContentDataSource, ContentOptions, ContentPage, MenuDataSource,
    MenuOptions, MenuView, Point, Size,
};

use crate::{Animator, ContentEvent, EventQueue, MenuEvent};

/// Observes a [`PagingController`] after it has synchronized the two components.
#[allow(unused_variables)]
pub trait PagingDelegate {
    fn menu_event(&mut self, event: &MenuEvent) {}

    fn content_event(&mut self, event: &ContentEvent) {}
}

/// A framework-neutral pairing of a [`MenuView`] and a [`ContentController`] that keeps the two
/// in lockstep.
///
/// - A selected menu cell animates the menu focus and pages the content to the same index.
/// - Manual scrolling of the content mirrors its index and signed percent onto the menu with a
///   position-only `MenuView::scroll`, which never reports a selection, so the menu does not
///   feed back into the content.
///
/// This type does not hold any UI objects. Hosts drive it by forwarding input (touches on the
/// menu, drag events from the content's scroll surface, size changes) and by calling
/// `tick(now_ms)` once per frame, which runs pending layout and advances animations.
pub struct PagingController<C, P> {
    menu: MenuView<C>,
    content: ContentController<P>,
    menu_events: EventQueue<MenuEvent>,
    content_events: EventQueue<ContentEvent>,
    animator: Animator,
    delegate: Option<Box<dyn PagingDelegate>>,
}

impl<C: 'static, P: ContentPage + 'static> PagingController<C, P> {
    pub fn new(menu_options: MenuOptions, content_options: ContentOptions) -> Self {
        Self::from_parts(
            MenuView::new(menu_options),
            ContentController::new(content_options),
        )
    }

    /// Wraps existing components. Their delegates are replaced by the controller's queues.
    pub fn from_parts(mut menu: MenuView<C>, mut content: ContentController<P>) -> Self {
        let menu_events = EventQueue::new();
        let content_events = EventQueue::new();
        menu.set_delegate(menu_events.clone());
        content.set_delegate(content_events.clone());
        Self {
            menu,
            content,
            menu_events,
            content_events,
            animator: Animator::default(),
            delegate: None,
        }
    }

    pub fn with_animator(mut self, animator: Animator) -> Self {
        self.animator = animator;
        self
    }

    pub fn menu(&self) -> &MenuView<C> {
        &self.menu
    }

    /// Direct access to the menu. Call [`Self::dispatch`] after operations that emit events.
    pub fn menu_mut(&mut self) -> &mut MenuView<C> {
        &mut self.menu
    }

    pub fn content(&self) -> &ContentController<P> {
        &self.content
    }

    /// Direct access to the content. Call [`Self::dispatch`] after operations that emit events.
    pub fn content_mut(&mut self) -> &mut ContentController<P> {
        &mut self.content
    }

    pub fn animator(&self) -> &Animator {
        &self.animator
    }

    pub fn set_delegate(&mut self, delegate: impl PagingDelegate + 'static) {
        self.delegate = Some(Box::new(delegate));
    }

    pub fn clear_delegate(&mut self) {
        self.delegate = None;
    }

    pub fn set_menu_data_source(&mut self, data_source: impl MenuDataSource<C> + 'static) {
        self.menu.set_data_source(data_source);
    }

    pub fn set_content_data_source(&mut self, data_source: impl ContentDataSource<P> + 'static) {
        self.content.set_data_source(data_source);
    }

    pub fn set_menu_bounds(&mut self, size: Size) {
        self.menu.set_bounds(size);
        self.dispatch();
    }

    pub fn set_content_bounds(&mut self, size: Size) {
        self.content.set_bounds(size);
    }

    /// Starts a size transition of the content; the rebuild lands on the next tick.
    pub fn view_will_transition(&mut self, size: Size) {
        self.content.view_will_transition(size);
    }

    /// Reloads both components onto `index` (or their current positions).
    ///
    /// The content lands on its page during the next [`Self::tick`] or [`Self::layout_if_needed`].
    pub fn reload_data(&mut self, index: Option<usize>) {
        self.menu.reload_data_with(index);
        self.content.reload_data(index);
        self.dispatch();
    }

    /// Selects `index` as if its menu cell had been tapped.
    pub fn select(&mut self, index: usize) {
        self.apply_selection(index);
        self.dispatch();
    }

    /// Current page of the content, which the menu focus follows.
    pub fn current_index(&self) -> usize {
        self.content.current_page_index()
    }

    pub fn touch_began(&mut self, point: Point) {
        self.menu.touch_began(point);
    }

    pub fn touch_ended(&mut self, point: Point) {
        self.menu.touch_ended(point);
        self.dispatch();
    }

    pub fn touch_cancelled(&mut self) {
        self.menu.touch_cancelled();
    }

    pub fn will_begin_dragging(&mut self) {
        self.content.will_begin_dragging();
        self.dispatch();
    }

    pub fn did_scroll(&mut self, offset_x: f64) {
        self.content.did_scroll(offset_x);
        self.dispatch();
    }

    pub fn will_end_dragging(&mut self, target_offset_x: f64) {
        self.content.will_end_dragging(target_offset_x);
        self.dispatch();
    }

    pub fn did_end_dragging(&mut self, will_decelerate: bool) {
        self.content.did_end_dragging(will_decelerate);
        self.dispatch();
    }

    pub fn did_end_decelerating(&mut self) {
        self.content.did_end_decelerating();
        self.dispatch();
    }

    /// Runs the content's deferred layout work and synchronizes what it emitted.
    pub fn layout_if_needed(&mut self) {
        self.content.layout_if_needed();
        self.dispatch();
    }

    /// Advances one frame: deferred layout, then both animations. Returns `true` while an
    /// animation is still running.
    pub fn tick(&mut self, now_ms: u64) -> bool {
        self.content.layout_if_needed();
        let menu = self.animator.tick_menu(&mut self.menu, now_ms);
        let content = self.animator.tick_content(&mut self.content, now_ms);
        self.dispatch();
        menu || content
    }

    /// Drains both event queues, applies the synchronization rules and forwards every event to
    /// the delegate. Reactions that emit further events are drained in the same call.
    pub fn dispatch(&mut self) {
        loop {
            if let Some(event) = self.menu_events.pop() {
                self.on_menu_event(&event);
                if let Some(delegate) = self.delegate.as_mut() {
                    delegate.menu_event(&event);
                }
                continue;
            }
            if let Some(event) = self.content_events.pop() {
                self.on_content_event(&event);
                if let Some(delegate) = self.delegate.as_mut() {
                    delegate.content_event(&event);
                }
                continue;
            }
            break;
        }
    }

    fn on_menu_event(&mut self, event: &MenuEvent) {
        if let MenuEvent::DidSelect { index, .. } = *event {
            self.apply_selection(index);
        }
    }

    fn on_content_event(&mut self, event: &ContentEvent) {
        match *event {
            ContentEvent::DidManualScroll { index, percent } => self.menu.scroll(index, percent),
            ContentEvent::DidEndManualScroll { index } => self.menu.scroll(index, 0.0),
            _ => {}
        }
    }

    fn apply_selection(&mut self, index: usize) {
        #[cfg(feature = "tracing")]
        tracing::debug!(target: "pagekit_adapter", index, "PagingController: select");
        self.menu.scroll_animated(index, |_, _| {});
        self.content.scroll_to(index, true);
    }
}

impl<C, P> core::fmt::Debug for PagingController<C, P> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("PagingController")
            .field("menu", &self.menu)
            .field("content", &self.content)
            .field("animator", &self.animator)
            .field("pending_menu_events", &self.menu_events.len())
            .field("pending_content_events", &self.content_events.len())
            .finish_non_exhaustive()
    }
}
