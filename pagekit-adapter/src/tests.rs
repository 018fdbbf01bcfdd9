use crate::*;

use alloc::rc::Rc;
use alloc::vec;
use alloc::vec::Vec;
use core::cell::RefCell;

use pagekit::{
    CellQueue, ContentDataSource, ContentOptions, ContentPage, FocusAnimationCoordinator,
    MenuCell, MenuDataSource, MenuOptions, MenuView, Point, Rect, Size,
};
use pretty_assertions::assert_eq;

const TAB: &str = "tab";

struct Tabs {
    count: usize,
}

impl MenuDataSource<()> for Tabs {
    fn number_of_items(&self) -> usize {
        self.count
    }

    fn width_for_item(&self, _index: usize) -> f64 {
        100.0
    }

    fn cell_for_item(&mut self, queue: &mut CellQueue<()>, _index: usize) -> MenuCell<()> {
        queue.dequeue(TAB)
    }
}

/// Panics on unbalanced appearance calls.
#[derive(Default)]
struct Page {
    open: bool,
}

impl ContentPage for Page {
    fn begin_appearance_transition(&mut self, _is_appearing: bool, _animated: bool) {
        assert!(!self.open, "transition opened twice");
        self.open = true;
    }

    fn end_appearance_transition(&mut self) {
        assert!(self.open, "transition closed while not open");
        self.open = false;
    }

    fn will_remove_from_parent(&mut self) {
        assert!(!self.open, "page detached with an open transition");
    }
}

struct Pages {
    count: usize,
}

impl ContentDataSource<Page> for Pages {
    fn number_of_items(&self) -> usize {
        self.count
    }

    fn page(&mut self, _index: usize) -> Page {
        Page::default()
    }
}

#[derive(Clone, Debug, PartialEq)]
enum Recorded {
    Menu(MenuEvent),
    Content(ContentEvent),
}

#[derive(Clone, Default)]
struct Recorder(Rc<RefCell<Vec<Recorded>>>);

impl Recorder {
    fn take(&self) -> Vec<Recorded> {
        core::mem::take(&mut *self.0.borrow_mut())
            .into_iter()
            .filter(|e| !matches!(e, Recorded::Menu(MenuEvent::WillDisplay { .. })))
            .collect()
    }
}

impl PagingDelegate for Recorder {
    fn menu_event(&mut self, event: &MenuEvent) {
        self.0.borrow_mut().push(Recorded::Menu(event.clone()));
    }

    fn content_event(&mut self, event: &ContentEvent) {
        self.0.borrow_mut().push(Recorded::Content(event.clone()));
    }
}

fn paging(count: usize) -> (PagingController<(), Page>, Recorder) {
    let recorder = Recorder::default();
    let mut c = PagingController::new(MenuOptions::default(), ContentOptions::default())
        .with_animator(Animator::new(100, Easing::Linear));
    c.menu_mut().register(TAB, || ());
    c.set_menu_bounds(Size::new(320.0, 44.0));
    c.set_content_bounds(Size::new(400.0, 600.0));
    c.set_menu_data_source(Tabs { count });
    c.set_content_data_source(Pages { count });
    c.set_delegate(recorder.clone());
    c.reload_data(None);
    c.layout_if_needed();
    recorder.take();
    (c, recorder)
}

fn uniform_menu(count: usize) -> MenuView<()> {
    let mut menu = MenuView::new(MenuOptions::default());
    menu.register(TAB, || ());
    menu.set_bounds(Size::new(320.0, 44.0));
    menu.set_data_source(Tabs { count });
    menu.reload_data();
    menu
}

#[test]
fn tween_samples_between_endpoints() {
    let t = Tween::new(10.0, 110.0, 100, 200, Easing::Linear);
    assert_eq!(t.sample(0), 10.0);
    assert_eq!(t.sample(100), 10.0);
    assert_eq!(t.sample(200), 60.0);
    assert_eq!(t.sample(300), 110.0);
    assert_eq!(t.sample(1_000), 110.0);
    assert!(!t.is_done(299));
    assert!(t.is_done(300));

    let mut last = 0.0;
    let eased = Tween::progress(0, 100, Easing::EaseInOutCubic);
    for now_ms in (0..=100).step_by(10) {
        let p = eased.sample(now_ms);
        assert!(p >= last);
        last = p;
    }
    assert_eq!(last, 1.0);
}

#[test]
fn tween_retarget_continues_from_the_current_value() {
    let mut t = Tween::new(0.0, 100.0, 0, 100, Easing::Linear);
    t.retarget(50, 0.0, 100);
    assert_eq!(t.from, 50.0);
    assert_eq!(t.start_ms, 50);
    assert_eq!(t.sample(100), 25.0);
}

#[test]
fn easing_curves_hit_their_endpoints() {
    for easing in [Easing::Linear, Easing::SmoothStep, Easing::EaseInOutCubic] {
        assert_eq!(easing.sample(0.0), 0.0);
        assert_eq!(easing.sample(1.0), 1.0);
        assert_eq!(easing.sample(0.5), 0.5);
    }
}

#[test]
fn event_queue_is_shared_between_clones() {
    let queue: EventQueue<u32> = EventQueue::new();
    let sink = queue.clone();
    sink.push(1);
    sink.push(2);
    sink.push(3);
    assert_eq!(queue.len(), 3);
    assert_eq!(queue.pop(), Some(1));
    assert_eq!(queue.drain(), vec![2, 3]);
    assert!(sink.is_empty());
}

#[test]
fn animator_drives_a_menu_animation_to_completion() {
    let mut menu = uniform_menu(20);
    let done = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&done);
    menu.scroll_animated(5, move |_, finished| sink.borrow_mut().push(finished));

    let mut animator = Animator::new(100, Easing::Linear);
    assert!(animator.tick_menu(&mut menu, 1_000));
    assert_eq!(menu.content_offset(), 0.0);
    assert!(animator.tick_menu(&mut menu, 1_050));
    assert_eq!(menu.content_offset(), 195.0);
    assert!(!animator.tick_menu(&mut menu, 1_100));
    assert_eq!(menu.content_offset(), 390.0);
    assert!(!menu.is_animating());
    assert!(!animator.is_animating());
    assert_eq!(*done.borrow(), vec![true]);
}

#[test]
fn animator_restarts_when_the_animation_is_replaced() {
    let mut menu = uniform_menu(20);
    let done = Rc::new(RefCell::new(Vec::new()));
    let first = Rc::clone(&done);
    menu.scroll_animated(5, move |_, finished| first.borrow_mut().push(finished));

    let mut animator = Animator::new(100, Easing::Linear);
    animator.tick_menu(&mut menu, 0);
    animator.tick_menu(&mut menu, 50);
    assert_eq!(menu.content_offset(), 195.0);

    let second = Rc::clone(&done);
    menu.scroll_animated(2, move |_, finished| second.borrow_mut().push(finished));
    assert_eq!(*done.borrow(), vec![false]);

    assert!(animator.tick_menu(&mut menu, 60));
    assert_eq!(menu.content_offset(), 195.0);
    assert!(!animator.tick_menu(&mut menu, 160));
    assert_eq!(menu.content_offset(), 90.0);
    assert_eq!(*done.borrow(), vec![false, true]);
}

#[test]
fn tapping_a_menu_cell_pages_the_content() {
    let (mut c, recorder) = paging(10);
    c.touch_began(Point::new(250.0, 10.0));
    c.touch_ended(Point::new(250.0, 10.0));

    assert_eq!(
        recorder.take(),
        vec![
            Recorded::Menu(MenuEvent::DidSelect {
                index: 2,
                previous_index: Some(0),
            }),
            Recorded::Menu(MenuEvent::WillAnimateFocusView {
                index: 2,
                coordinator: FocusAnimationCoordinator {
                    begin_frame: Rect::new(0.0, 0.0, 100.0, 44.0),
                    end_frame: Rect::new(200.0, 0.0, 100.0, 44.0),
                },
            }),
            Recorded::Content(ContentEvent::WillBeginPaging {
                index: 0,
                animated: true,
            }),
            Recorded::Content(ContentEvent::WillFinishPaging {
                index: 2,
                animated: true,
            }),
        ]
    );
    assert_eq!(c.menu().current_focused_index(), Some(2));

    assert!(c.tick(0));
    assert!(c.tick(50));
    assert_eq!(c.content().content_offset_x(), 400.0);
    assert_eq!(c.menu().content_offset(), 45.0);
    assert!(!c.tick(100));

    assert_eq!(c.current_index(), 2);
    assert_eq!(c.content().content_offset_x(), 800.0);
    assert_eq!(c.menu().content_offset(), 90.0);
    assert_eq!(
        recorder.take(),
        vec![
            Recorded::Menu(MenuEvent::FocusViewDidEndTransition {
                selected_index: Some(2),
            }),
            Recorded::Content(ContentEvent::DidFinishPaging {
                index: 2,
                animated: true,
            }),
        ]
    );
    assert!(c.content().appearance().open_transitions().is_empty());
}

#[test]
fn manual_content_scroll_moves_the_menu_without_selecting() {
    let (mut c, recorder) = paging(10);
    c.will_begin_dragging();
    c.did_scroll(200.0);
    assert_eq!(c.menu().focus_view().frame, Rect::new(50.0, 0.0, 100.0, 44.0));
    assert_eq!(c.menu().current_focused_index(), Some(1));

    c.did_scroll(400.0);
    assert_eq!(c.menu().focus_view().frame, Rect::new(100.0, 0.0, 100.0, 44.0));
    c.did_end_dragging(false);

    assert_eq!(
        recorder.take(),
        vec![
            Recorded::Content(ContentEvent::WillBeginManualScroll { index: 0 }),
            Recorded::Content(ContentEvent::WillBeginPaging {
                index: 0,
                animated: false,
            }),
            Recorded::Content(ContentEvent::DidManualScroll {
                index: 1,
                percent: -0.5,
            }),
            Recorded::Content(ContentEvent::DidManualScroll {
                index: 1,
                percent: 0.0,
            }),
            Recorded::Content(ContentEvent::DidEndManualScroll { index: 1 }),
            Recorded::Content(ContentEvent::DidFinishPaging {
                index: 1,
                animated: false,
            }),
        ]
    );
    assert_eq!(c.current_index(), 1);
    assert!(!c.tick(0));
}

#[test]
fn select_and_reload_keep_both_sides_aligned() {
    let (mut c, _recorder) = paging(10);
    c.select(4);
    assert!(c.tick(0));
    assert!(!c.tick(100));
    assert_eq!(c.current_index(), 4);
    assert_eq!(c.menu().current_focused_index(), Some(4));

    c.reload_data(Some(7));
    assert_eq!(c.menu().current_focused_index(), Some(7));
    c.tick(300);
    assert_eq!(c.current_index(), 7);
    assert_eq!(c.content().cached_pages(), vec![6, 7, 8]);
}

#[test]
fn size_transition_lands_on_the_same_page() {
    let (mut c, _recorder) = paging(10);
    c.select(3);
    c.tick(0);
    c.tick(100);
    c.view_will_transition(Size::new(800.0, 600.0));
    c.tick(200);
    assert_eq!(c.current_index(), 3);
    assert_eq!(c.content().content_offset_x(), 2400.0);
}
