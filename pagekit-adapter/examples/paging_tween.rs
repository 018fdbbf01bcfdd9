use pagekit::{
    CellQueue, ContentDataSource, ContentOptions, ContentPage, MenuCell, MenuDataSource,
    MenuOptions, Point, Size,
};
use pagekit_adapter::{Animator, ContentEvent, Easing, MenuEvent, PagingController, PagingDelegate};

struct Tabs(usize);

impl MenuDataSource<()> for Tabs {
    fn number_of_items(&self) -> usize {
        self.0
    }

    fn width_for_item(&self, _index: usize) -> f64 {
        80.0
    }

    fn cell_for_item(&mut self, queue: &mut CellQueue<()>, _index: usize) -> MenuCell<()> {
        queue.dequeue("tab")
    }
}

struct Page;

impl ContentPage for Page {
    fn begin_appearance_transition(&mut self, _is_appearing: bool, _animated: bool) {}

    fn end_appearance_transition(&mut self) {}
}

struct Pages(usize);

impl ContentDataSource<Page> for Pages {
    fn number_of_items(&self) -> usize {
        self.0
    }

    fn page(&mut self, _index: usize) -> Page {
        Page
    }
}

struct Log;

impl PagingDelegate for Log {
    fn menu_event(&mut self, event: &MenuEvent) {
        if !matches!(event, MenuEvent::WillDisplay { .. }) {
            println!("menu: {event:?}");
        }
    }

    fn content_event(&mut self, event: &ContentEvent) {
        println!("content: {event:?}");
    }
}

fn main() {
    // Example: a tab menu and its pages kept in lockstep, animated from a frame clock.
    //
    // A host would:
    // - forward touches on the menu and drag events from the content's scroll surface
    // - call tick(now_ms) in a frame loop / timer
    // - render menu cells, the focus frame and attached pages from the controller state
    let mut c: PagingController<(), Page> =
        PagingController::new(MenuOptions::default(), ContentOptions::default())
            .with_animator(Animator::new(240, Easing::SmoothStep));
    c.menu_mut().register("tab", || ());
    c.set_menu_bounds(Size::new(320.0, 44.0));
    c.set_content_bounds(Size::new(320.0, 480.0));
    c.set_menu_data_source(Tabs(12));
    c.set_content_data_source(Pages(12));
    c.set_delegate(Log);
    c.reload_data(None);
    c.layout_if_needed();

    // Tap the fourth tab.
    c.touch_began(Point::new(280.0, 20.0));
    c.touch_ended(Point::new(280.0, 20.0));

    let mut now_ms = 0u64;
    while c.tick(now_ms) {
        if now_ms % 80 == 0 {
            println!(
                "t={now_ms} menu_off={:.1} content_off={:.1}",
                c.menu().content_offset(),
                c.content().content_offset_x()
            );
        }
        now_ms += 16;
    }

    println!(
        "done: page={} focused={:?}",
        c.current_index(),
        c.menu().current_focused_index()
    );
}
