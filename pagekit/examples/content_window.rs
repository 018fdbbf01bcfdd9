// Example: a paged content container keeping at most three pages alive during a drag.
use pagekit::{ContentController, ContentDataSource, ContentOptions, ContentPage, Rect, Size};

struct Article {
    index: usize,
}

impl ContentPage for Article {
    fn begin_appearance_transition(&mut self, is_appearing: bool, _animated: bool) {
        let what = if is_appearing { "appearing" } else { "disappearing" };
        println!("  page {} {what}", self.index);
    }

    fn end_appearance_transition(&mut self) {
        println!("  page {} settled", self.index);
    }

    fn did_move_to_parent(&mut self, frame: Rect) {
        println!("  page {} attached at x={}", self.index, frame.x);
    }

    fn will_remove_from_parent(&mut self) {
        println!("  page {} detached", self.index);
    }
}

struct Articles(usize);

impl ContentDataSource<Article> for Articles {
    fn number_of_items(&self) -> usize {
        self.0
    }

    fn page(&mut self, index: usize) -> Article {
        Article { index }
    }
}

fn main() {
    let mut content = ContentController::new(ContentOptions::default());
    content.set_bounds(Size::new(375.0, 667.0));
    content.set_data_source(Articles(8));

    println!("reload:");
    content.reload_data(Some(2));
    content.layout_if_needed();
    println!("cached={:?}", content.cached_pages());

    println!("drag to the next page:");
    content.will_begin_dragging();
    for step in 1..=5 {
        content.did_scroll(750.0 + 75.0 * step as f64);
        println!(
            "  offset={} current={} percent={:.2}",
            content.content_offset_x(),
            content.current_page_index(),
            content.scrolling_percent()
        );
    }
    content.will_end_dragging(1125.0);
    content.did_end_dragging(false);
    println!("cached={:?}", content.cached_pages());

    println!("jump to the last page:");
    content.scroll_to(7, false);
    println!("cached={:?}", content.cached_pages());
}
