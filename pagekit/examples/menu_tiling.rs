// Example: a tab strip with uneven widths, scrolled by a host and recycling its cells.
use pagekit::{CellQueue, MenuCell, MenuDataSource, MenuOptions, MenuView, Point, Size};

struct Titles(Vec<&'static str>);

impl MenuDataSource<String> for Titles {
    fn number_of_items(&self) -> usize {
        self.0.len()
    }

    fn width_for_item(&self, index: usize) -> f64 {
        // Roughly 9pt per glyph plus padding.
        self.0[index].len() as f64 * 9.0 + 24.0
    }

    fn cell_for_item(&mut self, queue: &mut CellQueue<String>, index: usize) -> MenuCell<String> {
        let mut cell = queue.dequeue("title");
        cell.content = self.0[index].to_string();
        cell
    }
}

fn main() {
    let titles = [
        "Home", "World", "Business", "Technology", "Science", "Health", "Sports", "Arts",
        "Books", "Style", "Food", "Travel", "Magazine", "Real Estate", "Video",
    ];

    let mut menu = MenuView::new(MenuOptions::default().with_cell_spacing(4.0));
    menu.register("title", String::new);
    menu.set_bounds(Size::new(320.0, 44.0));
    menu.set_data_source(Titles(titles.to_vec()));
    menu.reload_data();

    println!("content_size={:?}", menu.content_size());
    println!("visible={:?}", menu.visible_indexes());

    // A content controller reports "page 6, 40% of the way to page 7".
    menu.scroll(6, 0.4);
    println!(
        "offset={:.1} focus={:?} focused={:?}",
        menu.content_offset(),
        menu.focus_view().frame,
        menu.current_focused_index()
    );
    for cell in menu.visible_cells() {
        println!("  [{}] {:>12} at {:?}", cell.index(), cell.content, cell.frame());
    }

    // The user taps somewhere on the strip.
    let hit = menu.index_for_item(Point::new(menu.content_offset() + 100.0, 0.0));
    println!("tap at x=100 hits item {hit:?}");

    println!(
        "cells built={} waiting in queue={}",
        menu.created_cell_count(),
        menu.queued_cell_count()
    );
}
