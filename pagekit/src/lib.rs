//! A headless paging engine: a horizontally scrolling tab menu with reusable cells and a focus
//! indicator, and a paging content container that keeps at most three child pages alive.
//!
//! For the synchronizer that keeps the two in lockstep (and tween-driven animations), see the
//! `pagekit-adapter` crate.
//!
//! The crate is UI-agnostic. A host toolkit is expected to provide:
//! - viewport sizes and safe-area insets
//! - scroll offsets and drag/deceleration events from its scroll surfaces
//! - touch events on the menu
//! - a layout pass (`MenuView::layout_subviews` runs on every offset change,
//!   `ContentController::layout_if_needed` once per frame)
//!
//! and renders what the engine reports: cell frames, the focus frame and attached pages.
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod appearance;
mod cell;
mod content;
mod error;
mod focus;
mod geometry;
mod layout;
mod menu;
mod options;
mod page_cache;
mod paging;
mod queue;
mod types;


pub use appearance::AppearanceTracker;
pub use cell::MenuCell;
pub use content::{
    ContentAnimation, ContentController, ContentDataSource, ContentDelegate, ReloadCompletion,
    ScrollCompletion,
};
pub use error::PagingError;
pub use focus::{FocusAnimationCoordinator, FocusView, interpolate_focus_frame};
pub use geometry::{EdgeInsets, Point, Rect, Size};
pub use menu::{MenuAnimation, MenuCompletion, MenuDataSource, MenuDelegate, MenuView};
pub use options::{ContentOptions, FocusStyle, MenuOptions};
pub use page_cache::{ContentPage, PageCache};
pub use paging::{ExplicitPaging, PagingPhase, left_side_page, normalize_page, scrolling_percent};
pub use queue::{CellFactory, CellQueue};
pub use types::{Appearance, CellAlignment, Rgba};
