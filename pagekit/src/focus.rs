use crate::geometry::lerp;
use crate::{FocusStyle, Point, Rect};

/// The indicator that tracks the focused menu item.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FocusView {
    /// Frame in the menu's container space.
    pub frame: Rect,
    pub selected_index: Option<usize>,
    pub style: FocusStyle,
}

impl FocusView {
    pub fn new(style: FocusStyle) -> Self {
        Self {
            frame: Rect::ZERO,
            selected_index: None,
            style,
        }
    }

    pub fn center(&self) -> Point {
        self.frame.center()
    }

    /// The part of the frame a renderer fills: the full frame, or a bottom underline of
    /// `style.underline_height`.
    pub fn indicator_frame(&self) -> Rect {
        let h = self.style.underline_height;
        if h <= 0.0 || h >= self.frame.height {
            return self.frame;
        }
        Rect::new(
            self.frame.x,
            self.frame.max_y() - h,
            self.frame.width,
            h,
        )
    }
}

/// Focus frame between two adjacent item rects.
///
/// `percent = 0` sits on `from`, `percent = 1` on `to`. Width and center move linearly, so two
/// items of different widths morph into each other instead of sliding a fixed-size box.
pub fn interpolate_focus_frame(from: Rect, to: Rect, percent: f64, height: f64) -> Rect {
    let width = lerp(from.width, to.width, percent);
    let center_x = lerp(from.mid_x(), to.mid_x(), percent);
    Rect::new(center_x - width / 2.0, 0.0, width, height)
}

/// Begin and end frames of an animated focus move, handed to
/// [`crate::MenuDelegate::will_animate_focus_view`] so hosts can animate alongside.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FocusAnimationCoordinator {
    pub begin_frame: Rect,
    pub end_frame: Rect,
}

impl FocusAnimationCoordinator {
    pub fn frame_at(&self, progress: f64) -> Rect {
        self.begin_frame
            .lerp(&self.end_frame, progress.clamp(0.0, 1.0))
    }
}
