use crate::{CellAlignment, EdgeInsets, Rgba};

/// Appearance of the focus indicator.
///
/// Replaces a process-wide focus color: every [`crate::MenuView`] carries its own style.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FocusStyle {
    pub color: Rgba,
    /// Height of the underline drawn at the bottom of the focus frame. `0.0` fills the frame.
    pub underline_height: f64,
    pub corner_radius: f64,
}

impl Default for FocusStyle {
    fn default() -> Self {
        Self {
            color: Rgba::default(),
            underline_height: 2.0,
            corner_radius: 0.0,
        }
    }
}

/// Configuration for [`crate::MenuView`].
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MenuOptions {
    pub cell_alignment: CellAlignment,
    /// Distance between two adjacent cells. Negative values are treated as `0.0`.
    pub cell_spacing: f64,
    pub content_inset: EdgeInsets,
    pub focus_style: FocusStyle,
}

impl MenuOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_cell_alignment(mut self, cell_alignment: CellAlignment) -> Self {
        self.cell_alignment = cell_alignment;
        self
    }

    pub fn with_cell_spacing(mut self, cell_spacing: f64) -> Self {
        self.cell_spacing = cell_spacing.max(0.0);
        self
    }

    pub fn with_content_inset(mut self, content_inset: EdgeInsets) -> Self {
        self.content_inset = content_inset;
        self
    }

    pub fn with_focus_style(mut self, focus_style: FocusStyle) -> Self {
        self.focus_style = focus_style;
        self
    }
}

/// Configuration for [`crate::ContentController`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ContentOptions {
    /// Loads the page window one page ahead as soon as a drag passes the halfway point.
    pub is_enabled_preload_content: bool,
}

impl Default for ContentOptions {
    fn default() -> Self {
        Self {
            is_enabled_preload_content: true,
        }
    }
}

impl ContentOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_preload_content(mut self, enabled: bool) -> Self {
        self.is_enabled_preload_content = enabled;
        self
    }
}
