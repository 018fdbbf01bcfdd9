/// Horizontal placement of the menu's cells when their total width is narrower than the
/// available (safe) width.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CellAlignment {
    #[default]
    Left,
    Center,
    Right,
}

impl CellAlignment {
    /// Offset applied to the cell container for a given amount of unused width.
    pub fn offset(self, slack: f64) -> f64 {
        if slack <= 0.0 {
            return 0.0;
        }
        match self {
            Self::Left => 0.0,
            Self::Center => slack / 2.0,
            Self::Right => slack,
        }
    }
}

/// Appearance events of the content controller itself (not of a page change inside it).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Appearance {
    WillAppear,
    DidAppear,
    WillDisappear,
    DidDisappear,
}

impl Appearance {
    pub fn is_appearing(self) -> bool {
        matches!(self, Self::WillAppear | Self::DidAppear)
    }
}

/// An RGBA color with components in `0.0..=1.0`.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Rgba {
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }
}

impl Default for Rgba {
    fn default() -> Self {
        Self::new(0.0, 0.478, 1.0, 1.0)
    }
}
