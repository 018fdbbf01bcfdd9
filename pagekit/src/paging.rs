/// Progress of a user drag.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PagingPhase {
    /// The drag started but no content has moved yet.
    Scheduled,
    /// The first scroll delta was observed; "will begin paging" has been reported.
    Fired,
}

/// A user-initiated page transition, alive from drag start to the end of deceleration.
///
/// The "will begin paging" work is deferred to the first scroll callback after the drag
/// starts, so a touch that never moves content fires nothing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExplicitPaging {
    origin_index: usize,
    phase: PagingPhase,
}

impl ExplicitPaging {
    pub fn new(origin_index: usize) -> Self {
        Self {
            origin_index,
            phase: PagingPhase::Scheduled,
        }
    }

    /// Page the drag started on.
    pub fn origin_index(&self) -> usize {
        self.origin_index
    }

    pub fn phase(&self) -> PagingPhase {
        self.phase
    }

    pub fn is_paging(&self) -> bool {
        self.phase == PagingPhase::Fired
    }

    /// Returns the origin page exactly once, on the first call.
    pub fn start(&mut self) -> Option<usize> {
        match self.phase {
            PagingPhase::Scheduled => {
                self.phase = PagingPhase::Fired;
                Some(self.origin_index)
            }
            PagingPhase::Fired => None,
        }
    }
}

/// Page whose left edge is at or before `offset` (truncated, clamped to the page range).
pub fn left_side_page(offset: f64, page_width: f64, count: usize) -> usize {
    if count == 0 || page_width <= 0.0 || offset <= 0.0 {
        return 0;
    }
    ((offset / page_width) as usize).min(count - 1)
}

/// Fraction of the way from `left_page` to the next page (negative while bouncing past the
/// first page).
pub fn scrolling_percent(offset: f64, page_width: f64, left_page: usize) -> f64 {
    if page_width <= 0.0 {
        return 0.0;
    }
    offset / page_width - left_page as f64
}

/// Re-centers a left-side page and forward percent on the page that is at least half visible.
///
/// Returns `(left_page, percent)` while `percent < 0.5`, and `(left_page + 1, percent - 1.0)`
/// from `0.5` on, so the percent is negative while the next page is already the current one.
/// The last page never rolls over.
pub fn normalize_page(left_page: usize, percent: f64, count: usize) -> (usize, f64) {
    if percent >= 0.5 && left_page + 1 < count {
        return (left_page + 1, percent - 1.0);
    }
    (left_page, percent)
}
