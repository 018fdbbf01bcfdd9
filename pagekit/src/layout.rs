use alloc::vec::Vec;

/// Per-item widths plus a Fenwick tree over `width + spacing` for fast prefix sums.
///
/// Item `i` starts at `prefix(i) = Σ widths[..i] + spacing * i` and the total content width is
/// `Σ widths + spacing * (n - 1)`.
#[derive(Clone, Debug, Default)]
pub(crate) struct WidthTable {
    widths: Vec<f64>,
    tree: Vec<f64>, // 1-indexed
    total: f64,
    max_bit: usize,
}

impl WidthTable {
    pub(crate) fn new(widths: Vec<f64>, spacing: f64) -> Self {
        let n = widths.len();
        let mut tree = alloc::vec![0.0f64; n + 1];
        let mut total = 0.0f64;
        for i in 1..=n {
            let mut v = widths[i - 1];
            if i < n {
                v += spacing;
            }
            total += v;
            tree[i] += v;
            let j = i + lsb(i);
            if j <= n {
                tree[j] += tree[i];
            }
        }
        let max_bit = if n == 0 {
            0
        } else {
            highest_power_of_two_leq(n)
        };
        Self {
            widths,
            tree,
            total,
            max_bit,
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.widths.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.widths.is_empty()
    }

    pub(crate) fn width(&self, index: usize) -> Option<f64> {
        self.widths.get(index).copied()
    }

    pub(crate) fn total(&self) -> f64 {
        self.total
    }

    /// Left edge of item `index` (clamped to the item count).
    pub(crate) fn start_of(&self, index: usize) -> f64 {
        let mut i = index.min(self.len());
        let mut sum = 0.0;
        while i > 0 {
            sum += self.tree[i];
            i &= i - 1;
        }
        sum
    }

    /// Returns the index whose `[start, start + width)` span contains `x`.
    ///
    /// Points in the spacing between two items, left of zero, or right of the last item
    /// resolve to `None`.
    pub(crate) fn index_at(&self, x: f64) -> Option<usize> {
        if self.is_empty() || x < 0.0 {
            return None;
        }
        let index = self.lower_bound(x);
        if index >= self.len() {
            return None;
        }
        let start = self.start_of(index);
        (x < start + self.widths[index]).then_some(index)
    }

    /// Index of the first item whose `width + spacing` run extends beyond `x`, clamped to the
    /// last item.
    pub(crate) fn index_at_or_after(&self, x: f64) -> usize {
        if self.is_empty() || x <= 0.0 {
            return 0;
        }
        self.lower_bound(x).min(self.len() - 1)
    }

    /// Number of items whose `width + spacing` run ends at or before `target`.
    fn lower_bound(&self, mut target: f64) -> usize {
        let n = self.len();
        let mut idx = 0usize;
        let mut bit = self.max_bit;
        while bit != 0 {
            let next = idx + bit;
            if next <= n && self.tree[next] <= target {
                target -= self.tree[next];
                idx = next;
            }
            bit >>= 1;
        }
        idx
    }
}

fn lsb(i: usize) -> usize {
    i & i.wrapping_neg()
}

fn highest_power_of_two_leq(n: usize) -> usize {
    let mut p = 1usize;
    while p <= n / 2 {
        p <<= 1;
    }
    p
}
