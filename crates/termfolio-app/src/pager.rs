//! Clamped cursor over a fixed-length sequence
//!
//! One pager exists per paginated tab. It never wraps: `next` on the last
//! item and `previous` on the first are no-ops.

/// Bounded, non-wrapping cursor.
///
/// Invariant: `index < max(total, 1)`. With `total == 0` the index is always
/// 0 and callers must render a "no items" state instead of subscripting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Pager {
    index: usize,
    total: usize,
}

impl Pager {
    pub fn new(total: usize) -> Self {
        Self { index: 0, total }
    }

    pub fn next(self) -> Self {
        if self.total == 0 {
            return self;
        }
        Self {
            index: (self.index + 1).min(self.total - 1),
            ..self
        }
    }

    pub fn previous(self) -> Self {
        Self {
            index: self.index.saturating_sub(1),
            ..self
        }
    }

    pub fn current_index(&self) -> usize {
        self.index
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }
}
