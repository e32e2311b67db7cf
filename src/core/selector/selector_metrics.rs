/// Counters describing what happened to the elements offered to one selector.
/// Entries re-offered by `merge` count as offers to the receiving selector.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SelectorMetrics {
    /// Every call to `offer`, absent elements included.
    pub offered: usize,
    /// Elements written into the buffer.
    pub admitted: usize,
    /// Elements rejected by the boundary comparison.
    pub early_discarded: usize,
    /// Elements dropped because the order claimed they rank past the end of a full buffer.
    pub guard_discarded: usize,
    /// `None` elements, ignored.
    pub absent: usize,
}

impl SelectorMetrics {
    pub fn increase_offered(&mut self) {
        self.offered += 1;
    }

    pub fn increase_admitted(&mut self) {
        self.admitted += 1;
    }

    pub fn increase_early_discarded(&mut self) {
        self.early_discarded += 1;
    }

    pub fn increase_guard_discarded(&mut self) {
        self.guard_discarded += 1;
    }

    pub fn increase_absent(&mut self) {
        self.absent += 1;
    }

    /// Elements that were offered and are not absent.
    pub fn present(&self) -> usize {
        self.offered - self.absent
    }
}
