//! Instrumentation hooks for the sort.
//!
//! The sort routines are generic over a [`Probe`], which is told about every
//! comparison, swap, partition pass, work-stack push and finisher shift. The
//! unit type `()` ignores everything and compiles away; [`SortStats`] counts.

/// Receives events from a running sort.
///
/// All methods default to doing nothing.
pub trait Probe {
    /// One comparator call.
    #[inline(always)]
    fn compare(&mut self) {}

    /// Two records exchanged.
    #[inline(always)]
    fn swap(&mut self) {}

    /// A partition pass over `lo..=hi` is starting.
    #[inline(always)]
    fn partition(&mut self, _lo: usize, _hi: usize) {}

    /// A range was deferred; `depth` is the number of ranges now on the stack.
    #[inline(always)]
    fn push(&mut self, _depth: usize) {}

    /// The finisher moved a record `distance` positions to the left.
    #[inline(always)]
    fn shift(&mut self, _distance: usize) {}
}

impl Probe for () {}

/// Counters collected over one or more sorts.
///
/// ```
/// use qqsort::{qqsort_probed, SortStats};
///
/// let mut data: Vec<u32> = (0..100).rev().collect();
/// let mut stats = SortStats::default();
/// qqsort_probed(&mut data, |a, b| a.cmp(b), &mut stats);
///
/// assert!(data.is_sorted());
/// assert!(stats.partitions > 0);
/// assert!(stats.max_stack_depth <= 8);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SortStats {
    pub comparisons: u64,
    pub swaps: u64,
    pub partitions: u64,
    /// Records moved by the insertion-sort finisher.
    pub shifts: u64,
    /// Largest single finisher move, in positions.
    pub max_shift: usize,
    /// Deepest the work stack got.
    pub max_stack_depth: usize,
}

impl Probe for SortStats {
    #[inline(always)]
    fn compare(&mut self) {
        self.comparisons += 1;
    }

    #[inline(always)]
    fn swap(&mut self) {
        self.swaps += 1;
    }

    #[inline(always)]
    fn partition(&mut self, _lo: usize, _hi: usize) {
        self.partitions += 1;
    }

    #[inline(always)]
    fn push(&mut self, depth: usize) {
        self.max_stack_depth = self.max_stack_depth.max(depth);
    }

    #[inline(always)]
    fn shift(&mut self, distance: usize) {
        self.shifts += 1;
        self.max_shift = self.max_shift.max(distance);
    }
}
