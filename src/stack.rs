//! Fixed-capacity stack of deferred partition ranges.
//!
//! Replaces recursion in the quicksort phase. The driver always defers the
//! larger of two partitions and keeps working on the smaller one, so each
//! entry covers at most half of the range below it and the depth stays under
//! `log2(len) + 1`. Capacity is one entry per bit of `usize`, which covers
//! every slice the address space can hold.

use cuneiform::cuneiform;

/// Number of ranges the stack can hold.
pub(crate) const STACK_CAPACITY: usize = usize::BITS as usize;

/// Inclusive range of record positions `lo..=hi`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) struct Span {
    pub lo: usize,
    pub hi: usize,
}

#[cuneiform]
pub(crate) struct WorkStack {
    entries: [Span; STACK_CAPACITY],
    top: usize,
}

impl WorkStack {
    pub(crate) fn new() -> Self {
        Self {
            entries: [Span::default(); STACK_CAPACITY],
            top: 0,
        }
    }

    /// Defers `lo..=hi` and returns the new depth.
    ///
    /// Panics on overflow, which the larger-side-deferred order rules out.
    #[inline]
    pub(crate) fn push(&mut self, lo: usize, hi: usize) -> usize {
        debug_assert!(self.top < STACK_CAPACITY, "work stack overflow");
        self.entries[self.top] = Span { lo, hi };
        self.top += 1;
        self.top
    }

    #[inline]
    pub(crate) fn pop(&mut self) -> Option<Span> {
        if self.top == 0 {
            return None;
        }
        self.top -= 1;
        Some(self.entries[self.top])
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.top == 0
    }
}
