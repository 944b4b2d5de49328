//! Core sorting algorithm (bounded-stack quicksort with an insertion-sort finish).
//!
//! The sort runs in two phases over the whole input:
//! - **Quicksort phase**: median-of-three pivot selection and a Hoare partition
//!   pass, iterated with an explicit work stack instead of recursion. Ranges
//!   spanning at most [`MAX_THRESH`] positions are left unsorted.
//! - **Insertion-sort finish**: one pass over the whole input. After the first
//!   phase no record is more than `MAX_THRESH` positions from its final slot,
//!   so each insertion is short.
//!
//! The comparator is a type parameter everywhere, so each instantiation gets
//! its own copy of the loops with the comparison inlined.
//!
//! The main entry points are [`qqsort`], [`qqsort_by`] and [`qqsort_bytes`].

use crate::core::{ByteRecords, BySign, Comparator, MAX_THRESH, Records};
use crate::error::LayoutError;
use crate::stack::WorkStack;
use crate::stats::Probe;
use std::cmp::Ordering;

/// Sorts a slice in ascending order.
///
/// The sort is unstable and in-place; it does not allocate.
///
/// # Examples
///
/// ```
/// use qqsort::qqsort;
///
/// let mut data = [5, 3, 4, 1, 2];
/// qqsort(&mut data);
///
/// assert_eq!(data, [1, 2, 3, 4, 5]);
/// ```
pub fn qqsort<T: Ord>(v: &mut [T]) {
    sort_records(v, T::cmp, &mut ());
}

/// Sorts a slice with a comparator function.
///
/// The comparator must define a total order over the elements. If it does
/// not, the resulting order is unspecified and the call may panic, but the
/// slice still holds the same elements.
///
/// # Examples
///
/// ```
/// use qqsort::qqsort_by;
///
/// let mut data = ["cherry", "apple", "banana"];
/// qqsort_by(&mut data, |a, b| b.cmp(a));
///
/// assert_eq!(data, ["cherry", "banana", "apple"]);
/// ```
pub fn qqsort_by<T, F>(v: &mut [T], compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    sort_records(v, compare, &mut ());
}

/// Sorts a slice by a key extracted from each element.
///
/// The key function is called twice per comparison.
///
/// ```
/// use qqsort::qqsort_by_key;
///
/// let mut data = [-3i32, 1, -2];
/// qqsort_by_key(&mut data, |x| x.abs());
///
/// assert_eq!(data, [1, -2, -3]);
/// ```
pub fn qqsort_by_key<T, K, F>(v: &mut [T], mut key: F)
where
    K: Ord,
    F: FnMut(&T) -> K,
{
    sort_records(v, |a: &T, b: &T| key(a).cmp(&key(b)), &mut ());
}

/// Sorts a slice with a `qsort(3)`-style comparator returning a signed integer.
///
/// Negative means less, zero equal, positive greater. Only the sign matters.
///
/// ```
/// use qqsort::qqsort_by_sign;
///
/// let mut data = [30i32, 10, 20];
/// qqsort_by_sign(&mut data, |a, b| a - b);
///
/// assert_eq!(data, [10, 20, 30]);
/// ```
pub fn qqsort_by_sign<T, F>(v: &mut [T], compare: F)
where
    F: FnMut(&T, &T) -> i32,
{
    sort_records(v, BySign(compare), &mut ());
}

/// Sorts a slice with any [`Comparator`].
pub fn qqsort_with<T, C>(v: &mut [T], comparator: C)
where
    C: Comparator<T>,
{
    sort_records(v, comparator, &mut ());
}

/// Sorts a slice with a comparator, reporting every step to `probe`.
///
/// Pass a [`SortStats`](crate::SortStats) to count comparisons, swaps,
/// partition passes and work-stack depth.
pub fn qqsort_probed<T, F, P>(v: &mut [T], compare: F, probe: &mut P)
where
    F: FnMut(&T, &T) -> Ordering,
    P: Probe,
{
    sort_records(v, compare, probe);
}

/// Sorts a byte buffer holding records of `width` bytes each.
///
/// This is the untyped form of the sort. Records are compared as `&[u8]`
/// slices of exactly `width` bytes and are moved as whole units; their
/// contents are never changed.
///
/// # Errors
///
/// Returns [`LayoutError`] if `width` is zero or `bytes.len()` is not a
/// multiple of `width`. The buffer is left untouched in that case.
///
/// # Examples
///
/// ```
/// use qqsort::qqsort_bytes;
///
/// // Little-endian u16 records.
/// let mut buf = [0x02, 0x01, 0x01, 0x00, 0xff, 0x00];
/// qqsort_bytes(&mut buf, 2, |a, b| {
///     u16::from_le_bytes([a[0], a[1]]).cmp(&u16::from_le_bytes([b[0], b[1]]))
/// })?;
///
/// assert_eq!(buf, [0x01, 0x00, 0xff, 0x00, 0x02, 0x01]);
/// # Ok::<(), qqsort::LayoutError>(())
/// ```
pub fn qqsort_bytes<F>(bytes: &mut [u8], width: usize, compare: F) -> Result<(), LayoutError>
where
    F: FnMut(&[u8], &[u8]) -> Ordering,
{
    let mut records = ByteRecords::new(bytes, width)?;
    records.sort_by(compare);
    Ok(())
}

impl ByteRecords<'_> {
    /// Sorts the records with a comparator over their bytes.
    pub fn sort_by<F>(&mut self, compare: F)
    where
        F: FnMut(&[u8], &[u8]) -> Ordering,
    {
        sort_records(self, compare, &mut ());
    }

    /// Sorts the records, reporting every step to `probe`.
    pub fn sort_probed<F, P>(&mut self, compare: F, probe: &mut P)
    where
        F: FnMut(&[u8], &[u8]) -> Ordering,
        P: Probe,
    {
        sort_records(self, compare, probe);
    }
}

/// Shared driver behind every public entry point.
pub(crate) fn sort_records<R, C, P>(records: &mut R, cmp: C, probe: &mut P)
where
    R: Records + ?Sized,
    C: Comparator<R::Elem>,
    P: Probe,
{
    let len = records.len();
    if len < 2 {
        return;
    }

    let mut sorter = Sorter {
        records,
        cmp,
        probe,
    };

    if len > MAX_THRESH {
        sorter.quicksort(len - 1);
    }
    sorter.finish(len);
}

/// Borrowed state for one sort call.
struct Sorter<'a, R: ?Sized, C, P> {
    records: &'a mut R,
    cmp: C,
    probe: &'a mut P,
}

impl<R, C, P> Sorter<'_, R, C, P>
where
    R: Records + ?Sized,
    C: Comparator<R::Elem>,
    P: Probe,
{
    #[inline(always)]
    fn less(&mut self, a: usize, b: usize) -> bool {
        self.probe.compare();
        self.cmp.compare(self.records.get(a), self.records.get(b)) == Ordering::Less
    }

    #[inline(always)]
    fn swap(&mut self, a: usize, b: usize) {
        self.probe.swap();
        self.records.swap(a, b);
    }

    /// Orders `lo`, the midpoint and `hi` so that `v[lo] <= v[mid] <= v[hi]`.
    ///
    /// Returns the midpoint, which now holds the median of the three. The
    /// outer two double as scan sentinels for the partition pass.
    ///
    /// Uses at most three comparisons and two swaps.
    #[inline]
    fn select_pivot(&mut self, lo: usize, hi: usize) -> usize {
        let mid = lo + ((hi - lo) >> 1);

        if self.less(mid, lo) {
            if self.less(hi, mid) {
                // Strictly descending: exchanging the ends is enough.
                self.swap(lo, hi);
            } else {
                self.swap(mid, lo);
                if self.less(hi, mid) {
                    self.swap(mid, hi);
                }
            }
        } else if self.less(hi, mid) {
            self.swap(mid, hi);
            if self.less(mid, lo) {
                self.swap(mid, lo);
            }
        }

        mid
    }

    /// Hoare partition of `lo..=hi` around the record at `mid`.
    ///
    /// The pivot stays in the array and may be swapped like any other record,
    /// so `mid` follows it. Returns the crossed cursors `(ll, rr)`: everything
    /// before `ll` is `<=` the pivot and everything after `rr` is `>=` it.
    ///
    /// Requires `hi - lo >= 2` and a prior [`Self::select_pivot`].
    #[inline]
    fn partition(&mut self, lo: usize, hi: usize, mut mid: usize) -> (usize, usize) {
        let mut ll = lo + 1;
        let mut rr = hi - 1;

        loop {
            // v[hi] >= pivot stops this scan.
            while self.less(ll, mid) {
                ll += 1;
            }
            // v[lo] <= pivot stops this one.
            while self.less(mid, rr) {
                rr -= 1;
            }

            if ll < rr {
                self.swap(ll, rr);

                if mid == ll {
                    mid = rr;
                } else if mid == rr {
                    mid = ll;
                }

                ll += 1;
                rr -= 1;
            } else if ll == rr {
                ll += 1;
                rr -= 1;
                break;
            }

            if ll > rr {
                break;
            }
        }

        (ll, rr)
    }

    /// Partitions `0..=last` until every pending range is at most
    /// `MAX_THRESH` positions wide.
    fn quicksort(&mut self, last: usize) {
        let mut stack = WorkStack::new();
        let mut lo = 0;
        let mut hi = last;

        loop {
            self.probe.partition(lo, hi);

            let mid = self.select_pivot(lo, hi);
            let (ll, rr) = self.partition(lo, hi, mid);

            let left_small = rr - lo <= MAX_THRESH;
            let right_small = hi - ll <= MAX_THRESH;

            match (left_small, right_small) {
                (true, true) => match stack.pop() {
                    Some(span) => {
                        lo = span.lo;
                        hi = span.hi;
                    }
                    None => break,
                },
                (true, false) => lo = ll,
                (false, true) => hi = rr,
                (false, false) => {
                    // Defer the larger side so the stack stays logarithmic.
                    let depth = if rr - lo > hi - ll {
                        let depth = stack.push(lo, rr);
                        lo = ll;
                        depth
                    } else {
                        let depth = stack.push(ll, hi);
                        hi = rr;
                        depth
                    };
                    self.probe.push(depth);
                }
            }
        }

        debug_assert!(stack.is_empty());
    }

    /// Insertion sort over the whole input.
    ///
    /// The smallest record of the first `MAX_THRESH + 1` positions is moved to
    /// the front first. After the quicksort phase that is the global minimum,
    /// and it stops every leftward scan without a bounds test.
    fn finish(&mut self, len: usize) {
        let window = (len - 1).min(MAX_THRESH);

        let mut smallest = 0;
        for run in 1..=window {
            if self.less(run, smallest) {
                smallest = run;
            }
        }
        if smallest != 0 {
            self.swap(smallest, 0);
        }

        for run in 2..len {
            let mut pos = run;
            while self.less(run, pos - 1) {
                pos -= 1;
            }

            if pos != run {
                self.probe.shift(run - pos);
                self.records.insert_left(run, pos);
            }
        }
    }
}
