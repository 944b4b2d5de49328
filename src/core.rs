//! Core traits and types for qqsort.
//!
//! This module defines:
//! - [`Comparator`]: The comparison contract, inlined into the sort loops.
//! - [`BySign`]: Adapter for C-style comparators returning a signed integer.
//! - [`ByteRecords`]: A fixed-width record view over a raw byte buffer.
//! - Records: Internal storage abstraction shared by typed slices and byte records.

use crate::error::LayoutError;
use std::cmp::Ordering;

/// Partition threshold, in records.
///
/// A subrange spanning at most this many positions past its first record is
/// left for the insertion-sort finisher. The same value bounds the window in
/// which the finisher looks for its sentinel minimum.
pub const MAX_THRESH: usize = 4;

/// A comparison between two element references.
///
/// Sort routines take the comparator as a generic parameter, so every call is
/// monomorphized and the comparison is inlined into the partition and
/// insertion loops instead of going through a function pointer.
///
/// The comparator must define a total preorder over the elements for the
/// duration of a sort. It may be called any number of times, in any order,
/// including not at all for inputs shorter than two elements.
///
/// Any `FnMut(&E, &E) -> Ordering` is a comparator:
///
/// ```
/// use qqsort::core::Comparator;
/// use std::cmp::Ordering;
///
/// struct Reverse;
///
/// impl Comparator<u32> for Reverse {
///     fn compare(&mut self, a: &u32, b: &u32) -> Ordering {
///         b.cmp(a)
///     }
/// }
///
/// let mut data = [1u32, 3, 2];
/// qqsort::qqsort_with(&mut data, Reverse);
/// assert_eq!(data, [3, 2, 1]);
/// ```
pub trait Comparator<E: ?Sized> {
    /// Orders `a` relative to `b`.
    fn compare(&mut self, a: &E, b: &E) -> Ordering;
}

impl<E: ?Sized, F> Comparator<E> for F
where
    F: FnMut(&E, &E) -> Ordering,
{
    #[inline(always)]
    fn compare(&mut self, a: &E, b: &E) -> Ordering {
        self(a, b)
    }
}

/// Adapts a comparator returning a signed integer, `qsort(3)` style.
///
/// Negative means less, zero equal, positive greater. Only the sign is used.
///
/// ```
/// use qqsort::core::BySign;
///
/// let mut data = [5i32, -1, 3];
/// qqsort::qqsort_with(&mut data, BySign(|a: &i32, b: &i32| a - b));
/// assert_eq!(data, [-1, 3, 5]);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct BySign<F>(pub F);

impl<E: ?Sized, F> Comparator<E> for BySign<F>
where
    F: FnMut(&E, &E) -> i32,
{
    #[inline(always)]
    fn compare(&mut self, a: &E, b: &E) -> Ordering {
        (self.0)(a, b).cmp(&0)
    }
}

/// Positions the sort can compare, swap and shift.
///
/// Records never change their contents; only their positions are exchanged.
pub(crate) trait Records {
    /// What the comparator sees for one record.
    type Elem: ?Sized;

    fn len(&self) -> usize;

    fn get(&self, index: usize) -> &Self::Elem;

    fn swap(&mut self, a: usize, b: usize);

    /// Moves the record at `from` down to `to`, shifting `to..from` up by one.
    ///
    /// Requires `to <= from`.
    fn insert_left(&mut self, from: usize, to: usize);
}

impl<T> Records for [T] {
    type Elem = T;

    #[inline(always)]
    fn len(&self) -> usize {
        <[T]>::len(self)
    }

    #[inline(always)]
    fn get(&self, index: usize) -> &T {
        &self[index]
    }

    #[inline(always)]
    fn swap(&mut self, a: usize, b: usize) {
        <[T]>::swap(self, a, b);
    }

    #[inline(always)]
    fn insert_left(&mut self, from: usize, to: usize) {
        self[to..=from].rotate_right(1);
    }
}

/// A mutable byte buffer viewed as consecutive records of `width` bytes.
///
/// This is the untyped form of the sort: the buffer holds `len()` records,
/// each exactly `width` bytes wide, and the comparator receives each record
/// as a `&[u8]` of that width. The layout is validated once, on construction,
/// so the sort itself never has to reinterpret memory.
///
/// ```
/// use qqsort::ByteRecords;
///
/// // Three 2-byte big-endian records.
/// let mut buf = [0x01, 0x00, 0x00, 0x07, 0x00, 0x30];
/// let mut records = ByteRecords::new(&mut buf, 2)?;
/// records.sort_by(|a, b| a.cmp(b));
///
/// assert_eq!(buf, [0x00, 0x07, 0x00, 0x30, 0x01, 0x00]);
/// # Ok::<(), qqsort::LayoutError>(())
/// ```
#[derive(Debug)]
pub struct ByteRecords<'a> {
    bytes: &'a mut [u8],
    width: usize,
}

impl<'a> ByteRecords<'a> {
    /// Wraps `bytes` as records of `width` bytes.
    ///
    /// Fails if `width` is zero or `bytes.len()` is not a multiple of `width`.
    pub fn new(bytes: &'a mut [u8], width: usize) -> Result<Self, LayoutError> {
        if width == 0 {
            return Err(LayoutError::ZeroWidth);
        }
        if bytes.len() % width != 0 {
            return Err(LayoutError::Misaligned {
                len: bytes.len(),
                width,
            });
        }
        Ok(Self { bytes, width })
    }

    /// Returns the number of records.
    pub fn len(&self) -> usize {
        self.bytes.len() / self.width
    }

    /// Returns `true` if there are no records.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Returns the width of one record in bytes.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Returns the bytes of the record at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.len()`.
    pub fn record(&self, index: usize) -> &[u8] {
        let start = index * self.width;
        &self.bytes[start..start + self.width]
    }

    /// Iterates over the records in order.
    pub fn iter(&self) -> std::slice::ChunksExact<'_, u8> {
        self.bytes.chunks_exact(self.width)
    }
}

impl Records for ByteRecords<'_> {
    type Elem = [u8];

    #[inline(always)]
    fn len(&self) -> usize {
        ByteRecords::len(self)
    }

    #[inline(always)]
    fn get(&self, index: usize) -> &[u8] {
        self.record(index)
    }

    #[inline]
    fn swap(&mut self, a: usize, b: usize) {
        if a == b {
            return;
        }
        let (lo, hi) = if a < b { (a, b) } else { (b, a) };
        let width = self.width;
        let (head, tail) = self.bytes.split_at_mut(hi * width);
        head[lo * width..(lo + 1) * width].swap_with_slice(&mut tail[..width]);
    }

    #[inline]
    fn insert_left(&mut self, from: usize, to: usize) {
        let width = self.width;
        self.bytes[to * width..(from + 1) * width].rotate_right(width);
    }
}
