//! # qqsort
//!
//! `qqsort` is an in-place, unstable comparison sort modelled on the classic
//! glibc `qsort`, with one difference that matters for speed: the comparator
//! is a type parameter, so it is inlined into the sort loops instead of being
//! called through a function pointer for every comparison.
//!
//! ## Algorithm
//!
//! - **Median-of-three pivot**: the first, middle and last records of a range
//!   are put in order and the middle one becomes the pivot.
//! - **Hoare partitioning**: two cursors scan towards each other and swap
//!   misplaced records. The pivot is tracked by position as it moves.
//! - **Explicit work stack**: instead of recursing, the larger partition is
//!   pushed onto a fixed-size stack and the loop continues into the smaller
//!   one. This keeps the stack depth logarithmic in the input length.
//! - **Insertion-sort finish**: ranges of at most [`MAX_THRESH`] + 1 records
//!   are left alone during partitioning and fixed up by a single insertion
//!   sort pass over the whole input at the end.
//!
//! The sort never allocates.
//!
//! ## Usage
//!
//! ```rust
//! use qqsort::{qqsort, qqsort_by_sign};
//!
//! let mut data = vec![5, 3, 4, 1, 2];
//! qqsort(&mut data);
//! assert_eq!(data, vec![1, 2, 3, 4, 5]);
//!
//! // A C-style comparator returning a signed integer works too.
//! #[derive(Clone, Copy)]
//! struct Person {
//!     age: u32,
//!     balance: u32,
//! }
//!
//! let mut people = vec![
//!     Person { age: 20, balance: 1000 },
//!     Person { age: 50, balance: 1000 },
//! ];
//! qqsort_by_sign(&mut people, |a, b| {
//!     (a.balance / a.age) as i32 - (b.balance / b.age) as i32
//! });
//! assert_eq!(people[0].age, 50);
//! ```
//!
//! ### Raw records
//!
//! When the records are only known as bytes of a fixed width, use
//! [`qqsort_bytes`] or [`ByteRecords`]. The layout is checked once up front.
//!
//! ```rust
//! let mut buf = *b"ccaabb";
//! qqsort::qqsort_bytes(&mut buf, 2, |a, b| a.cmp(b))?;
//! assert_eq!(&buf, b"aabbcc");
//! # Ok::<(), qqsort::LayoutError>(())
//! ```
//!
//! ## Performance Characteristics
//!
//! - **Average**: O(N log N) comparisons.
//! - **Worst Case**: O(N²), as with any median-of-three quicksort.
//! - **Memory Overhead**: one fixed-size stack of `usize::BITS` ranges, on the
//!   call stack.
//! - **Stability**: not stable.

pub mod algo;
pub mod core;
pub mod error;
#[cfg(feature = "harness")]
pub mod harness;
mod stack;
pub mod stats;

pub use crate::algo::{
    qqsort, qqsort_by, qqsort_by_key, qqsort_by_sign, qqsort_bytes, qqsort_probed, qqsort_with,
};
pub use crate::core::{ByteRecords, BySign, Comparator, MAX_THRESH};
pub use crate::error::LayoutError;
pub use crate::stats::{Probe, SortStats};

pub mod prelude {
    pub use crate::algo::{qqsort, qqsort_by, qqsort_by_key, qqsort_by_sign, qqsort_bytes};
    pub use crate::core::{ByteRecords, Comparator};
}
