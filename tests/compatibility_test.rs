use qqsort::prelude::*;
use qqsort::{BySign, Probe, qqsort_with};
use std::cell::Cell;
use std::cmp::Ordering;

// Simulate a comparator carrying its own state (like a collation table).
struct Collation<'a> {
    rank: [u8; 256],
    calls: &'a Cell<usize>,
}

impl<'a> Collation<'a> {
    /// Orders ASCII letters case-insensitively, everything else after them.
    fn case_insensitive(calls: &'a Cell<usize>) -> Self {
        let mut rank = [u8::MAX; 256];
        for (i, c) in (b'a'..=b'z').enumerate() {
            rank[c as usize] = i as u8;
            rank[c.to_ascii_uppercase() as usize] = i as u8;
        }
        Self { rank, calls }
    }
}

// Implement Comparator for the external struct.
// This proves the trait is implementable by "outside crates".
impl Comparator<u8> for Collation<'_> {
    fn compare(&mut self, a: &u8, b: &u8) -> Ordering {
        self.calls.set(self.calls.get() + 1);
        self.rank[*a as usize].cmp(&self.rank[*b as usize])
    }
}

#[test]
fn test_external_comparator() {
    let mut data = *b"dCbAe";
    let calls = Cell::new(0);
    qqsort_with(&mut data, Collation::case_insensitive(&calls));

    assert_eq!(&data, b"AbCde");
    assert!(calls.get() > 0);
}

// An external probe that records the partition ranges it is shown.
#[derive(Default)]
struct RangeLog {
    ranges: Vec<(usize, usize)>,
}

impl Probe for RangeLog {
    fn partition(&mut self, lo: usize, hi: usize) {
        self.ranges.push((lo, hi));
    }
}

#[test]
fn test_external_probe() {
    let mut data: Vec<i32> = (0..64).rev().collect();
    let mut log = RangeLog::default();
    qqsort::qqsort_probed(&mut data, |a, b| a.cmp(b), &mut log);

    assert!(data.iter().copied().eq(0..64));
    assert_eq!(log.ranges[0], (0, 63));
    assert!(log.ranges.iter().all(|&(lo, hi)| lo < hi && hi < 64 && hi - lo > 4));
}

#[test]
fn test_by_sign_adapter() {
    let mut data = [3.5f64, -1.0, 2.25, 0.0, 10.0, -7.5];
    qqsort_with(
        &mut data,
        BySign(|a: &f64, b: &f64| if a < b { -1 } else if a > b { 1 } else { 0 }),
    );
    assert_eq!(data, [-7.5, -1.0, 0.0, 2.25, 3.5, 10.0]);
}
