use qqsort::prelude::*;
use qqsort::{SortStats, qqsort_probed};
use rand::Rng;
use std::time::Instant;

/// Depth the work stack may reach for `len` records.
fn stack_bound(len: usize) -> usize {
    len.next_power_of_two().trailing_zeros() as usize + 1
}

#[test]
fn test_sort_1m() {
    let count = 1_000_000;
    println!("Generating {} random elements...", count);

    let mut rng = rand::rng();
    let mut input: Vec<u64> = (0..count).map(|_| rng.random()).collect();

    println!("Sorting {} elements...", count);
    let mut stats = SortStats::default();
    let start = Instant::now();
    qqsort_probed(&mut input, |a, b| a.cmp(b), &mut stats);
    let duration = start.elapsed();
    println!("Sorted 1M elements in {:?} ({:?})", duration, stats);

    assert!(input.is_sorted());
    assert!(stats.max_stack_depth <= stack_bound(count));
}

#[test]
fn test_reverse_sorted_4096() {
    let mut input: Vec<u32> = (0..4096).rev().collect();
    let mut stats = SortStats::default();
    qqsort_probed(&mut input, |a, b| a.cmp(b), &mut stats);

    assert!(input.iter().copied().eq(0..4096));
    assert!(
        stats.max_stack_depth <= stack_bound(4096),
        "depth {} over bound {}",
        stats.max_stack_depth,
        stack_bound(4096)
    );
}

#[test]
fn test_all_equal_10k() {
    // Records equal by key but distinguishable by payload.
    let mut input: Vec<(u8, u32)> = (0..10_000).map(|i| (7, i)).collect();
    let mut stats = SortStats::default();
    qqsort_probed(&mut input, |a, b| a.0.cmp(&b.0), &mut stats);

    assert!(input.iter().all(|&(k, _)| k == 7));
    assert!(stats.max_stack_depth <= stack_bound(10_000));

    let mut payloads: Vec<u32> = input.iter().map(|&(_, p)| p).collect();
    payloads.sort_unstable();
    assert!(payloads.iter().copied().eq(0..10_000));
}

#[test]
fn test_stack_bound_random_lengths() {
    let mut rng = rand::rng();

    for _ in 0..200 {
        let len = rng.random_range(2..20_000);
        let distinct = rng.random_range(1..=len as u32);
        let mut input: Vec<u32> = (0..len).map(|_| rng.random_range(0..distinct)).collect();

        let mut stats = SortStats::default();
        qqsort_probed(&mut input, |a, b| a.cmp(b), &mut stats);

        assert!(input.is_sorted());
        assert!(
            stats.max_stack_depth <= stack_bound(len),
            "len {} depth {}",
            len,
            stats.max_stack_depth
        );
        assert!(stats.max_shift <= qqsort::MAX_THRESH);
    }
}

#[test]
fn test_large_byte_records() {
    let mut rng = rand::rng();
    let width = 24;
    let count = 200_000;
    let mut buf = vec![0u8; width * count];
    rng.fill(&mut buf[..]);

    let mut records = ByteRecords::new(&mut buf, width).unwrap();
    let mut stats = SortStats::default();
    records.sort_probed(|a, b| a.cmp(b), &mut stats);

    assert!(records.iter().zip(records.iter().skip(1)).all(|(a, b)| a <= b));
    assert!(stats.max_stack_depth <= stack_bound(count));
}

#[test]
#[ignore]
fn test_sort_100m() {
    // WARNING: needs about 800MB of RAM.
    let count = 100_000_000;
    println!("Generating {} random elements...", count);

    let mut rng = rand::rng();
    let mut input: Vec<u64> = (0..count).map(|_| rng.random()).collect();

    println!("Sorting {} elements...", count);
    let start = Instant::now();
    qqsort(&mut input);
    println!("Sorted 100M elements in {:?}", start.elapsed());

    // Verify sample
    for i in (0..count - 1).step_by(10_000) {
        assert!(input[i] <= input[i + 1], "Sort failed at index {}", i);
    }
}
