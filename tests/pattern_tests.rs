use qqsort::{MAX_THRESH, SortStats, qqsort_probed};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn check(name: &str, input: Vec<i64>) {
    let mut actual = input.clone();
    let mut stats = SortStats::default();
    qqsort_probed(&mut actual, |a, b| a.cmp(b), &mut stats);

    let mut expected = input;
    expected.sort();

    if actual != expected {
        // Find first mismatch
        for (i, (a, b)) in actual.iter().zip(expected.iter()).enumerate() {
            if a != b {
                panic!("{}: mismatch at index {}: got {}, expected {}", name, i, a, b);
            }
        }
    }

    let len = actual.len().max(1);
    let bound = len.next_power_of_two().trailing_zeros() as usize + 1;
    assert!(
        stats.max_stack_depth <= bound,
        "{}: stack depth {} over {}",
        name,
        stats.max_stack_depth,
        bound
    );
    assert!(stats.max_shift <= MAX_THRESH, "{}: shift {}", name, stats.max_shift);
}

#[test]
fn test_patterns() {
    let mut rng = StdRng::seed_from_u64(42);

    for len in [0usize, 1, 2, 4, 5, 6, 9, 31, 64, 100, 1_000, 10_007] {
        let n = len as i64;

        check("ascending", (0..n).collect());
        check("descending", (0..n).rev().collect());
        check("organ pipe", (0..n).map(|i| i.min(n - i)).collect());
        check("sawtooth", (0..n).map(|i| i % 16).collect());
        check("two values", (0..n).map(|i| i & 1).collect());
        check(
            "few unique",
            (0..len).map(|_| rng.random_range(0..4)).collect(),
        );
        check("random", (0..len).map(|_| rng.random()).collect());

        let mut nearly: Vec<i64> = (0..n).collect();
        if len > 1 {
            for _ in 0..len / 20 + 1 {
                let a = rng.random_range(0..len);
                let b = rng.random_range(0..len);
                nearly.swap(a, b);
            }
        }
        check("nearly sorted", nearly);
    }
}

#[test]
fn test_extreme_values() {
    let mut rng = StdRng::seed_from_u64(7);
    let input: Vec<i64> = (0..5_000)
        .map(|_| match rng.random_range(0..3) {
            0 => i64::MIN,
            1 => i64::MAX,
            _ => rng.random(),
        })
        .collect();
    check("extremes", input);
}
