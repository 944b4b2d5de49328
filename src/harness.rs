//! Benchmark harness comparing qqsort against the standard library sorts.
//!
//! Generates `Person` records from an explicitly seeded generator, sorts a
//! copy of them with each [`Strategy`], times the call and checks the result.
//! Enabled by the `harness` feature; the `qqsort-bench` binary drives it.

use crate::algo::{qqsort_by, qqsort_by_sign};
use clap::{Parser, ValueEnum};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::cmp::Ordering;
use std::fmt;
use std::hint::black_box;
use std::time::{Duration, Instant};

/// A benchmark record, ordered by [`Person::rating`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Person {
    pub age: u32,
    pub balance: u32,
}

impl Person {
    pub fn new(age: u32, balance: u32) -> Self {
        Self { age, balance }
    }

    /// Draws a person with an age in `18..=100` and a balance in `100..=1_000_000`.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            age: rng.random_range(18..=100),
            balance: rng.random_range(100..=1_000_000),
        }
    }

    /// Balance per year of age. A zero age counts as one.
    pub fn rating(&self) -> u32 {
        self.balance / self.age.max(1)
    }

    pub fn cmp_rating(&self, other: &Self) -> Ordering {
        self.rating().cmp(&other.rating())
    }

    /// Sign of the rating difference, for `qsort(3)`-style comparators.
    pub fn rating_diff(&self, other: &Self) -> i32 {
        (i64::from(self.rating()) - i64::from(other.rating())).signum() as i32
    }
}

/// Generates `size` people from a generator seeded with `seed`.
///
/// The same seed always yields the same records.
pub fn generate_persons(size: usize, seed: u64) -> Vec<Person> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..size).map(|_| Person::random(&mut rng)).collect()
}

/// A sort routine under measurement.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, ValueEnum)]
pub enum Strategy {
    /// `slice::sort`, stable.
    StdSort,
    /// `slice::sort_unstable`.
    StdUnstable,
    /// qqsort with a signed-integer comparator called through a function
    /// pointer, the way `qsort(3)` calls it.
    Qsort,
    /// qqsort with an `Ordering` comparator.
    Qqsort,
}

impl Strategy {
    pub const ALL: [Strategy; 4] = [
        Strategy::StdSort,
        Strategy::StdUnstable,
        Strategy::Qsort,
        Strategy::Qqsort,
    ];

    /// Label used in the benchmark output.
    pub fn name(self) -> &'static str {
        match self {
            Strategy::StdSort => "std_sort",
            Strategy::StdUnstable => "std_unstable",
            Strategy::Qsort => "qsort",
            Strategy::Qqsort => "qqsort",
        }
    }

    pub fn sort(self, persons: &mut [Person]) {
        match self {
            Strategy::StdSort => persons.sort_by(Person::cmp_rating),
            Strategy::StdUnstable => persons.sort_unstable_by(Person::cmp_rating),
            Strategy::Qsort => {
                let compare: fn(&Person, &Person) -> i32 = black_box(Person::rating_diff);
                qqsort_by_sign(persons, compare)
            }
            Strategy::Qqsort => qqsort_by(persons, Person::cmp_rating),
        }
    }
}

/// Harness settings, from flags or the `SIZE` and `SEED` environment variables.
#[derive(Parser, Debug, Clone)]
#[command(name = "qqsort-bench", about = "Time qqsort against the standard library sorts")]
pub struct HarnessConfig {
    /// Number of records to sort.
    #[arg(long, env = "SIZE")]
    pub size: usize,

    /// Seed for the record generator.
    #[arg(long, env = "SEED")]
    pub seed: u64,

    /// Strategy to run. Repeat to run several; runs all when omitted.
    #[arg(long = "strategy", value_enum)]
    pub strategies: Vec<Strategy>,
}

impl HarnessConfig {
    /// The strategies to run, in order.
    pub fn strategies(&self) -> Vec<Strategy> {
        if self.strategies.is_empty() {
            Strategy::ALL.to_vec()
        } else {
            self.strategies.clone()
        }
    }
}

/// Wall-clock time of one sort.
#[derive(Clone, Copy, Debug)]
pub struct Measurement {
    pub strategy: Strategy,
    pub elapsed: Duration,
}

impl fmt::Display for Measurement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] estimated: {} ms",
            self.strategy.name(),
            self.elapsed.as_millis()
        )
    }
}

/// Errors reported by the harness.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HarnessError {
    /// A strategy left two neighbours out of order.
    NotSorted {
        strategy: &'static str,
        index: usize,
    },
}

impl fmt::Display for HarnessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HarnessError::NotSorted { strategy, index } => {
                write!(
                    f,
                    "persons array not sorted by {}: ratings at {} and {} are out of order",
                    strategy,
                    index,
                    index + 1
                )
            }
        }
    }
}

impl std::error::Error for HarnessError {}

/// Checks that `persons` is in non-decreasing rating order.
pub fn verify(strategy: Strategy, persons: &[Person]) -> Result<(), HarnessError> {
    match persons
        .windows(2)
        .position(|pair| pair[0].rating() > pair[1].rating())
    {
        Some(index) => Err(HarnessError::NotSorted {
            strategy: strategy.name(),
            index,
        }),
        None => Ok(()),
    }
}

/// Sorts a copy of `persons` with `strategy`, timing only the sort.
pub fn run_strategy(strategy: Strategy, persons: &[Person]) -> Result<Measurement, HarnessError> {
    let mut data = persons.to_vec();

    let start = Instant::now();
    strategy.sort(&mut data);
    let elapsed = start.elapsed();

    verify(strategy, &data)?;
    Ok(Measurement { strategy, elapsed })
}

/// Runs every configured strategy over the same generated input.
pub fn run(config: &HarnessConfig) -> Result<Vec<Measurement>, HarnessError> {
    let persons = generate_persons(config.size, config.seed);
    config
        .strategies()
        .into_iter()
        .map(|strategy| run_strategy(strategy, &persons))
        .collect()
}
