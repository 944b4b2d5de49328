//! Time qqsort against the standard library sorts on random `Person` records.
//!
//! Run with: SIZE=1000000 SEED=42 cargo run --release --features harness --bin qqsort-bench
//!
//! Usage:
//!   qqsort-bench --size 100000 --seed 7           Flags instead of the environment
//!   qqsort-bench --strategy qqsort --strategy qsort
//!
//! Prints one `[<strategy>] estimated: <ms> ms` line per strategy. Exits with
//! status 1 if any strategy leaves the records out of order.

use clap::Parser;
use qqsort::harness::{self, HarnessConfig};
use std::process::ExitCode;

fn main() -> ExitCode {
    let config = HarnessConfig::parse();

    match harness::run(&config) {
        Ok(measurements) => {
            for measurement in measurements {
                println!("{}", measurement);
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("[error] {}", e);
            ExitCode::FAILURE
        }
    }
}
