//! Comparison counting benchmark over every algorithm of the engine.
//!
//! Each size class gets one random input. Every algorithm sorts its own copy of that input,
//! wrapped in an element type that counts how often it is compared. The outputs are checked
//! against the standard library before the table is printed.

use clap::Args;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use prettytable::{row, Table};
use rand::{rngs::StdRng, Rng, SeedableRng};
use std::{
    cell::Cell,
    cmp::Ordering,
    rc::Rc,
    time::{Duration, Instant},
};

use crate::list::List;
use crate::select::quick_select;
use crate::sorters::Algorithm;

const ZERO: usize = 0;
const ONE: usize = 1;
const TEN: usize = 10;
const ELEVEN: usize = 11;
const HUNDRED: usize = 100;
const TEN_THOUSAND: usize = 10_000;
const HUNDRED_THOUSAND: usize = 100_000;

/// Benchmark the sorting algorithms on random input. Install the crate and run
/// `sortkit bench --help` to see what options are available
#[derive(Debug, Args)]
pub struct BenchArgs {
    /// Number of elements to sort. Repeat the flag to benchmark several sizes.
    #[arg(short = 'n', long = "size", default_values_t = [ZERO, ONE, TEN, ELEVEN, HUNDRED, TEN_THOUSAND, HUNDRED_THOUSAND])]
    sizes: Vec<usize>,

    /// Algorithms to run. All of them when omitted.
    #[arg(short, long = "algorithm", value_enum)]
    algorithms: Vec<Algorithm>,

    /// Seed for the input generator. Pass the seed printed by an earlier run to repeat it.
    #[arg(long)]
    seed: Option<u64>,

    /// Largest input handed to insertion and selection sort.
    #[arg(long, default_value_t = TEN_THOUSAND)]
    quadratic_limit: usize,
}

// In this the `elem` will be compared and the `comparison_counter` will be ignored.
#[derive(Clone)]
struct SortEvaluator<T> {
    elem: T,
    // Shared by every element of a run, hence the reference counted cell.
    comparison_counter: Rc<Cell<usize>>,
}

impl<T> SortEvaluator<T> {
    fn new(elem: T, comparison_counter: Rc<Cell<usize>>) -> Self {
        Self {
            elem,
            comparison_counter,
        }
    }

    fn count(&self) {
        self.comparison_counter
            .set(self.comparison_counter.get() + 1);
    }
}

impl<T: PartialEq> PartialEq for SortEvaluator<T> {
    fn eq(&self, other: &Self) -> bool {
        self.count();
        self.elem == other.elem
    }
}

impl<T: Eq> Eq for SortEvaluator<T> {}

impl<T: PartialOrd> PartialOrd for SortEvaluator<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.count();
        self.elem.partial_cmp(&other.elem)
    }
}

impl<T: Ord> Ord for SortEvaluator<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.count();
        self.elem.cmp(&other.elem)
    }
}

struct Measurement {
    comparisons: usize,
    elapsed: Duration,
}

fn measure<F: FnOnce()>(counter: &Rc<Cell<usize>>, run: F) -> Measurement {
    counter.set(0);
    let now = Instant::now();
    run();
    Measurement {
        elapsed: now.elapsed(),
        comparisons: counter.get(),
    }
}

fn wrap(input: &[i32], counter: &Rc<Cell<usize>>) -> Vec<SortEvaluator<i32>> {
    input
        .iter()
        .map(|&elem| SortEvaluator::new(elem, counter.clone()))
        .collect()
}

fn elems<'a>(values: impl IntoIterator<Item = &'a SortEvaluator<i32>>) -> Vec<i32> {
    values.into_iter().map(|value| value.elem).collect()
}

struct Report {
    table: Table,
    failures: Vec<String>,
    size: usize,
}

impl Report {
    fn new(size: usize) -> Self {
        let mut table = Table::new();
        table.add_row(row![
            "Sorter".bold(),
            "Comparisons Made".bold(),
            "Time Taken".bold(),
            "Verified".bold()
        ]);
        Self {
            table,
            failures: Vec::new(),
            size,
        }
    }

    fn record(&mut self, name: &str, measurement: Measurement, verified: bool) {
        let status = if verified {
            "ok".green()
        } else {
            self.failures.push(format!("{name} on {} elements", self.size));
            "FAILED".red()
        };
        self.table.add_row(row![
            name,
            measurement.comparisons.to_string(),
            format!("{:?}", measurement.elapsed),
            status
        ]);
    }

    fn skip(&mut self, name: &str, reason: &str) {
        self.table
            .add_row(row![name, "Not Doing It".red(), reason, "-"]);
    }
}

impl BenchArgs {
    pub fn run(self) -> anyhow::Result<()> {
        let algorithms = if self.algorithms.is_empty() {
            Algorithm::ALL.to_vec()
        } else {
            self.algorithms
        };

        let seed = self.seed.unwrap_or_else(|| rand::thread_rng().gen());
        let mut random = StdRng::seed_from_u64(seed);
        println!("{} {}", "Seed -> ".bold().underline().blue(), seed.to_string().bold());

        let style = ProgressStyle::with_template(
            "{spinner:.green} [{elapsed_precise}] [{bar:50.cyan/blue}] ({pos}/{len}) {msg}",
        )?;
        let counter = Rc::new(Cell::new(0));
        let mut failures = Vec::new();

        for &n in &self.sizes {
            let input = (0..n).map(|_| random.gen::<i32>()).collect::<Vec<_>>();
            let mut expected = input.clone();
            expected.sort_unstable();

            println!(
                "{} {}",
                "List Size -> ".bold().underline().blue(),
                n.to_string().bold()
            );

            // The slice algorithms plus list merge sort, quick select and the std baseline.
            let pb = ProgressBar::new(algorithms.len() as u64 + 3);
            pb.set_style(style.clone());

            let mut report = Report::new(n);

            for &algorithm in &algorithms {
                pb.set_message(algorithm.name());
                if algorithm.is_quadratic() && n > self.quadratic_limit {
                    report.skip(algorithm.name(), "Too Slow");
                } else {
                    let mut values = wrap(&input, &counter);
                    let measurement = measure(&counter, || algorithm.sort(&mut values));
                    report.record(algorithm.name(), measurement, elems(&values) == expected);
                }
                pb.inc(1);
            }

            pb.set_message("Merge Sort (list)");
            let mut list = wrap(&input, &counter).into_iter().collect::<List<_>>();
            let measurement = measure(&counter, || list.merge_sort());
            report.record(
                "Merge Sort (list)",
                measurement,
                list.len() == n && elems(&list) == expected,
            );
            pb.inc(1);

            pb.set_message("Quick Select");
            if n > 0 {
                let k = n / 2;
                let mut values = wrap(&input, &counter);
                let measurement = measure(&counter, || quick_select(&mut values, k));
                report.record(
                    "Quick Select (median)",
                    measurement,
                    values[k].elem == expected[k],
                );
            } else {
                report.skip("Quick Select (median)", "No Median");
            }
            pb.inc(1);

            pb.set_message("Standard Library");
            let mut values = wrap(&input, &counter);
            let measurement = measure(&counter, || values.sort_unstable());
            report.record(
                "Standard Library Sort Unstable",
                measurement,
                elems(&values) == expected,
            );
            pb.finish_and_clear();

            report.table.printstd();
            println!();
            failures.append(&mut report.failures);
        }

        if !failures.is_empty() {
            anyhow::bail!("output verification failed for: {}", failures.join(", "));
        }

        Ok(())
    }
}
