//! Command-line arguments

use std::path::PathBuf;

use clap::{ArgGroup, Args, Parser, Subcommand, ValueEnum};
use ee_01_sorting::SortStrategy;
use serde::Serialize;

/// EE-Bench: benchmarks and energy-measurement workloads
#[derive(Parser, Debug)]
#[command(name = "ee-bench")]
#[command(about = "Benchmarks and energy-measurement workloads for cache-efficiency experiments")]
pub struct Cli {
    /// Print reports as JSON instead of plain text
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Time one sorting strategy on seeded random input
    Sort(SortArgs),
    /// Run energy-measurement workloads
    Workload(WorkloadArgs),
    /// Compute CO2-equivalent emissions over a range of query counts
    Emissions(EmissionsArgs),
    /// Number citations against a JSON bibliography and print the references section
    References(ReferencesArgs),
}

/// Exactly one strategy flag must be given.
#[derive(Args, Debug)]
#[command(group(
    ArgGroup::new("strategy")
        .required(true)
        .multiple(false)
        .args(["builtin", "unstable", "insertion_sort", "selection_sort"])
))]
pub struct SortArgs {
    /// Number of elements to sort
    #[arg(short = 'n', default_value_t = 1024)]
    pub n: usize,

    /// Seed of the input generator
    #[arg(short, long, default_value_t = 5)]
    pub seed: u64,

    /// How many times a fresh copy of the input is sorted
    #[arg(short, long, default_value_t = 10)]
    pub iterations: u32,

    /// Standard library stable sort
    #[arg(long)]
    pub builtin: bool,

    /// Standard library unstable sort
    #[arg(long, alias = "numpy")]
    pub unstable: bool,

    /// Insertion sort
    #[arg(long, alias = "insertion_sort")]
    pub insertion_sort: bool,

    /// Selection sort
    #[arg(long, alias = "selection_sort")]
    pub selection_sort: bool,

    /// Check that every sorted copy is ordered and a permutation of the input
    #[arg(long)]
    pub verify: bool,
}

impl SortArgs {
    /// Strategy chosen by the (mutually exclusive) flags
    pub fn strategy(&self) -> SortStrategy {
        if self.unstable {
            SortStrategy::Unstable
        } else if self.insertion_sort {
            SortStrategy::Insertion
        } else if self.selection_sort {
            SortStrategy::Selection
        } else {
            SortStrategy::Builtin
        }
    }
}

/// Energy-measurement workload
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, ValueEnum, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Workload {
    /// Pointer chasing through a shuffled index array
    Chase,
    /// Allocate and zero a buffer
    Allocate,
    /// Repeatedly sort freshly generated random input
    Sort,
    /// Sleep for the whole duration
    Sleep,
    /// Write lines to stdout for the whole duration
    Io,
}

#[derive(Args, Debug)]
pub struct WorkloadArgs {
    /// Workloads to run, in order
    #[arg(value_enum, required = true)]
    pub workloads: Vec<Workload>,

    /// Duration in seconds for sort, sleep and io
    #[arg(short, long, default_value_t = 10)]
    pub duration: u64,

    /// Number of pointer-chasing steps
    #[arg(short, long, default_value_t = 10)]
    pub iterations: u64,

    /// Buffer size in bytes for chase and allocate
    #[arg(long, default_value_t = 256 * 1024 * 1024)]
    pub size: usize,

    /// Seed of the pointer-chasing shuffle
    #[arg(long, default_value_t = 42)]
    pub seed: u64,
}

#[derive(Args, Debug)]
pub struct EmissionsArgs {
    /// Index size in MB
    #[arg(long, default_value_t = 10.0)]
    pub size_mb: f64,

    /// Energy needed for construction in joules
    #[arg(long, default_value_t = 150.0)]
    pub construction_joule: f64,

    /// Energy per 1000 queries in joules
    #[arg(long, default_value_t = 4.0)]
    pub joule_per_1000_queries: f64,

    /// Use a measured dataset instead of the manual inputs (requires --index)
    #[arg(long, requires = "index")]
    pub dataset: Option<String>,

    /// Measured index within --dataset
    #[arg(long, requires = "dataset")]
    pub index: Option<String>,

    /// Query counts to evaluate (default: 200,000 steps up to ~200 million)
    #[arg(long, value_delimiter = ',')]
    pub queries: Vec<u64>,
}

#[derive(Args, Debug)]
pub struct ReferencesArgs {
    /// JSON bibliography file
    #[arg(short, long)]
    pub bibliography: PathBuf,

    /// Citation groups in document order; keys within a group are comma-separated
    #[arg(required = true)]
    pub citations: Vec<String>,
}
