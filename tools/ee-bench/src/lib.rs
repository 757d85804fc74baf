//! # EE-Bench
//!
//! Command-line driver for the energy measurements.
//!
//! ## Commands
//!
//! - `sort`: time one sorting strategy on seeded random input
//! - `workload`: run the energy-measurement workloads (pointer chasing,
//!   allocation, sorting, sleeping, console I/O) for a fixed duration
//! - `emissions`: CO2-equivalent emissions over a range of query counts
//! - `references`: number citations against a JSON bibliography
//!
//! Reports go to stdout (plain text or `--json`), logs go to stderr. With
//! `--json` the io workload's console lines go to stderr as well, so stdout
//! holds a single JSON document.

pub mod cli;
pub mod config;
pub mod error;
pub mod generate;
pub mod logging;
pub mod report;
pub mod runner;
pub mod workloads;

pub use cli::{Cli, Command};
pub use config::{LogConfig, SortBenchConfig, WorkloadConfig};
pub use error::BenchError;
pub use report::{write_report, EmissionsReport, SortReport, WorkloadReport};
