//! EE-Bench: benchmarks and energy-measurement workloads
//!
//! ```text
//! ee-bench sort -n 1024 -s 5 -i 10 --insertion-sort
//! ee-bench workload chase --size 268435456 -i 100000000
//! ee-bench --json emissions --dataset einstein --index move-r
//! ee-bench references -b references.json move-r "r-index,move"
//! ```

use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use ee_bench::cli::{Cli, Command};
use ee_bench::config::{LogConfig, SortBenchConfig, WorkloadConfig};
use ee_bench::logging::init_logging;
use ee_bench::report::write_report;
use ee_bench::runner::{run_emissions, run_references, run_sort};
use ee_bench::workloads::run_workloads;

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(&LogConfig::from_env()).context("Failed to initialize logging")?;
    info!(version = env!("CARGO_PKG_VERSION"), "ee-bench starting");

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Command::Sort(args) => {
            let config = SortBenchConfig::from_args(&args).context("Invalid sort arguments")?;
            let report = run_sort(&config).context("Sort benchmark failed")?;
            emit(&mut out, cli.json, &report, |out| writeln!(out, "{}", report))?;
        }
        Command::Workload(args) => {
            let config =
                WorkloadConfig::from_args(&args).context("Invalid workload arguments")?;
            // The io workload's console lines must not interleave with a JSON report.
            let reports = if cli.json {
                run_workloads(&config, &mut io::stderr().lock())
            } else {
                run_workloads(&config, &mut out)
            }
            .context("Workload failed")?;
            emit(&mut out, cli.json, &reports, |out| {
                reports.iter().try_for_each(|r| writeln!(out, "{}", r))
            })?;
        }
        Command::Emissions(args) => {
            let report = run_emissions(&args).context("Emission calculation failed")?;
            emit(&mut out, cli.json, &report, |out| writeln!(out, "{}", report))?;
        }
        Command::References(args) => {
            let (markers, section) = run_references(&args.bibliography, &args.citations)
                .with_context(|| format!("Failed to cite from {:?}", args.bibliography))?;
            let payload = serde_json::json!({ "markers": markers, "references": section });
            emit(&mut out, cli.json, &payload, |out| {
                markers.iter().try_for_each(|m| writeln!(out, "{}", m))?;
                writeln!(out, "\n{}", section)
            })?;
        }
    }

    Ok(())
}

fn emit<W, T, F>(out: &mut W, json: bool, value: &T, text: F) -> Result<()>
where
    W: Write,
    T: serde::Serialize,
    F: FnOnce(&mut W) -> io::Result<()>,
{
    write_report(out, json, value, text).context("Failed to write report")
}
