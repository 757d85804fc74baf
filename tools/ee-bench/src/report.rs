//! Run reports, printed as plain text or JSON

use std::fmt;
use std::io::{self, Write};

use ee_01_sorting::SortStrategy;
use ee_03_emissions::EmissionSeries;
use serde::Serialize;

use crate::cli::Workload;
use crate::error::BenchError;

/// Write `value` as pretty JSON, or through the plain-text writer `text`
///
/// With `json` set, `out` receives exactly one JSON document.
pub fn write_report<W, T, F>(
    out: &mut W,
    json: bool,
    value: &T,
    text: F,
) -> Result<(), BenchError>
where
    W: Write,
    T: Serialize,
    F: FnOnce(&mut W) -> io::Result<()>,
{
    if json {
        serde_json::to_writer_pretty(&mut *out, value)?;
        writeln!(out)?;
    } else {
        text(out)?;
    }
    Ok(())
}

/// Result of a `sort` run
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SortReport {
    pub strategy: SortStrategy,
    pub n: usize,
    pub seed: u64,
    pub iterations: u32,
    pub generate_secs: f64,
    pub sort_secs: f64,
    /// `Some(true)` when `--verify` checked every sorted copy
    pub verified: Option<bool>,
}

impl fmt::Display for SortReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "The random generation of the array a (size={}) was done in {} s.",
            self.n, self.generate_secs
        )?;
        write!(
            f,
            "The array a was sorted {} times with {} in {} s.",
            self.iterations, self.strategy, self.sort_secs
        )?;
        if self.verified == Some(true) {
            write!(f, " All sorted copies verified.")?;
        }
        Ok(())
    }
}

/// Result of an `emissions` run
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct EmissionsReport {
    /// Share of yearly storage emissions saved by keeping the index instead
    /// of the uncompressed text; only set for a measured dataset/index
    pub storage_savings_percent: Option<f64>,
    pub series: EmissionSeries,
}

impl fmt::Display for EmissionsReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(percent) = self.storage_savings_percent {
            writeln!(f, "Storing the index saves {:.2}% of storage emissions.", percent)?;
        }
        write!(f, "queries\tstorage\tconstruction\tquery\ttotal")?;
        for p in &self.series.points {
            write!(
                f,
                "\n{}\t{:.6}\t{:.6}\t{:.6}\t{:.6}",
                p.queries, p.storage, p.construction, p.query, p.total
            )?;
        }
        Ok(())
    }
}

/// Result of one workload
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct WorkloadReport {
    pub workload: Workload,
    /// Rounds completed (sort, io) or steps taken (chase)
    pub iterations: u64,
    /// Table generation, allocation or warmup time
    pub setup_secs: f64,
    pub elapsed_secs: f64,
    /// Last index reached by pointer chasing
    pub sink: Option<u32>,
}

impl fmt::Display for WorkloadReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.workload {
            Workload::Chase => write!(
                f,
                "Warmup was done in {} s. {} accesses were done in {} s. Last sink was {}",
                self.setup_secs,
                self.iterations,
                self.elapsed_secs,
                self.sink.unwrap_or_default()
            ),
            Workload::Allocate => write!(
                f,
                "The allocation of data was done in {} s.",
                self.elapsed_secs
            ),
            Workload::Sort => write!(
                f,
                "Done {} iterations of the builtin sort in {} s.",
                self.iterations, self.elapsed_secs
            ),
            Workload::Sleep => write!(f, "Slept for {} s.", self.elapsed_secs),
            Workload::Io => write!(
                f,
                "Done {} iterations of console output in {} s.",
                self.iterations, self.elapsed_secs
            ),
        }
    }
}
