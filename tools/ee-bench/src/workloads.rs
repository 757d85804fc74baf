//! Energy-measurement workloads
//!
//! Each workload stresses one resource: memory latency (chase), allocation,
//! CPU (sort), idle (sleep) or console I/O (io). Duration-bound workloads
//! check the clock after each round, so they always complete at least one.

use std::hint::black_box;
use std::io::Write;
use std::thread;
use std::time::{Duration, Instant};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info};

use crate::cli::Workload;
use crate::config::WorkloadConfig;
use crate::error::BenchError;
use crate::generate::pointer_chase_table;
use crate::report::WorkloadReport;

/// Lines written per round of the io workload
pub const IO_LINES_PER_ROUND: usize = 100;

/// Run every configured workload in order
pub fn run_workloads<W: Write>(
    config: &WorkloadConfig,
    out: &mut W,
) -> Result<Vec<WorkloadReport>, BenchError> {
    config.validate()?;
    config
        .workloads
        .iter()
        .map(|&workload| run_workload(workload, config, out))
        .collect()
}

/// Run one workload; `out` receives the io workload's output
pub fn run_workload<W: Write>(
    workload: Workload,
    config: &WorkloadConfig,
    out: &mut W,
) -> Result<WorkloadReport, BenchError> {
    config.validate_workload(workload)?;
    info!(workload = ?workload, "Starting workload");
    let duration = Duration::from_secs(config.duration_secs);
    let report = match workload {
        Workload::Chase => chase(
            config.size_bytes,
            config.warmup_steps,
            config.iterations,
            config.seed,
        ),
        Workload::Allocate => allocate(config.size_bytes),
        Workload::Sort => sort_for(duration, config.sort_len),
        Workload::Sleep => sleep_for(duration),
        Workload::Io => io_for(duration, out)?,
    };
    info!(
        workload = ?workload,
        iterations = report.iterations,
        elapsed_secs = report.elapsed_secs,
        "Workload finished"
    );
    Ok(report)
}

/// Follow `iterations` links of a shuffled successor table of `size_bytes`
fn chase(size_bytes: usize, warmup_steps: u64, iterations: u64, seed: u64) -> WorkloadReport {
    let len = size_bytes / std::mem::size_of::<u32>();

    let start_setup = Instant::now();
    let next = pointer_chase_table(len, seed);
    let mut idx: u32 = 0;
    for _ in 0..warmup_steps {
        idx = next[idx as usize];
    }
    let setup_secs = start_setup.elapsed().as_secs_f64();
    debug!(len, warmup_steps, setup_secs, "Pointer-chasing table ready");

    let start = Instant::now();
    let mut sink = 0;
    for _ in 0..iterations {
        idx = next[idx as usize];
        sink = black_box(idx);
    }

    WorkloadReport {
        workload: Workload::Chase,
        iterations,
        setup_secs,
        elapsed_secs: start.elapsed().as_secs_f64(),
        sink: Some(sink),
    }
}

fn allocate(size_bytes: usize) -> WorkloadReport {
    let start = Instant::now();
    let buffer = vec![0u32; size_bytes / std::mem::size_of::<u32>()];
    black_box(&buffer);

    WorkloadReport {
        workload: Workload::Allocate,
        iterations: 1,
        setup_secs: 0.0,
        elapsed_secs: start.elapsed().as_secs_f64(),
        sink: None,
    }
}

/// Generate and sort `len` random values until `duration` has passed
fn sort_for(duration: Duration, len: usize) -> WorkloadReport {
    let start = Instant::now();
    let mut rng = StdRng::from_entropy();
    let upper = len as i32;
    let mut rounds = 0;

    loop {
        let mut a: Vec<i32> = (0..len).map(|_| rng.gen_range(0..=upper)).collect();
        a.sort_unstable();
        black_box(&a);
        rounds += 1;

        if start.elapsed() >= duration {
            break;
        }
    }

    WorkloadReport {
        workload: Workload::Sort,
        iterations: rounds,
        setup_secs: 0.0,
        elapsed_secs: start.elapsed().as_secs_f64(),
        sink: None,
    }
}

fn sleep_for(duration: Duration) -> WorkloadReport {
    let start = Instant::now();
    thread::sleep(duration);

    WorkloadReport {
        workload: Workload::Sleep,
        iterations: 1,
        setup_secs: 0.0,
        elapsed_secs: start.elapsed().as_secs_f64(),
        sink: None,
    }
}

fn io_for<W: Write>(duration: Duration, out: &mut W) -> Result<WorkloadReport, BenchError> {
    let start = Instant::now();
    let mut rounds = 0;

    loop {
        for _ in 0..IO_LINES_PER_ROUND {
            writeln!(out, "Hello World")?;
        }
        out.flush()?;
        rounds += 1;

        if start.elapsed() >= duration {
            break;
        }
    }

    Ok(WorkloadReport {
        workload: Workload::Io,
        iterations: rounds,
        setup_secs: 0.0,
        elapsed_secs: start.elapsed().as_secs_f64(),
        sink: None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::write_report;

    fn quick_config(workloads: Vec<Workload>) -> WorkloadConfig {
        WorkloadConfig {
            workloads,
            duration_secs: 0,
            iterations: 1_000,
            size_bytes: 4 * 1024,
            seed: 42,
            sort_len: 1_000,
            warmup_steps: 100,
        }
    }

    #[test]
    fn test_chase_is_deterministic() {
        let config = quick_config(vec![Workload::Chase]);
        let mut sink = Vec::new();

        let first = run_workload(Workload::Chase, &config, &mut sink).unwrap();
        let second = run_workload(Workload::Chase, &config, &mut sink).unwrap();

        assert_eq!(first.iterations, 1_000);
        assert!(first.sink.is_some());
        assert_eq!(first.sink, second.sink, "Same seed must walk the same path");
        assert!(first.sink.unwrap() < 1024, "Index must stay inside the table");
    }

    #[test]
    fn test_duration_bound_workloads_complete_one_round() {
        let config = quick_config(vec![Workload::Sort, Workload::Io, Workload::Sleep]);
        let mut out = Vec::new();

        let reports = run_workloads(&config, &mut out).unwrap();

        assert_eq!(reports.len(), 3);
        assert_eq!(reports[0].workload, Workload::Sort);
        assert!(reports[0].iterations >= 1);
        assert!(reports[1].iterations >= 1);
        assert_eq!(reports[2].workload, Workload::Sleep);

        let text = String::from_utf8(out).unwrap();
        assert_eq!(
            text.lines().count() as u64,
            reports[1].iterations * IO_LINES_PER_ROUND as u64
        );
    }

    #[test]
    fn test_allocate_reports_single_iteration() {
        let config = quick_config(vec![Workload::Allocate]);
        let report = run_workload(Workload::Allocate, &config, &mut std::io::sink()).unwrap();

        assert_eq!(report.iterations, 1);
        assert!(report.sink.is_none());
    }

    #[test]
    fn test_json_report_stays_parseable_with_io_workload() {
        let config = quick_config(vec![Workload::Io]);
        let mut console = Vec::new();
        let mut report_out = Vec::new();

        let reports = run_workloads(&config, &mut console).unwrap();
        write_report(&mut report_out, true, &reports, |_| Ok(())).unwrap();

        let parsed: Vec<serde_json::Value> =
            serde_json::from_slice(&report_out).expect("report must be a single JSON document");
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed[0]["workload"], "io");

        let console = String::from_utf8(console).unwrap();
        assert!(console.starts_with("Hello World\n"));
        assert!(!String::from_utf8(report_out).unwrap().contains("Hello World"));
    }

    #[test]
    fn test_run_workloads_validates_config() {
        let config = quick_config(Vec::new());
        let result = run_workloads(&config, &mut std::io::sink());
        assert!(matches!(result, Err(BenchError::InvalidConfig(_))));
    }
}
