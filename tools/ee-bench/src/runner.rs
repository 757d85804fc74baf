//! Command execution
//!
//! Each command takes a validated config and returns a report; printing is
//! left to `main`.

use std::path::Path;
use std::time::Instant;

use ee_01_sorting::{is_permutation_of, is_sorted_ascending};
use ee_02_references::{Bibliography, ReferenceRegistry};
use ee_03_emissions::{dataset, default_query_counts, storage_savings_percent, EmissionCalculator};
use tracing::{debug, info, warn};

use crate::cli::EmissionsArgs;
use crate::config::SortBenchConfig;
use crate::error::BenchError;
use crate::generate::generate_input;
use crate::report::{EmissionsReport, SortReport};

/// Input length above which quadratic strategies get a warning
pub const QUADRATIC_WARN_LEN: usize = 1 << 16;

/// Generate the input once, then sort a fresh copy `iterations` times
pub fn run_sort(config: &SortBenchConfig) -> Result<SortReport, BenchError> {
    config.validate()?;
    if config.strategy.is_quadratic() && config.n > QUADRATIC_WARN_LEN {
        warn!(
            strategy = %config.strategy,
            n = config.n,
            "Quadratic strategy on a large input, expect a long run"
        );
    }

    let start_generate = Instant::now();
    let input = generate_input(config.n, config.seed);
    let generate_secs = start_generate.elapsed().as_secs_f64();
    debug!(n = config.n, seed = config.seed, generate_secs, "Input generated");

    let start_sort = Instant::now();
    for iteration in 0..config.iterations {
        let mut copy = input.clone();
        config.strategy.apply(&mut copy);

        if config.verify && !(is_sorted_ascending(&copy) && is_permutation_of(&copy, &input)) {
            return Err(BenchError::VerificationFailed {
                strategy: config.strategy,
                iteration,
            });
        }
    }
    let sort_secs = start_sort.elapsed().as_secs_f64();

    info!(
        strategy = %config.strategy,
        n = config.n,
        iterations = config.iterations,
        sort_secs,
        "Sort benchmark finished"
    );

    Ok(SortReport {
        strategy: config.strategy,
        n: config.n,
        seed: config.seed,
        iterations: config.iterations,
        generate_secs,
        sort_secs,
        verified: config.verify.then_some(true),
    })
}

/// Emission series for manual inputs or a measured dataset/index
pub fn run_emissions(args: &EmissionsArgs) -> Result<EmissionsReport, BenchError> {
    let (calculator, savings) = match (&args.dataset, &args.index) {
        (Some(name), Some(index)) => {
            let measured = dataset(name)?;
            let index = measured.index(index)?;
            let savings = storage_savings_percent(measured.file_size_mb, index.size_mb);
            (EmissionCalculator::from_measurement(index), Some(savings))
        }
        _ => {
            let calculator = EmissionCalculator::new(
                args.size_mb,
                args.construction_joule,
                args.joule_per_1000_queries,
            )?;
            (calculator, None)
        }
    };

    let queries = if args.queries.is_empty() {
        default_query_counts()
    } else {
        args.queries.clone()
    };

    Ok(EmissionsReport {
        storage_savings_percent: savings,
        series: calculator.series(&queries),
    })
}

/// Cite each group in order and render the markers plus the references section
///
/// A group is a comma-separated list of keys, cited together.
pub fn run_references(
    bibliography: &Path,
    groups: &[String],
) -> Result<(Vec<String>, String), BenchError> {
    let bibliography = Bibliography::load(bibliography)?;
    let mut registry = ReferenceRegistry::new(&bibliography);

    let markers = groups
        .iter()
        .map(|group| {
            let keys: Vec<&str> = group
                .split(',')
                .map(str::trim)
                .filter(|k| !k.is_empty())
                .collect();
            registry.cite(&keys)
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok((markers, registry.make_references_section()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use ee_01_sorting::SortStrategy;
    use std::io::Write;

    #[test]
    fn test_run_sort_every_strategy_verifies() {
        for strategy in SortStrategy::ALL {
            let config = SortBenchConfig {
                strategy,
                n: 256,
                seed: 5,
                iterations: 3,
                verify: true,
            };

            let report = run_sort(&config).expect("sort run succeeds");
            assert_eq!(report.strategy, strategy);
            assert_eq!(report.iterations, 3);
            assert_eq!(report.verified, Some(true));
            assert!(report.sort_secs >= 0.0);
        }
    }

    #[test]
    fn test_run_sort_rejects_invalid_config() {
        let config = SortBenchConfig {
            n: 0,
            ..SortBenchConfig::default()
        };
        assert!(matches!(run_sort(&config), Err(BenchError::InvalidConfig(_))));
    }

    fn emission_args() -> EmissionsArgs {
        EmissionsArgs {
            size_mb: 10.0,
            construction_joule: 150.0,
            joule_per_1000_queries: 4.0,
            dataset: None,
            index: None,
            queries: Vec::new(),
        }
    }

    #[test]
    fn test_run_emissions_defaults_and_dataset() {
        let report = run_emissions(&emission_args()).unwrap();
        assert_eq!(report.series.points.len(), 999);
        assert_eq!(report.storage_savings_percent, None);

        let args = EmissionsArgs {
            dataset: Some("einstein".to_string()),
            index: Some("move-r-rlz".to_string()),
            queries: vec![1_000],
            ..emission_args()
        };
        let report = run_emissions(&args).unwrap();
        assert_eq!(report.series.points.len(), 1);

        // 48.3 MB index for a 629.1 MB text
        let savings = report.storage_savings_percent.expect("set for a measured index");
        assert!((savings - 92.3223).abs() < 1e-3, "got {}", savings);
    }

    #[test]
    fn test_run_emissions_unknown_dataset() {
        let args = EmissionsArgs {
            dataset: Some("enwiki".to_string()),
            index: Some("move-r".to_string()),
            ..emission_args()
        };
        assert!(matches!(run_emissions(&args), Err(BenchError::Emissions(_))));
    }

    #[test]
    fn test_run_references_numbers_groups() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"key": "a", "kind": "misc", "title": "A"}},
               {{"key": "b", "kind": "misc", "title": "B"}}]"#
        )
        .unwrap();

        let groups = vec!["b".to_string(), "a, b".to_string()];
        let (markers, section) = run_references(file.path(), &groups).unwrap();

        assert_eq!(markers, vec!["[1]", "[1, 2]"]);
        assert_eq!(section, "## References\n\n[1] B.\n\n[2] A.");
    }

    #[test]
    fn test_run_references_unknown_key() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"[{{"key": "a", "kind": "misc"}}]"#).unwrap();

        let result = run_references(file.path(), &["missing".to_string()]);
        assert!(matches!(result, Err(BenchError::References(_))));
    }
}
