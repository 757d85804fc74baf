//! Run configuration
//!
//! Command-line arguments are turned into validated configs before anything
//! runs. Logging is configured from the environment.

use std::env;

use ee_01_sorting::SortStrategy;
use serde::Serialize;

use crate::cli::{SortArgs, Workload, WorkloadArgs};
use crate::error::BenchError;

/// Configuration of a `sort` run
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SortBenchConfig {
    pub strategy: SortStrategy,
    /// Number of elements
    pub n: usize,
    pub seed: u64,
    pub iterations: u32,
    pub verify: bool,
}

impl Default for SortBenchConfig {
    fn default() -> Self {
        Self {
            strategy: SortStrategy::Builtin,
            n: 1024,
            seed: 5,
            iterations: 10,
            verify: false,
        }
    }
}

impl SortBenchConfig {
    pub fn from_args(args: &SortArgs) -> Result<Self, BenchError> {
        let config = Self {
            strategy: args.strategy(),
            n: args.n,
            seed: args.seed,
            iterations: args.iterations,
            verify: args.verify,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), BenchError> {
        if self.n == 0 {
            return Err(BenchError::InvalidConfig("n must be greater than 0".to_string()));
        }
        // Values are drawn as `u32 % n`.
        if u32::try_from(self.n).is_err() {
            return Err(BenchError::InvalidConfig(format!(
                "n must fit in 32 bits, got {}",
                self.n
            )));
        }
        if self.iterations == 0 {
            return Err(BenchError::InvalidConfig(
                "iterations must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }
}

/// Configuration of a `workload` run
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct WorkloadConfig {
    pub workloads: Vec<Workload>,
    pub duration_secs: u64,
    /// Pointer-chasing steps after warmup
    pub iterations: u64,
    /// Buffer size in bytes for chase and allocate
    pub size_bytes: usize,
    pub seed: u64,
    /// Elements per round of the sort workload
    pub sort_len: usize,
    /// Pointer-chasing warmup steps
    pub warmup_steps: u64,
}

impl Default for WorkloadConfig {
    fn default() -> Self {
        Self {
            workloads: Vec::new(),
            duration_secs: 10,
            iterations: 10,
            size_bytes: 256 * 1024 * 1024,
            seed: 42,
            sort_len: 1_000_000,
            warmup_steps: 1_000_000,
        }
    }
}

impl WorkloadConfig {
    pub fn from_args(args: &WorkloadArgs) -> Result<Self, BenchError> {
        let config = Self {
            workloads: args.workloads.clone(),
            duration_secs: args.duration,
            iterations: args.iterations,
            size_bytes: args.size,
            seed: args.seed,
            ..Self::default()
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), BenchError> {
        if self.workloads.is_empty() {
            return Err(BenchError::InvalidConfig(
                "at least one workload is required".to_string(),
            ));
        }
        self.workloads
            .iter()
            .try_for_each(|&workload| self.validate_workload(workload))
    }

    /// Check the settings `workload` depends on
    pub fn validate_workload(&self, workload: Workload) -> Result<(), BenchError> {
        let needs_buffer = matches!(workload, Workload::Chase | Workload::Allocate);
        if needs_buffer && self.size_bytes < std::mem::size_of::<u32>() {
            return Err(BenchError::InvalidConfig(format!(
                "size must be at least {} bytes, got {}",
                std::mem::size_of::<u32>(),
                self.size_bytes
            )));
        }
        if workload == Workload::Chase
            && self.size_bytes / std::mem::size_of::<u32>() > u32::MAX as usize
        {
            return Err(BenchError::InvalidConfig(
                "chase size exceeds the 32-bit index range".to_string(),
            ));
        }
        Ok(())
    }
}

/// Logging configuration
#[derive(Clone, Debug, PartialEq)]
pub struct LogConfig {
    /// Filter directive (trace, debug, info, warn, error, or a full EnvFilter string)
    pub log_level: String,
    /// Emit JSON lines instead of human-readable output
    pub json_logs: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            json_logs: false,
        }
    }
}

impl LogConfig {
    /// Create configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `EE_LOG_LEVEL` or `RUST_LOG`: Log level (default: info)
    /// - `EE_JSON_LOGS`: Enable JSON logs (default: false)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            log_level: lookup("EE_LOG_LEVEL")
                .or_else(|| lookup("RUST_LOG"))
                .unwrap_or(defaults.log_level),
            json_logs: lookup("EE_JSON_LOGS")
                .map(|v| matches!(v.to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
                .unwrap_or(defaults.json_logs),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_sort_config_validation() {
        assert!(SortBenchConfig::default().validate().is_ok());

        let zero_n = SortBenchConfig {
            n: 0,
            ..SortBenchConfig::default()
        };
        assert!(matches!(zero_n.validate(), Err(BenchError::InvalidConfig(_))));

        let zero_iterations = SortBenchConfig {
            iterations: 0,
            ..SortBenchConfig::default()
        };
        assert!(matches!(
            zero_iterations.validate(),
            Err(BenchError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_workload_config_validation() {
        let empty = WorkloadConfig::default();
        assert!(matches!(empty.validate(), Err(BenchError::InvalidConfig(_))));

        let tiny_chase = WorkloadConfig {
            workloads: vec![Workload::Chase],
            size_bytes: 3,
            ..WorkloadConfig::default()
        };
        assert!(matches!(tiny_chase.validate(), Err(BenchError::InvalidConfig(_))));

        let tiny_sleep = WorkloadConfig {
            workloads: vec![Workload::Sleep],
            size_bytes: 0,
            ..WorkloadConfig::default()
        };
        assert!(tiny_sleep.validate().is_ok(), "Size only matters for chase/allocate");
    }

    #[test]
    fn test_log_config_from_lookup() {
        let vars: HashMap<&str, &str> =
            HashMap::from([("RUST_LOG", "debug"), ("EE_JSON_LOGS", "TRUE")]);
        let config = LogConfig::from_lookup(|k| vars.get(k).map(|v| v.to_string()));
        assert_eq!(config.log_level, "debug");
        assert!(config.json_logs);

        let vars: HashMap<&str, &str> =
            HashMap::from([("RUST_LOG", "debug"), ("EE_LOG_LEVEL", "warn")]);
        let config = LogConfig::from_lookup(|k| vars.get(k).map(|v| v.to_string()));
        assert_eq!(config.log_level, "warn", "EE_LOG_LEVEL takes precedence");
        assert!(!config.json_logs);
    }
}
