//! # EE-03 Emissions
//!
//! Converts measured energy and disk usage of compressed text indices into
//! CO2-equivalent emissions.
//!
//! ## Architecture
//!
//! - **Domain Layer** (`domain/`): Pure arithmetic, no I/O
//!   - `factors`: Emission factors and unit conversions
//!   - `measurements`: Hardcoded measurement tables per dataset and index,
//!     per cache level, and for cache hits against cache misses
//!   - `calculator`: Emission series over a range of query counts
//!
//! All emission values are grams of CO2 equivalent. Disk emissions are per
//! year of online storage.
//!
//! ## Usage Example
//!
//! ```
//! use ee_03_emissions::{dataset, disk_co2_emissions, EmissionCalculator};
//!
//! let einstein = dataset("einstein")?;
//! let move_r = einstein.index("move-r")?;
//! assert!(disk_co2_emissions(move_r.size_mb) < disk_co2_emissions(einstein.file_size_mb));
//!
//! let calculator = EmissionCalculator::new(10.0, 150.0, 4.0)?;
//! let series = calculator.series(&[1_000, 1_000_000]);
//! assert_eq!(series.points.len(), 2);
//! # Ok::<(), ee_03_emissions::EmissionError>(())
//! ```

pub mod domain;
pub mod error;

// Re-exports for convenience
pub use domain::{
    all_co2_emissions, cache_level, dataset, default_query_counts, disk_co2_emissions,
    energy_per_time, joule_to_co2, query_co2_emissions, storage_savings_percent,
    CacheLevelMeasurement, DatasetMeasurements, EmissionCalculator, EmissionPoint,
    EmissionSeries, HitMissMeasurements, IndexMeasurement, CACHE_LEVELS, CO2_EQ_PER_JOULE,
    CO2_EQ_PER_KWH, CO2_EQ_PER_MB, CO2_EQ_PER_TB, DATASETS, HITS_VS_MISSES,
};
pub use error::EmissionError;
