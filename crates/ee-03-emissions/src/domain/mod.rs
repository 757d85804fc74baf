//! Domain Layer - Pure arithmetic
//!
//! RULES:
//! - No I/O operations
//! - All emissions in grams of CO2 equivalent

pub mod calculator;
pub mod factors;
pub mod measurements;

pub use calculator::{default_query_counts, EmissionCalculator, EmissionPoint, EmissionSeries};
pub use factors::{
    all_co2_emissions, disk_co2_emissions, energy_per_time, joule_to_co2, query_co2_emissions,
    storage_savings_percent, CO2_EQ_PER_JOULE, CO2_EQ_PER_KWH, CO2_EQ_PER_MB, CO2_EQ_PER_TB,
};
pub use measurements::{
    cache_level, dataset, CacheLevelMeasurement, DatasetMeasurements, HitMissMeasurements,
    IndexMeasurement, CACHE_LEVELS, DATASETS, HITS_VS_MISSES,
};
