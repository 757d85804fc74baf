//! Emission series for the emission calculator
//!
//! Given an index size, its construction energy and its query energy, the
//! calculator reports yearly storage emissions, one-off construction
//! emissions and query emissions for each requested query count.

use serde::Serialize;
use tracing::debug;

use super::factors::{disk_co2_emissions, joule_to_co2};
use super::measurements::IndexMeasurement;
use crate::error::EmissionError;

/// Emissions at one query count
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct EmissionPoint {
    pub queries: u64,
    pub storage: f64,
    pub construction: f64,
    pub query: f64,
    pub total: f64,
}

/// Emission points ordered like the query counts they were computed for
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct EmissionSeries {
    pub points: Vec<EmissionPoint>,
}

impl EmissionSeries {
    /// First query count at which query emissions reach the one-off
    /// storage + construction emissions
    pub fn break_even(&self) -> Option<u64> {
        self.points
            .iter()
            .find(|p| p.query >= p.storage + p.construction)
            .map(|p| p.queries)
    }
}

/// Validated calculator inputs
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct EmissionCalculator {
    index_size_mb: f64,
    construction_joule: f64,
    joule_per_1000_queries: f64,
}

impl EmissionCalculator {
    /// Create a calculator; every input must be finite and non-negative
    pub fn new(
        index_size_mb: f64,
        construction_joule: f64,
        joule_per_1000_queries: f64,
    ) -> Result<Self, EmissionError> {
        validate("index_size_mb", index_size_mb)?;
        validate("construction_joule", construction_joule)?;
        validate("joule_per_1000_queries", joule_per_1000_queries)?;
        Ok(Self {
            index_size_mb,
            construction_joule,
            joule_per_1000_queries,
        })
    }

    /// Calculator preloaded with a measured index
    pub fn from_measurement(measurement: &IndexMeasurement) -> Self {
        Self {
            index_size_mb: measurement.size_mb,
            construction_joule: measurement.build_energy_j,
            joule_per_1000_queries: measurement.joule_per_1000_queries,
        }
    }

    /// Emissions for each entry of `query_counts`
    pub fn series(&self, query_counts: &[u64]) -> EmissionSeries {
        let storage = disk_co2_emissions(self.index_size_mb);
        let construction = joule_to_co2(self.construction_joule);

        let points = query_counts
            .iter()
            .map(|&queries| {
                let query =
                    joule_to_co2((self.joule_per_1000_queries / 1000.0) * queries as f64);
                EmissionPoint {
                    queries,
                    storage,
                    construction,
                    query,
                    total: storage + construction + query,
                }
            })
            .collect::<Vec<_>>();

        debug!(points = points.len(), storage, construction, "Emission series computed");
        EmissionSeries { points }
    }
}

/// Query counts 200,000, 400,000, ..., 199,800,000
pub fn default_query_counts() -> Vec<u64> {
    (1..1000).map(|i| 200_000 * i).collect()
}

fn validate(field: &'static str, value: f64) -> Result<(), EmissionError> {
    if !value.is_finite() || value < 0.0 {
        return Err(EmissionError::InvalidInput { field, value });
    }
    Ok(())
}
