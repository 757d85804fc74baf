//! Measurement tables for the cache-miss and compressed text index experiments
//!
//! Sizes are in MB, energies in joules, times in seconds. Locate measurements
//! cover `locate_iterations` queries with patterns of length
//! `locate_pattern_length`. Cache measurements come from repeated accesses
//! whose working set fits one level of the memory hierarchy.

use serde::Serialize;
use tracing::debug;

use crate::error::EmissionError;

/// Measurements of one compressed text index on one dataset
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct IndexMeasurement {
    pub index: &'static str,
    /// Size of the built index
    pub size_mb: f64,
    /// Query energy per 1000 locate queries
    pub joule_per_1000_queries: f64,
    /// Energy of the whole locate run
    pub locate_energy_j: f64,
    pub locate_time_s: f64,
    /// Energy of building the index
    pub build_energy_j: f64,
    pub build_time_s: f64,
}

impl IndexMeasurement {
    /// Average power during the locate run, in watts
    pub fn locate_power_w(&self) -> f64 {
        super::factors::energy_per_time(self.locate_energy_j, self.locate_time_s)
    }

    /// Average power during construction, in watts
    pub fn build_power_w(&self) -> f64 {
        super::factors::energy_per_time(self.build_energy_j, self.build_time_s)
    }
}

/// Measurements of every index on one dataset
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct DatasetMeasurements {
    pub name: &'static str,
    /// Size of the uncompressed text
    pub file_size_mb: f64,
    pub locate_pattern_length: u32,
    pub locate_iterations: u64,
    pub indices: &'static [IndexMeasurement],
}

impl DatasetMeasurements {
    /// Measurements for the index named `index`
    pub fn index(&self, index: &str) -> Result<&'static IndexMeasurement, EmissionError> {
        self.indices
            .iter()
            .find(|m| m.index == index)
            .ok_or_else(|| EmissionError::UnknownIndex {
                dataset: self.name.to_string(),
                index: index.to_string(),
            })
    }
}

const EINSTEIN_INDICES: &[IndexMeasurement] = &[
    IndexMeasurement {
        index: "move-r",
        size_mb: 23.1,
        joule_per_1000_queries: 4.125640869140625,
        locate_energy_j: 166.96413294474283,
        locate_time_s: 17.062243166666423,
        build_energy_j: 301.71971893310547,
        build_time_s: 33.42205178999984,
    },
    IndexMeasurement {
        index: "move-r-lzend",
        size_mb: 26.8,
        joule_per_1000_queries: 4.353302001953125,
        locate_energy_j: 166.59228897094727,
        locate_time_s: 11.680849649167309,
        build_energy_j: 6128.963981628418,
        build_time_s: 880.8818223425001,
    },
    IndexMeasurement {
        index: "move-r-rlz",
        size_mb: 48.3,
        joule_per_1000_queries: 0.881256103515625,
        locate_energy_j: 22.553624471028645,
        locate_time_s: 1.4067980725831148,
        build_energy_j: 443.0567321777344,
        build_time_s: 46.35676657699969,
    },
];

/// All measured datasets
pub const DATASETS: &[DatasetMeasurements] = &[DatasetMeasurements {
    name: "einstein",
    file_size_mb: 629.1,
    locate_pattern_length: 8,
    locate_iterations: 20_000,
    indices: EINSTEIN_INDICES,
}];

/// Measurements for the dataset named `name`
pub fn dataset(name: &str) -> Result<&'static DatasetMeasurements, EmissionError> {
    DATASETS.iter().find(|d| d.name == name).ok_or_else(|| {
        debug!(dataset = %name, "Dataset lookup miss");
        EmissionError::UnknownDataset(name.to_string())
    })
}

/// Repeated memory accesses served by one level of the memory hierarchy
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct CacheLevelMeasurement {
    /// `reg` or the working-set size, e.g. `32KB`
    pub level: &'static str,
    pub energy_j: f64,
    pub time_s: f64,
    pub accesses: u64,
}

impl CacheLevelMeasurement {
    pub fn joule_per_access(&self) -> f64 {
        self.energy_j / self.accesses as f64
    }

    pub fn second_per_access(&self) -> f64 {
        self.time_s / self.accesses as f64
    }

    /// Average power during the run, in watts
    pub fn power_w(&self) -> f64 {
        super::factors::energy_per_time(self.energy_j, self.time_s)
    }
}

/// Working sets from registers up to main memory, smallest first
pub const CACHE_LEVELS: &[CacheLevelMeasurement] = &[
    CacheLevelMeasurement {
        level: "reg",
        energy_j: 50.74641418457031,
        time_s: 4.513529940995795,
        accesses: 20_971_520_000,
    },
    CacheLevelMeasurement {
        level: "32KB",
        energy_j: 7.536773681640625,
        time_s: 1.093406922002032,
        accesses: 1_000_000_000,
    },
    CacheLevelMeasurement {
        level: "512KB",
        energy_j: 29.092559814453125,
        time_s: 4.836264896002831,
        accesses: 1_000_000_000,
    },
    CacheLevelMeasurement {
        level: "4MB",
        energy_j: 62.41368103027344,
        time_s: 10.614138566001202,
        accesses: 1_000_000_000,
    },
    CacheLevelMeasurement {
        level: "32MB",
        energy_j: 18.173782348632812,
        time_s: 3.5995127049973235,
        accesses: 100_000_000,
    },
    CacheLevelMeasurement {
        level: "256MB",
        energy_j: 53.9232177734375,
        time_s: 10.97128734600119,
        accesses: 100_000_000,
    },
];

/// Measurements for the cache level named `level`
pub fn cache_level(level: &str) -> Result<&'static CacheLevelMeasurement, EmissionError> {
    CACHE_LEVELS.iter().find(|m| m.level == level).ok_or_else(|| {
        debug!(level = %level, "Cache level lookup miss");
        EmissionError::UnknownCacheLevel(level.to_string())
    })
}

/// A cache-hit run against a pointer-chasing run that misses on every step
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct HitMissMeasurements {
    pub hits: CacheLevelMeasurement,
    pub misses: CacheLevelMeasurement,
}

impl HitMissMeasurements {
    pub fn joule_per_hit(&self) -> f64 {
        self.hits.joule_per_access()
    }

    pub fn joule_per_miss(&self) -> f64 {
        self.misses.joule_per_access()
    }

    pub fn second_per_hit(&self) -> f64 {
        self.hits.second_per_access()
    }

    pub fn second_per_miss(&self) -> f64 {
        self.misses.second_per_access()
    }

    /// Average power while hitting the cache, in watts
    pub fn hit_power_w(&self) -> f64 {
        self.hits.power_w()
    }

    /// Average power while chasing pointers, in watts
    pub fn miss_power_w(&self) -> f64 {
        self.misses.power_w()
    }
}

pub const HITS_VS_MISSES: HitMissMeasurements = HitMissMeasurements {
    hits: CacheLevelMeasurement {
        level: "reg",
        energy_j: 50.34429931640625,
        time_s: 4.632522231004259,
        accesses: 20_971_520_000,
    },
    misses: CacheLevelMeasurement {
        level: "chase",
        energy_j: 561.2737426757812,
        time_s: 106.10380331900524,
        accesses: 1_000_000_000,
    },
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_einstein_indices() {
        let einstein = dataset("einstein").expect("einstein is measured");

        assert_eq!(einstein.indices.len(), 3);
        assert_eq!(einstein.index("move-r").unwrap().size_mb, 23.1);
        assert_eq!(einstein.index("move-r-rlz").unwrap().size_mb, 48.3);
    }

    #[test]
    fn test_unknown_dataset_and_index() {
        assert_eq!(
            dataset("wikipedia"),
            Err(EmissionError::UnknownDataset("wikipedia".to_string()))
        );

        let einstein = dataset("einstein").unwrap();
        assert!(matches!(
            einstein.index("r-index"),
            Err(EmissionError::UnknownIndex { .. })
        ));
    }

    #[test]
    fn test_rlz_draws_more_power_than_move_r() {
        let einstein = dataset("einstein").unwrap();
        let move_r = einstein.index("move-r").unwrap();
        let rlz = einstein.index("move-r-rlz").unwrap();

        // Fewer cache misses keep the CPU busier per second.
        assert!(rlz.locate_power_w() > move_r.locate_power_w());
        assert!(rlz.locate_energy_j < move_r.locate_energy_j);
    }

    fn assert_close(actual: f64, expected: f64) {
        let tolerance = expected.abs() * 1e-4;
        assert!(
            (actual - expected).abs() <= tolerance,
            "expected {} got {}",
            expected,
            actual
        );
    }

    #[test]
    fn test_hits_vs_misses_per_access() {
        let m = HITS_VS_MISSES;

        assert_close(m.joule_per_hit(), 2.4006e-9);
        assert_close(m.joule_per_miss(), 5.6127e-7);
        assert_close(m.second_per_hit(), 2.2090e-10);
        assert_close(m.second_per_miss(), 1.0610e-7);
    }

    #[test]
    fn test_misses_cost_more_energy_but_draw_less_power() {
        let m = HITS_VS_MISSES;

        assert_close(m.hit_power_w(), 10.8676);
        assert_close(m.miss_power_w(), 5.2899);
        assert!(m.joule_per_miss() > m.joule_per_hit());
        assert!(m.miss_power_w() < m.hit_power_w());
    }

    #[test]
    fn test_cache_levels_cost_more_per_access_further_out() {
        let per_access: Vec<f64> = CACHE_LEVELS.iter().map(|m| m.joule_per_access()).collect();
        assert!(
            per_access.windows(2).all(|w| w[0] < w[1]),
            "Energy per access must grow with the working set: {:?}",
            per_access
        );

        let reg = cache_level("reg").unwrap();
        assert_close(reg.joule_per_access(), 2.4198e-9);
        assert_close(reg.power_w(), 11.2432);
        assert!(cache_level("256MB").unwrap().power_w() < reg.power_w());
    }

    #[test]
    fn test_unknown_cache_level() {
        assert_eq!(
            cache_level("1GB"),
            Err(EmissionError::UnknownCacheLevel("1GB".to_string()))
        );
    }
}
