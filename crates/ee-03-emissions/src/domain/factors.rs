//! Emission factors and unit conversions
//!
//! Factors:
//! - Electricity: 363 g CO2 eq per kWh (German power mix, 2024)
//! - Online storage: 209.5 kg CO2 eq per TB and year (mean of the 166–280 kg
//!   range reported for cloud storage by the German Environment Agency)

/// Grams CO2 eq per kilowatt hour
pub const CO2_EQ_PER_KWH: f64 = 363.0;

/// Grams CO2 eq per joule (1 kWh = 3.6 MJ)
pub const CO2_EQ_PER_JOULE: f64 = CO2_EQ_PER_KWH / 3_600_000.0;

/// Grams CO2 eq per terabyte stored for one year
pub const CO2_EQ_PER_TB: f64 = 209_500.0;

/// Grams CO2 eq per megabyte stored for one year (1 TB = 1024² MB)
pub const CO2_EQ_PER_MB: f64 = CO2_EQ_PER_TB / (1024.0 * 1024.0);

/// Yearly storage emissions of `size_in_megabyte`
pub fn disk_co2_emissions(size_in_megabyte: f64) -> f64 {
    size_in_megabyte * CO2_EQ_PER_MB
}

/// Emissions of `count_queries` queries at `joule_per_1000_queries`
pub fn query_co2_emissions(count_queries: u64, joule_per_1000_queries: f64) -> f64 {
    (count_queries as f64 / 1000.0) * joule_per_1000_queries * CO2_EQ_PER_JOULE
}

pub fn joule_to_co2(energy_in_joule: f64) -> f64 {
    energy_in_joule * CO2_EQ_PER_JOULE
}

/// Storage + construction + query emissions
pub fn all_co2_emissions(
    size_in_megabyte: f64,
    construction_energy: f64,
    joule_per_query: f64,
    count_queries: u64,
) -> f64 {
    disk_co2_emissions(size_in_megabyte)
        + joule_to_co2(construction_energy)
        + joule_to_co2(joule_per_query * count_queries as f64)
}

/// Average power draw in watts
///
/// Returns 0 for a non-positive duration.
pub fn energy_per_time(energy_in_joule: f64, time_in_seconds: f64) -> f64 {
    if time_in_seconds <= 0.0 {
        return 0.0;
    }
    energy_in_joule / time_in_seconds
}

/// Percentage of storage emissions saved by keeping `compressed_mb` instead
/// of `original_mb`
pub fn storage_savings_percent(original_mb: f64, compressed_mb: f64) -> f64 {
    if original_mb <= 0.0 {
        return 0.0;
    }
    let original = disk_co2_emissions(original_mb);
    (original - disk_co2_emissions(compressed_mb)) / original * 100.0
}
