//! # Brutal Modular Benchmarks
//!
//! Each subsystem has dedicated benchmarks that check its complexity claims
//! on best-case, worst-case and adversarial inputs.
//!
//! - `ee_01_sorting` - Every strategy across input shapes and sizes
//! - `ee_02_references` - Citation and figure numbering hot paths

pub mod ee_01_sorting;
pub mod ee_02_references;
