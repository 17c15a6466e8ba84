//! Benchmark support crate for arbor.
//!
//! Provides seeded synthetic graph generators and parameter types used by
//! the Criterion benchmarks comparing the two MST algorithms.

pub mod params;
pub mod source;
