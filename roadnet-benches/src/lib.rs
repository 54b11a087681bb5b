//! Benchmark support crate for roadnet.
//!
//! Provides seeded synthetic road networks and parameter types used by the
//! Criterion benchmarks comparing the Kruskal and Prim engines.

pub mod error;
pub mod params;
pub mod synthetic;
