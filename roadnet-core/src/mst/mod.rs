//! Minimum spanning tree (MST) engines.
//!
//! Two independent engines compute a minimum spanning tree of a
//! [`Network`]:
//!
//! - [`run_kruskal`] stable-sorts roads by cost and rejects cycle-forming
//!   roads with a [`crate::DisjointSet`]. Disconnected input yields a
//!   spanning forest over every component.
//! - [`run_prim`] grows a tree from the first district using a lazy-deletion
//!   frontier. Disconnected input yields the tree of the start district's
//!   component only.
//!
//! The two engines disagree on disconnected input by design; both results
//! are minimal for the districts they reach.

mod kruskal;
mod prim;

use std::fmt;
use std::time::Duration;

use tracing::Span;

pub use self::{kruskal::run_kruskal, prim::run_prim};

use crate::{
    error::{MstError, Result},
    network::{Network, Road},
    normalize::normalize,
};

/// Identifies an MST engine.
///
/// # Examples
/// ```
/// use roadnet_core::{Algorithm, Network, Road};
///
/// let network = Network::new(["A", "B"], [Road::new("A", "B", 2)]);
/// for algorithm in Algorithm::ALL {
///     let result = algorithm.run(&network)?;
///     assert_eq!(result.algorithm(), algorithm);
///     assert_eq!(result.total_cost(), 2);
/// }
/// # Ok::<(), roadnet_core::MstError>(())
/// ```
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Algorithm {
    /// Edge-sorting engine backed by a disjoint set.
    Kruskal,
    /// Frontier-expansion engine seeded at the first district.
    Prim,
}

impl Algorithm {
    /// Every engine, in the order reports list them.
    pub const ALL: [Self; 2] = [Self::Prim, Self::Kruskal];

    /// Returns the stable lowercase name of the engine.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Kruskal => "kruskal",
            Self::Prim => "prim",
        }
    }

    /// Runs this engine against `network`.
    ///
    /// # Errors
    /// Propagates the engine's [`MstError`].
    pub fn run(self, network: &Network) -> Result<MstResult> {
        match self {
            Self::Kruskal => run_kruskal(network),
            Self::Prim => run_prim(network),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The output of one engine run.
///
/// `total_cost` always equals the sum of the edge costs. `operation_count`
/// is the count measured by the engine itself.
#[derive(Clone, Debug, PartialEq)]
pub struct MstResult {
    algorithm: Algorithm,
    edges: Vec<Road>,
    total_cost: i64,
    operation_count: u64,
    elapsed: Duration,
}

impl MstResult {
    pub(crate) fn new(
        algorithm: Algorithm,
        edges: Vec<Road>,
        total_cost: i64,
        operation_count: u64,
        elapsed: Duration,
    ) -> Self {
        Self {
            algorithm,
            edges,
            total_cost,
            operation_count,
            elapsed,
        }
    }

    /// Returns the engine that produced the result.
    #[must_use]
    #[rustfmt::skip]
    pub fn algorithm(&self) -> Algorithm { self.algorithm }

    /// Returns the selected roads in the order the engine accepted them.
    #[must_use]
    #[rustfmt::skip]
    pub fn edges(&self) -> &[Road] { &self.edges }

    /// Returns the number of selected roads.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Returns the summed cost of the selected roads.
    #[must_use]
    #[rustfmt::skip]
    pub fn total_cost(&self) -> i64 { self.total_cost }

    /// Returns the number of primitive operations the engine performed.
    #[must_use]
    #[rustfmt::skip]
    pub fn operation_count(&self) -> u64 { self.operation_count }

    /// Returns the wall-clock time spent in the engine body.
    #[must_use]
    #[rustfmt::skip]
    pub fn elapsed(&self) -> Duration { self.elapsed }

    /// Returns `true` when the result spans `district_count` districts with a
    /// single tree.
    #[must_use]
    pub fn spans(&self, district_count: usize) -> bool {
        self.edges.len() == district_count.saturating_sub(1)
    }

    /// Returns the result with its edges in canonical order.
    ///
    /// See [`normalize`] for the ordering.
    #[must_use]
    pub fn into_normalized(self) -> Self {
        Self {
            edges: normalize(&self.edges),
            ..self
        }
    }
}

/// Exact cost total; only the final sum has to fit in an `i64`.
#[derive(Debug, Default)]
struct CostAccumulator {
    total: i128,
}

impl CostAccumulator {
    fn add(&mut self, road: &Road) {
        self.total = self.total.saturating_add(i128::from(road.cost()));
    }

    fn finish(&self) -> Result<i64> {
        i64::try_from(self.total).map_err(|_| MstError::CostOverflow { total: self.total })
    }
}

/// Records the outcome fields declared by the engine's span.
fn record_span(result: &MstResult) {
    let span = Span::current();
    span.record("edges", result.edge_count());
    span.record("total_cost", result.total_cost());
    span.record("operations", result.operation_count());
}

#[cfg(feature = "metrics")]
fn record_run(result: &MstResult) {
    let algorithm = result.algorithm.as_str();
    metrics::counter!("mst_runs_total", "algorithm" => algorithm).increment(1);
    metrics::counter!("mst_operations_total", "algorithm" => algorithm)
        .increment(result.operation_count);
    metrics::histogram!("mst_elapsed_seconds", "algorithm" => algorithm)
        .record(result.elapsed.as_secs_f64());
}

#[cfg(not(feature = "metrics"))]
fn record_run(_result: &MstResult) {}
