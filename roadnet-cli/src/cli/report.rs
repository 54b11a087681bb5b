//! JSON report model.
//!
//! Field names and ordering follow the report format consumers already
//! parse: `graph_id`, `input_stats`, then one block per engine with Prim
//! first.

use std::time::Duration;

use roadnet_core::{Algorithm, AlgorithmRun, NetworkSolution, Road};
use serde::Serialize;

/// Complete report for one input document.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SolveReport {
    /// One entry per input graph, in input order.
    pub results: Vec<GraphReport>,
}

/// Report for one network.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct GraphReport {
    /// Identifier from the input, or the 1-based position.
    pub graph_id: u64,
    /// Input size.
    pub input_stats: InputStats,
    /// Prim block, omitted when not requested.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prim: Option<AlgorithmReport>,
    /// Kruskal block, omitted when not requested.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kruskal: Option<AlgorithmReport>,
}

/// Vertex and edge counts of the input network.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct InputStats {
    /// Number of districts.
    pub vertices: usize,
    /// Number of roads.
    pub edges: usize,
}

/// Metrics for one engine run.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct AlgorithmReport {
    /// Selected roads in normalized order.
    pub mst_edges: Vec<EdgeReport>,
    /// Sum of the selected costs.
    pub total_cost: i64,
    /// Operations counted by the engine.
    pub operations_count: u64,
    /// Closed-form operation estimate.
    pub estimated_operations_count: i64,
    /// Engine wall-clock time in milliseconds, rounded to two decimals.
    pub execution_time_ms: f64,
}

/// One selected road.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct EdgeReport {
    /// Smaller endpoint label.
    pub from: String,
    /// Larger endpoint label.
    pub to: String,
    /// Construction cost.
    pub weight: i64,
}

impl SolveReport {
    /// Builds a report covering `algorithms` for every solution.
    #[must_use]
    pub fn new(solutions: &[NetworkSolution], algorithms: &[Algorithm]) -> Self {
        Self {
            results: solutions
                .iter()
                .map(|solution| GraphReport::new(solution, algorithms))
                .collect(),
        }
    }
}

impl GraphReport {
    fn new(solution: &NetworkSolution, algorithms: &[Algorithm]) -> Self {
        let block = |algorithm: Algorithm| {
            algorithms
                .contains(&algorithm)
                .then(|| AlgorithmReport::from(solution.run(algorithm)))
        };
        let stats = solution.stats();
        Self {
            graph_id: solution.graph_id(),
            input_stats: InputStats {
                vertices: stats.vertices,
                edges: stats.edges,
            },
            prim: block(Algorithm::Prim),
            kruskal: block(Algorithm::Kruskal),
        }
    }
}

impl From<&AlgorithmRun> for AlgorithmReport {
    fn from(run: &AlgorithmRun) -> Self {
        let result = run.result();
        Self {
            mst_edges: result.edges().iter().map(EdgeReport::from).collect(),
            total_cost: result.total_cost(),
            operations_count: result.operation_count(),
            estimated_operations_count: run.estimated_operations(),
            execution_time_ms: round_millis(result.elapsed()),
        }
    }
}

impl From<&Road> for EdgeReport {
    fn from(road: &Road) -> Self {
        Self {
            from: road.source().to_owned(),
            to: road.destination().to_owned(),
            weight: road.cost(),
        }
    }
}

#[expect(
    clippy::float_arithmetic,
    reason = "report carries elapsed milliseconds rounded to two decimals"
)]
fn round_millis(elapsed: Duration) -> f64 {
    (elapsed.as_secs_f64() * 100_000.0).round() / 100.0
}
