//! Runs both engines against networks and assembles comparable solutions.
//!
//! Each network is solved sequentially. Batches fan out across networks with
//! Rayon when the `cpu` feature is enabled; result order always matches the
//! input order.

use tracing::instrument;

use crate::{
    error::Result,
    mst::{Algorithm, MstResult},
    network::{Network, NetworkStats},
};

/// Returns the closed-form operation estimate historically reported for
/// `algorithm` on a network of the given size.
///
/// - Prim: `5·V + 4·E − 11`
/// - Kruskal: `4·V + E + 10`
///
/// The estimate is a labelled statistic reported next to the measured
/// [`MstResult::operation_count`]. It saturates instead of overflowing and
/// may be negative for tiny networks.
///
/// # Examples
/// ```
/// use roadnet_core::{Algorithm, NetworkStats, estimated_operations};
///
/// let stats = NetworkStats { vertices: 3, edges: 3 };
/// assert_eq!(estimated_operations(Algorithm::Prim, stats), 16);
/// assert_eq!(estimated_operations(Algorithm::Kruskal, stats), 25);
/// ```
#[must_use]
pub fn estimated_operations(algorithm: Algorithm, stats: NetworkStats) -> i64 {
    let vertices = i64::try_from(stats.vertices).unwrap_or(i64::MAX);
    let edges = i64::try_from(stats.edges).unwrap_or(i64::MAX);
    match algorithm {
        Algorithm::Prim => vertices
            .saturating_mul(5)
            .saturating_add(edges.saturating_mul(4))
            .saturating_sub(11),
        Algorithm::Kruskal => vertices
            .saturating_mul(4)
            .saturating_add(edges)
            .saturating_add(10),
    }
}

/// One engine's normalized result paired with its formula estimate.
#[derive(Clone, Debug, PartialEq)]
pub struct AlgorithmRun {
    result: MstResult,
    estimated_operations: i64,
}

impl AlgorithmRun {
    fn new(result: MstResult, stats: NetworkStats) -> Self {
        let estimated_operations = estimated_operations(result.algorithm(), stats);
        Self {
            result: result.into_normalized(),
            estimated_operations,
        }
    }

    /// Returns the engine result with normalized edges.
    #[must_use]
    #[rustfmt::skip]
    pub fn result(&self) -> &MstResult { &self.result }

    /// Returns the closed-form operation estimate.
    #[must_use]
    #[rustfmt::skip]
    pub fn estimated_operations(&self) -> i64 { self.estimated_operations }
}

/// Both engines' outputs for one network.
#[derive(Clone, Debug, PartialEq)]
pub struct NetworkSolution {
    graph_id: u64,
    stats: NetworkStats,
    kruskal: AlgorithmRun,
    prim: AlgorithmRun,
}

impl NetworkSolution {
    /// Returns the identifier the network was solved under.
    #[must_use]
    #[rustfmt::skip]
    pub fn graph_id(&self) -> u64 { self.graph_id }

    /// Returns the input size.
    #[must_use]
    #[rustfmt::skip]
    pub fn stats(&self) -> NetworkStats { self.stats }

    /// Returns the Kruskal run.
    #[must_use]
    #[rustfmt::skip]
    pub fn kruskal(&self) -> &AlgorithmRun { &self.kruskal }

    /// Returns the Prim run.
    #[must_use]
    #[rustfmt::skip]
    pub fn prim(&self) -> &AlgorithmRun { &self.prim }

    /// Returns the run produced by `algorithm`.
    #[must_use]
    pub fn run(&self, algorithm: Algorithm) -> &AlgorithmRun {
        match algorithm {
            Algorithm::Kruskal => &self.kruskal,
            Algorithm::Prim => &self.prim,
        }
    }
}

/// Solves `network` with Kruskal then Prim.
///
/// # Errors
/// Returns the first [`crate::MstError`] raised by either engine.
///
/// # Examples
/// ```
/// use roadnet_core::{Network, Road, solve};
///
/// let network = Network::new(
///     ["A", "B", "C"],
///     [Road::new("B", "A", 1), Road::new("C", "B", 2), Road::new("A", "C", 3)],
/// );
/// let solution = solve(7, &network)?;
/// assert_eq!(solution.graph_id(), 7);
/// assert_eq!(solution.kruskal().result().edges(), solution.prim().result().edges());
/// assert_eq!(solution.prim().result().edges()[0], Road::new("A", "B", 1));
/// # Ok::<(), roadnet_core::MstError>(())
/// ```
#[instrument(
    name = "mst.solve",
    err,
    skip(network),
    fields(districts = network.district_count(), roads = network.road_count()),
)]
pub fn solve(graph_id: u64, network: &Network) -> Result<NetworkSolution> {
    let stats = network.stats();
    let kruskal = AlgorithmRun::new(Algorithm::Kruskal.run(network)?, stats);
    let prim = AlgorithmRun::new(Algorithm::Prim.run(network)?, stats);
    Ok(NetworkSolution {
        graph_id,
        stats,
        kruskal,
        prim,
    })
}

/// Solves every network independently, numbering graph ids from 1.
///
/// A failure in one network does not affect the others.
#[must_use]
pub fn solve_batch(networks: &[Network]) -> Vec<Result<NetworkSolution>> {
    solve_jobs((1_u64..).zip(networks).collect())
}

/// Solves every `(graph_id, network)` pair independently.
#[must_use]
pub fn solve_batch_with_ids(batch: &[(u64, Network)]) -> Vec<Result<NetworkSolution>> {
    solve_jobs(batch.iter().map(|(id, network)| (*id, network)).collect())
}

#[cfg(feature = "cpu")]
fn solve_jobs(jobs: Vec<(u64, &Network)>) -> Vec<Result<NetworkSolution>> {
    use rayon::prelude::*;

    jobs.into_par_iter()
        .map(|(graph_id, network)| solve(graph_id, network))
        .collect()
}

#[cfg(not(feature = "cpu"))]
fn solve_jobs(jobs: Vec<(u64, &Network)>) -> Vec<Result<NetworkSolution>> {
    jobs.into_iter()
        .map(|(graph_id, network)| solve(graph_id, network))
        .collect()
}
