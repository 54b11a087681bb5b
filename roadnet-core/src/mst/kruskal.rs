//! Sequential Kruskal engine.
//!
//! Roads are stable-sorted by cost, so equal-cost roads are tried in input
//! order. Cycle detection and the measured operation count both come from
//! the run's [`DisjointSet`].

use std::time::Instant;

use tracing::{debug, field, instrument};

use crate::{
    disjoint_set::DisjointSet,
    error::{MstError, Result},
    network::{Network, Road},
};

use super::{Algorithm, CostAccumulator, MstResult, record_run, record_span};

/// Computes a minimum spanning forest with Kruskal's algorithm.
///
/// Iteration stops as soon as `V - 1` roads have been accepted. A
/// disconnected network exhausts its roads first and yields one tree per
/// component. Every road's endpoints are checked before any road is
/// processed, so early termination never hides an unknown district.
///
/// # Errors
/// Returns [`MstError::DuplicateDistrict`] when a district is listed twice,
/// [`MstError::UnknownDistrict`] when a road names an unlisted district, and
/// [`MstError::CostOverflow`] when the final total cost does not fit in an
/// `i64`.
///
/// # Examples
/// ```
/// use roadnet_core::{Network, Road, run_kruskal};
///
/// let network = Network::new(
///     ["A", "B", "C"],
///     [Road::new("A", "B", 1), Road::new("B", "C", 2), Road::new("A", "C", 3)],
/// );
/// let result = run_kruskal(&network)?;
/// assert_eq!(result.edges(), &[Road::new("A", "B", 1), Road::new("B", "C", 2)]);
/// assert_eq!(result.total_cost(), 3);
/// # Ok::<(), roadnet_core::MstError>(())
/// ```
#[instrument(
    name = "mst.kruskal",
    err,
    skip(network),
    fields(
        districts = network.district_count(),
        roads = network.road_count(),
        edges = field::Empty,
        total_cost = field::Empty,
        operations = field::Empty,
    ),
)]
pub fn run_kruskal(network: &Network) -> Result<MstResult> {
    let started = Instant::now();

    let mut set = DisjointSet::with_capacity(network.district_count());
    for district in network.districts() {
        set.create_set(district.as_str())
            .map_err(|_| MstError::DuplicateDistrict {
                district: district.clone(),
            })?;
    }
    ensure_endpoints_known(&set, network.roads())?;

    let mut sorted: Vec<&Road> = network.roads().iter().collect();
    sorted.sort_by_key(|road| road.cost());

    let target = network.spanning_edge_target();
    let mut edges = Vec::with_capacity(target);
    let mut cost = CostAccumulator::default();
    for road in sorted {
        if edges.len() == target {
            debug!(edges = target, "spanning tree complete, skipping remaining roads");
            break;
        }
        let merged = set
            .union(&road.source(), &road.destination())
            .map_err(|error| MstError::from_disjoint_set(error, road))?;
        if merged {
            cost.add(road);
            edges.push(road.clone());
        }
    }

    if edges.len() < target {
        debug!(
            components = set.component_count(),
            edges = edges.len(),
            "network is disconnected, returning spanning forest"
        );
    }

    let result = MstResult::new(
        Algorithm::Kruskal,
        edges,
        cost.finish()?,
        set.operations(),
        started.elapsed(),
    );
    record_span(&result);
    record_run(&result);
    Ok(result)
}

fn ensure_endpoints_known(set: &DisjointSet<&str>, roads: &[Road]) -> Result<()> {
    for road in roads {
        for district in [road.source(), road.destination()] {
            if !set.contains(&district) {
                return Err(MstError::UnknownDistrict {
                    district: district.to_owned(),
                    road: road.clone(),
                });
            }
        }
    }
    Ok(())
}
