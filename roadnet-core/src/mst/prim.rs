//! Lazy-deletion Prim engine.
//!
//! The frontier holds every half-edge pushed from the visited region. Entries
//! whose far endpoint has since been visited stay in the heap and are
//! discarded when popped. Entries are ordered by `(cost, push sequence)`, so
//! equal-cost half-edges leave the frontier in the order they entered it.
//!
//! The measured operation count tallies one operation for marking the start
//! district, one per frontier push, one per frontier pop, and one per
//! district marked visited.

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;
use std::time::Instant;

use tracing::{debug, field, instrument};

use crate::{
    error::Result,
    graph::{AdjacencyView, HalfEdge},
    network::Network,
};

use super::{Algorithm, CostAccumulator, MstResult, record_run, record_span};

/// Index of the start district within the network's district order.
const START: usize = 0;

/// Computes a minimum spanning tree with Prim's algorithm, starting from the
/// first district.
///
/// When the network is disconnected the frontier empties before every
/// district is reached and the result spans only the start district's
/// component.
///
/// # Errors
/// Returns [`crate::MstError::DuplicateDistrict`] when a district is listed
/// twice, [`crate::MstError::UnknownDistrict`] when a road names an unlisted
/// district, and [`crate::MstError::CostOverflow`] when the final total cost
/// does not fit in an `i64`.
///
/// # Examples
/// ```
/// use roadnet_core::{Network, Road, run_prim};
///
/// let network = Network::new(
///     ["A", "B", "C", "D"],
///     [Road::new("A", "B", 1), Road::new("C", "D", 1)],
/// );
/// let result = run_prim(&network)?;
/// assert_eq!(result.edges(), &[Road::new("A", "B", 1)]);
/// assert_eq!(result.total_cost(), 1);
/// # Ok::<(), roadnet_core::MstError>(())
/// ```
#[instrument(
    name = "mst.prim",
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
pub fn run_prim(network: &Network) -> Result<MstResult> {
    let started = Instant::now();

    let view = AdjacencyView::build(network)?;
    if view.is_empty() {
        let result = MstResult::new(Algorithm::Prim, Vec::new(), 0, 0, started.elapsed());
        record_span(&result);
        record_run(&result);
        return Ok(result);
    }

    let mut search = FrontierSearch::new(&view);
    search.visit_start();
    let target = view.len().saturating_sub(1);
    let mut edges = Vec::with_capacity(target);
    let mut cost = CostAccumulator::default();

    while edges.len() < target {
        let Some(edge) = search.next_tree_edge() else {
            debug!(
                reached = edges.len().saturating_add(1),
                districts = view.len(),
                "frontier exhausted, returning the start district's component"
            );
            break;
        };
        let road = view.to_road(edge);
        cost.add(&road);
        edges.push(road);
    }

    let result = MstResult::new(
        Algorithm::Prim,
        edges,
        cost.finish()?,
        search.operations,
        started.elapsed(),
    );
    record_span(&result);
    record_run(&result);
    Ok(result)
}

/// Visited flags, frontier, and operation counter for one Prim run.
struct FrontierSearch<'v, 'a> {
    view: &'v AdjacencyView<'a>,
    visited: Vec<bool>,
    frontier: Frontier,
    operations: u64,
}

impl<'v, 'a> FrontierSearch<'v, 'a> {
    fn new(view: &'v AdjacencyView<'a>) -> Self {
        Self {
            view,
            visited: vec![false; view.len()],
            frontier: Frontier::default(),
            operations: 0,
        }
    }

    /// Marks the start district visited and pushes all of its half-edges,
    /// including self-loops, which are discarded when popped.
    fn visit_start(&mut self) {
        self.mark_visited(START);
        for &edge in self.view.half_edges(START) {
            self.push(edge);
        }
    }

    /// Pops until a half-edge reaches an unvisited district, then visits it.
    ///
    /// Returns `None` once the frontier is empty.
    fn next_tree_edge(&mut self) -> Option<HalfEdge> {
        loop {
            let edge = self.frontier.pop()?;
            self.tick();
            if self.is_visited(edge.target()) {
                continue;
            }
            self.mark_visited(edge.target());
            for &next in self.view.half_edges(edge.target()) {
                if !self.is_visited(next.target()) {
                    self.push(next);
                }
            }
            return Some(edge);
        }
    }

    fn is_visited(&self, slot: usize) -> bool {
        self.visited.get(slot).copied().unwrap_or(true)
    }

    fn mark_visited(&mut self, slot: usize) {
        if let Some(flag) = self.visited.get_mut(slot) {
            *flag = true;
        }
        self.tick();
    }

    fn push(&mut self, edge: HalfEdge) {
        self.frontier.push(edge);
        self.tick();
    }

    fn tick(&mut self) {
        self.operations = self.operations.saturating_add(1);
    }
}

/// Min-priority queue of half-edges that is stable for equal costs.
#[derive(Debug, Default)]
struct Frontier {
    heap: BinaryHeap<Reverse<FrontierEntry>>,
    next_sequence: u64,
}

impl Frontier {
    fn push(&mut self, edge: HalfEdge) {
        let sequence = self.next_sequence;
        self.next_sequence = self.next_sequence.saturating_add(1);
        self.heap.push(Reverse(FrontierEntry { edge, sequence }));
    }

    fn pop(&mut self) -> Option<HalfEdge> {
        self.heap.pop().map(|Reverse(entry)| entry.edge)
    }

    #[cfg(test)]
    fn len(&self) -> usize {
        self.heap.len()
    }
}

#[derive(Clone, Copy, Debug)]
struct FrontierEntry {
    edge: HalfEdge,
    sequence: u64,
}

impl PartialEq for FrontierEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for FrontierEntry {}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.edge
            .cost()
            .cmp(&other.edge.cost())
            .then_with(|| self.sequence.cmp(&other.sequence))
    }
}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
