//! Shared helper functions for MST property-based tests.

use std::collections::HashMap;

use crate::network::{Network, Road};

/// Path-halving find over a plain parent array.
pub(super) fn find_root(parent: &mut [usize], mut node: usize) -> usize {
    while parent[node] != node {
        parent[node] = parent[parent[node]];
        node = parent[node];
    }
    node
}

/// A road expressed with dense district indices.
#[derive(Clone, Copy, Debug)]
pub(super) struct IndexedRoad {
    pub source: usize,
    pub destination: usize,
    pub cost: i64,
}

/// Dense label lookup for a generated network.
pub(super) struct Labels<'a> {
    slots: HashMap<&'a str, usize>,
}

impl<'a> Labels<'a> {
    pub(super) fn new(network: &'a Network) -> Self {
        let slots = network
            .districts()
            .iter()
            .enumerate()
            .map(|(slot, label)| (label.as_str(), slot))
            .collect();
        Self { slots }
    }

    /// Resolves both endpoints of `road`, or `None` when either is unknown.
    pub(super) fn index(&self, road: &Road) -> Option<IndexedRoad> {
        Some(IndexedRoad {
            source: *self.slots.get(road.source())?,
            destination: *self.slots.get(road.destination())?,
            cost: road.cost(),
        })
    }

    pub(super) fn index_all(&self, roads: &[Road]) -> Option<Vec<IndexedRoad>> {
        roads.iter().map(|road| self.index(road)).collect()
    }
}

/// Labels every district with the representative of its input component.
pub(super) fn component_labels(district_count: usize, roads: &[IndexedRoad]) -> Vec<usize> {
    let mut parent: Vec<usize> = (0..district_count).collect();
    for road in roads {
        let a = find_root(&mut parent, road.source);
        let b = find_root(&mut parent, road.destination);
        if a != b {
            parent[b] = a;
        }
    }
    (0..district_count)
        .map(|node| find_root(&mut parent, node))
        .collect()
}

/// Sums costs as `i128` so generated totals never overflow.
pub(super) fn total_cost(edges: &[Road]) -> i128 {
    edges.iter().map(|road| i128::from(road.cost())).sum()
}
