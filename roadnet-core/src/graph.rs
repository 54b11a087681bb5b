//! Dense indexing and adjacency derived from a [`Network`].
//!
//! [`DistrictIndex`] assigns every district label a dense index in input
//! order. [`AdjacencyView`] stores, per index, the half-edges leaving that
//! district: each road contributes one half-edge at each endpoint, oriented
//! away from it. Parallel roads are kept.

use std::collections::HashMap;
use std::collections::hash_map::Entry;

use crate::{
    error::{MstError, Result},
    network::{Network, Road},
};

/// Lookup from district label to dense index.
///
/// # Examples
/// ```
/// use roadnet_core::{DistrictIndex, Network};
///
/// let network = Network::new(["A", "B"], []);
/// let index = DistrictIndex::build(&network)?;
/// assert_eq!(index.get("B"), Some(1));
/// assert_eq!(index.label(0), Some("A"));
/// assert_eq!(index.get("Z"), None);
/// # Ok::<(), roadnet_core::MstError>(())
/// ```
#[derive(Clone, Debug)]
pub struct DistrictIndex<'a> {
    labels: &'a [String],
    slots: HashMap<&'a str, usize>,
}

impl<'a> DistrictIndex<'a> {
    /// Indexes the districts of `network` in input order.
    ///
    /// # Errors
    /// Returns [`MstError::DuplicateDistrict`] when a label appears twice.
    pub fn build(network: &'a Network) -> Result<Self> {
        let labels = network.districts();
        let mut slots = HashMap::with_capacity(labels.len());
        for (slot, label) in labels.iter().enumerate() {
            match slots.entry(label.as_str()) {
                Entry::Occupied(_) => {
                    return Err(MstError::DuplicateDistrict {
                        district: label.clone(),
                    });
                }
                Entry::Vacant(vacant) => {
                    vacant.insert(slot);
                }
            }
        }
        Ok(Self { labels, slots })
    }

    /// Returns the index assigned to `label`.
    #[must_use]
    pub fn get(&self, label: &str) -> Option<usize> {
        self.slots.get(label).copied()
    }

    /// Returns the label stored at `slot`.
    #[must_use]
    pub fn label(&self, slot: usize) -> Option<&'a str> {
        self.labels.get(slot).map(String::as_str)
    }

    /// Returns the number of indexed districts.
    #[must_use]
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Returns `true` when no districts are indexed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Resolves both endpoints of `road`.
    ///
    /// # Errors
    /// Returns [`MstError::UnknownDistrict`] naming the first endpoint that is
    /// not indexed.
    pub fn resolve(&self, road: &Road) -> Result<(usize, usize)> {
        let lookup = |label: &str| {
            self.get(label).ok_or_else(|| MstError::UnknownDistrict {
                district: label.to_owned(),
                road: road.clone(),
            })
        };
        Ok((lookup(road.source())?, lookup(road.destination())?))
    }
}

/// A road as seen from one of its endpoints.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct HalfEdge {
    origin: usize,
    target: usize,
    cost: i64,
}

impl HalfEdge {
    /// Returns the index of the endpoint the half-edge leaves.
    #[must_use]
    #[rustfmt::skip]
    pub fn origin(&self) -> usize { self.origin }

    /// Returns the index of the far endpoint.
    #[must_use]
    #[rustfmt::skip]
    pub fn target(&self) -> usize { self.target }

    /// Returns the road cost.
    #[must_use]
    #[rustfmt::skip]
    pub fn cost(&self) -> i64 { self.cost }
}

/// Per-district half-edge lists for a [`Network`].
///
/// Every district has an entry, possibly empty. Half-edges appear in road
/// input order.
///
/// # Examples
/// ```
/// use roadnet_core::{AdjacencyView, Network, Road};
///
/// let network = Network::new(["A", "B", "C"], [Road::new("A", "B", 4)]);
/// let view = AdjacencyView::build(&network)?;
/// assert_eq!(view.neighbours("A").map(<[_]>::len), Some(1));
/// assert_eq!(view.neighbours("B").map(<[_]>::len), Some(1));
/// assert_eq!(view.neighbours("C").map(<[_]>::len), Some(0));
/// assert!(view.neighbours("Z").is_none());
/// # Ok::<(), roadnet_core::MstError>(())
/// ```
#[derive(Clone, Debug)]
pub struct AdjacencyView<'a> {
    index: DistrictIndex<'a>,
    lists: Vec<Vec<HalfEdge>>,
}

impl<'a> AdjacencyView<'a> {
    /// Derives the adjacency view of `network`.
    ///
    /// # Errors
    /// Returns [`MstError::DuplicateDistrict`] for repeated labels and
    /// [`MstError::UnknownDistrict`] for roads naming unlisted districts.
    pub fn build(network: &'a Network) -> Result<Self> {
        let index = DistrictIndex::build(network)?;
        let mut lists = vec![Vec::new(); index.len()];
        for road in network.roads() {
            let (source, destination) = index.resolve(road)?;
            let cost = road.cost();
            lists[source].push(HalfEdge {
                origin: source,
                target: destination,
                cost,
            });
            lists[destination].push(HalfEdge {
                origin: destination,
                target: source,
                cost,
            });
        }
        Ok(Self { index, lists })
    }

    /// Returns the district index backing the view.
    #[must_use]
    #[rustfmt::skip]
    pub fn index(&self) -> &DistrictIndex<'a> { &self.index }

    /// Returns the half-edges leaving the district at `slot`.
    #[must_use]
    pub fn half_edges(&self, slot: usize) -> &[HalfEdge] {
        self.lists.get(slot).map_or(&[], Vec::as_slice)
    }

    /// Returns the half-edges leaving the district labelled `label`, or
    /// `None` when the label is not part of the network.
    #[must_use]
    pub fn neighbours(&self, label: &str) -> Option<&[HalfEdge]> {
        self.index.get(label).map(|slot| self.half_edges(slot))
    }

    /// Returns the number of districts in the view.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lists.len()
    }

    /// Returns `true` when the view has no districts.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lists.is_empty()
    }

    /// Converts a half-edge back into a labelled [`Road`].
    pub(crate) fn to_road(&self, edge: HalfEdge) -> Road {
        let label = |slot| self.index.label(slot).unwrap_or_default();
        Road::new(label(edge.origin), label(edge.target), edge.cost)
    }
}
