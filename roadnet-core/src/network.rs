//! City network model: districts, roads, and input statistics.
//!
//! A [`Network`] is built once from parsed input and never mutated. District
//! order is significant because it selects Prim's start vertex.

use std::cmp::Ordering;
use std::fmt;

/// An undirected road between two districts with an integer construction cost.
///
/// `Road::new("a", "b", 3)` and `Road::new("b", "a", 3)` describe the same
/// road; [`Road::canonical`] maps both to one orientation.
///
/// # Examples
/// ```
/// use roadnet_core::Road;
///
/// let road = Road::new("Zeta", "Alpha", 7);
/// let canonical = road.canonical();
/// assert_eq!(canonical.source(), "Alpha");
/// assert_eq!(canonical.destination(), "Zeta");
/// assert_eq!(canonical.cost(), 7);
/// ```
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Road {
    source: String,
    destination: String,
    cost: i64,
}

impl Road {
    /// Creates a road between `source` and `destination`.
    #[must_use]
    pub fn new(source: impl Into<String>, destination: impl Into<String>, cost: i64) -> Self {
        Self {
            source: source.into(),
            destination: destination.into(),
            cost,
        }
    }

    /// Returns the district the road is oriented from.
    #[must_use]
    #[rustfmt::skip]
    pub fn source(&self) -> &str { &self.source }

    /// Returns the district the road is oriented towards.
    #[must_use]
    #[rustfmt::skip]
    pub fn destination(&self) -> &str { &self.destination }

    /// Returns the construction cost.
    #[must_use]
    #[rustfmt::skip]
    pub fn cost(&self) -> i64 { self.cost }

    /// Returns the same road with its endpoints swapped.
    #[must_use]
    pub fn reversed(&self) -> Self {
        Self {
            source: self.destination.clone(),
            destination: self.source.clone(),
            cost: self.cost,
        }
    }

    /// Returns the road oriented so the lexicographically smaller label is
    /// the source.
    #[must_use]
    pub fn canonical(&self) -> Self {
        if self.source <= self.destination {
            self.clone()
        } else {
            self.reversed()
        }
    }

    /// Returns `true` when both roads join the same pair of districts at the
    /// same cost, regardless of orientation.
    ///
    /// # Examples
    /// ```
    /// use roadnet_core::Road;
    ///
    /// assert!(Road::new("a", "b", 1).same_road(&Road::new("b", "a", 1)));
    /// assert!(!Road::new("a", "b", 1).same_road(&Road::new("a", "b", 2)));
    /// ```
    #[must_use]
    pub fn same_road(&self, other: &Self) -> bool {
        self.canonical() == other.canonical()
    }

    /// Orders roads by `(cost, source, destination)`.
    pub(crate) fn cmp_canonical_key(&self, other: &Self) -> Ordering {
        self.cost
            .cmp(&other.cost)
            .then_with(|| self.source.cmp(&other.source))
            .then_with(|| self.destination.cmp(&other.destination))
    }
}

impl fmt::Display for Road {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}:{}", self.source, self.destination, self.cost)
    }
}

impl<S: Into<String>, D: Into<String>> From<(S, D, i64)> for Road {
    fn from((source, destination, cost): (S, D, i64)) -> Self {
        Self::new(source, destination, cost)
    }
}

/// A city network: an ordered list of districts and the candidate roads
/// between them.
///
/// The network does not validate its contents. Duplicate district labels and
/// roads naming unlisted districts are reported by the engines when they
/// resolve labels.
///
/// # Examples
/// ```
/// use roadnet_core::{Network, Road};
///
/// let network = Network::new(
///     ["A", "B", "C"],
///     [Road::new("A", "B", 1), Road::new("B", "C", 2)],
/// );
/// assert_eq!(network.district_count(), 3);
/// assert_eq!(network.road_count(), 2);
/// assert_eq!(network.start_district(), Some("A"));
/// ```
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Network {
    districts: Vec<String>,
    roads: Vec<Road>,
}

impl Network {
    /// Creates a network from districts (in significant order) and roads.
    #[must_use]
    pub fn new<I, S, R>(districts: I, roads: R) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
        R: IntoIterator<Item = Road>,
    {
        Self {
            districts: districts.into_iter().map(Into::into).collect(),
            roads: roads.into_iter().collect(),
        }
    }

    /// Returns the districts in input order.
    #[must_use]
    #[rustfmt::skip]
    pub fn districts(&self) -> &[String] { &self.districts }

    /// Returns the roads in input order.
    #[must_use]
    #[rustfmt::skip]
    pub fn roads(&self) -> &[Road] { &self.roads }

    /// Returns the number of districts.
    #[must_use]
    pub fn district_count(&self) -> usize {
        self.districts.len()
    }

    /// Returns the number of roads.
    #[must_use]
    pub fn road_count(&self) -> usize {
        self.roads.len()
    }

    /// Returns `true` when the network has no districts.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.districts.is_empty()
    }

    /// Returns the district Prim's engine starts from.
    #[must_use]
    pub fn start_district(&self) -> Option<&str> {
        self.districts.first().map(String::as_str)
    }

    /// Returns the edge count of a spanning tree over every district.
    pub(crate) fn spanning_edge_target(&self) -> usize {
        self.districts.len().saturating_sub(1)
    }

    /// Summarises the size of the network.
    #[must_use]
    pub fn stats(&self) -> NetworkStats {
        NetworkStats {
            vertices: self.district_count(),
            edges: self.road_count(),
        }
    }
}

/// Vertex and edge counts for a [`Network`].
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct NetworkStats {
    /// Number of districts.
    pub vertices: usize,
    /// Number of roads.
    pub edges: usize,
}
