//! Canonical ordering of MST edges.

use crate::network::Road;

/// Returns `edges` oriented and ordered independently of the engine that
/// produced them.
///
/// Each road is oriented so the lexicographically smaller label is the
/// source, then the list is sorted by `(cost, source, destination)`. The
/// function is idempotent.
///
/// # Examples
/// ```
/// use roadnet_core::{Road, normalize};
///
/// let edges = [Road::new("C", "B", 2), Road::new("B", "A", 1)];
/// assert_eq!(
///     normalize(&edges),
///     vec![Road::new("A", "B", 1), Road::new("B", "C", 2)],
/// );
/// ```
#[must_use]
pub fn normalize(edges: &[Road]) -> Vec<Road> {
    let mut canonical: Vec<Road> = edges.iter().map(Road::canonical).collect();
    canonical.sort_by(Road::cmp_canonical_key);
    canonical
}
