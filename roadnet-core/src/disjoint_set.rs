//! Union-find (disjoint set union) over arbitrary hashable keys.
//!
//! Keys are mapped to dense indices on registration; parent links and ranks
//! live in index-addressed arrays, so the key lookup happens only at the
//! public boundary. Root lookups compress paths iteratively and unions attach
//! by rank.
//!
//! Every primitive step is tallied in an explicit operation counter that
//! callers read back through [`DisjointSet::operations`]:
//!
//! - `create_set` counts one operation;
//! - every root lookup counts one operation, including the two lookups
//!   performed by `union`;
//! - a union that merges two components counts one further operation.

use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;

use crate::error::DisjointSetError;

/// Partition of registered keys into disjoint components.
///
/// When two roots of equal rank are merged, the root of the *first* argument
/// to [`DisjointSet::union`] becomes the new root and its rank increases.
///
/// # Examples
/// ```
/// use roadnet_core::DisjointSet;
///
/// let mut set = DisjointSet::new();
/// for district in ["A", "B", "C"] {
///     set.create_set(district)?;
/// }
/// assert!(set.union(&"A", &"B")?);
/// assert!(!set.union(&"B", &"A")?);
/// assert_eq!(set.find_root(&"B")?, "A");
/// assert_eq!(set.component_count(), 2);
/// # Ok::<(), roadnet_core::DisjointSetError>(())
/// ```
#[derive(Clone, Debug)]
pub struct DisjointSet<K> {
    index: HashMap<K, usize>,
    keys: Vec<K>,
    parent: Vec<usize>,
    rank: Vec<u32>,
    components: usize,
    operations: u64,
}

impl<K> Default for DisjointSet<K> {
    fn default() -> Self {
        Self {
            index: HashMap::new(),
            keys: Vec::new(),
            parent: Vec::new(),
            rank: Vec::new(),
            components: 0,
            operations: 0,
        }
    }
}

impl<K> DisjointSet<K>
where
    K: Clone + Eq + Hash + fmt::Display,
{
    /// Creates an empty disjoint set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty disjoint set with room for `capacity` keys.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            index: HashMap::with_capacity(capacity),
            keys: Vec::with_capacity(capacity),
            parent: Vec::with_capacity(capacity),
            rank: Vec::with_capacity(capacity),
            components: 0,
            operations: 0,
        }
    }

    /// Registers `key` as a singleton component with rank zero.
    ///
    /// # Errors
    /// Returns [`DisjointSetError::DuplicateElement`] when `key` is already
    /// registered; the existing component is left untouched.
    pub fn create_set(&mut self, key: K) -> Result<(), DisjointSetError> {
        if self.index.contains_key(&key) {
            return Err(DisjointSetError::DuplicateElement {
                element: key.to_string(),
            });
        }
        let slot = self.keys.len();
        self.index.insert(key.clone(), slot);
        self.keys.push(key);
        self.parent.push(slot);
        self.rank.push(0);
        self.components = self.components.saturating_add(1);
        self.tick();
        Ok(())
    }

    /// Returns the representative of the component containing `key`.
    ///
    /// Every node visited on the way to the root is re-linked directly to
    /// the root.
    ///
    /// # Errors
    /// Returns [`DisjointSetError::UnknownElement`] when `key` was never
    /// registered.
    pub fn find_root(&mut self, key: &K) -> Result<K, DisjointSetError> {
        let slot = self.slot(key)?;
        let root = self.find_slot(slot);
        Ok(self.keys[root].clone())
    }

    /// Merges the components containing `left` and `right`.
    ///
    /// Returns `true` when two components were merged and `false` when both
    /// keys already shared a root, in which case nothing changes.
    ///
    /// # Errors
    /// Returns [`DisjointSetError::UnknownElement`] when either key was never
    /// registered.
    pub fn union(&mut self, left: &K, right: &K) -> Result<bool, DisjointSetError> {
        let left_slot = self.slot(left)?;
        let right_slot = self.slot(right)?;
        let left_root = self.find_slot(left_slot);
        let right_root = self.find_slot(right_slot);
        if left_root == right_root {
            return Ok(false);
        }

        let (parent, child) = choose_parent_child(
            left_root,
            right_root,
            self.rank[left_root],
            self.rank[right_root],
        );
        self.parent[child] = parent;
        if self.rank[parent] == self.rank[child] {
            self.rank[parent] = self.rank[parent].saturating_add(1);
        }
        self.components = self.components.saturating_sub(1);
        self.tick();
        Ok(true)
    }

    /// Returns `true` when both keys belong to the same component.
    ///
    /// # Errors
    /// Returns [`DisjointSetError::UnknownElement`] when either key was never
    /// registered.
    pub fn same_set(&mut self, left: &K, right: &K) -> Result<bool, DisjointSetError> {
        let left_slot = self.slot(left)?;
        let right_slot = self.slot(right)?;
        Ok(self.find_slot(left_slot) == self.find_slot(right_slot))
    }

    /// Returns `true` when `key` has been registered.
    #[must_use]
    pub fn contains(&self, key: &K) -> bool {
        self.index.contains_key(key)
    }

    fn slot(&self, key: &K) -> Result<usize, DisjointSetError> {
        self.index
            .get(key)
            .copied()
            .ok_or_else(|| DisjointSetError::UnknownElement {
                element: key.to_string(),
            })
    }

    fn find_slot(&mut self, mut node: usize) -> usize {
        self.tick();
        let mut root = node;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        while self.parent[node] != node {
            let parent = self.parent[node];
            self.parent[node] = root;
            node = parent;
        }

        root
    }
}

impl<K> DisjointSet<K> {
    /// Returns the number of registered keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Returns `true` when no keys are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Returns the number of disjoint components.
    #[must_use]
    #[rustfmt::skip]
    pub fn component_count(&self) -> usize { self.components }

    /// Returns the number of primitive operations performed so far.
    #[must_use]
    #[rustfmt::skip]
    pub fn operations(&self) -> u64 { self.operations }

    fn tick(&mut self) {
        self.operations = self.operations.saturating_add(1);
    }
}

/// Selects `(parent, child)` roots for a merge.
///
/// The higher-rank root wins; on equal rank the left root wins.
fn choose_parent_child(
    left_root: usize,
    right_root: usize,
    left_rank: u32,
    right_rank: u32,
) -> (usize, usize) {
    if right_rank > left_rank {
        (right_root, left_root)
    } else {
        (left_root, right_root)
    }
}
