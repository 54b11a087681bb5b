//! Property 2: structural invariants.
//!
//! For both engines' output verifies:
//!
//! - **Provenance**: every selected edge is an input road.
//! - **No self-loops**.
//! - **Acyclicity**, checked with a fresh union-find.
//! - **Edge count**: `V - C` for Kruskal, start component size minus one
//!   for Prim.
//! - **Cost accounting**: `total_cost` equals the sum of edge costs.
//! - **Normalization**: normalizing twice changes nothing.

use std::collections::HashMap;

use proptest::test_runner::{TestCaseError, TestCaseResult};

use crate::{
    mst::{Algorithm, MstResult},
    network::Road,
    normalize::normalize,
};

use super::helpers::{Labels, component_labels, find_root, total_cost};
use super::types::NetworkFixture;

/// Runs the structural invariant property for both engines.
pub(super) fn run_structural_invariants_property(fixture: &NetworkFixture) -> TestCaseResult {
    for algorithm in Algorithm::ALL {
        let result = algorithm.run(&fixture.network).map_err(|err| {
            TestCaseError::fail(format!("{algorithm} failed: {err} ({})", fixture.describe()))
        })?;
        let context = Context { fixture, algorithm };
        context.validate_provenance(&result)?;
        context.validate_no_self_loops(&result)?;
        context.validate_acyclic_and_sized(&result)?;
        context.validate_cost(&result)?;
        context.validate_normalization(&result)?;
    }
    Ok(())
}

struct Context<'a> {
    fixture: &'a NetworkFixture,
    algorithm: Algorithm,
}

impl Context<'_> {
    fn fail(&self, message: impl std::fmt::Display) -> TestCaseError {
        TestCaseError::fail(format!(
            "{}: {message} ({})",
            self.algorithm,
            self.fixture.describe()
        ))
    }

    /// Every selected edge must consume one distinct input road.
    fn validate_provenance(&self, result: &MstResult) -> TestCaseResult {
        let mut available: HashMap<Road, usize> = HashMap::new();
        for road in self.fixture.network.roads() {
            *available.entry(road.canonical()).or_default() += 1;
        }
        for (i, edge) in result.edges().iter().enumerate() {
            let slot = available
                .get_mut(&edge.canonical())
                .filter(|remaining| **remaining > 0)
                .ok_or_else(|| self.fail(format!("edge {i} ({edge}) is not an unused input road")))?;
            *slot -= 1;
        }
        Ok(())
    }

    fn validate_no_self_loops(&self, result: &MstResult) -> TestCaseResult {
        match result
            .edges()
            .iter()
            .position(|edge| edge.source() == edge.destination())
        {
            Some(i) => Err(self.fail(format!("edge {i} is a self-loop"))),
            None => Ok(()),
        }
    }

    fn validate_acyclic_and_sized(&self, result: &MstResult) -> TestCaseResult {
        let network = &self.fixture.network;
        let labels = Labels::new(network);
        let count = network.district_count();
        let mut parent: Vec<usize> = (0..count).collect();
        for (i, edge) in result.edges().iter().enumerate() {
            let indexed = labels
                .index(edge)
                .ok_or_else(|| self.fail(format!("edge {i} names an unknown district")))?;
            let a = find_root(&mut parent, indexed.source);
            let b = find_root(&mut parent, indexed.destination);
            if a == b {
                return Err(self.fail(format!("edge {i} ({edge}) closes a cycle")));
            }
            parent[b] = a;
        }

        let roads = labels
            .index_all(network.roads())
            .ok_or_else(|| self.fail("input road names an unknown district"))?;
        let components = component_labels(count, &roads);
        let expected = match self.algorithm {
            Algorithm::Kruskal => {
                let mut roots = components.clone();
                roots.sort_unstable();
                roots.dedup();
                count - roots.len()
            }
            Algorithm::Prim => components.first().map_or(0, |&start| {
                components.iter().filter(|&&root| root == start).count() - 1
            }),
        };
        if result.edge_count() == expected {
            Ok(())
        } else {
            Err(self.fail(format!(
                "edge count {} but expected {expected}",
                result.edge_count()
            )))
        }
    }

    fn validate_cost(&self, result: &MstResult) -> TestCaseResult {
        let summed = total_cost(result.edges());
        if i128::from(result.total_cost()) == summed {
            Ok(())
        } else {
            Err(self.fail(format!(
                "total_cost {} differs from edge sum {summed}",
                result.total_cost()
            )))
        }
    }

    fn validate_normalization(&self, result: &MstResult) -> TestCaseResult {
        let once = normalize(result.edges());
        if normalize(&once) == once && once.len() == result.edge_count() {
            Ok(())
        } else {
            Err(self.fail("normalize is not idempotent on engine output"))
        }
    }
}
