//! Roadnet core library.
//!
//! Computes minimum spanning trees over city road networks with two
//! independent engines and reports comparable metrics for each.
//!
//! # Determinism
//!
//! Both engines resolve cost ties without consulting hash order. Kruskal
//! stable-sorts roads by cost, so equal-cost roads are tried in input order.
//! Prim's frontier orders half-edges by `(cost, push sequence)`, so the
//! half-edge pushed first wins a tie. [`normalize`] then orients and sorts the
//! selected edges so the two engines' outputs can be compared directly.
//!
//! # Metrics
//!
//! When the `metrics` feature is enabled every engine run emits:
//!
//! - `mst_runs_total` (counter, labelled by `algorithm`)
//! - `mst_operations_total` (counter, labelled by `algorithm`)
//! - `mst_elapsed_seconds` (histogram, labelled by `algorithm`)
#![cfg_attr(docsrs, feature(doc_cfg))]

mod disjoint_set;
mod error;
mod graph;
mod mst;
mod network;
mod normalize;
mod solve;

#[cfg(test)]
mod test_utils;

pub use crate::{
    disjoint_set::DisjointSet,
    error::{DisjointSetError, DisjointSetErrorCode, MstError, MstErrorCode, Result},
    graph::{AdjacencyView, DistrictIndex, HalfEdge},
    mst::{Algorithm, MstResult, run_kruskal, run_prim},
    network::{Network, NetworkStats, Road},
    normalize::normalize,
    solve::{
        AlgorithmRun, NetworkSolution, estimated_operations, solve, solve_batch,
        solve_batch_with_ids,
    },
};
