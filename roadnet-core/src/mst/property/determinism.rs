//! Property 3: determinism.
//!
//! Re-running either engine on the same network yields the identical edge
//! list and operation count. Solving a batch of copies, which fans out
//! across threads when the `cpu` feature is enabled, yields the same
//! solution for every copy.

use proptest::test_runner::{TestCaseError, TestCaseResult};

use crate::{
    mst::{Algorithm, MstResult},
    network::{Network, Road},
    solve::{NetworkSolution, solve_batch},
};

use super::types::NetworkFixture;

/// Number of repeated runs and batch copies per fixture.
const REPETITIONS: usize = 4;

/// Runs the determinism property for the given fixture.
pub(super) fn run_determinism_property(fixture: &NetworkFixture) -> TestCaseResult {
    for algorithm in Algorithm::ALL {
        let baseline = fingerprint(algorithm.run(&fixture.network), fixture)?;
        for run in 1..REPETITIONS {
            let again = fingerprint(algorithm.run(&fixture.network), fixture)?;
            if again != baseline {
                return Err(TestCaseError::fail(format!(
                    "{algorithm} run {run} diverged: baseline={baseline:?}, run={again:?} ({})",
                    fixture.describe(),
                )));
            }
        }
    }

    let copies: Vec<Network> = vec![fixture.network.clone(); REPETITIONS];
    let solutions = solve_batch(&copies)
        .into_iter()
        .collect::<crate::Result<Vec<NetworkSolution>>>()
        .map_err(|err| TestCaseError::fail(format!("batch failed: {err} ({})", fixture.describe())))?;
    let reference: Vec<_> = solutions.iter().map(solution_fingerprint).collect();
    for (i, solution) in solutions.iter().enumerate() {
        let expected_id = u64::try_from(i + 1).unwrap_or(u64::MAX);
        if solution.graph_id() != expected_id {
            return Err(TestCaseError::fail(format!(
                "batch entry {i} has graph id {}",
                solution.graph_id()
            )));
        }
        if solution_fingerprint(solution) != reference[0] {
            return Err(TestCaseError::fail(format!(
                "batch entry {i} diverged ({})",
                fixture.describe()
            )));
        }
    }
    Ok(())
}

type Fingerprint = (Vec<Road>, i64, u64);

fn fingerprint(
    outcome: crate::Result<MstResult>,
    fixture: &NetworkFixture,
) -> Result<Fingerprint, TestCaseError> {
    let result = outcome
        .map_err(|err| TestCaseError::fail(format!("engine failed: {err} ({})", fixture.describe())))?;
    Ok(of_result(&result))
}

fn of_result(result: &MstResult) -> Fingerprint {
    (
        result.edges().to_vec(),
        result.total_cost(),
        result.operation_count(),
    )
}

fn solution_fingerprint(solution: &NetworkSolution) -> (Fingerprint, Fingerprint) {
    (
        of_result(solution.kruskal().result()),
        of_result(solution.prim().result()),
    )
}
