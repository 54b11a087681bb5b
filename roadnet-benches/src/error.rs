//! Benchmark setup error type.

use roadnet_core::MstError;

use crate::synthetic::SyntheticError;

/// Errors that may occur while preparing benchmark inputs.
#[derive(Debug, thiserror::Error)]
pub enum BenchSetupError {
    /// Synthetic network generation failed.
    #[error("synthetic network generation failed: {0}")]
    Synthetic(#[from] SyntheticError),
    /// A warm-up solve failed.
    #[error("MST computation failed: {0}")]
    Mst(#[from] MstError),
}
