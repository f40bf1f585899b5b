use crate::allocate::AllocateError;
use thiserror::Error;

/// A candidate strategy produced output different from the reference.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VerifyError {
    /// Destination `channel` differs from the reference, first at `frame`.
    #[error("Results not equal: {variant} channel {channel} (first difference at frame {frame})")]
    Mismatch {
        variant: &'static str,
        channel: usize,
        frame: usize,
    },

    /// Buffers for the check could not be allocated.
    #[error(transparent)]
    Allocate(#[from] AllocateError),
}

/// Failure while benchmarking a variant.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HarnessError {
    #[error(transparent)]
    Verify(#[from] VerifyError),
    #[error(transparent)]
    Allocate(#[from] AllocateError),
}

impl HarnessError {
    /// Whether this error is a detected defect in a strategy, rather than a resource failure.
    pub fn is_verification_failure(&self) -> bool {
        matches!(self, HarnessError::Verify(VerifyError::Mismatch { .. }))
    }
}
