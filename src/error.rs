use thiserror::Error;

/// Rejected input to [`crate::test`] or [`crate::SamplePair::new`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("samples must contain exactly two samples, got {0}")]
    SampleCount(usize),

    #[error("sample {0} cannot be empty")]
    EmptySample(usize),
}

/// The normal approximation has no defined standard deviation for this
/// input, so no critical value exists. Happens when every pooled
/// observation is identical (the tie correction cancels the variance).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("standard deviation of the U distribution is zero or undefined (n0={n0}, n1={n1})")]
pub struct DegenerateInputError {
    pub n0: usize,
    pub n1: usize,
}
