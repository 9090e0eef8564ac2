use crate::error::ValidationError;

/// Exactly two non-empty samples. Construction through [`SamplePair::new`]
/// is the only validation point; code holding a `SamplePair` never has to
/// re-check the pair invariant.
#[derive(Debug, Clone)]
pub struct SamplePair {
    samples: [Vec<f64>; 2],
}

impl SamplePair {
    pub fn new(samples: &[Vec<f64>]) -> Result<Self, ValidationError> {
        if samples.len() != 2 {
            return Err(ValidationError::SampleCount(samples.len()));
        }
        for (i, sample) in samples.iter().enumerate() {
            if sample.is_empty() {
                return Err(ValidationError::EmptySample(i));
            }
        }
        Ok(Self {
            samples: [samples[0].clone(), samples[1].clone()],
        })
    }

    pub fn sample(&self, index: usize) -> &[f64] {
        &self.samples[index]
    }

    pub fn sizes(&self) -> (usize, usize) {
        (self.samples[0].len(), self.samples[1].len())
    }

    /// Both samples concatenated, first sample first. Concatenation order
    /// does not affect any result computed from the pool.
    pub fn pooled(&self) -> Vec<f64> {
        let mut pool = Vec::with_capacity(self.samples[0].len() + self.samples[1].len());
        pool.extend_from_slice(&self.samples[0]);
        pool.extend_from_slice(&self.samples[1]);
        pool
    }
}
