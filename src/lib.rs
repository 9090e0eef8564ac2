mod error;
mod ranking;
mod sample;

pub use error::{DegenerateInputError, ValidationError};
pub use ranking::{rank, rank_sum, RankedObservation};
pub use sample::SamplePair;
pub use u_test::{check, critical_value, run, significant, test, u_value, UPair};
