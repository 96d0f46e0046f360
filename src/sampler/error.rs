//----------------------------------------
// sampler errors
//----------------------------------------
use crate::error::MetsimErr;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SamplerErr {
    #[error("site maximum volume should be positive; got {0}")]
    NonPositiveMaxVolume(f64),
    #[error("log decay-rate standard deviation should be non-negative; got {0}")]
    NegativeLnBetaStd(f64),
    #[error("size-at-metastasis pool was empty")]
    EmptyPool,
    #[error("size-at-metastasis pool entry {index} should be positive; got {value}")]
    NonPositivePoolEntry { index: usize, value: f64 },
    #[error("primary-site probability should be in [0, 1]; got {0}")]
    BadProbability(f64),
}

impl Into<MetsimErr> for SamplerErr {
    fn into(self) -> MetsimErr {
        MetsimErr::Sampler(self)
    }
}
