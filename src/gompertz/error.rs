//----------------------------------------
// gompertz errors
//----------------------------------------
use crate::error::MetsimErr;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GompertzErr {
    #[error("decay rate should be positive; got {0}")]
    NonPositiveDecayRate(f64),
    #[error("carrying capacity parameter should be positive; got {0}")]
    NonPositiveCapacity(f64),
    #[error("initial volume should be positive; got {0}")]
    NonPositiveInitialVolume(f64),
    #[error("volume should be strictly between {v0:e} and {vmax:e}; got {volume:e}")]
    VolumeOutOfRange { volume: f64, v0: f64, vmax: f64 },
}

impl Into<MetsimErr> for GompertzErr {
    fn into(self) -> MetsimErr {
        MetsimErr::Gompertz(self)
    }
}
