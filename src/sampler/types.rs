//----------------------------------------
// sampler mod types
//----------------------------------------
use crate::error::MetsimErr;
use crate::sampler::error::SamplerErr;

/// Per-site Gompertz population parameters estimated upstream with a
/// nonlinear mixed-effects fit: the site's maximum volume (cm3) and the mean
/// and standard deviation of the log decay rate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SiteParams {
    pub max_volume: f64,
    pub ln_beta_mean: f64,
    pub ln_beta_std: f64,
}

impl SiteParams {
    pub fn new(max_volume: f64, ln_beta_mean: f64, ln_beta_std: f64) -> Result<Self, MetsimErr> {
        if max_volume <= 0.0 {
            return Err(SamplerErr::NonPositiveMaxVolume(max_volume).into());
        }
        if ln_beta_std < 0.0 {
            return Err(SamplerErr::NegativeLnBetaStd(ln_beta_std).into());
        }
        Ok(Self {
            max_volume,
            ln_beta_mean,
            ln_beta_std,
        })
    }
}

/// The random quantities drawn for one simulated tumour, before any growth
/// times are computed.
#[derive(Debug, Clone, Copy)]
pub struct TrialDraw {
    pub omental_primary: bool,
    pub size_at_met: f64,
    pub beta_primary: f64,
    pub beta_met: f64,
}
