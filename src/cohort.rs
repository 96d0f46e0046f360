//----------------------------------------
// Fitted cohort constants
//----------------------------------------
//! Population parameters estimated upstream from the longitudinal imaging
//! cohort: per-site Gompertz decay-rate distributions from a nonlinear
//! mixed-effects fit, and the primary-tumour volumes at metastasis onset
//! for the 11 cases with growing lesions in both sites.

use crate::sampler::types::SiteParams;

/// Volume of a single malignant cell (cm3); every simulated tumour starts
/// here.
pub const V0: f64 = 1e-9;

/// Smallest volume detectable through a CA125 rise (cm3).
pub const CA125_LIMIT: f64 = 0.015;

/// Smallest volume detectable on ultrasound (cm3).
pub const US_LIMIT: f64 = 0.5;

/// 4 of the 11 two-site cases had omental disease first.
pub const P_OMENTAL_PRIMARY: f64 = 4.0 / 11.0;

/// Estimated primary-tumour volume (cm3) at metastasis onset, one entry per
/// two-site case.
pub const SIZE_AT_MET_POOL: [f64; 11] = [
    6.58634689e-07,
    7.49423904e-04,
    1.39645166e-02,
    8.36070562e-02,
    3.88565349e-01,
    1.04536906,
    1.22672942,
    2.45892441,
    3.67071643,
    3.87580839,
    3.99019334,
];

// The fit estimates the variance of log(beta); the sampler wants the std.

pub fn ovarian_params() -> SiteParams {
    SiteParams {
        max_volume: 5000.0,
        ln_beta_mean: -5.7905,
        ln_beta_std: 0.8802_f64.sqrt(),
    }
}

pub fn omental_params() -> SiteParams {
    SiteParams {
        max_volume: 3000.0,
        ln_beta_mean: -5.5188,
        ln_beta_std: 0.8799_f64.sqrt(),
    }
}
