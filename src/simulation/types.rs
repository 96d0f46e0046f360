//----------------------------------------
// simulation mod types
//----------------------------------------

/// Population simulation settings. Defaults reproduce the published
/// analysis: 10,000 tumours grown from a single malignant cell
/// (`v0` = 1e-9 cm3) against the CA125 (0.015 cm3) and ultrasound
/// (0.5 cm3) detection limits, with 4 of 11 cohort cases omental-first.
#[derive(Debug, Clone, Copy)]
pub struct SimSettings {
    pub seed: u64,
    pub n_trials: usize,
    pub v0: f64,
    pub ca125_limit: f64,
    pub us_limit: f64,
    pub p_omental_primary: f64,
    pub max_draw_attempts: usize,
}

impl Default for SimSettings {
    fn default() -> Self {
        Self {
            seed: 24601,
            n_trials: 10000,
            v0: 1e-9,
            ca125_limit: 0.015,
            us_limit: 0.5,
            p_omental_primary: 4.0 / 11.0,
            max_draw_attempts: 100,
        }
    }
}

/// One fully simulated tumour. Constructed in a single pass and never
/// mutated; times are in days, volumes in cm3. The metastasis sizes may lie
/// below `v0` when detection precedes metastasis onset; downstream analysis
/// decides what that means.
#[derive(Debug, Clone, PartialEq)]
pub struct TumourTrial {
    pub trial: usize,
    pub omental_primary: bool,
    pub size_at_met: f64,
    pub beta_primary: f64,
    pub beta_met: f64,
    pub time_to_met: f64,
    pub time_to_ca125: f64,
    pub time_to_us: f64,
    pub met_size_at_ca125: f64,
    pub met_size_at_us: f64,
}

/// The result table plus the number of trials whose draws kept landing
/// outside the invertible volume range and were given up on.
#[derive(Debug)]
pub struct SimOutcome {
    pub trials: Vec<TumourTrial>,
    pub discarded: usize,
}
