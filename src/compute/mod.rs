//----------------------------------------
// compute mod
//----------------------------------------
pub use crate::analysis::types::{DetectionMarker, WooSummary};
pub use crate::analysis::woo::{describe, detectable_before_met, window_of_opportunity};
pub use crate::gompertz::growth::GompertzCurve;
pub use crate::sampler::draw::draw_trial;
pub use crate::sampler::types::{SiteParams, TrialDraw};
pub use crate::simulation::run::run_population_sim;
pub use crate::simulation::types::{SimOutcome, SimSettings, TumourTrial};
pub use crate::tvdt::{CaseDoubling, VolumeObservation, case_doubling_times, doubling_time};
