use statrs::statistics::{Data, OrderStatistics, Statistics};

use crate::analysis::types::{DetectionMarker, WooSummary};
use crate::simulation::types::TumourTrial;

fn detection_time(trial: &TumourTrial, marker: DetectionMarker) -> f64 {
    match marker {
        DetectionMarker::Ca125 => trial.time_to_ca125,
        DetectionMarker::Ultrasound => trial.time_to_us,
    }
}

/// Number of trials whose primary crosses the marker's detection limit
/// before the metastasis is seeded.
pub fn detectable_before_met(trials: &[TumourTrial], marker: DetectionMarker) -> usize {
    trials
        .iter()
        .filter(|t| t.time_to_met > detection_time(t, marker))
        .count()
}

/// Window of opportunity for the detectable-first subset: time between the
/// primary crossing the detection limit and metastasis onset, scaled by
/// `unit_per_day` (e.g. `units::MONTHS_PER_DAY` for reporting in months).
pub fn window_of_opportunity(
    trials: &[TumourTrial],
    marker: DetectionMarker,
    unit_per_day: f64,
) -> Vec<f64> {
    trials
        .iter()
        .filter(|t| t.time_to_met > detection_time(t, marker))
        .map(|t| (t.time_to_met - detection_time(t, marker)) * unit_per_day)
        .collect()
}

/// Standard descriptive reduction over a series: count, mean, sample
/// standard deviation, min, quartiles, max. `None` for an empty series.
pub fn describe(series: &[f64]) -> Option<WooSummary> {
    if series.is_empty() {
        return None;
    }
    let mut data = Data::new(series.to_vec());
    Some(WooSummary {
        count: series.len(),
        mean: series.mean(),
        std_dev: series.std_dev(),
        min: series.min(),
        lower_quartile: data.lower_quartile(),
        median: data.median(),
        upper_quartile: data.upper_quartile(),
        max: series.max(),
    })
}
