//----------------------------------------
// Tumour volume doubling times
//----------------------------------------
use itertools::Itertools;

/// One imaging timepoint for a case: days since the first scan and the
/// measured lesion volume per site, where a site was measurable.
#[derive(Debug, Clone, PartialEq)]
pub struct VolumeObservation {
    pub case_id: String,
    pub days_since_first: f64,
    pub vol_ov: Option<f64>,
    pub vol_om: Option<f64>,
}

/// Per-case growth ratio (last over first measurable volume) and doubling
/// time per site. `None` where the case has fewer than two measurable
/// timepoints for that site.
#[derive(Debug, Clone, PartialEq)]
pub struct CaseDoubling {
    pub case_id: String,
    pub dt: f64,
    pub ratio_ov: Option<f64>,
    pub ratio_om: Option<f64>,
    pub tvdt_ov: Option<f64>,
    pub tvdt_om: Option<f64>,
}

/// Doubling time under exponential growth: a lesion that grows by `ratio`
/// over `dt_days` doubles every `dt * ln 2 / ln(ratio)` days.
pub fn doubling_time(dt_days: f64, ratio: f64) -> f64 {
    dt_days * std::f64::consts::LN_2 / ratio.ln()
}

fn site_ratio(volumes: &[f64]) -> Option<f64> {
    if volumes.len() < 2 {
        return None;
    }
    Some(volumes[volumes.len() - 1] / volumes[0])
}

/// Reduce per-timepoint observations (ordered by scan date within case) to
/// one doubling-time row per case.
pub fn case_doubling_times(observations: &[VolumeObservation]) -> Vec<CaseDoubling> {
    let groups = observations.iter().chunk_by(|o| o.case_id.clone());
    (&groups)
        .into_iter()
        .map(|(case_id, rows)| {
            let rows: Vec<&VolumeObservation> = rows.collect();
            let dt = rows[rows.len() - 1].days_since_first;
            let ov: Vec<f64> = rows.iter().filter_map(|o| o.vol_ov).collect();
            let om: Vec<f64> = rows.iter().filter_map(|o| o.vol_om).collect();
            let ratio_ov = site_ratio(&ov);
            let ratio_om = site_ratio(&om);
            CaseDoubling {
                case_id,
                dt,
                ratio_ov,
                ratio_om,
                tvdt_ov: ratio_ov.map(|r| doubling_time(dt, r)),
                tvdt_om: ratio_om.map(|r| doubling_time(dt, r)),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn doubling_once_over_dt_gives_dt() {
        assert!((doubling_time(100.0, 2.0) - 100.0).abs() < 1e-12);
    }

    #[test]
    fn three_doublings() {
        assert!((doubling_time(300.0, 8.0) - 100.0).abs() < 1e-12);
    }

    fn obs(case: &str, days: f64, ov: Option<f64>, om: Option<f64>) -> VolumeObservation {
        VolumeObservation {
            case_id: case.to_string(),
            days_since_first: days,
            vol_ov: ov,
            vol_om: om,
        }
    }

    #[test]
    fn groups_cases_and_uses_first_and_last_volumes() {
        let observations = vec![
            obs("a", 0.0, Some(1.0), Some(2.0)),
            obs("a", 50.0, Some(3.0), None),
            obs("a", 100.0, Some(4.0), Some(4.0)),
            obs("b", 0.0, Some(2.0), None),
            obs("b", 60.0, Some(8.0), None),
        ];
        let rows = case_doubling_times(&observations);
        assert_eq!(rows.len(), 2);

        assert_eq!(rows[0].case_id, "a");
        assert_eq!(rows[0].dt, 100.0);
        assert_eq!(rows[0].ratio_ov, Some(4.0));
        assert_eq!(rows[0].ratio_om, Some(2.0));
        assert!((rows[0].tvdt_ov.unwrap() - 50.0).abs() < 1e-12);
        assert!((rows[0].tvdt_om.unwrap() - 100.0).abs() < 1e-12);

        assert_eq!(rows[1].case_id, "b");
        assert_eq!(rows[1].ratio_om, None);
        assert_eq!(rows[1].tvdt_om, None);
        assert!((rows[1].tvdt_ov.unwrap() - 30.0).abs() < 1e-12);
    }

    #[test]
    fn single_timepoint_site_has_no_ratio() {
        let observations = vec![obs("c", 0.0, Some(1.0), None)];
        let rows = case_doubling_times(&observations);
        assert_eq!(rows[0].ratio_ov, None);
        assert_eq!(rows[0].tvdt_ov, None);
    }
}
