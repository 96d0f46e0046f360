use rand::{SeedableRng, rngs};
use rayon::prelude::*;

use crate::error::MetsimErr;
use crate::gompertz::error::GompertzErr;
use crate::gompertz::growth::GompertzCurve;
use crate::sampler::draw::draw_trial;
use crate::sampler::error::SamplerErr;
use crate::sampler::types::{SiteParams, TrialDraw};
use crate::simulation::error::SimulationErr;
use crate::simulation::types::{SimOutcome, SimSettings, TumourTrial};

// Trials per worker chunk. Each chunk owns its own seeded rng, so the result
// table is identical for any thread count.
const CHUNK_SIZE: usize = 1024;

/// Run `settings.n_trials` independent tumour simulations and materialize
/// the result table, in trial order.
///
/// Configuration errors (empty pool, detection limit outside the invertible
/// range, bad probability) abort the run before any trial. A draw whose
/// size-at-metastasis cannot be inverted on the sampled curve is redrawn up
/// to `settings.max_draw_attempts` times, then counted as discarded.
pub fn run_population_sim(
    settings: &SimSettings,
    ovarian: &SiteParams,
    omental: &SiteParams,
    size_at_met_pool: &[f64],
) -> Result<SimOutcome, MetsimErr> {
    validate_inputs(settings, ovarian, omental, size_at_met_pool)?;

    tracing::info!(
        n_trials = settings.n_trials,
        seed = settings.seed,
        "starting population simulation"
    );

    let n_chunks = settings.n_trials.div_ceil(CHUNK_SIZE);
    let partials: Vec<(Vec<TumourTrial>, usize)> = (0..n_chunks)
        .into_par_iter()
        .map(|chunk| {
            let mut rng = rngs::StdRng::seed_from_u64(settings.seed + (chunk as u64));
            let start = chunk * CHUNK_SIZE;
            let end = ((chunk + 1) * CHUNK_SIZE).min(settings.n_trials);
            let mut trials = Vec::with_capacity(end - start);
            let mut discarded = 0;
            for trial in start..end {
                match sim_one_tumour(
                    trial,
                    &mut rng,
                    settings,
                    ovarian,
                    omental,
                    size_at_met_pool,
                )? {
                    Some(t) => trials.push(t),
                    None => discarded += 1,
                }
            }
            Ok((trials, discarded))
        })
        .collect::<Result<_, MetsimErr>>()?;

    let mut trials = Vec::with_capacity(settings.n_trials);
    let mut discarded = 0;
    for (partial, partial_discarded) in partials {
        trials.extend(partial);
        discarded += partial_discarded;
    }

    if discarded > 0 {
        tracing::warn!(
            discarded,
            max_draw_attempts = settings.max_draw_attempts,
            "some trials never produced an invertible draw"
        );
    }
    tracing::info!(simulated = trials.len(), discarded, "population simulation finished");

    Ok(SimOutcome { trials, discarded })
}

// Redraw on an out-of-range volume; any other error is a configuration bug
// and aborts the run.
fn sim_one_tumour(
    trial: usize,
    rng: &mut rngs::StdRng,
    settings: &SimSettings,
    ovarian: &SiteParams,
    omental: &SiteParams,
    size_at_met_pool: &[f64],
) -> Result<Option<TumourTrial>, MetsimErr> {
    for _ in 0..settings.max_draw_attempts {
        let draw = draw_trial(
            rng,
            ovarian,
            omental,
            size_at_met_pool,
            settings.p_omental_primary,
        );
        match grow_tumour(trial, &draw, settings, ovarian, omental) {
            Ok(t) => return Ok(Some(t)),
            Err(MetsimErr::Gompertz(GompertzErr::VolumeOutOfRange { .. })) => continue,
            Err(e) => return Err(e),
        }
    }
    Ok(None)
}

fn grow_tumour(
    trial: usize,
    draw: &TrialDraw,
    settings: &SimSettings,
    ovarian: &SiteParams,
    omental: &SiteParams,
) -> Result<TumourTrial, MetsimErr> {
    let (primary_site, met_site) = if draw.omental_primary {
        (omental, ovarian)
    } else {
        (ovarian, omental)
    };

    let primary = GompertzCurve::from_max_volume(primary_site.max_volume, draw.beta_primary, settings.v0)?;
    let metastasis = GompertzCurve::from_max_volume(met_site.max_volume, draw.beta_met, settings.v0)?;

    let time_to_met = primary.time_to_volume(draw.size_at_met)?;
    let time_to_ca125 = primary.time_to_volume(settings.ca125_limit)?;
    let time_to_us = primary.time_to_volume(settings.us_limit)?;

    // The secondary lesion starts growing at time_to_met; a negative offset
    // puts its volume below v0, meaning it was not yet seeded at detection.
    let met_size_at_ca125 = metastasis.volume_at(time_to_ca125 - time_to_met);
    let met_size_at_us = metastasis.volume_at(time_to_us - time_to_met);

    Ok(TumourTrial {
        trial,
        omental_primary: draw.omental_primary,
        size_at_met: draw.size_at_met,
        beta_primary: draw.beta_primary,
        beta_met: draw.beta_met,
        time_to_met,
        time_to_ca125,
        time_to_us,
        met_size_at_ca125,
        met_size_at_us,
    })
}

fn validate_inputs(
    settings: &SimSettings,
    ovarian: &SiteParams,
    omental: &SiteParams,
    size_at_met_pool: &[f64],
) -> Result<(), MetsimErr> {
    if settings.n_trials == 0 {
        return Err(SimulationErr::NoTrialsRequested.into());
    }
    if !(0.0..=1.0).contains(&settings.p_omental_primary) {
        return Err(SamplerErr::BadProbability(settings.p_omental_primary).into());
    }
    if size_at_met_pool.is_empty() {
        return Err(SamplerErr::EmptyPool.into());
    }
    for (index, &value) in size_at_met_pool.iter().enumerate() {
        if value <= 0.0 {
            return Err(SamplerErr::NonPositivePoolEntry { index, value }.into());
        }
    }

    for (site_name, site) in [("ovarian", ovarian), ("omental", omental)] {
        // Re-validate in case the params were built as struct literals
        // rather than through SiteParams::new.
        SiteParams::new(site.max_volume, site.ln_beta_mean, site.ln_beta_std)?;
        // The detection limits must be invertible on every site's curve;
        // beta only scales time, not the reachable volume range.
        let probe = GompertzCurve::from_max_volume(site.max_volume, 1.0, settings.v0)?;
        for (marker, limit) in [("CA125", settings.ca125_limit), ("ultrasound", settings.us_limit)] {
            if probe.time_to_volume(limit).is_err() {
                return Err(SimulationErr::UnreachableDetectionLimit {
                    marker,
                    limit,
                    site: site_name,
                }
                .into());
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cohort;

    fn small_settings(n_trials: usize) -> SimSettings {
        SimSettings {
            n_trials,
            ..SimSettings::default()
        }
    }

    #[test]
    fn same_seed_same_table() {
        let settings = small_settings(500);
        let ovarian = cohort::ovarian_params();
        let omental = cohort::omental_params();
        let a = run_population_sim(&settings, &ovarian, &omental, &cohort::SIZE_AT_MET_POOL)
            .unwrap();
        let b = run_population_sim(&settings, &ovarian, &omental, &cohort::SIZE_AT_MET_POOL)
            .unwrap();
        assert_eq!(a.trials, b.trials);
        assert_eq!(a.discarded, b.discarded);
    }

    #[test]
    fn multi_chunk_run_is_deterministic() {
        let settings = small_settings(3000);
        let ovarian = cohort::ovarian_params();
        let omental = cohort::omental_params();
        let a = run_population_sim(&settings, &ovarian, &omental, &cohort::SIZE_AT_MET_POOL)
            .unwrap();
        let b = run_population_sim(&settings, &ovarian, &omental, &cohort::SIZE_AT_MET_POOL)
            .unwrap();
        assert_eq!(a.trials, b.trials);
    }

    #[test]
    fn trial_count_and_indices() {
        let settings = small_settings(2100);
        let ovarian = cohort::ovarian_params();
        let omental = cohort::omental_params();
        let outcome =
            run_population_sim(&settings, &ovarian, &omental, &cohort::SIZE_AT_MET_POOL)
                .unwrap();
        assert_eq!(outcome.trials.len() + outcome.discarded, 2100);
        let mut previous = None;
        for t in &outcome.trials {
            assert!(t.trial < 2100);
            if let Some(p) = previous {
                assert!(t.trial > p);
            }
            previous = Some(t.trial);
        }
    }

    #[test]
    fn detection_times_precede_metastasis_for_large_primary() {
        // Fixed 1 cm3 size at metastasis, always ovarian primary: the
        // detection limits (0.015 and 0.5 cm3) sit below it, so on a
        // monotone curve the times must be ordered.
        let settings = SimSettings {
            n_trials: 200,
            p_omental_primary: 0.0,
            ..SimSettings::default()
        };
        let ovarian = cohort::ovarian_params();
        let omental = cohort::omental_params();
        let outcome = run_population_sim(&settings, &ovarian, &omental, &[1.0]).unwrap();
        assert_eq!(outcome.discarded, 0);
        for t in &outcome.trials {
            assert!(!t.omental_primary);
            assert!(t.time_to_ca125.is_finite() && t.time_to_ca125 > 0.0);
            assert!(t.time_to_ca125 < t.time_to_us);
            assert!(t.time_to_us < t.time_to_met);
            // Detection happens before the metastasis is seeded, so its
            // volume sits below the single-cell volume.
            assert!(t.met_size_at_ca125 < settings.v0);
            assert!(t.met_size_at_us < settings.v0);
        }
    }

    #[test]
    fn unreachable_pool_discards_every_trial() {
        let settings = small_settings(4);
        let ovarian = cohort::ovarian_params();
        let omental = cohort::omental_params();
        let outcome = run_population_sim(&settings, &ovarian, &omental, &[10000.0]).unwrap();
        assert!(outcome.trials.is_empty());
        assert_eq!(outcome.discarded, 4);
    }

    #[test]
    fn empty_pool_is_fatal() {
        let settings = small_settings(10);
        let ovarian = cohort::ovarian_params();
        let omental = cohort::omental_params();
        if let Err(e) = run_population_sim(&settings, &ovarian, &omental, &[]) {
            assert_eq!(
                String::from(
                    "while drawing tumour parameters: size-at-metastasis \
                    pool was empty"
                ),
                format!("{}", e)
            );
        } else {
            panic!()
        }
    }

    #[test]
    fn bad_probability_is_fatal() {
        let settings = SimSettings {
            p_omental_primary: 1.5,
            ..small_settings(10)
        };
        let ovarian = cohort::ovarian_params();
        let omental = cohort::omental_params();
        assert!(
            run_population_sim(&settings, &ovarian, &omental, &cohort::SIZE_AT_MET_POOL)
                .is_err_and(|e| matches!(
                    e,
                    MetsimErr::Sampler(SamplerErr::BadProbability(_))
                ))
        );
    }

    #[test]
    fn unreachable_detection_limit_is_fatal() {
        let settings = SimSettings {
            us_limit: 6000.0,
            ..small_settings(10)
        };
        let ovarian = cohort::ovarian_params();
        let omental = cohort::omental_params();
        assert!(
            run_population_sim(&settings, &ovarian, &omental, &cohort::SIZE_AT_MET_POOL)
                .is_err_and(|e| matches!(
                    e,
                    MetsimErr::Simulation(SimulationErr::UnreachableDetectionLimit { .. })
                ))
        );
    }
}
