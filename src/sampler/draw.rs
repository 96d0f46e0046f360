use rand::{distributions::Distribution, rngs};
use statrs::distribution::{DiscreteUniform, Normal, Uniform};

use crate::sampler::types::{SiteParams, TrialDraw};

/// Draw the random inputs for one tumour from an explicitly owned random
/// source: the primary-site assignment, the primary volume at metastasis
/// onset (uniform with replacement from the empirical pool), and log-normal
/// decay rates for both sites.
///
/// Inputs are assumed validated; a non-empty pool and a probability in
/// [0, 1] are checked by the simulation engine before any draw.
pub fn draw_trial(
    rng: &mut rngs::StdRng,
    ovarian: &SiteParams,
    omental: &SiteParams,
    size_at_met_pool: &[f64],
    p_omental_primary: f64,
) -> TrialDraw {
    let unit_uniform = Uniform::new(0.0, 1.0).unwrap();
    let unit_normal = Normal::new(0.0, 1.0).unwrap();
    let pool_index = DiscreteUniform::new(0, (size_at_met_pool.len() - 1) as i64).unwrap();

    // Which site seeded first; the other site is the metastatic one.
    let omental_primary = unit_uniform.sample(rng) <= p_omental_primary;
    let (primary, metastatic) = if omental_primary {
        (omental, ovarian)
    } else {
        (ovarian, omental)
    };

    let index: f64 = pool_index.sample(rng);
    let size_at_met = size_at_met_pool[index as usize];

    // beta = exp(mu + sigma * z), z ~ N(0, 1); sigma = 0 degenerates to
    // exp(mu) rather than erroring on a zero-width normal.
    let beta_primary =
        (primary.ln_beta_mean + primary.ln_beta_std * unit_normal.sample(rng)).exp();
    let beta_met =
        (metastatic.ln_beta_mean + metastatic.ln_beta_std * unit_normal.sample(rng)).exp();

    TrialDraw {
        omental_primary,
        size_at_met,
        beta_primary,
        beta_met,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cohort;
    use rand::SeedableRng;

    #[test]
    fn omental_primary_frequency_matches_probability() {
        let mut rng = rngs::StdRng::seed_from_u64(24601);
        let ovarian = cohort::ovarian_params();
        let omental = cohort::omental_params();
        let n = 100000;
        let n_omental = (0..n)
            .filter(|_| {
                draw_trial(
                    &mut rng,
                    &ovarian,
                    &omental,
                    &cohort::SIZE_AT_MET_POOL,
                    cohort::P_OMENTAL_PRIMARY,
                )
                .omental_primary
            })
            .count();
        let observed = (n_omental as f64) / (n as f64);
        assert!((observed - 4.0 / 11.0).abs() < 0.01);
    }

    #[test]
    fn size_at_met_is_a_pool_member() {
        let mut rng = rngs::StdRng::seed_from_u64(7);
        let ovarian = cohort::ovarian_params();
        let omental = cohort::omental_params();
        for _ in 0..1000 {
            let draw = draw_trial(
                &mut rng,
                &ovarian,
                &omental,
                &cohort::SIZE_AT_MET_POOL,
                cohort::P_OMENTAL_PRIMARY,
            );
            assert!(cohort::SIZE_AT_MET_POOL.contains(&draw.size_at_met));
        }
    }

    #[test]
    fn decay_rates_are_positive() {
        let mut rng = rngs::StdRng::seed_from_u64(99);
        let ovarian = cohort::ovarian_params();
        let omental = cohort::omental_params();
        for _ in 0..1000 {
            let draw = draw_trial(
                &mut rng,
                &ovarian,
                &omental,
                &cohort::SIZE_AT_MET_POOL,
                cohort::P_OMENTAL_PRIMARY,
            );
            assert!(draw.beta_primary > 0.0);
            assert!(draw.beta_met > 0.0);
        }
    }

    #[test]
    fn zero_spread_gives_deterministic_decay_rate() {
        let mut rng = rngs::StdRng::seed_from_u64(1);
        let site = SiteParams::new(5000.0, -5.0, 0.0).unwrap();
        let draw = draw_trial(&mut rng, &site, &site, &[1.0], 0.5);
        assert_eq!(draw.beta_primary, (-5.0_f64).exp());
        assert_eq!(draw.beta_met, (-5.0_f64).exp());
    }
}
