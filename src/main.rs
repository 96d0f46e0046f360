use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use metsim::cli::{AnalyseArgs, Cli, Commands, SimulateArgs, TvdtArgs};
use metsim::cohort;
use metsim::compute::{
    DetectionMarker, SimSettings, describe, detectable_before_met, run_population_sim,
    window_of_opportunity,
};
use metsim::io;
use metsim::units;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Simulate(args) => simulate(args),
        Commands::Analyse(args) => analyse(args),
        Commands::Tvdt(args) => doubling_times(args),
    }
}

fn simulate(args: SimulateArgs) -> Result<()> {
    let (ovarian, omental) = match &args.site_params {
        Some(path) => io::site_params::read_site_params(path)?,
        None => (cohort::ovarian_params(), cohort::omental_params()),
    };
    let pool = match &args.pool {
        Some(path) => io::pool::read_size_at_met_pool(path)?,
        None => cohort::SIZE_AT_MET_POOL.to_vec(),
    };

    let settings = SimSettings {
        seed: args.seed,
        n_trials: args.n_trials,
        ..SimSettings::default()
    };
    let outcome = run_population_sim(&settings, &ovarian, &omental, &pool)?;

    io::sims::write_sims_csv(&args.out, &outcome.trials)?;
    tracing::info!(
        out = %args.out.display(),
        simulated = outcome.trials.len(),
        discarded = outcome.discarded,
        "wrote simulation table"
    );
    Ok(())
}

fn analyse(args: AnalyseArgs) -> Result<()> {
    let trials = io::sims::read_sims_csv(&args.sims)?;
    let markers = [DetectionMarker::Ca125, DetectionMarker::Ultrasound];

    for marker in markers {
        println!(
            "{} out of {} cases reach the {} detection limit before metastasis",
            detectable_before_met(&trials, marker),
            trials.len(),
            marker.label()
        );
    }

    for marker in markers {
        println!();
        println!("**** WOO for {} (months) ****", marker.label());
        let woo = window_of_opportunity(&trials, marker, units::MONTHS_PER_DAY);
        match describe(&woo) {
            Some(summary) => {
                println!("count  {}", summary.count);
                println!("mean   {:.4}", summary.mean);
                println!("std    {:.4}", summary.std_dev);
                println!("min    {:.4}", summary.min);
                println!("25%    {:.4}", summary.lower_quartile);
                println!("50%    {:.4}", summary.median);
                println!("75%    {:.4}", summary.upper_quartile);
                println!("max    {:.4}", summary.max);
            }
            None => println!("no tumours detectable before metastasis"),
        }
    }
    Ok(())
}

fn doubling_times(args: TvdtArgs) -> Result<()> {
    let observations = io::volumes::read_raw_volumes(&args.volumes)?;
    let rows = metsim::compute::case_doubling_times(&observations);
    io::tvdts::write_tvdts_csv(&args.out, &rows)?;
    tracing::info!(
        out = %args.out.display(),
        cases = rows.len(),
        "wrote doubling-time table"
    );
    Ok(())
}
