use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "metsim",
    version,
    about = "Gompertz metastasis-timing population simulator"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Run the Monte Carlo population simulation and write the result table
    Simulate(SimulateArgs),
    /// Summarise detection precedence and windows of opportunity
    Analyse(AnalyseArgs),
    /// Compute per-case tumour volume doubling times
    Tvdt(TvdtArgs),
}

#[derive(Debug, Args)]
pub struct SimulateArgs {
    #[arg(long)]
    pub out: PathBuf,

    #[arg(long, default_value_t = 10000)]
    pub n_trials: usize,

    #[arg(long, default_value_t = 24601)]
    pub seed: u64,

    #[arg(
        long,
        help = "Fitted site-parameter CSV (defaults to the built-in cohort estimates)"
    )]
    pub site_params: Option<PathBuf>,

    #[arg(
        long,
        help = "Size-at-metastasis pool, one volume per line (defaults to the 11-case pool)"
    )]
    pub pool: Option<PathBuf>,
}

#[derive(Debug, Args)]
pub struct AnalyseArgs {
    #[arg(long)]
    pub sims: PathBuf,
}

#[derive(Debug, Args)]
pub struct TvdtArgs {
    #[arg(long)]
    pub volumes: PathBuf,

    #[arg(long)]
    pub out: PathBuf,
}
