//----------------------------------------
// Crate error type
//----------------------------------------
use crate::gompertz::error::GompertzErr;
use crate::sampler::error::SamplerErr;
use crate::simulation::error::SimulationErr;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum MetsimErr {
    #[error("while evaluating Gompertz curve: {0}")]
    Gompertz(GompertzErr),
    #[error("while drawing tumour parameters: {0}")]
    Sampler(SamplerErr),
    #[error("while running population simulation: {0}")]
    Simulation(SimulationErr),
}
