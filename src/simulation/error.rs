//----------------------------------------
// simulation errors
//----------------------------------------
use crate::error::MetsimErr;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SimulationErr {
    #[error("number of trials should be positive")]
    NoTrialsRequested,
    #[error("{marker} detection limit {limit} can never be crossed on the {site} curve")]
    UnreachableDetectionLimit {
        marker: &'static str,
        limit: f64,
        site: &'static str,
    },
}

impl Into<MetsimErr> for SimulationErr {
    fn into(self) -> MetsimErr {
        MetsimErr::Simulation(self)
    }
}
