pub mod curve;
pub mod error;
pub mod mission;
pub mod sim;

// Flat re-exports for callers
pub mod simulator {
    pub use crate::sim::runner::{simulate, simulate_with};
}

pub mod types {
    pub use crate::curve::{ThrustCurve, ThrustCurveSample, DEFAULT_CALIBRATION};
    pub use crate::error::Error;
    pub use crate::mission::{MissionBuilder, MissionParameters};
    pub use crate::sim::runner::{EnduranceReport, PhaseResult, SimConfig};
}
