//! High-level runtime engine settings
//!
//! Selects the broad phase (uniform grid or direct N^2) and the grid cell
//! size used when building and running a `Scenario`

use crate::configuration::config::BroadPhaseConfig;

#[derive(Debug, Clone)]
pub struct Engine {
    pub broad_phase: BroadPhaseConfig, // grid or direct
    pub cell_size: f64, // grid cell edge length, world pixels
}
