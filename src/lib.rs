pub mod simulation;
pub mod configuration;
pub mod visualization;
pub mod benchmark;

pub use simulation::states::{Body, System, NVec2};
pub use simulation::grid::SpatialGrid;
pub use simulation::collision::{resolve_with_grid, resolve_direct};
pub use simulation::integrator::advance;
pub use simulation::scenario::{Scenario, spawn_bodies};

pub use configuration::config::{BroadPhaseConfig, EngineConfig, ParametersConfig, BodyConfig, SpawnConfig, ScenarioConfig};

pub use visualization::ballsim_vis2d::run_2d;

pub use benchmark::benchmark::{bench_resolve, bench_rebuild};
