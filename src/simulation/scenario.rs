//! Build fully-initialized simulation scenarios from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces the runtime bundle
//! (`Scenario`) containing:
//! - engine settings (`Engine`)
//! - world parameters (`Parameters`)
//! - system state (`System` with bodies at t = 0)
//! - the broad-phase index (`SpatialGrid`)
//!
//! The scenario is inserted into Bevy as a `Resource` and consumed by the
//! physics-step and visualization systems. It is also the explicit
//! simulation context: all per-frame mutation goes through its two entry
//! points, [`Scenario::advance`] and [`Scenario::resolve_all_collisions`].

use bevy::prelude::Resource;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::configuration::config::{BodyConfig, BroadPhaseConfig, ScenarioConfig, SpawnConfig};
use crate::simulation::collision;
use crate::simulation::engine::Engine;
use crate::simulation::grid::SpatialGrid;
use crate::simulation::integrator;
use crate::simulation::params::Parameters;
use crate::simulation::states::{Body, NVec2, System};

/// Bevy resource representing a fully-initialized simulation scenario
///
/// This is the main "runtime bundle" constructed from a [`ScenarioConfig`]:
/// it contains the engine settings, world parameters, current system
/// state, and the broad-phase grid rebuilt by every collision pass
///
/// In Bevy terms, this is inserted as a `Resource` and then read by systems
/// responsible for stepping the physics and drawing the bodies
#[derive(Resource)]
pub struct Scenario {
    pub engine: Engine,
    pub parameters: Parameters,
    pub system: System,
    pub grid: SpatialGrid,
}

impl Scenario {
    pub fn build_scenario(cfg: ScenarioConfig) -> Self {
        // Parameters (runtime) from ParametersConfig
        let p_cfg = cfg.parameters;
        let parameters = Parameters {
            width: p_cfg.width,
            height: p_cfg.height,
            margin: p_cfg.margin,
            seed: p_cfg.seed,
        };

        // Engine (runtime) from EngineConfig
        let e_cfg = cfg.engine;
        let engine = Engine {
            broad_phase: e_cfg.broad_phase,
            cell_size: e_cfg.cell_size.unwrap_or(100.0),
        };

        // Bodies: explicit `BodyConfig` entries first, mapped onto nalgebra
        // vectors, then the seeded random batch if the scenario asks for one
        let mut bodies: Vec<Body> = cfg.bodies.iter().map(|bc: &BodyConfig| Body {
            x: NVec2::new(bc.x[0], bc.x[1]),
            v: NVec2::new(bc.v[0], bc.v[1]),
            radius: bc.radius,
            margin: parameters.margin,
        }).collect();

        if let Some(spawn_cfg) = &cfg.spawn {
            let mut rng = SmallRng::seed_from_u64(parameters.seed);
            bodies.extend(spawn_bodies(spawn_cfg, &parameters, &mut rng));
        }

        // Initial system state: bodies at t = 0
        let system = System {
            bodies,
            t: 0.0,
        };

        // Broad-phase index over the whole world, rebuilt every pass
        let grid = SpatialGrid::new(parameters.width, parameters.height, engine.cell_size);

        Self {
            engine,
            parameters,
            system,
            grid,
        }
    }

    /// Per-frame entry point 1: integrate every body by `dt` seconds and
    /// bounce it off the world walls.
    pub fn advance(&mut self, dt: f64) {
        integrator::advance(&mut self.system, &self.parameters, dt);
    }

    /// Per-frame entry point 2: rebuild the broad phase and resolve all of
    /// this frame's overlapping pairs.
    pub fn resolve_all_collisions(&mut self) {
        match self.engine.broad_phase {
            BroadPhaseConfig::Grid => collision::resolve_with_grid(&mut self.system, &mut self.grid),
            BroadPhaseConfig::Direct => collision::resolve_direct(&mut self.system),
        }
    }
}

/// Roll `cfg.count` bodies from the injected rng.
///
/// Radii come from the configured range; positions keep the whole disc
/// inside the world (`radius + uniform(0, extent - 2*radius)` per axis);
/// velocity components are uniform in the configured speed range. The
/// same rng state always yields the same batch.
pub fn spawn_bodies(cfg: &SpawnConfig, params: &Parameters, rng: &mut impl Rng) -> Vec<Body> {
    (0..cfg.count).map(|_| {
        let radius = rng.gen_range(cfg.radius[0]..cfg.radius[1]);
        let x = radius + rng.gen_range(0.0..params.width - 2.0 * radius);
        let y = radius + rng.gen_range(0.0..params.height - 2.0 * radius);
        let v = NVec2::new(
            rng.gen_range(cfg.speed[0]..cfg.speed[1]),
            rng.gen_range(cfg.speed[0]..cfg.speed[1]),
        );

        Body {
            x: NVec2::new(x, y),
            v,
            radius,
            margin: params.margin,
        }
    }).collect()
}
