//! Configuration types for loading simulation scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! simulation scenario. A scenario consists of:
//!
//! - [`EngineConfig`]     – engine options (broad phase, grid cell size)
//! - [`ParametersConfig`] – world extents, wall margin, spawner seed
//! - [`BodyConfig`]       – initial state for each explicitly placed body
//! - [`SpawnConfig`]      – optional randomized batch of bodies
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario from YAML
//!
//! # YAML format
//! An example scenario YAML matching these types:
//!
//! ```yaml
//! engine:
//!   broad_phase: "grid"   # or "direct"
//!   cell_size: 100.0
//!
//! parameters:
//!   width: 800.0          # world width, pixels
//!   height: 800.0         # world height, pixels
//!   margin: 15.0          # outline outset kept inside the walls
//!   seed: 42              # deterministic spawner seed
//!
//! spawn:
//!   count: 5
//!   radius: [40.0, 100.0]
//!   speed: [-300.0, 300.0]
//!
//! bodies:
//!   - x: [100.0, 400.0]
//!     v: [50.0, 0.0]
//!     radius: 50.0
//! ```
//!
//! `bodies` and `spawn` may be used together; explicit bodies come first
//! in the runtime system, the spawned batch is appended after them.

use serde::Deserialize;

/// Which broad phase the collision pass uses
/// `broad_phase: "grid"` or `broad_phase: "direct"`
#[derive(Deserialize, Debug, Clone)]
pub enum BroadPhaseConfig {
    #[serde(rename = "grid")] // Uniform-cell grid, candidates from the 3x3 neighborhood
    Grid,

    #[serde(rename = "direct")] // All-pairs N^2 test, no pruning. Reference path and benchmark baseline
    Direct,
}

/// High-level engine configuration
/// Controls how the collision pass is structured
#[derive(Deserialize, Debug)]
pub struct EngineConfig {
    pub broad_phase: BroadPhaseConfig, // grid-pruned or direct all-pairs pass
    pub cell_size: Option<f64>, // grid cell edge, pixels; should stay >= 2x the largest radius
}

/// Global world parameters for a scenario
#[derive(Deserialize, Debug, Clone)]
pub struct ParametersConfig {
    pub width: f64,  // world width, pixels
    pub height: f64, // world height, pixels
    pub margin: f64, // wall margin applied to every body
    pub seed: u64,   // deterministic seed to make spawns reproducable
}

/// Configuration for a single body's initial state
#[derive(Deserialize, Debug)]
pub struct BodyConfig {
    pub x: Vec<f64>, // Initial position `x` in world pixels
    pub v: Vec<f64>, // Initial velocity `v` in pixels per second
    pub radius: f64, // Radius of the body, used for collisions and for drawing
}

/// Randomized batch of bodies rolled from the scenario seed
#[derive(Deserialize, Debug)]
pub struct SpawnConfig {
    pub count: usize,     // how many bodies to roll
    pub radius: [f64; 2], // radius range [min, max)
    pub speed: [f64; 2],  // per-component velocity range [min, max)
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug)]
pub struct ScenarioConfig {
    pub engine: EngineConfig, // Engine-level configuration (broad phase, cell size)
    pub parameters: ParametersConfig, // Global world parameters
    #[serde(default)]
    pub bodies: Vec<BodyConfig>, // Explicitly placed bodies
    pub spawn: Option<SpawnConfig>, // Optional randomized batch appended after `bodies`
}
