//! World parameters for the simulation
//!
//! `Parameters` holds runtime settings:
//! - world extents in pixels (`width`, `height`),
//! - the wall margin applied to every body,
//! - the spawner seed
//!
//! The physics core reads only `width`/`height`/`margin`; `seed` is
//! consumed once at scenario build time.

#[derive(Debug, Clone)]
pub struct Parameters {
    pub width: f64, // world width
    pub height: f64, // world height
    pub margin: f64, // wall margin (outline outset)
    pub seed: u64, // deterministic spawner seed
}
