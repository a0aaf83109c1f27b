use std::time::Instant;
use crate::simulation::collision::{resolve_direct, resolve_with_grid};
use crate::simulation::grid::SpatialGrid;
use crate::simulation::states::{Body, NVec2, System};

const WORLD: f64 = 800.0;
const BODY_RADIUS: f64 = 4.0;

/// Build a system of `n` small bodies scattered over the world
fn scattered_system(n: usize) -> System {
    let mut bodies = Vec::with_capacity(n);

    for i in 0..n {
        let i_f = i as f64;
        // deterministic positions, no rand needed
        let x = NVec2::new(
            WORLD * 0.5 + (i_f * 0.37).sin() * WORLD * 0.45,
            WORLD * 0.5 + (i_f * 0.13).cos() * WORLD * 0.45,
        );
        let v = NVec2::zeros();

        bodies.push(Body {
            x,
            v,
            radius: BODY_RADIUS,
            margin: 0.0,
        });
    }

    System { bodies, t: 0.0 }
}

/// Time one full collision pass, direct N^2 vs grid-pruned, over growing
/// system sizes. Each pass runs on its own clone of the same initial state.
pub fn bench_resolve() {
    let ns = [200, 400, 800, 1600, 3200, 6400];

    println!("{:>8} {:>14} {:>14}", "n", "direct", "grid");

    for n in ns {
        let sys = scattered_system(n);

        let mut sys_direct = sys.clone();
        let start = Instant::now();
        resolve_direct(&mut sys_direct);
        let direct = start.elapsed();

        let mut sys_grid = sys.clone();
        let mut grid = SpatialGrid::new(WORLD, WORLD, 2.0 * BODY_RADIUS);
        let start = Instant::now();
        resolve_with_grid(&mut sys_grid, &mut grid);
        let grid_time = start.elapsed();

        println!("{:>8} {:>14?} {:>14?}", n, direct, grid_time);
    }
}

/// Time the per-frame grid rebuild (clear + insert all) on its own,
/// averaged over many frames.
pub fn bench_rebuild() {
    let ns = [200, 400, 800, 1600, 3200, 6400];
    let frames = 1000;

    println!("{:>8} {:>16}", "n", "rebuild/frame");

    for n in ns {
        let sys = scattered_system(n);
        let mut grid = SpatialGrid::new(WORLD, WORLD, 2.0 * BODY_RADIUS);

        let start = Instant::now();
        for _ in 0..frames {
            grid.clear();
            for (i, body) in sys.bodies.iter().enumerate() {
                grid.insert(body.x, i);
            }
        }
        let per_frame = start.elapsed() / frames;

        println!("{:>8} {:>16?}", n, per_frame);
    }
}
