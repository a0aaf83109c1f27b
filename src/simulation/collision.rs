//! Per-frame collision passes for the system
//!
//! Two interchangeable passes resolve every overlapping pair in a
//! `System`: [`resolve_with_grid`] prunes candidates through the
//! [`SpatialGrid`] broad phase, [`resolve_direct`] tests all pairs.
//! Both share the same narrow phase (`Body::overlaps`) and response
//! (`Body::resolve_collision`).
//!
//! Each body is iterated as "self" against its own candidate list, so an
//! overlapping unordered pair is visited twice per pass, once from each
//! side. The strict overlap test makes the second visit a no-op as soon
//! as the first one separated the pair exactly.

use crate::simulation::grid::SpatialGrid;
use crate::simulation::states::{Body, System};

/// Split-borrow two distinct bodies mutably out of the slice.
fn pair_mut(bodies: &mut [Body], i: usize, j: usize) -> (&mut Body, &mut Body) {
    debug_assert_ne!(i, j);
    if i < j {
        let (head, tail) = bodies.split_at_mut(j);
        (&mut head[i], &mut tail[0])
    } else {
        let (head, tail) = bodies.split_at_mut(i);
        (&mut tail[0], &mut head[j])
    }
}

/// Rebuild the grid from current positions, then resolve overlaps among
/// each body's 3×3 neighborhood.
///
/// The candidate list for a body is taken once, before any of its
/// resolutions move it; positions shifted by an earlier resolution in the
/// same pass are picked up by the remaining bodies' own queries, not by
/// re-querying.
pub fn resolve_with_grid(sys: &mut System, grid: &mut SpatialGrid) {
    grid.clear();
    for (i, body) in sys.bodies.iter().enumerate() {
        grid.insert(body.x, i);
    }

    for i in 0..sys.bodies.len() {
        let candidates = grid.query_neighbors(sys.bodies[i].x);
        for j in candidates {
            if i == j {
                continue;
            }
            let (a, b) = pair_mut(&mut sys.bodies, i, j);
            if a.overlaps(b) {
                a.resolve_collision(b);
            }
        }
    }
}

/// Resolve overlaps by testing every ordered pair, no pruning.
///
/// Same pair semantics as the grid pass; used as the reference path and
/// for benchmark comparison.
pub fn resolve_direct(sys: &mut System) {
    let n = sys.bodies.len();
    for i in 0..n {
        for j in 0..n {
            if i == j {
                continue;
            }
            let (a, b) = pair_mut(&mut sys.bodies, i, j);
            if a.overlaps(b) {
                a.resolve_collision(b);
            }
        }
    }
}
