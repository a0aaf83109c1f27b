//! Frame-time integration for the system
//!
//! One explicit-Euler step per rendered frame, driven by the frame
//! clock's delta rather than a fixed step size. Integration and the wall
//! bounce run back to back for every body, before any pairwise collision
//! work for the frame.

use super::params::Parameters;
use super::states::System;

/// Advance the system by one frame of `dt` seconds.
///
/// For each body: `x += v * dt`, then bounce off the world walls. After
/// this call every body sits inside
/// `[radius, width - radius - margin] × [radius, height - radius - margin]`
/// on any axis the wall test touched. `sys.t` is advanced by `dt`.
pub fn advance(sys: &mut System, params: &Parameters, dt: f64) {
    for body in sys.bodies.iter_mut() {
        body.step(dt);
        body.bounce_off_walls(params.width, params.height);
    }

    sys.t += dt;
}
