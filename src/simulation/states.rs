//! Core state types for the collision simulation.
//!
//! Defines the body/system structs:
//! - `Body`   one circular entity (position, velocity, radius, wall margin)
//! - `System` the list of bodies and the current simulation time `t`
//!
//! A body owns its own kinematics: the integration step, the wall bounce,
//! and the pairwise overlap test / resolution used by the collision pass.

use nalgebra::Vector2;
pub type NVec2 = Vector2<f64>;

#[derive(Debug, Clone)]
pub struct Body {
    pub x: NVec2, // position, world pixels
    pub v: NVec2, // velocity, pixels per second
    pub radius: f64, // circle radius
    pub margin: f64, // outline outset kept inside the walls
}

#[derive(Debug, Clone)]
pub struct System {
    pub bodies: Vec<Body>, // collection of bodies
    pub t: f64, // time
}

impl Body {
    /// Advance the position by one frame: `x += v * dt`
    /// `dt` comes from the frame clock; the caller guarantees it is non-negative
    pub fn step(&mut self, dt: f64) {
        self.x += dt * self.v;
    }

    /// Bounce off the world walls, each axis tested independently.
    ///
    /// If the circle (outset by `margin` on the far side) pokes past a wall
    /// on some axis, that velocity component is negated and the position is
    /// clamped back into `[radius, extent - radius - margin]`. A body in a
    /// corner gets both axes flipped in the same call.
    pub fn bounce_off_walls(&mut self, width: f64, height: f64) {
        if self.x.x - self.radius < 0.0 || self.x.x + self.radius + self.margin > width {
            self.v.x = -self.v.x;
            // min-then-max keeps this total even when extent < 2r + margin
            self.x.x = self.x.x.min(width - self.radius - self.margin).max(self.radius);
        }
        if self.x.y - self.radius < 0.0 || self.x.y + self.radius + self.margin > height {
            self.v.y = -self.v.y;
            self.x.y = self.x.y.min(height - self.radius - self.margin).max(self.radius);
        }
    }

    /// Circle-circle overlap test: center distance strictly below the sum
    /// of the radii. Pure and symmetric.
    pub fn overlaps(&self, other: &Body) -> bool {
        (self.x - other.x).norm() < self.radius + other.radius
    }

    /// Separate two overlapping bodies and swap their velocities.
    ///
    /// Positional correction only: each body moves half the overlap along
    /// the center-to-center direction, leaving the pair exactly touching.
    /// The full velocity swap is the entire collision response: the demo's
    /// simplified elastic model, not a mass-weighted impulse.
    ///
    /// Coincident centers have no usable direction; the pair is left
    /// untouched and separates on a later frame, if at all.
    pub fn resolve_collision(&mut self, other: &mut Body) {
        let delta = self.x - other.x;
        let distance = delta.norm();
        if distance == 0.0 {
            return;
        }

        let normalized = delta / distance;
        let overlap = (self.radius + other.radius) - distance;
        let move_amount = 0.5 * overlap;

        self.x += move_amount * normalized;
        other.x -= move_amount * normalized;

        std::mem::swap(&mut self.v, &mut other.v);
    }
}
