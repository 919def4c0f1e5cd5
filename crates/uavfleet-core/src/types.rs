//! Fundamental geometric and simulation types.

use std::f64::consts::TAU;

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// 3D position in simulation space (Cartesian).
/// Azimuth is measured from +x toward +y. z is carried but never integrated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

/// A commanded destination on the horizontal plane.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Waypoint {
    pub x: f64,
    pub y: f64,
}

/// Simulation time tracking.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SimTime {
    /// Number of completed ticks.
    pub tick: u64,
    /// Elapsed simulation time in seconds (`tick * dt`).
    pub elapsed_secs: f64,
}

impl Position {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Horizontal components as a vector.
    pub fn planar(&self) -> DVec2 {
        DVec2::new(self.x, self.y)
    }

    /// Overwrite the horizontal components, keeping altitude.
    pub fn set_planar(&mut self, p: DVec2) {
        self.x = p.x;
        self.y = p.y;
    }

    /// Horizontal range to a waypoint.
    pub fn horizontal_range_to(&self, other: &Waypoint) -> f64 {
        self.planar().distance(other.as_vec2())
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

impl Waypoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn as_vec2(&self) -> DVec2 {
        DVec2::new(self.x, self.y)
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl SimTime {
    /// Advance by one tick of `dt` seconds.
    ///
    /// Elapsed time is recomputed from the tick count so long runs do not
    /// accumulate summation error.
    pub fn advance(&mut self, dt: f64) {
        self.tick += 1;
        self.elapsed_secs = self.tick as f64 * dt;
    }
}

/// Wrap an angle into `[0, 2π)`.
pub fn normalize_azimuth(angle: f64) -> f64 {
    let wrapped = angle.rem_euclid(TAU);
    // rem_euclid rounds tiny negative inputs up to exactly TAU
    if wrapped >= TAU {
        0.0
    } else {
        wrapped
    }
}
