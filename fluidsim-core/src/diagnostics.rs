//! Numeric health checks and per-frame summaries
//!
//! The core has no recoverable runtime errors. What can go wrong is a
//! NaN or infinity creeping into the particle state, which this module
//! detects so callers can stop instead of rendering garbage.

use crate::engine::{Particle, World};
use glam::DVec2;
use std::fmt;

/// Index of the first particle with a non-finite position, velocity or force
pub fn check_finite(particles: &[Particle]) -> Result<(), usize> {
    match particles.iter().position(|p| !p.is_finite()) {
        Some(index) => Err(index),
        None => Ok(()),
    }
}

/// Aggregate numbers describing the fluid at one instant
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameStats {
    pub count: usize,
    pub mean_pos: DVec2,
    pub mean_speed: f64,
    pub max_speed: f64,
    /// Sum of `0.5 * |v|^2`, every particle has unit mass
    pub kinetic_energy: f64,
    pub out_of_bounds: usize,
}

impl FrameStats {
    pub fn collect(world: &World) -> Self {
        let particles = world.particles();
        let count = particles.len();

        let mut pos_sum = DVec2::ZERO;
        let mut speed_sum = 0.0;
        let mut max_speed: f64 = 0.0;
        let mut kinetic_energy = 0.0;
        let mut out_of_bounds = 0;

        for p in particles {
            let speed = p.speed();
            pos_sum += p.pos;
            speed_sum += speed;
            max_speed = max_speed.max(speed);
            kinetic_energy += 0.5 * p.vel.length_squared();
            if !world.contains(p.pos) {
                out_of_bounds += 1;
            }
        }

        let (mean_pos, mean_speed) = if count > 0 {
            (pos_sum / count as f64, speed_sum / count as f64)
        } else {
            (DVec2::ZERO, 0.0)
        };

        Self {
            count,
            mean_pos,
            mean_speed,
            max_speed,
            kinetic_energy,
            out_of_bounds,
        }
    }
}

impl fmt::Display for FrameStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "n={} centroid=({:.2}, {:.2}) speed mean={:.3} max={:.3} ke={:.3} outside={}",
            self.count,
            self.mean_pos.x,
            self.mean_pos.y,
            self.mean_speed,
            self.max_speed,
            self.kinetic_energy,
            self.out_of_bounds,
        )
    }
}
