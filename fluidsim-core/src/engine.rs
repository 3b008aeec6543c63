use crate::error::FluidError;
use crate::params::FluidParams;
use crate::spawn::spawn_particles;
use glam::DVec2;
use rand::Rng;

/// A fluid particle. Identity is its index in the owning [`World`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub pos: DVec2,
    pub vel: DVec2,
    /// Per-step force accumulator, zero outside of a step
    pub force: DVec2,
}

impl Particle {
    /// A particle at rest at `(x, y)`
    pub fn at(x: f64, y: f64) -> Self {
        Self {
            pos: DVec2::new(x, y),
            vel: DVec2::ZERO,
            force: DVec2::ZERO,
        }
    }

    pub fn with_velocity(mut self, vx: f64, vy: f64) -> Self {
        self.vel = DVec2::new(vx, vy);
        self
    }

    pub fn speed(&self) -> f64 {
        self.vel.length()
    }

    pub fn is_finite(&self) -> bool {
        self.pos.is_finite() && self.vel.is_finite() && self.force.is_finite()
    }
}

/// Fixed-size particle store plus the world rectangle `[0, width] x [0, height]`
#[derive(Debug, Clone)]
pub struct World {
    particles: Vec<Particle>,
    width: f64,
    height: f64,
}

impl World {
    /// Adopt an already built particle collection
    pub fn new(width: f64, height: f64, particles: Vec<Particle>) -> Result<Self, FluidError> {
        if !(width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0) {
            return Err(FluidError::InvalidBounds { width, height });
        }
        Ok(Self {
            particles,
            width,
            height,
        })
    }

    /// Fill a world of `params` dimensions with randomly placed particles
    pub fn spawn<R: Rng + ?Sized>(params: &FluidParams, rng: &mut R) -> Result<Self, FluidError> {
        let particles = spawn_particles(params, rng);
        Self::new(params.world_width, params.world_height, particles)
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Mutable access for the integrator. The slice length cannot change.
    pub fn particles_mut(&mut self) -> &mut [Particle] {
        &mut self.particles
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// True if `pos` lies inside the world rectangle (edges included)
    pub fn contains(&self, pos: DVec2) -> bool {
        pos.x >= 0.0 && pos.x <= self.width && pos.y >= 0.0 && pos.y <= self.height
    }
}
