use crate::engine::Particle;
use crate::error::FluidError;
use crate::params::{FluidParams, VelocityClamp};
use glam::DVec2;

/// Fixed-timestep explicit Euler integrator for the particle fluid
#[derive(Debug, Clone)]
pub struct Integrator {
    params: FluidParams,
}

impl Integrator {
    pub fn new(params: FluidParams) -> Result<Self, FluidError> {
        params.validate()?;
        Ok(Self { params })
    }

    pub fn params(&self) -> &FluidParams {
        &self.params
    }

    /// Advance every particle by `dt`: clear, accumulate, integrate.
    pub fn step(&self, particles: &mut [Particle], dt: f64) {
        self.clear_forces(particles);
        self.accumulate_forces(particles);
        self.integrate(particles, dt);
    }

    /// Phase 1: zero every force accumulator
    pub fn clear_forces(&self, particles: &mut [Particle]) {
        for particle in particles.iter_mut() {
            particle.force = DVec2::ZERO;
        }
    }

    /// Phase 2: gravity, boundary rules and the two pairwise passes.
    ///
    /// Source particles are visited in index order. Pairwise terms computed
    /// while visiting source `i` are added to the accumulator of the target
    /// `j`, never to `i`. Boundary rules may zero a source's velocity, and
    /// sources visited later see that zeroed velocity in the viscosity pass.
    pub fn accumulate_forces(&self, particles: &mut [Particle]) {
        for i in 0..particles.len() {
            self.apply_body_forces(&mut particles[i]);

            let source = particles[i];

            for target in particles.iter_mut() {
                target.force += self.pressure(source.pos, target.pos);
            }

            for target in particles.iter_mut() {
                target.force += self.viscosity(&source, target);
            }
        }
    }

    /// Phase 3: Euler update of velocity then position, with the speed clamp
    pub fn integrate(&self, particles: &mut [Particle], dt: f64) {
        let limit = self.params.speed_limit(dt);

        for particle in particles.iter_mut() {
            particle.vel += particle.force * dt;

            let speed = particle.vel.x.hypot(particle.vel.y);
            if speed > limit {
                particle.vel = match self.params.velocity_clamp {
                    VelocityClamp::NormalizeToUnit => particle.vel / speed,
                    VelocityClamp::ClampToMax => particle.vel * (limit / speed),
                };
            }

            particle.pos += particle.vel * dt;
            particle.force = DVec2::ZERO;
        }
    }

    /// Gravity plus the floor and side-wall rules for a single particle
    fn apply_body_forces(&self, particle: &mut Particle) {
        let p = &self.params;

        particle.force.y += p.gravity;

        if particle.pos.y < p.boundary_width {
            if particle.vel.y < 0.0 {
                particle.vel.y = 0.0;
            }
            // Overwrites gravity and anything already accumulated this step.
            particle.force.y = p.floor_force;
        }

        if particle.pos.x < p.boundary_width {
            if particle.vel.x < 0.0 {
                particle.vel.x = 0.0;
            }
            particle.force.x += p.wall_force;
        }

        if particle.pos.x > p.world_width - p.boundary_width {
            if particle.vel.x > 0.0 {
                particle.vel.x = 0.0;
            }
            particle.force.x -= p.wall_force;
        }
    }

    /// Repulsion felt by a particle at `target` from one at `source`
    pub fn pressure(&self, source: DVec2, target: DVec2) -> DVec2 {
        let delta = target - source;
        let dist = delta.x.hypot(delta.y);
        if self.params.min_distance < dist && dist < self.params.max_distance {
            let force = 1.0 / dist.sqrt();
            force * delta / dist
        } else {
            DVec2::ZERO
        }
    }

    /// Velocity-difference term felt by `target` from `source`
    pub fn viscosity(&self, source: &Particle, target: &Particle) -> DVec2 {
        let delta = target.pos - source.pos;
        let dist = delta.x.hypot(delta.y);
        if self.params.min_distance < dist && dist < self.params.max_distance_visc {
            self.params.viscosity * (target.vel - source.vel) / dist
        } else {
            DVec2::ZERO
        }
    }
}
