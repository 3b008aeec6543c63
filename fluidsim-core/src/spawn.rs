//! Initial particle placement

use crate::engine::Particle;
use crate::params::FluidParams;
use rand::Rng;

/// Place `params.particle_count` particles at rest.
///
/// `x` is uniform over the world width and `y` uniform over the lowest
/// `spawn_height_fraction` of the world height. Each particle draws `x`
/// first, then `y`, so a seeded generator always yields the same layout.
pub fn spawn_particles<R: Rng + ?Sized>(params: &FluidParams, rng: &mut R) -> Vec<Particle> {
    let spawn_height = params.world_height * params.spawn_height_fraction;

    (0..params.particle_count)
        .map(|_| {
            let x = rng.gen::<f64>() * params.world_width;
            let y = rng.gen::<f64>() * spawn_height;
            Particle::at(x, y)
        })
        .collect()
}
