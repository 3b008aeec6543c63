use crate::diagnostics::{check_finite, FrameStats};
use crate::engine::World;
use crate::error::FluidError;
use crate::integrator::Integrator;
use crate::params::FluidParams;
use glam::DVec2;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Read-only view of the particle positions for renderers
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    pub step: u64,
    pub width: f64,
    pub height: f64,
    pub positions: Vec<DVec2>,
}

/// A running simulation: particle store, integrator and step counter
#[derive(Debug, Clone)]
pub struct SimulationContext {
    pub world: World,
    pub integrator: Integrator,
    pub current_step: u64,
    /// `None` runs until the driver stops
    pub max_steps: Option<u64>,
    pub seed: Option<u64>,
}

impl SimulationContext {
    pub fn params(&self) -> &FluidParams {
        self.integrator.params()
    }

    pub fn stats(&self) -> FrameStats {
        FrameStats::collect(&self.world)
    }
}

/// Validate `params`, spawn the particles and wrap them in a context.
///
/// With a seed the initial layout is reproducible; without one the
/// generator is seeded from OS entropy.
pub fn build_simulation_context(
    params: FluidParams,
    seed: Option<u64>,
) -> Result<SimulationContext, FluidError> {
    let integrator = Integrator::new(params)?;

    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let world = World::spawn(integrator.params(), &mut rng)?;

    log::info!(
        "spawned {} particles in a {}x{} world (dt={}, seed={:?}, clamp={:?})",
        world.len(),
        world.width(),
        world.height(),
        integrator.params().dt,
        seed,
        integrator.params().velocity_clamp,
    );

    Ok(SimulationContext {
        world,
        integrator,
        current_step: 0,
        max_steps: None,
        seed,
    })
}

/// Build a context around particles placed by the caller
pub fn build_simulation_context_from_world(
    params: FluidParams,
    world: World,
) -> Result<SimulationContext, FluidError> {
    let integrator = Integrator::new(params)?;
    Ok(SimulationContext {
        world,
        integrator,
        current_step: 0,
        max_steps: None,
        seed: None,
    })
}

/// Advance the simulation by one step of `params.dt`.
///
/// Returns `Ok(true)` once `max_steps` has been reached. A particle with a
/// non-finite state is reported as [`FluidError::NonFinite`].
pub fn step_simulation(ctx: &mut SimulationContext) -> Result<bool, FluidError> {
    if let Some(max) = ctx.max_steps {
        if ctx.current_step >= max {
            return Ok(true);
        }
    }

    let dt = ctx.integrator.params().dt;
    ctx.integrator.step(ctx.world.particles_mut(), dt);
    ctx.current_step += 1;

    check_finite(ctx.world.particles()).map_err(|index| FluidError::NonFinite {
        index,
        step: ctx.current_step,
    })?;

    if log::log_enabled!(log::Level::Trace) {
        log::trace!("step {}: {}", ctx.current_step, ctx.stats());
    }

    Ok(ctx.max_steps.map_or(false, |max| ctx.current_step >= max))
}

/// Current positions in index order, with the world bounds and step count
pub fn snapshot(ctx: &SimulationContext) -> Snapshot {
    Snapshot {
        step: ctx.current_step,
        width: ctx.world.width(),
        height: ctx.world.height(),
        positions: ctx.world.particles().iter().map(|p| p.pos).collect(),
    }
}
