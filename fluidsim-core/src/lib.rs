pub mod diagnostics;
pub mod engine;
pub mod error;
pub mod integrator;
pub mod params;
pub mod runtime;
pub mod spawn;

pub use diagnostics::{check_finite, FrameStats};
pub use engine::{Particle, World};
pub use error::FluidError;
pub use integrator::Integrator;
pub use params::{FluidParams, VelocityClamp};
pub use runtime::{
    build_simulation_context, build_simulation_context_from_world, snapshot, step_simulation,
    SimulationContext, Snapshot,
};
pub use spawn::spawn_particles;
