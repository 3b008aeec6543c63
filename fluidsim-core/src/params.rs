//! Physics constants for the fluid model
//!
//! All constants live in one immutable [`FluidParams`] value which is handed
//! to the [`Integrator`](crate::integrator::Integrator) when it is built.
//! Nothing in the core reads global state.

use crate::error::FluidError;

/// What to do when a particle's speed exceeds `max_velocity * dt`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VelocityClamp {
    /// Divide the velocity by its own magnitude, leaving a unit vector.
    /// This is the reference behavior and the default.
    #[default]
    NormalizeToUnit,
    /// Rescale the velocity to exactly `max_velocity * dt`.
    ClampToMax,
}

/// Immutable physics configuration for one simulation run
#[derive(Debug, Clone, PartialEq)]
pub struct FluidParams {
    pub particle_count: usize,
    pub dt: f64,
    /// Constant vertical force applied to every particle (negative is down)
    pub gravity: f64,
    pub world_width: f64,
    pub world_height: f64,
    /// Distance from the floor and side walls where boundary rules kick in
    pub boundary_width: f64,
    /// Upward force that replaces the accumulated vertical force near the floor
    pub floor_force: f64,
    /// Horizontal push away from a side wall
    pub wall_force: f64,
    /// Pairs closer than this never interact (guards against `dist == 0`)
    pub min_distance: f64,
    /// Pressure cutoff
    pub max_distance: f64,
    pub max_velocity: f64,
    /// Viscosity cutoff
    pub max_distance_visc: f64,
    pub viscosity: f64,
    /// Fraction of the world height used for initial placement
    pub spawn_height_fraction: f64,
    pub velocity_clamp: VelocityClamp,
}

impl Default for FluidParams {
    fn default() -> Self {
        Self {
            particle_count: 500,
            dt: 0.5,
            gravity: -1.0,
            world_width: 128.0,
            world_height: 128.0,
            boundary_width: 3.0,
            floor_force: 0.4,
            wall_force: 0.1,
            min_distance: 0.1,
            max_distance: 5.0,
            max_velocity: 23.0,
            max_distance_visc: 20.0,
            viscosity: 0.01,
            spawn_height_fraction: 0.4,
            velocity_clamp: VelocityClamp::NormalizeToUnit,
        }
    }
}

impl FluidParams {
    pub fn with_particle_count(mut self, count: usize) -> Self {
        self.particle_count = count;
        self
    }

    pub fn with_velocity_clamp(mut self, clamp: VelocityClamp) -> Self {
        self.velocity_clamp = clamp;
        self
    }

    /// Speed above which the velocity clamp applies
    pub fn speed_limit(&self, dt: f64) -> f64 {
        self.max_velocity * dt
    }

    /// Check that the constants describe a well-formed simulation
    pub fn validate(&self) -> Result<(), FluidError> {
        let fields = [
            ("dt", self.dt),
            ("gravity", self.gravity),
            ("world_width", self.world_width),
            ("world_height", self.world_height),
            ("boundary_width", self.boundary_width),
            ("floor_force", self.floor_force),
            ("wall_force", self.wall_force),
            ("min_distance", self.min_distance),
            ("max_distance", self.max_distance),
            ("max_velocity", self.max_velocity),
            ("max_distance_visc", self.max_distance_visc),
            ("viscosity", self.viscosity),
            ("spawn_height_fraction", self.spawn_height_fraction),
        ];
        for (field, value) in fields {
            if !value.is_finite() {
                return Err(FluidError::invalid(field, format!("{} is not finite", value)));
            }
        }

        if self.dt <= 0.0 {
            return Err(FluidError::invalid("dt", "must be positive"));
        }
        if self.world_width <= 0.0 || self.world_height <= 0.0 {
            return Err(FluidError::InvalidBounds {
                width: self.world_width,
                height: self.world_height,
            });
        }
        // `dist > min_distance` is the only thing keeping coincident
        // particles out of the 1/dist terms.
        if self.min_distance < 0.0 {
            return Err(FluidError::invalid("min_distance", "must not be negative"));
        }
        if self.max_distance <= self.min_distance {
            return Err(FluidError::invalid(
                "max_distance",
                "must be greater than min_distance",
            ));
        }
        if self.max_distance_visc <= self.min_distance {
            return Err(FluidError::invalid(
                "max_distance_visc",
                "must be greater than min_distance",
            ));
        }
        if self.max_velocity <= 0.0 {
            return Err(FluidError::invalid("max_velocity", "must be positive"));
        }
        if self.spawn_height_fraction <= 0.0 || self.spawn_height_fraction > 1.0 {
            return Err(FluidError::invalid(
                "spawn_height_fraction",
                "must be in (0, 1]",
            ));
        }

        Ok(())
    }
}
