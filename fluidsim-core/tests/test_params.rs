//! Tests for parameter and world validation

use fluidsim_core::{FluidError, FluidParams, Integrator, Particle, World};

#[test]
fn test_default_params_are_valid() {
    let params = FluidParams::default();
    assert!(params.validate().is_ok());
    assert_eq!(params.particle_count, 500);
    assert_eq!(params.speed_limit(params.dt), 11.5);
}

#[test]
fn test_non_positive_dt_is_rejected() {
    let params = FluidParams {
        dt: 0.0,
        ..FluidParams::default()
    };
    assert!(matches!(
        params.validate(),
        Err(FluidError::InvalidParams { field: "dt", .. })
    ));
}

#[test]
fn test_negative_min_distance_is_rejected() {
    let params = FluidParams {
        min_distance: -0.1,
        ..FluidParams::default()
    };
    let err = Integrator::new(params).unwrap_err();
    assert!(matches!(
        err,
        FluidError::InvalidParams {
            field: "min_distance",
            ..
        }
    ));
}

#[test]
fn test_zero_min_distance_is_allowed() {
    // `dist > 0` still excludes coincident particles
    let params = FluidParams {
        min_distance: 0.0,
        ..FluidParams::default()
    };
    assert!(params.validate().is_ok());
}

#[test]
fn test_cutoffs_must_exceed_min_distance() {
    let params = FluidParams {
        max_distance: 0.1,
        ..FluidParams::default()
    };
    assert!(params.validate().is_err());

    let params = FluidParams {
        max_distance_visc: 0.05,
        ..FluidParams::default()
    };
    assert!(params.validate().is_err());
}

#[test]
fn test_non_finite_values_are_rejected() {
    let params = FluidParams {
        viscosity: f64::NAN,
        ..FluidParams::default()
    };
    let err = params.validate().unwrap_err();
    assert!(err.to_string().contains("viscosity"));
}

#[test]
fn test_bad_world_size_is_rejected() {
    let params = FluidParams {
        world_width: 0.0,
        ..FluidParams::default()
    };
    assert!(matches!(
        params.validate(),
        Err(FluidError::InvalidBounds { .. })
    ));

    assert!(World::new(-1.0, 10.0, Vec::new()).is_err());
    assert!(World::new(10.0, f64::INFINITY, vec![Particle::at(1.0, 1.0)]).is_err());
    assert!(World::new(10.0, 10.0, vec![Particle::at(1.0, 1.0)]).is_ok());
}

#[test]
fn test_spawn_fraction_range() {
    let params = FluidParams {
        spawn_height_fraction: 1.5,
        ..FluidParams::default()
    };
    assert!(params.validate().is_err());
}
