//! Unit tests for the viscosity term

use fluidsim_core::tests::test_helpers::{approx_eq, test_params};
use fluidsim_core::{Integrator, Particle};
use glam::DVec2;

fn integrator() -> Integrator {
    Integrator::new(test_params(2)).expect("default params are valid")
}

fn accumulate(integrator: &Integrator, particles: &mut [Particle]) {
    integrator.clear_forces(particles);
    integrator.accumulate_forces(particles);
}

#[test]
fn test_viscosity_scales_velocity_difference_by_distance() {
    let integrator = integrator();
    // 10 units apart: outside the pressure cutoff, inside the viscosity one
    let mut particles = vec![
        Particle::at(60.0, 64.0),
        Particle::at(70.0, 64.0).with_velocity(1.0, 0.0),
    ];

    accumulate(&integrator, &mut particles);

    // 0.01 * (v_target - v_source) / 10
    assert!(approx_eq(particles[1].force.x, 0.001, 1e-15));
    assert!(approx_eq(particles[0].force.x, -0.001, 1e-15));
    assert_eq!(particles[0].force.y, -1.0);
    assert_eq!(particles[1].force.y, -1.0);
}

#[test]
fn test_viscosity_cutoff() {
    let integrator = integrator();
    let source = Particle::at(60.0, 64.0);
    let at_cutoff = Particle::at(80.0, 64.0).with_velocity(3.0, 3.0);
    let inside = Particle::at(79.0, 64.0).with_velocity(3.0, 3.0);

    assert_eq!(integrator.viscosity(&source, &at_cutoff), DVec2::ZERO);
    assert!(integrator.viscosity(&source, &inside).length() > 0.0);
}

#[test]
fn test_equal_velocities_produce_no_viscosity() {
    let integrator = integrator();
    let a = Particle::at(50.0, 50.0).with_velocity(2.0, -1.0);
    let b = Particle::at(55.0, 58.0).with_velocity(2.0, -1.0);

    assert_eq!(integrator.viscosity(&a, &b), DVec2::ZERO);
    assert_eq!(integrator.viscosity(&b, &a), DVec2::ZERO);
}

#[test]
fn test_later_sources_see_velocity_zeroed_by_wall() {
    let integrator = integrator();
    // Particle 1 sits in the left wall band moving outwards. When particle 0
    // is visited its velocity is still -2; by the time particle 1 is the
    // source the wall rule has zeroed it.
    let mut particles = vec![
        Particle::at(10.0, 64.0),
        Particle::at(1.0, 64.0).with_velocity(-2.0, 0.0),
    ];

    accumulate(&integrator, &mut particles);

    assert_eq!(particles[1].vel.x, 0.0);
    assert!(approx_eq(particles[1].force.x, 0.1 + 0.01 * -2.0 / 9.0, 1e-15));
    assert_eq!(particles[0].force.x, 0.0);
}
