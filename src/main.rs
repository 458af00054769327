//! Point-Mass Physics Demo
//!
//! Headless driver for the physics core: spawns a cloud of falling
//! particles, wires one of them to a constant thruster through the force
//! registry, and runs a fixed-step loop, logging the resulting motion.

use glam::Vec3;
use masspoint_physics::{Particle, ParticleForceGenerator, Vector3};
use masspoint_simulation::ParticleWorld;
use rand::Rng;

const PARTICLE_COUNT: usize = 64;
const SPAWN_RADIUS: f32 = 10.0;
const GRAVITY: Vector3 = Vector3::new(0.0, -9.8, 0.0);
const STEP_SECONDS: f32 = 1.0 / 60.0;
const SIMULATED_SECONDS: usize = 10;

/// Pushes a fixed force every step. The simplest generator there is, here
/// only to exercise the registry; real force models plug in the same way.
struct ConstantThrust {
    force: Vector3,
}

impl ParticleForceGenerator for ConstantThrust {
    fn update_force(&mut self, particle: &mut Particle, _duration: f32) {
        particle.add_force(self.force);
    }
}

/// Initialize particles uniformly inside a sphere, all under gravity
fn initialize_particles() -> Vec<Particle> {
    let mut rng = rand::rng();
    let mut particles = Vec::with_capacity(PARTICLE_COUNT);

    for _ in 0..PARTICLE_COUNT {
        // Random position in sphere
        let theta = rng.random::<f32>() * std::f32::consts::TAU;
        let cos_phi = rng.random::<f32>() * 2.0 - 1.0;
        let sin_phi = (1.0 - cos_phi * cos_phi).sqrt();
        let r = rng.random::<f32>().powf(1.0 / 3.0) * SPAWN_RADIUS;

        let x = r * sin_phi * theta.cos();
        let y = r * sin_phi * theta.sin();
        let z = r * cos_phi;
        let pos = Vec3::new(x, y, z);

        let mut particle = Particle::new(pos.into());
        particle.acceleration = GRAVITY;
        particle.set_mass(rng.random_range(0.5..2.0));
        particles.push(particle);
    }

    log::info!("✓ Initialized {} particles", PARTICLE_COUNT);
    particles
}

fn main() {
    env_logger::init();

    let mut world = ParticleWorld::new();
    let handles: Vec<_> = initialize_particles()
        .into_iter()
        .map(|p| world.add_particle(p))
        .collect();

    // An immovable anchor below the cloud; forces and gravity never move it.
    let anchor = world.add_particle(Particle::new(Vector3::new(0.0, -50.0, 0.0)));
    world
        .particle_mut(anchor)
        .expect("anchor was just added")
        .set_inverse_mass(0.0);

    // The first spawned particle fights gravity with a constant thruster.
    let thrusted = handles[0];
    let thrust_force = Vector3::new(0.0, 25.0, 0.0);
    world.add_force_generator(
        thrusted,
        Box::new(ConstantThrust {
            force: thrust_force,
        }),
    );
    log::info!(
        "Thruster attached to particle {:?} with force {:?}",
        thrusted,
        thrust_force
    );

    let steps_per_second = (1.0 / STEP_SECONDS).round() as usize;
    for second in 0..SIMULATED_SECONDS {
        for _ in 0..steps_per_second {
            world.step(STEP_SECONDS);
        }

        let thrusted_pos = world
            .particle(thrusted)
            .expect("thrusted particle exists")
            .position;
        let anchor_pos = world
            .particle(anchor)
            .expect("anchor exists")
            .position;
        log::info!(
            "t = {:>2}s: thrusted particle at {:?}, anchor at {:?}",
            second + 1,
            thrusted_pos.to_array(),
            anchor_pos.to_array()
        );
    }

    let lowest = world
        .particles()
        .iter()
        .filter(|p| p.has_finite_mass())
        .map(|p| p.position.y)
        .fold(f32::INFINITY, f32::min);
    log::info!(
        "Done: {} particles simulated for {}s, lowest movable particle at y = {lowest:.1}",
        world.particle_count(),
        SIMULATED_SECONDS
    );
}
