//! Particle ownership and the per-step call sequence
//!
//! The core's contract is that every active particle gets all of its force
//! contributions for a step before it is integrated, and is integrated
//! exactly once. [`ParticleWorld::step`] enforces that ordering
//! structurally: one registry pass over all particles, then one integration
//! pass.

use crate::registry::ForceRegistry;
use masspoint_physics::{Particle, ParticleForceGenerator};

/// Stable identifier for a particle added to a [`ParticleWorld`].
///
/// Particles are never removed, so a handle stays valid for the lifetime of
/// the world that issued it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ParticleHandle(usize);

impl ParticleHandle {
    pub(crate) fn new(index: usize) -> Self {
        Self(index)
    }

    pub(crate) fn index(self) -> usize {
        self.0
    }
}

/// Owns the simulated particles and their force-generator registry, and
/// advances them frame by frame.
#[derive(Default)]
pub struct ParticleWorld {
    particles: Vec<Particle>,
    registry: ForceRegistry,
}

impl ParticleWorld {
    pub fn new() -> Self {
        log::info!("Initializing ParticleWorld...");
        Self::default()
    }

    /// Take ownership of a particle and return its handle.
    pub fn add_particle(&mut self, particle: Particle) -> ParticleHandle {
        self.particles.push(particle);
        ParticleHandle::new(self.particles.len() - 1)
    }

    pub fn particle(&self, handle: ParticleHandle) -> Option<&Particle> {
        self.particles.get(handle.index())
    }

    pub fn particle_mut(&mut self, handle: ParticleHandle) -> Option<&mut Particle> {
        self.particles.get_mut(handle.index())
    }

    /// All particles in insertion order, e.g. for a renderer building
    /// per-object transforms from the resulting positions.
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn particle_count(&self) -> usize {
        self.particles.len()
    }

    /// Register a force generator against a particle for every following
    /// step.
    pub fn add_force_generator(
        &mut self,
        handle: ParticleHandle,
        generator: Box<dyn ParticleForceGenerator>,
    ) {
        self.registry.add(handle, generator);
    }

    /// Drop every generator registered against the given particle.
    pub fn remove_force_generators(&mut self, handle: ParticleHandle) {
        self.registry.remove_all(handle);
    }

    /// Advance the whole world by `duration` seconds: apply every
    /// registered force generator, then integrate each particle exactly
    /// once.
    ///
    /// # Panics
    ///
    /// Panics if `duration <= 0`, the same fatal caller-misuse contract as
    /// [`Particle::integrate`].
    pub fn step(&mut self, duration: f32) {
        assert!(duration > 0.0);
        log::trace!(
            "step: {} particles, dt = {duration}s",
            self.particles.len()
        );

        self.registry.update_forces(&mut self.particles, duration);
        for particle in &mut self.particles {
            particle.integrate(duration);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use masspoint_physics::Vector3;

    struct ConstantForce {
        force: Vector3,
    }

    impl ParticleForceGenerator for ConstantForce {
        fn update_force(&mut self, particle: &mut Particle, _duration: f32) {
            particle.add_force(self.force);
        }
    }

    #[test]
    fn test_handles_resolve_to_their_particles() {
        let mut world = ParticleWorld::new();
        let a = world.add_particle(Particle::new(Vector3::new(1.0, 0.0, 0.0)));
        let b = world.add_particle(Particle::new(Vector3::new(2.0, 0.0, 0.0)));

        assert_eq!(world.particle_count(), 2);
        assert_eq!(world.particle(a).unwrap().position.x, 1.0);
        assert_eq!(world.particle(b).unwrap().position.x, 2.0);
    }

    #[test]
    fn test_forces_apply_before_integration() {
        let mut world = ParticleWorld::new();
        let handle = world.add_particle(Particle::new(Vector3::ZERO));
        world.particle_mut(handle).unwrap().damping = 1.0;
        world.add_force_generator(
            handle,
            Box::new(ConstantForce {
                force: Vector3::new(2.0, 0.0, 0.0),
            }),
        );

        world.step(0.5);

        // The generator's force landed in the same step: v = f * m^-1 * dt.
        let particle = world.particle(handle).unwrap();
        assert_eq!(particle.velocity, Vector3::new(1.0, 0.0, 0.0));
        assert_eq!(particle.force_accum, Vector3::ZERO);
    }

    #[test]
    fn test_immovable_particles_ride_through_steps() {
        let mut world = ParticleWorld::new();
        let anchor = world.add_particle(Particle::new(Vector3::new(0.0, 10.0, 0.0)));
        world.particle_mut(anchor).unwrap().set_inverse_mass(0.0);
        world.add_force_generator(
            anchor,
            Box::new(ConstantForce {
                force: Vector3::new(0.0, -100.0, 0.0),
            }),
        );

        for _ in 0..10 {
            world.step(0.1);
        }

        assert_eq!(
            world.particle(anchor).unwrap().position,
            Vector3::new(0.0, 10.0, 0.0)
        );
    }

    #[test]
    fn test_free_fall_matches_hand_integration() {
        let mut world = ParticleWorld::new();
        let handle = world.add_particle(Particle::new(Vector3::ZERO));
        {
            let p = world.particle_mut(handle).unwrap();
            p.damping = 1.0;
            p.acceleration = Vector3::new(0.0, -9.8, 0.0);
        }

        world.step(1.0);
        world.step(1.0);

        let p = world.particle(handle).unwrap();
        assert_eq!(p.position, Vector3::new(0.0, -9.8, 0.0));
        assert_eq!(p.velocity, Vector3::new(0.0, -19.6, 0.0));
    }

    #[test]
    fn test_removing_generators_stops_their_forces() {
        let mut world = ParticleWorld::new();
        let handle = world.add_particle(Particle::new(Vector3::ZERO));
        world.particle_mut(handle).unwrap().damping = 1.0;
        world.add_force_generator(
            handle,
            Box::new(ConstantForce {
                force: Vector3::new(1.0, 0.0, 0.0),
            }),
        );

        world.step(1.0);
        world.remove_force_generators(handle);
        world.step(1.0);

        // Velocity from the first step persists, nothing new was added.
        assert_eq!(
            world.particle(handle).unwrap().velocity,
            Vector3::new(1.0, 0.0, 0.0)
        );
    }

    #[test]
    #[should_panic]
    fn test_nonpositive_step_is_fatal() {
        let mut world = ParticleWorld::new();
        world.add_particle(Particle::new(Vector3::ZERO));
        world.step(0.0);
    }
}
