//! Pairing of particles with their active force generators
//!
//! The physics core deliberately keeps generators unaware of each other and
//! of particle ownership; this registry is the bookkeeping that calls each
//! one at the right time. Registrations reference particles by handle, so
//! generators never hold a particle across steps.

use crate::world::ParticleHandle;
use masspoint_physics::{Particle, ParticleForceGenerator};

struct Registration {
    particle: ParticleHandle,
    generator: Box<dyn ParticleForceGenerator>,
}

/// Holds all force generators and the particles they apply to.
#[derive(Default)]
pub struct ForceRegistry {
    registrations: Vec<Registration>,
}

impl ForceRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a generator to be applied to the given particle every step.
    /// The same particle can carry any number of generators.
    pub fn add(&mut self, particle: ParticleHandle, generator: Box<dyn ParticleForceGenerator>) {
        self.registrations.push(Registration {
            particle,
            generator,
        });
    }

    /// Drop every generator registered against the given particle.
    pub fn remove_all(&mut self, particle: ParticleHandle) {
        self.registrations.retain(|r| r.particle != particle);
    }

    /// Drop all registrations. The generators are gone, the particles are
    /// not affected.
    pub fn clear(&mut self) {
        self.registrations.clear();
    }

    pub fn len(&self) -> usize {
        self.registrations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.registrations.is_empty()
    }

    /// Have every registered generator push its force into its particle's
    /// accumulator. Must run before the particles are integrated.
    pub fn update_forces(&mut self, particles: &mut [Particle], duration: f32) {
        for registration in &mut self.registrations {
            if let Some(particle) = particles.get_mut(registration.particle.index()) {
                registration.generator.update_force(particle, duration);
            }
        }
    }
}
