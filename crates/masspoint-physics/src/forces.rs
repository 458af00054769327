//! Pluggable per-step force contributions

use crate::particle::Particle;

/// A force generator can be asked to add a force to one or more particles.
///
/// Implementations compute whatever force their model calls for and push it
/// into the particle's accumulator via [`Particle::add_force`]. A generator
/// may be invoked zero or more times per particle per step, always before
/// that particle is integrated. The particle borrow lasts only for the call;
/// generators keep no reference to their targets between steps.
pub trait ParticleForceGenerator {
    /// Calculate and add the force applied to the given particle for this
    /// step. `duration` is the elapsed frame time in seconds.
    fn update_force(&mut self, particle: &mut Particle, duration: f32);
}
