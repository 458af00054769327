//! Point-mass particle with semi-implicit Euler integration

use crate::constants::{DEFAULT_DAMPING, DEFAULT_INVERSE_MASS};
use crate::vector::Vector3;

/// The simplest object that can be simulated with physics: a point mass
/// holding position and velocity, no orientation.
#[derive(Clone, Copy, Debug)]
pub struct Particle {
    /// Position in world space.
    pub position: Vector3,
    /// Linear velocity.
    pub velocity: Vector3,
    /// Constant acceleration applied every step, set by the caller
    /// (typically gravity).
    pub acceleration: Vector3,
    /// Per-second multiplicative velocity decay in (0, 1]. Removes energy
    /// added through numerical instability in the integrator, kind of
    /// friction but not really.
    pub damping: f32,
    /// Accumulated force to be applied at the next integration step only.
    /// Zeroed after each step.
    pub force_accum: Vector3,
    /// Inverse mass. Zero encodes infinite mass, which is more useful than
    /// zero mass: walls and floors never move no matter the applied force.
    /// Kept private so the immovability encoding goes through the setters.
    inverse_mass: f32,
}

impl Particle {
    /// A movable particle at rest at `position`, with unit mass and the
    /// default damping.
    pub fn new(position: Vector3) -> Self {
        Self {
            position,
            velocity: Vector3::ZERO,
            acceleration: Vector3::ZERO,
            damping: DEFAULT_DAMPING,
            force_accum: Vector3::ZERO,
            inverse_mass: DEFAULT_INVERSE_MASS,
        }
    }

    /// Set the inverse mass directly. Zero marks the particle immovable.
    pub fn set_inverse_mass(&mut self, inverse_mass: f32) {
        self.inverse_mass = inverse_mass;
    }

    /// Set the mass. Must be nonzero; immovable bodies are expressed as
    /// `set_inverse_mass(0.0)`, not as zero mass.
    pub fn set_mass(&mut self, mass: f32) {
        assert!(mass != 0.0);
        self.inverse_mass = 1.0 / mass;
    }

    pub fn inverse_mass(&self) -> f32 {
        self.inverse_mass
    }

    /// Mass of the particle, infinite for immovable bodies.
    pub fn mass(&self) -> f32 {
        if self.inverse_mass == 0.0 {
            f32::INFINITY
        } else {
            1.0 / self.inverse_mass
        }
    }

    pub fn has_finite_mass(&self) -> bool {
        self.inverse_mass > 0.0
    }

    /// Add a force to be applied at the next integration step only.
    /// Accumulation is order-independent.
    pub fn add_force(&mut self, force: Vector3) {
        self.force_accum += force;
    }

    /// Clear the accumulated forces. Called automatically after each
    /// integration step.
    pub fn clear_accumulator(&mut self) {
        self.force_accum.clear();
    }

    /// Advance the particle by `duration` seconds of semi-implicit Euler.
    ///
    /// Position moves along the pre-step velocity first, then velocity
    /// picks up the frame's acceleration. The one-step lag is what keeps
    /// oscillatory setups stable compared to fully explicit Euler.
    ///
    /// Immovable particles (infinite mass) are left entirely untouched,
    /// accumulator included.
    ///
    /// # Panics
    ///
    /// Panics if `duration <= 0`, which always indicates caller misuse
    /// (a zero-length or negative frame time).
    pub fn integrate(&mut self, duration: f32) {
        // We don't integrate things with infinite mass.
        if self.inverse_mass <= 0.0 {
            return;
        }
        assert!(duration > 0.0);

        // Update linear position from the pre-step velocity.
        self.position.add_scaled(self.velocity, duration);

        // Work out the acceleration from the accumulated force.
        let mut resulting_acc = self.acceleration;
        resulting_acc.add_scaled(self.force_accum, self.inverse_mass);

        // Update linear velocity from the acceleration.
        self.velocity.add_scaled(resulting_acc, duration);

        // Impose drag. Exponentiated so decay is independent of step size.
        self.velocity *= self.damping.powf(duration);

        self.clear_accumulator();
    }
}

impl Default for Particle {
    fn default() -> Self {
        Self::new(Vector3::ZERO)
    }
}
