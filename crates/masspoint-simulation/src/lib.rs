//! # Masspoint Simulation
//!
//! Per-step orchestration for the point-mass physics core: pairs particles
//! with their active force generators and drives each frame's update
//! sequence (all force contributions first, then one integration per
//! particle).

pub mod registry;
pub mod world;

pub use registry::*;
pub use world::*;
