//! Seam to the external simulation world.

use tk_model::{CableActuator, RigidLink};

/// The external simulation environment.
///
/// The world receives completed components by reference for integration
/// into its dynamics step; the builder pipeline never performs dynamics
/// itself. Ownership of components stays with the [`tk_model::Model`].
pub trait World {
    fn add_rigid(&mut self, link: &RigidLink);

    fn add_actuator(&mut self, cable: &CableActuator);
}

/// A world that ignores everything. Useful for assembling a model without
/// a physics backend (validation, counting, dry runs).
#[derive(Debug, Default, Clone, Copy)]
pub struct NullWorld;

impl World for NullWorld {
    fn add_rigid(&mut self, _link: &RigidLink) {}

    fn add_actuator(&mut self, _cable: &CableActuator) {}
}
