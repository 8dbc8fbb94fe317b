//! Component builders: the capability resolved by tag dispatch.

use nalgebra::Point3;
use tk_core::Real;
use tk_model::{CableActuator, CableConfig, RigidLink, RodConfig};
use tk_structure::TagSet;

/// The two realized component kinds.
///
/// Resolution runs in two passes keyed on this: rigid links are realized
/// before actuators, so cables always span already-built bodies.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ComponentKind {
    Rigid,
    Actuator,
}

/// A component produced by a builder.
#[derive(Clone, Debug)]
pub enum Component {
    Rigid(RigidLink),
    Actuator(CableActuator),
}

impl Component {
    pub fn kind(&self) -> ComponentKind {
        match self {
            Component::Rigid(_) => ComponentKind::Rigid,
            Component::Actuator(_) => ComponentKind::Actuator,
        }
    }
}

/// A capability that turns one resolved pair into one runtime component.
///
/// Builders receive the pair's endpoint coordinates and tags; their numeric
/// configuration is passed into their constructor, never through shared
/// process-wide state.
pub trait ComponentBuilder {
    /// Which pass this builder's output belongs to.
    fn kind(&self) -> ComponentKind;

    /// Build the component for a pair spanning `span`, carrying `tags`.
    fn build(&self, span: [Point3<Real>; 2], tags: &TagSet) -> Component;
}

/// Builds rigid links from a fixed rod configuration.
#[derive(Clone, Debug)]
pub struct RodInfo {
    config: RodConfig,
}

impl RodInfo {
    pub fn new(config: RodConfig) -> Self {
        Self { config }
    }
}

impl ComponentBuilder for RodInfo {
    fn kind(&self) -> ComponentKind {
        ComponentKind::Rigid
    }

    fn build(&self, span: [Point3<Real>; 2], tags: &TagSet) -> Component {
        Component::Rigid(RigidLink::new(span, self.config, tags.clone()))
    }
}

/// Builds cable actuators from a fixed cable configuration.
#[derive(Clone, Debug)]
pub struct CableInfo {
    config: CableConfig,
}

impl CableInfo {
    pub fn new(config: CableConfig) -> Self {
        Self { config }
    }
}

impl ComponentBuilder for CableInfo {
    fn kind(&self) -> ComponentKind {
        ComponentKind::Actuator
    }

    fn build(&self, span: [Point3<Real>; 2], tags: &TagSet) -> Component {
        Component::Actuator(CableActuator::new(span, self.config, tags.clone()))
    }
}
