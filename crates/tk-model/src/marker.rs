//! Instrumentation markers.

use nalgebra::Vector3;
use tk_core::{Real, RodId};

/// An instrumentation point fixed to a rigid component.
///
/// The offset is interpreted relative to the target component's center of
/// mass. Markers are owned by the model but only ever read by external
/// observers (motion capture, sensor emulation); nothing in the builder
/// pipeline consumes them.
#[derive(Clone, Debug, PartialEq)]
pub struct Marker {
    /// Rigid component the marker is fixed to.
    pub body: RodId,
    /// Offset from the component's center of mass.
    pub offset: Vector3<Real>,
    /// Facing direction of the marker.
    pub direction: Vector3<Real>,
    /// Free-form ordinal for external identification.
    pub ordinal: u32,
}

impl Marker {
    pub fn new(body: RodId, offset: Vector3<Real>, direction: Vector3<Real>, ordinal: u32) -> Self {
        Self {
            body,
            offset,
            direction,
            ordinal,
        }
    }
}
