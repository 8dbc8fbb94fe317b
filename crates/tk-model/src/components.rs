//! Realized physical components and their numeric configurations.

use nalgebra::Point3;
use tk_core::Real;
use tk_structure::TagSet;

use crate::error::{ModelError, ModelResult};

/// Configuration for rigid links.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RodConfig {
    /// Rod radius, must be positive
    pub radius: Real,
    /// Density; zero makes the rod static (immovable)
    pub density: Real,
    /// Surface friction coefficient
    pub friction: Real,
}

impl RodConfig {
    /// Create a rod configuration.
    ///
    /// # Errors
    ///
    /// Returns error if `radius` is not positive or `density`/`friction`
    /// are negative. Zero density is allowed: it denotes a static rod.
    pub fn new(radius: Real, density: Real, friction: Real) -> ModelResult<Self> {
        if !radius.is_finite() || radius <= 0.0 {
            return Err(ModelError::InvalidArg {
                what: "rod radius must be positive",
            });
        }
        if !density.is_finite() || density < 0.0 {
            return Err(ModelError::InvalidArg {
                what: "rod density must be non-negative",
            });
        }
        if !friction.is_finite() || friction < 0.0 {
            return Err(ModelError::InvalidArg {
                what: "rod friction must be non-negative",
            });
        }
        Ok(Self {
            radius,
            density,
            friction,
        })
    }
}

/// Configuration for cable actuators.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CableConfig {
    /// Spring stiffness, must be positive
    pub stiffness: Real,
    /// Damping coefficient
    pub damping: Real,
    /// Pretension force applied at rest
    pub pretension: Real,
}

impl CableConfig {
    /// Create a cable configuration.
    ///
    /// # Errors
    ///
    /// Returns error if `stiffness` is not positive or `damping`/
    /// `pretension` are negative.
    pub fn new(stiffness: Real, damping: Real, pretension: Real) -> ModelResult<Self> {
        if !stiffness.is_finite() || stiffness <= 0.0 {
            return Err(ModelError::InvalidArg {
                what: "cable stiffness must be positive",
            });
        }
        if !damping.is_finite() || damping < 0.0 {
            return Err(ModelError::InvalidArg {
                what: "cable damping must be non-negative",
            });
        }
        if !pretension.is_finite() || pretension < 0.0 {
            return Err(ModelError::InvalidArg {
                what: "cable pretension must be non-negative",
            });
        }
        Ok(Self {
            stiffness,
            damping,
            pretension,
        })
    }
}

/// A non-actuated rigid rod spanning two anchor points.
#[derive(Clone, Debug, PartialEq)]
pub struct RigidLink {
    span: [Point3<Real>; 2],
    config: RodConfig,
    tags: TagSet,
}

impl RigidLink {
    pub fn new(span: [Point3<Real>; 2], config: RodConfig, tags: TagSet) -> Self {
        Self { span, config, tags }
    }

    pub fn span(&self) -> &[Point3<Real>; 2] {
        &self.span
    }

    pub fn config(&self) -> &RodConfig {
        &self.config
    }

    pub fn tags(&self) -> &TagSet {
        &self.tags
    }

    pub fn length(&self) -> Real {
        nalgebra::distance(&self.span[0], &self.span[1])
    }

    /// Geometric center of the cylinder (uniform density).
    pub fn center_of_mass(&self) -> Point3<Real> {
        nalgebra::center(&self.span[0], &self.span[1])
    }

    /// Mass from cylinder volume times density. Zero for static rods.
    pub fn mass(&self) -> Real {
        let volume = std::f64::consts::PI * self.config.radius.powi(2) * self.length();
        volume * self.config.density
    }

    pub fn is_static(&self) -> bool {
        self.config.density == 0.0
    }
}

/// A force-producing cable spanning two anchor points.
#[derive(Clone, Debug, PartialEq)]
pub struct CableActuator {
    span: [Point3<Real>; 2],
    config: CableConfig,
    tags: TagSet,
}

impl CableActuator {
    pub fn new(span: [Point3<Real>; 2], config: CableConfig, tags: TagSet) -> Self {
        Self { span, config, tags }
    }

    pub fn span(&self) -> &[Point3<Real>; 2] {
        &self.span
    }

    pub fn config(&self) -> &CableConfig {
        &self.config
    }

    pub fn tags(&self) -> &TagSet {
        &self.tags
    }

    pub fn length(&self) -> Real {
        nalgebra::distance(&self.span[0], &self.span[1])
    }

    /// Rest length implied by pretension: `F = k (L - L0)` at assembly.
    /// Clamped to zero when the pretension exceeds the taut length.
    pub fn rest_length(&self) -> Real {
        (self.length() - self.config.pretension / self.config.stiffness).max(0.0)
    }
}
