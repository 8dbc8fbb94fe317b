//! tk-model: runtime components assembled from a resolved structure.
//!
//! Provides:
//! - Realized component types (`RigidLink`, `CableActuator`) and their
//!   numeric configurations (`RodConfig`, `CableConfig`)
//! - Instrumentation markers attached to rigid components
//! - The owning `Model` with tag queries, observers, stepping, and teardown

pub mod components;
pub mod error;
pub mod marker;
pub mod model;

pub use components::{CableActuator, CableConfig, RigidLink, RodConfig};
pub use error::{ModelError, ModelResult};
pub use marker::Marker;
pub use model::{Model, ModelObserver};
