//! tk-creator: turns tagged structures into runtime models.
//!
//! Provides:
//! - The `ComponentBuilder` capability trait and the concrete `RodInfo` /
//!   `CableInfo` builders
//! - `BuildSpec`, the ordered label-to-builder registry with
//!   first-registered-wins substring resolution
//! - `StructureInfo`, the engine that walks a structure tree and emits
//!   components into a `Model` and an external `World`
//!
//! # Example
//!
//! ```
//! use nalgebra::Point3;
//! use tk_creator::{BuildSpec, NullWorld, RodInfo, StructureInfo};
//! use tk_model::{Model, RodConfig};
//! use tk_structure::{Structure, TagSet};
//!
//! let mut s = Structure::new();
//! let a = s.add_node(Point3::origin(), TagSet::new());
//! let b = s.add_node(Point3::new(0.0, 2.0, 0.0), TagSet::new());
//! s.add_pair(a, b, TagSet::from_tag("rod")).unwrap();
//!
//! let mut spec = BuildSpec::new();
//! spec.register("rod", Box::new(RodInfo::new(RodConfig::new(0.5, 1.0, 0.5).unwrap())));
//!
//! let mut model = Model::new();
//! StructureInfo::new(&s, &spec)
//!     .build_into(&mut model, &mut NullWorld)
//!     .unwrap();
//! assert_eq!(model.rigids().len(), 1);
//! ```

pub mod builders;
pub mod error;
pub mod spec;
pub mod structure_info;
pub mod world;

pub use builders::{CableInfo, Component, ComponentBuilder, ComponentKind, RodInfo};
pub use error::{CreatorError, CreatorResult};
pub use spec::BuildSpec;
pub use structure_info::StructureInfo;
pub use world::{NullWorld, World};
