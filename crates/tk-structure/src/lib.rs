//! tk-structure: hierarchical tagged graph layer for tensekit.
//!
//! Provides:
//! - Ordered tag sets with substring label matching (`TagSet`)
//! - Core structure data types (`Node`, `Pair`, `Structure`)
//! - Rigid transforms that recurse through the ownership tree
//!
//! # Example
//!
//! ```
//! use nalgebra::{Point3, Vector3};
//! use tk_structure::{Structure, TagSet};
//!
//! let mut s = Structure::new();
//! let a = s.add_node(Point3::origin(), TagSet::from_tag("base"));
//! let b = s.add_node(Point3::new(0.0, 1.0, 0.0), TagSet::from_tag("tip"));
//! s.add_pair(a, b, TagSet::from_tag("front rod")).unwrap();
//! s.move_by(Vector3::new(0.0, 10.0, 0.0));
//!
//! assert_eq!(s.nodes().len(), 2);
//! assert_eq!(s.pairs().len(), 1);
//! ```

pub mod error;
pub mod structure;
pub mod tags;

// Re-exports for ergonomics
pub use error::StructureError;
pub use structure::{Node, Pair, Structure};
pub use tags::TagSet;
