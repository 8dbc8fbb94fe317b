//! tk-core: stable foundation for tensekit.
//!
//! Contains:
//! - ids (stable compact IDs for structure/model objects)
//! - numeric (Real + tolerances + finiteness checking)

pub mod ids;
pub mod numeric;

// Re-exports: nice ergonomics for downstream crates
pub use ids::*;
pub use numeric::*;
