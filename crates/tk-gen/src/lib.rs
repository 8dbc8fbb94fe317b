//! tk-gen: structure generators.
//!
//! Two ways to produce a buildable structure:
//! - `spine`: procedural replication of a prototype segment into a chain
//!   with auto-wired actuation between neighbors
//! - `schema` + `tensegrity`: a data-driven document (JSON or YAML)
//!   describing nodes, rods, and muscles, assembled into the same
//!   structure/spec pipeline

pub mod schema;
pub mod spine;
pub mod tensegrity;
pub mod validate;

pub use schema::{Document, load_json, load_yaml, parse_json, parse_yaml};
pub use spine::{ChainConfig, attach_mount_markers, build_chain, spine_build_spec, tetra_prototype};
pub use tensegrity::{assemble, build_model};
pub use validate::{ValidationError, validate_document};

pub type GenResult<T> = Result<T, GenError>;

#[derive(thiserror::Error, Debug)]
pub enum GenError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    NonFinite(#[from] tk_core::NonFinite),

    #[error(transparent)]
    Structure(#[from] tk_structure::StructureError),

    #[error(transparent)]
    Model(#[from] tk_model::ModelError),

    #[error(transparent)]
    Creator(#[from] tk_creator::CreatorError),
}
