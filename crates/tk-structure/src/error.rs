//! Structure-specific error types.

use thiserror::Error;
use tk_core::NodeId;

pub type StructureResult<T> = Result<T, StructureError>;

/// Structure construction errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StructureError {
    /// A pair refers to a node that doesn't exist in the owning structure.
    #[error("Pair endpoint refers to non-existent node {node} (structure has {len} nodes)")]
    InvalidNodeRef { node: NodeId, len: usize },

    /// A pair connects a node to itself.
    #[error("Pair endpoints are the same node {node}")]
    DegeneratePair { node: NodeId },
}
