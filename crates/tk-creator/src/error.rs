//! Error types for structure resolution.

use thiserror::Error;

/// Errors encountered while resolving a structure into a model.
#[derive(Error, Debug)]
pub enum CreatorError {
    /// A pair's tags matched no registered label. Fatal: a dangling,
    /// unbuilt pair would corrupt the assembled topology.
    #[error("No registered builder matches pair tagged [{tags}]")]
    UnresolvedPair { tags: String },

    /// A builder produced a component of a different kind than it declared.
    #[error("Builder for label '{label}' produced a component of the wrong kind")]
    KindMismatch { label: String },
}

pub type CreatorResult<T> = Result<T, CreatorError>;
