//! Document validation logic.

use crate::schema::Document;

#[derive(thiserror::Error, Debug)]
pub enum ValidationError {
    #[error("Document has no nodes")]
    NoNodes,

    #[error("{list} entry {entry} references node {index} (valid range 1..={len})")]
    IndexOutOfRange {
        list: &'static str,
        entry: usize,
        index: usize,
        len: usize,
    },

    #[error("{list} entry {entry} connects node {index} to itself")]
    SelfLoop {
        list: &'static str,
        entry: usize,
        index: usize,
    },

    #[error("Invalid value: {field} = {value} ({reason})")]
    InvalidValue {
        field: &'static str,
        value: f64,
        reason: &'static str,
    },
}

/// Validate a parsed document before any assembly happens.
///
/// Checks 1-based index ranges for rods and muscles and the sign of every
/// global parameter. Zero density is allowed (static rods).
pub fn validate_document(document: &Document) -> Result<(), ValidationError> {
    let len = document.structure.nodes.len();
    if len == 0 {
        return Err(ValidationError::NoNodes);
    }

    validate_index_pairs("rods", &document.structure.rods, len)?;
    validate_index_pairs("muscles", &document.structure.muscles, len)?;

    let rods = &document.parameters.rods;
    ensure_positive("parameters.rods.radius", rods.radius)?;
    ensure_non_negative("parameters.rods.density", rods.density)?;

    let muscles = &document.parameters.muscles;
    ensure_positive("parameters.muscles.stiffness", muscles.stiffness)?;
    ensure_non_negative("parameters.muscles.damping", muscles.damping)?;
    ensure_non_negative("parameters.muscles.pretension", muscles.pretension)?;

    Ok(())
}

fn validate_index_pairs(
    list: &'static str,
    pairs: &[[usize; 2]],
    len: usize,
) -> Result<(), ValidationError> {
    for (entry, pair) in pairs.iter().enumerate() {
        for &index in pair {
            if index == 0 || index > len {
                return Err(ValidationError::IndexOutOfRange {
                    list,
                    entry,
                    index,
                    len,
                });
            }
        }
        if pair[0] == pair[1] {
            return Err(ValidationError::SelfLoop {
                list,
                entry,
                index: pair[0],
            });
        }
    }
    Ok(())
}

fn ensure_positive(field: &'static str, value: f64) -> Result<(), ValidationError> {
    if value > 0.0 {
        Ok(())
    } else {
        Err(ValidationError::InvalidValue {
            field,
            value,
            reason: "must be positive",
        })
    }
}

fn ensure_non_negative(field: &'static str, value: f64) -> Result<(), ValidationError> {
    if value >= 0.0 {
        Ok(())
    } else {
        Err(ValidationError::InvalidValue {
            field,
            value,
            reason: "must be non-negative",
        })
    }
}
