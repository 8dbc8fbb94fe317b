//! Schema document definitions and loaders.
//!
//! Every numeric field is required: a missing or mistyped field is a parse
//! failure, reported before any structure or model exists.

use serde::{Deserialize, Serialize};

use crate::{GenResult, validate::validate_document};

/// A complete structure description document.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Document {
    pub structure: StructureDef,
    pub parameters: ParametersDef,
}

/// Node, rod, and muscle lists. Rod and muscle entries reference nodes by
/// 1-based index.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StructureDef {
    pub nodes: Vec<[f64; 3]>,
    pub rods: Vec<[usize; 2]>,
    pub muscles: Vec<[usize; 2]>,
}

/// Global numeric parameters for both component kinds.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ParametersDef {
    pub rods: RodParamsDef,
    pub muscles: MuscleParamsDef,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RodParamsDef {
    pub radius: f64,
    pub density: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MuscleParamsDef {
    pub stiffness: f64,
    pub damping: f64,
    pub pretension: f64,
}

/// Parse and validate a JSON document.
pub fn parse_json(content: &str) -> GenResult<Document> {
    let document: Document = serde_json::from_str(content)?;
    validate_document(&document)?;
    Ok(document)
}

/// Parse and validate a YAML document.
pub fn parse_yaml(content: &str) -> GenResult<Document> {
    let document: Document = serde_yaml::from_str(content)?;
    validate_document(&document)?;
    Ok(document)
}

pub fn load_json(path: &std::path::Path) -> GenResult<Document> {
    parse_json(&std::fs::read_to_string(path)?)
}

pub fn load_yaml(path: &std::path::Path) -> GenResult<Document> {
    parse_yaml(&std::fs::read_to_string(path)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::GenError;

    const THREE_STRUT: &str = r#"{
        "structure": {
            "nodes": [
                [-5.0, 0.0, 0.0], [5.0, 0.0, 0.0],
                [0.0, -5.0, 2.0], [0.0, 5.0, 2.0],
                [2.0, 0.0, 4.0], [-2.0, 0.0, 4.0]
            ],
            "rods": [[1, 2], [3, 4], [5, 6]],
            "muscles": [[1, 3], [2, 4], [3, 5], [4, 6], [5, 1], [6, 2]]
        },
        "parameters": {
            "rods": { "radius": 0.5, "density": 1.75 },
            "muscles": { "stiffness": 600.0, "damping": 200.0, "pretension": 50.0 }
        }
    }"#;

    #[test]
    fn parse_json_document() {
        let doc = parse_json(THREE_STRUT).unwrap();
        assert_eq!(doc.structure.nodes.len(), 6);
        assert_eq!(doc.structure.rods.len(), 3);
        assert_eq!(doc.structure.muscles.len(), 6);
        assert_eq!(doc.parameters.rods.radius, 0.5);
        assert_eq!(doc.parameters.muscles.pretension, 50.0);
    }

    #[test]
    fn missing_numeric_field_is_a_parse_failure() {
        // serde rejects the document: pretension has no default
        let truncated = THREE_STRUT.replace(r#", "pretension": 50.0"#, "");
        let err = parse_json(&truncated).unwrap_err();
        assert!(matches!(err, GenError::Json(_)));
    }

    #[test]
    fn type_mismatch_is_a_parse_failure() {
        let bad = THREE_STRUT.replace(r#""radius": 0.5"#, r#""radius": "thin""#);
        assert!(matches!(parse_json(&bad).unwrap_err(), GenError::Json(_)));
    }

    #[test]
    fn yaml_and_json_agree() {
        let yaml = r#"
structure:
  nodes:
    - [0.0, 0.0, 0.0]
    - [1.0, 0.0, 0.0]
  rods:
    - [1, 2]
  muscles: []
parameters:
  rods: { radius: 0.5, density: 1.0 }
  muscles: { stiffness: 1000.0, damping: 10.0, pretension: 0.0 }
"#;
        let doc = parse_yaml(yaml).unwrap();
        assert_eq!(doc.structure.nodes.len(), 2);
        assert_eq!(doc.structure.rods, vec![[1, 2]]);
        assert!(doc.structure.muscles.is_empty());
    }
}
