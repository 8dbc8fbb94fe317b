//! Schema-driven generator: document → structure + build spec → model.

use nalgebra::Point3;
use tk_core::NodeId;
use tk_creator::{BuildSpec, CableInfo, RodInfo, StructureInfo, World};
use tk_model::{CableConfig, Model, RodConfig};
use tk_structure::{Structure, TagSet};

use crate::schema::Document;
use crate::validate::validate_document;
use crate::GenResult;

/// Friction for schema-built rods; the document doesn't carry one.
const DEFAULT_FRICTION: f64 = 1.0;

/// Assemble a validated document into a structure and its build spec.
///
/// One node per document entry (1-based indices converted to 0-based), one
/// `"rod"` pair per rod entry, one `"muscle"` pair per muscle entry, and
/// exactly two registered builders configured from the global parameters.
pub fn assemble(document: &Document) -> GenResult<(Structure, BuildSpec)> {
    validate_document(document)?;

    let mut structure = Structure::new();
    for &[x, y, z] in &document.structure.nodes {
        structure.add_node(Point3::new(x, y, z), TagSet::new());
    }
    for &[a, b] in &document.structure.rods {
        structure.add_pair(node_id(a), node_id(b), TagSet::from_tag("rod"))?;
    }
    for &[a, b] in &document.structure.muscles {
        structure.add_pair(node_id(a), node_id(b), TagSet::from_tag("muscle"))?;
    }

    let rods = &document.parameters.rods;
    let muscles = &document.parameters.muscles;
    let rod_config = RodConfig::new(rods.radius, rods.density, DEFAULT_FRICTION)?;
    let cable_config = CableConfig::new(muscles.stiffness, muscles.damping, muscles.pretension)?;

    let mut spec = BuildSpec::new();
    spec.register("rod", Box::new(RodInfo::new(rod_config)));
    spec.register("muscle", Box::new(CableInfo::new(cable_config)));

    tracing::debug!(
        nodes = structure.nodes().len(),
        pairs = structure.pairs().len(),
        "document assembled"
    );
    Ok((structure, spec))
}

/// Convert a 1-based document index to a structure node ID.
fn node_id(one_based: usize) -> NodeId {
    NodeId::from_index((one_based - 1) as u32)
}

/// Assemble a document and resolve it straight into a fresh model.
pub fn build_model(document: &Document, world: &mut dyn World) -> GenResult<Model> {
    let (structure, spec) = assemble(document)?;
    let mut model = Model::new();
    StructureInfo::new(&structure, &spec).build_into(&mut model, world)?;
    Ok(model)
}
