//! Procedural segment generator: replicate a prototype into a chain and
//! auto-wire actuation between neighbors.

use nalgebra::{Point3, Vector3};
use tk_core::{Real, RodId, ensure_finite};
use tk_creator::{BuildSpec, CableInfo, RodInfo};
use tk_model::{CableConfig, Marker, Model, RodConfig};
use tk_structure::{Node, Structure, TagSet};

use crate::{GenError, GenResult};

/// Replication settings for a segment chain.
#[derive(Clone, Debug)]
pub struct ChainConfig {
    /// Number of prototype copies, at least 1.
    pub segments: usize,
    /// Fixed translation between consecutive segments.
    pub offset: Vector3<Real>,
}

impl Default for ChainConfig {
    fn default() -> Self {
        Self {
            segments: 6,
            offset: Vector3::new(0.0, 0.0, -21.5),
        }
    }
}

/// Build the canonical tetrahedral segment prototype.
///
/// Four structural nodes (right/left/top base, front tip) plus two derived
/// midpoint nodes tagged `"mount"` for instrumentation, connected by eight
/// rod pairs. Node order is the positional convention the chain wiring
/// relies on: 0 right, 1 left, 2 top, 3 tip, 4/5 mounts.
pub fn tetra_prototype(edge: Real, height: Real) -> GenResult<Structure> {
    let edge = ensure_finite(edge, "prototype edge")?;
    let height = ensure_finite(height, "prototype height")?;
    if edge <= 0.0 || height <= 0.0 {
        return Err(GenError::InvalidArg {
            what: "prototype dimensions must be positive",
        });
    }

    let mut tetra = Structure::new();

    let right = tetra.add_node(Point3::new(-edge / 2.0, 0.0, 0.0), TagSet::from_tag("base"));
    let left = tetra.add_node(Point3::new(edge / 2.0, 0.0, 0.0), TagSet::from_tag("base"));
    let top = tetra.add_node(Point3::new(0.0, height, 0.0), TagSet::from_tag("base"));
    let tip = tetra.add_node(
        Point3::new(0.0, height / 2.0, 3.0_f64.sqrt() / 2.0 * height),
        TagSet::from_tag("tip"),
    );

    // Derived mount points halfway up the back face
    let nodes = tetra.nodes();
    let mid_right = Node::midpoint(&nodes[0], &nodes[2]);
    let mid_left = Node::midpoint(&nodes[1], &nodes[2]);
    let mount_right = tetra.add_node(mid_right, TagSet::from_tag("mount"));
    let mount_left = tetra.add_node(mid_left, TagSet::from_tag("mount"));

    let rods = [
        (right, left, "back bottom rod"),
        (right, mount_right, "back right bottom rod"),
        (mount_right, top, "back right top rod"),
        (right, tip, "front right rod"),
        (left, mount_left, "back left bottom rod"),
        (mount_left, top, "back left top rod"),
        (left, tip, "front left rod"),
        (top, tip, "front top rod"),
    ];
    for (a, b, tag) in rods {
        tetra.add_pair(a, b, TagSet::from_tag(tag))?;
    }

    Ok(tetra)
}

/// Replicate `prototype` into a chain of tagged, translated segments and
/// wire six actuation pairs across every adjacent boundary.
///
/// Copy `i` (0-based) is tagged `"segment <i+1>"` and translated by
/// `(i+1) × offset`. Wiring uses the positional convention over the
/// prototype's node layout: outer muscles connect nodes 0, 1, 2 to the same
/// role on the next segment; inner muscles connect those roles to the next
/// segment's tip node 3. Actuator pair count is therefore
/// `6 × (segments − 1)` regardless of prototype size.
pub fn build_chain(prototype: &Structure, config: &ChainConfig) -> GenResult<Structure> {
    if config.segments == 0 {
        return Err(GenError::InvalidArg {
            what: "segment count must be at least 1",
        });
    }
    if prototype.nodes().len() < 4 {
        return Err(GenError::InvalidArg {
            what: "prototype needs at least 4 nodes for chain wiring",
        });
    }

    let mut chain = Structure::new();
    chain.add_tag("spine");

    for i in 0..config.segments {
        let mut segment = prototype.clone();
        segment.add_tag(format!("segment {}", i + 1));
        segment.move_by(config.offset * (i + 1) as Real);
        chain.add_child(segment);
    }

    for i in 1..config.segments {
        let position =
            |seg: usize, node: usize| chain.children()[seg].nodes()[node].position();
        let muscles = [
            (position(i - 1, 0), position(i, 0), "outer right muscle"),
            (position(i - 1, 1), position(i, 1), "outer left muscle"),
            (position(i - 1, 2), position(i, 2), "outer top muscle"),
            (position(i - 1, 0), position(i, 3), "inner right muscle"),
            (position(i - 1, 1), position(i, 3), "inner left muscle"),
            (position(i - 1, 2), position(i, 3), "inner top muscle"),
        ];
        for (a, b, tag) in muscles {
            chain.add_pair_between(a, b, TagSet::from_tag(tag));
        }
    }

    tracing::debug!(
        segments = config.segments,
        nodes = chain.total_nodes(),
        pairs = chain.total_pairs(),
        "chain generated"
    );
    Ok(chain)
}

/// Build spec for the tetra spine vocabulary.
///
/// More specific labels are registered before broader ones because the
/// registry resolves first-registered-first: `"static rod"` must precede
/// `"rod"` or it could never win.
pub fn spine_build_spec() -> GenResult<BuildSpec> {
    let radius = 0.635;
    let density = 0.00311;
    let friction = 0.8;
    let rod_config = RodConfig::new(radius, density, friction)?;
    let static_config = RodConfig::new(radius, 0.0, friction)?;

    let top_config = CableConfig::new(10_000.0, 10.0, 0.0)?;
    let side_config = CableConfig::new(1355.8, 10.0, 0.0)?;

    let mut spec = BuildSpec::new();
    spec.register("static rod", Box::new(RodInfo::new(static_config)));
    spec.register("rod", Box::new(RodInfo::new(rod_config)));
    spec.register("top muscle", Box::new(CableInfo::new(top_config)));
    spec.register("left muscle", Box::new(CableInfo::new(side_config)));
    spec.register("right muscle", Box::new(CableInfo::new(side_config)));
    Ok(spec)
}

/// Attach an instrumentation marker at every `"mount"` node, fixed to the
/// first rigid body of the node's segment.
///
/// Requires `model` to have been built from `chain` by the resolution
/// engine, so each segment's rods occupy a contiguous ID range in walk
/// order; a model missing a segment's bodies is rejected. Returns the
/// number of markers attached.
pub fn attach_mount_markers(chain: &Structure, model: &mut Model) -> GenResult<usize> {
    let mut first_rod = 0usize;
    let mut attached = 0usize;
    for (ordinal, segment) in chain.children().iter().enumerate() {
        let body = RodId::from_index(first_rod as u32);
        let com = model
            .rigid(body)
            .ok_or(GenError::InvalidArg {
                what: "model does not cover every chain segment",
            })?
            .center_of_mass();
        let mounts: Vec<_> = segment
            .nodes()
            .iter()
            .filter(|n| n.tags().contains("mount"))
            .map(|n| n.position())
            .collect();
        for position in mounts {
            model.attach_marker(Marker::new(
                body,
                position - com,
                Vector3::x(),
                ordinal as u32,
            ))?;
            attached += 1;
        }
        first_rod += segment.pairs().len();
    }
    Ok(attached)
}
