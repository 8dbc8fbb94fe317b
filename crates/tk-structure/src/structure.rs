//! Core structure data types: nodes, pairs, and the owning tree.

use nalgebra::{Point3, UnitQuaternion, Vector3};
use tk_core::{NodeId, PairId, Real};

use crate::error::{StructureError, StructureResult};
use crate::tags::TagSet;

/// An anchor point in a structure: a 3-D position plus tags.
///
/// Nodes are identified by a stable 0-based [`NodeId`] assigned in insertion
/// order within their owning [`Structure`]. Transforms move positions but
/// never renumber nodes.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    position: Point3<Real>,
    tags: TagSet,
}

impl Node {
    pub fn new(position: Point3<Real>, tags: TagSet) -> Self {
        Self { position, tags }
    }

    pub fn position(&self) -> Point3<Real> {
        self.position
    }

    pub fn tags(&self) -> &TagSet {
        &self.tags
    }

    /// Midpoint between two nodes (used to derive mount points).
    pub fn midpoint(a: &Node, b: &Node) -> Point3<Real> {
        nalgebra::center(&a.position, &b.position)
    }
}

/// A connecting element between two anchor points.
///
/// Whether a pair becomes a rigid link or a cable actuator is decided later
/// by tag resolution, not here. Pairs capture their endpoint coordinates at
/// insertion time: the index-based [`Structure::add_pair`] resolves node IDs
/// against the owning structure's node table, and cross-child wiring uses
/// [`Structure::add_pair_between`] with explicit anchors. Transforms move
/// pair anchors together with nodes, so both stay geometrically consistent.
#[derive(Debug, Clone, PartialEq)]
pub struct Pair {
    anchors: [Point3<Real>; 2],
    tags: TagSet,
}

impl Pair {
    pub fn anchors(&self) -> &[Point3<Real>; 2] {
        &self.anchors
    }

    pub fn tags(&self) -> &TagSet {
        &self.tags
    }

    /// Straight-line distance between the two anchors.
    pub fn length(&self) -> Real {
        nalgebra::distance(&self.anchors[0], &self.anchors[1])
    }
}

/// A hierarchical description of a physical assembly.
///
/// A structure owns its nodes, pairs, and child structures by value: the
/// tree is destroyed recursively exactly once, and `Clone` performs a full
/// deep copy of the entire subtree. No two structures ever alias the same
/// node or pair storage, so cloning a structure and transforming the clone
/// never mutates the original.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Structure {
    nodes: Vec<Node>,
    pairs: Vec<Pair>,
    tags: TagSet,
    children: Vec<Structure>,
}

impl Structure {
    /// Create a new empty structure.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a node and return its stable 0-based ID.
    pub fn add_node(&mut self, position: Point3<Real>, tags: TagSet) -> NodeId {
        let id = NodeId::from_index(self.nodes.len() as u32);
        self.nodes.push(Node::new(position, tags));
        id
    }

    /// Get a node by ID (returns None if ID out of bounds).
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.index() as usize)
    }

    /// Add a pair between two of this structure's own nodes.
    ///
    /// The endpoint coordinates are captured from the current node
    /// positions. Fails if either ID is out of bounds or both IDs name the
    /// same node.
    pub fn add_pair(&mut self, a: NodeId, b: NodeId, tags: TagSet) -> StructureResult<PairId> {
        if a == b {
            return Err(StructureError::DegeneratePair { node: a });
        }
        let len = self.nodes.len();
        let pa = self
            .node(a)
            .ok_or(StructureError::InvalidNodeRef { node: a, len })?
            .position();
        let pb = self
            .node(b)
            .ok_or(StructureError::InvalidNodeRef { node: b, len })?
            .position();
        Ok(self.push_pair(pa, pb, tags))
    }

    /// Add a pair between two explicit anchor points.
    ///
    /// Used for wiring across child structures, where the endpoints live in
    /// different node tables (e.g. muscles spanning adjacent segments).
    pub fn add_pair_between(
        &mut self,
        a: Point3<Real>,
        b: Point3<Real>,
        tags: TagSet,
    ) -> PairId {
        self.push_pair(a, b, tags)
    }

    fn push_pair(&mut self, a: Point3<Real>, b: Point3<Real>, tags: TagSet) -> PairId {
        let id = PairId::from_index(self.pairs.len() as u32);
        self.pairs.push(Pair {
            anchors: [a, b],
            tags,
        });
        id
    }

    /// Add a tag to the structure itself.
    pub fn add_tag(&mut self, tag: impl Into<String>) {
        self.tags.add(tag);
    }

    /// Append a child structure; ownership transfers to this structure.
    pub fn add_child(&mut self, child: Structure) {
        self.children.push(child);
    }

    /// Return this structure's own nodes.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Return this structure's own pairs.
    pub fn pairs(&self) -> &[Pair] {
        &self.pairs
    }

    /// Return this structure's own tags.
    pub fn tags(&self) -> &TagSet {
        &self.tags
    }

    /// Return the child structures.
    pub fn children(&self) -> &[Structure] {
        &self.children
    }

    /// Translate every node and pair anchor, recursing into all children.
    pub fn move_by(&mut self, offset: Vector3<Real>) {
        for node in &mut self.nodes {
            node.position += offset;
        }
        for pair in &mut self.pairs {
            pair.anchors[0] += offset;
            pair.anchors[1] += offset;
        }
        for child in &mut self.children {
            child.move_by(offset);
        }
    }

    /// Rotate every node and pair anchor around a fixed point, recursing
    /// into all children.
    pub fn rotate(&mut self, around: Point3<Real>, rotation: UnitQuaternion<Real>) {
        for node in &mut self.nodes {
            node.position = around + rotation * (node.position - around);
        }
        for pair in &mut self.pairs {
            for anchor in &mut pair.anchors {
                *anchor = around + rotation * (*anchor - around);
            }
        }
        for child in &mut self.children {
            child.rotate(around, rotation);
        }
    }

    /// Total node count over this structure and all descendants.
    pub fn total_nodes(&self) -> usize {
        self.nodes.len() + self.children.iter().map(Structure::total_nodes).sum::<usize>()
    }

    /// Total pair count over this structure and all descendants.
    pub fn total_pairs(&self) -> usize {
        self.pairs.len() + self.children.iter().map(Structure::total_pairs).sum::<usize>()
    }
}
