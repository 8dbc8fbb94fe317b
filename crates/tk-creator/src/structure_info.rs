//! Resolution engine: walks a structure tree and realizes its pairs.

use nalgebra::Point3;
use tk_core::Real;
use tk_model::Model;
use tk_structure::{Structure, TagSet};

use crate::builders::{Component, ComponentBuilder, ComponentKind};
use crate::error::{CreatorError, CreatorResult};
use crate::spec::BuildSpec;
use crate::world::World;

/// One resolved pair awaiting realization.
struct ResolvedPair<'a> {
    span: [Point3<Real>; 2],
    tags: &'a TagSet,
    label: &'a str,
    builder: &'a dyn ComponentBuilder,
}

/// Resolves every pair in a structure tree against a build spec and emits
/// the resulting components into a model and an external world.
///
/// Resolution is a one-shot pipeline: any unresolved pair aborts the whole
/// assembly before anything is emitted, so a partially wired model is never
/// observable. Realization runs in two passes: all rigid-kind pairs first
/// (producing addressable bodies), then all actuator-kind pairs, which may
/// span nodes of different child structures.
pub struct StructureInfo<'a> {
    structure: &'a Structure,
    spec: &'a BuildSpec,
}

impl<'a> StructureInfo<'a> {
    pub fn new(structure: &'a Structure, spec: &'a BuildSpec) -> Self {
        Self { structure, spec }
    }

    /// Resolve and realize the full tree into `model`, handing each
    /// component to `world` by reference before the model takes ownership.
    pub fn build_into(&self, model: &mut Model, world: &mut dyn World) -> CreatorResult<()> {
        let mut resolved = Vec::new();
        Self::collect(self.structure, self.spec, &mut resolved)?;

        let rigids = Self::realize_pass(&resolved, ComponentKind::Rigid, model, world)?;
        let actuators = Self::realize_pass(&resolved, ComponentKind::Actuator, model, world)?;

        tracing::debug!(rigids, actuators, "structure resolved");
        Ok(())
    }

    /// Depth-first walk resolving every pair; fails fast on the first pair
    /// whose tags match no registered label.
    fn collect<'s>(
        structure: &'s Structure,
        spec: &'s BuildSpec,
        out: &mut Vec<ResolvedPair<'s>>,
    ) -> CreatorResult<()> {
        for pair in structure.pairs() {
            let (label, builder) =
                spec.resolve(pair.tags())
                    .ok_or_else(|| CreatorError::UnresolvedPair {
                        tags: pair.tags().to_string(),
                    })?;
            out.push(ResolvedPair {
                span: *pair.anchors(),
                tags: pair.tags(),
                label,
                builder,
            });
        }
        for child in structure.children() {
            Self::collect(child, spec, out)?;
        }
        Ok(())
    }

    /// Realize every resolved pair whose builder belongs to `kind`,
    /// preserving walk order. Returns the number of components emitted.
    fn realize_pass(
        resolved: &[ResolvedPair<'_>],
        kind: ComponentKind,
        model: &mut Model,
        world: &mut dyn World,
    ) -> CreatorResult<usize> {
        let mut count = 0;
        for pair in resolved.iter().filter(|p| p.builder.kind() == kind) {
            match pair.builder.build(pair.span, pair.tags) {
                Component::Rigid(link) if kind == ComponentKind::Rigid => {
                    world.add_rigid(&link);
                    model.push_rigid(link);
                }
                Component::Actuator(cable) if kind == ComponentKind::Actuator => {
                    world.add_actuator(&cable);
                    model.push_actuator(cable);
                }
                _ => {
                    return Err(CreatorError::KindMismatch {
                        label: pair.label.to_string(),
                    });
                }
            }
            count += 1;
        }
        Ok(count)
    }
}
