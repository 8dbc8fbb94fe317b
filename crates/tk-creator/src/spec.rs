//! Ordered label-to-builder registry.

use crate::builders::ComponentBuilder;
use tk_structure::TagSet;

/// An ordered mapping from label strings to component builders.
///
/// Registration appends; a later duplicate label never replaces an earlier
/// one. Resolution scans in registration order and returns the first
/// builder whose label matches the pair's tags under the substring rule
/// ([`TagSet::matches_label`]). First registered wins is the authoritative
/// tie-break when several labels could match, so registration order is
/// meaningful: register more specific labels before broader ones.
#[derive(Default)]
pub struct BuildSpec {
    builders: Vec<(String, Box<dyn ComponentBuilder>)>,
}

impl BuildSpec {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a builder for a label. Ownership of the builder transfers
    /// to the registry.
    pub fn register(&mut self, label: impl Into<String>, builder: Box<dyn ComponentBuilder>) {
        self.builders.push((label.into(), builder));
    }

    /// Resolve a pair's tags to the first-registered matching builder.
    ///
    /// Returns the label and builder, or None if no label matches.
    pub fn resolve(&self, tags: &TagSet) -> Option<(&str, &dyn ComponentBuilder)> {
        self.builders
            .iter()
            .find(|(label, _)| tags.matches_label(label))
            .map(|(label, builder)| (label.as_str(), builder.as_ref()))
    }

    pub fn len(&self) -> usize {
        self.builders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.builders.is_empty()
    }
}
