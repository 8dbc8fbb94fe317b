//! Ordered tag sets and label matching.

use core::fmt;

/// An ordered set of free-form string tags.
///
/// Insertion order is preserved and duplicates collapse. Tags are whole
/// strings; they are never split on whitespace. Matching a registered label
/// against a tag set uses substring containment: a label matches if some
/// tag contains it, with exact equality as the degenerate case. This loose
/// matching lets one label (e.g. `"muscle"`) cover an open set of more
/// specific tags (`"outer top muscle"`, ...).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TagSet {
    tags: Vec<String>,
}

impl TagSet {
    /// Create an empty tag set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a tag set holding a single tag.
    pub fn from_tag(tag: impl Into<String>) -> Self {
        let mut set = Self::new();
        set.add(tag);
        set
    }

    /// Create a tag set from an iterator of tags, collapsing duplicates.
    pub fn from_tags<I, S>(tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut set = Self::new();
        for tag in tags {
            set.add(tag);
        }
        set
    }

    /// Add a tag; duplicates are collapsed, insertion order kept.
    pub fn add(&mut self, tag: impl Into<String>) {
        let tag = tag.into();
        if !self.tags.iter().any(|t| *t == tag) {
            self.tags.push(tag);
        }
    }

    /// Exact membership test.
    pub fn contains(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    /// True if some tag contains `label` as a substring.
    pub fn matches_label(&self, label: &str) -> bool {
        self.tags.iter().any(|t| t.contains(label))
    }

    /// Iterate over tags in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tags.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }
}

impl fmt::Display for TagSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tags.join(", "))
    }
}

impl From<&str> for TagSet {
    fn from(tag: &str) -> Self {
        Self::from_tag(tag)
    }
}
