use core::fmt;
use core::num::NonZeroU32;

/// Index-backed identifier for nodes, pairs, and realized components.
///
/// Structures and models hand out IDs in insertion order and never
/// renumber them, so an `Id` is a stable handle into one owning
/// container. The `NonZeroU32` representation keeps `Option<Id>` the
/// same size as `Id`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Id(NonZeroU32);

impl Id {
    /// Wrap a 0-based insertion index.
    pub fn from_index(index: u32) -> Self {
        // NonZeroU32::MIN is 1, so this stores index+1 without a checked
        // constructor; u32::MAX indices do not occur in practice.
        Self(NonZeroU32::MIN.saturating_add(index))
    }

    /// The 0-based insertion index this ID wraps.
    pub fn index(self) -> u32 {
        self.0.get() - 1
    }
}

impl fmt::Debug for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Id({})", self.index())
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.index())
    }
}

/// One alias per owning container: node and pair IDs index a structure,
/// rod and cable IDs index a model.
pub type NodeId = Id;
pub type PairId = Id;
pub type RodId = Id;
pub type CableId = Id;
