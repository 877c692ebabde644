//! Entity trait: identity + continuity across state changes.

/// Entity marker + minimal interface.
///
/// Two entities are "the same" when their ids are equal, regardless of the
/// rest of their attributes.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Copy + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> Self::Id;

    /// Identity comparison.
    fn same_entity(&self, other: &Self) -> bool {
        self.id() == other.id()
    }
}
