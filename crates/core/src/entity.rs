//! Entity trait: identity + continuity across state changes.

/// Entity marker + minimal interface.
///
/// Identity is for lookups and lock ordering. Types may still define `PartialEq`
/// over their values instead of their id (accounts do).
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;
}
