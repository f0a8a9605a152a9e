//! Component handles.
//!
//! A [`ComponentRef<T>`] names "slot `i` of biome `b`'s table of `T`". It is
//! `Copy`, carries no borrow, and is only ever resolved through the owning
//! table, which checks it.
//!
//! A handle is in one of two states:
//!
//! - **table-only**: bound to a table but not to a slot; inhabitants start
//!   with one of these for every component kind.
//! - **bound**: names a concrete slot.

use std::hash::{Hash, Hasher};
use std::marker::PhantomData;

use crate::id::BiomeId;

/// A typed, copyable reference to a slot of a component table.
///
/// Two handles are equal iff they name the same table (same biome, same `T`)
/// and the same slot.
pub struct ComponentRef<T> {
    owner: BiomeId,
    index: Option<usize>,
    _marker: PhantomData<fn() -> T>,
}

impl<T> ComponentRef<T> {
    /// A table-only handle: bound to `owner`'s table of `T`, no slot.
    #[must_use]
    pub const fn unbound(owner: BiomeId) -> Self {
        Self {
            owner,
            index: None,
            _marker: PhantomData,
        }
    }

    /// A handle bound to slot `index` of `owner`'s table of `T`.
    ///
    /// Nothing is checked here; the table checks on every lookup.
    #[must_use]
    pub const fn bound(owner: BiomeId, index: usize) -> Self {
        Self {
            owner,
            index: Some(index),
            _marker: PhantomData,
        }
    }

    /// The biome whose table this handle refers to.
    #[must_use]
    pub const fn owner(&self) -> BiomeId {
        self.owner
    }

    /// Returns `true` if the handle is bound to a slot.
    #[must_use]
    pub const fn has_value(&self) -> bool {
        self.index.is_some()
    }

    /// The bound slot, if any.
    ///
    /// Within one table the slot is unique and never reused, so downstream
    /// caches (GPU buffers, descriptor sets) key on it directly.
    #[must_use]
    pub const fn index(&self) -> Option<usize> {
        self.index
    }
}

impl<T> Clone for ComponentRef<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for ComponentRef<T> {}

impl<T> PartialEq for ComponentRef<T> {
    fn eq(&self, other: &Self) -> bool {
        self.owner == other.owner && self.index == other.index
    }
}

impl<T> Eq for ComponentRef<T> {}

impl<T> Hash for ComponentRef<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.owner.hash(state);
        self.index.hash(state);
    }
}

impl<T> std::fmt::Debug for ComponentRef<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = std::any::type_name::<T>();
        let short = name.rsplit("::").next().unwrap_or(name);
        match self.index {
            Some(index) => write!(f, "ComponentRef<{short}>({}, #{index})", self.owner.uuid()),
            None => write!(f, "ComponentRef<{short}>({}, unbound)", self.owner.uuid()),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    struct Marker;

    #[test]
    fn test_unbound_has_no_value() {
        let r = ComponentRef::<Marker>::unbound(BiomeId::new());
        assert!(!r.has_value());
        assert_eq!(r.index(), None);
    }

    #[test]
    fn test_bound_has_value() {
        let r = ComponentRef::<Marker>::bound(BiomeId::new(), 7);
        assert!(r.has_value());
        assert_eq!(r.index(), Some(7));
    }

    #[test]
    fn test_equality_needs_same_owner_and_slot() {
        let a = BiomeId::new();
        let b = BiomeId::new();
        assert_eq!(ComponentRef::<Marker>::bound(a, 1), ComponentRef::bound(a, 1));
        assert_ne!(ComponentRef::<Marker>::bound(a, 1), ComponentRef::bound(a, 2));
        assert_ne!(ComponentRef::<Marker>::bound(a, 1), ComponentRef::bound(b, 1));
        assert_ne!(ComponentRef::<Marker>::bound(a, 0), ComponentRef::unbound(a));
    }

    #[test]
    fn test_hash_agrees_with_eq() {
        let owner = BiomeId::new();
        let mut set = HashSet::new();
        set.insert(ComponentRef::<Marker>::bound(owner, 3));
        set.insert(ComponentRef::<Marker>::bound(owner, 3));
        set.insert(ComponentRef::<Marker>::bound(owner, 4));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_debug_names_the_type() {
        let r = ComponentRef::<Marker>::unbound(BiomeId::new());
        assert!(format!("{r:?}").starts_with("ComponentRef<Marker>("));
    }
}
