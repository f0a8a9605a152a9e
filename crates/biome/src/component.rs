//! The closed set of storable and attachable types.
//!
//! [`Stored`] is implemented by every type a biome keeps a table for:
//! the three component kinds and [`Inhabitant`] itself. [`Component`] narrows
//! that to the types an inhabitant can carry. Both traits are sealed, so
//! naming any other type in a query or an attach is a compile error.

use biome_component::{Collider, ComponentKind, ComponentRef, ComponentTable, Geometry, Transform};

use crate::inhabitant::Inhabitant;
use crate::world::Biome;

pub(crate) mod sealed {
    use super::*;

    pub trait Storage: Sized + 'static {
        fn table(biome: &Biome) -> &ComponentTable<Self>;
        fn table_mut(biome: &mut Biome) -> &mut ComponentTable<Self>;
    }

    pub trait Attach: Storage {
        fn slot_mut(inhabitant: &mut Inhabitant) -> &mut ComponentRef<Self>;
    }
}

/// A type with a table in every [`Biome`].
pub trait Stored: sealed::Storage {}

/// A component kind an [`Inhabitant`] can carry, at most one of each.
pub trait Component: Stored + sealed::Attach {
    /// The runtime tag of this kind.
    const KIND: ComponentKind;

    /// The handle stored on `inhabitant` for this kind (table-only when
    /// nothing is attached).
    fn slot(inhabitant: &Inhabitant) -> ComponentRef<Self>;
}

macro_rules! impl_component {
    ($ty:ty, $kind:ident, $table:ident, $field:ident) => {
        impl sealed::Storage for $ty {
            fn table(biome: &Biome) -> &ComponentTable<Self> {
                &biome.$table
            }

            fn table_mut(biome: &mut Biome) -> &mut ComponentTable<Self> {
                &mut biome.$table
            }
        }

        impl sealed::Attach for $ty {
            fn slot_mut(inhabitant: &mut Inhabitant) -> &mut ComponentRef<Self> {
                &mut inhabitant.$field
            }
        }

        impl Stored for $ty {}

        impl Component for $ty {
            const KIND: ComponentKind = ComponentKind::$kind;

            fn slot(inhabitant: &Inhabitant) -> ComponentRef<Self> {
                inhabitant.$field
            }
        }
    };
}

impl_component!(Transform, Transform, transforms, transform);
impl_component!(Geometry, Geometry, geometries, geometry);
impl_component!(Collider, Collider, colliders, collider);

impl sealed::Storage for Inhabitant {
    fn table(biome: &Biome) -> &ComponentTable<Self> {
        &biome.inhabitants
    }

    fn table_mut(biome: &mut Biome) -> &mut ComponentTable<Self> {
        &mut biome.inhabitants
    }
}

impl Stored for Inhabitant {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kinds_match_types() {
        assert_eq!(Transform::KIND, ComponentKind::Transform);
        assert_eq!(Geometry::KIND, ComponentKind::Geometry);
        assert_eq!(Collider::KIND, ComponentKind::Collider);
    }

    #[test]
    fn test_slots_start_table_only() {
        let mut biome = Biome::blank();
        let r = biome.new_inhabitant("empty");
        let inhabitant = biome.inhabitant(r).unwrap();
        let slot = Transform::slot(inhabitant);
        assert!(!slot.has_value());
        assert_eq!(slot.owner(), biome.id());
    }
}
