//! Multi-component matching.
//!
//! A [`Query`] names one to three component types, either directly
//! (`Transform`) or as a tuple (`(Transform, Geometry)`). Matching an
//! inhabitant yields the bound handles in the order the query names them;
//! an inhabitant missing any of them simply does not match.

use biome_component::{Collider, ComponentKind, ComponentRef, Geometry, Transform};

use crate::component::Component;
use crate::inhabitant::Inhabitant;

/// A static set of component types to match inhabitants against.
pub trait Query {
    /// Handles produced by a match.
    type Refs;

    /// The kinds the query requires, in query order.
    fn kinds() -> Vec<ComponentKind>;

    /// Match one inhabitant.
    fn grab(inhabitant: &Inhabitant) -> Option<Self::Refs>;
}

/// The handle for `T` on `inhabitant`, if bound.
fn bound<T: Component>(inhabitant: &Inhabitant) -> Option<ComponentRef<T>> {
    let handle = T::slot(inhabitant);
    handle.has_value().then_some(handle)
}

macro_rules! impl_query_single {
    ($($ty:ty),*) => {
        $(
            impl Query for $ty {
                type Refs = ComponentRef<$ty>;

                fn kinds() -> Vec<ComponentKind> {
                    vec![<$ty as Component>::KIND]
                }

                fn grab(inhabitant: &Inhabitant) -> Option<Self::Refs> {
                    bound::<$ty>(inhabitant)
                }
            }
        )*
    };
}

macro_rules! impl_query_tuple {
    ($($name:ident),+) => {
        impl<$($name: Component),+> Query for ($($name,)+) {
            type Refs = ($(ComponentRef<$name>,)+);

            fn kinds() -> Vec<ComponentKind> {
                vec![$($name::KIND),+]
            }

            fn grab(inhabitant: &Inhabitant) -> Option<Self::Refs> {
                Some(($(bound::<$name>(inhabitant)?,)+))
            }
        }
    };
}

impl_query_single!(Transform, Geometry, Collider);
impl_query_tuple!(A);
impl_query_tuple!(A, B);
impl_query_tuple!(A, B, C);

#[cfg(test)]
mod tests {
    use biome_component::BiomeId;

    use super::*;

    fn with_transform_and_collider() -> Inhabitant {
        let biome = BiomeId::new();
        let mut inhabitant = Inhabitant::new("node".to_string(), biome);
        inhabitant.transform = ComponentRef::bound(biome, 4);
        inhabitant.collider = ComponentRef::bound(biome, 9);
        inhabitant
    }

    #[test]
    fn test_kinds_in_query_order() {
        assert_eq!(
            <(Geometry, Transform)>::kinds(),
            vec![ComponentKind::Geometry, ComponentKind::Transform]
        );
        assert_eq!(Collider::kinds(), vec![ComponentKind::Collider]);
    }

    #[test]
    fn test_single_match() {
        let inhabitant = with_transform_and_collider();
        let transform = Transform::grab(&inhabitant).unwrap();
        assert_eq!(transform.index(), Some(4));
        assert!(Geometry::grab(&inhabitant).is_none());
    }

    #[test]
    fn test_tuple_preserves_requested_order() {
        let inhabitant = with_transform_and_collider();
        let (collider, transform) = <(Collider, Transform)>::grab(&inhabitant).unwrap();
        assert_eq!(collider.index(), Some(9));
        assert_eq!(transform.index(), Some(4));
    }

    #[test]
    fn test_tuple_missing_any_is_absent() {
        let inhabitant = with_transform_and_collider();
        assert!(<(Transform, Geometry)>::grab(&inhabitant).is_none());
        assert!(<(Transform, Collider, Geometry)>::grab(&inhabitant).is_none());
        assert!(<(Transform,)>::grab(&inhabitant).is_some());
    }
}
