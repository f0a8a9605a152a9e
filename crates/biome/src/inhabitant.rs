//! Scene nodes.
//!
//! An [`Inhabitant`] is an identifier, its hierarchy links, and one handle
//! per component kind. Every handle starts table-only and becomes bound when
//! a component of that kind is attached. Nothing ever unbinds it again.

use biome_component::{BiomeId, Collider, ComponentKind, ComponentRef, Geometry, Transform};

use crate::component::Component;
use crate::query::Query;

/// Handle to an inhabitant in its biome's inhabitant table.
pub type InhabitantRef = ComponentRef<Inhabitant>;

/// One scene node.
///
/// Created by [`Biome::new_inhabitant`](crate::Biome::new_inhabitant) and
/// mutated only through the biome (attach, link).
#[derive(Debug, Clone)]
pub struct Inhabitant {
    identifier: String,
    biome: BiomeId,
    pub(crate) parent: InhabitantRef,
    pub(crate) children: Vec<InhabitantRef>,
    pub(crate) transform: ComponentRef<Transform>,
    pub(crate) geometry: ComponentRef<Geometry>,
    pub(crate) collider: ComponentRef<Collider>,
}

impl Inhabitant {
    /// A root inhabitant with no components, bound to `biome`'s tables.
    pub(crate) fn new(identifier: String, biome: BiomeId) -> Self {
        Self {
            identifier,
            biome,
            parent: ComponentRef::unbound(biome),
            children: Vec::new(),
            transform: ComponentRef::unbound(biome),
            geometry: ComponentRef::unbound(biome),
            collider: ComponentRef::unbound(biome),
        }
    }

    /// The inhabitant's name.
    #[must_use]
    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    /// The biome that owns this inhabitant.
    #[must_use]
    pub fn biome(&self) -> BiomeId {
        self.biome
    }

    /// The parent handle; table-only for roots.
    #[must_use]
    pub fn parent(&self) -> InhabitantRef {
        self.parent
    }

    /// Children in link order.
    #[must_use]
    pub fn children(&self) -> &[InhabitantRef] {
        &self.children
    }

    /// Returns `true` if the inhabitant has no parent.
    #[must_use]
    pub fn is_root(&self) -> bool {
        !self.parent.has_value()
    }

    /// The handle stored for component type `T`, bound or not.
    #[must_use]
    pub fn component<T: Component>(&self) -> ComponentRef<T> {
        T::slot(self)
    }

    /// Returns `true` if every component type named by `Q` is attached.
    #[must_use]
    pub fn has<Q: Query>(&self) -> bool {
        Q::grab(self).is_some()
    }

    /// The handles of every component type named by `Q`, in the order `Q`
    /// names them, or `None` if any of them is missing.
    #[must_use]
    pub fn grab<Q: Query>(&self) -> Option<Q::Refs> {
        Q::grab(self)
    }

    /// Runtime counterpart of [`Inhabitant::has`] for a single kind.
    #[must_use]
    pub fn has_kind(&self, kind: ComponentKind) -> bool {
        match kind {
            ComponentKind::Transform => self.transform.has_value(),
            ComponentKind::Geometry => self.geometry.has_value(),
            ComponentKind::Collider => self.collider.has_value(),
        }
    }

    /// Attached kinds, in [`ComponentKind::ALL`] order.
    #[must_use]
    pub fn kinds(&self) -> Vec<ComponentKind> {
        ComponentKind::ALL
            .into_iter()
            .filter(|kind| self.has_kind(*kind))
            .collect()
    }
}
