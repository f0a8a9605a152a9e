//! # Biome: the scene store
//!
//! A [`Biome`] owns four append-only tables: inhabitants, transforms,
//! geometries and colliders. It is the factory for inhabitants and
//! components and the root of every query.
//!
//! ```text
//! ┌──────────────────────────────────────────────────────┐
//! │ Biome (id)                                           │
//! │                                                      │
//! │  inhabitants: ComponentTable<Inhabitant>             │
//! │     identifier, parent, children,                    │
//! │     transform ─┐  geometry ─┐  collider ─┐           │
//! │                ▼            ▼            ▼           │
//! │  transforms: Table<T>  geometries: …  colliders: …   │
//! │                ▲                          │          │
//! │                └──── Collider::transform ─┘          │
//! └──────────────────────────────────────────────────────┘
//! ```
//!
//! A biome is never cloned: handles name its tables by the biome's id, and a
//! copy would make that name ambiguous.

use std::path::Path;

use biome_component::{
    BiomeId, Collider, ComponentRef, ComponentTable, Geometry, TableError, Transform,
};
use tracing::{debug, info, warn};

use crate::component::sealed::{Attach, Storage};
use crate::component::{Component, Stored};
use crate::dependency::{DependencyRules, DependencyViolation};
use crate::error::BiomeError;
use crate::inhabitant::{Inhabitant, InhabitantRef};
use crate::loader::{SceneLoader, SceneObject};
use crate::query::Query;

/// The entity/component store for one scene.
#[derive(Debug)]
pub struct Biome {
    id: BiomeId,
    pub(crate) inhabitants: ComponentTable<Inhabitant>,
    pub(crate) transforms: ComponentTable<Transform>,
    pub(crate) geometries: ComponentTable<Geometry>,
    pub(crate) colliders: ComponentTable<Collider>,
    rules: DependencyRules,
    violations: Vec<DependencyViolation>,
}

impl Biome {
    /// An empty biome with the default dependency rules.
    #[must_use]
    pub fn blank() -> Self {
        Self::with_rules(DependencyRules::default())
    }

    /// An empty biome with custom dependency rules.
    #[must_use]
    pub fn with_rules(rules: DependencyRules) -> Self {
        let id = BiomeId::new();
        Self {
            id,
            inhabitants: ComponentTable::new(id),
            transforms: ComponentTable::new(id),
            geometries: ComponentTable::new(id),
            colliders: ComponentTable::new(id),
            rules,
            violations: Vec::new(),
        }
    }

    /// Import a scene file through `loader`.
    ///
    /// The result holds one root inhabitant named after the file stem and one
    /// child per imported object, each carrying an identity `Transform` and a
    /// visible `Geometry`.
    ///
    /// # Errors
    ///
    /// Returns [`BiomeError::Load`] if the loader fails; nothing is built.
    pub fn load<L>(path: impl AsRef<Path>, loader: &L) -> Result<Self, BiomeError>
    where
        L: SceneLoader + ?Sized,
    {
        let path = path.as_ref();
        let objects = loader.load(path)?;
        let root_name = path
            .file_stem()
            .and_then(|stem| stem.to_str())
            .unwrap_or("scene");

        let biome = Self::from_objects(root_name, objects)?;
        info!(
            path = %path.display(),
            biome = %biome.id,
            objects = biome.inhabitant_count() - 1,
            "loaded biome"
        );
        Ok(biome)
    }

    /// Build a biome from already-imported objects, laid out like
    /// [`Biome::load`].
    ///
    /// # Errors
    ///
    /// Propagates handle errors; with freshly issued handles there are none.
    pub fn from_objects(
        root_name: &str,
        objects: impl IntoIterator<Item = SceneObject>,
    ) -> Result<Self, BiomeError> {
        let mut biome = Self::blank();
        let root = biome.new_inhabitant(root_name);
        for object in objects {
            let child = biome.new_inhabitant(object.name);
            biome.add_component(child, Transform::IDENTITY)?;
            biome.add_component(child, Geometry::new(object.mesh, object.material))?;
            biome.link(root, child)?;
        }
        Ok(biome)
    }

    /// The biome's identity, recorded in every handle it issues.
    #[must_use]
    pub fn id(&self) -> BiomeId {
        self.id
    }

    /// The dependency rules checked on attach.
    #[must_use]
    pub fn rules(&self) -> &DependencyRules {
        &self.rules
    }

    /// Soft dependency violations recorded so far, oldest first.
    #[must_use]
    pub fn violations(&self) -> &[DependencyViolation] {
        &self.violations
    }

    // ── Inhabitants ──────────────────────────────────────────────────

    /// Create a root inhabitant with no components.
    pub fn new_inhabitant(&mut self, identifier: impl Into<String>) -> InhabitantRef {
        let identifier = identifier.into();
        debug!(biome = %self.id, identifier = %identifier, "new inhabitant");
        self.inhabitants.push(Inhabitant::new(identifier, self.id))
    }

    /// Resolve an inhabitant handle.
    ///
    /// # Errors
    ///
    /// See [`TableError`].
    pub fn inhabitant(&self, handle: InhabitantRef) -> Result<&Inhabitant, TableError> {
        self.inhabitants.get(handle)
    }

    pub(crate) fn inhabitant_mut(
        &mut self,
        handle: InhabitantRef,
    ) -> Result<&mut Inhabitant, TableError> {
        self.inhabitants.get_mut(handle)
    }

    /// Every inhabitant in creation order.
    pub fn inhabitants(&self) -> impl Iterator<Item = (InhabitantRef, &Inhabitant)> + '_ {
        self.inhabitants.iter()
    }

    /// Number of inhabitants ever created.
    #[must_use]
    pub fn inhabitant_count(&self) -> usize {
        self.inhabitants.len()
    }

    /// The first inhabitant, in creation order, named `identifier`.
    #[must_use]
    pub fn find(&self, identifier: &str) -> Option<InhabitantRef> {
        self.inhabitants()
            .find(|(_, inhabitant)| inhabitant.identifier() == identifier)
            .map(|(handle, _)| handle)
    }

    // ── Components ───────────────────────────────────────────────────

    /// The table holding every `T` of this biome.
    #[must_use]
    pub fn table<T: Stored>(&self) -> &ComponentTable<T> {
        T::table(self)
    }

    /// Resolve a handle.
    ///
    /// # Errors
    ///
    /// See [`TableError`].
    pub fn get<T: Stored>(&self, handle: ComponentRef<T>) -> Result<&T, TableError> {
        T::table(self).get(handle)
    }

    /// Resolve a handle for writing.
    ///
    /// # Errors
    ///
    /// See [`TableError`].
    pub fn get_mut<T: Stored>(&mut self, handle: ComponentRef<T>) -> Result<&mut T, TableError> {
        T::table_mut(self).get_mut(handle)
    }

    /// Attach `value` to `inhabitant`.
    ///
    /// The prerequisite check for `T` runs first; a failure is logged and
    /// recorded in [`Biome::violations`] but does not block the attach. The
    /// value is appended to `T`'s table and the new handle replaces whatever
    /// the inhabitant held for `T`.
    ///
    /// # Errors
    ///
    /// Returns [`BiomeError::Table`] if `inhabitant` does not resolve.
    pub fn add_component<T: Component>(
        &mut self,
        inhabitant: InhabitantRef,
        value: T,
    ) -> Result<ComponentRef<T>, BiomeError> {
        let target = self.inhabitants.get(inhabitant)?;
        let missing = self.rules.check(T::KIND, target);
        if !missing.is_empty() {
            warn!(
                biome = %self.id,
                inhabitant = %target.identifier(),
                component = %T::KIND,
                missing = ?missing,
                "component attached without its prerequisites"
            );
            self.violations.push(DependencyViolation {
                inhabitant,
                identifier: target.identifier().to_string(),
                component: T::KIND,
                missing,
            });
        }

        let handle = T::table_mut(self).push(value);
        *T::slot_mut(self.inhabitant_mut(inhabitant)?) = handle;
        debug!(
            biome = %self.id,
            component = %T::KIND,
            slot = ?handle.index(),
            "component attached"
        );
        Ok(handle)
    }

    /// Resolve the transform a collider is expressed relative to.
    ///
    /// The collider's transform handle is checked on every call.
    ///
    /// # Errors
    ///
    /// Fails if either the collider handle or its transform handle does not
    /// resolve (for example a collider built with a table-only transform).
    pub fn collider_transform(
        &self,
        collider: ComponentRef<Collider>,
    ) -> Result<&Transform, TableError> {
        let collider = self.colliders.get(collider)?;
        self.transforms.get(collider.transform)
    }

    // ── Queries ──────────────────────────────────────────────────────

    /// Returns `true` if `inhabitant` carries every type named by `Q`.
    ///
    /// # Errors
    ///
    /// Returns a [`TableError`] if `inhabitant` does not resolve.
    pub fn has<Q: Query>(&self, inhabitant: InhabitantRef) -> Result<bool, TableError> {
        Ok(self.inhabitant(inhabitant)?.has::<Q>())
    }

    /// The handles named by `Q` on `inhabitant`, or `None` if any is missing.
    ///
    /// # Errors
    ///
    /// Returns a [`TableError`] if `inhabitant` does not resolve.
    pub fn grab<Q: Query>(&self, inhabitant: InhabitantRef) -> Result<Option<Q::Refs>, TableError> {
        Ok(self.inhabitant(inhabitant)?.grab::<Q>())
    }

    /// Match `Q` against every inhabitant, in creation order.
    ///
    /// Linear in the number of inhabitants.
    #[must_use]
    pub fn grab_all<Q: Query>(&self) -> Vec<Q::Refs> {
        self.inhabitants
            .iter()
            .filter_map(|(_, inhabitant)| inhabitant.grab::<Q>())
            .collect()
    }
}
