//! Biome registry: the set of live biomes owned by the application root.
//!
//! Every biome the editor creates or loads is moved into the registry and
//! stays there until the registry is cleared or dropped, so handles issued by
//! a registered biome keep resolving for the registry's lifetime. One biome
//! at a time may be marked active (the scene shown in the viewport).

use std::collections::HashMap;
use std::path::Path;

use biome_component::BiomeId;
use tracing::info;

use crate::error::BiomeError;
use crate::loader::SceneLoader;
use crate::world::Biome;

/// Registry of all live biomes.
#[derive(Debug, Default)]
pub struct BiomeRegistry {
    /// Biomes keyed by id.
    biomes: HashMap<BiomeId, Biome>,
    /// The biome shown in the viewport, if any.
    active: Option<BiomeId>,
}

impl BiomeRegistry {
    /// Create a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            biomes: HashMap::new(),
            active: None,
        }
    }

    /// Create a blank biome, register it, and make it active.
    pub fn blank(&mut self) -> BiomeId {
        let id = self.insert(Biome::blank());
        self.active = Some(id);
        id
    }

    /// Load a scene, register it, and make it active.
    ///
    /// On failure nothing is registered and the active biome is unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`BiomeError::Load`] if the loader fails.
    pub fn load<L>(&mut self, path: impl AsRef<Path>, loader: &L) -> Result<BiomeId, BiomeError>
    where
        L: SceneLoader + ?Sized,
    {
        let biome = Biome::load(path, loader)?;
        let id = self.insert(biome);
        self.active = Some(id);
        Ok(id)
    }

    /// Register an existing biome without changing the active one.
    pub fn insert(&mut self, biome: Biome) -> BiomeId {
        let id = biome.id();
        info!(biome = %id, inhabitants = biome.inhabitant_count(), "biome registered");
        self.biomes.insert(id, biome);
        id
    }

    /// Look up a registered biome.
    #[must_use]
    pub fn get(&self, id: BiomeId) -> Option<&Biome> {
        self.biomes.get(&id)
    }

    /// Look up a registered biome for mutation.
    pub fn get_mut(&mut self, id: BiomeId) -> Option<&mut Biome> {
        self.biomes.get_mut(&id)
    }

    /// The active biome's id, if one is set.
    #[must_use]
    pub fn active_id(&self) -> Option<BiomeId> {
        self.active
    }

    /// The active biome, if one is set.
    #[must_use]
    pub fn active(&self) -> Option<&Biome> {
        self.active.and_then(|id| self.biomes.get(&id))
    }

    /// The active biome for mutation, if one is set.
    pub fn active_mut(&mut self) -> Option<&mut Biome> {
        self.active.and_then(|id| self.biomes.get_mut(&id))
    }

    /// Make `id` the active biome.
    ///
    /// # Errors
    ///
    /// Returns [`BiomeError::UnknownBiome`] if `id` is not registered.
    pub fn set_active(&mut self, id: BiomeId) -> Result<(), BiomeError> {
        if !self.biomes.contains_key(&id) {
            return Err(BiomeError::UnknownBiome(id));
        }
        self.active = Some(id);
        Ok(())
    }

    /// Returns an iterator over all registered biomes.
    pub fn iter(&self) -> impl Iterator<Item = &Biome> {
        self.biomes.values()
    }

    /// Number of registered biomes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.biomes.len()
    }

    /// Returns `true` if no biome is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.biomes.is_empty()
    }

    /// Drop every biome. Handles issued by them stop resolving anywhere.
    pub fn clear(&mut self) {
        info!(biomes = self.biomes.len(), "clearing biome registry");
        self.biomes.clear();
        self.active = None;
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use biome_component::{Material, Mesh};

    use super::*;
    use crate::error::LoadError;
    use crate::loader::SceneObject;

    struct FixedLoader(usize);

    impl SceneLoader for FixedLoader {
        fn load(&self, _path: &Path) -> Result<Vec<SceneObject>, LoadError> {
            Ok((0..self.0)
                .map(|i| SceneObject {
                    name: format!("mesh{i}"),
                    mesh: Mesh::default(),
                    material: Material::null(),
                })
                .collect())
        }
    }

    struct FailingLoader;

    impl SceneLoader for FailingLoader {
        fn load(&self, path: &Path) -> Result<Vec<SceneObject>, LoadError> {
            Err(LoadError::NotFound(path.to_path_buf()))
        }
    }

    #[test]
    fn test_blank_registers_and_activates() {
        let mut registry = BiomeRegistry::new();
        let id = registry.blank();
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.active_id(), Some(id));
        assert_eq!(registry.active().unwrap().id(), id);
    }

    #[test]
    fn test_load_registers_and_activates() {
        let mut registry = BiomeRegistry::new();
        registry.blank();
        let id = registry.load("scenes/three.obj", &FixedLoader(3)).unwrap();

        assert_eq!(registry.len(), 2);
        assert_eq!(registry.active_id(), Some(id));
        let biome = registry.get(id).unwrap();
        assert_eq!(biome.inhabitant_count(), 4);
        assert!(biome.find("three").is_some());
    }

    #[test]
    fn test_failed_load_registers_nothing() {
        let mut registry = BiomeRegistry::new();
        let blank = registry.blank();
        let err = registry.load("missing.obj", &FailingLoader).unwrap_err();

        assert!(matches!(err, BiomeError::Load(LoadError::NotFound(_))));
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.active_id(), Some(blank));
    }

    #[test]
    fn test_insert_keeps_active() {
        let mut registry = BiomeRegistry::new();
        let first = registry.blank();
        let second = registry.insert(Biome::blank());
        assert_eq!(registry.active_id(), Some(first));

        registry.set_active(second).unwrap();
        assert_eq!(registry.active_id(), Some(second));
    }

    #[test]
    fn test_set_active_unknown_fails() {
        let mut registry = BiomeRegistry::new();
        let stray = BiomeId::new();
        assert!(matches!(
            registry.set_active(stray),
            Err(BiomeError::UnknownBiome(id)) if id == stray
        ));
        assert!(registry.active().is_none());
    }

    #[test]
    fn test_handles_stay_valid_while_registered() {
        let mut registry = BiomeRegistry::new();
        let id = registry.blank();
        let biome = registry.active_mut().unwrap();
        let a = biome.new_inhabitant("a");

        // Grow other biomes; the first one's handles are untouched.
        for _ in 0..5 {
            registry.blank();
        }
        let biome = registry.get(id).unwrap();
        assert_eq!(biome.inhabitant(a).unwrap().identifier(), "a");
    }

    #[test]
    fn test_clear() {
        let mut registry = BiomeRegistry::new();
        registry.blank();
        registry.blank();
        registry.clear();
        assert!(registry.is_empty());
        assert!(registry.active_id().is_none());
        assert_eq!(registry.iter().count(), 0);
    }
}
