//! The scene-import boundary.
//!
//! A [`SceneLoader`] turns a file into a flat list of [`SceneObject`]s;
//! [`Biome::load`](crate::Biome::load) turns that list into inhabitants.
//! [`ObjLoader`] is the Wavefront OBJ implementation.

mod obj;

use std::path::Path;

use biome_component::{Material, Mesh};

use crate::error::LoadError;

pub use obj::{ObjLoader, ObjLoaderConfig};

/// One imported object: a named mesh with its material.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneObject {
    pub name: String,
    pub mesh: Mesh,
    pub material: Material,
}

/// Anything that can import a scene file.
pub trait SceneLoader {
    /// Read `path` into a list of objects, in file order.
    ///
    /// # Errors
    ///
    /// A missing, unreadable or empty file is a [`LoadError`].
    fn load(&self, path: &Path) -> Result<Vec<SceneObject>, LoadError>;
}
