//! # biome
//!
//! The entity/component store underneath the scene editor. A [`Biome`] owns
//! every [`Inhabitant`] of one scene plus one append-only table per component
//! kind, and answers the per-frame questions the renderer, the physics step
//! and the tree view ask of it.
//!
//! ## Startup
//!
//! ```rust,no_run
//! use biome::{BiomeRegistry, ObjLoader};
//! use biome_component::{Geometry, Transform};
//!
//! let mut registry = BiomeRegistry::new();
//! let id = registry.load("data/sponza/sponza.obj", &ObjLoader::default())?;
//! let biome = registry.get(id).expect("just registered");
//!
//! for (transform, geometry) in biome.grab_all::<(Transform, Geometry)>() {
//!     let model = biome.get(transform)?.to_matrix();
//!     let cache_key = geometry.index();
//!     # let _ = (model, cache_key);
//! }
//! # Ok::<(), biome::BiomeError>(())
//! ```
//!
//! ## Module Overview
//!
//! - [`component`]: the sealed [`Component`] trait over the closed kind set
//! - [`inhabitant`]: scene nodes and their component slots
//! - [`query`]: `grab`-style matching over one to three component kinds
//! - [`dependency`]: per-kind prerequisite checks run on attach
//! - [`world`]: the [`Biome`] itself
//! - [`hierarchy`]: parent/child links, roots, tree walks
//! - [`registry`]: the set of live biomes owned by the application
//! - [`loader`]: the scene-import boundary and its OBJ implementation

pub mod component;
pub mod dependency;
pub mod error;
pub mod hierarchy;
pub mod inhabitant;
pub mod loader;
pub mod query;
pub mod registry;
pub mod world;

pub use component::{Component, Stored};
pub use dependency::{DependencyCheck, DependencyRules, DependencyViolation};
pub use error::{BiomeError, LoadError};
pub use inhabitant::{Inhabitant, InhabitantRef};
pub use loader::{ObjLoader, ObjLoaderConfig, SceneLoader, SceneObject};
pub use query::Query;
pub use registry::BiomeRegistry;
pub use world::Biome;
