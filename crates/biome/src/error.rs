//! Error types for the biome store and its loaders.

use std::path::PathBuf;

use biome_component::{BiomeId, TableError};

/// Errors raised by the scene-import boundary.
///
/// A load error aborts that one load; no biome is built or registered.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// The scene file does not exist.
    #[error("scene file {0} does not exist")]
    NotFound(PathBuf),

    /// The scene file could not be parsed.
    #[error("failed to parse scene file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: tobj::LoadError,
    },

    /// The scene file parsed but contains no objects.
    #[error("scene file {0} contains no objects")]
    Empty(PathBuf),
}

/// Errors raised by [`Biome`](crate::Biome) and
/// [`BiomeRegistry`](crate::BiomeRegistry) operations.
#[derive(Debug, thiserror::Error)]
pub enum BiomeError {
    /// A handle could not be resolved.
    #[error(transparent)]
    Table(#[from] TableError),

    /// A scene load failed.
    #[error(transparent)]
    Load(#[from] LoadError),

    /// Linking would make an inhabitant its own ancestor.
    #[error("linking {child:?} under {parent:?} would create a cycle")]
    WouldCycle {
        parent: String,
        child: String,
    },

    /// The child already has a parent; there is no unlink.
    #[error("{child:?} already has a parent")]
    AlreadyParented {
        child: String,
    },

    /// No biome with this id is registered.
    #[error("{0} is not registered")]
    UnknownBiome(BiomeId),
}
