//! # biome_component
//!
//! The "C" of the Biome scene store: what the component kinds are, how they
//! are stored, and how the rest of the editor refers to them without owning
//! them.
//!
//! This crate provides:
//!
//! - [`BiomeId`]: identity of the biome that owns a table.
//! - [`ComponentKind`]: the closed set of attachable component kinds.
//! - [`ComponentTable`]: append-only, chunked storage that never relocates
//!   an element once written.
//! - [`ComponentRef`]: a copyable handle to a slot of a table, either bound
//!   to a slot or a table-only placeholder.
//! - The component payloads: [`Geometry`] (with [`Mesh`] and [`Material`]) and
//!   [`Collider`]. The transform payload lives in `biome_math`.

pub mod collider;
pub mod error;
pub mod geometry;
pub mod handle;
pub mod id;
pub mod kind;
pub mod table;

pub use biome_math::Transform;
pub use collider::{Collider, ColliderShape};
pub use error::TableError;
pub use geometry::{Geometry, Material, MaterialTextures, Mesh};
pub use handle::ComponentRef;
pub use id::BiomeId;
pub use kind::ComponentKind;
pub use table::{CHUNK_CAPACITY, ComponentTable};
