//! # biome_math
//!
//! Math types for the Biome scene store. Re-exports [`glam`] for linear
//! algebra and defines the spatial [`Transform`] every placed inhabitant
//! carries, plus the primitive shapes colliders are built from.

pub mod shape;
pub mod transform;

// Re-export glam types for convenience.
pub use glam::{EulerRot, Mat3, Mat4, Quat, UVec3, Vec2, Vec3, Vec4};

pub use shape::{Aabb, Sphere};
pub use transform::Transform;
