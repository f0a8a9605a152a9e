//! The spatial frame of a placed inhabitant.
//!
//! A [`Transform`] is expressed in its parent inhabitant's frame; roots are in
//! world space. `Biome::world_matrix` walks the parent chain and multiplies
//! the local matrices, so moving a parent moves every descendant. Colliders
//! hold a handle to the transform their shape is centred on.

use glam::{Mat4, Quat, Vec3};
use serde::{Deserialize, Serialize};

/// Parent-relative placement: scale, then rotate, then translate.
///
/// Fields are public and written directly by the editor and physics step;
/// the store keeps no derived state, so there is nothing to invalidate.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Transform {
    pub position: Vec3,
    /// Unit quaternion.
    pub rotation: Quat,
    pub scale: Vec3,
}

impl Transform {
    /// Placed at the parent's origin with the parent's orientation and size.
    /// Imported scene objects start here.
    pub const IDENTITY: Self = Self {
        position: Vec3::ZERO,
        rotation: Quat::IDENTITY,
        scale: Vec3::ONE,
    };

    #[must_use]
    pub fn from_position(position: Vec3) -> Self {
        Self {
            position,
            ..Self::IDENTITY
        }
    }

    /// Local-to-parent matrix.
    #[must_use]
    pub fn to_matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(self.scale, self.rotation, self.position)
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}
