//! Collision shapes attached to inhabitants.
//!
//! A [`Collider`] does not own its spatial frame. It refers to a
//! [`Transform`] slot, which must be resolved (and checked) every time the
//! shape is placed in the world.

use biome_math::{Aabb, Sphere, Transform, Vec3};

use crate::handle::ComponentRef;

/// Shape of a collider, in the local frame of its transform.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ColliderShape {
    Sphere(Sphere),
    Box(Aabb),
}

impl ColliderShape {
    /// Returns `true` if a local-frame point lies inside the shape.
    #[must_use]
    pub fn contains(&self, point: Vec3) -> bool {
        match self {
            Self::Sphere(sphere) => sphere.contains(point),
            Self::Box(aabb) => aabb.contains(point),
        }
    }
}

impl From<Sphere> for ColliderShape {
    fn from(sphere: Sphere) -> Self {
        Self::Sphere(sphere)
    }
}

impl From<Aabb> for ColliderShape {
    fn from(aabb: Aabb) -> Self {
        Self::Box(aabb)
    }
}

/// Collision shape for physics.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Collider {
    /// The transform the shape is expressed relative to.
    pub transform: ComponentRef<Transform>,
    pub shape: ColliderShape,
    /// Whether gravity acts on the owner.
    pub gravity: bool,
    /// Whether the collider takes part in collision at all.
    pub enabled: bool,
}

impl Collider {
    /// Create an enabled collider affected by gravity.
    #[must_use]
    pub fn new(transform: ComponentRef<Transform>, shape: impl Into<ColliderShape>) -> Self {
        Self {
            transform,
            shape: shape.into(),
            gravity: true,
            enabled: true,
        }
    }

    #[must_use]
    pub fn with_gravity(mut self, gravity: bool) -> Self {
        self.gravity = gravity;
        self
    }

    #[must_use]
    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::id::BiomeId;

    #[test]
    fn test_defaults() {
        let t = ComponentRef::<Transform>::bound(BiomeId::new(), 0);
        let c = Collider::new(t, Sphere::new(Vec3::ZERO, 1.0));
        assert!(c.gravity);
        assert!(c.enabled);
        assert_eq!(c.transform, t);
    }

    #[test]
    fn test_builders() {
        let t = ComponentRef::<Transform>::unbound(BiomeId::new());
        let c = Collider::new(t, Aabb::new(Vec3::ZERO, Vec3::ONE))
            .with_gravity(false)
            .with_enabled(false);
        assert!(!c.gravity);
        assert!(!c.enabled);
        assert!(matches!(c.shape, ColliderShape::Box(_)));
    }

    #[test]
    fn test_shape_contains() {
        let sphere = ColliderShape::from(Sphere::new(Vec3::ZERO, 1.0));
        assert!(sphere.contains(Vec3::new(0.0, 0.5, 0.0)));
        let aabb = ColliderShape::from(Aabb::new(Vec3::ZERO, Vec3::ONE));
        assert!(!aabb.contains(Vec3::splat(-0.1)));
    }
}
