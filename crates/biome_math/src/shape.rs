//! Primitive collision shapes.
//!
//! Shapes are expressed in the local frame of the [`Transform`](crate::Transform)
//! their collider is attached to.

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// A sphere given by its center and radius.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Sphere {
    /// Center in the local frame.
    pub center: Vec3,
    /// Radius; negative inputs are stored as their absolute value.
    pub radius: f32,
}

impl Sphere {
    /// Create a sphere.
    #[must_use]
    pub fn new(center: Vec3, radius: f32) -> Self {
        Self {
            center,
            radius: radius.abs(),
        }
    }

    /// Returns `true` if `point` lies inside or on the sphere.
    #[must_use]
    pub fn contains(&self, point: Vec3) -> bool {
        self.center.distance_squared(point) <= self.radius * self.radius
    }
}

/// An axis-aligned box given by its minimum and maximum corners.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Aabb {
    /// Component-wise minimum corner.
    pub min: Vec3,
    /// Component-wise maximum corner.
    pub max: Vec3,
}

impl Aabb {
    /// Create a box from two opposite corners, in any order.
    #[must_use]
    pub fn new(a: Vec3, b: Vec3) -> Self {
        Self {
            min: a.min(b),
            max: a.max(b),
        }
    }

    /// Center point of the box.
    #[must_use]
    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    /// Half the size along each axis.
    #[must_use]
    pub fn half_extents(&self) -> Vec3 {
        (self.max - self.min) * 0.5
    }

    /// Returns `true` if `point` lies inside or on the box.
    #[must_use]
    pub fn contains(&self, point: Vec3) -> bool {
        point.cmpge(self.min).all() && point.cmple(self.max).all()
    }
}
