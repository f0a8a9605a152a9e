//! The closed set of component kinds.

use serde::{Deserialize, Serialize};

/// Every kind of component an inhabitant can carry.
///
/// The set is closed: adding a kind means adding a table to the biome and a
/// slot to the inhabitant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ComponentKind {
    /// Spatial frame ([`Transform`](crate::Transform)).
    Transform,
    /// Renderable surface ([`Geometry`](crate::Geometry)).
    Geometry,
    /// Collision shape ([`Collider`](crate::Collider)).
    Collider,
}

impl ComponentKind {
    /// All kinds, in declaration order.
    pub const ALL: [ComponentKind; 3] = [Self::Transform, Self::Geometry, Self::Collider];

    /// Human-readable name of the kind.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Transform => "Transform",
            Self::Geometry => "Geometry",
            Self::Collider => "Collider",
        }
    }
}

impl std::fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
