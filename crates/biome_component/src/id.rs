//! Biome identity.
//!
//! Every [`ComponentTable`](crate::ComponentTable) belongs to exactly one
//! biome. A handle records the [`BiomeId`] of the table it was issued by, so
//! a handle can never be resolved against another biome's table by accident.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A unique biome identifier.
///
/// IDs are random v4 UUIDs, unique for the lifetime of the process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct BiomeId(Uuid);

impl BiomeId {
    /// Generate a fresh identifier.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Returns the underlying UUID.
    #[must_use]
    pub const fn uuid(self) -> Uuid {
        self.0
    }
}

impl Default for BiomeId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for BiomeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Biome({})", self.0)
    }
}
