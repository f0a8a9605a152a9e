//! Storage-layer error types.

use crate::id::BiomeId;

/// Errors raised when a [`ComponentRef`](crate::ComponentRef) is resolved
/// against a [`ComponentTable`](crate::ComponentTable).
///
/// All of these are local and recoverable: the caller can skip the entity
/// and continue.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TableError {
    /// The handle is a table-only placeholder with no slot.
    #[error("component handle is not bound to a slot")]
    Unbound,

    /// The handle was issued by a table belonging to another biome.
    #[error("component handle belongs to {found}, table belongs to {expected}")]
    ForeignTable {
        /// The biome owning the table.
        expected: BiomeId,
        /// The biome recorded in the handle.
        found: BiomeId,
    },

    /// The handle's slot is past the end of the table.
    #[error("component slot {index} is out of bounds (table holds {len})")]
    OutOfBounds {
        /// The slot recorded in the handle.
        index: usize,
        /// The table's length at the time of the lookup.
        len: usize,
    },
}
