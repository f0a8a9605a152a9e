//! Append-only component tables.
//!
//! A [`ComponentTable<T>`] stores every `T` of one biome, addressed by a
//! 0-based slot. Storage is a list of fixed-capacity chunks: a chunk is
//! allocated with room for [`CHUNK_CAPACITY`] values and is never grown past
//! it, so appending never moves a value that is already stored. There is no
//! removal and no compaction; a slot, once issued, names the same value for
//! the lifetime of the table.
//!
//! ```text
//! slot:    0 .. 1023 | 1024 .. 2047 | 2048 ..
//! chunks: [ chunk 0 ] [  chunk 1   ] [ chunk 2 (partially filled) ]
//! ```

use crate::error::TableError;
use crate::handle::ComponentRef;
use crate::id::BiomeId;

/// Number of slots per storage chunk.
pub const CHUNK_CAPACITY: usize = 1024;

/// Homogeneous, append-only storage for one component type of one biome.
#[derive(Debug)]
pub struct ComponentTable<T> {
    /// The biome this table belongs to; recorded in every issued handle.
    owner: BiomeId,
    /// Fixed-capacity chunks. Every chunk but the last is full.
    chunks: Vec<Vec<T>>,
    /// Total number of stored values.
    len: usize,
}

impl<T> ComponentTable<T> {
    /// Create an empty table owned by `owner`.
    #[must_use]
    pub fn new(owner: BiomeId) -> Self {
        Self {
            owner,
            chunks: Vec::new(),
            len: 0,
        }
    }

    /// The biome this table belongs to.
    #[must_use]
    pub fn owner(&self) -> BiomeId {
        self.owner
    }

    /// Returns the number of stored values.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the table holds no values.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of allocated chunks.
    #[must_use]
    pub fn chunk_count(&self) -> usize {
        self.chunks.len()
    }

    /// A table-only handle for this table.
    #[must_use]
    pub fn placeholder(&self) -> ComponentRef<T> {
        ComponentRef::unbound(self.owner)
    }

    /// Append `value` and return a handle bound to its slot.
    pub fn push(&mut self, value: T) -> ComponentRef<T> {
        let index = self.len;
        match self.chunks.last_mut() {
            Some(chunk) if chunk.len() < CHUNK_CAPACITY => chunk.push(value),
            _ => {
                let mut chunk = Vec::with_capacity(CHUNK_CAPACITY);
                chunk.push(value);
                self.chunks.push(chunk);
            }
        }
        self.len += 1;
        ComponentRef::bound(self.owner, index)
    }

    /// Resolve a handle to a shared reference.
    ///
    /// # Errors
    ///
    /// See [`TableError`].
    pub fn get(&self, handle: ComponentRef<T>) -> Result<&T, TableError> {
        let (chunk, slot) = self.locate(handle)?;
        Ok(&self.chunks[chunk][slot])
    }

    /// Resolve a handle to a mutable reference.
    ///
    /// # Errors
    ///
    /// See [`TableError`].
    pub fn get_mut(&mut self, handle: ComponentRef<T>) -> Result<&mut T, TableError> {
        let (chunk, slot) = self.locate(handle)?;
        Ok(&mut self.chunks[chunk][slot])
    }

    /// Iterate over every stored value in slot order, with its handle.
    pub fn iter(&self) -> impl Iterator<Item = (ComponentRef<T>, &T)> + '_ {
        let owner = self.owner;
        self.chunks
            .iter()
            .flatten()
            .enumerate()
            .map(move |(index, value)| (ComponentRef::bound(owner, index), value))
    }

    /// Check `handle` against this table and split its slot into
    /// (chunk, offset).
    fn locate(&self, handle: ComponentRef<T>) -> Result<(usize, usize), TableError> {
        if handle.owner() != self.owner {
            return Err(TableError::ForeignTable {
                expected: self.owner,
                found: handle.owner(),
            });
        }
        let index = handle.index().ok_or(TableError::Unbound)?;
        if index >= self.len {
            return Err(TableError::OutOfBounds {
                index,
                len: self.len,
            });
        }
        Ok((index / CHUNK_CAPACITY, index % CHUNK_CAPACITY))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_returns_sequential_slots() {
        let mut table = ComponentTable::new(BiomeId::new());
        let a = table.push("a");
        let b = table.push("b");
        assert_eq!(a.index(), Some(0));
        assert_eq!(b.index(), Some(1));
        assert_eq!(table.len(), 2);
        assert_eq!(*table.get(b).unwrap(), "b");
    }

    #[test]
    fn test_placeholder_is_unbound() {
        let table = ComponentTable::<u32>::new(BiomeId::new());
        let r = table.placeholder();
        assert!(!r.has_value());
        assert_eq!(r.owner(), table.owner());
        assert_eq!(table.get(r), Err(TableError::Unbound));
    }

    #[test]
    fn test_stale_slot_is_out_of_bounds() {
        let mut table = ComponentTable::new(BiomeId::new());
        table.push(1u32);
        let stale = ComponentRef::bound(table.owner(), 5);
        assert_eq!(
            table.get(stale),
            Err(TableError::OutOfBounds { index: 5, len: 1 })
        );
    }

    #[test]
    fn test_foreign_handle_is_rejected() {
        let mut mine = ComponentTable::new(BiomeId::new());
        let mut theirs = ComponentTable::new(BiomeId::new());
        mine.push(1u32);
        let foreign = theirs.push(2u32);
        assert!(matches!(
            mine.get(foreign),
            Err(TableError::ForeignTable { .. })
        ));
    }

    #[test]
    fn test_get_mut_writes_through() {
        let mut table = ComponentTable::new(BiomeId::new());
        let r = table.push(10u32);
        *table.get_mut(r).unwrap() += 5;
        assert_eq!(*table.get(r).unwrap(), 15);
    }

    #[test]
    fn test_growth_crosses_chunks_without_moving_values() {
        let mut table = ComponentTable::new(BiomeId::new());
        let first = table.push(0usize);
        let before: *const usize = table.get(first).unwrap();

        for i in 1..(CHUNK_CAPACITY * 2 + 10) {
            table.push(i);
        }

        assert_eq!(table.chunk_count(), 3);
        let after: *const usize = table.get(first).unwrap();
        assert_eq!(before, after);

        let boundary = ComponentRef::bound(table.owner(), CHUNK_CAPACITY);
        assert_eq!(*table.get(boundary).unwrap(), CHUNK_CAPACITY);
    }

    #[test]
    fn test_iter_in_slot_order() {
        let mut table = ComponentTable::new(BiomeId::new());
        for i in 0..(CHUNK_CAPACITY + 3) {
            table.push(i);
        }
        let mut count = 0;
        for (handle, value) in table.iter() {
            assert_eq!(handle.index(), Some(*value));
            count += 1;
        }
        assert_eq!(count, CHUNK_CAPACITY + 3);
    }
}
