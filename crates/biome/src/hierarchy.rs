//! Parent/child links between inhabitants.
//!
//! Links are one-way append operations: a child gets exactly one parent and
//! keeps it. The hierarchy is therefore a forest, and every walk below
//! terminates.

use biome_component::{TableError, Transform};
use biome_math::Mat4;
use tracing::debug;

use crate::error::BiomeError;
use crate::inhabitant::{Inhabitant, InhabitantRef};
use crate::world::Biome;

impl Biome {
    /// Make `child` a child of `parent`.
    ///
    /// Stricter than plain linking: cycles and re-parenting are refused
    /// rather than left to caller discipline, so the hierarchy is always a
    /// forest and [`Biome::walk`] and [`Biome::world_matrix`] terminate.
    ///
    /// # Errors
    ///
    /// - [`BiomeError::Table`] if either handle does not resolve.
    /// - [`BiomeError::WouldCycle`] if `child` is `parent` or one of its
    ///   ancestors.
    /// - [`BiomeError::AlreadyParented`] if `child` already has a parent.
    pub fn link(&mut self, parent: InhabitantRef, child: InhabitantRef) -> Result<(), BiomeError> {
        let child_node = self.inhabitant(child)?;
        let parent_node = self.inhabitant(parent)?;

        if self.is_ancestor_or_self(child, parent)? {
            return Err(BiomeError::WouldCycle {
                parent: parent_node.identifier().to_string(),
                child: child_node.identifier().to_string(),
            });
        }
        if !child_node.is_root() {
            return Err(BiomeError::AlreadyParented {
                child: child_node.identifier().to_string(),
            });
        }

        self.inhabitant_mut(child)?.parent = parent;
        self.inhabitant_mut(parent)?.children.push(child);
        debug!(biome = %self.id(), ?parent, ?child, "linked");
        Ok(())
    }

    /// Returns `true` if `candidate` is `node` or lies on its parent chain.
    fn is_ancestor_or_self(
        &self,
        candidate: InhabitantRef,
        node: InhabitantRef,
    ) -> Result<bool, TableError> {
        let mut current = node;
        while current.has_value() {
            if current == candidate {
                return Ok(true);
            }
            current = self.inhabitant(current)?.parent();
        }
        Ok(false)
    }

    /// Inhabitants without a parent, in creation order.
    #[must_use]
    pub fn roots(&self) -> Vec<InhabitantRef> {
        self.inhabitants()
            .filter(|(_, inhabitant)| inhabitant.is_root())
            .map(|(handle, _)| handle)
            .collect()
    }

    /// Children of `inhabitant`, in link order.
    ///
    /// # Errors
    ///
    /// See [`TableError`].
    pub fn children(&self, inhabitant: InhabitantRef) -> Result<&[InhabitantRef], TableError> {
        Ok(self.inhabitant(inhabitant)?.children())
    }

    /// Depth-first, pre-order walk over every tree, roots in creation order
    /// and children in link order. `visit` receives the depth, 0 for roots.
    ///
    /// # Errors
    ///
    /// Fails only if a stored link does not resolve.
    pub fn walk<F>(&self, mut visit: F) -> Result<(), TableError>
    where
        F: FnMut(InhabitantRef, &Inhabitant, usize),
    {
        let mut stack: Vec<(InhabitantRef, usize)> =
            self.roots().into_iter().rev().map(|root| (root, 0)).collect();

        while let Some((handle, depth)) = stack.pop() {
            let inhabitant = self.inhabitant(handle)?;
            visit(handle, inhabitant, depth);
            stack.extend(
                inhabitant
                    .children()
                    .iter()
                    .rev()
                    .map(|child| (*child, depth + 1)),
            );
        }
        Ok(())
    }

    /// Model matrix of `inhabitant`: its transform composed under every
    /// ancestor's. Inhabitants without a `Transform` contribute identity.
    ///
    /// # Errors
    ///
    /// See [`TableError`].
    pub fn world_matrix(&self, inhabitant: InhabitantRef) -> Result<Mat4, TableError> {
        let mut matrix = Mat4::IDENTITY;
        let mut current = inhabitant;
        while current.has_value() {
            let node = self.inhabitant(current)?;
            let transform = node.component::<Transform>();
            if transform.has_value() {
                matrix = self.get(transform)?.to_matrix() * matrix;
            }
            current = node.parent();
        }
        Ok(matrix)
    }
}
