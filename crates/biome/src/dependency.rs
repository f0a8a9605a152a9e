//! Attach-time prerequisite checks.
//!
//! Each [`ComponentKind`] may register a check that inspects the inhabitant a
//! component is about to be attached to and reports which prerequisite kinds
//! are missing. Kinds without a check accept every attach. A failed check is
//! advisory: the biome logs it, records a [`DependencyViolation`], and attaches
//! anyway.

use std::collections::HashMap;

use biome_component::ComponentKind;

use crate::inhabitant::{Inhabitant, InhabitantRef};

/// A prerequisite check: returns the kinds missing on the inhabitant.
pub type DependencyCheck = Box<dyn Fn(&Inhabitant) -> Vec<ComponentKind> + Send + Sync>;

/// Per-kind prerequisite table.
///
/// The default table requires a `Transform` before a `Geometry` or a
/// `Collider` is attached.
pub struct DependencyRules {
    checks: HashMap<ComponentKind, DependencyCheck>,
}

impl DependencyRules {
    /// A table with no checks.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            checks: HashMap::new(),
        }
    }

    /// Install `check` for `kind`, replacing any previous check.
    pub fn register<F>(&mut self, kind: ComponentKind, check: F)
    where
        F: Fn(&Inhabitant) -> Vec<ComponentKind> + Send + Sync + 'static,
    {
        self.checks.insert(kind, Box::new(check));
    }

    /// Install a check requiring every kind in `prerequisites` to be attached
    /// before `kind`.
    pub fn require(&mut self, kind: ComponentKind, prerequisites: &[ComponentKind]) {
        let prerequisites = prerequisites.to_vec();
        self.register(kind, move |inhabitant| {
            prerequisites
                .iter()
                .copied()
                .filter(|p| !inhabitant.has_kind(*p))
                .collect()
        });
    }

    /// Returns `true` if `kind` has a check installed.
    #[must_use]
    pub fn has_rule(&self, kind: ComponentKind) -> bool {
        self.checks.contains_key(&kind)
    }

    /// Run the check for `kind`; an empty result means the attach is clean.
    #[must_use]
    pub fn check(&self, kind: ComponentKind, inhabitant: &Inhabitant) -> Vec<ComponentKind> {
        self.checks
            .get(&kind)
            .map_or_else(Vec::new, |check| check(inhabitant))
    }
}

impl Default for DependencyRules {
    fn default() -> Self {
        let mut rules = Self::empty();
        rules.require(ComponentKind::Geometry, &[ComponentKind::Transform]);
        rules.require(ComponentKind::Collider, &[ComponentKind::Transform]);
        rules
    }
}

impl std::fmt::Debug for DependencyRules {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut kinds: Vec<_> = self.checks.keys().copied().collect();
        kinds.sort();
        f.debug_struct("DependencyRules")
            .field("checked_kinds", &kinds)
            .finish()
    }
}

/// A soft violation recorded when a component was attached without its
/// prerequisites.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DependencyViolation {
    /// The inhabitant the component was attached to.
    pub inhabitant: InhabitantRef,
    /// The inhabitant's identifier at the time of the attach.
    pub identifier: String,
    /// The kind that was attached.
    pub component: ComponentKind,
    /// The prerequisite kinds that were absent.
    pub missing: Vec<ComponentKind>,
}

#[cfg(test)]
mod tests {
    use biome_component::{BiomeId, ComponentRef};

    use super::*;

    fn bare() -> Inhabitant {
        Inhabitant::new("bare".to_string(), BiomeId::new())
    }

    #[test]
    fn test_default_requires_transform_for_geometry_and_collider() {
        let rules = DependencyRules::default();
        let inhabitant = bare();
        assert_eq!(
            rules.check(ComponentKind::Geometry, &inhabitant),
            vec![ComponentKind::Transform]
        );
        assert_eq!(
            rules.check(ComponentKind::Collider, &inhabitant),
            vec![ComponentKind::Transform]
        );
        assert!(rules.check(ComponentKind::Transform, &inhabitant).is_empty());
    }

    #[test]
    fn test_satisfied_prerequisite_passes() {
        let rules = DependencyRules::default();
        let mut inhabitant = bare();
        inhabitant.transform = ComponentRef::bound(inhabitant.biome(), 0);
        assert!(rules.check(ComponentKind::Geometry, &inhabitant).is_empty());
    }

    #[test]
    fn test_empty_rules_are_no_op() {
        let rules = DependencyRules::empty();
        for kind in ComponentKind::ALL {
            assert!(!rules.has_rule(kind));
            assert!(rules.check(kind, &bare()).is_empty());
        }
    }

    #[test]
    fn test_register_replaces_check() {
        let mut rules = DependencyRules::default();
        rules.register(ComponentKind::Geometry, |_| Vec::new());
        assert!(rules.check(ComponentKind::Geometry, &bare()).is_empty());

        rules.require(ComponentKind::Transform, &[ComponentKind::Collider]);
        assert_eq!(
            rules.check(ComponentKind::Transform, &bare()),
            vec![ComponentKind::Collider]
        );
    }

    #[test]
    fn test_debug_lists_checked_kinds() {
        let text = format!("{:?}", DependencyRules::default());
        assert_eq!(text, "DependencyRules { checked_kinds: [Geometry, Collider] }");
    }
}
