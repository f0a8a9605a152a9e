//! The printable view of a biome.

use std::fmt::Write;

use biome::Biome;
use biome_component::{ComponentKind, Geometry, TableError, Transform};
use serde::Serialize;

/// One line of the editor tree view.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TreeNode {
    pub depth: usize,
    pub identifier: String,
    pub components: Vec<ComponentKind>,
}

/// One renderer draw call.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DrawItem {
    /// Slot of the geometry; the renderer keys its GPU caches on it.
    pub cache_key: usize,
    pub position: [f32; 3],
    pub material: String,
    pub vertices: usize,
    pub triangles: usize,
    pub visible: bool,
}

/// Everything `biome_inspect` prints about one biome.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SceneReport {
    pub biome: String,
    pub inhabitants: usize,
    pub tree: Vec<TreeNode>,
    pub draw_list: Vec<DrawItem>,
    pub violations: usize,
}

impl SceneReport {
    /// Collect the tree view and draw list of `biome`.
    pub fn build(biome: &Biome) -> Result<Self, TableError> {
        let mut tree = Vec::new();
        biome.walk(|_, inhabitant, depth| {
            tree.push(TreeNode {
                depth,
                identifier: inhabitant.identifier().to_string(),
                components: inhabitant.kinds(),
            });
        })?;

        let mut draw_list = Vec::new();
        for (transform, geometry) in biome.grab_all::<(Transform, Geometry)>() {
            let position = biome.get(transform)?.position;
            let g = biome.get(geometry)?;
            draw_list.push(DrawItem {
                cache_key: geometry.index().ok_or(TableError::Unbound)?,
                position: position.to_array(),
                material: g.material.identifier.clone(),
                vertices: g.mesh.vertex_count(),
                triangles: g.mesh.triangle_count(),
                visible: g.visible,
            });
        }

        Ok(Self {
            biome: biome.id().to_string(),
            inhabitants: biome.inhabitant_count(),
            tree,
            draw_list,
            violations: biome.violations().len(),
        })
    }

    /// Render as indented plain text.
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "{} ({} inhabitants)", self.biome, self.inhabitants);
        for node in &self.tree {
            let kinds: Vec<&str> = node.components.iter().map(|k| k.name()).collect();
            let _ = writeln!(
                out,
                "{:indent$}{} [{}]",
                "",
                node.identifier,
                kinds.join(", "),
                indent = node.depth * 2
            );
        }

        let _ = writeln!(out, "\ndraw list:");
        for item in &self.draw_list {
            let _ = writeln!(
                out,
                "  #{:<4} {:>6} verts {:>6} tris  {}{}",
                item.cache_key,
                item.vertices,
                item.triangles,
                item.material,
                if item.visible { "" } else { " (hidden)" }
            );
        }
        if self.violations > 0 {
            let _ = writeln!(out, "\n{} dependency violation(s)", self.violations);
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use biome::{Biome, SceneObject};
    use biome_component::{Material, Mesh};
    use biome_math::{UVec3, Vec3};

    use super::*;

    fn triangle(name: &str) -> SceneObject {
        SceneObject {
            name: name.to_string(),
            mesh: Mesh::new(vec![Vec3::ZERO, Vec3::X, Vec3::Y], vec![UVec3::new(0, 1, 2)]),
            material: Material::null(),
        }
    }

    #[test]
    fn test_report_tree_and_draw_list() {
        let biome = Biome::from_objects("scene", [triangle("a"), triangle("b")]).unwrap();
        let report = SceneReport::build(&biome).unwrap();

        let tree: Vec<_> = report
            .tree
            .iter()
            .map(|n| (n.identifier.as_str(), n.depth))
            .collect();
        assert_eq!(tree, [("scene", 0), ("a", 1), ("b", 1)]);
        assert!(report.tree[0].components.is_empty());
        assert_eq!(
            report.tree[1].components,
            [ComponentKind::Transform, ComponentKind::Geometry]
        );

        assert_eq!(report.draw_list.len(), 2);
        assert_eq!(report.draw_list[0].cache_key, 0);
        assert_eq!(report.draw_list[1].cache_key, 1);
        assert_eq!(report.draw_list[0].triangles, 1);
        assert_eq!(report.violations, 0);
    }

    #[test]
    fn test_text_indents_children() {
        let biome = Biome::from_objects("scene", [triangle("a")]).unwrap();
        let text = SceneReport::build(&biome).unwrap().to_text();
        assert!(text.contains("\nscene []\n"));
        assert!(text.contains("\n  a [Transform, Geometry]\n"));
        assert!(text.contains("#0"));
    }

    #[test]
    fn test_json_shape() {
        let biome = Biome::from_objects("scene", [triangle("a")]).unwrap();
        let report = SceneReport::build(&biome).unwrap();
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["inhabitants"], 2);
        assert_eq!(json["tree"][1]["components"][0], "Transform");
        assert_eq!(json["draw_list"][0]["material"], "null");
    }
}
