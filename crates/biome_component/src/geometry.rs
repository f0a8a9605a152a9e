//! Renderable geometry.
//!
//! [`Mesh`] and [`Material`] are opaque payloads as far as the store is
//! concerned; the renderer uploads them and keys its GPU caches on the
//! [`Geometry`] handle's slot.

use std::path::PathBuf;

use biome_math::{UVec3, Vec2, Vec3};

/// Triangle mesh with per-vertex attributes.
///
/// `normals` and `uvs` are either empty or hold one entry per position.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Mesh {
    /// Vertex positions.
    pub positions: Vec<Vec3>,
    /// Vertex normals.
    pub normals: Vec<Vec3>,
    /// Texture coordinates.
    pub uvs: Vec<Vec2>,
    /// Triangles as vertex index triples.
    pub triangles: Vec<UVec3>,
}

impl Mesh {
    /// Number of floats per vertex in [`Mesh::interleave`] output.
    pub const INTERLEAVED_STRIDE: usize = 8;

    /// Create a mesh from positions and triangles, without normals or UVs.
    #[must_use]
    pub fn new(positions: Vec<Vec3>, triangles: Vec<UVec3>) -> Self {
        Self {
            positions,
            triangles,
            ..Self::default()
        }
    }

    /// Number of vertices.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Number of triangles.
    #[must_use]
    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    /// Replace the normals with smooth, area-weighted vertex normals.
    ///
    /// Triangles referencing a vertex past the end of `positions` are
    /// ignored. Vertices touched by no triangle get a zero normal.
    pub fn generate_normals(&mut self) {
        let mut normals = vec![Vec3::ZERO; self.positions.len()];
        for tri in &self.triangles {
            let [a, b, c] = [tri.x as usize, tri.y as usize, tri.z as usize];
            let (Some(&pa), Some(&pb), Some(&pc)) =
                (self.positions.get(a), self.positions.get(b), self.positions.get(c))
            else {
                continue;
            };
            // Unnormalised cross product: longer for larger triangles.
            let face = (pb - pa).cross(pc - pa);
            normals[a] += face;
            normals[b] += face;
            normals[c] += face;
        }
        for n in &mut normals {
            *n = n.normalize_or_zero();
        }
        self.normals = normals;
    }

    /// Interleave attributes as `position(3) normal(3) uv(2)` per vertex.
    ///
    /// Missing normals or UVs are written as zeros.
    #[must_use]
    pub fn interleave(&self) -> Vec<f32> {
        let mut out = Vec::with_capacity(self.positions.len() * Self::INTERLEAVED_STRIDE);
        for (i, p) in self.positions.iter().enumerate() {
            let n = self.normals.get(i).copied().unwrap_or(Vec3::ZERO);
            let uv = self.uvs.get(i).copied().unwrap_or(Vec2::ZERO);
            out.extend_from_slice(&[p.x, p.y, p.z, n.x, n.y, n.z, uv.x, uv.y]);
        }
        out
    }
}

/// Texture maps referenced by a [`Material`], as resolved file paths.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MaterialTextures {
    pub diffuse: Option<PathBuf>,
    pub specular: Option<PathBuf>,
    pub normal: Option<PathBuf>,
}

/// Uber material description.
#[derive(Debug, Clone, PartialEq)]
pub struct Material {
    /// Name of the material in its source library.
    pub identifier: String,
    /// Base colour, used when there is no diffuse texture.
    pub diffuse: Vec3,
    /// Specular colour.
    pub specular: Vec3,
    /// Roughness in `[0, 1]`.
    pub roughness: f32,
    /// Texture maps.
    pub textures: MaterialTextures,
}

impl Material {
    /// Largest shininess exponent mapped onto the roughness range.
    pub const MAX_SHININESS: f32 = 1000.0;

    /// The fallback material: magenta, fully rough, no textures.
    #[must_use]
    pub fn null() -> Self {
        Self {
            identifier: "null".to_string(),
            diffuse: Vec3::new(1.0, 0.0, 1.0),
            specular: Vec3::ZERO,
            roughness: 1.0,
            textures: MaterialTextures::default(),
        }
    }

    /// Convert a Phong shininess exponent to roughness.
    #[must_use]
    pub fn roughness_from_shininess(shininess: f32) -> f32 {
        (1.0 - shininess / Self::MAX_SHININESS).clamp(0.0, 1.0)
    }
}

impl Default for Material {
    fn default() -> Self {
        Self::null()
    }
}

/// A renderable surface: a mesh, its material, and whether to draw it.
#[derive(Debug, Clone, PartialEq)]
pub struct Geometry {
    pub mesh: Mesh,
    pub material: Material,
    pub visible: bool,
}

impl Geometry {
    /// Create visible geometry.
    #[must_use]
    pub fn new(mesh: Mesh, material: Material) -> Self {
        Self {
            mesh,
            material,
            visible: true,
        }
    }

    /// Mark the geometry as hidden.
    #[must_use]
    pub fn hidden(mut self) -> Self {
        self.visible = false;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quad() -> Mesh {
        Mesh::new(
            vec![
                Vec3::new(0.0, 0.0, 0.0),
                Vec3::new(1.0, 0.0, 0.0),
                Vec3::new(1.0, 0.0, -1.0),
                Vec3::new(0.0, 0.0, -1.0),
            ],
            vec![UVec3::new(0, 1, 2), UVec3::new(0, 2, 3)],
        )
    }

    #[test]
    fn test_counts() {
        let mesh = quad();
        assert_eq!(mesh.vertex_count(), 4);
        assert_eq!(mesh.triangle_count(), 2);
    }

    #[test]
    fn test_generate_normals_flat_quad_points_up() {
        let mut mesh = quad();
        mesh.generate_normals();
        assert_eq!(mesh.normals.len(), 4);
        for n in &mesh.normals {
            assert!((*n - Vec3::Y).length() < 1e-5, "unexpected normal {n:?}");
        }
    }

    #[test]
    fn test_generate_normals_skips_bad_indices() {
        let mut mesh = Mesh::new(vec![Vec3::ZERO, Vec3::X], vec![UVec3::new(0, 1, 9)]);
        mesh.generate_normals();
        assert_eq!(mesh.normals, vec![Vec3::ZERO, Vec3::ZERO]);
    }

    #[test]
    fn test_interleave_fills_missing_attributes() {
        let mut mesh = quad();
        mesh.uvs = vec![Vec2::new(0.25, 0.75)];
        let data = mesh.interleave();
        assert_eq!(data.len(), 4 * Mesh::INTERLEAVED_STRIDE);
        assert_eq!(&data[..8], &[0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.25, 0.75]);
        assert_eq!(&data[8..16], &[1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_null_material() {
        let m = Material::null();
        assert_eq!(m.identifier, "null");
        assert_eq!(m.diffuse, Vec3::new(1.0, 0.0, 1.0));
        assert_eq!(m.textures, MaterialTextures::default());
    }

    #[test]
    fn test_roughness_from_shininess() {
        assert_eq!(Material::roughness_from_shininess(0.0), 1.0);
        assert_eq!(Material::roughness_from_shininess(500.0), 0.5);
        assert_eq!(Material::roughness_from_shininess(4000.0), 0.0);
    }

    #[test]
    fn test_geometry_visibility() {
        let g = Geometry::new(quad(), Material::null());
        assert!(g.visible);
        assert!(!g.hidden().visible);
    }
}
