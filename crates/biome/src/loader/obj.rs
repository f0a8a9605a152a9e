//! Wavefront OBJ import through `tobj`.

use std::path::{Path, PathBuf};

use biome_component::{Material, MaterialTextures, Mesh};
use biome_math::{UVec3, Vec2, Vec3};
use tracing::{debug, info, warn};

use super::{SceneLoader, SceneObject};
use crate::error::LoadError;

/// Options for [`ObjLoader`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ObjLoaderConfig {
    /// Split polygons into triangles. When this is off, faces with more than
    /// three corners are skipped with a warning.
    pub triangulate: bool,
    /// Generate smooth normals for meshes that have none.
    pub generate_normals: bool,
    /// Read the MTL libraries the file references.
    pub load_materials: bool,
}

impl Default for ObjLoaderConfig {
    fn default() -> Self {
        Self {
            triangulate: true,
            generate_normals: true,
            load_materials: true,
        }
    }
}

impl ObjLoaderConfig {
    #[must_use]
    pub fn with_triangulate(mut self, triangulate: bool) -> Self {
        self.triangulate = triangulate;
        self
    }

    #[must_use]
    pub fn with_generate_normals(mut self, generate_normals: bool) -> Self {
        self.generate_normals = generate_normals;
        self
    }

    #[must_use]
    pub fn with_load_materials(mut self, load_materials: bool) -> Self {
        self.load_materials = load_materials;
        self
    }
}

/// Scene loader for `.obj` files and their `.mtl` libraries.
///
/// Each OBJ object (`o`/`g` block) becomes one [`SceneObject`]. Materials
/// that cannot be read fall back to [`Material::null`].
#[derive(Debug, Clone, Default)]
pub struct ObjLoader {
    config: ObjLoaderConfig,
}

impl ObjLoader {
    #[must_use]
    pub fn new(config: ObjLoaderConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn config(&self) -> &ObjLoaderConfig {
        &self.config
    }
}

impl SceneLoader for ObjLoader {
    fn load(&self, path: &Path) -> Result<Vec<SceneObject>, LoadError> {
        if !path.exists() {
            return Err(LoadError::NotFound(path.to_path_buf()));
        }

        let options = tobj::LoadOptions {
            triangulate: self.config.triangulate,
            single_index: true,
            ..Default::default()
        };
        let (models, materials) =
            tobj::load_obj(path, &options).map_err(|source| LoadError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        // tobj reports a geometry-free file as one empty unnamed model.
        let models: Vec<tobj::Model> = models
            .into_iter()
            .filter(|model| {
                let drawable =
                    !model.mesh.positions.is_empty() && !model.mesh.indices.is_empty();
                if !drawable {
                    debug!(object = %model.name, "skipping object without faces");
                }
                drawable
            })
            .collect();
        if models.is_empty() {
            return Err(LoadError::Empty(path.to_path_buf()));
        }

        let directory = path.parent().unwrap_or(Path::new("."));
        let materials: Vec<Material> = if self.config.load_materials {
            match materials {
                Ok(materials) => materials
                    .iter()
                    .map(|m| convert_material(m, directory))
                    .collect(),
                Err(e) => {
                    warn!(
                        path = %path.display(),
                        error = %e,
                        "material library unreadable, using null material"
                    );
                    Vec::new()
                }
            }
        } else {
            Vec::new()
        };

        let objects: Vec<SceneObject> = models
            .into_iter()
            .map(|model| {
                let material = model
                    .mesh
                    .material_id
                    .and_then(|id| materials.get(id).cloned())
                    .unwrap_or_else(Material::null);
                let mesh = convert_mesh(&model, self.config.generate_normals);
                debug!(
                    object = %model.name,
                    vertices = mesh.vertex_count(),
                    triangles = mesh.triangle_count(),
                    material = %material.identifier,
                    "imported object"
                );
                SceneObject {
                    name: model.name,
                    mesh,
                    material,
                }
            })
            .collect();

        info!(path = %path.display(), objects = objects.len(), "parsed obj file");
        Ok(objects)
    }
}

fn convert_mesh(model: &tobj::Model, generate_normals: bool) -> Mesh {
    let source = &model.mesh;
    let positions: Vec<Vec3> = source
        .positions
        .chunks_exact(3)
        .map(|v| Vec3::new(v[0], v[1], v[2]))
        .collect();
    let (triangles, skipped) = triangles(source);
    if skipped > 0 {
        warn!(
            object = %model.name,
            skipped,
            "skipped non-triangular faces, enable triangulation to keep them"
        );
    }
    let uvs = if source.texcoords.is_empty() {
        vec![Vec2::ZERO; positions.len()]
    } else {
        source
            .texcoords
            .chunks_exact(2)
            .map(|t| Vec2::new(t[0], t[1]))
            .collect()
    };
    let normals = if source.normals.is_empty() {
        Vec::new()
    } else {
        source
            .normals
            .chunks_exact(3)
            .map(|n| Vec3::new(n[0], n[1], n[2]))
            .collect()
    };

    let mut mesh = Mesh {
        positions,
        normals,
        uvs,
        triangles,
    };
    if mesh.normals.is_empty() {
        if generate_normals {
            mesh.generate_normals();
        } else {
            mesh.normals = vec![Vec3::ZERO; mesh.positions.len()];
        }
    }
    mesh
}

/// Triangle faces of `source`, and the number of faces that were not
/// triangles. An empty `face_arities` means every face is a triangle.
fn triangles(source: &tobj::Mesh) -> (Vec<UVec3>, usize) {
    if source.face_arities.is_empty() {
        let triangles = source
            .indices
            .chunks_exact(3)
            .map(|t| UVec3::new(t[0], t[1], t[2]))
            .collect();
        return (triangles, 0);
    }

    let mut triangles = Vec::new();
    let mut skipped = 0;
    let mut start = 0;
    for &arity in &source.face_arities {
        let end = start + arity as usize;
        match source.indices.get(start..end) {
            Some(&[a, b, c]) => triangles.push(UVec3::new(a, b, c)),
            _ => skipped += 1,
        }
        start = end;
    }
    (triangles, skipped)
}

fn convert_material(source: &tobj::Material, directory: &Path) -> Material {
    let mut textures = MaterialTextures::default();
    let mut diffuse = Vec3::ONE;

    match source
        .diffuse_texture
        .as_deref()
        .and_then(|t| resolve_texture_path(t, directory))
    {
        Some(texture) => textures.diffuse = Some(texture),
        None => {
            if let Some(kd) = source.diffuse {
                diffuse = Vec3::from_array(kd);
            }
        }
    }
    textures.normal = source
        .normal_texture
        .as_deref()
        .and_then(|t| resolve_texture_path(t, directory));
    textures.specular = source
        .specular_texture
        .as_deref()
        .and_then(|t| resolve_texture_path(t, directory));

    Material {
        identifier: source.name.clone(),
        diffuse,
        specular: source.specular.map_or(Vec3::ZERO, Vec3::from_array),
        roughness: Material::roughness_from_shininess(source.shininess.unwrap_or(0.0)),
        textures,
    }
}

/// Find a texture referenced by a material library.
///
/// Tries the path as written, then with `\` separators turned into `/`, then
/// both again relative to the scene directory.
fn resolve_texture_path(raw: &str, directory: &Path) -> Option<PathBuf> {
    let unixed = raw.replace('\\', "/");
    let candidates = [
        PathBuf::from(raw),
        PathBuf::from(&unixed),
        directory.join(raw),
        directory.join(&unixed),
    ];
    let resolved = candidates
        .iter()
        .find(|candidate| candidate.is_file())
        .map(|found| found.canonicalize().unwrap_or_else(|_| found.clone()));
    if resolved.is_none() {
        warn!(texture = raw, directory = %directory.display(), "texture not found");
    }
    resolved
}
