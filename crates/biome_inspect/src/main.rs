//! # biome_inspect
//!
//! Loads a scene file into a [`BiomeRegistry`] and prints what the editor's
//! two main consumers would see: the inhabitant tree (roots first, children
//! indented) and the renderer's draw list.

mod report;

use std::path::PathBuf;

use anyhow::{Context, Result};
use biome::{BiomeRegistry, ObjLoader, ObjLoaderConfig};
use clap::{Parser, ValueEnum};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use report::SceneReport;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Json,
}

#[derive(Parser)]
#[command(name = "biome_inspect", about = "Inspect the biome built from a scene file")]
struct Args {
    /// Path to an .obj scene file
    scene: PathBuf,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    format: Format,

    /// Do not generate normals for meshes that have none
    #[arg(long)]
    no_normals: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive("biome_inspect=info".parse()?),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let loader = ObjLoader::new(ObjLoaderConfig::default().with_generate_normals(!args.no_normals));
    let mut registry = BiomeRegistry::new();
    let id = registry
        .load(&args.scene, &loader)
        .with_context(|| format!("failed to load {}", args.scene.display()))?;
    let biome = registry
        .get(id)
        .context("loaded biome missing from registry")?;
    info!(biome = %id, inhabitants = biome.inhabitant_count(), "scene loaded");
    if !biome.violations().is_empty() {
        warn!(count = biome.violations().len(), "dependency violations recorded");
    }

    let report = SceneReport::build(biome)?;
    match args.format {
        Format::Text => print!("{}", report.to_text()),
        Format::Json => println!("{}", serde_json::to_string_pretty(&report)?),
    }
    Ok(())
}
