//! Binary STL output for mesh assemblies.

use anyhow::{Context, Result};
use csgrs::traits::CSG;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::kernel::mesh::Solid;
use crate::services::{Assembly, Part};

fn write_solid(solid: &Solid, name: &str, path: &Path) -> Result<()> {
    let bytes = solid
        .to_stl_binary(name)
        .with_context(|| format!("Failed to encode STL for {name}"))?;
    fs::write(path, &bytes)
        .with_context(|| format!("Failed to write STL file: {}", path.display()))?;
    debug!("Wrote {} bytes to {}", bytes.len(), path.display());
    Ok(())
}

/// Writes every part of `assembly` into one STL file.
///
/// Parts are disjoint, so their polygons are concatenated rather than unioned.
/// Returns the number of parts written.
pub fn write_combined(assembly: &Assembly<Solid>, path: &Path) -> Result<usize> {
    let mut combined = Solid::new();
    for part in &assembly.parts {
        combined.polygons.extend(part.solid.polygons.iter().cloned());
    }
    write_solid(&combined, &assembly.layout_name, path)?;
    Ok(assembly.parts.len())
}

/// Writes one STL per part into `dir`, named after the part.
///
/// Returns the written paths in part order.
pub fn write_split(assembly: &Assembly<Solid>, dir: &Path) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create output directory: {}", dir.display()))?;

    assembly
        .parts
        .iter()
        .map(|part: &Part<Solid>| {
            let path = dir.join(format!("{}.stl", part.name));
            write_solid(&part.solid, &part.name, &path)?;
            Ok::<_, anyhow::Error>(path)
        })
        .collect()
}
