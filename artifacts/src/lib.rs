// artifacts holds the file I/O around the conversion routines

pub mod models;

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use convert::{MappingTable, ResolvedPrefab};

use crate::models::PrefabDoc;

// Load an SHMD file as lines for the block scanner
pub fn read_scene_lines(path: &Path) -> Result<Vec<String>> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("reading scene map {}", path.display()))?;
    Ok(text.lines().map(str::to_string).collect())
}

// Load the `source;target` prefab mapping table (later duplicates win)
pub fn load_mapping(path: &Path) -> Result<MappingTable> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("reading mapping table {}", path.display()))?;
    MappingTable::parse_lines(text.lines())
        .with_context(|| format!("parsing mapping table {}", path.display()))
}

// Read a raw heightmap file whole; decoding happens in memory
pub fn read_heightmap(path: &Path) -> Result<Vec<u8>> {
    fs::read(path).with_context(|| format!("reading heightmap {}", path.display()))
}

// Write the resolved prefab list as indented JSON
pub fn write_resolved(path: &Path, prefabs: &[ResolvedPrefab]) -> Result<()> {
    let docs: Vec<PrefabDoc> = prefabs.iter().map(PrefabDoc::from).collect();
    let json = serde_json::to_string_pretty(&docs)
        .with_context(|| format!("serializing prefab list {}", path.display()))?;
    fs::write(path, json).with_context(|| format!("writing prefab list {}", path.display()))
}

// Write the unresolved source paths one per line, for mapping upkeep
pub fn write_unresolved(path: &Path, paths: &[String]) -> Result<()> {
    fs::write(path, paths.join("\n"))
        .with_context(|| format!("writing missing prefab list {}", path.display()))
}
