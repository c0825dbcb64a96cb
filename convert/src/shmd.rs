use std::cmp::Ordering;

use glam::{Quat, Vec3};

use crate::error::{ConvertError, Result};
use crate::mapping::MappingTable;
use crate::transform;

// Lines describing a placeable prefab start with this token; everything
// else in an SHMD file (terrain chunks, ambient entries, blanks) is inert.
const PREFAB_PREFIX: &str = "resmap";

// One placed prefab instance in engine coordinates.
// Position is in block units (world units already divided by the block
// size at parse time). The rotation comes out of two composed rotations
// and is taken as-is, without re-normalizing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlacementRecord {
    pub position: Vec3,
    pub rotation: Quat,
    pub scale: f32,
}

// All placements of one prefab, resolved to its engine asset path
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedPrefab {
    pub target_path: String,
    pub placements: Vec<PlacementRecord>,
}

// Outcome of scanning one SHMD file. Source paths without a mapping row
// end up in `unresolved`, once per occurrence, so the list doubles as a
// worklist for whoever maintains the mapping table.
#[derive(Debug, Default)]
pub struct Extraction {
    pub resolved: Vec<ResolvedPrefab>,
    pub unresolved: Vec<String>,
}

// Parse one placement line: 8 space-separated floats at fixed positions.
// Split keeps empty tokens on purpose; a doubled space shifts the fields
// and fails the numeric parse instead of silently misreading a column.
// The source is Z-up, so the third field is its vertical axis and becomes
// y here, while the second becomes z. `line_no` is 1-based, for errors.
pub fn parse_record(line: &str, line_no: usize, block_size: f32) -> Result<PlacementRecord> {
    let fields: Vec<&str> = line.split(' ').collect();
    if fields.len() < 8 {
        return Err(ConvertError::Format {
            line: line_no,
            reason: format!("expected 8 fields in placement, got {}", fields.len()),
        });
    }

    let mut values = [0.0f32; 8];
    for (value, field) in values.iter_mut().zip(&fields[..8]) {
        // str::parse always uses '.' as the decimal separator, so the
        // result does not depend on the host locale
        *value = field.parse().map_err(|_| ConvertError::Format {
            line: line_no,
            reason: format!("invalid number '{}' in placement", field),
        })?;
    }

    Ok(PlacementRecord {
        position: Vec3::new(values[0], values[2], values[1]) / block_size,
        rotation: Quat::from_xyzw(values[3], values[4], values[5], values[6]),
        scale: values[7],
    })
}

// Scan SHMD lines into prefab blocks and split them into resolved and
// unresolved lists. A header line is `<source-path> <count>` and is
// followed by exactly `count` placement lines; the cursor jumps past them
// so placement lines are never re-read as headers.
pub fn extract(lines: &[String], mapping: &MappingTable, block_size: f32) -> Result<Extraction> {
    let mut resolved = Vec::new();
    let mut unresolved = Vec::new();

    let mut i = 0;
    while i < lines.len() {
        let line = &lines[i];
        if !line.starts_with(PREFAB_PREFIX) {
            i += 1;
            continue;
        }

        // A token count other than 2 marks an irregular entry
        // (e.g. ground objects); those lines stay inert too
        let parts: Vec<&str> = line.split_whitespace().collect();
        if parts.len() != 2 {
            log::debug!("skipping irregular prefab entry at line {}", i + 1);
            i += 1;
            continue;
        }

        let source_path = parts[0];
        let count: usize = parts[1].parse().map_err(|_| ConvertError::Format {
            line: i + 1,
            reason: format!("invalid placement count '{}'", parts[1]),
        })?;

        if i + 1 + count > lines.len() {
            return Err(ConvertError::Format {
                line: i + 1,
                reason: format!(
                    "'{}' declares {} placements but only {} lines remain",
                    source_path,
                    count,
                    lines.len() - i - 1
                ),
            });
        }

        let mut placements = Vec::with_capacity(count);
        for (offset, record_line) in lines[i + 1..i + 1 + count].iter().enumerate() {
            let record = parse_record(record_line, i + 2 + offset, block_size)?;
            placements.push(transform::flip_rotation(record));
        }

        match mapping.lookup(source_path) {
            Some(target) => resolved.push(ResolvedPrefab {
                target_path: target.to_string(),
                placements,
            }),
            None => unresolved.push(source_path.to_string()),
        }

        i += count + 1;
    }

    // Alphabetical, ignoring case; Vec::sort_by is stable
    resolved.sort_by(|a, b| compare_ignore_case(&a.target_path, &b.target_path));
    unresolved.sort_by(|a, b| compare_ignore_case(a, b));

    log::debug!(
        "extracted {} resolved and {} unresolved prefab blocks",
        resolved.len(),
        unresolved.len()
    );

    Ok(Extraction {
        resolved,
        unresolved,
    })
}

fn compare_ignore_case(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}
