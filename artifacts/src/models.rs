use convert::{PlacementRecord, ResolvedPrefab};
use serde::{Deserialize, Serialize};

// JSON contract consumed by the engine-side placement step.
// The struct order is the serialized field order; downstream tooling
// relies on it, so keep path before coordinates and x..w before scale.
#[derive(Debug, Serialize, Deserialize)]
pub struct PrefabDoc {
    pub path: String,
    pub coordinates: Vec<PlacementDoc>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct PlacementDoc {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    #[serde(rename = "quarterX")]
    pub quarter_x: f32,
    #[serde(rename = "quarterY")]
    pub quarter_y: f32,
    #[serde(rename = "quarterZ")]
    pub quarter_z: f32,
    #[serde(rename = "quarterW")]
    pub quarter_w: f32,
    pub scale: f32,
}

impl From<&ResolvedPrefab> for PrefabDoc {
    fn from(prefab: &ResolvedPrefab) -> Self {
        Self {
            path: prefab.target_path.clone(),
            coordinates: prefab.placements.iter().map(PlacementDoc::from).collect(),
        }
    }
}

impl From<&PlacementRecord> for PlacementDoc {
    fn from(record: &PlacementRecord) -> Self {
        Self {
            x: record.position.x,
            y: record.position.y,
            z: record.position.z,
            quarter_x: record.rotation.x,
            quarter_y: record.rotation.y,
            quarter_z: record.rotation.z,
            quarter_w: record.rotation.w,
            scale: record.scale,
        }
    }
}
