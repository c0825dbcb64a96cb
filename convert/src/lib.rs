// convert holds the SHMD parsing, coordinate remap and heightmap math
pub mod error;
pub mod heightmap;
pub mod mapping;
pub mod shmd;
pub mod terrain;
pub mod transform;

pub use error::{ConvertError, Result};
pub use heightmap::{HeightGrid, decode_raw32};
pub use mapping::MappingTable;
pub use shmd::{Extraction, PlacementRecord, ResolvedPrefab, extract, parse_record};
pub use terrain::{NormalizedHeightResult, compose};
pub use transform::flip_rotation;

// Every known map uses the same block width of 50 world units
pub const DEFAULT_BLOCK_SIZE: f32 = 50.0;
