use thiserror::Error;

pub type Result<T> = std::result::Result<T, ConvertError>;

// Conversion failures. Missing mapping entries are deliberately not here:
// they are collected and returned as data, because an incomplete mapping
// table is an authoring gap the user fixes by adding rows, not a broken file.
#[derive(Error, Debug)]
pub enum ConvertError {
    // Malformed SHMD header/record or mapping row, with its 1-based line
    #[error("line {line}: {reason}")]
    Format { line: usize, reason: String },

    // Heightmap file shorter than header + width*height*4
    #[error("heightmap too short: expected at least {expected} bytes, got {actual}")]
    TruncatedInput { expected: usize, actual: usize },

    // The two heightmaps to combine must be decoded at identical sizes
    #[error("heightmap sizes differ: {width_a}x{height_a} vs {width_b}x{height_b}")]
    DimensionMismatch {
        width_a: usize,
        height_a: usize,
        width_b: usize,
        height_b: usize,
    },

    // Only raised by the strict mapping loader
    #[error("line {line}: duplicate mapping for '{key}'")]
    DuplicateMapping { line: usize, key: String },
}
