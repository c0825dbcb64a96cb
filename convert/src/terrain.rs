use crate::error::{ConvertError, Result};
use crate::heightmap::HeightGrid;

// Combined and normalized elevation data plus the two scalars a caller
// needs to rebuild true heights: multiplying a cell by vertical_range
// restores the original extent, and vertical_offset (block units) moves
// the surface back down to where the lowest point actually sits.
#[derive(Debug, Clone)]
pub struct NormalizedHeightResult {
    pub normalized: HeightGrid,
    pub vertical_range: f32,
    pub vertical_offset: f32,
}

// Sum the base and detail grids cell-wise and normalize to [0, 1].
// Heightmaps do not necessarily start at elevation zero, so the minimum
// is carried out as an offset instead of being thrown away.
pub fn compose(
    base: &HeightGrid,
    detail: &HeightGrid,
    block_size: f32,
) -> Result<NormalizedHeightResult> {
    if base.width != detail.width || base.height != detail.height {
        return Err(ConvertError::DimensionMismatch {
            width_a: base.width,
            height_a: base.height,
            width_b: detail.width,
            height_b: detail.height,
        });
    }

    let mut combined = vec![vec![0.0f32; base.width]; base.height];
    let mut min = f32::MAX;
    let mut max = f32::MIN;

    for y in 0..base.height {
        for x in 0..base.width {
            let value = base.cells[y][x] + detail.cells[y][x];
            combined[y][x] = value;

            if value < min {
                min = value;
            }
            if value > max {
                max = value;
            }
        }
    }

    // A perfectly flat combined grid keeps a divisor of 1 and normalizes
    // to all zeros
    let range = max - min;
    let denom = if range == 0.0 { 1.0 } else { range };

    for row in combined.iter_mut() {
        for value in row.iter_mut() {
            *value = (*value - min) / denom;
        }
    }

    Ok(NormalizedHeightResult {
        normalized: HeightGrid {
            width: base.width,
            height: base.height,
            cells: combined,
        },
        vertical_range: denom,
        vertical_offset: min / block_size,
    })
}

#[cfg(test)]
mod tests {
    use super::compose;
    use crate::heightmap::HeightGrid;

    fn grid(cells: Vec<Vec<f32>>) -> HeightGrid {
        HeightGrid {
            width: cells[0].len(),
            height: cells.len(),
            cells,
        }
    }

    fn constant(width: usize, height: usize, value: f32) -> HeightGrid {
        grid(vec![vec![value; width]; height])
    }

    #[test]
    fn flat_input_normalizes_to_zero() {
        let out = compose(&constant(3, 2, 5.0), &constant(3, 2, 5.0), 50.0).unwrap();
        assert_eq!(out.vertical_range, 1.0);
        assert_eq!(out.vertical_offset, 10.0 / 50.0);
        for row in &out.normalized.cells {
            assert!(row.iter().all(|&v| v == 0.0));
        }
    }

    #[test]
    fn known_extremes_normalize_linearly() {
        // summed cells: 2, 4, 6, 10 -> min 2, max 10
        let a = grid(vec![vec![1.0, 2.0], vec![3.0, 5.0]]);
        let b = grid(vec![vec![1.0, 2.0], vec![3.0, 5.0]]);
        let out = compose(&a, &b, 50.0).unwrap();

        assert_eq!(out.vertical_range, 8.0);
        assert_eq!(out.vertical_offset, 2.0 / 50.0);
        // each cell is (value - 2) / 8
        assert_eq!(out.normalized.cells[0][0], 0.0);
        assert_eq!(out.normalized.cells[0][1], 0.25);
        assert_eq!(out.normalized.cells[1][0], 0.5);
        assert_eq!(out.normalized.cells[1][1], 1.0);
    }

    #[test]
    fn normalized_cells_stay_in_unit_range() {
        let a = grid(vec![vec![-10.0, 3.5, 100.0], vec![0.25, -0.25, 42.0]]);
        let b = grid(vec![vec![1.0, -3.5, 2.0], vec![0.0, 0.5, -41.0]]);
        let out = compose(&a, &b, 50.0).unwrap();
        for row in &out.normalized.cells {
            for &v in row {
                assert!((0.0..=1.0).contains(&v), "cell {} out of range", v);
            }
        }
    }

    #[test]
    fn mismatched_dimensions_are_rejected() {
        let err = compose(&constant(2, 2, 0.0), &constant(3, 2, 0.0), 50.0).unwrap_err();
        assert!(err.to_string().contains("2x2 vs 3x2"));
    }
}
