use crate::color::ColorSample;

/// Downsampled image: one averaged sample per source block, row-major.
#[derive(Clone, Debug, PartialEq)]
pub struct BlockGrid {
    width: u32,
    height: u32,
    source_width: u32,
    source_height: u32,
    cells: Vec<ColorSample>,
}

impl BlockGrid {
    pub fn new(
        width: u32,
        height: u32,
        source_width: u32,
        source_height: u32,
        cells: Vec<ColorSample>,
    ) -> Self {
        assert_eq!(width as usize * height as usize, cells.len());
        Self { width, height, source_width, source_height, cells }
    }

    /// Number of cell columns.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Number of cell rows.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Width of the image the grid was averaged from, trailing pixels included.
    pub fn source_width(&self) -> u32 {
        self.source_width
    }

    pub fn source_height(&self) -> u32 {
        self.source_height
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn get(&self, column: u32, row: u32) -> Option<&ColorSample> {
        if column >= self.width || row >= self.height {
            return None;
        }
        self.cells.get(row as usize * self.width as usize + column as usize)
    }

    pub fn cells(&self) -> &[ColorSample] {
        &self.cells
    }

    pub fn rows(&self) -> impl Iterator<Item = &[ColorSample]> + '_ {
        // `chunks` rejects a zero chunk size; a zero-width grid has no cells anyway.
        self.cells.chunks(self.width.max(1) as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(value: f64) -> ColorSample {
        ColorSample::new(value, value, value, 255.0)
    }

    #[test]
    fn get_indexes_column_then_row() {
        let grid = BlockGrid::new(3, 2, 6, 4, (0..6).map(|v| sample(f64::from(v))).collect());
        assert_eq!(grid.get(2, 0).unwrap().red, 2.0);
        assert_eq!(grid.get(0, 1).unwrap().red, 3.0);
        assert_eq!(grid.get(3, 0), None);
        assert_eq!(grid.get(0, 2), None);
    }

    #[test]
    fn rows_split_by_width() {
        let grid = BlockGrid::new(2, 3, 2, 3, (0..6).map(|v| sample(f64::from(v))).collect());
        let rows: Vec<_> = grid.rows().map(|row| row.len()).collect();
        assert_eq!(rows, vec![2, 2, 2]);
        assert_eq!(BlockGrid::new(0, 5, 0, 5, Vec::new()).rows().count(), 0);
    }

    #[test]
    #[should_panic]
    fn rejects_mismatched_cell_count() {
        BlockGrid::new(2, 2, 2, 2, vec![sample(0.0)]);
    }
}
