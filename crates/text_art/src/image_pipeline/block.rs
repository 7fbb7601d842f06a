/// Size in source pixels of the block that becomes one grid cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct BlockSize {
    pub width: u32,
    pub height: u32,
}

impl BlockSize {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Number of whole blocks that fit in a `source_width` x `source_height` image.
    ///
    /// Trailing pixels that do not fill a block are dropped. A zero block
    /// dimension yields zero cells along that axis.
    pub fn grid_dimensions(&self, source_width: u32, source_height: u32) -> (u32, u32) {
        let columns = source_width.checked_div(self.width).unwrap_or(0);
        let rows = source_height.checked_div(self.height).unwrap_or(0);
        (columns, rows)
    }

    pub fn is_degenerate(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Pick a block size giving roughly `columns` cells across a `source_width`
    /// image, with blocks `cell_aspect` times taller than they are wide.
    pub fn fit_columns(source_width: u32, columns: u32, cell_aspect: f32) -> Option<Self> {
        if source_width == 0 || columns == 0 || !cell_aspect.is_finite() || cell_aspect <= 0.0 {
            return None;
        }

        let width = (source_width / columns).max(1);
        let height = ((width as f32 * cell_aspect).round() as u32).max(1);
        Some(Self { width, height })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_dimensions_round_down() {
        let block = BlockSize::new(3, 4);
        assert_eq!(block.grid_dimensions(10, 10), (3, 2));
        assert_eq!(block.grid_dimensions(2, 3), (0, 0));
        assert_eq!(block.grid_dimensions(9, 8), (3, 2));
    }

    #[test]
    fn zero_block_yields_empty_grid() {
        assert_eq!(BlockSize::new(0, 4).grid_dimensions(10, 10), (0, 2));
        assert_eq!(BlockSize::new(4, 0).grid_dimensions(10, 10), (2, 0));
        assert!(BlockSize::new(0, 1).is_degenerate());
    }

    #[test]
    fn fit_columns_scales_height_by_aspect() {
        assert_eq!(BlockSize::fit_columns(640, 80, 2.0), Some(BlockSize::new(8, 16)));
        assert_eq!(BlockSize::fit_columns(10, 80, 2.0), Some(BlockSize::new(1, 2)));
        assert_eq!(BlockSize::fit_columns(640, 0, 2.0), None);
        assert_eq!(BlockSize::fit_columns(640, 80, 0.0), None);
    }
}
