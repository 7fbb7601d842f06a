use log::debug;

use super::{block::BlockSize, buffer::PixelBuffer};
use crate::ascii::grid::BlockGrid;
use crate::color::ColorSample;

/// Average every whole `block` of `buffer` into one cell of a new grid.
///
/// Each cell is the unweighted per-channel mean over exactly
/// `block.width * block.height` pixels. Pixels in a trailing partial
/// row or column of blocks are ignored.
pub fn compute_grid(buffer: &PixelBuffer, block: BlockSize) -> BlockGrid {
    let (columns, rows) = block.grid_dimensions(buffer.width(), buffer.height());
    let block_area = f64::from(block.width) * f64::from(block.height);

    let mut cells = Vec::with_capacity(columns as usize * rows as usize);
    for gy in 0..rows {
        let top = gy * block.height;
        for gx in 0..columns {
            let left = gx * block.width;

            let mut sums = [0u64; 4];
            for y in top..top + block.height {
                for x in left..left + block.width {
                    for (sum, channel) in sums.iter_mut().zip(buffer.pixel(x, y)) {
                        *sum += u64::from(channel);
                    }
                }
            }

            let mean = |sum: u64| sum as f64 / block_area;
            let [red, green, blue, alpha] = sums.map(mean);
            cells.push(ColorSample::new(red, green, blue, alpha));
        }
    }

    debug!(
        "averaged {}x{} image into {}x{} grid of {}x{} blocks",
        buffer.width(),
        buffer.height(),
        columns,
        rows,
        block.width,
        block.height
    );

    BlockGrid::new(columns, rows, buffer.width(), buffer.height(), cells)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn buffer_from_fn(width: u32, height: u32, f: impl Fn(u32, u32) -> [u8; 4]) -> PixelBuffer {
        let mut data = Vec::with_capacity((width * height * 4) as usize);
        for y in 0..height {
            for x in 0..width {
                data.extend_from_slice(&f(x, y));
            }
        }
        PixelBuffer::from_raw(width, height, data).unwrap()
    }

    #[test]
    fn uniform_buffer_averages_exactly() {
        let buffer = buffer_from_fn(4, 4, |_, _| [128, 128, 128, 255]);
        let grid = compute_grid(&buffer, BlockSize::new(2, 2));

        assert_eq!((grid.width(), grid.height()), (2, 2));
        for cell in grid.cells() {
            assert_eq!(*cell, ColorSample::new(128.0, 128.0, 128.0, 255.0));
        }
    }

    #[test]
    fn dimensions_floor_source_over_block() {
        for (width, height, bw, bh) in [(7, 5, 2, 2), (10, 3, 3, 1), (1, 1, 2, 2), (9, 9, 9, 9)] {
            let buffer = buffer_from_fn(width, height, |_, _| [0, 0, 0, 0]);
            let grid = compute_grid(&buffer, BlockSize::new(bw, bh));
            assert_eq!((grid.width(), grid.height()), (width / bw, height / bh));
            assert_eq!(grid.cells().len(), ((width / bw) * (height / bh)) as usize);
        }
    }

    #[test]
    fn means_are_not_rounded() {
        // Block of [0, 1, 1, 1] in red gives 0.75.
        let buffer = buffer_from_fn(2, 2, |x, y| [u8::from(x + y > 0), 0, 10 * x as u8, 255]);
        let grid = compute_grid(&buffer, BlockSize::new(2, 2));
        let cell = grid.get(0, 0).unwrap();
        assert_eq!(cell.red, 0.75);
        assert_eq!(cell.blue, 5.0);
        assert_eq!(cell.alpha, 255.0);
    }

    #[test]
    fn cells_only_see_their_own_block() {
        let base = |_: u32, _: u32| [50, 60, 70, 80];
        let block = BlockSize::new(2, 3);
        let reference = compute_grid(&buffer_from_fn(6, 6, base), block);

        // Change one pixel inside cell (1, 1) and one in the trailing column/row.
        let changed = buffer_from_fn(7, 7, |x, y| match (x, y) {
            (3, 4) => [255, 255, 255, 255],
            (6, _) | (_, 6) => [255, 0, 0, 0],
            _ => base(x, y),
        });
        let grid = compute_grid(&changed, block);

        assert_eq!((grid.width(), grid.height()), (3, 2));
        for row in 0..2 {
            for column in 0..3 {
                let expected = reference.get(column, row).unwrap();
                let actual = grid.get(column, row).unwrap();
                if (column, row) == (1, 1) {
                    assert_ne!(actual, expected);
                } else {
                    assert_eq!(actual, expected);
                }
            }
        }
    }

    #[test]
    fn large_block_mean_keeps_full_precision() {
        // 29 pixels of 24 and 3 of 23 sum to 765 over an 8x4 block.
        let buffer = buffer_from_fn(8, 4, |x, y| {
            let v = if y == 3 && x >= 5 { 23 } else { 24 };
            [v, v, v, 255]
        });
        let cell = *compute_grid(&buffer, BlockSize::new(8, 4)).get(0, 0).unwrap();
        assert_eq!(cell, ColorSample::new(23.90625, 23.90625, 23.90625, 255.0));

        let params = crate::RenderParams {
            block_width: 8,
            block_height: 4,
            mode: crate::DisplayMode::Monochrome,
            ..Default::default()
        };
        let grid = compute_grid(&buffer, params.block());
        let glyph = crate::render(&grid, &params)[1].as_glyph().unwrap().ch;
        assert_eq!(glyph, 'N');
    }

    #[test]
    fn block_layout_is_row_major() {
        let buffer = buffer_from_fn(4, 2, |x, y| [(x * 10) as u8, (y * 10) as u8, 0, 255]);
        let grid = compute_grid(&buffer, BlockSize::new(1, 1));
        assert_eq!(grid.get(3, 0).unwrap().red, 30.0);
        assert_eq!(grid.get(0, 1).unwrap().green, 10.0);
        assert_eq!(grid.cells()[4].green, 10.0);
    }

    #[test]
    fn degenerate_block_yields_empty_grid() {
        let buffer = buffer_from_fn(4, 4, |_, _| [1, 2, 3, 4]);
        let grid = compute_grid(&buffer, BlockSize::new(0, 2));
        assert!(grid.is_empty());
        assert_eq!((grid.source_width(), grid.source_height()), (4, 4));
    }

    #[test]
    fn block_larger_than_image_yields_empty_grid() {
        let buffer = buffer_from_fn(3, 3, |_, _| [1, 2, 3, 4]);
        assert!(compute_grid(&buffer, BlockSize::new(4, 1)).is_empty());
    }
}
