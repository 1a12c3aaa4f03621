//! Rasterization of filled cells into a square RGBA pixel buffer

use crate::color::Color;
use crate::spatial::cells::CellSet;
use image::{ImageBuffer, RgbaImage};

/// Pixel geometry shared by every cell of a grid
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CellGeometry {
    /// Side length of one grid cell in pixels
    pub cell_size: u32,
    /// Inset applied on every side of a cell
    pub padding: u32,
    /// Side length of the painted square, zero only for zero-width cells
    pub side: u32,
}

impl CellGeometry {
    /// Compute cell geometry for an image of `size` pixels split into `grid_size` cells
    ///
    /// Remainder pixels from the integer division stay unused along the right
    /// and bottom edges.
    pub fn new(size: u32, grid_size: usize, padding: f64) -> Self {
        let grid = u32::try_from(grid_size).unwrap_or(u32::MAX).max(1);
        let cell_size = size / grid;
        let padding = (f64::from(cell_size) * padding).floor() as u32;
        let side = cell_size.saturating_sub(padding.saturating_mul(2));

        Self {
            cell_size,
            padding,
            side,
        }
    }

    /// Top-left pixel of the painted square for a cell
    pub const fn origin(&self, column: u32, row: u32) -> (u32, u32) {
        (
            column * self.cell_size + self.padding,
            row * self.cell_size + self.padding,
        )
    }
}

/// Paint the background then each filled cell as a solid square
///
/// Cells whose padded square degenerates to zero pixels contribute nothing.
pub fn rasterize(
    size: u32,
    padding: f64,
    background: Color,
    cells: &CellSet,
    foreground: Color,
) -> RgbaImage {
    let mut img = ImageBuffer::from_pixel(size, size, background);
    let geometry = CellGeometry::new(size, cells.grid_size(), padding);

    if geometry.side == 0 {
        return img;
    }

    for (column, row) in cells.iter() {
        let (x0, y0) = geometry.origin(column as u32, row as u32);
        fill_square(&mut img, x0, y0, geometry.side, foreground);
    }

    img
}

fn fill_square(img: &mut RgbaImage, x0: u32, y0: u32, side: u32, color: Color) {
    let x_end = x0.saturating_add(side).min(img.width());
    let y_end = y0.saturating_add(side).min(img.height());

    for y in y0..y_end {
        for x in x0..x_end {
            img.put_pixel(x, y, color);
        }
    }
}
