//! Grid geometry types

use crate::image_pipeline::common::error::{ExtractionError, Result};
use crate::image_pipeline::trim::BoundingBox;

/// Column/row division of a sprite sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridSpec {
    pub columns: u32,
    pub rows: u32,
}

impl GridSpec {
    pub fn new(columns: u32, rows: u32) -> Self {
        Self { columns, rows }
    }

    /// Total number of cells.
    pub fn capacity(&self) -> usize {
        self.columns as usize * self.rows as usize
    }

    pub fn validate(&self) -> Result<()> {
        if self.columns == 0 || self.rows == 0 {
            return Err(ExtractionError::InvalidGrid(format!(
                "grid must have at least one column and one row, got {}x{}",
                self.columns, self.rows
            )));
        }
        Ok(())
    }

    /// Column and row of the cell at row-major `index`.
    pub fn position(&self, index: usize) -> (u32, u32) {
        let columns = self.columns as usize;
        ((index % columns) as u32, (index / columns) as u32)
    }

    /// Cell size for a `width` x `height` sheet.
    ///
    /// Remainder pixels on the right and bottom edges are not covered by any
    /// cell.
    pub fn cell_size(&self, width: u32, height: u32) -> Result<(u32, u32)> {
        self.validate()?;

        let cell_width = width / self.columns;
        let cell_height = height / self.rows;
        if cell_width == 0 || cell_height == 0 {
            return Err(ExtractionError::InvalidGrid(format!(
                "{}x{} sheet is too small for a {}x{} grid",
                width, height, self.columns, self.rows
            )));
        }

        Ok((cell_width, cell_height))
    }

    /// Source region of the cell at (`column`, `row`).
    pub fn cell_bounds(&self, column: u32, row: u32, cell_width: u32, cell_height: u32) -> BoundingBox {
        BoundingBox {
            left: column * cell_width,
            top: row * cell_height,
            right: (column + 1) * cell_width,
            bottom: (row + 1) * cell_height,
        }
    }
}

/// One identifier placed on the grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellDescriptor {
    pub index: usize,
    pub column: u32,
    pub row: u32,
    pub code: String,
    pub label: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positions_are_row_major() {
        let grid = GridSpec::new(6, 4);
        assert_eq!(grid.position(0), (0, 0));
        assert_eq!(grid.position(5), (5, 0));
        assert_eq!(grid.position(6), (0, 1));
        assert_eq!(grid.position(23), (5, 3));
        assert_eq!(grid.capacity(), 24);
    }

    #[test]
    fn cell_size_truncates() {
        let grid = GridSpec::new(6, 4);
        assert_eq!(grid.cell_size(1200, 800).unwrap(), (200, 200));
        assert_eq!(grid.cell_size(1205, 803).unwrap(), (200, 200));
    }

    #[test]
    fn first_and_last_cells_of_a_sheet() {
        let grid = GridSpec::new(6, 4);
        let (cw, ch) = grid.cell_size(1200, 800).unwrap();

        let first = grid.cell_bounds(0, 0, cw, ch);
        assert_eq!((first.left, first.top, first.right, first.bottom), (0, 0, 200, 200));

        let last = grid.cell_bounds(5, 3, cw, ch);
        assert_eq!((last.left, last.top, last.right, last.bottom), (1000, 600, 1200, 800));
    }

    #[test]
    fn rejects_empty_grid() {
        assert!(matches!(
            GridSpec::new(0, 4).cell_size(100, 100),
            Err(ExtractionError::InvalidGrid(_))
        ));
    }

    #[test]
    fn rejects_sheet_smaller_than_grid() {
        assert!(matches!(
            GridSpec::new(6, 4).cell_size(5, 100),
            Err(ExtractionError::InvalidGrid(_))
        ));
    }
}
