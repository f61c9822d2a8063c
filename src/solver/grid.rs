//! The 9x9 digit grid returned by the solving service.

pub const GRID_SIZE: usize = 9;

/// A row-major 9x9 grid of digits.
///
/// Only the shape is validated; cell values are kept exactly as the service
/// sent them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grid([[u8; GRID_SIZE]; GRID_SIZE]);

impl Grid {
    /// Builds a grid from nested rows, refusing anything that is not 9x9.
    pub fn from_rows(rows: Vec<Vec<u8>>) -> Option<Grid> {
        if rows.len() != GRID_SIZE {
            return None;
        }

        let mut cells = [[0u8; GRID_SIZE]; GRID_SIZE];
        for (row, values) in rows.into_iter().enumerate() {
            if values.len() != GRID_SIZE {
                return None;
            }
            cells[row].copy_from_slice(&values);
        }

        Some(Grid(cells))
    }

    pub fn rows(&self) -> impl Iterator<Item = &[u8; GRID_SIZE]> {
        self.0.iter()
    }

    pub fn cell(&self, row: usize, col: usize) -> u8 {
        self.0[row][col]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square(value: u8) -> Vec<Vec<u8>> {
        vec![vec![value; GRID_SIZE]; GRID_SIZE]
    }

    #[test]
    fn accepts_a_9x9_grid() {
        let grid = Grid::from_rows(square(5)).expect("9x9 should parse");
        assert_eq!(grid.cell(0, 0), 5);
        assert_eq!(grid.cell(8, 8), 5);
        assert_eq!(grid.rows().count(), GRID_SIZE);
    }

    #[test]
    fn preserves_row_major_order() {
        let mut rows = square(0);
        rows[2][7] = 9;
        rows[8][0] = 1;

        let grid = Grid::from_rows(rows).unwrap();
        assert_eq!(grid.cell(2, 7), 9);
        assert_eq!(grid.cell(8, 0), 1);
        assert_eq!(grid.cell(7, 2), 0);
    }

    #[test]
    fn rejects_wrong_shapes() {
        assert!(Grid::from_rows(vec![]).is_none());
        assert!(Grid::from_rows(square(1)[..8].to_vec()).is_none());

        let mut short_row = square(1);
        short_row[4].pop();
        assert!(Grid::from_rows(short_row).is_none());

        let mut long_row = square(1);
        long_row[0].push(3);
        assert!(Grid::from_rows(long_row).is_none());
    }

    #[test]
    fn cell_values_are_kept_verbatim() {
        // the presenter trusts the payload, even out-of-range digits
        let mut rows = square(0);
        rows[0][0] = 42;
        let grid = Grid::from_rows(rows).unwrap();
        assert_eq!(grid.cell(0, 0), 42);
    }
}
