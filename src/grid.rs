use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LifeError {
    #[error("Grid dimensions must be positive, got {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },

    #[error("Cell ({x}, {y}) is outside of the {width}x{height} grid")]
    OutOfRange {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    },
}

/// Offsets of the Moore neighborhood, excluding the center cell.
const NEIGHBORHOOD: [(isize, isize); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// A fixed-size, edge-bounded board of cells.
///
/// Cells are stored row-major: `y` selects the row and `x` the column. Anything beyond the edges
/// counts as dead, there is no wraparound.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    cells: Vec<bool>,

    /// Width of the board
    w: usize,

    /// Height of the board
    h: usize,
}

impl Grid {
    /// Create an all-dead grid. Both dimensions must be non-zero.
    pub fn new(w: usize, h: usize) -> Result<Self, LifeError> {
        if w == 0 || h == 0 {
            return Err(LifeError::InvalidDimensions {
                width: w,
                height: h,
            });
        }

        Ok(Self {
            cells: vec![false; w * h],
            w,
            h,
        })
    }

    pub fn width(&self) -> usize {
        self.w
    }

    pub fn height(&self) -> usize {
        self.h
    }

    /// Whether the cell at `(x, y)` is alive.
    ///
    /// # Panics
    /// If `(x, y)` is outside of the grid. Use [`Grid::get`] for a checked lookup.
    pub fn is_alive(&self, x: usize, y: usize) -> bool {
        assert!(x < self.w, "x is out of bounds");
        assert!(y < self.h, "y is out of bounds");

        self.cells[self.xy_from(x, y)]
    }

    pub fn get(&self, x: usize, y: usize) -> Result<bool, LifeError> {
        if x >= self.w || y >= self.h {
            return Err(LifeError::OutOfRange {
                x,
                y,
                width: self.w,
                height: self.h,
            });
        }

        Ok(self.cells[self.xy_from(x, y)])
    }

    /// Overwrite a single cell.
    ///
    /// # Panics
    /// If `(x, y)` is outside of the grid.
    pub fn set_cell(&mut self, x: usize, y: usize, alive: bool) {
        assert!(x < self.w, "x is out of bounds");
        assert!(y < self.h, "y is out of bounds");

        let i = self.xy_from(x, y);
        self.cells[i] = alive;
    }

    /// Number of live neighbors of `(x, y)`. Neighbors past the edges don't count.
    pub fn alive_neighbors(&self, x: usize, y: usize) -> u8 {
        let mut n = 0;

        for (dx, dy) in NEIGHBORHOOD {
            let (Some(nx), Some(ny)) = (x.checked_add_signed(dx), y.checked_add_signed(dy)) else {
                continue;
            };

            if nx < self.w && ny < self.h && self.cells[self.xy_from(nx, ny)] {
                n += 1;
            }
        }

        n
    }

    pub fn count_alive(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }

    /// Iterate over the rows of the grid, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[bool]> {
        self.cells.chunks_exact(self.w)
    }

    fn xy_from(&self, x: usize, y: usize) -> usize {
        y * self.w + x
    }
}

#[cfg(test)]
mod test {
    use super::Grid;
    use super::LifeError;

    #[test]
    fn new_rejects_empty_dimensions() {
        assert_eq!(
            Grid::new(0, 4),
            Err(LifeError::InvalidDimensions {
                width: 0,
                height: 4
            })
        );
        assert!(Grid::new(4, 0).is_err());
    }

    #[test]
    fn new_is_all_dead() {
        let grid = Grid::new(7, 3).unwrap();

        assert_eq!(grid.width(), 7);
        assert_eq!(grid.height(), 3);
        assert_eq!(grid.count_alive(), 0);
    }

    #[test]
    fn set_and_read_back() {
        let mut grid = Grid::new(4, 3).unwrap();

        grid.set_cell(3, 2, true);

        assert!(grid.is_alive(3, 2));
        assert!(!grid.is_alive(2, 2));
        assert_eq!(grid.get(3, 2), Ok(true));

        grid.set_cell(3, 2, false);
        assert!(!grid.is_alive(3, 2));
    }

    #[test]
    fn get_out_of_range() {
        let grid = Grid::new(4, 3).unwrap();

        assert_eq!(
            grid.get(4, 0),
            Err(LifeError::OutOfRange {
                x: 4,
                y: 0,
                width: 4,
                height: 3
            })
        );
        assert!(grid.get(0, 3).is_err());
    }

    #[test]
    #[should_panic(expected = "y is out of bounds")]
    fn is_alive_out_of_range_panics() {
        let grid = Grid::new(4, 3).unwrap();

        grid.is_alive(0, 3);
    }

    #[test]
    fn neighbors_are_clipped_at_edges() {
        let mut grid = Grid::new(3, 3).unwrap();

        for y in 0..3 {
            for x in 0..3 {
                grid.set_cell(x, y, true);
            }
        }

        assert_eq!(grid.alive_neighbors(1, 1), 8);
        assert_eq!(grid.alive_neighbors(0, 0), 3);
        assert_eq!(grid.alive_neighbors(2, 1), 5);
    }

    #[test]
    fn neighbors_exclude_center() {
        let mut grid = Grid::new(3, 3).unwrap();
        grid.set_cell(1, 1, true);

        assert_eq!(grid.alive_neighbors(1, 1), 0);
        assert_eq!(grid.alive_neighbors(0, 0), 1);
    }

    #[test]
    fn rows_are_row_major() {
        let mut grid = Grid::new(3, 2).unwrap();
        grid.set_cell(2, 0, true);
        grid.set_cell(0, 1, true);

        let rows: Vec<&[bool]> = grid.rows().collect();

        assert_eq!(rows, [&[false, false, true][..], &[true, false, false][..]]);
    }
}
