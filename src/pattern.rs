/// A small stencil of cells, stored as rows of `0`/`1`.
///
/// Rows don't have to share a length. Overlaying clamps each row on its own, and the footprint of
/// a pattern is `height() x width()` where the width is the longest row.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pattern {
    pub name: &'static str,
    pub rows: &'static [&'static [u8]],
}

impl Pattern {
    pub const fn new(name: &'static str, rows: &'static [&'static [u8]]) -> Self {
        Self { name, rows }
    }

    /// Number of rows
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Length of the longest row
    pub fn width(&self) -> usize {
        self.rows.iter().map(|row| row.len()).max().unwrap_or(0)
    }

    /// Iterate over the live cells as `(dx, dy)` offsets from the pattern's origin.
    pub fn live_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.rows.iter().enumerate().flat_map(|(dy, row)| {
            row.iter()
                .enumerate()
                .filter(|&(_, &c)| c != 0)
                .map(move |(dx, _)| (dx, dy))
        })
    }
}

/// ```notrust
/// . . #
/// # . #
/// . # #
/// ```
pub const GLIDER: Pattern = Pattern::new("glider", &[&[0, 0, 1], &[1, 0, 1], &[0, 1, 1]]);

/// ```notrust
/// #
/// #
/// #
/// ```
pub const BAR: Pattern = Pattern::new("bar", &[&[1], &[1], &[1]]);

/// ```notrust
/// # #
/// # .
/// ```
pub const CORNER: Pattern = Pattern::new("corner", &[&[1, 1], &[1, 0]]);

/// ```notrust
/// . # .
/// # # #
/// ```
pub const TEE: Pattern = Pattern::new("tee", &[&[0, 1, 0], &[1, 1, 1]]);

/// Patterns used to seed a fresh board, in seeding order.
pub static PATTERNS: [Pattern; 4] = [GLIDER, BAR, CORNER, TEE];
