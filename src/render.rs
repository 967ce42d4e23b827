use crate::grid::Grid;

/// Hex values of braille dots
///
/// ```notrust
///  1   8
///  2  10
///  4  20
/// 40  80
/// ```
///
/// Where the base blank pattern is codepoint `0x2800` (or U+2800)
///
/// To get other configurations, just add the numbers above.
const BRAILLE_EMPTY: u32 = 0x2800;

/// How cells are turned into characters.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Style {
    /// One character per cell
    Glyphs { alive: char, dead: char },

    /// One braille character per 2x4 block of cells
    Braille,
}

impl Default for Style {
    fn default() -> Self {
        Style::Glyphs {
            alive: '.',
            dead: ' ',
        }
    }
}

/// Turns a [`Grid`] into text, one line per row of characters.
///
/// The framebuffer is reused between frames, so rendering a board of the same size doesn't
/// allocate.
pub struct Frame {
    style: Style,

    /// The frame buffer.
    fb: String,

    /// Codepoints. This allows us to construct the braille framebuffer more easily
    cp: Vec<u32>,
}

impl Frame {
    pub fn new(style: Style) -> Self {
        Self {
            style,
            fb: String::new(),
            cp: Vec::new(),
        }
    }

    /// Render `grid` and return the framebuffer. Lines are separated by `\n`, without a trailing
    /// newline.
    pub fn render(&mut self, grid: &Grid) -> &str {
        self.fb.clear();

        match self.style {
            Style::Glyphs { alive, dead } => self.render_glyphs(grid, alive, dead),
            Style::Braille => self.render_braille(grid),
        }

        &self.fb
    }

    fn render_glyphs(&mut self, grid: &Grid, alive: char, dead: char) {
        for (y, row) in grid.rows().enumerate() {
            if y > 0 {
                self.fb.push('\n');
            }

            for &cell in row {
                self.fb.push(if cell { alive } else { dead });
            }
        }
    }

    fn render_braille(&mut self, grid: &Grid) {
        // Let `w` and `h` refer to width and height of the grid. Then `bw = ceil(w / 2)` and
        // `bh = ceil(h / 4)` are the width and height of braille characters of our framebuffer.
        let (bw, bh) = (grid.width().div_ceil(2), grid.height().div_ceil(4));

        self.cp.clear();
        self.cp.resize(bw * bh, BRAILLE_EMPTY);

        for (y, row) in grid.rows().enumerate() {
            for (x, &cell) in row.iter().enumerate() {
                if cell {
                    self.cp[(y / 4) * bw + (x / 2)] += Self::get_hex_value(x, y);
                }
            }
        }

        for (i, &c) in self.cp.iter().enumerate() {
            if i > 0 && i % bw == 0 {
                self.fb.push('\n');
            }

            // Every sum of dots stays within U+2800..=U+28FF
            self.fb.push(char::from_u32(c).unwrap_or(' '));
        }
    }

    fn get_hex_value(x: usize, y: usize) -> u32 {
        match (x % 2, y % 4) {
            (0, 0) => 0x1,
            (1, 0) => 0x8,
            (0, 1) => 0x2,
            (1, 1) => 0x10,
            (0, 2) => 0x4,
            (1, 2) => 0x20,
            (0, 3) => 0x40,
            (1, 3) => 0x80,
            _ => unreachable!(),
        }
    }
}
