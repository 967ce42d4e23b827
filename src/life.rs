use rand::Rng;
use tracing::debug;
use tracing::info;
use tracing::trace;

use crate::grid::Grid;
use crate::grid::LifeError;
use crate::pattern::Pattern;
use crate::pattern::PATTERNS;
use crate::rule_set::RuleSet;

/// Why a simulation should keep going, or stop.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Status {
    Running,

    /// Every cell is dead
    Extinct,

    /// The last tick changed nothing. Oscillators with a period of 2 or more are not caught here.
    Stalled,
}

/// Outcome of [`Life::seed_library`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SeedReport {
    pub placed: usize,
    pub failed: usize,
}

/// The automaton.
///
/// The board is double buffered. `grid` holds the current generation and `prev` the one before
/// it. A tick swaps them and then rewrites `grid` reading only from `prev`, so every cell of a
/// generation is computed from the same state.
pub struct Life {
    grid: Grid,
    prev: Grid,
    rules: RuleSet,

    /// Number of live cells in `grid`
    alive: usize,

    /// Number of ticks so far
    generation: u64,
}

impl Life {
    /// Create an all-dead board using Conway's rules.
    pub fn new(width: usize, height: usize) -> Result<Self, LifeError> {
        Self::with_rules(width, height, RuleSet::default())
    }

    /// Create an all-dead board with custom rules.
    ///
    /// Guarantees such as "a dead board stays dead" or "a block is still" only hold for
    /// [`B3S23`](crate::rule_set::B3S23). A rule like `b0/s` births every isolated cell.
    pub fn with_rules(width: usize, height: usize, rules: RuleSet) -> Result<Self, LifeError> {
        let grid = Grid::new(width, height)?;
        let prev = grid.clone();

        Ok(Self {
            grid,
            prev,
            rules,
            alive: 0,
            generation: 0,
        })
    }

    pub fn width(&self) -> usize {
        self.grid.width()
    }

    pub fn height(&self) -> usize {
        self.grid.height()
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn is_alive(&self, x: usize, y: usize) -> bool {
        self.grid.is_alive(x, y)
    }

    /// Overwrite a single cell of the current generation.
    pub fn set_cell(&mut self, x: usize, y: usize, alive: bool) {
        self.grid.set_cell(x, y, alive);
        self.alive = self.grid.count_alive();
    }

    /// Number of live cells as of the last change to the board
    pub fn alive(&self) -> usize {
        self.alive
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Advance the board by one generation. Returns how many cells changed state.
    pub fn tick(&mut self) -> usize {
        std::mem::swap(&mut self.grid, &mut self.prev);
        self.alive = 0;

        let mut updated = 0;

        for y in 0..self.prev.height() {
            for x in 0..self.prev.width() {
                let current = self.prev.is_alive(x, y);
                let neighbors = self.prev.alive_neighbors(x, y);
                let next = self.rules.next_state(current, neighbors);

                if next != current {
                    updated += 1;
                }

                self.grid.set_cell(x, y, next);

                if next {
                    self.alive += 1;
                }
            }
        }

        self.generation += 1;
        trace!(generation = self.generation, updated, alive = self.alive, "tick");

        updated
    }

    pub fn is_anybody_alive(&self) -> bool {
        self.alive > 0
    }

    /// Whether the last tick left the board exactly as it was. Before the first tick, the
    /// previous generation is the empty board.
    pub fn is_previous_generation_identical(&self) -> bool {
        self.prev == self.grid
    }

    pub fn status(&self) -> Status {
        if !self.is_anybody_alive() {
            Status::Extinct
        } else if self.is_previous_generation_identical() {
            Status::Stalled
        } else {
            Status::Running
        }
    }

    /// Write `pattern` onto the board with its top left corner at `(x, y)`, replacing whatever was
    /// there. Rows and columns that would fall off the board are dropped.
    pub fn apply_pattern(&mut self, pattern: &Pattern, x: usize, y: usize) {
        let (w, h) = (self.width(), self.height());

        for (row, cy) in pattern.rows.iter().zip(y..h) {
            for (&c, cx) in row.iter().zip(x..w) {
                self.grid.set_cell(cx, cy, c != 0);
            }
        }

        self.alive = self.grid.count_alive();
    }

    /// Whether the whole `height() x width()` footprint of `pattern` at `(x, y)` is dead. A
    /// footprint which doesn't fit on the board is never placeable.
    pub fn can_place(&self, pattern: &Pattern, x: usize, y: usize) -> bool {
        let (pw, ph) = (pattern.width(), pattern.height());

        let fits_x = x.checked_add(pw).is_some_and(|r| r <= self.width());
        let fits_y = y.checked_add(ph).is_some_and(|b| b <= self.height());

        if !fits_x || !fits_y {
            return false;
        }

        (y..y + ph).all(|cy| (x..x + pw).all(|cx| !self.grid.is_alive(cx, cy)))
    }

    /// Try up to `max_tries` random origins for `pattern`, and apply it at the first free one.
    /// Returns whether the pattern was placed.
    pub fn seed_random<R>(&mut self, pattern: &Pattern, max_tries: usize, rng: &mut R) -> bool
    where
        R: Rng,
    {
        let (pw, ph) = (pattern.width(), pattern.height());

        // Origins are drawn from `[0, size - pattern size)`, which leaves at least one free row
        // and column past the pattern.
        if pw >= self.width() || ph >= self.height() {
            debug!(pattern = pattern.name, "no room for pattern on the board");
            return false;
        }

        for attempt in 0..max_tries {
            let x = rng.gen_range(0..self.width() - pw);
            let y = rng.gen_range(0..self.height() - ph);

            if self.can_place(pattern, x, y) {
                self.apply_pattern(pattern, x, y);
                debug!(pattern = pattern.name, x, y, attempt, "placed pattern");

                return true;
            }
        }

        debug!(pattern = pattern.name, max_tries, "no free spot found");

        false
    }

    /// Seed the board with every pattern of [`PATTERNS`], `iterations` times over.
    pub fn seed_library<R>(&mut self, iterations: usize, max_tries: usize, rng: &mut R) -> SeedReport
    where
        R: Rng,
    {
        let mut report = SeedReport::default();

        for _ in 0..iterations {
            for pattern in &PATTERNS {
                if self.seed_random(pattern, max_tries, rng) {
                    report.placed += 1;
                } else {
                    report.failed += 1;
                }
            }
        }

        info!(
            placed = report.placed,
            failed = report.failed,
            alive = self.alive,
            "seeded board"
        );

        report
    }
}
