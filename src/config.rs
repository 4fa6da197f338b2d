use std::sync::atomic::{AtomicUsize, Ordering};

static PARALLEL_MIN_CELLS: AtomicUsize = AtomicUsize::new(Config::DEFAULT_PARALLEL_MIN_CELLS);

/// Process-wide defaults and tunables.
pub struct Config;

impl Config {
    pub const DEFAULT_WIDTH: usize = 9;
    pub const DEFAULT_HEIGHT: usize = 9;
    /// Fraction of cells alive in a random board.
    pub const DEFAULT_DENSITY: f64 = 0.25;
    /// A shape may be stamped no closer than this to the right and bottom edges.
    pub const SHAPE_MARGIN: usize = 6;
    pub const FRAME_DELAY_MS: u64 = 1000;
    pub const DEFAULT_PARALLEL_MIN_CELLS: usize = 1 << 16;

    /// Boards with at least this many cells are stepped on the rayon pool.
    pub fn parallel_min_cells() -> usize {
        PARALLEL_MIN_CELLS.load(Ordering::Relaxed)
    }

    pub fn set_parallel_min_cells(cells: usize) {
        PARALLEL_MIN_CELLS.store(cells, Ordering::Relaxed);
    }
}
