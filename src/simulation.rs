use crate::{
    engine::{advance, advance_par},
    Board, Config, NeighborTable, Result, Seed,
};
use std::time::Instant;

/// Owns the current generation together with the neighbor table of its geometry.
///
/// This is what a renderer drives: call [`Simulation::step`] once per frame
/// and read the board back through [`Simulation::rows`].
pub struct Simulation {
    board: Board,
    table: NeighborTable,
    generation: u64,         // Number of steps taken since seeding.
    last_step_duration: f64, // Duration of the last step in seconds.
}

impl Simulation {
    pub fn new(board: Board) -> Self {
        let table = NeighborTable::for_dimensions(board.dimensions());
        Self {
            board,
            table,
            generation: 0,
            last_step_duration: 0.,
        }
    }

    pub fn from_seed(width: usize, height: usize, seed: &Seed) -> Result<Self> {
        Ok(Self::new(seed.build(width, height)?))
    }

    /// Advances the board by one generation.
    pub fn step(&mut self) {
        let timer = Instant::now();
        self.board = if self.board.cells().len() >= Config::parallel_min_cells() {
            advance_par(&self.board, &self.table)
        } else {
            advance(&self.board, &self.table)
        };
        self.last_step_duration = timer.elapsed().as_secs_f64();
        self.generation += 1;
        tracing::trace!(
            generation = self.generation,
            seconds = self.last_step_duration,
            "stepped"
        );
    }

    /// Advances the board by `generations` generations.
    pub fn advance(&mut self, generations: u64) {
        for _ in 0..generations {
            self.step();
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn table(&self) -> &NeighborTable {
        &self.table
    }

    /// Row-major view of the current generation.
    pub fn rows(&self) -> impl Iterator<Item = &[bool]> + '_ {
        self.board.rows()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn population(&self) -> usize {
        self.board.population()
    }

    pub fn last_step_duration(&self) -> f64 {
        self.last_step_duration
    }
}
