use crate::{Board, Error, NeighborTable, Result};
use rayon::prelude::*;

/// B3/S23: an alive cell survives with 2 or 3 neighbors, a dead one is born with 3.
pub fn next_state(alive: bool, neighbors: usize) -> bool {
    if alive {
        neighbors == 2 || neighbors == 3
    } else {
        neighbors == 3
    }
}

fn count_neibs(board: &Board, table: &NeighborTable, index: usize) -> usize {
    table
        .neighbors(index)
        .iter()
        .filter(|&&j| board.get(j))
        .count()
}

fn check_dimensions(board: &Board, table: &NeighborTable) -> Result<()> {
    let (b, t) = (board.dimensions(), table.dimensions());
    if b != t {
        return Err(Error::TableMismatch {
            board: (b.width(), b.height()),
            table: (t.width(), t.height()),
        });
    }
    Ok(())
}

/// Computes the next generation on a single thread.
///
/// Every count is taken from `board`, the result goes into a fresh vector.
pub fn step(board: &Board, table: &NeighborTable) -> Result<Board> {
    check_dimensions(board, table)?;
    Ok(advance(board, table))
}

/// Same as [`step`], but cells are computed on the rayon thread pool.
pub fn step_par(board: &Board, table: &NeighborTable) -> Result<Board> {
    check_dimensions(board, table)?;
    Ok(advance_par(board, table))
}

/// `table` must be built for the dimensions of `board`.
pub(crate) fn advance(board: &Board, table: &NeighborTable) -> Board {
    let cells = (0..board.cells().len())
        .map(|i| next_state(board.get(i), count_neibs(board, table, i)))
        .collect();
    Board::from_parts(board.dimensions(), cells)
}

/// `table` must be built for the dimensions of `board`.
pub(crate) fn advance_par(board: &Board, table: &NeighborTable) -> Board {
    let cells = (0..board.cells().len())
        .into_par_iter()
        .map(|i| next_state(board.get(i), count_neibs(board, table, i)))
        .collect();
    Board::from_parts(board.dimensions(), cells)
}
