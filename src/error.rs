use thiserror::Error;

/// All kinds of errors in this crate.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum Error {
    /// A side of the board is zero, or the cell count does not fit in `usize`.
    #[error("invalid board dimensions {width}x{height}")]
    InvalidDimension { width: usize, height: usize },
    /// A cell sequence does not match the board size.
    #[error("expected {expected} cells, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },
    /// A neighbor table was built for a different board geometry.
    #[error(
        "board is {}x{} but the neighbor table was built for {}x{}",
        .board.0, .board.1, .table.0, .table.1
    )]
    TableMismatch {
        board: (usize, usize),
        table: (usize, usize),
    },
    /// A 1-based coordinate or shape placement lies outside the grid.
    #[error("position ({x}, {y}) is outside the {width}x{height} board")]
    OutOfBounds {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    },
    /// Malformed density or other numeric parameter.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    /// The shape name is not in the catalog.
    #[error("unknown shape {0:?}")]
    UnknownShape(String),
}

pub type Result<T> = std::result::Result<T, Error>;
