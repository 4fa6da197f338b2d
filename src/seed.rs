use crate::{Board, Config, Dimensions, Error, Result, Shape};
use rand::{seq::SliceRandom, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Create a board with exactly `round(density * width * height)` alive cells,
/// halves rounded to even.
///
/// Positions come from shuffling the cells, so only the layout is random,
/// never the population.
///
/// `seed` - random seed (if `None`, then random seed is generated)
pub fn random_board(width: usize, height: usize, density: f64, seed: Option<u64>) -> Result<Board> {
    let dims = Dimensions::new(width, height)?;
    if !density.is_finite() || !(0.0..=1.0).contains(&density) {
        return Err(Error::InvalidArgument(format!(
            "density must be within [0, 1], got {}",
            density
        )));
    }
    let n = dims.len();
    let alive = ((density * n as f64).round_ties_even() as usize).min(n);

    let mut rng = if let Some(x) = seed {
        ChaCha8Rng::seed_from_u64(x)
    } else {
        ChaCha8Rng::from_entropy()
    };
    let mut cells = vec![false; n];
    cells[..alive].fill(true);
    cells.shuffle(&mut rng);

    tracing::debug!(width, height, alive, ?seed, "seeded random board");
    Board::with_dimensions(dims, cells)
}

/// Create a board where only the listed 1-based `(x, y)` cells are alive.
///
/// Fails on the first point outside the board.
pub fn from_coordinates(width: usize, height: usize, points: &[(usize, usize)]) -> Result<Board> {
    let dims = Dimensions::new(width, height)?;
    let indices = points
        .iter()
        .map(|&(x, y)| dims.to_index(x, y))
        .collect::<Result<Vec<_>>>()?;
    tracing::debug!(width, height, points = points.len(), "seeded board from coordinates");
    Ok(Board::blank(dims).with_alive(indices))
}

/// Copy of `board` with the shape called `name` stamped at 1-based `(offset_x, offset_y)`.
///
/// The offset must lie within `[1, width - SHAPE_MARGIN] x [1, height - SHAPE_MARGIN]`.
/// Stamping does not wrap around the edges.
pub fn stamp_shape(board: &Board, name: &str, offset_x: usize, offset_y: usize) -> Result<Board> {
    let shape = Shape::find(name)?;
    let dims = board.dimensions();
    let out_of_bounds = || Error::OutOfBounds {
        x: offset_x,
        y: offset_y,
        width: dims.width(),
        height: dims.height(),
    };
    let max_x = dims.width().checked_sub(Config::SHAPE_MARGIN);
    let max_y = dims.height().checked_sub(Config::SHAPE_MARGIN);
    match (max_x, max_y) {
        (Some(max_x), Some(max_y))
            if (1..=max_x).contains(&offset_x) && (1..=max_y).contains(&offset_y) => {}
        _ => return Err(out_of_bounds()),
    }

    let indices = shape
        .cells
        .iter()
        .map(|&(dx, dy)| dims.to_index(offset_x + dx, offset_y + dy))
        .collect::<Result<Vec<_>>>()?;
    tracing::debug!(shape = shape.name, offset_x, offset_y, "stamped shape");
    Ok(board.with_alive(indices))
}

/// How generation 0 is produced.
#[derive(Clone, Debug, PartialEq)]
pub enum Seed {
    /// See [`random_board`].
    Random { density: f64, seed: Option<u64> },
    /// See [`from_coordinates`].
    Coordinates(Vec<(usize, usize)>),
    /// A single shape stamped on an empty board, see [`stamp_shape`].
    Shape { name: String, x: usize, y: usize },
}

impl Default for Seed {
    fn default() -> Self {
        Self::Random {
            density: Config::DEFAULT_DENSITY,
            seed: None,
        }
    }
}

impl Seed {
    pub fn build(&self, width: usize, height: usize) -> Result<Board> {
        match self {
            Self::Random { density, seed } => random_board(width, height, *density, *seed),
            Self::Coordinates(points) => from_coordinates(width, height, points),
            Self::Shape { name, x, y } => {
                let blank = Board::blank(Dimensions::new(width, height)?);
                stamp_shape(&blank, name, *x, *y)
            }
        }
    }
}
