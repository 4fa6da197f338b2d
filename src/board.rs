use crate::{Dimensions, Error, Result};
use std::fmt;

/// One generation of the field: a row-major array of cells, alive or dead.
///
/// A board is never edited in place; seeding and stepping always produce a
/// new one. `cells.len() == width * height` holds for every value of this type.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    dims: Dimensions,
    cells: Vec<bool>,
}

impl Board {
    /// Create a board from a flat row-major vector of cells.
    pub fn new(width: usize, height: usize, cells: Vec<bool>) -> Result<Self> {
        Self::with_dimensions(Dimensions::new(width, height)?, cells)
    }

    pub fn with_dimensions(dims: Dimensions, cells: Vec<bool>) -> Result<Self> {
        if cells.len() != dims.len() {
            return Err(Error::DimensionMismatch {
                expected: dims.len(),
                actual: cells.len(),
            });
        }
        Ok(Self { dims, cells })
    }

    /// Create a board from `0`/`1` values; anything else is rejected.
    pub fn from_bits(width: usize, height: usize, bits: &[u8]) -> Result<Self> {
        let cells = bits
            .iter()
            .map(|&b| match b {
                0 => Ok(false),
                1 => Ok(true),
                _ => Err(Error::InvalidArgument(format!(
                    "cell value must be 0 or 1, got {}",
                    b
                ))),
            })
            .collect::<Result<Vec<_>>>()?;
        Self::new(width, height, cells)
    }

    /// Every cell dead.
    pub fn blank(dims: Dimensions) -> Self {
        Self {
            dims,
            cells: vec![false; dims.len()],
        }
    }

    /// `cells.len()` must equal `dims.len()`.
    pub(crate) fn from_parts(dims: Dimensions, cells: Vec<bool>) -> Self {
        debug_assert_eq!(cells.len(), dims.len());
        Self { dims, cells }
    }

    /// Copy of this board with the given cells set alive.
    pub(crate) fn with_alive(&self, indices: impl IntoIterator<Item = usize>) -> Self {
        let mut cells = self.cells.clone();
        for i in indices {
            cells[i] = true;
        }
        Self {
            dims: self.dims,
            cells,
        }
    }

    pub fn dimensions(&self) -> Dimensions {
        self.dims
    }

    pub fn width(&self) -> usize {
        self.dims.width()
    }

    pub fn height(&self) -> usize {
        self.dims.height()
    }

    /// State of the cell at a linear index.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not less than `width * height`.
    pub fn get(&self, index: usize) -> bool {
        self.cells[index]
    }

    /// State of the cell at 1-based `(x, y)`.
    pub fn get_cell(&self, x: usize, y: usize) -> Result<bool> {
        Ok(self.cells[self.dims.to_index(x, y)?])
    }

    pub fn cells(&self) -> &[bool] {
        &self.cells
    }

    /// Number of alive cells.
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }

    /// `height` rows of `width` cells each, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[bool]> + '_ {
        self.cells.chunks_exact(self.dims.width())
    }

    /// Row-major matrix of `0`/`1` values, `height` rows by `width` columns.
    pub fn to_matrix(&self) -> Vec<Vec<u8>> {
        self.rows()
            .map(|row| row.iter().map(|&c| c as u8).collect())
            .collect()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            let line = row
                .iter()
                .map(|&c| if c { '#' } else { '.' })
                .collect::<String>();
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}
