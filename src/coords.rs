use crate::{Error, Result};

/// Side lengths of a board. Both are positive and their product fits in `usize`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Dimensions {
    width: usize,
    height: usize,
}

impl Dimensions {
    pub fn new(width: usize, height: usize) -> Result<Self> {
        if width == 0 || height == 0 || width.checked_mul(height).is_none() {
            return Err(Error::InvalidDimension { width, height });
        }
        Ok(Self { width, height })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Total number of cells.
    pub fn len(&self) -> usize {
        self.width * self.height
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    /// Converts 1-based `(x, y)` into a row-major linear index:
    /// `(y - 1) * width + (x - 1)`.
    pub fn to_index(&self, x: usize, y: usize) -> Result<usize> {
        if !(1..=self.width).contains(&x) || !(1..=self.height).contains(&y) {
            return Err(Error::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        Ok((y - 1) * self.width + (x - 1))
    }

    /// Inverse of [`Dimensions::to_index`], returns 1-based `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not less than [`Dimensions::len`].
    pub fn from_index(&self, index: usize) -> (usize, usize) {
        assert!(
            index < self.len(),
            "index {} out of range for {}x{} board",
            index,
            self.width,
            self.height
        );
        (index % self.width + 1, index / self.width + 1)
    }
}
