use crate::{Error, Result};

/// A named pattern given as `(dx, dy)` offsets from its top-left corner.
#[derive(Debug, PartialEq, Eq)]
pub struct Shape {
    pub name: &'static str,
    pub cells: &'static [(usize, usize)],
}

pub const SHAPES: &[Shape] = &[
    Shape {
        name: "block",
        cells: &[(0, 0), (1, 0), (0, 1), (1, 1)],
    },
    Shape {
        name: "blinker",
        cells: &[(0, 0), (1, 0), (2, 0)],
    },
    Shape {
        name: "toad",
        cells: &[(1, 0), (2, 0), (3, 0), (0, 1), (1, 1), (2, 1)],
    },
    Shape {
        name: "beacon",
        cells: &[
            (0, 0), (1, 0), (0, 1), (1, 1),
            (2, 2), (3, 2), (2, 3), (3, 3),
        ],
    },
    Shape {
        name: "glider",
        cells: &[(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)],
    },
];

impl Shape {
    /// Looks a shape up by name, ignoring case.
    pub fn find(name: &str) -> Result<&'static Shape> {
        SHAPES
            .iter()
            .find(|s| s.name.eq_ignore_ascii_case(name.trim()))
            .ok_or_else(|| Error::UnknownShape(name.to_string()))
    }

    /// Width and height of the bounding box.
    pub fn extent(&self) -> (usize, usize) {
        let w = self.cells.iter().map(|&(dx, _)| dx + 1).max().unwrap_or(0);
        let h = self.cells.iter().map(|&(_, dy)| dy + 1).max().unwrap_or(0);
        (w, h)
    }
}
