use crate::{Dimensions, Result};

/// Neighbor indices of every cell of a torus: bounds of the field are stitched together.
///
/// Built once per board geometry and read-only afterwards, so it can be
/// shared between threads freely.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NeighborTable {
    dims: Dimensions,
    neighbors: Vec<[usize; 8]>,
}

impl NeighborTable {
    /// Builds the table for a `width x height` torus.
    pub fn build(width: usize, height: usize) -> Result<Self> {
        Ok(Self::for_dimensions(Dimensions::new(width, height)?))
    }

    pub fn for_dimensions(dims: Dimensions) -> Self {
        let (w, h) = (dims.width(), dims.height());
        let neighbors = (0..dims.len())
            .map(|i| {
                let (r, c) = (i / w, i % w);
                // NW, N, NE, W, E, SW, S, SE
                let mut result = [0; 8];
                let mut k = 0;
                for dy in 0..3 {
                    for dx in 0..3 {
                        if dx == 1 && dy == 1 {
                            continue;
                        }
                        let nc = (c + w + dx - 1) % w;
                        let nr = (r + h + dy - 1) % h;
                        result[k] = nr * w + nc;
                        k += 1;
                    }
                }
                result
            })
            .collect();
        tracing::debug!(width = w, height = h, "built neighbor table");
        Self { dims, neighbors }
    }

    pub fn dimensions(&self) -> Dimensions {
        self.dims
    }

    /// The 8 toroidal neighbors of the cell at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not less than the number of cells.
    pub fn neighbors(&self, index: usize) -> &[usize; 8] {
        &self.neighbors[index]
    }

    pub fn len(&self) -> usize {
        self.neighbors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.neighbors.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    #[test]
    fn test_wrap_on_both_axes() {
        let table = NeighborTable::build(5, 5).unwrap();
        let dims = table.dimensions();
        let corner = dims.to_index(1, 1).unwrap();
        let neibs = table.neighbors(corner);
        for (x, y) in [(5, 5), (5, 1), (1, 5), (2, 1), (1, 2), (2, 2), (5, 2), (2, 5)] {
            assert!(
                neibs.contains(&dims.to_index(x, y).unwrap()),
                "({}, {}) missing from {:?}",
                x,
                y,
                neibs
            );
        }
    }

    #[test]
    fn test_neighbor_order() {
        let table = NeighborTable::build(3, 3).unwrap();
        // 3x3 board laid out as 0..9, the centre sees everything else in reading order
        assert_eq!(table.neighbors(4), &[0, 1, 2, 3, 5, 6, 7, 8]);
        assert_eq!(table.neighbors(0), &[8, 6, 7, 2, 1, 5, 3, 4]);
    }

    #[test]
    fn test_never_contains_self() {
        for (w, h) in [(2, 2), (2, 7), (3, 3), (5, 4), (16, 9)] {
            let table = NeighborTable::build(w, h).unwrap();
            assert_eq!(table.len(), w * h);
            for i in 0..table.len() {
                assert!(!table.neighbors(i).contains(&i), "{}x{} cell {}", w, h, i);
            }
        }
    }

    #[test]
    fn test_single_column_wraps_onto_itself() {
        let table = NeighborTable::build(1, 5).unwrap();
        assert_eq!(table.neighbors(2), &[1, 1, 1, 2, 2, 3, 3, 3]);
        let table = NeighborTable::build(5, 1).unwrap();
        assert_eq!(table.neighbors(2), &[1, 2, 3, 1, 3, 1, 2, 3]);
    }

    #[test]
    fn test_distinct_neighbors_on_large_boards() {
        let table = NeighborTable::build(4, 3).unwrap();
        for i in 0..table.len() {
            let mut neibs = table.neighbors(i).to_vec();
            neibs.sort_unstable();
            neibs.dedup();
            assert_eq!(neibs.len(), 8);
        }
    }

    #[test]
    fn test_invalid_dimensions() {
        assert_eq!(
            NeighborTable::build(0, 4),
            Err(Error::InvalidDimension {
                width: 0,
                height: 4
            })
        );
    }
}
