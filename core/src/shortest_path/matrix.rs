use crate::error::MatrixError;

/// Sentinel used by callers that encode "no edge" as a plain integer.
pub const INFINITY_SENTINEL: i64 = i32::MAX as i64;

/// Square adjacency/distance matrix. `None` means no edge (infinite distance).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DistanceMatrix {
    size: usize,
    cells: Vec<Option<i64>>,
}

impl DistanceMatrix {
    /// A graph with `size` vertices and no edges: zero on the diagonal,
    /// infinite elsewhere.
    pub fn new(size: usize) -> Self {
        let mut cells = vec![None; size * size];
        for i in 0..size {
            cells[i * size + i] = Some(0);
        }
        Self { size, cells }
    }

    pub fn from_rows(rows: Vec<Vec<Option<i64>>>) -> Result<Self, MatrixError> {
        let size = rows.len();
        let mut cells = Vec::with_capacity(size * size);

        for (row_index, row) in rows.into_iter().enumerate() {
            if row.len() != size {
                return Err(MatrixError::NotSquare {
                    row: row_index,
                    expected: size,
                    found: row.len(),
                });
            }
            cells.extend(row);
        }

        Ok(Self { size, cells })
    }

    /// Builds a matrix from rows where `infinity` marks a missing edge.
    pub fn from_sentinel_rows(rows: &[Vec<i64>], infinity: i64) -> Result<Self, MatrixError> {
        let rows = rows
            .iter()
            .map(|row| {
                row.iter()
                    .map(|&cell| if cell == infinity { None } else { Some(cell) })
                    .collect()
            })
            .collect();
        Self::from_rows(rows)
    }

    pub fn to_sentinel_rows(&self, infinity: i64) -> Vec<Vec<i64>> {
        self.rows()
            .map(|row| row.iter().map(|cell| cell.unwrap_or(infinity)).collect())
            .collect()
    }

    pub fn to_rows(&self) -> Vec<Vec<Option<i64>>> {
        self.rows().map(<[Option<i64>]>::to_vec).collect()
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn get(&self, from: usize, to: usize) -> Option<i64> {
        self.cells[self.index(from, to)]
    }

    pub fn set(&mut self, from: usize, to: usize, weight: Option<i64>) {
        let index = self.index(from, to);
        self.cells[index] = weight;
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Option<i64>]> {
        // chunks(0) panics, and an empty matrix has no rows anyway
        self.cells.chunks(self.size.max(1))
    }

    fn index(&self, from: usize, to: usize) -> usize {
        assert!(
            from < self.size && to < self.size,
            "cell ({}, {}) out of range for {}x{} matrix",
            from,
            to,
            self.size,
            self.size
        );
        from * self.size + to
    }
}
