use tracing::info;

use crate::error::ConvertError;

type Rows = Vec<Vec<i64>>;

/// Directed costs of an n node instance, `rows[i][j]` being the cost of `i -> j`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AsymmetricMatrix {
    rows: Rows,
}

/// The 2n x 2n matrix produced by [`AsymmetricMatrix::double`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymmetricMatrix {
    rows: Rows,
}

/// A mandatory tour edge, 1-based, with `0 < .0 < .1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedEdge(pub usize, pub usize);

impl AsymmetricMatrix {
    pub fn from_row_major(n: usize, weights: Vec<i64>) -> Result<Self, ConvertError> {
        if n == 0 {
            return Err(ConvertError::format("Cannot build an empty matrix"));
        }
        let cells = cell_count(n)?;
        if weights.len() != cells {
            return Err(ConvertError::format(&format!(
                "Expected {} weights for a {}x{} matrix, got {}",
                cells,
                n,
                n,
                weights.len()
            )));
        }
        let rows = weights.chunks(n).map(<[i64]>::to_vec).collect();
        Ok(Self { rows })
    }

    pub fn from_rows(rows: Rows) -> Result<Self, ConvertError> {
        let n = rows.len();
        if rows.iter().any(|row| row.len() != n) {
            return Err(ConvertError::format("Matrix rows must all have length n"));
        }
        Self::from_row_major(n, rows.into_iter().flatten().collect())
    }

    pub fn dimension(&self) -> usize {
        self.rows.len()
    }

    pub fn get(&self, i: usize, j: usize) -> i64 {
        self.rows[i][j]
    }

    pub fn rows(&self) -> &[Vec<i64>] {
        &self.rows
    }

    /// Largest weight, used as the stand-in for an infinite cost.
    pub fn max_value(&self) -> i64 {
        self.rows
            .iter()
            .flatten()
            .copied()
            .max()
            .unwrap_or_default()
    }

    /// Jonker & Volgenant doubling. Node `i` gets a shadow `n + i`; the
    /// off-diagonal blocks carry the forward costs and their transpose, the
    /// diagonal blocks are filled with [`Self::max_value`].
    pub fn double(&self) -> SymmetricMatrix {
        let n = self.dimension();
        let fill = self.max_value();
        info!("Doubling {}x{} matrix, fill value {}", n, n, fill);
        let mut rows = vec![vec![fill; 2 * n]; 2 * n];

        for i in 0..n {
            for j in 0..n {
                let (forward, backward) = if i == j {
                    (0, 0)
                } else {
                    (self.rows[i][j], self.rows[j][i])
                };
                rows[i][n + j] = forward;
                rows[n + i][j] = backward;
            }
        }

        SymmetricMatrix { rows }
    }
}

impl SymmetricMatrix {
    pub fn dimension(&self) -> usize {
        self.rows.len()
    }

    pub fn get(&self, i: usize, j: usize) -> i64 {
        self.rows[i][j]
    }

    pub fn rows(&self) -> &[Vec<i64>] {
        &self.rows
    }

    pub fn is_symmetric(&self) -> bool {
        let n = self.dimension();
        (0..n).all(|i| (i + 1..n).all(|j| self.rows[i][j] == self.rows[j][i]))
    }
}

/// Number of weights in an `n x n` matrix.
pub fn cell_count(n: usize) -> Result<usize, ConvertError> {
    n.checked_mul(n)
        .ok_or_else(|| ConvertError::format(&format!("DIMENSION {} is too large", n)))
}

/// Pairs every node `i` with its shadow `i + n`.
pub fn fixed_edges(n: usize) -> Vec<FixedEdge> {
    (1..=n).map(|i| FixedEdge(i, i + n)).collect()
}
