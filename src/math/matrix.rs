use rand::Rng;
use serde::{Serialize, Deserialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Matrix{
    pub rows: usize,
    pub cols: usize,
    pub data: Vec<Vec<f64>>
}

impl Matrix{
    pub fn zeros(rows: usize, cols: usize) -> Matrix {
        Matrix{
            rows,
            cols,
            data: vec![vec![0.0; cols]; rows]
        }
    }

    /// A (rows, cols) matrix with independent uniform samples in [0, 1).
    ///
    /// The generator is caller-supplied so construction can be made
    /// deterministic with a seeded `StdRng`.
    pub fn random<R: Rng>(rows: usize, cols: usize, rng: &mut R) -> Matrix {
        let mut res = Matrix::zeros(rows, cols);

        for i in 0..rows {
            for j in 0..cols {
                res.data[i][j] = rng.gen::<f64>();
            }
        }

        res
    }

    pub fn from_data(data: Vec<Vec<f64>>) -> Matrix {
        Matrix {
            rows: data.len(),
            cols: data.first().map_or(0, Vec::len),
            data
        }
    }

    /// Matrix-vector product: row *i* of the result is row *i* of `self`
    /// dotted with `v`.
    ///
    /// # Panics
    /// Panics if `v.len()` differs from the column count.
    pub fn dot(&self, v: &[f64]) -> Vec<f64> {
        if self.cols != v.len() {
            panic!("Matrix and vector are of incorrect sizes")
        }

        let mut res = vec![0.0; self.rows];

        for i in 0..self.rows {
            let mut sum = 0.0;

            for j in 0..self.cols {
                sum += self.data[i][j] * v[j];
            }

            res[i] = sum;
        }

        res
    }
}
