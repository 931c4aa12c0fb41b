//! Orthonormal 1D DCT-II basis.

use std::f64::consts::PI;

/// Precomputed cosine matrix for an `n`-point orthonormal DCT-II.
///
/// Row `k` holds `s(k) * cos(pi * (2i + 1) * k / 2n)` for every input
/// index `i`, with `s(0) = sqrt(1/n)` and `s(k) = sqrt(2/n)` otherwise.
/// The matrix is orthogonal, so the inverse (DCT-III) is its transpose.
#[derive(Debug, Clone, PartialEq)]
pub struct DctBasis {
    size: usize,
    matrix: Vec<f64>,
}

impl DctBasis {
    pub fn new(size: usize) -> Self {
        let n = size as f64;
        let mut matrix = Vec::with_capacity(size * size);

        for k in 0..size {
            let scale = if k == 0 {
                (1.0 / n).sqrt()
            } else {
                (2.0 / n).sqrt()
            };
            for i in 0..size {
                let angle = PI * (2 * i + 1) as f64 * k as f64 / (2.0 * n);
                matrix.push(scale * angle.cos());
            }
        }

        Self { size, matrix }
    }

    /// Number of points per 1D transform.
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    #[inline]
    fn at(&self, k: usize, i: usize) -> f64 {
        self.matrix[k * self.size + i]
    }

    /// Forward transform of `input` into `output` (both `size` long).
    pub fn forward(&self, input: &[f64], output: &mut [f64]) {
        for (k, out) in output.iter_mut().enumerate().take(self.size) {
            *out = input
                .iter()
                .enumerate()
                .map(|(i, &x)| self.at(k, i) * x)
                .sum();
        }
    }

    /// Inverse transform of `input` into `output` (both `size` long).
    pub fn inverse(&self, input: &[f64], output: &mut [f64]) {
        for (i, out) in output.iter_mut().enumerate().take(self.size) {
            *out = input
                .iter()
                .enumerate()
                .map(|(k, &c)| self.at(k, i) * c)
                .sum();
        }
    }
}
