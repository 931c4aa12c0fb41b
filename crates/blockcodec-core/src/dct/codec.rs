//! Block-wise 2D transform over a raster buffer.

use super::basis::DctBasis;
use crate::CodecConfig;
use thiserror::Error;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Default tile edge length.
pub const DEFAULT_BLOCK_SIZE: usize = 8;

/// Largest accepted tile edge length.
pub const MAX_BLOCK_SIZE: usize = 256;

/// Errors that can occur during block transform operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TransformError {
    /// Width or height is not a multiple of the block size
    #[error("Unaligned dimensions: {width}x{height} is not a multiple of block size {block_size}")]
    UnalignedDimensions {
        width: usize,
        height: usize,
        block_size: usize,
    },

    /// Buffer length doesn't match width * height
    #[error("Invalid buffer length: expected {expected} samples (width * height), got {actual}")]
    InvalidBufferLength { expected: usize, actual: usize },

    /// Block size is zero or above [`MAX_BLOCK_SIZE`]
    #[error("Invalid block size {block_size}: must be between 1 and {MAX_BLOCK_SIZE}")]
    InvalidBlockSize { block_size: usize },

    /// width * height doesn't fit in usize
    #[error("Dimensions overflow: {width}x{height} samples cannot be addressed")]
    DimensionOverflow { width: usize, height: usize },
}

/// Check that `block_size` is in `1..=MAX_BLOCK_SIZE`.
pub(crate) fn check_block_size(block_size: usize) -> Result<(), TransformError> {
    if block_size == 0 || block_size > MAX_BLOCK_SIZE {
        return Err(TransformError::InvalidBlockSize { block_size });
    }
    Ok(())
}

/// Sample count of a `width` x `height` raster, if it fits in usize.
pub(crate) fn sample_count(width: usize, height: usize) -> Result<usize, TransformError> {
    width
        .checked_mul(height)
        .ok_or(TransformError::DimensionOverflow { width, height })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Forward,
    Inverse,
}

/// Separable orthonormal DCT applied independently to each square tile.
///
/// Tiles never share coefficients: the (0, 0) entry of each tile is that
/// tile's DC term, the rest are its AC terms in increasing frequency.
/// Because the normalization is orthonormal, [`decode`](Self::decode)
/// undoes [`encode`](Self::encode) up to floating-point round-off.
///
/// The block size is fixed at construction. Encoding and decoding the same
/// data with different block sizes is a caller error and is not detected.
#[derive(Debug, Clone)]
pub struct BlockTransformCodec {
    basis: DctBasis,
}

impl Default for BlockTransformCodec {
    fn default() -> Self {
        Self::with_basis(DEFAULT_BLOCK_SIZE)
    }
}

impl BlockTransformCodec {
    /// Create a codec for `block_size` x `block_size` tiles.
    ///
    /// Fails with [`TransformError::InvalidBlockSize`] unless
    /// `1 <= block_size <= MAX_BLOCK_SIZE`.
    pub fn new(block_size: usize) -> Result<Self, TransformError> {
        check_block_size(block_size)?;
        Ok(Self::with_basis(block_size))
    }

    /// Create a codec from a [`CodecConfig`].
    pub fn from_config(config: &CodecConfig) -> Result<Self, TransformError> {
        Self::new(config.block_size)
    }

    fn with_basis(block_size: usize) -> Self {
        log::debug!("block transform codec: {block_size}x{block_size} tiles");
        Self {
            basis: DctBasis::new(block_size),
        }
    }

    pub fn block_size(&self) -> usize {
        self.basis.size()
    }

    /// Forward transform every tile of a row-major `width` x `height` buffer.
    ///
    /// # Errors
    ///
    /// * [`TransformError::UnalignedDimensions`] if width or height isn't a
    ///   multiple of the block size
    /// * [`TransformError::DimensionOverflow`] if `width * height` overflows
    /// * [`TransformError::InvalidBufferLength`] if `buffer.len() != width * height`
    pub fn encode(
        &self,
        buffer: &[f64],
        width: usize,
        height: usize,
    ) -> Result<Vec<f64>, TransformError> {
        self.apply(buffer, width, height, Direction::Forward)
    }

    /// Inverse transform every tile of a coefficient buffer.
    pub fn decode(
        &self,
        coefficients: &[f64],
        width: usize,
        height: usize,
    ) -> Result<Vec<f64>, TransformError> {
        self.apply(coefficients, width, height, Direction::Inverse)
    }

    /// Collect the DC coefficient of each tile, in block raster order.
    ///
    /// The result is a `width / block_size` x `height / block_size` plane
    /// holding each tile's mean scaled by `block_size`.
    pub fn dc_coefficients(
        &self,
        coefficients: &[f64],
        width: usize,
        height: usize,
    ) -> Result<Vec<f64>, TransformError> {
        self.validate(coefficients.len(), width, height)?;

        let bs = self.block_size();
        let mut dc = Vec::with_capacity((width / bs) * (height / bs));
        for by in (0..height).step_by(bs) {
            for bx in (0..width).step_by(bs) {
                dc.push(coefficients[by * width + bx]);
            }
        }
        Ok(dc)
    }

    fn validate(&self, len: usize, width: usize, height: usize) -> Result<(), TransformError> {
        let bs = self.block_size();
        if width % bs != 0 || height % bs != 0 {
            return Err(TransformError::UnalignedDimensions {
                width,
                height,
                block_size: bs,
            });
        }

        let expected = sample_count(width, height)?;
        if len != expected {
            return Err(TransformError::InvalidBufferLength {
                expected,
                actual: len,
            });
        }
        Ok(())
    }

    fn apply(
        &self,
        input: &[f64],
        width: usize,
        height: usize,
        direction: Direction,
    ) -> Result<Vec<f64>, TransformError> {
        self.validate(input.len(), width, height)?;

        let mut output = vec![0.0; input.len()];
        if output.is_empty() {
            return Ok(output);
        }

        // Each band is one row of tiles and owns a disjoint slice of the output
        let band_len = width * self.block_size();

        #[cfg(feature = "parallel")]
        output
            .par_chunks_mut(band_len)
            .enumerate()
            .for_each(|(band, out)| self.transform_band(input, width, band, out, direction));

        #[cfg(not(feature = "parallel"))]
        output
            .chunks_mut(band_len)
            .enumerate()
            .for_each(|(band, out)| self.transform_band(input, width, band, out, direction));

        Ok(output)
    }

    fn transform_band(
        &self,
        input: &[f64],
        width: usize,
        band: usize,
        out: &mut [f64],
        direction: Direction,
    ) {
        let bs = self.block_size();
        let y0 = band * bs;
        let mut block = vec![0.0; bs * bs];
        let mut line_in = vec![0.0; bs];
        let mut line_out = vec![0.0; bs];

        for x0 in (0..width).step_by(bs) {
            for r in 0..bs {
                let src = (y0 + r) * width + x0;
                block[r * bs..(r + 1) * bs].copy_from_slice(&input[src..src + bs]);
            }

            self.transform_block(&mut block, &mut line_in, &mut line_out, direction);

            for r in 0..bs {
                let dst = r * width + x0;
                out[dst..dst + bs].copy_from_slice(&block[r * bs..(r + 1) * bs]);
            }
        }
    }

    /// Rows first, then columns.
    fn transform_block(
        &self,
        block: &mut [f64],
        line_in: &mut [f64],
        line_out: &mut [f64],
        direction: Direction,
    ) {
        let bs = self.block_size();

        for row in block.chunks_exact_mut(bs) {
            line_in.copy_from_slice(row);
            self.pass(direction, line_in, line_out);
            row.copy_from_slice(line_out);
        }

        for c in 0..bs {
            for r in 0..bs {
                line_in[r] = block[r * bs + c];
            }
            self.pass(direction, line_in, line_out);
            for r in 0..bs {
                block[r * bs + c] = line_out[r];
            }
        }
    }

    #[inline]
    fn pass(&self, direction: Direction, src: &[f64], dst: &mut [f64]) {
        match direction {
            Direction::Forward => self.basis.forward(src, dst),
            Direction::Inverse => self.basis.inverse(src, dst),
        }
    }
}


// ============================================================================
// Property-Based Tests
// ============================================================================

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    /// Strategy for an aligned buffer: (block_size, width, height, samples).
    fn aligned_raster_strategy() -> impl Strategy<Value = (usize, usize, usize, Vec<f64>)> {
        (prop_oneof![Just(2usize), Just(4), Just(8)], 1usize..=4, 1usize..=4).prop_flat_map(
            |(bs, bw, bh)| {
                let (width, height) = (bs * bw, bs * bh);
                (
                    Just(bs),
                    Just(width),
                    Just(height),
                    prop::collection::vec(-1000.0f64..1000.0, width * height..=width * height),
                )
            },
        )
    }

    proptest! {
        /// Property: Decode inverts encode within 1e-8 per cell.
        #[test]
        fn prop_round_trip((bs, width, height, input) in aligned_raster_strategy()) {
            let codec = BlockTransformCodec::new(bs).unwrap();
            let coeffs = codec.encode(&input, width, height).unwrap();
            let output = codec.decode(&coeffs, width, height).unwrap();
            for (i, (a, b)) in input.iter().zip(&output).enumerate() {
                prop_assert!((a - b).abs() <= 1e-8, "cell {}: {} vs {}", i, a, b);
            }
        }

        /// Property: Any width that isn't a multiple of the block size is rejected.
        #[test]
        fn prop_unaligned_rejected(blocks in 1usize..=4, extra in 1usize..8) {
            let codec = BlockTransformCodec::default();
            let width = blocks * 8 + extra;
            let buffer = vec![0.0; width * 8];
            let is_unaligned = matches!(
                codec.encode(&buffer, width, 8),
                Err(TransformError::UnalignedDimensions { .. })
            );
            prop_assert!(is_unaligned);
        }
    }
}
