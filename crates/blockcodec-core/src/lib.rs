//! Blockcodec Core - block-transform image codec primitives
//!
//! This crate provides the skeleton of a JPEG-style codec: color-space
//! conversion, a block-wise 2D DCT, serpentine reordering of samples, and
//! run-length coding. Each primitive is independent; the [`pipeline`]
//! module chains them into a toy encoder.
//!
//! # Module Structure
//!
//! - `color` - RGB <-> YUV conversion, per pixel and per plane
//! - `dct` - Orthonormal block DCT (forward and inverse)
//! - `scan` - Serpentine (boustrophedon) scan and unscan
//! - `rle` - Run-length encode/decode with 255-byte run chunking
//! - `pipeline` - RGB8 -> tokens -> RGB8 round trip
//!
//! All operations are pure and synchronous. Nothing here touches files.

pub mod color;
pub mod dct;
pub mod pipeline;
pub mod rle;
pub mod scan;

pub use color::{rgb_to_yuv, yuv_to_rgb, ColorError, YuvPlanes};
pub use dct::{BlockTransformCodec, TransformError, DEFAULT_BLOCK_SIZE, MAX_BLOCK_SIZE};
pub use pipeline::{EncodedImage, EncodedPlane, ImageEncoder, PipelineError};
pub use rle::{RleError, RunToken};
pub use scan::{serpentine_scan, serpentine_unscan, ScanError};

/// Codec configuration.
///
/// Block size is the only tunable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct CodecConfig {
    /// Edge length of the square transform tiles (default 8)
    pub block_size: usize,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            block_size: DEFAULT_BLOCK_SIZE,
        }
    }
}

impl CodecConfig {
    /// Create a new CodecConfig with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Check that the configuration can build a codec
    pub fn validate(&self) -> Result<(), TransformError> {
        dct::check_block_size(self.block_size)
    }

    /// Check whether width and height are whole multiples of the block size
    pub fn is_aligned(&self, width: usize, height: usize) -> bool {
        self.block_size != 0 && width % self.block_size == 0 && height % self.block_size == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = CodecConfig::new();
        assert_eq!(config.block_size, 8);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_zero_block_size() {
        let config = CodecConfig { block_size: 0 };
        assert_eq!(
            config.validate(),
            Err(TransformError::InvalidBlockSize { block_size: 0 })
        );
        assert!(!config.is_aligned(8, 8));
    }

    #[test]
    fn test_config_oversized_block_size() {
        let config = CodecConfig {
            block_size: 1 << 33,
        };
        assert!(matches!(
            config.validate(),
            Err(TransformError::InvalidBlockSize { .. })
        ));
        assert!(CodecConfig { block_size: MAX_BLOCK_SIZE }.validate().is_ok());
    }

    #[test]
    fn test_config_alignment() {
        let config = CodecConfig::default();
        assert!(config.is_aligned(16, 8));
        assert!(!config.is_aligned(10, 8));
        assert!(!config.is_aligned(8, 12));
    }

    #[test]
    fn test_primitives_chain() {
        // Color -> DCT -> scan -> RLE on a single luma tile, then back
        let pixels: Vec<u8> = (0..64).flat_map(|i| [i as u8 * 3, 100, 200]).collect();
        let planes = color::rgb_to_yuv_planes(&pixels, 8, 8).unwrap();

        let codec = BlockTransformCodec::default();
        let coeffs = codec.encode(&planes.y, 8, 8).unwrap();
        let scanned = serpentine_scan(&coeffs, 8, 8).unwrap();
        let bytes: Vec<u8> = scanned.iter().flat_map(|c| c.to_le_bytes()).collect();
        let tokens = rle::encode(&bytes);

        let bytes_back = rle::decode(&tokens).unwrap();
        assert_eq!(bytes_back, bytes);
        let scanned_back: Vec<f64> = bytes_back
            .chunks_exact(8)
            .map(|c| f64::from_le_bytes(c.try_into().unwrap()))
            .collect();
        let coeffs_back = serpentine_unscan(&scanned_back, 8, 8).unwrap();
        let luma = codec.decode(&coeffs_back, 8, 8).unwrap();

        for (a, b) in planes.y.iter().zip(&luma) {
            assert!((a - b).abs() < 1e-8);
        }
    }
}
