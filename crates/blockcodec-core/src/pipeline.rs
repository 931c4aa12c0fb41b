//! Toy image encoder chaining the four primitives.
//!
//! ```text
//! encode: RGB8 -> YUV planes -> block DCT -> serpentine scan -> f64 LE bytes -> RLE
//! decode: RLE -> f64 LE bytes -> serpentine unscan -> inverse DCT -> YUV planes -> RGB8
//! ```
//!
//! Coefficients are carried as raw little-endian `f64` bytes, so the only
//! losses are the color truncation and transform round-off: every channel
//! comes back within 1 of the input. There is no quantization step.
//!
//! Each plane (Y, U, V) is processed independently.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::color::{rgb_to_yuv_planes, yuv_planes_to_rgb, ColorError, YuvPlanes};
use crate::dct::{check_block_size, sample_count, BlockTransformCodec, TransformError};
use crate::rle::{self, RleError, RunToken};
use crate::scan::{serpentine_scan, serpentine_unscan, ScanError};
use crate::CodecConfig;

const COEFFICIENT_BYTES: usize = std::mem::size_of::<f64>();

/// Errors that can occur anywhere in the encode/decode chain.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PipelineError {
    #[error(transparent)]
    Color(#[from] ColorError),

    #[error(transparent)]
    Scan(#[from] ScanError),

    #[error(transparent)]
    Rle(#[from] RleError),

    #[error(transparent)]
    Transform(#[from] TransformError),

    /// A decoded plane doesn't hold width * height coefficients
    #[error("Coefficient plane has {actual} bytes, expected {expected}")]
    CoefficientLength { expected: usize, actual: usize },
}

/// Run-length tokens for one coefficient plane.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncodedPlane {
    pub tokens: Vec<RunToken>,
}

/// An encoded image: dimensions, the block size used, and one plane per channel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncodedImage {
    pub width: usize,
    pub height: usize,
    pub block_size: usize,
    pub y: EncodedPlane,
    pub u: EncodedPlane,
    pub v: EncodedPlane,
}

impl EncodedImage {
    /// Total number of run tokens across all planes.
    pub fn token_count(&self) -> usize {
        self.y.tokens.len() + self.u.tokens.len() + self.v.tokens.len()
    }
}

/// Encodes RGB8 images into [`EncodedImage`]s and back.
#[derive(Debug, Clone, Default)]
pub struct ImageEncoder {
    codec: BlockTransformCodec,
}

impl ImageEncoder {
    pub fn new(config: CodecConfig) -> Result<Self, PipelineError> {
        config.validate()?;
        Ok(Self {
            codec: BlockTransformCodec::from_config(&config)?,
        })
    }

    pub fn block_size(&self) -> usize {
        self.codec.block_size()
    }

    /// Encode interleaved RGB8 pixels.
    ///
    /// # Errors
    ///
    /// * [`PipelineError::Color`] if `pixels.len() != width * height * 3`
    /// * [`PipelineError::Transform`] if the dimensions aren't block aligned
    /// * [`PipelineError::Scan`] if either dimension is zero
    pub fn encode(
        &self,
        pixels: &[u8],
        width: usize,
        height: usize,
    ) -> Result<EncodedImage, PipelineError> {
        log::debug!(
            "encoding {}x{} image with {}x{} blocks",
            width,
            height,
            self.block_size(),
            self.block_size()
        );

        let planes = rgb_to_yuv_planes(pixels, width, height)?;
        let image = EncodedImage {
            width,
            height,
            block_size: self.block_size(),
            y: self.encode_plane(&planes.y, width, height)?,
            u: self.encode_plane(&planes.u, width, height)?,
            v: self.encode_plane(&planes.v, width, height)?,
        };

        log::debug!("encoded into {} run tokens", image.token_count());
        Ok(image)
    }

    /// Decode an [`EncodedImage`] back into interleaved RGB8 pixels.
    ///
    /// The block size recorded in the image is used, even if it differs
    /// from this encoder's configuration. The recorded block size and
    /// dimensions are checked before any codec or plane is allocated.
    pub fn decode(&self, image: &EncodedImage) -> Result<Vec<u8>, PipelineError> {
        let (width, height, block_size) = (image.width, image.height, image.block_size);
        check_block_size(block_size)?;
        if width % block_size != 0 || height % block_size != 0 {
            return Err(TransformError::UnalignedDimensions {
                width,
                height,
                block_size,
            }
            .into());
        }
        let plane_bytes = sample_count(width, height)?
            .checked_mul(COEFFICIENT_BYTES)
            .ok_or(TransformError::DimensionOverflow { width, height })?;

        let rebuilt;
        let codec = if image.block_size == self.block_size() {
            &self.codec
        } else {
            rebuilt = BlockTransformCodec::new(image.block_size)?;
            &rebuilt
        };

        log::debug!("decoding {}x{} image", width, height);

        let planes = YuvPlanes {
            width,
            height,
            y: decode_plane(codec, &image.y, width, height, plane_bytes)?,
            u: decode_plane(codec, &image.u, width, height, plane_bytes)?,
            v: decode_plane(codec, &image.v, width, height, plane_bytes)?,
        };

        Ok(yuv_planes_to_rgb(&planes)?)
    }

    fn encode_plane(
        &self,
        plane: &[f64],
        width: usize,
        height: usize,
    ) -> Result<EncodedPlane, PipelineError> {
        let coefficients = self.codec.encode(plane, width, height)?;
        let scanned = serpentine_scan(&coefficients, width, height)?;
        let bytes: Vec<u8> = scanned.iter().flat_map(|c| c.to_le_bytes()).collect();
        let tokens = rle::encode(&bytes);

        log::trace!("plane: {} bytes -> {} tokens", bytes.len(), tokens.len());
        Ok(EncodedPlane { tokens })
    }
}

fn decode_plane(
    codec: &BlockTransformCodec,
    plane: &EncodedPlane,
    width: usize,
    height: usize,
    expected: usize,
) -> Result<Vec<f64>, PipelineError> {
    let bytes = rle::decode(&plane.tokens)?;
    if bytes.len() != expected {
        return Err(PipelineError::CoefficientLength {
            expected,
            actual: bytes.len(),
        });
    }

    let scanned: Vec<f64> = bytes
        .chunks_exact(COEFFICIENT_BYTES)
        .map(|chunk| {
            let mut raw = [0u8; COEFFICIENT_BYTES];
            raw.copy_from_slice(chunk);
            f64::from_le_bytes(raw)
        })
        .collect();

    let coefficients = serpentine_unscan(&scanned, width, height)?;
    Ok(codec.decode(&coefficients, width, height)?)
}


// ============================================================================
// Property-Based Tests
// ============================================================================
