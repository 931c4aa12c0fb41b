//! RGB <-> YUV color conversion.
//!
//! The per-pixel functions are pure and total: they accept and produce
//! out-of-range values without clamping. Clamping only happens in the
//! plane helpers, which convert back to 8-bit RGB buffers.
//!
//! # Round Trip
//!
//! `yuv_to_rgb` truncates toward zero, so `yuv_to_rgb(rgb_to_yuv(rgb))` is
//! not an exact identity. For every RGB triple in [0, 255] each channel
//! comes back within 1 of the input.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Forward coefficients, one row per output channel (Y, U, V).
pub const RGB_TO_YUV: [[f64; 3]; 3] = [
    [0.299, 0.587, 0.114],
    [-0.147, -0.289, 0.436],
    [0.615, -0.515, -0.100],
];

/// Red from V.
pub const V_TO_R: f64 = 1.140;
/// Green from U.
pub const U_TO_G: f64 = 0.395;
/// Green from V.
pub const V_TO_G: f64 = 0.581;
/// Blue from U.
pub const U_TO_B: f64 = 2.032;

/// Errors from the plane conversion helpers.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ColorError {
    /// Pixel data length doesn't match expected dimensions
    #[error("Invalid pixel data: expected {expected} bytes (width * height * 3), got {actual}")]
    InvalidPixelData { expected: usize, actual: usize },

    /// A plane's length doesn't match width * height
    #[error("Invalid {plane} plane: expected {expected} samples (width * height), got {actual}")]
    InvalidPlaneLength {
        plane: &'static str,
        expected: usize,
        actual: usize,
    },

    /// Byte count of a `width` x `height` image doesn't fit in usize
    #[error("Dimensions overflow: {width}x{height} pixels cannot be addressed")]
    DimensionOverflow { width: usize, height: usize },
}

/// Convert one RGB triple to YUV.
///
/// # Example
/// ```
/// use blockcodec_core::color::rgb_to_yuv;
///
/// let (y, _, _) = rgb_to_yuv(255.0, 255.0, 255.0);
/// assert!((y - 255.0).abs() < 1e-9);
/// ```
#[inline]
pub fn rgb_to_yuv(r: f64, g: f64, b: f64) -> (f64, f64, f64) {
    let [ky, ku, kv] = RGB_TO_YUV;
    (
        ky[0] * r + ky[1] * g + ky[2] * b,
        ku[0] * r + ku[1] * g + ku[2] * b,
        kv[0] * r + kv[1] * g + kv[2] * b,
    )
}

/// Convert one YUV triple back to RGB, truncating each channel toward zero.
///
/// The blue channel is reconstructed from U (`B = Y + 2.032 * U`).
/// Results are not clamped and may fall outside [0, 255].
#[inline]
pub fn yuv_to_rgb(y: f64, u: f64, v: f64) -> (i32, i32, i32) {
    let r = y + V_TO_R * v;
    let g = y - U_TO_G * u - V_TO_G * v;
    let b = y + U_TO_B * u;
    (r as i32, g as i32, b as i32)
}

/// Three full-resolution planes produced from an interleaved RGB image.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YuvPlanes {
    pub width: usize,
    pub height: usize,
    pub y: Vec<f64>,
    pub u: Vec<f64>,
    pub v: Vec<f64>,
}

impl YuvPlanes {
    /// Number of samples in each plane, or `None` if `width * height` overflows.
    pub fn sample_count(&self) -> Option<usize> {
        self.width.checked_mul(self.height)
    }

    /// Check that Y, U and V each hold `width * height` samples.
    pub fn validate(&self) -> Result<usize, ColorError> {
        let expected = self.sample_count().ok_or(ColorError::DimensionOverflow {
            width: self.width,
            height: self.height,
        })?;
        for (plane, samples) in [("Y", &self.y), ("U", &self.u), ("V", &self.v)] {
            if samples.len() != expected {
                return Err(ColorError::InvalidPlaneLength {
                    plane,
                    expected,
                    actual: samples.len(),
                });
            }
        }
        Ok(expected)
    }
}

/// Returns the pixel count on success.
fn check_rgb_len(pixels: &[u8], width: usize, height: usize) -> Result<usize, ColorError> {
    let count = width
        .checked_mul(height)
        .filter(|count| count.checked_mul(3).is_some())
        .ok_or(ColorError::DimensionOverflow { width, height })?;
    let expected = count * 3;
    if pixels.len() != expected {
        return Err(ColorError::InvalidPixelData {
            expected,
            actual: pixels.len(),
        });
    }
    Ok(count)
}

/// Split interleaved RGB8 pixels into Y, U and V planes.
///
/// # Arguments
/// * `pixels` - RGB pixel data (3 bytes per pixel, row-major order)
/// * `width` - Image width in pixels
/// * `height` - Image height in pixels
pub fn rgb_to_yuv_planes(
    pixels: &[u8],
    width: usize,
    height: usize,
) -> Result<YuvPlanes, ColorError> {
    let count = check_rgb_len(pixels, width, height)?;
    let mut planes = YuvPlanes {
        width,
        height,
        y: Vec::with_capacity(count),
        u: Vec::with_capacity(count),
        v: Vec::with_capacity(count),
    };

    for chunk in pixels.chunks_exact(3) {
        let (y, u, v) = rgb_to_yuv(chunk[0] as f64, chunk[1] as f64, chunk[2] as f64);
        planes.y.push(y);
        planes.u.push(u);
        planes.v.push(v);
    }

    Ok(planes)
}

/// Recombine YUV planes into interleaved RGB8 pixels.
///
/// Channels are truncated by [`yuv_to_rgb`] and then clamped to [0, 255].
///
/// # Errors
///
/// * [`ColorError::InvalidPlaneLength`] if any plane isn't `width * height` long
/// * [`ColorError::DimensionOverflow`] if `width * height` overflows
pub fn yuv_planes_to_rgb(planes: &YuvPlanes) -> Result<Vec<u8>, ColorError> {
    let count = planes.validate()?;
    let mut pixels = Vec::with_capacity(count.saturating_mul(3));

    for ((&y, &u), &v) in planes.y.iter().zip(&planes.u).zip(&planes.v) {
        let (r, g, b) = yuv_to_rgb(y, u, v);
        pixels.push(r.clamp(0, 255) as u8);
        pixels.push(g.clamp(0, 255) as u8);
        pixels.push(b.clamp(0, 255) as u8);
    }

    Ok(pixels)
}

/// Extract the luma plane of an RGB8 image as bytes (grayscale).
///
/// Y is truncated toward zero and clamped to [0, 255].
pub fn luma_plane(pixels: &[u8], width: usize, height: usize) -> Result<Vec<u8>, ColorError> {
    check_rgb_len(pixels, width, height)?;

    Ok(pixels
        .chunks_exact(3)
        .map(|chunk| {
            let (y, _, _) = rgb_to_yuv(chunk[0] as f64, chunk[1] as f64, chunk[2] as f64);
            (y as i32).clamp(0, 255) as u8
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn round_trip(r: i32, g: i32, b: i32) -> (i32, i32, i32) {
        let (y, u, v) = rgb_to_yuv(r as f64, g as f64, b as f64);
        yuv_to_rgb(y, u, v)
    }

    #[test]
    fn test_luma_coefficients_sum_to_one() {
        let sum: f64 = RGB_TO_YUV[0].iter().sum();
        assert_abs_diff_eq!(sum, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_chroma_of_gray_is_near_zero() {
        // U and V coefficient rows sum to ~0, so gray carries almost no chroma
        for v in [0.0, 64.0, 128.0, 255.0] {
            let (y, u, vv) = rgb_to_yuv(v, v, v);
            assert_abs_diff_eq!(y, v, epsilon = 1e-9);
            assert!(u.abs() < 0.01 * v.max(1.0));
            assert!(vv.abs() < 0.01 * v.max(1.0));
        }
    }

    #[test]
    fn test_known_conversion() {
        let (y, u, v) = rgb_to_yuv(100.0, 200.0, 50.0);
        assert_abs_diff_eq!(y, 29.9 + 117.4 + 5.7, epsilon = 1e-9);
        assert_abs_diff_eq!(u, -14.7 - 57.8 + 21.8, epsilon = 1e-9);
        assert_abs_diff_eq!(v, 61.5 - 103.0 - 5.0, epsilon = 1e-9);
    }

    #[test]
    fn test_yuv_to_rgb_blue_uses_u() {
        // V alone must not move blue
        let (_, _, b) = yuv_to_rgb(100.0, 0.0, 50.0);
        assert_eq!(b, 100);
        let (_, _, b) = yuv_to_rgb(100.0, 10.0, 0.0);
        assert_eq!(b, 120);
    }

    #[test]
    fn test_yuv_to_rgb_truncates_toward_zero() {
        assert_eq!(yuv_to_rgb(10.9, 0.0, 0.0), (10, 10, 10));
        assert_eq!(yuv_to_rgb(-10.9, 0.0, 0.0), (-10, -10, -10));
    }

    #[test]
    fn test_out_of_range_values_pass_through() {
        let (y, _, _) = rgb_to_yuv(400.0, 400.0, 400.0);
        assert_abs_diff_eq!(y, 400.0, epsilon = 1e-9);
        assert_eq!(yuv_to_rgb(300.0, 0.0, 0.0), (300, 300, 300));
        assert_eq!(yuv_to_rgb(-5.0, 0.0, 0.0), (-5, -5, -5));
    }

    #[test]
    fn test_round_trip_within_one_on_grid() {
        for r in (0..=255).step_by(5).chain([254, 255]) {
            for g in (0..=255).step_by(5).chain([254, 255]) {
                for b in (0..=255).step_by(5).chain([254, 255]) {
                    let (r2, g2, b2) = round_trip(r, g, b);
                    assert!(
                        (r2 - r).abs() <= 1 && (g2 - g).abs() <= 1 && (b2 - b).abs() <= 1,
                        "({}, {}, {}) came back as ({}, {}, {})",
                        r, g, b, r2, g2, b2
                    );
                }
            }
        }
    }

    #[test]
    fn test_round_trip_is_not_always_exact() {
        // Truncation loses a unit on some inputs; this is expected
        let lossy = (0..=255).any(|b| round_trip(0, 255, b).2 != b);
        assert!(lossy);
    }

    #[test]
    fn test_planes_round_trip() {
        let pixels = vec![
            255, 0, 0, // Red
            0, 255, 0, // Green
            0, 0, 255, // Blue
            128, 128, 128, // Gray
        ];
        let planes = rgb_to_yuv_planes(&pixels, 2, 2).unwrap();
        assert_eq!(planes.sample_count(), Some(4));
        assert_eq!(planes.y.len(), 4);

        let back = yuv_planes_to_rgb(&planes).unwrap();
        assert_eq!(back.len(), pixels.len());
        for (a, b) in pixels.iter().zip(&back) {
            assert!((*a as i32 - *b as i32).abs() <= 1);
        }
    }

    #[test]
    fn test_planes_clamp_out_of_range() {
        let planes = YuvPlanes {
            width: 2,
            height: 1,
            y: vec![300.0, -20.0],
            u: vec![0.0, 0.0],
            v: vec![0.0, 0.0],
        };
        assert_eq!(
            yuv_planes_to_rgb(&planes).unwrap(),
            vec![255, 255, 255, 0, 0, 0]
        );
    }

    #[test]
    fn test_planes_reject_short_chroma() {
        let planes = YuvPlanes {
            width: 2,
            height: 2,
            y: vec![10.0; 4],
            u: vec![0.0],
            v: vec![0.0; 4],
        };
        assert_eq!(
            yuv_planes_to_rgb(&planes),
            Err(ColorError::InvalidPlaneLength {
                plane: "U",
                expected: 4,
                actual: 1
            })
        );
    }

    #[test]
    fn test_planes_reject_long_luma() {
        let planes = YuvPlanes {
            width: 1,
            height: 1,
            y: vec![10.0; 2],
            u: vec![0.0],
            v: vec![0.0],
        };
        assert!(matches!(
            yuv_planes_to_rgb(&planes),
            Err(ColorError::InvalidPlaneLength { plane: "Y", .. })
        ));
    }

    #[test]
    fn test_planes_reject_overflowing_dimensions() {
        let planes = YuvPlanes {
            width: usize::MAX,
            height: 2,
            y: vec![],
            u: vec![],
            v: vec![],
        };
        assert_eq!(planes.sample_count(), None);
        assert_eq!(
            yuv_planes_to_rgb(&planes),
            Err(ColorError::DimensionOverflow {
                width: usize::MAX,
                height: 2
            })
        );
    }

    #[test]
    fn test_overflowing_rgb_dimensions_rejected() {
        // width * height fits, width * height * 3 doesn't
        let width = usize::MAX / 2;
        assert_eq!(
            rgb_to_yuv_planes(&[], width, 1),
            Err(ColorError::DimensionOverflow { width, height: 1 })
        );
        assert!(matches!(
            luma_plane(&[], usize::MAX, usize::MAX),
            Err(ColorError::DimensionOverflow { .. })
        ));
    }

    #[test]
    fn test_planes_reject_bad_length() {
        let result = rgb_to_yuv_planes(&[0u8; 10], 2, 2);
        assert_eq!(
            result,
            Err(ColorError::InvalidPixelData {
                expected: 12,
                actual: 10
            })
        );
    }

    #[test]
    fn test_luma_plane() {
        let pixels = vec![255, 255, 255, 0, 0, 0, 255, 0, 0];
        let luma = luma_plane(&pixels, 3, 1).unwrap();
        assert_eq!(luma.len(), 3);
        // White may truncate to 254 from float round-off
        assert!(luma[0] >= 254);
        assert_eq!(luma[1], 0);
        // 0.299 * 255 = 76.245
        assert_eq!(luma[2], 76);
    }

    #[test]
    fn test_luma_plane_rejects_bad_length() {
        assert!(matches!(
            luma_plane(&[0u8; 4], 1, 1),
            Err(ColorError::InvalidPixelData { .. })
        ));
    }

    #[test]
    fn test_error_display() {
        let err = ColorError::InvalidPixelData {
            expected: 12,
            actual: 10,
        };
        assert_eq!(
            err.to_string(),
            "Invalid pixel data: expected 12 bytes (width * height * 3), got 10"
        );
    }
}

// ============================================================================
// Property-Based Tests
// ============================================================================

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Property: Round trip stays within the truncation bound.
        #[test]
        fn prop_round_trip_within_one(r in 0i32..=255, g in 0i32..=255, b in 0i32..=255) {
            let (y, u, v) = rgb_to_yuv(r as f64, g as f64, b as f64);
            let (r2, g2, b2) = yuv_to_rgb(y, u, v);
            prop_assert!((r2 - r).abs() <= 1, "red {} -> {}", r, r2);
            prop_assert!((g2 - g).abs() <= 1, "green {} -> {}", g, g2);
            prop_assert!((b2 - b).abs() <= 1, "blue {} -> {}", b, b2);
        }

        /// Property: Plane conversion preserves sample count.
        #[test]
        fn prop_planes_match_dimensions(width in 1usize..=16, height in 1usize..=16) {
            let pixels = vec![77u8; width * height * 3];
            let planes = rgb_to_yuv_planes(&pixels, width, height).unwrap();
            prop_assert_eq!(planes.y.len(), width * height);
            prop_assert_eq!(planes.u.len(), width * height);
            prop_assert_eq!(planes.v.len(), width * height);
            prop_assert_eq!(yuv_planes_to_rgb(&planes).unwrap().len(), pixels.len());
        }
    }
}
