//! Serpentine (boustrophedon) reordering of raster buffers.
//!
//! Row 0 is read left to right, row 1 right to left, and so on. When the
//! traversal hits a horizontal edge it moves down one row first and then
//! flips direction, so consecutive samples in the output are always
//! spatial neighbors.
//!
//! ```text
//! A B C        scan        A B C F E D
//! D E F   ------------>
//! ```
//!
//! Both directions are generic over any `Copy` sample, so the same code
//! reorders byte planes and `f64` coefficient planes.

use thiserror::Error;

/// Errors that can occur while scanning.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScanError {
    /// Zero width/height, or a buffer whose length isn't width * height
    #[error("Invalid dimensions: {width}x{height} does not describe a buffer of {len} samples")]
    InvalidDimensions {
        width: usize,
        height: usize,
        len: usize,
    },
}

/// Map a position in the serpentine sequence to its (x, y) raster coordinate.
#[inline]
pub fn serpentine_position(index: usize, width: usize) -> (usize, usize) {
    let y = index / width;
    let offset = index % width;
    let x = if y % 2 == 0 {
        offset
    } else {
        width - 1 - offset
    };
    (x, y)
}

/// Iterate the (x, y) coordinates of a `width` x `height` raster in serpentine order.
///
/// Yields exactly `width * height` positions, each once. Returns an empty
/// iterator when either dimension is zero.
pub fn serpentine_positions(
    width: usize,
    height: usize,
) -> impl Iterator<Item = (usize, usize)> {
    (0..width * height).map(move |i| serpentine_position(i, width))
}

fn check_dimensions(len: usize, width: usize, height: usize) -> Result<(), ScanError> {
    if width == 0 || height == 0 || width.checked_mul(height) != Some(len) {
        return Err(ScanError::InvalidDimensions { width, height, len });
    }
    Ok(())
}

/// Reorder a row-major buffer into serpentine order.
///
/// # Errors
///
/// Returns [`ScanError::InvalidDimensions`] if either dimension is zero or
/// `buffer.len() != width * height`.
///
/// # Example
/// ```
/// use blockcodec_core::scan::serpentine_scan;
///
/// let scanned = serpentine_scan(b"ABCDEF", 3, 2).unwrap();
/// assert_eq!(scanned, b"ABCFED");
/// ```
pub fn serpentine_scan<T: Copy>(
    buffer: &[T],
    width: usize,
    height: usize,
) -> Result<Vec<T>, ScanError> {
    check_dimensions(buffer.len(), width, height)?;

    Ok(serpentine_positions(width, height)
        .map(|(x, y)| buffer[y * width + x])
        .collect())
}

/// Restore row-major order from a serpentine sequence.
///
/// Exact inverse of [`serpentine_scan`] for the same dimensions.
pub fn serpentine_unscan<T: Copy>(
    sequence: &[T],
    width: usize,
    height: usize,
) -> Result<Vec<T>, ScanError> {
    check_dimensions(sequence.len(), width, height)?;

    let mut buffer = sequence.to_vec();
    for (&sample, (x, y)) in sequence.iter().zip(serpentine_positions(width, height)) {
        buffer[y * width + x] = sample;
    }
    Ok(buffer)
}


// ============================================================================
// Property-Based Tests
// ============================================================================
