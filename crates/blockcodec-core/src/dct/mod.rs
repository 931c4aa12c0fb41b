//! Block-wise 2D discrete cosine transform.
//!
//! A raster buffer is cut into non-overlapping `block_size` x `block_size`
//! tiles and each tile is transformed on its own with a separable,
//! orthonormal DCT-II (rows, then columns). The inverse is the matching
//! DCT-III with the same normalization.
//!
//! # Layout
//!
//! Coefficients are written back in place of the tile they came from, so
//! the output has the same `width` x `height` shape as the input:
//!
//! ```text
//! +--------+--------+
//! | DC AC  | DC AC  |   each 8x8 tile holds its own coefficients,
//! | AC AC  | AC AC  |   DC at the tile's top-left corner
//! +--------+--------+
//! ```
//!
//! Partial edge tiles are not supported: width and height must both be
//! multiples of the block size.
//!
//! # Parallelism
//!
//! With the `parallel` feature, rows of tiles are processed on the rayon
//! thread pool. Each row of tiles writes a disjoint slice of the output.

mod basis;
mod codec;

pub use basis::DctBasis;
pub(crate) use codec::{check_block_size, sample_count};
pub use codec::{BlockTransformCodec, TransformError, DEFAULT_BLOCK_SIZE, MAX_BLOCK_SIZE};
