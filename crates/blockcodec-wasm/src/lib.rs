//! Blockcodec WASM - WebAssembly bindings for Blockcodec
//!
//! This crate provides WASM bindings to expose the blockcodec-core
//! primitives to JavaScript/TypeScript applications.
//!
//! # Module Structure
//!
//! - `color` - RGB <-> YUV conversion and luma extraction
//! - `scan` - Serpentine scan/unscan for byte and coefficient planes
//! - `rle` - Run-length coding (flat bytes or token objects)
//! - `transform` - Block DCT codec (`JsBlockTransform`)
//! - `pipeline` - Full image encode/decode chain
//!
//! # Usage
//!
//! ```typescript
//! import init, { encode_image, decode_image } from '@blockcodec/wasm';
//!
//! // Initialize WASM module (must call first)
//! await init();
//!
//! const encoded = encode_image(pixels, 64, 64, 8);
//! const restored = decode_image(encoded);
//! ```

use wasm_bindgen::prelude::*;

mod color;
mod pipeline;
mod rle;
mod scan;
mod transform;

// Re-export public types
pub use color::{luma_plane, rgb_to_yuv, yuv_to_rgb};
pub use pipeline::{decode_image, encode_image};
pub use rle::{rle_decode, rle_decode_tokens, rle_encode, rle_encode_tokens};
pub use scan::{serpentine_scan, serpentine_scan_f64, serpentine_unscan, serpentine_unscan_f64};
pub use transform::JsBlockTransform;

/// Initialize the WASM module (called automatically on load)
#[wasm_bindgen(start)]
pub fn init() {
    // Future: Set up panic hook for better error messages in browser console
    // when console_error_panic_hook feature is added
}

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Default tile edge length used by the core codec
#[wasm_bindgen]
pub fn default_block_size() -> u32 {
    blockcodec_core::DEFAULT_BLOCK_SIZE as u32
}
