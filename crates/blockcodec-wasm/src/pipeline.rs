//! Image pipeline WASM bindings.
//!
//! Encoded images cross the boundary as plain JS objects
//! (`{ width, height, block_size, y: { tokens }, u: { tokens }, v: { tokens } }`)
//! so callers can store them however they like.

use blockcodec_core::{CodecConfig, EncodedImage, ImageEncoder};
use wasm_bindgen::prelude::*;

/// Encode RGB pixel data through the full color -> DCT -> scan -> RLE chain.
///
/// # Arguments
///
/// * `pixels` - RGB pixel data as a `Uint8Array` (3 bytes per pixel, row-major order)
/// * `width` - Image width in pixels, a multiple of `block_size`
/// * `height` - Image height in pixels, a multiple of `block_size`
/// * `block_size` - Tile edge length (8 is the usual choice)
///
/// # Errors
///
/// Returns an error if:
/// - The pixel data length doesn't match width * height * 3
/// - Width or height is zero or not a multiple of `block_size`
/// - `block_size` is zero
#[wasm_bindgen]
pub fn encode_image(
    pixels: &[u8],
    width: u32,
    height: u32,
    block_size: u32,
) -> Result<JsValue, JsValue> {
    let config = CodecConfig {
        block_size: block_size as usize,
    };
    let encoder = ImageEncoder::new(config).map_err(|e| JsValue::from_str(&e.to_string()))?;
    let encoded = encoder
        .encode(pixels, width as usize, height as usize)
        .map_err(|e| JsValue::from_str(&e.to_string()))?;

    serde_wasm_bindgen::to_value(&encoded)
        .map_err(|e| JsValue::from_str(&format!("Failed to serialize image: {}", e)))
}

/// Decode an object produced by [`encode_image`] back into RGB pixel data.
#[wasm_bindgen]
pub fn decode_image(encoded: JsValue) -> Result<Vec<u8>, JsValue> {
    let encoded: EncodedImage = serde_wasm_bindgen::from_value(encoded)
        .map_err(|e| JsValue::from_str(&format!("Invalid encoded image: {}", e)))?;

    ImageEncoder::default()
        .decode(&encoded)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}
