//! Run-length coding WASM bindings.
//!
//! The byte form is the flat `count, value` interleaving. Token objects
//! (`{ count, value }`) are available through [`rle_encode_tokens`].

use blockcodec_core::rle;
use wasm_bindgen::prelude::*;

/// Run-length encode bytes into the flat `count, value` form.
///
/// # Example (TypeScript)
///
/// ```typescript
/// const packed = rle_encode(new Uint8Array([1, 1, 1, 2]));
/// // [3, 1, 1, 2]
/// ```
#[wasm_bindgen]
pub fn rle_encode(data: &[u8]) -> Vec<u8> {
    rle::encode_to_bytes(data)
}

/// Decode the flat `count, value` form.
///
/// # Errors
///
/// Returns an error if the stream has odd length or a zero count.
#[wasm_bindgen]
pub fn rle_decode(bytes: &[u8]) -> Result<Vec<u8>, JsValue> {
    rle::decode_from_bytes(bytes).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Run-length encode bytes into an array of `{ count, value }` objects.
#[wasm_bindgen]
pub fn rle_encode_tokens(data: &[u8]) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(&rle::encode(data))
        .map_err(|e| JsValue::from_str(&format!("Failed to serialize tokens: {}", e)))
}

/// Expand an array of `{ count, value }` objects back into bytes.
#[wasm_bindgen]
pub fn rle_decode_tokens(tokens: JsValue) -> Result<Vec<u8>, JsValue> {
    let tokens: Vec<rle::RunToken> = serde_wasm_bindgen::from_value(tokens)
        .map_err(|e| JsValue::from_str(&format!("Invalid run tokens: {}", e)))?;
    rle::decode(&tokens).map_err(|e| JsValue::from_str(&e.to_string()))
}
