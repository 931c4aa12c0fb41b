//! Serpentine scan WASM bindings.
//!
//! Byte planes use `Uint8Array`, coefficient planes use `Float64Array`.

use blockcodec_core::scan;
use wasm_bindgen::prelude::*;

/// Reorder a row-major byte buffer into serpentine order.
///
/// # Errors
///
/// Returns an error if either dimension is zero or
/// `buffer.length != width * height`.
///
/// # Example (TypeScript)
///
/// ```typescript
/// const scanned = serpentine_scan(new Uint8Array([1, 2, 3, 4, 5, 6]), 3, 2);
/// // [1, 2, 3, 6, 5, 4]
/// ```
#[wasm_bindgen]
pub fn serpentine_scan(buffer: &[u8], width: u32, height: u32) -> Result<Vec<u8>, JsValue> {
    scan::serpentine_scan(buffer, width as usize, height as usize)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Restore row-major order from a serpentine byte sequence.
#[wasm_bindgen]
pub fn serpentine_unscan(sequence: &[u8], width: u32, height: u32) -> Result<Vec<u8>, JsValue> {
    scan::serpentine_unscan(sequence, width as usize, height as usize)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Reorder a row-major coefficient plane into serpentine order.
#[wasm_bindgen]
pub fn serpentine_scan_f64(buffer: &[f64], width: u32, height: u32) -> Result<Vec<f64>, JsValue> {
    scan::serpentine_scan(buffer, width as usize, height as usize)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Restore row-major order from a serpentine coefficient sequence.
#[wasm_bindgen]
pub fn serpentine_unscan_f64(
    sequence: &[f64],
    width: u32,
    height: u32,
) -> Result<Vec<f64>, JsValue> {
    scan::serpentine_unscan(sequence, width as usize, height as usize)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}
