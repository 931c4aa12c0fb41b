//! Color conversion WASM bindings.
//!
//! Per-pixel functions return plain typed arrays: `[y, u, v]` as a
//! `Float64Array` and `[r, g, b]` as an `Int32Array`. Neither direction
//! clamps.

use blockcodec_core::color;
use wasm_bindgen::prelude::*;

/// Convert one RGB triple to `[y, u, v]`.
///
/// # Example (TypeScript)
///
/// ```typescript
/// const [y, u, v] = rgb_to_yuv(100, 200, 50);
/// ```
#[wasm_bindgen]
pub fn rgb_to_yuv(r: f64, g: f64, b: f64) -> Vec<f64> {
    let (y, u, v) = color::rgb_to_yuv(r, g, b);
    vec![y, u, v]
}

/// Convert one YUV triple to `[r, g, b]`, truncating each channel toward zero.
#[wasm_bindgen]
pub fn yuv_to_rgb(y: f64, u: f64, v: f64) -> Vec<i32> {
    let (r, g, b) = color::yuv_to_rgb(y, u, v);
    vec![r, g, b]
}

/// Extract the luma plane of an RGB image as a grayscale `Uint8Array`.
///
/// # Errors
///
/// Returns an error if `pixels.length != width * height * 3`.
#[wasm_bindgen]
pub fn luma_plane(pixels: &[u8], width: u32, height: u32) -> Result<Vec<u8>, JsValue> {
    color::luma_plane(pixels, width as usize, height as usize)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}


#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_luma_plane() {
        let luma = luma_plane(&[0, 0, 0, 0, 0, 0], 2, 1).unwrap();
        assert_eq!(luma, vec![0, 0]);
    }

    #[wasm_bindgen_test]
    fn test_luma_plane_bad_length() {
        assert!(luma_plane(&[0, 0, 0, 0], 1, 1).is_err());
    }
}
