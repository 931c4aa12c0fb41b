//! Block transform WASM bindings.
//!
//! [`JsBlockTransform`] keeps the precomputed DCT basis on the WASM side,
//! so one instance can transform many planes without rebuilding it.

use blockcodec_core::dct::BlockTransformCodec;
use wasm_bindgen::prelude::*;

/// Block DCT codec accessible from JavaScript.
#[wasm_bindgen]
pub struct JsBlockTransform {
    inner: BlockTransformCodec,
}

#[wasm_bindgen]
impl JsBlockTransform {
    /// Create a codec for `block_size` x `block_size` tiles.
    ///
    /// # Errors
    /// Returns error if `block_size` is zero or above 256
    #[wasm_bindgen(constructor)]
    pub fn new(block_size: u32) -> Result<JsBlockTransform, JsValue> {
        BlockTransformCodec::new(block_size as usize)
            .map(|inner| JsBlockTransform { inner })
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Create a codec with the default 8x8 tiles.
    pub fn with_default_size() -> JsBlockTransform {
        JsBlockTransform {
            inner: BlockTransformCodec::default(),
        }
    }

    /// Tile edge length.
    #[wasm_bindgen(getter)]
    pub fn block_size(&self) -> u32 {
        self.inner.block_size() as u32
    }

    /// Forward transform a row-major `Float64Array` plane.
    ///
    /// # Example (TypeScript)
    ///
    /// ```typescript
    /// const dct = new JsBlockTransform(8);
    /// const coeffs = dct.encode(plane, 64, 64);
    /// const restored = dct.decode(coeffs, 64, 64);
    /// ```
    pub fn encode(&self, buffer: &[f64], width: u32, height: u32) -> Result<Vec<f64>, JsValue> {
        self.inner
            .encode(buffer, width as usize, height as usize)
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Inverse transform a coefficient plane.
    pub fn decode(
        &self,
        coefficients: &[f64],
        width: u32,
        height: u32,
    ) -> Result<Vec<f64>, JsValue> {
        self.inner
            .decode(coefficients, width as usize, height as usize)
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// DC coefficient of each tile, in block raster order.
    pub fn dc_coefficients(
        &self,
        coefficients: &[f64],
        width: u32,
        height: u32,
    ) -> Result<Vec<f64>, JsValue> {
        self.inner
            .dc_coefficients(coefficients, width as usize, height as usize)
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }
}
