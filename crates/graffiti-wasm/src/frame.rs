//! WASM bindings for the host image frame.
//!
//! A JavaScript view owns one `JsImageFrame` per displayed image and rotates
//! it; anchors bound to it follow automatically.

use std::rc::Rc;

use graffiti_core::frame::{read_orientation, GraffitiHost, ImageFrame};
use wasm_bindgen::prelude::*;

/// Rotation and size of the image shown by a JavaScript view.
#[wasm_bindgen]
pub struct JsImageFrame {
    inner: Rc<ImageFrame>,
}

#[wasm_bindgen]
impl JsImageFrame {
    /// Create an unrotated frame for an image of the given size.
    #[wasm_bindgen(constructor)]
    pub fn new(width: u32, height: u32) -> Result<JsImageFrame, JsValue> {
        let inner = ImageFrame::new(width, height).map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(Self {
            inner: Rc::new(inner),
        })
    }

    /// Create a frame for raw pixels, rotated upright per the file's EXIF orientation.
    ///
    /// # Arguments
    ///
    /// * `bytes` - Original image file bytes (EXIF is read, pixels are not decoded)
    /// * `width` - Stored pixel width
    /// * `height` - Stored pixel height
    ///
    /// # Example (TypeScript)
    ///
    /// ```typescript
    /// const bytes = new Uint8Array(await file.arrayBuffer());
    /// const frame = JsImageFrame.from_exif(bytes, bitmap.width, bitmap.height);
    /// ```
    pub fn from_exif(bytes: &[u8], width: u32, height: u32) -> Result<JsImageFrame, JsValue> {
        let orientation = read_orientation(bytes);
        let inner = ImageFrame::with_orientation(width, height, orientation)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(Self {
            inner: Rc::new(inner),
        })
    }

    /// Current rotation in degrees, in [0, 360)
    #[wasm_bindgen(getter)]
    pub fn rotation(&self) -> f32 {
        self.inner.rotation()
    }

    /// Set the absolute rotation in degrees
    #[wasm_bindgen(setter)]
    pub fn set_rotation(&mut self, degrees: f32) {
        self.inner.set_rotation(degrees);
    }

    /// Turn the image relative to its current rotation
    pub fn rotate_by(&mut self, degrees: f32) {
        self.inner.rotate_by(degrees);
    }

    /// Stored bitmap width at the current rotation
    #[wasm_bindgen(getter)]
    pub fn bitmap_width(&self) -> u32 {
        self.inner.bitmap_size().0
    }

    /// Stored bitmap height at the current rotation
    #[wasm_bindgen(getter)]
    pub fn bitmap_height(&self) -> u32 {
        self.inner.bitmap_size().1
    }

    /// Swap in a new bitmap, given in its stored (currently rotated) size
    pub fn replace_bitmap(&mut self, width: u32, height: u32) -> Result<(), JsValue> {
        self.inner
            .replace_bitmap(width, height)
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }
}

impl JsImageFrame {
    /// Shared handle for binding items.
    pub(crate) fn host(&self) -> Rc<dyn GraffitiHost> {
        self.inner.clone()
    }
}
