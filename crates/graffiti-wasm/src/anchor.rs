//! WASM bindings for item anchors.
//!
//! JavaScript items render with `CanvasRenderingContext2D`, so they cannot
//! implement the Rust draw trait. `JsAnchor` carries the same binding and
//! anchor state as a Rust item and hands out the item frame as a matrix the
//! JavaScript body applies itself:
//!
//! ```typescript
//! ctx.save();
//! const [a, b, c, d, e, f] = anchor.local_transform();
//! ctx.transform(a, b, c, d, e, f);
//! drawBody(ctx);
//! ctx.restore();
//! ```

use graffiti_core::{ItemBase, PaintAttrs, Point};
use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::frame::JsImageFrame;

/// Snapshot of an anchor for inspection from JavaScript.
#[derive(Debug, Serialize)]
struct AnchorState {
    location: Point,
    canonical: Point,
    pivot: Point,
    orientation: f32,
    item_rotation: f32,
    draw_optimize: bool,
    clip_outside: bool,
}

/// Position and frame of one annotation item.
#[wasm_bindgen]
pub struct JsAnchor {
    base: ItemBase,
}

#[wasm_bindgen]
impl JsAnchor {
    /// Create an unbound anchor with unset appearance
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            base: ItemBase::new(),
        }
    }

    /// Bind to a frame, capturing its current rotation and center.
    ///
    /// Fails if the anchor is already bound; call `detach` first.
    pub fn bind(&mut self, frame: &JsImageFrame) -> Result<(), JsValue> {
        self.base
            .bind(Some(frame.host()))
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Release the frame
    pub fn detach(&mut self) {
        // Detaching never fails
        let _ = self.base.bind(None);
    }

    #[wasm_bindgen(getter)]
    pub fn is_bound(&self) -> bool {
        self.base.is_bound()
    }

    /// Displayed location as `{ x, y }`
    pub fn location(&self) -> Result<JsValue, JsValue> {
        let location = self
            .base
            .location()
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        serde_wasm_bindgen::to_value(&location).map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Move the anchor to a displayed point
    pub fn set_location(&mut self, x: f32, y: f32) -> Result<(), JsValue> {
        self.base
            .set_location(Point::new(x, y))
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Item frame as `[a, b, c, d, e, f]` for `ctx.transform`
    pub fn local_transform(&self) -> Result<Vec<f32>, JsValue> {
        let m = self
            .base
            .local_transform()
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(m.to_array().to_vec())
    }

    /// Extra rotation of the item content in degrees
    #[wasm_bindgen(getter)]
    pub fn item_rotation(&self) -> f32 {
        self.base.item_rotation()
    }

    #[wasm_bindgen(setter)]
    pub fn set_item_rotation(&mut self, degrees: f32) {
        self.base.set_item_rotation(degrees);
    }

    /// Bake into the image on add instead of redrawing every frame
    #[wasm_bindgen(getter)]
    pub fn draw_optimize(&self) -> bool {
        self.base.is_draw_optimize()
    }

    #[wasm_bindgen(setter)]
    pub fn set_draw_optimize(&mut self, value: bool) {
        self.base.set_draw_optimize(value);
    }

    /// Clip output to the image bounds
    #[wasm_bindgen(getter)]
    pub fn clip_outside(&self) -> bool {
        self.base.is_clip_outside()
    }

    #[wasm_bindgen(setter)]
    pub fn set_clip_outside(&mut self, value: bool) {
        self.base.set_clip_outside(value);
    }

    /// Appearance attributes as JSON
    pub fn attrs(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(self.base.attrs()).map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Replace appearance attributes from JSON
    pub fn set_attrs(&mut self, value: JsValue) -> Result<(), JsValue> {
        let attrs: PaintAttrs =
            serde_wasm_bindgen::from_value(value).map_err(|e| JsValue::from_str(&e.to_string()))?;
        self.base.set_pen(attrs.pen);
        self.base.set_shape(attrs.shape);
        self.base.set_size(attrs.size);
        self.base.set_color(attrs.color);
        Ok(())
    }

    /// Full anchor state as JSON, for debugging views
    pub fn state(&self) -> Result<JsValue, JsValue> {
        let state = self.snapshot().map_err(|e| JsValue::from_str(&e.to_string()))?;
        serde_wasm_bindgen::to_value(&state).map_err(|e| JsValue::from_str(&e.to_string()))
    }
}

impl JsAnchor {
    fn snapshot(&self) -> Result<AnchorState, graffiti_core::ItemError> {
        Ok(AnchorState {
            location: self.base.location()?,
            canonical: self.base.canonical_location(),
            pivot: self.base.pivot(),
            orientation: self.base.orientation(),
            item_rotation: self.base.item_rotation(),
            draw_optimize: self.base.is_draw_optimize(),
            clip_outside: self.base.is_clip_outside(),
        })
    }
}

impl Default for JsAnchor {
    fn default() -> Self {
        Self::new()
    }
}
