//! Graffiti WASM - WebAssembly bindings for Graffiti
//!
//! This crate exposes the graffiti-core anchor and frame logic to
//! JavaScript/TypeScript views that draw annotations on a canvas.
//!
//! # Module Structure
//!
//! - `frame` - The image frame a view rotates
//! - `anchor` - Item anchors bound to a frame
//! - `transform` - Free canonical/display mapping functions
//!
//! # Usage
//!
//! ```typescript
//! import init, { JsImageFrame, JsAnchor } from '@graffiti/wasm';
//!
//! await init();
//!
//! const frame = new JsImageFrame(bitmap.width, bitmap.height);
//! const anchor = new JsAnchor();
//! anchor.bind(frame);
//! anchor.set_location(120, 80);
//!
//! frame.rotate_by(90);
//! console.log(anchor.location()); // follows the photo content
//! ```

use wasm_bindgen::prelude::*;

mod anchor;
mod frame;
mod transform;

// Re-export public types
pub use anchor::JsAnchor;
pub use frame::JsImageFrame;
pub use transform::{to_canonical, to_display};

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
