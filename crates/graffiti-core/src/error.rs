//! Error types for items, drawing and host frames.

use thiserror::Error;

/// Errors from item binding and location access.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ItemError {
    /// A non-null host was bound to an item that already has one.
    ///
    /// Items are owned by exactly one host for their lifetime; hitting this
    /// is a bug in the caller, not a condition to recover from.
    #[error("item is already bound to a host")]
    AlreadyBound,

    /// The operation needs the host's rotation but the item has no host.
    #[error("item is not bound to a host")]
    Unbound,
}

/// Errors that can escape an item's draw call.
#[derive(Debug, Error)]
pub enum DrawError {
    /// The item could not compute its frame.
    #[error(transparent)]
    Item(#[from] ItemError),

    /// The item body needed an appearance attribute that was never set.
    #[error("missing paint attribute: {0}")]
    MissingAttribute(&'static str),

    /// The drawing surface rejected an operation.
    #[error("surface error: {0}")]
    Surface(String),
}

/// Errors from building a host frame.
#[derive(Debug, Error)]
pub enum FrameError {
    /// Zero-sized or otherwise unusable bitmap dimensions.
    #[error("invalid bitmap dimensions: {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    /// EXIF metadata could not be read.
    #[error("EXIF error: {0}")]
    Exif(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_error_display() {
        assert_eq!(
            ItemError::AlreadyBound.to_string(),
            "item is already bound to a host"
        );
        assert_eq!(ItemError::Unbound.to_string(), "item is not bound to a host");
    }

    #[test]
    fn test_draw_error_from_item_error() {
        let err: DrawError = ItemError::Unbound.into();
        assert!(matches!(err, DrawError::Item(ItemError::Unbound)));
        assert_eq!(err.to_string(), "item is not bound to a host");
    }

    #[test]
    fn test_draw_error_display() {
        let err = DrawError::MissingAttribute("pen");
        assert_eq!(err.to_string(), "missing paint attribute: pen");
    }

    #[test]
    fn test_frame_error_display() {
        let err = FrameError::InvalidDimensions {
            width: 0,
            height: 10,
        };
        assert_eq!(err.to_string(), "invalid bitmap dimensions: 0x10");
    }
}
