//! PNG export of a [`PixelCanvas`].
//!
//! Feature-gated behind `png` (default on) so embedding hosts that bring
//! their own display surface can drop the `image` dependency.

use crate::canvas::PixelCanvas;
use flow_field_core::error::FlowError;
use std::path::Path;

/// Writes the canvas as a PNG file.
///
/// Returns `FlowError::InvalidDimensions` if the canvas dimensions
/// overflow `u32`, or `FlowError::Io` on write failure.
pub fn write_png(canvas: &PixelCanvas, path: &Path) -> Result<(), FlowError> {
    let w = u32::try_from(canvas.width()).map_err(|_| FlowError::InvalidDimensions)?;
    let h = u32::try_from(canvas.height()).map_err(|_| FlowError::InvalidDimensions)?;
    let img = image::RgbaImage::from_raw(w, h, canvas.data().to_vec())
        .ok_or_else(|| FlowError::Io("RGBA buffer size mismatch".into()))?;
    img.save(path).map_err(|e| FlowError::Io(e.to_string()))
}
