use crate::core::data::hsv::Hsv;
use crate::core::data::plane_window::PlaneWindow;
use crate::core::data::raster::{Raster, RasterError};

/// Converts the staged HSV buffer into the final RGB byte raster.
///
/// The sample grid was generated with row 0 at `imag_start`, the bottom of
/// the plane; the displayed raster wants row 0 on top, so rows are emitted
/// in reverse order.
pub fn finalize_raster(hsv: &[Hsv], window: &PlaneWindow) -> Result<Raster, RasterError> {
    let width = window.width() as usize;
    let height = window.height() as usize;

    if hsv.len() != width * height {
        return Err(RasterError::SizeMismatch {
            width: window.width(),
            height: window.height(),
            byte_count: hsv.len() * 3,
        });
    }

    let mut data = Vec::with_capacity(hsv.len() * 3);
    for row in (0..height).rev() {
        for pixel in &hsv[row * width..(row + 1) * width] {
            let colour = pixel.to_colour();
            data.push(colour.r);
            data.push(colour.g);
            data.push(colour.b);
        }
    }

    Raster::from_data(window.width(), window.height(), data)
}
