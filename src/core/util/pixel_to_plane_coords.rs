use crate::core::data::complex::Complex;
use crate::core::data::plane_window::PlaneWindow;
use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PixelToPlaneCoordsError {
    PixelOutsideWindow {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    },
}

impl fmt::Display for PixelToPlaneCoordsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PixelOutsideWindow {
                x,
                y,
                width,
                height,
            } => {
                write!(
                    f,
                    "pixel (x: {}, y: {}) is outside the {}x{} raster",
                    x, y, width, height
                )
            }
        }
    }
}

impl Error for PixelToPlaneCoordsError {}

/// Maps a raster pixel back to its complex-plane coordinate.
///
/// This is the inverse the zoom collaborator uses to turn a selection box
/// into new plane bounds; the engine itself never calls it.
pub fn pixel_to_plane_coords(
    x: u32,
    y: u32,
    window: &PlaneWindow,
) -> Result<Complex, PixelToPlaneCoordsError> {
    if x >= window.width() || y >= window.height() {
        return Err(PixelToPlaneCoordsError::PixelOutsideWindow {
            x,
            y,
            width: window.width(),
            height: window.height(),
        });
    }

    let real = window.real_start()
        + (f64::from(x) / f64::from(window.width())) * (window.real_end() - window.real_start());
    let imag = window.imag_start()
        + (f64::from(y) / f64::from(window.height())) * (window.imag_end() - window.imag_start());

    Ok(Complex { real, imag })
}
