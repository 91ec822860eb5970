use crate::core::data::complex::Complex;
use crate::core::data::plane_window::PlaneWindow;
use crate::core::util::evenly_spaced::evenly_spaced;

/// Lays the window's sample grid: one complex point per pixel, row-major,
/// row 0 at `imag_start`. The finalizer flips rows so the displayed raster
/// has the maximum imaginary coordinate on top.
#[must_use]
pub fn sample_grid(window: &PlaneWindow) -> Vec<Complex> {
    let real_axis = evenly_spaced(window.real_start(), window.real_end(), window.width());
    let imag_axis = evenly_spaced(window.imag_start(), window.imag_end(), window.height());

    let mut grid = Vec::with_capacity(window.pixel_count());
    for &imag in &imag_axis {
        for &real in &real_axis {
            grid.push(Complex { real, imag });
        }
    }

    grid
}
