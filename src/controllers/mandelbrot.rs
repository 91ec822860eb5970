use std::time::Instant;

use crate::core::actions::render_raster::render_raster::{render, RenderError};
use crate::core::data::raster::Raster;

/// Renders the canonical full-set view with the explorer's historical
/// defaults and reports what it produced.
pub fn mandelbrot_controller() -> Result<Raster, RenderError> {
    let real_start = -2.0;
    let real_end = 1.0;
    let imag_start = -1.0;
    let imag_end = 1.0;
    let height: u32 = 700;
    let bailout_radius: u32 = 1 << 10;
    let steps: u32 = 1 << 8;
    let mode = "distance_estimator";

    log::info!(
        "rendering {} to {} / {} to {} at height {} ({} mode, bailout {}, {} steps)",
        real_start,
        real_end,
        imag_start,
        imag_end,
        height,
        mode,
        bailout_radius,
        steps
    );

    let start = Instant::now();
    let raster = render(
        real_start,
        real_end,
        imag_start,
        imag_end,
        height,
        bailout_radius,
        steps,
        mode,
    )?;
    let duration = start.elapsed();

    log::info!(
        "rendered {}x{} raster in {:?}",
        raster.width(),
        raster.height(),
        duration
    );

    Ok(raster)
}
