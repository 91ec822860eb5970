use crate::core::actions::finalize_raster::finalize_raster::finalize_raster;
use crate::core::actions::iterate_grid::iterate_grid_rayon::iterate_grid_rayon;
use crate::core::actions::sample_grid::sample_grid::sample_grid;
use crate::core::colouring::errors::UnsupportedModeError;
use crate::core::colouring::factory::colour_strategy_factory;
use crate::core::data::plane_window::{InvalidBoundsError, PlaneWindow};
use crate::core::data::raster::{Raster, RasterError};
use crate::core::data::render_params::{RenderParams, RenderParamsError};
use std::error::Error;
use std::fmt;

#[derive(Debug, PartialEq)]
pub enum RenderError {
    InvalidBounds(InvalidBoundsError),
    InvalidParams(RenderParamsError),
    UnsupportedMode(UnsupportedModeError),
    Raster(RasterError),
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidBounds(err) => write!(f, "invalid plane bounds: {}", err),
            Self::InvalidParams(err) => write!(f, "invalid render parameters: {}", err),
            Self::UnsupportedMode(err) => write!(f, "{}", err),
            Self::Raster(err) => write!(f, "raster assembly error: {}", err),
        }
    }
}

impl Error for RenderError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidBounds(err) => Some(err),
            Self::InvalidParams(err) => Some(err),
            Self::UnsupportedMode(err) => Some(err),
            Self::Raster(err) => Some(err),
        }
    }
}

impl From<InvalidBoundsError> for RenderError {
    fn from(err: InvalidBoundsError) -> Self {
        Self::InvalidBounds(err)
    }
}

impl From<RenderParamsError> for RenderError {
    fn from(err: RenderParamsError) -> Self {
        Self::InvalidParams(err)
    }
}

impl From<UnsupportedModeError> for RenderError {
    fn from(err: UnsupportedModeError) -> Self {
        Self::UnsupportedMode(err)
    }
}

impl From<RasterError> for RenderError {
    fn from(err: RasterError) -> Self {
        Self::Raster(err)
    }
}

/// Renders an escape-time raster for a validated window and parameter set.
pub fn render_window(window: &PlaneWindow, params: &RenderParams) -> Result<Raster, RenderError> {
    let grid = sample_grid(window);
    let records = iterate_grid_rayon(&grid, params);

    let strategy = colour_strategy_factory(params.mode(), params.steps());
    let hsv = strategy.colour(&records);

    Ok(finalize_raster(&hsv, window)?)
}

/// Sole flat entry point for the engine, as the GUI collaborator calls it:
/// plane bounds, raster height, escape threshold, iteration budget and the
/// colour mode's wire name. The returned raster carries the derived width.
#[allow(clippy::too_many_arguments)]
pub fn render(
    real_start: f64,
    real_end: f64,
    imag_start: f64,
    imag_end: f64,
    height: u32,
    bailout_radius: u32,
    steps: u32,
    mode: &str,
) -> Result<Raster, RenderError> {
    let mode = mode.parse()?;
    let window = PlaneWindow::new(real_start, real_end, imag_start, imag_end, height)?;
    let params = RenderParams::new(bailout_radius, steps, mode)?;

    render_window(&window, &params)
}
