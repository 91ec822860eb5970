mod controllers;
mod core;

pub use controllers::mandelbrot::mandelbrot_controller;

pub use crate::core::actions::render_raster::render_raster::{render, render_window, RenderError};
pub use crate::core::colouring::errors::UnsupportedModeError;
pub use crate::core::colouring::kinds::ColourModeKinds;
pub use crate::core::data::colour::Colour;
pub use crate::core::data::complex::Complex;
pub use crate::core::data::plane_window::{InvalidBoundsError, PlaneWindow};
pub use crate::core::data::raster::Raster;
pub use crate::core::data::render_params::{RenderParams, RenderParamsError};
pub use crate::core::util::pixel_to_plane_coords::{pixel_to_plane_coords, PixelToPlaneCoordsError};
