use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum InvalidBoundsError {
    DegenerateImaginaryAxis { imag_start: f64, imag_end: f64 },
    NonPositiveWidth { height: u32, ratio: f64 },
}

impl fmt::Display for InvalidBoundsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DegenerateImaginaryAxis {
                imag_start,
                imag_end,
            } => {
                write!(
                    f,
                    "imaginary axis is degenerate: {} to {}",
                    imag_start, imag_end
                )
            }
            Self::NonPositiveWidth { height, ratio } => {
                write!(
                    f,
                    "derived width is not positive for height {} and aspect ratio {}",
                    height, ratio
                )
            }
        }
    }
}

impl Error for InvalidBoundsError {}

/// Rectangular window of the complex plane together with the raster height
/// requested for it.
///
/// The raster width is derived from the bounds, never chosen by the caller:
/// `width = floor(height * |(real_end - real_start) / (imag_end - imag_start)|)`.
/// Deriving it keeps the rendered image undistorted for any window shape.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PlaneWindow {
    real_start: f64,
    real_end: f64,
    imag_start: f64,
    imag_end: f64,
    height: u32,
    width: u32,
}

impl PlaneWindow {
    pub fn new(
        real_start: f64,
        real_end: f64,
        imag_start: f64,
        imag_end: f64,
        height: u32,
    ) -> Result<Self, InvalidBoundsError> {
        if imag_end == imag_start {
            return Err(InvalidBoundsError::DegenerateImaginaryAxis {
                imag_start,
                imag_end,
            });
        }

        let ratio = (real_end - real_start) / (imag_end - imag_start);
        let width = (f64::from(height) * ratio.abs()).floor() as u32;

        if width == 0 {
            return Err(InvalidBoundsError::NonPositiveWidth { height, ratio });
        }

        Ok(Self {
            real_start,
            real_end,
            imag_start,
            imag_end,
            height,
            width,
        })
    }

    #[must_use]
    pub fn real_start(&self) -> f64 {
        self.real_start
    }

    #[must_use]
    pub fn real_end(&self) -> f64 {
        self.real_end
    }

    #[must_use]
    pub fn imag_start(&self) -> f64 {
        self.imag_start
    }

    #[must_use]
    pub fn imag_end(&self) -> f64 {
        self.imag_end
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }
}
