use crate::core::colouring::kinds::ColourModeKinds;
use std::{error::Error, fmt};

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum RenderParamsError {
    ZeroBailoutRadius,
    ZeroSteps,
}

impl fmt::Display for RenderParamsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroBailoutRadius => {
                write!(f, "bailout radius must be greater than zero")
            }
            Self::ZeroSteps => {
                write!(f, "iteration steps must be greater than zero")
            }
        }
    }
}

impl Error for RenderParamsError {}

/// Immutable per-render iteration budget and colouring choice.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct RenderParams {
    bailout_radius: u32,
    steps: u32,
    mode: ColourModeKinds,
}

impl RenderParams {
    pub fn new(
        bailout_radius: u32,
        steps: u32,
        mode: ColourModeKinds,
    ) -> Result<Self, RenderParamsError> {
        if bailout_radius == 0 {
            return Err(RenderParamsError::ZeroBailoutRadius);
        }

        if steps == 0 {
            return Err(RenderParamsError::ZeroSteps);
        }

        Ok(Self {
            bailout_radius,
            steps,
            mode,
        })
    }

    #[must_use]
    pub fn bailout_radius(&self) -> u32 {
        self.bailout_radius
    }

    #[must_use]
    pub fn steps(&self) -> u32 {
        self.steps
    }

    #[must_use]
    pub fn mode(&self) -> ColourModeKinds {
        self.mode
    }
}
