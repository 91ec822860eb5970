use crate::core::colouring::kinds::ColourModeKinds;
use crate::core::colouring::strategy::ColourStrategy;
use crate::core::data::escape_record::{EscapeRecord, EscapeStatus};
use crate::core::data::hsv::Hsv;

/// Grayscale colouring: brightness fades with the escape step, set members
/// stay black.
#[derive(Debug)]
pub struct GrayscaleColouring {
    steps: u32,
}

impl GrayscaleColouring {
    #[must_use]
    pub fn new(steps: u32) -> Self {
        Self { steps }
    }
}

impl ColourStrategy for GrayscaleColouring {
    fn kind(&self) -> ColourModeKinds {
        ColourModeKinds::Grayscale
    }

    fn colour(&self, records: &[EscapeRecord]) -> Vec<Hsv> {
        let steps = f64::from(self.steps);

        records
            .iter()
            .map(|record| match record.status {
                EscapeStatus::Escaped { step } => Hsv {
                    h: 0.0,
                    s: 0.0,
                    v: 1.0 - f64::from(step) / steps,
                },
                EscapeStatus::Active => Hsv::BLACK,
            })
            .collect()
    }
}
