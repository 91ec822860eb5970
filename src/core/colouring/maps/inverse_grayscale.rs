use crate::core::colouring::kinds::ColourModeKinds;
use crate::core::colouring::strategy::ColourStrategy;
use crate::core::data::escape_record::{EscapeRecord, EscapeStatus};
use crate::core::data::hsv::Hsv;

/// Inverted grayscale: the buffer starts white, escapees darken towards
/// early steps, set members stay white.
#[derive(Debug)]
pub struct InverseGrayscaleColouring {
    steps: u32,
}

impl InverseGrayscaleColouring {
    #[must_use]
    pub fn new(steps: u32) -> Self {
        Self { steps }
    }
}

impl ColourStrategy for InverseGrayscaleColouring {
    fn kind(&self) -> ColourModeKinds {
        ColourModeKinds::InverseGrayscale
    }

    fn colour(&self, records: &[EscapeRecord]) -> Vec<Hsv> {
        let steps = f64::from(self.steps);

        records
            .iter()
            .map(|record| match record.status {
                EscapeStatus::Escaped { step } => Hsv {
                    h: 0.0,
                    s: 0.0,
                    v: f64::from(step) / steps,
                },
                EscapeStatus::Active => Hsv::WHITE,
            })
            .collect()
    }
}
