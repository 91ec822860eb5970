use crate::core::colouring::kinds::ColourModeKinds;
use crate::core::colouring::strategy::ColourStrategy;
use crate::core::data::escape_record::{EscapeRecord, EscapeStatus};
use crate::core::data::hsv::Hsv;
use crate::core::util::normalized_iteration::normalized_iteration;

// Magnitude stood in for points that never escaped. e² keeps the smoothing
// formula finite for them; their value channel is zero, so they render black
// no matter what hue the formula yields.
const SET_MEMBER_MAGNITUDE: f64 = std::f64::consts::E * std::f64::consts::E;

/// Classic escape-time colouring: hue follows the smoothed iteration count,
/// saturation and value fade with the raw escape step.
#[derive(Debug)]
pub struct ClassicColouring {
    steps: u32,
}

impl ClassicColouring {
    #[must_use]
    pub fn new(steps: u32) -> Self {
        Self { steps }
    }
}

impl ColourStrategy for ClassicColouring {
    fn kind(&self) -> ColourModeKinds {
        ColourModeKinds::Classic
    }

    fn colour(&self, records: &[EscapeRecord]) -> Vec<Hsv> {
        let steps = f64::from(self.steps);

        records
            .iter()
            .map(|record| {
                let (staged_hue, fade, abs_z) = match record.status {
                    EscapeStatus::Escaped { step } => (
                        f64::from(step),
                        1.0 - f64::from(step) / steps,
                        record.z.magnitude(),
                    ),
                    EscapeStatus::Active => (0.0, 0.0, SET_MEMBER_MAGNITUDE),
                };

                Hsv {
                    h: normalized_iteration(staged_hue, abs_z) / steps,
                    s: fade,
                    v: fade,
                }
            })
            .collect()
    }
}
