use crate::core::colouring::kinds::ColourModeKinds;
use crate::core::colouring::strategy::ColourStrategy;
use crate::core::data::escape_record::{EscapeRecord, EscapeStatus};
use crate::core::data::hsv::Hsv;

/// Distance-estimator colouring: hue encodes the estimated distance to the
/// set boundary, derived from the orbit derivative the iteration engine
/// tracked. See <http://www.mrob.com/pub/muency/distanceestimator.html>.
#[derive(Debug)]
pub struct DistanceEstimatorColouring {
    steps: u32,
}

impl DistanceEstimatorColouring {
    #[must_use]
    pub fn new(steps: u32) -> Self {
        Self { steps }
    }
}

impl ColourStrategy for DistanceEstimatorColouring {
    fn kind(&self) -> ColourModeKinds {
        ColourModeKinds::DistanceEstimator
    }

    fn colour(&self, records: &[EscapeRecord]) -> Vec<Hsv> {
        let steps = f64::from(self.steps);

        let mut buffer: Vec<Hsv> = records
            .iter()
            .map(|record| match record.status {
                EscapeStatus::Escaped { step } => {
                    let abs_z = record.z.magnitude();
                    let abs_dz = record.dz.magnitude();

                    Hsv {
                        h: 2.0 * abs_z.ln() * abs_z / abs_dz,
                        s: 0.5,
                        v: 1.0 - f64::from(step) / steps,
                    }
                }
                EscapeStatus::Active => Hsv::BLACK,
            })
            .collect();

        // The hue channel holds raw distance estimates; rescale against the
        // raster-wide maximum so the full hue range is used. An all-interior
        // raster has no distances, so it stays black untouched.
        let max_distance = buffer.iter().map(|hsv| hsv.h).fold(0.0_f64, f64::max);
        if max_distance > 0.0 {
            for hsv in &mut buffer {
                hsv.h /= max_distance;
            }
        }

        buffer
    }
}
