use crate::core::data::complex::Complex;
use crate::core::data::escape_record::{EscapeRecord, EscapeStatus};
use crate::core::data::render_params::RenderParams;

/// Runs the escape-time recurrence for a single sample point.
///
/// The orbit starts at `z = c` and applies `z = z² + c` up to `steps` times;
/// the point escapes at the first step whose result leaves the bailout
/// radius, freezing `z` (and `dz`) at that moment. The bailout test compares
/// squared magnitudes, which is exact for the integer radius and spares a
/// square root per step.
///
/// When the colouring mode needs it, the orbit derivative is advanced as
/// `dz = 2·z·dz + 1` with the pre-update `z`, starting from `dz = 0`.
#[must_use]
pub fn iterate_point(c: Complex, params: &RenderParams) -> EscapeRecord {
    let bailout_squared = f64::from(params.bailout_radius()) * f64::from(params.bailout_radius());
    let track_derivative = params.mode().tracks_derivative();

    let mut z = c;
    let mut dz = Complex::ZERO;

    for step in 0..params.steps() {
        if track_derivative {
            dz = (z * dz).scaled(2.0) + Complex::ONE;
        }

        z = z * z + c;

        if z.magnitude_squared() > bailout_squared {
            return EscapeRecord {
                status: EscapeStatus::Escaped { step },
                z,
                dz,
            };
        }
    }

    EscapeRecord {
        status: EscapeStatus::Active,
        z,
        dz,
    }
}
