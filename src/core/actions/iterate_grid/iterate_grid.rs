use crate::core::actions::iterate_grid::iterate_point::iterate_point;
use crate::core::data::complex::Complex;
use crate::core::data::escape_record::EscapeRecord;
use crate::core::data::render_params::RenderParams;

/// Runs the escape-time recurrence over every sample sequentially.
///
/// Kept as the reference implementation; [`iterate_grid_rayon`] must produce
/// identical records.
///
/// [`iterate_grid_rayon`]: crate::core::actions::iterate_grid::iterate_grid_rayon::iterate_grid_rayon
#[must_use]
pub fn iterate_grid(grid: &[Complex], params: &RenderParams) -> Vec<EscapeRecord> {
    grid.iter().map(|&c| iterate_point(c, params)).collect()
}
