use rayon::prelude::*;

use crate::core::actions::iterate_grid::iterate_point::iterate_point;
use crate::core::data::complex::Complex;
use crate::core::data::escape_record::EscapeRecord;
use crate::core::data::render_params::RenderParams;

/// Runs the escape-time recurrence over every sample in parallel using
/// rayon's work-stealing scheduler.
///
/// Every pixel's transition depends only on its own orbit, so the samples
/// split freely across workers with no locking; record order matches the
/// grid order.
#[must_use]
pub fn iterate_grid_rayon(grid: &[Complex], params: &RenderParams) -> Vec<EscapeRecord> {
    grid.par_iter().map(|&c| iterate_point(c, params)).collect()
}
