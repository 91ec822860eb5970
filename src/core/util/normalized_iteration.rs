/// Smooth (non-integer) reinterpretation of a discrete escape step.
///
/// Maps the escape step and the orbit magnitude at escape to a continuous
/// iteration count, removing the banding a raw integer count produces.
/// See <https://www.iquilezles.org/www/articles/mset_smooth/mset_smooth.htm>.
#[must_use]
pub fn normalized_iteration(steps_taken: f64, abs_z: f64) -> f64 {
    steps_taken + 3.0 - (abs_z * abs_z).log2().log2()
}
