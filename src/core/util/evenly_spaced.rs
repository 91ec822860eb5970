/// `count` evenly spaced values from `start` to `end`, both endpoints
/// included. A single-point axis collapses to `start`.
#[must_use]
pub fn evenly_spaced(start: f64, end: f64, count: u32) -> Vec<f64> {
    if count == 0 {
        return Vec::new();
    }

    if count == 1 {
        return vec![start];
    }

    let step = (end - start) / f64::from(count - 1);
    (0..count).map(|i| start + f64::from(i) * step).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_includes_both_endpoints() {
        let values = evenly_spaced(-2.0, 1.0, 4);

        assert_eq!(values, vec![-2.0, -1.0, 0.0, 1.0]);
    }

    #[test]
    fn test_two_points_are_the_endpoints() {
        let values = evenly_spaced(0.25, 0.75, 2);

        assert_eq!(values, vec![0.25, 0.75]);
    }

    #[test]
    fn test_single_point_is_start() {
        let values = evenly_spaced(3.5, 9.0, 1);

        assert_eq!(values, vec![3.5]);
    }

    #[test]
    fn test_zero_points_is_empty() {
        assert!(evenly_spaced(0.0, 1.0, 0).is_empty());
    }

    #[test]
    fn test_descending_range() {
        let values = evenly_spaced(1.0, -1.0, 3);

        assert_eq!(values, vec![1.0, 0.0, -1.0]);
    }

    #[test]
    fn test_count_matches_request() {
        assert_eq!(evenly_spaced(-1.0, 1.0, 700).len(), 700);
    }
}
